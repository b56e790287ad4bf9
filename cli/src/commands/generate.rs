use pin_core::{Clock, Generator, IdentityNumber};
use rand::Rng;

pub struct Options {
    /// Numbers to produce, one per output line.
    pub count: u32,
    /// Replaces the thread-local RNG with a seeded one.
    pub seed: Option<u64>,
}

pub fn generate(date: Option<&str>, options: &Options) -> anyhow::Result<Vec<String>> {
    let pins: Vec<IdentityNumber> = match options.seed {
        Some(seed) => batch(&mut Generator::seeded(seed), date, options.count)?,
        None => batch(&mut Generator::new(), date, options.count)?,
    };

    Ok(pins.iter().map(IdentityNumber::to_string).collect())
}

fn batch<R: Rng, C: Clock>(
    generator: &mut Generator<R, C>,
    date: Option<&str>,
    count: u32,
) -> anyhow::Result<Vec<IdentityNumber>> {
    let mut pins = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let pin = match date {
            Some(date) => generator.generate_from_date(date)?,
            None => generator.generate()?,
        };
        pins.push(pin);
    }

    Ok(pins)
}
