pub mod check;
pub mod generate;

use clap::{ArgGroup, CommandFactory, Parser};
use pin_common::Sex;

#[derive(Parser, Debug)]
#[command(name = "pin")]
#[command(about = "Generate and validate Swedish personal identity numbers.")]
#[command(group(
    ArgGroup::new("action")
        .args(["generate", "date", "valid", "male", "female"])
        .multiple(false)
))]
pub struct CommandLine {
    /// Generate a personal identity number
    #[arg(short, long)]
    pub generate: bool,

    /// Generate a personal identity number for the given date
    #[arg(short, long, value_name = "YYYYMMDD")]
    pub date: Option<String>,

    /// Check whether the given personal identity number is valid
    #[arg(short = 'v', long, value_name = "PIN")]
    pub valid: Option<String>,

    /// Check whether the given personal identity number belongs to a man
    #[arg(short, long, value_name = "PIN")]
    pub male: Option<String>,

    /// Check whether the given personal identity number belongs to a woman
    #[arg(short, long, value_name = "PIN")]
    pub female: Option<String>,

    /// How many numbers to generate
    #[arg(short = 'n', long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub count: u32,

    /// Seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not print error messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Print debug logs to stderr
    #[arg(long)]
    pub verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

/// The single operation requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Generate,
    GenerateFromDate(String),
    Check { pin: String, sex: Option<Sex> },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn print_usage() -> std::io::Result<()> {
        Self::command().print_help()
    }

    pub fn action(&self) -> Option<Action> {
        if self.generate {
            return Some(Action::Generate);
        }
        if let Some(date) = &self.date {
            return Some(Action::GenerateFromDate(date.clone()));
        }

        let checks = [
            (&self.valid, None),
            (&self.male, Some(Sex::Male)),
            (&self.female, Some(Sex::Female)),
        ];
        checks.into_iter().find_map(|(pin, sex)| {
            pin.as_ref().map(|pin| Action::Check {
                pin: pin.clone(),
                sex,
            })
        })
    }

    pub fn generate_options(&self) -> generate::Options {
        generate::Options {
            count: self.count,
            seed: self.seed,
        }
    }
}

/// Runs `action` and returns the lines to print on stdout.
pub fn run(action: Action, options: &generate::Options) -> anyhow::Result<Vec<String>> {
    match action {
        Action::Generate => generate::generate(None, options),
        Action::GenerateFromDate(date) => generate::generate(Some(&date), options),
        Action::Check { pin, sex } => {
            check::check(&pin, sex)?;
            Ok(Vec::new())
        }
    }
}
