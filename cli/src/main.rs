mod commands;
mod terminal;

use std::process::ExitCode;

use commands::CommandLine;
use pin_common::config::Config;
use terminal::{logging, print};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        quiet: commands.quiet,
        color: !commands.no_color,
        verbose: commands.verbose,
    };

    print::initialize(&cfg);
    logging::init_logging(&cfg);

    let Some(action) = commands.action() else {
        return match CommandLine::print_usage() {
            Ok(()) => ExitCode::SUCCESS,
            Err(err) => {
                print::failure(&err.into(), &cfg);
                ExitCode::FAILURE
            }
        };
    };

    let result = commands::run(action, &commands.generate_options())
        .and_then(|lines| Ok(print::values(&lines)?));

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            print::failure(&err, &cfg);
            ExitCode::FAILURE
        }
    }
}
