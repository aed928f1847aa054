use ::std::{env, process};

use ::log::debug;
use ::sorting_tool::{Config, Settings};

fn main() {
    let settings = Settings::load().unwrap_or_default();
    if let Err(exception) = settings.init_logging() {
        eprintln!("Failed to initialize logging: {exception}");
    }

    // Argument problems are reported on stdout and nothing else is printed.
    let config = Config::build(env::args()).unwrap_or_else(|exception| {
        println!("{exception}");
        process::exit(1);
    });
    debug!("Parsed configuration: {config:?}");

    if let Err(exception) = sorting_tool::run(config) {
        eprintln!("Application Error: {exception:#}");
        process::exit(1);
    };
}
