use ::std::io;

use ::anyhow::{Context, Result};
use ::log::debug;

pub mod args;
pub mod error;
pub mod path_utils;
pub mod reader;
pub mod settings;
pub mod sorter;
pub mod writer;

pub use args::{Config, DataType, SortMode};
pub use error::{ArgsError, SortError};
pub use settings::Settings;

/// Reads the input, sorts or tallies it and writes the report.
pub fn run(config: Config) -> Result<()> {
    let tokens =
        reader::read_input(config.data_type, config.input_file.as_deref())
            .context("Failed to read input")?;
    debug!("Read {} tokens", tokens.len());

    let total = writer::total_line(tokens.len(), config.data_type);
    let payload = sorter::summarize(
        config.data_type,
        config.sort_mode,
        &tokens,
        &mut io::stdout().lock(),
    )?;

    match config.output_file.as_deref() {
        Some(path) => {
            debug!("Writing report to {}", path.display());
            writer::write_report(&total, &payload, Some(path)).with_context(
                || format!("Failed to write report to {}", path.display()),
            )?;
        },
        None => writer::write_report(&total, &payload, None)
            .context("Failed to write report to stdout")?,
    }

    Ok(())
}
