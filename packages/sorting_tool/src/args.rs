use ::std::collections::HashSet;
use ::std::path::PathBuf;

use crate::error::ArgsError;
use crate::path_utils::expand_path;

/// How the tokens are ordered in the report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortMode {
    #[default]
    Natural,
    ByCount,
}

impl SortMode {
    /// Only `byCount` selects the frequency report; any other value sorts
    /// naturally.
    pub fn from_value(value: &str) -> Self {
        match value {
            "byCount" => Self::ByCount,
            _ => Self::Natural,
        }
    }
}

/// How the input is split into tokens and how those tokens compare.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataType {
    /// No `-dataType` given. Tokenized and sorted as words, but counted as
    /// numbers in the total line.
    #[default]
    Unspecified,
    Word,
    Long,
    Line,
}

impl DataType {
    pub fn from_value(value: &str) -> Self {
        match value {
            "long" => Self::Long,
            "line" => Self::Line,
            "" => Self::Unspecified,
            _ => Self::Word,
        }
    }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Config {
    pub sort_mode: SortMode,
    pub data_type: DataType,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
}

impl Config {
    /// Builds the configuration from the raw process arguments, program name
    /// included.
    ///
    /// A flag given more than once keeps the value of its first occurrence;
    /// later occurrences are not looked at.
    pub fn build(
        args: impl Iterator<Item = String>,
    ) -> Result<Config, ArgsError> {
        let mut args = args.skip(1).peekable();
        let mut config = Config::default();
        let mut seen = HashSet::new();

        while let Some(arg) = args.next() {
            if !is_flag(&arg) {
                continue;
            }

            let value = args.next_if(|next| !is_flag(next));
            if !seen.insert(arg.clone()) {
                continue;
            }

            match arg.as_str() {
                "-sortingType" => {
                    let value = value.ok_or(ArgsError::NoSortingType)?;
                    config.sort_mode = SortMode::from_value(&value);
                },
                "-dataType" => {
                    let value = value.ok_or(ArgsError::NoDataType)?;
                    config.data_type = DataType::from_value(&value);
                },
                "-inputFile" => {
                    let value = value.ok_or(ArgsError::NoFileName)?;
                    config.input_file = file_name(&value);
                },
                "-outputFile" => {
                    let value = value.ok_or(ArgsError::NoFileName)?;
                    config.output_file = file_name(&value);
                },
                _ => return Err(ArgsError::InvalidParameter(arg)),
            }
        }

        Ok(config)
    }
}

/// An empty file name counts as no file at all.
fn file_name(value: &str) -> Option<PathBuf> {
    (!value.is_empty()).then(|| expand_path(value))
}

/// A dash followed by at least one more character.
pub fn is_flag(token: &str) -> bool {
    token.len() > 1 && token.starts_with('-')
}
