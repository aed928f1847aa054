use ::std::str::FromStr;

use ::config::{Config, ConfigError, Environment};
use ::log::LevelFilter;
use ::serde::Deserialize;
use ::simplelog::{ColorChoice, TermLogger, TerminalMode};

const ENV_PREFIX: &str = "SORTING_TOOL";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// Runtime settings taken from `SORTING_TOOL_*` environment variables.
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Settings {
    pub log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self { log_level: DEFAULT_LOG_LEVEL.to_string() }
    }
}

impl Settings {
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_env(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_env(env: Environment) -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("log_level", DEFAULT_LOG_LEVEL)?
            .add_source(env)
            .build()?
            .try_deserialize()
    }

    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    /// Logs go to stderr so stdout only carries the report.
    pub fn init_logging(&self) -> Result<(), log::SetLoggerError> {
        TermLogger::init(
            self.level_filter(),
            simplelog::Config::default(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        )
    }
}
