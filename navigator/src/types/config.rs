use std::env;
use std::path::PathBuf;

use super::nav_error::NavError;

pub const USAGE: &str = "Usage: navigator <airports_file> [log_dir]";

/// Environment variable that turns on console logging (and debug lines).
pub const VERBOSE_VAR: &str = "NAVIGATOR_VERBOSE";

/// Startup settings of the navigator.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigatorConfig {
    pub airports_file: PathBuf,
    pub log_dir: PathBuf,
    pub verbose: bool,
}

impl NavigatorConfig {
    /// Builds the configuration from the process arguments and environment.
    pub fn from_env() -> Result<Self, NavError> {
        let args: Vec<String> = env::args().collect();
        Self::from_args(&args, env::var_os(VERBOSE_VAR).is_some())
    }

    /// Parses `<program> <airports_file> [log_dir]`.
    ///
    /// When no log directory is given the current directory is used.
    ///
    /// # Errors
    /// `NavError::Config` if the number of arguments is wrong or the current
    /// directory cannot be determined.
    pub fn from_args(args: &[String], verbose: bool) -> Result<Self, NavError> {
        if args.len() < 2 || args.len() > 3 {
            return Err(NavError::Config(USAGE.to_string()));
        }

        let airports_file = PathBuf::from(&args[1]);
        let log_dir = match args.get(2) {
            Some(dir) => PathBuf::from(dir),
            None => env::current_dir().map_err(|_| {
                NavError::Config("Failed to determine the current directory".to_string())
            })?,
        };

        Ok(NavigatorConfig {
            airports_file,
            log_dir,
            verbose,
        })
    }
}
