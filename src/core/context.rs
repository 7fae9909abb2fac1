use crate::config::Config;
use crate::interpreter::Interpreter;

use crate::errors::Result;
use crate::logging::Logger;
use std::path::PathBuf;

#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub interpreter: Interpreter,
    pub logger: Logger,
    pub startup_displayed: bool,
    pub config_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppContext {
    /// Loads the config (defaults when the file does not exist) and starts an
    /// empty session using its unit price policy.
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_or_default(&config_path)?;
        let interpreter = Interpreter::new(config.unit_price_policy());

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        Ok(Self {
            config,
            interpreter,
            logger,
            startup_displayed: false,
            config_path,
            logs_dir,
        })
    }
}
