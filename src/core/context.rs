use crate::config::Config;
use crate::errors::Result;
use crate::logging::{LogTarget, Logger};
use std::path::PathBuf;

/// Loaded configuration plus the session logger.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub logger: Logger,
    pub logs_dir: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: PathBuf) -> Result<Self> {
        let config = Config::load_from(&config_path)?;

        let logger = Logger::new();
        logger.set_log_dir(&logs_dir);
        logger.set_file_logging_enabled(config.file_logging_enabled());

        if config.grid_template().is_empty() {
            logger.warn(
                format!(
                    "'{}' defines no periods; every recurring item will be rejected.",
                    config_path.display()
                ),
                LogTarget::ConsoleAndFile,
            );
        }

        Ok(Self {
            config,
            logger,
            logs_dir,
        })
    }
}
