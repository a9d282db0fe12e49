pub mod config;
pub mod errors;
pub mod files;

pub use config::{AppConfig, CloudConfig, GlossaryConfig, LoggingConfig};
pub use errors::{ErrorCode, Result, TranslatorError};
pub use files::{file_exists, read_text_file, write_text_file};
