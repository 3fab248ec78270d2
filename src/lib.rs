//! spikey-logger - `log`ファサードと`tracing`バックエンドを接続するログ設定

pub mod appender;
pub mod cli;
pub mod config;
pub mod error;
pub mod level;
pub mod logging;

pub use config::LoggingConfig;
pub use error::{ConfigError, LoggingError};
pub use logging::{init_facade, BridgeOptions, LoggingBridge};
