//! 設定モジュール

use crate::error::ConfigError;
use crate::level;
use crate::logging::{BridgeOptions, DEFAULT_LEVEL};
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;

/// ログ設定
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// ログレベル（0-4）
    pub level: i64,
    /// ログファイルパス
    pub log_file: Option<PathBuf>,
    /// 標準エラー出力へのログ出力
    pub console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            log_file: None,
            console: true,
        }
    }
}

/// TOML設定ファイル用構造体
#[derive(Debug, Deserialize, Default)]
struct FileConfig {
    level: Option<i64>,
    log_file: Option<String>,
    console: Option<bool>,
}

/// CLI引数
#[derive(Debug, Default)]
pub struct CliArgs {
    pub config: Option<PathBuf>,
    pub level: Option<i64>,
    pub log_file: Option<PathBuf>,
    pub quiet: bool,
}

impl LoggingConfig {
    /// 設定を読み込む
    ///
    /// 優先順位: CLI引数 > 設定ファイル > デフォルト値
    pub fn load(cli_args: &CliArgs) -> Result<Self, ConfigError> {
        let mut config = LoggingConfig::default();

        // 明示された設定ファイルは必須、デフォルトの場所は存在する場合のみ読む
        let config_path = match cli_args.config {
            Some(ref path) => Some(path.clone()),
            None => Some(default_config_path()).filter(|path| path.exists()),
        };
        if let Some(path) = config_path {
            let content = fs::read_to_string(&path)?;
            let file_config: FileConfig = toml::from_str(&content)?;
            config.merge_file_config(&file_config);
        }

        config.merge_cli_args(cli_args);
        config.validate()?;

        Ok(config)
    }

    /// バックエンド構築用のオプション
    pub fn bridge_options(&self) -> BridgeOptions {
        BridgeOptions {
            level: self.level,
            console: self.console,
        }
    }

    /// ファイル設定をマージ
    fn merge_file_config(&mut self, file_config: &FileConfig) {
        if let Some(level) = file_config.level {
            self.level = level;
        }
        if let Some(ref path) = file_config.log_file {
            self.log_file = Some(PathBuf::from(path));
        }
        if let Some(console) = file_config.console {
            self.console = console;
        }
    }

    /// CLI引数をマージ
    fn merge_cli_args(&mut self, cli_args: &CliArgs) {
        if let Some(level) = cli_args.level {
            self.level = level;
        }
        if let Some(ref path) = cli_args.log_file {
            self.log_file = Some(path.clone());
        }
        if cli_args.quiet {
            self.console = false;
        }
    }

    /// 設定値をバリデート
    fn validate(&self) -> Result<(), ConfigError> {
        if level::level_for(self.level).is_err() {
            return Err(ConfigError::InvalidValue(format!(
                "level must be between 0 and 4 (got {})",
                self.level
            )));
        }
        Ok(())
    }
}

/// デフォルトの設定ファイルパス
fn default_config_path() -> PathBuf {
    let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".spikey-logger").join("config.toml")
}
