//! エラー型定義モジュール

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// 設定エラー
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IOエラー: {0}")]
    IoError(#[from] io::Error),

    #[error("TOML解析エラー: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("無効な設定値: {0}")]
    InvalidValue(String),
}

/// ログ設定エラー
#[derive(Error, Debug)]
pub enum LoggingError {
    /// 一度バインドしたログファイルは変更できない
    #[error("ログファイルの変更はサポートされていません: {} -> {}", bound.display(), requested.display())]
    Rebind { bound: PathBuf, requested: PathBuf },

    #[error("無効なログレベル: {0}（0〜4で指定してください）")]
    InvalidLevel(i64),

    #[error("ログファイルを開けません: {0}")]
    Io(#[from] io::Error),

    #[error("ログレベルの再設定に失敗: {0}")]
    Reload(#[from] tracing_subscriber::reload::Error),

    #[error("logファサードの初期化エラー: {0}")]
    Facade(#[from] log::SetLoggerError),

    #[error("サブスクライバーの登録エラー: {0}")]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}
