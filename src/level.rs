//! ログレベル対応表モジュール
//!
//! 旧来の整数レベル（0〜4）を互換性のためにそのまま受け付ける。
//! 並び順と上限（5以上は拒否）は固定。

use crate::error::LoggingError;
use tracing::Level;

/// 整数レベルとバックエンドのレベルの対応表（重大度の高い順）
pub const LEVELS: [Level; 5] = [
    Level::ERROR,
    Level::WARN,
    Level::INFO,
    Level::DEBUG,
    Level::TRACE,
];

/// 整数レベルをバックエンドのレベルに変換
pub fn level_for(index: i64) -> Result<Level, LoggingError> {
    usize::try_from(index)
        .ok()
        .and_then(|i| LEVELS.get(i).copied())
        .ok_or(LoggingError::InvalidLevel(index))
}

/// バックエンドのレベルを整数レベルに変換
pub fn index_of(level: Level) -> usize {
    LEVELS
        .iter()
        .position(|l| *l == level)
        .unwrap_or(LEVELS.len() - 1)
}
