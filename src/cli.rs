//! CLIモジュール

use crate::config::{CliArgs, LoggingConfig};
use crate::level::{self, LEVELS};
use crate::logging::LoggingBridge;
use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing::info;

/// spikey-log - ログ設定ユーティリティ
#[derive(Parser, Debug)]
#[command(name = "spikey-log")]
#[command(about = "ログ設定ユーティリティ", long_about = None)]
pub struct Cli {
    /// 設定ファイルパス
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// ログレベル（0: ERROR 〜 4: TRACE）
    #[arg(short, long, global = true, allow_negative_numbers = true)]
    pub level: Option<i64>,

    /// ログファイルパス
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// 標準エラー出力へのログを抑止
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// サブコマンド
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// logファサード経由でメッセージを出力
    Emit {
        /// 重大度
        #[arg(value_enum)]
        severity: Severity,

        /// メッセージ
        message: String,
    },
    /// レベル対応表を表示
    Levels,
}

/// メッセージの重大度
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Severity {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<Severity> for log::Level {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Error => log::Level::Error,
            Severity::Warn => log::Level::Warn,
            Severity::Info => log::Level::Info,
            Severity::Debug => log::Level::Debug,
            Severity::Trace => log::Level::Trace,
        }
    }
}

/// CLIエントリポイント
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let cli_args = CliArgs {
        config: cli.config,
        level: cli.level,
        log_file: cli.file,
        quiet: cli.quiet,
    };
    let config = LoggingConfig::load(&cli_args)?;

    let bridge = LoggingBridge::install(&config.bridge_options())?;
    bridge.apply(&config)?;
    info!(level = config.level, "ログ設定を適用しました");

    match cli.command {
        Commands::Emit { severity, message } => {
            let level: log::Level = severity.into();
            log::log!(level, "{}", message);
        }
        Commands::Levels => {
            let active = bridge.current_level()?.into_level().map(level::index_of);
            for (index, level) in LEVELS.iter().enumerate() {
                let marker = if active == Some(index) {
                    "*"
                } else {
                    " "
                };
                println!("{} {} {}", marker, index, level);
            }
        }
    }

    Ok(())
}
