//! ログインフラモジュール
//!
//! `log`クレート（ファサード）の出力を`tracing`バックエンドへ転送する。
//! レベルによる絞り込みはバックエンド側で行い、ファサードはすべて通す。
//!
//! レベルは旧来の整数指定に対応:
//! - 0: エラーのみ
//! - 1: 警告以上
//! - 2: 情報以上（デフォルト）
//! - 3: デバッグ情報以上
//! - 4: すべて

use crate::appender::{self, FileSink};
use crate::config::LoggingConfig;
use crate::error::LoggingError;
use crate::level;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::registry::Registry;
use tracing_subscriber::{fmt, layer::SubscriberExt, reload};

/// デフォルトのログレベル（INFO）
pub const DEFAULT_LEVEL: i64 = 2;

static FACADE_INSTALLED: Mutex<bool> = Mutex::new(false);

/// `log`ファサードを初期化
///
/// 何度呼んでもよい。ファサード側の最低レベルは常にTRACEにする。
pub fn init_facade() -> Result<(), LoggingError> {
    let mut installed = FACADE_INSTALLED
        .lock()
        .unwrap_or_else(PoisonError::into_inner);

    if !*installed {
        LogTracer::builder()
            .with_max_level(log::LevelFilter::Trace)
            .init()?;
        *installed = true;
    }

    log::set_max_level(log::LevelFilter::Trace);
    Ok(())
}

/// バックエンド構築時のオプション
#[derive(Debug, Clone)]
pub struct BridgeOptions {
    /// 初期ログレベル（0-4）
    pub level: i64,
    /// 標準エラー出力にもログを出すか
    pub console: bool,
}

impl Default for BridgeOptions {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            console: true,
        }
    }
}

/// ファサードとバックエンドの接続
pub struct LoggingBridge {
    level: reload::Handle<LevelFilter, Registry>,
    sink: FileSink,
}

impl LoggingBridge {
    /// 新しいバックエンドを構築する（グローバルには登録しない）
    ///
    /// 返されたサブスクライバーが破棄されるとレベル変更は失敗する。
    pub fn new(
        options: &BridgeOptions,
    ) -> Result<(Self, impl Subscriber + Send + Sync + 'static), LoggingError> {
        let initial = level::level_for(options.level)?;
        let (level_layer, level) = reload::Layer::new(LevelFilter::from_level(initial));
        let sink = FileSink::new();

        let console = options
            .console
            .then(|| fmt::layer().with_target(true).with_writer(io::stderr));

        let subscriber = tracing_subscriber::registry()
            .with(level_layer)
            .with(appender::file_layer(sink.clone()))
            .with(console);

        Ok((Self { level, sink }, subscriber))
    }

    /// バックエンドをグローバルに登録し、ファサードを接続する
    ///
    /// ファサードの接続は何度でもやり直せるため先に行う。
    /// 失敗した場合はグローバルなサブスクライバーを登録しない。
    pub fn install(options: &BridgeOptions) -> Result<Self, LoggingError> {
        let (bridge, subscriber) = Self::new(options)?;
        init_facade()?;
        tracing::subscriber::set_global_default(subscriber)?;
        Ok(bridge)
    }

    /// 設定のログファイルを反映
    ///
    /// レベルは`LoggingConfig::bridge_options`経由で構築時に反映済み。
    pub fn apply(&self, config: &LoggingConfig) -> Result<(), LoggingError> {
        if let Some(ref path) = config.log_file {
            self.attach_file_appender(path)?;
        }
        Ok(())
    }

    /// ログファイルを設定
    ///
    /// 同じパスでの再呼び出しは何もしない。別のパスを指定するとエラー。
    pub fn attach_file_appender(&self, path: impl AsRef<Path>) -> Result<(), LoggingError> {
        let path = path.as_ref();
        if self.sink.bind(path)? {
            debug!(file = %path.display(), "ログファイルを設定しました");
        }
        Ok(())
    }

    /// ログレベルを設定（0-4）
    ///
    /// 範囲外の値ではレベルを変更しない。
    pub fn set_level(&self, index: i64) -> Result<(), LoggingError> {
        let level = level::level_for(index)?;
        self.level.reload(LevelFilter::from_level(level))?;
        Ok(())
    }

    /// 現在のログレベル
    pub fn current_level(&self) -> Result<LevelFilter, LoggingError> {
        Ok(self.level.with_current(|filter| *filter)?)
    }

    /// 設定済みのログファイルパス
    pub fn bound_file(&self) -> Option<PathBuf> {
        self.sink.bound_path()
    }
}
