//! ファイルアペンダーモジュール
//!
//! ログファイルは一度だけ開き、以後は同じパスでのみ再指定を受け付ける。
//! 別のパスへ切り替えると既存ファイルを上書きしてしまうため拒否する。

use crate::error::LoggingError;
use chrono::Local;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::Subscriber;
use tracing_subscriber::fmt::format::{DefaultFields, Format, Full, Writer};
use tracing_subscriber::fmt::{self, time::FormatTime, MakeWriter};
use tracing_subscriber::registry::LookupSpan;

/// 時刻のみの絶対タイムスタンプ（例: 14:03:27,512）
pub const ABSOLUTE_TIME_FORMAT: &str = "%H:%M:%S,%3f";

/// ローカル時刻による絶対タイムスタンプ
#[derive(Debug, Clone, Copy, Default)]
pub struct AbsoluteTime;

impl FormatTime for AbsoluteTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", Local::now().format(ABSOLUTE_TIME_FORMAT))
    }
}

#[derive(Debug)]
struct BoundFile {
    path: PathBuf,
    file: File,
}

/// ログファイルの書き込み先
///
/// クローンは同じファイルを共有する。ファイル未設定の間は書き込みを破棄する。
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    inner: Arc<Mutex<Option<BoundFile>>>,
}

impl FileSink {
    /// 未設定のFileSinkを作成
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Option<BoundFile>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// ログファイルを設定
    ///
    /// 新しく開いた場合は`true`、同じパスが設定済みの場合は`false`を返す。
    pub fn bind(&self, path: &Path) -> Result<bool, LoggingError> {
        // 確認と設定を同じロック内で行う
        let mut slot = self.lock();

        if let Some(bound) = slot.as_ref() {
            if bound.path == path {
                return Ok(false);
            }
            return Err(LoggingError::Rebind {
                bound: bound.path.clone(),
                requested: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        // 追記ではなく上書き
        let file = File::create(path)?;
        *slot = Some(BoundFile {
            path: path.to_path_buf(),
            file,
        });
        Ok(true)
    }

    /// 設定済みのログファイルパス
    pub fn bound_path(&self) -> Option<PathBuf> {
        self.lock().as_ref().map(|bound| bound.path.clone())
    }
}

impl Write for FileSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self.lock().as_mut() {
            Some(bound) => bound.file.write(buf),
            None => Ok(buf.len()),
        }
    }

    fn write_all(&mut self, buf: &[u8]) -> io::Result<()> {
        match self.lock().as_mut() {
            Some(bound) => bound.file.write_all(buf),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self.lock().as_mut() {
            Some(bound) => bound.file.flush(),
            None => Ok(()),
        }
    }
}

impl<'a> MakeWriter<'a> for FileSink {
    type Writer = FileSink;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// ファイル出力用レイヤーを作成（色なし、絶対タイムスタンプ）
pub fn file_layer<S>(
    sink: FileSink,
) -> fmt::Layer<S, DefaultFields, Format<Full, AbsoluteTime>, FileSink>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fmt::layer()
        .with_ansi(false)
        .with_timer(AbsoluteTime)
        .with_target(true)
        .with_writer(sink)
}
