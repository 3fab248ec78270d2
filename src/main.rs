//! spikey-log - ログ設定ユーティリティ

use anyhow::Result;

fn main() -> Result<()> {
    spikey_logger::cli::run()
}
