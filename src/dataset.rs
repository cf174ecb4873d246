//! データセット（植物テーブル）の提供
//!
//! 静的データソースを読み込み、リクエスト毎に不変な
//! インメモリテーブルとして提供する。

mod loader;
mod source;

pub use loader::{load_dataset, Dataset};
pub use source::{resolve_data_path, DATA_ENV_VAR};
