//! データセットの所在解決
//!
//! 優先順位: --dataフラグ > PLANTG_DATA環境変数 > デフォルトパス

use crate::error::{PlantgError, Result};
use std::path::{Path, PathBuf};

/// データセットパスを上書きする環境変数
pub const DATA_ENV_VAR: &str = "PLANTG_DATA";

/// デフォルトのデータセットファイル名
const DEFAULT_DATA_FILE: &str = "plantdata.json";

/// デフォルトのデータセットパス: ~/.plantg/plantdata.json
fn default_data_path() -> Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| PlantgError::Env("HOME environment variable not set".to_string()))?;
    Ok(PathBuf::from(home).join(".plantg").join(DEFAULT_DATA_FILE))
}

/// データセットパスを解決する
///
/// 空文字列の環境変数は未設定として扱う。
pub fn resolve_data_path(flag: Option<&Path>) -> Result<PathBuf> {
    if let Some(path) = flag {
        return Ok(path.to_path_buf());
    }

    if let Some(path) = std::env::var(DATA_ENV_VAR).ok().filter(|s| !s.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    default_data_path()
}

#[cfg(test)]
#[path = "source_test.rs"]
mod source_test;
