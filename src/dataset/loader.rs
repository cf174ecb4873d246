//! データセット読み込み
//!
//! JSONまたはCSVファイルから植物テーブルを構築する。
//! 「ファイルが無い」と「読めない」は別エラーとして区別する。

use crate::error::{PlantgError, Result};
use crate::plant::PlantRecord;
use std::fs;
use std::path::Path;

/// 読み込み済みの植物テーブル
///
/// リクエスト処理中は不変。フィルタには`records()`でスライスを渡す。
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    records: Vec<PlantRecord>,
}

impl Dataset {
    /// レコード列から構築
    pub fn from_records(records: Vec<PlantRecord>) -> Self {
        Self { records }
    }

    /// 全レコード（ファイル内の順序のまま）
    pub fn records(&self) -> &[PlantRecord] {
        &self.records
    }

    /// レコード件数
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// 空のテーブルか（空は正常な状態で、エラーではない）
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// 名前（通称または学名）で1件検索
    pub fn find_by_name(&self, name: &str) -> Option<&PlantRecord> {
        self.records.iter().find(|plant| plant.matches_name(name))
    }
}

/// データセットファイルを読み込む
///
/// 形式は拡張子で判別する。ファイルが存在しない場合は
/// DataUnavailable、存在するが読めない場合はDataLoad。
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(PlantgError::DataUnavailable(path.display().to_string()));
    }

    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    match extension.to_lowercase().as_str() {
        "json" => load_json(path),
        "csv" => load_csv(path),
        other => Err(PlantgError::DataLoad(format!(
            "unsupported dataset format '.{other}' (expected .json or .csv): {}",
            path.display()
        ))),
    }
}

/// JSON形式（レコードの配列）
fn load_json(path: &Path) -> Result<Dataset> {
    let content = fs::read_to_string(path)?;
    let records: Vec<PlantRecord> = serde_json::from_str(&content)
        .map_err(|e| PlantgError::DataLoad(format!("{}: {e}", path.display())))?;
    Ok(Dataset::from_records(records))
}

/// CSV形式（ヘッダ行つき、空セルは欠損値として読む）
fn load_csv(path: &Path) -> Result<Dataset> {
    let mut reader = csv::Reader::from_path(path)
        .map_err(|e| PlantgError::DataLoad(format!("{}: {e}", path.display())))?;

    let mut records = Vec::new();
    for row in reader.deserialize() {
        let record: PlantRecord =
            row.map_err(|e| PlantgError::DataLoad(format!("{}: {e}", path.display())))?;
        records.push(record);
    }
    Ok(Dataset::from_records(records))
}

#[cfg(test)]
#[path = "loader_test.rs"]
mod loader_test;
