//! 植物レコード
//!
//! データセットの1行にあたるドメインモデルを定義する。

use serde::{Deserialize, Serialize};

/// 植物1件分の属性セット（テーブルの1行）
///
/// 元データは欠損の多い表のため、全フィールドがOptional。
/// 欠損値の表示フォールバック（"Unknown"/"N/A"）は出力層の責務。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlantRecord {
    #[serde(default)]
    pub common_name: Option<String>,

    #[serde(default)]
    pub scientific_name: Option<String>,

    #[serde(default)]
    pub family: Option<String>,

    #[serde(default, rename = "type")]
    pub plant_type: Option<String>,

    /// 最大樹高（メートル）
    #[serde(default)]
    pub max_height: Option<f64>,

    /// 日照の説明（自由記述）
    #[serde(default)]
    pub light: Option<String>,

    /// 水やりの説明（自由記述）
    #[serde(default)]
    pub water: Option<String>,

    #[serde(default)]
    pub growth_rate: Option<String>,

    #[serde(default)]
    pub climate: Option<String>,

    #[serde(default)]
    pub origin: Option<String>,

    #[serde(default)]
    pub hardiness_zone: Option<String>,

    /// 入手しやすさ（レア度）
    #[serde(default)]
    pub availability: Option<String>,

    /// 一番の見どころ
    #[serde(default)]
    pub appeal: Option<String>,

    /// 画像のURI/パス
    #[serde(default)]
    pub image: Option<String>,
}

impl PlantRecord {
    /// 表示名（通称があれば通称、なければ学名）
    pub fn display_name(&self) -> &str {
        self.common_name
            .as_deref()
            .or(self.scientific_name.as_deref())
            .unwrap_or("Unknown")
    }

    /// 名前の一致判定
    ///
    /// 通称・学名のいずれかに大文字小文字を無視して完全一致する。
    pub fn matches_name(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.common_name
            .as_deref()
            .is_some_and(|name| name.to_lowercase() == query)
            || self
                .scientific_name
                .as_deref()
                .is_some_and(|name| name.to_lowercase() == query)
    }
}

#[cfg(test)]
#[path = "plant_test.rs"]
mod plant_test;
