//! 希望条件フィルタ
//!
//! データセットと希望条件から、条件を満たす植物レコードの
//! 部分列を返す。各条件は独立した行述語で、そのANDを取る。

use crate::plant::PlantRecord;
use crate::preferences::{PreferenceSet, SizeClass};

/// 希望条件で植物レコードを絞り込む
///
/// 未設定の条件は課されない。入力は変更せず、生き残った
/// レコードの複製を入力順のまま返す。副作用なし。
pub fn filter_plants(records: &[PlantRecord], prefs: &PreferenceSet) -> Vec<PlantRecord> {
    records
        .iter()
        .filter(|plant| matches_text(plant.light.as_deref(), prefs.sunlight.as_deref()))
        .filter(|plant| matches_text(plant.water.as_deref(), prefs.watering.as_deref()))
        .filter(|plant| matches_text(plant.availability.as_deref(), prefs.rarity.as_deref()))
        .filter(|plant| matches_text(plant.appeal.as_deref(), prefs.appeal.as_deref()))
        .filter(|plant| matches_size(plant.max_height, prefs.size.as_deref()))
        .cloned()
        .collect()
}

/// 部分文字列述語（大文字小文字無視・位置不問）
///
/// 条件が未設定（Noneまたは空文字列）なら常に通す。
/// 条件があるのにカラム値が欠損している行は落とす。
fn matches_text(value: Option<&str>, pref: Option<&str>) -> bool {
    let pref = match pref {
        Some(p) if !p.is_empty() => p,
        _ => return true,
    };

    match value {
        Some(v) => v.to_lowercase().contains(&pref.to_lowercase()),
        None => false,
    }
}

/// サイズ述語
///
/// sizeが非空なら、まず高さ欠損の行を落とす。その上で値が
/// 既知の区分なら範囲判定する。未知の値は範囲判定しない
/// （高さ欠損行の除外だけが起きる）。
fn matches_size(height: Option<f64>, size: Option<&str>) -> bool {
    let size = match size {
        Some(s) if !s.is_empty() => s,
        _ => return true,
    };

    let height = match height {
        Some(h) => h,
        None => return false,
    };

    match SizeClass::parse(size) {
        Some(class) => class.contains_height(height),
        None => true,
    }
}

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

#[cfg(test)]
#[path = "filter_proptests.rs"]
mod filter_proptests;
