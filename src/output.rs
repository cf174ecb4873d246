//! 結果表示
//!
//! マッチした植物をカード（表）として描画する。欠損フィールドの
//! 表示フォールバックはここで行う。

use crate::plant::PlantRecord;
use comfy_table::{presets::UTF8_FULL, Table};
use owo_colors::OwoColorize;

/// 画像が欠損しているレコード用のプレースホルダ
pub const PLACEHOLDER_IMAGE: &str = "assets/placeholder.png";

/// 欠損値の表示フォールバック
pub fn na(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

/// 樹高の表示（メートル単位）
pub fn height_text(height: Option<f64>) -> String {
    match height {
        Some(h) => format!("{h}m"),
        None => "N/A".to_string(),
    }
}

/// マッチした植物をカード形式で出力
pub fn print_plant_cards(plants: &[PlantRecord]) {
    for plant in plants {
        println!("{}", plant.display_name().green().bold());

        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Field", "Value"]);

        table.add_row(vec![
            "Scientific Name",
            na(plant.scientific_name.as_deref()),
        ]);
        table.add_row(vec!["Family", na(plant.family.as_deref())]);
        table.add_row(vec!["Type", na(plant.plant_type.as_deref())]);
        table.add_row(vec!["Max Height", &height_text(plant.max_height)]);
        table.add_row(vec!["Sunlight", na(plant.light.as_deref())]);
        table.add_row(vec!["Watering", na(plant.water.as_deref())]);
        table.add_row(vec!["Growth Rate", na(plant.growth_rate.as_deref())]);
        table.add_row(vec!["Climate", na(plant.climate.as_deref())]);
        table.add_row(vec!["Origin", na(plant.origin.as_deref())]);
        table.add_row(vec!["Hardiness Zone", na(plant.hardiness_zone.as_deref())]);
        table.add_row(vec!["Availability", na(plant.availability.as_deref())]);
        table.add_row(vec!["Best Feature", na(plant.appeal.as_deref())]);
        table.add_row(vec![
            "Image",
            plant.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE),
        ]);

        println!("{table}");
        println!();
    }
}

/// マッチなしの警告表示
///
/// 結果ゼロは正常な状態であり、エラー扱いにしない。
pub fn print_no_matches() {
    println!(
        "{} No matching plants found based on your selections. Try relaxing your criteria!",
        "•".yellow()
    );
}

/// マッチ件数のサマリ行
pub fn print_match_summary(matched: usize, total: usize) {
    println!(
        "{} {} of {} plant(s) matched your preferences",
        "✓".green(),
        matched.green(),
        total
    );
}

#[cfg(test)]
#[path = "output_test.rs"]
mod output_test;
