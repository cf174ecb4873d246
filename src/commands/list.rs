//! plantg list コマンド
//!
//! データセット内の植物一覧を表示する。

use crate::dataset;
use crate::output;
use crate::plant::PlantRecord;
use clap::Parser;
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

const OUTPUT_HELP: &str = "\
OUTPUT FORMATS:
  (default)  Summary table of every plant in the dataset
  --json     Full records as a JSON array
  --simple   One plant name per line";

#[derive(Debug, Parser)]
#[command(after_long_help = OUTPUT_HELP)]
pub struct Args {
    /// Dataset file to use (.json or .csv)
    #[arg(long)]
    pub data: Option<PathBuf>,

    /// Output in JSON format
    #[arg(long, conflicts_with = "simple")]
    pub json: bool,

    /// Output only plant names
    #[arg(long, conflicts_with = "json")]
    pub simple: bool,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. データセットの解決と読み込み
    let data_path = dataset::resolve_data_path(args.data.as_deref()).map_err(|e| e.to_string())?;
    let table = dataset::load_dataset(&data_path).map_err(|e| e.to_string())?;

    // 2. 名前昇順でソート（一覧表示のみ。フィルタ結果はデータ順を保つ）
    let mut plants = table.records().to_vec();
    plants.sort_by(|a, b| a.display_name().cmp(b.display_name()));

    // 3. 出力
    if args.json {
        print_json(&plants)?;
    } else if args.simple {
        print_simple(&plants);
    } else {
        print_table(&plants);
    }

    Ok(())
}

fn print_table(plants: &[PlantRecord]) {
    if plants.is_empty() {
        println!("No plants in the dataset");
        return;
    }

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Name",
        "Scientific Name",
        "Type",
        "Max Height",
        "Light",
        "Water",
        "Availability",
    ]);

    for plant in plants {
        table.add_row(vec![
            plant.display_name(),
            plant.scientific_name.as_deref().unwrap_or("-"),
            plant.plant_type.as_deref().unwrap_or("-"),
            &output::height_text(plant.max_height),
            plant.light.as_deref().unwrap_or("-"),
            plant.water.as_deref().unwrap_or("-"),
            plant.availability.as_deref().unwrap_or("-"),
        ]);
    }

    println!("{table}");
    println!("{} plant(s) in the dataset", plants.len());
}

fn print_json(plants: &[PlantRecord]) -> Result<(), String> {
    serde_json::to_string_pretty(plants)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize plants: {}", e))
}

fn print_simple(plants: &[PlantRecord]) {
    for plant in plants {
        println!("{}", plant.display_name());
    }
}
