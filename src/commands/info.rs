//! plantg info コマンド
//!
//! 植物1件の詳細情報を表示する。

use crate::dataset;
use crate::error::PlantgError;
use crate::output::{self, PLACEHOLDER_IMAGE};
use crate::plant::PlantRecord;
use clap::{Parser, ValueEnum};
use comfy_table::{presets::UTF8_FULL, Table};
use std::path::PathBuf;

/// 出力形式
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
    Yaml,
}

const SECTIONS_HELP: &str = "\
SECTIONS DISPLAYED:
  Plant   Common name, scientific name, family, type
  Care    Max height, sunlight, watering, growth rate
  Origin  Climate, origin, hardiness zone
  Appeal  Availability, best feature, image";

#[derive(Debug, Parser)]
#[command(after_long_help = SECTIONS_HELP)]
pub struct Args {
    /// Plant name (common or scientific)
    pub name: String,

    /// 出力形式
    #[arg(long, short = 'f', value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Dataset file to use (.json or .csv)
    #[arg(long)]
    pub data: Option<PathBuf>,
}

pub fn run(args: Args) -> Result<(), String> {
    // 1. データセットの解決と読み込み
    let data_path = dataset::resolve_data_path(args.data.as_deref()).map_err(|e| e.to_string())?;
    let table = dataset::load_dataset(&data_path).map_err(|e| e.to_string())?;

    // 2. 名前で検索
    let plant = table
        .find_by_name(&args.name)
        .ok_or_else(|| PlantgError::PlantNotFound(args.name.clone()).to_string())?;

    // 3. 出力
    match args.format {
        OutputFormat::Table => print_table(plant),
        OutputFormat::Json => print_json(plant)?,
        OutputFormat::Yaml => print_yaml(plant)?,
    }

    Ok(())
}

fn print_table(plant: &PlantRecord) {
    println!("Plant Information");
    println!("=================");
    println!();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Field", "Value"]);
    table.add_row(vec![
        "Common Name",
        plant.common_name.as_deref().unwrap_or("Unknown"),
    ]);
    table.add_row(vec![
        "Scientific Name",
        output::na(plant.scientific_name.as_deref()),
    ]);
    table.add_row(vec!["Family", output::na(plant.family.as_deref())]);
    table.add_row(vec!["Type", output::na(plant.plant_type.as_deref())]);
    println!("{table}");
    println!();

    println!("Care");
    println!("----");

    let mut care_table = Table::new();
    care_table.load_preset(UTF8_FULL);
    care_table.set_header(vec!["Field", "Value"]);
    care_table.add_row(vec!["Max Height", &output::height_text(plant.max_height)]);
    care_table.add_row(vec!["Sunlight", output::na(plant.light.as_deref())]);
    care_table.add_row(vec!["Watering", output::na(plant.water.as_deref())]);
    care_table.add_row(vec![
        "Growth Rate",
        output::na(plant.growth_rate.as_deref()),
    ]);
    println!("{care_table}");
    println!();

    println!("Origin");
    println!("------");

    let mut origin_table = Table::new();
    origin_table.load_preset(UTF8_FULL);
    origin_table.set_header(vec!["Field", "Value"]);
    origin_table.add_row(vec!["Climate", output::na(plant.climate.as_deref())]);
    origin_table.add_row(vec!["Origin", output::na(plant.origin.as_deref())]);
    origin_table.add_row(vec![
        "Hardiness Zone",
        output::na(plant.hardiness_zone.as_deref()),
    ]);
    println!("{origin_table}");
    println!();

    println!("Appeal");
    println!("------");

    let mut appeal_table = Table::new();
    appeal_table.load_preset(UTF8_FULL);
    appeal_table.set_header(vec!["Field", "Value"]);
    appeal_table.add_row(vec![
        "Availability",
        output::na(plant.availability.as_deref()),
    ]);
    appeal_table.add_row(vec!["Best Feature", output::na(plant.appeal.as_deref())]);
    appeal_table.add_row(vec![
        "Image",
        plant.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE),
    ]);
    println!("{appeal_table}");
}

fn print_json(plant: &PlantRecord) -> Result<(), String> {
    serde_json::to_string_pretty(plant)
        .map(|json| println!("{json}"))
        .map_err(|e| format!("Failed to serialize plant: {}", e))
}

fn print_yaml(plant: &PlantRecord) -> Result<(), String> {
    serde_yaml::to_string(plant)
        .map(|yaml| println!("{yaml}"))
        .map_err(|e| format!("Failed to serialize plant: {}", e))
}
