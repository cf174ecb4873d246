//! plantg recommend コマンド
//!
//! 希望条件からおすすめの植物を提案する。

use crate::dataset;
use crate::filter::filter_plants;
use crate::output;
use crate::plant::PlantRecord;
use crate::preferences::{PreferenceSet, SizeClass};
use clap::Parser;
use std::path::PathBuf;

const PREFERENCE_HELP: &str = "\
PREFERENCE VALUES:
  --sunlight  Strong Light | Full Sun
  --watering  Must Not Dry Between Waterings | Can Dry Between Waterings |
              Water When Half Dry | Water Only When Dry
  --size      small (< 1 meter) | medium (1 - 5 meters) | large (> 5 meters)
  --rarity    Regular | Seasonal | More or Less Rare | Sporadic | Rare
  --appeal    Flower | Foliage | Style | Color | Trunc | Bearing | Robustness

Text preferences are case-insensitive substring matches, so any fragment
of a column value works. Unset preferences impose no constraint.";

#[derive(Debug, Parser)]
#[command(after_long_help = PREFERENCE_HELP)]
pub struct Args {
    /// Sunlight preference (matched against the light column)
    #[arg(long)]
    pub sunlight: Option<String>,

    /// Watering preference (matched against the water column)
    #[arg(long)]
    pub watering: Option<String>,

    /// Desired mature size
    #[arg(long, value_enum)]
    pub size: Option<SizeClass>,

    /// Rarity preference (matched against the availability column)
    #[arg(long)]
    pub rarity: Option<String>,

    /// Appeal preference (the plant's best feature)
    #[arg(long)]
    pub appeal: Option<String>,

    /// Answer the questions interactively instead of passing flags
    #[arg(
        long,
        short = 'i',
        conflicts_with_all = ["sunlight", "watering", "size", "rarity", "appeal"]
    )]
    pub interactive: bool,

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

    // 2. 希望条件の組み立て
    let prefs = if args.interactive {
        crate::tui::run_preference_form().map_err(|e| e.to_string())?
    } else {
        preferences_from_args(&args)
    };

    // 3. フィルタ実行
    let matches = filter_plants(table.records(), &prefs);

    // 4. 出力
    if args.json {
        print_json(&matches)?;
    } else if args.simple {
        print_simple(&matches);
    } else if matches.is_empty() {
        output::print_no_matches();
    } else {
        if prefs.is_unconstrained() {
            println!("No preferences given; showing every plant in the dataset");
            println!();
        }
        output::print_plant_cards(&matches);
        output::print_match_summary(matches.len(), table.len());
    }

    Ok(())
}

/// フラグから希望条件を組み立てる
fn preferences_from_args(args: &Args) -> PreferenceSet {
    PreferenceSet {
        sunlight: args.sunlight.clone(),
        watering: args.watering.clone(),
        size: args.size.map(|s| s.as_str().to_string()),
        rarity: args.rarity.clone(),
        appeal: args.appeal.clone(),
    }
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

#[cfg(test)]
#[path = "recommend_test.rs"]
mod recommend_test;
