use clap::{Parser, Subcommand};

use crate::commands::{info, list, recommend};

#[derive(Debug, Parser)]
#[command(name = "plantg")]
#[command(about = "Plantgorithm houseplant suggestion CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 希望条件に合う植物を提案
    Recommend(recommend::Args),

    /// データセット内の植物一覧
    List(list::Args),

    /// 植物1件の詳細表示
    Info(info::Args),
}
