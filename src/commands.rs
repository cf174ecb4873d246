use crate::cli::Command;

pub mod info;
pub mod list;
pub mod recommend;

pub fn dispatch(cli: crate::cli::Cli) -> Result<(), String> {
    match cli.command {
        Command::Recommend(args) => recommend::run(args),
        Command::List(args) => list::run(args),
        Command::Info(args) => info::run(args),
    }
}
