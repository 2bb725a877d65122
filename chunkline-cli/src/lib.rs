//! Library half of the `chunkline` binary, split out so commands can be
//! driven from tests with an in-memory writer.

pub mod cli;
pub mod commands;
pub mod config;

use std::io::Write;

pub use cli::{Cli, Command};

pub async fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    match cli.command {
        Command::Languages => commands::languages::run(out),
        Command::Separators { language } => commands::separators::run(language, out),
        Command::Split(args) => commands::split::run(args, out).await,
        Command::Query(args) => commands::query::run(args, out).await,
    }
}
