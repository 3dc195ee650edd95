//! rTimesheet library root.
//! Exposes CLI parser, high-level run() function, and internal modules.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::{CommandFactory, Parser};
use cli::parser::{Cli, Commands};
use cli::prompt::Prompter;
use config::Config;
use errors::AppResult;
use std::io::{BufRead, Write};

/// Central command dispatcher
pub fn dispatch<R: BufRead, W: Write>(
    command: &Commands,
    cfg: &Config,
    prompter: &mut Prompter<R, W>,
) -> AppResult<()> {
    match command {
        Commands::Init { force } => cli::commands::init::handle(*force, cfg),
        Commands::Add(args) => cli::commands::add::handle(args, cfg, prompter),
        Commands::Update(args) => cli::commands::update::handle(args, cfg, prompter),
        Commands::Delete(args) => cli::commands::delete::handle(args, cfg, prompter),
        Commands::Export { date, lang } => {
            cli::commands::export::handle(date, *lang, cfg, prompter)
        }
        Commands::List(args) => cli::commands::list::handle(args, cfg, prompter),
        Commands::Config { set, .. } => cli::commands::config::handle(set.as_deref(), cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ no subcommand: usage, success
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    // 3️⃣ load config once
    let cfg = Config::load(cli.config.as_deref())?;

    // 4️⃣ hand everything to the dispatcher
    let mut prompter = Prompter::stdio(cli.non_interactive);
    dispatch(command, &cfg, &mut prompter)
}
