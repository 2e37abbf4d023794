use clap::Parser as _;
use stdin::is_std_in_flag_input;

use crate::commands::{Cli, Commands};

mod commands;
mod commands_highlight;
mod commands_languages;
mod render;
mod stdin;

fn main() {
    let cli = Cli::parse();

    let status_code = match cli.command {
        Commands::Highlight(args) => match is_std_in_flag_input(&args.paths) {
            Err(e) => {
                eprintln!("{e}");
                1
            }
            Ok(false) => commands_highlight::run_highlight(args),
            Ok(true) => commands_highlight::run_highlight_stdin(args),
        },
        Commands::Languages => {
            commands_languages::languages_info();
            0
        }
    };

    std::process::exit(status_code);
}
