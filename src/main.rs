use clap::Parser;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

use tictactoe::core::config::{self, CliOverrides};
use tictactoe::core::theme::Theme;
use tictactoe::tui;

#[derive(Parser)]
#[command(name = "tictactoe", about = "Two-player tic-tac-toe in the terminal")]
struct Args {
    /// Starting color theme (overrides config and TICTACTOE_THEME)
    #[arg(short, long, value_enum)]
    theme: Option<Theme>,

    /// Where to write the log file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A broken config file shouldn't keep anyone from playing
    let (file_config, config_error) = match config::load_config() {
        Ok(c) => (c, None),
        Err(e) => (config::GameConfig::default(), Some(e)),
    };
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            theme: args.theme,
            log_file: args.log_file,
        },
    );

    // Initialize file logger; the terminal belongs to the UI
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(resolved.log_level, log_config, log_file);
    }

    if let Some(e) = config_error {
        log::warn!("Using default config: {}", e);
    }
    log::info!("Tic Tac Toe starting up with theme: {}", resolved.theme.label());

    tui::run(resolved)
}
