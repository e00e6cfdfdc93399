// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;

use clap::Parser;

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "snowfall",
    version,
    about = "Generate a snowflake scene in the terminal"
)]
pub struct Args {
    #[arg(
        short = 'e',
        long = "height",
        default_value_t = 30,
        help_heading = "SCENE",
        help = "Scene height in rows (min 1 max 500)"
    )]
    pub height: u16,

    #[arg(
        short = 'w',
        long = "width",
        default_value_t = 100,
        help_heading = "SCENE",
        help = "Scene width in columns (min 1 max 1000)"
    )]
    pub width: u16,

    #[arg(
        short = 'i',
        long = "intensity",
        default_value_t = 2,
        help_heading = "SIMULATION",
        help = "Snowfall intensity (min 0 max 9; the i key can push it to 10 at runtime)"
    )]
    pub intensity: u8,

    #[arg(
        short = 't',
        long = "tick-rate-ms",
        default_value_t = 100,
        help_heading = "SIMULATION",
        help = "Tick rate in milliseconds (min 1 max 999)"
    )]
    pub tick_rate_ms: u16,
}
