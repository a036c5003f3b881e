/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Main executable for hea-data

use clap::Parser;
use hea_data::cli::{self, Cli};

fn main() -> anyhow::Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    cli::run(cli)
}
