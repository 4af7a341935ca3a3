// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use clap::Parser;

use mondeploy_lib::commands::{self, Cli};

/// The mondeploy binary drives monitor deployment across the fleet from the
/// operator's machine.
fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("MONDEPLOY_LOG", mondeploy_lib::log_level(args.verbose)),
    )
    .init();

    if commands::main(&args).is_err() {
        std::process::exit(1);
    }
}
