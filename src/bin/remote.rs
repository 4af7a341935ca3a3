// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use clap::Parser;

use mondeploy_lib::remote::{self, Cli};

fn main() {
    let args = Cli::parse();

    env_logger::Builder::from_env(
        env_logger::Env::default()
            .filter_or("MONDEPLOY_LOG", mondeploy_lib::log_level(args.verbose)),
    )
    .init();

    if remote::agent_main(args).is_err() {
        std::process::exit(1);
    }
}
