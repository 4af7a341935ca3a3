// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

pub mod mon;

use clap::{Parser, Subcommand};

use mon::MonArgs;

/// A `HandledError` represents an error that has already been handled. When you call a function
/// that returns a `HandledError` or `HandledResult`, you don't need to do anything with that error,
/// other than just be aware that it happened, and return it on to your caller.
///
/// `main()` has a special responsibility: since its "caller" is, in a certain sense, the operating
/// system, `main()` must return a nonzero exit status when it gets a `HandledError`.
///
/// The primary way to construct a `HandledError` is with the `handle_err()` function, which turns a
/// generic error into a `HandledError`, and also runs some caller-provided code to handle the
/// error. That provided code would normally do something like report the error to stderr.
///
/// A `HandledError` intentionally has no data about what the specific error was; the process of
/// handling the error "consumes" that information, and it is no longer needed as the error was
/// already appropriately handled.
#[derive(Debug, PartialEq)]
pub struct HandledError {}

pub type HandledResult<T> = std::result::Result<T, HandledError>;

pub fn handled_error() -> HandledResult<()> {
    HandledResult::Err(HandledError {})
}

pub trait Handle<T, F> {
    fn handle_err(self, handler: F) -> HandledResult<T>;
}

impl<T, E, F: FnOnce(E)> Handle<T, F> for std::result::Result<T, E> {
    /// Handle an error by running the provided `handler` code, giving it the error.
    ///
    /// Then, return a `HandledResult`, so that transitive callers of this function know that they
    /// do not need to do anything further to handle the error.
    fn handle_err(self, handler: F) -> HandledResult<T> {
        self.map_err(|e| {
            handler(e);
            HandledError {}
        })
    }
}

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Name of the cluster to operate on.
    #[arg(long, global = true, default_value = "ceph")]
    pub cluster: String,

    /// Path to the cluster config file (default '{cluster}.conf').
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Path to the local cluster keyring (default '{cluster}.mon.keyring').
    #[arg(long, global = true)]
    pub keyring: Option<String>,

    /// Port the remote agents listen on.
    #[arg(long, global = true)]
    pub port: Option<u16>,

    /// Per-host deadline in seconds; a host that exceeds it counts as failed.
    #[arg(long, global = true)]
    pub timeout: Option<u64>,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[arg(long)]
    pub mtls: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Deploy or remove monitors on remote hosts.
    Mon(MonArgs),
}

pub fn main(cli: &Cli) -> HandledResult<()> {
    let Some(command) = &cli.command else {
        eprintln!("no subcommand given (see --help)");
        return handled_error();
    };

    let rt = tokio::runtime::Runtime::new()
        .handle_err(|e| eprintln!("Error launching tokio runtime: {e}"))?;

    rt.block_on(tokio::task::LocalSet::new().run_until(async {
        match command {
            Commands::Mon(args) => match &args.command {
                mon::MonCommands::Create(create_args) => mon::create(cli, create_args).await,
                mon::MonCommands::Destroy(destroy_args) => mon::destroy(cli, destroy_args).await,
            },
        }
    }))
}
