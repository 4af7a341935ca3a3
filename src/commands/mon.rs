// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

//! The fleet orchestrator: iterate the target hosts, drive each host's agent
//! through probe / config distribution / provision (or decommission), and
//! aggregate per-host failures into a single fleet-level outcome.
//!
//! A failure on one host never aborts the run. The log stream carries the
//! per-host detail; the returned error carries only the tally.

use std::fmt;
use std::time::Duration;

use {
    clap::{Args, Subcommand},
    log::{debug, error},
};

use crate::{
    commands::{Cli, Handle, HandledResult},
    config::Config,
    init::choose_init,
    mon_capnp::{self, AgentError},
};

/// Default per-host deadline. Remote mkfs on a slow disk dominates.
const DEFAULT_TIMEOUT_SECS: u64 = 120;

#[derive(Args, Debug, Clone)]
pub struct MonArgs {
    #[command(subcommand)]
    pub command: MonCommands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum MonCommands {
    /// Deploy a monitor on each named host.
    Create(CreateArgs),
    /// Remove a monitor from each named host.
    Destroy(DestroyArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CreateArgs {
    /// Host to deploy on, optionally with an explicit monitor name. Without
    /// hosts, falls back to 'mon_initial_members' from the config.
    #[arg(value_name = "HOST[:NAME]")]
    pub mon: Vec<String>,

    /// Replace a host's config file even if it differs from ours.
    #[arg(long)]
    pub overwrite_conf: bool,
}

#[derive(Args, Debug, Clone)]
pub struct DestroyArgs {
    #[arg(value_name = "HOST[:NAME]")]
    pub mon: Vec<String>,
}

/// One (host, monitor name) pair from a `HOST[:NAME]` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonitorTarget {
    pub hostname: String,
    pub name: String,
}

impl MonitorTarget {
    /// Parse a `HOST[:NAME]` token. With no colon (or with a malformed
    /// multi-colon token) the monitor name defaults to the host name.
    pub fn parse(token: &str) -> Self {
        let mut parts = token.split(':');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(host), Some(name), None) => MonitorTarget {
                hostname: host.to_string(),
                name: name.to_string(),
            },
            _ => MonitorTarget {
                hostname: token.to_string(),
                name: token.to_string(),
            },
        }
    }
}

impl fmt::Display for MonitorTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "mon.{} on '{}'", self.name, self.hostname)
    }
}

/// The aggregate outcome of a fleet run that had at least one per-host
/// failure. Which hosts failed is in the log stream, not here.
#[derive(Debug, PartialEq, Eq)]
pub struct FleetError {
    pub verb: &'static str,
    pub failed: usize,
}

impl fmt::Display for FleetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to {} {} monitors", self.verb, self.failed)
    }
}

impl std::error::Error for FleetError {}

pub async fn create(cli: &Cli, args: &CreateArgs) -> HandledResult<()> {
    let config = Config::load(&config_path(cli)).handle_err(|_| {})?;
    let targets = resolve_targets(&args.mon, &config)?;

    // The cluster keyring is a fleet-wide precondition; check it before any
    // host is touched.
    let keyring_path = keyring_path(cli);
    let keyring = std::fs::read(&keyring_path).handle_err(|_| {
        eprintln!("mon keyring '{keyring_path}' not found; run 'new' to create a new cluster");
    })?;

    create_all(cli, &config, &targets, &keyring, args.overwrite_conf)
        .await
        .handle_err(|e| eprintln!("{e}"))
}

pub async fn destroy(cli: &Cli, args: &DestroyArgs) -> HandledResult<()> {
    let targets = if args.mon.is_empty() {
        // Same fallback as create: the configured initial members.
        let config = Config::load(&config_path(cli)).handle_err(|_| {})?;
        resolve_targets(&[], &config)?
    } else {
        args.mon.iter().map(|t| MonitorTarget::parse(t)).collect()
    };

    destroy_all(cli, &targets)
        .await
        .handle_err(|e| eprintln!("{e}"))
}

/// Provision a monitor on every target host. Per-host failures are logged
/// and counted; a nonzero count is the only error this returns.
pub async fn create_all(
    cli: &Cli,
    config: &Config,
    targets: &[MonitorTarget],
    keyring: &[u8],
    overwrite_conf: bool,
) -> Result<(), FleetError> {
    let hosts: Vec<&str> = targets.iter().map(|t| t.hostname.as_str()).collect();
    debug!(
        "Deploying mon, cluster {} hosts {}",
        cli.cluster,
        hosts.join(" ")
    );

    let conf_text = config.to_text().map_err(|e| {
        // A config that cannot be serialized fails every host identically.
        error!("could not serialize cluster config: {e}");
        FleetError {
            verb: "create",
            failed: targets.len(),
        }
    })?;

    let mut errors = 0;
    for target in targets {
        debug!("Deploying {target}");
        if let Err(e) = with_deadline(cli, create_one(cli, target, &conf_text, keyring, overwrite_conf)).await
        {
            error!("{target}: {e}");
            errors += 1;
        }
    }

    if errors > 0 {
        return Err(FleetError {
            verb: "create",
            failed: errors,
        });
    }
    Ok(())
}

/// Decommission a monitor on every target host, with the same
/// iterate/log/count discipline as `create_all`.
pub async fn destroy_all(cli: &Cli, targets: &[MonitorTarget]) -> Result<(), FleetError> {
    let mut errors = 0;
    for target in targets {
        debug!("Removing {target}");
        if let Err(e) = with_deadline(cli, destroy_one(cli, target)).await {
            error!("{target}: {e}");
            errors += 1;
        }
    }

    if errors > 0 {
        return Err(FleetError {
            verb: "destroy",
            failed: errors,
        });
    }
    Ok(())
}

async fn create_one(
    cli: &Cli,
    target: &MonitorTarget,
    conf_text: &str,
    keyring: &[u8],
    overwrite_conf: bool,
) -> Result<(), AgentError> {
    let client = mon_capnp::get_client(&agent_address(cli, &target.hostname), cli.mtls).await?;

    let info = mon_capnp::probe(&client).await?;
    let init = choose_init(&info.distro, &info.codename);
    debug!(
        "Distro {} codename {}, will use {}",
        info.distro, info.codename, init
    );

    mon_capnp::write_config(&client, &cli.cluster, conf_text.as_bytes(), overwrite_conf).await?;
    mon_capnp::create_mon(&client, &cli.cluster, &target.name, keyring, init).await?;

    Ok(())
}

async fn destroy_one(cli: &Cli, target: &MonitorTarget) -> Result<(), AgentError> {
    let client = mon_capnp::get_client(&agent_address(cli, &target.hostname), cli.mtls).await?;
    mon_capnp::destroy_mon(&client, &cli.cluster, &target.name).await
}

/// Bound one host's operations by the per-host deadline. A timeout is an
/// ordinary per-host failure; the daemon-level commands themselves are not
/// interruptible, so nothing finer-grained is meaningful.
async fn with_deadline(
    cli: &Cli,
    op: impl std::future::Future<Output = Result<(), AgentError>>,
) -> Result<(), AgentError> {
    let deadline = Duration::from_secs(cli.timeout.unwrap_or(DEFAULT_TIMEOUT_SECS));
    match tokio::time::timeout(deadline, op).await {
        Ok(result) => result,
        Err(_) => Err(AgentError::TimedOut),
    }
}

/// Resolve the target list: explicit hosts win, then the config's
/// `mon_initial_members`; an empty result is a fatal precondition error
/// raised before any remote work.
fn resolve_targets(tokens: &[String], config: &Config) -> HandledResult<Vec<MonitorTarget>> {
    let tokens: Vec<String> = if !tokens.is_empty() {
        tokens.to_vec()
    } else {
        config.mon_initial_members()
    };

    if tokens.is_empty() {
        eprintln!("no hosts specified and no 'mon_initial_members' in config");
        return Err(crate::commands::HandledError {});
    }

    Ok(tokens.iter().map(|t| MonitorTarget::parse(t)).collect())
}

fn config_path(cli: &Cli) -> String {
    match &cli.config {
        Some(path) => path.clone(),
        None => format!("{}.conf", cli.cluster),
    }
}

fn keyring_path(cli: &Cli) -> String {
    match &cli.keyring {
        Some(path) => path.clone(),
        None => format!("{}.mon.keyring", cli.cluster),
    }
}

fn agent_address(cli: &Cli, hostname: &str) -> String {
    let port = match cli.port {
        Some(port) => port,
        None => crate::remote_port(),
    };
    format!("{hostname}:{port}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Global};

    #[test]
    fn colon_separated_token_splits_into_host_and_name() {
        let target = MonitorTarget::parse("alpha:mon-a");
        assert_eq!(target.hostname, "alpha");
        assert_eq!(target.name, "mon-a");
    }

    #[test]
    fn bare_token_is_both_host_and_name() {
        let target = MonitorTarget::parse("beta");
        assert_eq!(target.hostname, "beta");
        assert_eq!(target.name, "beta");
    }

    #[test]
    fn multi_colon_token_falls_back_to_whole_token() {
        let target = MonitorTarget::parse("a:b:c");
        assert_eq!(target.hostname, "a:b:c");
        assert_eq!(target.name, "a:b:c");
    }

    #[test]
    fn explicit_targets_win_over_config() {
        let config = Config {
            global: Global {
                mon_initial_members: Some("x,y".to_string()),
                ..Default::default()
            },
        };
        let targets = resolve_targets(&["alpha:a".to_string()], &config).unwrap();
        assert_eq!(
            targets,
            vec![MonitorTarget {
                hostname: "alpha".to_string(),
                name: "a".to_string()
            }]
        );
    }

    #[test]
    fn config_members_fill_in_when_no_targets_given() {
        let config = Config {
            global: Global {
                mon_initial_members: Some("alpha, beta".to_string()),
                ..Default::default()
            },
        };
        let targets = resolve_targets(&[], &config).unwrap();
        assert_eq!(targets.len(), 2);
        assert_eq!(targets[0].hostname, "alpha");
        assert_eq!(targets[1].name, "beta");
    }

    #[test]
    fn no_targets_anywhere_is_a_precondition_error() {
        let config = Config::default();
        assert!(resolve_targets(&[], &config).is_err());
    }

    #[test]
    fn fleet_error_names_the_count() {
        let e = FleetError {
            verb: "create",
            failed: 2,
        };
        assert_eq!(e.to_string(), "Failed to create 2 monitors");
    }
}
