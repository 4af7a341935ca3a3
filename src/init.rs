// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

//! Init-mechanism classification and the start/stop command table.
//!
//! Which supervision mechanism governs the monitor daemon is decided once per
//! host (from the probe result) and recorded on the host as a zero-byte marker
//! file named after the mechanism, so a later decommission can recover it
//! without probing again.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitKind {
    Upstart,
    Sysvinit,
}

/// A ready-to-run service command: program plus argument list.
pub type ServiceCommand = (&'static str, Vec<String>);

impl InitKind {
    /// The marker file name recorded in a monitor's state directory. The file
    /// name is literally the init tag, so it doubles as the wire/display form.
    pub fn marker(&self) -> &'static str {
        match self {
            InitKind::Upstart => "upstart",
            InitKind::Sysvinit => "sysvinit",
        }
    }

    /// Command that starts the monitor daemon `name` in `cluster`.
    pub fn start_command(&self, cluster: &str, name: &str) -> ServiceCommand {
        match self {
            InitKind::Upstart => (
                "initctl",
                vec![
                    "emit".to_string(),
                    "ceph-mon".to_string(),
                    format!("cluster={cluster}"),
                    format!("id={name}"),
                ],
            ),
            InitKind::Sysvinit => (
                "service",
                vec![
                    "ceph".to_string(),
                    "start".to_string(),
                    format!("mon.{name}"),
                ],
            ),
        }
    }

    /// Command that stops the monitor daemon `name` in `cluster`.
    pub fn stop_command(&self, cluster: &str, name: &str) -> ServiceCommand {
        match self {
            InitKind::Upstart => (
                "initctl",
                vec![
                    "stop".to_string(),
                    "ceph-mon".to_string(),
                    format!("cluster={cluster}"),
                    format!("id={name}"),
                ],
            ),
            InitKind::Sysvinit => (
                "service",
                vec![
                    "ceph".to_string(),
                    "stop".to_string(),
                    format!("mon.{name}"),
                ],
            ),
        }
    }

    /// Upstart's `initctl stop` fails on an instance that is not running, and
    /// that outcome counts as success for a decommission.
    pub fn tolerates_stop_failure(&self) -> bool {
        matches!(self, InitKind::Upstart)
    }
}

impl fmt::Display for InitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Map a host's (distro, codename) classification to the init mechanism that
/// manages daemons there. Ubuntu releases of the era this tool targets use
/// upstart; everything else is driven through sysvinit service scripts.
pub fn choose_init(distro: &str, _codename: &str) -> InitKind {
    match distro {
        "Ubuntu" => InitKind::Upstart,
        _ => InitKind::Sysvinit,
    }
}

impl From<crate::mon_capnp::InitKind> for InitKind {
    fn from(kind: crate::mon_capnp::InitKind) -> Self {
        match kind {
            crate::mon_capnp::InitKind::Upstart => InitKind::Upstart,
            crate::mon_capnp::InitKind::Sysvinit => InitKind::Sysvinit,
        }
    }
}

impl From<InitKind> for crate::mon_capnp::InitKind {
    fn from(kind: InitKind) -> Self {
        match kind {
            InitKind::Upstart => crate::mon_capnp::InitKind::Upstart,
            InitKind::Sysvinit => crate::mon_capnp::InitKind::Sysvinit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn choose_init_table() {
        assert_eq!(choose_init("Ubuntu", "precise"), InitKind::Upstart);
        assert_eq!(choose_init("CentOS", "Final"), InitKind::Sysvinit);
        assert_eq!(choose_init("Debian", "squeeze"), InitKind::Sysvinit);
        assert_eq!(choose_init("SomethingElse", ""), InitKind::Sysvinit);
    }

    #[test]
    fn upstart_start_carries_cluster_and_id() {
        let (program, args) = InitKind::Upstart.start_command("ceph", "alpha");
        assert_eq!(program, "initctl");
        assert_eq!(args, vec!["emit", "ceph-mon", "cluster=ceph", "id=alpha"]);
    }

    #[test]
    fn sysvinit_start_names_the_instance() {
        let (program, args) = InitKind::Sysvinit.start_command("ceph", "alpha");
        assert_eq!(program, "service");
        assert_eq!(args, vec!["ceph", "start", "mon.alpha"]);
    }

    #[test]
    fn stop_commands() {
        let (program, args) = InitKind::Upstart.stop_command("main", "beta");
        assert_eq!(program, "initctl");
        assert_eq!(args, vec!["stop", "ceph-mon", "cluster=main", "id=beta"]);

        let (program, args) = InitKind::Sysvinit.stop_command("main", "beta");
        assert_eq!(program, "service");
        assert_eq!(args, vec!["ceph", "stop", "mon.beta"]);
    }

    #[test]
    fn marker_names_match_display() {
        assert_eq!(InitKind::Upstart.to_string(), "upstart");
        assert_eq!(InitKind::Sysvinit.to_string(), "sysvinit");
    }
}
