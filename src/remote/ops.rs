// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

//! ops.rs
//!
//! This module implements the operations that the remote agent performs on
//! its own host: classifying the distribution, writing the cluster config,
//! and bootstrapping/decommissioning monitor daemons.
//!
//! Every operation is idempotent so that a fleet run interrupted part way
//! through can simply be re-run.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, warn};

use crate::init::InitKind;

/// Filesystem locations the agent operates on. The defaults point at the
/// production paths; tests point them into a scratch directory instead.
#[derive(Debug, Clone)]
pub struct Paths {
    state_dir: PathBuf,
    conf_dir: PathBuf,
}

impl Paths {
    pub fn new(state_dir: &str, conf_dir: &str) -> Self {
        Paths {
            state_dir: PathBuf::from(state_dir),
            conf_dir: PathBuf::from(conf_dir),
        }
    }

    /// A monitor's state directory. The `ceph-` prefix is fixed; monitor
    /// directories are namespaced by monitor name, not by cluster.
    pub fn mon_dir(&self, name: &str) -> PathBuf {
        self.state_dir.join("mon").join(format!("ceph-{name}"))
    }

    /// The transient path the bootstrap keyring is written to for the
    /// duration of the mkfs call.
    pub fn tmp_keyring(&self, cluster: &str, name: &str) -> PathBuf {
        self.state_dir
            .join("tmp")
            .join(format!("{cluster}-{name}.mon.keyring"))
    }

    /// The canonical location of the distributed cluster config.
    pub fn conf_path(&self, cluster: &str) -> PathBuf {
        self.conf_dir.join(format!("{cluster}.conf"))
    }
}

/// A failure in one agent-side operation. The orchestrator only ever sees the
/// rendered text of one of these, so each variant carries enough context to
/// be actionable in a log stream.
#[derive(Debug)]
pub enum OpError {
    Io { path: PathBuf, source: io::Error },
    Spawn { program: &'static str, source: io::Error },
    CommandFailed { program: &'static str, code: Option<i32>, stderr: String },
    ConfDiffers { path: PathBuf },
    BadProbeOutput(String),
}

impl fmt::Display for OpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpError::Io { path, source } => {
                write!(f, "filesystem error on '{}': {source}", path.display())
            }
            OpError::Spawn { program, source } => {
                write!(f, "could not run '{program}': {source}")
            }
            OpError::CommandFailed { program, code, stderr } => match code {
                Some(code) => write!(f, "'{program}' exited with status {code}: {stderr}"),
                None => write!(f, "'{program}' was terminated by a signal"),
            },
            OpError::ConfDiffers { path } => write!(
                f,
                "config file '{}' exists with different content; use --overwrite-conf to replace it",
                path.display()
            ),
            OpError::BadProbeOutput(output) => {
                write!(f, "unexpected lsb_release output: '{output}'")
            }
        }
    }
}

impl std::error::Error for OpError {}

/// The host classification returned by the probe operation.
#[derive(Debug, Clone)]
pub struct HostInfo {
    pub distro: String,
    pub release: String,
    pub codename: String,
}

/// Classify this host's distribution and release via `lsb_release`.
pub fn probe() -> Result<HostInfo, OpError> {
    let output = Command::new("lsb_release")
        .args(["-s", "-i", "-r", "-c"])
        .output()
        .map_err(|e| OpError::Spawn {
            program: "lsb_release",
            source: e,
        })?;
    check_status("lsb_release", &output)?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let mut lines = stdout.lines().map(|line| line.trim().to_string());
    let (Some(distro), Some(release), Some(codename)) =
        (lines.next(), lines.next(), lines.next())
    else {
        return Err(OpError::BadProbeOutput(stdout));
    };

    Ok(HostInfo {
        distro,
        release,
        codename,
    })
}

/// Write the cluster config to its canonical path.
///
/// An existing identical file is left alone. An existing file with different
/// content is an error unless `overwrite` is set, so that a fleet run cannot
/// silently clobber a hand-edited host config.
pub fn write_config(paths: &Paths, cluster: &str, conf: &[u8], overwrite: bool) -> Result<(), OpError> {
    let path = paths.conf_path(cluster);

    if path.exists() && !overwrite {
        let existing = fs::read(&path).map_err(|e| io_error(&path, e))?;
        if existing == conf {
            return Ok(());
        }
        return Err(OpError::ConfDiffers { path });
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
    }
    fs::write(&path, conf).map_err(|e| io_error(&path, e))
}

/// Bootstrap a monitor's persistent store (first run only) and start its
/// daemon under `init`. Safe to re-run: the `done` marker gates the
/// bootstrap, and the start dispatch is idempotent at the init-system level.
pub fn create_mon(
    paths: &Paths,
    cluster: &str,
    name: &str,
    keyring: &[u8],
    init: InitKind,
) -> Result<(), OpError> {
    let dir = paths.mon_dir(name);
    fs::create_dir_all(&dir).map_err(|e| io_error(&dir, e))?;

    let done = dir.join("done");
    if !done.exists() {
        let tmp = paths.tmp_keyring(cluster, name);
        if let Some(parent) = tmp.parent() {
            fs::create_dir_all(parent).map_err(|e| io_error(parent, e))?;
        }
        fs::write(&tmp, keyring).map_err(|e| io_error(&tmp, e))?;

        let mkfs = run_command(
            "ceph-mon",
            &[
                "--cluster".to_string(),
                cluster.to_string(),
                "--mkfs".to_string(),
                "-i".to_string(),
                name.to_string(),
                "--keyring".to_string(),
                tmp.display().to_string(),
            ],
        );

        // The keyring is secret material and must not outlive the mkfs call,
        // whether or not the call succeeded. Failing to remove it is not
        // itself fatal.
        if let Err(e) = fs::remove_file(&tmp) {
            warn!("could not remove temporary keyring '{}': {e}", tmp.display());
        }
        mkfs?;

        fs::write(&done, b"").map_err(|e| io_error(&done, e))?;
    }

    let marker = dir.join(init.marker());
    if !marker.exists() {
        fs::write(&marker, b"").map_err(|e| io_error(&marker, e))?;
    }

    let (program, args) = init.start_command(cluster, name);
    run_command(program, &args)
}

/// Remove a monitor from the cluster and delete its state.
///
/// The order matters: membership removal, then daemon stop, then directory
/// deletion. A failure part way through leaves the daemon running and its
/// state directory (including the init marker) intact, so the operation can
/// be retried.
pub fn destroy_mon(paths: &Paths, cluster: &str, name: &str) -> Result<(), OpError> {
    let dir = paths.mon_dir(name);
    if !dir.exists() {
        debug!("mon.{name} has no state directory, nothing to do");
        return Ok(());
    }

    // Remove from cluster membership, authenticating as the monitor itself
    // with the keyring in its state directory.
    let keyring = dir.join("keyring");
    run_command(
        "ceph",
        &[
            format!("--cluster={cluster}"),
            "-n".to_string(),
            format!("mon.{name}"),
            "-k".to_string(),
            keyring.display().to_string(),
            "mon".to_string(),
            "remove".to_string(),
            name.to_string(),
        ],
    )?;

    // Stop the daemon under whichever init mechanism provisioned it. The
    // marker in the state directory records that, so no probe is needed.
    if let Some(init) = recorded_init(&dir) {
        let (program, args) = init.stop_command(cluster, name);
        match run_command(program, &args) {
            Ok(()) => {}
            Err(e) if init.tolerates_stop_failure() => {
                debug!("ignoring stop failure for mon.{name}: {e}");
            }
            Err(e) => return Err(e),
        }
    }

    fs::remove_dir_all(&dir).map_err(|e| io_error(&dir, e))
}

/// Which init mechanism was recorded for this monitor when it was created.
fn recorded_init(dir: &Path) -> Option<InitKind> {
    [InitKind::Upstart, InitKind::Sysvinit]
        .into_iter()
        .find(|kind| dir.join(kind.marker()).exists())
}

fn io_error(path: &Path, source: io::Error) -> OpError {
    OpError::Io {
        path: path.to_path_buf(),
        source,
    }
}

fn run_command(program: &'static str, args: &[String]) -> Result<(), OpError> {
    debug!("running: {program} {}", args.join(" "));
    let output = Command::new(program)
        .args(args)
        .output()
        .map_err(|e| OpError::Spawn { program, source: e })?;
    check_status(program, &output)
}

fn check_status(program: &'static str, output: &std::process::Output) -> Result<(), OpError> {
    if output.status.success() {
        Ok(())
    } else {
        Err(OpError::CommandFailed {
            program,
            code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A scratch Paths rooted in the target-adjacent temp directory, cleaned
    /// up on drop.
    struct Scratch {
        root: PathBuf,
        paths: Paths,
    }

    impl Scratch {
        fn new(test_id: &str) -> Self {
            let root = std::env::temp_dir().join(format!("mondeploy-ops-{test_id}"));
            let _ = fs::remove_dir_all(&root);
            fs::create_dir_all(&root).unwrap();
            let paths = Paths::new(
                &root.join("state").display().to_string(),
                &root.join("etc").display().to_string(),
            );
            Scratch { root, paths }
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.root);
        }
    }

    #[test]
    fn write_config_is_noop_on_identical_content() {
        let scratch = Scratch::new("conf-noop");
        write_config(&scratch.paths, "ceph", b"[global]\n", false).unwrap();
        write_config(&scratch.paths, "ceph", b"[global]\n", false).unwrap();
        assert_eq!(
            fs::read(scratch.paths.conf_path("ceph")).unwrap(),
            b"[global]\n"
        );
    }

    #[test]
    fn write_config_refuses_to_clobber_without_overwrite() {
        let scratch = Scratch::new("conf-clobber");
        write_config(&scratch.paths, "ceph", b"old", false).unwrap();

        let err = write_config(&scratch.paths, "ceph", b"new", false).unwrap_err();
        assert!(matches!(err, OpError::ConfDiffers { .. }));
        assert_eq!(fs::read(scratch.paths.conf_path("ceph")).unwrap(), b"old");

        write_config(&scratch.paths, "ceph", b"new", true).unwrap();
        assert_eq!(fs::read(scratch.paths.conf_path("ceph")).unwrap(), b"new");
    }

    #[test]
    fn destroy_without_state_directory_is_a_noop() {
        let scratch = Scratch::new("destroy-noop");
        // No commands run on this path; a missing directory is simply done.
        destroy_mon(&scratch.paths, "ceph", "ghost").unwrap();
    }
}
