// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::fs;
use std::io;
use std::net;
use std::path::PathBuf;

use crate::commands::Cli;
use crate::config::Config;

/// Given a relative `path` in the test directory, prepend the
/// full path to the test directory.
fn test_path(path: &str) -> String {
    std::env::var("CARGO_MANIFEST_DIR").unwrap() + "/tests/" + path
}

trait IgnoreEexist {
    fn ignore_eexist(self) -> Self;
}

impl IgnoreEexist for io::Result<()> {
    fn ignore_eexist(self) -> Self {
        match self {
            Ok(_) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// This struct is used to hold handles to the remote agent processes so that they can be shut
/// down when the test ends.
pub struct ChildHandle {
    pub handle: std::process::Child,
}

impl Drop for ChildHandle {
    fn drop(&mut self) {
        let _ = self.handle.kill();
    }
}

/// One simulated fleet host: an agent process bound to its own loopback
/// address, with its own state/conf directories under the test's private
/// directory.
pub struct TestAgent {
    /// The loopback address the agent binds and the test addresses it by.
    /// Distinct hosts in one test use distinct 127.0.0.x addresses so they
    /// can share the test's port.
    pub bind: String,

    /// Subdirectory name for this agent's filesystem state.
    pub label: String,

    /// Extra environment for the agent process. The stub binaries under
    /// `tests/mock_bin/` read `MONDEPLOY_TEST_*` variables from here to
    /// simulate distro classification and injected failures.
    pub env: Vec<(String, String)>,
}

impl TestAgent {
    pub fn new(bind: &str, label: &str) -> Self {
        TestAgent {
            bind: bind.to_string(),
            label: label.to_string(),
            env: Vec::new(),
        }
    }

    pub fn with_env(mut self, key: &str, value: &str) -> Self {
        self.env.push((key.to_string(), value.to_string()));
        self
    }
}

/// A TestEnvironment holds all the information needed to access a test's runtime state. This
/// includes a "private" working directory holding the local config/keyring the orchestrator
/// reads, each simulated host's state directories, and the shared action log that the stub
/// binaries append to.
///
/// All access to the test's state on the filesystem should be done via methods on TestEnvironment
/// rather than coded in the tests themselves.
pub struct TestEnvironment {
    /// The name of the test, used to determine its private directory for holding test state.
    test_id: String,

    /// The path to this test's private working directory.
    private_dir_path: String,

    /// The path to the log file that the stub binaries (under `tests/mock_bin/`) append the
    /// commands they were invoked with, so tests can assert on exactly what ran.
    log_file_path: String,

    /// The agent binary path has to be passed in as an argument from the tests because the
    /// CARGO_BIN_EXE_* environment variables aren't defined during non-test compilation.
    agent_binary_path: String,

    /// The port every agent in this test listens on. Tests use distinct ports
    /// so they can run concurrently in one test binary.
    port: u16,
}

impl TestEnvironment {
    /// Set up an environment for a test named `test_id`.
    pub fn new(test_id: String, agent_binary_path: &str, port: u16) -> Self {
        // Each test gets a "private" directory named after its test_id.
        let private_dir_path = test_path(&format!("test_output/{test_id}"));
        // Start by emptying out the test's private directory, so that files from a previous test
        // run don't impact this run:
        match fs::remove_dir_all(&private_dir_path) {
            Ok(()) => {}
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => panic!("Could not clean up test directory: {e}"),
        };

        fs::create_dir(test_path("test_output"))
            .ignore_eexist()
            .unwrap();
        fs::create_dir(&private_dir_path).unwrap();

        let log_file_path = format!("{private_dir_path}/command_log");
        fs::File::create(&log_file_path).unwrap();

        Self {
            test_id,
            private_dir_path,
            log_file_path,
            agent_binary_path: agent_binary_path.to_string(),
            port,
        }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Build a Cli for orchestrator calls against this environment's agents.
    pub fn cli(&self, cluster: &str) -> Cli {
        Cli {
            cluster: cluster.to_string(),
            config: Some(self.local_conf_path(cluster)),
            keyring: Some(self.local_keyring_path(cluster)),
            port: Some(self.port),
            timeout: Some(15),
            verbose: true,
            mtls: false,
            command: None,
        }
    }

    pub fn local_conf_path(&self, cluster: &str) -> String {
        format!("{}/{cluster}.conf", self.private_dir_path)
    }

    pub fn local_keyring_path(&self, cluster: &str) -> String {
        format!("{}/{cluster}.mon.keyring", self.private_dir_path)
    }

    /// Write the orchestrator-side cluster config file.
    pub fn write_local_config(&self, cluster: &str, config: &Config) {
        let text = config.to_text().unwrap();
        fs::write(self.local_conf_path(cluster), text).unwrap();
    }

    /// Write the orchestrator-side cluster keyring file.
    pub fn write_local_keyring(&self, cluster: &str, contents: &[u8]) {
        fs::write(self.local_keyring_path(cluster), contents).unwrap();
    }

    fn agent_state_dir(&self, label: &str) -> String {
        format!("{}/{label}/state", self.private_dir_path)
    }

    fn agent_conf_dir(&self, label: &str) -> String {
        format!("{}/{label}/etc", self.private_dir_path)
    }

    /// A monitor's state directory on the simulated host `label`.
    pub fn mon_dir(&self, label: &str, name: &str) -> PathBuf {
        PathBuf::from(self.agent_state_dir(label))
            .join("mon")
            .join(format!("ceph-{name}"))
    }

    /// Where a transient bootstrap keyring would live on the simulated host
    /// `label`. Tests assert this is gone after provisioning.
    pub fn tmp_keyring(&self, label: &str, cluster: &str, name: &str) -> PathBuf {
        PathBuf::from(self.agent_state_dir(label))
            .join("tmp")
            .join(format!("{cluster}-{name}.mon.keyring"))
    }

    /// The distributed config path on the simulated host `label`.
    pub fn remote_conf_path(&self, label: &str, cluster: &str) -> PathBuf {
        PathBuf::from(self.agent_conf_dir(label)).join(format!("{cluster}.conf"))
    }

    /// Starts a remote agent in a new process for each entry in `agents`.
    ///
    /// Waits until the agents are listening and ready to accept connections before returning, so
    /// that any subsequent code knows the agents are up and ready.
    pub fn start_agents(&self, agents: &[TestAgent]) -> Vec<ChildHandle> {
        // The stub binaries must shadow the real ceph/init tools for the
        // agents under test.
        let path_var = format!(
            "{}:{}",
            test_path("mock_bin"),
            std::env::var("PATH").unwrap_or_default()
        );

        let handles = agents
            .iter()
            .map(|agent| {
                let mut command = std::process::Command::new(&self.agent_binary_path);
                command
                    .arg("--listen")
                    .arg(&agent.bind)
                    .arg("--state-dir")
                    .arg(self.agent_state_dir(&agent.label))
                    .arg("--conf-dir")
                    .arg(self.agent_conf_dir(&agent.label))
                    .env("PATH", &path_var)
                    .env("MONDEPLOY_PORT", format!("{}", self.port))
                    .env("MONDEPLOY_NET", "127.0.0.0/8")
                    .env("MONDEPLOY_TEST_LOG", &self.log_file_path);
                for (key, value) in &agent.env {
                    command.env(key, value);
                }
                ChildHandle {
                    handle: command.spawn().expect("could not launch agent process"),
                }
            })
            .collect();

        let mut pending: Vec<net::SocketAddr> = agents
            .iter()
            .map(|agent| format!("{}:{}", agent.bind, self.port).parse().unwrap())
            .collect();

        let mut counter = 40;
        while !pending.is_empty() && counter > 0 {
            // Try to connect to each agent; when connecting to one succeeds, remove it from the
            // list but keep trying the others.
            pending.retain(|addr| {
                match net::TcpStream::connect_timeout(addr, std::time::Duration::from_millis(50)) {
                    Ok(_) => false,
                    Err(e) if e.kind() == io::ErrorKind::ConnectionRefused => true,
                    Err(e) => panic!("Unexpected error attempting to connect to agent at {addr}: {e}"),
                }
            });

            std::thread::sleep(std::time::Duration::from_millis(50));
            counter -= 1;
        }
        assert!(
            pending.is_empty(),
            "agents for test '{}' did not come up: {pending:?}",
            self.test_id
        );

        handles
    }

    /// All commands the stub binaries have recorded so far, one per line in
    /// invocation order.
    pub fn command_log(&self) -> Vec<String> {
        fs::read_to_string(&self.log_file_path)
            .unwrap()
            .lines()
            .map(|line| line.to_string())
            .collect()
    }

    /// How many recorded commands start with `prefix`.
    pub fn count_commands(&self, prefix: &str) -> usize {
        self.command_log()
            .iter()
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}
