// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

#[cfg(test)]
mod tests {
    use tokio::runtime::Runtime;

    use mondeploy_lib::{
        commands::mon::{self, FleetError, MonitorTarget},
        config::{Config, Global},
        test_env::*,
    };

    fn test_env_helper(test_id: &str, port: u16) -> TestEnvironment {
        TestEnvironment::new(
            test_id.to_string(),
            env!("CARGO_BIN_EXE_mondeploy_remote"),
            port,
        )
    }

    fn basic_config() -> Config {
        Config {
            global: Global {
                fsid: Some("07553bf3-8582-4bb1-8b04-d2b5e4b9ac3b".to_string()),
                ..Default::default()
            },
        }
    }

    fn targets(tokens: &[&str]) -> Vec<MonitorTarget> {
        tokens.iter().map(|t| MonitorTarget::parse(t)).collect()
    }

    /// Provision one monitor on the agent at `bind` so destroy tests have
    /// something to tear down.
    async fn provision(env: &TestEnvironment, cli: &mondeploy_lib::commands::Cli, token: &str) {
        let config = basic_config();
        env.write_local_keyring(&cli.cluster, b"key");
        mon::create_all(cli, &config, &targets(&[token]), b"key", false)
            .await
            .unwrap();
    }

    #[test]
    fn destroy_without_state_is_a_noop() {
        let env = test_env_helper("destroy_noop", 7821);
        let _agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")]);

        let cli = env.cli("ceph");

        let rt = Runtime::new().unwrap();
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::destroy_all(&cli, &targets(&["127.0.0.1:ghost"]))
                .await
                .unwrap();
        }));

        // Nothing to remove means nothing gets run on the host.
        assert!(env.command_log().is_empty());
    }

    #[test]
    fn destroy_removes_membership_then_stops_then_deletes() {
        let env = test_env_helper("destroy_ordering", 7822);
        let agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")]);

        let cli = env.cli("ceph");

        let rt = Runtime::new().unwrap();
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            provision(&env, &cli, "127.0.0.1:alpha").await;
            mon::destroy_all(&cli, &targets(&["127.0.0.1:alpha"]))
                .await
                .unwrap();
        }));
        drop(agents);

        assert!(!env.mon_dir("alpha", "alpha").exists());

        let log = env.command_log();
        let remove = log
            .iter()
            .position(|line| line.starts_with("ceph --cluster=ceph -n mon.alpha"))
            .expect("membership removal should have run");
        assert!(log[remove].ends_with("mon remove alpha"));
        let stop = log
            .iter()
            .position(|line| line == "initctl stop ceph-mon cluster=ceph id=alpha")
            .expect("daemon stop should have run");
        assert!(remove < stop, "membership removal must precede daemon stop");
    }

    #[test]
    fn upstart_stop_failure_is_tolerated() {
        let env = test_env_helper("destroy_upstart_stopped", 7823);
        let cli = env.cli("ceph");
        let rt = Runtime::new().unwrap();

        let agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")]);
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            provision(&env, &cli, "127.0.0.1:alpha").await;
        }));
        drop(agents);

        // Upstart refuses to stop an instance that is not running; that must
        // not fail the decommission.
        let _agents = env.start_agents(
            &[TestAgent::new("127.0.0.1", "alpha").with_env("MONDEPLOY_TEST_FAIL", "initctl")],
        );
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::destroy_all(&cli, &targets(&["127.0.0.1:alpha"]))
                .await
                .unwrap();
        }));

        assert!(!env.mon_dir("alpha", "alpha").exists());
    }

    #[test]
    fn failed_stop_leaves_state_recoverable_for_retry() {
        let env = test_env_helper("destroy_retry", 7824);
        let cli = env.cli("ceph");
        let rt = Runtime::new().unwrap();

        // A sysvinit host: stop failures there are real failures.
        let sysvinit_env = [
            ("MONDEPLOY_TEST_DISTRO", "CentOS"),
            ("MONDEPLOY_TEST_RELEASE", "6.3"),
            ("MONDEPLOY_TEST_CODENAME", "Final"),
        ];
        let mut agent = TestAgent::new("127.0.0.1", "alpha");
        for (key, value) in sysvinit_env {
            agent = agent.with_env(key, value);
        }
        let agents = env.start_agents(&[agent]);
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            provision(&env, &cli, "127.0.0.1:alpha").await;
        }));
        drop(agents);

        let mut failing = TestAgent::new("127.0.0.1", "alpha").with_env("MONDEPLOY_TEST_FAIL", "service");
        for (key, value) in sysvinit_env {
            failing = failing.with_env(key, value);
        }
        let agents = env.start_agents(&[failing]);
        let result = rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::destroy_all(&cli, &targets(&["127.0.0.1:alpha"])).await
        }));
        assert_eq!(
            result.unwrap_err(),
            FleetError {
                verb: "destroy",
                failed: 1
            }
        );
        drop(agents);

        // The monitor is out of the cluster but its daemon and state must
        // survive the failed stop, so a retry can finish the job.
        let mon_dir = env.mon_dir("alpha", "alpha");
        assert!(mon_dir.exists());
        assert!(mon_dir.join("sysvinit").exists());

        let mut retry = TestAgent::new("127.0.0.1", "alpha");
        for (key, value) in sysvinit_env {
            retry = retry.with_env(key, value);
        }
        let _agents = env.start_agents(&[retry]);
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::destroy_all(&cli, &targets(&["127.0.0.1:alpha"]))
                .await
                .unwrap();
        }));

        assert!(!env.mon_dir("alpha", "alpha").exists());
    }
}
