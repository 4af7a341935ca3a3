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

    /// Create a TestEnvironment for a test.
    ///
    /// The path to the agent binary needs to be determined here and passed into the
    /// TestEnvironment constructor because the environment variable is only defined when
    /// compiling tests.
    fn test_env_helper(test_id: &str, port: u16) -> TestEnvironment {
        TestEnvironment::new(
            test_id.to_string(),
            env!("CARGO_BIN_EXE_mondeploy_remote"),
            port,
        )
    }

    fn basic_config(members: Option<&str>) -> Config {
        Config {
            global: Global {
                fsid: Some("07553bf3-8582-4bb1-8b04-d2b5e4b9ac3b".to_string()),
                mon_initial_members: members.map(|m| m.to_string()),
                ..Default::default()
            },
        }
    }

    fn targets(tokens: &[&str]) -> Vec<MonitorTarget> {
        tokens.iter().map(|t| MonitorTarget::parse(t)).collect()
    }

    #[test]
    fn create_is_idempotent() {
        let env = test_env_helper("create_idempotent", 7811);
        let _agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")]);

        let config = basic_config(None);
        env.write_local_config("ceph", &config);
        env.write_local_keyring("ceph", b"[mon.]\nkey = secret\n");
        let cli = env.cli("ceph");

        let targets = targets(&["127.0.0.1:alpha"]);

        let rt = Runtime::new().unwrap();
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::create_all(&cli, &config, &targets, b"[mon.]\nkey = secret\n", false)
                .await
                .unwrap();

            let mon_dir = env.mon_dir("alpha", "alpha");
            assert!(mon_dir.join("done").exists());
            assert!(mon_dir.join("upstart").exists());
            assert!(env.remote_conf_path("alpha", "ceph").exists());
            // The bootstrap keyring must not outlive the mkfs call.
            assert!(!env.tmp_keyring("alpha", "ceph", "alpha").exists());

            // A second run must skip the bootstrap entirely and only
            // re-dispatch the (idempotent) start.
            mon::create_all(&cli, &config, &targets, b"[mon.]\nkey = secret\n", false)
                .await
                .unwrap();
        }));

        assert_eq!(env.count_commands("ceph-mon --cluster ceph --mkfs -i alpha"), 1);
        assert_eq!(
            env.count_commands("initctl emit ceph-mon cluster=ceph id=alpha"),
            2
        );
    }

    #[test]
    fn sysvinit_host_is_started_by_service_name() {
        let env = test_env_helper("create_sysvinit", 7812);
        let _agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")
            .with_env("MONDEPLOY_TEST_DISTRO", "CentOS")
            .with_env("MONDEPLOY_TEST_RELEASE", "6.3")
            .with_env("MONDEPLOY_TEST_CODENAME", "Final")]);

        let config = basic_config(None);
        env.write_local_config("main", &config);
        env.write_local_keyring("main", b"key");
        let cli = env.cli("main");

        let rt = Runtime::new().unwrap();
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::create_all(&cli, &config, &targets(&["127.0.0.1:alpha"]), b"key", false)
                .await
                .unwrap();
        }));

        assert!(env.mon_dir("alpha", "alpha").join("sysvinit").exists());
        assert_eq!(env.count_commands("service ceph start mon.alpha"), 1);
        assert_eq!(env.count_commands("initctl"), 0);
    }

    #[test]
    fn fleet_continues_past_a_failing_host() {
        let env = test_env_helper("create_partial_failure", 7813);
        let _agents = env.start_agents(&[
            TestAgent::new("127.0.0.1", "a"),
            // The middle host's probe fails; the other two must still be
            // provisioned.
            TestAgent::new("127.0.0.2", "b").with_env("MONDEPLOY_TEST_FAIL", "lsb_release"),
            TestAgent::new("127.0.0.3", "c"),
        ]);

        let config = basic_config(None);
        env.write_local_config("ceph", &config);
        env.write_local_keyring("ceph", b"key");
        let cli = env.cli("ceph");

        let rt = Runtime::new().unwrap();
        let result = rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::create_all(
                &cli,
                &config,
                &targets(&["127.0.0.1:a", "127.0.0.2:b", "127.0.0.3:c"]),
                b"key",
                false,
            )
            .await
        }));

        assert_eq!(
            result.unwrap_err(),
            FleetError {
                verb: "create",
                failed: 1
            }
        );
        assert!(env.mon_dir("a", "a").join("done").exists());
        assert!(!env.mon_dir("b", "b").exists());
        assert!(env.mon_dir("c", "c").join("done").exists());
    }

    #[test]
    fn stalled_host_times_out_without_aborting_the_fleet() {
        let env = test_env_helper("create_timeout", 7817);
        let _agents = env.start_agents(&[
            // The first host's mkfs hangs well past the deadline; the second
            // must still be provisioned.
            TestAgent::new("127.0.0.1", "a").with_env("MONDEPLOY_TEST_SLEEP", "30"),
            TestAgent::new("127.0.0.2", "b"),
        ]);

        let config = basic_config(None);
        env.write_local_config("ceph", &config);
        env.write_local_keyring("ceph", b"key");
        let mut cli = env.cli("ceph");
        cli.timeout = Some(1);

        let rt = Runtime::new().unwrap();
        let result = rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::create_all(
                &cli,
                &config,
                &targets(&["127.0.0.1:a", "127.0.0.2:b"]),
                b"key",
                false,
            )
            .await
        }));

        assert_eq!(
            result.unwrap_err(),
            FleetError {
                verb: "create",
                failed: 1
            }
        );
        assert!(!env.mon_dir("a", "a").join("done").exists());
        assert!(env.mon_dir("b", "b").join("done").exists());
    }

    #[test]
    fn missing_keyring_aborts_before_any_remote_work() {
        let env = test_env_helper("create_no_keyring", 7814);
        // No agents: the precondition must fail before any connection is
        // attempted, so none are needed.

        env.write_local_config("ceph", &basic_config(Some("127.0.0.1:alpha")));
        let cli = env.cli("ceph");

        let args = mon::CreateArgs {
            mon: vec![],
            overwrite_conf: false,
        };

        let rt = Runtime::new().unwrap();
        let result = rt.block_on(
            tokio::task::LocalSet::new().run_until(async { mon::create(&cli, &args).await }),
        );

        assert!(result.is_err());
        assert!(env.command_log().is_empty());
    }

    #[test]
    fn no_hosts_anywhere_is_a_precondition_error() {
        let env = test_env_helper("create_no_hosts", 7815);

        env.write_local_config("ceph", &basic_config(None));
        env.write_local_keyring("ceph", b"key");
        let cli = env.cli("ceph");

        let args = mon::CreateArgs {
            mon: vec![],
            overwrite_conf: false,
        };

        let rt = Runtime::new().unwrap();
        let result = rt.block_on(
            tokio::task::LocalSet::new().run_until(async { mon::create(&cli, &args).await }),
        );

        assert!(result.is_err());
        assert!(env.command_log().is_empty());
    }

    #[test]
    fn differing_remote_config_requires_overwrite() {
        let env = test_env_helper("create_overwrite_conf", 7816);
        let _agents = env.start_agents(&[TestAgent::new("127.0.0.1", "alpha")]);

        let config = basic_config(None);
        env.write_local_config("ceph", &config);
        env.write_local_keyring("ceph", b"key");
        let cli = env.cli("ceph");
        let targets = targets(&["127.0.0.1:alpha"]);

        let rt = Runtime::new().unwrap();
        rt.block_on(tokio::task::LocalSet::new().run_until(async {
            mon::create_all(&cli, &config, &targets, b"key", false)
                .await
                .unwrap();

            // The operator edits the config; redistributing without
            // --overwrite-conf must fail the host rather than clobber it.
            let changed = Config {
                global: Global {
                    fsid: Some("11111111-2222-3333-4444-555555555555".to_string()),
                    ..Default::default()
                },
            };
            let result = mon::create_all(&cli, &changed, &targets, b"key", false).await;
            assert_eq!(
                result.unwrap_err(),
                FleetError {
                    verb: "create",
                    failed: 1
                }
            );

            mon::create_all(&cli, &changed, &targets, b"key", true)
                .await
                .unwrap();

            let remote = std::fs::read_to_string(env.remote_conf_path("alpha", "ceph")).unwrap();
            assert!(remote.contains("11111111-2222-3333-4444-555555555555"));
        }));
    }
}
