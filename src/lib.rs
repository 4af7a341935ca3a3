// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

pub mod commands;
pub mod config;
pub mod init;
pub mod mon_capnp;
pub mod remote;
pub mod test_env;
pub mod tls;

/// The default log filter for a binary. `--verbose` raises it to `debug`, so
/// the per-host detail in the command modules reaches stderr. An explicit
/// `MONDEPLOY_LOG` still overrides whatever this returns.
pub fn log_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Gets the port that the remote agent should be listening on.
pub fn remote_port() -> u16 {
    match std::env::var("MONDEPLOY_PORT") {
        Ok(port) => port
            .parse::<u16>()
            .expect("MONDEPLOY_PORT must be a valid port number"),
        Err(_) => 7480,
    }
}

/// Base directory for monitor state on a host. Monitor directories live under
/// `{state_dir}/mon/` and transient bootstrap keyrings under `{state_dir}/tmp/`.
pub fn default_state_dir() -> String {
    match std::env::var("MONDEPLOY_STATE_DIR") {
        Ok(dir) => dir,
        Err(_) => "/var/lib/ceph".to_string(),
    }
}

/// Directory that holds the distributed cluster config file on a host.
pub fn default_conf_dir() -> String {
    match std::env::var("MONDEPLOY_CONF_DIR") {
        Ok(dir) => dir,
        Err(_) => "/etc/ceph".to_string(),
    }
}

pub fn default_server_cert() -> String {
    match std::env::var("MONDEPLOY_SERVER_CERT") {
        Ok(cert) => cert,
        Err(_) => "/etc/mondeploy/server.crt".to_string(),
    }
}

pub fn default_server_key() -> String {
    match std::env::var("MONDEPLOY_SERVER_KEY") {
        Ok(key) => key,
        Err(_) => "/etc/mondeploy/server.key".to_string(),
    }
}

pub fn default_client_cert() -> String {
    match std::env::var("MONDEPLOY_CLIENT_CERT") {
        Ok(cert) => cert,
        Err(_) => "/etc/mondeploy/client.crt".to_string(),
    }
}

pub fn default_client_key() -> String {
    match std::env::var("MONDEPLOY_CLIENT_KEY") {
        Ok(key) => key,
        Err(_) => "/etc/mondeploy/client.key".to_string(),
    }
}

pub fn default_ca_cert() -> String {
    match std::env::var("MONDEPLOY_CA_CERT") {
        Ok(cert) => cert,
        Err(_) => "/etc/mondeploy/ca.crt".to_string(),
    }
}

/// The network from which the remote agent accepts connections.
pub fn default_network() -> String {
    match std::env::var("MONDEPLOY_NET") {
        Ok(net) => net,
        Err(_) => "192.168.1.0/24".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_raises_the_log_filter() {
        assert_eq!(log_level(false), "warn");
        assert_eq!(log_level(true), "debug");
    }
}
