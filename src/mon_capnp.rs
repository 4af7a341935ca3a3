// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use std::{env, fmt, io};

use {futures::AsyncReadExt, rustls::pki_types::ServerName};

use crate::{remote::ops::HostInfo, tls::get_connector};

use capnp_rpc::{rpc_twoparty_capnp, twoparty, RpcSystem};

include!(concat!(env!("OUT_DIR"), "/mon_capnp.rs"));

/// A failure while performing one remote operation against a host's agent.
#[derive(Debug)]
pub enum AgentError {
    /// An IO error occurred while trying to connect/send/receive.
    Io(io::Error),

    /// An error occurred in the RPC protocol.
    Rpc(capnp::Error),

    /// The agent attempted the operation and it failed on the remote side.
    /// The text is the agent's description of what went wrong.
    Remote(String),

    /// The per-host deadline expired before the host's operations finished.
    TimedOut,
}

impl fmt::Display for AgentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgentError::Io(e) => write!(f, "connection error: {e}"),
            AgentError::Rpc(e) => write!(f, "rpc error: {e}"),
            AgentError::Remote(msg) => write!(f, "remote error: {msg}"),
            AgentError::TimedOut => write!(f, "timed out"),
        }
    }
}

impl From<io::Error> for AgentError {
    fn from(e: io::Error) -> Self {
        AgentError::Io(e)
    }
}

impl From<capnp::Error> for AgentError {
    fn from(e: capnp::Error) -> Self {
        AgentError::Rpc(e)
    }
}

impl From<capnp::NotInSchema> for AgentError {
    fn from(e: capnp::NotInSchema) -> Self {
        AgentError::Rpc(e.into())
    }
}

impl From<std::str::Utf8Error> for AgentError {
    fn from(e: std::str::Utf8Error) -> Self {
        AgentError::Rpc(e.into())
    }
}

/// Create a capnp RPC client connected to the agent at `address`.
///
/// The RPC system driving the connection is spawned onto the current
/// `LocalSet`, so this must be called from within one.
pub async fn get_client(address: &str, mtls: bool) -> io::Result<mon_agent::Client> {
    let stream = tokio::net::TcpStream::connect(address).await?;
    stream.set_nodelay(true).expect("setting nodelay failed.");

    if mtls {
        let connector = get_connector();

        // Set domain/hostname of the agent we intend to connect to
        let domain = ServerName::try_from(
            env::var("MONDEPLOY_SERVER_DOMAIN_NAME")
                .expect("MONDEPLOY_SERVER_DOMAIN_NAME not set."),
        )
        .unwrap();

        let mtls_stream = connector.connect(domain, stream).await?;

        Ok(new_rpc_client(mtls_stream))
    } else {
        Ok(new_rpc_client(stream))
    }
}

fn new_rpc_client<S: tokio::io::AsyncRead + tokio::io::AsyncWrite + 'static>(
    stream: S,
) -> mon_agent::Client {
    let (reader, writer) = tokio_util::compat::TokioAsyncReadCompatExt::compat(stream).split();
    let rpc_network = Box::new(twoparty::VatNetwork::new(
        futures::io::BufReader::new(reader),
        futures::io::BufWriter::new(writer),
        rpc_twoparty_capnp::Side::Client,
        Default::default(),
    ));
    let mut rpc_system = RpcSystem::new(rpc_network, None);
    let client: mon_agent::Client = rpc_system.bootstrap(rpc_twoparty_capnp::Side::Server);

    tokio::task::spawn_local(rpc_system);

    client
}

/// Ask the agent to classify its host's distribution.
pub async fn probe(client: &mon_agent::Client) -> Result<HostInfo, AgentError> {
    let request = client.probe_request();
    let reply = request.send().promise.await?;
    let result = reply.get()?.get_result()?;

    match result.which()? {
        probe_result::Ok(info) => {
            let info = info?;
            Ok(HostInfo {
                distro: info.get_distro()?.to_str()?.to_string(),
                release: info.get_release()?.to_str()?.to_string(),
                codename: info.get_codename()?.to_str()?.to_string(),
            })
        }
        probe_result::Err(e) => Err(AgentError::Remote(e?.to_str()?.to_string())),
    }
}

/// Ask the agent to write the cluster config to its canonical path.
pub async fn write_config(
    client: &mon_agent::Client,
    cluster: &str,
    conf: &[u8],
    overwrite: bool,
) -> Result<(), AgentError> {
    let mut request = client.write_config_request();
    {
        let mut params = request.get();
        params.set_cluster(cluster);
        params.set_conf(conf);
        params.set_overwrite(overwrite);
    }

    let reply = request.send().promise.await?;
    check_op_result(reply.get()?.get_result()?)
}

/// Ask the agent to bootstrap and start a monitor.
pub async fn create_mon(
    client: &mon_agent::Client,
    cluster: &str,
    name: &str,
    keyring: &[u8],
    init: crate::init::InitKind,
) -> Result<(), AgentError> {
    let mut request = client.create_mon_request();
    {
        let mut params = request.get();
        params.set_cluster(cluster);
        params.set_name(name);
        params.set_keyring(keyring);
        params.set_init(init.into());
    }

    let reply = request.send().promise.await?;
    check_op_result(reply.get()?.get_result()?)
}

/// Ask the agent to decommission a monitor.
pub async fn destroy_mon(
    client: &mon_agent::Client,
    cluster: &str,
    name: &str,
) -> Result<(), AgentError> {
    let mut request = client.destroy_mon_request();
    {
        let mut params = request.get();
        params.set_cluster(cluster);
        params.set_name(name);
    }

    let reply = request.send().promise.await?;
    check_op_result(reply.get()?.get_result()?)
}

fn check_op_result(result: op_result::Reader) -> Result<(), AgentError> {
    match result.which()? {
        op_result::Ok(()) => Ok(()),
        op_result::Err(e) => Err(AgentError::Remote(e?.to_str()?.to_string())),
    }
}
