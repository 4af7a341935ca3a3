// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

//! The per-host agent.
//!
//! `mondeploy_remote` runs on each target host under elevated privilege and
//! serves the fixed operation set from the `MonAgent` schema over capnp RPC.
//! The agent is deliberately single-threaded: operations against one host's
//! state are serialized by construction.

pub mod ops;

use {
    capnp::capability::Promise,
    capnp_rpc::{pry, rpc_twoparty_capnp, twoparty, RpcSystem},
    cidr::{Cidr, IpCidr},
    clap::Parser,
    futures::AsyncReadExt,
    log::{info, warn},
};

use crate::{
    commands::{Handle, HandledResult},
    mon_capnp::mon_agent,
};

use ops::Paths;

#[derive(Parser, Debug, Default)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base directory for monitor state (default /var/lib/ceph).
    #[arg(long)]
    pub state_dir: Option<String>,

    /// Directory for distributed cluster config files (default /etc/ceph).
    #[arg(long)]
    pub conf_dir: Option<String>,

    /// Address to bind the listening socket to (default 0.0.0.0).
    #[arg(long)]
    pub listen: Option<String>,

    #[arg(long)]
    pub mtls: bool,

    #[arg(short, long)]
    pub verbose: bool,
}

struct MonAgentImpl {
    paths: Paths,
}

impl MonAgentImpl {
    fn new(args: &Cli) -> Self {
        let state_dir = args
            .state_dir
            .clone()
            .unwrap_or_else(crate::default_state_dir);
        let conf_dir = args
            .conf_dir
            .clone()
            .unwrap_or_else(crate::default_conf_dir);
        MonAgentImpl {
            paths: Paths::new(&state_dir, &conf_dir),
        }
    }
}

impl mon_agent::Server for MonAgentImpl {
    fn probe(
        &mut self,
        _params: mon_agent::ProbeParams,
        mut results: mon_agent::ProbeResults,
    ) -> Promise<(), capnp::Error> {
        let mut result = results.get().init_result();
        match ops::probe() {
            Ok(info) => {
                info!(
                    "probe: distro {} release {} codename {}",
                    info.distro, info.release, info.codename
                );
                let mut ok = result.init_ok();
                ok.set_distro(info.distro);
                ok.set_release(info.release);
                ok.set_codename(info.codename);
            }
            Err(e) => {
                warn!("probe failed: {e}");
                result.set_err(e.to_string());
            }
        }
        Promise::ok(())
    }

    fn write_config(
        &mut self,
        params: mon_agent::WriteConfigParams,
        mut results: mon_agent::WriteConfigResults,
    ) -> Promise<(), capnp::Error> {
        let p = pry!(params.get());
        let cluster = pry!(pry!(p.get_cluster()).to_str()).to_string();
        let conf = pry!(p.get_conf()).to_vec();
        let overwrite = p.get_overwrite();

        info!("writing config for cluster '{cluster}'");
        let mut result = results.get().init_result();
        match ops::write_config(&self.paths, &cluster, &conf, overwrite) {
            Ok(()) => result.set_ok(()),
            Err(e) => {
                warn!("writing config for cluster '{cluster}' failed: {e}");
                result.set_err(e.to_string());
            }
        }
        Promise::ok(())
    }

    fn create_mon(
        &mut self,
        params: mon_agent::CreateMonParams,
        mut results: mon_agent::CreateMonResults,
    ) -> Promise<(), capnp::Error> {
        let p = pry!(params.get());
        let cluster = pry!(pry!(p.get_cluster()).to_str()).to_string();
        let name = pry!(pry!(p.get_name()).to_str()).to_string();
        let keyring = pry!(p.get_keyring()).to_vec();
        let init = pry!(p.get_init());

        info!("creating mon.{name} for cluster '{cluster}'");
        let mut result = results.get().init_result();
        match ops::create_mon(&self.paths, &cluster, &name, &keyring, init.into()) {
            Ok(()) => result.set_ok(()),
            Err(e) => {
                warn!("creating mon.{name} failed: {e}");
                result.set_err(e.to_string());
            }
        }
        Promise::ok(())
    }

    fn destroy_mon(
        &mut self,
        params: mon_agent::DestroyMonParams,
        mut results: mon_agent::DestroyMonResults,
    ) -> Promise<(), capnp::Error> {
        let p = pry!(params.get());
        let cluster = pry!(pry!(p.get_cluster()).to_str()).to_string();
        let name = pry!(pry!(p.get_name()).to_str()).to_string();

        info!("destroying mon.{name} for cluster '{cluster}'");
        let mut result = results.get().init_result();
        match ops::destroy_mon(&self.paths, &cluster, &name) {
            Ok(()) => result.set_ok(()),
            Err(e) => {
                warn!("destroying mon.{name} failed: {e}");
                result.set_err(e.to_string());
            }
        }
        Promise::ok(())
    }
}

/// Main entrypoint for the remote agent: bind, then serve RPC connections
/// from the orchestrating CLI until killed.
pub fn agent_main(args: Cli) -> HandledResult<()> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .handle_err(|e| eprintln!("Could not launch agent runtime: {e}"))?;

    rt.block_on(tokio::task::LocalSet::new().run_until(serve(args)))
}

async fn serve(args: Cli) -> HandledResult<()> {
    let bind = match &args.listen {
        Some(addr) => addr.clone(),
        None => "0.0.0.0".to_string(),
    };
    let addr = format!("{bind}:{}", crate::remote_port());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .handle_err(|e| eprintln!("could not bind to '{addr}': {e}"))?;

    let allowed: IpCidr = crate::default_network()
        .parse()
        .handle_err(|e| eprintln!("could not parse allowed network: {e}"))?;

    let acceptor = if args.mtls {
        Some(crate::tls::get_acceptor())
    } else {
        None
    };

    let client: mon_agent::Client = capnp_rpc::new_client(MonAgentImpl::new(&args));

    info!("listening on {addr}");

    loop {
        let (stream, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                warn!("accept failed: {e}");
                continue;
            }
        };

        if !allowed.contains(&peer.ip()) {
            warn!("rejecting connection from {peer}: outside allowed network");
            continue;
        }

        stream.set_nodelay(true).expect("setting nodelay failed.");

        match &acceptor {
            Some(acceptor) => match acceptor.accept(stream).await {
                Ok(tls_stream) => spawn_rpc(tls_stream, client.clone()),
                Err(e) => warn!("TLS handshake with {peer} failed: {e}"),
            },
            None => spawn_rpc(stream, client.clone()),
        }
    }
}

fn spawn_rpc<S: tokio::io::AsyncRead + tokio::io::AsyncWrite + 'static>(
    stream: S,
    client: mon_agent::Client,
) {
    let (reader, writer) = tokio_util::compat::TokioAsyncReadCompatExt::compat(stream).split();
    let network = twoparty::VatNetwork::new(
        futures::io::BufReader::new(reader),
        futures::io::BufWriter::new(writer),
        rpc_twoparty_capnp::Side::Server,
        Default::default(),
    );
    let rpc_system = RpcSystem::new(Box::new(network), Some(client.client));
    tokio::task::spawn_local(rpc_system);
}
