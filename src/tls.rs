// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

//! Mutual-TLS setup for the CLI/agent connection.
//!
//! Both sides authenticate against the same CA: the agent presents the server
//! certificate and requires a client certificate, so only operators holding a
//! CA-signed client cert can drive the agent. Certificate locations come from
//! the `MONDEPLOY_*_CERT`/`_KEY` defaults in the crate root.

use std::{fs::File, io::BufReader, sync::Arc};

use rustls::pki_types::{CertificateDer, PrivateKeyDer};
use rustls::server::WebPkiClientVerifier;
use rustls::RootCertStore;
use tokio_rustls::{TlsAcceptor, TlsConnector};

fn load_certs(path: &str) -> Vec<CertificateDer<'static>> {
    let file = File::open(path).unwrap_or_else(|e| panic!("could not open cert '{path}': {e}"));
    rustls_pemfile::certs(&mut BufReader::new(file))
        .collect::<Result<Vec<_>, _>>()
        .unwrap_or_else(|e| panic!("could not parse certs from '{path}': {e}"))
}

fn load_key(path: &str) -> PrivateKeyDer<'static> {
    let file = File::open(path).unwrap_or_else(|e| panic!("could not open key '{path}': {e}"));
    rustls_pemfile::private_key(&mut BufReader::new(file))
        .unwrap_or_else(|e| panic!("could not parse key from '{path}': {e}"))
        .unwrap_or_else(|| panic!("no private key found in '{path}'"))
}

fn ca_roots() -> RootCertStore {
    let mut roots = RootCertStore::empty();
    for cert in load_certs(&crate::default_ca_cert()) {
        roots.add(cert).expect("could not add CA cert to root store");
    }
    roots
}

/// Build the client-side connector used by the CLI when `--mtls` is given.
pub fn get_connector() -> TlsConnector {
    let config = rustls::ClientConfig::builder()
        .with_root_certificates(ca_roots())
        .with_client_auth_cert(
            load_certs(&crate::default_client_cert()),
            load_key(&crate::default_client_key()),
        )
        .expect("could not build TLS client config");

    TlsConnector::from(Arc::new(config))
}

/// Build the server-side acceptor used by the agent when `--mtls` is given.
pub fn get_acceptor() -> TlsAcceptor {
    let verifier = WebPkiClientVerifier::builder(Arc::new(ca_roots()))
        .build()
        .expect("could not build client cert verifier");

    let config = rustls::ServerConfig::builder()
        .with_client_cert_verifier(verifier)
        .with_single_cert(
            load_certs(&crate::default_server_cert()),
            load_key(&crate::default_server_key()),
        )
        .expect("could not build TLS server config");

    TlsAcceptor::from(Arc::new(config))
}
