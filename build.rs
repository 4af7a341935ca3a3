// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

fn main() {
    // Prefer compiling the schema with the capnp executable; fall back to the
    // pre-generated copy in generated/ when the executable is unavailable.
    if let Err(e) = capnpc::CompilerCommand::new().file("mon.capnp").run() {
        let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
        let dest = std::path::Path::new(&out_dir).join("mon_capnp.rs");
        std::fs::copy("generated/mon_capnp.rs", dest).unwrap_or_else(|copy_err| {
            panic!(
                "compiling mon.capnp schema failed ({e}) and copying the \
                 pre-generated fallback also failed ({copy_err})"
            )
        });
        println!("cargo:rerun-if-changed=generated/mon_capnp.rs");
    }
    println!("cargo:rerun-if-changed=mon.capnp");
}
