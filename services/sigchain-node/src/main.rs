//! Sigchain node: serves device and transaction requests as JSON lines.
//!
//! Each line on stdin is one request (see `sigchain_device::api`); each
//! response is written as one line on stdout. Logs go to stderr.

use anyhow::{bail, Context};
use serde::Serialize;
use sigchain_core::{logging, Config};
use sigchain_crypto::AlgorithmRegistry;
use sigchain_device::{handle_json, DeviceRegistry, SecretExposure};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

const NODE_PROTOCOL_VERSION: u32 = 1;

#[derive(Debug, Serialize)]
struct NodeVersionHandshake {
    version: &'static str,
    protocol_version: u32,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--version-json") {
        let handshake = NodeVersionHandshake {
            version: env!("CARGO_PKG_VERSION"),
            protocol_version: NODE_PROTOCOL_VERSION,
        };
        println!("{}", serde_json::to_string(&handshake)?);
        return Ok(());
    }

    let config = match parse_config_path(&args)? {
        Some(path) => Config::from_file(&path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    logging::init_from_config(&config.logging);

    let registry = DeviceRegistry::new(AlgorithmRegistry::new(config.registry.rsa_modulus_bits));
    let exposure = SecretExposure::from(config.registry.expose_private_keys);

    tracing::info!(
        rsa_modulus_bits = config.registry.rsa_modulus_bits,
        expose_private_keys = config.registry.expose_private_keys,
        "sigchain-node started"
    );
    if exposure == SecretExposure::Include {
        tracing::warn!("Private keys will be included in device responses");
    }

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        let response = handle_json(&registry, &line, exposure);
        serde_json::to_writer(&mut stdout, &response)?;
        stdout.write_all(b"\n")?;
        stdout.flush()?;
    }

    tracing::info!("stdin closed, shutting down");
    Ok(())
}

fn parse_config_path(args: &[String]) -> anyhow::Result<Option<PathBuf>> {
    let mut args_iter = args.iter();
    while let Some(arg) = args_iter.next() {
        if arg == "--config" {
            if let Some(path) = args_iter.next() {
                return Ok(Some(PathBuf::from(path)));
            }
            bail!("--config was provided without a path");
        }
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_config_path_is_optional() {
        assert_eq!(parse_config_path(&args(&["sigchain-node"])).unwrap(), None);
    }

    #[test]
    fn test_config_path_is_parsed() {
        let parsed = parse_config_path(&args(&["sigchain-node", "--config", "node.toml"])).unwrap();
        assert_eq!(parsed, Some(PathBuf::from("node.toml")));
    }

    #[test]
    fn test_config_flag_requires_path() {
        assert!(parse_config_path(&args(&["sigchain-node", "--config"])).is_err());
    }
}
