// SPDX-License-Identifier: MIT
// Copyright 2025. Triad National Security, LLC.

use serde::{Deserialize, Serialize};

/// Config is the model for a cluster's configuration file. The local file
/// `{cluster}.conf` is deserialized into a Config object, and the same object
/// is serialized back to its canonical textual form when it is distributed to
/// the remote hosts.
///
/// Only the settings this tool reads are modeled as typed fields; everything
/// else in the global section is carried through untouched so that a
/// round-trip does not drop operator-provided settings.
#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Config {
    pub global: Global,
}

#[derive(Serialize, Deserialize, Debug, Default)]
pub struct Global {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fsid: Option<String>,

    /// Comma- or whitespace-separated list of the monitors that form the
    /// initial quorum. Used as the target-host fallback when the operator
    /// does not name hosts on the command line.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon_initial_members: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mon_host: Option<String>,

    #[serde(flatten)]
    pub extras: std::collections::BTreeMap<String, toml::Value>,
}

impl Config {
    /// Load a Config from a TOML file on the local filesystem.
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let text = std::fs::read_to_string(path)
            .inspect_err(|e| eprintln!("Could not open config file \"{path}\": {e}"))?;
        let config = toml::from_str(&text)
            .inspect_err(|e| eprintln!("Could not parse config file \"{path}\": {e}"))?;
        Ok(config)
    }

    /// The canonical textual form of the config, as written to remote hosts.
    pub fn to_text(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// The monitor list from `mon_initial_members`, split on commas and
    /// whitespace. Empty when the setting is absent.
    pub fn mon_initial_members(&self) -> Vec<String> {
        match &self.global.mon_initial_members {
            Some(members) => members
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|s| !s.is_empty())
                .map(|s| s.to_string())
                .collect(),
            None => Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn members_split_on_commas_and_whitespace() {
        let config = Config {
            global: Global {
                mon_initial_members: Some("alpha, beta\tgamma  delta".to_string()),
                ..Default::default()
            },
        };
        assert_eq!(
            config.mon_initial_members(),
            vec!["alpha", "beta", "gamma", "delta"]
        );
    }

    #[test]
    fn members_absent_is_empty() {
        let config = Config::default();
        assert!(config.mon_initial_members().is_empty());
    }

    #[test]
    fn malformed_config_file_is_an_error() {
        let path = std::env::temp_dir().join("mondeploy-config-malformed.conf");
        std::fs::write(&path, "[global\nfsid =").unwrap();

        assert!(Config::load(&path.display().to_string()).is_err());

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn canonical_text_round_trips() {
        let config = Config {
            global: Global {
                fsid: Some("07553bf3-8582-4bb1-8b04-d2b5e4b9ac3b".to_string()),
                mon_initial_members: Some("alpha,beta".to_string()),
                mon_host: Some("10.0.0.1,10.0.0.2".to_string()),
                ..Default::default()
            },
        };

        let text = config.to_text().unwrap();
        assert!(text.contains("[global]"));

        let parsed: Config = toml::from_str(&text).unwrap();
        assert_eq!(parsed.mon_initial_members(), vec!["alpha", "beta"]);
        assert_eq!(parsed.global.fsid, config.global.fsid);
    }
}
