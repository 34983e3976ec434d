use std::{fs::File, io::Read};

use anyhow::{bail, Context};
use configparser::ini::Ini;

use crate::error::Error;

const CONNECTION: &str = "connection";
const RUNTIME: &str = "runtime";
const URL: &str = "url";
const MAX_CONNECTIONS: &str = "max_connections";
const LOG_LEVEL: &str = "log_level";

const DEFAULT_MAX_CONNECTIONS: u32 = 2;
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct ConnectorConfig {
    pub url: String,
    pub max_connections: u32,
    pub log_level: String,
}

impl ConnectorConfig {
    pub fn new(config_file: &str) -> anyhow::Result<Self> {
        let mut config_str = String::new();
        File::open(config_file)
            .with_context(|| format!("failed to open config file: [{}]", config_file))?
            .read_to_string(&mut config_str)?;

        let mut ini = Ini::new();
        if let Err(err) = ini.read(config_str) {
            bail!(Error::ConfigError(format!(
                "failed to read content as ini: {}",
                err
            )));
        }

        let url = match ini.get(CONNECTION, URL) {
            Some(url) if !url.is_empty() => url,
            _ => bail!(Error::ConfigError(format!(
                "config [{}].{} does not exist or is empty",
                CONNECTION, URL
            ))),
        };

        let max_connections = match ini.get(CONNECTION, MAX_CONNECTIONS) {
            Some(value) if !value.is_empty() => match value.parse::<u32>() {
                Ok(parsed) => parsed,
                Err(_) => bail!(Error::ConfigError(format!(
                    "config [{}].{}={}, can not be parsed as u32",
                    CONNECTION, MAX_CONNECTIONS, value
                ))),
            },
            _ => DEFAULT_MAX_CONNECTIONS,
        };

        let log_level = match ini.get(RUNTIME, LOG_LEVEL) {
            Some(value) if !value.is_empty() => value,
            _ => DEFAULT_LOG_LEVEL.to_string(),
        };

        Ok(Self {
            url,
            max_connections,
            log_level,
        })
    }
}

#[cfg(test)]
mod tests {

    use std::{env, fs, path::PathBuf};

    use super::*;

    fn write_config(name: &str, content: &str) -> PathBuf {
        let path = env::temp_dir().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_full_config() {
        let path = write_config(
            "sf_connector_config_full.ini",
            "[connection]\n\
             url=warehouse://account/db\n\
             max_connections=8\n\
             \n\
             [runtime]\n\
             log_level=debug\n",
        );
        let config = ConnectorConfig::new(path.to_str().unwrap()).unwrap();
        assert_eq!(config.url, "warehouse://account/db");
        assert_eq!(config.max_connections, 8);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_load_applies_defaults() {
        let path = write_config(
            "sf_connector_config_defaults.ini",
            "[connection]\nurl=warehouse://account/db\n",
        );
        let config = ConnectorConfig::new(path.to_str().unwrap()).unwrap();
        assert_eq!(config.max_connections, DEFAULT_MAX_CONNECTIONS);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }

    #[test]
    fn test_load_requires_url() {
        let path = write_config("sf_connector_config_no_url.ini", "[connection]\n");
        let result = ConnectorConfig::new(path.to_str().unwrap());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("[connection].url"));
    }

    #[test]
    fn test_load_rejects_bad_max_connections() {
        let path = write_config(
            "sf_connector_config_bad_max.ini",
            "[connection]\nurl=warehouse://account/db\nmax_connections=many\n",
        );
        let result = ConnectorConfig::new(path.to_str().unwrap());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("can not be parsed as u32"));
    }
}
