// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::{Context, Result};
use figment::{
    providers::{Env, Format, Serialized, Yaml},
    Figment,
};
use numutils_sort::SortOption;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when `--config` is not given.
pub const DEFAULT_CONFIG_NAME: &str = "numutils.yaml";

/// Prefix of environment variables that override file values, eg. `NUMUTILS_SORT_BY=max`.
pub const ENV_PREFIX: &str = "NUMUTILS_";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// Log level used when no `-v`/`-q` flag is given, eg. "info"
    pub log_level: Option<String>,
    /// Row feature used by `sort` when `--by` is omitted
    pub sort_by: SortOption,
    /// Sort rows in descending order by default
    pub descending: bool,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            log_level: None,
            sort_by: SortOption::RowElementsSum,
            descending: false,
        }
    }
}

/// Load the config at `config_file`, or `numutils.yaml` in the current directory if it
/// exists. Environment variables are merged last.
pub fn load_config(config_file: Option<&Path>) -> Result<CliConfig> {
    let mut figment = Figment::from(Serialized::defaults(CliConfig::default()));

    if let Some(path) = resolve_config_path(config_file)? {
        figment = figment.merge(Yaml::file(path));
    }

    figment
        .merge(Env::prefixed(ENV_PREFIX))
        .extract()
        .context("Could not parse configuration")
}

fn resolve_config_path(config_file: Option<&Path>) -> Result<Option<PathBuf>> {
    match config_file {
        Some(path) if path.is_file() => Ok(Some(path.to_path_buf())),
        Some(path) => Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("config file {} does not exist", path.display()),
        ))
        .context("Configuration file not found"),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_NAME);
            Ok(default.is_file().then_some(default))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use figment::Jail;

    #[test]
    fn test_defaults() {
        Jail::expect_with(|_jail| {
            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config, CliConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_default_file_in_working_directory() {
        Jail::expect_with(|jail| {
            jail.create_file(
                DEFAULT_CONFIG_NAME,
                r#"
log_level: "debug"
sort_by: "max"
descending: true
"#,
            )?;

            let config = load_config(None).map_err(|e| e.to_string())?;
            assert_eq!(config.log_level.as_deref(), Some("debug"));
            assert_eq!(config.sort_by, SortOption::RowMaximumElements);
            assert!(config.descending);
            Ok(())
        });
    }

    #[test]
    fn test_env_overrides_file() {
        Jail::expect_with(|jail| {
            jail.create_file("custom.yaml", "sort_by: \"max\"\n")?;
            jail.set_env("NUMUTILS_SORT_BY", "min");

            let config =
                load_config(Some(Path::new("custom.yaml"))).map_err(|e| e.to_string())?;
            assert_eq!(config.sort_by, SortOption::RowMinimumElements);
            assert!(!config.descending);
            Ok(())
        });
    }

    #[test]
    fn test_unknown_field_rejected() {
        Jail::expect_with(|jail| {
            jail.create_file(DEFAULT_CONFIG_NAME, "colour: \"blue\"\n")?;
            assert!(load_config(None).is_err());
            Ok(())
        });
    }

    #[test]
    fn test_file_not_found() -> Result<()> {
        let Err(err) = load_config(Some(Path::new("/nope/numutils.yaml"))) else {
            bail!("error expected");
        };
        let Some(e) = err.downcast_ref::<io::Error>() else {
            bail!("io error expected");
        };

        assert_eq!(e.kind(), io::ErrorKind::NotFound);

        Ok(())
    }
}
