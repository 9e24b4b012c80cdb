use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow, bail, ensure};
use config::{Config, ConfigError, File};
use serde::Deserialize;

use roster::app_dirs;
use roster::search::{CaseSensitivity, MatchOptions};

use crate::cli::CliArgs;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
    roster: RosterSection,
    search: SearchSection,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct RosterSection {
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct SearchSection {
    case_sensitive: Option<bool>,
    limit: Option<usize>,
}

#[derive(Debug)]
pub(crate) struct ResolvedConfig {
    pub(crate) roster_path: PathBuf,
    pub(crate) options: MatchOptions,
}

impl ResolvedConfig {
    pub(crate) fn print_summary(&self) {
        println!("Effective configuration:");
        println!("  Roster file: {}", self.roster_path.display());
        println!(
            "  Case sensitive: {}",
            bool_to_word(self.options.case == CaseSensitivity::Sensitive)
        );
        match self.options.limit {
            Some(limit) => println!("  Result limit: {limit}"),
            None => println!("  Result limit: unlimited"),
        }
    }
}

pub(crate) fn load(cli: &CliArgs) -> Result<ResolvedConfig> {
    let builder = build_config(cli)?;
    let mut raw: RawConfig = builder
        .try_deserialize()
        .map_err(|err| anyhow!("failed to deserialize configuration: {err}"))?;
    raw.apply_cli_overrides(cli);
    raw.resolve()
}

fn build_config(cli: &CliArgs) -> Result<Config> {
    let mut builder = Config::builder();

    if !cli.no_config {
        for path in default_config_files() {
            builder = builder.add_source(File::from(path).required(false));
        }
    }

    for path in &cli.config {
        builder = builder.add_source(File::from(path.clone()).required(true));
    }

    builder = builder.add_source(
        config::Environment::with_prefix("roster")
            .separator("__")
            .try_parsing(true),
    );

    builder.build().map_err(|err| match err {
        ConfigError::Frozen => anyhow!("configuration builder is frozen"),
        other => other.into(),
    })
}

fn default_config_files() -> Vec<PathBuf> {
    let mut files = Vec::new();

    if let Ok(dir) = app_dirs::get_config_dir() {
        files.push(dir.join("config.toml"));
    }

    if let Ok(current_dir) = env::current_dir() {
        files.push(current_dir.join(".roster.toml"));
        files.push(current_dir.join("roster.toml"));
    }

    files
}

impl RawConfig {
    fn apply_cli_overrides(&mut self, cli: &CliArgs) {
        if let Some(path) = cli.roster.clone() {
            self.roster.path = Some(path);
        }
        if let Some(value) = cli.case_sensitive {
            self.search.case_sensitive = Some(value);
        }
        if let Some(value) = cli.limit {
            self.search.limit = Some(value);
        }
    }

    fn resolve(self) -> Result<ResolvedConfig> {
        let Some(mut roster_path) = self.roster.path else {
            bail!("no roster file configured; pass --roster, set ROSTER_FILE, or add roster.path to a config file");
        };

        if roster_path.is_relative() {
            roster_path = env::current_dir()
                .context("failed to resolve current directory for the roster file")?
                .join(roster_path);
        }
        roster_path = fs::canonicalize(&roster_path).with_context(|| {
            format!("failed to canonicalize roster file {}", roster_path.display())
        })?;

        let metadata = fs::metadata(&roster_path)
            .with_context(|| format!("failed to inspect roster file {}", roster_path.display()))?;
        ensure!(metadata.is_file(), "roster path must be a regular file");

        if let Some(limit) = self.search.limit {
            ensure!(limit > 0, "limit must be greater than zero");
        }

        let case = match self.search.case_sensitive.unwrap_or(false) {
            true => CaseSensitivity::Sensitive,
            false => CaseSensitivity::Insensitive,
        };
        let mut options = MatchOptions::new().with_case(case);
        if let Some(limit) = self.search.limit {
            options = options.with_limit(limit);
        }

        Ok(ResolvedConfig {
            roster_path,
            options,
        })
    }
}

fn bool_to_word(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
