//! Config command - inspect and edit the JSON configuration file.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Subcommand};
use console::style;
use serde_json::Value;

use ktp_core::KtpConfig;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand)]
enum ConfigCommand {
    /// Show the effective configuration
    Show,

    /// Write a configuration file with default values
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },

    /// Print one configuration value
    Get {
        /// Dotted key, e.g. "extraction.document_type"
        key: String,
    },

    /// Change one configuration value
    Set {
        /// Dotted key, e.g. "extraction.strategy"
        key: String,
        /// New value (JSON literal or plain string)
        value: String,
    },

    /// Show the configuration file path
    Path,
}

pub fn run(args: ConfigArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let path = config_path
        .map(PathBuf::from)
        .unwrap_or_else(default_config_path);

    match args.command {
        ConfigCommand::Show => {
            let config = load_or_default(&path)?;
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
        ConfigCommand::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "Config file already exists at {}. Use --force to overwrite.",
                    path.display()
                );
            }
            save(&KtpConfig::default(), &path)?;
            println!(
                "{} Created configuration file at {}",
                style("✓").green(),
                path.display()
            );
        }
        ConfigCommand::Get { key } => {
            let json = serde_json::to_value(load_or_default(&path)?)?;
            println!("{}", serde_json::to_string_pretty(lookup(&json, &key)?)?);
        }
        ConfigCommand::Set { key, value } => {
            let mut json = serde_json::to_value(load_or_default(&path)?)?;
            let parsed = parse_value(&value);
            assign(&mut json, &key, parsed.clone())?;

            let config: KtpConfig = serde_json::from_value(json)
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            config
                .validate()
                .map_err(|e| anyhow::anyhow!("Invalid value for {}: {}", key, e))?;
            save(&config, &path)?;

            println!("{} Set {} = {}", style("✓").green(), key, parsed);
        }
        ConfigCommand::Path => {
            println!("Configuration file: {}", path.display());
            if path.exists() {
                println!("Status: {}", style("exists").green());
            } else {
                println!("Status: {}", style("not created").yellow());
                println!();
                println!("Run 'ktp config init' to create a configuration file.");
            }
        }
    }

    Ok(())
}

/// `<config dir>/ktp/config.json`.
pub(crate) fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ktp")
        .join("config.json")
}

fn load_or_default(path: &Path) -> anyhow::Result<KtpConfig> {
    if path.exists() {
        Ok(KtpConfig::from_file(path)?)
    } else {
        Ok(KtpConfig::default())
    }
}

fn save(config: &KtpConfig, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    config.save(path)?;
    Ok(())
}

/// JSON literal if it parses as one, otherwise a plain string.
fn parse_value(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()))
}

fn lookup<'a>(json: &'a Value, key: &str) -> anyhow::Result<&'a Value> {
    key.split('.').try_fold(json, |current, part| {
        current
            .get(part)
            .ok_or_else(|| anyhow::anyhow!("Configuration key not found: {}", key))
    })
}

fn assign(json: &mut Value, key: &str, value: Value) -> anyhow::Result<()> {
    let (parent_key, field) = match key.rsplit_once('.') {
        Some((parent, field)) => (Some(parent), field),
        None => (None, key),
    };

    let mut parent = json;
    if let Some(parent_key) = parent_key {
        for part in parent_key.split('.') {
            parent = parent
                .get_mut(part)
                .ok_or_else(|| anyhow::anyhow!("Configuration path not found: {}", key))?;
        }
    }

    match parent.as_object_mut() {
        Some(obj) if obj.contains_key(field) => {
            obj.insert(field.to_string(), value);
            Ok(())
        }
        Some(_) => anyhow::bail!("Configuration key not found: {}", key),
        None => anyhow::bail!("Cannot set value at non-object path: {}", key),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lookup() {
        let json = serde_json::to_value(KtpConfig::default()).unwrap();
        assert_eq!(lookup(&json, "extraction.document_type").unwrap(), "ktp");
        assert_eq!(lookup(&json, "output.pretty_json").unwrap(), true);
        assert!(lookup(&json, "extraction.nope").is_err());
    }

    #[test]
    fn test_assign_then_deserialize() {
        let mut json = serde_json::to_value(KtpConfig::default()).unwrap();
        assign(&mut json, "extraction.strategy", parse_value("pattern_search")).unwrap();

        let config: KtpConfig = serde_json::from_value(json).unwrap();
        assert_eq!(
            config.extraction.strategy,
            Some(ktp_core::ExtractionStrategy::PatternSearch)
        );
    }

    #[test]
    fn test_assign_rejects_unknown_keys() {
        let mut json = serde_json::to_value(KtpConfig::default()).unwrap();
        assert!(assign(&mut json, "extraction.typo", json!(1)).is_err());
        assert!(assign(&mut json, "output.pretty_json.deeper", json!(1)).is_err());
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("false"), json!(false));
        assert_eq!(parse_value("sim"), json!("sim"));
    }
}
