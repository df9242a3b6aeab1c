use crate::errors::{Error, Result, require_parse};
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub catalog_path: PathBuf,
    pub logs_dir: PathBuf,
    /// `--importance NAME=VALUE`, last one wins per name.
    pub overrides: HashMap<String, f64>,
    pub json: bool,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut cli = Self::defaults();
        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => {
                    cli.config_path = Self::next_path(&mut args, "--config")?;
                }
                "--catalog" => {
                    cli.catalog_path = Self::next_path(&mut args, "--catalog")?;
                }
                "--logs" => {
                    cli.logs_dir = Self::next_path(&mut args, "--logs")?;
                }
                "--importance" => {
                    let raw = require_parse(args.next(), "Missing value for --importance")?;
                    let (name, value) = Self::parse_override(&raw)?;
                    cli.overrides.insert(name, value);
                }
                "--json" => cli.json = true,
                _ => return Err(Error::parse(format!("Unknown argument: {arg}"))),
            }
        }
        Ok(cli)
    }

    fn next_path<I>(args: &mut I, flag: &str) -> Result<PathBuf>
    where
        I: Iterator<Item = String>,
    {
        let value = require_parse(args.next(), format!("Missing value for {flag}"))?;
        Ok(PathBuf::from(value))
    }

    /// `Name With Spaces=0.7`; the split is on the last `=`.
    fn parse_override(raw: &str) -> Result<(String, f64)> {
        let (name, value) = raw.rsplit_once('=').ok_or_else(|| {
            Error::parse(format!(
                "Invalid importance override '{raw}'. Expected NAME=VALUE."
            ))
        })?;
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::parse(format!(
                "Invalid importance override '{raw}': empty name."
            )));
        }
        let value: f64 = value.trim().parse().map_err(|_| {
            Error::parse(format!(
                "Invalid importance override '{raw}': '{}' is not a number.",
                value.trim()
            ))
        })?;
        Ok((name.to_string(), value))
    }

    fn defaults() -> Self {
        Self {
            config_path: PathBuf::from("config.json"),
            catalog_path: PathBuf::from("catalog.json"),
            logs_dir: PathBuf::from("logs"),
            overrides: HashMap::new(),
            json: false,
        }
    }
}
