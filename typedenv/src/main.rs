mod cli;
mod observability;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands, Kind};
use serde_json::Value;
use typedenv_core::{coerce, EnvAccessor, ReadEnv, WarningSink};

fn main() -> Result<()> {
    observability::init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Commands::Get {
            key,
            kind,
            default,
            optional,
        } => {
            let accessor = EnvAccessor::system();
            let rendered = if optional {
                read_optional(&accessor, &key, kind)?
            } else {
                Some(read_value(&accessor, &key, kind, default.as_deref())?)
            };
            if let Some(out) = rendered {
                println!("{}", out);
            }
        }
    }
    Ok(())
}

/// Reads `key` with the accessor for `kind` and renders it for stdout.
/// Strings print verbatim, everything else as JSON.
fn read_value<E: ReadEnv, S: WarningSink>(
    accessor: &EnvAccessor<E, S>,
    key: &str,
    kind: Kind,
    default: Option<&str>,
) -> Result<String> {
    let rendered = match kind {
        Kind::String => accessor.parse_string(key, default.map(str::to_string))?,
        Kind::Int => {
            let default = default.map(parse_int_default).transpose()?;
            accessor.parse_int(key, default)?.to_string()
        }
        Kind::Bool => {
            let default = default.map(parse_bool_default).transpose()?;
            accessor.parse_bool(key, default)?.to_string()
        }
        Kind::Json => {
            let default = default.map(parse_json_default).transpose()?;
            accessor.parse_json::<Value>(key, default)?.to_string()
        }
    };
    Ok(rendered)
}

fn read_optional<E: ReadEnv, S: WarningSink>(
    accessor: &EnvAccessor<E, S>,
    key: &str,
    kind: Kind,
) -> Result<Option<String>> {
    let rendered = match kind {
        Kind::String => accessor.optional_string(key)?,
        Kind::Int => accessor.optional_int(key)?.map(|n| n.to_string()),
        Kind::Bool => accessor.optional_bool(key)?.map(|b| b.to_string()),
        Kind::Json => accessor
            .optional_json::<Value>(key)?
            .map(|v| v.to_string()),
    };
    Ok(rendered)
}

fn parse_int_default(raw: &str) -> Result<i64> {
    coerce::scan_int(raw)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("--default {:?} is not an integer", raw))
}

fn parse_bool_default(raw: &str) -> Result<bool> {
    coerce::parse_bool(raw).with_context(|| format!("--default {:?} is not a boolean", raw))
}

fn parse_json_default(raw: &str) -> Result<Value> {
    coerce::parse_json::<Value>(raw).with_context(|| format!("--default {:?} is not valid JSON", raw))
}
