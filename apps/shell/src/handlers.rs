//! Command handlers. Results go to stdout as JSON or plain lines; logs go to stderr.

use anyhow::{Context, Result, bail, ensure};
use hunt::domain::config::HuntConfig;
use hunt::domain::constants::SLOTS;
use hunt::records::EntityKind;
use serde_json::Value;
use std::io::Read;
use std::path::Path;
use tracing::debug;

pub(crate) fn aspects(config: &HuntConfig) -> Result<()> {
    let platform = hunt::compose(config).context("Composing platform")?;
    for name in platform.aspect_names() {
        println!("{name}");
    }
    Ok(())
}

pub(crate) fn slots(config: &HuntConfig, slot: Option<&str>) -> Result<()> {
    let platform = hunt::compose(config).context("Composing platform")?;

    let summaries = match slot {
        Some(name) => {
            ensure!(SLOTS.contains(&name), "Unknown slot '{name}'; expected one of {}", SLOTS.join(", "));
            platform.slots.summaries_of(name)
        },
        None => platform.slots.summaries(),
    };

    println!("{}", serde_json::to_string_pretty(&summaries)?);
    Ok(())
}

pub(crate) fn mock(kind: EntityKind, count: Option<usize>, patches: &[String]) -> Result<()> {
    let mut overrides = patches
        .iter()
        .enumerate()
        .map(|(index, raw)| {
            serde_json::from_str::<Value>(raw).with_context(|| format!("Parsing --patch #{}", index + 1))
        })
        .collect::<Result<Vec<_>>>()?;

    if let Some(count) = count {
        ensure!(count > 0, "--count must be at least 1");
        ensure!(
            count >= overrides.len(),
            "--count {count} is smaller than the {} patches given",
            overrides.len()
        );
        overrides.resize_with(count, || Value::Object(serde_json::Map::new()));
    }

    let records = kind.mock(overrides).with_context(|| format!("Building {kind} fixtures"))?;
    debug!(%kind, count = records.len(), "Mock records built");

    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) fn normalize(kind: EntityKind, input: &Path) -> Result<()> {
    let raw = read_input(input)?;
    let value: Value = serde_json::from_str(&raw)
        .with_context(|| format!("Parsing JSON from {}", input.display()))?;

    let normalized = match value {
        Value::Array(records) => Value::Array(
            records
                .into_iter()
                .enumerate()
                .map(|(index, record)| {
                    kind.normalize(record).with_context(|| format!("Record #{index}"))
                })
                .collect::<Result<_>>()?,
        ),
        Value::Object(_) => kind.normalize(value)?,
        other => bail!("Expected a {kind} record or an array of them, got {other}"),
    };

    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut raw = String::new();
        std::io::stdin().read_to_string(&mut raw).context("Reading stdin")?;
        Ok(raw)
    } else {
        std::fs::read_to_string(input).with_context(|| format!("Reading {}", input.display()))
    }
}
