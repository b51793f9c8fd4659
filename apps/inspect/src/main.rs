#![allow(clippy::print_stdout)]

mod args;
mod lookup;

use crate::args::{Cli, Shape};
use crate::lookup::AddressBook;
use anyhow::{Context, Result, bail};
use clap::Parser;
use paycard_card::{CardConfigurationParser, load_raw_config};
use paycard_logger::Logger;
use serde_json::{Value, json};
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let _logger = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .level(cli.log_level)
        .json(cli.json_logs)
        .init()?;

    let book = cli.addresses.as_deref().map(AddressBook::from_file).transpose()?.unwrap_or_default();

    let raw = load_raw_config(&cli.file)
        .with_context(|| format!("Failed to load {}", cli.file.display()))?;
    let parser = CardConfigurationParser::new(raw, &book);

    let output = match cli.search.as_deref() {
        Some(term) => search(&parser, term)?,
        None => render(&parser, cli.shape)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn render(parser: &CardConfigurationParser<'_>, shape: Shape) -> Result<Value> {
    let value = match shape {
        Shape::Component => serde_json::to_value(parser.configuration())?,
        Shape::Dropin => serde_json::to_value(parser.dropin_configuration())?,
        Shape::Both => json!({
            "component": serde_json::to_value(parser.configuration())?,
            "dropin": serde_json::to_value(parser.dropin_configuration())?,
        }),
    };
    Ok(value)
}

/// Runs the lookup carried by the billing address form, exactly as the form would.
fn search(parser: &CardConfigurationParser<'_>, term: &str) -> Result<Value> {
    let mode = parser.billing_address_configuration().mode;
    let Some(provider) = mode.lookup_provider() else {
        bail!("Address lookup is not enabled (address mode is '{}')", mode.as_str());
    };

    let matches = provider.look_up(term);
    info!(term, count = matches.len(), "Address lookup finished");
    Ok(serde_json::to_value(matches)?)
}
