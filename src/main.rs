//! address-metadata - print decoded address form layouts
//!
//! Runs the in-process engine and prints the layout of each requested
//! country as JSON.

use address_metadata::config::LayoutConfig;
use address_metadata::engine::{AddressMetadataHandler, EventDispatcher, LayoutTable};
use address_metadata::{AddressField, FormLayoutDecoder};
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::io;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "address_metadata=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {err:?}");
        std::process::exit(1);
    }

    Ok(())
}

async fn run() -> Result<()> {
    let config = LayoutConfig::load().context("Failed to load configuration")?;

    let mut table = LayoutTable::builtin()?;
    if let Some(path) = &config.layouts_path {
        table.merge(LayoutTable::from_path(path)?);
    }
    tracing::info!(countries = table.len(), "layouts loaded");

    let mut countries: Vec<String> = std::env::args().skip(1).collect();
    if countries.is_empty() {
        countries.push(config.default_country().to_string());
    }

    let handler = AddressMetadataHandler::new(table, config.default_country());
    let (dispatcher, _engine) = EventDispatcher::spawn(handler, config.query_timeout());
    let decoder = Arc::new(FormLayoutDecoder::new(dispatcher));

    let requests: Vec<_> = countries
        .iter()
        .map(|country| {
            let decoder = Arc::clone(&decoder);
            let country = country.clone();
            tokio::spawn(async move { decoder.request_form_layout(&country).await })
        })
        .collect();

    let mut output = Map::new();
    for (country, request) in countries.iter().zip(requests) {
        let fields: Vec<AddressField> = request
            .await?
            .with_context(|| format!("Failed to get form layout for {country}"))?;
        output.insert(country.clone(), serde_json::to_value(fields)?);
    }

    println!("{}", serde_json::to_string_pretty(&Value::Object(output))?);
    Ok(())
}
