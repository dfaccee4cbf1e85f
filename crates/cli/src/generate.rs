//! One generation run: authenticate, fetch, generate, write.

use std::path::Path;

use modelts_cms_sdk::{ClientConfig, SchemaClient};
use modelts_core::{Mode, OutputWriter, generate_definition, upper_camel_case};
use tracing::{debug, info};

use crate::Cli;

pub(crate) async fn run_inner(cli: Cli) -> Result<(), String> {
    let config =
        ClientConfig::from_env(!cli.no_ssl_verify).map_err(|err| err.to_string())?;
    let out_dir = std::env::current_dir()
        .map_err(|err| format!("Failed to resolve working directory: {err}"))?;
    execute(&cli, config, &out_dir).await
}

/// Drive one full run against `config`, writing into `out_dir`.
///
/// Split from the env-driven entry path so tests can point it at a mock
/// server and a temporary directory. Authentication happens before the output file is
/// touched, so a failed handshake never disturbs a previous run's output.
pub async fn execute(cli: &Cli, config: ClientConfig, out_dir: &Path) -> Result<(), String> {
    let client = SchemaClient::new(config).map_err(|err| err.to_string())?;
    let token = client.authenticate().await.map_err(|err| err.to_string())?;

    let base_name = cli
        .name
        .clone()
        .unwrap_or_else(|| upper_camel_case(&cli.model));
    let writer = OutputWriter::new(out_dir.join(format!("{base_name}.ts")));
    writer.reset().map_err(|err| err.to_string())?;
    debug!(path = %writer.path().display(), "Resolved output path.");

    let mode = match &cli.cols {
        Some(cols) => Mode::Explicit(cols.clone()),
        None => Mode::Full,
    };

    let schema = client
        .fetch_schema(&cli.model, &token)
        .await
        .map_err(|err| format!("Failed to fetch schema for model '{}': {err}", cli.model))?;
    let definition = generate_definition(&cli.model, &schema, &mode)
        .map_err(|err| err.to_string())?;
    writer.append(&definition.source).map_err(|err| err.to_string())?;

    // Summaries come one at a time, in discovery order; summary generation
    // discovers nothing itself, so expansion stops at depth one.
    for relation in &definition.relation_models {
        let schema = client
            .fetch_schema(relation, &token)
            .await
            .map_err(|err| format!("Failed to fetch schema for model '{relation}': {err}"))?;
        let summary = generate_definition(relation, &schema, &Mode::Summary)
            .map_err(|err| err.to_string())?;
        writer.append(&summary.source).map_err(|err| err.to_string())?;
    }

    info!(
        model = %cli.model,
        summaries = definition.relation_models.len(),
        path = %writer.path().display(),
        "Declarations written."
    );
    Ok(())
}
