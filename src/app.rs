use crate::config::{Cli, OutputFormat};
use crate::schema::Schema;
use crate::script::Script;
use crate::wizard::Wizard;
use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use tracing::{info, warn};

/// Runs one invocation of the binary, writing the document to `out`.
///
/// Prints the schema with `--print-schema`, the initial step view without a
/// script, and after a replay either the configuration or, when the script
/// never submitted, the view of the step it stopped on.
pub fn run(cli: &Cli, out: &mut impl Write) -> Result<()> {
    let schema = match cli.schema.as_ref() {
        Some(path) => Schema::load(path)
            .with_context(|| format!("loading schema from {}", path.display()))?,
        None => Schema::trading_bot(),
    };

    if cli.print_schema {
        out.write_all(schema.to_yaml()?.as_bytes())?;
        return Ok(());
    }

    let mut wizard = Wizard::new(schema);

    let Some(script_path) = cli.script.as_ref() else {
        return emit(out, &wizard.view(), cli.format);
    };

    let script = Script::load(script_path)
        .with_context(|| format!("loading script from {}", script_path.display()))?;
    let report = script.replay(&mut wizard, cli.replay_mode())?;
    info!(
        applied = report.applied,
        rejected = report.rejected.len(),
        step = report.final_step,
        "script replayed"
    );

    match report.configuration {
        Some(configuration) => emit(out, &configuration, cli.format),
        None => {
            warn!(
                missing = ?wizard.incomplete_fields(),
                "script ended before the configuration was submitted"
            );
            emit(out, &wizard.view(), cli.format)
        }
    }
}

pub fn emit<T: Serialize>(out: &mut impl Write, value: &T, format: OutputFormat) -> Result<()> {
    let rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
    };
    out.write_all(rendered.as_bytes())?;
    Ok(())
}
