use std::fs;

use anyhow::{Context, Result};
use tracing::debug;

use super::super::args::LookupCommand;
use super::{CommandResult, CommandSummary, LookupSummary, helper::finish};
use crate::catalog::Catalog;

pub fn lookup(cmd: LookupCommand) -> Result<CommandResult> {
    let bytes = fs::read(&cmd.file)
        .with_context(|| format!("Failed to read catalog: {}", cmd.file.display()))?;
    let catalog = Catalog::load(&bytes)
        .with_context(|| format!("Failed to load catalog: {}", cmd.file.display()))?;

    let disambiguator = cmd.disambiguation.as_deref();
    let translated = catalog
        .entry(&cmd.context, &cmd.source, disambiguator)
        .and_then(|e| e.display_text())
        .is_some();
    let text = catalog.tr(&cmd.context, &cmd.source, disambiguator, cmd.args.as_slice());
    debug!(
        context = %cmd.context,
        source = %cmd.source,
        translated,
        "Looked up message"
    );

    Ok(finish(
        CommandSummary::Lookup(LookupSummary { text, translated }),
        Vec::new(),
        1,
        true,
    ))
}
