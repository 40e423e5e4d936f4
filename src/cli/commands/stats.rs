use anyhow::Result;

use super::super::{args::StatsCommand, context::CheckContext};
use super::{
    CatalogStatsRow, CommandResult, CommandSummary, StatsSummary,
    helper::{finish, parse_error_issues},
};
use crate::scan::load_catalogs;

pub fn stats(cmd: StatsCommand) -> Result<CommandResult> {
    let ctx = CheckContext::new(&cmd.common)?;

    let scan = if cmd.files.is_empty() {
        ctx.scan()?
    } else {
        load_catalogs(&cmd.files, &ctx.config.file_prefix)
    };

    let rows = scan
        .catalogs
        .iter()
        .map(|loaded| CatalogStatsRow {
            locale: loaded.locale.clone(),
            file_path: loaded.file_path.clone(),
            stats: loaded.catalog.stats(),
        })
        .collect();

    let issues = parse_error_issues(&scan.failures).collect();

    Ok(finish(
        CommandSummary::Stats(StatsSummary {
            rows,
            json: cmd.json,
        }),
        issues,
        scan.files_checked(),
        true,
    ))
}
