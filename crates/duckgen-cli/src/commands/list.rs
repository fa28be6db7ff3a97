//! Implementation of the `duckgen list` command.

use serde::Serialize;

use duckgen_core::{application::TemplateService, domain::Kit};

use crate::{
    cli::{ListArgs, ListFormat},
    commands::template_store,
    config::AppConfig,
    error::{CliResult, CoreContext},
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct TemplateRow {
    kit: Kit,
    name: String,
    builtin: bool,
}

pub fn execute(args: ListArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let service = TemplateService::new(Box::new(template_store(&config)?));

    let kits: Vec<Kit> = match args.kit {
        Some(kit) => vec![kit.into()],
        None => Kit::ALL.to_vec(),
    };

    let mut rows = Vec::new();
    for kit in &kits {
        let templates = service
            .list(*kit)
            .while_doing(|| format!("listing templates of {kit}"))?;
        rows.extend(templates.into_iter().map(|t| TemplateRow {
            kit: *kit,
            name: t.name().to_string(),
            builtin: t.is_builtin(),
        }));
    }

    match args.format {
        ListFormat::Table => {
            for kit in &kits {
                output.header(&format!("{kit}  {}", kit.description()))?;
                for row in rows.iter().filter(|r| r.kit == *kit) {
                    let origin = if row.builtin { "built-in" } else { "custom" };
                    output.print(&format!("  {:<20} {origin}", row.name))?;
                }
            }
        }

        // Written even in quiet mode so the output stays parseable.
        ListFormat::Json => output.json(&rows)?,

        ListFormat::List => {
            for row in &rows {
                output.print(&format!("{}/{}", row.kit, row.name))?;
            }
        }
    }

    Ok(())
}
