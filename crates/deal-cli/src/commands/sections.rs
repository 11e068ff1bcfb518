use deal_core::routes::Section;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct SectionRow {
    id: Section,
    title: &'static str,
}

/// Handle `dealflow sections`.
pub fn handle(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows: Vec<SectionRow> = Section::ALL
        .into_iter()
        .map(|section| SectionRow {
            id: section,
            title: section.title(),
        })
        .collect();
    output(&rows, flags.format)
}
