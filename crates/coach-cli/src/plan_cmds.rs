//! CLI handlers for plan generation and section rendering.
//!
//! Implements:
//! - `coach plan`             -- full export document (or JSON)
//! - `coach section <kind>`   -- one section (or its JSON data)
//! - `coach render <file>`    -- format JSON section data by shape

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use coach_core::{MarketingPlan, PlanInputs, SectionKind, format_section_json_str};

// -----------------------------------------------------------------------
// coach plan
// -----------------------------------------------------------------------

/// Generate the full plan and write it to `output` or stdout.
pub fn run_plan(inputs: &PlanInputs, json: bool, output: Option<&Path>) -> Result<()> {
    let plan = MarketingPlan::generate(inputs);
    tracing::debug!(
        pillars = plan.pillars.len(),
        days = plan.calendar.len(),
        "plan generated"
    );

    let rendered = if json {
        let mut text = serde_json::to_string_pretty(&plan).context("failed to serialize plan")?;
        text.push('\n');
        text
    } else {
        plan.export_document()
    };

    let mut writer: Box<dyn Write> = if let Some(path) = output {
        Box::new(
            std::fs::File::create(path)
                .with_context(|| format!("cannot create output file: {}", path.display()))?,
        )
    } else {
        Box::new(std::io::stdout().lock())
    };
    writer
        .write_all(rendered.as_bytes())
        .context("failed to write plan")?;
    writer.flush().context("failed to write plan")?;

    if let Some(path) = output {
        tracing::info!(path = %path.display(), "plan exported");
        println!("Plan written to {}", path.display());
    }

    Ok(())
}

// -----------------------------------------------------------------------
// coach section <kind>
// -----------------------------------------------------------------------

/// Generate the plan and print a single section.
pub fn run_section(inputs: &PlanInputs, kind: SectionKind, json: bool) -> Result<()> {
    let plan = MarketingPlan::generate(inputs);

    if json {
        let text = serde_json::to_string_pretty(&plan.section(kind))
            .with_context(|| format!("failed to serialize section {kind}"))?;
        println!("{text}");
    } else {
        println!("{}", plan.format_section(kind));
    }
    Ok(())
}

// -----------------------------------------------------------------------
// coach render <file>
// -----------------------------------------------------------------------

/// Read section JSON from `file` (or stdin for `-`) and print it formatted.
pub fn run_render(file: &str, name: &str) -> Result<()> {
    let content = if file == "-" {
        std::io::read_to_string(std::io::stdin()).context("failed to read stdin")?
    } else {
        std::fs::read_to_string(file)
            .with_context(|| format!("failed to read section file: {file}"))?
    };

    let text = format_section_json_str(name, &content)
        .with_context(|| format!("failed to render section file: {file}"))?;
    println!("{text}");
    Ok(())
}
