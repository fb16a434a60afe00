use std::path::Path;

use anyhow::Result;
use wage_calculator::calculation::compute_totals;
use wage_calculator::config::ConfigLoader;
use wage_calculator::report::{WagesReport, summary_lines};

use super::read_snapshot;

pub fn totals(config: &ConfigLoader, snapshot: &Path) -> Result<()> {
    let form = read_snapshot(snapshot)?;
    let totals = compute_totals(form.schedule.days(), &form.rates);

    for line in summary_lines(&form.details, &totals, config.currency_symbol()) {
        println!("{:<40} {}", line.label, line.value);
    }
    Ok(())
}

pub fn print(config: &ConfigLoader, snapshot: &Path) -> Result<()> {
    let report = build(config, snapshot)?;
    print!("{}", report.render_text());
    Ok(())
}

#[cfg(feature = "pdf")]
pub fn export_pdf(config: &ConfigLoader, snapshot: &Path, output: &Path) -> Result<()> {
    use anyhow::Context;

    let report = build(config, snapshot)?;
    let bytes = wage_calculator::report::render_pdf(&report)?;

    let target = if output.is_dir() {
        output.join(report.file_name())
    } else {
        output.to_path_buf()
    };
    std::fs::write(&target, bytes)
        .with_context(|| format!("failed to write {}", target.display()))?;
    println!("Exported to {}", target.display());
    Ok(())
}

fn build(config: &ConfigLoader, snapshot: &Path) -> Result<WagesReport> {
    let form = read_snapshot(snapshot)?;
    Ok(WagesReport::build(
        config,
        &form.details,
        form.schedule.days(),
        &form.rates,
    ))
}
