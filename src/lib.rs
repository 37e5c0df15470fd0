mod utils;

pub mod calendar;
pub mod input;
pub mod payroll;
pub mod report;
pub mod session;
pub mod time;

use std::fs;

use log::info;

use crate::input::Config;

/// Computes the pay report for the given config and emits it.
///
/// The report goes to the configured output path, or to stdout when no
/// path has been configured.
pub fn generate_pay_report(config: &Config) -> anyhow::Result<()> {
    let summary = payroll::calculate(config.schedule(), config.wage());
    info!(
        "worked {} hours over {} days",
        summary.total_hours(),
        summary.total_days()
    );

    let rendered = if config.json() {
        let mut json = config.to_summary_json()?;
        json.push('\n');
        json
    } else {
        report::render_report(config.schedule(), &summary)
    };

    match config.output() {
        Some(output) => {
            if let Some(parent) = output.parent() {
                fs::create_dir_all(parent)?;
            }

            utils::write(output, rendered)?;
            info!("wrote the report to `{}`", output.display());
        }
        None => print!("{}", rendered),
    }

    Ok(())
}
