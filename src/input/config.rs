use std::fs::File;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::input::toml_input;
use crate::payroll::{self, HourlyWage, Schedule, WorkInterval};
use crate::utils;

/// A fully assembled calculator input: the schedule, the wage and where
/// the rendered report should go.
pub struct Config {
    schedule: Schedule,
    wage: HourlyWage,
    output: Option<PathBuf>,
    json: bool,
}

pub struct ConfigBuilder {
    sheet: toml_input::Sheet,
    output: Option<PathBuf>,
    json: bool,
}

impl ConfigBuilder {
    fn new(sheet: toml_input::Sheet) -> Self {
        Self {
            sheet,
            output: None,
            json: false,
        }
    }

    pub fn output(&mut self, output: impl Into<PathBuf>) -> &mut Self {
        self.output = Some(output.into());
        self
    }

    pub fn json(&mut self, json: bool) -> &mut Self {
        self.json = json;
        self
    }

    #[must_use]
    pub fn build(self) -> Config {
        let wage = self.sheet.general().wage();

        let mut schedule = Schedule::new();
        for (date, entry) in self.sheet.entries() {
            schedule.insert(WorkInterval::new(*date, entry.start(), entry.end()));
        }

        info!(
            "loaded {} work entries with an hourly wage of {}",
            schedule.len(),
            wage
        );

        Config {
            schedule,
            wage,
            output: self.output,
            json: self.json,
        }
    }
}

impl Config {
    pub fn from_toml(sheet: toml_input::Sheet) -> ConfigBuilder {
        ConfigBuilder::new(sheet)
    }

    pub fn try_from_toml_file(sheet: impl AsRef<Path>) -> anyhow::Result<ConfigBuilder> {
        let sheet = sheet.as_ref();
        let parsed: toml_input::Sheet = utils::toml_from_reader(File::open(sheet)?)
            .with_context(|| format!("failed to parse `{}`", sheet.display()))?;

        Ok(Self::from_toml(parsed))
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub const fn wage(&self) -> HourlyWage {
        self.wage
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref()
    }

    pub const fn json(&self) -> bool {
        self.json
    }

    pub fn to_summary_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(&payroll::calculate(&self.schedule, self.wage))
    }
}
