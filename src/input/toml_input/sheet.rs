use std::collections::BTreeMap;

use serde::Deserialize;

use crate::input::toml_input::{Entry, General};
use crate::time::Date;

/// The deserialized form of a sheet file.
///
/// ```toml
/// [general]
/// wage = 10300
///
/// [entry.2026-08-03]
/// start = "09:00"
/// end = "18:00"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Sheet {
    #[serde(default)]
    general: General,
    #[serde(default)]
    entry: BTreeMap<Date, Entry>,
}

impl Sheet {
    #[must_use]
    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn entries(&self) -> impl Iterator<Item = (&Date, &Entry)> {
        self.entry.iter()
    }
}
