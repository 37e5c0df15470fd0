use serde::Deserialize;

use crate::payroll::HourlyWage;

const fn default_wage() -> f64 {
    HourlyWage::DEFAULT_RATE
}

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct General {
    #[serde(default = "default_wage")]
    wage: f64,
}

impl General {
    #[must_use]
    pub fn wage(&self) -> HourlyWage {
        HourlyWage::new(self.wage)
    }
}

impl Default for General {
    fn default() -> Self {
        Self {
            wage: default_wage(),
        }
    }
}
