use serde::Deserialize;

use crate::time::TimeStamp;

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct Entry {
    start: TimeStamp,
    end: TimeStamp,
}

impl Entry {
    pub fn start(&self) -> TimeStamp {
        self.start
    }

    pub fn end(&self) -> TimeStamp {
        self.end
    }
}
