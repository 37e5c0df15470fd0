use thiserror::Error;

use crate::calendar::MonthCursor;
use crate::payroll::{self, HourlyWage, PayrollSummary, Schedule, WorkInterval};
use crate::time::{Date, InvalidDate, InvalidTime, TimeStamp};

/// Everything a failed attempt to register a work entry can be missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AddEntryError {
    #[error("no date has been selected")]
    MissingDate,
    #[error("no start time has been entered")]
    MissingStart,
    #[error("no end time has been entered")]
    MissingEnd,
}

/// The mutable state behind a running calculator.
///
/// A session owns the schedule, the wage, the displayed month and the
/// pending inputs of the entry form. Every mutation recomputes the summary
/// before it returns, so the cached value can never be stale.
#[derive(Debug, Clone)]
pub struct Session {
    schedule: Schedule,
    wage: HourlyWage,
    cursor: MonthCursor,
    selected: Option<Date>,
    pending_start: Option<TimeStamp>,
    pending_end: Option<TimeStamp>,
    summary: PayrollSummary,
}

impl Session {
    #[must_use]
    pub fn new(cursor: MonthCursor) -> Self {
        let schedule = Schedule::new();
        let wage = HourlyWage::default();
        let summary = payroll::calculate(&schedule, wage);

        Self {
            schedule,
            wage,
            cursor,
            selected: None,
            pending_start: None,
            pending_end: None,
            summary,
        }
    }

    /// Replaces the schedule, for preloading a session from a sheet file.
    #[must_use]
    pub fn with_schedule(mut self, schedule: Schedule) -> Self {
        self.schedule = schedule;
        self.recompute();
        self
    }

    #[must_use]
    pub fn with_wage(mut self, wage: HourlyWage) -> Self {
        self.wage = wage;
        self.recompute();
        self
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub const fn wage(&self) -> HourlyWage {
        self.wage
    }

    pub const fn cursor(&self) -> MonthCursor {
        self.cursor
    }

    pub const fn selected(&self) -> Option<Date> {
        self.selected
    }

    pub const fn pending_start(&self) -> Option<TimeStamp> {
        self.pending_start
    }

    pub const fn pending_end(&self) -> Option<TimeStamp> {
        self.pending_end
    }

    pub fn select_date(&mut self, date: Date) {
        self.selected = Some(date);
    }

    /// Selects a day of the displayed month.
    pub fn select_day(&mut self, day: usize) -> Result<Date, InvalidDate> {
        let date = self.cursor.select(day)?;
        self.selected = Some(date);
        Ok(date)
    }

    pub fn set_start(&mut self, input: &str) -> Result<(), InvalidTime> {
        self.pending_start = Some(input.parse()?);
        Ok(())
    }

    pub fn set_end(&mut self, input: &str) -> Result<(), InvalidTime> {
        self.pending_end = Some(input.parse()?);
        Ok(())
    }

    /// Registers the pending entry for the selected date.
    ///
    /// Nothing changes unless a date is selected and both times have been
    /// entered. On success the pending times are cleared, an interval
    /// already recorded for the date is replaced.
    pub fn add_entry(&mut self) -> Result<Date, AddEntryError> {
        let date = self.selected.ok_or(AddEntryError::MissingDate)?;
        let start = self.pending_start.ok_or(AddEntryError::MissingStart)?;
        let end = self.pending_end.ok_or(AddEntryError::MissingEnd)?;

        self.schedule.insert(WorkInterval::new(date, start, end));
        self.pending_start = None;
        self.pending_end = None;
        self.recompute();

        Ok(date)
    }

    /// Removes the entry for `date`. Removing an absent entry is a no-op.
    pub fn remove_entry(&mut self, date: Date) -> Option<WorkInterval> {
        let removed = self.schedule.remove(date);
        self.recompute();
        removed
    }

    /// Updates the wage from free-text input, unparsable input means zero.
    pub fn set_wage_input(&mut self, input: &str) {
        self.wage = HourlyWage::from_input(input);
        self.recompute();
    }

    pub fn prev_month(&mut self) {
        self.cursor.prev();
    }

    pub fn next_month(&mut self) {
        self.cursor.next();
    }

    /// Recomputes the summary from the current schedule and wage.
    pub fn recompute(&mut self) -> &PayrollSummary {
        self.summary = payroll::calculate(&self.schedule, self.wage);
        &self.summary
    }

    pub fn summary(&self) -> &PayrollSummary {
        &self.summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;

    use crate::payroll::{Money, WorkHours};
    use crate::time::{Month, Year};
    use crate::{date, time_stamp};

    fn session() -> Session {
        Session::new(MonthCursor::new(Year::new(2026), Month::August))
    }

    #[test]
    fn test_add_entry_requires_all_inputs() {
        let mut session = session();

        assert_eq!(session.add_entry(), Err(AddEntryError::MissingDate));

        session.select_day(3).unwrap();
        assert_eq!(session.add_entry(), Err(AddEntryError::MissingStart));

        session.set_start("09:00").unwrap();
        assert_eq!(session.add_entry(), Err(AddEntryError::MissingEnd));

        // the failed attempts must not have touched the schedule
        assert!(session.schedule().is_empty());

        session.set_end("18:00").unwrap();
        assert_eq!(session.add_entry(), Ok(date!(2026:08:03)));
        assert_eq!(session.schedule().len(), 1);
    }

    #[test]
    fn test_add_entry_clears_pending_times() {
        let mut session = session();
        session.select_day(3).unwrap();
        session.set_start("09:00").unwrap();
        session.set_end("18:00").unwrap();
        session.add_entry().unwrap();

        assert_eq!(session.pending_start(), None);
        assert_eq!(session.pending_end(), None);
        // the selection survives, the next entry needs new times
        assert_eq!(session.selected(), Some(date!(2026:08:03)));
        assert_eq!(session.add_entry(), Err(AddEntryError::MissingStart));
    }

    #[test]
    fn test_add_entry_overwrites_same_date() {
        let mut session = session();
        session.select_day(3).unwrap();
        session.set_start("09:00").unwrap();
        session.set_end("18:00").unwrap();
        session.add_entry().unwrap();

        session.set_start("10:00").unwrap();
        session.set_end("14:00").unwrap();
        session.add_entry().unwrap();

        assert_eq!(session.schedule().len(), 1);
        assert_eq!(
            session.schedule().get(date!(2026:08:03)).map(|e| e.start()),
            Some(time_stamp!(10:00))
        );
        assert_eq!(session.summary().total_hours(), WorkHours::from_hours(4));
    }

    #[test]
    fn test_remove_entry_is_idempotent() {
        let mut session = session();
        session.select_day(3).unwrap();
        session.set_start("09:00").unwrap();
        session.set_end("18:00").unwrap();
        session.add_entry().unwrap();

        assert!(session.remove_entry(date!(2026:08:03)).is_some());
        assert_eq!(session.remove_entry(date!(2026:08:03)), None);
        assert_eq!(session.summary().total_days(), 0);
    }

    #[test]
    fn test_rejects_malformed_times() {
        let mut session = session();

        assert!(session.set_start("24:00").is_err());
        assert!(session.set_start("0900").is_err());
        assert!(session.set_end("09:60").is_err());
        assert_eq!(session.pending_start(), None);
        assert_eq!(session.pending_end(), None);
    }

    #[test]
    fn test_wage_input_recomputes() {
        let mut session = session();
        session.select_day(3).unwrap();
        session.set_start("09:00").unwrap();
        session.set_end("18:00").unwrap();
        session.add_entry().unwrap();

        session.set_wage_input("10000");
        assert_eq!(session.summary().basic_pay(), Money::new(90_000));

        session.set_wage_input("garbage");
        assert_eq!(session.summary().basic_pay(), Money::ZERO);
    }

    #[test]
    fn test_month_navigation_keeps_schedule() {
        let mut session = session();
        session.select_day(3).unwrap();
        session.set_start("09:00").unwrap();
        session.set_end("18:00").unwrap();
        session.add_entry().unwrap();

        session.next_month();
        session.next_month();
        session.prev_month();

        assert_eq!(
            session.cursor(),
            MonthCursor::new(Year::new(2026), Month::September)
        );
        assert_eq!(session.schedule().len(), 1);
        assert_eq!(session.summary().total_days(), 1);
    }

    #[test]
    fn test_select_day_outside_month_fails() {
        let mut session = session();

        assert!(session.select_day(32).is_err());
        assert_eq!(session.selected(), None);
    }
}
