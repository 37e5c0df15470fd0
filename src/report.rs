use crate::calendar::MonthCursor;
use crate::payroll::{PayrollSummary, Schedule};
use crate::time::{Date, WeekDay};

/// The currency suffix of all displayed amounts. Only one locale is
/// supported.
pub const CURRENCY: &str = "KRW";

/// Renders the list of recorded work entries, one line per day in
/// ascending date order.
#[must_use]
pub fn render_entries(schedule: &Schedule) -> String {
    let mut out = String::new();

    for entry in schedule.iter() {
        out.push_str(&format!(
            "{}: {} ~ {} ({} hours)\n",
            entry.date(),
            entry.start(),
            entry.end(),
            entry.hours()
        ));
    }

    out
}

/// Renders the summary block of a pay report.
#[must_use]
pub fn render_summary(summary: &PayrollSummary) -> String {
    let mut out = String::new();

    out.push_str(&format!("total days:         {}\n", summary.total_days()));
    out.push_str(&format!("total hours:        {}\n", summary.total_hours()));
    out.push_str(&format!(
        "basic pay:          {} {}\n",
        summary.basic_pay(),
        CURRENCY
    ));
    out.push_str(&format!(
        "weekly holiday pay: {} {}\n",
        summary.weekly_holiday_pay(),
        CURRENCY
    ));
    out.push_str(&format!(
        "total pay:          {} {}\n",
        summary.total_pay(),
        CURRENCY
    ));
    out.push_str(&format!(
        "eligible weeks:     {} of {}\n",
        summary.eligible_weeks(),
        summary.total_weeks()
    ));

    out
}

/// Renders the full text report: the entry list followed by the summary.
#[must_use]
pub fn render_report(schedule: &Schedule, summary: &PayrollSummary) -> String {
    let mut out = String::new();

    if !schedule.is_empty() {
        out.push_str(&render_entries(schedule));
        out.push('\n');
    }

    out.push_str(&render_summary(summary));
    out
}

/// Renders the displayed month as a Sunday-based calendar grid.
///
/// A day with a recorded entry is marked with `*`, the selected day with a
/// leading `>`.
#[must_use]
pub fn render_calendar(cursor: &MonthCursor, schedule: &Schedule, selected: Option<Date>) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:^28}\n",
        format!("{} {}", cursor.month().name(), cursor.year())
    ));

    for day in WeekDay::week() {
        out.push_str(&format!(" {} ", day.label()));
    }
    out.push('\n');

    let mut column = cursor.first_week_day().as_usize();
    out.push_str(&"    ".repeat(column));

    for date in cursor.dates() {
        let marker = if schedule.contains(date) { '*' } else { ' ' };
        let cursor_char = if selected == Some(date) { '>' } else { ' ' };

        out.push_str(&format!("{}{:>2}{}", cursor_char, date.day(), marker));

        column += 1;
        if column == 7 {
            column = 0;
            out.push('\n');
        }
    }

    if column != 0 {
        out.push('\n');
    }

    out
}
