use wage_sheet::input::{toml_input, Config};
use wage_sheet::payroll::{self, PayrollSummary};

/// Builds a sheet file from a wage and a list of `(date, start, end)`
/// entries.
#[must_use]
pub fn make_sheet(wage: f64, entries: &[(&str, &str, &str)]) -> String {
    let mut sheet = format!(
        concat!(
            //
            "[general]\n",
            "wage = {wage}\n",
            "\n",
        ),
        wage = wage
    );

    for (date, start, end) in entries {
        sheet.push_str(&format!(
            concat!(
                "[entry.{date}]\n",
                "start = \"{start}\"\n",
                "end = \"{end}\"\n",
                "\n",
            ),
            date = date,
            start = start,
            end = end,
        ));
    }

    sheet
}

#[must_use]
pub fn make_config(input: &str) -> Config {
    let sheet: toml_input::Sheet = toml::from_str(input).expect("sheet should be valid");
    Config::from_toml(sheet).build()
}

#[must_use]
#[allow(dead_code)]
pub fn summarize(input: &str) -> PayrollSummary {
    let config = make_config(input);
    payroll::calculate(config.schedule(), config.wage())
}

#[allow(dead_code)]
pub fn debug_setup() {
    std::env::set_var("RUST_BACKTRACE", "1");
    std::env::set_var("RUST_APP_LOG", "trace");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");
}
