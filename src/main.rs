use std::env;
use std::ffi::OsStr;
use std::io::{self, BufRead, Write};

use log::error;
use seahorse::{App, Command, Context, Flag, FlagType};

use wage_sheet::calendar::MonthCursor;
use wage_sheet::generate_pay_report;
use wage_sheet::input::Config;
use wage_sheet::report;
use wage_sheet::session::Session;
use wage_sheet::time::Date;

fn set_env_if_absent<K: AsRef<OsStr>, V: AsRef<OsStr>>(var: K, default: impl FnOnce() -> V) {
    if env::var(var.as_ref()).is_err() {
        env::set_var(var, default());
    }
}

fn main() {
    set_env_if_absent("RUST_APP_LOG", || "info");
    color_backtrace::install();
    pretty_env_logger::init_custom_env("RUST_APP_LOG");

    if let Err(e) = run() {
        error!("{:?}", e);
        ::std::process::exit(1);
    }
}

mod seahorse_exts {
    use std::path::PathBuf;

    use anyhow::Context as _;
    use seahorse::Context;

    pub trait ContextExt {
        fn context(&self) -> &Context;

        fn required_string_flag(&self, name: &str) -> Result<String, anyhow::Error> {
            self.context()
                .string_flag(name)
                .with_context(|| anyhow::anyhow!("missing required flag \"{}\"", name))
        }

        fn required_path_flag(&self, name: &str) -> Result<PathBuf, anyhow::Error> {
            self.required_string_flag(name).map(PathBuf::from)
        }
    }

    impl ContextExt for Context {
        fn context(&self) -> &Context {
            self
        }
    }
}

use seahorse_exts::ContextExt;

/// Logs the error and exits, seahorse actions have no error channel.
fn fail(e: anyhow::Error) -> ! {
    error!("{:?}", e);
    ::std::process::exit(1);
}

fn report_action(context: &Context) {
    if let Err(e) = load_config(context).and_then(|config| generate_pay_report(&config)) {
        fail(e);
    }
}

fn interactive_action(context: &Context) {
    if let Err(e) = interactive(context) {
        fail(e);
    }
}

fn load_config(context: &Context) -> anyhow::Result<Config> {
    let sheet = context.required_path_flag("sheet")?;
    let mut builder = Config::try_from_toml_file(sheet)?;

    if let Ok(output) = context.string_flag("output") {
        builder.output(output);
    }
    builder.json(context.bool_flag("json"));

    Ok(builder.build())
}

fn run() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();

    let report_command = Command::new("report")
        .usage(format!("{} report [args]", args[0]))
        .description("Computes a pay report from the given sheet file.")
        .flag(Flag::new("sheet", FlagType::String).description("Path to the sheet file."))
        .flag(
            Flag::new("output", FlagType::String)
                .description("[optional] Path to the output file. Default: print to stdout"),
        )
        .flag(
            Flag::new("json", FlagType::Bool)
                .description("[optional] Emit the summary as json instead of text."),
        )
        .action(report_action);

    let interactive_command = Command::new("interactive")
        .usage(format!("{} interactive [args]", args[0]))
        .description("Starts a line-oriented calculator session.")
        .flag(
            Flag::new("sheet", FlagType::String)
                .description("[optional] Sheet file to preload the session from."),
        )
        .action(interactive_action);

    let app = App::new(env!("CARGO_PKG_NAME"))
        .description(env!("CARGO_PKG_DESCRIPTION"))
        .version(env!("CARGO_PKG_VERSION"))
        .usage(format!("{} [command] [args]", args[0]))
        .command(report_command)
        .command(interactive_command);

    app.run(args);

    Ok(())
}

const INTERACTIVE_HELP: &str = concat!(
    "commands:\n",
    "  wage <amount>         set the hourly wage\n",
    "  select <day>          select a day of the displayed month\n",
    "  start <HH:MM>         enter the start time for the selected day\n",
    "  end <HH:MM>           enter the end time for the selected day\n",
    "  add [<start> <end>]   register the entry for the selected day\n",
    "  remove <day>          delete the entry of a day\n",
    "  prev / next           switch the displayed month\n",
    "  quit                  leave the session\n",
);

fn render_session(session: &Session) -> String {
    let mut out = String::new();

    out.push_str(&report::render_calendar(
        &session.cursor(),
        session.schedule(),
        session.selected(),
    ));
    out.push('\n');

    if !session.schedule().is_empty() {
        out.push_str(&report::render_entries(session.schedule()));
        out.push('\n');
    }

    out.push_str(&format!("hourly wage:        {}\n", session.wage()));
    out.push_str(&report::render_summary(session.summary()));
    out
}

fn handle_line(session: &mut Session, line: &str) {
    let mut words = line.split_whitespace();

    let command = match words.next() {
        Some(command) => command,
        None => return,
    };

    let result = match (command, words.next(), words.next()) {
        ("wage", Some(amount), None) => {
            session.set_wage_input(amount);
            Ok(())
        }
        ("select", Some(day), None) => select(session, day),
        ("start", Some(time), None) => session.set_start(time).map_err(|e| e.to_string()),
        ("end", Some(time), None) => session.set_end(time).map_err(|e| e.to_string()),
        ("add", None, None) => session.add_entry().map(|_| ()).map_err(|e| e.to_string()),
        ("add", Some(start), Some(end)) => add_with_times(session, start, end),
        ("remove", Some(day), None) => remove(session, day),
        ("prev", None, None) => {
            session.prev_month();
            Ok(())
        }
        ("next", None, None) => {
            session.next_month();
            Ok(())
        }
        ("help", None, None) => {
            println!("{}", INTERACTIVE_HELP);
            Ok(())
        }
        _ => Err(format!(
            "unknown command \"{}\", try \"help\"",
            line.trim()
        )),
    };

    if let Err(warning) = result {
        println!("! {}", warning);
    }
}

fn add_with_times(session: &mut Session, start: &str, end: &str) -> Result<(), String> {
    session.set_start(start).map_err(|e| e.to_string())?;
    session.set_end(end).map_err(|e| e.to_string())?;
    session.add_entry().map(|_| ()).map_err(|e| e.to_string())
}

/// Accepts either a day of the displayed month or a full date.
fn parse_day(session: &Session, input: &str) -> Result<Date, String> {
    if let Ok(day) = input.parse::<usize>() {
        session.cursor().select(day).map_err(|e| e.to_string())
    } else {
        input.parse::<Date>().map_err(|e| e.to_string())
    }
}

fn select(session: &mut Session, input: &str) -> Result<(), String> {
    let date = parse_day(session, input)?;
    session.select_date(date);
    Ok(())
}

fn remove(session: &mut Session, input: &str) -> Result<(), String> {
    let date = parse_day(session, input)?;

    if session.remove_entry(date).is_none() {
        println!("no entry was recorded for {}", date);
    }

    Ok(())
}

fn interactive(context: &Context) -> anyhow::Result<()> {
    let mut session = Session::new(MonthCursor::from(Date::today()));

    if let Ok(sheet) = context.string_flag("sheet") {
        let config = Config::try_from_toml_file(sheet)?.build();
        session = session
            .with_schedule(config.schedule().clone())
            .with_wage(config.wage());
    }

    println!("{}", INTERACTIVE_HELP);

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("{}\n> ", render_session(&session));
        stdout.flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        if matches!(line.trim(), "quit" | "q" | "exit") {
            break;
        }

        handle_line(&mut session, &line);
    }

    Ok(())
}
