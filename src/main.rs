mod agenda;
mod app;
mod calendar;
mod config;
mod form;
mod help;
mod logging;
mod planner;
mod popup;
mod sample;
mod tasks;
mod theme;
use crate::app::App;
use crate::config::Config;
use crate::planner::Planner;
use crate::tasks::{parse_date, TaskStore};
use anyhow::Context;
use flexi_logger::LoggerHandle;
use lexopt::{Arg, Parser, ValueExt};
use log::{info, warn};
use ratatui::DefaultTerminal;
use std::path::{Path, PathBuf};
use time::{Date, OffsetDateTime};

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run {
        date: Option<Date>,
        config: Option<PathBuf>,
        sample: bool,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut date = None;
        let mut config = None;
        let mut sample = false;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Short('c') | Arg::Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Arg::Long("sample") => sample = true,
                Arg::Value(value) if date.is_none() => {
                    let value = value.string()?;
                    match parse_date(&value) {
                        Ok(d) => date = Some(d),
                        Err(e) => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: Box::new(e),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run {
            date,
            config,
            sample,
        })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run {
                date,
                config,
                sample,
            } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                let _logger = start_logging(logging::default_log_dir().as_deref());
                let config = Config::load(config.as_deref()).context("failed to load config")?;
                let mut seeds = config.tasks;
                if sample {
                    seeds.extend(sample::sample_tasks());
                }
                let store = TaskStore::seeded(seeds).context("invalid initial tasks")?;
                info!("event=session_start today={today} seeded_tasks={}", store.len());
                let mut planner = Planner::new(today, store)
                    .week_starts_on(config.week_start)
                    .task_types(config.task_types);
                if let Some(date) = date {
                    planner = planner.starting_on(date);
                }
                let r = with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    App::new(planner).run(terminal)?;
                    Ok(())
                });
                match &r {
                    Ok(()) => info!("event=session_end status=ok"),
                    Err(e) => warn!("event=session_end status=error error={e:#}"),
                }
                r
            }
            Command::Help => {
                println!("Usage: dayplan [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Terminal day planner: a month calendar with a per-day task agenda");
                println!();
                println!("Options:");
                println!("  -c, --config PATH Read configuration from PATH");
                println!("      --sample      Start with a sample agenda for May 2024");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

/// Logging is optional: if it cannot be set up, say so on stderr before the
/// UI takes over the terminal and carry on without it
fn start_logging(log_dir: Option<&Path>) -> Option<LoggerHandle> {
    match logging::init(log_dir?) {
        Ok(handle) => Some(handle),
        Err(e) => {
            eprintln!("dayplan: warning: logging disabled: {:#}", anyhow::Error::new(e));
            None
        }
    }
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
