//! Terminal host for the roster page: renders the worker list as text and
//! turns typed commands into page events.

use std::{
    io::{self, BufRead, Write},
    time::Duration,
};

use anyhow::{bail, Context, Result};
use roster_page::{ui::WorkerList, Alerter, DragEnd, PageEvent, RosterPage};
use shared::domain::{WorkerId, WorkerSummary};

const SETTLE_TIMEOUT: Duration = Duration::from_secs(10);

/// Prints alerts to stderr and waits for Enter, the terminal equivalent of a
/// modal dialog.
pub struct ConsoleAlerter;

impl Alerter for ConsoleAlerter {
    fn alert(&mut self, message: &str) {
        eprintln!("[alert] {message}");
        eprint!("(press Enter to continue) ");
        let _ = io::stderr().flush();
        let mut ack = String::new();
        let _ = io::stdin().lock().read_line(&mut ack);
    }
}

/// Parses `ID` or `ID:off` into a render row.
pub fn parse_worker_spec(raw: &str) -> Result<WorkerSummary, String> {
    let (id, flag) = match raw.split_once(':') {
        Some((id, flag)) => (id, Some(flag)),
        None => (raw, None),
    };
    let id: i64 = id
        .trim()
        .parse()
        .map_err(|_| format!("invalid worker id '{id}'"))?;
    let is_off = match flag.map(str::trim) {
        None | Some("on") => false,
        Some("off") => true,
        Some(other) => return Err(format!("invalid worker flag '{other}', expected 'on' or 'off'")),
    };
    Ok(WorkerSummary::new(WorkerId(id), format!("worker #{id}"), is_off))
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum ConsoleCommand {
    List,
    Move { from: usize, to: usize },
    Toggle(WorkerId),
    Help,
    Quit,
}

fn parse_command(line: &str) -> Result<ConsoleCommand> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(ConsoleCommand::List);
    };
    let mut next_number = |what: &str| -> Result<i64> {
        parts
            .next()
            .with_context(|| format!("missing {what}"))?
            .parse::<i64>()
            .with_context(|| format!("invalid {what}"))
    };

    match verb {
        "list" | "ls" => Ok(ConsoleCommand::List),
        "move" | "mv" => {
            let from = usize::try_from(next_number("source position")?)?;
            let to = usize::try_from(next_number("target position")?)?;
            Ok(ConsoleCommand::Move { from, to })
        }
        "toggle" | "t" => Ok(ConsoleCommand::Toggle(WorkerId(next_number("worker id")?))),
        "help" | "?" => Ok(ConsoleCommand::Help),
        "quit" | "exit" | "q" => Ok(ConsoleCommand::Quit),
        other => bail!("unknown command '{other}' (try 'help')"),
    }
}

pub fn render(list: Option<&WorkerList>) -> String {
    let Some(list) = list else {
        return "(no worker list on this page)".to_string();
    };
    if list.is_empty() {
        return "(worker list is empty)".to_string();
    }
    list.items()
        .iter()
        .enumerate()
        .map(|(position, item)| {
            let classes: Vec<&str> = item.classes().collect();
            format!(
                "{position:>3}. [{}] {:<16} {} ({})",
                item.id(),
                item.name(),
                item.toggle().label(),
                classes.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn run<A: Alerter>(mut page: RosterPage<A>) -> Result<()> {
    println!("{}", render(page.document().worker_list()));
    println!("commands: list | move FROM TO | toggle ID | quit");

    let stdin = io::stdin();
    loop {
        print!("roster> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = match parse_command(line.trim()) {
            Ok(command) => command,
            Err(err) => {
                eprintln!("{err:#}");
                continue;
            }
        };

        match command {
            ConsoleCommand::List => {}
            ConsoleCommand::Help => {
                println!("list                 show the worker list");
                println!("move FROM TO         drag the row at FROM to position TO");
                println!("toggle ID            click the OFF control of worker ID");
                println!("quit                 leave the console");
                continue;
            }
            ConsoleCommand::Quit => break,
            ConsoleCommand::Move { from, to } => {
                let Some(list) = page.document_mut().worker_list_mut() else {
                    eprintln!("this page has no worker list");
                    continue;
                };
                if let Err(err) = list.move_item(from, to) {
                    eprintln!("{err}");
                    continue;
                }
                page.handle(PageEvent::DragEnd(DragEnd {
                    old_index: from,
                    new_index: to,
                }));
                settle(&mut page);
            }
            ConsoleCommand::Toggle(worker_id) => {
                page.handle(PageEvent::ToggleClicked { worker_id });
                settle(&mut page);
            }
        }

        println!("{}", render(page.document().worker_list()));
    }

    Ok(())
}

fn settle<A: Alerter>(page: &mut RosterPage<A>) {
    if page.wait_for_events(SETTLE_TIMEOUT) == 0 {
        tracing::warn!("no backend result within {SETTLE_TIMEOUT:?}; it will be applied when it arrives");
    }
}
