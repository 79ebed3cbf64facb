//! Interactive logging session: one form, one list, the five actions.

use crate::config::Config;
use crate::core::reminder::{REMINDER_TEXT, Reminder};
use crate::core::{EntryLog, Form};
use crate::errors::AppResult;
use crate::export::notify_export_success;
use crate::models::entry::{Field, RawEntry};
use crate::models::status::Status;
use crate::ui::messages::{error, header, info, success, warning};
use crate::utils::colors::{dim, paint_status};
use crate::utils::mins2readable;
use crate::utils::table::Table;
use std::io::{self, BufRead, IsTerminal, Write};

const HELP: &str = "\
Form:
  name <text>          set the student name
  activity <text>      set the mental wellness activity
  metime <text>        set the me-time activity
  minutes <n>          set the screen-free time (shows the live status)
  form                 show the form
  reset                clear the form
Log:
  add                  add the form as a new entry
  add <name> | <activity> | <metime> | <minutes>
  list                 list logged entries
  del <n>              delete entry n (as numbered by `list`)
  clear                clear all entries
  save                 save all entries to the export file
Other:
  status <minutes>     classify a number of minutes
  help                 show this help
  quit                 leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    Set(Field, String),
    ShowForm,
    Submit,
    AddInline(RawEntry),
    List,
    /// 0-based position, `None` when nothing was selected.
    Delete(Option<usize>),
    ClearAll,
    Save,
    ResetForm,
    Status(String),
    Help,
    Quit,
}

impl SessionCommand {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> Result<Option<Self>, String> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((k, r)) => (k, r.trim()),
            None => (line, ""),
        };

        if let Some(field) = Field::from_keyword(keyword) {
            return Ok(Some(SessionCommand::Set(field, rest.to_string())));
        }

        let cmd = match keyword.to_lowercase().as_str() {
            "form" => SessionCommand::ShowForm,
            "add" if rest.is_empty() => SessionCommand::Submit,
            "add" => SessionCommand::AddInline(parse_inline(rest)?),
            "list" | "ls" => SessionCommand::List,
            "del" | "delete" => SessionCommand::Delete(parse_position(rest)?),
            "clear" => SessionCommand::ClearAll,
            "save" => SessionCommand::Save,
            "reset" => SessionCommand::ResetForm,
            "status" => SessionCommand::Status(rest.to_string()),
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(format!("Unknown command '{other}'. Type 'help'.")),
        };

        Ok(Some(cmd))
    }
}

/// "name | activity | metime | minutes"
fn parse_inline(rest: &str) -> Result<RawEntry, String> {
    let parts: Vec<&str> = rest.split('|').map(str::trim).collect();
    match parts.as_slice() {
        [name, activity, me_time, minutes] => Ok(RawEntry::new(*name, *activity, *me_time, *minutes)),
        _ => Err("Usage: add <name> | <activity> | <metime> | <minutes>".to_string()),
    }
}

/// 1-based position as typed → 0-based selection.
fn parse_position(rest: &str) -> Result<Option<usize>, String> {
    if rest.is_empty() {
        return Ok(None);
    }
    match rest.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(Some(n - 1)),
        _ => Err(format!("Invalid position '{rest}': use a number from 'list' (1, 2, ...)")),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    log: EntryLog,
    form: Form,
}

impl Session {
    pub fn new(log: EntryLog) -> Self {
        Self {
            log,
            form: Form::new(),
        }
    }

    pub fn log(&self) -> &EntryLog {
        &self.log
    }

    pub fn form(&self) -> &Form {
        &self.form
    }

    pub fn execute(&mut self, cmd: SessionCommand) -> AppResult<Flow> {
        match cmd {
            SessionCommand::Set(field, value) => {
                self.form.set(field, value);
                if field == Field::ScreenTime {
                    info(format!("Wellness status: {}", paint_status(self.form.status())));
                }
            }
            SessionCommand::ShowForm => self.print_form(),
            SessionCommand::Submit => {
                let entry = self.form.submit(&mut self.log)?;
                success(format!(
                    "Record added successfully: {} [{}]",
                    entry.display_line(),
                    paint_status(entry.status)
                ));
            }
            SessionCommand::AddInline(raw) => {
                let entry = self.log.add(&raw)?;
                success(format!(
                    "Record added successfully: {} [{}]",
                    entry.display_line(),
                    paint_status(entry.status)
                ));
            }
            SessionCommand::List => self.print_list(),
            SessionCommand::Delete(selection) => {
                let removed = self.log.delete_at(selection)?;
                success(format!("Record deleted successfully: {}", removed.display_line()));
            }
            SessionCommand::ClearAll => {
                self.log.clear_all();
                success("All records cleared.");
            }
            SessionCommand::Save => {
                let outcome = self.log.export_all()?;
                notify_export_success(outcome.format.as_str(), &outcome.path);
                info(format!("{} records saved.", outcome.rows));
                if let Some(w) = outcome.viewer_warning {
                    warning(w);
                }
            }
            SessionCommand::ResetForm => {
                self.form.clear();
                info("Form cleared.");
            }
            SessionCommand::Status(raw) => {
                info(format!("Wellness status: {}", paint_status(Status::from_raw(&raw))));
            }
            SessionCommand::Help => println!("{HELP}"),
            SessionCommand::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Read commands until `quit` or end of input. Failed commands and
    /// unreadable lines are reported and the loop goes on.
    pub fn run<R: BufRead>(&mut self, mut input: R, interactive: bool) -> AppResult<()> {
        let mut buf = Vec::new();

        loop {
            if interactive {
                print!("wellness> ");
                io::stdout().flush().ok();
            }

            buf.clear();
            match input.read_until(b'\n', &mut buf) {
                Ok(0) => break,
                Ok(_) => {}
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    // input is gone, keep what is in memory and leave quietly
                    log::error!("session input failed: {e:?}");
                    error(format!("Failed to read input: {e}"));
                    break;
                }
            }

            let Ok(line) = std::str::from_utf8(&buf) else {
                error("Ignoring input line: not valid UTF-8.");
                continue;
            };

            let cmd = match SessionCommand::parse(line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(msg) => {
                    error(msg);
                    continue;
                }
            };

            match self.execute(cmd) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    if !e.is_user_error() {
                        log::error!("session command failed: {e:?}");
                    }
                    error(e);
                }
            }
        }

        Ok(())
    }

    fn print_form(&self) {
        for field in Field::ALL {
            let value = self.form.get(field);
            let shown = if value.is_empty() { dim("(empty)") } else { value.to_string() };
            println!("{:<26} {}", format!("{}:", field.label()), shown);
        }
        println!("{:<26} {}", "Wellness Status:", paint_status(self.form.status()));
    }

    fn print_list(&self) {
        let entries = self.log.entries();
        if entries.is_empty() {
            info("No entries logged yet.");
            return;
        }

        header("Logged Entries");

        let mut table = Table::new(["#", "Entry", "Status"]);
        for (i, e) in entries.iter().enumerate() {
            table.add_row(vec![
                (i + 1).to_string(),
                e.display_line(),
                e.status.label().to_string(),
            ]);
        }
        print!("{}", table.render());

        let healthy = entries.iter().filter(|e| e.status.is_healthy()).count();
        let total: u64 = entries.iter().map(|e| u64::from(e.off_screen_minutes)).sum();
        println!(
            "\n{} entries, {} healthy, {} screen-free",
            entries.len(),
            healthy,
            mins2readable(total)
        );
    }
}

/// Handle the `session` command (also the default when no command is given).
pub fn handle(no_reminder: bool, cfg: &Config) -> AppResult<()> {
    let log = EntryLog::new(cfg.append_path(), cfg.export_path())?
        .open_after_export(cfg.open_after_export);

    info(format!("Appending entries to {}", log.append_path().display()));
    info("Type 'help' for the list of commands.");

    let mut reminder = if cfg.reminder_enabled && !no_reminder {
        Some(Reminder::start(cfg.reminder_interval(), true, || {
            info(REMINDER_TEXT)
        }))
    } else {
        None
    };

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();

    let mut session = Session::new(log);
    let result = session.run(stdin.lock(), interactive);

    if let Some(r) = reminder.as_mut() {
        r.stop();
    }

    result
}
