//! Interactive menu driver
//!
//! Reads single-letter commands, prompts for whatever each command needs and
//! reports the outcome. Every failure is printed and control returns to the
//! prompt; only the exit command (or end of input) stops the loop.

use std::io::{BufRead, Write};

use crate::audit::{AuditEntry, AuditLogger};
use crate::config::FleetPaths;
use crate::display::format_fleet_report;
use crate::error::{FleetError, FleetResult};
use crate::models::{ExpenseDecision, Money};
use crate::storage::FleetStore;

pub const MENU_PROMPT: &str = "(P)rint, (A)dd, (R)emove, (E)xpense, e(X)it : ";
const ADD_PROMPT: &str = "Please enter the new boat CSV data          : ";
const REMOVE_PROMPT: &str = "Which boat do you want to remove?           : ";
const EXPENSE_BOAT_PROMPT: &str = "Which boat do you want to spend on?         : ";
const EXPENSE_AMOUNT_PROMPT: &str = "How much do you want to spend?              : ";

/// A menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    Print,
    Add,
    Remove,
    Expense,
    Exit,
    Invalid,
}

impl MenuCommand {
    /// Parse from the first non-blank character of a line, ignoring case
    ///
    /// Returns `None` for a blank line.
    pub fn parse(line: &str) -> Option<Self> {
        let c = line.trim().chars().next()?;
        Some(match c.to_ascii_uppercase() {
            'P' => Self::Print,
            'A' => Self::Add,
            'R' => Self::Remove,
            'E' => Self::Expense,
            'X' => Self::Exit,
            _ => Self::Invalid,
        })
    }
}

/// The menu loop, generic over its input and output streams
pub struct Menu<R, W> {
    store: FleetStore,
    paths: FleetPaths,
    audit: AuditLogger,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(store: FleetStore, paths: FleetPaths, input: R, output: W) -> Self {
        let audit = AuditLogger::new(paths.audit_log());
        Self {
            store,
            paths,
            audit,
            input,
            output,
        }
    }

    /// Run until the exit command or end of input
    ///
    /// Only failures writing to the output stream are returned.
    pub fn run(&mut self) -> FleetResult<()> {
        loop {
            let line = match self.prompt(MENU_PROMPT)? {
                Some(line) => line,
                None => {
                    writeln!(self.output)?;
                    self.exit()?;
                    return Ok(());
                }
            };

            let command = match MenuCommand::parse(&line) {
                Some(command) => command,
                None => continue,
            };

            match command {
                MenuCommand::Print => self.print_fleet()?,
                MenuCommand::Add => self.add_boat()?,
                MenuCommand::Remove => self.remove_boat()?,
                MenuCommand::Expense => self.add_expense()?,
                MenuCommand::Exit => {
                    self.exit()?;
                    return Ok(());
                }
                MenuCommand::Invalid => writeln!(self.output, "Invalid menu option, try again")?,
            }
        }
    }

    pub fn into_store(self) -> FleetStore {
        self.store
    }

    /// Print `text` and read one line; `None` at end of input
    fn prompt(&mut self, text: &str) -> FleetResult<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn record(&self, entry: AuditEntry) {
        if let Err(e) = self.audit.log(&entry) {
            eprintln!("Warning: could not write activity log: {}", e);
        }
    }

    fn print_fleet(&mut self) -> FleetResult<()> {
        match self.store.totals() {
            Ok(totals) => {
                let report = format_fleet_report(self.store.boats(), totals);
                write!(self.output, "{}", report)?;
            }
            Err(e) => writeln!(self.output, "Error computing fleet totals: {}", e)?,
        }
        Ok(())
    }

    fn add_boat(&mut self) -> FleetResult<()> {
        let Some(line) = self.prompt(ADD_PROMPT)? else {
            return Ok(());
        };

        match self.store.add_record(&line) {
            Ok(boat) => {
                let entry = AuditEntry::create(boat.name(), boat);
                self.record(entry);
            }
            Err(e) => writeln!(self.output, "Error adding boat: {}", e)?,
        }
        Ok(())
    }

    fn remove_boat(&mut self) -> FleetResult<()> {
        let Some(line) = self.prompt(REMOVE_PROMPT)? else {
            return Ok(());
        };
        let name = line.trim();

        match self.store.remove(name) {
            Some(boat) => {
                writeln!(self.output, "Boat removed.")?;
                self.record(AuditEntry::delete(boat.name(), &boat));
            }
            None => writeln!(self.output, "Cannot find boat {}", name)?,
        }
        Ok(())
    }

    fn add_expense(&mut self) -> FleetResult<()> {
        let Some(line) = self.prompt(EXPENSE_BOAT_PROMPT)? else {
            return Ok(());
        };
        let name = line.trim().to_string();

        let Some(before) = self.store.find(&name).cloned() else {
            writeln!(self.output, "Cannot find boat {}", name)?;
            return Ok(());
        };

        let Some(text) = self.prompt(EXPENSE_AMOUNT_PROMPT)? else {
            return Ok(());
        };
        let amount = match Money::parse_with_symbol(&text) {
            Ok(amount) => amount,
            Err(_) => {
                writeln!(self.output, "Invalid amount: {}", text.trim())?;
                return Ok(());
            }
        };

        match self.store.charge_expense(&name, amount) {
            Ok(ExpenseDecision::Authorized { spent, .. }) => {
                writeln!(
                    self.output,
                    "Expense authorized, ${} spent.",
                    spent.format_plain()
                )?;
                if let Some(after) = self.store.find(&name).cloned() {
                    let summary = format!("expenses: {} -> {}", before.expenses(), after.expenses());
                    self.record(AuditEntry::update(after.name(), &before, &after, Some(summary)));
                }
            }
            Ok(ExpenseDecision::Rejected { remaining, .. }) => writeln!(
                self.output,
                "Expense not permitted, only $ {} left to spend.",
                remaining.format_plain()
            )?,
            Err(FleetError::NotFound { .. }) => writeln!(self.output, "Cannot find boat {}", name)?,
            Err(e) => writeln!(self.output, "Error recording expense: {}", e)?,
        }
        Ok(())
    }

    fn exit(&mut self) -> FleetResult<()> {
        let snapshot = self.paths.snapshot_file();
        match self.store.save_snapshot(&snapshot) {
            Ok(()) => self.record(AuditEntry::save(
                snapshot.display().to_string(),
                self.store.len(),
            )),
            Err(e) => writeln!(self.output, "Error saving fleet data: {}", e)?,
        }

        writeln!(self.output, "Exiting the Fleet Management System")?;
        self.output.flush()?;
        Ok(())
    }
}
