use super::config::{EH_ECHO, EH_TERSE};
use super::io::{Files, Terminal};
use super::{Config, EditBuffer, Machine, Registers};
use crate::lang::{Error, ErrorCode, RegName};
use log::debug;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// ## Interpreter events
///
/// What the caller must act on after each `execute`.

#[derive(Debug, PartialEq)]
pub enum Event {
    Stopped,
    Print(String),
    Error(String),
    Exit,
}

enum Job {
    Command(Vec<u8>),
    Macro(RegName),
}

/// ## Top-level read/execute entry point
///
/// Accepts one command string at a time and reports its output and
/// errors as events. Errors stop here: every interpreter stack is reset
/// so the next command string starts clean.

pub struct Runtime {
    machine: Machine,
    job: Option<Job>,
    events: VecDeque<Event>,
}

impl Default for Runtime {
    fn default() -> Self {
        Runtime::new(Config::default())
    }
}

impl Runtime {
    pub fn new(config: Config) -> Runtime {
        Runtime {
            machine: Machine::new(config),
            job: None,
            events: VecDeque::new(),
        }
    }

    pub fn with_terminal<T: Terminal + 'static>(mut self, term: T) -> Runtime {
        self.machine.term = Box::new(term);
        self
    }

    pub fn with_files<F: Files + 'static>(mut self, files: F) -> Runtime {
        self.machine.files = Box::new(files);
        self
    }

    /// Queues a command string. Returns false if it holds only
    /// whitespace.
    pub fn enter(&mut self, command: &str) -> bool {
        self.enter_bytes(command.as_bytes())
    }

    pub fn enter_bytes(&mut self, command: &[u8]) -> bool {
        if command.iter().all(|&c| crate::lang::is_whitespace(c)) {
            return false;
        }
        self.job = Some(Job::Command(command.to_vec()));
        true
    }

    /// Queues a register to run as a macro.
    pub fn invoke(&mut self, name: RegName) {
        self.job = Some(Job::Macro(name));
    }

    /// Runs whatever was queued and hands back its events one at a time,
    /// then `Stopped`.
    pub fn execute(&mut self) -> Event {
        if let Some(event) = self.events.pop_front() {
            return event;
        }
        match self.job.take() {
            Some(job) => {
                self.run(job);
                self.events.pop_front().unwrap_or(Event::Stopped)
            }
            None => {
                // An interrupt while idle has nothing to stop.
                self.machine.interrupted.store(false, Ordering::SeqCst);
                Event::Stopped
            }
        }
    }

    pub fn interrupt(&mut self) {
        self.machine.interrupted.store(true, Ordering::SeqCst);
    }

    /// The flag `interrupt` sets, for signal handlers.
    pub fn interrupt_handle(&self) -> Arc<AtomicBool> {
        self.machine.interrupted.clone()
    }

    pub fn config(&self) -> &Config {
        &self.machine.config
    }

    pub fn config_mut(&mut self) -> &mut Config {
        &mut self.machine.config
    }

    pub fn registers(&self) -> &Registers {
        &self.machine.regs
    }

    pub fn registers_mut(&mut self) -> &mut Registers {
        &mut self.machine.regs
    }

    pub fn edit_buffer(&self) -> &EditBuffer {
        &self.machine.edit
    }

    fn run(&mut self, job: Job) {
        let result = match job {
            Job::Command(text) => self.machine.execute(&text),
            Job::Macro(name) => self.machine.execute_register(name),
        };
        let out = self.machine.take_output();
        if !out.is_empty() {
            self.events
                .push_back(Event::Print(String::from_utf8_lossy(&out).into_owned()));
        }
        if let Err(error) = result {
            self.report(error);
        }
    }

    fn report(&mut self, error: Error) {
        debug!("reset after {}", error);
        let echo = self.machine.echo_failed();
        self.machine.reset();
        match error.code() {
            ErrorCode::Stopped => return,
            ErrorCode::Exit => {
                self.events.push_back(Event::Exit);
                return;
            }
            _ => {}
        }
        let config = &self.machine.config;
        let mut message = if config.eh & 3 == EH_TERSE {
            format!("?{}", error.code().mnemonic())
        } else {
            error.to_string()
        };
        if config.eh & EH_ECHO != 0 {
            message.push('\n');
            message.push_str(&echo);
        }
        let abort = config.abort_on_error();
        self.events.push_back(Event::Error(message));
        if abort {
            self.events.push_back(Event::Exit);
        }
    }
}
