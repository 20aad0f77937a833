extern crate ansi_term;
extern crate ctrlc;
extern crate linefeed;
use crate::lang::ESC;
use crate::mach::{Event, Runtime, ET_ABORT};
use ansi_term::Style;
use linefeed::{Interface, ReadResult};
use std::sync::atomic::Ordering;

/// Runs each file named on the command line, or reads command strings
/// from the terminal when there are none.
pub fn main() {
    env_logger::init();
    let mut runtime = Runtime::default();
    let interrupted = runtime.interrupt_handle();
    ctrlc::set_handler(move || {
        interrupted.store(true, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");
    let files: Vec<String> = std::env::args().skip(1).collect();
    if !files.is_empty() {
        let ok = batch(&mut runtime, &files);
        std::process::exit(if ok { 0 } else { 1 });
    }
    if let Err(error) = main_loop(runtime) {
        eprintln!("{}", error);
    }
}

fn batch(runtime: &mut Runtime, files: &[String]) -> bool {
    runtime.config_mut().et |= ET_ABORT;
    for name in files {
        let mut command = b"EI".to_vec();
        command.extend_from_slice(name.as_bytes());
        command.push(ESC);
        runtime.enter_bytes(&command);
        loop {
            match runtime.execute() {
                Event::Stopped => break,
                Event::Print(s) => print!("{}", s),
                Event::Error(s) => {
                    eprintln!("{}", s);
                    return false;
                }
                Event::Exit => return true,
            }
        }
    }
    true
}

fn main_loop(mut runtime: Runtime) -> std::io::Result<()> {
    let interface = Interface::new("TECO")?;
    let mut pending = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => {
                interface.set_prompt(if pending.is_empty() { "*" } else { "" })?;
                let line = match interface.read_line()? {
                    ReadResult::Input(line) => line,
                    ReadResult::Signal(_) | ReadResult::Eof => break,
                };
                if !pending.is_empty() {
                    pending.push('\n');
                }
                pending.push_str(&line);
                if !pending.ends_with("$$") {
                    continue;
                }
                let command = std::mem::take(&mut pending);
                if runtime.enter(&escapes(&command)) {
                    interface.add_history_unique(command);
                }
            }
            Event::Print(s) => {
                interface.write_fmt(format_args!("{}", s))?;
            }
            Event::Error(s) => {
                interface.write_fmt(format_args!("{}\n", Style::new().bold().paint(s)))?;
            }
            Event::Exit => break,
        }
    }
    Ok(())
}

/// The terminal has no key for ESC that survives line editing, so `$`
/// stands in for it. A command string ends with `$$`.
fn escapes(command: &str) -> String {
    command.replace('$', &char::from(ESC).to_string())
}
