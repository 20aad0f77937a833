use crate::mach::{Event, Runtime};

mod expr_test;
mod flow_test;
mod register_test;

/// Command strings in tests spell ESC as `$`.
fn teco(s: &str) -> String {
    s.replace('$', "\x1b")
}

fn run(runtime: &mut Runtime, command: &str) -> String {
    runtime.enter(&teco(command));
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Error(es) => {
                s.push_str(&es);
                s.push('\n');
            }
            Event::Exit => s.push_str("EXIT\n"),
        }
    }
    s
}
