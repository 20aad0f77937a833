use teco::mach::{Event, Runtime};

/// Enters a command string, spelling ESC as `$`, and collects
/// everything it prints. Errors end with a newline.
pub fn exec(runtime: &mut Runtime, command: &str) -> String {
    runtime.enter(&command.replace('$', "\x1b"));
    drain(runtime)
}

pub fn drain(runtime: &mut Runtime) -> String {
    let mut s = String::new();
    loop {
        match runtime.execute() {
            Event::Stopped => break,
            Event::Print(ps) => s.push_str(&ps),
            Event::Error(es) => {
                s.push_str(&es);
                s.push('\n');
            }
            Event::Exit => {
                s.push_str("EXIT\n");
                break;
            }
        }
    }
    s
}
