use super::dispatch::Scan;
use super::expr::Arith;
use super::io::{Disk, Files, Terminal, TypeAhead};
use super::op::Operator;
use super::{Config, EditBuffer, Expr, Registers, Stack};
use crate::error;
use crate::lang::{printable, Cmd, CmdBuf, Error, Int, RegName};
use log::trace;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

type Result<T> = std::result::Result<T, Error>;

/// An active `<...>` iteration.
#[derive(Debug, Clone)]
pub struct Loop {
    /// Passes left including the current one; 0 runs until `;`.
    pub count: Int,
    pub start: usize,
    pub line: usize,
    pub if_depth: usize,
}

/// An open `"` conditional.
#[derive(Debug, Clone)]
pub struct Cond {
    pub loop_depth: usize,
    pub start: usize,
    pub else_pos: Option<usize>,
}

/// ## Interpreter state
///
/// Everything one TECO session owns. `Runtime` wraps this with the
/// event queue; the command bodies in the sibling modules are methods
/// on it.

pub struct Machine {
    pub config: Config,
    pub regs: Registers,
    pub edit: EditBuffer,
    pub(super) expr: Expr,
    pub(super) loops: Stack<Loop>,
    pub(super) ifs: Stack<Cond>,
    pub(super) buf: CmdBuf,
    pub(super) depth: usize,
    pub(super) skipping: bool,
    pub(super) cmd_start: usize,
    pub(super) out: Vec<u8>,
    pub(super) term: Box<dyn Terminal>,
    pub(super) files: Box<dyn Files>,
    pub(super) interrupted: Arc<AtomicBool>,
}

impl Machine {
    pub fn new(config: Config) -> Machine {
        let limits = config.limits;
        Machine {
            config,
            regs: Registers::default(),
            edit: EditBuffer::default(),
            expr: Expr::new(limits.expr),
            loops: Stack::new(limits.loops, "TOO MANY NESTED LOOPS"),
            ifs: Stack::new(limits.ifs, "TOO MANY NESTED CONDITIONALS"),
            buf: CmdBuf::default(),
            depth: 0,
            skipping: false,
            cmd_start: 0,
            out: vec![],
            term: Box::new(TypeAhead::default()),
            files: Box::new(Disk),
            interrupted: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Runs one top-level command string.
    pub fn execute(&mut self, text: &[u8]) -> Result<()> {
        self.buf = CmdBuf::new(text);
        self.expr.reset();
        self.run(Cmd::default())
    }

    /// Runs a register's text as a top-level macro.
    pub fn execute_register(&mut self, name: RegName) -> Result<()> {
        let text = self.regs.text(name).to_vec();
        let mut cmd = Cmd::default();
        self.expr.reset();
        self.invoke(CmdBuf::new(text), &mut cmd, !name.is_local())
    }

    /// Clears every stack after an error so the next command string
    /// starts clean. Registers and the edit buffer keep their contents.
    pub fn reset(&mut self) {
        self.expr.reset();
        self.loops.clear();
        self.ifs.clear();
        self.regs.reset();
        self.depth = 0;
        self.skipping = false;
    }

    /// The command string up to where it stopped, as typed.
    pub fn echo_failed(&self) -> String {
        let bytes = &self.buf.as_bytes()[..self.buf.pos()];
        bytes.iter().map(|&c| printable(c)).collect()
    }

    pub fn take_output(&mut self) -> Vec<u8> {
        std::mem::take(&mut self.out)
    }

    pub(super) fn arith(&self) -> Arith {
        Arith {
            precedence: self.config.precedence(),
            div_error: self.config.div_error() && !self.skipping,
        }
    }

    pub(super) fn push_operand(&mut self, val: Int) -> Result<()> {
        self.expr.push_operand(val)
    }

    pub(super) fn push_operator(&mut self, op: Operator) -> Result<()> {
        let arith = self.arith();
        self.expr.push_operator(op, arith)
    }

    pub(super) fn pop_pending(&mut self) -> Result<Option<Int>> {
        let arith = self.arith();
        self.expr.pop_pending(arith)
    }

    pub(super) fn pop_n(&mut self) -> Result<Option<Int>> {
        let arith = self.arith();
        self.expr.pop_n(arith)
    }

    pub(super) fn print(&mut self, bytes: &[u8]) {
        self.out.extend_from_slice(bytes);
    }

    pub(super) fn check_interrupt(&self) -> Result<()> {
        if self.interrupted.swap(false, Ordering::SeqCst) {
            return Err(error!(Interrupted));
        }
        Ok(())
    }

    /// The scan/exec loop over the active command buffer. `cmd` seeds
    /// the first command, carrying a caller's m argument into a macro.
    pub(super) fn run(&mut self, cmd: Cmd) -> Result<()> {
        let result = self.run_loop(cmd);
        let line = self.buf.line();
        result.map_err(|e| e.in_line_number(line))
    }

    fn run_loop(&mut self, mut cmd: Cmd) -> Result<()> {
        loop {
            self.check_interrupt()?;
            let entry = match self.scan_cmd(&mut cmd)? {
                Scan::End => break,
                Scan::Operand => continue,
                Scan::Command(entry) => entry,
            };
            trace!("exec {}", cmd);
            (entry.exec)(self, &mut cmd)?;
            self.next_cmd(&mut cmd, entry.keep)?;
        }
        self.check_closed()
    }

    /// Clears the record for the next command, handing n and m on when
    /// the command passes its arguments through.
    fn next_cmd(&mut self, cmd: &mut Cmd, keep: bool) -> Result<()> {
        let carry = keep || cmd.keep;
        let (m, n) = (cmd.m, cmd.n);
        *cmd = Cmd::default();
        self.expr.clear();
        if carry {
            cmd.m = m;
            if let Some(n) = n {
                self.expr.push_operand(n)?;
            }
        }
        Ok(())
    }

    fn check_closed(&self) -> Result<()> {
        if !self.loops.is_empty() {
            return Err(error!(MissingRightAngle));
        }
        if !self.ifs.is_empty() {
            return Err(error!(MissingApostrophe));
        }
        if self.expr.nesting() > 0 {
            return Err(error!(MissingRightParen));
        }
        Ok(())
    }
}
