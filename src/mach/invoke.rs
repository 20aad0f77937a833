use super::dispatch::Reject::*;
use super::Machine;
use crate::error;
use crate::lang::{Cmd, CmdBuf, Error, ErrorCode, Int};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

impl Machine {
    /// `Mq` runs a register's text. Unless colon-modified, or run from a
    /// local register, the macro gets its own local registers.
    pub(super) fn exec_macro(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let text = self.regs.text(reg).to_vec();
        let locals = !(cmd.colon || reg.is_local());
        debug!("macro {} ({} bytes)", reg, text.len());
        self.invoke(CmdBuf::new(text), cmd, locals)
    }

    /// `EIfile$` runs a file's text in a fresh local scope. `:EI`
    /// returns whether the file could be read.
    pub(super) fn exec_indirect(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon])?;
        let name = String::from_utf8_lossy(&cmd.text1).into_owned();
        let text = match self.files.read_all(&name) {
            Ok(text) => text,
            Err(e) if cmd.colon && e.code() == ErrorCode::FileNotFound => {
                cmd.returns_status(false);
                return Ok(());
            }
            Err(e) => return Err(e),
        };
        debug!("indirect file {} ({} bytes)", name, text.len());
        self.invoke(CmdBuf::new(text), cmd, true)?;
        if cmd.colon {
            cmd.returns_status(true);
        }
        Ok(())
    }

    /// Runs `buf` as a nested command string. The caller's buffer, loops
    /// and conditionals are set aside and restored afterwards whether or
    /// not the macro fails. A value the macro leaves behind becomes the
    /// caller's n.
    pub(super) fn invoke(&mut self, buf: CmdBuf, cmd: &mut Cmd, locals: bool) -> Result<()> {
        if self.depth >= self.config.limits.macros {
            return Err(error!(PushDownOverflow; "MACRO NESTING TOO DEEP"));
        }
        let caller_buf = std::mem::replace(&mut self.buf, buf);
        let caller_loops = self.loops.take();
        let caller_ifs = self.ifs.take();
        let caller_skipping = self.skipping;
        self.skipping = false;
        self.depth += 1;
        self.expr.push_context();
        if locals {
            self.regs.push_locals();
        }
        let result = self.invoke_body(cmd);
        if locals {
            self.regs.pop_locals();
        }
        self.expr.pop_context();
        self.depth -= 1;
        self.skipping = caller_skipping;
        self.ifs = caller_ifs;
        self.loops = caller_loops;
        self.buf = caller_buf;
        match result? {
            Some(value) => cmd.returns(value),
            None => {
                cmd.m = None;
                cmd.n = None;
            }
        }
        debug!("macro returned {:?}", cmd.n);
        Ok(())
    }

    fn invoke_body(&mut self, caller: &Cmd) -> Result<Option<Int>> {
        if let Some(n) = caller.n {
            self.expr.push_operand(n)?;
        }
        let mut first = Cmd::default();
        first.m = caller.m;
        self.run(first)?;
        self.pop_n()
    }
}
