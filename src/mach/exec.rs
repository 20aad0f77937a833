use super::dispatch::Reject::{self, *};
use super::Machine;
use crate::error;
use crate::lang::{Cmd, Error, ErrorCode, Int};

type Result<T> = std::result::Result<T, Error>;

const NO_MODIFIERS: &[Reject] = &[Colon, DColon, AtSign];

impl Machine {
    pub(super) fn exec_nop(&mut self, _cmd: &mut Cmd) -> Result<()> {
        Ok(())
    }

    // *** Output and environment

    pub(super) fn exec_print_number(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        let n = cmd.n.ok_or_else(|| error!(NoArgEquals))?;
        let mut s = match (cmd.c2, cmd.c3) {
            (b'=', b'=') => format!("{:X}", n),
            (b'=', _) => format!("{:o}", n),
            _ => n.to_string(),
        };
        if !cmd.colon {
            s.push('\n');
        }
        self.print(s.as_bytes());
        Ok(())
    }

    pub(super) fn exec_ctrl_a(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, M, N])?;
        let text = std::mem::take(&mut cmd.text1);
        self.print(&text);
        if cmd.colon {
            self.print(b"\n");
        }
        Ok(())
    }

    pub(super) fn exec_type(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        match cmd.n {
            Some(n) if (0..=255).contains(&n) => {
                self.print(&[n as u8]);
                Ok(())
            }
            _ => Err(error!(BadArguments; cmd.to_string())),
        }
    }

    pub(super) fn exec_stop(&mut self, _cmd: &mut Cmd) -> Result<()> {
        Err(error!(Stopped))
    }

    pub(super) fn exec_exit(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, NO_MODIFIERS)?;
        Err(error!(Exit))
    }

    pub(super) fn exec_decimal(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        self.config.radix = 10;
        Ok(())
    }

    pub(super) fn exec_octal(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        self.config.radix = 8;
        Ok(())
    }

    pub(super) fn exec_radix(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        match cmd.n {
            Some(n) if n == 8 || n == 10 || n == 16 => {
                self.config.radix = n;
                Ok(())
            }
            Some(n) => Err(error!(IllegalRadix; n.to_string())),
            None => Err(error!(NoArgument; cmd.name())),
        }
    }

    pub(super) fn exec_trace(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, N])?;
        self.config.trace = !self.config.trace;
        Ok(())
    }

    /// `nEx` sets a flag, `m,nEx` clears the bits of m then sets n.
    pub(super) fn exec_flag(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, NO_MODIFIERS)?;
        let n = cmd.n.unwrap_or(0);
        let flag = self.flag_mut(cmd.c2);
        *flag = match cmd.m {
            Some(m) => (*flag & !m) | n,
            None => n,
        };
        Ok(())
    }

    /// `EQqfile$` loads a file into a register, `E%qfile$` writes one.
    pub(super) fn exec_file_register(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, M, N])?;
        let reg = match cmd.reg {
            Some(reg) => reg,
            None => return Err(error!(IllegalRegister)),
        };
        let name = String::from_utf8_lossy(&cmd.text1).into_owned();
        let result = if cmd.c2 == b'Q' {
            match self.files.read_all(&name) {
                Ok(bytes) => {
                    self.regs.set_text(reg, bytes);
                    Ok(())
                }
                Err(e) => Err(e),
            }
        } else {
            let text = self.regs.text(reg).to_vec();
            self.files.write_all(&name, &text)
        };
        match result {
            Ok(()) if cmd.colon => {
                cmd.returns_status(true);
                Ok(())
            }
            Err(e) if cmd.colon && e.code() == ErrorCode::FileNotFound => {
                cmd.returns_status(false);
                Ok(())
            }
            other => other,
        }
    }

    pub(super) fn exec_search(&mut self, cmd: &mut Cmd) -> Result<()> {
        Err(error!(NotImplemented; cmd.name()))
    }

    // *** Registers

    pub(super) fn exec_set(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, NO_MODIFIERS)?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let n = cmd.n.ok_or_else(|| error!(NoArgU))?;
        self.regs.set_value(reg, n);
        match cmd.m {
            Some(m) => cmd.returns(m),
            None => cmd.n = None,
        }
        Ok(())
    }

    pub(super) fn exec_add(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let value = self
            .regs
            .value(reg)
            .checked_add(cmd.n.unwrap_or(1))
            .ok_or_else(|| error!(Overflow))?;
        self.regs.set_value(reg, value);
        cmd.returns(value);
        Ok(())
    }

    pub(super) fn exec_ctrl_u(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, M, NegN])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let text = match cmd.n {
            Some(n) if (0..=255).contains(&n) => vec![n as u8],
            Some(_) => return Err(error!(BadArguments; cmd.to_string())),
            None => std::mem::take(&mut cmd.text1),
        };
        if cmd.colon {
            self.regs.append(reg, &text);
        } else {
            self.regs.set_text(reg, text);
        }
        cmd.n = None;
        Ok(())
    }

    pub(super) fn exec_copy(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, MWithoutN])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let (from, to) = self.range(cmd)?;
        let text = self.edit.slice(from, to);
        if cmd.colon {
            self.regs.append(reg, &text);
        } else {
            self.regs.set_text(reg, text);
        }
        Ok(())
    }

    pub(super) fn exec_get(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M, N])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let text = self.regs.text(reg).to_vec();
        if cmd.colon {
            self.print(&text);
        } else {
            self.edit.insert(&text);
        }
        Ok(())
    }

    pub(super) fn exec_push(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, NO_MODIFIERS)?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        self.regs.push_saved(reg);
        Ok(())
    }

    pub(super) fn exec_pop(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign])?;
        let reg = cmd.reg.ok_or_else(|| error!(IllegalRegister))?;
        let popped = self.regs.pop_saved(reg);
        if cmd.colon {
            cmd.returns_status(popped);
        } else if !popped {
            return Err(error!(CantPop; reg.to_string()));
        }
        Ok(())
    }

    // *** Edit buffer

    /// The span named by `m,n`, or by n lines from dot.
    fn range(&self, cmd: &Cmd) -> Result<(usize, usize)> {
        let len = self.edit.len() as Int;
        match (cmd.m, cmd.n) {
            (Some(m), Some(n)) => {
                let (from, to) = if m <= n { (m, n) } else { (n, m) };
                if from < 0 || to > len {
                    return Err(error!(PointerOffPage; cmd.to_string()));
                }
                Ok((from as usize, to as usize))
            }
            (Some(_), None) => Err(error!(NoArgument; cmd.name())),
            (None, n) => {
                let dot = self.edit.dot() as Int;
                let count = self.edit.lines(n.unwrap_or(1));
                if count >= 0 {
                    Ok((dot as usize, (dot + count) as usize))
                } else {
                    Ok(((dot + count) as usize, dot as usize))
                }
            }
        }
    }

    /// Reports a failed move as a status under colon, else as `POP`.
    fn moved(&mut self, cmd: &mut Cmd, ok: bool) -> Result<()> {
        if cmd.colon {
            cmd.returns_status(ok);
            Ok(())
        } else if ok {
            Ok(())
        } else {
            Err(error!(PointerOffPage; cmd.to_string()))
        }
    }

    fn move_dot(&mut self, cmd: &mut Cmd, offset: Int) -> Result<()> {
        let ok = match self.edit.offset(offset) {
            Some(pos) => self.edit.set_dot(pos),
            None => false,
        };
        self.moved(cmd, ok)
    }

    pub(super) fn exec_move(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        let n = cmd.n.unwrap_or(1);
        self.move_dot(cmd, n)
    }

    pub(super) fn exec_reverse(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        let n = cmd.n.unwrap_or(1);
        let n = n.checked_neg().ok_or_else(|| error!(Overflow))?;
        self.move_dot(cmd, n)
    }

    pub(super) fn exec_jump(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M])?;
        let n = cmd.n.unwrap_or(0);
        let ok = n >= 0 && self.edit.set_dot(n as usize);
        self.moved(cmd, ok)
    }

    pub(super) fn exec_line(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        let count = self.edit.lines(cmd.n.unwrap_or(1));
        self.move_dot(cmd, count)
    }

    pub(super) fn exec_delete(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, MWithoutN])?;
        if cmd.m.is_some() {
            return self.exec_kill(cmd);
        }
        let ok = self.edit.delete(cmd.n.unwrap_or(1));
        self.moved(cmd, ok)
    }

    pub(super) fn exec_kill(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, MWithoutN])?;
        let (from, to) = self.range(cmd)?;
        self.edit.set_dot(from);
        self.edit.delete((to - from) as Int);
        Ok(())
    }

    pub(super) fn exec_list(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, MWithoutN])?;
        let (from, to) = self.range(cmd)?;
        let text = self.edit.slice(from, to);
        self.print(&text);
        Ok(())
    }

    /// `nV` types n-1 lines before the current one through n-1 after.
    pub(super) fn exec_view(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M, NegN])?;
        let n = cmd.n.unwrap_or(1);
        let dot = self.edit.dot() as Int;
        let from = dot + self.edit.lines((1 as Int).saturating_sub(n));
        let to = dot + self.edit.lines(n);
        let text = self.edit.slice(from as usize, to as usize);
        self.print(&text);
        Ok(())
    }

    pub(super) fn exec_insert(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, M])?;
        match cmd.n {
            Some(n) if cmd.text1.is_empty() => {
                if !(0..=255).contains(&n) {
                    return Err(error!(BadArguments; cmd.to_string()));
                }
                self.edit.insert(&[n as u8]);
            }
            _ => self.edit.insert(&cmd.text1),
        }
        cmd.n = None;
        Ok(())
    }

    /// `n\` inserts n in the current radix.
    pub(super) fn exec_number(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, AtSign, M])?;
        let n = cmd.n.ok_or_else(|| error!(NoArgument; cmd.name()))?;
        let s = match self.config.radix {
            8 => format!("{:o}", n),
            16 => format!("{:X}", n),
            _ => n.to_string(),
        };
        self.edit.insert(s.as_bytes());
        Ok(())
    }

    /// There is no input file, so `A` appends nothing and `:A` reports
    /// end of input.
    pub(super) fn exec_append(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[DColon, AtSign, M, N])?;
        if cmd.colon {
            cmd.returns_status(false);
        }
        Ok(())
    }
}
