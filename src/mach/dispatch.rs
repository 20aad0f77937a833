use super::Machine;
use crate::lang::{Cmd, Error};

type Result<T> = std::result::Result<T, Error>;

/// Completes the command record, or returns false after leaving an
/// operand, operator or modifier behind.
pub type ScanFn = fn(&mut Machine, &mut Cmd) -> Result<bool>;
pub type ExecFn = fn(&mut Machine, &mut Cmd) -> Result<()>;

/// ## Command table entry
///
/// What one command code does in each phase. Skip scans run only
/// `scan`, so every text argument and register name is consumed there.

#[derive(Clone, Copy)]
pub struct Entry {
    pub scan: ScanFn,
    pub exec: ExecFn,
    /// m and n pass through to the next command.
    pub keep: bool,
}

pub enum Scan {
    End,
    Operand,
    Command(Entry),
}

/// Argument shapes a command may refuse when strict arguments are on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reject {
    Colon,
    DColon,
    AtSign,
    M,
    N,
    NegM,
    NegN,
    MWithoutN,
}

fn cmd(scan: ScanFn, exec: ExecFn) -> Entry {
    Entry {
        scan,
        exec,
        keep: false,
    }
}

fn keep(scan: ScanFn, exec: ExecFn) -> Entry {
    Entry {
        scan,
        exec,
        keep: true,
    }
}

fn operand(scan: ScanFn) -> Entry {
    cmd(scan, Machine::exec_nop)
}

/// Commands named by one character, already upper-cased and with
/// `^X` folded to its control code.
pub fn primary(ch: u8) -> Option<Entry> {
    type M = Machine;
    Some(match ch {
        0x01 => cmd(M::scan_ctrl_a, M::exec_ctrl_a),
        0x02 => operand(M::scan_date),
        0x03 => cmd(M::scan_command, M::exec_stop),
        0x04 => cmd(M::scan_command, M::exec_decimal),
        0x08 => operand(M::scan_time),
        0x0f => cmd(M::scan_command, M::exec_octal),
        0x11 => operand(M::scan_lines),
        0x12 => cmd(M::scan_radix, M::exec_radix),
        0x14 => cmd(M::scan_ctrl_t, M::exec_type),
        0x15 => cmd(M::scan_ctrl_u, M::exec_ctrl_u),
        0x1a => operand(M::scan_total),
        0x1b => cmd(M::scan_escape, M::exec_nop),
        0x1f => operand(M::scan_complement),
        b'!' => keep(M::scan_bang, M::exec_nop),
        b'"' => cmd(M::scan_quote, M::exec_if),
        b'#' | b'&' | b'*' | b'+' | b'-' => operand(M::scan_operator),
        b'%' => cmd(M::scan_reg_cmd, M::exec_add),
        b'\'' => keep(M::scan_command, M::exec_end_if),
        b'(' => operand(M::scan_open),
        b')' => operand(M::scan_close),
        b',' => operand(M::scan_comma),
        b'.' => operand(M::scan_dot),
        b'/' => operand(M::scan_divide),
        b'0'..=b'9' => operand(M::scan_digits),
        b':' => operand(M::scan_colon),
        b';' => cmd(M::scan_command, M::exec_semi),
        b'<' => cmd(M::scan_lt, M::exec_loop_start),
        b'=' => cmd(M::scan_equals, M::exec_print_number),
        b'>' => cmd(M::scan_gt, M::exec_loop_end),
        b'?' => cmd(M::scan_command, M::exec_trace),
        b'@' => operand(M::scan_atsign),
        b'A' => cmd(M::scan_a, M::exec_append),
        b'B' => operand(M::scan_b),
        b'C' => cmd(M::scan_command, M::exec_move),
        b'D' => cmd(M::scan_command, M::exec_delete),
        b'G' => cmd(M::scan_reg_cmd, M::exec_get),
        b'H' => operand(M::scan_h),
        b'I' => cmd(M::scan_text_cmd, M::exec_insert),
        b'J' => cmd(M::scan_command, M::exec_jump),
        b'K' => cmd(M::scan_command, M::exec_kill),
        b'L' => cmd(M::scan_command, M::exec_line),
        b'M' => cmd(M::scan_reg_cmd, M::exec_macro),
        b'N' | b'S' | b'_' => cmd(M::scan_text_cmd, M::exec_search),
        b'O' => cmd(M::scan_text_cmd, M::exec_goto),
        b'Q' => operand(M::scan_q),
        b'R' => cmd(M::scan_command, M::exec_reverse),
        b'T' => cmd(M::scan_command, M::exec_list),
        b'U' => cmd(M::scan_reg_cmd, M::exec_set),
        b'V' => cmd(M::scan_command, M::exec_view),
        b'X' => cmd(M::scan_acc_cmd, M::exec_copy),
        b'Z' => operand(M::scan_z),
        b'[' => keep(M::scan_reg_cmd, M::exec_push),
        b'\\' => cmd(M::scan_backslash, M::exec_number),
        b']' => keep(M::scan_reg_cmd, M::exec_pop),
        b'|' => cmd(M::scan_command, M::exec_else),
        b'~' => operand(M::scan_tilde),
        _ => return None,
    })
}

/// Commands prefixed by `E`.
pub fn secondary_e(ch: u8) -> Option<Entry> {
    type M = Machine;
    Some(match ch {
        b'1' | b'2' | b'H' | b'T' => cmd(M::scan_flag, M::exec_flag),
        b'%' | b'Q' => cmd(M::scan_reg_text, M::exec_file_register),
        b'I' => cmd(M::scan_text_cmd, M::exec_indirect),
        b'O' => operand(M::scan_version),
        b'X' => cmd(M::scan_command, M::exec_exit),
        _ => return None,
    })
}

/// Commands prefixed by `F`.
pub fn secondary_f(ch: u8) -> Option<Entry> {
    type M = Machine;
    Some(match ch {
        b'<' => cmd(M::scan_command, M::exec_restart),
        b'>' => cmd(M::scan_command, M::exec_next),
        b'\'' => cmd(M::scan_command, M::exec_flow_end_if),
        b'|' => cmd(M::scan_command, M::exec_flow_else),
        b'N' | b'S' => cmd(M::scan_two_texts, M::exec_search),
        _ => return None,
    })
}
