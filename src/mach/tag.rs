use super::dispatch::Reject::*;
use super::dispatch::Scan;
use super::Machine;
use crate::error;
use crate::lang::{Cmd, Error};
use log::debug;

type Result<T> = std::result::Result<T, Error>;

/// Where a tag sits: its position and the starts of the loops and
/// conditionals enclosing it.
#[derive(Debug)]
struct Tag {
    pos: usize,
    line: usize,
    loops: Vec<usize>,
    ifs: Vec<usize>,
}

impl Machine {
    /// `!tag!`, or `!!` to end of line as a comment.
    pub(super) fn scan_tag(&mut self, cmd: &mut Cmd) -> Result<bool> {
        if !cmd.atsign && self.config.comments() && self.buf.next_is(b'!') {
            self.buf.skip_line();
            cmd.c2 = b'!';
        } else {
            let braces = self.config.braces();
            self.buf.scan_texts(cmd, b'!', 1, braces)?;
        }
        self.scan_args(cmd)?;
        Ok(true)
    }

    /// `Otag$` jumps to a tag; `nOa,b,c$` to the nth tag of the list,
    /// falling through when there is none.
    pub(super) fn exec_goto(&mut self, cmd: &mut Cmd) -> Result<()> {
        self.confirm(cmd, &[Colon, DColon, M])?;
        let name = match cmd.n {
            None => cmd.text1.clone(),
            Some(n) => {
                let list: Vec<&[u8]> = cmd.text1.split(|&c| c == b',').collect();
                if n < 1 || n as usize > list.len() {
                    return Ok(());
                }
                let name = list[n as usize - 1];
                if name.is_empty() {
                    return Ok(());
                }
                name.to_vec()
            }
        };
        cmd.n = None;
        self.goto(&name)
    }

    fn goto(&mut self, name: &[u8]) -> Result<()> {
        let label = String::from_utf8_lossy(name).into_owned();
        let tag = self.find_tag(name, &label)?;
        let active_loops: Vec<usize> = self.loops.iter().map(|l| l.start).collect();
        let active_ifs: Vec<usize> = self.ifs.iter().map(|c| c.start).collect();
        if !active_loops.starts_with(&tag.loops) || !active_ifs.starts_with(&tag.ifs) {
            return Err(error!(InvalidLocation; format!("!{}!", label)));
        }
        debug!("goto !{}! at {}", label, tag.pos);
        self.loops.truncate(tag.loops.len());
        self.ifs.truncate(tag.ifs.len());
        self.buf.jump(tag.pos, tag.line);
        Ok(())
    }

    /// Scans the whole active buffer for exactly one `!name!`.
    fn find_tag(&mut self, name: &[u8], label: &str) -> Result<Tag> {
        let (pos, line) = (self.buf.pos(), self.buf.line());
        let skipping = self.skipping;
        self.skipping = true;
        self.expr.push_context();
        self.buf.jump(0, 1);
        let found = self.collect_tags(name);
        self.expr.pop_context();
        self.skipping = skipping;
        self.buf.jump(pos, line);
        let mut found = found?;
        match found.len() {
            0 => Err(error!(MissingTag; format!("!{}!", label))),
            1 => Ok(found.remove(0)),
            _ => Err(error!(DuplicateTag; format!("!{}!", label))),
        }
    }

    fn collect_tags(&mut self, name: &[u8]) -> Result<Vec<Tag>> {
        let mut found = vec![];
        let mut loops = vec![];
        let mut ifs = vec![];
        let mut cmd = Cmd::default();
        loop {
            match self.scan_cmd(&mut cmd)? {
                Scan::End => return Ok(found),
                Scan::Operand => continue,
                Scan::Command(_) => {}
            }
            match cmd.c1 {
                b'<' => loops.push(self.buf.pos()),
                b'>' => {
                    loops.pop();
                }
                b'"' => ifs.push(self.cmd_start),
                b'\'' => {
                    ifs.pop();
                }
                b'!' if cmd.c2 != b'!' && cmd.text1 == name => found.push(Tag {
                    pos: self.buf.pos(),
                    line: self.buf.line(),
                    loops: loops.clone(),
                    ifs: ifs.clone(),
                }),
                _ => {}
            }
            cmd = Cmd::default();
            self.expr.clear();
        }
    }
}
