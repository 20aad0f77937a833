use crate::lang::{Int, RegName};

const GLOBAL_SLOTS: usize = crate::lang::REGISTERS + 2;

/// ## Q-register
///
/// A value and a text, either of which a command may use.

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Register {
    pub value: Int,
    pub text: Vec<u8>,
}

/// ## Register store
///
/// Globals live for the life of the interpreter. Local tables form a
/// stack whose bottom entry belongs to the top-level command string;
/// each non-colon macro call pushes a fresh one. The save stack holds
/// copies made by `[q`.

#[derive(Debug)]
pub struct Registers {
    globals: Vec<Register>,
    locals: Vec<Vec<Register>>,
    saved: Vec<Register>,
}

impl Default for Registers {
    fn default() -> Registers {
        Registers {
            globals: vec![Register::default(); GLOBAL_SLOTS],
            locals: vec![Registers::table()],
            saved: vec![],
        }
    }
}

impl Registers {
    fn table() -> Vec<Register> {
        vec![Register::default(); crate::lang::REGISTERS]
    }

    pub fn get(&self, name: RegName) -> &Register {
        if name.is_local() {
            if let Some(table) = self.locals.last() {
                return &table[name.index()];
            }
        }
        &self.globals[name.index()]
    }

    pub fn get_mut(&mut self, name: RegName) -> &mut Register {
        if name.is_local() {
            if self.locals.is_empty() {
                self.locals.push(Registers::table());
            }
            let last = self.locals.len() - 1;
            return &mut self.locals[last][name.index()];
        }
        &mut self.globals[name.index()]
    }

    pub fn value(&self, name: RegName) -> Int {
        self.get(name).value
    }

    pub fn set_value(&mut self, name: RegName, value: Int) {
        self.get_mut(name).value = value;
    }

    pub fn text(&self, name: RegName) -> &[u8] {
        &self.get(name).text
    }

    pub fn set_text<T: Into<Vec<u8>>>(&mut self, name: RegName, text: T) {
        self.get_mut(name).text = text.into();
    }

    pub fn append(&mut self, name: RegName, text: &[u8]) {
        self.get_mut(name).text.extend_from_slice(text);
    }

    pub fn push_saved(&mut self, name: RegName) {
        let copy = self.get(name).clone();
        self.saved.push(copy);
    }

    /// Overwrites `name` with the most recently saved register.
    pub fn pop_saved(&mut self, name: RegName) -> bool {
        match self.saved.pop() {
            Some(reg) => {
                *self.get_mut(name) = reg;
                true
            }
            None => false,
        }
    }

    pub fn saved_len(&self) -> usize {
        self.saved.len()
    }

    pub fn push_locals(&mut self) {
        self.locals.push(Registers::table());
    }

    pub fn pop_locals(&mut self) {
        if self.locals.len() > 1 {
            self.locals.pop();
        }
    }

    pub fn local_depth(&self) -> usize {
        self.locals.len()
    }

    /// Combined text length of every global and the current locals.
    pub fn total_text(&self) -> usize {
        let locals: usize = self.locals.last().map_or(0, |t| t.iter().map(|r| r.text.len()).sum());
        let globals: usize = self.globals.iter().map(|r| r.text.len()).sum();
        globals + locals
    }

    /// Drops the save stack and every macro's locals after an error.
    pub fn reset(&mut self) {
        self.saved.clear();
        self.locals.truncate(1);
    }
}
