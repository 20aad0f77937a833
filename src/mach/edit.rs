use crate::lang::Int;

const GAP: usize = 64;

/// ## Edit buffer
///
/// Text held in a gap buffer with the gap kept at dot, so inserting
/// and deleting at dot never moves more than the gap itself.

#[derive(Debug, Clone)]
pub struct EditBuffer {
    data: Vec<u8>,
    left: usize,
    right: usize,
}

impl Default for EditBuffer {
    fn default() -> EditBuffer {
        EditBuffer {
            data: vec![0; GAP],
            left: 0,
            right: GAP,
        }
    }
}

impl From<&str> for EditBuffer {
    fn from(s: &str) -> EditBuffer {
        let mut buf = EditBuffer::default();
        buf.insert(s.as_bytes());
        buf.set_dot(0);
        buf
    }
}

impl EditBuffer {
    pub fn len(&self) -> usize {
        self.data.len() - (self.right - self.left)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn dot(&self) -> usize {
        self.left
    }

    /// Moves dot, returning false when `pos` is off the buffer.
    pub fn set_dot(&mut self, pos: usize) -> bool {
        if pos > self.len() {
            return false;
        }
        if pos < self.left {
            let count = self.left - pos;
            self.data.copy_within(pos..self.left, self.right - count);
            self.left = pos;
            self.right -= count;
        } else if pos > self.left {
            let count = pos - self.left;
            self.data.copy_within(self.right..self.right + count, self.left);
            self.left += count;
            self.right += count;
        }
        true
    }

    /// Character at an absolute position.
    pub fn at(&self, pos: usize) -> Option<u8> {
        if pos < self.left {
            Some(self.data[pos])
        } else if pos < self.len() {
            Some(self.data[pos + self.right - self.left])
        } else {
            None
        }
    }

    /// Character at dot plus a signed offset.
    pub fn read(&self, offset: Int) -> Option<u8> {
        self.offset(offset).and_then(|pos| self.at(pos))
    }

    /// Absolute position of dot plus `offset`, if within the text.
    pub fn offset(&self, offset: Int) -> Option<usize> {
        let pos = (self.left as Int).checked_add(offset)?;
        if pos < 0 || pos > self.len() as Int {
            None
        } else {
            Some(pos as usize)
        }
    }

    pub fn insert(&mut self, text: &[u8]) {
        if self.right - self.left < text.len() {
            let grow = text.len() + GAP;
            let tail = self.data.len() - self.right;
            self.data.resize(self.data.len() + grow, 0);
            let new_right = self.right + grow;
            self.data.copy_within(self.right..self.right + tail, new_right);
            self.right = new_right;
        }
        self.data[self.left..self.left + text.len()].copy_from_slice(text);
        self.left += text.len();
    }

    /// Deletes `count` characters after dot, or before it when negative.
    pub fn delete(&mut self, count: Int) -> bool {
        match self.offset(count) {
            None => false,
            Some(pos) if pos < self.left => {
                self.left = pos;
                true
            }
            Some(pos) => {
                self.right += pos - self.left;
                true
            }
        }
    }

    pub fn slice(&self, from: usize, to: usize) -> Vec<u8> {
        (from..to.min(self.len())).filter_map(|pos| self.at(pos)).collect()
    }

    pub fn to_vec(&self) -> Vec<u8> {
        self.slice(0, self.len())
    }

    /// Signed character count from dot to the start of the line `n`
    /// lines away: `n > 0` moves past n line feeds, `n <= 0` moves to the
    /// start of the current line and then back -n more.
    pub fn lines(&self, n: Int) -> Int {
        let dot = self.left;
        let len = self.len();
        if n > 0 {
            let mut pos = dot;
            let mut seen = 0;
            while pos < len && seen < n {
                if self.at(pos) == Some(b'\n') {
                    seen += 1;
                }
                pos += 1;
            }
            (pos - dot) as Int
        } else {
            let mut pos = dot;
            let mut seen = 0;
            while pos > 0 {
                if self.at(pos - 1) == Some(b'\n') {
                    if seen + n == 0 {
                        break;
                    }
                    seen += 1;
                }
                pos -= 1;
            }
            -((dot - pos) as Int)
        }
    }
}
