use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Self {
        Stack {
            overflow_message: self.overflow_message,
            limit: self.limit,
            vec: self.vec.clone(),
        }
    }
}

impl<T> Stack<T> {
    pub fn new(limit: usize, overflow_message: &'static str) -> Stack<T> {
        Stack {
            overflow_message,
            limit,
            vec: vec![],
        }
    }
    /// Empties the stack, returning what it held with the same limit.
    pub fn take(&mut self) -> Stack<T> {
        let empty = Stack::new(self.limit, self.overflow_message);
        std::mem::replace(self, empty)
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.vec.get(idx)
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        if self.vec.len() >= self.limit {
            return Err(error!(PushDownOverflow; self.overflow_message));
        }
        self.vec.push(val);
        Ok(())
    }
    pub fn pop(&mut self) -> Option<T> {
        self.vec.pop()
    }
    pub fn pop_2(&mut self) -> Option<(T, T)> {
        if self.vec.len() < 2 {
            return None;
        }
        let two = self.vec.pop()?;
        let one = self.vec.pop()?;
        Some((one, two))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_limit() {
        let mut s: Stack<u8> = Stack::new(2, "test");
        s.push(1).unwrap();
        s.push(2).unwrap();
        let e = s.push(3).unwrap_err();
        assert_eq!(e.code(), ErrorCode::PushDownOverflow);
        assert_eq!(e.detail(), "test");
        assert_eq!(s.pop_2(), Some((1, 2)));
        assert_eq!(s.pop_2(), None);
    }

    #[test]
    fn test_take_keeps_limit() {
        let mut s: Stack<u8> = Stack::new(1, "test");
        s.push(1).unwrap();
        let old = s.take();
        assert_eq!(old.len(), 1);
        s.push(9).unwrap();
        assert!(s.push(9).is_err());
    }
}
