use crate::error;
use crate::lang::Error;
use std::collections::{HashMap, VecDeque};
use std::io::ErrorKind;

type Result<T> = std::result::Result<T, Error>;

/// ## Terminal collaborator
///
/// Supplies keyboard characters to `^T`. Output does not go through
/// here; it is delivered to the caller as print events.

pub trait Terminal {
    /// Next typed character. With `wait` false, returns `None` at once
    /// when nothing is pending.
    fn read_char(&mut self, wait: bool) -> Option<u8>;
}

/// Keyboard input queued in advance. Reads past the end see nothing.
#[derive(Debug, Default)]
pub struct TypeAhead {
    queue: VecDeque<u8>,
}

impl TypeAhead {
    pub fn new(s: &str) -> TypeAhead {
        TypeAhead {
            queue: s.bytes().collect(),
        }
    }

    pub fn push_str(&mut self, s: &str) {
        self.queue.extend(s.bytes());
    }
}

impl Terminal for TypeAhead {
    fn read_char(&mut self, _wait: bool) -> Option<u8> {
        self.queue.pop_front()
    }
}

/// ## File collaborator
///
/// Whole-file reads and writes for indirect command files and the
/// register file commands.

pub trait Files {
    fn read_all(&mut self, name: &str) -> Result<Vec<u8>>;
    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()>;
}

/// The real file system.
#[derive(Debug, Default)]
pub struct Disk;

impl Files for Disk {
    fn read_all(&mut self, name: &str) -> Result<Vec<u8>> {
        std::fs::read(name).map_err(|e| io_error(e, name))
    }

    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        std::fs::write(name, bytes).map_err(|e| io_error(e, name))
    }
}

/// Files kept in memory, for embedding and tests.
#[derive(Debug, Default, Clone)]
pub struct MemFiles {
    files: HashMap<String, Vec<u8>>,
}

impl MemFiles {
    pub fn with<T: Into<Vec<u8>>>(mut self, name: &str, bytes: T) -> MemFiles {
        self.files.insert(name.to_string(), bytes.into());
        self
    }
}

impl Files for MemFiles {
    fn read_all(&mut self, name: &str) -> Result<Vec<u8>> {
        match self.files.get(name) {
            Some(bytes) => Ok(bytes.clone()),
            None => Err(error!(FileNotFound; name)),
        }
    }

    fn write_all(&mut self, name: &str, bytes: &[u8]) -> Result<()> {
        self.files.insert(name.to_string(), bytes.to_vec());
        Ok(())
    }
}

fn io_error(error: std::io::Error, name: &str) -> Error {
    match error.kind() {
        ErrorKind::NotFound => error!(FileNotFound; name),
        _ => error!(SystemError; format!("{}: {}", name, error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_mem_files() {
        let mut files = MemFiles::default().with("a.tec", "1=");
        assert_eq!(files.read_all("a.tec").unwrap(), b"1=");
        assert_eq!(
            files.read_all("b.tec").unwrap_err().code(),
            ErrorCode::FileNotFound
        );
        files.write_all("b.tec", b"2=").unwrap();
        assert_eq!(files.read_all("b.tec").unwrap(), b"2=");
    }

    #[test]
    fn test_disk_not_found() {
        let err = Disk.read_all("/nonexistent/teco/file").unwrap_err();
        assert_eq!(err.code(), ErrorCode::FileNotFound);
        assert_eq!(err.detail(), "/nonexistent/teco/file");
    }

    #[test]
    fn test_type_ahead() {
        let mut t = TypeAhead::new("x");
        assert_eq!(t.read_char(true), Some(b'x'));
        assert_eq!(t.read_char(false), None);
    }
}
