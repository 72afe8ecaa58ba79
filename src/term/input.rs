//! Line-based input. One line in, one trimmed token out.

use std::io::{self, BufRead};

use log::debug;

/// Blocking source of user tokens.
pub trait InputReader {
    /// Reads the next line, trimmed. `None` once the input is exhausted.
    fn read_token(&mut self) -> io::Result<Option<String>>;
}

pub struct LineReader<R> {
    reader: R,
    buf: String,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buf: String::new(),
        }
    }
}

impl<R: BufRead> InputReader for LineReader<R> {
    fn read_token(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.reader.read_line(&mut self.buf)? == 0 {
            debug!("Input reached EOF");
            return Ok(None);
        }
        Ok(Some(self.buf.trim().to_string()))
    }
}
