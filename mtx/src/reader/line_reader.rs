//! Forward-only line cursor over a buffered byte stream

use std::io::{self, BufRead, ErrorKind};

/// Line reader shared by every parsing stage
///
/// Lines are returned with their terminator. Bytes that are not valid UTF-8
/// are replaced, which makes them fail number parsing rather than I/O.
pub struct LineReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_no: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_no: 0,
        }
    }

    /// 1-based number of the line returned last, 0 before the first read
    pub fn line_no(&self) -> usize {
        self.line_no
    }

    /// Read the next line including its `\n`, `None` at end of stream
    ///
    /// A final line without terminator is returned as is.
    pub fn read_line(&mut self) -> io::Result<Option<String>> {
        self.buf.clear();
        if self.read_raw_line()? == 0 {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&self.buf).into_owned()))
    }

    /// Append the next raw line to `out`, returning the bytes read
    pub fn read_line_into(&mut self, out: &mut Vec<u8>) -> io::Result<usize> {
        self.buf.clear();
        let read = self.read_raw_line()?;
        out.extend_from_slice(&self.buf);
        Ok(read)
    }

    fn read_raw_line(&mut self) -> io::Result<usize> {
        let read = self.inner.read_until(b'\n', &mut self.buf)?;
        if read > 0 {
            self.line_no += 1;
        }
        Ok(read)
    }

    /// Look at the next byte without consuming it
    pub fn peek_byte(&mut self) -> io::Result<Option<u8>> {
        loop {
            match self.inner.fill_buf() {
                Ok(available) => return Ok(available.first().copied()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) => return Err(err),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_lines_and_numbers() {
        let mut lines = LineReader::new(&b"first\nsecond\nlast"[..]);
        assert_eq!(lines.line_no(), 0);
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("first\n"));
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("second\n"));
        assert_eq!(lines.read_line().unwrap().as_deref(), Some("last"));
        assert_eq!(lines.line_no(), 3);
        assert_eq!(lines.read_line().unwrap(), None);
        assert_eq!(lines.line_no(), 3);
    }

    #[test]
    fn test_peek_does_not_consume() {
        let mut lines = LineReader::new(&b"%x\n"[..]);
        assert_eq!(lines.peek_byte().unwrap(), Some(b'%'));
        assert_eq!(lines.peek_byte().unwrap(), Some(b'%'));

        let mut raw = Vec::new();
        assert_eq!(lines.read_line_into(&mut raw).unwrap(), 3);
        assert_eq!(raw, b"%x\n");
        assert_eq!(lines.peek_byte().unwrap(), None);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut lines = LineReader::new(&b"1 1 \xff\n"[..]);
        let line = lines.read_line().unwrap().unwrap();
        assert!(line.contains('\u{fffd}'));
    }
}
