// ABOUTME: Line-oriented output handle that stamps and terminates each line.
// ABOUTME: One locked write per line so concurrent callers never interleave partial lines.

use std::io::{self, Write};
use std::sync::Mutex;

use chrono::{Local, Utc};
use serde::Deserialize;

const STAMP_FORMAT: &str = "%Y/%m/%d %H:%M:%S";

/// Clock used for the stamp in front of each line.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Timestamp {
    #[default]
    Local,
    Utc,
    None,
}

impl Timestamp {
    fn render(&self) -> Option<String> {
        match self {
            Timestamp::Local => Some(Local::now().format(STAMP_FORMAT).to_string()),
            Timestamp::Utc => Some(Utc::now().format(STAMP_FORMAT).to_string()),
            Timestamp::None => None,
        }
    }
}

pub struct Sink {
    out: Mutex<Box<dyn Write + Send>>,
    timestamp: Timestamp,
}

impl Sink {
    pub fn new<W: Write + Send + 'static>(out: W, timestamp: Timestamp) -> Self {
        Self {
            out: Mutex::new(Box::new(out)),
            timestamp,
        }
    }

    pub fn stderr() -> Self {
        Self::new(io::stderr(), Timestamp::Local)
    }

    pub fn stdout() -> Self {
        Self::new(io::stdout(), Timestamp::Local)
    }

    pub fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Write `line` with the stamp in front and a newline after it.
    ///
    /// I/O errors are dropped: a closed or full destination never turns a
    /// log call into a failure.
    pub fn write_line(&self, line: &str) {
        let mut buf = String::with_capacity(line.len() + 21);
        if let Some(stamp) = self.timestamp.render() {
            buf.push_str(&stamp);
            buf.push(' ');
        }
        buf.push_str(line);
        if !line.ends_with('\n') {
            buf.push('\n');
        }

        // A panic in another writer must not silence this one.
        let mut out = match self.out.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let _ = out.write_all(buf.as_bytes());
        let _ = out.flush();
    }
}

impl std::fmt::Debug for Sink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Sink")
            .field("timestamp", &self.timestamp)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utilities::SharedBuf;

    #[test]
    fn untimed_line_gets_newline() {
        let buf = SharedBuf::default();
        let sink = Sink::new(buf.clone(), Timestamp::None);
        sink.write_line("hello");
        assert_eq!(buf.contents(), "hello\n");
    }

    #[test]
    fn existing_newline_is_not_doubled() {
        let buf = SharedBuf::default();
        let sink = Sink::new(buf.clone(), Timestamp::None);
        sink.write_line("hello\n");
        assert_eq!(buf.contents(), "hello\n");
    }

    #[test]
    fn stamp_layout() {
        let buf = SharedBuf::default();
        let sink = Sink::new(buf.clone(), Timestamp::Utc);
        sink.write_line("x");

        let out = buf.contents();
        // "YYYY/MM/DD HH:MM:SS x\n"
        assert_eq!(out.len(), 19 + 1 + 1 + 1);
        let bytes = out.as_bytes();
        assert_eq!(bytes[4], b'/');
        assert_eq!(bytes[7], b'/');
        assert_eq!(bytes[10], b' ');
        assert_eq!(bytes[13], b':');
        assert_eq!(bytes[16], b':');
        assert!(out.ends_with(" x\n"));
    }

    #[test]
    fn local_is_default_stamp() {
        assert_eq!(Timestamp::default(), Timestamp::Local);
        assert_eq!(Sink::stderr().timestamp(), Timestamp::Local);
    }

    #[test]
    fn write_errors_are_swallowed() {
        struct Broken;
        impl Write for Broken {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
            fn flush(&mut self) -> io::Result<()> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }
        }

        let sink = Sink::new(Broken, Timestamp::Local);
        sink.write_line("dropped");
    }

    #[test]
    fn concurrent_lines_stay_whole() {
        use std::sync::Arc;

        let buf = SharedBuf::default();
        let sink = Arc::new(Sink::new(buf.clone(), Timestamp::None));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let sink = Arc::clone(&sink);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        sink.write_line(&format!("thread-{t} line-{i} end"));
                    }
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        let out = buf.contents();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 400);
        for line in lines {
            assert!(line.starts_with("thread-"));
            assert!(line.ends_with(" end"));
        }
    }
}
