//! The `Library` capability value.

use std::io::{self, Write};

use tracing::debug;

use crate::{greeting::GREETING, ops};

/// Stateless service exposing the greeting and arithmetic operations.
///
/// Zero-sized and `Copy`: constructing one costs nothing and every instance
/// behaves identically. Each method delegates to the matching function in
/// [`crate::ops`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Library;

impl Library {
    /// Create a new library handle.
    pub fn new() -> Self {
        Self
    }

    /// Write [`GREETING`] as one line to standard output.
    ///
    /// The only failure is the stream itself being unusable (closed
    /// descriptor, broken pipe), which surfaces as the underlying
    /// [`io::Error`].
    pub fn hello(&self) -> io::Result<()> {
        self.hello_to(io::stdout().lock())
    }

    /// Write [`GREETING`] as one line to `writer`.
    pub fn hello_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        debug!(greeting = GREETING, "writing greeting");
        writeln!(writer, "{GREETING}")?;
        writer.flush()
    }

    /// See [`ops::greet`].
    pub fn greet(&self, name: &str) -> String {
        ops::greet(name)
    }

    /// See [`ops::add`]. Wraps on overflow.
    pub fn add(&self, a: i32, b: i32) -> i32 {
        ops::add(a, b)
    }

    /// See [`ops::multiply`]. Wraps on overflow.
    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        ops::multiply(a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hello_writes_exactly_one_line() {
        let mut out = Vec::new();
        Library::new().hello_to(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text, "Hello, Skeleton!\n");
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn hello_to_stdout_succeeds() {
        assert!(Library::new().hello().is_ok());
    }

    #[test]
    fn library_is_zero_sized() {
        assert_eq!(std::mem::size_of::<Library>(), 0);
    }

    #[test]
    fn methods_match_free_functions() {
        let lib = Library::default();
        assert_eq!(lib.add(5, 3), ops::add(5, 3));
        assert_eq!(lib.multiply(5, 3), ops::multiply(5, 3));
        assert_eq!(lib.greet("World"), ops::greet("World"));
    }

    #[test]
    fn hello_reports_writer_failure() {
        struct Closed;

        impl Write for Closed {
            fn write(&mut self, _: &[u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
            }

            fn flush(&mut self) -> io::Result<()> {
                Ok(())
            }
        }

        let err = Library::new().hello_to(Closed).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
