//! Terminal size polling.

use std::io;

use crate::types::{FALLBACK_COLUMNS, FALLBACK_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }

    /// Query the controlling terminal, falling back to 80x24.
    pub fn query() -> Self {
        Self::from_size_result(crossterm::terminal::size())
    }

    /// Interpret a size query result. Errors and zero-sized answers (common when
    /// stdout is not a tty) yield the fallback size.
    pub fn from_size_result(size: io::Result<(u16, u16)>) -> Self {
        match size {
            Ok((w, h)) if w > 0 && h > 0 => Self::new(w, h),
            Ok((w, h)) => {
                tracing::debug!(w, h, "terminal reported an empty size; using fallback");
                Self::fallback()
            }
            Err(err) => {
                tracing::debug!(%err, "terminal size unavailable; using fallback");
                Self::fallback()
            }
        }
    }

    pub fn fallback() -> Self {
        Self::new(FALLBACK_COLUMNS, FALLBACK_ROWS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reported_size_is_used() {
        assert_eq!(Viewport::from_size_result(Ok((120, 40))), Viewport::new(120, 40));
    }

    #[test]
    fn query_failure_falls_back() {
        let err = io::Error::new(io::ErrorKind::Unsupported, "not a tty");
        assert_eq!(Viewport::from_size_result(Err(err)), Viewport::new(80, 24));
    }

    #[test]
    fn empty_size_falls_back() {
        assert_eq!(Viewport::from_size_result(Ok((0, 0))), Viewport::fallback());
        assert_eq!(Viewport::from_size_result(Ok((100, 0))), Viewport::fallback());
    }
}
