//! Log sink setup.
//!
//! Lines are plain text: a timestamp followed by the message. No level
//! column, no target column, no colour. Every event is formatted into one
//! buffer and written to the sink in a single call, so lines from concurrent
//! requests never interleave.

use tracing::Level;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;

/// Builds the subscriber with the process-wide log format, writing to
/// `writer`.
pub fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync + 'static
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_level(false)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .finish()
}

/// Installs the stderr subscriber as the global default.
///
/// # Errors
///
/// Fails if a global subscriber is already installed; the existing one stays
/// in place.
pub fn init() -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    tracing::subscriber::set_global_default(subscriber(std::io::stderr))
}

pub mod capture {
    //! In-memory log sink, for asserting on log output in tests.
    //!
    //! ```rust
    //! use hitch::log::capture::Captured;
    //!
    //! let (logs, _guard) = Captured::install();
    //! tracing::info!("hello");
    //! assert_eq!(logs.lines(), ["hello"]);
    //! ```

    use std::io;
    use std::sync::{Arc, Mutex, PoisonError};

    use tracing::subscriber::DefaultGuard;
    use tracing_subscriber::fmt::MakeWriter;

    /// A clonable buffer every clone of which writes to the same bytes.
    #[derive(Clone, Default)]
    pub struct Captured(Arc<Mutex<Vec<u8>>>);

    impl Captured {
        /// Routes this thread's events into a fresh buffer, in the
        /// process-wide format, until the guard drops.
        pub fn install() -> (Self, DefaultGuard) {
            let captured = Self::default();
            let guard = tracing::subscriber::set_default(super::subscriber(captured.clone()));
            (captured, guard)
        }

        /// Captured messages, one per line, with the timestamp stripped.
        pub fn lines(&self) -> Vec<String> {
            let buf = self.0.lock().unwrap_or_else(PoisonError::into_inner);
            String::from_utf8_lossy(&buf)
                .lines()
                .map(|line| line.split_once(' ').map_or(line, |(_, msg)| msg).trim().to_owned())
                .collect()
        }
    }

    impl io::Write for Captured {
        fn write(&mut self, data: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap_or_else(PoisonError::into_inner).extend_from_slice(data);
            Ok(data.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'w> MakeWriter<'w> for Captured {
        type Writer = Self;

        fn make_writer(&'w self) -> Self::Writer {
            self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_install_reports_an_error() {
        // The first call may or may not win, depending on test order; the
        // second always finds a subscriber in place.
        let _ = init();
        assert!(init().is_err());
    }
}
