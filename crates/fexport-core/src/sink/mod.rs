//! Destinations for exported bytes.
//!
//! The host picks a sink when it builds an [`Exporter`](crate::export::Exporter);
//! the core never inspects its runtime environment to decide.

mod filesystem;

pub use filesystem::{FileSystemSink, TEMP_SUFFIX};

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Persists or delivers a resolved file.
pub trait Sink: Send + Sync {
    /// Returns the written path, or `None` when the sink has no filesystem location.
    fn persist(&self, filename: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>>;
}

type TriggerFn = dyn Fn(&str, &[u8]) + Send + Sync;

/// Fire-and-forget sink: hands the file to a host callback (e.g. a UI that
/// offers it as a download) and reports no path.
pub struct EphemeralTriggerSink {
    trigger: Box<TriggerFn>,
}

impl EphemeralTriggerSink {
    pub fn new<F>(trigger: F) -> Self
    where
        F: Fn(&str, &[u8]) + Send + Sync + 'static,
    {
        Self {
            trigger: Box::new(trigger),
        }
    }
}

impl fmt::Debug for EphemeralTriggerSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EphemeralTriggerSink").finish_non_exhaustive()
    }
}

impl Sink for EphemeralTriggerSink {
    fn persist(&self, filename: &str, bytes: &[u8]) -> io::Result<Option<PathBuf>> {
        (self.trigger)(filename, bytes);
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn ephemeral_invokes_trigger_without_path() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let seen_cb = Arc::clone(&seen);
        let sink = EphemeralTriggerSink::new(move |name, bytes| {
            seen_cb.lock().unwrap().push((name.to_string(), bytes.len()));
        });
        assert_eq!(sink.persist("a.csv", b"1,2,3").unwrap(), None);
        assert_eq!(*seen.lock().unwrap(), vec![("a.csv".to_string(), 5)]);
    }
}
