//! Host application interface.
//!
//! The sync logic never talks to a concrete host directly; everything it
//! needs from the environment (file-cache refresh, showing results) goes
//! through this trait so the core stays testable and host-agnostic.

use std::path::Path;

#[cfg(test)]
use mockall::automock;

/// Capabilities the host application provides to the sync logic.
#[cfg_attr(test, automock)]
pub trait Host {
    /// Tell the host that a file it may have cached changed on disk.
    fn notify_changed(&self, path: &Path);

    /// Surface an interactive result message to the user.
    fn show_message(&self, message: &str);
}

/// Host implementation for CLI usage.
///
/// Messages go to stdout; change notifications are only logged, since the
/// shell keeps no file cache to refresh.
#[derive(Clone, Copy, Default)]
pub struct CliHost;

impl Host for CliHost {
    fn notify_changed(&self, path: &Path) {
        tracing::debug!(path = %path.display(), "workspace file changed on disk");
    }

    fn show_message(&self, message: &str) {
        println!("{message}");
    }
}
