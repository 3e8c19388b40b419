// Misc functions for interface
// Locks, verbosity, etc.

pub use parking_lot::{Mutex, MutexGuard};
pub use std::path::{Path as RustPath, PathBuf as RustPathBuf};

use once_cell::sync::OnceCell;

/// Diagnostic level chosen by the embedding runtime at boot. Anything above 0 turns on
/// per-call failure tracing.
pub static VERBOSE: OnceCell<isize> = OnceCell::new();

/// Sets the diagnostic level. Only the first call wins; returns whether it took effect.
pub fn init_verbosity(level: isize) -> bool {
    VERBOSE.set(level).is_ok()
}

pub fn verbosity() -> isize {
    VERBOSE.get().copied().unwrap_or(0)
}
