use once_cell::sync::Lazy;

use crate::constants::FALLBACK_CWD;
use crate::interface;

/// Process-level state the syscalls share.
///
/// The runtime keeps its own idea of the working directory next to the one the OS
/// tracks: `chdir` updates both, `getcwd` answers from the cached copy only.
///
/// Lock discipline: `cwd` is the only lock here and guards only the cached path. It
/// is never held across a host call, so two threads calling `chdir` at once can
/// still leave the cache and the OS directory naming different paths. The OS working
/// directory is process-wide no matter what we do, so that hazard is accepted rather
/// than hidden behind a lock.
#[derive(Debug)]
pub struct PosixContext {
    // Working directory as last set through chdir
    cwd: interface::Mutex<interface::RustPathBuf>,
}

/// The context every runtime thread in this process shares. The cache starts at the
/// host's current directory, read on first use.
pub static POSIX_CONTEXT: Lazy<PosixContext> = Lazy::new(PosixContext::new);

pub fn posix() -> &'static PosixContext {
    &POSIX_CONTEXT
}

impl PosixContext {
    pub fn new() -> Self {
        let cwd = match std::env::current_dir() {
            Ok(dir) => dir,
            Err(e) => {
                log::warn!(
                    "cannot read the host working directory ({}), starting at {}",
                    e,
                    FALLBACK_CWD
                );
                interface::RustPathBuf::from(FALLBACK_CWD)
            }
        };
        Self::with_cwd(cwd)
    }

    /// A context whose cache starts at `cwd`, independent of the process-wide one.
    pub fn with_cwd<P: Into<interface::RustPathBuf>>(cwd: P) -> Self {
        PosixContext {
            cwd: interface::Mutex::new(cwd.into()),
        }
    }

    /// Overwrites the cached working directory with `newdir` exactly as given.
    pub fn changedir(&self, newdir: &interface::RustPath) {
        let mut cwdbox = self.cwd.lock();
        *cwdbox = newdir.to_path_buf();
    }

    pub fn current_dir(&self) -> interface::RustPathBuf {
        self.cwd.lock().clone()
    }
}

impl Default for PosixContext {
    fn default() -> Self {
        Self::new()
    }
}
