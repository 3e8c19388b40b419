// In-crate test suite
//
// Tests that change the process working directory share one mutex so they do not
// trip over each other. Everything else works on absolute paths inside its own
// temporary directory and can run in parallel.

mod dir_tests;

pub mod setup {
    use crate::interface;
    use once_cell::sync::Lazy;

    static TESTMUTEX: Lazy<interface::Mutex<()>> = Lazy::new(|| interface::Mutex::new(()));

    /// Serializes tests that touch process-wide state and remembers where the process
    /// was, putting it back when the guard drops.
    pub struct CwdGuard {
        _lock: interface::MutexGuard<'static, ()>,
        original: interface::RustPathBuf,
    }

    impl Drop for CwdGuard {
        fn drop(&mut self) {
            let _ = std::env::set_current_dir(&self.original);
        }
    }

    pub fn lock_and_init() -> CwdGuard {
        let lock = TESTMUTEX.lock();
        let original = std::env::current_dir().unwrap();
        CwdGuard {
            _lock: lock,
            original,
        }
    }
}
