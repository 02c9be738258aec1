pub mod error;
pub mod flags;
pub mod shell;

pub mod core;
pub mod parser;
pub mod process;

#[cfg(test)]
pub(crate) mod test_support {
    use std::sync::{Mutex, MutexGuard, PoisonError};

    // The reap sweep calls waitpid(-1), which would steal children
    // spawned by concurrently running tests, and the cd tests move the
    // process-wide working directory. Tests touching either take this
    // lock.
    static PROCESS_LOCK: Mutex<()> = Mutex::new(());

    pub(crate) fn process_lock() -> MutexGuard<'static, ()> {
        PROCESS_LOCK.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
