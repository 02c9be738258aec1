use std::fmt;
use std::io;

pub mod executor;
pub mod redirect;
pub mod signal;
pub mod status;

pub use executor::ProcessSupervisor;
pub use signal::SignalCoordinator;
pub use status::ProcessOutcome;

#[derive(Debug)]
pub enum ProcessError {
    Fork(io::Error),
    Wait(io::Error),
    SignalSetup(io::Error),
    NulArgument,
}

impl ProcessError {
    // Fork and handler installation failures leave the shell in a state
    // it cannot recover from; everything else is reported and skipped.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ProcessError::Fork(_) | ProcessError::SignalSetup(_))
    }
}

impl fmt::Display for ProcessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessError::Fork(e) => write!(f, "cannot fork child process: {}", e),
            ProcessError::Wait(e) => write!(f, "cannot wait for child process: {}", e),
            ProcessError::SignalSetup(e) => write!(f, "cannot install signal handler: {}", e),
            ProcessError::NulArgument => write!(f, "argument contains an interior NUL byte"),
        }
    }
}

pub(crate) fn cerr(res: libc::c_int) -> io::Result<libc::c_int> {
    if res == -1 {
        Err(io::Error::last_os_error())
    } else {
        Ok(res)
    }
}
