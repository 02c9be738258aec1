use std::fmt;

use libc::{c_int, pid_t, WEXITSTATUS, WIFEXITED, WTERMSIG};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Exited { pid: pid_t, code: c_int },
    Signaled { pid: pid_t, signal: c_int },
}

impl ProcessOutcome {
    // Raw statuses come straight from waitpid without WUNTRACED, so a
    // child is either exited or signaled.
    pub(crate) fn from_wait_status(pid: pid_t, raw: c_int) -> Self {
        if WIFEXITED(raw) {
            ProcessOutcome::Exited {
                pid,
                code: WEXITSTATUS(raw),
            }
        } else {
            ProcessOutcome::Signaled {
                pid,
                signal: WTERMSIG(raw),
            }
        }
    }

    pub fn pid(&self) -> pid_t {
        match self {
            ProcessOutcome::Exited { pid, .. } | ProcessOutcome::Signaled { pid, .. } => *pid,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, ProcessOutcome::Exited { code: 0, .. })
    }
}

impl fmt::Display for ProcessOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessOutcome::Exited { code, .. } => write!(f, "exit value {}", code),
            ProcessOutcome::Signaled { signal, .. } => {
                write!(f, "terminated by signal {}", signal)
            }
        }
    }
}

pub fn report_background_done(outcome: &ProcessOutcome) {
    println!("background pid {} is done: {}", outcome.pid(), outcome);
}
