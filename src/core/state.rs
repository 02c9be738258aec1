use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::process::ProcessOutcome;

pub struct ShellState {
    foreground_only: Arc<AtomicBool>,
    last_foreground: ProcessOutcome,
}

impl Default for ShellState {
    fn default() -> Self {
        Self::new()
    }
}

impl ShellState {
    pub fn new() -> Self {
        ShellState {
            foreground_only: Arc::new(AtomicBool::new(false)),
            // Before any child has run, status reports as a clean exit.
            last_foreground: ProcessOutcome::Exited { pid: 0, code: 0 },
        }
    }

    // Handle for the SIGTSTP handler; the flag is the only state shared
    // with the signal context.
    pub fn foreground_only_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.foreground_only)
    }

    pub fn foreground_only(&self) -> bool {
        self.foreground_only.load(Ordering::SeqCst)
    }

    pub fn last_foreground(&self) -> ProcessOutcome {
        self.last_foreground
    }

    pub fn set_last_foreground(&mut self, outcome: ProcessOutcome) {
        self.last_foreground = outcome;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = ShellState::new();
        assert!(!state.foreground_only());
        assert_eq!(state.last_foreground().to_string(), "exit value 0");
    }

    #[test]
    fn test_flag_handle_shares_the_flag() {
        let state = ShellState::new();
        let handle = state.foreground_only_flag();

        handle.store(true, Ordering::SeqCst);
        assert!(state.foreground_only());

        handle.store(false, Ordering::SeqCst);
        assert!(!state.foreground_only());
    }

    #[test]
    fn test_last_foreground_roundtrip() {
        let mut state = ShellState::new();
        let outcome = ProcessOutcome::Signaled { pid: 77, signal: 2 };
        state.set_last_foreground(outcome);
        assert_eq!(state.last_foreground(), outcome);
    }
}
