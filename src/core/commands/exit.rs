use super::{Builtin, CommandError, ShellFlow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct ExitCommand;

impl Default for ExitCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl ExitCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for ExitCommand {
    // Requests loop exit instead of terminating here so the final reap
    // sweep still runs. Background children that are still running are
    // left to be orphaned.
    fn execute(&self, _args: &[String], _state: &mut ShellState) -> Result<ShellFlow, CommandError> {
        println!("exiting shell");
        Ok(ShellFlow::Exit)
    }
}
