use std::env;
use std::path::PathBuf;

use super::{Builtin, CommandError, ShellFlow};
use crate::core::state::ShellState;

#[derive(Clone)]
pub struct CdCommand;

impl Default for CdCommand {
    fn default() -> Self {
        Self::new()
    }
}

impl CdCommand {
    pub fn new() -> Self {
        Self
    }
}

impl Builtin for CdCommand {
    // Bare cd goes home; extra arguments after the target are ignored.
    fn execute(&self, args: &[String], _state: &mut ShellState) -> Result<ShellFlow, CommandError> {
        let target = match args.first() {
            Some(dir) => PathBuf::from(dir),
            None => dirs::home_dir().ok_or(CommandError::HomeDirNotFound)?,
        };
        if let Err(err) = env::set_current_dir(&target) {
            return Err(CommandError::ChangeDirectory(target, err));
        }
        Ok(ShellFlow::Continue)
    }
}
