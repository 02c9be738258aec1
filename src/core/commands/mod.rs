use std::fmt;
use std::io;
use std::path::PathBuf;

mod cd;
mod exit;
mod status;

pub use cd::CdCommand;
pub use exit::ExitCommand;
pub use status::StatusCommand;

use crate::core::state::ShellState;

#[derive(Debug)]
pub enum CommandError {
    HomeDirNotFound,
    ChangeDirectory(PathBuf, io::Error),
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::HomeDirNotFound => write!(f, "home directory not found"),
            CommandError::ChangeDirectory(path, err) => {
                write!(f, "cannot change directory to {}: {}", path.display(), err)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellFlow {
    Continue,
    Exit,
}

// Built-ins run inside the shell process: no fork, no redirection, no
// backgrounding, and they never touch the recorded foreground outcome.
pub trait Builtin {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<ShellFlow, CommandError>;
}

#[derive(Clone)]
pub enum BuiltinCommand {
    Cd(CdCommand),
    Exit(ExitCommand),
    Status(StatusCommand),
}

impl Builtin for BuiltinCommand {
    fn execute(&self, args: &[String], state: &mut ShellState) -> Result<ShellFlow, CommandError> {
        match self {
            BuiltinCommand::Cd(cmd) => cmd.execute(args, state),
            BuiltinCommand::Exit(cmd) => cmd.execute(args, state),
            BuiltinCommand::Status(cmd) => cmd.execute(args, state),
        }
    }
}

pub fn lookup(name: &str) -> Option<BuiltinCommand> {
    match name {
        "cd" => Some(BuiltinCommand::Cd(CdCommand::new())),
        "exit" => Some(BuiltinCommand::Exit(ExitCommand::new())),
        "status" => Some(BuiltinCommand::Status(StatusCommand::new())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_lookup() {
        assert!(lookup("cd").is_some());
        assert!(lookup("exit").is_some());
        assert!(lookup("status").is_some());
        assert!(lookup("ls").is_none());
        assert!(lookup("").is_none());
    }

    #[test]
    fn test_command_error_display() {
        let errors = vec![
            CommandError::HomeDirNotFound,
            CommandError::ChangeDirectory(
                PathBuf::from("/nope"),
                io::Error::new(io::ErrorKind::NotFound, "missing"),
            ),
        ];
        for error in errors {
            assert!(!error.to_string().is_empty());
        }
    }
}
