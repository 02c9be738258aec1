use super::Shell;
use crate::core::commands::{self, Builtin, ShellFlow};
use crate::error::ShellError;
use crate::parser;

pub(crate) trait CommandHandler {
    fn execute_command(&mut self, line: &str) -> Result<ShellFlow, ShellError>;
}

impl CommandHandler for Shell {
    fn execute_command(&mut self, line: &str) -> Result<ShellFlow, ShellError> {
        let request = match parser::parse(line, self.pid) {
            Ok(request) => request,
            Err(err) => {
                // Blank and comment lines pass without a word.
                if !err.is_silent() {
                    eprintln!("venule: {}", err);
                }
                return Ok(ShellFlow::Continue);
            }
        };

        if let Some(builtin) = commands::lookup(request.program()) {
            // Built-ins ignore redirection and the background flag.
            match builtin.execute(&request.arguments[1..], &mut self.state) {
                Ok(flow) => Ok(flow),
                Err(err) => {
                    eprintln!("venule: {}", err);
                    Ok(ShellFlow::Continue)
                }
            }
        } else {
            match self.supervisor.execute(&request, &mut self.state) {
                Ok(()) => Ok(ShellFlow::Continue),
                Err(err) if err.is_fatal() => Err(ShellError::Process(err)),
                Err(err) => {
                    eprintln!("venule: {}", err);
                    Ok(ShellFlow::Continue)
                }
            }
        }
    }
}
