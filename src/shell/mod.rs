use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

mod executor;

use crate::core::commands::ShellFlow;
use crate::core::state::ShellState;
use crate::error::ShellError;
use crate::process::{status, ProcessSupervisor, SignalCoordinator};

use executor::CommandHandler;

const PROMPT: &str = ": ";

pub struct Shell {
    pub(crate) editor: DefaultEditor,
    pub(crate) state: ShellState,
    pub(crate) supervisor: ProcessSupervisor,
    pub(crate) pid: u32,
    _signals: SignalCoordinator,
}

impl Shell {
    pub fn new() -> Result<Self, ShellError> {
        let editor = DefaultEditor::new()?;
        let state = ShellState::new();
        let signals = SignalCoordinator::install(state.foreground_only_flag())?;

        Ok(Shell {
            editor,
            state,
            supervisor: ProcessSupervisor::new(),
            pid: std::process::id(),
            _signals: signals,
        })
    }

    pub fn run(&mut self) -> Result<(), ShellError> {
        loop {
            match self.editor.readline(PROMPT) {
                Ok(line) => {
                    let flow = self.execute_command(&line)?;
                    // Reap after every cycle, built-ins and no-ops
                    // included, so the exit cycle still sweeps.
                    for outcome in self.supervisor.reap_finished() {
                        status::report_background_done(&outcome);
                    }
                    if flow == ShellFlow::Exit {
                        return Ok(());
                    }
                }
                // SIGINT never kills the shell; offer a fresh prompt.
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(()),
                Err(err) => return Err(err.into()),
            }
        }
    }
}
