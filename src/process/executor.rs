use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::{c_char, c_int, pid_t, STDERR_FILENO, WNOHANG};

use super::status::{self, ProcessOutcome};
use super::{cerr, redirect, signal, ProcessError};
use crate::core::state::ShellState;
use crate::parser::CommandRequest;

const REDIRECT_FAILURE: c_int = 1;
const EXEC_FAILURE: c_int = 2;

pub struct ProcessSupervisor;

impl Default for ProcessSupervisor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProcessSupervisor {
    pub fn new() -> Self {
        ProcessSupervisor
    }

    pub fn execute(
        &self,
        request: &CommandRequest,
        state: &mut ShellState,
    ) -> Result<(), ProcessError> {
        if request.arguments.is_empty() {
            return Ok(());
        }
        let run_in_background = request.background && !state.foreground_only();
        let plan = SpawnPlan::new(request, run_in_background)?;

        match fork().map_err(ProcessError::Fork)? {
            ForkResult::Child => run_child(&plan, run_in_background),
            ForkResult::Parent(pid) => {
                if run_in_background {
                    println!("background pid is {}", pid);
                    // One poll right away; a child that is already gone
                    // would otherwise slip past the sweep.
                    if let Some(outcome) = wait_nohang(pid).map_err(ProcessError::Wait)? {
                        status::report_background_done(&outcome);
                    }
                    Ok(())
                } else {
                    let outcome = wait_blocking(pid).map_err(ProcessError::Wait)?;
                    state.set_last_foreground(outcome);
                    if !outcome.is_success() {
                        println!("{}", outcome);
                    }
                    Ok(())
                }
            }
        }
    }

    // Collects every finished background child without blocking. Runs
    // once per command cycle.
    pub fn reap_finished(&self) -> Vec<ProcessOutcome> {
        let mut finished = Vec::new();
        loop {
            let mut raw: c_int = 0;
            match cerr(unsafe { libc::waitpid(-1, &mut raw, WNOHANG) }) {
                Ok(0) => break,
                Ok(pid) => finished.push(ProcessOutcome::from_wait_status(pid, raw)),
                // ECHILD: nothing left to wait for.
                Err(_) => break,
            }
        }
        finished
    }
}

enum ForkResult {
    Parent(pid_t),
    Child,
}

fn fork() -> io::Result<ForkResult> {
    let pid = cerr(unsafe { libc::fork() })?;
    if pid == 0 {
        Ok(ForkResult::Child)
    } else {
        Ok(ForkResult::Parent(pid))
    }
}

// Everything the child touches, allocated in the parent. Between fork
// and exec only async-signal-safe calls are allowed, so argv pointers
// and failure messages cannot be built on the child side. The pointers
// stay valid because they target the CString heap buffers, which do
// not move with the plan.
struct SpawnPlan {
    // Owns the buffers argv_ptrs points into.
    _argv: Vec<CString>,
    argv_ptrs: Vec<*const c_char>,
    stdin_path: Option<CString>,
    stdout_path: Option<CString>,
    stdin_failure: Vec<u8>,
    stdout_failure: Vec<u8>,
    exec_failure: Vec<u8>,
}

impl SpawnPlan {
    fn new(request: &CommandRequest, run_in_background: bool) -> Result<Self, ProcessError> {
        let argv = request
            .arguments
            .iter()
            .map(|arg| CString::new(arg.as_str()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| ProcessError::NulArgument)?;

        let mut argv_ptrs: Vec<*const c_char> = argv.iter().map(|arg| arg.as_ptr()).collect();
        argv_ptrs.push(std::ptr::null());

        let stdin_path = stream_path(request.input_redirect.as_deref(), run_in_background)?;
        let stdout_path = stream_path(request.output_redirect.as_deref(), run_in_background)?;

        let stdin_failure = open_failure(stdin_path.as_deref(), "input");
        let stdout_failure = open_failure(stdout_path.as_deref(), "output");
        let exec_failure = format!("venule: cannot execute {}\n", request.program()).into_bytes();

        Ok(SpawnPlan {
            _argv: argv,
            argv_ptrs,
            stdin_path,
            stdout_path,
            stdin_failure,
            stdout_failure,
            exec_failure,
        })
    }
}

// Background children fall back to /dev/null for any stream the line
// did not redirect.
fn stream_path(
    explicit: Option<&Path>,
    run_in_background: bool,
) -> Result<Option<CString>, ProcessError> {
    let path = match explicit {
        Some(path) => path,
        None if run_in_background => Path::new(redirect::NULL_DEVICE),
        None => return Ok(None),
    };
    CString::new(path.as_os_str().as_bytes())
        .map(Some)
        .map_err(|_| ProcessError::NulArgument)
}

fn open_failure(path: Option<&std::ffi::CStr>, direction: &str) -> Vec<u8> {
    match path {
        Some(path) => format!(
            "venule: cannot open {} for {}\n",
            path.to_string_lossy(),
            direction
        )
        .into_bytes(),
        None => Vec::new(),
    }
}

fn run_child(plan: &SpawnPlan, run_in_background: bool) -> ! {
    if run_in_background {
        signal::prepare_background_child();
    } else {
        signal::prepare_foreground_child();
    }

    if let Some(path) = &plan.stdin_path {
        if redirect::redirect_stdin(path).is_err() {
            child_abort(&plan.stdin_failure, REDIRECT_FAILURE);
        }
    }
    if let Some(path) = &plan.stdout_path {
        if redirect::redirect_stdout(path).is_err() {
            child_abort(&plan.stdout_failure, REDIRECT_FAILURE);
        }
    }

    unsafe {
        libc::execvp(plan.argv_ptrs[0], plan.argv_ptrs.as_ptr());
    }
    // execvp only returns on failure.
    child_abort(&plan.exec_failure, EXEC_FAILURE)
}

fn child_abort(message: &[u8], code: c_int) -> ! {
    unsafe {
        libc::write(STDERR_FILENO, message.as_ptr().cast(), message.len());
        libc::_exit(code)
    }
}

fn wait_nohang(pid: pid_t) -> io::Result<Option<ProcessOutcome>> {
    let mut raw: c_int = 0;
    match cerr(unsafe { libc::waitpid(pid, &mut raw, WNOHANG) })? {
        0 => Ok(None),
        _ => Ok(Some(ProcessOutcome::from_wait_status(pid, raw))),
    }
}

fn wait_blocking(pid: pid_t) -> io::Result<ProcessOutcome> {
    let mut raw: c_int = 0;
    loop {
        match cerr(unsafe { libc::waitpid(pid, &mut raw, 0) }) {
            Ok(_) => return Ok(ProcessOutcome::from_wait_status(pid, raw)),
            // Restart when a signal handler interrupts the wait.
            Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }
}
