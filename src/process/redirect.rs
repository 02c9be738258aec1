use std::ffi::CStr;
use std::io;

use libc::{c_int, O_CREAT, O_RDONLY, O_TRUNC, O_WRONLY, STDIN_FILENO, STDOUT_FILENO};

use super::cerr;

pub(crate) const NULL_DEVICE: &str = "/dev/null";

const OUTPUT_MODE: libc::c_uint = 0o666;

// Both rebinds run in the forked child between fork and exec, so they
// must stay async-signal-safe.
pub(crate) fn redirect_stdin(path: &CStr) -> io::Result<()> {
    rebind(path, O_RDONLY, STDIN_FILENO)
}

pub(crate) fn redirect_stdout(path: &CStr) -> io::Result<()> {
    rebind(path, O_WRONLY | O_CREAT | O_TRUNC, STDOUT_FILENO)
}

fn rebind(path: &CStr, flags: c_int, target_fd: c_int) -> io::Result<()> {
    let fd = cerr(unsafe { libc::open(path.as_ptr(), flags, OUTPUT_MODE) })?;
    if fd == target_fd {
        return Ok(());
    }
    let duped = cerr(unsafe { libc::dup2(fd, target_fd) });
    unsafe { libc::close(fd) };
    duped.map(|_| ())
}
