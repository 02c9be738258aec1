use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use libc::{SIGINT, SIGTSTP, SIG_DFL, SIG_ERR, SIG_IGN};
use signal_hook::SigId;

use super::ProcessError;

const ENTER_NOTICE: &[u8] = b"Entering foreground-only mode (& is now ignored)\n";
const EXIT_NOTICE: &[u8] = b"Exiting foreground-only mode\n";

pub struct SignalCoordinator {
    _sigtstp: SigId,
}

impl SignalCoordinator {
    pub fn install(foreground_only: Arc<AtomicBool>) -> Result<Self, ProcessError> {
        // The shell itself never dies from SIGINT; foreground children
        // restore the default disposition before exec.
        if unsafe { libc::signal(SIGINT, SIG_IGN) } == SIG_ERR {
            return Err(ProcessError::SignalSetup(io::Error::last_os_error()));
        }

        // The handler owns its clone of the flag and may only touch the
        // atomic and write fixed bytes.
        let sigtstp = unsafe {
            signal_hook::low_level::register(SIGTSTP, move || {
                toggle_foreground_only(&foreground_only);
            })
        }
        .map_err(ProcessError::SignalSetup)?;

        Ok(SignalCoordinator { _sigtstp: sigtstp })
    }
}

fn toggle_foreground_only(flag: &AtomicBool) -> &'static [u8] {
    let was_on = flag.fetch_xor(true, Ordering::SeqCst);
    let notice: &'static [u8] = if was_on { EXIT_NOTICE } else { ENTER_NOTICE };
    unsafe {
        libc::write(libc::STDOUT_FILENO, notice.as_ptr().cast(), notice.len());
    }
    notice
}

// Child-side dispositions, set between fork and exec. SIG_IGN survives
// exec while handler functions reset to SIG_DFL on their own.
pub(crate) fn prepare_foreground_child() {
    unsafe {
        libc::signal(SIGTSTP, SIG_IGN);
        libc::signal(SIGINT, SIG_DFL);
    }
}

pub(crate) fn prepare_background_child() {
    unsafe {
        libc::signal(SIGTSTP, SIG_IGN);
        libc::signal(SIGINT, SIG_IGN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::process_lock;

    #[test]
    fn test_sigtstp_toggles_the_flag() {
        let _guard = process_lock();
        let flag = Arc::new(AtomicBool::new(false));
        let _coordinator = SignalCoordinator::install(Arc::clone(&flag)).unwrap();

        signal_hook::low_level::raise(SIGTSTP).unwrap();
        assert!(flag.load(Ordering::SeqCst));

        signal_hook::low_level::raise(SIGTSTP).unwrap();
        assert!(!flag.load(Ordering::SeqCst));
    }

    #[test]
    fn test_transition_notices_alternate() {
        let flag = AtomicBool::new(false);
        assert_eq!(toggle_foreground_only(&flag), ENTER_NOTICE);
        assert_eq!(toggle_foreground_only(&flag), EXIT_NOTICE);
        assert_eq!(toggle_foreground_only(&flag), ENTER_NOTICE);
    }
}
