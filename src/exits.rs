//! Process hygiene: terminal restore, signal handlers and core dumps.

#[cfg(unix)]
fn reset_termios() {
    unsafe {
        let mut termios: libc::termios = std::mem::zeroed();
        if libc::tcgetattr(0, &mut termios) == 0 {
            termios.c_oflag |= libc::OPOST | libc::ONLCR;
            termios.c_lflag |= libc::ICANON | libc::ECHO | libc::ISIG;
            libc::tcsetattr(0, libc::TCSANOW, &termios);
        }
    }
}

/// Runs on every `exit`, including the one from the signal handler.
#[cfg(unix)]
extern "C" fn restore_on_exit() {
    reset_termios();
    const RESTORE: &[u8] = b"\x1b[0m\x1b[?25h";
    unsafe {
        // escape codes only when a terminal is watching
        if libc::isatty(1) == 1 {
            libc::write(1, RESTORE.as_ptr() as *const libc::c_void, RESTORE.len());
        }
    }
}

#[cfg(unix)]
extern "C" fn signal_handler(_: libc::c_int) {
    unsafe { libc::exit(130) }
}

/// Register the exit hook and signal handlers. Call early in `main`.
pub fn install_handlers() {
    #[cfg(unix)]
    unsafe {
        libc::atexit(restore_on_exit);
        for sig in [libc::SIGINT, libc::SIGTERM, libc::SIGHUP] {
            libc::signal(sig, signal_handler as *const () as libc::sighandler_t);
        }
        // piping into `head` ends quietly instead of panicking on EPIPE
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }

    // keep generated passwords out of core dumps
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }
}

/// Put the tty back into cooked mode left over from a previous crash.
pub fn reset_terminal() {
    #[cfg(unix)]
    reset_termios();
}
