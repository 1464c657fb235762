use clap::Parser;
use rowdesk::{Cli, run};

fn main() {
    // Restore default SIGPIPE so `rowdesk list | head` exits quietly.
    #[cfg(unix)]
    reset_sigpipe();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[cfg(unix)]
fn reset_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}
