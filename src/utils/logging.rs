//! Console logging for the CLI
//!
//! The library itself only emits `log` records. The binary has no log
//! backend installed, so `--verbose` output goes through [`VerboseLogger`],
//! which mirrors every line to `log::debug!` for embedders that do.

pub fn print_verbose(verbose: bool, msg: &str) {
    log::debug!("{}", msg);
    if verbose {
        println!("Verbose: {}", msg);
    }
}

pub fn log_error(msg: &str) {
    log::error!("{}", msg);
    eprintln!("Error: {}", msg);
}

#[derive(Debug, Clone, Copy)]
pub struct VerboseLogger {
    enabled: bool,
}

impl VerboseLogger {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn log(&self, msg: &str) {
        print_verbose(self.enabled, msg);
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }
}
