pub mod ast;
pub mod check;
pub mod fix;
pub mod sources;

#[cfg(test)]
mod fix_tests;
#[cfg(test)]
mod sources_tests;

use switchcheck_lib::SourceMap;

/// Text a command produced, and whether the process should fail.
#[derive(Debug, Default)]
pub struct Outcome {
    pub stdout: String,
    pub stderr: String,
    pub failed: bool,
}

impl Outcome {
    /// Print both streams and exit with 1 on failure.
    pub fn finish(self) {
        print!("{}", self.stdout);
        eprint!("{}", self.stderr);
        if self.failed {
            std::process::exit(1);
        }
    }

    fn error(&mut self, message: impl std::fmt::Display) {
        self.stderr.push_str(&format!("error: {message}\n"));
        self.failed = true;
    }
}

/// Load sources or exit with the loader's message.
fn load_or_exit(paths: &[std::path::PathBuf], text: Option<&str>) -> SourceMap {
    sources::load_sources(paths, text).unwrap_or_else(|err| {
        eprintln!("error: {}", err);
        std::process::exit(1);
    })
}
