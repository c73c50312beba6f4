//! Command handlers for the `jaasc` CLI.
//!
//! Each submodule implements one command and returns the lines to print, so
//! `main` owns all process exits. Shared input handling lives here.

use std::io::Read;

use jaas_parse::JaasError;

mod check;
mod lex;

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;

pub use check::{check_file, parse_check_options, render_config, CheckOptions};
pub use lex::{lex_file, render_tokens};

/// Read configuration text from `path`, or from stdin when `path` is `-`.
///
/// Read failures are reported as [`JaasError::UnderlyingIo`] so they stay
/// distinct from grammar errors.
pub(crate) fn read_input(path: &str) -> Result<String, JaasError> {
    let mut source = String::new();
    if path == "-" {
        std::io::stdin().lock().read_to_string(&mut source)?;
    } else {
        std::fs::File::open(path)?.read_to_string(&mut source)?;
    }
    Ok(source)
}
