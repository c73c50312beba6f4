//! Parser for inline login-module configuration.
//!
//! Turns a configuration string into a [`ParsedConfig`]: a non-empty list of
//! [`Entry`] values bound to a login context name. Parsing is single-pass
//! and fail-fast; callers see either a complete configuration or a
//! [`JaasError`], never a partial result.
//!
//! # Example
//!
//! ```text
//! let config = parse_config("com.example.Login required debug=true;", "KafkaClient")?;
//! assert_eq!(config.entries()[0].control_flag(), ControlFlag::Required);
//! ```

mod control_flag;
mod cursor;
mod entry;
mod error;
mod parser;


pub use control_flag::ControlFlag;
pub use cursor::Cursor;
pub use entry::{Entry, ParsedConfig};
pub use error::JaasError;
pub use parser::{parse_all, parse_config, parse_entry, parse_reader};
