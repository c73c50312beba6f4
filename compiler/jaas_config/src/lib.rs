//! Login configuration provider.
//!
//! Decides whether login modules come from an inline configuration string
//! (stored as a secret under [`SASL_JAAS_CONFIG`]) or from an ambient store
//! supplied by the host application. Either way, callers get a
//! [`ConfigurationHandle`] with a single `lookup(context_name)` operation.
//!
//! Handles are immutable and `Send + Sync`; lookups need no locking.

mod handle;
mod login_type;
mod password;
mod provider;


pub use handle::{AmbientConfiguration, ConfigurationHandle, StaticConfiguration};
pub use jaas_parse::{ControlFlag, Entry, JaasError, ParsedConfig};
pub use login_type::{ContextNameResolver, LoginType};
pub use password::Password;
pub use provider::{ConfigurationProvider, SASL_JAAS_CONFIG};
