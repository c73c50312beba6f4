//! Login types and the context names they bind to.

/// Which side of a connection is logging in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LoginType {
    Client,
    Server,
}

impl LoginType {
    /// The login context name entries are registered under.
    pub const fn context_name(self) -> &'static str {
        match self {
            LoginType::Client => "KafkaClient",
            LoginType::Server => "KafkaServer",
        }
    }
}

/// Produces the context name a parsed configuration is bound to.
///
/// Implemented for [`LoginType`] and for any `Fn() -> String`.
pub trait ContextNameResolver {
    fn context_name(&self) -> String;
}

impl ContextNameResolver for LoginType {
    fn context_name(&self) -> String {
        LoginType::context_name(*self).to_owned()
    }
}

impl<F> ContextNameResolver for F
where
    F: Fn() -> String,
{
    fn context_name(&self) -> String {
        self()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(resolver: &dyn ContextNameResolver) -> String {
        resolver.context_name()
    }

    #[test]
    fn test_login_type_context_names() {
        assert_eq!(LoginType::Client.context_name(), "KafkaClient");
        assert_eq!(LoginType::Server.context_name(), "KafkaServer");
        assert_eq!(resolve(&LoginType::Server), "KafkaServer");
    }

    #[test]
    fn test_closure_resolver() {
        let suffix = "A";
        assert_eq!(resolve(&|| format!("ctx{suffix}")), "ctxA");
    }
}
