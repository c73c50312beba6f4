//! Chooses between an inline login configuration and the ambient store.

use std::collections::HashMap;
use std::sync::Arc;

use jaas_parse::{parse_config, JaasError};
use tracing::debug;

use crate::{AmbientConfiguration, ConfigurationHandle, ContextNameResolver, LoginType, Password};

/// Configuration key holding the inline login configuration.
pub const SASL_JAAS_CONFIG: &str = "sasl.jaas.config";

/// Builds [`ConfigurationHandle`]s from client or server configuration maps.
#[derive(Clone)]
pub struct ConfigurationProvider {
    ambient: Arc<dyn AmbientConfiguration>,
}

impl ConfigurationProvider {
    /// Create a provider that falls back to `ambient` when no inline
    /// configuration is present.
    pub fn new(ambient: Arc<dyn AmbientConfiguration>) -> Self {
        ConfigurationProvider { ambient }
    }

    /// Resolve the configuration selected by `override_key`.
    ///
    /// Without that key the ambient store is returned untouched and nothing
    /// is parsed. With it, the secret's value is parsed and bound to the
    /// resolver's context name; any grammar error fails the whole call.
    #[tracing::instrument(level = "debug", skip(self, configs, resolver))]
    pub fn resolve_configuration<R>(
        &self,
        configs: &HashMap<String, Password>,
        override_key: &str,
        resolver: &R,
    ) -> Result<ConfigurationHandle, JaasError>
    where
        R: ContextNameResolver + ?Sized,
    {
        let Some(inline) = configs.get(override_key) else {
            debug!("no inline login configuration, using ambient store");
            return Ok(ConfigurationHandle::Ambient(Arc::clone(&self.ambient)));
        };

        let context_name = resolver.context_name();
        let config = parse_config(inline.value(), &context_name)?;
        debug!(
            context = %context_name,
            entries = config.entries().len(),
            "using inline login configuration"
        );
        Ok(ConfigurationHandle::Parsed(config))
    }

    /// Resolve using the well-known [`SASL_JAAS_CONFIG`] key.
    pub fn jaas_config(
        &self,
        login_type: LoginType,
        configs: &HashMap<String, Password>,
    ) -> Result<ConfigurationHandle, JaasError> {
        self.resolve_configuration(configs, SASL_JAAS_CONFIG, &login_type)
    }
}
