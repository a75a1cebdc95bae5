//! Generator configuration.

/// Module path of the runtime helpers when none is given.
pub const DEFAULT_DETAIL_NAMESPACE: &str = "::cfgen_core::detail";

/// Name of the root accessor type when none is given.
pub const DEFAULT_CONFIG_CLASS: &str = "Config";

/// Options for one compiler run.
///
/// Passed by reference through the whole emission pipeline; nothing reads
/// configuration from global state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratorOptions {
    /// Name of the root accessor type.
    pub config_class: String,
    /// Module path of the runtime helpers, without a trailing `::`.
    pub detail_namespace: String,
    /// Whether to embed the schema and emit the validating factory.
    pub embed_schema: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            config_class: DEFAULT_CONFIG_CLASS.to_string(),
            detail_namespace: DEFAULT_DETAIL_NAMESPACE.to_string(),
            embed_schema: false,
        }
    }
}

impl GeneratorOptions {
    /// Sets the root accessor type name.
    pub fn with_config_class(mut self, name: impl Into<String>) -> Self {
        self.config_class = name.into();
        self
    }

    /// Sets the runtime helper module path. A trailing `::` is dropped.
    pub fn with_detail_namespace(mut self, namespace: impl Into<String>) -> Self {
        let namespace = namespace.into();
        self.detail_namespace = namespace.trim_end_matches("::").to_string();
        self
    }

    /// Enables or disables schema embedding.
    pub fn with_embed_schema(mut self, embed: bool) -> Self {
        self.embed_schema = embed;
        self
    }

    /// Qualifies `item` with the detail namespace.
    pub fn detail(&self, item: &str) -> String {
        format!("{}::{item}", self.detail_namespace)
    }
}
