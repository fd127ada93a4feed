use crate::models::Collection;

/// Namespace used by the web front end.
pub const DEFAULT_NAMESPACE: &str = "vaic";

/// Storage keys owned by one store: one per collection plus the backup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreKeys {
    namespace: String,
}

impl StoreKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `<ns>_<collection>`, e.g. `vaic_contest_attempts`.
    pub fn collection(&self, collection: Collection) -> String {
        format!("{}_{}", self.namespace, collection.key_suffix())
    }

    /// Aggregate backup key, `<ns>_data_store`.
    pub fn bundle(&self) -> String {
        format!("{}_data_store", self.namespace)
    }

    /// Every key this store writes, backup first.
    pub fn all(&self) -> Vec<String> {
        std::iter::once(self.bundle())
            .chain(Collection::ALL.iter().map(|c| self.collection(*c)))
            .collect()
    }
}

impl Default for StoreKeys {
    fn default() -> Self {
        Self::new(DEFAULT_NAMESPACE)
    }
}
