use crate::models::PartsDependency;

/// Keyed lookup of parts dependencies.
pub trait IPartsGraph: Send + Sync {
    /// All keys in the graph's iteration order.
    fn keys(&self) -> Vec<String>;

    fn lookup(&self, key: &str) -> Option<PartsDependency>;
}
