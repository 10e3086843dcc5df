/// Decides whether a free-text query matches a product name.
pub trait NameMatcher: Send + Sync {
    fn matches(&self, candidate: &str, query: &str) -> bool;
}
