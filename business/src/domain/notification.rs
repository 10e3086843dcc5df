/// Outbound port for the "shopping complete" signal.
///
/// Raised while a delete is being processed, when the list as it stood
/// before the removal was non-empty and every product in it was bought.
/// Rendering the celebration is left to the adapter.
pub trait CompletionNotifier: Send + Sync {
    fn shopping_complete(&self, bought_count: usize);
}
