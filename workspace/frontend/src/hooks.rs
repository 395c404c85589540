/// Startup load state: the dashboard either has its context or it has
/// nothing to show.
#[derive(Clone, PartialEq)]
pub enum FetchState<T> {
    Loading,
    Success(T),
    Error(String),
}

impl<T> Default for FetchState<T> {
    fn default() -> Self {
        Self::Loading
    }
}
