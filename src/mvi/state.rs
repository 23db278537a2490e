/// Marker trait for state objects driven by a [`Reducer`](super::Reducer).
///
/// `Default` is the start-of-session value; `PartialEq` lets the owner
/// detect whether a dispatch changed anything.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
