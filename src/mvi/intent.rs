/// Marker trait for intent objects.
///
/// Intents are either user actions (load more, submit filters) or
/// completions coming back from the gateway worker.
pub trait Intent: Send + 'static {}
