//! Model-View-Intent primitives shared by every state container.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: plain value describing what the view shows
//! - **Intent**: a user action or a gateway response
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Side effects (HTTP requests) never run inside a reducer. A reducer that
//! needs a request records it in the state, and the owner of the state
//! forwards it to the gateway worker.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
