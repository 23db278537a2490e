//! List state container.
//!
//! Owns the loaded characters, the page cursor, the active and previous
//! filter sets and the load status. All changes go through
//! [`ListReducer`]; requests are recorded in [`ListState::in_flight`] and
//! forwarded to the gateway by the owner of the state.
//!
//! ```text
//! Idle ──Load──→ Loading ──ok──→ Succeeded ──LoadMore/Submit/Reset──→ Loading
//!                   │ └──404 (filtered)──→ NotFound ──Acknowledge──→ Succeeded
//!                   └──error──→ Failed ──Load──→ Loading
//! ```

mod filter;
mod intent;
mod reducer;
mod state;

pub use filter::{validate_submission, FilterRejection};
pub use intent::ListIntent;
pub use reducer::ListReducer;
pub use state::{InFlight, ListState, LoadStatus, RequestPurpose};
