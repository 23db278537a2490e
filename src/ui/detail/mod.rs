//! Character detail panel.
//!
//! Independent of the list: a failed detail fetch is shown inside the panel
//! and never changes list state.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_detail;
pub(crate) use dialog::status_style;
pub use intent::DetailIntent;
pub use reducer::DetailReducer;
pub use state::DetailState;
