//! Filter form: name text plus status/species/gender choices.
//!
//! The form only collects values. Submissions go through
//! [`validate_submission`](crate::characters::validate_submission) before
//! any request is made.

mod dialog;
mod intent;
mod reducer;
mod state;

pub use dialog::render_filter_form;
pub use intent::FilterFormIntent;
pub use reducer::FilterFormReducer;
pub use state::{FilterField, FilterFormState};
