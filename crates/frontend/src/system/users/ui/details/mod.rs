//! User form
//!
//! Creating asks for a username and password; editing changes profile,
//! role and active flag, and optionally sets a new password.

mod view;
mod view_model;

pub use view::UserDetails;
pub use view_model::{role_label, UserDetailsVm, ROLE_OPTIONS};
