//! Carpet form, used for both directions
//!
//! - view_model.rs: CarpetDetailsVm, the live price preview
//! - view.rs: CarpetDetails component

mod view;
mod view_model;

pub use view::CarpetDetails;
pub use view_model::CarpetDetailsVm;
