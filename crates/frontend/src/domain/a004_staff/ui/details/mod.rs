//! Staff form (MVVM)
//!
//! - view_model.rs: StaffDetailsVm with one RwSignal per field
//! - view.rs: StaffDetails component

mod view;
mod view_model;

pub use view::StaffDetails;
pub use view_model::StaffDetailsVm;
