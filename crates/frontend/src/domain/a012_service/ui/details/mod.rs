//! Services sheet form: period, floor and approval on top, then one row
//! per tenant with the fee, the collected amount and a per-row approval.

mod view;
mod view_model;

pub use view::ServiceSheetDetails;
pub use view_model::{ServiceRowVm, ServiceSheetDetailsVm};
