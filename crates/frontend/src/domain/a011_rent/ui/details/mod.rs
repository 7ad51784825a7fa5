//! Rent sheet form
//!
//! A new sheet only needs its period and floor; the rows come from the
//! active agreements when the server creates it. An existing sheet is
//! edited row by row: the rent and the collected amount of each tenant.
//!
//! - view_model.rs: RentDetailsVm, RentRowVm
//! - view.rs: RentDetails component

mod view;
mod view_model;

pub use view::RentDetails;
pub use view_model::{RentDetailsVm, RentRowVm};
