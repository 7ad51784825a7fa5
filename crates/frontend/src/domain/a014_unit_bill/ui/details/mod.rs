//! Monthly bill of the residential units
//!
//! A new bill only needs its month; the server copies every occupied unit
//! with its meters. Editing a row changes the readings, prices and the
//! collected amount; new current readings are carried back to the unit.

mod view;
mod view_model;

pub use view::UnitBillDetails;
pub use view_model::{UnitBillDetailsVm, UnitBillRowVm};
