mod view;
mod view_model;

pub use view::UnitDetails;
pub use view_model::UnitDetailsVm;
