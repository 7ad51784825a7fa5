mod view;
mod view_model;

pub use view::ProcessingCarpetDetails;
pub use view_model::ProcessingCarpetDetailsVm;
