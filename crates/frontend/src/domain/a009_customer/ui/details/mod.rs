mod view;
mod view_model;

pub use view::CustomerDetails;
pub use view_model::CustomerDetailsVm;
