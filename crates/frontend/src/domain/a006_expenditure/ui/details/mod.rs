mod view;
mod view_model;

pub use view::ExpenditureDetails;
pub use view_model::ExpenditureDetailsVm;
