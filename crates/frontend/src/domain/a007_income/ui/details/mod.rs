mod view;
mod view_model;

pub use view::IncomeDetails;
pub use view_model::IncomeDetailsVm;
