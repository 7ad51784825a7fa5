mod view;
mod view_model;

pub use view::FinanceDetails;
pub use view_model::FinanceDetailsVm;
