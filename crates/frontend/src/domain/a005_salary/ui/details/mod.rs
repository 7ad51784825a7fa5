mod view;
mod view_model;

pub use view::SalaryDetails;
pub use view_model::SalaryDetailsVm;
