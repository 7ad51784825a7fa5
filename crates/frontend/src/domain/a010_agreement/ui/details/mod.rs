mod view;
mod view_model;

pub use view::AgreementDetails;
pub use view_model::AgreementDetailsVm;
