mod view;
mod view_model;

pub use view::WorkerDetails;
pub use view_model::WorkerDetailsVm;
