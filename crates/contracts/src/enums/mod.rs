pub mod floor;
pub mod solar_month;

pub use floor::Floor;
pub use solar_month::SolarMonth;
