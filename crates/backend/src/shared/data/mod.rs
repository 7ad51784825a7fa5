pub mod db;
pub mod model_helpers;
