pub mod config;
pub mod data;
pub mod error;
pub mod format;
pub mod upload;

#[cfg(test)]
pub mod test_support;
