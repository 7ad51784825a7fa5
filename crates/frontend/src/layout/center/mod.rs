pub mod center;
pub mod main_content;

pub use center::Center;
pub use main_content::MainContent;
