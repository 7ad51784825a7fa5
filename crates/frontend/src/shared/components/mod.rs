pub mod confirm_dialog;
pub mod date_input;
pub mod error_banner;
pub mod file_input;
pub mod page_header;
pub mod period_select;
pub mod ref_select;
pub mod stat_card;
pub mod table;
