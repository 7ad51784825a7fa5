pub mod empty_row;
pub mod number_format;
pub mod table_cell_money;

pub use empty_row::EmptyRow;
pub use number_format::*;
pub use table_cell_money::TableCellMoney;
