pub mod number_format;
pub mod row_cells;
pub mod sortable_header_cell;
pub mod table_cell_money;
pub mod table_totals_row;

pub use number_format::*;
pub use row_cells::{RowActions, StatusBadge};
pub use sortable_header_cell::SortableHeaderCell;
pub use table_cell_money::TableCellMoney;
pub use table_totals_row::TableTotalsRow;
