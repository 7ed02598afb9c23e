//! Style class names the table toggles. The style sheet keys off these.

pub const TABLE: &str = "grid-table";
pub const TABLE_HIGHLIGHTED: &str = "grid-table--highlighted";
pub const TOP_ROW: &str = "grid-table__top-row";

pub const CELL: &str = "grid-table__cell";
pub const CELL_HIGHLIGHTED: &str = "grid-table__cell--highlighted";
pub const CELL_DOWN: &str = "grid-table__cell--down";
pub const CELL_LABEL: &str = "grid-table__cell-label";

pub const HEADER_CELL: &str = "grid-table__header-cell";
pub const CORNER_CELL: &str = "grid-table__corner-cell";
pub const CORNER_HIDDEN: &str = "grid-table__corner-cell--hidden";
pub const CORNER_HIGHLIGHTED: &str = "grid-table__corner-cell--highlighted";
pub const CORNER_DOWN: &str = "grid-table__corner-cell--down";

pub const COLUMN_HIGHLIGHTED: &str = "grid-table__column--highlighted";
pub const COLUMN_DOWN: &str = "grid-table__column--down";

pub const ROW: &str = "grid-table__row";
pub const ROW_EVEN: &str = "grid-table__row--even";
pub const ROW_ODD: &str = "grid-table__row--odd";
pub const ROW_HIGHLIGHTED: &str = "grid-table__row--highlighted";
pub const ROW_DOWN: &str = "grid-table__row--down";

pub const ROW_HEADER_EVEN: &str = "grid-table__row-header--even";
pub const ROW_HEADER_ODD: &str = "grid-table__row-header--odd";

pub const CONTENT_AREA: &str = "grid-table__content-area";
pub const ROW_NUMBERS: &str = "grid-table__row-numbers";
pub const ROW_NUMBERS_HIDDEN: &str = "grid-table__row-numbers--hidden";

pub const SCROLL_HORIZONTAL: &str = "grid-table__scroll--horizontal";
pub const SCROLL_VERTICAL: &str = "grid-table__scroll--vertical";
pub const SCROLL_PASSIVE: &str = "grid-table__scroll--passive";
pub const SCROLL_CONTENT_ROW: &str = "grid-table__scroll-content-row";
pub const SCROLL_CONTENT_COLUMN: &str = "grid-table__scroll-content-column";
