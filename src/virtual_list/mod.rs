//! 窗口化列表：只布局与视口相交的行，行高按需测量并缓存。

mod auto_sizer;
mod list;
mod sizes;

pub use auto_sizer::{AutoSizer, MeasuredSize};
pub use list::{ListConfig, ListProps, RowPlacement, ScrollAlignment, WindowedListState};
pub use sizes::CellSizeCache;
