//! 终端下拉选择组件，选项列表使用窗口化渲染。

pub mod config;
pub mod error;
pub mod menu_height;
#[cfg(test)]
mod menu_height_tests;
pub mod option;
pub mod option_renderer;
pub mod row_height;
pub mod select;
#[cfg(test)]
mod test_support;
pub mod theme;
#[cfg(test)]
mod theme_tests;
pub mod virtual_list;
pub mod virtualized_select;

pub use error::ConfigError;
pub use menu_height::{DEFAULT_MAX_HEIGHT, calculate_list_height};
pub use option::SelectOption;
pub use option_renderer::{
    OptionRendererArgs, OptionRendererFn, OptionRow, default_option_renderer,
};
pub use row_height::{DEFAULT_OPTION_HEIGHT, RowHeight};
pub use select::{
    AsyncSelect, OptionLoader, SelectComponent, SelectFactory, SelectProps, SelectWidget,
    StandardSelect, resolve_select_component,
};
pub use theme::RenderTheme;
pub use virtual_list::{ListConfig, ListProps, ScrollAlignment, WindowedListState};
pub use virtualized_select::{VirtualizedSelect, VirtualizedSelectProps, focused_option_index};
