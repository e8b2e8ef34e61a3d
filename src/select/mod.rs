//! 选择控件：负责展开状态、输入过滤、键盘导航，并回调菜单渲染器绘制下拉列表。

mod async_select;
mod select_core;
#[cfg(test)]
mod select_core_tests;
mod props;
mod resolver;
mod standard;
mod widget;

pub use async_select::{AsyncSelect, DelayedLoader, FnLoader, LoadedOptions, OptionLoader};
pub use props::{DEFAULT_PAGE_SIZE, SelectProps};
pub use resolver::{SelectComponent, SelectFactory, resolve_select_component};
pub use standard::StandardSelect;
pub use widget::{MenuAction, MenuRenderArgs, MenuRenderer, SelectWidget};
