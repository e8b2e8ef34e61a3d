use super::props::SelectProps;
use crate::option::SelectOption;
use crate::option_renderer::OptionCallback;
use crate::theme::RenderTheme;
use crossterm::event::{Event, MouseEvent};
use ratatui::layout::Rect;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuAction {
    Focus(SelectOption),
    Select(SelectOption),
}

/// 选择控件打开时交给菜单渲染器的参数。
#[derive(Clone, Copy)]
pub struct MenuRenderArgs<'a> {
    pub focused_option: Option<&'a SelectOption>,
    pub focus_option: OptionCallback<'a>,
    pub label_key: &'a str,
    pub on_select: OptionCallback<'a>,
    pub options: &'a [SelectOption],
    pub value_array: &'a [SelectOption],
}

/// 由选择控件回调，用于绘制下拉菜单主体。
pub trait MenuRenderer {
    /// 在 `anchor` 内绘制菜单，返回实际占用的行数。
    fn render_menu(&mut self, f: &mut ratatui::Frame<'_>, anchor: Rect, args: MenuRenderArgs<'_>)
    -> u16;

    /// 处理落在菜单上的鼠标事件，返回是否已消费。
    fn handle_mouse(&mut self, mouse: MouseEvent, args: MenuRenderArgs<'_>) -> bool;
}

pub trait SelectWidget {
    fn name(&self) -> &'static str;
    fn props(&self) -> &SelectProps;
    fn render(
        &mut self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        theme: &RenderTheme,
        menu: &mut dyn MenuRenderer,
    );
    fn handle_event(&mut self, event: &Event, menu: &mut dyn MenuRenderer) -> bool;
    fn is_open(&self) -> bool;
    fn open(&mut self);
    fn close(&mut self);
    fn value(&self) -> &[SelectOption];
    fn input(&self) -> &str;
    fn focused_option(&self) -> Option<&SelectOption>;
    /// 当前菜单中可见（过滤后）的选项
    fn visible_options(&self) -> Vec<SelectOption>;
    /// 每帧调用一次，异步变体在此收取加载结果。
    fn tick(&mut self) {}
}
