//! 窗口化下拉选择组件
//!
//! 把选择控件与窗口化列表接在一起：选择控件负责输入、过滤与键盘导航，
//! 打开时回调本组件的菜单渲染器；菜单计算受上限约束的总高度，只绘制视口内的行。

use crate::menu_height::{DEFAULT_MAX_HEIGHT, calculate_list_height};
use crate::option::SelectOption;
use crate::option_renderer::{
    OptionRendererArgs, OptionRendererFn, OptionRow, default_option_renderer, draw_option_row,
};
use crate::row_height::RowHeight;
use crate::select::{
    MenuRenderArgs, MenuRenderer, OptionLoader, SelectComponent, SelectFactory, SelectProps,
    SelectWidget, resolve_select_component,
};
use crate::theme::{RenderTheme, base_style};
use crate::virtual_list::{AutoSizer, ListConfig, ListProps, RowPlacement, WindowedListState};
use crossterm::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Clear};
use std::rc::Rc;

pub(crate) const SCROLL_STEP: i32 = 3;

pub struct VirtualizedSelectProps {
    pub is_async: bool,
    pub max_height: u16,
    pub option_height: RowHeight,
    pub option_renderer: Option<OptionRendererFn>,
    pub select_component: Option<SelectFactory>,
    pub list_props: ListProps,
    pub select: SelectProps,
    pub theme: RenderTheme,
    pub loader: Option<Box<dyn OptionLoader>>,
}

impl Default for VirtualizedSelectProps {
    fn default() -> Self {
        Self {
            is_async: false,
            max_height: DEFAULT_MAX_HEIGHT,
            option_height: RowHeight::default(),
            option_renderer: None,
            select_component: None,
            list_props: ListProps::default(),
            select: SelectProps::default(),
            theme: RenderTheme::default(),
            loader: None,
        }
    }
}

impl VirtualizedSelectProps {
    pub fn async_options(mut self, is_async: bool) -> Self {
        self.is_async = is_async;
        self
    }

    pub fn max_height(mut self, max_height: u16) -> Self {
        self.max_height = max_height;
        self
    }

    pub fn option_height(mut self, option_height: impl Into<RowHeight>) -> Self {
        self.option_height = option_height.into();
        self
    }

    pub fn option_renderer(
        mut self,
        renderer: impl Fn(OptionRendererArgs<'_>) -> OptionRow<'_> + 'static,
    ) -> Self {
        self.option_renderer = Some(Rc::new(renderer));
        self
    }

    pub fn select_component(mut self, factory: SelectFactory) -> Self {
        self.select_component = Some(factory);
        self
    }

    pub fn list_props(mut self, list_props: ListProps) -> Self {
        self.list_props = list_props;
        self
    }

    pub fn select(mut self, select: SelectProps) -> Self {
        self.select = select;
        self
    }

    pub fn options(mut self, options: Vec<SelectOption>) -> Self {
        self.select.options = options;
        self
    }

    pub fn theme(mut self, theme: RenderTheme) -> Self {
        self.theme = theme;
        self
    }

    pub fn loader(mut self, loader: impl OptionLoader + 'static) -> Self {
        self.loader = Some(Box::new(loader));
        self
    }
}

/// 菜单渲染器；`list` 是已挂载列表的句柄，菜单关闭后清空。
///
/// `last_options` 是上一帧交给列表的选项，用于发现过滤或重新加载后需要重新测量的行。
struct Menu {
    max_height: u16,
    option_height: RowHeight,
    option_renderer: Option<OptionRendererFn>,
    list_props: ListProps,
    theme: RenderTheme,
    list: Option<WindowedListState>,
    last_config: Option<ListConfig>,
    last_options: Vec<SelectOption>,
    mounted: bool,
}

impl Menu {
    fn render_row<'a>(
        &self,
        args: MenuRenderArgs<'a>,
        focused_index: Option<usize>,
        placement: &'a RowPlacement,
    ) -> Option<OptionRow<'a>> {
        let option = args.options.get(placement.index)?;
        // 行内的选择回调固定使用外层 on_select
        let row_args = OptionRendererArgs {
            focused_option: args.focused_option,
            focused_option_index: focused_index,
            focus_option: args.focus_option,
            key: &placement.key,
            area: placement.area,
            label_key: args.label_key,
            on_select: args.on_select,
            option,
            option_index: placement.index,
            options: args.options,
            select_value: args.on_select,
            value_array: args.value_array,
        };
        Some(match &self.option_renderer {
            Some(renderer) => renderer(row_args),
            None => default_option_renderer(row_args),
        })
    }
}

impl MenuRenderer for Menu {
    fn render_menu(
        &mut self,
        f: &mut ratatui::Frame<'_>,
        anchor: Rect,
        args: MenuRenderArgs<'_>,
    ) -> u16 {
        let options = args.options;
        let focused_index = focused_option_index(options, args.focused_option);
        let height = calculate_list_height(options, &self.option_height, self.max_height);
        let width = AutoSizer::width_only()
            .measure(anchor)
            .width
            .unwrap_or(anchor.width);
        let mut config = ListConfig::new(options.len(), height, width);
        config.scroll_to_index = focused_index;
        config.style = base_style(&self.theme);
        let config = self.list_props.apply(config);

        let option_height = &self.option_height;
        let height_of = |index: usize| {
            options
                .get(index)
                .map_or(0, |option| option_height.height_of(option))
        };
        let changed = first_changed_row(&self.last_options, options);
        let list = self.list.get_or_insert_with(|| {
            tracing::debug!(rows = options.len(), "menu list mounted");
            WindowedListState::new()
        });
        if let Some(index) = changed {
            list.recompute_row_heights(index);
        }
        let placements = list.layout(&config, anchor, &height_of);
        let viewport = list.viewport();
        self.mounted = true;

        f.render_widget(Clear, viewport);
        f.render_widget(Block::default().style(config.style), viewport);
        for placement in &placements {
            if let Some(row) = self.render_row(args, focused_index, placement) {
                draw_option_row(f, row, placement.clip_top, &self.theme);
            }
        }
        self.last_config = Some(config);
        if changed.is_some() {
            self.last_options = options.to_vec();
        }
        viewport.height
    }

    fn handle_mouse(&mut self, mouse: MouseEvent, args: MenuRenderArgs<'_>) -> bool {
        let Some(list) = self.list.as_mut() else {
            return false;
        };
        let placement = match mouse.kind {
            MouseEventKind::ScrollDown | MouseEventKind::ScrollUp => {
                let view = list.viewport();
                if !contains(view, mouse.column, mouse.row) {
                    return false;
                }
                let delta = if mouse.kind == MouseEventKind::ScrollDown {
                    SCROLL_STEP
                } else {
                    -SCROLL_STEP
                };
                list.scroll_by(delta);
                return true;
            }
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Moved => list
                .row_at(mouse.column, mouse.row)
                .and_then(|index| list.placement_of(index)),
            _ => return false,
        };
        let Some(placement) = placement else {
            return false;
        };
        let focused_index = focused_option_index(args.options, args.focused_option);
        let Some(row) = self.render_row(args, focused_index, &placement) else {
            return false;
        };
        let handler = if mouse.kind == MouseEventKind::Moved {
            row.on_mouse_enter
        } else {
            row.on_click
        };
        if let Some(handler) = handler {
            handler();
        }
        true
    }
}

/// 第一个与上一帧不同的行；选项未变时为 `None`。
fn first_changed_row(previous: &[SelectOption], current: &[SelectOption]) -> Option<usize> {
    match previous.iter().zip(current).position(|(a, b)| a != b) {
        Some(index) => Some(index),
        None if previous.len() != current.len() => Some(previous.len().min(current.len())),
        None => None,
    }
}

/// 聚焦项在列表中的下标；不存在时为 `None`，表示没有显式滚动目标。
pub fn focused_option_index(
    options: &[SelectOption],
    focused_option: Option<&SelectOption>,
) -> Option<usize> {
    let focused = focused_option?;
    options.iter().position(|option| option == focused)
}

pub struct VirtualizedSelect {
    component: SelectComponent,
    select: Box<dyn SelectWidget>,
    menu: Menu,
}

impl VirtualizedSelect {
    pub fn new(props: VirtualizedSelectProps) -> Self {
        let VirtualizedSelectProps {
            is_async,
            max_height,
            option_height,
            option_renderer,
            select_component,
            list_props,
            select,
            theme,
            loader,
        } = props;
        let component = resolve_select_component(select_component.as_ref(), is_async);
        let select = component.build(select, loader);
        Self {
            component,
            select,
            menu: Menu {
                max_height,
                option_height,
                option_renderer,
                list_props,
                theme,
                list: None,
                last_config: None,
                last_options: Vec::new(),
                mounted: false,
            },
        }
    }

    pub fn component(&self) -> &SelectComponent {
        &self.component
    }

    pub fn select(&self) -> &dyn SelectWidget {
        self.select.as_ref()
    }

    pub fn select_mut(&mut self) -> &mut dyn SelectWidget {
        self.select.as_mut()
    }

    pub fn value(&self) -> &[SelectOption] {
        self.select.value()
    }

    pub fn render(&mut self, f: &mut ratatui::Frame<'_>, area: Rect) {
        self.menu.mounted = false;
        let theme = self.menu.theme.clone();
        self.select.render(f, area, &theme, &mut self.menu);
        if !self.menu.mounted && self.menu.list.take().is_some() {
            tracing::debug!("menu list unmounted");
            self.menu.last_config = None;
            self.menu.last_options.clear();
        }
    }

    pub fn handle_event(&mut self, event: &Event) -> bool {
        self.select.handle_event(event, &mut self.menu)
    }

    pub fn tick(&mut self) {
        self.select.tick();
    }

    /// 行高策略的结果变化后调用；菜单未挂载时不做任何事。
    pub fn recompute_option_heights(&mut self, index: usize) {
        if let Some(list) = self.menu.list.as_mut() {
            list.recompute_row_heights(index);
        }
    }

    pub fn recompute_all_option_heights(&mut self) {
        self.recompute_option_heights(0);
    }

    pub fn set_option_height(&mut self, option_height: impl Into<RowHeight>) {
        self.menu.option_height = option_height.into();
    }

    pub fn is_menu_mounted(&self) -> bool {
        self.menu.list.is_some()
    }

    pub fn list_state(&self) -> Option<&WindowedListState> {
        self.menu.list.as_ref()
    }

    /// 上一帧交给列表的配置（已合并 list_props）
    pub fn list_config(&self) -> Option<&ListConfig> {
        self.menu.last_config.as_ref()
    }
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
