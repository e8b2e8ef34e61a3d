//! 单行选项的渲染
//!
//! 行渲染器是纯函数：输入行的位置与选项，输出要绘制的内容和交互回调。
//! 菜单在命中测试时会为同一行再次调用它来取得回调。

use crate::option::SelectOption;
use crate::theme::{RenderTheme, option_style};
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use std::rc::Rc;

pub const OPTION_CLASS: &str = "VirtualizedSelectOption";
pub const FOCUSED_OPTION_CLASS: &str = "VirtualizedSelectFocusedOption";
pub const DISABLED_OPTION_CLASS: &str = "VirtualizedSelectDisabledOption";

pub type OptionCallback<'a> = &'a dyn Fn(&SelectOption);

pub type OptionRendererFn = Rc<dyn Fn(OptionRendererArgs<'_>) -> OptionRow<'_>>;

#[derive(Clone, Copy)]
pub struct OptionRendererArgs<'a> {
    pub focused_option: Option<&'a SelectOption>,
    pub focused_option_index: Option<usize>,
    pub focus_option: OptionCallback<'a>,
    pub key: &'a str,
    pub area: Rect,
    pub label_key: &'a str,
    pub on_select: OptionCallback<'a>,
    pub option: &'a SelectOption,
    pub option_index: usize,
    pub options: &'a [SelectOption],
    pub select_value: OptionCallback<'a>,
    pub value_array: &'a [SelectOption],
}

pub struct OptionRow<'a> {
    pub key: String,
    pub area: Rect,
    pub class_names: Vec<&'static str>,
    pub content: Line<'a>,
    pub on_click: Option<Box<dyn Fn() + 'a>>,
    pub on_mouse_enter: Option<Box<dyn Fn() + 'a>>,
}

impl OptionRow<'_> {
    pub fn has_class(&self, class_name: &str) -> bool {
        self.class_names.iter().any(|c| *c == class_name)
    }

    pub fn is_interactive(&self) -> bool {
        self.on_click.is_some() || self.on_mouse_enter.is_some()
    }
}

pub fn default_option_renderer(args: OptionRendererArgs<'_>) -> OptionRow<'_> {
    let OptionRendererArgs {
        focused_option,
        focus_option,
        key,
        area,
        label_key,
        option,
        select_value,
        ..
    } = args;
    let mut class_names = vec![OPTION_CLASS];
    if focused_option == Some(option) {
        class_names.push(FOCUSED_OPTION_CLASS);
    }
    if option.disabled {
        class_names.push(DISABLED_OPTION_CLASS);
    }
    let mut row = OptionRow {
        key: key.to_string(),
        area,
        class_names,
        content: Line::from(option.label(label_key)),
        on_click: None,
        on_mouse_enter: None,
    };
    if !option.disabled {
        row.on_click = Some(Box::new(move || select_value(option)));
        row.on_mouse_enter = Some(Box::new(move || focus_option(option)));
    }
    row
}

/// 绘制一行；`clip_top` 行被视口上沿遮住，从其后开始显示。
pub fn draw_option_row(
    f: &mut ratatui::Frame<'_>,
    row: OptionRow<'_>,
    clip_top: u16,
    theme: &RenderTheme,
) {
    let style = option_style(theme, &row.class_names);
    let paragraph = Paragraph::new(row.content)
        .style(style)
        .scroll((clip_top, 0));
    f.render_widget(paragraph, row.area);
}
