use super::select_core::SelectCore;
use super::props::SelectProps;
use super::widget::{MenuRenderer, SelectWidget};
use crate::option::SelectOption;
use crate::theme::RenderTheme;
use crossterm::event::Event;
use ratatui::layout::Rect;

/// 同步选择控件：选项在构造时给定，输入只做本地过滤。
pub struct StandardSelect {
    core: SelectCore,
}

impl StandardSelect {
    pub fn new(props: SelectProps) -> Self {
        Self {
            core: SelectCore::new(props),
        }
    }
}

impl SelectWidget for StandardSelect {
    fn name(&self) -> &'static str {
        "standard"
    }

    fn props(&self) -> &SelectProps {
        &self.core.props
    }

    fn render(
        &mut self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        theme: &RenderTheme,
        menu: &mut dyn MenuRenderer,
    ) {
        let visible = self.visible_options();
        self.core.render(f, area, theme, menu, &visible, None);
    }

    fn handle_event(&mut self, event: &Event, menu: &mut dyn MenuRenderer) -> bool {
        let visible = self.visible_options();
        self.core.handle_event(event, menu, &visible)
    }

    fn is_open(&self) -> bool {
        self.core.is_open()
    }

    fn open(&mut self) {
        let visible = self.visible_options();
        self.core.open_menu(&visible);
    }

    fn close(&mut self) {
        self.core.close();
    }

    fn value(&self) -> &[SelectOption] {
        self.core.value()
    }

    fn input(&self) -> &str {
        self.core.input()
    }

    fn focused_option(&self) -> Option<&SelectOption> {
        self.core.focused()
    }

    fn visible_options(&self) -> Vec<SelectOption> {
        self.core.filter_options(&self.core.props.options)
    }
}
