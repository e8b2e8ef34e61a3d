use super::props::SelectProps;
use super::widget::{MenuAction, MenuRenderArgs, MenuRenderer};
use crate::option::SelectOption;
use crate::theme::{RenderTheme, base_style, focus_border_style, placeholder_style};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use std::cell::RefCell;
use unicode_width::UnicodeWidthStr;

pub(crate) const CONTROL_HEIGHT: u16 = 3;

/// 选择控件的公共状态：展开、输入、聚焦项、已选值。
pub(crate) struct SelectCore {
    pub(crate) props: SelectProps,
    open: bool,
    input: String,
    focused: Option<SelectOption>,
    value: Vec<SelectOption>,
    pending: RefCell<Vec<MenuAction>>,
    control_area: Rect,
    menu_area: Rect,
}

impl SelectCore {
    pub(crate) fn new(props: SelectProps) -> Self {
        let value = if props.multi {
            props.value.clone()
        } else {
            props.value.iter().take(1).cloned().collect()
        };
        Self {
            props,
            open: false,
            input: String::new(),
            focused: None,
            value,
            pending: RefCell::new(Vec::new()),
            control_area: Rect::default(),
            menu_area: Rect::default(),
        }
    }

    pub(crate) fn is_open(&self) -> bool {
        self.open
    }

    pub(crate) fn input(&self) -> &str {
        &self.input
    }

    pub(crate) fn value(&self) -> &[SelectOption] {
        &self.value
    }

    pub(crate) fn focused(&self) -> Option<&SelectOption> {
        self.focused.as_ref()
    }

    #[cfg(test)]
    pub(crate) fn pending_for_test(&self) -> &RefCell<Vec<MenuAction>> {
        &self.pending
    }

    pub(crate) fn open_menu(&mut self, visible: &[SelectOption]) {
        if self.props.disabled {
            return;
        }
        self.open = true;
        let selected = self
            .value
            .first()
            .filter(|v| !self.props.multi && visible.contains(v) && !v.disabled)
            .cloned();
        self.focused = selected.or_else(|| first_enabled(visible));
    }

    pub(crate) fn close(&mut self) {
        self.open = false;
        self.input.clear();
    }

    pub(crate) fn filter_options(&self, source: &[SelectOption]) -> Vec<SelectOption> {
        let needle = self.input.trim().to_lowercase();
        let label_key = self.props.label_key.as_str();
        let value_key = self.props.value_key.as_str();
        source
            .iter()
            .filter(|option| {
                if self.props.multi && self.props.remove_selected && self.value.contains(option) {
                    return false;
                }
                if needle.is_empty() || !self.props.searchable {
                    return true;
                }
                option.label(label_key).to_lowercase().contains(&needle)
                    || option
                        .value(value_key, label_key)
                        .to_lowercase()
                        .contains(&needle)
            })
            .cloned()
            .collect()
    }

    fn sync_focus(&mut self, visible: &[SelectOption]) {
        if let Some(focused) = &self.focused {
            if visible.iter().any(|o| o == focused && !o.disabled) {
                return;
            }
        }
        self.focused = first_enabled(visible);
    }

    fn step_focus(&mut self, visible: &[SelectOption], delta: isize, wrap: bool) {
        let enabled: Vec<usize> = visible
            .iter()
            .enumerate()
            .filter(|(_, o)| !o.disabled)
            .map(|(i, _)| i)
            .collect();
        if enabled.is_empty() {
            self.focused = None;
            return;
        }
        let current = self
            .focused
            .as_ref()
            .and_then(|f| enabled.iter().position(|&i| &visible[i] == f));
        let last = enabled.len() as isize - 1;
        let next = match current {
            None if delta >= 0 => 0,
            None => last,
            Some(pos) if wrap => (pos as isize + delta).rem_euclid(enabled.len() as isize),
            Some(pos) => (pos as isize + delta).clamp(0, last),
        };
        self.focused = Some(visible[enabled[next as usize]].clone());
    }

    pub(crate) fn select_option(&mut self, option: SelectOption) {
        if option.disabled {
            return;
        }
        tracing::debug!(label = option.label(&self.props.label_key), "option selected");
        if self.props.multi {
            if let Some(pos) = self.value.iter().position(|v| v == &option) {
                self.value.remove(pos);
            } else {
                self.value.push(option);
            }
            self.input.clear();
            return;
        }
        self.value = vec![option];
        if self.props.close_on_select {
            self.close();
        } else {
            self.input.clear();
        }
    }

    pub(crate) fn apply_actions(&mut self) {
        let actions = self.pending.take();
        for action in actions {
            match action {
                MenuAction::Focus(option) => self.focused = Some(option),
                MenuAction::Select(option) => self.select_option(option),
            }
        }
    }

    pub(crate) fn handle_event(
        &mut self,
        event: &Event,
        menu: &mut dyn MenuRenderer,
        visible: &[SelectOption],
    ) -> bool {
        match event {
            Event::Key(key) => self.handle_key(*key, visible),
            Event::Mouse(mouse) => self.handle_mouse(*mouse, menu, visible),
            _ => false,
        }
    }

    pub(crate) fn handle_key(&mut self, key: KeyEvent, visible: &[SelectOption]) -> bool {
        if key.kind == KeyEventKind::Release || self.props.disabled {
            return false;
        }
        let page = self.props.page_size.max(1) as isize;
        match key.code {
            KeyCode::Down | KeyCode::Up if !self.open => self.open_menu(visible),
            KeyCode::Down => self.step_focus(visible, 1, true),
            KeyCode::Up => self.step_focus(visible, -1, true),
            KeyCode::PageDown if self.open => self.step_focus(visible, page, false),
            KeyCode::PageUp if self.open => self.step_focus(visible, -page, false),
            KeyCode::Home if self.open => self.focused = first_enabled(visible),
            KeyCode::End if self.open => {
                self.focused = visible.iter().rev().find(|o| !o.disabled).cloned();
            }
            KeyCode::Enter if !self.open => self.open_menu(visible),
            KeyCode::Enter => {
                if let Some(option) = self.focused.clone() {
                    self.select_option(option);
                }
            }
            KeyCode::Esc if self.open => self.close(),
            KeyCode::Esc if self.props.clearable && !self.value.is_empty() => self.value.clear(),
            KeyCode::Backspace if !self.input.is_empty() => {
                self.input.pop();
                self.open = true;
            }
            KeyCode::Backspace if self.props.backspace_removes && !self.value.is_empty() => {
                self.value.pop();
            }
            KeyCode::Delete if self.props.clearable && !self.value.is_empty() => self.value.clear(),
            KeyCode::Char(c)
                if self.props.searchable
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                self.input.push(c);
                self.open = true;
            }
            _ => return false,
        }
        true
    }

    fn handle_mouse(
        &mut self,
        mouse: MouseEvent,
        menu: &mut dyn MenuRenderer,
        visible: &[SelectOption],
    ) -> bool {
        let (x, y) = (mouse.column, mouse.row);
        let clicked = matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left));
        if contains(self.control_area, x, y) {
            if !clicked || self.props.disabled {
                return false;
            }
            if self.open {
                self.close();
            } else {
                self.open_menu(visible);
            }
            return true;
        }
        if !self.open {
            return false;
        }
        if !contains(self.menu_area, x, y) {
            if clicked {
                self.close();
                return true;
            }
            return false;
        }
        let consumed = {
            let pending = &self.pending;
            let focus =
                |o: &SelectOption| pending.borrow_mut().push(MenuAction::Focus(o.clone()));
            let select =
                |o: &SelectOption| pending.borrow_mut().push(MenuAction::Select(o.clone()));
            let args = MenuRenderArgs {
                focused_option: self.focused.as_ref(),
                focus_option: &focus,
                label_key: &self.props.label_key,
                on_select: &select,
                options: visible,
                value_array: &self.value,
            };
            menu.handle_mouse(mouse, args)
        };
        self.apply_actions();
        consumed
    }

    pub(crate) fn render(
        &mut self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        theme: &RenderTheme,
        menu: &mut dyn MenuRenderer,
        visible: &[SelectOption],
        status: Option<&str>,
    ) {
        self.sync_focus(visible);
        let control = Rect {
            height: CONTROL_HEIGHT.min(area.height),
            ..area
        };
        self.control_area = control;
        self.menu_area = Rect::default();
        self.render_control(f, control, theme, status);
        if !self.open {
            return;
        }
        let anchor = Rect {
            x: area.x,
            y: area.y + control.height,
            width: area.width,
            height: area.height.saturating_sub(control.height),
        };
        if anchor.height == 0 {
            return;
        }
        if visible.is_empty() {
            let note = Rect { height: 1, ..anchor };
            let text = status.unwrap_or(&self.props.no_results_text);
            f.render_widget(Clear, note);
            f.render_widget(Paragraph::new(text).style(placeholder_style(theme)), note);
            self.menu_area = note;
            return;
        }
        let height = {
            let pending = &self.pending;
            let focus =
                |o: &SelectOption| pending.borrow_mut().push(MenuAction::Focus(o.clone()));
            let select =
                |o: &SelectOption| pending.borrow_mut().push(MenuAction::Select(o.clone()));
            let args = MenuRenderArgs {
                focused_option: self.focused.as_ref(),
                focus_option: &focus,
                label_key: &self.props.label_key,
                on_select: &select,
                options: visible,
                value_array: &self.value,
            };
            menu.render_menu(f, anchor, args)
        };
        self.menu_area = Rect { height, ..anchor };
        self.apply_actions();
    }

    fn render_control(
        &self,
        f: &mut ratatui::Frame<'_>,
        area: Rect,
        theme: &RenderTheme,
        status: Option<&str>,
    ) {
        let arrow = if self.open { "▴" } else { "▾" };
        let indicator = match status {
            Some(status) => format!(" {status} {arrow} "),
            None => format!(" {arrow} "),
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .title_top(Line::from(indicator).right_aligned())
            .style(base_style(theme))
            .border_style(focus_border_style(theme, self.open));
        let inner = block.inner(area);
        let label_key = self.props.label_key.as_str();
        let mut spans = Vec::new();
        let mut cursor = 0usize;
        if self.props.multi {
            for value in &self.value {
                let tag = format!("[{}] ", value.label(label_key));
                cursor += tag.width();
                spans.push(Span::styled(tag, Style::default().fg(theme.accent)));
            }
        }
        if !self.input.is_empty() {
            cursor += self.input.width();
            spans.push(Span::raw(self.input.clone()));
        } else if let (false, Some(value)) = (self.props.multi, self.value.first()) {
            spans.push(Span::raw(value.label(label_key).to_string()));
        } else if self.value.is_empty() {
            spans.push(Span::styled(
                self.props.placeholder.clone(),
                placeholder_style(theme),
            ));
        }
        f.render_widget(block, area);
        f.render_widget(Paragraph::new(Line::from(spans)), inner);
        if self.open && self.props.searchable && inner.width > 0 && inner.height > 0 {
            let offset = cursor.min(usize::from(inner.width - 1)) as u16;
            f.set_cursor_position((inner.x + offset, inner.y));
        }
    }
}

fn first_enabled(visible: &[SelectOption]) -> Option<SelectOption> {
    visible.iter().find(|o| !o.disabled).cloned()
}

fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
}
