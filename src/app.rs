use crate::terminal::{ensure_tty_ready, setup_terminal, teardown_terminal};
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::Backend;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Paragraph;
use std::time::Duration;
use vselect::VirtualizedSelect;

const SELECT_WIDTH: u16 = 48;
const HINT: &str = "↑/↓ 移动  Enter 选择  Esc 关闭/清空  输入过滤  Ctrl+C 退出";

pub(crate) fn run(select: &mut VirtualizedSelect) -> Result<(), Box<dyn std::error::Error>> {
    ensure_tty_ready()?;
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, select);
    teardown_terminal(&mut terminal)?;
    result
}

fn event_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    select: &mut VirtualizedSelect,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        select.tick();
        terminal.draw(|f| draw_frame(f, select))?;
        let Some(ev) = poll_event()? else {
            continue;
        };
        if is_quit(&ev) {
            return Ok(());
        }
        select.handle_event(&ev);
    }
}

fn poll_event() -> Result<Option<Event>, Box<dyn std::error::Error>> {
    if !event::poll(Duration::from_millis(50))? {
        return Ok(None);
    }
    Ok(Some(event::read()?))
}

fn is_quit(ev: &Event) -> bool {
    let Event::Key(key) = ev else {
        return false;
    };
    key.kind != KeyEventKind::Release
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('q'))
}

pub(crate) fn draw_frame(f: &mut ratatui::Frame<'_>, select: &mut VirtualizedSelect) {
    let area = f.area();
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(area);
    let title = format!("vselect · {}", select.component().name());
    f.render_widget(
        Paragraph::new(title).style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );
    f.render_widget(Paragraph::new(HINT), footer);
    select.render(f, select_area(body));
}

fn select_area(body: Rect) -> Rect {
    let width = SELECT_WIDTH.min(body.width);
    Rect {
        x: body.x + (body.width - width) / 2,
        y: body.y.saturating_add(1).min(body.y + body.height),
        width,
        height: body.height.saturating_sub(1),
    }
}

#[cfg(test)]
mod tests {
    use super::{draw_frame, is_quit, select_area};
    use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use vselect::{SelectOption, VirtualizedSelect, VirtualizedSelectProps};

    #[test]
    fn ctrl_c_and_ctrl_q_quit() {
        let ctrl_c = Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        let ctrl_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL));
        let plain_q = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
        assert!(is_quit(&ctrl_c));
        assert!(is_quit(&ctrl_q));
        assert!(!is_quit(&plain_q));
    }

    #[test]
    fn select_is_centered_below_header() {
        let area = select_area(Rect::new(0, 1, 100, 20));
        assert_eq!(area, Rect::new(26, 2, 48, 19));
        let narrow = select_area(Rect::new(0, 1, 30, 20));
        assert_eq!(narrow.x, 0);
        assert_eq!(narrow.width, 30);
    }

    #[test]
    fn frame_draws_header_and_control() {
        let props = VirtualizedSelectProps::default()
            .options(vec![SelectOption::new("alpha"), SelectOption::new("beta")]);
        let mut select = VirtualizedSelect::new(props);
        let mut terminal = Terminal::new(TestBackend::new(60, 12)).unwrap();
        terminal.draw(|f| draw_frame(f, &mut select)).unwrap();
        let buffer = terminal.backend().buffer();
        let header: String = (0..60).map(|x| buffer[(x, 0)].symbol()).collect();
        assert!(header.starts_with("vselect · standard"));
        assert!(!select.is_menu_mounted());
    }
}
