use crate::option::SelectOption;
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseEvent,
    MouseEventKind,
};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use unicode_width::UnicodeWidthStr;

pub(crate) fn options(labels: &[&str]) -> Vec<SelectOption> {
    labels.iter().map(|label| SelectOption::new(*label)).collect()
}

pub(crate) fn abc_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("A"),
        SelectOption::new("B").disabled(true),
        SelectOption::new("C"),
    ]
}

pub(crate) fn numbered_options(count: usize) -> Vec<SelectOption> {
    (0..count)
        .map(|i| SelectOption::new(format!("item-{i}")).with_value(i.to_string()))
        .collect()
}

pub(crate) fn terminal(width: u16, height: u16) -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(width, height)).unwrap()
}

pub(crate) fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent {
        code,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Press,
        state: KeyEventState::NONE,
    })
}

pub(crate) fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

pub(crate) fn buffer_line(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    let mut x = 0;
    while x < buffer.area.width {
        let symbol = buffer[(x, y)].symbol();
        out.push_str(symbol);
        x += symbol.width().max(1) as u16;
    }
    out
}
