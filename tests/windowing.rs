use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use vselect::select::FnLoader;
use vselect::{SelectOption, VirtualizedSelect, VirtualizedSelectProps};

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn draw(terminal: &mut Terminal<TestBackend>, select: &mut VirtualizedSelect) {
    terminal
        .draw(|f| {
            let area = f.area();
            select.render(f, area);
        })
        .unwrap();
}

fn line(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    (0..buffer.area.width)
        .map(|x| buffer[(x, y)].symbol())
        .collect::<String>()
        .trim_end()
        .to_string()
}

fn numbered(count: usize) -> Vec<SelectOption> {
    (0..count)
        .map(|i| SelectOption::new(format!("item-{i}")).with_value(i.to_string()))
        .collect()
}

#[test]
fn keyboard_walks_a_large_list_to_the_end_and_selects() {
    let props = VirtualizedSelectProps::default().options(numbered(1000));
    let mut select = VirtualizedSelect::new(props);
    let mut terminal = Terminal::new(TestBackend::new(40, 20)).unwrap();

    assert!(select.handle_event(&key(KeyCode::Down)));
    draw(&mut terminal, &mut select);
    assert!(select.is_menu_mounted());
    assert_eq!(select.list_config().map(|c| c.height), Some(8));
    assert_eq!(select.list_state().map(|s| s.scroll_offset()), Some(0));
    assert_eq!(line(&terminal, 3), "item-0");

    select.handle_event(&key(KeyCode::End));
    draw(&mut terminal, &mut select);
    assert_eq!(select.list_state().map(|s| s.scroll_offset()), Some(992));
    assert_eq!(line(&terminal, 10), "item-999");

    select.handle_event(&key(KeyCode::Enter));
    draw(&mut terminal, &mut select);
    assert!(!select.is_menu_mounted());
    assert_eq!(select.value().len(), 1);
    assert_eq!(select.value()[0].value("value", "label"), "999");
}

#[test]
fn async_results_follow_the_latest_query() {
    let source = vec![
        SelectOption::new("apple"),
        SelectOption::new("banana"),
        SelectOption::new("cherry"),
    ];
    let loader = FnLoader(move |query: &str| -> Result<Vec<SelectOption>, String> {
        Ok(source
            .iter()
            .filter(|o| o.label("label").contains(query))
            .cloned()
            .collect())
    });
    let props = VirtualizedSelectProps::default()
        .async_options(true)
        .loader(loader);
    let mut select = VirtualizedSelect::new(props);
    let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();

    select.handle_event(&key(KeyCode::Down));
    draw(&mut terminal, &mut select);
    assert_eq!(select.select().visible_options().len(), 3);

    select.handle_event(&key(KeyCode::Char('a')));
    select.handle_event(&key(KeyCode::Char('n')));
    draw(&mut terminal, &mut select);
    let labels: Vec<String> = select
        .select()
        .visible_options()
        .iter()
        .map(|o| o.label("label").to_string())
        .collect();
    assert_eq!(labels, vec!["banana"]);
    assert_eq!(line(&terminal, 3), "banana");

    select.handle_event(&key(KeyCode::Enter));
    assert_eq!(select.value()[0].label("label"), "banana");
}
