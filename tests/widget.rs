use autocompleter::completer::SelectionMode;
use autocompleter::pointer::PointerHub;
use autocompleter::widget::{AutocompleteWidget, props::WidgetProps};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    Terminal,
    backend::TestBackend,
    style::Color,
};

fn props(items: &[&str], mode: SelectionMode) -> WidgetProps {
    let mut props = WidgetProps::new(items.iter().map(|s| s.to_string()).collect());
    props.selection_mode = mode;
    props
}

fn key(code: KeyCode) -> Event {
    Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn click(column: u16, row: u16) -> Event {
    Event::Mouse(MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    })
}

fn terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(80, 24)).unwrap()
}

fn render(terminal: &mut Terminal<TestBackend>, widget: &mut AutocompleteWidget) {
    terminal.draw(|frame| widget.draw(frame)).unwrap();
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let area = buffer.area;
    let mut text = String::new();
    for y in 0..area.height {
        for x in 0..area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

#[test]
fn mount_registers_and_unmount_releases_listener() {
    let hub = PointerHub::new();
    let widget = AutocompleteWidget::mount(props(&["a"], SelectionMode::Single), &hub);
    assert_eq!(hub.listener_count(), 1);

    let selection = widget.unmount();
    assert!(selection.is_empty());
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn dropping_widget_releases_listener() {
    let hub = PointerHub::new();
    {
        let _widget =
            AutocompleteWidget::mount(props(&["a"], SelectionMode::Single), &hub);
        assert_eq!(hub.listener_count(), 1);
    }
    assert_eq!(hub.listener_count(), 0);
}

#[test]
fn typing_and_enter_commit_single_value() {
    let hub = PointerHub::new();
    let mut widget = AutocompleteWidget::mount(
        props(&["Apple", "Banana", "Avocado"], SelectionMode::Single),
        &hub,
    );

    widget.handle_event(key(KeyCode::Char('a'))).unwrap();
    widget.handle_event(key(KeyCode::Down)).unwrap();
    widget.handle_event(key(KeyCode::Down)).unwrap();
    widget.handle_event(key(KeyCode::Enter)).unwrap();

    let state = widget.state();
    assert_eq!(state.completer.selection().values(), ["Avocado"]);
    assert_eq!(state.input_text(), "Avocado");
    assert!(!state.completer.is_open());
    assert_eq!(widget.unmount(), ["Avocado"]);
}

#[test]
fn outside_click_closes_panel_and_keeps_query() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget = AutocompleteWidget::mount(
        props(&["Apple", "Banana"], SelectionMode::Single),
        &hub,
    );

    widget.handle_event(key(KeyCode::Char('b'))).unwrap();
    render(&mut terminal, &mut widget);
    assert!(widget.state().completer.is_open());

    widget.handle_event(click(0, 0)).unwrap();
    assert!(!widget.state().completer.is_open());
    assert_eq!(widget.state().completer.query(), "b");
}

#[test]
fn outside_click_behind_help_popup_keeps_panel_open() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget = AutocompleteWidget::mount(
        props(&["Apple", "Banana"], SelectionMode::Single),
        &hub,
    );

    widget.handle_event(key(KeyCode::Char('a'))).unwrap();
    render(&mut terminal, &mut widget);
    widget
        .handle_event(Event::Key(KeyEvent::new(
            KeyCode::Char('h'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
    assert!(widget.state().ui_flags.show_help);

    widget.handle_event(click(0, 0)).unwrap();
    assert!(widget.state().completer.is_open());

    widget.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!widget.state().ui_flags.show_help);
    widget.handle_event(click(0, 0)).unwrap();
    assert!(!widget.state().completer.is_open());
}

#[test]
fn clicking_inside_does_not_close() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget =
        AutocompleteWidget::mount(props(&["Apple"], SelectionMode::Single), &hub);

    widget.handle_event(key(KeyCode::Tab)).unwrap();
    render(&mut terminal, &mut widget);
    let input = widget.state().hit_map.input;

    widget.handle_event(click(input.x + 3, input.y + 1)).unwrap();
    assert!(widget.state().completer.is_open());
}

#[test]
fn clicking_suggestions_toggles_in_multiple_mode() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget = AutocompleteWidget::mount(
        props(&["X", "Y", "Z"], SelectionMode::Multiple),
        &hub,
    );

    widget.handle_event(key(KeyCode::Tab)).unwrap();
    render(&mut terminal, &mut widget);
    let list = widget.state().hit_map.list;

    widget.handle_event(click(list.x + 2, list.y + 1)).unwrap();
    widget.handle_event(click(list.x + 2, list.y + 2)).unwrap();
    assert_eq!(widget.state().completer.selection().values(), ["Y", "Z"]);
    assert!(widget.state().completer.is_open());

    render(&mut terminal, &mut widget);
    let chips = &widget.state().hit_map.chips;
    assert_eq!(chips.len(), 2);
    let dismiss = chips[0].dismiss;

    widget.handle_event(click(dismiss.x, dismiss.y)).unwrap();
    assert_eq!(widget.state().completer.selection().values(), ["Z"]);
}

#[test]
fn renders_label_chips_and_suggestions() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget = AutocompleteWidget::mount(
        props(&["Option 1", "Long Option2"], SelectionMode::Multiple),
        &hub,
    );

    render(&mut terminal, &mut widget);
    let closed = screen(&terminal);
    assert!(closed.contains("Label"));
    assert!(closed.contains("Select..."));
    assert!(closed.contains("▲"));
    assert!(!closed.contains("Suggestions"));

    widget.handle_event(key(KeyCode::Char('l'))).unwrap();
    widget.handle_event(key(KeyCode::Enter)).unwrap();
    render(&mut terminal, &mut widget);
    let open = screen(&terminal);
    assert!(open.contains("▼"));
    assert!(open.contains(" Long Option2 ×"));
    assert!(open.contains("✓ Long Option2"));
    assert!(!open.contains("Option 1"));
}

#[test]
fn renders_empty_result_message() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut widget =
        AutocompleteWidget::mount(props(&["Apple"], SelectionMode::Single), &hub);

    widget.handle_event(key(KeyCode::Char('q'))).unwrap();
    render(&mut terminal, &mut widget);
    assert!(screen(&terminal).contains("No results..."));
}

#[test]
fn alternate_background_paints_header() {
    let hub = PointerHub::new();
    let mut terminal = terminal();
    let mut props = props(&["a"], SelectionMode::Single);
    props.alternate_background = true;
    let mut widget = AutocompleteWidget::mount(props, &hub);

    render(&mut terminal, &mut widget);
    let header = widget.state().hit_map.header;
    let cell = &terminal.backend().buffer()[(header.x + 1, header.y + 1)];
    assert_eq!(cell.bg, Color::Rgb(0x5c, 0x40, 0x33));
}

#[test]
fn escape_closes_then_exits() {
    let hub = PointerHub::new();
    let mut widget =
        AutocompleteWidget::mount(props(&["a"], SelectionMode::Single), &hub);

    widget.handle_event(key(KeyCode::Tab)).unwrap();
    widget.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(!widget.state().completer.is_open());
    assert!(!widget.should_exit());

    widget.handle_event(key(KeyCode::Esc)).unwrap();
    assert!(widget.should_exit());
}
