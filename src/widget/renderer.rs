use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};

use crate::widget::{hit_map::ChipRegion, state::WidgetState};

const ALTERNATE_BACKGROUND: Color = Color::Rgb(0x5c, 0x40, 0x33);
const MAX_VISIBLE_SUGGESTIONS: usize = 8;
const HEADER_HEIGHT: u16 = 3;
const INPUT_HEIGHT: u16 = 3;
const DEFAULT_TITLE: &str = "Autocompleter";

pub trait WidgetRenderer {
    fn draw(&mut self, frame: &mut Frame, state: &mut WidgetState);
}

#[derive(Default)]
pub struct DefaultWidgetRenderer {
    list_state: ListState,
}

impl WidgetRenderer for DefaultWidgetRenderer {
    fn draw(&mut self, frame: &mut Frame, state: &mut WidgetState) {
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // title
                Constraint::Min(3),
                Constraint::Length(1), // help hint
            ])
            .split(frame.area());

        let title = if state.title.is_empty() {
            DEFAULT_TITLE
        } else {
            state.title.as_str()
        };
        frame.render_widget(
            Paragraph::new(title)
                .style(Style::default().add_modifier(Modifier::BOLD)),
            main_chunks[0],
        );

        let area = widget_area(main_chunks[1], state);
        state.hit_map.set_bounds(area);
        self.draw_widget(frame, area, state);

        let help_hint =
            Paragraph::new("C-h: Help | Tab: Open/Close | Esc: Close/Quit")
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::DarkGray));

        frame.render_widget(help_hint, main_chunks[2]);

        if state.ui_flags.show_help {
            draw_help_popup(frame);
        }
    }
}

impl DefaultWidgetRenderer {
    fn draw_widget(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &mut WidgetState,
    ) {
        let [label_area, control_area] = Layout::horizontal([
            Constraint::Percentage(25),
            Constraint::Percentage(75),
        ])
        .areas(area);

        frame.render_widget(
            Paragraph::new(state.label.as_str()),
            label_area.inner(Margin {
                horizontal: 0,
                vertical: 1,
            }),
        );

        let [header_area, panel_area] = Layout::vertical([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(control_area);

        draw_header(frame, header_area, state);

        if !state.completer.is_open() {
            state.hit_map.clear_panel();
            return;
        }

        let [input_area, list_area] = Layout::vertical([
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Min(0),
        ])
        .areas(panel_area);

        draw_input(frame, input_area, state);
        self.draw_suggestions(frame, list_area, state);
    }

    fn draw_suggestions(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &mut WidgetState,
    ) {
        let block = Block::default().borders(Borders::ALL).title("Suggestions");
        let inner = block.inner(area);

        if state.completer.displayed().is_empty() {
            self.list_state.select(None);
            frame.render_widget(
                Paragraph::new("No results...")
                    .block(block)
                    .style(Style::default().fg(Color::DarkGray)),
                area,
            );
        } else {
            let completer = &state.completer;
            let items: Vec<ListItem> = completer
                .displayed()
                .iter()
                .map(|candidate| {
                    let marker = if completer.selection().contains(candidate) {
                        "✓ "
                    } else {
                        "  "
                    };

                    let mut spans = vec![Span::raw(marker)];
                    spans.extend(completer.highlight(candidate).map(|span| {
                        if span.is_match {
                            Span::styled(
                                span.text,
                                Style::default().add_modifier(Modifier::BOLD),
                            )
                        } else {
                            Span::raw(span.text)
                        }
                    }));

                    ListItem::new(Line::from(spans))
                })
                .collect();

            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().bg(Color::Blue));

            self.list_state.select(Some(completer.active_index()));
            frame.render_stateful_widget(list, area, &mut self.list_state);
        }

        state.hit_map.list = inner;
        state.hit_map.list_offset = self.list_state.offset();
    }
}

fn widget_area(area: Rect, state: &WidgetState) -> Rect {
    let area = area.inner(Margin {
        horizontal: 2,
        vertical: 1,
    });

    let mut height = HEADER_HEIGHT;
    if state.completer.is_open() {
        let rows = state
            .completer
            .displayed()
            .len()
            .clamp(1, MAX_VISIBLE_SUGGESTIONS) as u16;
        height += INPUT_HEIGHT + rows + 2;
    }

    Rect {
        height: height.min(area.height),
        ..area
    }
}

fn draw_header(frame: &mut Frame, area: Rect, state: &mut WidgetState) {
    let background = if state.ui_flags.alternate_background {
        ALTERNATE_BACKGROUND
    } else {
        Color::Reset
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().bg(background));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    state.hit_map.header = area;

    let [chips_area, chevron_area] =
        Layout::horizontal([Constraint::Min(0), Constraint::Length(2)])
            .areas(inner);

    let chevron = if state.completer.is_open() { "▼" } else { "▲" };
    frame.render_widget(
        Paragraph::new(chevron).alignment(Alignment::Right),
        chevron_area,
    );

    let chip_style = Style::default().fg(Color::White).bg(Color::Red);
    let mut spans = Vec::new();
    let mut chips = Vec::new();
    let mut x = chips_area.x;

    if state.completer.selection().is_empty() {
        spans.push(Span::styled(
            "Select...",
            Style::default().fg(Color::DarkGray),
        ));
    }

    for value in state.completer.selection().values() {
        let body = Span::styled(format!(" {value} "), chip_style);
        let body_width = u16::try_from(body.width()).unwrap_or(u16::MAX);
        let dismiss_x = x.saturating_add(body_width);

        if dismiss_x >= chips_area.right() {
            break;
        }

        chips.push(ChipRegion {
            value: value.clone(),
            dismiss: Rect::new(dismiss_x, chips_area.y, 1, 1),
        });
        x = dismiss_x.saturating_add(3);

        spans.extend([
            body,
            Span::styled("×", chip_style),
            Span::styled(" ", chip_style),
            Span::raw(" "),
        ]);
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), chips_area);
    state.hit_map.chips = chips;
}

fn draw_input(frame: &mut Frame, area: Rect, state: &mut WidgetState) {
    let block = Block::default().borders(Borders::ALL).title("Search");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [prompt_area, text_area] =
        Layout::horizontal([Constraint::Length(2), Constraint::Min(0)])
            .areas(inner);

    frame.render_widget(
        Paragraph::new("> ").style(Style::default().fg(Color::Green)),
        prompt_area,
    );
    frame.render_widget(&state.input, text_area);
    state.hit_map.input = area;
}

fn draw_help_popup(f: &mut Frame) {
    let popup_area = create_centered_rect(f.area(), 60, 9);

    f.render_widget(Clear, popup_area);

    let navigation_block = Block::default()
        .title("Navigation")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let selection_block = Block::default()
        .title("Selection")
        .borders(Borders::ALL)
        .style(Style::default().bg(Color::DarkGray));

    let navigation_text = vec![
        Line::from("Tab     → Open/close"),
        Line::from("↑/C-p   → Previous item"),
        Line::from("↓/C-n   → Next item"),
        Line::from("Esc/C-c → Close/quit"),
        Line::from("C-w     → Delete last word"),
    ];

    let selection_text = vec![
        Line::from("Enter → Commit item"),
        Line::from("Click → Commit item"),
        Line::from("Bksp  → Drop last chip"),
        Line::from("Click × → Drop chip"),
        Line::from("C-h   → Toggle help"),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(popup_area);

    f.render_widget(
        Paragraph::new(navigation_text).block(navigation_block),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(selection_text).block(selection_block),
        chunks[1],
    );
}

fn create_centered_rect(area: Rect, length_x: u16, length_y: u16) -> Rect {
    let vertical =
        Layout::vertical([Constraint::Length(length_y)]).flex(Flex::Center);
    let horizontal =
        Layout::horizontal([Constraint::Length(length_x)]).flex(Flex::Center);
    let [area] = vertical.areas(area);
    let [area] = horizontal.areas(area);
    area
}
