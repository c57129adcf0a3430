//! UI rendering for the workbench.

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
    style::{Color, Style, Modifier},
};
use crate::logic::Operation;
use super::app::{Field, WorkbenchApp};

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &WorkbenchApp) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(60),
        ])
        .split(frame.area());

    // Left side: operands, status and help
    let left_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(3),
            Constraint::Min(8),
        ])
        .split(chunks[0]);

    draw_operands(frame, left_chunks[0], app);
    draw_status(frame, left_chunks[1], app);
    draw_help(frame, left_chunks[2]);
    draw_output(frame, chunks[1], app);
}

/// Draw the operand fields with colored bits.
fn draw_operands(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let op_style = match app.operation {
        Operation::Add => Style::default().fg(Color::Green),
        Operation::Subtract => Style::default().fg(Color::Magenta),
    };

    let content = vec![
        operand_line("A", &app.a, app.focus == Field::A),
        Line::from(vec![
            Span::raw("   "),
            Span::styled(
                format!("{} ({})", app.operation.symbol(), app.operation.name()),
                op_style.add_modifier(Modifier::BOLD),
            ),
        ]),
        operand_line("B", &app.b, app.focus == Field::B),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default()
            .title(" Operands ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)));

    frame.render_widget(paragraph, area);
}

fn operand_line<'a>(label: &'a str, text: &'a str, focused: bool) -> Line<'a> {
    let marker = if focused { "▶ " } else { "  " };
    let label_style = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let mut spans = vec![Span::styled(format!("{}{}: ", marker, label), label_style)];
    spans.extend(text.chars().map(|c| Span::styled(c.to_string(), bit_style(c))));
    spans.extend((text.len()..4).map(|_| Span::styled("_", Style::default().fg(Color::DarkGray))));
    Line::from(spans)
}

/// Draw the output of the last command.
fn draw_output(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let output = Paragraph::new(app.output.as_str())
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0))
        .block(Block::default()
            .title(" Output ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)));

    frame.render_widget(output, area);
}

/// Draw status bar.
fn draw_status(frame: &mut Frame, area: Rect, app: &WorkbenchApp) {
    let status = Paragraph::new(app.status.clone())
        .style(Style::default().fg(Color::White))
        .block(Block::default()
            .title(" Status ")
            .borders(Borders::ALL));

    frame.render_widget(status, area);
}

/// Draw help panel.
fn draw_help(frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(vec![
        Line::from("0/1: Type bit  Tab: Switch field"),
        Line::from("+/-: Operation  Enter: Calculate"),
        Line::from("Backspace: Delete  x: Clear"),
        Line::from("g: Gates  h: Half adder  f: Full adder"),
        Line::from("c: Complements  a: Adder  s: Add/Sub"),
        Line::from("p: Properties  t: Self-test"),
        Line::from("↑↓: Scroll output  q: Quit"),
    ])
    .style(Style::default().fg(Color::DarkGray))
    .block(Block::default()
        .title(" Help ")
        .borders(Borders::ALL));

    frame.render_widget(help, area);
}

/// Get color style for a typed bit.
fn bit_style(c: char) -> Style {
    match c {
        '1' => Style::default().fg(Color::Green),
        _ => Style::default().fg(Color::Gray),
    }
}
