use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{HomeItem, HomeMenu};
use crate::ui::layout::calculate_home_chunks;
use crate::ui::key_hint;

fn menu_item(label: String, focused: bool) -> ListItem<'static> {
    let marker = if focused { "> " } else { "  " };
    let style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    ListItem::new(format!("{}{}", marker, label)).style(style)
}

pub fn draw_home(f: &mut Frame, menu: &HomeMenu, total_questions: usize) {
    let layout = calculate_home_chunks(f.area());

    let title = Paragraph::new("Times Table Quiz")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let intro = Paragraph::new(format!(
        "How would you like to practise? Each round has {} questions.",
        total_questions
    ))
    .style(Style::default().fg(Color::Gray))
    .alignment(Alignment::Center);
    f.render_widget(intro, layout.intro_area);

    let menu_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(layout.menu_area);

    let random = List::new(vec![menu_item(
        "Random questions".to_string(),
        menu.focused == HomeItem::Random,
    )])
    .block(Block::default().borders(Borders::ALL).title("Mixed"));
    f.render_widget(random, menu_chunks[0]);

    let fixed = List::new(vec![
        menu_item(
            format!("Times table of  < {} >", menu.dan),
            menu.focused == HomeItem::Dan,
        ),
        menu_item(
            format!("Multiply by     < {} >", menu.multiplier),
            menu.focused == HomeItem::Multiplier,
        ),
    ])
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::LightRed))
            .title("Pick a number"),
    );
    f.render_widget(fixed, menu_chunks[1]);

    let help_text = vec![Line::from(vec![
        key_hint("↑/↓"),
        Span::from(" Choose  "),
        key_hint("←/→ 2-9"),
        Span::from(" Number  "),
        key_hint("Enter"),
        Span::from(" Start  "),
        key_hint("Esc/q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);
}
