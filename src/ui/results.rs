use crate::models::ResultsView;
use crate::ui::key_hint;
use crate::ui::layout::calculate_results_chunks;
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_results(f: &mut Frame, view: &ResultsView) {
    let layout = calculate_results_chunks(f.area());

    let title = Paragraph::new("Quiz Results")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, layout.header_area);

    let score_color = if view.score == view.total_questions {
        Color::Green
    } else {
        Color::LightBlue
    };

    let mut text = Text::default();
    text.push_line(Line::from(""));
    text.push_line(Line::from(view.message));
    text.push_line(Line::from(""));
    text.push_line(Line::from("Total score"));
    text.push_line(Line::from(Span::styled(
        format!("{} / {}", view.score, view.total_questions),
        Style::default()
            .fg(score_color)
            .add_modifier(Modifier::BOLD),
    )));

    let summary = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(summary, layout.content_area);

    let help_text = vec![Line::from(vec![
        key_hint("Enter/r"),
        Span::from(" Play Again  "),
        key_hint("h/Esc"),
        Span::from(" Home  "),
        key_hint("q"),
        Span::from(" Quit"),
    ])];
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.footer_area);
}
