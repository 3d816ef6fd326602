use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::{Feedback, QuizView};
use crate::ui::key_hint;
use crate::ui::layout::calculate_quiz_chunks;
use crate::utils::{centered_rect, display_width, truncate_string};

pub fn draw_quiz(f: &mut Frame, view: &QuizView, input_buffer: &str) {
    let layout = calculate_quiz_chunks(f.area());

    let progress = format!(
        "Question {} / {} - {}",
        view.question_number, view.total_questions, view.mode_label
    );
    let header_width = layout.header_area.width.saturating_sub(2) as usize;
    let header = Paragraph::new(truncate_string(&progress, header_width))
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(header, layout.header_area);

    // Vertically center the single question line inside the bordered box
    let padding = layout.question_area.height.saturating_sub(3) / 2;
    let mut question_text = Text::default();
    for _ in 0..padding {
        question_text.push_line(Line::from(""));
    }
    question_text.push_line(Line::from(vec![
        Span::styled(
            view.question.num1.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  x  ", Style::default().fg(Color::LightBlue)),
        Span::styled(
            view.question.num2.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::from("  =  ?"),
    ]));
    let question = Paragraph::new(question_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Question"));
    f.render_widget(question, layout.question_area);

    let answer_text = if input_buffer.is_empty() {
        Span::styled("?", Style::default().fg(Color::DarkGray))
    } else {
        Span::from(input_buffer.to_string())
    };
    let answer = Paragraph::new(Line::from(answer_text))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Your Answer"));
    f.render_widget(answer, layout.answer_area);

    if !view.answered {
        let inner_width = layout.answer_area.width.saturating_sub(2);
        let text_width = display_width(input_buffer) as u16;
        let cursor_x = layout.answer_area.x + 1 + inner_width.saturating_sub(text_width) / 2
            + text_width;
        f.set_cursor_position((cursor_x, layout.answer_area.y + 1));
    }

    let help_text = if view.answered {
        vec![Line::from(vec![
            key_hint("Enter"),
            Span::from(" Next  "),
            key_hint("Esc"),
            Span::from(" Home  "),
            key_hint("Ctrl+C"),
            Span::from(" Exit App"),
        ])]
    } else {
        vec![Line::from(vec![
            key_hint("0-9"),
            Span::from(" Type  "),
            key_hint("Enter"),
            Span::from(" Check  "),
            key_hint("Esc"),
            Span::from(" Home  "),
            key_hint("Ctrl+C"),
            Span::from(" Exit App"),
        ])]
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, layout.help_area);

    if view.answered {
        draw_feedback(f, view);
    }
}

fn draw_feedback(f: &mut Frame, view: &QuizView) {
    let mut text = Text::default();
    let color = match view.feedback {
        Feedback::Correct => {
            text.push_line(Line::from(Span::styled(
                "Correct!",
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
            Color::Green
        }
        Feedback::Incorrect => {
            text.push_line(Line::from(Span::styled(
                "Wrong!",
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            )));
            text.push_line(Line::from(format!(
                "The answer is {}",
                view.question.answer
            )));
            Color::Red
        }
        Feedback::None => return,
    };
    text.push_line(Line::from(""));
    text.push_line(Line::from(vec![
        key_hint("Enter"),
        Span::from(" Next question"),
    ]));

    let area = centered_rect(36, text.height() as u16 + 2, f.area());
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .title("Result"),
        );
    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}
