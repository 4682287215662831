use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::core::engine::{Snapshot, Status};
use crate::ui::app::EndDialog;
use crate::ui::gallows;

/// Pure rendering: one snapshot in, one frame out. No game logic here.
pub fn draw(f: &mut Frame, snapshot: &Snapshot, notice: Option<&str>, dialog: Option<&EndDialog>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(f.area());

    f.render_widget(
        Paragraph::new(format!("Category: {}", snapshot.category))
            .block(Block::default().title(" GALLOWS ").borders(Borders::ALL))
            .alignment(Alignment::Center),
        chunks[0],
    );

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chunks[1]);

    f.render_widget(
        Paragraph::new(gallows::frame(snapshot.wrong_attempts))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center),
        body[0],
    );

    draw_panel(f, snapshot, notice, body[1]);

    f.render_widget(
        Paragraph::new(footer_line(snapshot)).alignment(Alignment::Center),
        chunks[2],
    );

    if let Some(dialog) = dialog {
        draw_end_dialog(f, dialog);
    }
}

fn draw_panel(f: &mut Frame, snapshot: &Snapshot, notice: Option<&str>, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Length(2),
            Constraint::Min(0),
        ])
        .split(area);

    let word_style = match snapshot.status {
        Status::InProgress => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        Status::Won => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        Status::Lost => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    };
    f.render_widget(
        Paragraph::new(snapshot.masked_word.clone())
            .style(word_style)
            .alignment(Alignment::Center),
        rows[0],
    );

    let spaced = |letters: &[char]| {
        letters
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    };
    let correct: Vec<char> = snapshot
        .guessed_letters
        .iter()
        .copied()
        .filter(|c| !snapshot.wrong_letters.contains(c))
        .collect();

    f.render_widget(
        Paragraph::new(vec![
            Line::from(vec![
                Span::raw("Correct: "),
                Span::styled(spaced(&correct), Style::default().fg(Color::Green)),
            ]),
            Line::from(vec![
                Span::raw("Wrong:   "),
                Span::styled(
                    spaced(&snapshot.wrong_letters),
                    Style::default().fg(Color::Red),
                ),
            ]),
        ]),
        rows[1],
    );

    // Past the halfway mark the counter turns alarm red
    let attempts_style = if snapshot.wrong_attempts > snapshot.max_attempts / 2 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    f.render_widget(
        Paragraph::new(format!(
            "Attempts: {}/{}",
            snapshot.wrong_attempts, snapshot.max_attempts
        ))
        .style(attempts_style),
        rows[2],
    );

    if let Some(notice) = notice {
        f.render_widget(
            Paragraph::new(format!("📢 {}", notice))
                .style(Style::default().fg(Color::Yellow))
                .wrap(Wrap { trim: true }),
            rows[3],
        );
    }
}

fn footer_line(snapshot: &Snapshot) -> Line<'static> {
    let hint_style = if snapshot.hint_available {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::DIM)
    };
    Line::from(vec![
        Span::raw("Type a letter to guess   "),
        Span::styled("[?] Hint", hint_style),
        Span::raw("   [Enter] New game   [Esc] Quit"),
    ])
}

fn draw_end_dialog(f: &mut Frame, dialog: &EndDialog) {
    let (title, accent) = if dialog.won {
        (
            " 🎉 YOU WON ",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )
    } else {
        (
            " 💀 GAME OVER ",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )
    };

    let area = centered_rect(44, 7, f.area());
    f.render_widget(Clear, area);
    f.render_widget(
        Paragraph::new(vec![
            Line::from(""),
            Line::from(format!("The word was {}", dialog.word)),
            Line::from(""),
            Line::from("[Enter] Play again   [Esc] Quit"),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(accent),
        ),
        area,
    );
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
