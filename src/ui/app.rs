use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use rand_core::RngCore;
use ratatui::DefaultTerminal;

use crate::core::engine::{GameEngine, Outcome, Status};
use crate::ui::renderer;

/// How long the final letter or gallows frame stays on screen before the
/// end dialog covers it.
const END_DIALOG_DELAY: Duration = Duration::from_millis(500);

/// The win/loss dialog, once it is due.
pub struct EndDialog {
    pub won: bool,
    pub word: String,
}

/// Terminal front end for one [`GameEngine`].
///
/// Forwards key events to the engine, turns outcomes into notices, and
/// schedules the end dialog. All game rules live on the other side of the
/// snapshot boundary.
pub struct App<R: RngCore> {
    engine: GameEngine<R>,
    notice: Option<String>,
    dialog: Option<EndDialog>,
    dialog_due: Option<Instant>,
    should_quit: bool,
}

impl<R: RngCore> App<R> {
    pub fn new(engine: GameEngine<R>) -> Self {
        Self {
            engine,
            notice: None,
            dialog: None,
            dialog_due: None,
            should_quit: false,
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        loop {
            let snapshot = self.engine.snapshot();
            terminal.draw(|f| {
                renderer::draw(f, &snapshot, self.notice.as_deref(), self.dialog.as_ref())
            })?;

            // The terminal frame has been drawn at least once; pop the
            // dialog only after the delay so the player sees it land.
            if let Some(due) = self.dialog_due {
                if Instant::now() >= due {
                    self.dialog_due = None;
                    self.dialog = snapshot.revealed_word.clone().map(|word| EndDialog {
                        won: snapshot.status == Status::Won,
                        word,
                    });
                }
            }

            // INPUT (non-blocking)
            if event::poll(Duration::ZERO)? {
                if let Event::Key(key) = event::read()? {
                    self.handle_key(key);
                }
            }
            if self.should_quit {
                break;
            }

            // No game ticks to run; a small sleep keeps the loop from
            // spinning while still letting input through.
            tokio::time::sleep(Duration::from_millis(16)).await;
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.dialog.is_some() {
            match key.code {
                KeyCode::Enter => self.new_game(),
                KeyCode::Esc => self.should_quit = true,
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Enter => self.new_game(),
            KeyCode::Char('?') => self.hint(),
            KeyCode::Char(c) if c.is_alphabetic() => self.guess(c),
            _ => {}
        }
    }

    fn guess(&mut self, letter: char) {
        self.notice = match self.engine.guess_letter(letter) {
            Outcome::Correct(l) => Some(format!("Good guess! '{}' is in the word.", l)),
            Outcome::Wrong(l) => Some(format!("Sorry, no '{}' in this word.", l)),
            Outcome::Duplicate(l) => Some(format!("You already tried '{}'.", l)),
            Outcome::AlreadyOver => Some("The game is over - press Enter for a new one.".into()),
            _ => None,
        };
        self.check_game_end();
    }

    fn hint(&mut self) {
        self.notice = match self.engine.request_hint() {
            Outcome::HintGranted(l) => Some(format!("Hint: the word has a '{}'.", l)),
            Outcome::HintUnavailable => Some("No hint left this game.".into()),
            Outcome::NoHintAvailable => Some("Every letter is already revealed!".into()),
            _ => None,
        };
        self.check_game_end();
    }

    fn new_game(&mut self) {
        self.engine.start_new_game();
        self.notice = None;
        self.dialog = None;
        self.dialog_due = None;
    }

    fn check_game_end(&mut self) {
        if self.dialog.is_none()
            && self.dialog_due.is_none()
            && self.engine.snapshot().status != Status::InProgress
        {
            self.dialog_due = Some(Instant::now() + END_DIALOG_DELAY);
        }
    }
}
