use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_core::RngCore;
use tracing::{debug, info};

use crate::core::words::WordBank;

/// Wrong guesses allowed before the game is lost.
pub const MAX_ATTEMPTS: u8 = 6;

/// Where the current game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    InProgress,
    Won,
    Lost,
}

/// What an engine call did, for the view to branch on.
///
/// Letter-carrying variants hold the uppercase-normalized letter so the
/// view can echo it back without re-normalizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The letter is in the word.
    Correct(char),
    /// The letter is not in the word; one attempt burned.
    Wrong(char),
    /// The letter was already tried. Nothing changed.
    Duplicate(char),
    /// The game is over; start a new one to keep guessing.
    AlreadyOver,
    /// A hint revealed this letter.
    HintGranted(char),
    /// The hint was already spent, or the game is over.
    HintUnavailable,
    /// Every letter is already on the board. Nothing changed.
    NoHintAvailable,
}

/// Read-only projection of the game for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub category: String,
    /// The word with unguessed letters masked, e.g. `"A _ _ L E"`.
    pub masked_word: String,
    /// Guessed letters absent from the word, sorted for display.
    pub wrong_letters: Vec<char>,
    /// Every guessed letter in the order it was tried.
    pub guessed_letters: Vec<char>,
    pub wrong_attempts: u8,
    pub max_attempts: u8,
    pub status: Status,
    pub hint_available: bool,
    /// The secret word, only once the game is over.
    pub revealed_word: Option<String>,
}

/// One game session. Replaced wholesale on every new game.
#[derive(Debug)]
struct GameState {
    category: String,
    secret: String,
    guessed: Vec<char>,
    wrong_attempts: u8,
    status: Status,
    hint_used: bool,
}

/// The hangman state machine.
///
/// Owns the word bank, the random source, and the current session state;
/// completely unaware of rendering. The view talks to it through
/// [`Snapshot`]s and [`Outcome`]s only.
pub struct GameEngine<R: RngCore = StdRng> {
    bank: WordBank,
    rng: R,
    state: GameState,
}

impl GameEngine<StdRng> {
    /// Engine with an OS-seeded rng. The first game starts immediately.
    pub fn new(bank: WordBank) -> Self {
        Self::with_rng(bank, StdRng::from_os_rng())
    }

    /// Engine with a fixed seed, for reproducible runs.
    pub fn seeded(bank: WordBank, seed: u64) -> Self {
        Self::with_rng(bank, StdRng::seed_from_u64(seed))
    }
}

impl<R: RngCore> GameEngine<R> {
    /// Engine with a caller-supplied random source.
    pub fn with_rng(bank: WordBank, mut rng: R) -> Self {
        let state = Self::pick_game(&bank, &mut rng);
        info!(category = %state.category, "first game started");
        Self { bank, rng, state }
    }

    /// Throw away the current session and deal a fresh one: uniform
    /// category, then uniform word from that category.
    pub fn start_new_game(&mut self) -> Snapshot {
        self.state = Self::pick_game(&self.bank, &mut self.rng);
        info!(category = %self.state.category, "new game started");
        self.snapshot()
    }

    /// Submit a letter guess.
    ///
    /// The letter is uppercased before comparison. Guesses against a
    /// finished game and repeats of earlier guesses change nothing.
    pub fn guess_letter(&mut self, letter: char) -> Outcome {
        if self.state.status != Status::InProgress {
            return Outcome::AlreadyOver;
        }

        let letter = normalize(letter);
        if self.state.guessed.contains(&letter) {
            return Outcome::Duplicate(letter);
        }

        self.state.guessed.push(letter);
        if self.state.secret.contains(letter) {
            if self.word_covered() {
                self.state.status = Status::Won;
                info!(word = %self.state.secret, "game won");
            }
            Outcome::Correct(letter)
        } else {
            self.state.wrong_attempts += 1;
            if self.state.wrong_attempts >= MAX_ATTEMPTS {
                self.state.status = Status::Lost;
                info!(word = %self.state.secret, "game lost");
            }
            Outcome::Wrong(letter)
        }
    }

    /// Reveal one undiscovered letter. One hint per game.
    ///
    /// The pick is uniform over the set of distinct letters still hidden.
    /// A game where every letter is already on the board yields
    /// [`Outcome::NoHintAvailable`] without spending the hint.
    pub fn request_hint(&mut self) -> Outcome {
        if self.state.status != Status::InProgress || self.state.hint_used {
            return Outcome::HintUnavailable;
        }

        let mut undiscovered: Vec<char> = Vec::new();
        for c in self.state.secret.chars() {
            if !self.state.guessed.contains(&c) && !undiscovered.contains(&c) {
                undiscovered.push(c);
            }
        }
        if undiscovered.is_empty() {
            return Outcome::NoHintAvailable;
        }

        let letter = undiscovered[self.rng.random_range(0..undiscovered.len())];
        self.state.guessed.push(letter);
        self.state.hint_used = true;
        debug!(%letter, "hint granted");
        if self.word_covered() {
            self.state.status = Status::Won;
            info!(word = %self.state.secret, "game won");
        }
        Outcome::HintGranted(letter)
    }

    /// Current state, packaged for the view.
    pub fn snapshot(&self) -> Snapshot {
        let state = &self.state;

        let mut masked_word = String::with_capacity(state.secret.len() * 2);
        for (i, c) in state.secret.chars().enumerate() {
            if i > 0 {
                masked_word.push(' ');
            }
            masked_word.push(if state.guessed.contains(&c) { c } else { '_' });
        }

        let mut wrong_letters: Vec<char> = state
            .guessed
            .iter()
            .copied()
            .filter(|c| !state.secret.contains(*c))
            .collect();
        wrong_letters.sort_unstable();

        Snapshot {
            category: state.category.clone(),
            masked_word,
            wrong_letters,
            guessed_letters: state.guessed.clone(),
            wrong_attempts: state.wrong_attempts,
            max_attempts: MAX_ATTEMPTS,
            status: state.status,
            hint_available: !state.hint_used && state.status == Status::InProgress,
            revealed_word: (state.status != Status::InProgress)
                .then(|| state.secret.clone()),
        }
    }

    fn word_covered(&self) -> bool {
        self.state
            .secret
            .chars()
            .all(|c| self.state.guessed.contains(&c))
    }

    fn pick_game(bank: &WordBank, rng: &mut R) -> GameState {
        let category = &bank.categories()[rng.random_range(0..bank.len())];
        let secret = category.words[rng.random_range(0..category.words.len())].clone();
        debug!(category = %category.name, word = %secret, "picked word");

        GameState {
            category: category.name.clone(),
            secret,
            guessed: Vec::new(),
            wrong_attempts: 0,
            status: Status::InProgress,
            hint_used: false,
        }
    }
}

// `char::to_uppercase` can expand to several chars for odd scripts; the
// first one is the letter the word lists actually contain.
fn normalize(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}
