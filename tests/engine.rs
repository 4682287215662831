use gallows::{Category, GameEngine, Outcome, Status, WordBank, MAX_ATTEMPTS};
use rand_core::RngCore;

/// Always returns zero, so every uniform pick lands on index 0.
struct ZeroRng;

impl RngCore for ZeroRng {
    fn next_u32(&mut self) -> u32 {
        0
    }

    fn next_u64(&mut self) -> u64 {
        0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        dest.fill(0);
    }
}

fn single_word_engine(word: &str) -> GameEngine {
    let bank = WordBank::new(vec![Category::new("Fruit", [word])]).unwrap();
    GameEngine::seeded(bank, 7)
}

#[test]
fn apple_walkthrough() {
    let mut engine = single_word_engine("APPLE");

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.category, "Fruit");
    assert_eq!(snapshot.masked_word, "_ _ _ _ _");
    assert_eq!(snapshot.status, Status::InProgress);
    assert!(snapshot.hint_available);
    assert_eq!(snapshot.revealed_word, None);

    assert_eq!(engine.guess_letter('A'), Outcome::Correct('A'));
    assert_eq!(engine.snapshot().masked_word, "A _ _ _ _");

    assert_eq!(engine.guess_letter('Z'), Outcome::Wrong('Z'));
    assert_eq!(engine.snapshot().wrong_attempts, 1);

    // Lowercase repeat of an earlier guess is still a duplicate
    assert_eq!(engine.guess_letter('a'), Outcome::Duplicate('A'));
    assert_eq!(engine.snapshot().wrong_attempts, 1);

    assert_eq!(engine.guess_letter('P'), Outcome::Correct('P'));
    assert_eq!(engine.snapshot().masked_word, "A P P _ _");

    assert_eq!(engine.guess_letter('L'), Outcome::Correct('L'));
    assert_eq!(engine.guess_letter('E'), Outcome::Correct('E'));

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.status, Status::Won);
    assert_eq!(snapshot.wrong_attempts, 1);
    assert_eq!(snapshot.revealed_word.as_deref(), Some("APPLE"));
    assert!(!snapshot.hint_available);
}

#[test]
fn lost_exactly_on_the_sixth_wrong_guess() {
    let mut engine = single_word_engine("APPLE");

    for (i, letter) in ['B', 'C', 'D', 'F', 'G'].into_iter().enumerate() {
        assert_eq!(engine.guess_letter(letter), Outcome::Wrong(letter));
        let snapshot = engine.snapshot();
        assert_eq!(snapshot.wrong_attempts, i as u8 + 1);
        assert_eq!(snapshot.status, Status::InProgress);
    }

    assert_eq!(engine.guess_letter('H'), Outcome::Wrong('H'));
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.wrong_attempts, MAX_ATTEMPTS);
    assert_eq!(snapshot.status, Status::Lost);
    assert_eq!(snapshot.revealed_word.as_deref(), Some("APPLE"));
}

#[test]
fn finished_game_rejects_further_guesses() {
    let mut engine = single_word_engine("APPLE");
    for letter in ['B', 'C', 'D', 'F', 'G', 'H'] {
        engine.guess_letter(letter);
    }
    assert_eq!(engine.snapshot().status, Status::Lost);

    let before = engine.snapshot();
    assert_eq!(engine.guess_letter('A'), Outcome::AlreadyOver);
    assert_eq!(engine.guess_letter('Z'), Outcome::AlreadyOver);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn duplicate_guess_changes_nothing() {
    let mut engine = single_word_engine("APPLE");
    engine.guess_letter('A');
    engine.guess_letter('Z');

    let before = engine.snapshot();
    assert_eq!(engine.guess_letter('Z'), Outcome::Duplicate('Z'));
    assert_eq!(engine.guess_letter('A'), Outcome::Duplicate('A'));
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn wrong_attempts_counts_distinct_absent_letters() {
    let mut engine = single_word_engine("BANANA");

    engine.guess_letter('B');
    engine.guess_letter('X');
    engine.guess_letter('A');
    engine.guess_letter('X');
    engine.guess_letter('Y');
    engine.guess_letter('N');

    let snapshot = engine.snapshot();
    let absent = snapshot
        .guessed_letters
        .iter()
        .filter(|c| !"BANANA".contains(**c))
        .count();
    assert_eq!(snapshot.wrong_attempts as usize, absent);
    assert_eq!(snapshot.wrong_attempts, 2);
    assert_eq!(snapshot.status, Status::Won);
}

#[test]
fn hint_reveals_an_undiscovered_letter_once() {
    let mut engine = single_word_engine("ABC");

    let outcome = engine.request_hint();
    let letter = match outcome {
        Outcome::HintGranted(l) => l,
        other => panic!("expected a hint, got {:?}", other),
    };
    assert!(['A', 'B', 'C'].contains(&letter));

    let snapshot = engine.snapshot();
    assert!(!snapshot.hint_available);
    assert!(snapshot.guessed_letters.contains(&letter));
    assert_eq!(snapshot.wrong_attempts, 0);

    let before = engine.snapshot();
    assert_eq!(engine.request_hint(), Outcome::HintUnavailable);
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn hint_picks_only_from_hidden_letters() {
    let mut engine = single_word_engine("APPLE");
    engine.guess_letter('A');
    engine.guess_letter('P');

    match engine.request_hint() {
        Outcome::HintGranted(letter) => assert!(['L', 'E'].contains(&letter)),
        other => panic!("expected a hint, got {:?}", other),
    }
}

#[test]
fn hint_can_win_the_game() {
    let bank = WordBank::new(vec![Category::new("Short", ["AB"])]).unwrap();
    let mut engine = GameEngine::seeded(bank, 1);
    engine.guess_letter('A');

    assert_eq!(engine.request_hint(), Outcome::HintGranted('B'));
    assert_eq!(engine.snapshot().status, Status::Won);
}

#[test]
fn hint_rejected_after_the_game_ends() {
    let mut engine = single_word_engine("APPLE");
    for letter in ['B', 'C', 'D', 'F', 'G', 'H'] {
        engine.guess_letter(letter);
    }

    assert_eq!(engine.request_hint(), Outcome::HintUnavailable);
}

#[test]
fn accented_letters_normalize_and_match() {
    let mut engine = single_word_engine("CANADÁ");

    assert_eq!(engine.guess_letter('á'), Outcome::Correct('Á'));
    assert_eq!(engine.snapshot().masked_word, "_ _ _ _ _ Á");
    assert_eq!(engine.snapshot().wrong_attempts, 0);

    for letter in ['c', 'a', 'n', 'd'] {
        engine.guess_letter(letter);
    }
    assert_eq!(engine.snapshot().status, Status::Won);
}

#[test]
fn new_game_resets_everything() {
    let mut engine = single_word_engine("APPLE");
    engine.guess_letter('A');
    engine.guess_letter('Z');
    engine.request_hint();

    let snapshot = engine.start_new_game();
    assert_eq!(snapshot.status, Status::InProgress);
    assert_eq!(snapshot.wrong_attempts, 0);
    assert!(snapshot.guessed_letters.is_empty());
    assert!(snapshot.wrong_letters.is_empty());
    assert!(snapshot.hint_available);
    assert_eq!(snapshot.masked_word, "_ _ _ _ _");
    assert_eq!(snapshot.revealed_word, None);
}

#[test]
fn snapshot_sorts_wrong_letters() {
    let mut engine = single_word_engine("APPLE");
    for letter in ['Z', 'B', 'X', 'C'] {
        engine.guess_letter(letter);
    }

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.wrong_letters, vec!['B', 'C', 'X', 'Z']);
    // Insertion order is preserved for the full guess list
    assert_eq!(snapshot.guessed_letters, vec!['Z', 'B', 'X', 'C']);
}

#[test]
fn secret_word_stays_hidden_until_the_end() {
    let mut engine = single_word_engine("APPLE");
    engine.guess_letter('A');
    assert_eq!(engine.snapshot().revealed_word, None);

    for letter in ['P', 'L', 'E'] {
        engine.guess_letter(letter);
    }
    assert_eq!(engine.snapshot().revealed_word.as_deref(), Some("APPLE"));
}

#[test]
fn zero_rng_picks_the_first_category_and_word() {
    let bank = WordBank::new(vec![
        Category::new("First", ["AAA"]),
        Category::new("Second", ["BBBB"]),
    ])
    .unwrap();
    let engine = GameEngine::with_rng(bank, ZeroRng);

    let snapshot = engine.snapshot();
    assert_eq!(snapshot.category, "First");
    assert_eq!(snapshot.masked_word, "_ _ _");
}

#[test]
fn every_category_is_reachable() {
    let mut seen = std::collections::HashSet::new();
    for seed in 0..64 {
        let engine = GameEngine::seeded(WordBank::builtin(), seed);
        seen.insert(engine.snapshot().category);
    }
    assert_eq!(seen.len(), WordBank::builtin().len());
}
