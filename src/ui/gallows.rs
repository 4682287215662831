const FRAMES: [&str; 7] = [
    r#"  +---+
  |   |
      |
      |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
      |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
  |   |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|   |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
      |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
 /    |
      |
========="#,
    r#"  +---+
  |   |
  O   |
 /|\  |
 / \  |
      |
========="#,
];

/// Gallows art for a given number of wrong guesses.
///
/// Frame 0 is the bare post; each wrong guess adds one part, in the order
/// head, body, left arm, right arm, left leg, right leg.
pub fn frame(wrong_attempts: u8) -> &'static str {
    FRAMES[usize::from(wrong_attempts).min(FRAMES.len() - 1)]
}
