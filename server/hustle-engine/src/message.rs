//! Motivational message selection.

use rand::Rng;

/// Scores below this get encouragement instead of praise.
pub const LOW_SCORE_THRESHOLD: u32 = 50;

pub const MOTIVATIONAL_MESSAGES: [&str; 10] = [
  "Your code speaks louder than your commits!",
  "Keep pushing, keep grinding, keep building!",
  "The tech streets recognize your hustle!",
  "From Yaba to the world, your code is fire!",
  "GitHub green squares looking healthy!",
  "Your repo game is strong!",
  "The commits don't lie - you're cooking!",
  "Stack Overflow fears you (in a good way)!",
  "Your GitHub is giving main character energy!",
  "The algorithm respects your grind!",
];

pub const LOW_SCORE_MESSAGES: [&str; 5] = [
  "Everyone starts somewhere - keep building!",
  "Your journey is just beginning!",
  "Time to ship more code and level up!",
  "The comeback is always greater than the setback!",
  "Start pushing those commits - you've got this!",
];

/// Uniform pick from the pool matching `score`, drawn from `rng`.
pub fn get_message<R: Rng + ?Sized>(score: u32, rng: &mut R) -> &'static str {
  let pool: &[&'static str] = if score < LOW_SCORE_THRESHOLD {
    &LOW_SCORE_MESSAGES
  } else {
    &MOTIVATIONAL_MESSAGES
  };
  pool[rng.random_range(0..pool.len())]
}
