// src/seed.rs
// Daily seed - a date-stable token used to pick the day's decorative elements.

use sha2::{Digest, Sha256};

/// Visual emoji shown alongside the daily affirmation.
pub const VISUALS: [&str; 8] = ["✨", "🌟", "🌅", "💫", "🔥", "🌈", "🦋", "🌸"];

/// Mood color palette (hex).
pub const MOOD_COLORS: [&str; 7] = [
    "#FF6B6B", "#4ECDC4", "#45B7D1", "#96CEB4", "#FFEAA7", "#DDA0DD", "#98D8C8",
];

/// First 8 hex characters of the SHA-256 digest of a `YYYY-MM-DD` date
/// string. Pure: the same date always yields the same token.
pub fn daily_seed(date: &str) -> String {
    let digest = Sha256::digest(date.as_bytes());
    hex::encode(digest)[..8].to_string()
}

/// Interpret a 2-char hex slice as base-16 and reduce it modulo the list
/// length. A hex digest slice always parses; index 0 covers the impossible.
fn pick<'a>(slice: &str, list: &'a [&'a str]) -> &'a str {
    let idx = u32::from_str_radix(slice, 16).unwrap_or(0) as usize % list.len();
    list[idx]
}

/// Visual emoji for the day, selected from seed chars 0..2.
pub fn visual_for_seed(seed: &str) -> &'static str {
    pick(&seed[..2], &VISUALS)
}

/// Mood color for the day, selected from seed chars 2..4.
pub fn mood_color_for_seed(seed: &str) -> &'static str {
    pick(&seed[2..4], &MOOD_COLORS)
}
