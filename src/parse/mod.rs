// src/parse/mod.rs
// Pure line-prefix parsers over raw completion text. Parsing never fails;
// missing structure degrades to the documented defaults.

/// Default personality type when the model omits a `TYPE:` line.
pub const DEFAULT_PERSONALITY_TYPE: &str = "The Unique Soul";

const DEFAULT_TRAITS: [&str; 3] = ["Creative", "Thoughtful", "Inspiring"];

/// Maximum number of traits returned to the client.
pub const MAX_TRAITS: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Riddle {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AsciiPuzzle {
    pub ascii_art: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PersonalityProfile {
    pub insight: String,
    pub personality_type: String,
    pub traits: Vec<String>,
}

/// Case-insensitive ASCII prefix match. Returns the remainder after the
/// prefix, or None. Byte-indexed, so a multi-byte char in the head position
/// simply fails the match instead of panicking.
fn strip_prefix_ci<'a>(line: &'a str, prefix: &str) -> Option<&'a str> {
    line.get(..prefix.len())
        .filter(|head| head.eq_ignore_ascii_case(prefix))
        .map(|_| &line[prefix.len()..])
}

/// Extract `QUESTION:` / `ANSWER:` lines (case-insensitive). The first
/// matching line of each kind wins. Defaults: question = the full raw text,
/// answer = empty string.
pub fn parse_riddle(raw: &str) -> Riddle {
    let mut question = None;
    let mut answer = None;

    for line in raw.lines() {
        if let Some(rest) = strip_prefix_ci(line, "QUESTION:") {
            if question.is_none() {
                question = Some(rest.trim().to_string());
            }
        } else if let Some(rest) = strip_prefix_ci(line, "ANSWER:") {
            if answer.is_none() {
                answer = Some(rest.trim().to_string());
            }
        }
    }

    Riddle {
        question: question.unwrap_or_else(|| raw.to_string()),
        answer: answer.unwrap_or_default(),
    }
}

/// Extract the art block between an `ASCII:` marker line and an `ANSWER:`
/// line (both matched case-insensitively on the trimmed line). The marker
/// lines themselves are excluded; captured art lines keep their original
/// indentation. Lines outside the capture window are ignored.
pub fn parse_ascii(raw: &str) -> AsciiPuzzle {
    let mut art: Vec<&str> = Vec::new();
    let mut answer = String::new();
    let mut capturing = false;

    for line in raw.lines() {
        let trimmed = line.trim();
        if strip_prefix_ci(trimmed, "ASCII:").is_some() {
            capturing = true;
            continue;
        }
        if let Some(rest) = strip_prefix_ci(trimmed, "ANSWER:") {
            capturing = false;
            answer = rest.trim().to_string();
            continue;
        }
        if capturing {
            art.push(line);
        }
    }

    AsciiPuzzle {
        ascii_art: art.join("\n"),
        answer,
    }
}

/// Extract `INSIGHT:` / `TYPE:` / `TRAITS:` lines. Unlike the riddle and
/// ASCII parsers this family matches exact case only, preserving the
/// original behavior. Missing prefixes fall back to fixed defaults; traits
/// are comma-split, trimmed, empties dropped, capped at MAX_TRAITS.
pub fn parse_personality(raw: &str) -> PersonalityProfile {
    let mut insight = None;
    let mut personality_type = None;
    let mut traits = None;

    for line in raw.lines() {
        if let Some(rest) = line.strip_prefix("INSIGHT:") {
            insight = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("TYPE:") {
            personality_type = Some(rest.trim().to_string());
        } else if let Some(rest) = line.strip_prefix("TRAITS:") {
            let parsed: Vec<String> = rest
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
            traits = Some(parsed);
        }
    }

    let mut traits = traits.unwrap_or_else(|| DEFAULT_TRAITS.map(String::from).to_vec());
    traits.truncate(MAX_TRAITS);

    PersonalityProfile {
        insight: insight.unwrap_or_else(|| raw.to_string()),
        personality_type: personality_type.unwrap_or_else(|| DEFAULT_PERSONALITY_TYPE.to_string()),
        traits,
    }
}

/// Confidence grows with the word count of the caller's input:
/// min(0.95, 0.6 + 0.05 * words).
pub fn confidence_score(input: &str) -> f64 {
    let words = input.split_whitespace().count();
    (0.6 + 0.05 * words as f64).min(0.95)
}
