// src/prompt/builders.rs
// Prompt templates for each feature endpoint. Pure string assembly so the
// templates can be inspected in tests without a live service.

/// Time-of-day descriptor used by the affirmation prompt.
pub fn time_context_for_hour(hour: u32) -> &'static str {
    if hour < 12 {
        "morning"
    } else if hour < 17 {
        "afternoon"
    } else {
        "evening"
    }
}

fn language_instruction(language: &str) -> String {
    format!("Write in {} using simple, clear words.", language)
}

/// Daily affirmation prompt, seeded so the request varies once per day.
pub fn affirmation_prompt(
    language: &str,
    time_context: &str,
    day_of_week: &str,
    seed: &str,
) -> String {
    format!(
        "Create a deeply inspiring daily affirmation for a {time_context} on {day_of_week}.\n\
         Language: {language}\n\
         Requirements:\n\
         - 2-3 sentences\n\
         - Uplifting, poetic, encouraging\n\
         - End with hope for the day ahead\n\
         Seed: {seed}"
    )
}

/// The three random-fun template kinds, picked uniformly per request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunKind {
    Joke,
    Compliment,
    Art,
}

pub const FUN_KINDS: [FunKind; 3] = [FunKind::Joke, FunKind::Compliment, FunKind::Art];

impl FunKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FunKind::Joke => "joke",
            FunKind::Compliment => "compliment",
            FunKind::Art => "art",
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            FunKind::Joke => "😄",
            FunKind::Compliment => "💝",
            FunKind::Art => "🎨",
        }
    }
}

pub fn fun_prompt(kind: FunKind, language: &str) -> String {
    let lang = language_instruction(language);
    match kind {
        FunKind::Joke => format!(
            "{lang} Give one short, funny, family-friendly joke that anyone can understand. \
             Keep it under 20 words."
        ),
        FunKind::Compliment => format!(
            "{lang} Give one short, warm compliment about someone's character or kindness. \
             Under 20 words."
        ),
        FunKind::Art => format!(
            "{lang} Describe one small imaginary art scene in 1-2 short sentences that is \
             easy to picture."
        ),
    }
}

pub fn riddle_prompt(language: &str) -> String {
    format!(
        "{}\n\
         Give one short, fun riddle for 5 to 20 age kids.\n\
         Output format:\n\
         QUESTION: [riddle text]\n\
         ANSWER: [answer text]\n\
         Keep both under 20 words.",
        language_instruction(language)
    )
}

pub fn ascii_prompt(language: &str) -> String {
    format!(
        "The answer must be in {language}.\n\
         \n\
         Create a simple ASCII art puzzle for kids and young adults (ages 5-22).\n\
         \n\
         Rules:\n\
         - Draw using only keyboard characters (|, _, /, \\, (, ), *, etc.).\n\
         - Make it 3-6 lines tall and easy to recognize.\n\
         - The ASCII art should represent an animal, object, or simple scene.\n\
         - Keep it fun and not too detailed.\n\
         - After the ASCII art, write the correct answer in {language}.\n\
         \n\
         Output format exactly:\n\
         ASCII:\n\
         [line1]\n\
         [line2]\n\
         [line3]\n\
         ...\n\
         ANSWER: [short answer in {language}]\n\
         \n\
         Example:\n\
         ASCII:\n \
         |\\_/|\n \
         ( o.o )\n \
         > ^ <\n\
         ANSWER: Cat"
    )
}

pub fn personality_prompt(input: &str, language: &str, context: Option<&str>) -> String {
    let context_line = context
        .filter(|c| !c.trim().is_empty())
        .map(|c| format!("Context: {c}\n"))
        .unwrap_or_default();

    format!(
        "Based on this: \"{input}\"\n\
         {context_line}\
         Give:\n\
         - 3-4 sentence personality insight\n\
         - A creative personality type name\n\
         - 3-4 key traits\n\
         Language: {language}\n\
         Format:\n\
         INSIGHT: ...\n\
         TYPE: ...\n\
         TRAITS: ..."
    )
}
