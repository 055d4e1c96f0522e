// src/prompt/mod.rs

pub mod builders;

pub use builders::{
    FunKind, FUN_KINDS, affirmation_prompt, ascii_prompt, fun_prompt, personality_prompt,
    riddle_prompt, time_context_for_hour,
};
