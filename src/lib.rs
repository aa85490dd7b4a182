pub mod config;
pub mod core;
pub mod error;
pub mod language;
pub mod notation;

pub use crate::core::converter::{hangulize, hangulize_batch, hangulize_with, list_languages, supports};
pub use crate::core::phoneme::Phoneme;
pub use crate::core::syllable::{assemble, split_phonemes};
pub use crate::error::{HangulizeError, Result};
pub use crate::language::{Language, LanguageSpec, Registry};
pub use crate::notation::{Notation, Replacement, Rule};
