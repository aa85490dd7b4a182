pub mod converter;
pub mod jamo;
pub mod phoneme;
pub mod syllable;
pub mod unicode;
