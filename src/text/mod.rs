//! Text preprocessing shared by the matcher and resolver.
//!
//! Speech transcripts arrive with arbitrary casing, punctuation and filler
//! words; everything here works on a normalized form so the matching
//! cascade only has to reason about clean, space-separated words.

mod levenshtein;
mod normalize;

pub use levenshtein::levenshtein;
pub use normalize::normalize;
