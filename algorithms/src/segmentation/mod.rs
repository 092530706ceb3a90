//! разбиение текста на расширенные графемы и слова (UAX #29)

pub use grapheme::{grapheme_indices, graphemes, GraphemeBreaker, GraphemeIndices, Graphemes};
pub use word::{word_bound_indices, word_bounds, words, WordBoundIndices, WordBounds, WordBreaker, WordKind, Words};

mod grapheme;
mod word;
