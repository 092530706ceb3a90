use criterion::{criterion_group, criterion_main, Criterion};
use unicode_algorithms::casing::{self, Locale};
use unicode_algorithms::segmentation;


group!("./../test_data/texts", casefold, test_casefold, "casefold", "my", Locale, Locale::Und, |l, text| -> String {
    casing::to_casefold(text, *l)
});

group!("./../test_data/texts", uppercase, test_uppercase, "uppercase", "my", Locale, Locale::Und, |l, text| -> String {
    casing::to_uppercase(text, *l)
});

group!("./../test_data/texts", uppercase_std, test_uppercase_std, "uppercase", "std", (), (), |_u, text| -> String {
    text.to_uppercase()
});

group!("./../test_data/texts", graphemes, test_graphemes, "graphemes", "my", (), (), |_u, text| -> usize {
    segmentation::graphemes(text).count()
});

group!("./../test_data/texts", words, test_words, "words", "my", (), (), |_u, text| -> usize {
    segmentation::word_bounds(text).count()
});

criterion_group!(benches, casefold, uppercase, uppercase_std, graphemes, words);
criterion_main!(benches);
