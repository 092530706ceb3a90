use criterion::{criterion_group, criterion_main, Criterion};
use icu_normalizer::{ComposingNormalizer, DecomposingNormalizer};


group!(
    "./../test_data/texts",
    nfc,
    test_nfc,
    "nfc",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfc(),
    |n, text| -> String { n.normalize(text) }
);

group!(
    "./../test_data/texts",
    nfd,
    test_nfd,
    "nfd",
    "icu",
    DecomposingNormalizer,
    DecomposingNormalizer::new_nfd(),
    |n, text| -> String { n.normalize(text) }
);

group!(
    "./../test_data/texts",
    nfkc,
    test_nfkc,
    "nfkc",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfkc(),
    |n, text| -> String { n.normalize(text) }
);

group!(
    "./../test_data/texts",
    nfkd,
    test_nfkd,
    "nfkd",
    "icu",
    DecomposingNormalizer,
    DecomposingNormalizer::new_nfkd(),
    |n, text| -> String { n.normalize(text) }
);

group!(
    "./../test_data/texts",
    is_nfc,
    test_is_nfc,
    "is_nfc",
    "icu",
    ComposingNormalizer,
    ComposingNormalizer::new_nfc(),
    |n, text| -> bool { n.is_normalized(text) }
);

criterion_group!(benches, nfc, nfd, nfkc, nfkd, is_nfc);
criterion_main!(benches);
