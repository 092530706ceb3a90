#[macro_use]
extern crate lazy_static;

pub use error::Error;
pub use normalization::{
    is_nfc, is_nfd, is_nfkc, is_nfkd, nfc, nfd, nfkc, nfkd, unaccent, Form, IsNormalized, Normalizer,
};
pub use utf::{Policy, Sink};

mod codepoint;
mod data;
mod error;
mod table;

pub mod normalization;
pub mod properties;
pub mod utf;

#[cfg(feature = "casing")]
pub mod casing;
#[cfg(feature = "collation")]
pub mod collation;
#[cfg(feature = "segmentation")]
pub mod segmentation;
