#[cfg(test)]
mod data;

#[cfg(test)]
mod collation;
#[cfg(test)]
mod icu;
#[cfg(test)]
mod normalization;
#[cfg(test)]
mod ucd;
#[cfg(test)]
mod utf;
