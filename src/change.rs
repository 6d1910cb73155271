// src/change.rs
//! Raw snapshot comparison. Byte equality only; the parsed model is never diffed.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Comparison {
    Identical,
    Changed,
}

pub fn compare(previous: &[u8], current: &[u8]) -> Comparison {
    if previous == current { Comparison::Identical } else { Comparison::Changed }
}
