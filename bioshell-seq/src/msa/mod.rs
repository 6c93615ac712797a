//! Provides [`MSA`](crate::msa::MSA) stucts and functions that operate on such alignments
mod msa;

pub use msa::*;
