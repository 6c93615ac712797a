//! Defines structures of monomers that constitute to biopolymers: amino acids and nucleotides
//!
//!
mod monomers;

pub use monomers::{MonomerAtom, Monomer, MonomerManager};