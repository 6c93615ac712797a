//! Output adapters: consumers of a frozen [`crate::Dssp`] result.
//!
//! Both writers share no state with the engine beyond read access through its iterator
//! contract; they are plain functions rather than types, since neither carries behaviour
//! between calls.

pub mod classic;
pub mod mmcif;

/// Bibliographic metadata a caller supplies for the classic DSSP header lines. The engine
/// itself has no notion of these fields; they come from whatever the structure adapter parsed
/// out of the input file's header records.
#[derive(Clone, Debug, Default)]
pub struct DepositMetadata {
    pub id_code: String,
    pub classification: Option<String>,
    pub title: Option<String>,
    pub keywords: Vec<String>,
}
