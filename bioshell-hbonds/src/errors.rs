//! Error taxonomy for the DSSP engine and its output adapters.

use thiserror::Error;

/// Errors that may occur while running the engine or writing its output.
#[derive(Debug, Error)]
pub enum DsspError {
    /// a chain label is too long to fit the single-character column of classic DSSP output
    #[error("chain label '{chain_id}' won't fit in original DSSP format")]
    ChainLabelTooLong { chain_id: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("error while loading the input structure: {0}")]
    Structure(#[from] bioshell_pdb::PDBError),

    #[error("error while writing mmCIF output: {0}")]
    Cif(#[from] bioshell_cif::CifError),
}
