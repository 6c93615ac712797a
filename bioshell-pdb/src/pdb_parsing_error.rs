use thiserror::Error;
use bioshell_cif::CifError;
use crate::ResidueId;

/// Errors that may occur while loading or manipulating a [`Structure`](crate::Structure)
/// or a [`Deposit`](crate::Deposit).
#[derive(Debug, Error)]
pub enum PDBError {
    #[error("Invalid PDB file format")]
    InvalidFormat,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} occurred while parsing a CIF input")]
    CifParsingError(#[from] CifError),

    #[error("a file '{file_name}' is neither a PDB nor an mmCIF file")]
    InvalidFileFormat { file_name: String },

    #[error("unknown residue type: {res_type}")]
    UnknownResidueType { res_type: String },

    #[error("no such residue: {res_id}")]
    NoSuchResidue { res_id: ResidueId },

    #[error("no such entity: {entity_id}")]
    NoSuchEntity { entity_id: String },

    #[error("no such chain: {chain_id}")]
    NoSuchChain { chain_id: String },

    #[error("can't parse '{data_value}' as a {enum_name} variant")]
    CantParseEnumVariant { data_value: String, enum_name: String },

    #[error("inconsistent entity '{entity_id}': {details}")]
    InconsistentEntity { entity_id: String, details: String },

    #[error("can't parse a ResidueId from '{residue_id}'")]
    ResidueIdParsingError { residue_id: String },

    #[error("unknown compound type '{compound_type}' for compound '{compound_id}'")]
    IncorrectCompoundTypeName { compound_id: String, compound_type: String },
}
