//! Assigns DSSP (Kabsch-Sander) secondary structure to a protein chain, including the PPII
//! helix extension.
//!
//! The engine is built as a pipeline of independent passes over a [`Structure`](bioshell_pdb::Structure):
//! residue extraction and backbone geometry, hydrogen-bond energies, bridges/ladders/sheets,
//! helices of stride 3/4/5 and PPII, bend/chirality, disulphides, and finally the summary label
//! reduction and aggregate statistics. [`Dssp`] wires these together and freezes the result
//! behind a restartable iterator of [`ResidueView`].

mod bend;
mod bridge;
mod disulphide;
mod dssp;
mod energy;
mod errors;
mod helix;
pub mod output;
mod reduction;
mod residue;
mod statistics;

pub use bend::compute_bend_and_chirality;
pub use bridge::{
    bridge_membership, build_ladders_and_sheets, detect_bridges, Bridge, BridgeMembership,
    BridgePartnerSlot, BridgeType, Ladder,
};
pub use disulphide::{assign_disulphides, ss_bridge_letter, DisulphideBond};
pub use dssp::{Dssp, DsspIter, ResidueView};
pub use energy::{compute_hbonds, HBondSlot, ResidueHBonds};
pub use errors::DsspError;
pub use helix::{compute_helix_flags, HelixFlag, HelixFlags, Stride};
pub use reduction::{reduce, ResidueMotifs, SSLabel};
pub use residue::{extract_residues, Backbone, ChainBreak, ProteinResidue, UNDEFINED_ANGLE};
pub use statistics::{compute_statistics, Statistics};
