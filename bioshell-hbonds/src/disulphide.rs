//! Disulphide bridge detection and numbering.

use bioshell_pdb::{ResidueId, Structure};

use crate::residue::ProteinResidue;

/// Sγ-Sγ distance below which two cysteines are declared disulphide-bonded.
const SG_DISTANCE_THRESHOLD: f64 = 2.5;

/// A single disulphide bond between two cysteines, 0-based residue indices, `first < second`.
#[derive(Clone, Copy, Debug)]
pub struct DisulphideBond {
    pub first: usize,
    pub second: usize,
}

impl DisulphideBond {
    pub fn is_intrachain(&self, residues: &[ProteinResidue]) -> bool {
        residues[self.first].chain_id == residues[self.second].chain_id
    }
}

fn sg_position(structure: &Structure, residue: &ProteinResidue) -> Option<bioshell_pdb::calc::Vec3> {
    let res_id = ResidueId::new(&residue.chain_id, residue.auth_seq_num, residue.i_code);
    structure
        .residue_atoms(&res_id)
        .into_iter()
        .find(|a| a.name.trim() == "SG")
        .map(|a| a.pos)
}

/// Finds all disulphide bonds and numbers them 1, 2, ... in order of first residue index
///. Also writes the resulting `ss_bridge_number` back into each residue.
pub fn assign_disulphides(structure: &Structure, residues: &mut [ProteinResidue]) -> Vec<DisulphideBond> {
    let cys_indices: Vec<usize> =
        (0..residues.len()).filter(|&i| residues[i].compound == "CYS").collect();

    let positions: Vec<Option<bioshell_pdb::calc::Vec3>> =
        cys_indices.iter().map(|&i| sg_position(structure, &residues[i])).collect();

    let mut bonds = Vec::new();
    for (a_pos, &a_idx) in positions.iter().zip(cys_indices.iter()) {
        let a = match a_pos {
            Some(p) => p,
            None => continue,
        };
        for (b_pos, &b_idx) in positions.iter().zip(cys_indices.iter()) {
            if b_idx <= a_idx {
                continue;
            }
            let b = match b_pos {
                Some(p) => p,
                None => continue,
            };
            if a.distance_to(b) <= SG_DISTANCE_THRESHOLD {
                bonds.push(DisulphideBond { first: a_idx, second: b_idx });
            }
        }
    }

    bonds.sort_by_key(|b| b.first);

    for (n, bond) in bonds.iter().enumerate() {
        let number = (n + 1) as u32;
        residues[bond.first].ss_bridge_number = Some(number);
        residues[bond.second].ss_bridge_number = Some(number);
    }

    bonds
}

/// Maps a 1-based SS-bridge number to the lowercase letter DSSP prints in the residue column
///: `'a' + ((n-1) mod 26)`.
pub fn ss_bridge_letter(number: u32) -> char {
    let offset = (number - 1) % 26;
    (b'a' + offset as u8) as char
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residue::{Backbone, ChainBreak};

    fn cys_at(index: usize, chain_id: &str) -> ProteinResidue {
        ProteinResidue {
            index,
            compound: "CYS".to_string(),
            aa_code: 'C',
            chain_id: chain_id.to_string(),
            auth_seq_num: index as i32,
            i_code: ' ',
            backbone: Backbone::default(),
            phi: crate::residue::UNDEFINED_ANGLE,
            psi: crate::residue::UNDEFINED_ANGLE,
            omega: crate::residue::UNDEFINED_ANGLE,
            tco: 0.0,
            kappa: crate::residue::UNDEFINED_ANGLE,
            alpha: crate::residue::UNDEFINED_ANGLE,
            accessibility: 0.0,
            ss_bridge_number: None,
            chain_break: ChainBreak::None,
            geometry_incomplete: false,
        }
    }

    #[test]
    fn ss_bridge_letter_cycles_through_the_alphabet() {
        assert_eq!(ss_bridge_letter(1), 'a');
        assert_eq!(ss_bridge_letter(26), 'z');
        assert_eq!(ss_bridge_letter(27), 'a');
    }

    #[test]
    fn bond_is_intrachain_iff_both_ends_share_a_chain() {
        let residues = [cys_at(1, "A"), cys_at(2, "A"), cys_at(3, "B")];
        let same = DisulphideBond { first: 0, second: 1 };
        let cross = DisulphideBond { first: 0, second: 2 };
        assert!(same.is_intrachain(&residues));
        assert!(!cross.is_intrachain(&residues));
    }
}
