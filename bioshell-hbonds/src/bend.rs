//! Bend detection and chirality.

use crate::residue::{chirality_char, ProteinResidue, UNDEFINED_ANGLE};

/// κ angle threshold above which a residue is considered a bend.
const BEND_THRESHOLD_DEGREES: f64 = 70.0;

/// `bend(i)` is true iff κ_i exceeds 70°; undefined κ never counts as a bend, and neither does
/// a residue missing the backbone atoms κ is built from.
pub fn is_bend(residue: &ProteinResidue) -> bool {
    residue.bend_angle_ok() && residue.kappa != UNDEFINED_ANGLE && residue.kappa > BEND_THRESHOLD_DEGREES
}

pub fn compute_bend_and_chirality(residues: &[ProteinResidue]) -> (Vec<bool>, Vec<char>) {
    let bend = residues.iter().map(is_bend).collect();
    let chirality = residues.iter().map(|r| chirality_char(r.alpha)).collect();
    (bend, chirality)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::residue::{Backbone, ChainBreak};

    fn residue(kappa: f64, geometry_incomplete: bool) -> ProteinResidue {
        ProteinResidue {
            index: 1,
            compound: "ALA".to_string(),
            aa_code: 'A',
            chain_id: "A".to_string(),
            auth_seq_num: 1,
            i_code: ' ',
            backbone: Backbone::default(),
            phi: UNDEFINED_ANGLE,
            psi: UNDEFINED_ANGLE,
            omega: UNDEFINED_ANGLE,
            tco: 0.0,
            kappa,
            alpha: UNDEFINED_ANGLE,
            accessibility: 0.0,
            ss_bridge_number: None,
            chain_break: ChainBreak::None,
            geometry_incomplete,
        }
    }

    #[test]
    fn bend_fires_only_above_threshold() {
        assert!(!is_bend(&residue(70.0, false)));
        assert!(is_bend(&residue(70.1, false)));
    }

    #[test]
    fn undefined_kappa_is_never_a_bend() {
        assert!(!is_bend(&residue(UNDEFINED_ANGLE, false)));
    }

    #[test]
    fn geometry_incomplete_residue_is_never_a_bend() {
        // kappa set above the threshold, but the residue lacks the backbone atoms it came from
        assert!(!is_bend(&residue(90.0, true)));
    }

    #[test]
    fn chirality_follows_alpha_sign() {
        let (_, chirality) = compute_bend_and_chirality(&[residue(0.0, false)]);
        assert_eq!(chirality, vec![' ']);
    }
}
