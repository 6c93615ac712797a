//! Stride-3/4/5 helix turn detection, per-residue helix flags, and the PPII detector.

use crate::energy::ResidueHBonds;
use crate::residue::ProteinResidue;

/// The three α/3₁₀/π helix strides the engine tracks, plus PPII.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Stride {
    Three,
    Four,
    Five,
    PPII,
}

impl Stride {
    pub fn n(&self) -> usize {
        match self {
            Stride::Three => 3,
            Stride::Four => 4,
            Stride::Five => 5,
            Stride::PPII => 0,
        }
    }
}

/// Per-residue participation state in a helix of a given stride.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HelixFlag {
    #[default]
    None,
    Start,
    Middle,
    End,
    StartAndEnd,
}

/// φ/ψ window defining a PPII-eligible residue: centre ± half-width, degrees.
const PPII_PHI_CENTER: f64 = -75.0;
const PPII_PSI_CENTER: f64 = 145.0;
const PPII_HALF_WIDTH: f64 = 29.0;

fn in_window(value: f64, center: f64, half_width: f64) -> bool {
    value != crate::residue::UNDEFINED_ANGLE && (value - center).abs() <= half_width
}

pub fn is_ppii_eligible(residue: &ProteinResidue) -> bool {
    in_window(residue.phi, PPII_PHI_CENTER, PPII_HALF_WIDTH)
        && in_window(residue.psi, PPII_PSI_CENTER, PPII_HALF_WIDTH)
}

/// residue `i` is a turn of stride `n` iff an H-bond exists from `i` to `i+n`
fn turn_at(hbonds: &[ResidueHBonds], i: usize, n: usize) -> bool {
    i + n < hbonds.len() && hbonds[i].donates_to(i + n).is_some()
}

/// Computes the per-residue [`HelixFlag`] array for a single stride, from its turn flags.
///
/// A turn `i -> i+stride` marks `i` as its start and `i+stride` as its end; a residue can be
/// both (the start of one turn landing exactly where an earlier turn ends) and is then
/// `StartAndEnd`. A residue that starts a turn immediately following another turn's start
/// (`turn[i-1] && turn[i]`) is interior to the run and overridden to `Middle`.
pub fn helix_flags_for_stride(hbonds: &[ResidueHBonds], stride: usize) -> Vec<HelixFlag> {
    let n = hbonds.len();
    let turn: Vec<bool> = (0..n).map(|i| turn_at(hbonds, i, stride)).collect();
    let mut flags = vec![HelixFlag::None; n];

    for i in 0..n {
        let is_start = turn[i];
        let is_end = i >= stride && turn[i - stride];

        flags[i] = match (is_start, is_end) {
            (true, true) => HelixFlag::StartAndEnd,
            (true, false) => HelixFlag::Start,
            (false, true) => HelixFlag::End,
            (false, false) => HelixFlag::None,
        };
    }

    // a residue that starts a turn right after the previous residue also started one is
    // interior to the run, not merely a boundary
    for i in 1..n {
        if turn[i - 1] && turn[i] {
            flags[i] = HelixFlag::Middle;
        }
    }

    flags
}

/// Runs of ≥ `min_pp_stretch` consecutive PPII-eligible residues become PPII helix flags.
pub fn ppii_flags(residues: &[ProteinResidue], min_pp_stretch: usize) -> Vec<HelixFlag> {
    let n = residues.len();
    let eligible: Vec<bool> = residues.iter().map(is_ppii_eligible).collect();
    let mut flags = vec![HelixFlag::None; n];

    let mut i = 0;
    while i < n {
        if !eligible[i] {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && eligible[i] {
            i += 1;
        }
        let end = i; // exclusive
        let run_len = end - start;
        if run_len >= min_pp_stretch {
            for k in start..end {
                flags[k] = if run_len == 1 {
                    HelixFlag::StartAndEnd
                } else if k == start {
                    HelixFlag::Start
                } else if k == end - 1 {
                    HelixFlag::End
                } else {
                    HelixFlag::Middle
                };
            }
        }
    }

    flags
}

/// Holds the four stride flag arrays (3, 4, 5, PPII) for the whole structure.
pub struct HelixFlags {
    pub stride3: Vec<HelixFlag>,
    pub stride4: Vec<HelixFlag>,
    pub stride5: Vec<HelixFlag>,
    pub ppii: Vec<HelixFlag>,
}

pub fn compute_helix_flags(
    residues: &[ProteinResidue],
    hbonds: &[ResidueHBonds],
    min_pp_stretch: usize,
) -> HelixFlags {
    HelixFlags {
        stride3: helix_flags_for_stride(hbonds, 3),
        stride4: helix_flags_for_stride(hbonds, 4),
        stride5: helix_flags_for_stride(hbonds, 5),
        ppii: ppii_flags(residues, min_pp_stretch),
    }
}

impl HelixFlag {
    /// true for any of `Start`, `Middle`, `End`, `StartAndEnd`
    pub fn is_participating(&self) -> bool {
        !matches!(self, HelixFlag::None)
    }

    pub fn is_middle(&self) -> bool {
        matches!(self, HelixFlag::Middle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hbonds_with_donor(n: usize, donor: usize, acceptor: usize) -> Vec<ResidueHBonds> {
        let mut table = vec![ResidueHBonds::default(); n];
        table[donor].donors[0] = crate::energy::HBondSlot { partner: Some(acceptor), energy: -2.0 };
        table
    }

    #[test]
    fn single_stride4_turn_marks_start_and_end_only() {
        let hbonds = hbonds_with_donor(8, 2, 6);
        let flags = helix_flags_for_stride(&hbonds, 4);
        assert_eq!(flags[2], HelixFlag::Start);
        assert_eq!(flags[6], HelixFlag::End);
        assert!(flags.iter().enumerate().all(|(i, f)| i == 2 || i == 6 || *f == HelixFlag::None));
    }

    #[test]
    fn consecutive_stride4_turns_mark_interior_residues_middle() {
        // turns at 1->5 and 2->6 make residue 2 both end-of-previous and start-of-next: Middle
        let mut table = vec![ResidueHBonds::default(); 9];
        table[1].donors[0] = crate::energy::HBondSlot { partner: Some(5), energy: -2.0 };
        table[2].donors[0] = crate::energy::HBondSlot { partner: Some(6), energy: -2.0 };
        let flags = helix_flags_for_stride(&table, 4);
        assert_eq!(flags[1], HelixFlag::Start);
        assert_eq!(flags[2], HelixFlag::Middle);
        assert_eq!(flags[5], HelixFlag::End);
        assert_eq!(flags[6], HelixFlag::End);
    }

    fn residue_at(phi: f64, psi: f64) -> ProteinResidue {
        ProteinResidue {
            index: 1,
            compound: "ALA".to_string(),
            aa_code: 'A',
            chain_id: "A".to_string(),
            auth_seq_num: 1,
            i_code: ' ',
            backbone: crate::residue::Backbone::default(),
            phi,
            psi,
            omega: crate::residue::UNDEFINED_ANGLE,
            tco: 0.0,
            kappa: crate::residue::UNDEFINED_ANGLE,
            alpha: crate::residue::UNDEFINED_ANGLE,
            accessibility: 0.0,
            ss_bridge_number: None,
            chain_break: crate::residue::ChainBreak::None,
            geometry_incomplete: false,
        }
    }

    #[test]
    fn ppii_eligibility_is_a_phi_psi_window() {
        assert!(is_ppii_eligible(&residue_at(-75.0, 145.0)));
        assert!(is_ppii_eligible(&residue_at(-75.0 - 29.0, 145.0 + 29.0)));
        assert!(!is_ppii_eligible(&residue_at(-75.0 - 30.0, 145.0)));
        assert!(!is_ppii_eligible(&residue_at(crate::residue::UNDEFINED_ANGLE, 145.0)));
    }

    #[test]
    fn ppii_flags_only_fire_for_runs_at_least_min_pp_stretch_long() {
        let residues = vec![
            residue_at(-75.0, 145.0),
            residue_at(-75.0, 145.0),
            residue_at(0.0, 0.0), // not eligible
            residue_at(-75.0, 145.0),
        ];
        let flags = ppii_flags(&residues, 3);
        assert_eq!(flags[0], HelixFlag::None);
        assert_eq!(flags[1], HelixFlag::None);
        assert_eq!(flags[3], HelixFlag::None);

        let flags2 = ppii_flags(&residues, 2);
        assert_eq!(flags2[0], HelixFlag::Start);
        assert_eq!(flags2[1], HelixFlag::End);
    }

    #[test]
    fn helix_flag_participation_and_middle_predicates() {
        assert!(!HelixFlag::None.is_participating());
        assert!(HelixFlag::Start.is_participating());
        assert!(HelixFlag::Middle.is_participating());
        assert!(HelixFlag::End.is_participating());
        assert!(HelixFlag::StartAndEnd.is_participating());

        assert!(HelixFlag::Middle.is_middle());
        assert!(!HelixFlag::Start.is_middle());
        assert!(!HelixFlag::StartAndEnd.is_middle());
    }
}
