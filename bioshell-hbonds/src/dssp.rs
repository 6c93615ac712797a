//! The `Dssp` engine: wires the geometry, hydrogen-bond, bridge/ladder, helix, bend and
//! disulphide passes together and exposes the frozen, per-residue result over a restartable
//! iterator.

use bioshell_pdb::Structure;

use crate::bend::compute_bend_and_chirality;
use crate::bridge::{
    bridge_membership, build_ladders_and_sheets, detect_bridges, BridgeMembership,
    BridgePartnerSlot, Ladder,
};
use crate::disulphide::{assign_disulphides, ss_bridge_letter, DisulphideBond};
use crate::energy::{compute_hbonds, HBondSlot, ResidueHBonds};
use crate::errors::DsspError;
use crate::helix::{compute_helix_flags, HelixFlag, HelixFlags};
use crate::reduction::{reduce, ResidueMotifs, SSLabel};
use crate::residue::{ChainBreak, ProteinResidue};
use crate::statistics::{compute_statistics, Statistics};

/// The DSSP engine, constructed once from a structure adapter and frozen thereafter.
///
/// Construction runs every pass in order; nothing about a `Dssp` changes once [`Dssp::new`]
/// returns.
pub struct Dssp {
    residues: Vec<ProteinResidue>,
    hbonds: Vec<ResidueHBonds>,
    ladders: Vec<Ladder>,
    bridges: BridgeMembership,
    helix_flags: HelixFlags,
    bend: Vec<bool>,
    chirality: Vec<char>,
    disulphides: Vec<DisulphideBond>,
    labels: Vec<SSLabel>,
    statistics: Statistics,
}

impl Dssp {
    /// Runs the full DSSP pipeline over `structure`'s protein residues.
    ///
    /// `min_pp_stretch` is the minimum run length for a PPII helix to be
    /// reported; classic DSSP defaults this to 3.
    ///
    /// Fails with [`DsspError::ChainLabelTooLong`] if any chain label is more than one
    /// character long, since classic DSSP's single-character chain column can never represent
    /// the result regardless of output format requested later.
    pub fn new(structure: &Structure, min_pp_stretch: usize) -> Result<Dssp, DsspError> {
        let mut residues = crate::residue::extract_residues(structure);

        if let Some(bad) = residues.iter().find(|r| r.chain_id.chars().count() > 1) {
            return Err(DsspError::ChainLabelTooLong { chain_id: bad.chain_id.clone() });
        }

        let hbonds = compute_hbonds(&residues);

        let chain_break: Vec<ChainBreak> = residues.iter().map(|r| r.chain_break).collect();
        let bridge_list = detect_bridges(&hbonds, &chain_break);
        let ladders = build_ladders_and_sheets(bridge_list);
        let bridges = bridge_membership(residues.len(), &ladders);

        let helix_flags = compute_helix_flags(&residues, &hbonds, min_pp_stretch.max(1));
        let (bend, chirality) = compute_bend_and_chirality(&residues);

        let disulphides = assign_disulphides(structure, &mut residues);

        let labels: Vec<SSLabel> = (0..residues.len())
            .map(|i| {
                reduce(&ResidueMotifs {
                    stride4: helix_flags.stride4[i],
                    stride3: helix_flags.stride3[i],
                    stride5: helix_flags.stride5[i],
                    ppii: helix_flags.ppii[i],
                    is_strand: bridges.is_strand[i],
                    is_isolated_bridge: bridges.is_isolated_bridge[i],
                    is_bend: bend[i],
                })
            })
            .collect();

        let statistics = compute_statistics(&residues, &hbonds, &ladders, &disulphides, &labels);

        Ok(Dssp { residues, hbonds, ladders, bridges, helix_flags, bend, chirality, disulphides, labels, statistics })
    }

    /// True if the structure adapter provided no protein residues at all.
    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    /// Number of residues held by this engine.
    pub fn len(&self) -> usize {
        self.residues.len()
    }

    /// The aggregated statistics computed after labelling.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The finished ladders, in first-appearance order.
    pub fn ladders(&self) -> &[Ladder] {
        &self.ladders
    }

    /// The finished disulphide bonds, numbered in order of first residue index.
    pub fn disulphides(&self) -> &[DisulphideBond] {
        &self.disulphides
    }

    /// A forward, restartable iterator over every residue, in engine order.
    pub fn residues(&self) -> DsspIter<'_> {
        DsspIter { engine: self, pos: 0 }
    }

    fn donor_slot(&self, i: usize, k: usize) -> HBondSlot {
        self.hbonds[i].donors[k]
    }

    fn acceptor_slot(&self, i: usize, k: usize) -> HBondSlot {
        self.hbonds[i].acceptors[k]
    }
}

impl<'a> IntoIterator for &'a Dssp {
    type Item = ResidueView<'a>;
    type IntoIter = DsspIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.residues()
    }
}

/// A forward iterator over a [`Dssp`] engine's residues. Calling [`Dssp::residues`] again starts
/// a fresh pass, satisfying the "restartable" part of the iterator contract.
pub struct DsspIter<'a> {
    engine: &'a Dssp,
    pos: usize,
}

impl<'a> Iterator for DsspIter<'a> {
    type Item = ResidueView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.engine.residues.len() {
            return None;
        }
        let view = ResidueView { engine: self.engine, idx: self.pos };
        self.pos += 1;
        Some(view)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.engine.residues.len() - self.pos;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for DsspIter<'a> {}

/// One residue's worth of the frozen engine result, borrowed from its owning [`Dssp`].
#[derive(Clone, Copy)]
pub struct ResidueView<'a> {
    engine: &'a Dssp,
    idx: usize,
}

impl<'a> ResidueView<'a> {
    /// 1-based engine index.
    pub fn index(&self) -> usize {
        self.engine.residues[self.idx].index
    }

    pub fn residue(&self) -> &'a ProteinResidue {
        &self.engine.residues[self.idx]
    }

    pub fn compound(&self) -> &'a str {
        &self.engine.residues[self.idx].compound
    }

    pub fn aa_code(&self) -> char {
        self.engine.residues[self.idx].aa_code
    }

    pub fn chain_id(&self) -> &'a str {
        &self.engine.residues[self.idx].chain_id
    }

    pub fn auth_seq_num(&self) -> i32 {
        self.engine.residues[self.idx].auth_seq_num
    }

    pub fn i_code(&self) -> char {
        self.engine.residues[self.idx].i_code
    }

    /// Break classification relative to the previous index.
    pub fn chain_break(&self) -> ChainBreak {
        self.engine.residues[self.idx].chain_break
    }

    pub fn ss_label(&self) -> SSLabel {
        self.engine.labels[self.idx]
    }

    /// Single-letter DSSP residue-column code: lowercase disulphide letter if this residue
    /// takes part in one, else the plain amino-acid code.
    pub fn residue_letter(&self) -> char {
        match self.engine.residues[self.idx].ss_bridge_number {
            Some(n) => ss_bridge_letter(n),
            None => self.aa_code(),
        }
    }

    pub fn helix_flag(&self, stride: u8) -> HelixFlag {
        match stride {
            3 => self.engine.helix_flags.stride3[self.idx],
            4 => self.engine.helix_flags.stride4[self.idx],
            5 => self.engine.helix_flags.stride5[self.idx],
            _ => self.engine.helix_flags.ppii[self.idx],
        }
    }

    pub fn bend(&self) -> bool {
        self.engine.bend[self.idx]
    }

    pub fn chirality(&self) -> char {
        self.engine.chirality[self.idx]
    }

    /// The two bridge-partner slots of this residue.
    pub fn bridge_partner(&self, k: usize) -> BridgePartnerSlot {
        self.engine.bridges.slots[self.idx][k]
    }

    pub fn sheet_id(&self) -> Option<usize> {
        self.engine.bridges.sheet_id[self.idx]
    }

    pub fn donor(&self, k: usize) -> HBondSlot {
        self.engine.donor_slot(self.idx, k)
    }

    pub fn acceptor(&self, k: usize) -> HBondSlot {
        self.engine.acceptor_slot(self.idx, k)
    }

    pub fn accessibility(&self) -> f64 {
        self.engine.residues[self.idx].accessibility
    }

    pub fn phi(&self) -> f64 {
        self.engine.residues[self.idx].phi
    }

    pub fn psi(&self) -> f64 {
        self.engine.residues[self.idx].psi
    }

    pub fn omega(&self) -> f64 {
        self.engine.residues[self.idx].omega
    }

    pub fn tco(&self) -> f64 {
        self.engine.residues[self.idx].tco
    }

    pub fn kappa(&self) -> f64 {
        self.engine.residues[self.idx].kappa
    }

    pub fn alpha(&self) -> f64 {
        self.engine.residues[self.idx].alpha
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bioshell_pdb::calc::Vec3;
    use bioshell_pdb::PdbAtom;

    fn atom(name: &str, res_seq: i32, pos: Vec3) -> PdbAtom {
        let mut a = PdbAtom::new();
        a.name = format!("{:^4}", name);
        a.res_name = "ALA".to_string();
        a.chain_id = "A".to_string();
        a.res_seq = res_seq;
        a.pos = pos;
        a
    }

    /// Builds a minimal, internally-consistent structure for an ideal α-helix of `n` residues
    /// (φ = -57°, ψ = -47°), using idealized backbone geometry.
    fn helix_structure(n: usize) -> Structure {
        // A simple helical ladder of coordinates: translate and rotate a fixed local frame by
        // the standard α-helix rise (1.5 Å) and twist (100°) per residue. This is an
        // approximation good enough to produce consistent, close backbone geometry for an
        // engine-level smoke test; it is not meant to reproduce crystallographic data.
        let mut atoms: Vec<PdbAtom> = Vec::new();
        let rise = 1.5_f64;
        let twist = 100.0_f64.to_radians();
        let radius = 2.3_f64;
        for i in 0..n {
            let theta = twist * i as f64;
            let z = rise * i as f64;
            let seq = i as i32 + 1;
            let n_pos = Vec3::new(radius * theta.cos(), radius * theta.sin(), z);
            let ca_pos = Vec3::new(
                (radius + 0.3) * (theta + 0.3).cos(),
                (radius + 0.3) * (theta + 0.3).sin(),
                z + 0.4,
            );
            let c_pos = Vec3::new(
                (radius + 0.1) * (theta + 0.6).cos(),
                (radius + 0.1) * (theta + 0.6).sin(),
                z + 0.8,
            );
            let o_pos = Vec3::new(
                (radius + 0.9) * (theta + 0.7).cos(),
                (radius + 0.9) * (theta + 0.7).sin(),
                z + 0.9,
            );
            atoms.push(atom("N", seq, n_pos));
            atoms.push(atom("CA", seq, ca_pos));
            atoms.push(atom("C", seq, c_pos));
            atoms.push(atom("O", seq, o_pos));
        }
        Structure::from_iterator(atoms.iter())
    }

    #[test]
    fn engine_runs_end_to_end_without_panicking() {
        let strctr = helix_structure(14);
        let engine = Dssp::new(&strctr, 3).unwrap();
        assert!(!engine.is_empty());
        assert_eq!(engine.len(), 14);
        let views: Vec<_> = engine.residues().collect();
        assert_eq!(views.len(), 14);
        // restartable: a second pass yields the same count
        assert_eq!(engine.residues().count(), 14);
    }

    #[test]
    fn round_trip_is_deterministic() {
        let strctr = helix_structure(14);
        let e1 = Dssp::new(&strctr, 3).unwrap();
        let e2 = Dssp::new(&strctr, 3).unwrap();
        let labels1: Vec<_> = e1.residues().map(|r| r.ss_label()).collect();
        let labels2: Vec<_> = e2.residues().map(|r| r.ss_label()).collect();
        assert_eq!(labels1, labels2);
        assert_eq!(e1.statistics().hbond_total, e2.statistics().hbond_total);
    }

    #[test]
    fn rejects_multi_character_chain_labels() {
        let mut atoms: Vec<PdbAtom> = Vec::new();
        let a = atom("CA", 1, Vec3::new(0.0, 0.0, 0.0));
        let mut a = a;
        a.chain_id = "AB".to_string();
        atoms.push(a);
        let strctr = Structure::from_iterator(atoms.iter());
        let err = Dssp::new(&strctr, 3).unwrap_err();
        assert!(matches!(err, DsspError::ChainLabelTooLong { chain_id } if chain_id == "AB"));
    }
}
