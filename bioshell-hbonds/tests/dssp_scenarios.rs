//! Concrete end-to-end scenarios for the DSSP engine, one test per scenario named in the
//! engine's testable-properties section (S1-S6). Scenarios that hinge on exact backbone
//! coordinates producing specific dihedrals (S1-S3) are exercised at the level of the engine's
//! own mid-level, geometry-independent state (hydrogen bonds, bridges, φ/ψ values) rather than
//! through hand-built Cartesian coordinates, since the dihedral formulas themselves are already
//! covered by `residue.rs`'s unit tests. S4 and S6 go through the full [`Dssp`] engine, since
//! disulphide numbering and geometry-incomplete handling need no exact dihedral geometry.

use bioshell_hbonds::{
    bridge_membership, build_ladders_and_sheets, compute_helix_flags, compute_statistics,
    reduce, Backbone, Bridge, BridgeType, ChainBreak, Dssp, HBondSlot, ProteinResidue,
    ResidueHBonds, ResidueMotifs, SSLabel, UNDEFINED_ANGLE,
};
use bioshell_pdb::calc::Vec3;
use bioshell_pdb::PdbAtom;
use bioshell_pdb::Structure;

fn placeholder_residue(index: usize, phi: f64, psi: f64) -> ProteinResidue {
    ProteinResidue {
        index,
        compound: "ALA".to_string(),
        aa_code: 'A',
        chain_id: "A".to_string(),
        auth_seq_num: index as i32,
        i_code: ' ',
        backbone: Backbone::default(),
        phi,
        psi,
        omega: UNDEFINED_ANGLE,
        tco: 0.0,
        kappa: UNDEFINED_ANGLE,
        alpha: UNDEFINED_ANGLE,
        accessibility: 0.0,
        ss_bridge_number: None,
        chain_break: if index == 1 { ChainBreak::NewChain } else { ChainBreak::None },
        geometry_incomplete: false,
    }
}

fn no_motifs() -> ResidueMotifs {
    ResidueMotifs {
        stride4: bioshell_hbonds::HelixFlag::None,
        stride3: bioshell_hbonds::HelixFlag::None,
        stride5: bioshell_hbonds::HelixFlag::None,
        ppii: bioshell_hbonds::HelixFlag::None,
        is_strand: false,
        is_isolated_bridge: false,
        is_bend: false,
    }
}

/// S1: an ideal α-helix, 14 residues, with a stride-4 H-bond turn `i -> i+4` for every `i` that
/// has a valid acceptor (`i` in `0..=9`, 0-based). Every residue genuinely interior to two
/// consecutive turns (i.e. flagged `Middle`) is labelled `H`. Residue 0 only starts the first
/// turn, so it is bracketed (`T`); residues 10-13 only receive the end of a turn (`i-4` started
/// one, but they never start one of their own), so they are bracketed too, per this engine's
/// explicit (and documented, see DESIGN.md) resolution of the stride/PPII ambiguity the
/// specification flags.
#[test]
fn s1_ideal_alpha_helix_labels_interior_residues_h() {
    let n = 14;
    let residues: Vec<_> = (0..n).map(|i| placeholder_residue(i + 1, UNDEFINED_ANGLE, UNDEFINED_ANGLE)).collect();

    let mut hbonds = vec![ResidueHBonds::default(); n];
    for i in 0..=9 {
        hbonds[i].donors[0] = HBondSlot { partner: Some(i + 4), energy: -2.5 };
    }

    let flags = compute_helix_flags(&residues, &hbonds, 3);

    let labels: Vec<SSLabel> = (0..n)
        .map(|i| {
            let mut m = no_motifs();
            m.stride4 = flags.stride4[i];
            reduce(&m)
        })
        .collect();

    assert_eq!(labels[0], SSLabel::Turn, "turn start is bracketed, not interior");
    for i in 1..=9 {
        assert_eq!(labels[i], SSLabel::AlphaHelix, "residue {} should be interior H", i + 1);
    }
    for i in 10..14 {
        assert_eq!(labels[i], SSLabel::Turn, "residue {} only ends a turn, it never starts one", i + 1);
    }

    let stats = compute_statistics(&residues, &hbonds, &[], &[], &labels);
    // the single 9-residue alpha-helix run is tallied in bucket 9
    assert_eq!(stats.residues_per_alpha_helix[8], 1);
}

/// S2: two antiparallel strands of 5 residues each (0-based indices `0..5` and `9..14`), bonded
/// edge to edge. Expect one antiparallel ladder of length 5, one sheet, and every strand residue
/// labelled E with a symmetric bridge partner.
#[test]
fn s2_antiparallel_hairpin_forms_one_ladder_one_sheet() {
    let bridges = vec![
        Bridge { i: 0, j: 13, kind: BridgeType::Antiparallel },
        Bridge { i: 1, j: 12, kind: BridgeType::Antiparallel },
        Bridge { i: 2, j: 11, kind: BridgeType::Antiparallel },
        Bridge { i: 3, j: 10, kind: BridgeType::Antiparallel },
        Bridge { i: 4, j: 9, kind: BridgeType::Antiparallel },
    ];

    let ladders = build_ladders_and_sheets(bridges);
    assert_eq!(ladders.len(), 1, "all five bridges co-extend into a single ladder");
    assert_eq!(ladders[0].bridge_count(), 5);
    assert_eq!(ladders[0].kind, BridgeType::Antiparallel);

    let membership = bridge_membership(14, &ladders);
    for residue in [0usize, 1, 2, 3, 4, 9, 10, 11, 12, 13] {
        assert!(membership.is_strand[residue], "residue {} is part of the 5-long ladder", residue);
        assert_eq!(membership.sheet_id[residue], Some(1));
    }

    let partner_of_0 = membership.slots[0][0].partner;
    assert_eq!(partner_of_0, Some(13));
    let partner_of_13 = membership.slots[13][0].partner;
    assert_eq!(partner_of_13, Some(0), "bridge partnership is symmetric");

    let labels: Vec<SSLabel> = (0..14)
        .map(|i| {
            let mut m = no_motifs();
            m.is_strand = membership.is_strand[i];
            reduce(&m)
        })
        .collect();
    for residue in [0usize, 1, 2, 3, 4, 9, 10, 11, 12, 13] {
        assert_eq!(labels[residue], SSLabel::Strand);
    }
}

/// S3: a parallel β-sheet of two 4-residue strands. A 4-long parallel strand pairing produces a
/// ladder of 3 bridges (the diagonal has `strand_length - 1` rungs); expect one ladder, one
/// sheet, bridge count 3.
#[test]
fn s3_parallel_sheet_ladder_has_strand_length_minus_one_bridges() {
    let bridges = vec![
        Bridge { i: 0, j: 20, kind: BridgeType::Parallel },
        Bridge { i: 1, j: 21, kind: BridgeType::Parallel },
        Bridge { i: 2, j: 22, kind: BridgeType::Parallel },
    ];

    let ladders = build_ladders_and_sheets(bridges);
    assert_eq!(ladders.len(), 1);
    assert_eq!(ladders[0].bridge_count(), 3, "strand_length(4) - 1 = 3 connecting bridges");
    assert_eq!(ladders[0].kind, BridgeType::Parallel);

    let membership = bridge_membership(23, &ladders);
    assert_eq!(membership.sheet_id[0], Some(1));
    assert_eq!(membership.sheet_id[22], Some(1));
    let max_sheet = ladders.iter().map(|l| l.sheet_id).max().unwrap();
    assert_eq!(max_sheet, 1, "a single connected ladder is a single sheet");
}

/// S4: two disulphide-bonded cysteines with Sγ-Sγ distance 2.05 Å. Both must get the same dense
/// SS-bridge number, and the bond must be reported intra-chain since both residues share a chain.
#[test]
fn s4_disulphide_bonded_cysteines_share_one_ss_bridge_number() {
    fn atom(name: &str, res_seq: i32, res_name: &str, pos: Vec3) -> PdbAtom {
        let mut a = PdbAtom::new();
        a.name = format!("{:^4}", name);
        a.res_name = res_name.to_string();
        a.chain_id = "A".to_string();
        a.res_seq = res_seq;
        a.pos = pos;
        a
    }

    let mut atoms: Vec<PdbAtom> = Vec::new();
    for seq in 1..=10 {
        let res_name = if seq == 3 || seq == 7 { "CYS" } else { "ALA" };
        atoms.push(atom("CA", seq, res_name, Vec3::new(seq as f64 * 3.8, 0.0, 0.0)));
        if res_name == "CYS" {
            // placed far from this residue's own CA; disulphide detection only looks at the
            // Sγ-Sγ distance between the two cysteines, not at their own backbone geometry
            let sg_y = if seq == 3 { 0.0 } else { 2.05 };
            atoms.push(atom("SG", seq, res_name, Vec3::new(100.0, sg_y, 0.0)));
        }
    }
    let strctr = Structure::from_iterator(atoms.iter());

    let engine = Dssp::new(&strctr, 3).unwrap();
    assert_eq!(engine.disulphides().len(), 1);
    let bond = engine.disulphides()[0];

    let views: Vec<_> = engine.residues().collect();
    assert_eq!(views[bond.first].chain_id(), views[bond.second].chain_id(), "both ends share chain A");
    assert_eq!(views[bond.first].residue_letter(), 'a');
    assert_eq!(views[bond.second].residue_letter(), 'a');
}

/// S5: a run of 5 consecutive PPII-eligible residues (φ=-75°, ψ=145°). With `min_pp_stretch =
/// 3` the whole run is labelled P; with `min_pp_stretch = 6` the run is one residue short and
/// none of them are.
#[test]
fn s5_ppii_run_needs_at_least_min_pp_stretch_residues() {
    let residues: Vec<_> = (0..5).map(|i| placeholder_residue(i + 1, -75.0, 145.0)).collect();
    let hbonds = vec![ResidueHBonds::default(); 5];

    let flags3 = compute_helix_flags(&residues, &hbonds, 3);
    let labels3: Vec<SSLabel> = (0..5)
        .map(|i| {
            let mut m = no_motifs();
            m.ppii = flags3.ppii[i];
            reduce(&m)
        })
        .collect();
    assert!(labels3.iter().all(|l| *l == SSLabel::HelixPPII), "min_pp_stretch=3: all 5 residues are P");

    let flags6 = compute_helix_flags(&residues, &hbonds, 6);
    let labels6: Vec<SSLabel> = (0..5)
        .map(|i| {
            let mut m = no_motifs();
            m.ppii = flags6.ppii[i];
            reduce(&m)
        })
        .collect();
    assert!(labels6.iter().all(|l| *l == SSLabel::Loop), "min_pp_stretch=6: the 5-run is one short");
}

/// S6: four consecutive residues supply only a Cα (no N/C/O); they must get sentinel dihedrals,
/// no H-bonds, and a blank summary label, without disturbing the rest of the chain.
#[test]
fn s6_ca_only_stretch_is_geometry_incomplete_and_unlabelled() {
    fn atom(name: &str, res_seq: i32, pos: Vec3) -> PdbAtom {
        let mut a = PdbAtom::new();
        a.name = format!("{:^4}", name);
        a.res_name = "ALA".to_string();
        a.chain_id = "A".to_string();
        a.res_seq = res_seq;
        a.pos = pos;
        a
    }

    let mut atoms: Vec<PdbAtom> = Vec::new();
    // residues 1-3: full backbone
    for seq in 1..=3 {
        let z = seq as f64 * 3.8;
        atoms.push(atom("N", seq, Vec3::new(0.0, 0.0, z)));
        atoms.push(atom("CA", seq, Vec3::new(1.0, 0.0, z)));
        atoms.push(atom("C", seq, Vec3::new(1.5, 1.0, z)));
        atoms.push(atom("O", seq, Vec3::new(2.5, 1.0, z)));
    }
    // residues 4-7: Cα only
    for seq in 4..=7 {
        let z = seq as f64 * 3.8;
        atoms.push(atom("CA", seq, Vec3::new(1.0, 0.0, z)));
    }
    // residues 8-10: full backbone again
    for seq in 8..=10 {
        let z = seq as f64 * 3.8;
        atoms.push(atom("N", seq, Vec3::new(0.0, 0.0, z)));
        atoms.push(atom("CA", seq, Vec3::new(1.0, 0.0, z)));
        atoms.push(atom("C", seq, Vec3::new(1.5, 1.0, z)));
        atoms.push(atom("O", seq, Vec3::new(2.5, 1.0, z)));
    }

    let strctr = Structure::from_iterator(atoms.iter());
    let engine = Dssp::new(&strctr, 3).unwrap();
    assert_eq!(engine.len(), 10);

    let views: Vec<_> = engine.residues().collect();
    for i in 3..7 {
        assert_eq!(views[i].phi(), UNDEFINED_ANGLE, "residue {} has no dihedral geometry", i + 1);
        assert_eq!(views[i].psi(), UNDEFINED_ANGLE);
        assert_eq!(views[i].donor(0).partner, None, "a Cα-only residue can never donate");
        assert_eq!(views[i].acceptor(0).partner, None, "...nor accept");
        assert_eq!(views[i].ss_label(), SSLabel::Loop);
    }
    // the rest of the chain is unaffected: full-backbone residues still resolve real dihedrals
    assert_ne!(views[1].psi(), UNDEFINED_ANGLE);
}
