//! Per-residue geometry: backbone atoms, dihedrals, bend angle and chirality.

use bioshell_pdb::calc::{dihedral_angle4, planar_angle3, Vec3};
use bioshell_pdb::{PdbAtom, ResidueId, Structure};
use log::warn;

/// Sentinel value used for any dihedral, bend or chirality angle that cannot be computed
/// because a required neighbour or atom is missing. Propagated unchanged through every
/// downstream consumer, exactly as classic DSSP does.
pub const UNDEFINED_ANGLE: f64 = 360.0;

/// Classifies how a residue is connected to the previous one in engine order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChainBreak {
    /// directly bonded to the previous residue
    None,
    /// same chain, but the author numbering is not contiguous
    Gap,
    /// first residue of a new chain
    NewChain,
}

/// Backbone atoms of a single protein residue, as found (or reconstructed) by the engine.
#[derive(Clone, Debug, Default)]
pub struct Backbone {
    pub n: Option<Vec3>,
    pub ca: Option<Vec3>,
    pub c: Option<Vec3>,
    pub o: Option<Vec3>,
    /// amide hydrogen; either read from the input or reconstructed, see [`crate::energy`]
    pub h: Option<Vec3>,
}

/// A single protein residue in engine order, with its geometry already resolved.
///
/// This is the CORE's own residue record: it borrows nothing from
/// [`Structure`](bioshell_pdb::Structure) beyond plain data copied out of it, so it can be
/// addressed purely by its `index` for the lifetime of a [`crate::Dssp`] engine run.
#[derive(Clone, Debug)]
pub struct ProteinResidue {
    /// 1-based, contiguous across the whole model
    pub index: usize,
    /// three-letter compound code, e.g. `"ALA"`
    pub compound: String,
    /// single-letter amino-acid code, or `'X'` if unknown
    pub aa_code: char,
    /// author chain identifier
    pub chain_id: String,
    /// author sequence number
    pub auth_seq_num: i32,
    /// PDB insertion code (`' '` if none)
    pub i_code: char,
    pub backbone: Backbone,
    pub phi: f64,
    pub psi: f64,
    pub omega: f64,
    pub tco: f64,
    pub kappa: f64,
    pub alpha: f64,
    /// solvent-accessible surface, in Å², as supplied by the structure layer; `0.0` when unknown
    pub accessibility: f64,
    /// 1-based disulphide bridge number, assigned by [`crate::disulphide`]
    pub ss_bridge_number: Option<u32>,
    pub chain_break: ChainBreak,
    /// true if this residue lacks the backbone atoms the engine requires (a geometry-missing error)
    pub geometry_incomplete: bool,
}

impl ProteinResidue {
    pub fn bend_angle_ok(&self) -> bool {
        !self.geometry_incomplete
    }

    /// Cα position, if present.
    pub fn ca(&self) -> Option<Vec3> {
        self.backbone.ca
    }

    pub fn is_proline(&self) -> bool {
        self.compound == "PRO"
    }
}

fn atom_pos(structure: &Structure, res_id: &ResidueId, atom_name: &str) -> Option<Vec3> {
    structure
        .residue_atoms(res_id)
        .into_iter()
        .find(|a| a.name.trim() == atom_name)
        .map(|a: &PdbAtom| a.pos)
}

/// Extracts the ordered sequence of [`ProteinResidue`]s from a structure adapter.
///
/// Residue order is defined explicitly: chain order (the order in
/// which chains first appear among the structure's atoms), then ascending
/// `(auth_seq_num, insertion_code)` within a chain. Sequential indices 1..N are assigned in that
/// order; chain breaks are recorded via [`ChainBreak`] rather than by skipping indices.
pub fn extract_residues(structure: &Structure) -> Vec<ProteinResidue> {
    let res_ids = structure.residue_ids();
    let mut residues = Vec::with_capacity(res_ids.len());

    let mut prev_chain: Option<String> = None;
    let mut prev_seq: Option<i32> = None;

    for (pos, res_id) in res_ids.iter().enumerate() {
        let res_type = structure.residue_type(res_id);
        let (compound, aa_code) = match &res_type {
            Ok(rt) => (rt.code3.clone(), code1_for(&rt.code3)),
            Err(_) => {
                let compound = structure
                    .residue_atoms(res_id)
                    .first()
                    .map(|a| a.res_name.clone())
                    .unwrap_or_else(|| "UNK".to_string());
                (compound, 'X')
            }
        };

        let chain_break = match &prev_chain {
            None => ChainBreak::NewChain,
            Some(c) if c != &res_id.chain_id => ChainBreak::NewChain,
            Some(_) => {
                if prev_seq == Some(res_id.res_seq - 1) {
                    ChainBreak::None
                } else {
                    ChainBreak::Gap
                }
            }
        };
        prev_chain = Some(res_id.chain_id.clone());
        prev_seq = Some(res_id.res_seq);

        let n = atom_pos(structure, res_id, "N");
        let ca = atom_pos(structure, res_id, "CA");
        let c = atom_pos(structure, res_id, "C");
        let o = atom_pos(structure, res_id, "O");
        let h = atom_pos(structure, res_id, "H");

        let geometry_incomplete = ca.is_none() || n.is_none() || c.is_none() || o.is_none();
        if geometry_incomplete {
            warn!(
                "residue {}{}{} is missing backbone atoms required for DSSP geometry; \
                 dihedrals are set to the undefined sentinel and it is skipped for H-bonding",
                res_id.chain_id, res_id.res_seq, res_id.i_code
            );
        }

        residues.push(ProteinResidue {
            index: pos + 1,
            compound,
            aa_code,
            chain_id: res_id.chain_id.clone(),
            auth_seq_num: res_id.res_seq,
            i_code: res_id.i_code,
            backbone: Backbone { n, ca, c, o, h },
            phi: UNDEFINED_ANGLE,
            psi: UNDEFINED_ANGLE,
            omega: UNDEFINED_ANGLE,
            tco: 0.0,
            kappa: UNDEFINED_ANGLE,
            alpha: UNDEFINED_ANGLE,
            accessibility: 0.0,
            ss_bridge_number: None,
            chain_break,
            geometry_incomplete,
        });
    }

    compute_geometry(&mut residues);
    residues
}

fn code1_for(code3: &str) -> char {
    use bioshell_seq::chemical::{ResidueTypeProperties, StandardResidueType};
    for srt in StandardResidueType::TYPES {
        if srt.code3() == code3 {
            return srt.code1();
        }
    }
    'X'
}

/// same chain and contiguous author numbering, i.e. a genuine covalent neighbour
fn is_bonded_neighbor(a: &ProteinResidue, b: &ProteinResidue) -> bool {
    a.chain_id == b.chain_id && b.auth_seq_num == a.auth_seq_num + 1
}

/// Fills in φ, ψ, ω, τ, κ, α for every residue, given its already-extracted backbone atoms.
fn compute_geometry(residues: &mut [ProteinResidue]) {
    let n = residues.len();
    for i in 0..n {
        let has_prev = i > 0 && is_bonded_neighbor(&residues[i - 1], &residues[i]);
        let has_next = i + 1 < n && is_bonded_neighbor(&residues[i], &residues[i + 1]);

        // phi: C(i-1), N(i), CA(i), C(i)
        if has_prev {
            if let (Some(c_prev), Some(n_i), Some(ca_i), Some(c_i)) = (
                residues[i - 1].backbone.c,
                residues[i].backbone.n,
                residues[i].backbone.ca,
                residues[i].backbone.c,
            ) {
                residues[i].phi = dihedral_angle4(&c_prev, &n_i, &ca_i, &c_i).to_degrees();
            }
        }

        // psi: N(i), CA(i), C(i), N(i+1)
        if has_next {
            if let (Some(n_i), Some(ca_i), Some(c_i), Some(n_next)) = (
                residues[i].backbone.n,
                residues[i].backbone.ca,
                residues[i].backbone.c,
                residues[i + 1].backbone.n,
            ) {
                residues[i].psi = dihedral_angle4(&n_i, &ca_i, &c_i, &n_next).to_degrees();
            }
        }

        // omega: CA(i-1), C(i-1), N(i), CA(i)
        if has_prev {
            if let (Some(ca_prev), Some(c_prev), Some(n_i), Some(ca_i)) = (
                residues[i - 1].backbone.ca,
                residues[i - 1].backbone.c,
                residues[i].backbone.n,
                residues[i].backbone.ca,
            ) {
                residues[i].omega = dihedral_angle4(&ca_prev, &c_prev, &n_i, &ca_i).to_degrees();
            }
        }

        // tco: cos of angle between C=O vectors of i and i-1
        if has_prev {
            if let (Some(c_i), Some(o_i), Some(c_prev), Some(o_prev)) = (
                residues[i].backbone.c,
                residues[i].backbone.o,
                residues[i - 1].backbone.c,
                residues[i - 1].backbone.o,
            ) {
                let v_i = Vec3::sub_s(&o_i, &c_i);
                let v_prev = Vec3::sub_s(&o_prev, &c_prev);
                let cos_angle = Vec3::dot(&v_i, &v_prev) / (v_i.length() * v_prev.length());
                residues[i].tco = cos_angle;
            }
        }

        // kappa: angle(CA(i-2)-CA(i), CA(i)-CA(i+2))
        let has_prev2 = i >= 2
            && is_bonded_neighbor(&residues[i - 2], &residues[i - 1])
            && is_bonded_neighbor(&residues[i - 1], &residues[i]);
        let has_next2 = i + 2 < n
            && is_bonded_neighbor(&residues[i], &residues[i + 1])
            && is_bonded_neighbor(&residues[i + 1], &residues[i + 2]);
        if has_prev2 && has_next2 {
            if let (Some(ca_m2), Some(ca_0), Some(ca_p2)) = (
                residues[i - 2].backbone.ca,
                residues[i].backbone.ca,
                residues[i + 2].backbone.ca,
            ) {
                residues[i].kappa = planar_angle3(&ca_m2, &ca_0, &ca_p2).to_degrees();
            }
        }

        // alpha: dihedral(CA(i-1), CA(i), CA(i+1), CA(i+2))
        let has_prev1 = i >= 1 && is_bonded_neighbor(&residues[i - 1], &residues[i]);
        let has_next1 = i + 1 < n && is_bonded_neighbor(&residues[i], &residues[i + 1]);
        let has_next2b = i + 2 < n
            && is_bonded_neighbor(&residues[i], &residues[i + 1])
            && is_bonded_neighbor(&residues[i + 1], &residues[i + 2]);
        if has_prev1 && has_next1 && has_next2b {
            if let (Some(ca_m1), Some(ca_0), Some(ca_p1), Some(ca_p2)) = (
                residues[i - 1].backbone.ca,
                residues[i].backbone.ca,
                residues[i + 1].backbone.ca,
                residues[i + 2].backbone.ca,
            ) {
                residues[i].alpha = dihedral_angle4(&ca_m1, &ca_0, &ca_p1, &ca_p2).to_degrees();
            }
        }
    }
}

/// Chirality character derived from α: '-' negative, '+' positive, ' ' undefined.
pub fn chirality_char(alpha: f64) -> char {
    if alpha == UNDEFINED_ANGLE {
        ' '
    } else if alpha < 0.0 {
        '-'
    } else {
        '+'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atom(name: &str, chain_id: &str, res_seq: i32, pos: Vec3) -> PdbAtom {
        let mut a = PdbAtom::new();
        a.name = format!("{:^4}", name);
        a.res_name = "ALA".to_string();
        a.chain_id = chain_id.to_string();
        a.res_seq = res_seq;
        a.pos = pos;
        a
    }

    #[test]
    fn chirality_char_follows_alpha_sign() {
        assert_eq!(chirality_char(UNDEFINED_ANGLE), ' ');
        assert_eq!(chirality_char(-30.0), '-');
        assert_eq!(chirality_char(30.0), '+');
    }

    #[test]
    fn ca_only_residue_is_geometry_incomplete() {
        let atoms = vec![atom("CA", "A", 1, Vec3::new(0.0, 0.0, 0.0))];
        let strctr = Structure::from_iterator(atoms.iter());
        let residues = extract_residues(&strctr);
        assert_eq!(residues.len(), 1);
        assert!(residues[0].geometry_incomplete);
        assert!(!residues[0].bend_angle_ok());
        assert_eq!(residues[0].phi, UNDEFINED_ANGLE);
    }

    #[test]
    fn full_backbone_residue_is_geometry_complete() {
        let atoms = vec![
            atom("N", "A", 1, Vec3::new(0.0, 0.0, 0.0)),
            atom("CA", "A", 1, Vec3::new(1.0, 0.0, 0.0)),
            atom("C", "A", 1, Vec3::new(1.5, 1.0, 0.0)),
            atom("O", "A", 1, Vec3::new(2.5, 1.0, 0.0)),
        ];
        let strctr = Structure::from_iterator(atoms.iter());
        let residues = extract_residues(&strctr);
        assert_eq!(residues.len(), 1);
        assert!(!residues[0].geometry_incomplete);
        assert!(residues[0].bend_angle_ok());
    }

    #[test]
    fn chain_break_marks_new_chain_and_gap() {
        let atoms = vec![
            atom("CA", "A", 1, Vec3::new(0.0, 0.0, 0.0)),
            atom("CA", "A", 3, Vec3::new(1.0, 0.0, 0.0)),
            atom("CA", "B", 1, Vec3::new(2.0, 0.0, 0.0)),
        ];
        let strctr = Structure::from_iterator(atoms.iter());
        let residues = extract_residues(&strctr);
        assert_eq!(residues.len(), 3);
        assert_eq!(residues[0].chain_break, ChainBreak::NewChain);
        assert_eq!(residues[1].chain_break, ChainBreak::Gap);
        assert_eq!(residues[2].chain_break, ChainBreak::NewChain);
    }
}
