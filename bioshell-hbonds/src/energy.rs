//! The Kabsch-Sander hydrogen-bond energy model and per-residue donor/acceptor slot selection.

use bioshell_pdb::calc::Vec3;

use crate::residue::ProteinResidue;

/// Coulombic prefactor of the Kabsch-Sander electrostatic approximation (kcal/mol · Å).
const Q: f64 = -27.888;
/// An accepted H-bond energy is clamped to this minimum to avoid blow-up at tiny distances.
const MIN_ENERGY: f64 = -9.9;
/// An H-bond is only accepted when its energy is at or below this threshold.
const ENERGY_THRESHOLD: f64 = -0.5;
/// Two residues are only considered for H-bonding if their Cα-Cα distance is below this cutoff.
const CA_CUTOFF: f64 = 9.0;

/// One donor or acceptor slot: the partner residue's 0-based index and the bond energy.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct HBondSlot {
    pub partner: Option<usize>,
    pub energy: f64,
}

impl HBondSlot {
    fn empty() -> Self {
        HBondSlot { partner: None, energy: 0.0 }
    }
}

/// The two donor and two acceptor slots of a single residue, ordered by ascending energy.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResidueHBonds {
    pub donors: [HBondSlot; 2],
    pub acceptors: [HBondSlot; 2],
}

impl ResidueHBonds {
    fn new() -> Self {
        ResidueHBonds { donors: [HBondSlot::empty(); 2], acceptors: [HBondSlot::empty(); 2] }
    }

    /// True if this residue donates an H-bond to `partner` (0-based index), returning its energy.
    pub fn donates_to(&self, partner: usize) -> Option<f64> {
        self.donors.iter().find(|s| s.partner == Some(partner)).map(|s| s.energy)
    }
}

/// Reconstructs the amide hydrogen position when the input structure did not supply one.
///
/// Placed at unit distance from N, along the direction from N away from the carbonyl oxygen
/// of the previous residue.
pub fn reconstruct_hydrogen(prev_c: &Vec3, prev_o: &Vec3, n: &Vec3) -> Vec3 {
    let co = Vec3::sub_s(prev_c, prev_o);
    let direction = co.normalized();
    Vec3::new(n.x + direction.x, n.y + direction.y, n.z + direction.z)
}

/// Computes the Kabsch-Sander energy for a donor/acceptor pair given their backbone atoms.
fn ks_energy(n: &Vec3, h: &Vec3, c: &Vec3, o: &Vec3) -> f64 {
    let r_on = o.distance_to(n);
    let r_ch = c.distance_to(h);
    let r_oh = o.distance_to(h);
    let r_cn = c.distance_to(n);

    let e = Q * (1.0 / r_on + 1.0 / r_ch - 1.0 / r_oh - 1.0 / r_cn);
    e.max(MIN_ENERGY)
}

/// Resolves the amide-hydrogen position of residue `i`, reconstructing it from residue `i-1`
/// when absent. Proline never donates, so it has no hydrogen regardless of the input.
fn donor_hydrogen(residues: &[ProteinResidue], i: usize) -> Option<Vec3> {
    if residues[i].is_proline() {
        return None;
    }
    if let Some(h) = residues[i].backbone.h {
        return Some(h);
    }
    if i == 0 {
        return None;
    }
    let prev = &residues[i - 1];
    if prev.chain_id != residues[i].chain_id || prev.auth_seq_num + 1 != residues[i].auth_seq_num {
        return None;
    }
    match (prev.backbone.c, prev.backbone.o, residues[i].backbone.n) {
        (Some(c), Some(o), Some(n)) => Some(reconstruct_hydrogen(&c, &o, &n)),
        _ => None,
    }
}

/// Runs the H-bond pass over every ordered pair of residues, keeping for each residue the two
/// lowest-energy donor and two lowest-energy acceptor slots.
///
/// `residues` must be in engine order (ascending 1-based index); the returned vector is indexed
/// the same way, 0-based.
pub fn compute_hbonds(residues: &[ProteinResidue]) -> Vec<ResidueHBonds> {
    let n = residues.len();
    let mut table = vec![ResidueHBonds::new(); n];

    for i in 0..n {
        let donor_n = match residues[i].backbone.n {
            Some(n) => n,
            None => continue,
        };
        let h = match donor_hydrogen(residues, i) {
            Some(h) => h,
            None => continue,
        };
        let ca_i = match residues[i].backbone.ca {
            Some(ca) => ca,
            None => continue,
        };

        for j in 0..n {
            if i == j {
                continue;
            }
            // a residue never bonds to its immediate chain predecessor
            if residues[j].chain_id == residues[i].chain_id
                && residues[j].auth_seq_num + 1 == residues[i].auth_seq_num
            {
                continue;
            }

            let ca_j = match residues[j].backbone.ca {
                Some(ca) => ca,
                None => continue,
            };
            if ca_i.distance_to(&ca_j) >= CA_CUTOFF {
                continue;
            }

            let (c, o) = match (residues[j].backbone.c, residues[j].backbone.o) {
                (Some(c), Some(o)) => (c, o),
                _ => continue,
            };

            let e = ks_energy(&donor_n, &h, &c, &o);
            if e > ENERGY_THRESHOLD {
                continue;
            }

            insert_slot(&mut table[i].donors, j, e);
            insert_slot(&mut table[j].acceptors, i, e);
        }
    }

    table
}

/// Inserts `(partner, energy)` into a two-slot array, keeping the two lowest energies sorted
/// ascending, with no duplicate partner.
fn insert_slot(slots: &mut [HBondSlot; 2], partner: usize, energy: f64) {
    if let Some(existing) = slots.iter_mut().find(|s| s.partner == Some(partner)) {
        if energy < existing.energy {
            existing.energy = energy;
        } else {
            return;
        }
    } else if slots[1].partner.is_none() || energy < slots[1].energy {
        slots[1] = HBondSlot { partner: Some(partner), energy };
    } else {
        return;
    }

    if slots[0].partner.is_none() || slots[1].energy < slots[0].energy {
        slots.swap(0, 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_slot_keeps_two_lowest_sorted_unique() {
        let mut slots = [HBondSlot::empty(); 2];
        insert_slot(&mut slots, 5, -1.0);
        insert_slot(&mut slots, 7, -3.0);
        insert_slot(&mut slots, 9, -0.6);
        assert_eq!(slots[0].partner, Some(7));
        assert_eq!(slots[1].partner, Some(5));

        // improving the energy of an already-present partner must not break the sort
        insert_slot(&mut slots, 5, -4.0);
        assert_eq!(slots[0].partner, Some(5));
        assert!((slots[0].energy - (-4.0)).abs() < 1e-9);
        assert_eq!(slots[1].partner, Some(7));
    }
}
