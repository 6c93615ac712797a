//! Bridge detection, ladder union-find and sheet union-find.

use std::collections::HashMap;

use itertools::Itertools;

use crate::energy::ResidueHBonds;

/// The two kinds of β-bridge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BridgeType {
    Parallel,
    Antiparallel,
}

/// An unordered pair of residues forming a single bridge (0-based indices, `i < j`).
#[derive(Clone, Copy, Debug)]
pub struct Bridge {
    pub i: usize,
    pub j: usize,
    pub kind: BridgeType,
}

/// A maximal co-linear run of same-typed bridges.
#[derive(Clone, Debug)]
pub struct Ladder {
    /// 0-based index
    pub index: usize,
    pub kind: BridgeType,
    /// residues of the bridges' first strand, ascending
    pub range_i: Vec<usize>,
    /// residues of the bridges' second strand, ascending (descending chain order for antiparallel)
    pub range_j: Vec<usize>,
    /// sheet this ladder belongs to, assigned after connected-component analysis
    pub sheet_id: usize,
}

impl Ladder {
    pub fn residues(&self) -> impl Iterator<Item = &usize> {
        self.range_i.iter().chain(self.range_j.iter())
    }

    pub fn bridge_count(&self) -> usize {
        self.range_i.len()
    }
}

/// A single per-residue bridge-partner slot, as exposed by the engine's iterator.
#[derive(Clone, Copy, Debug, Default)]
pub struct BridgePartnerSlot {
    pub partner: Option<usize>,
    pub ladder: Option<usize>,
    pub parallel: Option<bool>,
}

fn has_bond(hbonds: &[ResidueHBonds], donor: usize, acceptor: usize) -> bool {
    hbonds[donor].donates_to(acceptor).is_some()
}

fn is_interior(chain_break: &[crate::residue::ChainBreak], n: usize, idx: usize) -> bool {
    if idx == 0 || idx + 1 >= n {
        return false;
    }
    chain_break[idx] != crate::residue::ChainBreak::NewChain
        && chain_break[idx + 1] != crate::residue::ChainBreak::NewChain
}

/// Enumerates all β-bridges in the structure.
pub fn detect_bridges(
    hbonds: &[ResidueHBonds],
    chain_break: &[crate::residue::ChainBreak],
) -> Vec<Bridge> {
    let n = hbonds.len();
    let mut bridges = Vec::new();

    for i in 0..n {
        if !is_interior(chain_break, n, i) {
            continue;
        }
        for j in (i + 3)..n {
            if !is_interior(chain_break, n, j) {
                continue;
            }

            let parallel = (has_bond(hbonds, i - 1, j) && has_bond(hbonds, j, i + 1))
                || (has_bond(hbonds, j - 1, i) && has_bond(hbonds, i, j + 1));
            let antiparallel = (has_bond(hbonds, i, j) && has_bond(hbonds, j, i))
                || (has_bond(hbonds, i - 1, j + 1) && has_bond(hbonds, j - 1, i + 1));

            if parallel {
                bridges.push(Bridge { i, j, kind: BridgeType::Parallel });
            }
            if antiparallel {
                bridges.push(Bridge { i, j, kind: BridgeType::Antiparallel });
            }
        }
    }

    bridges
}

/// Minimal union-find over a dense `0..n` key space.
struct UnionFind {
    parent: Vec<usize>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        UnionFind { parent: (0..n).collect() }
    }

    fn find(&mut self, x: usize) -> usize {
        if self.parent[x] != x {
            self.parent[x] = self.find(self.parent[x]);
        }
        self.parent[x]
    }

    fn union(&mut self, a: usize, b: usize) {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra != rb {
            // lower root wins, to keep merges deterministic regardless of call order
            if ra < rb {
                self.parent[rb] = ra;
            } else {
                self.parent[ra] = rb;
            }
        }
    }
}

fn extends(a: &Bridge, b: &Bridge) -> bool {
    let di = a.i as i64 - b.i as i64;
    let dj = a.j as i64 - b.j as i64;
    match a.kind {
        BridgeType::Parallel => di.abs() == 1 && dj.abs() == 1 && di == dj,
        BridgeType::Antiparallel => di.abs() == 1 && dj.abs() == 1 && di == -dj,
    }
}

/// Extends bridges into ladders via union-find, then ladders into sheets via a second
/// union-find over shared residues. IDs are assigned in first-appearance order.
pub fn build_ladders_and_sheets(mut bridges: Vec<Bridge>) -> Vec<Ladder> {
    // group same-typed bridges together so the extension check below never has to cross
    // kinds, then keep the pair itself as the tie-breaker within a kind
    bridges.sort_by_key(|b| (b.kind == BridgeType::Antiparallel, b.i, b.j));

    let mut uf = UnionFind::new(bridges.len());
    let same_kind_runs: Vec<Vec<usize>> = (0..bridges.len())
        .group_by(|&idx| bridges[idx].kind)
        .into_iter()
        .map(|(_, run)| run.collect())
        .collect();

    for run in &same_kind_runs {
        for (pos, &a) in run.iter().enumerate() {
            for &b in &run[pos + 1..] {
                if extends(&bridges[a], &bridges[b]) {
                    uf.union(a, b);
                }
            }
        }
    }

    // group bridges by their union-find root, in first-appearance order
    let mut groups: Vec<usize> = Vec::new();
    let mut group_of: HashMap<usize, usize> = HashMap::new();
    let mut members: Vec<Vec<usize>> = Vec::new();
    for idx in 0..bridges.len() {
        let root = uf.find(idx);
        let group_idx = *group_of.entry(root).or_insert_with(|| {
            groups.push(root);
            members.push(Vec::new());
            members.len() - 1
        });
        members[group_idx].push(idx);
    }

    let mut ladders = Vec::with_capacity(members.len());
    for (ladder_idx, member_idxs) in members.into_iter().enumerate() {
        let kind = bridges[member_idxs[0]].kind;
        let mut range_i: Vec<usize> = member_idxs.iter().map(|&m| bridges[m].i).collect();
        let mut range_j: Vec<usize> = member_idxs.iter().map(|&m| bridges[m].j).collect();
        range_i.sort_unstable();
        match kind {
            BridgeType::Parallel => range_j.sort_unstable(),
            BridgeType::Antiparallel => range_j.sort_unstable_by(|a, b| b.cmp(a)),
        }
        ladders.push(Ladder { index: ladder_idx, kind, range_i, range_j, sheet_id: 0 });
    }

    assign_sheets(&mut ladders);
    ladders
}

fn assign_sheets(ladders: &mut [Ladder]) {
    let mut uf = UnionFind::new(ladders.len());
    for a in 0..ladders.len() {
        for b in (a + 1)..ladders.len() {
            let shares = ladders[a].residues().any(|r| ladders[b].residues().any(|s| r == s));
            if shares {
                uf.union(a, b);
            }
        }
    }

    let mut sheet_of: HashMap<usize, usize> = HashMap::new();
    let mut next_sheet = 1usize;
    for idx in 0..ladders.len() {
        let root = uf.find(idx);
        let sheet_id = *sheet_of.entry(root).or_insert_with(|| {
            let id = next_sheet;
            next_sheet += 1;
            id
        });
        ladders[idx].sheet_id = sheet_id;
    }
}

/// Per-residue bridge partner slots and a strand/bridge membership flag, derived from the
/// finished ladders.
pub struct BridgeMembership {
    pub slots: Vec<[BridgePartnerSlot; 2]>,
    /// true if the residue belongs to a ladder with ≥ 2 bridges (strand, `E`)
    pub is_strand: Vec<bool>,
    /// true if the residue belongs only to an isolated (length-1) bridge (`B`)
    pub is_isolated_bridge: Vec<bool>,
    pub sheet_id: Vec<Option<usize>>,
}

pub fn bridge_membership(n: usize, ladders: &[Ladder]) -> BridgeMembership {
    let mut slots = vec![[BridgePartnerSlot::default(); 2]; n];
    let mut is_strand = vec![false; n];
    let mut in_short_ladder = vec![false; n];
    let mut sheet_id = vec![None; n];
    let mut slot_used = vec![0usize; n];

    for ladder in ladders {
        let long_enough = ladder.bridge_count() >= 2;
        for k in 0..ladder.range_i.len() {
            let ri = ladder.range_i[k];
            let rj = ladder.range_j[k];
            for (res, partner) in [(ri, rj), (rj, ri)] {
                if slot_used[res] < 2 {
                    slots[res][slot_used[res]] = BridgePartnerSlot {
                        partner: Some(partner),
                        ladder: Some(ladder.index),
                        parallel: Some(ladder.kind == BridgeType::Parallel),
                    };
                    slot_used[res] += 1;
                }
                sheet_id[res] = Some(ladder.sheet_id);
                if long_enough {
                    is_strand[res] = true;
                } else {
                    in_short_ladder[res] = true;
                }
            }
        }
    }

    // a residue only counts as an isolated bridge if none of its ladders was long enough to
    // make it a strand, checked against the final state rather than inline during the loop above
    let is_isolated_bridge: Vec<bool> =
        (0..n).map(|res| in_short_ladder[res] && !is_strand[res]).collect();

    BridgeMembership { slots, is_strand, is_isolated_bridge, sheet_id }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extends_requires_a_consistent_diagonal_step() {
        let a = Bridge { i: 10, j: 30, kind: BridgeType::Parallel };
        let b = Bridge { i: 11, j: 31, kind: BridgeType::Parallel };
        let c = Bridge { i: 11, j: 29, kind: BridgeType::Parallel };
        assert!(extends(&a, &b));
        assert!(!extends(&a, &c));

        let d = Bridge { i: 10, j: 30, kind: BridgeType::Antiparallel };
        let e = Bridge { i: 11, j: 29, kind: BridgeType::Antiparallel };
        assert!(extends(&d, &e));
        assert!(!extends(&d, &b));
    }

    #[test]
    fn two_coextending_bridges_merge_into_one_ladder() {
        let bridges = vec![
            Bridge { i: 10, j: 30, kind: BridgeType::Parallel },
            Bridge { i: 11, j: 31, kind: BridgeType::Parallel },
        ];
        let ladders = build_ladders_and_sheets(bridges);
        assert_eq!(ladders.len(), 1);
        assert_eq!(ladders[0].bridge_count(), 2);
        assert_eq!(ladders[0].range_i, vec![10, 11]);
        assert_eq!(ladders[0].range_j, vec![30, 31]);
    }

    #[test]
    fn non_extending_bridges_stay_separate_ladders() {
        let bridges = vec![
            Bridge { i: 10, j: 30, kind: BridgeType::Parallel },
            Bridge { i: 50, j: 70, kind: BridgeType::Parallel },
        ];
        let ladders = build_ladders_and_sheets(bridges);
        assert_eq!(ladders.len(), 2);
        assert!(ladders.iter().all(|l| l.bridge_count() == 1));
    }

    #[test]
    fn a_two_bridge_ladder_is_a_strand_a_single_bridge_ladder_is_isolated() {
        let bridges = vec![
            Bridge { i: 10, j: 30, kind: BridgeType::Parallel },
            Bridge { i: 11, j: 31, kind: BridgeType::Parallel },
            Bridge { i: 50, j: 70, kind: BridgeType::Antiparallel },
        ];
        let ladders = build_ladders_and_sheets(bridges);
        let membership = bridge_membership(72, &ladders);
        assert!(membership.is_strand[10]);
        assert!(membership.is_strand[31]);
        assert!(membership.is_isolated_bridge[50]);
        assert!(membership.is_isolated_bridge[70]);
        assert!(!membership.is_strand[50]);
    }
}
