//! Global summary statistics aggregated after labelling.

use crate::bridge::{BridgeType, Ladder};
use crate::disulphide::DisulphideBond;
use crate::energy::ResidueHBonds;
use crate::reduction::SSLabel;
use crate::residue::ProteinResidue;

const HISTOGRAM_BUCKETS: usize = 30;
/// the 11-bucket H-bond distance histogram spans offsets -5..=+5
const DISTANCE_HISTOGRAM_BUCKETS: usize = 11;

#[derive(Clone, Debug, Default)]
pub struct Statistics {
    pub residue_count: usize,
    pub chain_count: usize,
    pub disulphide_total: usize,
    pub disulphide_intrachain: usize,
    pub disulphide_interchain: usize,
    pub total_accessibility: f64,

    pub hbond_total: usize,
    pub hbond_parallel_bridge: usize,
    pub hbond_antiparallel_bridge: usize,
    /// index `k` holds the count for offset `k - 5`, i.e. `acceptor.index - donor.index`
    /// clamped to `[-5, +5]`
    pub hbond_distance_histogram: [usize; DISTANCE_HISTOGRAM_BUCKETS],

    /// 1-based run length `r` is tallied in `residues_per_alpha_helix[r-1]`; runs longer than 30
    /// are folded into bucket 30.
    pub residues_per_alpha_helix: [u32; HISTOGRAM_BUCKETS],
    pub parallel_bridges_per_ladder: [u32; HISTOGRAM_BUCKETS],
    pub antiparallel_bridges_per_ladder: [u32; HISTOGRAM_BUCKETS],
    pub ladders_per_sheet: [u32; HISTOGRAM_BUCKETS],
}

fn bump(histogram: &mut [u32; HISTOGRAM_BUCKETS], run_len: usize) {
    if run_len == 0 {
        return;
    }
    let bucket = run_len.min(HISTOGRAM_BUCKETS) - 1;
    histogram[bucket] += 1;
}

fn count_runs<F: Fn(usize) -> bool>(n: usize, pred: F) -> Vec<usize> {
    let mut runs = Vec::new();
    let mut i = 0;
    while i < n {
        if !pred(i) {
            i += 1;
            continue;
        }
        let start = i;
        while i < n && pred(i) {
            i += 1;
        }
        runs.push(i - start);
    }
    runs
}

pub fn compute_statistics(
    residues: &[ProteinResidue],
    hbonds: &[ResidueHBonds],
    ladders: &[Ladder],
    disulphides: &[DisulphideBond],
    labels: &[SSLabel],
) -> Statistics {
    let n = residues.len();
    let mut stats = Statistics::default();

    stats.residue_count = n;
    stats.chain_count = residues
        .iter()
        .filter(|r| r.chain_break == crate::residue::ChainBreak::NewChain)
        .count()
        .max(if n > 0 { 1 } else { 0 });
    stats.total_accessibility = residues.iter().map(|r| r.accessibility).sum();

    stats.disulphide_total = disulphides.len();
    for bond in disulphides {
        if bond.is_intrachain(residues) {
            stats.disulphide_intrachain += 1;
        } else {
            stats.disulphide_interchain += 1;
        }
    }

    for (i, slots) in hbonds.iter().enumerate() {
        for slot in slots.donors.iter() {
            if let Some(partner) = slot.partner {
                stats.hbond_total += 1;
                let offset = (partner as i64 - i as i64).clamp(-5, 5) + 5;
                stats.hbond_distance_histogram[offset as usize] += 1;
            }
        }
    }

    for ladder in ladders {
        let bridge_count = ladder.bridge_count();
        match ladder.kind {
            BridgeType::Parallel => {
                stats.hbond_parallel_bridge += bridge_count;
                bump(&mut stats.parallel_bridges_per_ladder, bridge_count);
            }
            BridgeType::Antiparallel => {
                stats.hbond_antiparallel_bridge += bridge_count;
                bump(&mut stats.antiparallel_bridges_per_ladder, bridge_count);
            }
        }
    }

    let max_sheet_id = ladders.iter().map(|l| l.sheet_id).max().unwrap_or(0);
    for sheet in 1..=max_sheet_id {
        let count = ladders.iter().filter(|l| l.sheet_id == sheet).count();
        bump(&mut stats.ladders_per_sheet, count);
    }

    for run_len in count_runs(n, |i| labels[i] == SSLabel::AlphaHelix) {
        bump(&mut stats.residues_per_alpha_helix, run_len);
    }

    stats
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_runs_finds_every_maximal_run() {
        let pred = |i: usize| [1usize, 2, 4, 5, 6].contains(&i);
        assert_eq!(count_runs(7, pred), vec![2, 3]);
    }

    #[test]
    fn count_runs_on_an_all_false_predicate_is_empty() {
        assert!(count_runs(5, |_| false).is_empty());
    }

    #[test]
    fn bump_ignores_zero_length_runs_and_clamps_to_the_last_bucket() {
        let mut histogram = [0u32; HISTOGRAM_BUCKETS];
        bump(&mut histogram, 0);
        assert_eq!(histogram, [0u32; HISTOGRAM_BUCKETS]);
        bump(&mut histogram, 3);
        assert_eq!(histogram[2], 1);
        bump(&mut histogram, 1000);
        assert_eq!(histogram[HISTOGRAM_BUCKETS - 1], 1);
    }

    fn placeholder_residue(index: usize) -> ProteinResidue {
        ProteinResidue {
            index,
            compound: "ALA".to_string(),
            aa_code: 'A',
            chain_id: "A".to_string(),
            auth_seq_num: index as i32,
            i_code: ' ',
            backbone: crate::residue::Backbone::default(),
            phi: crate::residue::UNDEFINED_ANGLE,
            psi: crate::residue::UNDEFINED_ANGLE,
            omega: crate::residue::UNDEFINED_ANGLE,
            tco: 0.0,
            kappa: crate::residue::UNDEFINED_ANGLE,
            alpha: crate::residue::UNDEFINED_ANGLE,
            accessibility: 0.0,
            ss_bridge_number: None,
            chain_break: if index == 1 { crate::residue::ChainBreak::NewChain } else { crate::residue::ChainBreak::None },
            geometry_incomplete: false,
        }
    }

    #[test]
    fn hbond_distance_histogram_buckets_by_offset_clamped_to_five() {
        let residues: Vec<_> = (1..=3).map(placeholder_residue).collect();
        let mut hbonds = vec![ResidueHBonds::default(); 3];
        hbonds[0].donors[0] = crate::energy::HBondSlot { partner: Some(2), energy: -2.0 };
        let labels = vec![SSLabel::Loop; 3];
        let stats = compute_statistics(&residues, &hbonds, &[], &[], &labels);
        assert_eq!(stats.residue_count, 3);
        assert_eq!(stats.hbond_total, 1);
        // offset = 2 - 0 = 2, bucket index = 2 + 5 = 7
        assert_eq!(stats.hbond_distance_histogram[7], 1);
    }
}
