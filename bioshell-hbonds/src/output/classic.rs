//! The classic DSSP text output.

use std::io::Write;

use chrono::Local;

use crate::dssp::Dssp;
use crate::errors::DsspError;
use crate::helix::HelixFlag;
use crate::residue::ChainBreak;

use super::DepositMetadata;

const LINE_WIDTH: usize = 127;

fn header_line(content: &str) -> String {
    format!("{:<width$}.", content, width = LINE_WIDTH)
}

/// Per-residue turn indicator character for a single stride (classic DSSP convention):
/// `>` start, `<` end, the stride digit for an interior (Middle) turn, `X` for StartAndEnd.
fn turn_char(flag: HelixFlag, digit: char) -> char {
    match flag {
        HelixFlag::None => ' ',
        HelixFlag::Start => '>',
        HelixFlag::End => '<',
        HelixFlag::Middle => digit,
        HelixFlag::StartAndEnd => 'X',
    }
}

/// Bridge-partner letter: lowercase for a parallel ladder, uppercase for antiparallel
/// (classic DSSP convention), cycling through the alphabet by ladder index.
fn bridge_letter(ladder: Option<usize>, parallel: Option<bool>) -> char {
    match (ladder, parallel) {
        (Some(l), Some(true)) => (b'a' + (l % 26) as u8) as char,
        (Some(l), Some(false)) => (b'A' + (l % 26) as u8) as char,
        _ => ' ',
    }
}

fn sheet_letter(sheet_id: Option<usize>) -> char {
    match sheet_id {
        Some(id) if id > 0 => (b'A' + ((id - 1) % 26) as u8) as char,
        _ => ' ',
    }
}

fn hbond_field(self_index: usize, partner: Option<usize>, energy: f64) -> String {
    let (d, e) = match partner {
        Some(p) => (p as i64 + 1 - self_index as i64, energy),
        None => (0, 0.0),
    };
    format!("{:>11}", format!("{},{:4.1}", d, e))
}

/// Writes `dssp`'s result as classic DSSP text to `out`.
///
/// Every chain label in a successfully-constructed [`Dssp`] is already known to be a single
/// character — [`Dssp::new`] rejects longer ones up front, since classic DSSP's chain column
/// can never represent them.
pub fn write_classic<W: Write>(
    dssp: &Dssp,
    meta: &DepositMetadata,
    out: &mut W,
) -> Result<(), DsspError> {
    let date = Local::now().format("%Y-%m-%d").to_string();
    writeln!(
        out,
        "{}",
        header_line(&format!(
            "==== Secondary Structure Definition by the program DSSP, NKI version 3.0                           ==== DATE={}",
            date
        ))
    )?;
    writeln!(
        out,
        "{}",
        header_line("REFERENCE W. KABSCH AND C.SANDER, BIOPOLYMERS 22 (1983) 2577-2637")
    )?;
    writeln!(out, "{}", header_line(&format!("HEADER    {}", meta.classification.as_deref().unwrap_or(""))))?;
    writeln!(out, "{}", header_line(&format!("COMPND    {}", meta.title.as_deref().unwrap_or(""))))?;
    writeln!(out, "{}", header_line(&format!("SOURCE    {}", meta.keywords.join(", "))))?;
    writeln!(out, "{}", header_line("AUTHOR    "))?;

    let stats = dssp.statistics();
    writeln!(
        out,
        "{}",
        header_line(&format!(
            "{:5}{:3}{:3}{:3}{:3} TOTAL NUMBER OF RESIDUES, NUMBER OF CHAINS, NUMBER OF SS-BRIDGES(TOTAL,INTRACHAIN,INTERCHAIN)",
            stats.residue_count,
            stats.chain_count,
            stats.disulphide_total,
            stats.disulphide_intrachain,
            stats.disulphide_interchain,
        ))
    )?;
    writeln!(
        out,
        "{}",
        header_line(&format!("{:8.1}   ACCESSIBLE SURFACE OF PROTEIN (ANGSTROM**2)", stats.total_accessibility))
    )?;

    let n = stats.residue_count.max(1) as f64;
    let pct = |c: usize| c as f64 * 100.0 / n;
    writeln!(
        out,
        "{}",
        header_line(&format!(
            "{:5}{:6.1}   TOTAL NUMBER OF HYDROGEN BONDS OF TYPE O(I)-->H-N(I)    , SAME NUMBER PER 100 RESIDUES",
            stats.hbond_total,
            pct(stats.hbond_total)
        ))
    )?;
    writeln!(
        out,
        "{}",
        header_line(&format!(
            "{:5}{:6.1}   TOTAL NUMBER OF HYDROGEN BONDS IN     PARALLEL BRIDGES, SAME NUMBER PER 100 RESIDUES",
            stats.hbond_parallel_bridge,
            pct(stats.hbond_parallel_bridge)
        ))
    )?;
    writeln!(
        out,
        "{}",
        header_line(&format!(
            "{:5}{:6.1}   TOTAL NUMBER OF HYDROGEN BONDS IN ANTIPARALLEL BRIDGES, SAME NUMBER PER 100 RESIDUES",
            stats.hbond_antiparallel_bridge,
            pct(stats.hbond_antiparallel_bridge)
        ))
    )?;
    for k in -5i32..=5 {
        let bucket = (k + 5) as usize;
        let count = stats.hbond_distance_histogram[bucket];
        let label = if k == 0 { "I".to_string() } else if k < 0 { format!("I{}", k) } else { format!("I+{}", k) };
        writeln!(
            out,
            "{}",
            header_line(&format!(
                "{:5}{:6.1}   TOTAL NUMBER OF HYDROGEN BONDS OF TYPE O(I)-->H-N({})  , SAME NUMBER PER 100 RESIDUES",
                count,
                pct(count),
                label
            ))
        )?;
    }

    let mut bucket_header = String::new();
    for b in 1..=30 {
        bucket_header.push_str(&format!("{:3}", b));
    }
    writeln!(out, "{}", header_line(&bucket_header))?;
    for (label, histogram) in [
        ("RESIDUES PER ALPHA HELIX", &stats.residues_per_alpha_helix),
        ("PARALLEL BRIDGES PER LADDER", &stats.parallel_bridges_per_ladder),
        ("ANTIPARALLEL BRIDGES PER LADDER", &stats.antiparallel_bridges_per_ladder),
        ("LADDERS PER SHEET", &stats.ladders_per_sheet),
    ] {
        let mut row = String::new();
        for v in histogram.iter() {
            row.push_str(&format!("{:3}", v));
        }
        writeln!(out, "{}", header_line(&format!("{}  {}", row, label)))?;
    }

    writeln!(
        out,
        "  #  RESIDUE AA STRUCTURE BP1 BP2  ACC     N-H-->O    O-->H-N    N-H-->O    O-->H-N    TCO  KAPPA ALPHA  PHI   PSI    X-CA   Y-CA   Z-CA"
    )?;

    let mut last_index = 0usize;
    for view in dssp.iter() {
        if view.chain_break() != ChainBreak::None {
            let marker = if view.chain_break() == ChainBreak::NewChain { '*' } else { ' ' };
            writeln!(out, "{:5}{:5}   {}", last_index + 1, "", marker)?;
        }
        last_index = view.index();

        let ss = view.ss_label().code();
        let h3 = turn_char(view.helix_flag(3), '3');
        let h4 = turn_char(view.helix_flag(4), '4');
        let h5 = turn_char(view.helix_flag(5), '5');
        let bend = if view.bend() { 'S' } else { ' ' };
        let chir = view.chirality();
        let bp0 = view.bridge_partner(0);
        let bp1 = view.bridge_partner(1);
        let bl0 = bridge_letter(bp0.ladder, bp0.parallel);
        let bl1 = bridge_letter(bp1.ladder, bp1.parallel);

        let structure = format!("{}{}{}{}{}{}{}{} ", ss, h3, h4, h5, bend, chir, bl0, bl1);

        let bp0_idx = bp0.partner.map(|p| p as i64 + 1).unwrap_or(0);
        let bp1_idx = bp1.partner.map(|p| p as i64 + 1).unwrap_or(0);

        let d0 = view.donor(0);
        let d1 = view.donor(1);
        let a0 = view.acceptor(0);
        let a1 = view.acceptor(1);

        let ca = view.residue().ca().unwrap_or_else(|| bioshell_pdb::calc::Vec3::new(0.0, 0.0, 0.0));

        writeln!(
            out,
            "{:5}{:5}{}{} {}  {}{:4}{:4}{}{:4} {}{}{}{}  {:6.3}{:6.1}{:6.1}{:6.1}{:6.1} {:6.1} {:6.1} {:6.1}",
            view.index(),
            view.auth_seq_num(),
            view.i_code(),
            view.chain_id(),
            view.residue_letter(),
            structure,
            bp0_idx,
            bp1_idx,
            sheet_letter(view.sheet_id()),
            (view.accessibility().round() as i64),
            hbond_field(view.index(), a0.partner, a0.energy),
            hbond_field(view.index(), d0.partner, d0.energy),
            hbond_field(view.index(), a1.partner, a1.energy),
            hbond_field(view.index(), d1.partner, d1.energy),
            view.tco(),
            view.kappa(),
            view.alpha(),
            view.phi(),
            view.psi(),
            ca.x,
            ca.y,
            ca.z,
        )?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turn_char_matches_flag_states() {
        assert_eq!(turn_char(HelixFlag::None, '4'), ' ');
        assert_eq!(turn_char(HelixFlag::Start, '4'), '>');
        assert_eq!(turn_char(HelixFlag::End, '4'), '<');
        assert_eq!(turn_char(HelixFlag::Middle, '4'), '4');
        assert_eq!(turn_char(HelixFlag::StartAndEnd, '4'), 'X');
    }

    #[test]
    fn hbond_field_formats_unused_slot_as_zero() {
        assert_eq!(hbond_field(10, None, 0.0).trim(), "0, 0.0");
    }

    #[test]
    fn header_line_pads_and_terminates() {
        let line = header_line("hello");
        assert_eq!(line.len(), LINE_WIDTH + 1);
        assert!(line.ends_with('.'));
    }
}
