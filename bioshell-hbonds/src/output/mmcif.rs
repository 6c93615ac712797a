//! The annotated mmCIF writer: replaces `struct_conf`/`struct_conf_type` in a
//! caller-supplied [`CifData`] datablock with rows derived from the frozen engine result.

use bioshell_cif::{CifData, CifLoop};

use crate::dssp::Dssp;
use crate::reduction::SSLabel;

/// Maps a summary SS label to its `conf_type_id`. Returns `None` for
/// `Loop`, which never produces a `struct_conf` row.
fn conf_type_id(label: SSLabel) -> Option<&'static str> {
    match label {
        SSLabel::Helix3 => Some("HELX_RH_3T_P"),
        SSLabel::AlphaHelix => Some("HELX_RH_AL_P"),
        SSLabel::Helix5 => Some("HELX_RH_PI_P"),
        SSLabel::HelixPPII => Some("HELX_LH_PP_P"),
        SSLabel::Turn => Some("TURN_TY1_P"),
        SSLabel::Bend => Some("TURN_P"),
        SSLabel::BetaBridge | SSLabel::Strand => Some("STRN"),
        SSLabel::Loop => None,
    }
}

const STRUCT_CONF_COLUMNS: &[&str] = &[
    "_struct_conf.id",
    "_struct_conf.conf_type_id",
    "_struct_conf.beg_label_comp_id",
    "_struct_conf.beg_label_asym_id",
    "_struct_conf.beg_label_seq_id",
    "_struct_conf.pdbx_beg_PDB_ins_code",
    "_struct_conf.end_label_comp_id",
    "_struct_conf.end_label_asym_id",
    "_struct_conf.end_label_seq_id",
    "_struct_conf.pdbx_end_PDB_ins_code",
    "_struct_conf.beg_auth_comp_id",
    "_struct_conf.beg_auth_asym_id",
    "_struct_conf.beg_auth_seq_id",
    "_struct_conf.end_auth_comp_id",
    "_struct_conf.end_auth_asym_id",
    "_struct_conf.end_auth_seq_id",
    "_struct_conf.pdbx_PDB_helix_length",
    "_struct_conf.details",
];

/// Replaces the `struct_conf`/`struct_conf_type` categories of `datablock` with rows derived
/// from `dssp`, and adds a `software` record naming this program.
///
/// The underlying `bioshell-cif` datablock has no loop-removal API, so any pre-existing
/// `struct_conf`/`struct_conf_type` loops are left in place and the new ones are appended
/// alongside them; a consumer that cares about the previous annotation should start from a
/// datablock that does not carry one.
pub fn annotate_mmcif(dssp: &Dssp, datablock: &mut CifData, version: &str, version_date: &str) {
    let mut struct_conf = CifLoop::new(STRUCT_CONF_COLUMNS);
    let mut struct_conf_type = CifLoop::new(&["_struct_conf_type.id", "_struct_conf_type.criteria"]);

    let mut seen_types: Vec<&'static str> = Vec::new();
    let mut counters: std::collections::HashMap<&'static str, u32> = std::collections::HashMap::new();

    let residues: Vec<_> = dssp.iter().collect();
    let mut i = 0;
    while i < residues.len() {
        let label = residues[i].ss_label();
        let ty = match conf_type_id(label) {
            Some(ty) => ty,
            None => {
                i += 1;
                continue;
            }
        };
        let start = i;
        while i < residues.len() && residues[i].ss_label() == label {
            i += 1;
        }
        let end = i - 1;

        if !seen_types.contains(&ty) {
            seen_types.push(ty);
            struct_conf_type.add_data_row(vec![ty.to_string(), "DSSP".to_string()]);
        }
        let counter = counters.entry(ty).or_insert(0);
        *counter += 1;
        let id = format!("{}{}", ty, counter);

        let beg = &residues[start];
        let end_r = &residues[end];
        struct_conf.add_data_row(vec![
            id,
            ty.to_string(),
            beg.compound().to_string(),
            beg.chain_id().to_string(),
            beg.index().to_string(),
            beg.i_code().to_string(),
            end_r.compound().to_string(),
            end_r.chain_id().to_string(),
            end_r.index().to_string(),
            end_r.i_code().to_string(),
            beg.compound().to_string(),
            beg.chain_id().to_string(),
            beg.auth_seq_num().to_string(),
            end_r.compound().to_string(),
            end_r.chain_id().to_string(),
            end_r.auth_seq_num().to_string(),
            (end - start + 1).to_string(),
            "DSSP".to_string(),
        ]);
    }

    datablock.add_loop(struct_conf);
    datablock.add_loop(struct_conf_type);

    let mut software = CifLoop::new(&["_software.name", "_software.version", "_software.date", "_software.classification"]);
    software.add_data_row(vec!["dssp".to_string(), version.to_string(), version_date.to_string(), "model annotation".to_string()]);
    datablock.add_loop(software);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conf_type_id_matches_spec_table() {
        assert_eq!(conf_type_id(SSLabel::AlphaHelix), Some("HELX_RH_AL_P"));
        assert_eq!(conf_type_id(SSLabel::Helix3), Some("HELX_RH_3T_P"));
        assert_eq!(conf_type_id(SSLabel::Helix5), Some("HELX_RH_PI_P"));
        assert_eq!(conf_type_id(SSLabel::HelixPPII), Some("HELX_LH_PP_P"));
        assert_eq!(conf_type_id(SSLabel::Turn), Some("TURN_TY1_P"));
        assert_eq!(conf_type_id(SSLabel::Bend), Some("TURN_P"));
        assert_eq!(conf_type_id(SSLabel::Strand), Some("STRN"));
        assert_eq!(conf_type_id(SSLabel::BetaBridge), Some("STRN"));
        assert_eq!(conf_type_id(SSLabel::Loop), None);
    }
}
