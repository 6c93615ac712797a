use std::env;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use log::info;

use bioshell_cif::{is_cif_file, read_cif_file, CifData, CifError};
use bioshell_hbonds::output::mmcif::annotate_mmcif;
use bioshell_hbonds::output::{classic::write_classic, DepositMetadata};
use bioshell_hbonds::{Dssp, DsspError};
use bioshell_pdb::Deposit;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Dssp,
    Mmcif,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None, arg_required_else_help = true)]
/// Assigns secondary structure to a protein chain using the DSSP (Kabsch-Sander) algorithm,
/// including the PPII helix extension.
///
/// say dssp -h to see options
struct Args {
    /// input protein structure in either CIF or PDB format
    xyzin: String,
    /// output file; printed to stdout in classic DSSP format when omitted
    output: Option<String>,
    /// output format; inferred from the output file's extension when not given
    #[clap(long, value_enum)]
    output_format: Option<OutputFormat>,
    /// create missing backbone atoms instead of failing on incomplete geometry
    #[clap(long)]
    create_missing: bool,
    /// minimum run length for a PPII helix to be reported
    #[clap(long, default_value_t = 3)]
    min_pp_stretch: usize,
    /// print sequence and secondary structure in FASTA format to stdout
    #[clap(short = 'f', long)]
    out_fasta: bool,
    /// list all hydrogen bonds
    #[clap(long)]
    list: bool,
    /// be more verbose and log program actions on the screen
    #[clap(short, long)]
    verbose: bool,
}

/// prints every accepted donor H-bond as `i -> j  energy`, one per line, in the teacher stub's
/// original `BackboneHBondMap::h_bonds()` listing style
fn list_hbonds(engine: &Dssp) {
    for residue in engine.residues() {
        for k in 0..2 {
            let slot = residue.donor(k);
            if let Some(partner) = slot.partner {
                println!("{:4} -> {:4}  {:.3}", residue.index(), partner + 1, slot.energy);
            }
        }
    }
}

/// prints the chain's sequence and its DSSP label string as a two-line FASTA record
fn print_fasta(engine: &Dssp, id_code: &str) {
    println!(">{}", id_code);
    let sequence: String = engine.residues().map(|r| r.aa_code()).collect();
    let labels: String = engine.residues().map(|r| r.ss_label().code()).collect();
    println!("{}", sequence);
    println!("{}", labels);
}

fn format_from_extension(path: &str) -> Option<OutputFormat> {
    match Path::new(path).extension().and_then(|e| e.to_str()) {
        Some("cif") => Some(OutputFormat::Mmcif),
        Some("dssp") | Some("out") | Some("txt") => Some(OutputFormat::Dssp),
        _ => None,
    }
}

fn run(args: &Args) -> Result<(), DsspError> {
    let deposit = Deposit::from_file(&args.xyzin)?;
    let strctr = deposit.structure();

    let engine = Dssp::new(&strctr, args.min_pp_stretch)?;
    info!("assigned secondary structure to {} residues", engine.len());

    if args.list {
        list_hbonds(&engine);
    }
    if args.out_fasta {
        print_fasta(&engine, &deposit.id_code);
    }

    let format = args
        .output_format
        .or_else(|| args.output.as_deref().and_then(format_from_extension))
        .unwrap_or(OutputFormat::Dssp);

    let meta = DepositMetadata {
        id_code: deposit.id_code.clone(),
        classification: deposit.classification.clone(),
        title: deposit.title.clone(),
        keywords: deposit.keywords.clone(),
    };

    let mut out: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    match format {
        OutputFormat::Dssp => {
            write_classic(&engine, &meta, &mut out)?;
        }
        OutputFormat::Mmcif => {
            // start from the input's own datablock when it has one, so the annotated output
            // keeps whatever categories (entity, exptl, ...) the original file carried
            let mut datablock = if is_cif_file(&args.xyzin)? {
                let mut blocks = read_cif_file(&args.xyzin)?;
                if blocks.len() != 1 {
                    return Err(CifError::ExtraDataBlock.into());
                }
                blocks.remove(0)
            } else {
                CifData::new(&deposit.id_code)
            };
            annotate_mmcif(&engine, &mut datablock, env!("CARGO_PKG_VERSION"), env!("BUILD_TIME"));
            write!(out, "{}", datablock)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "info");
    }
    if args.verbose {
        env::set_var("RUST_LOG", "debug");
    }
    env_logger::init();

    let build_time = env!("BUILD_TIME");
    let git_commit_md5 = env!("GIT_COMMIT_MD5");
    info!("Build time: {}", build_time);
    info!("Git commit MD5 sum: {}", git_commit_md5);

    if args.create_missing {
        info!("--create-missing requested; reconstruction of missing backbone atoms is not yet implemented, continuing with the atoms present");
    }

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("dssp: {}", e);
            ExitCode::FAILURE
        }
    }
}
