//! CLI argument definitions using clap.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// AbxRxPro: antibiotic resistance phenotype and genotype profiler
#[derive(Parser)]
#[command(name = "abxrx")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output (debug logging and per-bubble annotations)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Settings file mapping antibiotics to drug classes (default: built-in)
    #[arg(long, global = true, env = "ABXRX_SETTINGS", value_name = "FILE")]
    pub settings: Option<PathBuf>,

    /// Directory holding saved profiles
    #[arg(long, global = true, env = "ABXRX_STORE", default_value = "profiles")]
    pub store: PathBuf,
}

/// Input files shared by `analyze` and `correlate`.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Phenotype spreadsheet export (TSV/CSV; first column isolate IDs)
    #[arg(short, long, value_name = "FILE")]
    pub pheno: Option<PathBuf>,

    /// Directory of RGI reports (<isolate>_RGI.txt)
    #[arg(long, value_name = "DIR")]
    pub rgi: Option<PathBuf>,

    /// Directory of staramr summary reports (<isolate>_staramr.tsv)
    #[arg(long, value_name = "DIR")]
    pub staramr: Option<PathBuf>,

    /// Directory of AMRFinderPlus reports (<isolate>_amrfinder.tsv)
    #[arg(long, value_name = "DIR")]
    pub amrfinder: Option<PathBuf>,

    /// Antibiotics to analyse (default: every column of the phenotype file)
    #[arg(short, long, num_args = 1.., value_delimiter = ',')]
    pub antibiotics: Vec<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fuse phenotypes with genotype reports and show the resistance profile
    Analyze {
        #[command(flatten)]
        inputs: InputArgs,

        /// Colours for R, I, S and U calls as four "r,g,b" triples
        #[arg(long, num_args = 4, value_names = ["R", "I", "S", "U"])]
        colours: Option<Vec<String>>,

        /// Save the result as a named profile
        #[arg(short, long, value_name = "NAME")]
        save: Option<String>,

        /// Export the result as HTML into this directory
        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,

        /// Open the exported HTML in a browser
        #[arg(long, requires = "export")]
        open: bool,

        /// Leave gene frequencies out of the output and saved profile
        #[arg(long)]
        hide_frequencies: bool,

        /// Print the fused genotype structure as JSON
        #[arg(long, hide = true)]
        dump_genotypes: bool,

        /// Print the gene frequency table as JSON
        #[arg(long, hide = true)]
        dump_frequencies: bool,
    },

    /// Correlate gene presence with phenotypic resistance
    Correlate {
        #[command(flatten)]
        inputs: InputArgs,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List saved profiles
    Profiles {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show a saved profile
    Show {
        /// Profile name
        #[arg(value_name = "NAME")]
        name: String,

        /// Export the profile as HTML into this directory
        #[arg(short, long, value_name = "DIR")]
        export: Option<PathBuf>,

        /// Open the exported HTML in a browser
        #[arg(long, requires = "export")]
        open: bool,
    },

    /// Delete a saved profile
    Delete {
        /// Profile name
        #[arg(value_name = "NAME")]
        name: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}
