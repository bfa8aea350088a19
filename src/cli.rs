//! The argument-parsing shell: clap subcommands dispatching to the screens.

use clap::{Args, Parser, Subcommand};

use crate::Result;
use crate::screens::{self, Explore, Hackermix};

#[derive(Parser)]
#[command(
    name = "unidex",
    version,
    about = "Browse, group, and pair the Unicode character catalog"
)]
pub struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Args)]
struct FilterArgs {
    /// Substrings that must all be present in a result's name.
    #[arg(short, long, num_args = 1..)]
    filter: Vec<String>,

    /// Substrings that must all be absent from a result's name.
    #[arg(short, long, num_args = 1..)]
    exclude: Vec<String>,

    /// Print in json format.
    #[arg(short, long)]
    json: bool,
}

#[derive(Subcommand)]
enum Cmd {
    /// Output all unicode values to stdout.
    All {
        #[command(flatten)]
        flags: FilterArgs,

        /// Use the staggered multi-line form.
        #[arg(short, long)]
        detail: bool,
    },

    /// Rank the tokenized groups by size.
    Groups(FilterArgs),

    /// Explore the tokenized unicode data interactively.
    Explore,

    /// Scramble letters with look-alike unicode variations.
    Hackermix {
        /// The word to respell.
        word: String,
    },

    /// Output left/right-style unicode pairs.
    Pairs {
        /// Pair set to output, or "all".
        #[arg(default_value = "all")]
        name: String,

        #[command(flatten)]
        flags: FilterArgs,

        /// Turn on detailed output.
        #[arg(short, long)]
        detail: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Cmd::All { flags, detail } => {
            screens::all::run(&flags.filter, &flags.exclude, flags.json, detail)
        }
        Cmd::Groups(f) => screens::groups::run(&f.filter, &f.exclude, f.json),
        Cmd::Explore => Explore::new().run(),
        Cmd::Hackermix { word } => Hackermix::new(&word).run(),
        Cmd::Pairs {
            name,
            flags,
            detail,
        } => screens::pairs::run(&name, &flags.filter, &flags.exclude, flags.json, detail),
    }
}
