use std::path::PathBuf;

use clap::{
    Args,
    Parser,
    Subcommand,
};
use pokedex_data::PokemonId;

#[derive(Debug, Parser)]
#[command(name = "pokedex", version, about = "Browse and capture Pokemon from PokeAPI")]
pub struct Cli {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// JSON file with application options.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Base URL of the catalog API.
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Directory captured Pokemon are stored in.
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Prints the rendered view as JSON instead of text.
    #[arg(long, global = true)]
    pub json: bool,

    /// Increases log verbosity. May be repeated.
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Shows the catalog and the captured Pokemon.
    List(ListArgs),
    /// Shows every type in the catalog.
    Types,
    /// Shows the captured Pokemon.
    Captured,
    /// Captures a Pokemon from the catalog.
    Capture {
        /// ID of the Pokemon.
        id: PokemonId,
    },
    /// Releases a captured Pokemon.
    Release {
        /// ID of the Pokemon.
        id: PokemonId,
    },
}

#[derive(Debug, Default, Args)]
pub struct ListArgs {
    /// Only show Pokemon whose name contains this text, ignoring case.
    #[arg(long)]
    pub name: Option<String>,

    /// Only show Pokemon with this type.
    #[arg(long = "type")]
    pub type_name: Option<String>,
}
