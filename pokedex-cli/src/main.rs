mod cli;
mod config;
mod render;

use anyhow::{
    Context,
    Result,
};
use clap::Parser;
use pokedex_data::PokemonId;
use pokedex_local_data::LocalStorage;
use pokedex_state::{
    Message,
    Pokedex,
    View,
    ui::Panel,
};
use tracing_core::Level;

use crate::{
    cli::{
        Cli,
        Command,
        GlobalArgs,
        ListArgs,
    },
    config::PokedexOptions,
    render::{
        render_panel,
        render_type_options,
        render_view,
    },
};

fn setup_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn options(global: &GlobalArgs) -> Result<PokedexOptions> {
    let mut options = PokedexOptions::load(global.config.as_deref())?;
    if let Some(api_url) = &global.api_url {
        options.api_url = api_url.clone();
    }
    if let Some(data_dir) = &global.data_dir {
        options.data_dir = Some(data_dir.clone());
    }
    log::debug!("using options {options:?}");
    Ok(options)
}

fn print_json<T>(value: &T) -> Result<()>
where
    T: serde::Serialize,
{
    println!(
        "{}",
        serde_json::to_string_pretty(value).context("failed to serialize output")?
    );
    Ok(())
}

fn print_view(view: &View, json: bool) -> Result<()> {
    if json {
        return print_json(view);
    }
    print!("{}", render_view(view));
    Ok(())
}

fn print_panel(panel: &Panel, json: bool) -> Result<()> {
    if json {
        return print_json(panel);
    }
    print!("{}", render_panel(panel));
    Ok(())
}

async fn open_with_catalog(options: &PokedexOptions) -> Result<Pokedex<LocalStorage>> {
    let client = options.client()?;
    let mut pokedex = Pokedex::new(options.open_storage()?)?;
    pokedex.load_catalog(&client).await?;
    Ok(pokedex)
}

async fn list(options: &PokedexOptions, args: ListArgs, json: bool) -> Result<()> {
    let mut pokedex = open_with_catalog(options).await?;
    if let Some(name) = args.name {
        pokedex.dispatch(Message::SetNameFilter(name))?;
    }
    if let Some(type_name) = args.type_name {
        pokedex.dispatch(Message::SetTypeFilter(type_name))?;
    }
    print_view(&pokedex.view(), json)
}

async fn types(options: &PokedexOptions, json: bool) -> Result<()> {
    let pokedex = open_with_catalog(options).await?;
    let view = pokedex.view();
    if json {
        return print_json(&view.filters.type_options);
    }
    print!("{}", render_type_options(&view.filters));
    Ok(())
}

fn captured(options: &PokedexOptions, json: bool) -> Result<()> {
    let pokedex = Pokedex::new(options.open_storage()?)?;
    print_panel(&pokedex.view().captured, json)
}

async fn capture(options: &PokedexOptions, id: PokemonId, json: bool) -> Result<()> {
    let mut pokedex = open_with_catalog(options).await?;
    pokedex.dispatch(Message::Capture(id))?;
    print_panel(&pokedex.view().captured, json)
}

fn release(options: &PokedexOptions, id: PokemonId, json: bool) -> Result<()> {
    let mut pokedex = Pokedex::new(options.open_storage()?)?;
    if !pokedex.state().is_captured(id) {
        log::info!("pokemon {id} is not captured");
    }
    pokedex.dispatch(Message::Release(id))?;
    print_panel(&pokedex.view().captured, json)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.global.verbose);

    let options = options(&cli.global)?;
    let json = cli.global.json;
    match cli.command {
        Command::List(args) => list(&options, args, json).await,
        Command::Types => types(&options, json).await,
        Command::Captured => captured(&options, json),
        Command::Capture { id } => capture(&options, id, json).await,
        Command::Release { id } => release(&options, id, json),
    }
}
