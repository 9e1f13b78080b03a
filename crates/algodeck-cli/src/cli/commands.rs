//! # CLI Layer
//!
//! The only place that knows about stdout, logging setup and argument
//! parsing. Handlers take the API facade and return the rendered output,
//! so they can be driven in tests with an in-memory store.

use super::render;
use super::setup::{Cli, Commands, ListArgs};
use algodeck::api::{ConfigAction, DeckApi};
use algodeck::commands::CmdResult;
use algodeck::error::Result;
use algodeck::filter::FilterUpdate;
use algodeck::init::initialize;
use algodeck::model::{Classification, Difficulty};
use algodeck::store::CardStore;
use clap::Parser;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Text,
    Json,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let output = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Text
    };
    let mut ctx = initialize(cli.data.clone())?;
    let command = cli
        .command
        .unwrap_or_else(|| Commands::List(ListArgs::default()));

    let rendered = dispatch(&mut ctx.api, command, output)?;
    print!("{}", rendered);
    Ok(())
}

/// `warn` by default, `debug` with `-v`. `RUST_LOG` overrides both.
fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

fn dispatch<S: CardStore>(
    api: &mut DeckApi<S>,
    command: Commands,
    output: OutputMode,
) -> Result<String> {
    match command {
        Commands::List(args) => handle_list(api, &args, output),
        Commands::Show { id } => handle_show(api, &id, output),
        Commands::Tags => handle_tags(api, output),
        Commands::Init => finish(api.init()?, output, render::render_messages_of),
        Commands::Import { file, replace } => handle_import(api, &file, replace, output),
        Commands::Delete { id } => {
            finish(api.delete_card(&id)?, output, render::render_messages_of)
        }
        Commands::Config { key, value } => handle_config(api, key, value, output),
    }
}

/// Applies list flags to the session. Order matters: page size and
/// filter changes both move back to page 1, so the page goes last.
fn apply_list_args<S: CardStore>(api: &mut DeckApi<S>, args: &ListArgs) -> Result<()> {
    if let Some(per_page) = args.per_page {
        api.set_items_per_page(per_page)?;
    }

    let mut update = FilterUpdate::new()
        .classifications(args.classes.iter().map(|&c| Classification::from(c)).collect())
        .difficulties(args.difficulty.iter().map(|&d| Difficulty::from(d)).collect())
        .tags(args.tag.iter().cloned());
    if let Some(search) = &args.search {
        update = update.search(search.clone());
    }
    if let Some(sort) = args.sort {
        update = update.sort_by(sort.into());
    }
    api.update_filters(update);
    log::debug!("filters: {:?}", api.filters());

    if let Some(page) = args.page {
        api.set_page(page);
    }
    Ok(())
}

fn handle_list<S: CardStore>(
    api: &mut DeckApi<S>,
    args: &ListArgs,
    output: OutputMode,
) -> Result<String> {
    apply_list_args(api, args)?;
    finish(api.browse()?, output, render::render_list)
}

fn handle_show<S: CardStore>(api: &DeckApi<S>, id: &str, output: OutputMode) -> Result<String> {
    let result = api.view_card(id)?;
    finish(result, output, |r| {
        r.listed_cards
            .iter()
            .map(render::render_card)
            .collect::<Vec<_>>()
            .join("\n")
    })
}

fn handle_tags<S: CardStore>(api: &DeckApi<S>, output: OutputMode) -> Result<String> {
    finish(api.tags()?, output, render::render_tags)
}

fn handle_import<S: CardStore>(
    api: &mut DeckApi<S>,
    file: &Path,
    replace: bool,
    output: OutputMode,
) -> Result<String> {
    finish(
        api.import_cards(file, replace)?,
        output,
        render::render_messages_of,
    )
}

fn handle_config<S: CardStore>(
    api: &DeckApi<S>,
    key: Option<String>,
    value: Option<String>,
    output: OutputMode,
) -> Result<String> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };
    let show_all = matches!(action, ConfigAction::ShowAll);
    let result = api.config(action)?;
    finish(result, output, |r| match (&r.config, show_all) {
        (Some(config), true) => render::render_config(config),
        _ => render::render_messages(&r.messages),
    })
}

fn finish(
    result: CmdResult,
    output: OutputMode,
    render_text: impl FnOnce(&CmdResult) -> String,
) -> Result<String> {
    match output {
        OutputMode::Json => render::render_json(&result),
        OutputMode::Text => Ok(render_text(&result)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::setup::{ClassArg, SortArg};
    use algodeck::commands::DeckPaths;
    use algodeck::error::DeckError;
    use algodeck::filter::SortOption;
    use algodeck::store::memory::InMemoryStore;
    use tempfile::tempdir;

    fn seeded_api(dir: &Path) -> DeckApi<InMemoryStore> {
        let mut api = DeckApi::new(InMemoryStore::new(), DeckPaths::new(dir));
        api.init().unwrap();
        api
    }

    #[test]
    fn list_args_apply_page_after_filters() {
        let dir = tempdir().unwrap();
        let mut api = seeded_api(dir.path());
        let args = ListArgs {
            classes: vec![ClassArg::DataStructures],
            sort: Some(SortArg::Difficulty),
            page: Some(2),
            per_page: Some(6),
            ..Default::default()
        };

        apply_list_args(&mut api, &args).unwrap();
        assert_eq!(api.pagination().current_page(), 2);
        assert_eq!(api.pagination().items_per_page(), 6);
        assert_eq!(api.filters().sort_by, SortOption::Difficulty);
        assert_eq!(
            api.filters().classifications,
            vec![Classification::DataStructures]
        );
    }

    #[test]
    fn bad_page_size_is_an_error() {
        let dir = tempdir().unwrap();
        let mut api = seeded_api(dir.path());
        let args = ListArgs {
            per_page: Some(7),
            ..Default::default()
        };
        assert!(matches!(
            handle_list(&mut api, &args, OutputMode::Text),
            Err(DeckError::InvalidPageSize(7))
        ));
    }

    #[test]
    fn json_output_is_the_command_result() {
        let dir = tempdir().unwrap();
        let mut api = seeded_api(dir.path());
        let args = ListArgs {
            search: Some("halving".into()),
            ..Default::default()
        };

        let out = handle_list(&mut api, &args, OutputMode::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["page"]["total_items"], 1);
        assert_eq!(value["listed_cards"][0]["id"], "binary-search");
    }

    #[test]
    fn config_without_key_shows_all() {
        let dir = tempdir().unwrap();
        let api = seeded_api(dir.path());
        let out = handle_config(&api, None, None, OutputMode::Text).unwrap();
        assert!(out.contains("items-per-page = 12"));
    }
}
