//! Command-line caller for the movie catalog.
//!
//! Loads the catalog (bundled records unless `--catalog` or
//! `REELSHELF_CATALOG` names a file), runs one search or genre listing, and
//! prints the structured result as JSON on stdout. Wording is left to whoever
//! reads the JSON. Exits 2 when the id argument is unusable.

use anyhow::{Context, Result, bail};
use reelshelf::{
    CatalogSource, MovieIndex, SearchOutcome, SearchRequest, ServiceConfig, init_logging,
    run_search,
};
use serde_json::json;
use std::env;
use std::path::PathBuf;

const EXIT_INVALID_ID: i32 = 2;

fn main() {
    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let args = CliArgs::parse()?;
    let config = ServiceConfig::from_env()?;
    init_logging(&config.logging)?;

    let source = match args.catalog {
        Some(path) => CatalogSource::File(path),
        None => config.catalog,
    };
    let index = MovieIndex::load(&source);

    let (output, code) = match args.mode {
        Mode::Genres => (json!({ "genres": index.all_genres() }), 0),
        Mode::Search(request) => {
            let outcome = run_search(&index, &request);
            let value = serde_json::to_value(&outcome).context("serializing search result")?;
            let code = if matches!(outcome, SearchOutcome::InvalidId { .. }) {
                EXIT_INVALID_ID
            } else {
                0
            };
            (value, code)
        }
    };

    println!("{output}");
    Ok(code)
}

enum Mode {
    Search(SearchRequest),
    Genres,
}

struct CliArgs {
    catalog: Option<PathBuf>,
    mode: Mode,
}

impl CliArgs {
    fn parse() -> Result<Self> {
        let mut args = env::args().skip(1);
        let mut catalog = None;
        let mut request = SearchRequest::default();
        let mut genres = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--catalog" => catalog = Some(PathBuf::from(expect_value(&mut args, "--catalog")?)),
                "--name" => request.name = Some(expect_value(&mut args, "--name")?),
                "--id" => request.id = Some(expect_value(&mut args, "--id")?),
                "--genre" => request.genre = Some(expect_value(&mut args, "--genre")?),
                "--genres" => genres = true,
                "--help" | "-h" => usage(0),
                other => bail!("unknown argument '{other}' (see --help)"),
            }
        }

        let mode = if genres {
            if request.name.is_some() || request.id.is_some() || request.genre.is_some() {
                bail!("--genres cannot be combined with search filters");
            }
            Mode::Genres
        } else {
            Mode::Search(request)
        };

        Ok(Self { catalog, mode })
    }
}

fn expect_value(args: &mut impl Iterator<Item = String>, flag: &str) -> Result<String> {
    args.next()
        .with_context(|| format!("{flag} requires a value"))
}

fn usage(code: i32) -> ! {
    eprintln!(
        "Usage: reelshelf-query [--catalog PATH] [--name TEXT] [--id N] [--genre TEXT]\n       reelshelf-query [--catalog PATH] --genres\n\nOptions:\n  --catalog PATH  Movie records JSON (default: $REELSHELF_CATALOG or bundled data).\n  --name TEXT     Case-insensitive title substring.\n  --id N          Movie id; narrows the search to one record.\n  --genre TEXT    Case-insensitive genre substring.\n  --genres        List distinct genres instead of searching.\n\nEnvironment:\n  REELSHELF_LOG         Log filter directive (default: info).\n  REELSHELF_LOG_FORMAT  text | json (default: text)."
    );
    std::process::exit(code);
}
