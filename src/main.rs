use std::io::{self, BufRead};
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use log::debug;
use serde::Serialize;

use vitrine::{
    advance, window, CatalogHandle, CatalogIndex, Intent, JsonFileProvider, Result,
    SearchEngine, SearchSession, Settings, ViewItem,
};

mod cli;
use cli::display::{self, print_outcome, print_stats};
use cli::{Cli, Commands};

/// JSON form of one windowed outcome.
#[derive(Serialize)]
struct JsonOutcome<'a> {
    query: &'a str,
    intent: &'a Intent,
    total_rows: usize,
    items: &'a [ViewItem],
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!("settings: {:?}", settings);

    match cli.command {
        Commands::Search {
            catalog,
            queries,
            more,
            json,
        } => run_search(&settings, &catalog, &queries, more, json),
        Commands::Inspect { catalog } => run_inspect(&settings, &catalog),
        Commands::Interactive { catalog } => run_interactive(&settings, &catalog),
    }
}

fn run_search(
    settings: &Settings,
    catalog: &Path,
    queries: &[String],
    more: usize,
    json: bool,
) -> Result<()> {
    let handle = CatalogHandle::load(&JsonFileProvider::new(catalog))?;
    let engine = SearchEngine::new(handle.current(), settings.tuning);
    let chips = engine
        .index()
        .quick_categories(settings.session.quick_categories);

    let batch = settings.session.batch_size;
    let loaded = (0..more).fold(batch, |loaded, _| advance(loaded, batch));

    for outcome in engine.search_many(queries) {
        let visible = window(&outcome.view, loaded);
        if json {
            let payload = JsonOutcome {
                query: &outcome.query,
                intent: &outcome.intent,
                total_rows: outcome.product_rows(),
                items: visible,
            };
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            print_outcome(&outcome, engine.index(), visible, &chips);
        }
    }
    Ok(())
}

fn run_inspect(settings: &Settings, catalog: &Path) -> Result<()> {
    let handle = CatalogHandle::load(&JsonFileProvider::new(catalog))?;
    let index = handle.current();
    let chips = index.quick_categories(settings.session.quick_categories);
    print_stats(&catalog.display().to_string(), &index.stats(), &chips);
    Ok(())
}

/// What one stdin line asks the session to do.
#[derive(Debug, PartialEq)]
enum Command<'a> {
    Query(&'a str),
    More,
    Pick(usize),
    Chip(&'a str),
    Reload,
    Quit,
}

fn parse_command(line: &str) -> Command<'_> {
    let Some(rest) = line.strip_prefix(':') else {
        return Command::Query(line);
    };
    let (word, arg) = match rest.split_once(char::is_whitespace) {
        Some((word, arg)) => (word, arg.trim()),
        None => (rest, ""),
    };
    match word {
        "more" | "m" => Command::More,
        "pick" | "p" => arg.parse().map(Command::Pick).unwrap_or(Command::Query(line)),
        "chip" | "c" if !arg.is_empty() => Command::Chip(arg),
        "reload" => Command::Reload,
        "quit" | "q" => Command::Quit,
        _ => Command::Query(line),
    }
}

fn render(session: &SearchSession, index: &CatalogIndex) {
    print_outcome(
        session.outcome(),
        index,
        session.visible_items(),
        &session.quick_categories(),
    );
}

/// Stdin is read on its own thread so the loop can wait on either the next
/// line or the debounce deadline, whichever comes first.
fn run_interactive(settings: &Settings, catalog: &Path) -> Result<()> {
    let provider = JsonFileProvider::new(catalog);
    let handle = CatalogHandle::load(&provider)?;
    let mut session = SearchSession::new(handle.clone(), settings.tuning, settings.session);

    let (tx, rx) = mpsc::channel::<String>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    render(&session, &handle.current());

    loop {
        let wait = session
            .deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::from_secs(3600));

        let line = match rx.recv_timeout(wait) {
            Ok(line) => line,
            Err(RecvTimeoutError::Timeout) => {
                if session.tick(Instant::now()) {
                    render(&session, &handle.current());
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => {
                if let Some(deadline) = session.deadline() {
                    if session.tick(deadline) {
                        render(&session, &handle.current());
                    }
                }
                return Ok(());
            }
        };

        let now = Instant::now();
        match parse_command(line.trim()) {
            Command::Query(text) => session.set_query(text, now),
            Command::More => {
                if session.on_scroll_near_end() {
                    render(&session, &handle.current());
                } else {
                    println!("{}", display::themed(display::GRAY, &[], "all results shown"));
                }
            }
            Command::Pick(n) => {
                let names = session.did_you_mean();
                match n.checked_sub(1).and_then(|i| names.get(i)) {
                    Some(name) => session.select_suggestion(name, now),
                    None => println!("no suggestion #{}", n),
                }
            }
            Command::Chip(arg) => {
                let chips = session.quick_categories();
                let picked = arg
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .and_then(|i| chips.get(i).cloned())
                    .unwrap_or_else(|| arg.to_string());
                session.select_chip(&picked, now);
            }
            Command::Reload => match handle.refresh(&provider) {
                Ok(stats) => {
                    println!(
                        "reloaded: {} categories, {} products",
                        stats.categories, stats.products
                    );
                    session.catalog_refreshed(now);
                }
                // Keep serving the catalog we have.
                Err(e) => eprintln!("❌ {}", e),
            },
            Command::Quit => return Ok(()),
        }
    }
}
