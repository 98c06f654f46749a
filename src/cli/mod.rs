// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the vitrine command-line interface.
//!
//! Three subcommands over a catalog JSON file: `search` to resolve one or
//! more queries, `inspect` to see what the flattener kept, and `interactive`
//! to drive a debounced session from stdin the way a search box would.

pub mod display;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "vitrine",
    about = "Catalog fuzzy search and intent resolution",
    version
)]
pub struct Cli {
    /// Settings file (TOML). Defaults to ./vitrine.toml when present
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve queries against a catalog and print the results panel
    Search {
        /// Catalog JSON (`[{id, name, subcategories: [...]}]`)
        catalog: PathBuf,

        /// One or more queries, each evaluated independently
        #[arg(required = true)]
        queries: Vec<String>,

        /// Extra batches to reveal, as if the shopper scrolled
        #[arg(short, long, default_value = "0")]
        more: usize,

        /// Print the outcome as JSON instead of a panel
        #[arg(long)]
        json: bool,
    },

    /// Show index statistics and quick categories for a catalog
    Inspect {
        /// Catalog JSON
        catalog: PathBuf,
    },

    /// Line-driven search session over stdin
    ///
    /// Plain lines replace the query. `:more` scrolls, `:pick N` takes a
    /// "did you mean" entry, `:chip N` takes a chip, `:reload` re-reads the
    /// catalog, `:quit` exits.
    Interactive {
        /// Catalog JSON
        catalog: PathBuf,
    },
}
