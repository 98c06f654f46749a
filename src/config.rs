// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Tuning constants and session settings, layered with Figment.
//!
//! Every threshold the intent resolver uses is a storefront tuning value, not
//! a derived quantity. They live here as named constants with their shipped
//! defaults, and can be overridden per deployment without touching code:
//!
//! 1. Built-in defaults (the constants below)
//! 2. `vitrine.toml`, or the file passed with `--config`
//! 3. `VITRINE_*` environment variables, nested with `__`
//!    (`VITRINE_TUNING__CATEGORY_ACCEPT=0.6`)
//!
//! # Example file
//!
//! ```toml
//! [tuning]
//! category_accept = 0.6
//!
//! [session]
//! batch_size = 30
//! ```

use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::scoring::{Scorer, SUBSTRING_BASE_SCORE, SUBSTRING_COVERAGE_WEIGHT};

// =============================================================================
// MATCHER THRESHOLDS (per kind)
// =============================================================================

/// Minimum similarity for a category to be a candidate at all.
pub const CATEGORY_MIN_SCORE: f64 = 0.55;

/// Minimum similarity for a subcategory candidate.
pub const SUBCATEGORY_MIN_SCORE: f64 = 0.50;

/// Minimum similarity for a product candidate.
pub const PRODUCT_MIN_SCORE: f64 = 0.50;

/// Candidates kept per kind.
pub const CANDIDATES_PER_KIND: usize = 5;

// =============================================================================
// INTENT ACCEPTANCE
// =============================================================================
// Category and subcategory names are short generic nouns that collide easily,
// so they need a higher bar before the resolver commits to them.

/// Boosted score a category needs to win.
pub const CATEGORY_ACCEPT: f64 = 0.58;

/// Boosted score a subcategory needs to win.
pub const SUBCATEGORY_ACCEPT: f64 = 0.55;

/// Boosted score a product needs to win.
pub const PRODUCT_ACCEPT: f64 = 0.55;

/// Added to a kind's best score when its name literally contains the query.
pub const INCLUDES_BOOST: f64 = 0.05;

/// "Did you mean" entries.
pub const MAX_SUGGESTIONS: usize = 3;

// =============================================================================
// BROAD RESULTS
// =============================================================================

/// Widened product threshold when no single intent wins.
pub const BROAD_MIN_SCORE: f64 = 0.45;

/// Product cap for broad results.
pub const BROAD_LIMIT: usize = 200;

// =============================================================================
// SESSION
// =============================================================================

/// Quiet period after the last keystroke before a query runs.
pub const DEBOUNCE_MS: u64 = 250;

/// Product rows revealed per scroll step.
pub const BATCH_SIZE: usize = 20;

/// Shortcut chips shown above the results.
pub const QUICK_CATEGORIES: usize = 8;

/// Scoring and intent thresholds.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub substring_base: f64,
    pub substring_weight: f64,
    pub category_min_score: f64,
    pub subcategory_min_score: f64,
    pub product_min_score: f64,
    pub candidates_per_kind: usize,
    pub category_accept: f64,
    pub subcategory_accept: f64,
    pub product_accept: f64,
    pub includes_boost: f64,
    pub max_suggestions: usize,
    pub broad_min_score: f64,
    pub broad_limit: usize,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            substring_base: SUBSTRING_BASE_SCORE,
            substring_weight: SUBSTRING_COVERAGE_WEIGHT,
            category_min_score: CATEGORY_MIN_SCORE,
            subcategory_min_score: SUBCATEGORY_MIN_SCORE,
            product_min_score: PRODUCT_MIN_SCORE,
            candidates_per_kind: CANDIDATES_PER_KIND,
            category_accept: CATEGORY_ACCEPT,
            subcategory_accept: SUBCATEGORY_ACCEPT,
            product_accept: PRODUCT_ACCEPT,
            includes_boost: INCLUDES_BOOST,
            max_suggestions: MAX_SUGGESTIONS,
            broad_min_score: BROAD_MIN_SCORE,
            broad_limit: BROAD_LIMIT,
        }
    }
}

impl Tuning {
    /// The similarity scorer these settings describe.
    pub fn scorer(&self) -> Scorer {
        Scorer {
            substring_base: self.substring_base,
            substring_weight: self.substring_weight,
        }
    }

    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("tuning.substring_base", self.substring_base),
            ("tuning.substring_weight", self.substring_weight),
            ("tuning.category_min_score", self.category_min_score),
            ("tuning.subcategory_min_score", self.subcategory_min_score),
            ("tuning.product_min_score", self.product_min_score),
            ("tuning.category_accept", self.category_accept),
            ("tuning.subcategory_accept", self.subcategory_accept),
            ("tuning.product_accept", self.product_accept),
            ("tuning.includes_boost", self.includes_boost),
            ("tuning.broad_min_score", self.broad_min_score),
        ];
        for (key, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidSetting {
                    key,
                    reason: format!("must be within [0, 1], got {}", value),
                });
            }
        }
        if self.candidates_per_kind == 0 {
            return Err(Error::InvalidSetting {
                key: "tuning.candidates_per_kind",
                reason: "must be at least 1".to_string(),
            });
        }
        if self.broad_limit == 0 {
            return Err(Error::InvalidSetting {
                key: "tuning.broad_limit",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}

/// Debounce and windowing for an interactive session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSettings {
    pub debounce_ms: u64,
    pub batch_size: usize,
    pub quick_categories: usize,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            debounce_ms: DEBOUNCE_MS,
            batch_size: BATCH_SIZE,
            quick_categories: QUICK_CATEGORIES,
        }
    }
}

/// Everything configurable, as loaded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub tuning: Tuning,
    pub session: SessionSettings,
}

/// File consulted when no explicit path is given.
pub const DEFAULT_CONFIG_FILE: &str = "vitrine.toml";

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "VITRINE_";

impl Settings {
    /// Defaults, then `path` (or `vitrine.toml`), then `VITRINE_*` env vars.
    ///
    /// A missing file is fine; a malformed one is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let file = path.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_FILE));
        Self::from_figment(Self::figment(file))
    }

    /// The layered provider stack, exposed so callers can merge more on top.
    pub fn figment(file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Settings::default()))
            .merge(Toml::file(file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let settings: Settings = figment.extract()?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        self.tuning.validate()?;
        if self.session.batch_size == 0 {
            return Err(Error::InvalidSetting {
                key: "session.batch_size",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
