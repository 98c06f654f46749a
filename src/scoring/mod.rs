// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how candidates get their numbers and their order.
//!
//! A score is a pure function of `(query, name)`. Order is score first, then
//! position in the flat index, so equal scores never shuffle between runs.

mod core;
pub mod ranking;

pub use self::core::*;
