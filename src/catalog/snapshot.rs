// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Wire shape of the catalog provider's response.
//!
//! Everything below the top-level array is read leniently. A node whose id
//! or name has the wrong type keeps that field as `None`, and an array
//! element that is not a node at all (`null`, a number) becomes an empty
//! node. Either way the flattener skips and counts it, so one bad product
//! never fails the whole snapshot.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::Result;
use crate::types::{Image, NodeId};

/// The full category → subcategory → product tree at one point in time.
#[derive(Serialize, Clone, Debug, Default, PartialEq)]
pub struct CatalogSnapshot {
    pub categories: Vec<RawCategory>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RawCategory {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<NodeId>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(alias = "path", deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<RawImage>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub subcategories: Vec<RawSubcategory>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RawSubcategory {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<NodeId>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(alias = "path", deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<RawImage>,
    #[serde(deserialize_with = "lenient_nodes")]
    pub products: Vec<RawProduct>,
}

#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
#[serde(default)]
pub struct RawProduct {
    #[serde(deserialize_with = "lenient_id")]
    pub id: Option<NodeId>,
    #[serde(deserialize_with = "lenient_text")]
    pub name: Option<String>,
    #[serde(alias = "path", deserialize_with = "lenient_text")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_images")]
    pub images: Vec<RawImage>,
}

/// Providers send either a bare URL or an `{url, alt}` object.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawImage {
    Url(String),
    Descriptor {
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
}

impl RawImage {
    /// Resolve to an [`Image`], dropping descriptors without a URL.
    pub fn resolve(&self) -> Option<Image> {
        match self {
            RawImage::Url(url) if !url.is_empty() => Some(Image {
                url: url.clone(),
                alt: None,
            }),
            RawImage::Descriptor { url: Some(url), alt } if !url.is_empty() => Some(Image {
                url: url.clone(),
                alt: alt.clone(),
            }),
            _ => None,
        }
    }
}

/// `GetCatalog()` returns a bare array; admin-console exports wrap it.
#[derive(Deserialize)]
struct Listed(#[serde(deserialize_with = "node_list")] Vec<RawCategory>);

#[derive(Deserialize)]
struct Wrapped {
    #[serde(deserialize_with = "node_list")]
    categories: Vec<RawCategory>,
}

impl CatalogSnapshot {
    /// Parse either top-level form.
    ///
    /// The form is chosen from the first significant byte so a syntax error
    /// keeps serde_json's line and column.
    pub fn from_json(raw: &str) -> Result<Self> {
        let categories = match raw.trim_start().as_bytes().first() {
            Some(b'{') => serde_json::from_str::<Wrapped>(raw)?.categories,
            _ => serde_json::from_str::<Listed>(raw)?.0,
        };
        Ok(CatalogSnapshot { categories })
    }
}

/// Integers and strings are ids; anything else is a missing id.
fn lenient_id<'de, D>(deserializer: D) -> std::result::Result<Option<NodeId>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_i64().map(NodeId::Int),
        Value::String(s) => Some(NodeId::Text(s)),
        _ => None,
    })
}

fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// Unreadable images are dropped; they are decoration, not nodes.
fn lenient_images<'de, D>(deserializer: D) -> std::result::Result<Vec<RawImage>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    })
}

/// Child arrays: `null` or a non-array is empty, a bad element is an empty node.
fn lenient_nodes<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Array(items) => to_nodes(items),
        _ => Vec::new(),
    })
}

/// The top-level list must be an array; its elements are read leniently.
fn node_list<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(to_nodes(Vec::<Value>::deserialize(deserializer)?))
}

fn to_nodes<T: DeserializeOwned + Default>(items: Vec<Value>) -> Vec<T> {
    items
        .into_iter()
        .map(|item| serde_json::from_value(item).unwrap_or_default())
        .collect()
}
