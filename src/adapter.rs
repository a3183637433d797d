//! Graph data adapter - normalizes generic element records into node/link
//! tables.
//!
//! The host hands the canvas an arbitrary list of [`GraphElement`]s; this
//! module classifies them, resolves labels/tiers/colors, drops malformed or
//! dangling edges (best-effort rendering contract), and de-duplicates
//! repeated `(source, target, label)` combinations. Rebuilds are full
//! replacements, never incremental diffs.

use crate::constants::{DEFAULT_NODE_COLOR, FALLBACK_PALETTE, KIND_COLORS, USER_NODE_COLOR, color};
use crate::types::{GraphElement, GraphModel, SizeTier, ViewLink, ViewNode};
use anyhow::Context as _;
use gpui::Rgba;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;

/// Classification failures for individual elements. These never abort a
/// rebuild; the offending element is skipped and the failure logged.
#[derive(Error, Debug, PartialEq)]
pub enum AdapterError {
    #[error("element has no id")]
    MissingId,
    #[error("edge element is missing an endpoint")]
    MissingEndpoint,
    #[error("edge endpoint {0:?} is not in the node table")]
    DanglingEndpoint(String),
}

/// Parse a raw JSON array of elements, for hosts holding unparsed payloads.
pub fn elements_from_json(raw: &str) -> anyhow::Result<Vec<GraphElement>> {
    serde_json::from_str(raw).context("parsing graph elements")
}

/// Build node/link tables from a full element list.
///
/// Guarantees: every returned link references two present nodes, link ids
/// are unique, and identical input produces identical output.
pub fn build_model(elements: &[GraphElement]) -> GraphModel {
    crate::profile_function!();

    let mut nodes: Vec<ViewNode> = Vec::new();
    let mut node_ids: HashMap<String, usize> = HashMap::new();

    for element in elements.iter().filter(|e| !e.is_edge_like()) {
        match node_from_element(element) {
            Ok(node) => {
                if node_ids.contains_key(&node.id) {
                    debug!(id = %node.id, "skipping duplicate node id");
                    continue;
                }
                node_ids.insert(node.id.clone(), nodes.len());
                nodes.push(node);
            }
            Err(err) => debug!(%err, "skipping malformed node element"),
        }
    }

    let mut links: Vec<ViewLink> = Vec::new();
    let mut seen_triples: HashMap<(String, String, String), usize> = HashMap::new();

    for element in elements.iter().filter(|e| e.is_edge_like()) {
        match link_from_element(element, &node_ids) {
            Ok(mut link) => {
                let triple = (link.source.clone(), link.target.clone(), link.label.clone());
                let count = seen_triples.entry(triple).or_insert(0);
                *count += 1;
                // Repeated (source, target, label) combinations keep their
                // own record under a deterministic suffixed id.
                if *count > 1 {
                    link.id = format!("{}#{}", link.id, count);
                }
                links.push(link);
            }
            Err(err) => debug!(%err, "dropping edge element"),
        }
    }

    GraphModel::new(nodes, links)
}

fn node_from_element(element: &GraphElement) -> Result<ViewNode, AdapterError> {
    let id = element.id.clone().ok_or(AdapterError::MissingId)?;
    let label = element
        .label
        .clone()
        .or_else(|| element.short_label.clone())
        .or_else(|| element.display_name.clone())
        .unwrap_or_else(|| id.clone());

    Ok(ViewNode {
        size_tier: resolve_tier(element),
        color: resolve_color(element),
        id,
        label,
        position: (0.0, 0.0),
        pinned_position: None,
    })
}

fn link_from_element(
    element: &GraphElement,
    node_ids: &HashMap<String, usize>,
) -> Result<ViewLink, AdapterError> {
    let id = element.id.clone().ok_or(AdapterError::MissingId)?;
    let (Some(source), Some(target)) = (element.source.clone(), element.target.clone()) else {
        return Err(AdapterError::MissingEndpoint);
    };

    for endpoint in [&source, &target] {
        if !node_ids.contains_key(endpoint) {
            return Err(AdapterError::DanglingEndpoint(endpoint.clone()));
        }
    }

    Ok(ViewLink {
        id,
        source,
        target,
        label: element.label.clone().unwrap_or_default(),
    })
}

fn resolve_tier(element: &GraphElement) -> SizeTier {
    let episode_like = |s: &str| {
        let s = s.to_ascii_lowercase();
        s == "episode" || s == "episodic"
    };
    let from_kind = element.kind.as_deref().is_some_and(episode_like);
    let from_tags = element.tags.iter().any(|t| episode_like(t));
    if from_kind || from_tags {
        SizeTier::Episode
    } else {
        SizeTier::Entity
    }
}

/// Deterministic color from kind + tag set. A `user` tag wins outright,
/// then the known-kind table, then a palette slot picked by a stable hash
/// of the kind string.
fn resolve_color(element: &GraphElement) -> Rgba {
    if element.tags.iter().any(|t| t.eq_ignore_ascii_case("user")) {
        return color(USER_NODE_COLOR);
    }
    match element.kind.as_deref() {
        Some(kind) => {
            let key = kind.to_ascii_lowercase();
            if let Some(&hex) = KIND_COLORS.get(key.as_str()) {
                color(hex)
            } else {
                color(FALLBACK_PALETTE[stable_hash(&key) % FALLBACK_PALETTE.len()])
            }
        }
        None => color(DEFAULT_NODE_COLOR),
    }
}

/// FNV-1a over the bytes; stable across runs, unlike `DefaultHasher`.
fn stable_hash(s: &str) -> usize {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in s.bytes() {
        hash ^= b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash as usize
}
