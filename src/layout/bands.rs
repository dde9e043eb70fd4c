// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use rayon::prelude::*;
use schemars::JsonSchema;
use serde::Serialize;

use super::config::LayoutConfig;
use super::layered::layout_layers;
use crate::model::snapshot::QuestGraph;
use crate::model::{group_by_trader, Chain, Quest, TraderGroup};
use crate::query::longest_chain;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutNodeKind {
    TraderHeader,
    Quest,
}

/// A positioned node. `x`/`y` are the top-left corner in layout units.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct LayoutNode {
    pub id: String,
    pub kind: LayoutNodeKind,
    pub trader: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
    pub on_spine: bool,
    pub band: usize,
}

/// A prerequisite edge from `source` (required quest) to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, JsonSchema)]
pub struct LayoutEdge {
    pub source: String,
    pub target: String,
}

/// Placement summary of one trader group.
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct TraderBand {
    pub trader: String,
    pub band: usize,
    pub offset_x: f64,
    /// The group's longest chain, root first.
    pub spine: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, JsonSchema)]
pub struct QuestLayout {
    pub nodes: Vec<LayoutNode>,
    pub edges: Vec<LayoutEdge>,
    pub bands: Vec<TraderBand>,
}

impl QuestLayout {
    /// The quest node with this id. Header nodes are never returned, even when a quest id
    /// happens to equal a header id.
    pub fn node(&self, id: &str) -> Option<&LayoutNode> {
        self.nodes.iter().find(|node| node.kind == LayoutNodeKind::Quest && node.id == id)
    }

    /// The header node of a trader band.
    pub fn header(&self, trader: &str) -> Option<&LayoutNode> {
        self.nodes
            .iter()
            .find(|node| node.kind == LayoutNodeKind::TraderHeader && node.trader == trader)
    }
}

/// Id of a trader's header node, `header-<trader>`.
///
/// Header ids share the namespace of quest ids; a quest named like a header keeps its node
/// and `kind` tells the two apart.
pub fn header_id(trader: &str) -> String {
    format!("header-{trader}")
}

/// Band slot of the group at sorted position `i` out of `n`: center first, then alternating
/// left and right.
pub(crate) fn band_index(i: usize, n: usize) -> usize {
    let center = n / 2;
    if i == 0 {
        center
    } else if i % 2 == 1 {
        center - (i + 1) / 2
    } else {
        center + i / 2
    }
}

/// One group laid out relative to its band origin.
struct GroupLayout<'a> {
    trader: &'a str,
    spine: Chain,
    nodes: Vec<(&'a Quest, f64, f64, bool)>,
    edges: Vec<LayoutEdge>,
    extent: f64,
}

fn layout_group<'a>(group: &TraderGroup<'a>, config: &LayoutConfig) -> GroupLayout<'a> {
    let graph = QuestGraph::new(group.quests.iter().copied());
    let spine = longest_chain(group.quests.iter().copied());
    let spine_indices =
        spine.iter().filter_map(|id| graph.index_of(id.as_str())).collect::<Vec<_>>();

    let layered = layout_layers(&graph, &spine_indices);

    let mut nodes = Vec::with_capacity(graph.len());
    let mut extent = config.node_width;
    for (idx, quest) in graph.quests().iter().enumerate() {
        let (center_x, center_y) = layered.center(idx, config);
        let on_spine = layered.is_pinned(idx);
        let x = if on_spine {
            0.0
        } else {
            center_x - config.node_width / 2.0 + config.column_step()
        };
        let y = center_y - config.node_height / 2.0;
        extent = extent.max(x + config.node_width);
        nodes.push((*quest, x, y, on_spine));
    }

    let mut seen = HashSet::new();
    let mut edges = Vec::new();
    for &quest in graph.quests() {
        for req in quest.requirement_ids() {
            if graph.index_of(req.as_str()).is_none() {
                continue;
            }
            if seen.insert((req.as_str(), quest.id().as_str())) {
                edges.push(LayoutEdge {
                    source: req.as_str().to_owned(),
                    target: quest.id().as_str().to_owned(),
                });
            }
        }
    }

    tracing::debug!(
        trader = group.trader,
        quests = graph.len(),
        ranks = layered.layers().len(),
        spine = spine.len(),
        extent,
        "laid out trader group"
    );

    GroupLayout { trader: group.trader, spine, nodes, edges, extent }
}

/// Lays quests out in vertical trader bands.
///
/// - Each trader group gets a layered layout of its internal edges with its longest chain
///   pinned to the left column of the band.
/// - Groups with longer chains sit closer to the middle: the longest takes the center band,
///   the rest alternate left and right.
/// - Bands are `max(band_width, widest group + node_sep)` apart, so no two groups overlap.
/// - Requirements that cross traders, or point outside the input, produce no edge.
pub fn layout_quests<'a>(
    quests: impl IntoIterator<Item = &'a Quest>,
    config: &LayoutConfig,
) -> QuestLayout {
    let groups = group_by_trader(quests);
    let mut laid_out =
        groups.par_iter().map(|group| layout_group(group, config)).collect::<Vec<_>>();

    // Stable: equal chain lengths keep first-appearance order.
    laid_out.sort_by(|a, b| b.spine.len().cmp(&a.spine.len()));

    let widest = laid_out.iter().map(|group| group.extent).fold(0.0_f64, f64::max);
    let stride = config.band_width.max(widest + config.node_sep);
    let band_count = laid_out.len();

    let mut layout = QuestLayout::default();
    for (i, group) in laid_out.into_iter().enumerate() {
        let band = band_index(i, band_count);
        let offset_x = band as f64 * stride;

        let header = header_id(group.trader);
        if group.nodes.iter().any(|(quest, ..)| quest.id().as_str() == header) {
            tracing::warn!(id = %header, "quest id collides with a trader header id");
        }
        layout.nodes.push(LayoutNode {
            id: header,
            kind: LayoutNodeKind::TraderHeader,
            trader: group.trader.to_owned(),
            label: group.trader.to_owned(),
            x: offset_x,
            y: -2.0 * config.node_height,
            on_spine: false,
            band,
        });
        for (quest, x, y, on_spine) in group.nodes {
            layout.nodes.push(LayoutNode {
                id: quest.id().as_str().to_owned(),
                kind: LayoutNodeKind::Quest,
                trader: group.trader.to_owned(),
                label: quest.name().to_owned(),
                x: x + offset_x,
                y,
                on_spine,
                band,
            });
        }
        layout.edges.extend(group.edges);
        layout.bands.push(TraderBand {
            trader: group.trader.to_owned(),
            band,
            offset_x,
            spine: group.spine.iter().map(|id| id.as_str().to_owned()).collect(),
        });
    }

    layout
}
