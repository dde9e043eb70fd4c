// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::config::LayoutConfig;
use crate::model::snapshot::QuestGraph;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct NodePlacement {
    pub(crate) layer: usize,
    pub(crate) index_in_layer: usize,
}

/// Layer assignment and in-layer order for one quest graph, indexed like the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LayeredLayout {
    layers: Vec<Vec<usize>>,
    placements: Vec<NodePlacement>,
    pinned: Vec<bool>,
}

impl LayeredLayout {
    pub(crate) fn layers(&self) -> &[Vec<usize>] {
        &self.layers
    }

    pub(crate) fn placement(&self, idx: usize) -> NodePlacement {
        self.placements[idx]
    }

    pub(crate) fn is_pinned(&self, idx: usize) -> bool {
        self.pinned[idx]
    }

    /// Center point of a node, ranks running top to bottom.
    pub(crate) fn center(&self, idx: usize, config: &LayoutConfig) -> (f64, f64) {
        let placement = self.placement(idx);
        let x = placement.index_in_layer as f64 * config.column_step() + config.node_width / 2.0;
        let y = placement.layer as f64 * config.rank_step() + config.node_height / 2.0;
        (x, y)
    }
}

/// Topological order with a deterministic cycle release.
///
/// Ready nodes are taken lowest index first. When nothing is ready but nodes remain, the
/// lowest remaining index is released as if its unprocessed requirements were absent. A
/// pinned node is never released before its predecessor on the pinned chain, so every chain
/// edge points forward in the order.
fn topo_order(graph: &QuestGraph<'_>, chain_pred: &[Option<usize>]) -> Vec<usize> {
    let mut indegree = (0..graph.len()).map(|idx| graph.parents(idx).len()).collect::<Vec<_>>();
    let mut done = vec![false; graph.len()];
    let mut ready =
        (0..graph.len()).filter(|&idx| indegree[idx] == 0).collect::<BTreeSet<usize>>();

    let mut topo = Vec::with_capacity(graph.len());
    while topo.len() < graph.len() {
        let next = match ready.pop_first() {
            Some(next) => next,
            None => {
                let releasable =
                    |idx: usize| !done[idx] && chain_pred[idx].map_or(true, |pred| done[pred]);
                let Some(released) = (0..graph.len())
                    .find(|&idx| releasable(idx))
                    .or_else(|| (0..graph.len()).find(|&idx| !done[idx]))
                else {
                    break;
                };
                tracing::warn!(
                    quest = %graph.quest(released).id(),
                    "prerequisite cycle in layout group; releasing quest"
                );
                released
            }
        };
        if std::mem::replace(&mut done[next], true) {
            continue;
        }
        topo.push(next);

        for &child in graph.children(next) {
            if done[child] {
                continue;
            }
            indegree[child] = indegree[child].saturating_sub(1);
            if indegree[child] == 0 {
                ready.insert(child);
            }
        }
    }

    topo
}

/// Longest-path layering over `topo`; edges pointing backwards in `topo` are ignored.
fn assign_layers(graph: &QuestGraph<'_>, topo: &[usize]) -> Vec<usize> {
    let mut position = vec![0usize; graph.len()];
    for (pos, &idx) in topo.iter().enumerate() {
        position[idx] = pos;
    }

    let mut layers = vec![0usize; graph.len()];
    for &from in topo {
        for &to in graph.children(from) {
            if position[to] <= position[from] {
                continue;
            }
            layers[to] = layers[to].max(layers[from] + 1);
        }
    }

    layers
}

fn barycenter(preds: &[usize], prev_positions: &[Option<usize>]) -> Option<(usize, usize)> {
    let (sum, count) = preds
        .iter()
        .filter_map(|&p| prev_positions[p])
        .fold((0usize, 0usize), |(sum, count), pos| (sum + pos, count + 1));
    (count > 0).then_some((sum, count))
}

fn sort_layer_by_barycenter(
    layer_nodes: &mut [usize],
    prev_positions: &[Option<usize>],
    graph: &QuestGraph<'_>,
    pinned: &[bool],
) {
    layer_nodes.sort_by(|&a, &b| {
        let pin = pinned[b].cmp(&pinned[a]);
        let bary_a = barycenter(graph.parents(a), prev_positions);
        let bary_b = barycenter(graph.parents(b), prev_positions);

        let by_bary = match (bary_a, bary_b) {
            (None, None) => std::cmp::Ordering::Equal,
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (Some((sum_a, count_a)), Some((sum_b, count_b))) => {
                // Compare sum_a/count_a vs sum_b/count_b without floats.
                let left = (sum_a as u128) * (count_b as u128);
                let right = (sum_b as u128) * (count_a as u128);
                left.cmp(&right)
            }
        };
        pin.then(by_bary).then_with(|| a.cmp(&b))
    });
}

/// Deterministic layered layout of one quest graph.
///
/// - `spine` is a chain of node indices (each a child of the one before) that gets pinned.
/// - Ranks are longest-path depths over a topological order (cycles are released, never
///   rejected). Every spine node ranks strictly below its spine predecessor, even inside a
///   cycle.
/// - Within a rank, pinned nodes come first, then nodes are ordered by one downward
///   barycenter sweep, falling back to input order.
pub(crate) fn layout_layers(graph: &QuestGraph<'_>, spine: &[usize]) -> LayeredLayout {
    let mut pinned = vec![false; graph.len()];
    let mut chain_pred = vec![None; graph.len()];
    for (pos, &idx) in spine.iter().enumerate() {
        pinned[idx] = true;
        if pos > 0 {
            chain_pred[idx] = Some(spine[pos - 1]);
        }
    }

    let topo = topo_order(graph, &chain_pred);
    let node_layers = assign_layers(graph, &topo);

    let layer_count = node_layers.iter().copied().max().map_or(0, |max| max + 1);
    let mut layers = vec![Vec::<usize>::new(); layer_count];
    for (idx, &layer) in node_layers.iter().enumerate() {
        layers[layer].push(idx);
    }

    if let Some(first) = layers.first_mut() {
        first.sort_by(|&a, &b| pinned[b].cmp(&pinned[a]).then(a.cmp(&b)));
    }

    let mut prev_positions = vec![None; graph.len()];
    for layer_idx in 1..layers.len() {
        if let Some(stale) = layer_idx.checked_sub(2) {
            for &idx in &layers[stale] {
                prev_positions[idx] = None;
            }
        }
        for (pos, &idx) in layers[layer_idx - 1].iter().enumerate() {
            prev_positions[idx] = Some(pos);
        }
        sort_layer_by_barycenter(&mut layers[layer_idx], &prev_positions, graph, &pinned);
    }

    let mut placements = vec![NodePlacement { layer: 0, index_in_layer: 0 }; graph.len()];
    for (layer, nodes) in layers.iter().enumerate() {
        for (index_in_layer, &idx) in nodes.iter().enumerate() {
            placements[idx] = NodePlacement { layer, index_in_layer };
        }
    }

    LayeredLayout { layers, placements, pinned }
}
