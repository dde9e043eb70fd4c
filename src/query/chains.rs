// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashSet;

use crate::model::snapshot::QuestGraph;
use crate::model::{Chain, Quest, QuestId};

/// Enumerates every root-to-leaf chain.
///
/// Roots are visited in input order and children in input order, so the output order is
/// stable for a given snapshot. Diamonds produce one chain per distinct walk. A child that is
/// already on the current walk is not entered again; when that leaves a quest without any
/// enterable child the walk ends there.
pub fn enumerate_chains<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Vec<Chain> {
    let graph = QuestGraph::new(quests);
    let mut chains = Vec::new();
    let mut walk = ChainWalk { path: Vec::new(), on_path: vec![false; graph.len()] };

    for root in graph.roots() {
        walk.descend(&graph, root, &mut chains);
    }

    chains
}

/// Depth-first walk with an explicit frame stack; `path[i]` is the quest of `frames[i]`.
struct ChainWalk {
    path: Vec<usize>,
    on_path: Vec<bool>,
}

struct WalkFrame {
    cursor: usize,
    extended: bool,
}

impl ChainWalk {
    fn enter(&mut self, idx: usize, frames: &mut Vec<WalkFrame>) {
        self.path.push(idx);
        self.on_path[idx] = true;
        frames.push(WalkFrame { cursor: 0, extended: false });
    }

    fn descend(&mut self, graph: &QuestGraph<'_>, root: usize, chains: &mut Vec<Chain>) {
        let mut frames = Vec::new();
        self.enter(root, &mut frames);

        while let Some(frame) = frames.last_mut() {
            let Some(&idx) = self.path.last() else { break };
            let children = graph.children(idx);
            let mut next = None;
            while let Some(&child) = children.get(frame.cursor) {
                frame.cursor += 1;
                if self.on_path[child] {
                    tracing::debug!(
                        from = %graph.quest(idx).id(),
                        to = %graph.quest(child).id(),
                        "skipping prerequisite cycle while enumerating chains"
                    );
                    continue;
                }
                frame.extended = true;
                next = Some(child);
                break;
            }

            if let Some(child) = next {
                self.enter(child, &mut frames);
                continue;
            }

            if !frame.extended {
                chains.push(self.path.iter().map(|&i| graph.quest(i).id().clone()).collect());
            }
            frames.pop();
            self.on_path[idx] = false;
            self.path.pop();
        }
    }
}

/// Keeps the chains that start with `prefix`, dropping exact duplicates.
///
/// Chains shorter than the prefix never match. The first occurrence of a duplicate is kept
/// and input order is preserved.
pub fn filter_chains<S: AsRef<str>>(chains: &[Chain], prefix: &[S]) -> Vec<Chain> {
    let mut seen: HashSet<&[QuestId]> = HashSet::new();
    let mut filtered = Vec::new();

    for chain in chains {
        if chain.len() < prefix.len() {
            continue;
        }
        let matches =
            chain.iter().zip(prefix).all(|(id, expected)| id.as_str() == expected.as_ref());
        if matches && seen.insert(chain.as_slice()) {
            filtered.push(chain.clone());
        }
    }

    filtered
}

/// Ids of quests without task prerequisites, in input order.
pub fn roots<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Vec<QuestId> {
    quests.into_iter().filter(|quest| quest.is_root()).map(|quest| quest.id().clone()).collect()
}

/// Ids of quests that no other quest in the input requires, in input order.
pub fn leaves<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Vec<QuestId> {
    let graph = QuestGraph::new(quests);
    (0..graph.len())
        .filter(|&idx| graph.children(idx).is_empty())
        .map(|idx| graph.quest(idx).id().clone())
        .collect()
}
