// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;
use serde::Serialize;

use crate::model::snapshot::QuestGraph;
use crate::model::{group_by_trader, Chain, Quest};

/// A quest name of the form `<Base> - Part <N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct PartName<'a> {
    pub(crate) base: &'a str,
    pub(crate) part: u32,
}

impl PartName<'_> {
    fn is_followed_by(&self, other: &PartName<'_>) -> bool {
        self.base == other.base && self.part.checked_add(1) == Some(other.part)
    }
}

fn part_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)^\s*(.+?)\s*-\s*part\s*(\d+)\s*$").expect("part pattern compiles")
    })
}

pub(crate) fn parse_part(name: &str) -> Option<PartName<'_>> {
    let captures = part_pattern().captures(name)?;
    let base = captures.get(1)?.as_str().trim();
    let part = captures.get(2)?.as_str().parse::<u32>().ok()?;
    Some(PartName { base, part })
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Visit {
    Unvisited,
    InProgress,
    Done { len: usize, next: Option<usize> },
}

/// One quest whose length is being computed.
struct Frame {
    idx: usize,
    /// Set when the quest continues into its next numbered part.
    forced: bool,
    cursor: usize,
    best: usize,
    pick: Option<usize>,
}

/// Memoized longest-path search over one quest set. Lives for a single call.
///
/// The walk keeps its own frame stack, so chain depth is bounded by memory rather than by the
/// thread stack.
struct LongestPathSearch<'g, 'a> {
    graph: &'g QuestGraph<'a>,
    parts: Vec<Option<PartName<'a>>>,
    state: Vec<Visit>,
}

impl<'g, 'a> LongestPathSearch<'g, 'a> {
    fn new(graph: &'g QuestGraph<'a>) -> Self {
        let parts = graph.quests().iter().map(|quest| parse_part(quest.name())).collect();
        Self { graph, parts, state: vec![Visit::Unvisited; graph.len()] }
    }

    fn is_in_progress(&self, idx: usize) -> bool {
        self.state[idx] == Visit::InProgress
    }

    fn done_len(&self, idx: usize) -> usize {
        match self.state[idx] {
            Visit::Done { len, .. } => len,
            _ => 0,
        }
    }

    fn next_part_child(&self, idx: usize) -> Option<usize> {
        let part = self.parts[idx]?;
        self.graph.children(idx).iter().copied().find(|&child| {
            self.parts[child].is_some_and(|child_part| part.is_followed_by(&child_part))
        })
    }

    fn enter(&mut self, idx: usize) -> Frame {
        self.state[idx] = Visit::InProgress;
        let pick = self.next_part_child(idx).filter(|&child| !self.is_in_progress(child));
        Frame { idx, forced: pick.is_some(), cursor: 0, best: 0, pick }
    }

    /// Next child of `frame` that still needs its length computed. Children already measured
    /// are folded into the frame's best pick on the way.
    fn pending_child(&self, frame: &mut Frame) -> Option<usize> {
        if frame.forced {
            return frame.pick.filter(|&child| self.state[child] == Visit::Unvisited);
        }

        let graph = self.graph;
        let children = graph.children(frame.idx);
        while let Some(&child) = children.get(frame.cursor) {
            match self.state[child] {
                Visit::Unvisited => return Some(child),
                Visit::InProgress => {
                    tracing::debug!(
                        from = %graph.quest(frame.idx).id(),
                        to = %graph.quest(child).id(),
                        "ignoring prerequisite cycle while measuring chain length"
                    );
                }
                Visit::Done { len, .. } => {
                    if len > frame.best {
                        frame.best = len;
                        frame.pick = Some(child);
                    }
                }
            }
            frame.cursor += 1;
        }
        None
    }

    fn len(&mut self, start: usize) -> usize {
        match self.state[start] {
            Visit::Done { len, .. } => return len,
            // Only reachable through a cycle; callers skip in-progress quests.
            Visit::InProgress => return 0,
            Visit::Unvisited => {}
        }

        let mut frames = vec![self.enter(start)];
        while let Some(frame) = frames.last_mut() {
            if let Some(child) = self.pending_child(frame) {
                let next = self.enter(child);
                frames.push(next);
                continue;
            }

            let Some(frame) = frames.pop() else { break };
            let len = 1 + frame.pick.map_or(0, |child| self.done_len(child));
            self.state[frame.idx] = Visit::Done { len, next: frame.pick };
        }

        self.done_len(start)
    }

    fn next(&self, idx: usize) -> Option<usize> {
        match self.state[idx] {
            Visit::Done { next, .. } => next,
            _ => None,
        }
    }
}

/// Picks the representative chain of a quest set (usually one trader's quests).
///
/// At every quest the continuation is the child named `<Base> - Part <N+1>` when the quest is
/// itself `<Base> - Part <N>`, regardless of subtree lengths; otherwise it is the child with the
/// longest chain below it, the first child (input order) winning ties. The chain starts at the
/// root with the greatest length, the first root winning ties. Requirements that point outside
/// the set are ignored.
///
/// Cycles are broken by skipping any child whose length is still being computed, so the quest
/// that closes a cycle ends the chain. Returns an empty chain when the set has no roots.
pub fn longest_chain<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Chain {
    let graph = QuestGraph::new(quests);
    let mut search = LongestPathSearch::new(&graph);

    let mut best: Option<(usize, usize)> = None;
    for root in graph.roots() {
        let len = search.len(root);
        if best.map_or(true, |(_, best_len)| len > best_len) {
            best = Some((root, len));
        }
    }

    let mut chain = Chain::new();
    let mut visited = vec![false; graph.len()];
    let mut cursor = best.map(|(root, _)| root);
    while let Some(idx) = cursor {
        if std::mem::replace(&mut visited[idx], true) {
            break;
        }
        chain.push(graph.quest(idx).id().clone());
        cursor = search.next(idx);
    }

    chain
}

/// The representative chain of one trader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraderChain {
    pub trader: String,
    pub chain: Chain,
}

/// Computes [`longest_chain`] for every trader group, groups in first-appearance order.
///
/// Groups are independent, so they are evaluated in parallel.
pub fn longest_chains_by_trader<'a>(
    quests: impl IntoIterator<Item = &'a Quest>,
) -> Vec<TraderChain> {
    let groups = group_by_trader(quests);
    groups
        .par_iter()
        .map(|group| {
            let chain = longest_chain(group.quests.iter().copied());
            tracing::debug!(
                trader = group.trader,
                quests = group.quests.len(),
                len = chain.len(),
                "selected longest chain"
            );
            TraderChain { trader: group.trader.to_owned(), chain }
        })
        .collect()
}
