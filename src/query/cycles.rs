// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::model::snapshot::QuestGraph;
use crate::model::{Quest, QuestId};

const UNINDEXED: usize = usize::MAX;

struct Tarjan<'g, 'a> {
    graph: &'g QuestGraph<'a>,
    next_index: usize,
    indices: Vec<usize>,
    lowlink: Vec<usize>,
    stack: Vec<usize>,
    on_stack: Vec<bool>,
    sccs: Vec<Vec<usize>>,
}

impl<'g, 'a> Tarjan<'g, 'a> {
    fn new(graph: &'g QuestGraph<'a>) -> Self {
        let len = graph.len();
        Self {
            graph,
            next_index: 0,
            indices: vec![UNINDEXED; len],
            lowlink: vec![UNINDEXED; len],
            stack: Vec::new(),
            on_stack: vec![false; len],
            sccs: Vec::new(),
        }
    }

    fn open(&mut self, v: usize) {
        self.indices[v] = self.next_index;
        self.lowlink[v] = self.next_index;
        self.next_index += 1;

        self.stack.push(v);
        self.on_stack[v] = true;
    }

    /// Iterative Tarjan from `root`; each frame is a node and the position of its next child.
    fn strongconnect(&mut self, root: usize) {
        let graph = self.graph;
        self.open(root);
        let mut frames = vec![(root, 0usize)];

        while let Some(frame) = frames.last_mut() {
            let (v, pos) = *frame;
            if let Some(&w) = graph.children(v).get(pos) {
                frame.1 += 1;
                if self.indices[w] == UNINDEXED {
                    self.open(w);
                    frames.push((w, 0));
                } else if self.on_stack[w] {
                    self.lowlink[v] = self.lowlink[v].min(self.indices[w]);
                }
                continue;
            }

            frames.pop();
            if let Some(&(parent, _)) = frames.last() {
                self.lowlink[parent] = self.lowlink[parent].min(self.lowlink[v]);
            }
            self.close(v);
        }
    }

    fn close(&mut self, v: usize) {
        if self.lowlink[v] == self.indices[v] {
            let mut scc = Vec::new();
            while let Some(w) = self.stack.pop() {
                self.on_stack[w] = false;
                scc.push(w);
                if w == v {
                    break;
                }
            }
            self.sccs.push(scc);
        }
    }
}

/// Reports prerequisite cycles as groups of quest ids.
///
/// Each group is a strongly connected component of the requirement relation with more than one
/// quest, or a single quest that requires itself. Ids inside a group are sorted and groups are
/// sorted, so the result is deterministic. Requirements pointing outside the input are ignored.
pub fn cycles<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Vec<Vec<QuestId>> {
    let graph = QuestGraph::new(quests);
    let mut tarjan = Tarjan::new(&graph);
    for v in 0..graph.len() {
        if tarjan.indices[v] == UNINDEXED {
            tarjan.strongconnect(v);
        }
    }

    let mut cycles = tarjan
        .sccs
        .into_iter()
        .filter(|scc| match scc.as_slice() {
            [] => false,
            [single] => graph.children(*single).contains(single),
            _ => true,
        })
        .map(|scc| {
            let mut ids =
                scc.into_iter().map(|idx| graph.quest(idx).id().clone()).collect::<Vec<_>>();
            ids.sort();
            ids
        })
        .collect::<Vec<_>>();

    cycles.sort();
    cycles
}
