// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::HashMap;

use smallvec::SmallVec;

use super::ids::QuestId;
use super::quest::Quest;

pub(crate) type Adjacency = SmallVec<[usize; 4]>;

/// An ordered, read-only collection of quests with unique ids.
///
/// Snapshot order (the order quests were supplied in) is the iteration order every query
/// uses for roots, children and trader groups.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestSnapshot {
    quests: Vec<Quest>,
    index: HashMap<QuestId, usize>,
}

impl QuestSnapshot {
    pub fn new(quests: Vec<Quest>) -> Result<Self, SnapshotError> {
        let mut index = HashMap::with_capacity(quests.len());
        for (idx, quest) in quests.iter().enumerate() {
            if index.insert(quest.id().clone(), idx).is_some() {
                return Err(SnapshotError::DuplicateQuestId(quest.id().clone()));
            }
        }
        Ok(Self { quests, index })
    }

    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn len(&self) -> usize {
        self.quests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quests.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.index.get(id).map(|&idx| &self.quests[idx])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn trader_groups(&self) -> Vec<TraderGroup<'_>> {
        group_by_trader(&self.quests)
    }

    pub fn into_quests(self) -> Vec<Quest> {
        self.quests
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate quest id {0}")]
    DuplicateQuestId(QuestId),
}

/// The quests owned by one trader, in snapshot order.
#[derive(Debug, Clone, PartialEq)]
pub struct TraderGroup<'a> {
    pub trader: &'a str,
    pub quests: Vec<&'a Quest>,
}

/// Partitions quests by trader. Groups are ordered by the trader's first appearance.
pub fn group_by_trader<'a>(quests: impl IntoIterator<Item = &'a Quest>) -> Vec<TraderGroup<'a>> {
    let mut groups: Vec<TraderGroup<'a>> = Vec::new();
    let mut by_trader: HashMap<&'a str, usize> = HashMap::new();

    for quest in quests {
        let slot = *by_trader.entry(quest.trader()).or_insert_with(|| {
            groups.push(TraderGroup { trader: quest.trader(), quests: Vec::new() });
            groups.len() - 1
        });
        groups[slot].quests.push(quest);
    }

    groups
}

/// Index-based view over a set of quests, with prerequisite edges resolved inside the set.
///
/// Requirements pointing outside the set are dropped from the adjacency; they are never
/// followed. If ids repeat, the first occurrence is the one edges resolve to.
#[derive(Debug, Clone)]
pub(crate) struct QuestGraph<'a> {
    quests: Vec<&'a Quest>,
    index: HashMap<&'a str, usize>,
    children: Vec<Adjacency>,
    parents: Vec<Adjacency>,
}

impl<'a> QuestGraph<'a> {
    pub(crate) fn new(quests: impl IntoIterator<Item = &'a Quest>) -> Self {
        let quests = quests.into_iter().collect::<Vec<_>>();

        let mut index = HashMap::with_capacity(quests.len());
        for (idx, quest) in quests.iter().enumerate() {
            index.entry(quest.id().as_str()).or_insert(idx);
        }

        let mut children = vec![Adjacency::new(); quests.len()];
        let mut parents = vec![Adjacency::new(); quests.len()];
        for (idx, quest) in quests.iter().enumerate() {
            for req_id in quest.requirement_ids() {
                let Some(&parent) = index.get(req_id.as_str()) else {
                    continue;
                };
                if parents[idx].contains(&parent) {
                    continue;
                }
                parents[idx].push(parent);
                children[parent].push(idx);
            }
        }

        Self { quests, index, children, parents }
    }

    pub(crate) fn len(&self) -> usize {
        self.quests.len()
    }

    pub(crate) fn quest(&self, idx: usize) -> &'a Quest {
        self.quests[idx]
    }

    pub(crate) fn quests(&self) -> &[&'a Quest] {
        &self.quests
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Quests that list `idx` as a requirement, in set order.
    pub(crate) fn children(&self, idx: usize) -> &[usize] {
        &self.children[idx]
    }

    /// In-set requirements of `idx`, in declaration order.
    pub(crate) fn parents(&self, idx: usize) -> &[usize] {
        &self.parents[idx]
    }

    /// Quests with no task requirements at all (dangling ones included), in set order.
    pub(crate) fn roots(&self) -> impl Iterator<Item = usize> + '_ {
        self.quests.iter().enumerate().filter_map(|(idx, quest)| quest.is_root().then_some(idx))
    }
}
