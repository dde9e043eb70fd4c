// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeSet;

use super::ids::QuestId;

/// A player's state as seen by one classification call: character level plus completed ids.
///
/// Callers own this value and pass it explicitly; nothing in the crate caches it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlayerProgress {
    level: u32,
    completed: BTreeSet<QuestId>,
}

impl PlayerProgress {
    pub fn new(level: u32, completed: impl IntoIterator<Item = QuestId>) -> Self {
        Self { level, completed: completed.into_iter().collect() }
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn set_level(&mut self, level: u32) {
        self.level = level;
    }

    pub fn completed(&self) -> &BTreeSet<QuestId> {
        &self.completed
    }

    pub fn is_completed(&self, id: &str) -> bool {
        self.completed.contains(id)
    }

    pub fn complete(&mut self, id: QuestId) -> bool {
        self.completed.insert(id)
    }

    pub fn uncomplete(&mut self, id: &str) -> bool {
        self.completed.remove(id)
    }
}
