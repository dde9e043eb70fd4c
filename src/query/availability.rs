// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::Serialize;

use crate::model::{PlayerProgress, Quest};

/// How non-task prerequisites (`traderRequirements`) affect availability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TraderRequirementPolicy {
    /// Trader-requirement markers are not considered.
    #[default]
    Ignore,
    /// A quest carrying any trader-requirement marker is never available.
    Lock,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassifyOptions {
    pub trader_requirements: TraderRequirementPolicy,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestStatus {
    Available,
    Locked,
    Completed,
}

/// Status of a single quest for the given progress.
///
/// Prerequisites are satisfied purely by membership in the completed set; a requirement that
/// names a quest outside the snapshot therefore keeps the quest locked until that id is
/// recorded as completed.
pub fn status_of(
    quest: &Quest,
    progress: &PlayerProgress,
    options: ClassifyOptions,
) -> QuestStatus {
    if progress.is_completed(quest.id().as_str()) {
        return QuestStatus::Completed;
    }

    let level_ok = quest.level() <= progress.level();
    let requirements_ok = quest.requirement_ids().all(|id| progress.is_completed(id.as_str()));
    let trader_ok = match options.trader_requirements {
        TraderRequirementPolicy::Ignore => true,
        TraderRequirementPolicy::Lock => quest.trader_requirements().is_empty(),
    };

    if level_ok && requirements_ok && trader_ok {
        QuestStatus::Available
    } else {
        QuestStatus::Locked
    }
}

/// A partition of quests into available, locked and completed, each in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Classification<'a> {
    pub available: Vec<&'a Quest>,
    pub locked: Vec<&'a Quest>,
    pub completed: Vec<&'a Quest>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub available: usize,
    pub locked: usize,
    pub completed: usize,
}

impl<'a> Classification<'a> {
    pub fn get(&self, status: QuestStatus) -> &[&'a Quest] {
        match status {
            QuestStatus::Available => &self.available,
            QuestStatus::Locked => &self.locked,
            QuestStatus::Completed => &self.completed,
        }
    }

    pub fn counts(&self) -> StatusCounts {
        StatusCounts {
            available: self.available.len(),
            locked: self.locked.len(),
            completed: self.completed.len(),
        }
    }

    /// Restricts every list to quests owned by `trader`.
    pub fn for_trader(&self, trader: &str) -> Self {
        self.filtered(|quest| quest.trader() == trader)
    }

    /// Restricts every list to quests flagged as required for Kappa.
    pub fn kappa_only(&self) -> Self {
        self.filtered(Quest::kappa_required)
    }

    fn filtered(&self, keep: impl Fn(&Quest) -> bool) -> Self {
        let pick = |quests: &[&'a Quest]| -> Vec<&'a Quest> {
            quests.iter().copied().filter(|quest| keep(quest)).collect()
        };
        Self {
            available: pick(&self.available),
            locked: pick(&self.locked),
            completed: pick(&self.completed),
        }
    }
}

/// Classifies every quest for the given progress.
///
/// Holds no state: re-run it whenever the level or the completed set changes.
pub fn classify<'a>(
    quests: impl IntoIterator<Item = &'a Quest>,
    progress: &PlayerProgress,
    options: ClassifyOptions,
) -> Classification<'a> {
    let mut classification = Classification::default();
    for quest in quests {
        let bucket = match status_of(quest, progress, options) {
            QuestStatus::Available => &mut classification.available,
            QuestStatus::Locked => &mut classification.locked,
            QuestStatus::Completed => &mut classification.completed,
        };
        bucket.push(quest);
    }

    tracing::debug!(
        level = progress.level(),
        completed_ids = progress.completed().len(),
        available = classification.available.len(),
        locked = classification.locked.len(),
        completed = classification.completed.len(),
        "classified quests"
    );

    classification
}
