// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! A snapshot holds quests (with prerequisite ids, a trader and a level gate); player progress
//! is a separate value passed alongside it.

#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;
pub mod progress;
pub mod quest;
pub mod snapshot;

pub use ids::{Id, IdError, QuestId};
pub use progress::PlayerProgress;
pub use quest::{Objective, ObjectiveMap, Quest, QuestRequirement, TraderRequirement};
pub use snapshot::{group_by_trader, QuestSnapshot, SnapshotError, TraderGroup};

/// A root-to-leaf walk through the prerequisite graph.
pub type Chain = Vec<QuestId>;
