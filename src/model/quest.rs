// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use serde::{Deserialize, Deserializer, Serialize};

use super::ids::QuestId;

/// A single quest (task) as held in a snapshot.
///
/// Serialized in the application's camelCase shape. Optional fields that are missing or
/// `null` in the input deserialize as empty (or zero/false), so partially populated snapshots
/// still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quest {
    id: QuestId,
    name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    level: u32,
    trader: String,
    #[serde(default, deserialize_with = "null_as_default")]
    requirements: Vec<QuestRequirement>,
    #[serde(default, deserialize_with = "null_as_default")]
    trader_requirements: Vec<TraderRequirement>,
    #[serde(default, deserialize_with = "null_as_default")]
    kappa_required: bool,
    #[serde(default, deserialize_with = "null_as_default")]
    objectives: Vec<Objective>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Quest {
    pub fn new(
        id: QuestId,
        name: impl Into<String>,
        level: u32,
        trader: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            level,
            trader: trader.into(),
            requirements: Vec::new(),
            trader_requirements: Vec::new(),
            kappa_required: false,
            objectives: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, id: QuestId) -> Self {
        self.requirements.push(QuestRequirement { id });
        self
    }

    pub fn with_trader_requirement(mut self, id: impl Into<String>) -> Self {
        self.trader_requirements.push(TraderRequirement { id: id.into() });
        self
    }

    pub fn with_kappa_required(mut self, kappa_required: bool) -> Self {
        self.kappa_required = kappa_required;
        self
    }

    pub fn with_objectives(mut self, objectives: Vec<Objective>) -> Self {
        self.objectives = objectives;
        self
    }

    pub fn id(&self) -> &QuestId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn trader(&self) -> &str {
        &self.trader
    }

    pub fn requirements(&self) -> &[QuestRequirement] {
        &self.requirements
    }

    /// Prerequisite quest ids in declaration order.
    pub fn requirement_ids(&self) -> impl Iterator<Item = &QuestId> + '_ {
        self.requirements.iter().map(|req| &req.id)
    }

    pub fn requires(&self, id: &QuestId) -> bool {
        self.requirements.iter().any(|req| &req.id == id)
    }

    pub fn trader_requirements(&self) -> &[TraderRequirement] {
        &self.trader_requirements
    }

    pub fn kappa_required(&self) -> bool {
        self.kappa_required
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// A root quest has no task prerequisites.
    pub fn is_root(&self) -> bool {
        self.requirements.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestRequirement {
    pub id: QuestId,
}

/// Non-task prerequisite marker (e.g. a reputation or loyalty requirement).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraderRequirement {
    pub id: String,
}

/// Objective descriptor, carried through untouched by the graph algorithms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Objective {
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub maps: Vec<ObjectiveMap>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectiveMap {
    pub id: String,
    pub name: String,
}
