// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tasks content API shape.
//!
//! Converts the `tasks` query response into [`Quest`] values:
//!
//! | API field                              | Quest field            |
//! |----------------------------------------|------------------------|
//! | `minPlayerLevel` (null ⇒ 0)            | `level`                |
//! | `trader.name`                          | `trader`               |
//! | `taskRequirements[].task.id`           | `requirements[].id`    |
//! | `traderRequirements[].requirementType` | `traderRequirements[]` |
//! | `kappaRequired` (missing ⇒ false)      | `kappaRequired`        |

use serde::Deserialize;

use crate::model::{IdError, Objective, Quest, QuestId};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTask {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub min_player_level: Option<u32>,
    pub trader: ApiTrader,
    #[serde(default)]
    pub task_requirements: Option<Vec<ApiTaskRequirement>>,
    #[serde(default)]
    pub trader_requirements: Option<Vec<ApiTraderRequirement>>,
    #[serde(default)]
    pub kappa_required: Option<bool>,
    #[serde(default)]
    pub objectives: Option<Vec<Objective>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTrader {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTaskRequirement {
    /// Null when the API cannot resolve the referenced task.
    pub task: Option<ApiTaskRef>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTaskRef {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTraderRequirement {
    pub requirement_type: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiTasks {
    pub tasks: Vec<ApiTask>,
}

/// A response body, with or without the GraphQL `data` envelope.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse {
    Envelope { data: ApiTasks },
    Bare(ApiTasks),
}

impl ApiResponse {
    pub fn into_tasks(self) -> Vec<ApiTask> {
        match self {
            Self::Envelope { data } => data.tasks,
            Self::Bare(tasks) => tasks.tasks,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaskConversionError {
    #[error("task {task_name:?} has an invalid id: {source}")]
    TaskId { task_name: String, source: IdError },
    #[error("task {task_id} lists a requirement with an invalid id: {source}")]
    RequirementId { task_id: String, source: IdError },
}

impl TryFrom<ApiTask> for Quest {
    type Error = TaskConversionError;

    fn try_from(task: ApiTask) -> Result<Self, Self::Error> {
        let id = QuestId::new(&task.id).map_err(|source| TaskConversionError::TaskId {
            task_name: task.name.clone(),
            source,
        })?;

        let mut quest =
            Quest::new(id, task.name, task.min_player_level.unwrap_or(0), task.trader.name);

        for requirement in task.task_requirements.unwrap_or_default() {
            let Some(task_ref) = requirement.task else {
                tracing::warn!(task = %task.id, "dropping unresolved task requirement");
                continue;
            };
            let req_id = QuestId::new(&task_ref.id).map_err(|source| {
                TaskConversionError::RequirementId { task_id: task.id.clone(), source }
            })?;
            quest = quest.with_requirement(req_id);
        }
        for requirement in task.trader_requirements.unwrap_or_default() {
            quest = quest.with_trader_requirement(requirement.requirement_type);
        }

        Ok(quest
            .with_kappa_required(task.kappa_required.unwrap_or(false))
            .with_objectives(task.objectives.unwrap_or_default()))
    }
}

/// Converts every task, stopping at the first invalid one.
pub fn tasks_to_quests(
    tasks: impl IntoIterator<Item = ApiTask>,
) -> Result<Vec<Quest>, TaskConversionError> {
    tasks.into_iter().map(Quest::try_from).collect()
}
