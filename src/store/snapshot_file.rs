// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde_json::Value;

use crate::format::tasks_api::{tasks_to_quests, ApiResponse, TaskConversionError};
use crate::model::{Quest, QuestId, QuestSnapshot, SnapshotError};

/// Which on-disk shape a quest file used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestsFormat {
    /// `[{ id, name, level, trader, requirements, ... }]`
    Application,
    /// `{"data":{"tasks":[...]}}` or `{"tasks":[...]}`
    TasksApi,
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {path:?}: {source}")]
    Io { path: PathBuf, source: io::Error },
    #[error("invalid JSON in {path:?}: {source}")]
    Json { path: PathBuf, source: serde_json::Error },
    #[error("{path:?} is neither a quest array nor a tasks API response")]
    UnknownFormat { path: PathBuf },
    #[error("invalid quest id in {path:?}: {source}")]
    InvalidQuestId { path: PathBuf, source: TaskConversionError },
    #[error("duplicate quest id {id} in {path:?}")]
    DuplicateQuestId { path: PathBuf, id: QuestId },
}

fn read_to_string(path: &Path) -> Result<String, StoreError> {
    fs::read_to_string(path).map_err(|source| StoreError::Io { path: path.to_path_buf(), source })
}

fn detect_format(value: &Value) -> Option<QuestsFormat> {
    match value {
        Value::Array(_) => Some(QuestsFormat::Application),
        Value::Object(map) if map.contains_key("data") || map.contains_key("tasks") => {
            Some(QuestsFormat::TasksApi)
        }
        _ => None,
    }
}

/// Parses quest JSON in either supported shape and builds a snapshot.
///
/// `path` is only used for error context.
pub fn parse_quests(
    path: &Path,
    text: &str,
) -> Result<(QuestSnapshot, QuestsFormat), StoreError> {
    let json_err =
        |source: serde_json::Error| StoreError::Json { path: path.to_path_buf(), source };

    let value: Value = serde_json::from_str(text).map_err(json_err)?;
    let format = detect_format(&value)
        .ok_or_else(|| StoreError::UnknownFormat { path: path.to_path_buf() })?;

    let quests = match format {
        QuestsFormat::Application => {
            serde_json::from_value::<Vec<Quest>>(value).map_err(json_err)?
        }
        QuestsFormat::TasksApi => {
            let response = serde_json::from_value::<ApiResponse>(value).map_err(json_err)?;
            tasks_to_quests(response.into_tasks()).map_err(|source| {
                StoreError::InvalidQuestId { path: path.to_path_buf(), source }
            })?
        }
    };

    let snapshot = QuestSnapshot::new(quests).map_err(|err| match err {
        SnapshotError::DuplicateQuestId(id) => {
            StoreError::DuplicateQuestId { path: path.to_path_buf(), id }
        }
    })?;
    Ok((snapshot, format))
}

/// Reads a quest file (application or tasks API shape) into a snapshot.
pub fn load_quests(path: impl AsRef<Path>) -> Result<QuestSnapshot, StoreError> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let (snapshot, format) = parse_quests(path, &text)?;
    tracing::debug!(path = %path.display(), quests = snapshot.len(), ?format, "loaded quests");
    Ok(snapshot)
}

/// Reads a JSON array of completed quest ids.
///
/// Ids that are not part of any snapshot are kept; they still satisfy requirements that name
/// them.
pub fn load_progress(path: impl AsRef<Path>) -> Result<Vec<QuestId>, StoreError> {
    let path = path.as_ref();
    let text = read_to_string(path)?;
    let completed = serde_json::from_str::<Vec<QuestId>>(&text)
        .map_err(|source| StoreError::Json { path: path.to_path_buf(), source })?;
    tracing::debug!(path = %path.display(), completed = completed.len(), "loaded progress");
    Ok(completed)
}
