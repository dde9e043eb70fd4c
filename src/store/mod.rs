// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Loading quest snapshots and player progress from disk.
//!
//! Quest files are JSON in either the application shape (an array of quests) or the tasks
//! content API shape; progress files are a JSON array of completed quest ids.

pub mod snapshot_file;

pub use snapshot_file::{load_progress, load_quests, parse_quests, QuestsFormat, StoreError};
