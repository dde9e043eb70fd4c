// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! External quest data formats.

pub mod tasks_api;

pub use tasks_api::{tasks_to_quests, ApiResponse, ApiTask, TaskConversionError};
