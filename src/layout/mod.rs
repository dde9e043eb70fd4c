// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Quest map layout.
//!
//! Quests are placed in one vertical band per trader; each band is a layered layout of that
//! trader's prerequisite graph with its longest chain pinned as the spine.

pub mod bands;
pub mod config;
mod layered;

pub use bands::{
    header_id, layout_quests, LayoutEdge, LayoutNode, LayoutNodeKind, QuestLayout, TraderBand,
};
pub use config::{ConfigError, LayoutConfig};
