// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Questgraph: a quest prerequisite graph engine.
//!
//! Given a snapshot of quests (each with prerequisite quest ids, an owning trader and a level
//! gate) the crate answers:
//! - which root-to-leaf chains exist ([`query::enumerate_chains`], [`query::filter_chains`]),
//! - which chain best represents a trader ([`query::longest_chain`]),
//! - which quests a player can take right now ([`query::classify`]),
//! - where every quest goes on a map of vertical trader bands ([`layout::layout_quests`]).
//!
//! All queries are pure functions over borrowed quests and terminate on cyclic data.

pub mod format;
pub mod layout;
pub mod model;
pub mod query;
pub mod store;
