// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Read-only queries over a quest snapshot.
//!
//! Every query borrows the quests it is given, keeps its working state local to the call and
//! terminates on cyclic prerequisite data.

pub mod availability;
pub mod chains;
pub mod cycles;
pub mod longest;

pub use availability::{
    classify, status_of, Classification, ClassifyOptions, QuestStatus, StatusCounts,
    TraderRequirementPolicy,
};
pub use chains::{enumerate_chains, filter_chains, leaves, roots};
pub use cycles::cycles;
pub use longest::{longest_chain, longest_chains_by_trader, TraderChain};
