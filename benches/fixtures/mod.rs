// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

#![allow(dead_code)]

// Shared deterministic benchmark fixtures (no RNG).

use questgraph::model::{PlayerProgress, Quest, QuestId};

const TRADERS: [&str; 8] =
    ["Prapor", "Therapist", "Skier", "Peacekeeper", "Mechanic", "Ragman", "Jaeger", "Fence"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuestParams {
    pub traders: usize,
    pub layers: usize,
    pub quests_per_layer: usize,
    /// Quests of one layer share a parent in groups of this size.
    pub fanout: usize,
    /// Adds a second requirement per quest, turning the trees into diamonds.
    pub diamonds: bool,
}

impl QuestParams {
    pub const fn new(
        traders: usize,
        layers: usize,
        quests_per_layer: usize,
        fanout: usize,
        diamonds: bool,
    ) -> Self {
        Self { traders, layers, quests_per_layer, fanout, diamonds }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    Small,
    Medium,
    LargeDiamonds,
}

impl Case {
    pub const fn id(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::LargeDiamonds => "large_diamonds",
        }
    }

    pub const fn params(self) -> QuestParams {
        match self {
            Self::Small => QuestParams::new(4, 4, 4, 2, false),
            Self::Medium => QuestParams::new(8, 8, 8, 2, false),
            Self::LargeDiamonds => QuestParams::new(12, 16, 16, 2, true),
        }
    }
}

fn trader_name(trader: usize) -> String {
    let base = TRADERS[trader % TRADERS.len()];
    match trader / TRADERS.len() {
        0 => base.to_owned(),
        round => format!("{base} {round}"),
    }
}

fn quest_id(trader: usize, layer: usize, idx: usize) -> QuestId {
    QuestId::new(format!("t{trader:02}-l{layer:02}-q{idx:02}")).expect("valid quest id")
}

/// Layered quest lines per trader, interleaved across traders so snapshot order mixes groups.
///
/// The first quest of every layer is named `<Trader> Line - Part <layer + 1>` so the
/// next-part rule is exercised on each trader's spine.
pub fn quests(params: QuestParams) -> Vec<Quest> {
    assert!(params.layers >= 1, "layers must be >= 1");
    assert!(params.quests_per_layer >= 1, "quests_per_layer must be >= 1");
    assert!(params.fanout >= 1, "fanout must be >= 1");

    let mut out = Vec::with_capacity(params.traders * params.layers * params.quests_per_layer);
    for layer in 0..params.layers {
        for idx in 0..params.quests_per_layer {
            for trader in 0..params.traders {
                let trader_label = trader_name(trader);
                let name = if idx == 0 {
                    format!("{trader_label} Line - Part {}", layer + 1)
                } else {
                    format!("{trader_label} Errand {layer}.{idx}")
                };
                let mut quest =
                    Quest::new(quest_id(trader, layer, idx), name, layer as u32 * 3, trader_label);
                if layer > 0 {
                    let parent = idx / params.fanout;
                    quest = quest.with_requirement(quest_id(trader, layer - 1, parent));
                    if params.diamonds {
                        let other = (idx + 1) % params.quests_per_layer;
                        if other != parent {
                            quest = quest.with_requirement(quest_id(trader, layer - 1, other));
                        }
                    }
                }
                out.push(quest.with_kappa_required(idx % 3 == 0));
            }
        }
    }
    out
}

pub fn fixture(case: Case) -> Vec<Quest> {
    quests(case.params())
}

/// A mid-game player: every quest in the first half of the layers completed.
pub fn progress(quests: &[Quest], params: QuestParams) -> PlayerProgress {
    let cutoff = (params.layers / 2) as u32 * 3;
    let completed =
        quests.iter().filter(|quest| quest.level() < cutoff).map(|quest| quest.id().clone());
    PlayerProgress::new(cutoff + 2, completed)
}
