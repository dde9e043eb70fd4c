// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::ids::QuestId;
use super::quest::Quest;

pub(crate) fn qid(value: &str) -> QuestId {
    QuestId::new(value).expect("quest id")
}

/// A quest whose name equals its id.
pub(crate) fn quest(id: &str, trader: &str, level: u32, requires: &[&str]) -> Quest {
    named_quest(id, id, trader, level, requires)
}

pub(crate) fn named_quest(
    id: &str,
    name: &str,
    trader: &str,
    level: u32,
    requires: &[&str],
) -> Quest {
    let quest = Quest::new(qid(id), name, level, trader);
    requires.iter().fold(quest, |quest, req| quest.with_requirement(qid(req)))
}

pub(crate) fn ids(values: &[QuestId]) -> Vec<&str> {
    values.iter().map(QuestId::as_str).collect()
}

/// `a -> b -> c` with a side branch `a -> d`.
pub(crate) fn fork_with_long_branch() -> Vec<Quest> {
    vec![
        quest("a", "Prapor", 1, &[]),
        quest("b", "Prapor", 2, &["a"]),
        quest("d", "Prapor", 2, &["a"]),
        quest("c", "Prapor", 3, &["b"]),
    ]
}

/// `X - Part 1` forks into `X - Part 2` (a leaf) and `Y`, which continues for two more quests.
pub(crate) fn numbered_parts_fork() -> Vec<Quest> {
    vec![
        named_quest("x1", "Gunsmith - Part 1", "Mechanic", 2, &[]),
        named_quest("y", "Farming - Part 1", "Mechanic", 5, &["x1"]),
        named_quest("x2", "Gunsmith - Part 2", "Mechanic", 4, &["x1"]),
        named_quest("y2", "Bad Rep Evidence", "Mechanic", 6, &["y"]),
        named_quest("y3", "Signal - Part 1", "Mechanic", 8, &["y2"]),
    ]
}

/// Three traders with chains of length 3, 2 and 1, plus a cross-trader requirement.
pub(crate) fn three_traders() -> Vec<Quest> {
    vec![
        quest("p1", "Prapor", 1, &[]),
        quest("t1", "Therapist", 1, &[]),
        quest("p2", "Prapor", 2, &["p1"]),
        quest("s1", "Skier", 3, &[]),
        quest("t2", "Therapist", 4, &["t1", "p2"]),
        quest("p3", "Prapor", 5, &["p2"]),
        quest("p4", "Prapor", 5, &["p2"]),
    ]
}

/// `a -> b -> c -> b` plus a self-requiring `z`.
pub(crate) fn cyclic() -> Vec<Quest> {
    vec![
        quest("a", "T", 1, &[]),
        quest("b", "T", 1, &["a", "c"]),
        quest("c", "T", 1, &["b"]),
        quest("z", "T", 1, &["z"]),
    ]
}

/// Depth used to check that traversals do not grow the thread stack.
pub(crate) const DEEP_CHAIN: usize = 50_000;

/// `q0 -> q1 -> ... -> q{len - 1}` for one trader.
pub(crate) fn linear(len: usize) -> Vec<Quest> {
    (0..len)
        .map(|i| {
            let step = quest(&format!("q{i}"), "T", 1, &[]);
            match i.checked_sub(1) {
                Some(prev) => step.with_requirement(qid(&format!("q{prev}"))),
                None => step,
            }
        })
        .collect()
}
