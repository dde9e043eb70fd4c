// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Questgraph-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Questgraph and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::PathBuf;

use rstest::{fixture, rstest};

use questgraph::layout::{layout_quests, LayoutConfig, LayoutNodeKind};
use questgraph::model::{PlayerProgress, QuestId, QuestSnapshot};
use questgraph::query::{
    classify, cycles, enumerate_chains, filter_chains, longest_chains_by_trader, ClassifyOptions,
    TraderRequirementPolicy,
};
use questgraph::store::{load_progress, load_quests};

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures").join(name)
}

fn ids(values: &[QuestId]) -> Vec<&str> {
    values.iter().map(QuestId::as_str).collect()
}

#[fixture]
fn snapshot() -> QuestSnapshot {
    load_quests(fixture_path("quests.json")).expect("load quests.json")
}

#[rstest]
fn tasks_api_shape_loads_to_the_same_snapshot(snapshot: QuestSnapshot) {
    let from_api = load_quests(fixture_path("tasks_api.json")).expect("load tasks_api.json");
    assert_eq!(from_api, snapshot);
}

#[rstest]
fn enumerates_every_root_to_leaf_walk(snapshot: QuestSnapshot) {
    let chains = enumerate_chains(snapshot.quests());
    let chains = chains.iter().map(|chain| ids(chain)).collect::<Vec<_>>();

    assert_eq!(
        chains,
        vec![
            vec!["debut", "checking", "picnic", "bp-depot"],
            vec!["debut", "checking", "picnic", "friend1"],
            vec!["debut", "checking", "delivery"],
            vec!["shortage", "sanitary1", "health1", "health2", "health3"],
            vec!["shortage", "sanitary1", "sanitary2"],
            vec!["supplier", "friend1"],
        ]
    );
}

#[rstest]
fn prefix_filter_keeps_matching_chains_once(snapshot: QuestSnapshot) {
    let mut chains = enumerate_chains(snapshot.quests());
    chains.extend(chains.clone());

    let picnic = filter_chains(&chains, &["debut", "checking", "picnic"]);
    assert_eq!(picnic.len(), 2);
    assert!(picnic.iter().all(|chain| ids(&chain[..3]) == ["debut", "checking", "picnic"]));

    assert_eq!(filter_chains(&chains, &[] as &[&str]).len(), 6);
}

#[rstest]
fn longest_chain_per_trader_follows_numbered_parts(snapshot: QuestSnapshot) {
    let chains = longest_chains_by_trader(snapshot.quests());
    let summary =
        chains.iter().map(|tc| (tc.trader.as_str(), ids(&tc.chain))).collect::<Vec<_>>();

    assert_eq!(
        summary,
        vec![
            ("Prapor", vec!["debut", "checking", "picnic", "bp-depot"]),
            // Part 2 wins over the longer Health Care Privacy branch.
            ("Therapist", vec!["shortage", "sanitary1", "sanitary2"]),
            ("Skier", vec!["supplier", "friend1"]),
        ]
    );
}

#[rstest]
fn classifies_a_level_five_player(snapshot: QuestSnapshot) {
    let completed = load_progress(fixture_path("progress.json")).expect("progress");
    let progress = PlayerProgress::new(5, completed);

    let result = classify(snapshot.quests(), &progress, ClassifyOptions::default());
    let names = |quests: &[&questgraph::model::Quest]| {
        quests.iter().map(|q| q.id().as_str().to_owned()).collect::<Vec<_>>()
    };

    assert_eq!(names(&result.available), vec!["supplier", "picnic"]);
    assert_eq!(names(&result.completed), vec!["debut", "shortage", "checking"]);
    assert_eq!(result.locked.len(), snapshot.len() - 5);

    let kappa = result.kappa_only();
    assert_eq!(names(&kappa.completed), vec!["shortage"]);
    assert_eq!(names(&kappa.locked), vec!["delivery"]);
}

#[rstest]
fn trader_requirement_lock_only_moves_gated_quests(snapshot: QuestSnapshot) {
    let progress = PlayerProgress::new(
        80,
        ["debut", "checking"].into_iter().map(|id| QuestId::new(id).expect("id")),
    );
    let lock = ClassifyOptions { trader_requirements: TraderRequirementPolicy::Lock };

    let ignored = classify(snapshot.quests(), &progress, ClassifyOptions::default());
    let locked = classify(snapshot.quests(), &progress, lock);

    let delivery = snapshot.get("delivery").expect("delivery");
    assert!(ignored.available.contains(&delivery));
    assert!(locked.locked.contains(&delivery));
    assert_eq!(ignored.available.len(), locked.available.len() + 1);
}

#[rstest]
fn layout_places_bands_by_chain_length(snapshot: QuestSnapshot) {
    let config = LayoutConfig::default();
    let layout = layout_quests(snapshot.quests(), &config);

    let headers = layout.nodes.iter().filter(|n| n.kind == LayoutNodeKind::TraderHeader).count();
    assert_eq!(headers, 3);
    assert_eq!(layout.nodes.len(), snapshot.len() + 3);

    let bands =
        layout.bands.iter().map(|b| (b.trader.as_str(), b.band)).collect::<Vec<_>>();
    assert_eq!(bands, vec![("Prapor", 1), ("Therapist", 0), ("Skier", 2)]);

    let health1 = layout.node("health1").expect("health1");
    assert_eq!((health1.x, health1.y), (360.0, 176.0));
    let health2 = layout.node("health2").expect("health2");
    assert_eq!((health2.x, health2.y), (180.0, 264.0));

    assert!(!layout.edges.iter().any(|e| e.source == "picnic" && e.target == "friend1"));
    assert!(layout.edges.iter().any(|e| e.source == "supplier" && e.target == "friend1"));
}

#[rstest]
fn fixture_data_is_acyclic(snapshot: QuestSnapshot) {
    assert!(cycles(snapshot.quests()).is_empty());
}

#[test]
fn layout_output_serializes_kebab_case_kinds() {
    let snapshot = load_quests(fixture_path("quests.json")).expect("load");
    let layout = layout_quests(snapshot.quests(), &LayoutConfig::default());
    let json = serde_json::to_value(&layout).expect("json");

    assert_eq!(json["nodes"][0]["kind"], "trader-header");
    assert_eq!(json["nodes"][0]["id"], "header-Prapor");
    assert_eq!(json["nodes"][1]["kind"], "quest");
}
