use trophy_case_catalog::*;
use trophy_case_core::Platform;

fn catalog(entries: &[(Platform, &str)]) -> RawCatalog {
    entries
        .iter()
        .map(|(p, json)| (*p, parse_platform_records(json, p.short_name()).unwrap()))
        .collect()
}

#[test]
fn subset_expansion_replaces_parent() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[{
            "platformId": "1446",
            "name": "Super Metroid",
            "console": "SNES",
            "tags": ["metroidvania", "retro"],
            "playedTime": 12.5,
            "lastAchievement": "2024-02-01",
            "subsets": {
                "Base": {"totalAchievements": 40, "unlockedAchievements": 40, "coverImage": "base.png"},
                "28937": {"name": "Bonus", "totalAchievements": 10, "unlockedAchievements": 2}
            }
        }]"#,
    )]);

    let games = normalize(&raw);
    assert_eq!(games.len(), 2);

    let base = games.iter().find(|g| !g.is_subset).unwrap();
    assert_eq!(base.effective_id, "1446");
    assert_eq!(base.parent_id, None);
    assert_eq!(base.name, "Super Metroid");
    assert_eq!(base.cover_image, "base.png");
    assert_eq!(base.total_achievements, 40);

    let bonus = games.iter().find(|g| g.is_subset).unwrap();
    assert_eq!(bonus.effective_id, "28937");
    assert_eq!(bonus.parent_id.as_deref(), Some("1446"));
    assert_eq!(bonus.name, "Super Metroid: Bonus");
    assert_eq!(bonus.total_achievements, 10);
    assert_eq!(bonus.unlocked_achievements, 2);
    assert_eq!(
        bonus.cover_image,
        "assets/covers/retroachievements/28937.jpg"
    );

    for g in &games {
        assert_eq!(g.tags, ["metroidvania", "retro"]);
        assert_eq!(g.console.as_deref(), Some("SNES"));
        assert_eq!(g.last_achievement.as_deref(), Some("2024-02-01"));
        assert_eq!(g.played_time, Some(12.5));
    }
}

#[test]
fn subset_overrides_date_and_playtime() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[{
            "platformId": "10",
            "name": "Parent",
            "lastAchievement": "2020-01-01",
            "playedTime": 3,
            "subsets": {
                "99": {"name": "Set", "lastAchievement": "2023-05-05", "playedTime": 8}
            }
        }]"#,
    )]);

    let games = normalize(&raw);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].last_achievement.as_deref(), Some("2023-05-05"));
    assert_eq!(games[0].played_time, Some(8.0));
}

#[test]
fn subset_counts_never_inherit_from_parent() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[{
            "platformId": "10",
            "name": "Parent",
            "totalAchievements": 50,
            "unlockedAchievements": 50,
            "coverImage": "parent.png",
            "subsets": {"Base": {}}
        }]"#,
    )]);

    let games = normalize(&raw);
    assert_eq!(games[0].total_achievements, 0);
    assert_eq!(games[0].unlocked_achievements, 0);
    assert_eq!(games[0].cover_image, "assets/covers/retroachievements/10.jpg");
}

#[test]
fn subset_names_fall_back() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[
            {"platformId": "1", "subsets": {"Base": {}, "2": {"name": "Hard Mode"}, "3": {}}},
            {"platformId": "4", "name": "Named", "subsets": {"5": {}}}
        ]"#,
    )]);

    let games = normalize(&raw);
    let name_of = |id: &str| {
        games
            .iter()
            .find(|g| g.effective_id == id)
            .map(|g| g.name.clone())
            .unwrap()
    };
    assert_eq!(name_of("1"), "Unknown Game (1)");
    assert_eq!(name_of("2"), "Hard Mode");
    assert_eq!(name_of("3"), "Unknown Game (3)");
    assert_eq!(name_of("5"), "Named");
}

#[test]
fn subsets_ignored_outside_retroachievements() {
    let raw = catalog(&[(
        Platform::Steam,
        r#"[{"platformId": "620", "name": "Portal 2", "subsets": {"x": {"name": "nope"}}}]"#,
    )]);

    let games = normalize(&raw);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].effective_id, "620");
    assert!(!games[0].is_subset);
}

#[test]
fn empty_subset_map_keeps_parent() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[{"platformId": "7", "name": "Solo", "subsets": {}}]"#,
    )]);
    let games = normalize(&raw);
    assert_eq!(games.len(), 1);
    assert_eq!(games[0].name, "Solo");
}

#[test]
fn fills_name_and_cover_fallbacks() {
    let raw = catalog(&[(
        Platform::Gog,
        r#"[{"platformId": "1207658924", "totalAchievements": 5, "unlockedAchievements": 1}]"#,
    )]);

    let games = normalize(&raw);
    assert_eq!(games[0].name, "Unknown Game (1207658924)");
    assert_eq!(games[0].cover_image, "assets/covers/gog/1207658924.jpg");
    assert!(games[0].tags.is_empty());
}

#[test]
fn records_without_id_are_skipped() {
    let raw = catalog(&[(
        Platform::Steam,
        r#"[{"name": "No Id"}, {"platformId": "  ", "name": "Blank"}, {"platformId": 400, "name": "Portal"}]"#,
    )]);

    let report = normalize_with_report(&raw);
    assert_eq!(report.skipped.get(&Platform::Steam), Some(&2));
    assert_eq!(report.total_skipped(), 2);
    assert_eq!(report.games.len(), 1);
    assert_eq!(report.games[0].effective_id, "400");
}

#[test]
fn skipped_counts_are_per_platform() {
    let raw = catalog(&[
        (Platform::Steam, r#"[{"name": "No Id"}]"#),
        (Platform::Gog, r#"[{"platformId": "ok"}]"#),
        (
            Platform::RetroAchievements,
            r#"[{"platformId": null}, {"platformId": "7", "subsets": {" ": {}, "Base": {}}}]"#,
        ),
    ]);

    let report = normalize_with_report(&raw);
    assert_eq!(report.skipped.get(&Platform::Steam), Some(&1));
    assert_eq!(report.skipped.get(&Platform::Gog), None);
    assert_eq!(report.skipped.get(&Platform::RetroAchievements), Some(&2));
    assert_eq!(report.total_skipped(), 3);
    assert_eq!(report.games.len(), 2);
}

#[test]
fn date_completed_is_accepted_as_last_achievement() {
    let raw = catalog(&[(
        Platform::Steam,
        r#"[{"platformId": "1", "name": "Old Shape", "dateCompleted": "2022-03-04"}]"#,
    )]);
    let games = normalize(&raw);
    assert_eq!(games[0].last_achievement.as_deref(), Some("2022-03-04"));
}

#[test]
fn last_achievement_wins_over_date_completed() {
    let raw = catalog(&[(
        Platform::Steam,
        r#"[{"platformId": "1", "name": "Migrating", "lastAchievement": "2024-01-01", "dateCompleted": "2018-01-01"},
            {"platformId": "2", "name": "Half Migrated", "lastAchievement": "2023-03-03", "dateCompleted": null}]"#,
    )]);
    let games = normalize(&raw);
    assert_eq!(games.len(), 2);
    assert_eq!(games[0].last_achievement.as_deref(), Some("2024-01-01"));
    assert_eq!(games[1].last_achievement.as_deref(), Some("2023-03-03"));
}

#[test]
fn subset_date_falls_back_through_both_spellings() {
    let raw = catalog(&[(
        Platform::RetroAchievements,
        r#"[{
            "platformId": "10",
            "name": "Parent",
            "dateCompleted": "2020-01-01",
            "subsets": {
                "Base": {},
                "11": {"name": "Old Set", "dateCompleted": "2021-06-06"}
            }
        }]"#,
    )]);
    let games = normalize(&raw);
    let base = games.iter().find(|g| g.effective_id == "10").unwrap();
    let set = games.iter().find(|g| g.effective_id == "11").unwrap();
    assert_eq!(base.last_achievement.as_deref(), Some("2020-01-01"));
    assert_eq!(set.last_achievement.as_deref(), Some("2021-06-06"));
}

#[test]
fn counts_are_sanitized_but_over_unlock_is_preserved() {
    let raw = catalog(&[(
        Platform::Steam,
        r#"[{"platformId": "1", "totalAchievements": 10.7, "unlockedAchievements": 12},
            {"platformId": "2", "totalAchievements": -3, "unlockedAchievements": 1}]"#,
    )]);
    let games = normalize(&raw);
    let first = games.iter().find(|g| g.effective_id == "1").unwrap();
    assert_eq!(first.total_achievements, 10);
    assert_eq!(first.unlocked_achievements, 12);
    assert_eq!(first.capped_unlocked(), 10);
    assert!(first.is_complete());

    let second = games.iter().find(|g| g.effective_id == "2").unwrap();
    assert_eq!(second.total_achievements, 0);
}

#[test]
fn initial_order_is_recent() {
    let raw = catalog(&[
        (
            Platform::Steam,
            r#"[{"platformId": "1", "name": "beta"},
                {"platformId": "2", "name": "Old", "lastAchievement": "2020-01-01"}]"#,
        ),
        (
            Platform::Gog,
            r#"[{"platformId": "3", "name": "Alpha"},
                {"platformId": "4", "name": "New", "lastAchievement": "2024-06-01T12:00:00Z"}]"#,
        ),
    ]);

    let names: Vec<_> = normalize(&raw).into_iter().map(|g| g.name).collect();
    assert_eq!(names, ["New", "Old", "Alpha", "beta"]);
}

#[test]
fn platforms_processed_in_declared_order() {
    // All undated and identically named: stable order follows platform order.
    let raw = catalog(&[
        (Platform::RetroAchievements, r#"[{"platformId": "ra", "name": "Same"}]"#),
        (Platform::Gog, r#"[{"platformId": "gog", "name": "Same"}]"#),
        (Platform::Steam, r#"[{"platformId": "steam", "name": "Same"}]"#),
    ]);

    let ids: Vec<_> = normalize(&raw).into_iter().map(|g| g.effective_id).collect();
    assert_eq!(ids, ["steam", "gog", "ra"]);
}

#[test]
fn empty_catalog_normalizes_to_nothing() {
    assert!(normalize(&RawCatalog::new()).is_empty());
}
