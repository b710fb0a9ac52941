use trophy_case_catalog::*;
use trophy_case_core::Platform;

fn game(platform: Platform, id: &str, name: &str) -> NormalizedGame {
    NormalizedGame {
        platform,
        effective_id: id.to_string(),
        parent_id: None,
        is_subset: false,
        name: name.to_string(),
        cover_image: format!("assets/covers/{}/{}.jpg", platform.short_name(), id),
        total_achievements: 0,
        unlocked_achievements: 0,
        last_achievement: None,
        played_time: None,
        tags: Vec::new(),
        console: None,
    }
}

fn with_tags(mut g: NormalizedGame, tags: &[&str]) -> NormalizedGame {
    g.tags = tags.iter().map(|t| t.to_string()).collect();
    g
}

fn with_counts(mut g: NormalizedGame, total: u32, unlocked: u32) -> NormalizedGame {
    g.total_achievements = total;
    g.unlocked_achievements = unlocked;
    g
}

fn dated(mut g: NormalizedGame, date: &str) -> NormalizedGame {
    g.last_achievement = Some(date.to_string());
    g
}

fn names(games: &[NormalizedGame]) -> Vec<&str> {
    games.iter().map(|g| g.name.as_str()).collect()
}

fn library() -> Vec<NormalizedGame> {
    vec![
        with_counts(with_tags(game(Platform::Steam, "1", "Portal 2"), &["puzzle", "coop"]), 51, 51),
        with_counts(with_tags(game(Platform::Steam, "2", "Hades"), &["roguelike"]), 49, 30),
        with_counts(with_tags(game(Platform::Gog, "3", "Disco Elysium"), &["rpg"]), 45, 10),
        with_counts(
            with_tags(game(Platform::RetroAchievements, "4", "Super Metroid"), &["retro", "metroidvania"]),
            40,
            0,
        ),
        with_tags(game(Platform::Gog, "5", "Untracked"), &["rpg", "retro"]),
    ]
}

#[test]
fn platform_filter() {
    let criteria = FilterCriteria::new()
        .with_platform(PlatformFilter::Only(Platform::Gog))
        .with_sort(SortKey::Name);
    assert_eq!(names(&apply(&library(), &criteria)), ["Disco Elysium", "Untracked"]);
}

#[test]
fn included_tags_require_any_match() {
    let criteria = FilterCriteria::new()
        .include_tag("retro")
        .include_tag("coop")
        .with_sort(SortKey::Name);
    let view = apply(&library(), &criteria);
    assert_eq!(names(&view), ["Portal 2", "Super Metroid", "Untracked"]);
}

#[test]
fn every_result_has_the_included_tag() {
    let criteria = FilterCriteria::new().include_tag("rpg");
    for g in apply(&library(), &criteria) {
        assert!(g.has_tag("rpg"), "{} lacks the tag", g.name);
    }
}

#[test]
fn excluded_tags_reject_any_match() {
    let criteria = FilterCriteria::new()
        .exclude_tag("retro")
        .exclude_tag("coop")
        .with_sort(SortKey::Name);
    assert_eq!(names(&apply(&library(), &criteria)), ["Disco Elysium", "Hades"]);
}

#[test]
fn include_and_exclude_combine() {
    let criteria = FilterCriteria::new()
        .include_tag("rpg")
        .exclude_tag("retro");
    assert_eq!(names(&apply(&library(), &criteria)), ["Disco Elysium"]);
}

#[test]
fn tag_sets_stay_disjoint() {
    let criteria = FilterCriteria::new().include_tag("rpg").exclude_tag("rpg");
    assert!(criteria.included_tags.is_empty());
    assert!(criteria.excluded_tags.contains("rpg"));

    let criteria = criteria.include_tag("rpg");
    assert!(criteria.excluded_tags.is_empty());
    assert!(criteria.included_tags.contains("rpg"));
}

#[test]
fn cycle_tag_walks_include_exclude_clear() {
    let c = FilterCriteria::new().cycle_tag("rpg");
    assert!(c.included_tags.contains("rpg"));
    let c = c.cycle_tag("rpg");
    assert!(c.excluded_tags.contains("rpg"));
    let c = c.cycle_tag("rpg");
    assert!(c.is_unfiltered());
}

#[test]
fn search_is_case_insensitive_substring() {
    let criteria = FilterCriteria::new().with_search("METRO");
    assert_eq!(names(&apply(&library(), &criteria)), ["Super Metroid"]);

    let criteria = FilterCriteria::new().with_search("");
    assert_eq!(apply(&library(), &criteria).len(), 5);
}

#[test]
fn sort_by_completion_descending() {
    let criteria = FilterCriteria::new().with_sort(SortKey::Completion);
    assert_eq!(
        names(&apply(&library(), &criteria)),
        ["Portal 2", "Hades", "Disco Elysium", "Super Metroid", "Untracked"]
    );
}

#[test]
fn completion_sort_caps_over_unlocked() {
    let games = vec![
        with_counts(game(Platform::Steam, "a", "Overflow"), 10, 30),
        with_counts(game(Platform::Steam, "b", "Full"), 10, 10),
    ];
    let view = apply(&games, &FilterCriteria::new().with_sort(SortKey::Completion));
    // Both are 100%: stable order is preserved.
    assert_eq!(names(&view), ["Overflow", "Full"]);
}

#[test]
fn sort_by_playtime_descending_missing_as_zero() {
    let mut games = library();
    games[0].played_time = Some(10.0);
    games[2].played_time = Some(f64::NAN);
    games[3].played_time = Some(50.5);
    let view = apply(&games, &FilterCriteria::new().with_sort(SortKey::Playtime));
    assert_eq!(
        names(&view),
        ["Super Metroid", "Portal 2", "Hades", "Disco Elysium", "Untracked"]
    );
}

#[test]
fn recent_puts_dated_first() {
    let games = vec![
        game(Platform::Steam, "a", "A"),
        dated(game(Platform::Steam, "b", "B"), "2024-01-01"),
    ];
    let view = apply(&games, &FilterCriteria::new());
    assert_eq!(names(&view), ["B", "A"]);
}

#[test]
fn recent_orders_newest_first_then_name() {
    let games = vec![
        dated(game(Platform::Steam, "1", "zeta"), "2023-01-01"),
        dated(game(Platform::Steam, "2", "Alpha"), "2023-01-01"),
        dated(game(Platform::Gog, "3", "Mid"), "2023-06-15 10:00:00"),
        dated(game(Platform::Gog, "4", "Garbled"), "sometime"),
        game(Platform::Gog, "5", "Undated"),
    ];
    let view = apply(&games, &FilterCriteria::new().with_sort(SortKey::Recent));
    assert_eq!(names(&view), ["Mid", "Alpha", "zeta", "Garbled", "Undated"]);
}

#[test]
fn recent_keeps_input_order_for_full_ties() {
    let mut first = dated(game(Platform::Steam, "1", "Same"), "2024-01-01");
    first.total_achievements = 1;
    let second = dated(game(Platform::Gog, "2", "Same"), "2024-01-01");
    let view = apply(&[first, second], &FilterCriteria::new());
    assert_eq!(view[0].effective_id, "1");
    assert_eq!(view[1].effective_id, "2");
}

#[test]
fn name_sort_is_stable_and_case_insensitive() {
    let games = vec![
        game(Platform::Steam, "1", "b"),
        game(Platform::Gog, "2", "B"),
        game(Platform::Steam, "3", "a"),
    ];
    let criteria = FilterCriteria::new().with_sort(SortKey::Name);
    let once = apply(&games, &criteria);
    let ids: Vec<_> = once.iter().map(|g| g.effective_id.as_str()).collect();
    assert_eq!(ids, ["3", "1", "2"]);

    let twice = apply(&once, &criteria);
    assert_eq!(once, twice);
}

#[test]
fn apply_is_idempotent_for_every_sort_key() {
    for &key in SortKey::all() {
        let criteria = FilterCriteria::new()
            .exclude_tag("coop")
            .with_sort(key);
        let once = apply(&library(), &criteria);
        let twice = apply(&once, &criteria);
        assert_eq!(once, twice, "not idempotent for {key}");
    }
}

#[test]
fn apply_refs_matches_apply() {
    let games = library();
    let criteria = FilterCriteria::new().with_sort(SortKey::Completion);
    let owned = apply(&games, &criteria);
    let borrowed: Vec<NormalizedGame> = apply_refs(&games, &criteria).into_iter().cloned().collect();
    assert_eq!(owned, borrowed);
}

#[test]
fn parse_criteria_values() {
    assert_eq!("all".parse::<PlatformFilter>().unwrap(), PlatformFilter::All);
    assert_eq!(
        "ra".parse::<PlatformFilter>().unwrap(),
        PlatformFilter::Only(Platform::RetroAchievements)
    );
    assert!("epic".parse::<PlatformFilter>().is_err());
    assert_eq!("Playtime".parse::<SortKey>().unwrap(), SortKey::Playtime);
    assert!("rating".parse::<SortKey>().is_err());
}

#[test]
fn tag_universe_is_sorted_and_unique() {
    let tags: Vec<String> = extract_tags(&library()).into_iter().collect();
    assert_eq!(tags, ["coop", "metroidvania", "puzzle", "retro", "roguelike", "rpg"]);
}
