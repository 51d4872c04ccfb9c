//! Tests for AppState transitions.

use super::*;
use crate::model::PostId;
use crate::state::feed_store::FEED_STATE_KEY;
use crate::state::storage::MemoryStorage;
use chrono::{Duration, TimeZone};

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap()
}

fn post(id: &str, age_hours: i64, likes: u64, mood: Option<Mood>) -> Post {
    Post::new(PostId::new(id).unwrap(), now() - Duration::hours(age_hours))
        .with_likes(likes)
        .with_mood(mood)
}

fn sample_posts() -> Vec<Post> {
    vec![
        post("old-popular", 48, 100, Some(Mood::Hype)),
        post("fresh", 1, 2, Some(Mood::Dark)),
        post("mid", 6, 20, Some(Mood::Hype)),
        post("untagged", 3, 5, None),
    ]
}

fn many_posts(n: usize) -> Vec<Post> {
    (0..n)
        .map(|i| post(&format!("p{i}"), i as i64, (n - i) as u64, None))
        .collect()
}

fn store_over(storage: MemoryStorage) -> FeedStateStore<DynStorage> {
    FeedStateStore::open(Box::new(storage) as DynStorage)
}

fn fresh_state(posts: Vec<Post>) -> AppState {
    AppState::new(posts, store_over(MemoryStorage::new()), LayoutParams::new(4, 2), now())
}

fn feed_ids(state: &AppState) -> Vec<&str> {
    state.feed().iter().map(|p| p.id.as_str()).collect()
}

#[test]
fn new_state_ranks_with_persisted_mode() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(FEED_STATE_KEY, r#"{"tab":"new","scrollY":0}"#)
        .unwrap();
    let state = AppState::new(sample_posts(), store_over(storage), LayoutParams::default(), now());
    assert_eq!(state.mode(), ScoringMode::New);
    assert_eq!(feed_ids(&state), vec!["fresh", "untagged", "mid", "old-popular"]);
}

#[test]
fn default_mode_is_hot() {
    let state = fresh_state(sample_posts());
    assert_eq!(state.mode(), ScoringMode::Hot);
    assert_eq!(state.feed().len(), 4);
}

#[test]
fn set_mode_reranks_and_persists() {
    let mut state = fresh_state(sample_posts());
    state.set_mode(ScoringMode::Top, now());
    assert_eq!(feed_ids(&state), vec!["old-popular", "mid", "untagged", "fresh"]);
    assert_eq!(state.session_state().mode, ScoringMode::Top);
}

#[test]
fn set_mood_filters_feed_and_keeps_source_posts() {
    let mut state = fresh_state(sample_posts());
    state.set_mode(ScoringMode::Top, now());
    state.set_mood(Some(Mood::Hype), now());
    assert_eq!(feed_ids(&state), vec!["old-popular", "mid"]);
    assert_eq!(state.posts().len(), 4, "source posts untouched");

    state.set_mood(None, now());
    assert_eq!(state.feed().len(), 4);
}

#[test]
fn scroll_is_clamped_to_content() {
    let mut state = fresh_state(many_posts(10)); // 40 rows of content
    state.set_viewport_height(12);
    state.scroll_to(1_000);
    assert_eq!(state.scroll_offset(), 28);
    state.scroll_by(-30);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn scroll_persists_offset() {
    let mut state = fresh_state(many_posts(10));
    state.set_viewport_height(8);
    state.scroll_by(5);
    assert_eq!(state.session_state().scroll_offset, 5);
}

#[test]
fn restored_offset_survives_until_viewport_is_known() {
    let mut storage = MemoryStorage::new();
    storage
        .set_item(FEED_STATE_KEY, r#"{"tab":"hot","scrollY":20}"#)
        .unwrap();
    let mut state = AppState::new(many_posts(10), store_over(storage), LayoutParams::new(4, 2), now());
    assert_eq!(state.scroll_offset(), 20);

    state.set_viewport_height(8);
    assert_eq!(state.scroll_offset(), 20, "still within 40 - 8");
}

#[test]
fn resize_clamps_offset() {
    let mut state = fresh_state(many_posts(10));
    state.set_viewport_height(4);
    state.scroll_to(36);
    assert_eq!(state.scroll_offset(), 36);
    state.set_viewport_height(20);
    assert_eq!(state.scroll_offset(), 20);
}

#[test]
fn narrowing_mood_clamps_offset() {
    let mut posts = many_posts(10);
    posts[0].mood = Some(Mood::Dark);
    let mut state = fresh_state(posts);
    state.set_viewport_height(4);
    state.scroll_to(30);
    state.set_mood(Some(Mood::Dark), now());
    assert_eq!(state.feed().len(), 1);
    assert_eq!(state.scroll_offset(), 0);
}

#[test]
fn window_follows_offset() {
    let mut state = fresh_state(many_posts(100));
    state.set_viewport_height(8);
    state.scroll_to(40);
    let window = state.window();
    assert_eq!(window.visible_range().indices(), 10..12);
    assert_eq!(window.range().indices(), 8..14);
}

#[test]
fn refresh_reevaluates_at_new_instant() {
    let mut state = fresh_state(sample_posts());
    let later = now() + Duration::hours(5);
    state.refresh(later);
    assert_eq!(state.ranked_at(), later);
    assert_eq!(state.feed().len(), 4);
}

#[test]
fn mode_switch_reranks_at_switch_instant() {
    let posts = vec![post("fresh", 0, 10, None), post("old", 10, 60, None)];
    let mut state = fresh_state(posts);
    assert_eq!(feed_ids(&state), vec!["fresh", "old"]);

    // After 100 hours the fresh post's head start has decayed away.
    let later = now() + Duration::hours(100);
    state.set_mode(ScoringMode::Top, now());
    state.set_mode(ScoringMode::Hot, later);
    assert_eq!(state.ranked_at(), later);
    assert_eq!(feed_ids(&state), vec!["old", "fresh"]);
}

#[test]
fn mood_switch_reranks_at_switch_instant() {
    let posts = vec![
        post("fresh", 0, 10, Some(Mood::Hype)),
        post("old", 10, 60, Some(Mood::Hype)),
    ];
    let mut state = fresh_state(posts);
    let later = now() + Duration::hours(100);
    state.set_mood(Some(Mood::Hype), later);
    assert_eq!(state.ranked_at(), later);
    assert_eq!(feed_ids(&state), vec!["old", "fresh"]);
}

#[test]
fn selecting_active_mode_keeps_ranking_instant() {
    let mut state = fresh_state(sample_posts());
    state.set_mode(ScoringMode::Hot, now() + Duration::hours(1));
    assert_eq!(state.ranked_at(), now());
}

#[test]
fn scroll_step_has_minimum_of_one() {
    let state = fresh_state(sample_posts()).with_scroll_step(0);
    assert_eq!(state.scroll_step(), 1);
}

#[test]
fn with_mood_applies_initial_filter() {
    let state = fresh_state(sample_posts()).with_mood(Some(Mood::Dark));
    assert_eq!(feed_ids(&state), vec!["fresh"]);
}
