use jetheroes_model::{Hero, HeroId};
use jetheroes_search::{SearchActor, SearchConfig, SearchEngine, SearchError, build_view};
use jetheroes_store::HeroStore;
use pretty_assertions::assert_eq;
use std::sync::Arc;

fn three_heroes() -> Vec<Hero> {
    vec![
        Hero::new(HeroId::from(1u64), "Gatot Subroto", ""),
        Hero::new(HeroId::from(2u64), "Cut Nyak Dien", ""),
        Hero::new(HeroId::from(3u64), "Gajah Mada", ""),
    ]
}

fn engine() -> SearchEngine {
    SearchEngine::new(Arc::new(HeroStore::new(three_heroes()).unwrap()))
}

#[tokio::test]
async fn initial_snapshot_is_unfiltered() {
    let handle = SearchActor::spawn(engine(), SearchConfig::default());
    let snap = handle.snapshot();
    assert_eq!(snap.revision, 0);
    assert_eq!(snap.view.hero_count(), 3);
}

#[tokio::test]
async fn queries_apply_in_order() {
    let handle = SearchActor::spawn(engine(), SearchConfig::default());
    handle.set_query("g").await.unwrap();
    handle.set_query("ga").await.unwrap();
    handle.set_query("").await.unwrap();

    let snap = handle.wait_for_revision(3).await.unwrap();
    assert_eq!(snap.query, "");
    assert_eq!(snap.view, build_view(&three_heroes(), ""));
}

#[tokio::test]
async fn subscribers_observe_consistent_pairs() {
    let handle = SearchActor::spawn(engine(), SearchConfig::default());
    let mut rx = handle.subscribe();
    handle.set_query("cut").await.unwrap();

    rx.changed().await.unwrap();
    let snap = rx.borrow_and_update().clone();
    assert_eq!(snap.view, build_view(&three_heroes(), &snap.query));
}

#[tokio::test]
async fn handles_from_many_tasks() {
    let handle = SearchActor::spawn(engine(), SearchConfig { queue_capacity: 4 });
    let mut tasks = Vec::new();
    for q in ["a", "b", "c", "d", "e", "f"] {
        let h = handle.clone();
        tasks.push(tokio::spawn(async move { h.set_query(q).await }));
    }
    for t in tasks {
        t.await.unwrap().unwrap();
    }
    let snap = handle.wait_for_revision(6).await.unwrap();
    assert_eq!(snap.revision, 6);
    assert_eq!(snap.view, build_view(&three_heroes(), &snap.query));
}

#[tokio::test]
async fn try_set_query_reports_full_queue() {
    // Current-thread runtime: the actor cannot drain until we yield.
    let handle = SearchActor::spawn(engine(), SearchConfig { queue_capacity: 1 });
    handle.try_set_query("a").unwrap();
    assert_eq!(handle.try_set_query("b"), Err(SearchError::QueueFull));
    let snap = handle.wait_for_revision(1).await.unwrap();
    assert_eq!(snap.query, "a");
}

#[test]
fn error_display() {
    assert_eq!(SearchError::ActorStopped.to_string(), "search actor stopped");
    assert_eq!(SearchError::QueueFull.to_string(), "search queue full");
}
