//! Welcome ritual timing and marker behaviour, on a paused tokio clock

use std::sync::Arc;
use std::time::Duration;

use launch_sequencer::{
    Experience, InMemoryMarkerStore, LaunchPhase, LaunchSequencer, MarkerStore, SequencerConfig,
    SequencerEvent,
};
use site_config::SiteConfig;
use tokio::sync::broadcast;
use tokio::time::sleep;

const TICK: Duration = Duration::from_millis(10);

fn sequencer(coming_soon: bool, store: Arc<InMemoryMarkerStore>) -> LaunchSequencer {
    LaunchSequencer::new(
        &SiteConfig::with_coming_soon(coming_soon),
        store,
        SequencerConfig::default(),
    )
    .unwrap()
}

fn seen_store() -> Arc<InMemoryMarkerStore> {
    let store = Arc::new(InMemoryMarkerStore::new());
    store.set("portfolio-welcome-shown", "true");
    store
}

fn drain(rx: &mut broadcast::Receiver<SequencerEvent>) -> Vec<SequencerEvent> {
    let mut events = Vec::new();
    while let Ok(event) = rx.try_recv() {
        events.push(event);
    }
    events
}

fn greeting_count(events: &[SequencerEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::GreetingShown { .. }))
        .count()
}

fn marker_writes(events: &[SequencerEvent]) -> usize {
    events
        .iter()
        .filter(|e| matches!(e, SequencerEvent::MarkerWritten))
        .count()
}

#[tokio::test(start_paused = true)]
async fn coming_soon_always_gates_regardless_of_marker() {
    for store in [Arc::new(InMemoryMarkerStore::new()), seen_store()] {
        let mut sequencer = sequencer(true, store.clone());
        let mut events = sequencer.subscribe();

        assert_eq!(sequencer.mount().unwrap(), Experience::Gating);
        sleep(Duration::from_secs(10)).await;

        assert_eq!(sequencer.phase(), LaunchPhase::Gating);
        let events = drain(&mut events);
        assert_eq!(events, vec![SequencerEvent::ExperienceEntered(Experience::Gating)]);
        assert!(!sequencer.skip());
    }
}

#[tokio::test(start_paused = true)]
async fn first_visit_runs_every_greeting_then_writes_marker_once() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());
    let mut events = sequencer.subscribe();
    let config = SequencerConfig::default();

    assert_eq!(sequencer.mount().unwrap(), Experience::Welcome);
    assert_eq!(sequencer.phase(), LaunchPhase::Welcome { greeting: 0 });

    for index in 1..config.greetings.len() {
        sleep(config.greeting_interval).await;
        sleep(TICK).await;
        assert_eq!(sequencer.phase(), LaunchPhase::Welcome { greeting: index });
        assert!(!sequencer.welcome_seen());
    }

    // Last greeting's interval plus the terminal hold, then fade-out begins
    sleep(config.greeting_interval + config.final_hold).await;
    assert_eq!(sequencer.phase(), LaunchPhase::FadingOut);
    assert_eq!(store.writes(), 0, "marker must not be written before fade-out completes");

    sleep(config.fade_out).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);
    assert!(sequencer.welcome_seen());
    assert_eq!(store.writes(), 1);

    let events = drain(&mut events);
    assert_eq!(greeting_count(&events), 4);
    assert_eq!(marker_writes(&events), 1);
    assert!(events.contains(&SequencerEvent::FadeOutStarted { skipped: false }));
    assert_eq!(
        events.last(),
        Some(&SequencerEvent::MarkerWritten),
        "marker write is the final step"
    );
}

#[tokio::test(start_paused = true)]
async fn skip_at_second_greeting_ends_ritual_immediately() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());
    let mut events = sequencer.subscribe();
    let config = SequencerConfig::default();

    sequencer.mount().unwrap();
    sleep(config.greeting_interval + TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Welcome { greeting: 1 });

    assert!(sequencer.skip());
    sleep(TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::FadingOut);
    assert!(!sequencer.skip(), "skip is unavailable once fading out");

    sleep(config.fade_out).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);
    assert_eq!(store.writes(), 1);

    // Nothing else fires afterwards
    sleep(config.full_duration()).await;
    assert_eq!(store.writes(), 1);

    let events = drain(&mut events);
    assert_eq!(greeting_count(&events), 2);
    assert_eq!(marker_writes(&events), 1);
    assert!(events.contains(&SequencerEvent::FadeOutStarted { skipped: true }));
}

#[tokio::test(start_paused = true)]
async fn skip_during_final_hold_fades_immediately() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());
    let mut events = sequencer.subscribe();
    let config = SequencerConfig::default();

    sequencer.mount().unwrap();
    // Past the last greeting's interval, inside the terminal hold
    sleep(config.greeting_interval * 4 + Duration::from_millis(100)).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Welcome { greeting: 3 });

    assert!(sequencer.skip());
    sleep(TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::FadingOut);

    sleep(config.fade_out).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);
    assert_eq!(store.writes(), 1);

    let events = drain(&mut events);
    assert!(events.contains(&SequencerEvent::FadeOutStarted { skipped: true }));
    assert_eq!(marker_writes(&events), 1);
}

#[tokio::test(start_paused = true)]
async fn skip_after_ritual_reports_nothing_delivered() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());
    let config = SequencerConfig::default();

    sequencer.mount().unwrap();
    sleep(config.full_duration() + TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);

    assert!(!sequencer.skip());
    sleep(config.full_duration()).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);
    assert_eq!(store.writes(), 1);
}

#[tokio::test(start_paused = true)]
async fn returning_visitor_goes_straight_to_site() {
    let store = seen_store();
    let mut sequencer = sequencer(false, store.clone());
    let mut events = sequencer.subscribe();

    assert_eq!(sequencer.mount().unwrap(), Experience::Site);
    sleep(Duration::from_secs(10)).await;

    assert_eq!(sequencer.phase(), LaunchPhase::Site);
    let events = drain(&mut events);
    assert_eq!(greeting_count(&events), 0);
    assert_eq!(events, vec![SequencerEvent::ExperienceEntered(Experience::Site)]);
    assert_eq!(store.writes(), 1, "only the seeding write");
}

#[tokio::test(start_paused = true)]
async fn unmount_cancels_pending_timers() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());
    let config = SequencerConfig::default();

    sequencer.mount().unwrap();
    sleep(config.greeting_interval + TICK).await;
    let phase_at_unmount = sequencer.phase();

    sequencer.unmount();
    sleep(config.full_duration() * 2).await;

    assert_eq!(sequencer.phase(), phase_at_unmount);
    assert_eq!(store.writes(), 0);
    assert!(!sequencer.welcome_seen());
}

#[tokio::test(start_paused = true)]
async fn unmount_during_fade_out_leaves_marker_unset() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let mut sequencer = sequencer(false, store.clone());

    sequencer.mount().unwrap();
    assert!(sequencer.skip());
    sleep(TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::FadingOut);

    sequencer.unmount();
    sleep(Duration::from_secs(5)).await;
    assert_eq!(store.writes(), 0);
}

#[tokio::test(start_paused = true)]
async fn reload_mid_ritual_replays_from_the_start() {
    let store = Arc::new(InMemoryMarkerStore::new());
    let config = SequencerConfig::default();

    let mut first = sequencer(false, store.clone());
    first.mount().unwrap();
    sleep(config.greeting_interval * 2 + TICK).await;
    assert_eq!(first.phase(), LaunchPhase::Welcome { greeting: 2 });
    drop(first);

    let mut second = sequencer(false, store.clone());
    assert_eq!(second.mount().unwrap(), Experience::Welcome);
    assert_eq!(second.phase(), LaunchPhase::Welcome { greeting: 0 });
}

#[cfg(any(debug_assertions, feature = "debug-controls"))]
#[tokio::test(start_paused = true)]
async fn force_show_replays_without_clearing_marker() {
    let store = seen_store();
    let mut sequencer = sequencer(false, store.clone());
    let mut events = sequencer.subscribe();
    let config = SequencerConfig::default();

    assert_eq!(sequencer.mount().unwrap(), Experience::Site);
    assert!(sequencer.force_show_ritual().unwrap());
    assert_eq!(sequencer.phase(), LaunchPhase::Welcome { greeting: 0 });
    assert!(sequencer.welcome_seen());

    sleep(config.full_duration() + TICK).await;
    assert_eq!(sequencer.phase(), LaunchPhase::Site);

    let events = drain(&mut events);
    assert_eq!(greeting_count(&events), 4);
    assert_eq!(marker_writes(&events), 0, "marker was already set");
    assert_eq!(store.writes(), 1);
}

#[cfg(any(debug_assertions, feature = "debug-controls"))]
#[tokio::test(start_paused = true)]
async fn force_show_is_ignored_while_gated() {
    let mut sequencer = sequencer(true, Arc::new(InMemoryMarkerStore::new()));
    sequencer.mount().unwrap();
    assert!(!sequencer.force_show_ritual().unwrap());
    assert_eq!(sequencer.phase(), LaunchPhase::Gating);
}

#[cfg(any(debug_assertions, feature = "debug-controls"))]
#[tokio::test(start_paused = true)]
async fn reset_marker_brings_the_ritual_back_next_load() {
    let store = seen_store();

    let sequencer_a = sequencer(false, store.clone());
    sequencer_a.reset_marker();
    assert!(!sequencer_a.welcome_seen());

    let mut next_load = sequencer(false, store.clone());
    assert_eq!(next_load.mount().unwrap(), Experience::Welcome);
}
