//! The launch sequencer state machine
//!
//! `Deciding → {Gating, Welcome, Site}`, where Welcome runs
//! `Greeting[0] → … → Greeting[n-1] → final hold → FadingOut → Site`.
//! Skip jumps straight to `FadingOut` from any greeting.

use std::sync::Arc;

use site_config::SiteConfig;
use tokio::sync::{broadcast, watch, Notify};
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tracing::{debug, info};

use crate::config::SequencerConfig;
use crate::error::SequencerError;
use crate::marker::{MarkerStore, WelcomeMarker};
use crate::phase::{decide, Experience, LaunchPhase, SequencerEvent};

const EVENT_CAPACITY: usize = 64;

/// Mount lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Lifecycle {
    Fresh,
    Mounted,
    Disposed,
}

/// State shared with the ritual task
struct Shared {
    config: SequencerConfig,
    marker: WelcomeMarker,
    phase_tx: watch::Sender<LaunchPhase>,
    event_tx: broadcast::Sender<SequencerEvent>,
}

impl Shared {
    fn set_phase(&self, phase: LaunchPhase) {
        self.phase_tx.send_replace(phase);
    }

    fn emit(&self, event: SequencerEvent) {
        // No subscribers is fine.
        let _ = self.event_tx.send(event);
    }

    fn enter(&self, experience: Experience) {
        self.emit(SequencerEvent::ExperienceEntered(experience));
    }

    fn show_greeting(&self, index: usize) {
        let text = self.config.greetings[index].clone();
        debug!(index, greeting = %text, "Showing greeting");
        self.set_phase(LaunchPhase::Welcome { greeting: index });
        self.emit(SequencerEvent::GreetingShown { index, text });
    }

    /// Fade out, reveal the site, then record the marker
    async fn finish(&self, skipped: bool) {
        self.set_phase(LaunchPhase::FadingOut);
        self.emit(SequencerEvent::FadeOutStarted { skipped });

        sleep(self.config.fade_out).await;

        self.set_phase(LaunchPhase::Site);
        self.enter(Experience::Site);

        if self.marker.mark() {
            self.emit(SequencerEvent::MarkerWritten);
        }
        info!(skipped, "Welcome ritual finished");
    }
}

/// A running welcome ritual
struct Ritual {
    task: JoinHandle<()>,
    skip: Arc<Notify>,
}

/// Drive the greetings; greeting 0 is already visible when this starts
async fn run_ritual(shared: Arc<Shared>, skip: Arc<Notify>) {
    let count = shared.config.greetings.len();
    let mut skipped = false;

    for index in 0..count {
        if index > 0 {
            shared.show_greeting(index);
        }
        tokio::select! {
            _ = sleep(shared.config.greeting_interval) => {}
            _ = skip.notified() => {
                skipped = true;
                break;
            }
        }
    }

    if !skipped {
        tokio::select! {
            _ = sleep(shared.config.final_hold) => {}
            _ = skip.notified() => skipped = true,
        }
    }

    shared.finish(skipped).await;
}

/// Client-side launch sequencer
///
/// One instance per page load. All timers live on the current tokio runtime
/// and are aborted by [`unmount`](Self::unmount) or on drop.
pub struct LaunchSequencer {
    coming_soon_mode: bool,
    shared: Arc<Shared>,
    ritual: Option<Ritual>,
    lifecycle: Lifecycle,
}

impl LaunchSequencer {
    /// Create a sequencer for one page load
    pub fn new(
        site: &SiteConfig,
        store: Arc<dyn MarkerStore>,
        config: SequencerConfig,
    ) -> Result<Self, SequencerError> {
        config.validate()?;

        let (phase_tx, _) = watch::channel(LaunchPhase::Deciding);
        let (event_tx, _) = broadcast::channel(EVENT_CAPACITY);

        Ok(Self {
            coming_soon_mode: site.coming_soon_mode,
            shared: Arc::new(Shared {
                config,
                marker: WelcomeMarker::new(store),
                phase_tx,
                event_tx,
            }),
            ritual: None,
            lifecycle: Lifecycle::Fresh,
        })
    }

    /// Current phase
    pub fn phase(&self) -> LaunchPhase {
        *self.shared.phase_tx.borrow()
    }

    /// Watch phase changes
    pub fn watch(&self) -> watch::Receiver<LaunchPhase> {
        self.shared.phase_tx.subscribe()
    }

    /// Subscribe to sequencer events
    pub fn subscribe(&self) -> broadcast::Receiver<SequencerEvent> {
        self.shared.event_tx.subscribe()
    }

    /// Whether the welcome marker is currently set
    pub fn welcome_seen(&self) -> bool {
        self.shared.marker.is_set()
    }

    /// Decide the experience for this load and start it
    pub fn mount(&mut self) -> Result<Experience, SequencerError> {
        match self.lifecycle {
            Lifecycle::Fresh => {}
            Lifecycle::Mounted => return Err(SequencerError::AlreadyMounted),
            Lifecycle::Disposed => return Err(SequencerError::Disposed),
        }

        let experience = decide(self.coming_soon_mode, self.shared.marker.is_set());
        debug!(?experience, coming_soon_mode = self.coming_soon_mode, "Launch experience decided");

        match experience {
            Experience::Gating => {
                self.shared.set_phase(LaunchPhase::Gating);
                self.shared.enter(Experience::Gating);
            }
            Experience::Site => {
                self.shared.set_phase(LaunchPhase::Site);
                self.shared.enter(Experience::Site);
            }
            Experience::Welcome => self.start_ritual()?,
        }

        self.lifecycle = Lifecycle::Mounted;
        Ok(experience)
    }

    /// End the welcome ritual now
    ///
    /// Returns `false` when no greeting is on screen. `true` means the ritual
    /// moves to fade-out without waiting out its current timer; if that timer
    /// has just fired, the next greeting may flash before the fade starts.
    pub fn skip(&mut self) -> bool {
        let Some(ritual) = &self.ritual else {
            return false;
        };

        // Checked under the phase lock so the ritual cannot leave the
        // greetings between the check and the notification.
        let mut delivered = false;
        self.shared.phase_tx.send_if_modified(|phase| {
            if matches!(phase, LaunchPhase::Welcome { .. }) {
                ritual.skip.notify_one();
                delivered = true;
            }
            false
        });

        if delivered {
            debug!("Welcome ritual skipped");
        }
        delivered
    }

    /// Cancel every pending timer; no state changes after this
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Disposed {
            return;
        }
        self.abort_ritual();
        self.lifecycle = Lifecycle::Disposed;
        self.shared.emit(SequencerEvent::Disposed);
    }

    fn start_ritual(&mut self) -> Result<(), SequencerError> {
        let runtime = tokio::runtime::Handle::try_current()
            .map_err(|e| SequencerError::NoRuntime(e.to_string()))?;

        self.abort_ritual();

        self.shared.enter(Experience::Welcome);
        self.shared.show_greeting(0);

        let skip = Arc::new(Notify::new());
        let task = runtime.spawn(run_ritual(self.shared.clone(), skip.clone()));
        self.ritual = Some(Ritual { task, skip });

        Ok(())
    }

    fn abort_ritual(&mut self) {
        if let Some(ritual) = self.ritual.take() {
            ritual.task.abort();
        }
    }
}

#[cfg(any(debug_assertions, feature = "debug-controls"))]
impl LaunchSequencer {
    /// Replay the welcome ritual without touching the marker
    ///
    /// Has no effect while the site is gated or after unmount.
    pub fn force_show_ritual(&mut self) -> Result<bool, SequencerError> {
        if self.lifecycle == Lifecycle::Disposed || self.coming_soon_mode {
            return Ok(false);
        }
        info!("Replaying welcome ritual");
        self.start_ritual()?;
        self.lifecycle = Lifecycle::Mounted;
        Ok(true)
    }

    /// Forget that this browser has seen the welcome ritual
    pub fn reset_marker(&self) {
        info!("Welcome marker reset");
        self.shared.marker.reset();
    }
}

impl Drop for LaunchSequencer {
    fn drop(&mut self) {
        self.abort_ritual();
    }
}
