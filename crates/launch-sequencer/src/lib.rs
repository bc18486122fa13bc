//! Launch Sequencer - client-side launch experience
//!
//! On every page load the sequencer picks exactly one of three experiences:
//!
//! - **Gating**: the coming-soon page, whenever the static switch is on
//! - **Welcome**: a one-time greeting ritual for browsers that have not seen it
//! - **Site**: the content pages
//!
//! The decision uses only the static [`SiteConfig`](site_config::SiteConfig)
//! switch and the browser-local welcome marker. It does not consult the admin
//! session cookie, so an admin admitted by the edge gate still sees the gating
//! experience here.
//!
//! ## Timing
//!
//! The welcome ritual is driven by cooperative tokio timers. Unmounting (or
//! dropping) the sequencer aborts them; the marker is written only after the
//! fade-out completes, so a reload mid-ritual replays it from the start.

#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod marker;
pub mod phase;
pub mod sequencer;
pub mod status;

pub use config::SequencerConfig;
pub use error::{SequencerError, StatusError};
pub use marker::{InMemoryMarkerStore, MarkerStore, WelcomeMarker};
pub use phase::{decide, Experience, LaunchPhase, SequencerEvent};
pub use sequencer::LaunchSequencer;
pub use status::{DegradedNotice, HttpStatusSource, StatusMonitor, StatusSnapshot, StatusSource};
