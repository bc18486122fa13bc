//! Sequencer phases, experiences and events

use serde::{Deserialize, Serialize};

/// The three mutually exclusive visitor experiences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Experience {
    /// Coming-soon page
    Gating,

    /// One-time welcome ritual
    Welcome,

    /// Content pages
    Site,
}

/// Fine-grained sequencer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LaunchPhase {
    /// Not mounted yet
    Deciding,

    /// Coming-soon page; terminal for this load
    Gating,

    /// Showing the greeting at this index
    Welcome { greeting: usize },

    /// Ritual over, fading to the site
    FadingOut,

    /// Content pages
    Site,
}

impl LaunchPhase {
    /// Visible experience, if any
    pub fn experience(&self) -> Option<Experience> {
        match self {
            LaunchPhase::Deciding => None,
            LaunchPhase::Gating => Some(Experience::Gating),
            LaunchPhase::Welcome { .. } | LaunchPhase::FadingOut => Some(Experience::Welcome),
            LaunchPhase::Site => Some(Experience::Site),
        }
    }
}

/// Discrete sequencer events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequencerEvent {
    /// An experience became visible
    ExperienceEntered(Experience),

    /// A greeting was rendered
    GreetingShown { index: usize, text: String },

    /// Fade-out began; `skipped` if triggered by the skip action
    FadeOutStarted { skipped: bool },

    /// The welcome marker went from unset to set
    MarkerWritten,

    /// The sequencer was unmounted
    Disposed,
}

/// Pick the experience for a page load
///
/// The static switch wins over everything, including the marker.
pub fn decide(coming_soon_mode: bool, welcome_seen: bool) -> Experience {
    if coming_soon_mode {
        Experience::Gating
    } else if welcome_seen {
        Experience::Site
    } else {
        Experience::Welcome
    }
}
