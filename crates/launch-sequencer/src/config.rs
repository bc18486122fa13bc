//! Welcome ritual timing

use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::error::SequencerError;

/// Greeting sequence and its timers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencerConfig {
    /// Greetings in display order
    pub greetings: Vec<String>,

    /// How long each greeting stays on screen
    pub greeting_interval: Duration,

    /// Extra hold after the last greeting
    pub final_hold: Duration,

    /// Fade-out length before the site appears
    pub fade_out: Duration,
}

impl Default for SequencerConfig {
    fn default() -> Self {
        Self {
            greetings: ["Hello", "Hola", "Bonjour", "Namaste"]
                .into_iter()
                .map(String::from)
                .collect(),
            greeting_interval: Duration::from_millis(800),
            final_hold: Duration::from_millis(1000),
            fade_out: Duration::from_millis(500),
        }
    }
}

impl SequencerConfig {
    pub fn validate(&self) -> Result<(), SequencerError> {
        if self.greetings.is_empty() {
            return Err(SequencerError::NoGreetings);
        }
        Ok(())
    }

    /// Time from mount to the site appearing when nothing is skipped
    pub fn full_duration(&self) -> Duration {
        self.greeting_interval * self.greetings.len() as u32 + self.final_hold + self.fade_out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SequencerConfig::default();
        assert_eq!(config.greetings.len(), 4);
        assert!(config.validate().is_ok());
        assert_eq!(config.full_duration(), Duration::from_millis(4700));
    }

    #[test]
    fn test_empty_greetings_rejected() {
        let config = SequencerConfig {
            greetings: Vec::new(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(SequencerError::NoGreetings)));
    }
}
