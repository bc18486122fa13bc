//! Site Config - static configuration for the portfolio launch gate
//!
//! Every layer that needs to know whether the site is public reads the same
//! [`SiteConfig`] value. It is loaded once at startup and handed to the
//! request-side gate and to the client-side sequencer; nothing mutates it at
//! runtime.
//!
//! ## Key Concepts
//!
//! - **SiteConfig**: coming-soon switch, launch instant, social links
//! - **Countdown**: time remaining until the launch instant
//! - **DeployEnvironment**: development vs production (cookie security)
//! - **keys**: cookie names and the browser storage key shared by both sides

#![deny(unsafe_code)]
#![cfg_attr(feature = "strict-docs", warn(missing_docs))]
#![cfg_attr(not(feature = "strict-docs"), allow(missing_docs))]

pub mod countdown;
pub mod environment;
pub mod keys;
pub mod site;

pub use countdown::Countdown;
pub use environment::DeployEnvironment;
pub use site::{SiteConfig, SocialLinks};
