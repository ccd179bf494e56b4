//! App Shell - serves the HTML page that bootstraps the single-page frontend.
//!
//! Every page route renders the same shell. Alongside rendering, the shell
//! guarantees an anti-forgery cookie, signals project onboarding on the event
//! bus, and queues a disclaimer for visitors of the demo area.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
