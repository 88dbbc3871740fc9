//! Browsing session: the state object behind the rendering collaborator.
//!
//! `BrowseSession` owns the loaded catalog, the current browsing state
//! (active category, query, sort) and the comparison selection. The
//! `on_*` methods are the event surface the renderer drives; the query
//! methods are what it reads back to paint cards, chips and the comparison
//! bar. No rendering happens here.

pub mod session;

pub use session::{BrowseSession, ToggleOutcome};
