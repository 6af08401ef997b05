//! Change detection.
//!
//! Detectors compare a fresh snapshot against remembered state and say what
//! changed. They never dispatch anything themselves; the idempotency gate
//! has the final word on whether a detected change gets announced.

pub mod feed;
pub mod milestone;
pub mod track;

#[cfg(test)]
mod test;

pub use feed::FeedDetector;
pub use track::TrackChangeDetector;
