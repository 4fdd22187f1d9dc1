//! Folio certification timeline
//!
//! Milestones (certifications, courses, trainings) arrive as an unordered JSON
//! document. This crate loads them and derives what the timeline view draws:
//! the chronological order and how far the progress bar is filled.
//!
//! ```rust,ignore
//! use folio_timeline::{compute_progress_now, Timeline};
//!
//! let timeline = Timeline::from_json(&body)?;
//! let progress = compute_progress_now(timeline.milestones());
//! println!("{:.0}%", progress.percent());
//! ```

mod error;
mod milestone;
mod progress;

pub use error::TimelineError;
pub use milestone::{Milestone, MilestoneStatus, Timeline};
pub use progress::{compute_progress, compute_progress_now, StatusCounts, TimelineProgress};
