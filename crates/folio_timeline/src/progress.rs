use chrono::{Local, NaiveDate};

use crate::milestone::{Milestone, MilestoneStatus};

/// Sorted milestones plus how much of the timeline lies in the past.
#[derive(Clone, Debug, PartialEq)]
pub struct TimelineProgress {
    milestones: Vec<Milestone>,
    reached: usize,
    percent: f64,
}

/// Milestone counts by declared status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub completed: usize,
    pub planned: usize,
}

/// Sort `milestones` by date and compute the fill percentage as of `today`.
///
/// - Sorting is stable: milestones sharing a date keep their input order.
/// - Only the leading run of milestones dated on or before `today` counts.
///   The walk stops at the first future date, so a past-dated entry after
///   it is not counted. `status` plays no part.
/// - An empty collection is 0% filled.
pub fn compute_progress(milestones: &[Milestone], today: NaiveDate) -> TimelineProgress {
    let mut sorted = milestones.to_vec();
    sorted.sort_by_key(|m| m.date);

    let reached = sorted.iter().take_while(|m| m.date <= today).count();
    let percent = if sorted.is_empty() {
        0.0
    } else {
        (reached as f64 / sorted.len() as f64 * 100.0).min(100.0)
    };

    TimelineProgress {
        milestones: sorted,
        reached,
        percent,
    }
}

/// [`compute_progress`] against the local wall-clock date.
pub fn compute_progress_now(milestones: &[Milestone]) -> TimelineProgress {
    compute_progress(milestones, Local::now().date_naive())
}

impl TimelineProgress {
    /// Milestones in ascending date order.
    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }

    pub fn into_milestones(self) -> Vec<Milestone> {
        self.milestones
    }

    /// Length of the leading run of past milestones.
    pub fn reached(&self) -> usize {
        self.reached
    }

    pub fn total(&self) -> usize {
        self.milestones.len()
    }

    /// Fill value in `[0, 100]`.
    pub fn percent(&self) -> f64 {
        self.percent
    }

    /// Whether the milestone at `index` (in sorted order) is within the filled part.
    pub fn is_reached(&self, index: usize) -> bool {
        index < self.reached
    }

    /// First milestone past the filled part, if any.
    pub fn next_upcoming(&self) -> Option<&Milestone> {
        self.milestones.get(self.reached)
    }

    pub fn status_counts(&self) -> StatusCounts {
        self.milestones
            .iter()
            .fold(StatusCounts::default(), |mut acc, m| {
                match m.status {
                    MilestoneStatus::Completed => acc.completed += 1,
                    MilestoneStatus::Planned => acc.planned += 1,
                }
                acc
            })
    }
}
