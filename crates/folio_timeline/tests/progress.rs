//! Timeline fill computation.

use chrono::NaiveDate;
use folio_timeline::{
    compute_progress, compute_progress_now, Milestone, MilestoneStatus, StatusCounts, Timeline,
};
use pretty_assertions::assert_eq;

fn date(s: &str) -> NaiveDate {
    s.parse().expect("valid test date")
}

fn milestone(id: u32, on: &str, status: MilestoneStatus) -> Milestone {
    Milestone {
        id,
        title: format!("Milestone {id}"),
        institution: "Institute".to_string(),
        date: date(on),
        status,
        description: String::new(),
    }
}

fn ids(ms: &[Milestone]) -> Vec<u32> {
    ms.iter().map(|m| m.id).collect()
}

#[test]
fn empty_timeline_is_zero_percent() {
    let p = compute_progress(&[], date("2024-06-01"));
    assert_eq!(p.percent(), 0.0);
    assert!(p.milestones().is_empty());
    assert_eq!(p.reached(), 0);
    assert_eq!(p.next_upcoming(), None);
}

#[test]
fn all_past_timeline_is_full() {
    let input = [
        milestone(1, "2020-01-01", MilestoneStatus::Completed),
        milestone(2, "2021-01-01", MilestoneStatus::Completed),
        milestone(3, "2022-01-01", MilestoneStatus::Completed),
    ];
    let p = compute_progress(&input, date("2025-01-01"));
    assert_eq!(p.percent(), 100.0);
    assert_eq!(ids(p.milestones()), vec![1, 2, 3]);
    assert_eq!(p.next_upcoming(), None);
}

#[test]
fn partial_timeline_is_half_full() {
    let input = [
        milestone(1, "2023-01-01", MilestoneStatus::Completed),
        milestone(2, "2026-01-01", MilestoneStatus::Planned),
    ];
    let p = compute_progress(&input, date("2024-06-01"));
    assert_eq!(p.reached(), 1);
    assert_eq!(p.total(), 2);
    assert_eq!(p.percent(), 50.0);
    assert!(p.is_reached(0));
    assert!(!p.is_reached(1));
    assert_eq!(p.next_upcoming().map(|m| m.id), Some(2));
}

#[test]
fn reverse_input_is_sorted_ascending() {
    let input = [
        milestone(3, "2024-09-01", MilestoneStatus::Planned),
        milestone(2, "2022-05-10", MilestoneStatus::Completed),
        milestone(1, "2019-02-20", MilestoneStatus::Completed),
    ];
    let p = compute_progress(&input, date("2023-01-01"));
    assert_eq!(ids(p.milestones()), vec![1, 2, 3]);
    assert_eq!(p.reached(), 2);
}

#[test]
fn milestone_dated_today_counts_as_reached() {
    let input = [milestone(1, "2024-06-01", MilestoneStatus::Planned)];
    assert_eq!(compute_progress(&input, date("2024-06-01")).percent(), 100.0);
    assert_eq!(compute_progress(&input, date("2024-05-31")).percent(), 0.0);
}

#[test]
fn equal_dates_keep_input_order() {
    let input = [
        milestone(7, "2023-01-01", MilestoneStatus::Completed),
        milestone(4, "2022-01-01", MilestoneStatus::Completed),
        milestone(5, "2023-01-01", MilestoneStatus::Completed),
        milestone(6, "2023-01-01", MilestoneStatus::Completed),
    ];
    let p = compute_progress(&input, date("2020-01-01"));
    assert_eq!(ids(p.milestones()), vec![4, 7, 5, 6]);
}

#[test]
fn status_does_not_affect_fill() {
    let input = [
        milestone(1, "2021-01-01", MilestoneStatus::Planned),
        milestone(2, "2030-01-01", MilestoneStatus::Completed),
        milestone(3, "2031-01-01", MilestoneStatus::Completed),
        milestone(4, "2032-01-01", MilestoneStatus::Completed),
    ];
    let p = compute_progress(&input, date("2024-01-01"));
    assert_eq!(p.reached(), 1);
    assert_eq!(p.percent(), 25.0);
    assert_eq!(
        p.status_counts(),
        StatusCounts {
            completed: 3,
            planned: 1
        }
    );
}

#[test]
fn percent_stays_within_bounds() {
    let input: Vec<Milestone> = (0..7)
        .map(|i| milestone(i, &format!("{}-01-01", 2018 + i), MilestoneStatus::Completed))
        .collect();
    for year in 2015..2030 {
        let pct = compute_progress(&input, date(&format!("{year}-06-30"))).percent();
        assert!((0.0..=100.0).contains(&pct), "year {year}: {pct}");
    }
}

#[test]
fn wall_clock_variant_sees_old_dates_as_past() {
    let input = [milestone(1, "2000-01-01", MilestoneStatus::Completed)];
    assert_eq!(compute_progress_now(&input).percent(), 100.0);
}

#[test]
fn loaded_document_feeds_the_calculator() {
    let body = r#"{"timeline": [
        {"id": 2, "title": "B", "institution": "X", "date": "2026-01-01", "status": "planned", "description": ""},
        {"id": 1, "title": "A", "institution": "X", "date": "2023-01-01", "status": "completed", "description": ""}
    ]}"#;
    let timeline = Timeline::from_json(body).unwrap();
    let p = compute_progress(timeline.milestones(), date("2024-06-01"));
    assert_eq!(ids(p.milestones()), vec![1, 2]);
    assert_eq!(p.percent(), 50.0);
}
