//! Report Aggregator
//!
//! Pure reduction of the full booking set into the admin report:
//! summary counts, per-branch/per-occasion/per-date breakdowns,
//! monthly buckets, recent activity and the upcoming list. Full
//! recomputation per request; report freshness, not computation
//! cost, is the concern at this volume.

use chrono::{Datelike, NaiveDate};
use shared::models::{
    ActivityEntry, Booking, BookingStatus, BranchStats, DailyStats, DashboardCounts,
    MonthlyStats, Report, ReportSummary,
};

use crate::utils::time::{humanize_date, month_key};

/// Report policy constants (config-driven, not business-rule-derived)
#[derive(Debug, Clone)]
pub struct ReportPolicy {
    /// Display-only revenue estimate multiplier per guest
    pub revenue_per_guest: f64,
    /// Length of the recent-activity list
    pub recent_limit: usize,
    /// Length of the upcoming-bookings list
    pub upcoming_limit: usize,
}

/// Build the full report from the current booking set.
pub fn build_report(bookings: &[Booking], today: NaiveDate, policy: &ReportPolicy) -> Report {
    let mut summary = ReportSummary::default();
    let mut by_branch = std::collections::BTreeMap::new();
    let mut by_occasion = std::collections::BTreeMap::new();
    let mut by_date = std::collections::BTreeMap::new();
    let mut monthly_stats = std::collections::BTreeMap::new();

    for b in bookings {
        summary.total_bookings += 1;
        summary.total_guests = summary.total_guests.saturating_add(b.guests);
        count_status(&mut summary, b.status);

        let branch: &mut BranchStats = by_branch.entry(b.branch.to_string()).or_default();
        branch.total += 1;
        match b.status {
            BookingStatus::Pending => branch.pending += 1,
            BookingStatus::Approved => branch.approved += 1,
            BookingStatus::Rejected => branch.rejected += 1,
            BookingStatus::Cancelled => branch.cancelled += 1,
        }

        if let Some(occasion) = &b.occasion
            && !occasion.trim().is_empty()
        {
            *by_occasion.entry(occasion.clone()).or_insert(0) += 1;
        }

        let daily: &mut DailyStats = by_date.entry(b.date.to_string()).or_default();
        daily.total += 1;
        match b.status {
            BookingStatus::Pending => daily.pending += 1,
            BookingStatus::Approved => daily.approved += 1,
            BookingStatus::Rejected => daily.rejected += 1,
            BookingStatus::Cancelled => daily.cancelled += 1,
        }

        let monthly: &mut MonthlyStats = monthly_stats.entry(month_key(b.date)).or_default();
        monthly.bookings += 1;
        monthly.guests = monthly.guests.saturating_add(b.guests);
        match b.status {
            BookingStatus::Approved => monthly.approved += 1,
            BookingStatus::Rejected => monthly.rejected += 1,
            _ => {}
        }
    }

    // Guard the division: avg is exactly 0 for an empty set
    if summary.total_bookings > 0 {
        summary.avg_party_size = summary.total_guests as f64 / summary.total_bookings as f64;
    }
    summary.revenue_estimate = policy.revenue_per_guest * summary.total_guests as f64;

    Report {
        summary,
        by_branch,
        by_occasion,
        by_date,
        monthly_stats,
        recent_activity: recent_activity(bookings, policy.recent_limit),
        upcoming: upcoming(bookings, today, policy.upcoming_limit),
    }
}

/// Dashboard counters: bookings dated today / this ISO week / this
/// calendar month, plus the pending backlog.
pub fn dashboard_counts(bookings: &[Booking], today: NaiveDate) -> DashboardCounts {
    let mut counts = DashboardCounts::default();
    for b in bookings {
        if b.date == today {
            counts.today += 1;
        }
        if b.date.iso_week() == today.iso_week() {
            counts.this_week += 1;
        }
        if b.date.year() == today.year() && b.date.month() == today.month() {
            counts.this_month += 1;
        }
        if b.status == BookingStatus::Pending {
            counts.pending += 1;
        }
    }
    counts
}

fn count_status(summary: &mut ReportSummary, status: BookingStatus) {
    match status {
        BookingStatus::Pending => summary.pending += 1,
        BookingStatus::Approved => summary.approved += 1,
        BookingStatus::Rejected => summary.rejected += 1,
        BookingStatus::Cancelled => summary.cancelled += 1,
    }
}

/// Most recently changed bookings, newest updatedAt first
fn recent_activity(bookings: &[Booking], limit: usize) -> Vec<ActivityEntry> {
    let mut sorted: Vec<&Booking> = bookings.iter().collect();
    sorted.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
    sorted
        .into_iter()
        .take(limit)
        .map(|b| ActivityEntry {
            kind: b.status.to_string(),
            // Display date matches the email wording, not ISO
            description: format!("{} - {} - {}", b.name, b.branch, humanize_date(b.date)),
            timestamp: b.updated_at,
        })
        .collect()
}

/// Bookings from today onward, ascending by date, excluding
/// cancelled and rejected ones
fn upcoming(bookings: &[Booking], today: NaiveDate, limit: usize) -> Vec<Booking> {
    let mut upcoming: Vec<Booking> = bookings
        .iter()
        .filter(|b| b.date >= today && b.status.consumes_capacity())
        .cloned()
        .collect();
    upcoming.sort_by_key(|b| b.date);
    upcoming.truncate(limit);
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use shared::models::Branch;

    fn policy() -> ReportPolicy {
        ReportPolicy {
            revenue_per_guest: 25.0,
            recent_limit: 20,
            upcoming_limit: 10,
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn make_booking(
        name: &str,
        branch: Branch,
        date: NaiveDate,
        guests: u32,
        status: BookingStatus,
        occasion: Option<&str>,
    ) -> Booking {
        let now = Utc::now();
        Booking {
            id: None,
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "555-0100".to_string(),
            branch,
            date,
            time: "7:00 PM".to_string(),
            guests,
            occasion: occasion.map(String::from),
            message: None,
            status,
            approval_note: None,
            closed: status == BookingStatus::Cancelled,
            created_at: now,
            updated_at: now,
        }
    }

    #[test]
    fn empty_set_has_zero_average_without_panicking() {
        let report = build_report(&[], day(2), &policy());
        assert_eq!(report.summary.total_bookings, 0);
        assert_eq!(report.summary.avg_party_size, 0.0);
        assert_eq!(report.summary.revenue_estimate, 0.0);
        assert!(report.by_branch.is_empty());
    }

    #[test]
    fn summary_counts_all_statuses_and_guests() {
        let bookings = vec![
            make_booking("Alice", Branch::Naran, day(2), 4, BookingStatus::Pending, None),
            make_booking("Bob", Branch::Naran, day(3), 2, BookingStatus::Approved, None),
            make_booking("Carol", Branch::Besar, day(4), 6, BookingStatus::Rejected, None),
            make_booking("Dave", Branch::Besar, day(5), 8, BookingStatus::Cancelled, None),
        ];
        let report = build_report(&bookings, day(2), &policy());

        let s = &report.summary;
        assert_eq!(s.total_bookings, 4);
        assert_eq!((s.pending, s.approved, s.rejected, s.cancelled), (1, 1, 1, 1));
        // Total guests counts every status
        assert_eq!(s.total_guests, 20);
        assert_eq!(s.avg_party_size, 5.0);
        assert_eq!(s.revenue_estimate, 500.0);
    }

    #[test]
    fn branch_breakdown_totals_match() {
        let bookings = vec![
            make_booking("Alice", Branch::Naran, day(2), 4, BookingStatus::Pending, None),
            make_booking("Bob", Branch::Naran, day(3), 2, BookingStatus::Approved, None),
            make_booking("Carol", Branch::Besar, day(4), 6, BookingStatus::Rejected, None),
        ];
        let report = build_report(&bookings, day(2), &policy());

        let naran = &report.by_branch["naran"];
        assert_eq!(naran.total, 2);
        assert_eq!(naran.pending, 1);
        assert_eq!(naran.approved, 1);
        assert_eq!(report.by_branch["besar"].rejected, 1);
    }

    #[test]
    fn occasion_table_skips_empty_values() {
        let bookings = vec![
            make_booking("Alice", Branch::Naran, day(2), 4, BookingStatus::Pending, Some("birthday")),
            make_booking("Bob", Branch::Naran, day(3), 2, BookingStatus::Pending, Some("birthday")),
            make_booking("Carol", Branch::Besar, day(4), 6, BookingStatus::Pending, Some(" ")),
            make_booking("Dave", Branch::Besar, day(5), 8, BookingStatus::Pending, None),
        ];
        let report = build_report(&bookings, day(2), &policy());

        assert_eq!(report.by_occasion.len(), 1);
        assert_eq!(report.by_occasion["birthday"], 2);
    }

    #[test]
    fn monthly_buckets_accumulate_guests() {
        let bookings = vec![
            make_booking("Alice", Branch::Naran, day(2), 4, BookingStatus::Approved, None),
            make_booking("Bob", Branch::Naran, day(20), 2, BookingStatus::Rejected, None),
            make_booking(
                "Carol",
                Branch::Besar,
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                6,
                BookingStatus::Pending,
                None,
            ),
        ];
        let report = build_report(&bookings, day(2), &policy());

        let march = &report.monthly_stats["2026-03"];
        assert_eq!((march.bookings, march.guests), (2, 6));
        assert_eq!((march.approved, march.rejected), (1, 1));
        assert_eq!(report.monthly_stats["2026-04"].bookings, 1);
    }

    #[test]
    fn recent_activity_is_newest_first_and_capped() {
        let mut bookings = Vec::new();
        for i in 0..25 {
            let mut b = make_booking("Guest", Branch::Naran, day(2), 2, BookingStatus::Pending, None);
            b.name = format!("Guest{}", i);
            b.updated_at = Utc::now() + Duration::seconds(i);
            bookings.push(b);
        }
        let report = build_report(&bookings, day(2), &policy());

        assert_eq!(report.recent_activity.len(), 20);
        assert!(report.recent_activity[0].description.starts_with("Guest24"));
        assert!(report.recent_activity[0].timestamp >= report.recent_activity[19].timestamp);
        // Dates render in display form, as in the notification emails
        assert!(
            report.recent_activity[0]
                .description
                .ends_with("Monday, March 2, 2026")
        );
    }

    #[test]
    fn upcoming_excludes_past_cancelled_and_rejected() {
        let bookings = vec![
            make_booking("Past", Branch::Naran, day(1), 2, BookingStatus::Approved, None),
            make_booking("Today", Branch::Naran, day(2), 2, BookingStatus::Pending, None),
            make_booking("Later", Branch::Naran, day(9), 2, BookingStatus::Approved, None),
            make_booking("Gone", Branch::Besar, day(5), 2, BookingStatus::Cancelled, None),
            make_booking("Denied", Branch::Besar, day(6), 2, BookingStatus::Rejected, None),
        ];
        let report = build_report(&bookings, day(2), &policy());

        let names: Vec<&str> = report.upcoming.iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["Today", "Later"]);
    }

    #[test]
    fn dashboard_counts_by_calendar_buckets() {
        // 2026-03-02 is a Monday; 2026-03-08 the following Sunday
        let today = day(2);
        let bookings = vec![
            make_booking("A", Branch::Naran, day(2), 2, BookingStatus::Pending, None),
            make_booking("B", Branch::Naran, day(8), 2, BookingStatus::Approved, None),
            make_booking("C", Branch::Naran, day(9), 2, BookingStatus::Pending, None),
            make_booking(
                "D",
                Branch::Besar,
                NaiveDate::from_ymd_opt(2026, 4, 1).unwrap(),
                2,
                BookingStatus::Pending,
                None,
            ),
        ];
        let counts = dashboard_counts(&bookings, today);

        assert_eq!(counts.today, 1);
        assert_eq!(counts.this_week, 2);
        assert_eq!(counts.this_month, 3);
        assert_eq!(counts.pending, 3);
    }
}
