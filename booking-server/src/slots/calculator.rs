//! Slot Availability Calculator
//!
//! Pure reduction of a booking window into per-slot occupancy.
//! Recomputed on every query; no stored state, safe to call
//! repeatedly and concurrently.

use chrono::{Days, NaiveDate};
use shared::models::{Booking, Branch, Slot, SlotStatus};

/// A branch together with its per-slot seating capacity
#[derive(Debug, Clone, Copy)]
pub struct BranchCapacity {
    pub branch: Branch,
    pub capacity: u32,
}

/// Compute occupancy and availability for every (date, time, branch)
/// combination in the window `[start_date, start_date + num_days)`.
///
/// The caller supplies only bookings already filtered to the window
/// and to statuses that consume capacity (pending and approved);
/// rejected/cancelled bookings never reach this function.
///
/// Result ordering: date ascending, then `time_labels` in declared
/// order (not lexical), then `branches` in declared order.
///
/// `low_water_mark` is a policy constant (config), not derived from
/// capacity: `available == 0` is "full", `available <= low_water_mark`
/// is "limited", everything else "available". A capacity of 0 is
/// permitted and is immediately "full".
pub fn compute_slots(
    bookings: &[Booking],
    branches: &[BranchCapacity],
    time_labels: &[String],
    start_date: NaiveDate,
    num_days: u32,
    low_water_mark: u32,
) -> Vec<Slot> {
    let mut slots = Vec::with_capacity(num_days as usize * time_labels.len() * branches.len());

    for offset in 0..num_days {
        let Some(date) = start_date.checked_add_days(Days::new(offset as u64)) else {
            break;
        };

        for time in time_labels {
            for bc in branches {
                // Sum in u64: stored party sizes are validated on
                // entry, but occupancy must not be able to wrap
                let booked: u64 = bookings
                    .iter()
                    .filter(|b| b.branch == bc.branch && b.date == date && b.time == *time)
                    .map(|b| u64::from(b.guests))
                    .sum();
                let booked = u32::try_from(booked).unwrap_or(u32::MAX);

                let available = bc.capacity.saturating_sub(booked);

                slots.push(Slot {
                    branch: bc.branch,
                    date,
                    time: time.clone(),
                    capacity: bc.capacity,
                    booked,
                    available,
                    status: slot_status(available, low_water_mark),
                });
            }
        }
    }

    slots
}

fn slot_status(available: u32, low_water_mark: u32) -> SlotStatus {
    if available == 0 {
        SlotStatus::Full
    } else if available <= low_water_mark {
        SlotStatus::Limited
    } else {
        SlotStatus::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use shared::models::BookingStatus;

    /// Pinned policy: the admin UI renders "limited" at 5 or fewer seats
    const LOW_WATER_MARK: u32 = 5;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, d).unwrap()
    }

    fn make_booking(branch: Branch, date: NaiveDate, time: &str, guests: u32) -> Booking {
        let now: DateTime<Utc> = Utc::now();
        Booking {
            id: None,
            name: "Guest".to_string(),
            email: "guest@example.com".to_string(),
            phone: "555-0100".to_string(),
            branch,
            date,
            time: time.to_string(),
            guests,
            occasion: None,
            message: None,
            status: BookingStatus::Pending,
            approval_note: None,
            closed: false,
            created_at: now,
            updated_at: now,
        }
    }

    fn labels(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_window_yields_full_capacity() {
        // Empty bookings list, capacity 50, one label, one day -> a
        // single open slot per branch
        let branches = [BranchCapacity {
            branch: Branch::Naran,
            capacity: 50,
        }];
        let slots = compute_slots(&[], &branches, &labels(&["7:00 PM"]), day(2), 1, LOW_WATER_MARK);

        assert_eq!(slots.len(), 1);
        assert_eq!(slots[0].booked, 0);
        assert_eq!(slots[0].available, 50);
        assert_eq!(slots[0].status, SlotStatus::Available);
    }

    #[test]
    fn party_sizes_sum_into_booked() {
        // 10 + 20 + 15 = 45 booked of 50 -> 5 left, which is exactly
        // the low-water mark -> "limited"
        let branches = [BranchCapacity {
            branch: Branch::Naran,
            capacity: 50,
        }];
        let bookings = vec![
            make_booking(Branch::Naran, day(2), "7:00 PM", 10),
            make_booking(Branch::Naran, day(2), "7:00 PM", 20),
            make_booking(Branch::Naran, day(2), "7:00 PM", 15),
        ];
        let slots = compute_slots(
            &bookings,
            &branches,
            &labels(&["7:00 PM"]),
            day(2),
            1,
            LOW_WATER_MARK,
        );

        assert_eq!(slots[0].booked, 45);
        assert_eq!(slots[0].available, 5);
        assert_eq!(slots[0].status, SlotStatus::Limited);
    }

    #[test]
    fn available_never_goes_negative() {
        let branches = [BranchCapacity {
            branch: Branch::Besar,
            capacity: 10,
        }];
        let bookings = vec![make_booking(Branch::Besar, day(2), "7:00 PM", 30)];
        let slots = compute_slots(
            &bookings,
            &branches,
            &labels(&["7:00 PM"]),
            day(2),
            1,
            LOW_WATER_MARK,
        );

        assert_eq!(slots[0].booked, 30);
        assert_eq!(slots[0].available, 0);
        assert_eq!(slots[0].status, SlotStatus::Full);
    }

    #[test]
    fn oversized_stored_parties_saturate_instead_of_wrapping() {
        // Two maximal party sizes on the same slot must not wrap the
        // occupancy back towards zero and report the slot as open
        let branches = [BranchCapacity {
            branch: Branch::Naran,
            capacity: 50,
        }];
        let bookings = vec![
            make_booking(Branch::Naran, day(2), "7:00 PM", u32::MAX),
            make_booking(Branch::Naran, day(2), "7:00 PM", u32::MAX),
        ];
        let slots = compute_slots(
            &bookings,
            &branches,
            &labels(&["7:00 PM"]),
            day(2),
            1,
            LOW_WATER_MARK,
        );

        assert_eq!(slots[0].booked, u32::MAX);
        assert_eq!(slots[0].available, 0);
        assert_eq!(slots[0].status, SlotStatus::Full);
    }

    #[test]
    fn zero_capacity_is_immediately_full() {
        let branches = [BranchCapacity {
            branch: Branch::Naran,
            capacity: 0,
        }];
        let slots = compute_slots(&[], &branches, &labels(&["7:00 PM"]), day(2), 1, LOW_WATER_MARK);

        assert_eq!(slots[0].available, 0);
        assert_eq!(slots[0].status, SlotStatus::Full);
    }

    #[test]
    fn ordering_is_date_then_declared_label_then_branch() {
        // "11:00 AM" sorts after "1:00 PM" lexically; declared order
        // must win
        let branches = [
            BranchCapacity {
                branch: Branch::Naran,
                capacity: 50,
            },
            BranchCapacity {
                branch: Branch::Besar,
                capacity: 50,
            },
        ];
        let slots = compute_slots(
            &[],
            &branches,
            &labels(&["11:00 AM", "1:00 PM"]),
            day(2),
            2,
            LOW_WATER_MARK,
        );

        assert_eq!(slots.len(), 8);
        assert_eq!((slots[0].date, slots[0].time.as_str()), (day(2), "11:00 AM"));
        assert_eq!(slots[0].branch, Branch::Naran);
        assert_eq!(slots[1].branch, Branch::Besar);
        assert_eq!((slots[2].date, slots[2].time.as_str()), (day(2), "1:00 PM"));
        assert_eq!((slots[4].date, slots[4].time.as_str()), (day(3), "11:00 AM"));
    }

    #[test]
    fn booked_sum_is_conserved_across_time_labels() {
        // Sum of slot.booked over a branch+date equals the sum of
        // party sizes of that branch+date across all labels
        let branches = [BranchCapacity {
            branch: Branch::Naran,
            capacity: 50,
        }];
        let time_labels = labels(&["6:00 PM", "7:00 PM", "8:00 PM"]);
        let bookings = vec![
            make_booking(Branch::Naran, day(2), "6:00 PM", 4),
            make_booking(Branch::Naran, day(2), "7:00 PM", 6),
            make_booking(Branch::Naran, day(2), "7:00 PM", 2),
            make_booking(Branch::Naran, day(2), "8:00 PM", 8),
        ];
        let slots = compute_slots(&bookings, &branches, &time_labels, day(2), 1, LOW_WATER_MARK);

        let slot_total: u32 = slots.iter().map(|s| s.booked).sum();
        let booking_total: u32 = bookings.iter().map(|b| b.guests).sum();
        assert_eq!(slot_total, booking_total);
    }
}
