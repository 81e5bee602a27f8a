//! Property tests for overtime aggregation.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use proptest::prelude::*;

use overtime_engine::calculation::{
    AM_OFF_MINUTES, OvertimeAggregator, OvertimePolicy, aggregate,
};
use overtime_engine::models::{
    AttendanceRecord, LeaveUnitType, RecordFlow, ScheduledBreak, Stamp, WorkingDay,
};

fn now() -> DateTime<Utc> {
    DateTime::parse_from_rfc3339("2026-01-15T12:00:00Z")
        .unwrap()
        .with_timezone(&Utc)
}

fn day(offset: i64) -> NaiveDate {
    now().date_naive() + Duration::days(offset)
}

fn at(date: NaiveDate, hour: u32) -> DateTime<Utc> {
    date.and_hms_opt(hour, 0, 0).unwrap().and_utc()
}

fn completed(offset: i64, scheduled: i64, actual: i64) -> AttendanceRecord {
    let date = day(offset);
    AttendanceRecord {
        date,
        check_in_stamp: Some(Stamp::at(at(date, 0))),
        check_out_stamp: Some(Stamp::at(at(date, 9))),
        actual_working_minutes: actual,
        check_in_late_minutes: 0,
        check_out_early_minutes: 0,
        flows: vec![],
        working_day: Some(WorkingDay {
            working_minutes: scheduled,
            breaks: vec![],
        }),
    }
}

fn in_progress_today() -> AttendanceRecord {
    let date = day(0);
    AttendanceRecord {
        check_in_stamp: Some(Stamp::at(at(date, 2))),
        check_out_stamp: None,
        actual_working_minutes: 0,
        working_day: Some(WorkingDay {
            working_minutes: 480,
            breaks: vec![ScheduledBreak {
                start_time: at(date, 4),
                end_time: at(date, 5),
            }],
        }),
        ..completed(0, 480, 0)
    }
}

prop_compose! {
    fn past_record()(offset in -40i64..0, scheduled in 0i64..720, actual in 0i64..900) -> AttendanceRecord {
        completed(offset, scheduled, actual)
    }
}

proptest! {
    /// Working exactly the schedule every day leaves a zero balance
    #[test]
    fn exact_schedule_is_zero(days in prop::collection::vec((-40i64..0, 0i64..720), 0..30)) {
        let records: Vec<_> = days.iter().map(|&(o, s)| completed(o, s, s)).collect();
        prop_assert_eq!(aggregate(&records, now()), 0);
    }

    /// The balance is the sum of per-record differences, whatever the order
    #[test]
    fn order_does_not_matter(records in prop::collection::vec(past_record(), 0..30)) {
        let expected: i64 = records
            .iter()
            .map(|r| r.actual_working_minutes - r.working_day.as_ref().unwrap().working_minutes)
            .sum();

        let mut reversed = records.clone();
        reversed.reverse();

        prop_assert_eq!(aggregate(&records, now()), expected);
        prop_assert_eq!(aggregate(&reversed, now()), expected);
    }

    /// Records dated after today never change the balance
    #[test]
    fn future_records_are_ignored(
        records in prop::collection::vec(past_record(), 0..20),
        ahead in 1i64..60,
        actual in 0i64..900,
    ) {
        let before = aggregate(&records, now());

        let mut with_future = records.clone();
        with_future.push(completed(ahead, 480, actual));

        prop_assert_eq!(aggregate(&with_future, now()), before);
    }

    /// Past check-in plus breaks, every minute of `now` adds one minute
    #[test]
    fn in_progress_grows_minute_for_minute(first in 180i64..900, extra in 0i64..500) {
        let records = vec![in_progress_today()];
        let start = at(day(0), 0);

        let earlier = aggregate(&records, start + Duration::minutes(first));
        let later = aggregate(&records, start + Duration::minutes(first + extra));

        prop_assert_eq!(later - earlier, extra);
    }

    /// A completed morning-leave day is credited the morning off
    #[test]
    fn am_half_day_adds_morning_credit(offset in -40i64..0, actual in 0i64..600) {
        let plain = completed(offset, 480, actual);
        let mut with_leave = plain.clone();
        with_leave.flows = vec![RecordFlow::half_day(LeaveUnitType::Am)];

        prop_assert_eq!(
            aggregate(&[with_leave], now()) - aggregate(&[plain], now()),
            AM_OFF_MINUTES
        );
    }

    /// Checking in at the break end after a morning off counts the same
    /// minutes as a day whose break was never scheduled
    #[test]
    fn am_half_day_checked_in_at_break_end_skips_break(after in 0i64..1_000) {
        let date = day(0);
        let mut with_leave = in_progress_today();
        with_leave.check_in_stamp = Some(Stamp::at(at(date, 5)));
        with_leave.flows = vec![RecordFlow::half_day(LeaveUnitType::Am)];

        let mut without_break = with_leave.clone();
        without_break.flows = vec![];
        if let Some(working_day) = without_break.working_day.as_mut() {
            working_day.breaks = vec![];
        }

        let aggregator = OvertimeAggregator::default();
        let evaluated = at(date, 5) + Duration::minutes(after);

        prop_assert_eq!(
            aggregator.contribution(&with_leave, evaluated).actual_minutes,
            aggregator.contribution(&without_break, evaluated).actual_minutes
        );
    }

    /// The floor policy never yields a negative balance and otherwise agrees
    #[test]
    fn floor_policy_clamps(records in prop::collection::vec(past_record(), 0..20)) {
        let floored = OvertimeAggregator::new(OvertimePolicy {
            floor_at_zero: true,
            ..OvertimePolicy::default()
        });
        let raw = aggregate(&records, now());

        prop_assert_eq!(floored.aggregate(&records, now()), raw.max(0));
    }
}
