//! Unit tests for the period formatting service.

use super::*;
use chrono::NaiveDate;

fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).unwrap()
}

#[test]
fn test_preferred_format_by_span() {
    let svc = PeriodService::new();
    assert_eq!(
        svc.preferred_format(d(2021, 1, 1), d(2021, 1, 15)),
        PeriodFormat::Day
    );
    assert_eq!(
        svc.preferred_format(d(2021, 1, 1), d(2021, 12, 31)),
        PeriodFormat::Month
    );
    assert_eq!(
        svc.preferred_format(d(2020, 1, 1), d(2023, 1, 1)),
        PeriodFormat::Year
    );
}

#[test]
fn test_month_and_day_label_is_zero_padded() {
    let svc = PeriodService::new();
    assert_eq!(svc.month_and_day(d(2021, 1, 1)), "Jan 01");
    assert_eq!(svc.month_and_day(d(2021, 12, 25)), "Dec 25");
}

#[test]
fn test_period_key_per_granularity() {
    let svc = PeriodService::new();
    let date = d(2021, 3, 10);
    assert_eq!(svc.period_key(date, PeriodFormat::Day), "2021-03-10");
    assert_eq!(svc.period_key(date, PeriodFormat::Month), "2021-03");
    assert_eq!(svc.period_key(date, PeriodFormat::Year), "2021");
}

#[test]
fn test_period_title_per_granularity() {
    let svc = PeriodService::new();
    let date = d(2021, 3, 10);
    assert_eq!(svc.period_title(date, PeriodFormat::Day), "Mar 10");
    assert_eq!(svc.period_title(date, PeriodFormat::Month), "March 2021");
    assert_eq!(svc.period_title(date, PeriodFormat::Year), "2021");
}

#[test]
fn test_add_period_month_clamps_to_valid_day() {
    let svc = PeriodService::new();
    assert_eq!(svc.add_period(d(2021, 1, 31), PeriodFormat::Month), d(2021, 2, 28));
    assert_eq!(svc.add_period(d(2021, 3, 10), PeriodFormat::Month), d(2021, 4, 10));
    assert_eq!(svc.add_period(d(2021, 3, 10), PeriodFormat::Day), d(2021, 3, 11));
    assert_eq!(svc.add_period(d(2021, 3, 10), PeriodFormat::Year), d(2022, 3, 10));
}

#[test]
fn test_end_of_period() {
    let svc = PeriodService::new();
    assert_eq!(svc.end_of_period(d(2021, 2, 10), PeriodFormat::Month), d(2021, 2, 28));
    assert_eq!(svc.end_of_period(d(2024, 2, 10), PeriodFormat::Month), d(2024, 2, 29));
    assert_eq!(svc.end_of_period(d(2021, 2, 10), PeriodFormat::Day), d(2021, 2, 10));
    assert_eq!(svc.end_of_period(d(2021, 2, 10), PeriodFormat::Year), d(2021, 12, 31));
}
