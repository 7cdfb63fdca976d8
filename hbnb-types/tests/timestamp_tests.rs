use chrono::{NaiveDate, NaiveDateTime};
use hbnb_types::Timestamp;
use proptest::prelude::*;

fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32, micro: u32) -> Timestamp {
    let dt: NaiveDateTime = NaiveDate::from_ymd_opt(y, mo, d)
        .unwrap()
        .and_hms_micro_opt(h, mi, s, micro)
        .unwrap();
    Timestamp::from_naive(dt)
}

// ── Construction ─────────────────────────────────────────────────

#[test]
fn now_has_microsecond_precision() {
    let ts = Timestamp::now();
    assert_eq!(ts.as_naive().and_utc().timestamp_subsec_nanos() % 1_000, 0);
}

#[test]
fn from_naive_truncates_nanoseconds() {
    let dt = NaiveDate::from_ymd_opt(2024, 1, 2)
        .unwrap()
        .and_hms_nano_opt(3, 4, 5, 123_456_789)
        .unwrap();
    let ts = Timestamp::from_naive(dt);
    assert_eq!(ts.microsecond(), 123_456);
    assert_eq!(ts.to_iso_string(), "2024-01-02T03:04:05.123456");
}

// ── ISO-8601 rendering ───────────────────────────────────────────

#[test]
fn renders_six_fraction_digits() {
    let ts = at(2050, 12, 30, 23, 59, 59, 123_456);
    assert_eq!(ts.to_iso_string(), "2050-12-30T23:59:59.123456");
}

#[test]
fn renders_leading_zero_fraction_digits() {
    let ts = at(2024, 3, 1, 0, 0, 1, 42);
    assert_eq!(ts.to_iso_string(), "2024-03-01T00:00:01.000042");
}

#[test]
fn omits_zero_fraction() {
    let ts = at(2024, 3, 1, 8, 15, 0, 0);
    assert_eq!(ts.to_iso_string(), "2024-03-01T08:15:00");
}

#[test]
fn display_matches_iso_string() {
    let ts = at(2024, 3, 1, 8, 15, 0, 7);
    assert_eq!(ts.to_string(), ts.to_iso_string());
}

#[test]
fn debug_is_native_form() {
    let ts = at(2024, 3, 1, 8, 15, 0, 7);
    assert_eq!(format!("{ts:?}"), "Timestamp(2024-03-01T08:15:00.000007)");
}

// ── Parsing ──────────────────────────────────────────────────────

#[test]
fn parse_with_fraction() {
    let ts = Timestamp::parse("2017-09-28T21:05:54.119427").unwrap();
    assert_eq!(ts, at(2017, 9, 28, 21, 5, 54, 119_427));
}

#[test]
fn parse_without_fraction() {
    let ts = Timestamp::parse("2017-09-28T21:05:54").unwrap();
    assert_eq!(ts, at(2017, 9, 28, 21, 5, 54, 0));
}

#[test]
fn parse_via_from_str() {
    let ts: Timestamp = "2017-09-28T21:05:54.000001".parse().unwrap();
    assert_eq!(ts.microsecond(), 1);
}

#[test]
fn parse_rejects_garbage() {
    assert!(Timestamp::parse("yesterday").is_err());
    assert!(Timestamp::parse("").is_err());
    assert!(Timestamp::parse("2017-13-28T21:05:54").is_err());
}

#[test]
fn parse_error_names_input() {
    let err = Timestamp::parse("nope").unwrap_err();
    assert!(err.to_string().contains("nope"));
}

// ── Ordering & ticking ───────────────────────────────────────────

#[test]
fn ordering_follows_time() {
    let a = at(2024, 1, 1, 0, 0, 0, 1);
    let b = at(2024, 1, 1, 0, 0, 0, 2);
    assert!(a.is_before(&b));
    assert!(b.is_after(&a));
    assert!(a < b);
}

#[test]
fn tick_is_strictly_increasing() {
    let mut ts = Timestamp::now();
    for _ in 0..1000 {
        let next = ts.tick();
        assert!(next > ts);
        ts = next;
    }
}

#[test]
fn tick_from_future_advances_by_one_microsecond() {
    let future = at(2999, 1, 1, 0, 0, 0, 0);
    let next = future.tick();
    assert_eq!(next.to_iso_string(), "2999-01-01T00:00:00.000001");
}

#[test]
fn tick_from_past_jumps_to_now() {
    let past = at(2000, 1, 1, 0, 0, 0, 0);
    let before = Timestamp::now();
    let next = past.tick();
    assert!(next >= before);
}

#[test]
fn subtraction_yields_delta() {
    let a = at(2024, 1, 1, 0, 0, 0, 0);
    let b = at(2024, 1, 1, 0, 0, 1, 500_000);
    assert_eq!((b - a).num_milliseconds(), 1_500);
}

// ── Serde ────────────────────────────────────────────────────────

#[test]
fn serializes_as_iso_string() {
    let ts = at(2024, 3, 1, 8, 15, 0, 7);
    let json = serde_json::to_string(&ts).unwrap();
    assert_eq!(json, "\"2024-03-01T08:15:00.000007\"");
    let back: Timestamp = serde_json::from_str(&json).unwrap();
    assert_eq!(back, ts);
}

#[test]
fn deserialize_rejects_malformed() {
    let result: Result<Timestamp, _> = serde_json::from_str("\"not a date\"");
    assert!(result.is_err());
}

proptest! {
    /// Rendering then parsing reproduces the exact same string.
    #[test]
    fn iso_string_roundtrips_exactly(
        secs in 0i64..4_102_444_800,
        micros in 0u32..1_000_000,
    ) {
        let dt = chrono::DateTime::from_timestamp(secs, micros * 1_000).unwrap().naive_utc();
        let ts = Timestamp::from_naive(dt);
        let s = ts.to_iso_string();
        let parsed = Timestamp::parse(&s).unwrap();
        prop_assert_eq!(parsed, ts);
        prop_assert_eq!(parsed.to_iso_string(), s);
    }
}
