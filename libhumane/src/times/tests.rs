use super::*;
use chrono::{Duration, TimeZone};

fn reference() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 12, 0, 0).unwrap()
}

fn ago(seconds: i64) -> String {
    let now = reference();
    rel_time(now - Duration::seconds(seconds), now, "ago", "from now")
}

fn ahead(seconds: i64) -> String {
    let now = reference();
    rel_time(now + Duration::seconds(seconds), now, "ago", "from now")
}

#[test]
fn test_unit_constants() {
    assert_eq!(MINUTE, 60);
    assert_eq!(HOUR, 3600);
    assert_eq!(DAY, 86400);
    assert_eq!(WEEK, 604800);
    assert_eq!(MONTH, 2592000);
    assert_eq!(YEAR, 31104000);
    assert_eq!(LONG_TIME, 1150848000);
}

#[test]
fn test_table_thresholds() {
    let thresholds: Vec<i64> = MAGNITUDES.iter().map(|m| m.threshold).collect();
    assert_eq!(
        thresholds,
        vec![
            1,
            2,
            60,
            120,
            3600,
            7200,
            86400,
            172800,
            604800,
            1209600,
            2592000,
            5184000,
            31104000,
            46656000,
            62208000,
            1150848000,
            i64::MAX,
        ]
    );
}

#[test]
fn test_table_strictly_ascending() {
    for pair in MAGNITUDES.windows(2) {
        assert!(pair[0].threshold < pair[1].threshold);
    }
}

#[test]
fn test_table_divisors() {
    let divisors: Vec<i64> = MAGNITUDES.iter().map(|m| m.divisor).collect();
    assert_eq!(
        divisors,
        vec![
            1, 1, 1, 1, MINUTE, 1, HOUR, 1, DAY, 1, WEEK, 1, MONTH, 1, 1, YEAR, 1
        ]
    );
}

#[test]
fn test_table_templates_parse_back() {
    let sources: Vec<String> = MAGNITUDES.iter().map(|m| m.template.to_string()).collect();
    assert_eq!(
        sources,
        vec![
            "now", "1s %s", "%ds %s", "1m %s", "%dm %s", "1h %s", "%dh %s", "1d %s", "%dd %s",
            "1w %s", "%dw %s", "1m %s", "%dm %s", "1y %s", "2y %s", "%dy %s", "~",
        ]
    );

    for (magnitude, source) in MAGNITUDES.iter().zip(&sources) {
        assert_eq!(Template::parse(source).unwrap(), magnitude.template);
    }
}

#[test]
fn test_scaled_templates_have_divisor_and_fixed_ones_do_not_need_it() {
    for magnitude in &MAGNITUDES {
        assert!(magnitude.divisor >= 1);
        if !magnitude.template.uses_scaled() {
            assert_eq!(magnitude.divisor, 1);
        }
    }
}

#[test]
fn test_magnitude_for_boundaries() {
    for (i, magnitude) in MAGNITUDES.iter().enumerate().skip(1) {
        let lower = MAGNITUDES[i - 1].threshold;
        assert_eq!(magnitude_for(lower), magnitude, "delta {}", lower);
        assert_eq!(magnitude_for(lower - 1), &MAGNITUDES[i - 1], "delta {}", lower - 1);
    }
}

#[test]
fn test_magnitude_for_is_total() {
    assert_eq!(magnitude_for(0).threshold, 1);
    assert_eq!(magnitude_for(-5).threshold, 1);
    assert_eq!(magnitude_for(i64::MAX - 1).threshold, i64::MAX);
    assert_eq!(magnitude_for(i64::MAX).threshold, i64::MAX);
}

#[test]
fn test_magnitude_for_same_bucket_within_interval() {
    for pair in MAGNITUDES.windows(2).take(15) {
        let (lo, hi) = (pair[0].threshold, pair[1].threshold);
        let mid = lo + (hi - lo) / 2;
        assert_eq!(magnitude_for(lo), magnitude_for(mid));
        assert_eq!(magnitude_for(mid), magnitude_for(hi - 1));
    }
}

#[test]
fn test_rel_time_past_phrases() {
    assert_eq!(ago(0), "now");
    assert_eq!(ago(1), "1s ago");
    assert_eq!(ago(45), "45s ago");
    assert_eq!(ago(59), "59s ago");
    assert_eq!(ago(60), "1m ago");
    assert_eq!(ago(90), "1m ago");
    assert_eq!(ago(119), "1m ago");
    assert_eq!(ago(120), "2m ago");
    assert_eq!(ago(59 * MINUTE + 59), "59m ago");
    assert_eq!(ago(HOUR), "1h ago");
    assert_eq!(ago(5 * HOUR + 30 * MINUTE), "5h ago");
    assert_eq!(ago(DAY), "1d ago");
    assert_eq!(ago(3 * DAY), "3d ago");
    assert_eq!(ago(WEEK), "1w ago");
    assert_eq!(ago(3 * WEEK), "3w ago");
    assert_eq!(ago(MONTH), "1m ago");
    assert_eq!(ago(5 * MONTH), "5m ago");
    assert_eq!(ago(YEAR), "1y ago");
    assert_eq!(ago(18 * MONTH), "2y ago");
    assert_eq!(ago(2 * YEAR), "2y ago");
    assert_eq!(ago(10 * YEAR), "10y ago");
    assert_eq!(ago(LONG_TIME), "~");
}

#[test]
fn test_long_time_is_thirty_seven_years() {
    assert_eq!(LONG_TIME, 37 * YEAR);
    assert_eq!(ago(LONG_TIME - 1), "36y ago");
    // Past 37 * YEAR but below 1,151,280,000
    assert_eq!(ago(1_151_000_000), "~");
    assert_eq!(ahead(1_151_000_000), "~");
}

#[test]
fn test_rel_time_future_phrases() {
    assert_eq!(ahead(1), "1s from now");
    assert_eq!(ahead(45), "45s from now");
    assert_eq!(ahead(2 * HOUR), "2h from now");
    assert_eq!(ahead(WEEK + DAY), "1w from now");
    assert_eq!(ahead(40 * YEAR), "~");
}

#[test]
fn test_rel_time_direction() {
    let earlier = reference() - Duration::hours(3);
    let later = reference();

    assert_eq!(rel_time(earlier, later, "before", "after"), "3h before");
    assert_eq!(rel_time(later, earlier, "before", "after"), "3h after");
}

#[test]
fn test_relative_result_fields() {
    let now = reference();
    let result = relative(&(now - Duration::seconds(90)), &now, "ago", "from now");

    assert_eq!(result.direction, Direction::Past);
    assert_eq!(result.label, "ago");
    assert_eq!(result.delta, 90);
    assert_eq!(result.scaled, 90);
    assert_eq!(result.magnitude.threshold, 2 * MINUTE);
    assert_eq!(result.to_string(), "1m ago");

    let result = relative(&(now + Duration::minutes(150)), &now, "ago", "from now");
    assert_eq!(result.direction, Direction::Future);
    assert_eq!(result.delta, 9000);
    assert_eq!(result.scaled, 2);
    assert_eq!(result.to_string(), "2h from now");
}

#[test]
fn test_identical_instants_are_past_now() {
    let now = reference();
    let result = relative(&now, &now, "ago", "from now");

    assert_eq!(result.direction, Direction::Past);
    assert_eq!(result.delta, 0);
    assert_eq!(result.to_string(), "now");
}

#[test]
fn test_sub_second_future_is_now() {
    let now = reference();
    let result = relative(&(now + Duration::milliseconds(400)), &now, "ago", "from now");

    assert_eq!(result.direction, Direction::Future);
    assert_eq!(result.delta, 0);
    assert_eq!(result.to_string(), "now");
}

#[test]
fn test_delta_uses_whole_second_timestamps() {
    let base = reference();
    let a = base + Duration::milliseconds(900);
    let b = base + Duration::milliseconds(2100);

    let result = relative(&a, &b, "ago", "from now");
    assert_eq!(result.delta, 2);
    assert_eq!(result.to_string(), "2s ago");
}

#[test]
fn test_magnitude_render() {
    let magnitude = magnitude_for(3 * DAY + 5);
    assert_eq!(magnitude.render(3 * DAY + 5, "back"), "3d back");
}

#[test]
fn test_age_with_fixed_clock() {
    let clock = FixedClock(reference());

    assert_eq!(age_with(&clock, reference() - Duration::seconds(45)), "45s ago");
    assert_eq!(age_with(&clock, reference() + Duration::days(2)), "2d from now");
    assert_eq!(age_with(&clock, reference()), "now");
}

#[test]
fn test_age_with_trait_object() {
    let clock: Box<dyn Clock> = Box::new(FixedClock(reference()));
    assert_eq!(age_with(clock.as_ref(), reference() - Duration::weeks(2)), "2w ago");
}

#[test]
fn test_age_uses_system_clock() {
    let then = Utc::now() - Duration::days(10);
    assert_eq!(age(then), "1w ago");
}

#[test]
fn test_system_clock_is_current() {
    let before = Utc::now();
    let now = SystemClock.now();
    assert!(now >= before);
}

#[test]
fn test_direction_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Direction::Past).unwrap(), "\"past\"");
    assert_eq!(serde_json::to_string(&Direction::Future).unwrap(), "\"future\"");
}

#[test]
fn test_magnitudes_shared_across_threads() {
    let handles: Vec<_> = (0..4)
        .map(|i| {
            std::thread::spawn(move || {
                let now = reference();
                rel_time(now - Duration::hours(i + 1), now, "ago", "from now")
            })
        })
        .collect();

    let phrases: Vec<String> = handles.into_iter().map(|h| h.join().unwrap()).collect();
    assert_eq!(phrases, vec!["1h ago", "2h ago", "3h ago", "4h ago"]);
}
