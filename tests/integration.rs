use almanac::{
    converter, CalendarDate, CalendarError, DayCount, Gregorian, Hebrew, Islamic, Julian, Persian,
};
use chrono::NaiveDate;
use qtty::Days;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn rng() -> StdRng {
    StdRng::seed_from_u64(0)
}

/// `from_day_count → to_day_count → from_day_count` must be the identity
/// on the date, and `to_day_count` must land on the civil midnight.
fn assert_round_trip<C: CalendarDate>(samples: usize, min: f64, max: f64) {
    let mut rng = rng();
    for _ in 0..samples {
        let jd = DayCount::new(rng.random_range(min..max));
        let a = C::from_day_count(jd);
        assert!(a.month() >= 1 && a.month() <= a.months_in_year(), "{a:?}");
        assert!(a.day() >= 1 && a.day() <= a.days_in_month(), "{a:?}");

        let back = a.to_day_count();
        assert_eq!(back, jd.at_midnight(), "{} {a:?}", C::NAME);
        assert_eq!(C::from_day_count(back), a, "{} {a:?}", C::NAME);
    }
}

fn assert_round_trip_around_epoch<C: CalendarDate>() {
    let epoch = C::EPOCH.value();
    // Five centuries before the epoch to the present era and beyond.
    assert_round_trip::<C>(1_500, epoch - 182_500.0, 2_500_000.0);
}

#[test]
fn gregorian_round_trip() {
    assert_round_trip_around_epoch::<Gregorian>();
}

#[test]
fn julian_round_trip() {
    assert_round_trip_around_epoch::<Julian>();
}

#[test]
fn islamic_round_trip() {
    assert_round_trip_around_epoch::<Islamic>();
}

#[test]
fn persian_round_trip() {
    assert_round_trip_around_epoch::<Persian>();
}

#[test]
fn hebrew_round_trip() {
    assert_round_trip::<Hebrew>(1_500, Hebrew::EPOCH.value(), 2_500_000.0);
}

/// Any real, however far out, converts to a well-formed date.
fn assert_extremes_are_well_formed<C: CalendarDate>() {
    let values = [
        1e13,
        -1e13,
        1e18,
        -1e18,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NAN,
        f64::MAX,
        f64::MIN,
    ];
    for value in values {
        let date = C::from_day_count(DayCount::new(value));
        let label = format!("{} {value} {date:?}", C::NAME);
        assert!(
            date.month() >= 1 && date.month() <= date.months_in_year(),
            "{label}"
        );
        assert!(date.day() >= 1 && date.day() <= date.days_in_month(), "{label}");
        assert!(date.month_name().is_ok());
    }

    // Saturated day counts still round trip at the edge of the range.
    for index in [DayCount::MIN_DAY_INDEX, DayCount::MAX_DAY_INDEX] {
        let jd = DayCount::from_day_index(index);
        assert_eq!(C::from_day_count(jd).to_day_count(), jd, "{} {index}", C::NAME);
    }
    assert_eq!(
        C::from_day_count(DayCount::new(1e18)),
        C::from_day_count(DayCount::from_day_index(DayCount::MAX_DAY_INDEX))
    );
}

#[test]
fn extreme_day_counts_give_well_formed_dates() {
    assert_extremes_are_well_formed::<Gregorian>();
    assert_extremes_are_well_formed::<Julian>();
    assert_extremes_are_well_formed::<Islamic>();
    assert_extremes_are_well_formed::<Persian>();
    assert_extremes_are_well_formed::<Hebrew>();
}

/// `next_day` must agree with stepping the day count and reconverting.
fn assert_sequential<C: CalendarDate>(start: C, days: usize) {
    let mut date = start;
    let mut jd = date.to_day_count().at_midnight();
    for _ in 0..days {
        date.next_day();
        jd.advance_one_day();
        assert_eq!(date.to_day_count(), jd, "{} {date:?}", C::NAME);
        assert_eq!(C::from_day_count(jd), date);
    }
}

#[test]
fn next_day_matches_day_count_for_every_calendar() {
    assert_sequential(Gregorian::new(2023, 6, 1), 366);
    assert_sequential(Julian::new(1899, 6, 1), 366);
    assert_sequential(Islamic::new(1444, 6, 1), 366);
    assert_sequential(Persian::new(1403, 6, 1), 366);
    // 5784 is a leap year; 5785 is not.
    assert_sequential(Hebrew::new(5776, 1, 1), 365);
    assert_sequential(Hebrew::new(5784, 1, 1), 400);
}

#[test]
fn hebrew_month_table_5747() {
    let lengths: Vec<u8> = (1..=12).map(|m| Hebrew::days_in_month_of(5747, m)).collect();
    assert_eq!(lengths, vec![30, 29, 30, 29, 30, 29, 30, 30, 30, 29, 30, 29]);
}

#[test]
fn islamic_month_table() {
    // 1 AH is a common year.
    for month in 1..=12u8 {
        let expected = if month % 2 == 1 { 30 } else { 29 };
        assert_eq!(Islamic::days_in_month_of(1, month), expected);
        assert_eq!(converter::islamic::days_in_month_common(month), expected);
    }
    assert_eq!(Islamic::days_in_month_of(2, 12), 30);
}

#[test]
fn persian_month_table() {
    for year in 1390..1410 {
        let date = Persian::new(year, 1, 1);
        for month in 1..=6 {
            assert_eq!(Persian::days_in_month_of(year, month), 31);
        }
        for month in 7..=11 {
            assert_eq!(Persian::days_in_month_of(year, month), 30);
        }
        let esfand = if date.is_leap_year() { 30 } else { 29 };
        assert_eq!(Persian::days_in_month_of(year, 12), esfand);
    }
}

#[test]
fn persian_leap_year_is_year_length() {
    for year in 1..2000 {
        let this = Persian::new(year, 1, 1).to_day_count();
        let next = Persian::new(year + 1, 1, 1).to_day_count();
        assert_eq!(
            converter::persian::is_leap_year(year),
            next - this > Days::new(365.0),
            "year {year}"
        );
    }
}

#[test]
fn month_zero_is_invalid_for_every_calendar() {
    assert!(matches!(
        Gregorian::month_name_of(0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        Julian::month_name_of(0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        Islamic::month_name_of(0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        Persian::month_name_of(0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(matches!(
        Hebrew::month_name_of(0),
        Err(CalendarError::InvalidMonth { month: 0, .. })
    ));
    assert!(Hebrew::new(5747, 0, 1).month_name().is_err());
}

#[test]
fn civil_datetime_constructs_equal_hebrew_date() {
    let dt = NaiveDate::from_ymd_opt(1987, 3, 10)
        .unwrap()
        .and_hms_opt(0, 1, 0)
        .unwrap();
    let from_clock = Hebrew::from_naive(dt);
    let explicit = Hebrew::new(5747, 12, 9);
    assert_eq!(from_clock, explicit);
    assert_eq!(Hebrew::from_utc(dt.and_utc()), explicit);
    assert_eq!(converter::convert::<Gregorian, Hebrew>(&Gregorian::new(1987, 3, 10)), explicit);
}

#[test]
fn weekday_is_independent_of_calendar() {
    let mut rng = rng();
    for _ in 0..500 {
        let jd = DayCount::new(rng.random_range(400_000.0..2_500_000.0));
        let expected = jd.weekday_index();
        assert_eq!(Gregorian::from_day_count(jd).weekday_index(), expected);
        assert_eq!(Julian::from_day_count(jd).weekday_index(), expected);
        assert_eq!(Islamic::from_day_count(jd).weekday_index(), expected);
        assert_eq!(Persian::from_day_count(jd).weekday_index(), expected);
        assert_eq!(Hebrew::from_day_count(jd).weekday_index(), expected);
    }
}

#[test]
fn conversions_route_through_day_count() {
    let gregorian = Gregorian::new(2024, 10, 3);
    let hebrew: Hebrew = gregorian.to();
    assert_eq!(hebrew, Hebrew::new(5785, 7, 1));
    let persian: Persian = hebrew.to();
    let islamic: Islamic = persian.to();
    let julian: Julian = islamic.to();
    assert_eq!(julian, Julian::new(2024, 9, 20));
    assert_eq!(julian.to::<Gregorian>(), gregorian);
}

#[test]
fn today_is_consistent_across_calendars() {
    let today = Gregorian::today();
    let now = DayCount::now().at_midnight();
    // Allow for the clock crossing midnight between the two reads.
    let delta = (today.to_day_count() - now).value().abs();
    assert!(delta <= 1.0, "delta = {delta}");
}

#[cfg(feature = "serde")]
#[test]
fn serde_shapes() {
    let json = serde_json::to_string(&Hebrew::new(5747, 12, 9)).unwrap();
    assert_eq!(json, r#"{"year":5747,"month":12,"day":9}"#);
    let back: Hebrew = serde_json::from_str(&json).unwrap();
    assert_eq!(back, Hebrew::new(5747, 12, 9));

    let jd = serde_json::to_string(&DayCount::new(2_451_544.5)).unwrap();
    assert_eq!(jd, "2451544.5");
}
