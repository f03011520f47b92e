//! Property-based tests for the classification and pay calculation.
//!
//! These pin the algebraic guarantees the engine makes: classification is
//! total, pay is zero at or below zero hours, pay is monotone in hours,
//! and the compensatory-workday rate never follows configuration.

use proptest::prelude::*;
use rust_decimal::Decimal;

use overtime_engine::calculation::calculate;
use overtime_engine::calendar::CalendarResolver;
use overtime_engine::config::OvertimePayConfig;
use overtime_engine::models::DayType;

fn any_day_type() -> impl Strategy<Value = DayType> {
    prop_oneof![
        Just(DayType::Workday),
        Just(DayType::RestDay),
        Just(DayType::Holiday),
        Just(DayType::CompensatoryWorkday),
        Just(DayType::Unknown),
    ]
}

/// Hours with up to one decimal place, spanning negative to positive.
fn any_hours() -> impl Strategy<Value = Decimal> {
    (-240i64..=240i64).prop_map(|tenths| Decimal::new(tenths, 1))
}

fn any_pay_config() -> impl Strategy<Value = OvertimePayConfig> {
    (1u32..=1000, 0u32..=50, 0u32..=50, 0u32..=50).prop_map(
        |(wage, weekday, weekend, holiday)| OvertimePayConfig {
            enabled: true,
            hourly_wage: Decimal::new(wage as i64, 0),
            weekday_rate: Decimal::new(weekday as i64, 1),
            weekend_rate: Decimal::new(weekend as i64, 1),
            holiday_rate: Decimal::new(holiday as i64, 1),
            deduct_types: vec!["事假".to_string()],
        },
    )
}

proptest! {
    /// Every syntactically arbitrary input classifies to one of the five
    /// canonical values without panicking.
    #[test]
    fn classify_is_total_over_arbitrary_strings(input in "\\PC{0,32}") {
        let resolver = CalendarResolver::with_builtin();
        let (day_type, reason) = resolver.classify(&input);
        prop_assert!(matches!(
            day_type,
            DayType::Workday
                | DayType::RestDay
                | DayType::Holiday
                | DayType::CompensatoryWorkday
                | DayType::Unknown
        ));
        prop_assert!(!reason.is_empty());
    }

    /// Every valid date classifies to a non-Unknown day type.
    #[test]
    fn classify_valid_dates_never_unknown(
        year in 2000i32..=2100,
        month in 1u32..=12,
        day in 1u32..=28,
    ) {
        let resolver = CalendarResolver::with_builtin();
        let input = format!("{:04}-{:02}-{:02}", year, month, day);
        let (day_type, _) = resolver.classify(&input);
        prop_assert_ne!(day_type, DayType::Unknown);
    }

    /// Zero or negative hours never produce pay.
    #[test]
    fn no_pay_at_or_below_zero_hours(
        day_type in any_day_type(),
        pay in any_pay_config(),
        tenths in -240i64..=0,
    ) {
        let hours = Decimal::new(tenths, 1);
        prop_assert_eq!(calculate(hours, day_type, &pay), Decimal::ZERO);
    }

    /// Pay is monotonically non-decreasing in hours for fixed day type and
    /// rates.
    #[test]
    fn pay_is_monotone_in_hours(
        day_type in any_day_type(),
        pay in any_pay_config(),
        a in 0i64..=240,
        b in 0i64..=240,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let low = calculate(Decimal::new(lo, 1), day_type, &pay);
        let high = calculate(Decimal::new(hi, 1), day_type, &pay);
        prop_assert!(low <= high);
    }

    /// The compensatory-workday rate is 1.5 whatever the configured rates
    /// say.
    #[test]
    fn compensatory_rate_is_fixed(
        pay in any_pay_config(),
        tenths in 1i64..=240,
    ) {
        let hours = Decimal::new(tenths, 1);
        let amount = calculate(hours, DayType::CompensatoryWorkday, &pay);
        let expected = (pay.hourly_wage * hours * Decimal::new(15, 1)).round_dp(2);
        prop_assert_eq!(amount, expected);
    }

    /// Pay never comes out negative.
    #[test]
    fn pay_is_never_negative(
        day_type in any_day_type(),
        pay in any_pay_config(),
        hours in any_hours(),
    ) {
        prop_assert!(calculate(hours, day_type, &pay) >= Decimal::ZERO);
    }
}
