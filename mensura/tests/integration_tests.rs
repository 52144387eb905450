//! Integration-level smoke tests for the `mensura` facade crate.

use mensura::*;

use approx::{assert_abs_diff_eq, assert_relative_eq};
use proptest::prelude::*;

#[test]
fn smoke_test_length() {
    let km = Kilometers::new(1.0);
    let m: Meters = km.to();
    assert_abs_diff_eq!(m.value(), 1000.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_duration() {
    let day = Days::new(1.0);
    let sec: Seconds = day.to();
    assert_abs_diff_eq!(sec.value(), 86_400.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_angle() {
    let deg = Degrees::new(180.0);
    let rad: Radians = deg.to();
    assert_abs_diff_eq!(rad.value(), std::f64::consts::PI, epsilon = 1e-12);
}

#[test]
fn smoke_test_mass() {
    let kg = Kilograms::new(1.5);
    let g: Grams = kg.to();
    assert_abs_diff_eq!(g.value(), 1500.0, epsilon = 1e-9);
}

#[test]
fn smoke_test_temperature_point() {
    let freezing: Abs<Celsius> = Abs::new(0.0);
    let k = freezing.to::<Kelvin>();
    assert_abs_diff_eq!(k.value(), 273.15, epsilon = 1e-12);
}

#[test]
fn conversion_round_trip() {
    let original = Miles::new(26.2);
    let back = original.to::<Kilometer>().to::<Mile>();
    assert_relative_eq!(back.value(), 26.2, max_relative = 1e-12);
}

#[test]
fn same_unit_conversion_is_identity() {
    let d = Meters::new(0.1 + 0.2); // not exactly representable
    assert_eq!(d.to::<Meter>().value(), d.value());
}

#[test]
fn addition_is_commutative_in_reference_units() {
    let a = Meters::new(3.0);
    let b = Meters::new(4.0);
    assert_eq!((a + b).value(), (b + a).value());
}

#[test]
fn newton_second_law() {
    // F = m a: 2 kg * 3 m/s^2 = 6 N.
    let f: Newtons = Kilograms::new(2.0) * MetersPerSecondSquared::new(3.0);
    assert_abs_diff_eq!(f.value(), 6.0, epsilon = 1e-12);
}

#[test]
fn work_from_force_and_distance() {
    let w: Joules = Newtons::new(10.0) * Meters::new(2.0);
    assert_eq!(w.value(), 20.0);
}

#[test]
fn commute_through_mixed_units() {
    // 1 km * 10 N and 10 N * 1 km must agree after normalization.
    let w1: Joules = Kilometers::new(1.0) * Newtons::new(10.0);
    let w2: Joules = Newtons::new(10.0) * Kilometers::new(1.0);
    assert_eq!(w1.value(), w2.value());
    assert_eq!(w1.value(), 10_000.0);
}

#[test]
fn trip_average_speed() {
    let v: MetersPerSecond = Kilometers::new(180.0) / Hours::new(2.0);
    assert_abs_diff_eq!(v.value(), 25.0, epsilon = 1e-12);
}

#[test]
fn same_kind_division_is_a_ratio() {
    let r: dimensionless::Ratio = Kilometers::new(1.0) / Meters::new(250.0);
    assert_eq!(r.value(), 4.0);
}

#[test]
fn division_by_zero_gives_infinity() {
    let v: MetersPerSecond = Meters::new(1.0) / Seconds::new(0.0);
    assert!(v.value().is_infinite());
    assert!(v.value() > 0.0);
}

#[test]
fn affine_temperature_arithmetic() {
    let morning: Abs<Celsius> = Abs::new(10.0);
    let noon: Abs<Celsius> = Abs::new(24.0);

    // point - point = difference
    let rise: CelsiusDegrees = noon - morning;
    assert_abs_diff_eq!(rise.value(), 14.0, epsilon = 1e-12);

    // point + difference = point
    assert_abs_diff_eq!((morning + rise).value(), noon.value(), epsilon = 1e-12);
}

#[test]
fn fahrenheit_delta_is_scaled_not_shifted() {
    // A 9 °F difference is a 5 K difference.
    let d = FahrenheitDegrees::new(9.0);
    assert_abs_diff_eq!(d.to::<Kelvin>().value(), 5.0, epsilon = 1e-12);
}

#[test]
fn position_offset_round_trip() {
    let here: length::Position = Abs::new(100.0);
    let step = Meters::new(-2.5);
    let there = here + step;
    let back: Meters = here.delta(there);
    assert_abs_diff_eq!(back.value(), 2.5, epsilon = 1e-12);
}

#[test]
fn interpolation_hits_boundaries() {
    let lo = Meters::new(10.0);
    let hi = Meters::new(20.0);
    assert_eq!(Scalar::interpolate(lo, hi, 0.0).value(), 10.0);
    assert_eq!(Scalar::interpolate(lo, hi, 1.0).value(), 20.0);
    assert_eq!(Scalar::interpolate(lo, hi, 0.5).value(), 15.0);
    // No clamping: extrapolation is allowed.
    assert_eq!(Scalar::interpolate(lo, hi, 2.0).value(), 30.0);
}

#[test]
fn comparisons_cross_units() {
    assert!(Kilometers::new(1.0).eq(Meters::new(1000.0)));
    assert!(Meters::new(999.0).lt(Kilometers::new(1.0)));
    assert!(Miles::new(1.0).gt(Kilometers::new(1.0)));
}

#[test]
fn display_then_parse_round_trip() {
    let d = Kilometers::new(42.5);
    let printed = format!("{d}");
    assert_eq!(printed, "42.5 km");
    let parsed: Kilometers = printed.parse().unwrap();
    assert_eq!(parsed.value(), 42.5);
}

#[test]
fn parse_normalizes_to_reference() {
    let d = mensura::parse::<length::Length, f64>("1.5 km").unwrap();
    assert_eq!(d.value(), 1500.0);
}

#[test]
fn parse_absolute_applies_offsets() {
    let t = mensura::parse_absolute::<temperature::Temperature, f64>("98.6 °F").unwrap();
    assert_abs_diff_eq!(t.to::<Celsius>().value(), 37.0, epsilon = 1e-9);
}

#[test]
fn parse_rejects_foreign_symbols() {
    let err = mensura::parse::<length::Length, f64>("3 kg").unwrap_err();
    assert!(matches!(err, ParseError::UnknownUnit { .. }));
}

#[test]
fn unit_constants_scale_with_floats() {
    let d = 4.2 * length::KM;
    assert_eq!(d.value(), 4.2);

    let t = 1.5 * duration::H;
    assert_eq!(t.value(), 1.5);
}

#[test]
fn f32_backing_works_end_to_end() {
    let d: Rel<Kilometer, f32> = Rel::new(1.5);
    let m = d.to::<Meter>();
    assert!((m.value() - 1500.0).abs() < 1e-3);
}

#[test]
fn ohms_law_chain() {
    let i: Amperes = Volts::new(12.0) / Ohms::new(4.0);
    let p: Watts = Volts::new(12.0) * i;
    assert_eq!(p.value(), 36.0);
}

#[test]
fn battery_energy_budget() {
    // 2 Ah at 12 V is 24 Wh.
    let q = AmpereHours::new(2.0);
    let i: Amperes = q / Hours::new(2.0);
    let p: Watts = Volts::new(12.0) * i;
    let e = (p * Hours::new(2.0)).to::<WattHour>();
    assert_relative_eq!(e.value(), 24.0, max_relative = 1e-12);
}

#[test]
fn time_points_support_rounding_and_scaling() {
    let t: duration::TimePoint = Abs::new(1.9);
    assert_eq!(t.floor().value(), 1.0);
    assert_eq!(t.round().value(), 2.0);
    assert_eq!(t.scale_by(2.0).value(), 3.8);
    assert_eq!((t * 2.0).value(), 3.8);
}

#[test]
fn relative_plus_point_crosses_units() {
    // half a minute before the one-minute mark, as a point in seconds
    let mark: duration::TimePoint = Abs::<Minute>::new(1.0).to();
    let t = Seconds::new(-30.0).plus(mark);
    assert_abs_diff_eq!(t.value(), 30.0, epsilon = 1e-12);
}

#[test]
fn nan_propagates_through_conversion() {
    let d = Meters::NAN;
    assert!(d.to::<Kilometer>().value().is_nan());
    // NaN compares unequal to everything, itself included.
    assert!(!d.eq(d));
}

proptest! {
    #[test]
    fn prop_conversion_round_trip_is_tight(v in -1e12..1e12f64) {
        let original = Meters::new(v);
        let back = original.to::<Foot>().to::<Meter>();
        prop_assert!((back.value() - v).abs() <= v.abs() * 1e-12);
    }

    #[test]
    fn prop_addition_associates_within_tolerance(
        a in -1e6..1e6f64,
        b in -1e6..1e6f64,
        c in -1e6..1e6f64,
    ) {
        let lhs = (Meters::new(a) + Meters::new(b)) + Meters::new(c);
        let rhs = Meters::new(a) + (Meters::new(b) + Meters::new(c));
        prop_assert!((lhs.value() - rhs.value()).abs() < 1e-6);
    }

    #[test]
    fn prop_point_minus_point_plus_point_is_identity(
        a in -1e6..1e6f64,
        b in -1e6..1e6f64,
    ) {
        let pa: length::Position = Abs::new(a);
        let pb: length::Position = Abs::new(b);
        let d: Meters = pa - pb;
        prop_assert!(((pb + d).value() - pa.value()).abs() < 1e-6);
    }
}
