//! Tests for conversions from decimal degrees

use crate::api::CoordKit;
use crate::coordinate::{LatLng, Rendered};

fn text(s: &str) -> Rendered {
    Rendered::Text(s.to_string())
}

#[test]
fn test_dec_to_dec_rounds_to_six_digits() {
    let kit = CoordKit::default();
    let result = kit.dec_to_dec(&LatLng::input(37.1234567, -122.7654321));

    assert_eq!(result, LatLng::new(text("37.123457"), text("-122.765432")));
}

#[test]
fn test_dec_to_dec_accepts_numeric_text() {
    let kit = CoordKit::default();
    let result = kit.dec_to_dec(&LatLng::input(" 37.5 ", 127));

    assert_eq!(result, LatLng::new(text("37.500000"), text("127.000000")));
}

#[test]
fn test_dec_to_dec_malformed_input_is_empty() {
    let kit = CoordKit::default();

    let result = kit.dec_to_dec(&LatLng::input("abc", 5.0));
    assert_eq!(result, LatLng::new(Rendered::Empty, Rendered::Empty));
    assert_eq!(result.to_string(), ",");

    let result = kit.dec_to_dec(&LatLng::input(1.0, f64::NAN));
    assert_eq!(result, LatLng::new(Rendered::Empty, Rendered::Empty));
}

#[test]
fn test_dec_to_deg() {
    let kit = CoordKit::default();
    let result = kit.dec_to_deg(&LatLng::input(37.566481622437934, 126.98502302169841));

    assert_eq!(result, LatLng::new(text("37 33 59.3"), text("126 59 6.1")));
}

#[test]
fn test_dec_to_deg_negative_uses_floor() {
    let kit = CoordKit::default();
    let result = kit.dec_to_deg(&LatLng::input(-37.5, -0.5));

    assert_eq!(result, LatLng::new(text("-38 30 0.0"), text("-1 30 0.0")));
}

#[test]
fn test_dec_to_deg_carries_rounded_seconds() {
    let kit = CoordKit::default();
    let result = kit.dec_to_deg(&LatLng::input(10.99999, 0.0));

    assert_eq!(result, LatLng::new(text("11 0 0.0"), text("0 0 0.0")));
}

#[test]
fn test_dec_to_deg_keeps_large_degrees() {
    let kit = CoordKit::default();

    let result = kit.dec_to_deg(&LatLng::input(3.0e9, 0.0));
    assert_eq!(result, LatLng::new(text("3000000000 0 0.0"), text("0 0 0.0")));

    // Seconds round up to 60 and carry past i32::MAX
    let result = kit.dec_to_deg(&LatLng::input(2147483647.99999, 0.0));
    assert_eq!(result, LatLng::new(text("2147483648 0 0.0"), text("0 0 0.0")));
}

#[test]
fn test_dec_to_deg_unrepresentable_degrees_is_invalid() {
    let kit = CoordKit::default();
    let result = kit.dec_to_deg(&LatLng::input(1e300, 0.0));

    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
}

#[test]
fn test_dec_to_deg_malformed_input_is_invalid() {
    let kit = CoordKit::default();
    let result = kit.dec_to_deg(&LatLng::input("north", 1.0));

    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
}

#[test]
fn test_dec_to_mms() {
    let kit = CoordKit::default();
    let result = kit.dec_to_mms(&LatLng::input(1.0, -1.0));

    assert_eq!(result, LatLng::new(Rendered::Integer(360000), Rendered::Integer(-360000)));
}

#[test]
fn test_dec_to_mms_truncates() {
    let kit = CoordKit::default();

    // 13523933.52 and -1.98 before truncation
    let result = kit.dec_to_mms(&LatLng::input(37.566482, -0.0000055));
    assert_eq!(result, LatLng::new(Rendered::Integer(13523933), Rendered::Integer(-1)));
}
