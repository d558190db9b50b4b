//! Tests for conversions from MMS units

use crate::api::CoordKit;
use crate::coordinate::{LatLng, Rendered};

fn text(s: &str) -> Rendered {
    Rendered::Text(s.to_string())
}

#[test]
fn test_mms_to_dec() {
    let kit = CoordKit::default();
    let result = kit.mms_to_dec(&LatLng::input(360000, -360000));

    assert_eq!(result, LatLng::new(text("1.000000"), text("-1.000000")));
}

#[test]
fn test_mms_to_dec_malformed_is_invalid() {
    let kit = CoordKit::default();
    let result = kit.mms_to_dec(&LatLng::input("x", 1));

    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
}

#[test]
fn test_mms_to_deg_goes_through_rounded_decimal() {
    let kit = CoordKit::default();
    let result = kit.mms_to_deg(&LatLng::input(13523933, 45714608));

    assert_eq!(result, LatLng::new(text("37 33 59.3"), text("126 59 6.1")));
}

#[test]
fn test_mms_to_mms_truncates() {
    let kit = CoordKit::default();
    let result = kit.mms_to_mms(&LatLng::input(360000.9, -360000.9));

    assert_eq!(result, LatLng::new(Rendered::Integer(360000), Rendered::Integer(-360000)));
}

#[test]
fn test_mms_to_mms_malformed_is_empty() {
    let kit = CoordKit::default();
    let result = kit.mms_to_mms(&LatLng::input("abc", 1));

    assert_eq!(result, LatLng::new(Rendered::Empty, Rendered::Empty));
}
