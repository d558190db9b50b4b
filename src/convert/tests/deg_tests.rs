//! Tests for conversions from degrees / minutes / seconds

use crate::api::CoordKit;
use crate::coordinate::{CoordError, CoordinateFormat, LatLng, Rendered};

fn text(s: &str) -> Rendered {
    Rendered::Text(s.to_string())
}

#[test]
fn test_deg_to_dec_from_text() {
    let kit = CoordKit::default();
    let result = kit.deg_to_dec(&LatLng::input("37 33 59.3", "126 59 6.1"));

    assert_eq!(result, LatLng::new(text("37.566472"), text("126.985028")));
}

#[test]
fn test_deg_to_dec_negative_floor_triple() {
    let kit = CoordKit::default();
    let result = kit.deg_to_dec(&LatLng::input("-38 30 0.0", "  0   6   0 "));

    assert_eq!(result, LatLng::new(text("-37.500000"), text("0.100000")));
}

#[test]
fn test_deg_to_dec_from_packed_number() {
    let kit = CoordKit::default();
    let result = kit.deg_to_dec(&LatLng::input(373359.3, 127000.0));

    assert_eq!(result, LatLng::new(text("37.566472"), text("127.000000")));
}

#[test]
fn test_deg_to_dec_fails_together() {
    let kit = CoordKit::default();

    let result = kit.deg_to_dec(&LatLng::input("37 33", "126 59 6.1"));
    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));

    let result = kit.deg_to_dec(&LatLng::input("37 33 59.3", "126 fifty-nine 6.1"));
    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
    assert_eq!(result.to_string(), "Invalid,Invalid");
}

#[test]
fn test_deg_to_dec_detailed_keeps_good_axis() {
    let kit = CoordKit::default();
    let report = kit.convert_detailed(CoordinateFormat::Deg, CoordinateFormat::Dec,
                                      &LatLng::input("37 33 59.3 12", "126 59 6.1"));

    assert!(!report.is_ok());
    assert!(matches!(report.results.lat, Err(CoordError::UnparsableDeg { .. })));
    assert_eq!(report.results.lng.as_ref().ok(), Some(&text("126.985028")));
    assert_eq!(report.errors().len(), 1);
}

#[test]
fn test_deg_to_dec_rejects_out_of_range_minutes() {
    let kit = CoordKit::default();
    let result = kit.deg_to_dec(&LatLng::input("37 75 0", "126 59 6.1"));

    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
}

#[test]
fn test_deg_to_deg_repacks() {
    let kit = CoordKit::default();
    let result = kit.deg_to_deg(&LatLng::input(373359.3, 127530.0));

    assert_eq!(result, LatLng::new(text("37 33 59.3"), text("127 5 30.0")));
}

#[test]
fn test_deg_to_deg_normalizes_text() {
    let kit = CoordKit::default();
    let result = kit.deg_to_deg(&LatLng::input("37 33 59.26", "126 59 6.1"));

    assert_eq!(result, LatLng::new(text("37 33 59.3"), text("126 59 6.1")));
}

#[test]
fn test_deg_to_deg_carries_past_i32_degrees() {
    let kit = CoordKit::default();
    let result = kit.deg_to_deg(&LatLng::input("2147483647 59 59.99", "1 0 0"));

    assert_eq!(result, LatLng::new(text("2147483648 0 0.0"), text("1 0 0.0")));
}

#[test]
fn test_deg_to_deg_rejects_invalid_packing() {
    let kit = CoordKit::default();

    // Minutes group of 70
    let result = kit.deg_to_deg(&LatLng::input(377000.0, 127530.0));
    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));

    // Negative packed values have no defined digit groups
    let result = kit.deg_to_deg(&LatLng::input(-373359.3, 127530.0));
    assert_eq!(result, LatLng::new(Rendered::Invalid, Rendered::Invalid));
}

#[test]
fn test_deg_to_mms_rounds() {
    let kit = CoordKit::default();

    // 13523929.92 and 45753000.12 before rounding
    let result = kit.deg_to_mms(&LatLng::input(373359.3, 127530.0));
    assert_eq!(result, LatLng::new(Rendered::Integer(13523930), Rendered::Integer(45753000)));
}

#[test]
fn test_deg_to_mms_from_text_uses_repacked_seconds() {
    let kit = CoordKit::default();
    let packed = kit.deg_to_mms(&LatLng::input(373359.3, 127530.0));
    let textual = kit.deg_to_mms(&LatLng::input("37 33 59.26", "127 5 30"));

    assert_eq!(packed, textual);
}
