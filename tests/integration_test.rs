//! Integration tests for the coordkit library and commands

use std::io::{Cursor, Write};

use coordkit::commands::{BatchCommand, BatchSummary, ConvertCommand, ListCommand};
use coordkit::utils::logger::Logger;
use coordkit::utils::progress::ProgressTracker;
use coordkit::{ConversionSettings, CoordKit, CoordinateFormat, LatLng, Rendered};

#[test]
fn test_reference_conversions_through_public_api() {
    let kit = CoordKit::default();

    assert_eq!(kit.dec_to_dec(&LatLng::input(37.1234567, -122.7654321)).to_string(),
               "37.123457,-122.765432");
    assert_eq!(kit.dec_to_mms(&LatLng::input(1.0, -1.0)).to_string(), "360000,-360000");
    assert_eq!(kit.mms_to_dec(&LatLng::input(360000, -360000)).to_string(), "1.000000,-1.000000");
    assert_eq!(kit.dec_to_dec(&LatLng::input("abc", 5)).to_string(), ",");
    assert_eq!(kit.deg_to_dec(&LatLng::input("1 2", "3 4 5")).to_string(), "Invalid,Invalid");
    assert_eq!(kit.mms_to_mms(&LatLng::input(360000.9, -360000.9)).to_string(), "360000,-360000");

    let deg = kit.dec_to_deg(&LatLng::input(37.566481622437934, 126.98502302169841));
    assert_eq!(deg.lat.as_text(), Some("37 33 59.3"));
}

#[test]
fn test_full_round_trip_through_every_format() {
    let kit = CoordKit::default();
    let start = LatLng::input(37.566482, 126.985022);

    let mms = kit.dec_to_mms(&start);
    let lat_mms = mms.lat.as_integer().unwrap();
    let lng_mms = mms.lng.as_integer().unwrap();

    let deg = kit.mms_to_deg(&LatLng::input(lat_mms, lng_mms));
    let dec = kit.deg_to_dec(&LatLng::input(deg.lat.to_string(), deg.lng.to_string()));

    let lat: f64 = dec.lat.as_text().unwrap().parse().unwrap();
    let lng: f64 = dec.lng.as_text().unwrap().parse().unwrap();
    assert!((lat - 37.566482).abs() < 0.05 / 3600.0 + 1.0 / 360000.0);
    assert!((lng - 126.985022).abs() < 0.05 / 3600.0 + 1.0 / 360000.0);
}

#[test]
fn test_convert_command_renders_pair() {
    let kit = CoordKit::default();

    let command = ConvertCommand::from_parts(LatLng::input("1", "-1"),
                                             CoordinateFormat::Dec, CoordinateFormat::Mms, false, &kit);
    assert_eq!(command.render().unwrap(), vec!["360000,-360000".to_string()]);

    let failing = ConvertCommand::from_parts(LatLng::input("37 33", "126 59 6.1"),
                                             CoordinateFormat::Deg, CoordinateFormat::Dec, false, &kit);
    assert_eq!(failing.render().unwrap(), vec!["Invalid,Invalid".to_string()]);

    let empty = ConvertCommand::from_parts(LatLng::input("abc", "1.0"),
                                           CoordinateFormat::Dec, CoordinateFormat::Dec, false, &kit);
    assert_eq!(empty.render().unwrap(), vec![",".to_string()]);

    let detailed = ConvertCommand::from_parts(LatLng::input("37 33", "126 59 6.1"),
                                              CoordinateFormat::Deg, CoordinateFormat::Dec, true, &kit);
    let lines = detailed.render().unwrap();
    assert!(lines[0].starts_with("lat: error:"));
    assert_eq!(lines[1], "lng: 126.985028");
}

#[test]
fn test_batch_command_processes_lines() {
    let kit = CoordKit::default();
    let command = BatchCommand::from_parts("-", None, CoordinateFormat::Dec, CoordinateFormat::Deg, &kit);

    let input = "# lat,lng\n37.566481622437934,126.98502302169841\n\nnorth,1.0\n-37.5\t-0.5\nonly-one-value\n";
    let mut output = Vec::new();
    let summary = command.process(Cursor::new(input), &mut output, &ProgressTracker::hidden()).unwrap();

    assert_eq!(summary, BatchSummary { converted: 2, invalid: 2, skipped: 2 });
    assert_eq!(String::from_utf8(output).unwrap(),
               "37 33 59.3,126 59 6.1\nInvalid,Invalid\n-38 30 0.0,-1 30 0.0\nInvalid,Invalid\n");
}

#[test]
fn test_batch_normalize_writes_empty_sentinel() {
    let kit = CoordKit::default();
    let command = BatchCommand::from_parts("-", None, CoordinateFormat::Mms, CoordinateFormat::Mms, &kit);

    let mut output = Vec::new();
    let summary = command.process(Cursor::new("abc,1\n360000.9;-360000.9\n"), &mut output,
                                  &ProgressTracker::hidden()).unwrap();

    assert_eq!(summary.invalid, 1);
    assert_eq!(String::from_utf8(output).unwrap(), ",\n360000,-360000\n");
}

#[test]
fn test_list_command_names_all_conversions() {
    let lines = ListCommand::new().lines();
    assert_eq!(lines.len(), 9);
    assert!(lines.iter().any(|l| l.starts_with("DEGToMMS") && l.ends_with("DEG -> MMS")));
}

#[test]
fn test_settings_loaded_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[decimal]\nplaces = 2\n[sexagesimal]\nseconds_places = 0").unwrap();

    let path = file.path().to_str().unwrap();
    let kit = CoordKit::from_config(Some(path)).unwrap();
    assert_eq!(kit.settings().decimal_places, 2);

    let dec = kit.dec_to_dec(&LatLng::input(37.567, 1.0));
    assert_eq!(dec.lat, Rendered::Text("37.57".to_string()));

    let deg = kit.dec_to_deg(&LatLng::input(37.566481622437934, 1.0));
    assert_eq!(deg.lat, Rendered::Text("37 33 59".to_string()));

    assert!(CoordKit::from_config(Some("/nonexistent/coordkit.toml")).is_err());
    assert_eq!(CoordKit::from_config(None).unwrap().settings(), &ConversionSettings::builtin());
}

#[test]
fn test_logger_writes_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("coordkit.log");
    let path_str = path.to_str().unwrap();

    let logger = Logger::new(path_str).unwrap();
    logger.log("DECToDEG lat: 37.5 -> 37 30 0.0").unwrap();

    let contents = std::fs::read_to_string(&path).unwrap();
    assert_eq!(contents, "DECToDEG lat: 37.5 -> 37 30 0.0\n");
}
