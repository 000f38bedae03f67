//! Round-trip tests: source renderer output re-parses to an equal document.

use docweave::{parse_str, parse_str_with_options, render, ParseOptions};

const REPORT: &str = "\
Preamble prose before any heading.

# Summary

A paragraph spanning
two source lines.

## Metrics

| Metric | Q1 | Q2 |
| :--- | --: | --: |
| Incidents | 4 | 2 |
| MTTR hours | 18 | 9 |

### Notes

Cells may contain a \\| literal pipe.

| Expr | Result |
| a \\| b | true |
";

#[test]
fn test_source_round_trip() {
    let original = parse_str(REPORT).unwrap();
    let emitted = render::to_source(&original);
    let reparsed = parse_str(&emitted).unwrap();

    assert_eq!(original, reparsed);
}

#[test]
fn test_source_round_trip_is_stable() {
    // A second emit/parse cycle changes nothing.
    let original = parse_str(REPORT).unwrap();
    let once = render::to_source(&original);
    let twice = render::to_source(&parse_str(&once).unwrap());

    assert_eq!(once, twice);
}

#[test]
fn test_round_trip_preserves_title_via_options() {
    let options = ParseOptions::new().with_title("Ops Review");
    let original = parse_str_with_options(REPORT, options.clone()).unwrap();

    let emitted = render::to_source(&original);
    let reparsed = parse_str_with_options(&emitted, options).unwrap();

    assert_eq!(original, reparsed);
}

#[test]
fn test_round_trip_through_files() {
    let dir = tempfile::tempdir().unwrap();
    let source_path = dir.path().join("report.txt");
    let emitted_path = dir.path().join("emitted.txt");

    std::fs::write(&source_path, REPORT).unwrap();
    let original = docweave::parse_file(&source_path).unwrap();

    std::fs::write(&emitted_path, render::to_source(&original)).unwrap();
    let reparsed = docweave::parse_file(&emitted_path).unwrap();

    assert_eq!(original, reparsed);
}
