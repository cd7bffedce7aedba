//! Scanner report parsing.
//!
//! A report is a sequence of blocks separated by blank lines:
//!
//! ```text
//! --- scanner 0 ---
//! 404,-588,-901
//! 528,-643,409
//!
//! --- scanner 1 ---
//! 686,422,578
//! ```
//!
//! `--- scanner NAME ---` names the block `NAME`. Any other line without a
//! comma is taken verbatim as the name, unless it starts like a number, in
//! which case it is a malformed coordinate line. Blocks without a header are
//! named after their position in the output.

use std::fmt::Write as _;
use std::path::Path;

use log::debug;

use crate::core::{Point3, ScannerReading};
use crate::error::{Error, Result};

#[derive(Default)]
struct Block {
    name: Option<String>,
    beacons: Vec<Point3>,
}

impl Block {
    fn is_blank(&self) -> bool {
        self.name.is_none() && self.beacons.is_empty()
    }

    fn flush(&mut self, readings: &mut Vec<ScannerReading>) {
        let block = std::mem::take(self);
        if block.beacons.is_empty() {
            if let Some(name) = block.name {
                debug!("Skipping scanner {} with no beacons", name);
            }
            return;
        }
        let name = block.name.unwrap_or_else(|| readings.len().to_string());
        readings.push(ScannerReading::new(name, block.beacons));
    }
}

fn header_name(line: &str) -> &str {
    match line
        .strip_prefix("---")
        .and_then(|rest| rest.strip_suffix("---"))
    {
        Some(inner) => {
            let inner = inner.trim();
            inner
                .strip_prefix("scanner")
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .unwrap_or(inner)
        }
        None => line,
    }
}

fn looks_numeric(line: &str) -> bool {
    line.starts_with(|c: char| c.is_ascii_digit() || c == '-' || c == '+')
        && !line.starts_with("---")
}

/// Parse a scanner report into readings, in input order.
pub fn parse_report(input: &str) -> Result<Vec<ScannerReading>> {
    let mut readings = Vec::new();
    let mut block = Block::default();

    for (i, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            block.flush(&mut readings);
            continue;
        }

        if !line.contains(',') && !looks_numeric(line) {
            // A header right after beacons starts a new block
            if !block.is_blank() {
                block.flush(&mut readings);
            }
            block.name = Some(header_name(line).to_string());
            continue;
        }

        let point: Point3 = line.parse().map_err(|e| Error::Parse {
            line: i + 1,
            message: format!("{e}"),
        })?;
        block.beacons.push(point);
    }
    block.flush(&mut readings);

    Ok(readings)
}

/// Read and parse a report file.
pub fn read_report(path: &Path) -> Result<Vec<ScannerReading>> {
    let contents = std::fs::read_to_string(path)?;
    parse_report(&contents)
}

/// Format readings in the report layout accepted by [`parse_report`].
pub fn format_report(readings: &[ScannerReading]) -> String {
    let mut out = String::new();
    for (i, reading) in readings.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let _ = writeln!(out, "--- scanner {} ---", reading.name);
        for beacon in &reading.beacons {
            let _ = writeln!(out, "{beacon}");
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_blocks() {
        let input = "--- scanner 0 ---\n404,-588,-901\n528,-643,409\n\n--- scanner 1 ---\n686,422,578\n";
        let readings = parse_report(input).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[0].name, "0");
        assert_eq!(
            readings[0].beacons,
            vec![Point3::new(404, -588, -901), Point3::new(528, -643, 409)]
        );
        assert_eq!(readings[1].name, "1");
        assert_eq!(readings[1].beacons, vec![Point3::new(686, 422, 578)]);
    }

    #[test]
    fn test_free_form_names_and_defaults() {
        let input = "1,2,3\n\nnorth mast\n4,5,6\n\n--- dock ---\n7,8,9\n";
        let readings = parse_report(input).unwrap();
        let names: Vec<&str> = readings.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["0", "north mast", "dock"]);
    }

    #[test]
    fn test_header_without_blank_line() {
        let input = "--- scanner a ---\n1,1,1\n--- scanner b ---\n2,2,2\n";
        let readings = parse_report(input).unwrap();
        assert_eq!(readings.len(), 2);
        assert_eq!(readings[1].name, "b");
    }

    #[test]
    fn test_empty_blocks_skipped() {
        let input = "--- scanner 0 ---\n\n\n--- scanner 1 ---\n1,2,3\r\n\n";
        let readings = parse_report(input).unwrap();
        assert_eq!(readings.len(), 1);
        assert_eq!(readings[0].name, "1");
        assert!(parse_report("").unwrap().is_empty());
    }

    #[test]
    fn test_malformed_line_number() {
        let input = "--- scanner 0 ---\n1,2,3\n4,five,6\n";
        match parse_report(input) {
            Err(Error::Parse { line, .. }) => assert_eq!(line, 3),
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_report("1,2\n"),
            Err(Error::Parse { line: 1, .. })
        ));
    }

    #[test]
    fn test_number_like_line_is_not_a_header() {
        let input = "--- scanner 0 ---\n1,2,3\n404 -588 -901\n5,6,7\n";
        match parse_report(input) {
            Err(Error::Parse { line, message }) => {
                assert_eq!(line, 3);
                assert!(message.contains("404 -588 -901"));
            }
            other => panic!("unexpected result: {other:?}"),
        }
        assert!(matches!(
            parse_report("--- scanner 0 ---\n1,2,3\n+7\n"),
            Err(Error::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_out_of_range_coordinate() {
        let input = "--- scanner 0 ---\n1,2,3\n2147483647,-5,0\n";
        assert!(matches!(
            parse_report(input),
            Err(Error::Parse { line: 3, .. })
        ));
    }

    #[test]
    fn test_format_is_parseable() {
        let readings = vec![
            ScannerReading::new("0", vec![Point3::new(1, -2, 3)]),
            ScannerReading::new("east", vec![Point3::new(-4, 5, -6), Point3::new(7, 8, 9)]),
        ];
        let text = format_report(&readings);
        assert!(text.starts_with("--- scanner 0 ---\n1,-2,3\n\n--- scanner east ---\n"));
        assert_eq!(parse_report(&text).unwrap(), readings);
    }

    #[test]
    fn test_read_missing_file() {
        let err = read_report(Path::new("/nonexistent/report.txt")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
