//! Runs a sheet's checks against its board and reports the results.

use crate::config::{CheckConfig, SheetConfig, SheetError};
use chess_core::{Move, Square};
use chess_rules::{Board, MoveError, MoveOutcome};
use serde::Serialize;
use std::io::{self, Write};

/// Result of a single check.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CheckResult {
    pub description: String,
    /// The move in coordinate notation, e.g. `"c3e1"`.
    ///
    /// Falls back to the raw fields when a square does not parse.
    #[serde(rename = "move")]
    pub mv: String,
    /// Expected verdict, if the sheet gave one.
    pub expected: Option<bool>,
    /// Verdict from the board, or `None` if the query failed.
    pub legal: Option<bool>,
    /// The piece taken by a legal capture.
    pub captured: Option<String>,
    /// Human-readable outcome or error.
    pub detail: String,
    pub passed: bool,
}

impl CheckResult {
    fn new(check: &CheckConfig, mv: String, result: Result<MoveOutcome, MoveError>) -> Self {
        let (legal, captured, detail) = match result {
            Ok(outcome) => (
                Some(outcome.is_legal()),
                outcome.captured().map(|piece| piece.to_string()),
                outcome.to_string(),
            ),
            Err(e) => (None, None, e.to_string()),
        };
        let passed = match (check.expect, legal) {
            (_, None) => false,
            (Some(expected), Some(actual)) => expected == actual,
            (None, Some(_)) => true,
        };
        CheckResult {
            description: check.label(),
            mv,
            expected: check.expect,
            legal,
            captured,
            detail,
            passed,
        }
    }
}

/// Outcome of running a whole sheet.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub title: String,
    /// The board as printed by [`Board::render_text`].
    pub board: Vec<String>,
    pub results: Vec<CheckResult>,
}

impl Report {
    /// Number of checks that passed.
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    /// Number of checks that failed or errored.
    pub fn failed(&self) -> usize {
        self.results.len() - self.passed()
    }

    /// Writes the plain-text report.
    pub fn write_text<W: Write>(&self, out: &mut W, show_board: bool) -> io::Result<()> {
        writeln!(out, "{}", self.title)?;
        if show_board {
            for line in &self.board {
                writeln!(out, "{}", line)?;
            }
        }
        for result in &self.results {
            writeln!(out, "{}", result.description)?;
            match (result.expected, result.passed) {
                (Some(_), true) => writeln!(out, "    ✅ Test passed")?,
                (Some(_), false) => writeln!(out, "    ❌ Test failed! ({})", result.detail)?,
                (None, true) => writeln!(out, "    {}", result.detail)?,
                (None, false) => writeln!(out, "    ❌ {}", result.detail)?,
            }
        }
        writeln!(
            out,
            "{}/{} checks passed",
            self.passed(),
            self.results.len()
        )
    }

    /// Writes the report as pretty-printed JSON.
    pub fn write_json<W: Write>(&self, out: &mut W) -> io::Result<()> {
        serde_json::to_writer_pretty(&mut *out, self)?;
        writeln!(out)
    }
}

/// Resolves one check against the board.
///
/// Each field must hold exactly one square. Malformed squares and empty
/// sources come back as errors for the report rather than aborting the run.
pub fn run_check(board: &Board, check: &CheckConfig) -> CheckResult {
    match parse_squares(check) {
        Ok(m) => CheckResult::new(check, m.to_notation(), board.resolve(m)),
        Err(e) => {
            let raw = format!("{}{}", check.from.trim(), check.to.trim());
            CheckResult::new(check, raw, Err(e))
        }
    }
}

fn parse_squares(check: &CheckConfig) -> Result<Move, MoveError> {
    let from = Square::parse(&check.from)?;
    let to = Square::parse(&check.to)?;
    Ok(Move::new(from, to))
}

/// Builds the sheet's board and runs every check on it.
///
/// Extra checks (from the command line) run after the sheet's own.
pub fn run_sheet(sheet: &SheetConfig, extra: &[CheckConfig]) -> Result<Report, SheetError> {
    let board = sheet.build_board()?;
    tracing::debug!(placement = %board.to_placement(), "board ready");

    let results: Vec<CheckResult> = sheet
        .checks
        .iter()
        .chain(extra)
        .map(|check| run_check(&board, check))
        .collect();

    let report = Report {
        title: sheet.title.clone(),
        board: board.render_text(),
        results,
    };
    tracing::info!(
        passed = report.passed(),
        failed = report.failed(),
        "sheet finished"
    );
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(from: &str, to: &str, expect: Option<bool>) -> CheckConfig {
        CheckConfig {
            from: from.to_string(),
            to: to.to_string(),
            expect,
            description: None,
        }
    }

    #[test]
    fn test_builtin_sheet_passes() {
        let sheet = SheetConfig::builtin().unwrap();
        let report = run_sheet(&sheet, &[]).unwrap();
        let failures: Vec<_> = report.results.iter().filter(|r| !r.passed).collect();
        assert!(failures.is_empty(), "failing checks: {:?}", failures);
        assert_eq!(report.passed(), 18);
        assert_eq!(report.board[2], "6: [ ][ ][ ][r][ ][p][ ][ ]");
    }

    #[test]
    fn test_wrong_expectation_fails() {
        let sheet = SheetConfig::builtin().unwrap();
        let report = run_sheet(&sheet, &[check("c3", "g7", Some(true))]).unwrap();
        assert_eq!(report.failed(), 1);
        let last = report.results.last().unwrap();
        assert_eq!(last.legal, Some(false));
        assert_eq!(last.detail, "illegal: path blocked at f6");
    }

    #[test]
    fn test_unexpected_checks_only_report() {
        let board = SheetConfig::builtin().unwrap().build_board().unwrap();
        let result = run_check(&board, &check("d6", "d3", None));
        assert!(result.passed);
        assert_eq!(result.mv, "d6d3");
        assert_eq!(result.detail, "legal, captures White Pawn");
        assert_eq!(result.captured.as_deref(), Some("White Pawn"));

        let quiet = run_check(&board, &check("c3", "e1", None));
        assert_eq!(quiet.captured, None);
    }

    #[test]
    fn test_errors_fail_the_check() {
        let board = SheetConfig::builtin().unwrap().build_board().unwrap();

        let empty = run_check(&board, &check("e4", "e5", Some(false)));
        assert!(!empty.passed);
        assert_eq!(empty.legal, None);
        assert_eq!(empty.detail, "no piece at source square e4");

        let malformed = run_check(&board, &check("c3", "z9", None));
        assert!(!malformed.passed);
        assert_eq!(malformed.detail, "invalid square notation: 'z9'");
    }

    #[test]
    fn test_squares_parse_per_field() {
        let board = SheetConfig::builtin().unwrap().build_board().unwrap();

        // "c" + "3e1" would spell c3e1 if the fields were joined.
        let split = run_check(&board, &check("c", "3e1", Some(true)));
        assert!(!split.passed);
        assert_eq!(split.legal, None);
        assert_eq!(split.detail, "invalid square notation: 'c'");

        let separated = run_check(&board, &check("c-3", "e 1", None));
        assert_eq!(separated.legal, None);
        assert_eq!(separated.detail, "invalid square notation: 'c-3'");

        let long = run_check(&board, &check("c33", "e1", None));
        assert_eq!(long.legal, None);
        assert_eq!(long.detail, "invalid square notation: 'c33'");
        assert_eq!(long.mv, "c33e1");

        let padded = run_check(&board, &check(" c3 ", "e1", Some(true)));
        assert!(padded.passed);
        assert_eq!(padded.mv, "c3e1");
    }

    #[test]
    fn test_text_report() {
        let sheet = SheetConfig::parse(
            r#"
title = "Tiny"

[[pieces]]
square = "a1"
color = "white"
kind = "rook"

[[checks]]
from = "a1"
to = "a8"
expect = true
description = "Rook climbs the file"

[[checks]]
from = "a1"
to = "b2"
expect = true
"#,
        )
        .unwrap();
        let report = run_sheet(&sheet, &[]).unwrap();

        let mut out = Vec::new();
        report.write_text(&mut out, false).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "Tiny\n\
             Rook climbs the file\n    ✅ Test passed\n\
             a1 -> b2\n    ❌ Test failed! (illegal: illegal shape for this piece)\n\
             1/2 checks passed\n"
        );
    }

    #[test]
    fn test_json_report() {
        let sheet = SheetConfig::builtin().unwrap();
        let report = run_sheet(&sheet, &[]).unwrap();

        let mut out = Vec::new();
        report.write_json(&mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(value["title"], "Bishop and rook practice");
        assert_eq!(value["board"].as_array().unwrap().len(), 8);
        assert_eq!(value["results"][0]["move"], "c3e1");
        assert_eq!(value["results"][0]["legal"], true);
    }
}
