// src/report.rs
use std::fmt;
use std::io::{self, Write};

use crate::compare::{Finding, Verdict};

/// Receives comparison results as they are produced.
/// Frontends implement this to surface findings to a human.
pub trait Reporter {
    /// Called once with the number of generated and documented methods.
    fn begin(&mut self, _generated: usize, _documented: usize) {}

    fn finding(&mut self, _finding: &Finding) {}

    /// Called at the end with the complete verdict.
    fn finish(&mut self, _verdict: &Verdict) {}
}

/// A no-op reporter.
pub struct NullReporter;
impl Reporter for NullReporter {}

/// Human-readable report on any writer (stdout in the binary).
///
/// Failing findings are printed as they arrive; manual-only methods are held
/// back and listed under their own heading before the summary.
///
/// The first write error stops all further output and is handed back by
/// [`ConsoleReporter::into_inner`].
pub struct ConsoleReporter<W: Write> {
    out: W,
    extraneous: Vec<String>,
    error: Option<io::Error>,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out, extraneous: Vec::new(), error: None }
    }

    pub fn into_inner(self) -> io::Result<W> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.out),
        }
    }

    fn emit(&mut self, args: fmt::Arguments<'_>) {
        if self.error.is_none() {
            if let Err(e) = self.out.write_fmt(args) {
                self.error = Some(e);
            }
        }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn begin(&mut self, generated: usize, documented: usize) {
        self.emit(format_args!(
            "Checking {generated} generated methods against {documented} documented methods\n"
        ));
    }

    fn finding(&mut self, finding: &Finding) {
        if finding.kind.is_failure() {
            self.emit(format_args!("\n{finding}"));
        } else {
            self.extraneous.push(finding.method.clone());
        }
    }

    fn finish(&mut self, verdict: &Verdict) {
        let extraneous = std::mem::take(&mut self.extraneous);
        if !extraneous.is_empty() {
            self.emit(format_args!("\nDocumented but not in generated output (informational):\n"));
            for m in &extraneous {
                self.emit(format_args!("  {m}\n"));
            }
        }
        if verdict.passed {
            self.emit(format_args!("\nOK: {} methods match the documentation\n", verdict.checked));
        } else {
            self.emit(format_args!(
                "\nFAILED: {} problem(s) across {} generated methods\n",
                verdict.failures().count(),
                verdict.checked
            ));
        }
        if self.error.is_none() {
            if let Err(e) = self.out.flush() {
                self.error = Some(e);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare::compare;
    use crate::model::{record, SignatureMap};

    #[test]
    fn console_report_shape() {
        let mut g = SignatureMap::new();
        record(&mut g, "crop", s!("Image"), s!("crop ()"));
        let mut m = SignatureMap::new();
        record(&mut m, "crop", s!("void"), s!("crop ()"));
        record(&mut m, "old", s!("void"), s!("old ()"));

        let mut rep = ConsoleReporter::new(Vec::new());
        let v = compare(&g, &m, Some(&mut rep));
        assert!(!v.passed);

        let text = String::from_utf8(rep.into_inner().unwrap()).unwrap();
        assert!(text.contains("Checking 1 generated methods against 2 documented methods"));
        assert!(text.contains("return type mismatch: crop"));
        assert!(text.contains("  generated:  Image"));
        assert!(text.contains("    void"));
        assert!(text.contains("informational):\n  old\n"));
        assert!(text.contains("FAILED: 1 problem(s) across 1 generated methods"));
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failure_is_returned() {
        let mut m = SignatureMap::new();
        record(&mut m, "crop", s!("void"), s!("crop ()"));

        let mut rep = ConsoleReporter::new(ClosedPipe);
        let v = compare(&m, &m, Some(&mut rep));
        assert!(v.passed);
        let err = rep.into_inner().err().unwrap();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
