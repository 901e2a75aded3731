// src/compare.rs
use std::collections::BTreeSet;
use std::fmt;

use crate::model::{SignatureEntry, SignatureMap};
use crate::report::Reporter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FindingKind {
    /// Generated method with no manual entry at all.
    Undocumented,
    ReturnType,
    Signature,
    /// Manual-only method. Informational; never fails the check.
    Extraneous,
}

impl FindingKind {
    pub fn is_failure(self) -> bool {
        !matches!(self, FindingKind::Extraneous)
    }

    pub fn label(self) -> &'static str {
        match self {
            FindingKind::Undocumented => "undocumented method",
            FindingKind::ReturnType => "return type mismatch",
            FindingKind::Signature => "signature mismatch",
            FindingKind::Extraneous => "documented but not generated",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Finding {
    pub method: String,
    pub kind: FindingKind,
    /// The generated-side value that was not found (empty for whole-method findings).
    pub value: String,
    /// What the manual documents for this method, for the operator to compare against.
    pub documented: Vec<String>,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}: {}", self.kind.label(), self.method)?;
        match self.kind {
            FindingKind::Undocumented | FindingKind::Extraneous => Ok(()),
            FindingKind::ReturnType | FindingKind::Signature => {
                writeln!(f, "  generated:  {}", self.value)?;
                writeln!(f, "  documented:")?;
                if self.documented.is_empty() {
                    writeln!(f, "    (none)")?;
                }
                for alt in &self.documented {
                    writeln!(f, "    {alt}")?;
                }
                Ok(())
            }
        }
    }
}

/// Outcome of one comparison run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Verdict {
    pub passed: bool,
    /// Generated methods inspected.
    pub checked: usize,
    pub findings: Vec<Finding>,
}

impl Verdict {
    pub fn failures(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| f.kind.is_failure())
    }

    pub fn extraneous(&self) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(|f| !f.kind.is_failure())
    }
}

fn missing(
    method: &str,
    kind: FindingKind,
    generated: &BTreeSet<String>,
    documented: &BTreeSet<String>,
) -> Vec<Finding> {
    generated
        .difference(documented)
        .map(|value| Finding {
            method: s!(method),
            kind,
            value: value.clone(),
            documented: documented.iter().cloned().collect(),
        })
        .collect()
}

fn check_method(method: &str, generated: &SignatureEntry, manual: Option<&SignatureEntry>) -> Vec<Finding> {
    let Some(doc) = manual else {
        return vec![Finding {
            method: s!(method),
            kind: FindingKind::Undocumented,
            value: s!(),
            documented: Vec::new(),
        }];
    };
    let mut out = missing(method, FindingKind::ReturnType, &generated.returns, &doc.returns);
    out.extend(missing(method, FindingKind::Signature, &generated.signatures, &doc.signatures));
    out
}

/// Check every generated method against the manual documentation.
///
/// Each generated return type and signature must be a member of the manual
/// entry's collections. All methods are inspected; nothing stops at the first
/// problem. Manual-only methods are reported as [`FindingKind::Extraneous`]
/// and do not affect [`Verdict::passed`].
pub fn compare(
    generated: &SignatureMap,
    manual: &SignatureMap,
    mut reporter: Option<&mut dyn Reporter>,
) -> Verdict {
    if let Some(r) = reporter.as_deref_mut() {
        r.begin(generated.len(), manual.len());
    }

    let mut verdict = Verdict { passed: true, checked: 0, findings: Vec::new() };

    for (method, entry) in generated {
        let found = check_method(method, entry, manual.get(method));
        verdict.checked += 1;
        if let Some(r) = reporter.as_deref_mut() {
            for f in &found {
                r.finding(f);
            }
        }
        if !found.is_empty() {
            logd!("Compare: {method}: {} finding(s)", found.len());
            verdict.passed = false;
        }
        verdict.findings.extend(found);
    }

    for method in manual.keys().filter(|m| !generated.contains_key(*m)) {
        let f = Finding {
            method: method.clone(),
            kind: FindingKind::Extraneous,
            value: s!(),
            documented: Vec::new(),
        };
        if let Some(r) = reporter.as_deref_mut() {
            r.finding(&f);
        }
        verdict.findings.push(f);
    }

    if let Some(r) = reporter.as_deref_mut() {
        r.finish(&verdict);
    }
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::record;
    use crate::report::NullReporter;
    use pretty_assertions::assert_eq;

    fn map(entries: &[(&str, &str, &str)]) -> SignatureMap {
        let mut m = SignatureMap::new();
        for (name, ret, sig) in entries {
            record(&mut m, name, s!(*ret), s!(*sig));
        }
        m
    }

    #[test]
    fn matching_passes() {
        let g = map(&[("crop", "void", "crop (size_t w, size_t h)")]);
        let m = map(&[("crop", "void", "crop (size_t w, size_t h)")]);
        let v = compare(&g, &m, Some(&mut NullReporter));
        assert!(v.passed);
        assert_eq!(v.checked, 1);
        assert!(v.findings.is_empty());
    }

    #[test]
    fn return_type_mismatch() {
        let g = map(&[("crop", "Image", "crop (size_t w, size_t h)")]);
        let m = map(&[("crop", "void", "crop (size_t w, size_t h)")]);
        let v = compare(&g, &m, None);
        assert!(!v.passed);
        assert_eq!(v.findings, vec![Finding {
            method: s!("crop"),
            kind: FindingKind::ReturnType,
            value: s!("Image"),
            documented: vec![s!("void")],
        }]);
    }

    #[test]
    fn undocumented_method() {
        let g = map(&[("rotate", "void", "rotate (double degrees)")]);
        let v = compare(&g, &SignatureMap::new(), None);
        assert!(!v.passed);
        assert_eq!(v.findings.len(), 1);
        assert_eq!(v.findings[0].kind, FindingKind::Undocumented);
        assert_eq!(v.findings[0].method, "rotate");
    }

    #[test]
    fn overloads_are_membership_checked() {
        let g = map(&[
            ("zoom", "void", "zoom (const Geometry& g)"),
            ("zoom", "void", "zoom (size_t w)"),
        ]);
        let m = map(&[
            ("zoom", "void", "zoom (size_t w)"),
            ("zoom", "void", "zoom (const Geometry& g)"),
            ("zoom", "Image", "zoom (double f)"),
        ]);
        assert!(compare(&g, &m, None).passed);
    }

    #[test]
    fn all_findings_collected() {
        let g = map(&[
            ("a", "int", "a (int)"),
            ("b", "int", "b (int)"),
            ("c", "int", "c (int)"),
        ]);
        let m = map(&[("a", "long", "a (long)"), ("b", "int", "b (int)")]);
        let v = compare(&g, &m, None);
        let kinds: Vec<_> = v.failures().map(|f| (f.method.as_str(), f.kind)).collect();
        assert_eq!(kinds, vec![
            ("a", FindingKind::ReturnType),
            ("a", FindingKind::Signature),
            ("c", FindingKind::Undocumented),
        ]);
        assert_eq!(v.checked, 3);
    }

    #[test]
    fn extraneous_is_informational() {
        let g = map(&[("crop", "void", "crop ()")]);
        let m = map(&[("crop", "void", "crop ()"), ("legacy", "void", "legacy ()")]);
        let v = compare(&g, &m, None);
        assert!(v.passed);
        assert_eq!(v.extraneous().map(|f| f.method.as_str()).collect::<Vec<_>>(), vec!["legacy"]);
    }

    #[test]
    fn finding_display_lists_alternatives() {
        let f = Finding {
            method: s!("crop"),
            kind: FindingKind::Signature,
            value: s!("crop (int)"),
            documented: vec![s!("crop ()"), s!("crop (long)")],
        };
        let text = f.to_string();
        assert!(text.starts_with("signature mismatch: crop\n"));
        assert!(text.contains("  generated:  crop (int)\n"));
        assert!(text.contains("    crop (long)\n"));
    }
}
