// tests/fixtures_check.rs
//
// Extract both sample pages and run the comparison without the CLI.
//
use doc_sigcheck::compare::{compare, FindingKind};
use doc_sigcheck::specs::{generated, manual};
use indoc::indoc;
use pretty_assertions::assert_eq;

const MANUAL: &str = include_str!("fixtures/manual_image.html");
const GENERATED: &str = include_str!("fixtures/generated_image.html");

#[test]
fn manual_fixture_extracts_every_method() {
    let map = manual::extract(MANUAL);
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["columns", "crop", "fileName", "legacyDraw", "resize"]
    );
    assert_eq!(
        map["crop"].signatures.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["crop (const Geometry& geometry_)", "crop (size_t width_, size_t height_)"]
    );
    assert_eq!(
        map["fileName"].returns.iter().map(String::as_str).collect::<Vec<_>>(),
        vec!["stdstring", "void"]
    );
}

#[test]
fn generated_fixture_extracts_declarations() {
    let map = generated::extract(GENERATED);
    assert_eq!(
        map.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["columns", "crop", "fileName", "resize"]
    );
    assert!(map["columns"].signatures.contains("columns (void)"));
    assert!(map["fileName"].signatures.contains("fileName ()"));
}

#[test]
fn fixtures_agree() {
    let verdict = compare(&generated::extract(GENERATED), &manual::extract(MANUAL), None);
    assert!(verdict.passed, "unexpected findings: {:#?}", verdict.findings);
    assert_eq!(verdict.checked, 4);
    assert_eq!(verdict.extraneous().map(|f| f.method.as_str()).collect::<Vec<_>>(), vec!["legacyDraw"]);
}

#[test]
fn drift_is_reported() {
    let drifted = GENERATED
        .replace("<td>size_t&#160;</td>", "<td>ssize_t&#160;</td>")
        .replace("(size_t width_, size_t height_)", "(size_t width_, size_t height_, bool flag_)");
    let extra = indoc! {r##"
        <table class="memberdecls">
        <tr><td>void&#160;</td><td><a class="el" href="#a9">rotate</a> (double degrees_)</td></tr>
        </table>
    "##};
    let drifted = drifted.replace("</body>", &format!("{extra}</body>"));

    let verdict = compare(&generated::extract(&drifted), &manual::extract(MANUAL), None);
    assert!(!verdict.passed);

    let got: Vec<(&str, FindingKind, &str)> = verdict
        .failures()
        .map(|f| (f.method.as_str(), f.kind, f.value.as_str()))
        .collect();
    assert_eq!(got, vec![
        ("columns", FindingKind::ReturnType, "ssize_t"),
        ("crop", FindingKind::Signature, "crop (size_t width_, size_t height_, bool flag_)"),
        ("rotate", FindingKind::Undocumented, ""),
    ]);

    let columns = verdict.failures().next().unwrap();
    assert_eq!(columns.documented, vec!["size_t".to_string()]);
}

#[test]
fn header_variant_with_sparse_rows() {
    let doc = indoc! {r#"
        <table>
        <tr><th>Method</th><th>Return Type</th><th>Signature(s)</th><th>Description</th></tr>
        <tr><td>quantize</td><td>void</td><td>bool measureError_ = false</td><td>Quantize</td></tr>
        <tr><td>bool measureError_, size_t colors_</td><td>With a color count</td></tr>
        <tr><td>Image</td><td>const Image &amp;ref_</td><td>From a reference image</td>
        </table>
    "#};
    let map = manual::extract(doc);
    let sigs: Vec<&str> = map["quantize"].signatures.iter().map(String::as_str).collect();
    assert_eq!(sigs, vec![
        "quantize (bool measureError_ = false)",
        "quantize (bool measureError_, size_t colors_)",
        "quantize (const Image& ref_)",
    ]);
    let rets: Vec<&str> = map["quantize"].returns.iter().map(String::as_str).collect();
    assert_eq!(rets, vec!["Image", "void"]);
}
