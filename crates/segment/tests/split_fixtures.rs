use segment::{StylePattern, render_markup, split};
use std::path::PathBuf;
use test_support::diff_lines;
use test_support::split_cases::{CaseStatus, filter_cases, load_split_cases};
use test_support::split_snapshot::{check_split_laws, format_segments};

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/split_cases.toml")
}

#[test]
fn golden_split_cases() {
    let cases = filter_cases(load_split_cases(&fixtures_path()));
    assert!(!cases.is_empty(), "no split cases loaded");

    let mut failures = Vec::new();
    let mut ran = 0usize;

    for case in &cases {
        if case.status == CaseStatus::Skip {
            continue;
        }
        ran += 1;

        let pattern = case.pattern.as_deref().and_then(StylePattern::try_compile);
        if case.invalid != (case.pattern.is_some() && pattern.is_none()) {
            failures.push(format!(
                "case '{}': expected invalid={} for pattern {:?}",
                case.id, case.invalid, case.pattern
            ));
            continue;
        }

        let segments = split(&case.value, pattern.as_ref());
        if let Err(err) = check_split_laws(&case.value, &segments) {
            failures.push(format!("case '{}': {err}", case.id));
            continue;
        }

        let actual = format_segments(&segments);
        if actual != case.expected {
            failures.push(format!(
                "case '{}':\n{}",
                case.id,
                diff_lines(&case.expected, &actual)
            ));
            continue;
        }

        if let Some(expected_markup) = &case.markup {
            let markup = render_markup(&segments);
            if &markup != expected_markup {
                failures.push(format!(
                    "case '{}': markup mismatch\n  expected: {expected_markup}\n    actual: {markup}",
                    case.id
                ));
            }
        }
    }

    assert!(ran > 0, "every split case was skipped");
    assert!(
        failures.is_empty(),
        "{} of {ran} split cases failed:\n{}",
        failures.len(),
        failures.join("\n")
    );
}
