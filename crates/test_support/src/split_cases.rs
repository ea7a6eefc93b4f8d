use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const SPLIT_CASES_FORMAT_V1: &str = "richinput-split-v1";

#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum CaseStatus {
    #[default]
    Active,
    Skip,
}

/// One golden splitter case.
///
/// `pattern` is the style pattern source; a missing pattern means "no style
/// pattern", and `invalid = true` documents a source that must fail to
/// compile (and therefore render unhighlighted).
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SplitCase {
    pub id: String,
    pub value: String,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub invalid: bool,
    pub expected: Vec<String>,
    #[serde(default)]
    pub markup: Option<String>,
    #[serde(default)]
    pub status: CaseStatus,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Clone, Debug, Deserialize)]
struct SplitManifest {
    format: String,
    #[serde(rename = "case")]
    cases: Vec<SplitCase>,
}

pub fn load_split_cases(path: &Path) -> Vec<SplitCase> {
    let content = fs::read_to_string(path)
        .unwrap_or_else(|err| panic!("failed to read split cases {path:?}: {err}"));
    let manifest: SplitManifest = toml::from_str(&content)
        .unwrap_or_else(|err| panic!("failed to parse split cases {path:?}: {err}"));
    assert_eq!(
        manifest.format, SPLIT_CASES_FORMAT_V1,
        "unsupported split case format in {path:?}"
    );

    let mut seen = std::collections::BTreeSet::new();
    for case in &manifest.cases {
        assert!(
            seen.insert(case.id.as_str()),
            "duplicate split case id '{}' in {path:?}",
            case.id
        );
        if case.status == CaseStatus::Skip {
            assert!(
                case.reason.as_deref().is_some_and(|r| !r.trim().is_empty()),
                "skipped split case '{}' needs a reason in {path:?}",
                case.id
            );
        }
    }
    manifest.cases
}

/// Restrict cases to the id named by `RICHINPUT_SPLIT_CASE`, if set.
pub fn filter_cases(cases: Vec<SplitCase>) -> Vec<SplitCase> {
    match std::env::var("RICHINPUT_SPLIT_CASE") {
        Ok(id) if !id.trim().is_empty() => {
            let id = id.trim();
            let filtered: Vec<_> = cases.into_iter().filter(|c| c.id == id).collect();
            assert!(!filtered.is_empty(), "RICHINPUT_SPLIT_CASE '{id}' matched no case");
            filtered
        }
        _ => cases,
    }
}
