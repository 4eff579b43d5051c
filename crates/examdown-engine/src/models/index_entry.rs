use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// A JSON value that may arrive either as a number or as a string.
///
/// Years and problem numbers are written both ways in hand-maintained
/// indexes; the original form is kept so it serialises back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Text(String),
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Int(n) => write!(f, "{n}"),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

/// One entry of `index.json`: a problem or a solution document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexEntry {
    pub uid: String,
    pub subject_category: String,
    /// Directory name of the source under `<data>/<subject>/`.
    pub filename: String,
    #[serde(default)]
    pub school: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<Scalar>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub number: Option<Scalar>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub is_solution: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem_uid: Option<String>,
    /// Fields this tool does not interpret; carried through to the hub data.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl IndexEntry {
    /// Card label: `"<type> <number>"` with missing parts dropped.
    pub fn label(&self) -> String {
        let kind = self.kind.as_deref().unwrap_or("");
        let number = self.number.as_ref().map(|n| n.to_string()).unwrap_or_default();
        format!("{kind} {number}").trim().to_string()
    }

    /// The uid shown in the page footer: a solution shows its problem's uid.
    pub fn footer_uid(&self) -> &str {
        match (&self.problem_uid, self.is_solution) {
            (Some(problem_uid), true) => problem_uid,
            _ => &self.uid,
        }
    }
}
