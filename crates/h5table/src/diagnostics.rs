//! Non-fatal notices collected while converting.
//!
//! Every stage receives a `&mut Diagnostics` and records what it skipped and
//! why. The sink always keeps the notices; when it is enabled (`--verbose`) it
//! also emits each one through `tracing` as it is recorded. Stages never look
//! at global state to decide whether to report.

use std::fmt;
use std::path::PathBuf;

/// Why a catalog entry did not become a column.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry does not have exactly one dimension.
    Dimension(usize),
    /// The entry has one dimension but at most one element.
    Size(usize),
    /// The entry's name or path is in the ignore list.
    Ignored,
    /// An explicit column list was given and the entry is not in it.
    NotInColumns,
}

/// A single diagnostic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// A container node that is neither numeric data nor a group.
    UnsupportedNode { path: String, kind: String },
    /// A catalog entry excluded from the table.
    Skipped { path: String, reason: SkipReason },
    /// A requested column token that matched no data.
    UnmatchedColumn { token: String },
    /// Nothing was selected, so nothing is written.
    EmptyResult,
    /// The table was written to a file.
    Written { path: PathBuf },
}

impl Notice {
    /// Short machine-friendly label, used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            Notice::UnsupportedNode { .. } => "unsupported",
            Notice::Skipped { .. } => "skipped",
            Notice::UnmatchedColumn { .. } => "unmatched",
            Notice::EmptyResult => "empty",
            Notice::Written { .. } => "written",
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::UnsupportedNode { path, kind } => {
                write!(f, "cannot parse {path} of type {kind}")
            }
            Notice::Skipped { path, reason } => match reason {
                SkipReason::Dimension(ndim) => {
                    write!(f, "ignore data {path} with dimension {ndim} unequal 1")
                }
                SkipReason::Size(size) => write!(f, "ignore data {path} with size {size}"),
                SkipReason::Ignored => write!(f, "ignore data {path}"),
                SkipReason::NotInColumns => {
                    write!(f, "ignore data {path} which was not specified in columns")
                }
            },
            Notice::UnmatchedColumn { token } => {
                write!(f, "column {token} does not match any data")
            }
            Notice::EmptyResult => write!(f, "exit because table has no entries"),
            Notice::Written { path } => write!(f, "write to file {}", path.display()),
        }
    }
}

/// Sink for [`Notice`]s, enabled or disabled once at start-up.
#[derive(Clone, Debug, Default)]
pub struct Diagnostics {
    enabled: bool,
    notices: Vec<Notice>,
}

impl Diagnostics {
    /// Create a sink. When `enabled`, notices are also logged as they arrive.
    pub fn new(enabled: bool) -> Self {
        Diagnostics {
            enabled,
            notices: Vec::new(),
        }
    }

    /// A sink that only collects.
    pub fn silent() -> Self {
        Self::new(false)
    }

    /// Whether notices are logged.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Record a notice.
    pub fn record(&mut self, notice: Notice) {
        if self.enabled {
            tracing::info!(kind = notice.kind(), "{notice}");
        }
        self.notices.push(notice);
    }

    /// Shorthand for recording a skipped entry.
    pub fn skip(&mut self, path: impl Into<String>, reason: SkipReason) {
        self.record(Notice::Skipped {
            path: path.into(),
            reason,
        });
    }

    /// All notices in the order they were recorded.
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Paths of skipped entries with their reasons.
    pub fn skipped(&self) -> impl Iterator<Item = (&str, &SkipReason)> {
        self.notices.iter().filter_map(|n| match n {
            Notice::Skipped { path, reason } => Some((path.as_str(), reason)),
            _ => None,
        })
    }

    /// Number of recorded notices.
    pub fn len(&self) -> usize {
        self.notices.len()
    }

    /// True when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.notices.is_empty()
    }
}
