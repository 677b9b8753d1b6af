//! Choosing and ordering the columns of the table.
//!
//! Only one-dimensional entries with at least two elements can become
//! columns. Of those, ignored entries are always dropped, even when they are
//! also requested as columns. When columns are requested explicitly they are
//! matched by full path first, then by leaf name, and appear in the order of
//! the request; otherwise every remaining entry is used in path order.

use crate::catalog::{Catalog, CatalogEntry};
use crate::diagnostics::{Diagnostics, Notice, SkipReason};

/// A numeric sequence chosen to become a column.
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub name: String,
    pub path: String,
    pub values: Vec<f64>,
    /// Position of the column; lower comes first.
    pub order_key: usize,
}

impl Series {
    fn from_entry(entry: &CatalogEntry, order_key: usize) -> Self {
        Series {
            name: entry.name.clone(),
            path: entry.path.clone(),
            values: entry.values.clone(),
            order_key,
        }
    }

    /// Header label: the leaf name, or the full path when `full_name`.
    pub fn label(&self, full_name: bool) -> &str {
        if full_name {
            &self.path
        } else {
            &self.name
        }
    }
}

/// Which entries to ignore and which to keep.
///
/// Tokens are either a full path (`/b/c`) or a leaf name (`c`).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    pub ignore: Vec<String>,
    /// Requested columns in order. Empty selects everything.
    pub columns: Vec<String>,
}

impl Selection {
    pub fn new(ignore: Vec<String>, columns: Vec<String>) -> Self {
        Selection { ignore, columns }
    }

    /// Build from comma-separated lists as given on the command line.
    ///
    /// ```
    /// use h5table::Selection;
    ///
    /// let sel = Selection::from_lists(Some("/a, tmp"), Some("c,a"));
    /// assert_eq!(sel.ignore, ["/a", "tmp"]);
    /// assert_eq!(sel.columns, ["c", "a"]);
    /// ```
    pub fn from_lists(ignore: Option<&str>, columns: Option<&str>) -> Self {
        Selection {
            ignore: ignore.map(split_list).unwrap_or_default(),
            columns: columns.map(split_list).unwrap_or_default(),
        }
    }

    fn is_ignored(&self, entry: &CatalogEntry) -> bool {
        self.ignore
            .iter()
            .any(|token| *token == entry.name || *token == entry.path)
    }

    /// Index of the requested column that `entry` answers to.
    fn column_index(&self, entry: &CatalogEntry) -> Option<usize> {
        self.columns
            .iter()
            .position(|token| *token == entry.path)
            .or_else(|| self.columns.iter().position(|token| *token == entry.name))
    }
}

/// Split a comma-separated list, trimming blanks and dropping empty items.
pub fn split_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Select and order the series that become table columns.
pub fn select(
    catalog: &Catalog,
    selection: &Selection,
    diagnostics: &mut Diagnostics,
) -> Vec<Series> {
    let mut retained: Vec<&CatalogEntry> = Vec::new();
    for entry in catalog.entries() {
        if entry.ndim() != 1 {
            diagnostics.skip(&entry.path, SkipReason::Dimension(entry.ndim()));
        } else if entry.size() <= 1 {
            diagnostics.skip(&entry.path, SkipReason::Size(entry.size()));
        } else if selection.is_ignored(entry) {
            diagnostics.skip(&entry.path, SkipReason::Ignored);
        } else {
            retained.push(entry);
        }
    }

    let mut series = if selection.columns.is_empty() {
        retained.sort_by(|a, b| a.path.cmp(&b.path));
        retained
            .iter()
            .enumerate()
            .map(|(key, entry)| Series::from_entry(entry, key))
            .collect::<Vec<_>>()
    } else {
        let mut matched = vec![false; selection.columns.len()];
        let mut chosen = Vec::with_capacity(retained.len());
        for entry in retained {
            match selection.column_index(entry) {
                Some(key) => {
                    matched[key] = true;
                    chosen.push(Series::from_entry(entry, key));
                }
                None => diagnostics.skip(&entry.path, SkipReason::NotInColumns),
            }
        }
        for (token, hit) in selection.columns.iter().zip(matched) {
            if !hit {
                diagnostics.record(Notice::UnmatchedColumn {
                    token: token.clone(),
                });
            }
        }
        chosen
    };

    series.sort_by(|a, b| a.order_key.cmp(&b.order_key).then_with(|| a.path.cmp(&b.path)));
    tracing::debug!(columns = series.len(), "series selected");
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::from_entries(vec![
            CatalogEntry::new("/b/c", vec![4.0, 5.0]),
            CatalogEntry::new("/a", vec![1.0, 2.0, 3.0]),
            CatalogEntry::with_shape("/grid", vec![2, 2], vec![1.0, 2.0, 3.0, 4.0]),
            CatalogEntry::with_shape("/dt", vec![], vec![0.1]),
            CatalogEntry::new("/one", vec![9.0]),
        ])
    }

    fn paths(series: &[Series]) -> Vec<&str> {
        series.iter().map(|s| s.path.as_str()).collect()
    }

    #[test]
    fn split_list_trims_and_drops_blanks() {
        assert_eq!(split_list(" a, /b/c ,,"), vec!["a", "/b/c"]);
        assert!(split_list("").is_empty());
    }

    #[test]
    fn default_order_is_by_path() {
        let mut diag = Diagnostics::silent();
        let series = select(&catalog(), &Selection::default(), &mut diag);

        assert_eq!(paths(&series), vec!["/a", "/b/c"]);
        assert_eq!(series[0].order_key, 0);
        assert_eq!(series[1].order_key, 1);
    }

    #[test]
    fn shape_filters_report_reasons() {
        let mut diag = Diagnostics::silent();
        select(&catalog(), &Selection::default(), &mut diag);

        let skipped: Vec<_> = diag.skipped().collect();
        assert!(skipped.contains(&("/grid", &SkipReason::Dimension(2))));
        assert!(skipped.contains(&("/dt", &SkipReason::Dimension(0))));
        assert!(skipped.contains(&("/one", &SkipReason::Size(1))));
        assert_eq!(skipped.len(), 3);
    }

    #[test]
    fn ignore_by_path_or_name() {
        let mut diag = Diagnostics::silent();
        let by_path = select(&catalog(), &Selection::from_lists(Some("/a"), None), &mut diag);
        assert_eq!(paths(&by_path), vec!["/b/c"]);

        let by_name = select(
            &catalog(),
            &Selection::from_lists(Some("c"), None),
            &mut Diagnostics::silent(),
        );
        assert_eq!(paths(&by_name), vec!["/a"]);
        assert!(diag.skipped().any(|(p, r)| p == "/a" && *r == SkipReason::Ignored));
    }

    #[test]
    fn ignore_wins_over_columns() {
        let selection = Selection::from_lists(Some("a"), Some("a,c"));
        let series = select(&catalog(), &selection, &mut Diagnostics::silent());
        assert_eq!(paths(&series), vec!["/b/c"]);
    }

    #[test]
    fn explicit_columns_follow_request_order() {
        let mut diag = Diagnostics::silent();
        let series = select(&catalog(), &Selection::from_lists(None, Some("c,/a")), &mut diag);

        assert_eq!(paths(&series), vec!["/b/c", "/a"]);
        assert_eq!(series[0].order_key, 0);
        assert_eq!(series[1].order_key, 1);
        assert!(diag.notices().iter().all(|n| !matches!(n, Notice::UnmatchedColumn { .. })));
    }

    #[test]
    fn unrequested_entries_are_skipped() {
        let mut diag = Diagnostics::silent();
        let series = select(&catalog(), &Selection::from_lists(None, Some("a")), &mut diag);

        assert_eq!(paths(&series), vec!["/a"]);
        assert!(diag
            .skipped()
            .any(|(p, r)| p == "/b/c" && *r == SkipReason::NotInColumns));
    }

    #[test]
    fn path_match_takes_precedence_over_name() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("/x/a", vec![1.0, 2.0]),
            CatalogEntry::new("/a", vec![3.0, 4.0]),
        ]);
        // "a" also names "/x/a", but the path token claims it first.
        let series = select(
            &catalog,
            &Selection::from_lists(None, Some("a,/x/a")),
            &mut Diagnostics::silent(),
        );
        assert_eq!(paths(&series), vec!["/a", "/x/a"]);
        assert_eq!(series[0].order_key, 0);
        assert_eq!(series[1].order_key, 1);
    }

    #[test]
    fn name_shared_by_several_entries_sorts_by_path() {
        let catalog = Catalog::from_entries(vec![
            CatalogEntry::new("/run2/t", vec![1.0, 2.0]),
            CatalogEntry::new("/run1/t", vec![3.0, 4.0]),
        ]);
        let series = select(
            &catalog,
            &Selection::from_lists(None, Some("t")),
            &mut Diagnostics::silent(),
        );
        assert_eq!(paths(&series), vec!["/run1/t", "/run2/t"]);
        assert!(series.iter().all(|s| s.order_key == 0));
    }

    #[test]
    fn unmatched_columns_are_reported() {
        let mut diag = Diagnostics::silent();
        let series = select(
            &catalog(),
            &Selection::from_lists(None, Some("a,missing,grid")),
            &mut diag,
        );

        assert_eq!(paths(&series), vec!["/a"]);
        let unmatched: Vec<_> = diag
            .notices()
            .iter()
            .filter_map(|n| match n {
                Notice::UnmatchedColumn { token } => Some(token.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(unmatched, vec!["missing", "grid"]);
    }

    #[test]
    fn empty_result_is_not_an_error() {
        let series = select(
            &Catalog::default(),
            &Selection::default(),
            &mut Diagnostics::silent(),
        );
        assert!(series.is_empty());
    }

    #[test]
    fn label_uses_name_or_path() {
        let s = Series::from_entry(&CatalogEntry::new("/b/c", vec![1.0, 2.0]), 0);
        assert_eq!(s.label(false), "c");
        assert_eq!(s.label(true), "/b/c");
    }
}
