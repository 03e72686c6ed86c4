//! Option filtering
//!
//! Reduces the source options to the rows visible for a query. The result
//! is recomputed from scratch whenever the options or the query change.
//!
//! Matching is a case-insensitive substring test against the trimmed,
//! lowercased display label. When creation is enabled and no retained
//! option matches the query exactly, a single create row is appended.

use super::option::SelectOption;

/// Default text placed before the quoted query in the create row
pub const DEFAULT_CREATE_PREFIX: &str = "Add ";

/// One row of the visible option list
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum VisibleOption<'a> {
    /// A host-supplied option
    Option(&'a SelectOption),
    /// The synthetic "create from query" row
    Create {
        /// Display text, e.g. `Add "Cherry"`
        label: String,
        /// The raw query the row would create
        query: String,
    },
}

impl<'a> VisibleOption<'a> {
    /// Display text for this row
    pub fn label(&self) -> &str {
        match self {
            VisibleOption::Option(option) => option.display_label(),
            VisibleOption::Create { label, .. } => label,
        }
    }

    /// Option value, or `None` for the create row
    pub fn value(&self) -> Option<&'a str> {
        self.as_option().map(|option| option.value.as_str())
    }

    /// The underlying option, or `None` for the create row
    pub fn as_option(&self) -> Option<&'a SelectOption> {
        match self {
            VisibleOption::Option(option) => Some(*option),
            VisibleOption::Create { .. } => None,
        }
    }

    /// Whether the row is disabled (the create row never is)
    pub fn is_disabled(&self) -> bool {
        self.as_option().is_some_and(|o| o.disabled)
    }

    /// Whether this is the create row
    pub fn is_create(&self) -> bool {
        matches!(self, VisibleOption::Create { .. })
    }
}

/// How the filter treats a query
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FilterMode<'p> {
    /// Whether typed text narrows the list at all
    pub filtering: bool,
    /// Prefix for the create row; `None` disables creation
    pub create_prefix: Option<&'p str>,
}

impl<'p> FilterMode<'p> {
    /// Plain dropdown: the query is ignored
    pub fn browsing() -> Self {
        Self::default()
    }

    /// Autocomplete without creation
    pub fn autocomplete() -> Self {
        Self {
            filtering: true,
            create_prefix: None,
        }
    }

    /// Autocomplete with a create row using `prefix`
    pub fn createable(prefix: &'p str) -> Self {
        Self {
            filtering: true,
            create_prefix: Some(prefix),
        }
    }
}

/// Output of [`filter_options`]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterResult<'a> {
    /// Visible rows in source order, create row last
    pub rows: Vec<VisibleOption<'a>>,
    /// Whether a retained option's label equals the query exactly
    pub exact_match: bool,
}

/// Compute the visible rows for `query`
pub fn filter_options<'a>(
    options: &'a [SelectOption],
    query: &str,
    mode: FilterMode<'_>,
) -> FilterResult<'a> {
    if !mode.filtering || query.is_empty() {
        return FilterResult {
            rows: options.iter().map(VisibleOption::Option).collect(),
            exact_match: false,
        };
    }

    let search_term = query.trim().to_lowercase();
    let mut result = FilterResult::default();

    for option in options {
        let label = option.display_label().trim().to_lowercase();
        if label.contains(&search_term) {
            result.rows.push(VisibleOption::Option(option));
            if label == search_term {
                result.exact_match = true;
            }
        }
    }

    if let Some(prefix) = mode.create_prefix {
        if !result.exact_match {
            result.rows.push(VisibleOption::Create {
                label: format!("{}\"{}\"", prefix, query),
                query: query.to_string(),
            });
        }
    }

    tracing::trace!(
        query,
        visible = result.rows.len(),
        exact_match = result.exact_match,
        "filtered options"
    );
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<SelectOption> {
        vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
            SelectOption::new("c", "  Cantaloupe "),
            SelectOption::new("g", "Grape").disabled(),
        ]
    }

    fn values<'a>(result: &FilterResult<'a>) -> Vec<Option<&'a str>> {
        result.rows.iter().map(|row| row.value()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let options = fruits();
        let result = filter_options(&options, "", FilterMode::createable("Add "));
        assert_eq!(values(&result), vec![Some("a"), Some("b"), Some("c"), Some("g")]);
        assert!(!result.exact_match);
    }

    #[test]
    fn test_browsing_ignores_query() {
        let options = fruits();
        let result = filter_options(&options, "zzz", FilterMode::browsing());
        assert_eq!(result.rows.len(), options.len());
    }

    #[test]
    fn test_substring_match_is_case_insensitive() {
        let options = fruits();
        let result = filter_options(&options, "AN", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("b"), Some("c")]);

        let result = filter_options(&options, "rap", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("g")]);
    }

    #[test]
    fn test_an_matches_banana_only() {
        let options = vec![
            SelectOption::new("a", "Apple"),
            SelectOption::new("b", "Banana"),
        ];
        let result = filter_options(&options, "an", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("b")]);

        let result = filter_options(&options, "pl", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("a")]);
    }

    #[test]
    fn test_query_is_trimmed_for_matching() {
        let options = fruits();
        let result = filter_options(&options, "  apple ", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("a")]);
        assert!(result.exact_match);
    }

    #[test]
    fn test_unlabeled_options_match_on_value() {
        let options = vec![SelectOption::unlabeled("kiwi"), SelectOption::new("m", "Mango")];
        let result = filter_options(&options, "KI", FilterMode::autocomplete());
        assert_eq!(values(&result), vec![Some("kiwi")]);
    }

    #[test]
    fn test_create_row_appended_without_exact_match() {
        let options = fruits();
        let result = filter_options(&options, "Cherry", FilterMode::createable("Add "));
        assert_eq!(result.rows.len(), 1);
        assert_eq!(
            result.rows[0],
            VisibleOption::Create {
                label: "Add \"Cherry\"".to_string(),
                query: "Cherry".to_string(),
            }
        );
        assert!(result.rows[0].is_create());
        assert!(!result.rows[0].is_disabled());
        assert_eq!(result.rows[0].value(), None);
    }

    #[test]
    fn test_create_row_suppressed_by_exact_match() {
        let options = fruits();
        let result = filter_options(&options, "banana", FilterMode::createable("Add "));
        assert_eq!(values(&result), vec![Some("b")]);
        assert!(result.exact_match);
    }

    #[test]
    fn test_create_row_keeps_raw_query() {
        let options = fruits();
        let result = filter_options(&options, " Fig ", FilterMode::createable("New: "));
        let create = result.rows.last().unwrap();
        assert_eq!(create.label(), "New: \" Fig \"");
        assert_eq!(
            create,
            &VisibleOption::Create {
                label: "New: \" Fig \"".to_string(),
                query: " Fig ".to_string(),
            }
        );
    }

    #[test]
    fn test_autocomplete_without_create_can_be_empty() {
        let options = fruits();
        let result = filter_options(&options, "xyz", FilterMode::autocomplete());
        assert!(result.rows.is_empty());
    }

    #[test]
    fn test_retained_and_excluded_partition() {
        let options = fruits();
        for query in ["a", "an", "e", "ap", "q", "grape"] {
            let result = filter_options(&options, query, FilterMode::autocomplete());
            let needle = query.to_lowercase();
            for option in &options {
                let retained = result.rows.iter().any(|row| row.as_option() == Some(option));
                let contains = option.display_label().to_lowercase().contains(&needle);
                assert_eq!(retained, contains, "query {:?} option {:?}", query, option.value);
            }
        }
    }
}
