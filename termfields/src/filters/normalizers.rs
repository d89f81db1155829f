//! Normalization for taxonomy context handed to the filter entry points.

/// Splits a preformatted taxonomy list into candidate names.
///
/// Hosts format multi-taxonomy context as `"'tax_a', 'tax_b'"`: entries
/// joined with a comma and a space, each optionally wrapped in single
/// quotes. Quotes are stripped before splitting, so a bare single name
/// comes through as itself.
pub fn split_taxonomy_list(raw: &str) -> Vec<String> {
    raw.replace('\'', "")
        .split(", ")
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_quoted_list() {
        assert_eq!(split_taxonomy_list("'genre', 'mood'"), vec!["genre", "mood"]);
    }

    #[test]
    fn bare_name_passes_through() {
        assert_eq!(split_taxonomy_list("genre"), vec!["genre"]);
    }

    #[test]
    fn unquoted_list_splits_too() {
        assert_eq!(split_taxonomy_list("genre, mood"), vec!["genre", "mood"]);
    }

    #[test]
    fn comma_without_space_is_one_candidate() {
        assert_eq!(split_taxonomy_list("genre,mood"), vec!["genre,mood"]);
    }
}
