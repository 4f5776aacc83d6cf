use std::collections::HashSet;

// Terminal spellings appear in the grammar as single-quoted words,
// e.g. `copy_from_stmt ::= 'COPY' table_name 'FROM' 'STDIN'`.
pub fn scan_quoted_literals(source: &str) -> Vec<String> {
    let mut literals = vec![];
    let mut seen = HashSet::new();

    for line in source.lines() {
        for word in line.split(' ') {
            let word = word.trim();

            if let Some(literal) = quoted_literal(word) {
                let literal = literal.to_string();
                if seen.insert(literal.clone()) {
                    literals.push(literal);
                }
            }
        }
    }

    literals
}

fn quoted_literal(word: &str) -> Option<&str> {
    if word.chars().count() > 1 && word.starts_with('\'') && word.ends_with('\'') {
        Some(&word[1..word.len() - 1])
    } else {
        None
    }
}

#[cfg(test)]
mod scan_tests {
    use super::*;

    #[test]
    fn test_literals_in_discovery_order() {
        let source = "stmt : 'SELECT' expr 'FROM' table ;";
        assert_eq!(vec!["SELECT", "FROM"], scan_quoted_literals(&source));
    }

    #[test]
    fn test_duplicates_collapse_to_first_occurrence() {
        let source = "a : 'SELECT' b ;\nc : 'FROM' d 'SELECT' ;\ne : 'FROM' ;";
        assert_eq!(vec!["SELECT", "FROM"], scan_quoted_literals(&source));
    }

    #[test]
    fn test_runs_of_spaces_are_harmless() {
        let source = "a  :   'COPY'    b";
        assert_eq!(vec!["COPY"], scan_quoted_literals(&source));
    }

    #[test]
    fn test_unquoted_and_half_quoted_words_are_skipped() {
        let source = "expr : ident 'ON 42 AND' ;";
        assert_eq!(Vec::<String>::new(), scan_quoted_literals(&source));
    }

    #[test]
    fn test_lone_quote_is_not_a_literal() {
        let source = "a : ' b";
        assert_eq!(Vec::<String>::new(), scan_quoted_literals(&source));
    }

    #[test]
    fn test_empty_source_yields_nothing() {
        assert_eq!(Vec::<String>::new(), scan_quoted_literals(""));
    }

    #[test]
    fn test_bare_quote_pair_yields_empty_literal() {
        let source = "a : '' b";
        assert_eq!(vec![""], scan_quoted_literals(&source));
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed_per_word() {
        let source = "a : 'WITH'\t b\nc : 'WITH'";
        assert_eq!(vec!["WITH"], scan_quoted_literals(&source));
    }
}
