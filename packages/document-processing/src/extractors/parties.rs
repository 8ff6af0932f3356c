//! Organization name heuristics based on legal-entity suffixes.

use indexmap::IndexSet;

/// Suffixes that mark an organization name.
///
/// Matched as substrings, so `Corp` also fires inside `Corporation`.
const ENTITY_SUFFIXES: &[&str] = &["Inc", "LLC", "Corp", "Corporation", "Ltd", "Limited"];

/// Tokens kept before the suffix-bearing token.
const LEADING_TOKENS: usize = 3;

/// Extract company/party names.
///
/// For every line and every suffix present on it, the first token
/// containing the suffix plus up to three preceding tokens form a
/// candidate. Candidates are deduplicated in first-seen order.
pub fn extract_parties(text: &str) -> Vec<String> {
    let mut parties: IndexSet<String> = IndexSet::new();

    for line in text.split('\n') {
        for suffix in ENTITY_SUFFIXES {
            if !line.contains(suffix) {
                continue;
            }

            let words: Vec<&str> = line.split_whitespace().collect();
            if let Some(i) = words.iter().position(|w| w.contains(suffix)) {
                let start = i.saturating_sub(LEADING_TOKENS);
                parties.insert(words[start..=i].join(" ").trim().to_string());
            }
        }
    }

    tracing::debug!(count = parties.len(), "Extracted parties");
    parties.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_takes_three_preceding_tokens() {
        let parties = extract_parties("From: Global Solutions Inc\nTo: Acme Corp");
        assert_eq!(parties, vec!["From: Global Solutions Inc", "To: Acme Corp"]);
    }

    #[test]
    fn test_every_suffix_on_a_line_is_checked() {
        let parties =
            extract_parties("between Tech Innovations LLC and Enterprise Solutions Corp");
        assert_eq!(
            parties,
            vec!["between Tech Innovations LLC", "and Enterprise Solutions Corp"]
        );
    }

    #[test]
    fn test_corp_inside_corporation_is_deduplicated() {
        let parties = extract_parties("Signed by Northwind Trading Corporation");
        assert_eq!(parties, vec!["by Northwind Trading Corporation"]);
    }

    #[test]
    fn test_only_first_token_per_suffix() {
        let parties = extract_parties("Alpha Inc and Beta Inc");
        assert_eq!(parties, vec!["Alpha Inc"]);
    }

    #[test]
    fn test_duplicates_across_lines_keep_first_position() {
        let parties = extract_parties("Acme Ltd\nOther line\nAcme Ltd\nZeta LLC");
        assert_eq!(parties, vec!["Acme Ltd", "Zeta LLC"]);
    }

    #[test]
    fn test_suffix_match_is_case_sensitive() {
        assert!(extract_parties("acme inc and some llc").is_empty());
    }
}
