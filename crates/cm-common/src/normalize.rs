use once_cell::sync::Lazy;
use regex::Regex;

static RE_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

static RE_STEWARDESS: Lazy<Regex> = Lazy::new(|| Regex::new(r"stewardess(es)?").unwrap());

/// Normalize a job title or position name for containment matching.
///
/// Contract:
/// 1. lowercase and trim
/// 2. collapse internal whitespace runs to a single space
/// 3. fold the `stewardess` spelling onto `stew` so interior titles written
///    either way land on the same token
/// 4. empty input stays empty
pub fn normalize_position(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();
    if lowered.is_empty() {
        return String::new();
    }

    let collapsed = RE_WHITESPACE.replace_all(&lowered, " ");
    RE_STEWARDESS.replace_all(&collapsed, "stew").into_owned()
}

/// Normalize a list of position names into a de-duplicated set, dropping
/// entries that normalize to empty.
pub fn normalize_position_set<I, S>(positions: I) -> std::collections::HashSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    positions
        .into_iter()
        .map(|p| normalize_position(p.as_ref()))
        .filter(|p| !p.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercases_trims_and_collapses() {
        assert_eq!(normalize_position("  Chief   Engineer "), "chief engineer");
        assert_eq!(normalize_position("DECKHAND"), "deckhand");
        assert_eq!(normalize_position("Sous\tChef"), "sous chef");
    }

    #[test]
    fn folds_stewardess_onto_stew() {
        assert_eq!(normalize_position("Chief Stewardess"), "chief stew");
        assert_eq!(normalize_position("Stewardess"), "stew");
        assert_eq!(normalize_position("2nd Stew"), "2nd stew");
        assert_eq!(normalize_position("Stewardesses"), "stew");
    }

    #[test]
    fn empty_and_blank_stay_empty() {
        assert_eq!(normalize_position(""), "");
        assert_eq!(normalize_position("   "), "");
    }

    #[test]
    fn set_deduplicates_across_spellings() {
        let set = normalize_position_set(["Stewardess", "stew", "  STEW "]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("stew"));
    }

    #[test]
    fn set_drops_blank_entries() {
        let set = normalize_position_set(["", "  ", "Deckhand"]);
        assert_eq!(set.len(), 1);
        assert!(set.contains("deckhand"));
    }
}
