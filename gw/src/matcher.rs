//! Interest predicate for changed files
//!
//! A change is interesting when it touches `<chain>/chain.json` and its diff
//! mentions one of the tracked gas price fields. The whole patch is searched,
//! unchanged context lines included.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

/// Name of the per-chain configuration file
pub const CHAIN_CONFIG_FILE: &str = "chain.json";

/// Gas price field names whose edits are reported
pub const TRACKED_FIELDS: [&str; 4] = [
    "fixed_min_gas_price",
    "low_gas_price",
    "average_gas_price",
    "high_gas_price",
];

static GAS_PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("({})", TRACKED_FIELDS.join("|"))).expect("tracked field pattern is a valid regex")
});

/// Decide whether a changed file edits a tracked gas price field
///
/// Returns the chain name (first path segment, original casing) on a match.
pub fn is_interesting_change(path: &str, diff_text: Option<&str>) -> Option<String> {
    let normalized = path.to_lowercase();
    if normalized.split('/').nth(1) != Some(CHAIN_CONFIG_FILE) {
        debug!(%path, "is_interesting_change: not a chain config file");
        return None;
    }

    let diff = match diff_text {
        Some(d) if !d.is_empty() => d,
        _ => {
            debug!(%path, "is_interesting_change: no diff text");
            return None;
        }
    };

    if !GAS_PRICE_PATTERN.is_match(diff) {
        debug!(%path, "is_interesting_change: no tracked field in diff");
        return None;
    }

    let entity = path.split('/').next().unwrap_or_default().to_string();
    debug!(%path, %entity, "is_interesting_change: matched");
    Some(entity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_other_file_in_chain_dir_ignored() {
        assert_eq!(is_interesting_change("osmosis/assetlist.json", Some("low_gas_price")), None);
    }

    #[test]
    fn test_unrelated_diff_ignored() {
        assert_eq!(is_interesting_change("osmosis/chain.json", Some("unrelated change")), None);
    }

    #[test]
    fn test_match_preserves_original_casing() {
        let diff = r#"@@ -10,3 +10,3 @@
-        "average_gas_price": 0.025,
+        "average_gas_price": 0.03,"#;
        assert_eq!(
            is_interesting_change("Osmosis/chain.json", Some(diff)),
            Some("Osmosis".to_string())
        );
    }

    #[test]
    fn test_file_name_compared_case_insensitively() {
        assert_eq!(
            is_interesting_change("juno/Chain.JSON", Some("+ \"high_gas_price\": 0.1")),
            Some("juno".to_string())
        );
    }

    #[test]
    fn test_each_tracked_field_matches() {
        for field in TRACKED_FIELDS {
            let diff = format!("+  \"{}\": 1", field);
            assert_eq!(
                is_interesting_change("cosmoshub/chain.json", Some(&diff)),
                Some("cosmoshub".to_string()),
                "field {} should match",
                field
            );
        }
    }

    #[test]
    fn test_missing_or_empty_diff_never_matches() {
        assert_eq!(is_interesting_change("cosmoshub/chain.json", None), None);
        assert_eq!(is_interesting_change("cosmoshub/chain.json", Some("")), None);
    }

    #[test]
    fn test_root_and_nested_chain_json_ignored() {
        assert_eq!(is_interesting_change("chain.json", Some("low_gas_price")), None);
        assert_eq!(
            is_interesting_change("testnets/osmosistestnet/chain.json", Some("low_gas_price")),
            None
        );
    }

    #[test]
    fn test_tracked_field_in_context_line_matches() {
        // Only the description changed; the gas price sits in an unchanged context line.
        let diff = r#"@@ -1,4 +1,4 @@
-  "pretty_name": "Osmo",
+  "pretty_name": "Osmosis",
   "fees": {
     "low_gas_price": 0.0025,"#;
        assert_eq!(
            is_interesting_change("osmosis/chain.json", Some(diff)),
            Some("osmosis".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_non_chain_json_never_matches(
            entity in "[A-Za-z0-9_-]{1,16}",
            file in "[a-z_]{1,12}\\.(json|md|yaml)",
            diff in "[a-z_ ]{0,40}",
        ) {
            prop_assume!(file != CHAIN_CONFIG_FILE);
            let path = format!("{}/{}", entity, file);
            let diff = format!("{} high_gas_price", diff);
            prop_assert_eq!(is_interesting_change(&path, Some(&diff)), None);
        }

        #[test]
        fn prop_diff_without_tracked_field_never_matches(diff in "[A-Za-z0-9 :,{}\"+-]{0,80}") {
            prop_assume!(!TRACKED_FIELDS.iter().any(|f| diff.contains(f)));
            prop_assert_eq!(is_interesting_change("osmosis/chain.json", Some(&diff)), None);
        }

        #[test]
        fn prop_tracked_field_anywhere_matches(
            entity in "[A-Za-z][A-Za-z0-9-]{0,15}",
            prefix in "[a-z ]{0,20}",
            suffix in "[a-z ]{0,20}",
            idx in 0usize..4,
        ) {
            let path = format!("{}/chain.json", entity);
            let diff = format!("{}{}{}", prefix, TRACKED_FIELDS[idx], suffix);
            prop_assert_eq!(is_interesting_change(&path, Some(&diff)), Some(entity));
        }
    }
}
