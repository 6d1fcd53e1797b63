use crate::compatibility::domain::Policy;

/// Result of matching requested policy names against the fleet's policies
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyNameMatch {
    /// Identifiers of every policy whose name was requested, without duplicates
    pub policy_ids: Vec<String>,
    /// Requested names no policy carries
    pub unmatched_names: Vec<String>,
}

/// Maps policy names (case-sensitive, exact) to policy identifiers.
///
/// Several policies may share a name; all of their identifiers are returned.
pub fn match_policy_names(policies: &[Policy], names: &[String]) -> PolicyNameMatch {
    let mut result = PolicyNameMatch::default();

    for name in names {
        let mut found = false;
        for policy in policies.iter().filter(|p| &p.name == name) {
            found = true;
            if !result.policy_ids.contains(&policy.id) {
                result.policy_ids.push(policy.id.clone());
            }
        }

        if !found && !result.unmatched_names.contains(name) {
            result.unmatched_names.push(name.clone());
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn policies() -> Vec<Policy> {
        vec![
            Policy::new("p-1", "Staff"),
            Policy::new("p-2", "Lab"),
            Policy::new("p-3", "Staff"),
        ]
    }

    #[test]
    fn test_match_collects_all_ids_for_name() {
        let result = match_policy_names(&policies(), &["Staff".to_string()]);
        assert_eq!(result.policy_ids, vec!["p-1", "p-3"]);
        assert!(result.unmatched_names.is_empty());
    }

    #[test]
    fn test_match_is_case_sensitive() {
        let result = match_policy_names(&policies(), &["staff".to_string(), "Lab".to_string()]);
        assert_eq!(result.policy_ids, vec!["p-2"]);
        assert_eq!(result.unmatched_names, vec!["staff"]);
    }

    #[test]
    fn test_duplicate_names_do_not_duplicate_ids() {
        let result = match_policy_names(&policies(), &["Lab".to_string(), "Lab".to_string()]);
        assert_eq!(result.policy_ids, vec!["p-2"]);
    }

    #[test]
    fn test_no_matches() {
        let result = match_policy_names(&[], &["Staff".to_string()]);
        assert!(result.policy_ids.is_empty());
        assert_eq!(result.unmatched_names, vec!["Staff"]);
    }
}
