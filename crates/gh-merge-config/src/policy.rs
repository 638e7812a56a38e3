//! Run-gate policy
//!
//! Decides, from the latest commit message, whether this invocation
//! should do any work. The main purpose is to stop the helper from
//! triggering itself: its own commits carry a recognizable prefix that
//! lands on the ignore list, so the CI run they trigger exits early.

/// String-matching rules evaluated against the latest commit message.
///
/// Three independent rule lists combined by AND:
/// - `ignore_prefixes`: a message starting with any entry suppresses the
///   run outright.
/// - `run_on_prefixes`: if non-empty, at least one entry must be a
///   literal prefix of the message.
/// - `run_on_contains`: if non-empty, at least one entry must occur
///   somewhere in the message.
///
/// Blank entries (empty or whitespace-only) never match and never count
/// toward a list being "present".
#[derive(Debug, Clone, Default)]
pub struct RunPolicy {
    pub ignore_prefixes: Vec<String>,
    pub run_on_prefixes: Vec<String>,
    pub run_on_contains: Vec<String>,
}

impl RunPolicy {
    pub fn new(
        ignore_prefixes: Vec<String>,
        run_on_prefixes: Vec<String>,
        run_on_contains: Vec<String>,
    ) -> Self {
        Self {
            ignore_prefixes,
            run_on_prefixes,
            run_on_contains,
        }
    }

    /// Evaluate the policy against a commit message.
    ///
    /// Pure with respect to the message; no I/O. Prefix matching is
    /// literal (no word-boundary semantics), so `"fix:"` does not match
    /// `"fix typo"`.
    pub fn should_run(&self, message: &str) -> bool {
        for prefix in active(&self.ignore_prefixes) {
            if message.starts_with(prefix) {
                return false;
            }
        }

        // Run-on filters: if provided, they must match.
        let prefix_match = !has_active(&self.run_on_prefixes)
            || active(&self.run_on_prefixes).any(|p| message.starts_with(p));

        let contains_match = !has_active(&self.run_on_contains)
            || active(&self.run_on_contains).any(|m| message.contains(m.as_str()));

        prefix_match && contains_match
    }
}

/// Iterate the non-blank entries of a rule list
fn active(rules: &[String]) -> impl Iterator<Item = &String> {
    rules.iter().filter(|r| !r.trim().is_empty())
}

fn has_active(rules: &[String]) -> bool {
    active(rules).next().is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_policy_always_runs() {
        let policy = RunPolicy::default();
        assert!(policy.should_run("anything at all"));
        assert!(policy.should_run(""));
    }

    #[test]
    fn test_ignore_prefix_suppresses_run() {
        let policy = RunPolicy::new(strings(&["Auto Merge"]), vec![], vec![]);
        assert!(!policy.should_run("Auto Merge: regen"));
        assert!(policy.should_run("fix: something else"));
    }

    #[test]
    fn test_ignore_prefix_wins_over_run_on_rules() {
        let policy = RunPolicy::new(
            strings(&["[Auto Merge]"]),
            strings(&["[Auto Merge]"]),
            strings(&["Merge"]),
        );
        // Both run-on rules match, but the ignore rule still suppresses.
        assert!(!policy.should_run("[Auto Merge] Merge from main"));
    }

    #[test]
    fn test_blank_entries_are_inert() {
        let policy = RunPolicy::new(strings(&["", "   "]), strings(&["", " "]), strings(&[""]));
        // Blank ignore entries match nothing; blank run-on entries do not
        // make the lists "present", so both clauses stay vacuous.
        assert!(policy.should_run("whatever"));
    }

    #[test]
    fn test_run_on_prefix_is_literal() {
        let policy = RunPolicy::new(vec![], strings(&["feat:", "fix:"]), vec![]);
        // "fix:" is not a literal prefix of "fix typo".
        assert!(!policy.should_run("fix typo"));
        assert!(policy.should_run("fix: typo"));
        assert!(policy.should_run("feat: add button"));
    }

    #[test]
    fn test_run_on_contains_matches_anywhere() {
        let policy = RunPolicy::new(vec![], vec![], strings(&["[regen]"]));
        assert!(policy.should_run("chore: weekly [regen] of schemas"));
        assert!(!policy.should_run("chore: weekly rebuild of schemas"));
    }

    #[test]
    fn test_both_run_on_clauses_must_hold() {
        let policy = RunPolicy::new(vec![], strings(&["chore:"]), strings(&["[regen]"]));
        assert!(policy.should_run("chore: [regen] schemas"));
        assert!(!policy.should_run("chore: schemas"));
        assert!(!policy.should_run("feat: [regen] schemas"));
    }
}
