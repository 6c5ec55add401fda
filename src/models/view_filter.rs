//! View filters: named predicates used to show or hide staves
//!
//! A filter with no rules accepts every staff. Otherwise a staff is shown
//! when some player active on it within the system satisfies every rule.

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::player::Player;
use super::score::Score;
use super::score_utils;

/// Comparison used by numeric rules
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Equal,
    NotEqual,
    LessThan,
    LessThanEqual,
    GreaterThan,
    GreaterThanEqual,
}

impl Operation {
    pub fn compare(&self, lhs: i32, rhs: i32) -> bool {
        match self {
            Operation::Equal => lhs == rhs,
            Operation::NotEqual => lhs != rhs,
            Operation::LessThan => lhs < rhs,
            Operation::LessThanEqual => lhs <= rhs,
            Operation::GreaterThan => lhs > rhs,
            Operation::GreaterThanEqual => lhs >= rhs,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subject {
    NumStrings,
    PlayerName,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub enum FilterRule {
    /// Compare the player's string count against a threshold
    NumStrings { operation: Operation, value: i32 },
    /// Match the player's description against a regular expression
    PlayerName { pattern: String },
}

impl FilterRule {
    pub fn num_strings(operation: Operation, value: i32) -> Self {
        FilterRule::NumStrings { operation, value }
    }

    /// Player-name rule, failing when the pattern is not a valid regex
    pub fn player_name(pattern: impl Into<String>) -> Result<Self, regex::Error> {
        let pattern = pattern.into();
        Regex::new(&pattern)?;
        Ok(FilterRule::PlayerName { pattern })
    }

    pub fn subject(&self) -> Subject {
        match self {
            FilterRule::NumStrings { .. } => Subject::NumStrings,
            FilterRule::PlayerName { .. } => Subject::PlayerName,
        }
    }

    pub fn accept(&self, player: &Player) -> bool {
        self.matcher().accept(player)
    }

    /// Compile the rule for repeated use. A pattern that does not compile
    /// (possible for deserialized rules) matches no player.
    fn matcher(&self) -> RuleMatcher {
        match self {
            FilterRule::NumStrings { operation, value } => RuleMatcher::NumStrings {
                operation: *operation,
                value: *value,
            },
            FilterRule::PlayerName { pattern } => match Regex::new(pattern) {
                Ok(re) => RuleMatcher::PlayerName(Some(re)),
                Err(e) => {
                    log::warn!("Ignoring invalid player name pattern '{}': {}", pattern, e);
                    RuleMatcher::PlayerName(None)
                }
            },
        }
    }
}

enum RuleMatcher {
    NumStrings { operation: Operation, value: i32 },
    PlayerName(Option<Regex>),
}

impl RuleMatcher {
    fn accept(&self, player: &Player) -> bool {
        match self {
            RuleMatcher::NumStrings { operation, value } => {
                operation.compare(player.string_count() as i32, *value)
            }
            RuleMatcher::PlayerName(re) => re
                .as_ref()
                .is_some_and(|re| re.is_match(&player.description)),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Default)]
pub struct ViewFilter {
    pub description: String,
    rules: Vec<FilterRule>,
}

impl ViewFilter {
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            rules: Vec::new(),
        }
    }

    pub fn rules(&self) -> &[FilterRule] {
        &self.rules
    }

    pub fn add_rule(&mut self, rule: FilterRule) {
        self.rules.push(rule);
    }

    pub fn remove_rule(&mut self, index: usize) -> FilterRule {
        self.rules.remove(index)
    }

    /// Whether the staff at `staff_index` of the given system is visible.
    pub fn accept(&self, score: &Score, system_index: usize, staff_index: usize) -> bool {
        if self.rules.is_empty() {
            return true;
        }

        let Some(system) = score.systems().get(system_index) else {
            return false;
        };

        // The assignment in effect at the start of the system, plus any
        // changes made within it.
        let initial = score_utils::current_players(score, system_index, 0);
        let changes = initial.into_iter().chain(system.player_changes.iter());

        let matchers: Vec<RuleMatcher> = self.rules.iter().map(FilterRule::matcher).collect();
        changes
            .flat_map(|change| change.players_for_staff(staff_index))
            .filter_map(|active| score.players().get(active.player_number))
            .any(|player| matchers.iter().all(|matcher| matcher.accept(player)))
    }
}
