//! Bounded breadth-first reformulation search
//!
//! Starting from one or more seed parses, the search explores single-token
//! moves up to `max_edits` away from a seed. States are processed in FIFO
//! order, so accepted candidates come out in ascending edit distance. Each
//! distinct (text, label) ordering is validated and expanded at most once.
//!
//! The state space is combinatorial: up to `max_edits * n * (n - 1)`
//! expansions before deduplication for an n-token sentence. There is no
//! cancellation; `max_edits` and the sentence length are the only bounds.

use crate::error::{ShapeError, ShapeResult};
use crate::fingerprint::Fingerprint;
use crate::permute::neighbors;
use crate::token::ParseSequence;
use crate::validate::TreeValidator;
use nlsql_config::{GrammarConfig, SearchConfig};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use tracing::{debug, trace};

/// Counters describing one search run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SearchStats {
    /// States taken off the queue
    pub dequeued: usize,
    /// Dequeued states skipped because their fingerprint was already seen
    pub duplicates_skipped: usize,
    /// Dequeued states skipped for exceeding the edit budget
    pub over_budget_skipped: usize,
    /// States whose neighbors were generated
    pub expanded: usize,
    /// Neighbors pushed onto the queue
    pub enqueued: usize,
    /// Valid sequences discovered
    pub accepted: usize,
    /// Candidates returned after truncation
    pub returned: usize,
}

/// Accepted candidates plus run counters
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Valid, deduplicated candidates in discovery order
    pub candidates: Vec<ParseSequence>,
    /// Counters for this run
    pub stats: SearchStats,
}

struct SearchState {
    sequence: ParseSequence,
    fingerprint: Fingerprint,
    edits_used: usize,
}

impl SearchState {
    fn new(sequence: ParseSequence, edits_used: usize) -> Self {
        let fingerprint = Fingerprint::of(&sequence);
        Self {
            sequence,
            fingerprint,
            edits_used,
        }
    }
}

/// Reformulation search with a fixed validator and edit budget
#[derive(Debug, Clone)]
pub struct ReformulationSearch {
    validator: TreeValidator,
    max_edits: usize,
}

impl Default for ReformulationSearch {
    fn default() -> Self {
        Self::from_config(&SearchConfig::default(), &GrammarConfig::default())
    }
}

impl ReformulationSearch {
    /// Create a search
    pub fn new(validator: TreeValidator, max_edits: usize) -> Self {
        Self {
            validator,
            max_edits,
        }
    }

    /// Create a search from configuration
    pub fn from_config(search: &SearchConfig, grammar: &GrammarConfig) -> Self {
        Self::new(TreeValidator::from_config(grammar), search.max_edits)
    }

    /// Edit budget, which is also the cap on returned candidates
    pub fn max_edits(&self) -> usize {
        self.max_edits
    }

    /// Validator used to accept candidates
    pub fn validator(&self) -> &TreeValidator {
        &self.validator
    }

    /// Run the search and return only the candidates
    pub fn reformulate(&self, seeds: &[ParseSequence]) -> ShapeResult<Vec<ParseSequence>> {
        Ok(self.run(seeds)?.candidates)
    }

    /// Run the search.
    ///
    /// All seeds must have the same length. The candidate list is truncated
    /// to `max_edits` entries, so a budget of zero never returns anything.
    pub fn run(&self, seeds: &[ParseSequence]) -> ShapeResult<SearchOutcome> {
        if let Some(first) = seeds.first() {
            if let Some((i, seed)) = seeds
                .iter()
                .enumerate()
                .find(|(_, seed)| seed.len() != first.len())
            {
                return Err(ShapeError::LengthMismatch {
                    left_source: "seed 0".to_string(),
                    left_len: first.len(),
                    right_source: format!("seed {}", i),
                    right_len: seed.len(),
                });
            }
        }

        let mut stats = SearchStats::default();
        let mut queue: VecDeque<SearchState> = seeds
            .iter()
            .map(|seed| SearchState::new(seed.clone(), 0))
            .collect();
        let mut seen: HashSet<Fingerprint> = HashSet::new();
        let mut accepted = Vec::new();

        while let Some(state) = queue.pop_front() {
            // accepted only grows in discovery order, so once the cap is
            // reached the truncated result can no longer change
            if accepted.len() >= self.max_edits {
                break;
            }
            stats.dequeued += 1;

            if seen.contains(&state.fingerprint) {
                stats.duplicates_skipped += 1;
                continue;
            }
            if state.edits_used > self.max_edits {
                stats.over_budget_skipped += 1;
                continue;
            }
            seen.insert(state.fingerprint);

            if self.validator.is_valid(&state.sequence) {
                trace!(
                    edits = state.edits_used,
                    fingerprint = %state.fingerprint,
                    candidate = %state.sequence,
                    "Accepted candidate"
                );
                accepted.push(state.sequence.clone());
            }

            if state.edits_used < self.max_edits {
                stats.expanded += 1;
                for neighbor in neighbors(&state.sequence) {
                    let next = SearchState::new(neighbor, state.edits_used + 1);
                    if !seen.contains(&next.fingerprint) {
                        queue.push_back(next);
                        stats.enqueued += 1;
                    }
                }
            }
        }

        stats.accepted = accepted.len();
        accepted.truncate(self.max_edits);
        stats.returned = accepted.len();

        debug!(
            seeds = seeds.len(),
            tokens = seeds.first().map_or(0, ParseSequence::len),
            max_edits = self.max_edits,
            distinct_states = seen.len(),
            dequeued = stats.dequeued,
            duplicates_skipped = stats.duplicates_skipped,
            expanded = stats.expanded,
            enqueued = stats.enqueued,
            returned = stats.returned,
            "Reformulation search finished"
        );

        Ok(SearchOutcome {
            candidates: accepted,
            stats,
        })
    }
}

/// Reformulate with the default grammar rules
pub fn reformulate(seeds: &[ParseSequence], max_edits: usize) -> ShapeResult<Vec<ParseSequence>> {
    ReformulationSearch::new(TreeValidator::default(), max_edits).reformulate(seeds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;
    use crate::token::ParseToken;

    fn seq(tokens: &[(&str, &str, i64)]) -> ParseSequence {
        tokens
            .iter()
            .map(|(text, dep, head)| ParseToken::new(*text, *dep, *head))
            .collect()
    }

    fn bob_ate_cake() -> ParseSequence {
        seq(&[("Bob", "nsubj", 1), ("ate", "root", -1), ("cake", "dobj", 1)])
    }

    fn bob_owns_cake() -> ParseSequence {
        seq(&[("Bob", "nsubj", 1), ("owns", "root", -1), ("cake", "dobj", 1)])
    }

    #[test]
    fn test_zero_budget_returns_nothing() {
        let outcome = ReformulationSearch::new(TreeValidator::default(), 0)
            .run(&[bob_ate_cake()])
            .unwrap();

        assert!(outcome.candidates.is_empty());
        assert_eq!(outcome.stats.expanded, 0);
    }

    #[test]
    fn test_valid_seed_comes_first() {
        let result = reformulate(&[bob_ate_cake()], 1).unwrap();

        assert_eq!(result, vec![bob_ate_cake()]);
    }

    #[test]
    fn test_invalid_seed_yields_valid_neighbor() {
        // moving "cake" changes which token sits at head position 1
        let result = reformulate(&[bob_owns_cake()], 1).unwrap();

        assert_eq!(result.len(), 1);
        assert_ne!(result[0], bob_owns_cake());
        assert!(crate::validate::is_valid(&result[0]));
    }

    #[test]
    fn test_results_capped_at_budget() {
        let result = reformulate(&[bob_ate_cake()], 2).unwrap();
        assert!(result.len() <= 2);
    }

    #[test]
    fn test_duplicate_seeds_processed_once() {
        let search = ReformulationSearch::new(TreeValidator::default(), 5);
        let outcome = search.run(&[bob_ate_cake(), bob_ate_cake()]).unwrap();

        let unique: HashSet<Fingerprint> =
            outcome.candidates.iter().map(Fingerprint::of).collect();
        assert_eq!(unique.len(), outcome.candidates.len());
        assert_eq!(outcome.candidates[0], bob_ate_cake());
    }

    #[test]
    fn test_seed_length_mismatch_is_error() {
        let short = seq(&[("Bob", "nsubj", 1), ("ate", "root", -1)]);
        let err = reformulate(&[bob_ate_cake(), bob_ate_cake(), short], 3).unwrap_err();

        assert_eq!(
            err,
            ShapeError::LengthMismatch {
                left_source: "seed 0".to_string(),
                left_len: 3,
                right_source: "seed 2".to_string(),
                right_len: 2,
            }
        );
    }

    #[test]
    fn test_empty_inputs_are_not_errors() {
        assert!(reformulate(&[], 3).unwrap().is_empty());
        assert_eq!(
            reformulate(&[ParseSequence::default()], 3).unwrap(),
            vec![ParseSequence::default()]
        );
    }

    #[test]
    fn test_expansions_bounded_by_distinct_orderings() {
        let report = seq(&[
            ("report", "nsubj", 1),
            ("consists", "root", -1),
            ("data", "dobj", 1),
        ]);
        let outcome = ReformulationSearch::new(TreeValidator::default(), 4)
            .run(&[report])
            .unwrap();

        // only 3! = 6 distinct orderings exist
        assert!(outcome.stats.dequeued >= outcome.stats.duplicates_skipped);
        assert!(outcome.stats.expanded <= 6);
    }
}
