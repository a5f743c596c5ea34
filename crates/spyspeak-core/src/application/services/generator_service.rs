//! Generator Service - main application orchestrator.
//!
//! This service coordinates the generation workflow:
//! 1. Re-validate the configuration (the caller owns the contract)
//! 2. Apply the exclusion filter to both lists
//! 3. Apply the length filter to both lists
//! 4. Draw + assemble + case-format `count` codenames
//!
//! It implements the driving port (incoming) and uses the `RandomSource`
//! driven port (outgoing).

use tracing::{debug, info, instrument};

use crate::{
    application::ports::RandomSource,
    domain::{
        ExclusionSet, GenerationConfig, Pattern, WordList, apply_case,
        error::DomainError,
    },
    error::SpyResult,
};

/// Main generation service.
///
/// Owns the injected random source; all word material and configuration are
/// passed as explicit values into each call, so concurrent callers are safe
/// as long as each holds its own service instance.
pub struct GeneratorService {
    rng: Box<dyn RandomSource>,
}

impl GeneratorService {
    /// Create a new generator service with the given random source.
    pub fn new(rng: Box<dyn RandomSource>) -> Self {
        Self { rng }
    }

    /// Generate exactly `config.count` codenames, or fail.
    ///
    /// Failure ladder:
    /// - `InvalidConfiguration` if the caller contract was violated
    /// - `NoWordsAfterExclusion` if either list empties under exclusions
    /// - `NoWordsMeetLengthCriteria` if either list empties under the
    ///   length window
    ///
    /// Repeats across the `count` draws are permitted and expected; the
    /// result order is generation order.
    #[instrument(skip_all, fields(pattern = %config.pattern, count = config.count))]
    pub fn generate(
        &mut self,
        adjectives: &WordList,
        nouns: &WordList,
        exclusions: &ExclusionSet,
        config: &GenerationConfig,
    ) -> SpyResult<Vec<String>> {
        // 1. Precondition re-check (owned by the caller, verified here)
        config.validate()?;

        // 2. Exclusion filter (identity short-circuit for an empty set)
        let adjectives = adjectives.without_excluded(exclusions);
        let nouns = nouns.without_excluded(exclusions);
        if adjectives.is_empty() || nouns.is_empty() {
            return Err(DomainError::NoWordsAfterExclusion.into());
        }

        // 3. Length filter
        let adjectives = adjectives.within_lengths(config.min_length, config.max_length);
        let nouns = nouns.within_lengths(config.min_length, config.max_length);
        if adjectives.is_empty() || nouns.is_empty() {
            return Err(DomainError::NoWordsMeetLengthCriteria {
                min: config.min_length,
                max: config.max_length,
            }
            .into());
        }

        debug!(
            adjectives = adjectives.len(),
            nouns = nouns.len(),
            "Word lists filtered"
        );

        // 4. Assemble + case-format
        let mut codenames = Vec::with_capacity(config.count);
        for _ in 0..config.count {
            let raw = self.compose_raw(&adjectives, &nouns, config.pattern, &config.separator);
            codenames.push(apply_case(&raw, &config.separator, config.case_style));
        }

        info!(produced = codenames.len(), "Generation completed");
        Ok(codenames)
    }

    // -------------------------------------------------------------------------
    // Internal Helpers
    // -------------------------------------------------------------------------

    /// Assemble one raw (unformatted) codename for the pattern.
    ///
    /// Both lists are guaranteed non-empty by the caller; the filter steps
    /// in [`Self::generate`] enforce that before this runs.
    fn compose_raw(
        &mut self,
        adjectives: &WordList,
        nouns: &WordList,
        pattern: Pattern,
        separator: &str,
    ) -> String {
        let parts: Vec<String> = match pattern {
            Pattern::AdjNoun => {
                vec![self.pick(adjectives), self.pick(nouns)]
            }
            Pattern::NounNoun => {
                vec![self.pick(nouns), self.pick(nouns)]
            }
            Pattern::AdjAdjNoun => {
                vec![self.pick(adjectives), self.pick(adjectives), self.pick(nouns)]
            }
            Pattern::NounAdj => {
                vec![self.pick(nouns), self.pick(adjectives)]
            }
            Pattern::AdjNounNumber => {
                let number = self.rng.number_between(1, 999);
                vec![self.pick(adjectives), self.pick(nouns), number.to_string()]
            }
        };
        parts.join(separator)
    }

    /// One uniform draw (with replacement).
    fn pick(&mut self, list: &WordList) -> String {
        let index = self.rng.pick_index(list.len());
        list.get(index).to_string()
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CaseStyle, RenderFormat, render};

    /// Deterministic source: yields indices from a fixed cycle and a fixed
    /// number for ranges.
    struct FixedSource {
        indices: Vec<usize>,
        cursor: usize,
        number: u32,
    }

    impl FixedSource {
        fn new(indices: Vec<usize>, number: u32) -> Self {
            Self {
                indices,
                cursor: 0,
                number,
            }
        }
    }

    impl RandomSource for FixedSource {
        fn pick_index(&mut self, len: usize) -> usize {
            let i = self.indices[self.cursor % self.indices.len()] % len;
            self.cursor += 1;
            i
        }

        fn number_between(&mut self, low: u32, high: u32) -> u32 {
            self.number.clamp(low, high)
        }
    }

    fn list(words: &[&str]) -> WordList {
        WordList::new(words.iter().map(|w| w.to_string()))
    }

    fn service() -> GeneratorService {
        GeneratorService::new(Box::new(FixedSource::new(vec![0], 42)))
    }

    #[test]
    fn single_element_lists_collapse_randomness() {
        let mut svc = service();
        let names = svc
            .generate(
                &list(&["Brave"]),
                &list(&["Tiger"]),
                &ExclusionSet::default(),
                &GenerationConfig::default(),
            )
            .unwrap();
        assert_eq!(names, vec!["Brave Tiger".to_string()]);
    }

    #[test]
    fn count_produces_exactly_that_many() {
        let mut svc = service();
        let cfg = GenerationConfig {
            count: 7,
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["Swift"]),
                &list(&["Eagle"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn exclusions_emptying_a_list_fail_generation() {
        let mut svc = service();
        let ex = ExclusionSet::new(vec!["ghost".to_string()]);
        let err = svc
            .generate(
                &list(&["ghost"]),
                &list(&["wolf"]),
                &ex,
                &GenerationConfig::default(),
            )
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::SpySpeakError::Domain(DomainError::NoWordsAfterExclusion)
        ));
    }

    #[test]
    fn min_length_narrows_then_fails_when_too_strict() {
        let adjectives = list(&["ab", "cdef"]);
        let nouns = list(&["xy", "wxyz"]);

        let mut svc = service();
        let cfg = GenerationConfig {
            min_length: 3,
            case_style: CaseStyle::Lower,
            ..Default::default()
        };
        // Only "cdef"/"wxyz" survive; FixedSource picks index 0 of each.
        let names = svc
            .generate(&adjectives, &nouns, &ExclusionSet::default(), &cfg)
            .unwrap();
        assert_eq!(names, vec!["cdef wxyz".to_string()]);

        let mut svc = service();
        let cfg = GenerationConfig {
            min_length: 5,
            ..Default::default()
        };
        let err = svc
            .generate(&adjectives, &nouns, &ExclusionSet::default(), &cfg)
            .unwrap_err();
        assert!(matches!(
            err,
            crate::error::SpySpeakError::Domain(DomainError::NoWordsMeetLengthCriteria { .. })
        ));
    }

    #[test]
    fn invalid_count_is_rejected() {
        let mut svc = service();
        let cfg = GenerationConfig {
            count: 0,
            ..Default::default()
        };
        assert!(
            svc.generate(
                &list(&["Brave"]),
                &list(&["Tiger"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .is_err()
        );
    }

    #[test]
    fn noun_noun_draws_two_nouns() {
        let mut svc = GeneratorService::new(Box::new(FixedSource::new(vec![0, 1], 1)));
        let cfg = GenerationConfig {
            pattern: Pattern::NounNoun,
            case_style: CaseStyle::Lower,
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["unused"]),
                &list(&["forest", "mountain"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        assert_eq!(names, vec!["forest mountain".to_string()]);
    }

    #[test]
    fn noun_adj_reverses_the_pair() {
        let mut svc = service();
        let cfg = GenerationConfig {
            pattern: Pattern::NounAdj,
            case_style: CaseStyle::Lower,
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["swift"]),
                &list(&["eagle"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        assert_eq!(names, vec!["eagle swift".to_string()]);
    }

    #[test]
    fn adj_adj_noun_draws_three() {
        let mut svc = GeneratorService::new(Box::new(FixedSource::new(vec![0, 1, 0], 1)));
        let cfg = GenerationConfig {
            pattern: Pattern::AdjAdjNoun,
            case_style: CaseStyle::Lower,
            separator: "-".into(),
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["brave", "silent"]),
                &list(&["warrior"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        assert_eq!(names, vec!["brave-silent-warrior".to_string()]);
    }

    #[test]
    fn number_pattern_appends_in_range_token() {
        let mut svc = GeneratorService::new(Box::new(FixedSource::new(vec![0], 999)));
        let cfg = GenerationConfig {
            pattern: Pattern::AdjNounNumber,
            case_style: CaseStyle::Lower,
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["swift"]),
                &list(&["eagle"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        let last = names[0].rsplit(' ').next().unwrap();
        let n: u32 = last.parse().unwrap();
        assert!((1..=999).contains(&n));
    }

    #[test]
    fn generated_batch_renders_as_text() {
        let mut svc = service();
        let cfg = GenerationConfig {
            count: 2,
            ..Default::default()
        };
        let names = svc
            .generate(
                &list(&["Brave"]),
                &list(&["Tiger"]),
                &ExclusionSet::default(),
                &cfg,
            )
            .unwrap();
        assert_eq!(
            render(&names, RenderFormat::Text),
            "Brave Tiger\nBrave Tiger"
        );
    }
}
