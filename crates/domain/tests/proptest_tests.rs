//! Property-based tests for scoring and value objects
//!
//! These tests use proptest to verify invariants across many random inputs.

use domain::{Accuracy, Sound, needs_remedy, score_attempt};
use proptest::prelude::*;

fn sound(code: &str) -> Sound {
    Sound::parse(code).unwrap()
}

// ============================================================================
// Scoring Property Tests
// ============================================================================

mod scoring_tests {
    use super::*;

    proptest! {
        #[test]
        fn score_is_always_a_known_tier(
            word in "[A-Z]{1,10}",
            transcript in "\\PC{0,40}",
            target in "[A-Z]{1,2}",
            sub in proptest::option::of("[A-Z]{1,2}")
        ) {
            let target = sound(&target);
            let sub = sub.map(|s| sound(&s));
            let score = score_attempt(&word, &transcript, &target, sub.as_ref());
            prop_assert!(Accuracy::ALL.contains(&score));
            prop_assert!([0, 20, 75, 100].contains(&score.percentage()));
        }

        #[test]
        fn scoring_is_deterministic(
            word in "[A-Z]{1,10}",
            transcript in "[a-zA-Z ]{0,30}",
            target in "[A-Z]{1,2}"
        ) {
            let target = sound(&target);
            let first = score_attempt(&word, &transcript, &target, None);
            let second = score_attempt(&word, &transcript, &target, None);
            prop_assert_eq!(first, second);
        }

        #[test]
        fn exact_word_without_substitution_is_correct(
            sound_code in "[A-Z]{1,2}",
            tail in "[A-Z]{0,8}"
        ) {
            let target = sound(&sound_code);
            let word = format!("{sound_code}{tail}");
            let score = score_attempt(&word, &word.to_lowercase(), &target, None);
            prop_assert_eq!(score, Accuracy::Correct);
        }

        #[test]
        fn trailing_tokens_are_ignored(
            word in "[A-Z]{2,10}",
            extra in "[a-z ]{0,20}"
        ) {
            let target = sound(&word[..1]);
            let transcript = format!("{word} {extra}");
            prop_assert_eq!(
                score_attempt(&word, &transcript, &target, None),
                score_attempt(&word, &word, &target, None)
            );
        }

        #[test]
        fn whitespace_only_transcript_scores_zero(
            blank in "[ \\t\\n]{0,10}",
            word in "[A-Z]{1,10}"
        ) {
            let target = sound(&word[..1]);
            prop_assert_eq!(
                score_attempt(&word, &blank, &target, None),
                Accuracy::Unrecognized
            );
        }

        #[test]
        fn substitution_prefix_never_scores_above_20(
            tail in "[A-Z]{0,8}",
            received_tail in "[A-Z]{0,8}"
        ) {
            let transcript = format!("SH{received_tail}");
            let score = score_attempt(&format!("S{tail}"), &transcript, &sound("S"), Some(&sound("SH")));
            prop_assert!(score.percentage() <= 20);
        }
    }
}

// ============================================================================
// Remedy Threshold Property Tests
// ============================================================================

mod remedy_tests {
    use super::*;

    proptest! {
        #[test]
        fn low_percentages_need_remedy(p in 0u32..=50) {
            prop_assert!(needs_remedy(p));
        }

        #[test]
        fn high_percentages_do_not_need_remedy(p in 51u32..=1000) {
            prop_assert!(!needs_remedy(p));
        }
    }
}

// ============================================================================
// Sound Property Tests
// ============================================================================

mod sound_tests {
    use super::*;

    proptest! {
        #[test]
        fn valid_codes_are_uppercased(code in "[a-zA-Z0-9]{1,8}") {
            let parsed = Sound::parse(&code);
            prop_assert!(parsed.is_ok());
            let sound = parsed.unwrap();
            prop_assert_eq!(sound.as_str(), code.to_uppercase());
        }

        #[test]
        fn overlong_codes_rejected(code in "[A-Z]{9,20}") {
            prop_assert!(Sound::parse(&code).is_err());
        }

        #[test]
        fn non_alphanumeric_rejected(
            prefix in "[A-Z]{0,3}",
            bad in "[-_!?.,/]",
            suffix in "[A-Z]{1,3}"
        ) {
            let code = format!("{prefix}{bad}{suffix}");
            prop_assert!(Sound::parse(&code).is_err());
        }
    }
}
