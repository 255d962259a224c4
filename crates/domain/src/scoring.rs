//! Pronunciation scoring
//!
//! Classifies a transcribed attempt by prefix/suffix alignment against the
//! expected word. The target sound is assumed to be a literal, word-initial
//! prefix of both the example word and a correct transcript.

use crate::entities::Accuracy;
use crate::value_objects::Sound;

/// Highest averaged percentage that still earns remedy guidance
pub const REMEDY_THRESHOLD: u32 = 50;

/// Whether an (averaged) percentage is low enough to warrant guidance
#[must_use]
pub const fn needs_remedy(percentage: u32) -> bool {
    percentage <= REMEDY_THRESHOLD
}

/// The effective attempt: first whitespace-delimited token, uppercased
///
/// Returns `None` for an empty or whitespace-only transcript.
#[must_use]
pub fn received_word(transcript: &str) -> Option<String> {
    transcript
        .split_whitespace()
        .next()
        .map(str::to_uppercase)
}

/// Score a transcript against the expected word for a sound
///
/// * `target_word` - example word; compared in uppercase
/// * `transcript` - raw transcription text in any case
/// * `target_sound` - the practiced sound
/// * `substitution` - the sound learners commonly produce instead, if registered
///
/// When the received word starts with the substitution the attempt is judged
/// on that branch alone: a matching tail scores 20, anything else 0. Only
/// otherwise is the target sound itself checked (100 for an exact tail, 75
/// for a different one).
#[must_use]
pub fn score_attempt(
    target_word: &str,
    transcript: &str,
    target_sound: &Sound,
    substitution: Option<&Sound>,
) -> Accuracy {
    let Some(received) = received_word(transcript) else {
        return Accuracy::Unrecognized;
    };

    let target = target_word.to_uppercase();
    let target_tail: String = target.chars().skip(target_sound.len()).collect();

    if let Some(tail) = substitution.and_then(|sub| received.strip_prefix(sub.as_str())) {
        return if tail == target_tail {
            Accuracy::Substituted
        } else {
            Accuracy::Unrecognized
        };
    }

    match received.strip_prefix(target_sound.as_str()) {
        Some(tail) if tail == target_tail => Accuracy::Correct,
        Some(_) => Accuracy::Variant,
        None => Accuracy::Unrecognized,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound(code: &str) -> Sound {
        Sound::parse(code).unwrap()
    }

    fn score_s(transcript: &str) -> Accuracy {
        score_attempt("SUNDAY", transcript, &sound("S"), Some(&sound("SH")))
    }

    #[test]
    fn exact_word_scores_100() {
        assert_eq!(score_s("SUNDAY"), Accuracy::Correct);
    }

    #[test]
    fn only_first_token_counts() {
        assert_eq!(score_s("SUNDAY extra words"), Accuracy::Correct);
        assert_eq!(score_s("  sunday\tmorning"), Accuracy::Correct);
    }

    #[test]
    fn transcript_case_is_ignored() {
        assert_eq!(score_s("Sunday"), Accuracy::Correct);
    }

    #[test]
    fn substitution_with_matching_tail_scores_20() {
        assert_eq!(score_s("SHUNDAY"), Accuracy::Substituted);
    }

    #[test]
    fn substitution_with_other_tail_scores_0_without_exact_fallback() {
        // "SHOE" starts with "S" too, but the substitution branch wins
        assert_eq!(score_s("SHOE"), Accuracy::Unrecognized);
    }

    #[test]
    fn correct_onset_with_different_tail_scores_75() {
        assert_eq!(score_s("SUNXAY"), Accuracy::Variant);
        assert_eq!(score_s("Sunday."), Accuracy::Variant);
    }

    #[test]
    fn unrelated_word_scores_0() {
        assert_eq!(score_s("BANANA"), Accuracy::Unrecognized);
    }

    #[test]
    fn empty_transcript_scores_0() {
        assert_eq!(score_s(""), Accuracy::Unrecognized);
        assert_eq!(score_s("   \n "), Accuracy::Unrecognized);
    }

    #[test]
    fn target_word_case_is_normalized() {
        assert_eq!(
            score_attempt("sunday", "SUNDAY", &sound("S"), Some(&sound("SH"))),
            Accuracy::Correct
        );
    }

    #[test]
    fn multi_letter_target_sound() {
        let th = sound("TH");
        assert_eq!(score_attempt("THIN", "thin", &th, None), Accuracy::Correct);
        assert_eq!(score_attempt("THIN", "thing", &th, None), Accuracy::Variant);
    }

    #[test]
    fn no_substitution_registered_uses_exact_branch_only() {
        let b2 = sound("B2");
        // "B2" can never be a prefix of a spoken word
        assert_eq!(score_attempt("BALL", "BALL", &b2, None), Accuracy::Unrecognized);

        let m = sound("M");
        assert_eq!(score_attempt("MOON", "MOON", &m, None), Accuracy::Correct);
        assert_eq!(score_attempt("MOON", "NOON", &m, None), Accuracy::Unrecognized);
    }

    #[test]
    fn substitution_that_prefixes_target_wins() {
        // Substitution "S" is a prefix of target "SH"
        let sh = sound("SH");
        let s = sound("S");
        assert_eq!(
            score_attempt("SHOE", "SHOE", &sh, Some(&s)),
            Accuracy::Unrecognized
        );
        assert_eq!(
            score_attempt("SHOE", "SOE", &sh, Some(&s)),
            Accuracy::Substituted
        );
    }

    #[test]
    fn other_catalog_pairs() {
        assert_eq!(
            score_attempt("FREE", "three", &sound("F"), Some(&sound("TH"))),
            Accuracy::Substituted
        );
        assert_eq!(
            score_attempt("LOVE", "rove", &sound("L"), Some(&sound("R"))),
            Accuracy::Substituted
        );
        assert_eq!(
            score_attempt("ZEBRA", "sebra", &sound("Z"), Some(&sound("S"))),
            Accuracy::Substituted
        );
    }

    #[test]
    fn received_word_extracts_first_token() {
        assert_eq!(received_word(" hello world "), Some("HELLO".to_string()));
        assert_eq!(received_word(""), None);
    }

    #[test]
    fn remedy_threshold_boundary() {
        assert!(needs_remedy(0));
        assert!(needs_remedy(50));
        assert!(!needs_remedy(51));
        assert!(!needs_remedy(100));
    }
}
