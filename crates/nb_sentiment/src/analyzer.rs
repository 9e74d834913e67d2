use nb_core::types::{Sentiment, SentimentLabel};

use crate::lexicon;

/// How many tokens after a negation still get their sign flipped.
const NEGATION_WINDOW: usize = 3;
/// Dampening applied when a valence is flipped by a negation.
const NEGATION_SCALAR: f64 = 0.74;
/// Normalization constant for the compound score.
const NORMALIZATION_ALPHA: f64 = 15.0;

/// Score a text with the lexicon. Pure and deterministic; empty or
/// lexicon-free text comes back Neutral with score 0.0.
pub fn analyze(text: &str) -> Sentiment {
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Sentiment::neutral();
    }

    let mut total = 0.0;
    let mut booster = 1.0;
    let mut negated = false;
    let mut since_negation = 0usize;

    for token in &tokens {
        if lexicon::is_negation(token) {
            negated = true;
            since_negation = 0;
            continue;
        }

        if let Some(multiplier) = lexicon::booster(token) {
            booster = multiplier;
            continue;
        }

        if let Some(valence) = lexicon::valence(token) {
            let mut score = valence * booster;
            if negated && since_negation < NEGATION_WINDOW {
                score = -score * NEGATION_SCALAR;
            }
            total += score;
            booster = 1.0;
        }

        if negated {
            since_negation += 1;
            if since_negation >= NEGATION_WINDOW {
                negated = false;
            }
        }
    }

    let score = normalize(total);
    Sentiment {
        label: SentimentLabel::from_score(score),
        score,
    }
}

fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|t| {
            t.trim_matches(|c: char| !c.is_alphanumeric() && c != '\'')
                .to_lowercase()
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Map an unbounded valence sum into [-1.0, 1.0].
fn normalize(sum: f64) -> f64 {
    let score = sum / (sum * sum + NORMALIZATION_ALPHA).sqrt();
    score.clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral() {
        let result = analyze("");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);

        let result = analyze("   \t\n ");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_lexicon_free_text_is_neutral() {
        let result = analyze("The company held its annual meeting on Tuesday.");
        assert_eq!(result.label, SentimentLabel::Neutral);
        assert_eq!(result.score, 0.0);
    }

    #[test]
    fn test_positive_text() {
        let result = analyze("Shares surged after the company reported record profits.");
        assert_eq!(result.label, SentimentLabel::Positive);
        assert!(result.score >= 0.05);
    }

    #[test]
    fn test_negative_text() {
        let result = analyze("The stock crashed amid fears of bankruptcy and fraud.");
        assert_eq!(result.label, SentimentLabel::Negative);
        assert!(result.score <= -0.05);
    }

    #[test]
    fn test_score_stays_in_range() {
        let texts = [
            "excellent outstanding amazing fantastic incredible tremendous triumph best",
            "crash collapse bankruptcy fraud disaster catastrophe worst horrible",
            "profit loss gain decline rise fall",
            "punctuation, everywhere!! (really?) -- yes.",
        ];
        for text in texts {
            let result = analyze(text);
            assert!(
                (-1.0..=1.0).contains(&result.score),
                "score {} out of range for {text:?}",
                result.score
            );
            assert_eq!(result.label, SentimentLabel::from_score(result.score));
        }
    }

    #[test]
    fn test_negation_flips_sign() {
        let plain = analyze("The quarter was good.");
        let negated = analyze("The quarter was not good.");
        assert!(plain.score > 0.0);
        assert!(negated.score < 0.0);
    }

    #[test]
    fn test_negation_window_expires() {
        // Negation is too far from the sentiment word to apply.
        let result = analyze("Not one of the four analysts expected such strong growth.");
        assert!(result.score > 0.0);
    }

    #[test]
    fn test_booster_amplifies() {
        let plain = analyze("Results were good.");
        let boosted = analyze("Results were extremely good.");
        assert!(boosted.score > plain.score);
    }

    #[test]
    fn test_dampener_reduces() {
        let plain = analyze("Results were good.");
        let dampened = analyze("Results were slightly good.");
        assert!(dampened.score < plain.score);
        assert!(dampened.score > 0.0);
    }

    #[test]
    fn test_deterministic() {
        let text = "Profits surged but concerns about debt remain.";
        let first = analyze(text);
        let second = analyze(text);
        assert_eq!(first.score, second.score);
        assert_eq!(first.label, second.label);
    }

    #[test]
    fn test_case_insensitive() {
        let lower = analyze("record profits");
        let upper = analyze("RECORD PROFITS");
        assert_eq!(lower.score, upper.score);
    }
}
