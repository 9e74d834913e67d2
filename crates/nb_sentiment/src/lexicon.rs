use lazy_static::lazy_static;
use std::collections::{HashMap, HashSet};

lazy_static! {
    /// Word valences on the usual lexicon scale of roughly -4.0 to 4.0.
    /// Skewed towards vocabulary that shows up in company news coverage.
    pub static ref VALENCES: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            // strongly positive
            ("excellent", 3.2),
            ("outstanding", 3.2),
            ("breakthrough", 3.0),
            ("amazing", 2.8),
            ("fantastic", 2.9),
            ("incredible", 2.8),
            ("tremendous", 2.6),
            ("record", 2.2),
            ("soar", 2.6),
            ("soared", 2.6),
            ("soars", 2.6),
            ("surge", 2.4),
            ("surged", 2.4),
            ("surges", 2.4),
            ("skyrocket", 2.8),
            ("skyrocketed", 2.8),
            ("rally", 2.0),
            ("rallied", 2.0),
            ("boom", 2.2),
            ("thrive", 2.3),
            ("thriving", 2.3),
            ("win", 2.2),
            ("wins", 2.2),
            ("winner", 2.4),
            ("success", 2.4),
            ("successful", 2.4),
            ("triumph", 2.8),
            ("love", 2.5),
            ("best", 2.6),
            // moderately positive
            ("good", 1.9),
            ("great", 2.2),
            ("strong", 1.8),
            ("stronger", 1.9),
            ("growth", 1.6),
            ("grow", 1.5),
            ("grew", 1.5),
            ("growing", 1.5),
            ("gain", 1.6),
            ("gains", 1.6),
            ("gained", 1.6),
            ("profit", 1.7),
            ("profits", 1.7),
            ("profitable", 1.9),
            ("beat", 1.5),
            ("beats", 1.5),
            ("exceed", 1.6),
            ("exceeded", 1.6),
            ("exceeds", 1.6),
            ("upgrade", 1.5),
            ("upgraded", 1.5),
            ("improve", 1.7),
            ("improved", 1.7),
            ("improvement", 1.7),
            ("optimistic", 1.8),
            ("optimism", 1.8),
            ("bullish", 1.9),
            ("positive", 1.7),
            ("promising", 1.6),
            ("opportunity", 1.4),
            ("opportunities", 1.4),
            ("innovative", 1.6),
            ("innovation", 1.5),
            ("rise", 1.3),
            ("rises", 1.3),
            ("rose", 1.3),
            ("rising", 1.3),
            ("recovery", 1.4),
            ("recover", 1.3),
            ("recovered", 1.3),
            ("expand", 1.3),
            ("expands", 1.3),
            ("expansion", 1.3),
            ("partnership", 1.2),
            ("approval", 1.4),
            ("approved", 1.4),
            ("dividend", 1.0),
            ("outperform", 1.8),
            ("outperformed", 1.8),
            ("benefit", 1.4),
            ("benefits", 1.4),
            ("boost", 1.5),
            ("boosted", 1.5),
            ("advantage", 1.4),
            ("popular", 1.4),
            ("support", 1.1),
            ("stable", 1.0),
            ("steady", 1.0),
            ("happy", 1.9),
            ("confident", 1.6),
            ("confidence", 1.5),
            // strongly negative
            ("crash", -2.8),
            ("crashed", -2.8),
            ("crashes", -2.8),
            ("collapse", -2.9),
            ("collapsed", -2.9),
            ("plunge", -2.5),
            ("plunged", -2.5),
            ("plunges", -2.5),
            ("plummet", -2.6),
            ("plummeted", -2.6),
            ("bankruptcy", -3.2),
            ("bankrupt", -3.1),
            ("fraud", -3.2),
            ("fraudulent", -3.2),
            ("scandal", -2.8),
            ("disaster", -3.1),
            ("catastrophe", -3.3),
            ("crisis", -2.5),
            ("lawsuit", -2.0),
            ("sued", -2.0),
            ("terrible", -2.7),
            ("horrible", -2.9),
            ("awful", -2.6),
            ("worst", -3.0),
            ("fail", -2.3),
            ("fails", -2.3),
            ("failed", -2.3),
            ("failure", -2.4),
            ("hate", -2.7),
            ("recall", -1.9),
            ("recalled", -1.9),
            ("investigation", -1.8),
            ("probe", -1.6),
            ("fined", -1.9),
            ("penalty", -1.8),
            ("breach", -2.2),
            ("hacked", -2.5),
            ("layoff", -2.0),
            ("layoffs", -2.0),
            // moderately negative
            ("bad", -1.9),
            ("poor", -1.8),
            ("weak", -1.6),
            ("weaker", -1.7),
            ("loss", -1.7),
            ("losses", -1.7),
            ("lose", -1.6),
            ("loses", -1.6),
            ("lost", -1.6),
            ("decline", -1.5),
            ("declined", -1.5),
            ("declines", -1.5),
            ("declining", -1.5),
            ("drop", -1.4),
            ("dropped", -1.4),
            ("drops", -1.4),
            ("fall", -1.3),
            ("falls", -1.3),
            ("fell", -1.3),
            ("falling", -1.3),
            ("miss", -1.4),
            ("missed", -1.4),
            ("misses", -1.4),
            ("downgrade", -1.6),
            ("downgraded", -1.6),
            ("cut", -1.2),
            ("cuts", -1.2),
            ("warning", -1.5),
            ("warned", -1.4),
            ("concern", -1.4),
            ("concerns", -1.4),
            ("concerned", -1.4),
            ("worried", -1.6),
            ("worry", -1.5),
            ("worries", -1.5),
            ("fear", -1.7),
            ("fears", -1.7),
            ("risk", -1.2),
            ("risks", -1.2),
            ("risky", -1.4),
            ("uncertainty", -1.4),
            ("uncertain", -1.3),
            ("volatile", -1.1),
            ("volatility", -1.0),
            ("bearish", -1.9),
            ("negative", -1.7),
            ("pessimistic", -1.8),
            ("slowdown", -1.4),
            ("slump", -1.7),
            ("slumped", -1.7),
            ("struggle", -1.6),
            ("struggled", -1.6),
            ("struggling", -1.6),
            ("disappointing", -1.9),
            ("disappointed", -1.8),
            ("disappoint", -1.7),
            ("debt", -1.1),
            ("shortfall", -1.5),
            ("delay", -1.1),
            ("delayed", -1.1),
            ("problem", -1.5),
            ("problems", -1.5),
            ("trouble", -1.6),
            ("troubled", -1.7),
        ];
        entries.iter().copied().collect()
    };

    /// Degree modifiers applied to the next sentiment-bearing word.
    pub static ref BOOSTERS: HashMap<&'static str, f64> = {
        let entries: &[(&str, f64)] = &[
            ("very", 1.5),
            ("extremely", 1.8),
            ("really", 1.4),
            ("incredibly", 1.7),
            ("absolutely", 1.6),
            ("highly", 1.4),
            ("hugely", 1.6),
            ("significantly", 1.4),
            ("sharply", 1.5),
            ("substantially", 1.4),
            ("quite", 1.2),
            ("particularly", 1.3),
            ("especially", 1.3),
            ("somewhat", 0.8),
            ("slightly", 0.7),
            ("marginally", 0.7),
            ("barely", 0.6),
            ("moderately", 0.85),
        ];
        entries.iter().copied().collect()
    };

    pub static ref NEGATIONS: HashSet<&'static str> = {
        [
            "not", "no", "never", "neither", "nor", "none", "nobody", "nothing",
            "without", "hardly", "cannot", "cant", "can't", "dont", "don't",
            "doesnt", "doesn't", "didnt", "didn't", "wont", "won't", "wouldnt",
            "wouldn't", "isnt", "isn't", "arent", "aren't", "wasnt", "wasn't",
            "werent", "weren't", "hasnt", "hasn't", "havent", "haven't",
            "hadnt", "hadn't", "shouldnt", "shouldn't", "couldnt", "couldn't",
        ]
        .into_iter()
        .collect()
    };
}

pub fn valence(word: &str) -> Option<f64> {
    VALENCES.get(word).copied()
}

pub fn booster(word: &str) -> Option<f64> {
    BOOSTERS.get(word).copied()
}

pub fn is_negation(word: &str) -> bool {
    NEGATIONS.contains(word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valences_signed_as_expected() {
        assert!(valence("great").unwrap() > 0.0);
        assert!(valence("surge").unwrap() > 0.0);
        assert!(valence("crash").unwrap() < 0.0);
        assert!(valence("bankruptcy").unwrap() < 0.0);
        assert!(valence("the").is_none());
    }

    #[test]
    fn test_boosters() {
        assert!(booster("very").unwrap() > 1.0);
        assert!(booster("slightly").unwrap() < 1.0);
        assert!(booster("crash").is_none());
    }

    #[test]
    fn test_negations() {
        assert!(is_negation("not"));
        assert!(is_negation("don't"));
        assert!(!is_negation("profit"));
    }
}
