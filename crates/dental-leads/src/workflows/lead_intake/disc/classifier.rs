use super::{DiscProfile, DiscScores};

/// Reduce a tally to its dominant dimension(s).
///
/// Only dimensions holding the maximum score qualify, and only when that maximum is above
/// zero. Ties keep every qualifying key.
pub fn classify(scores: &DiscScores) -> DiscProfile {
    let top = scores.iter().map(|(_, votes)| votes).max().unwrap_or(0);
    if top == 0 {
        return DiscProfile::Undefined;
    }

    let dominant = scores
        .iter()
        .filter(|(_, votes)| *votes == top)
        .map(|(dimension, _)| dimension)
        .collect();

    DiscProfile::from_dimensions(dominant)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::lead_intake::disc::DiscDimension;

    #[test]
    fn all_zero_scores_are_undefined() {
        let profile = classify(&DiscScores::default());
        assert_eq!(profile, DiscProfile::Undefined);
        assert_eq!(profile.to_string(), "undefined");
    }

    #[test]
    fn single_leader_is_returned_alone() {
        let profile = classify(&DiscScores::new(3, 1, 0, 0));
        assert_eq!(profile, DiscProfile::Dominant(vec![DiscDimension::Dominance]));
        assert_eq!(profile.to_string(), "D");

        assert_eq!(classify(&DiscScores::new(0, 0, 0, 1)).to_string(), "C");
    }

    #[test]
    fn two_way_tie_is_sorted_and_joined() {
        assert_eq!(classify(&DiscScores::new(2, 2, 0, 0)).to_string(), "D+I");
        assert_eq!(classify(&DiscScores::new(0, 1, 4, 4)).to_string(), "C+S");
    }

    #[test]
    fn four_way_tie_lists_every_key() {
        let profile = classify(&DiscScores::new(1, 1, 1, 1));
        assert_eq!(profile.to_string(), "C+D+I+S");
        assert_eq!(
            profile,
            DiscProfile::Dominant(vec![
                DiscDimension::Conformity,
                DiscDimension::Dominance,
                DiscDimension::Influence,
                DiscDimension::Steadiness,
            ])
        );
    }

    #[test]
    fn classification_is_repeatable() {
        let scores = DiscScores::new(5, 2, 5, 0);
        assert_eq!(classify(&scores), classify(&scores));
        assert_eq!(scores.profile().to_string(), "D+S");
    }
}
