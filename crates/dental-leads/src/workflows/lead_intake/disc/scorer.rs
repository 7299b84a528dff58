use super::{DiscDimension, DiscScores};

/// Tally questionnaire answers into a [`DiscScores`] record.
///
/// Missing or empty input yields all zeros. Unrecognized answers are skipped without error.
pub fn score<S: AsRef<str>>(answers: Option<&[S]>) -> DiscScores {
    let mut scores = DiscScores::default();

    for answer in answers.unwrap_or_default() {
        if let Some(dimension) = DiscDimension::from_answer(answer.as_ref()) {
            scores.record(dimension);
        }
    }

    scores
}
