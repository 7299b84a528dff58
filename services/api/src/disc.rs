use clap::Args;
use dental_leads::error::AppError;
use dental_leads::workflows::lead_intake::DiscAssessment;

#[derive(Args, Debug, Default)]
pub(crate) struct DiscScoreArgs {
    /// Questionnaire answers (A-D, case-insensitive); unknown letters are ignored
    pub(crate) answers: Vec<String>,
}

pub(crate) fn run_disc_score(args: DiscScoreArgs) -> Result<(), AppError> {
    println!("{}", render_assessment(&args)?);
    Ok(())
}

fn render_assessment(args: &DiscScoreArgs) -> Result<String, AppError> {
    let assessment = DiscAssessment::from_answers(Some(args.answers.as_slice()));
    Ok(serde_json::to_string_pretty(&assessment)?)
}
