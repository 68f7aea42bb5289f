use breast_risk::assessment::{assess, catalog, ComprehensiveAssessment, QuizAnswers};
use breast_risk::error::AppError;
use chrono::{DateTime, Local};
use clap::Args;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// JSON file of questionnaire answers, or `-` to read from stdin
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print every calculation step behind the score
    #[arg(long)]
    pub(crate) trace: bool,
    /// Emit the full report as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct CatalogArgs {
    /// Emit the catalog as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Serialize)]
struct AssessmentOutput<'a> {
    generated_at: DateTime<Local>,
    #[serde(flatten)]
    assessment: &'a ComprehensiveAssessment,
}

pub(crate) fn run_assess(args: AssessArgs) -> Result<(), AppError> {
    let AssessArgs {
        answers,
        trace,
        json,
    } = args;

    let answers = load_answers(&answers)?;
    let assessment = assess(&answers);

    if json {
        let output = AssessmentOutput {
            generated_at: Local::now(),
            assessment: &assessment,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print!("{}", render_assessment(&assessment, trace));
    }

    Ok(())
}

pub(crate) fn run_catalog(args: CatalogArgs) -> Result<(), AppError> {
    if args.json {
        println!("{}", serde_json::to_string_pretty(&catalog::entries())?);
        return Ok(());
    }

    for entry in catalog::entries() {
        println!(
            "[{}] {} = \"{}\" (RR {:.1}, {})",
            entry.chain.label(),
            entry.factor.question,
            entry.factor.answer,
            entry.factor.relative_risk,
            entry.factor.category.label()
        );
    }
    Ok(())
}

pub(crate) fn load_answers(source: &Path) -> Result<QuizAnswers, AppError> {
    let raw = if source == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        std::fs::read_to_string(source)?
    };

    parse_answers(&raw)
}

pub(crate) fn parse_answers(raw: &str) -> Result<QuizAnswers, AppError> {
    Ok(serde_json::from_str(raw)?)
}

pub(crate) fn render_assessment(assessment: &ComprehensiveAssessment, trace: bool) -> String {
    let report = &assessment.report;
    let summary = &report.report_data.summary;
    let analysis = &report.report_data.risk_analysis;
    let plan = &report.report_data.action_plan;
    let mut out = String::new();

    push_line(&mut out, "Breast health risk assessment");
    push_line(&mut out, &summary.headline);
    push_line(
        &mut out,
        &format!(
            "Unchangeable factors {:.1} | Changeable factors {:.1}",
            summary.unchangeable_score, summary.changeable_score
        ),
    );
    push_line(
        &mut out,
        &format!(
            "Profile: {} ({}) - {}",
            summary.profile_label, summary.age_range, summary.profile_description
        ),
    );

    push_section(&mut out, "Risk factors", &report.risk_factors);
    push_section(&mut out, "Protective factors", &analysis.protective_factors);
    push_section(&mut out, "Do now", &plan.immediate);
    push_section(&mut out, "Keep doing", &plan.ongoing);

    out.push_str("\nFollow-up\n");
    if let Some(two_weeks) = &plan.follow_up.two_weeks {
        push_line(&mut out, &format!("- 2 weeks: {two_weeks}"));
    }
    push_line(&mut out, &format!("- 1 month: {}", plan.follow_up.one_month));
    push_line(&mut out, &format!("- 3 months: {}", plan.follow_up.three_months));
    push_line(&mut out, &format!("- 6 months: {}", plan.follow_up.six_months));

    let daily = &report.daily_plan;
    out.push_str("\nDaily plan\n");
    push_line(&mut out, &format!("- Morning: {}", daily.morning.exercise));
    push_line(&mut out, &format!("- Afternoon: {}", daily.afternoon.movement));
    push_line(&mut out, &format!("- Evening: {}", daily.evening.relaxation));
    push_line(&mut out, &format!("- Weekly: {}", daily.weekly.self_exam));
    push_section(&mut out, "Supplements to discuss", &daily.supplements);

    if trace {
        let steps: Vec<String> = assessment.trace.iter().map(|step| step.describe()).collect();
        push_section(&mut out, "Calculation", &steps);
    }

    out
}

fn push_line(out: &mut String, line: &str) {
    out.push_str(line);
    out.push('\n');
}

fn push_section(out: &mut String, title: &str, items: &[String]) {
    if items.is_empty() {
        out.push_str(&format!("\n{title}: none\n"));
        return;
    }

    out.push_str(&format!("\n{title}\n"));
    for item in items {
        push_line(out, &format!("- {item}"));
    }
}
