use std::collections::BTreeMap;
use std::io::{self, Write};
use std::path::PathBuf;

use clap::Args;
use launchwise::assessments::{AssessmentRequest, ScoringResult, ToolKind};
use launchwise::error::AppError;
use serde::Deserialize;

use crate::quiz::run_quiz;

#[derive(Args, Debug)]
pub(crate) struct RunArgs {
    /// Tool slug, e.g. project-scorer
    pub(crate) tool: String,
}

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    /// Tool slug, e.g. launch-diagnostic
    pub(crate) tool: String,
    /// JSON file holding either `{"answers": {...}}` or a flat question id to answer map
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Print the full result as JSON instead of the text summary
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum AnswersFile {
    Flat(BTreeMap<String, String>),
    Request(AssessmentRequest),
}

impl AnswersFile {
    fn into_answers(self) -> BTreeMap<String, String> {
        match self {
            AnswersFile::Request(request) => request.answers,
            AnswersFile::Flat(answers) => answers,
        }
    }
}

fn resolve_tool(slug: &str) -> Result<ToolKind, AppError> {
    ToolKind::from_slug(slug).ok_or_else(|| AppError::UnknownTool(slug.to_string()))
}

pub(crate) fn run_list() -> Result<(), AppError> {
    println!("Available tools");
    for kind in ToolKind::ALL {
        let summary = kind.summary();
        println!(
            "- {} ({} questions): {}",
            summary.slug, summary.question_count, summary.description
        );
    }
    Ok(())
}

pub(crate) fn run_interactive(args: RunArgs) -> Result<(), AppError> {
    let kind = resolve_tool(&args.tool)?;
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    match run_quiz(kind.assessment(), stdin.lock(), &mut stdout)? {
        Some(result) => render_result(&mut stdout, &result)?,
        None => writeln!(stdout, "\nInput closed before the last question; nothing scored.")?,
    }
    Ok(())
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let kind = resolve_tool(&args.tool)?;
    let raw = std::fs::read_to_string(&args.answers)?;
    let result = evaluate_answers(kind, &raw)?;

    let mut stdout = io::stdout();
    if args.json {
        writeln!(stdout, "{}", serde_json::to_string_pretty(&result)?)?;
    } else {
        render_result(&mut stdout, &result)?;
    }
    Ok(())
}

pub(crate) fn evaluate_answers(kind: ToolKind, raw: &str) -> Result<ScoringResult, AppError> {
    let file: AnswersFile = serde_json::from_str(raw)?;
    let assessment = kind.assessment();
    let answers = assessment
        .questionnaire()
        .record_from_raw(&file.into_answers())?;
    Ok(assessment.evaluate(&answers))
}

/// Plain-text rendering of a result; no decisions are made here.
pub(crate) fn render_result<W: Write>(output: &mut W, result: &ScoringResult) -> io::Result<()> {
    writeln!(output, "\n{}", result.summary())?;
    writeln!(output, "Verdict: {}", result.verdict)?;
    for metric in &result.metrics {
        writeln!(
            output,
            "{}: {}/{}",
            metric.label, metric.value, metric.bounds.max
        )?;
    }

    write_section(output, "Insights", &result.insights)?;
    write_section(output, "Recommendations", &result.recommendations)?;
    write_section(output, "Red flags", &result.red_flags)?;
    write_section(output, "Green flags", &result.green_flags)
}

fn write_section<W: Write>(output: &mut W, title: &str, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return Ok(());
    }
    writeln!(output, "\n{title}")?;
    for line in lines {
        writeln!(output, "- {line}")?;
    }
    Ok(())
}
