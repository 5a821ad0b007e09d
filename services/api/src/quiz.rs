use std::io::{self, BufRead, Write};

use launchwise::assessments::{
    Assessment, ChoiceOption, QuestionKind, QuestionnaireRunner, ScoringResult, StepOutcome,
};

/// Walk a tool's questions over a line-based terminal.
///
/// Choice questions take the option number (or its value), `b` steps back, and an empty line
/// keeps a previous answer. Returns `None` when input ends before the last question.
pub(crate) fn run_quiz<R, W>(
    assessment: &dyn Assessment,
    mut input: R,
    output: &mut W,
) -> io::Result<Option<ScoringResult>>
where
    R: BufRead,
    W: Write,
{
    let mut runner = QuestionnaireRunner::new(assessment);
    writeln!(output, "{}", assessment.kind().title())?;
    writeln!(output, "{}", assessment.kind().description())?;

    while let Some(question) = runner.current_question() {
        writeln!(
            output,
            "\nQuestion {} of {}: {}",
            runner.step(),
            runner.total_steps(),
            question.prompt
        )?;
        match question.kind {
            QuestionKind::SingleChoice { options } => {
                for (index, option) in options.iter().enumerate() {
                    writeln!(output, "  {}. {}", index + 1, option.label)?;
                }
            }
            QuestionKind::FreeText { placeholder } => {
                writeln!(output, "  e.g. {placeholder}")?;
            }
        }
        write!(output, "> ")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let line = line.trim();

        if line.eq_ignore_ascii_case("b") {
            if !runner.retreat() {
                writeln!(output, "Already at the first question.")?;
            }
            continue;
        }

        if line.is_empty() {
            if !runner.can_advance() {
                writeln!(output, "An answer is required.")?;
                continue;
            }
        } else {
            let value = match question.kind {
                QuestionKind::SingleChoice { options } => choice_value(options, line),
                QuestionKind::FreeText { .. } => line,
            };
            if let Err(err) = runner.answer_current(value) {
                writeln!(output, "{err}")?;
                continue;
            }
        }

        if let StepOutcome::Completed(result) = runner.advance() {
            return Ok(Some(result));
        }
    }

    Ok(None)
}

fn choice_value<'a>(options: &'static [ChoiceOption], line: &'a str) -> &'a str {
    match line.parse::<usize>() {
        Ok(number) if (1..=options.len()).contains(&number) => options[number - 1].value,
        _ => line,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use launchwise::assessments::ToolKind;
    use std::io::Cursor;

    fn play(tool: ToolKind, script: &str) -> (Option<ScoringResult>, String) {
        let mut output = Vec::new();
        let result = run_quiz(tool.assessment(), Cursor::new(script.to_string()), &mut output)
            .expect("io succeeds");
        (result, String::from_utf8(output).expect("utf8"))
    }

    #[test]
    fn numbered_answers_complete_the_launch_diagnostic() {
        let (result, transcript) = play(ToolKind::LaunchDiagnostic, "4\n4\n4\n4\n4\n4\n4\n");

        let result = result.expect("completed");
        assert_eq!(result.percentage, 100);
        assert!(transcript.contains("Question 1 of 7: How many people follow you"));
        assert!(transcript.contains("  4. More than 1,000"));
    }

    #[test]
    fn invalid_and_blank_input_reprompt_the_same_question() {
        let (result, transcript) = play(ToolKind::LaunchDiagnostic, "\n9\nfrogs\n");

        assert!(result.is_none());
        assert!(transcript.contains("An answer is required."));
        assert!(transcript.contains("'9' is not an option for question 'audience_size'"));
        assert!(transcript.contains("'frogs' is not an option"));
        assert!(!transcript.contains("Question 2 of 7"));
    }

    #[test]
    fn back_returns_to_previous_question_and_blank_keeps_its_answer() {
        let script = "b\n1\nb\n\n1\n1\n1\n1\n1\n1\n";
        let (result, transcript) = play(ToolKind::LaunchDiagnostic, script);

        let result = result.expect("completed");
        assert_eq!(result.raw_score, 0);
        assert!(transcript.contains("Already at the first question."));
        assert_eq!(transcript.matches("Question 1 of 7").count(), 3);
    }

    #[test]
    fn free_text_questions_accept_the_typed_line() {
        let script = "Invoicing for dentists\nEveryone\n1\n1\n1\n1\n1\n";
        let (result, _) = play(ToolKind::ProjectScorer, script);

        let result = result.expect("completed");
        assert!(result
            .red_flags
            .iter()
            .any(|flag| flag.contains("\"Everyone\" is not a customer")));
    }
}
