use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::models::{Answer, AssessmentResult, Question, QuestionType};

/// Response value marking a practical question or project task as done.
const COMPLETED: &str = "completed";

/// Score a set of answers against a day's question definitions.
///
/// Points per answer type:
/// - `yes_no` / `mcq`: 1 point, awarded iff the response matches
///   `correctAnswer`.
/// - `practical`: 1 point, awarded iff the response is "completed".
/// - `project`: one point per subtask, awarded per completed subtask.
///
/// Passing requires at least half the total points; ties pass. An answer
/// referencing a question id the day does not have is rejected outright.
pub fn evaluate(day: &str, questions: &[Question], answers: &[Answer]) -> Result<AssessmentResult> {
    let lookup: HashMap<i64, &Question> = questions.iter().map(|q| (q.id, q)).collect();

    let mut total: u32 = 0;
    let mut scored: u32 = 0;

    for answer in answers {
        let question = lookup.get(&answer.question_id).ok_or_else(|| {
            Error::NotFound(format!(
                "question {} not found for {day}",
                answer.question_id
            ))
        })?;

        match answer.answer_type {
            QuestionType::YesNo | QuestionType::Mcq => {
                let correct = question.correct_answer.as_deref().ok_or_else(|| {
                    Error::Store(format!("question {} has no correctAnswer", question.id))
                })?;
                total += 1;
                if answer.response.as_deref() == Some(correct) {
                    scored += 1;
                }
            }
            QuestionType::Practical => {
                total += 1;
                if answer.response.as_deref() == Some(COMPLETED) {
                    scored += 1;
                }
            }
            QuestionType::Project => {
                let tasks = answer.tasks.as_deref().unwrap_or_default();
                total += tasks.len() as u32;
                scored += tasks.iter().filter(|t| t.response == COMPLETED).count() as u32;
            }
        }
    }

    // scored >= total / 2, kept in integers so ties pass exactly.
    let pass = scored * 2 >= total;

    Ok(AssessmentResult {
        day: day.to_owned(),
        score: scored,
        total,
        pass,
    })
}
