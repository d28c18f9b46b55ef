use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionType {
    YesNo,
    Mcq,
    Practical,
    Project,
}

/// A question as stored in a day file. Extra keys in the file are
/// ignored here; unfiltered days are served from the raw JSON instead.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(default)]
    pub options: Option<serde_json::Value>,
    #[serde(rename = "correctAnswer", default)]
    pub correct_answer: Option<String>,
    #[serde(default)]
    pub order: Option<i64>,
    #[serde(default)]
    pub topic: Option<String>,
}

/// Client-facing projection of a question, with `correctAnswer` stripped.
#[derive(Debug, Serialize)]
pub struct PublicQuestion {
    pub id: i64,
    #[serde(rename = "type")]
    pub question_type: QuestionType,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
}

impl From<Question> for PublicQuestion {
    fn from(q: Question) -> Self {
        Self {
            id: q.id,
            question_type: q.question_type,
            question: q.question,
            options: q.options,
            order: q.order,
            topic: q.topic,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct TaskAnswer {
    pub task_key: String,
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct Answer {
    pub question_id: i64,
    #[serde(rename = "type")]
    pub answer_type: QuestionType,
    #[serde(default)]
    pub response: Option<String>,
    #[serde(default)]
    pub tasks: Option<Vec<TaskAnswer>>,
}

#[derive(Debug, Deserialize)]
pub struct SubmitAnswersRequest {
    pub day: String,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    Locked,
    Unlocked,
    Completed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEntry {
    pub status: DayStatus,
    pub message: String,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct AssessmentResult {
    pub day: String,
    pub score: u32,
    pub total: u32,
    pub pass: bool,
}
