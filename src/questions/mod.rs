/// Question bank module
///
/// Read-only question data consumed by the board: filter by topic and point
/// value, then pick one at random.
pub mod bank;
pub mod topic;

pub use bank::{Question, QuestionBank, QUESTION_POINTS};
pub use topic::{Topic, TopicFilter};
