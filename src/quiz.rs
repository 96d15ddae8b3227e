// src/quiz.rs

use crate::{db::TriviaStore, models::question::Question, utils::random::RandomSource};

/// Outcome of asking for the next quiz question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPick {
    Question(Question),
    /// Every eligible question has already been asked.
    Exhausted,
}

/// Picks one candidate uniformly at random.
pub fn pick_question(mut candidates: Vec<Question>, random: &dyn RandomSource) -> QuizPick {
    if candidates.is_empty() {
        return QuizPick::Exhausted;
    }
    let index = random.pick(candidates.len());
    QuizPick::Question(candidates.swap_remove(index))
}

/// Selects a random question not in `previous`, restricted to `category` when one is given.
pub async fn select_quiz_question(
    store: &dyn TriviaStore,
    random: &dyn RandomSource,
    category: Option<i64>,
    previous: &[i64],
) -> Result<QuizPick, sqlx::Error> {
    let mut excluded = previous.to_vec();
    excluded.sort_unstable();
    excluded.dedup();

    let candidates = store.quiz_candidates(category, &excluded).await?;
    tracing::debug!(
        "Quiz candidates: {} (category {:?}, {} excluded)",
        candidates.len(),
        category,
        excluded.len()
    );
    Ok(pick_question(candidates, random))
}
