//! Per-question vote tallies.
//!
//! Results are recomputed from the full answer set on every call. A list
//! answer adds one to `total_votes` but one vote per element, so for
//! multi-select questions the vote sum may exceed `total_votes`.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::answer::Answer;
use crate::domain::foundation::QuestionId;
use crate::domain::survey::Question;

/// Tally for one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionResult {
    pub question_id: QuestionId,
    /// Vote count per rendered value label.
    pub votes: BTreeMap<String, u64>,
    /// Number of answer rows for the question.
    pub total_votes: u64,
}

impl QuestionResult {
    pub fn empty(question_id: QuestionId) -> Self {
        Self {
            question_id,
            votes: BTreeMap::new(),
            total_votes: 0,
        }
    }

    /// Sum of all vote counts.
    #[cfg(test)]
    pub(crate) fn vote_sum(&self) -> u64 {
        self.votes.values().sum()
    }
}

/// Tally every answer by question, sorted by question id.
///
/// Only questions that appear in `answers` get an entry.
pub fn aggregate(answers: &[Answer]) -> Vec<QuestionResult> {
    let mut tallies: BTreeMap<&QuestionId, QuestionResult> = BTreeMap::new();

    for answer in answers {
        let tally = tallies
            .entry(&answer.question_id)
            .or_insert_with(|| QuestionResult::empty(answer.question_id.clone()));
        tally.total_votes += 1;
        for label in answer.value.labels() {
            *tally.votes.entry(label).or_insert(0) += 1;
        }
    }

    tallies.into_values().collect()
}

/// Reorder `results` by the survey's question order, adding a zero row for
/// every question nobody answered.
///
/// Results for questions no longer on the survey are kept after the known
/// ones, sorted by question id.
pub fn with_unanswered(results: Vec<QuestionResult>, questions: &[Question]) -> Vec<QuestionResult> {
    let mut by_question: BTreeMap<QuestionId, QuestionResult> = results
        .into_iter()
        .map(|r| (r.question_id.clone(), r))
        .collect();

    let mut ordered: Vec<QuestionResult> = questions
        .iter()
        .map(|q| {
            by_question
                .remove(q.id())
                .unwrap_or_else(|| QuestionResult::empty(q.id().clone()))
        })
        .collect();

    ordered.extend(by_question.into_values());
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::answer::AnswerValue;
    use crate::domain::foundation::{SurveyId, Timestamp};
    use crate::domain::survey::{NewQuestion, QuestionType};
    use proptest::prelude::*;

    fn answer(question: &str, value: AnswerValue) -> Answer {
        Answer {
            survey_id: SurveyId::new("survey_1").unwrap(),
            question_id: QuestionId::new(question).unwrap(),
            user_id: None,
            value,
            created_at: Timestamp::now(),
        }
    }

    fn label(s: &str) -> AnswerValue {
        AnswerValue::Label(s.to_string())
    }

    fn labels(items: &[&str]) -> AnswerValue {
        AnswerValue::Labels(items.iter().map(|s| s.to_string()).collect())
    }

    fn votes(pairs: &[(&str, u64)]) -> BTreeMap<String, u64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    fn boolean_question(text: &str) -> Question {
        Question::create(
            NewQuestion {
                text: text.to_string(),
                question_type: QuestionType::Boolean,
                options: vec![],
                min: None,
                max: None,
                required: true,
            },
            0,
        )
        .unwrap()
    }

    // ════════════════════════════════════════════════════════════════════════
    // Scenarios
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn single_choice_counts_each_label() {
        let answers = vec![
            answer("q1", label("Yes")),
            answer("q1", label("Yes")),
            answer("q1", label("No")),
        ];

        let results = aggregate(&answers);

        assert_eq!(results.len(), 1);
        assert_eq!(results[0].question_id.as_str(), "q1");
        assert_eq!(results[0].votes, votes(&[("Yes", 2), ("No", 1)]));
        assert_eq!(results[0].total_votes, 3);
    }

    #[test]
    fn multi_select_counts_elements_but_rows_once() {
        let answers = vec![answer("q1", labels(&["A", "B"])), answer("q1", labels(&["B"]))];

        let results = aggregate(&answers);

        assert_eq!(results[0].votes, votes(&[("A", 1), ("B", 2)]));
        assert_eq!(results[0].total_votes, 2);
        assert_eq!(results[0].vote_sum(), 3);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(aggregate(&[]).is_empty());
    }

    #[test]
    fn numbers_and_flags_render_as_labels() {
        let answers = vec![
            answer("q1", AnswerValue::Number(5.0)),
            answer("q2", AnswerValue::Flag(true)),
        ];

        let results = aggregate(&answers);

        assert_eq!(results.len(), 2);
        assert_eq!(results[0].question_id.as_str(), "q1");
        assert_eq!(results[0].votes, votes(&[("5", 1)]));
        assert_eq!(results[0].total_votes, 1);
        assert_eq!(results[1].question_id.as_str(), "q2");
        assert_eq!(results[1].votes, votes(&[("true", 1)]));
        assert_eq!(results[1].total_votes, 1);
    }

    #[test]
    fn unrecognised_values_use_json_text() {
        let answers = vec![
            answer("q1", AnswerValue::Other(serde_json::json!({"a": 1}))),
            answer("q1", AnswerValue::Other(serde_json::Value::Null)),
        ];

        let results = aggregate(&answers);

        assert_eq!(results[0].votes, votes(&[("null", 1), (r#"{"a":1}"#, 1)]));
        assert_eq!(results[0].total_votes, 2);
    }

    #[test]
    fn empty_list_counts_a_row_without_votes() {
        let results = aggregate(&[answer("q1", labels(&[]))]);
        assert_eq!(results[0].total_votes, 1);
        assert!(results[0].votes.is_empty());
    }

    #[test]
    fn results_serialize_in_camel_case() {
        let results = aggregate(&[answer("q1", label("Yes"))]);
        let json = serde_json::to_value(&results).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "questionId": "q1", "votes": { "Yes": 1 }, "totalVotes": 1 }])
        );
    }

    // ════════════════════════════════════════════════════════════════════════
    // Unanswered questions
    // ════════════════════════════════════════════════════════════════════════

    #[test]
    fn with_unanswered_follows_question_order_and_fills_gaps() {
        let first = boolean_question("First");
        let second = boolean_question("Second");
        let answers = vec![answer(second.id().as_str(), AnswerValue::Flag(false))];

        let results = with_unanswered(aggregate(&answers), &[first.clone(), second.clone()]);

        assert_eq!(results.len(), 2);
        assert_eq!(&results[0], &QuestionResult::empty(first.id().clone()));
        assert_eq!(&results[1].question_id, second.id());
        assert_eq!(results[1].total_votes, 1);
    }

    #[test]
    fn with_unanswered_keeps_results_for_removed_questions() {
        let kept = boolean_question("Kept");
        let answers = vec![answer("gone", label("x"))];

        let results = with_unanswered(aggregate(&answers), &[kept.clone()]);

        assert_eq!(results.len(), 2);
        assert_eq!(&results[0].question_id, kept.id());
        assert_eq!(results[1].question_id.as_str(), "gone");
    }

    // ════════════════════════════════════════════════════════════════════════
    // Properties
    // ════════════════════════════════════════════════════════════════════════

    fn scalar_value() -> impl Strategy<Value = AnswerValue> {
        prop_oneof![
            "[A-D]".prop_map(AnswerValue::Label),
            (0i32..10).prop_map(|n| AnswerValue::Number(f64::from(n))),
            any::<bool>().prop_map(AnswerValue::Flag),
        ]
    }

    fn any_value() -> impl Strategy<Value = AnswerValue> {
        prop_oneof![
            scalar_value(),
            prop::collection::vec("[A-D]", 0..4).prop_map(AnswerValue::Labels),
        ]
    }

    fn answers_from(values: Vec<(u8, AnswerValue)>) -> Vec<Answer> {
        values
            .into_iter()
            .map(|(q, v)| answer(&format!("q{}", q), v))
            .collect()
    }

    proptest! {
        #[test]
        fn aggregation_is_idempotent(values in prop::collection::vec((0u8..4, any_value()), 0..40)) {
            let answers = answers_from(values);
            prop_assert_eq!(aggregate(&answers), aggregate(&answers));
        }

        #[test]
        fn scalar_votes_sum_to_total(values in prop::collection::vec((0u8..4, scalar_value()), 0..40)) {
            let answers = answers_from(values);
            for result in aggregate(&answers) {
                prop_assert_eq!(result.vote_sum(), result.total_votes);
            }
        }

        #[test]
        fn totals_match_row_counts(values in prop::collection::vec((0u8..4, any_value()), 0..40)) {
            let answers = answers_from(values);
            let results = aggregate(&answers);
            let total: u64 = results.iter().map(|r| r.total_votes).sum();
            prop_assert_eq!(total, answers.len() as u64);
            for result in &results {
                prop_assert!(result.total_votes > 0);
            }
        }

        #[test]
        fn output_is_independent_of_input_order(values in prop::collection::vec((0u8..4, any_value()), 0..40)) {
            let answers = answers_from(values);
            let mut reversed = answers.clone();
            reversed.reverse();
            prop_assert_eq!(aggregate(&answers), aggregate(&reversed));
        }
    }
}
