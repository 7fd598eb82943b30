use grammar_quiz::QuestionBank;
use grammar_quiz::data::{parse_questions, read_questions_embedded};
use grammar_quiz::session::{EncouragementTier, Phase, QuizSession};

fn one_question_bank() -> QuestionBank {
    parse_questions(
        r#"
- id: 42
  sentence: "He is the boy ____ won the first prize."
  options:
    - { id: "a", text: "which" }
    - { id: "b", text: "who" }
  correct_option_id: "b"
  difficulty: junior
  category: relative_clause
  explanation:
    correct_answer: "who"
    rule: "Antecedente de persona como sujeto."
    example: "The girl who is dancing is my sister."
    common_mistake: "Usar which."
"#,
    )
    .expect("bank ok")
}

fn assert_aligned(session: &QuizSession) {
    assert_eq!(session.answers().len(), session.bank().len());
    for (a, q) in session.answers().iter().zip(session.bank().iter()) {
        assert_eq!(a.question_id, q.id);
    }
}

#[test]
fn correct_single_answer_finishes_with_full_score() {
    let mut session = QuizSession::new(one_question_bank());
    assert!(session.select_option("b"));
    assert_eq!(session.submit_answer(), Some(true));

    let answer = &session.answers()[0];
    assert_eq!(answer.question_id, 42);
    assert_eq!(answer.selected_option_id.as_deref(), Some("b"));
    assert_eq!(answer.is_correct, Some(true));

    assert!(session.advance());
    assert!(session.is_finished());
    assert_eq!(session.score(), 1);
    assert_eq!(session.encouragement(), EncouragementTier::Perfect);
}

#[test]
fn wrong_single_answer_scores_zero() {
    let mut session = QuizSession::new(one_question_bank());
    session.select_option("a");
    assert_eq!(session.submit_answer(), Some(false));
    assert_eq!(session.answers()[0].is_correct, Some(false));
    session.advance();
    assert_eq!(session.score(), 0);
}

fn three_question_bank() -> QuestionBank {
    let embedded = read_questions_embedded().expect("embedded bank");
    QuestionBank::new(embedded.questions()[..3].to_vec()).expect("bank ok")
}

fn wrong_option_of(session: &QuizSession) -> String {
    let question = session.current_question().unwrap();
    question
        .options
        .iter()
        .find(|o| o.id != question.correct_option_id)
        .map(|o| o.id.clone())
        .unwrap()
}

#[test]
fn last_question_cannot_finish_before_submitting() {
    let mut session = QuizSession::new(three_question_bank());
    let first_correct = session.current_question().unwrap().correct_option_id.clone();
    session.select_option(&first_correct);
    assert_eq!(session.submit_answer(), Some(true));
    assert!(session.advance());

    let second_wrong = wrong_option_of(&session);
    session.select_option(&second_wrong);
    assert_eq!(session.submit_answer(), Some(false));
    assert!(session.advance());

    assert_eq!(session.current_index(), 2);
    assert!(session.is_last_question());
    assert!(!session.advance());
    assert!(!session.is_finished());
    assert_eq!(session.current_index(), 2);

    let third = session.current_question().unwrap().options[0].id.clone();
    assert!(session.select_option(&third));
    assert!(!session.advance());
    assert!(!session.is_finished());
    assert_eq!(session.current_index(), 2);
    assert_eq!(session.phase(), Phase::Selected);
    assert_eq!(session.score(), 1);
    assert_aligned(&session);
}

#[test]
fn full_run_then_reset_restores_a_fresh_session() {
    let bank = read_questions_embedded().expect("embedded bank");
    let total = bank.len();
    let mut session = QuizSession::new(bank);

    while !session.is_finished() {
        let correct = session.current_question().unwrap().correct_option_id.clone();
        assert!(session.select_option(&correct));
        assert_eq!(session.submit_answer(), Some(true));
        assert!(session.advance());
        assert_aligned(&session);
    }

    assert_eq!(session.score(), total);
    assert_eq!(session.current_index(), total - 1);
    assert_eq!(session.encouragement(), EncouragementTier::Perfect);

    session.reset();
    assert_eq!(session.current_index(), 0);
    assert!(!session.is_finished());
    assert!(session.answers().iter().all(|a| a.is_correct.is_none()));
    assert_aligned(&session);
}
