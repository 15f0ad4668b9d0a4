use quiz_forge::{
    AuthorApp, FileStorage, OptionKey, Question, QuizError, QuizSession, Storage, decode_all,
    encode,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample_questions() -> Vec<Question> {
    vec![
        Question::new("2+2?", ["3", "4", "5", "22"], OptionKey::B).unwrap(),
        Question::new("Capital of Japan?", ["Osaka", "Kyoto", "Tokyo", "Nara"], OptionKey::C).unwrap(),
        Question::new("Largest planet?", ["Jupiter", "Mars", "Venus", "Earth"], OptionKey::A).unwrap(),
        Question::new("H2O is?", ["Salt", "Air", "Iron", "Water"], OptionKey::D).unwrap(),
        Question::new("3*3?", ["6", "9", "12", "33"], OptionKey::B).unwrap(),
    ]
}

fn write_all(storage: &mut FileStorage, questions: &[Question]) {
    for question in questions {
        storage.append(&encode(question)).unwrap();
    }
}

#[test]
fn missing_file_decodes_to_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let storage = FileStorage::new(dir.path().join("quiz_storage.txt"));

    let decoded = decode_all(&storage.read().unwrap());
    assert!(decoded.questions.is_empty());
    assert_eq!(decoded.warning_count(), 0);
}

#[test]
fn appended_questions_read_back_in_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("quiz_storage.txt"));
    let questions = sample_questions();
    write_all(&mut storage, &questions);

    let decoded = decode_all(&storage.read().unwrap());
    assert_eq!(decoded.questions, questions);
    assert_eq!(storage.count_records().unwrap(), questions.len());
}

#[test]
fn concrete_block_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz_storage.txt");
    let mut storage = FileStorage::new(&path);
    write_all(&mut storage, &sample_questions()[..1]);

    assert_eq!(
        std::fs::read_to_string(&path).unwrap(),
        "Question: 2+2?\n[OPTIONS]\noption_a: 3\noption_b: 4\noption_c: 5\noption_d: 22\nCorrect Answer: option_b\n"
    );
}

#[test]
fn truncated_tail_is_skipped_with_one_warning() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("quiz_storage.txt"));
    write_all(&mut storage, &sample_questions()[..1]);
    storage.append("Question: unfinished\n[OPTIONS]\n").unwrap();

    let decoded = decode_all(&storage.read().unwrap());
    assert_eq!(decoded.questions.len(), 1);
    assert_eq!(decoded.warning_count(), 1);
}

#[test]
fn same_seed_same_order() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("quiz_storage.txt"));
    write_all(&mut storage, &sample_questions());

    let first = QuizSession::load(&storage, &mut StdRng::seed_from_u64(7)).unwrap();
    let second = QuizSession::load(&storage, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(first.questions(), second.questions());

    let mut prompts: Vec<_> = first.questions().iter().map(|q| q.prompt()).collect();
    prompts.sort();
    let mut expected: Vec<_> = sample_questions()
        .iter()
        .map(|q| q.prompt().to_string())
        .collect();
    expected.sort();
    assert_eq!(prompts, expected);
}

#[test]
fn authored_questions_are_scored() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("quiz_storage.txt");

    let mut author = AuthorApp::new(FileStorage::new(&path)).unwrap();
    for c in "2+2?".chars() {
        author.type_char(c);
    }
    for value in ["3", "4", "5", "22"] {
        author.focus_next();
        for c in value.chars() {
            author.type_char(c);
        }
    }
    author.focus_next();
    author.type_char('b');
    author.save_draft().unwrap();
    assert_eq!(author.record_count(), 1);

    let storage = FileStorage::new(&path);
    let mut session = QuizSession::load(&storage, &mut StdRng::seed_from_u64(1)).unwrap();
    session.submit(OptionKey::A);

    let report = session.report();
    assert_eq!(report.score, 0);
    assert_eq!(report.misses[0].chosen, "3");
    assert_eq!(report.misses[0].correct, "4");
}

#[test]
fn empty_file_ends_the_quiz() {
    let dir = tempfile::tempdir().unwrap();
    let mut storage = FileStorage::new(dir.path().join("quiz_storage.txt"));
    storage.append("notes only\n").unwrap();

    let result = QuizSession::load(&storage, &mut StdRng::seed_from_u64(0));
    assert!(matches!(result, Err(QuizError::NoQuestions(_))));
}
