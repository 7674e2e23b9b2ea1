mod common;

use academy_client::models::Module;
use academy_client::unlock::{is_unlocked, lesson_rows, unlock_states, Gate, LessonAccess};
use common::{ids, lesson, quizzed};

#[test]
fn first_lesson_is_always_unlocked() {
    let modules = vec![
        vec![lesson("a", 1)],
        vec![quizzed("a", 1, "qa"), lesson("b", 2)],
        vec![lesson("a", 1), lesson("b", 2), lesson("c", 3)],
    ];

    for lessons in &modules {
        assert!(is_unlocked(&lessons[0], 0, lessons, &ids(&[]), &ids(&[])));
        assert!(is_unlocked(&lessons[0], 0, lessons, &ids(&["x"]), &ids(&["y"])));
    }
}

#[test]
fn nothing_completed_unlocks_only_the_first_lesson() {
    let lessons = vec![lesson("l1", 1), lesson("l2", 2), lesson("l3", 3)];
    assert_eq!(unlock_states(&lessons, &ids(&[]), &ids(&[])), vec![true, false, false]);
}

#[test]
fn completing_lesson_one_unlocks_lesson_two() {
    let lessons = vec![lesson("l1", 1), lesson("l2", 2), lesson("l3", 3)];
    assert_eq!(unlock_states(&lessons, &ids(&["l1"]), &ids(&[])), vec![true, true, false]);
}

#[test]
fn passed_quiz_unlocks_next_lesson_regardless_of_completion() {
    let lessons = vec![lesson("l1", 1), quizzed("l2", 2, "q1"), lesson("l3", 3)];

    // lesson 2's own state follows lesson 1's completion
    assert_eq!(unlock_states(&lessons, &ids(&[]), &ids(&["q1"])), vec![true, false, true]);
    assert_eq!(unlock_states(&lessons, &ids(&["l1"]), &ids(&["q1"])), vec![true, true, true]);
}

#[test]
fn quiz_gate_ignores_completion_of_the_quizzed_lesson() {
    let lessons = vec![quizzed("l1", 1, "q1"), lesson("l2", 2)];
    assert!(!is_unlocked(&lessons[1], 1, &lessons, &ids(&["l1"]), &ids(&[])));
    assert!(is_unlocked(&lessons[1], 1, &lessons, &ids(&[]), &ids(&["q1"])));
}

#[test]
fn lesson_without_quiz_needs_predecessor_completed() {
    let lessons = vec![lesson("l1", 1), lesson("l2", 2)];
    assert!(!is_unlocked(&lessons[1], 1, &lessons, &ids(&[]), &ids(&["q1"])));
    assert!(is_unlocked(&lessons[1], 1, &lessons, &ids(&["l1"]), &ids(&[])));
}

#[test]
fn quiz_flag_without_quiz_id_falls_back_to_completion() {
    let mut flagged = lesson("l1", 1);
    flagged.has_quiz = true;
    let lessons = vec![flagged, lesson("l2", 2)];

    assert!(!is_unlocked(&lessons[1], 1, &lessons, &ids(&[]), &ids(&[])));
    assert!(is_unlocked(&lessons[1], 1, &lessons, &ids(&["l1"]), &ids(&[])));
}

#[test]
fn unlock_looks_back_only_one_lesson() {
    // A incomplete, B's quiz passed: C opens on B's gate alone
    let lessons = vec![lesson("a", 1), quizzed("b", 2, "qb"), lesson("c", 3)];
    let completed = ids(&[]);
    let passed = ids(&["qb"]);

    assert!(!is_unlocked(&lessons[1], 1, &lessons, &completed, &passed));
    assert!(is_unlocked(&lessons[2], 2, &lessons, &completed, &passed));
}

#[test]
fn unlock_is_deterministic() {
    let lessons = vec![lesson("a", 1), quizzed("b", 2, "qb"), lesson("c", 3), lesson("d", 4)];
    let completed = ids(&["a", "c"]);
    let passed = ids(&[]);

    let first = unlock_states(&lessons, &completed, &passed);
    for _ in 0..10 {
        assert_eq!(unlock_states(&lessons, &completed, &passed), first);
    }
    assert_eq!(first, vec![true, true, false, true]);
}

#[test]
fn accordion_rows_explain_locks() {
    let module = Module {
        id: "m1".into(),
        course_id: Some("c1".into()),
        title: "Módulo 1".into(),
        description: String::new(),
        order_index: 1,
        lessons: vec![lesson("l1", 1), quizzed("l2", 2, "q1"), lesson("l3", 3)],
        has_quiz: false,
        quiz_id: None,
    };

    let rows = lesson_rows(&module, &ids(&[]), &ids(&[]));
    assert_eq!(rows[0].access, LessonAccess::Unlocked);
    assert_eq!(
        rows[1].access,
        LessonAccess::Locked { gate: Gate::PreviousLesson { lesson_id: "l1".into() } }
    );
    assert_eq!(
        rows[2].access,
        LessonAccess::Locked { gate: Gate::PreviousQuiz { quiz_id: "q1".into() } }
    );
    assert!(!rows[2].access.is_accessible());
}
