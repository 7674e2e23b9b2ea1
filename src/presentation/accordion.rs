use std::collections::HashSet;

use crate::models::Module;
use crate::unlock::{lesson_rows, module_progress, module_quiz_available, LessonAccess};

/// Module header, one line per lesson with its lock state, then the module quiz.
pub fn render_module(
    module: &Module,
    completed_lessons: &HashSet<String>,
    passed_quizzes: &HashSet<String>,
    module_quiz_label: &str,
) -> String {
    let (done, total) = module_progress(module, completed_lessons);
    let minutes = module.total_duration();
    let header = if minutes > 0 {
        format!("{} ({}/{} · {}min)", module.title, done, total, minutes)
    } else {
        format!("{} ({}/{})", module.title, done, total)
    };
    let mut lines = vec![header];

    for row in lesson_rows(module, completed_lessons, passed_quizzes) {
        let mut line = format!("  {} {}", row.access.icon(), row.lesson.title);
        if let Some(minutes) = row.lesson.duration {
            line.push_str(&format!(" ({}min)", minutes));
        }
        if row.lesson.has_quiz {
            line.push_str(" + quiz");
        }
        if let LessonAccess::Locked { gate } = &row.access {
            line.push_str(&format!(" - {}", gate.caption()));
        }
        lines.push(line);
    }

    if module_quiz_available(module) {
        let quiz = module.quiz_id.as_deref().map(|id| format!(" [{}]", id)).unwrap_or_default();
        lines.push(format!("  ✎ {}{}", module_quiz_label, quiz));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Lesson;

    fn lesson(id: &str, order: i32) -> Lesson {
        Lesson {
            id: id.into(),
            module_id: None,
            title: format!("Lesson {}", id),
            video_url: None,
            duration: Some(10),
            order_index: order,
            quiz_id: None,
            has_quiz: false,
        }
    }

    #[test]
    fn test_module_quiz_listed_even_when_lessons_locked() {
        let module = Module {
            id: "m1".into(),
            course_id: None,
            title: "Módulo 1".into(),
            description: String::new(),
            order_index: 1,
            lessons: vec![lesson("a", 1), lesson("b", 2)],
            has_quiz: true,
            quiz_id: Some("final".into()),
        };

        let text = render_module(&module, &HashSet::new(), &HashSet::new(), "Prova do Módulo");
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Módulo 1 (0/2 · 20min)");
        assert_eq!(lines[1], "  ▶ Lesson a (10min)");
        assert_eq!(lines[2], "  🔒 Lesson b (10min) - Complete the previous lesson to unlock");
        assert_eq!(lines[3], "  ✎ Prova do Módulo [final]");
    }

    #[test]
    fn test_header_omits_unknown_duration() {
        let mut untimed = lesson("a", 1);
        untimed.duration = None;
        let module = Module {
            id: "m2".into(),
            course_id: None,
            title: "Módulo 2".into(),
            description: String::new(),
            order_index: 2,
            lessons: vec![untimed],
            has_quiz: false,
            quiz_id: None,
        };

        let completed: HashSet<String> = ["a".to_string()].into_iter().collect();
        let text = render_module(&module, &completed, &HashSet::new(), "Prova do Módulo");
        assert_eq!(text.lines().next(), Some("Módulo 2 (1/1)"));
        assert_eq!(text.lines().count(), 2);
    }
}
