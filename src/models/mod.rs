pub mod certificate;
pub mod content;
pub mod course;
pub mod group;
pub mod progress;
pub mod quiz;
pub mod user;

pub use certificate::Certificate;
pub use content::{Faq, NewFaq, Settings};
pub use course::{Course, CourseInput, Lesson, LessonInput, Module, ModuleInput};
pub use group::{Group, GroupMemberProgress, NewGroup};
pub use progress::{Enrollment, Progress};
pub use quiz::{Question, Quiz, QuizResult, QuizSubmission};
pub use user::{AuthResponse, Credentials, Identity, Registration, Role, RoleAssignment, RoleSet};
