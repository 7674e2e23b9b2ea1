use crate::error::ClientError;
use crate::models::{Course, CourseInput, Lesson, LessonInput, Module, ModuleInput};

use super::ApiClient;

// Courses
impl ApiClient {
    pub async fn list_courses(&self) -> Result<Vec<Course>, ClientError> {
        self.get(&["courses"]).await
    }

    pub async fn get_course(&self, course_id: &str) -> Result<Course, ClientError> {
        self.get(&["courses", course_id]).await
    }

    pub async fn create_course(&self, input: &CourseInput) -> Result<Course, ClientError> {
        self.post(&["courses"], input).await
    }

    pub async fn update_course(&self, course_id: &str, input: &CourseInput) -> Result<Course, ClientError> {
        self.put(&["courses", course_id], input).await
    }

    pub async fn delete_course(&self, course_id: &str) -> Result<(), ClientError> {
        self.delete(&["courses", course_id]).await
    }
}

// Modules
impl ApiClient {
    pub async fn list_modules(&self, course_id: &str) -> Result<Vec<Module>, ClientError> {
        let mut modules: Vec<Module> = self.get(&["courses", course_id, "modules"]).await?;
        modules.sort_by_key(|m| m.order_index);
        Ok(modules)
    }

    pub async fn create_module(&self, input: &ModuleInput) -> Result<Module, ClientError> {
        self.post(&["modules"], input).await
    }

    pub async fn update_module(&self, module_id: &str, input: &ModuleInput) -> Result<Module, ClientError> {
        self.put(&["modules", module_id], input).await
    }

    pub async fn delete_module(&self, module_id: &str) -> Result<(), ClientError> {
        self.delete(&["modules", module_id]).await
    }
}

// Lessons
impl ApiClient {
    pub async fn list_lessons(&self, module_id: &str) -> Result<Vec<Lesson>, ClientError> {
        let mut lessons: Vec<Lesson> = self.get(&["modules", module_id, "lessons"]).await?;
        lessons.sort_by_key(|l| l.order_index);
        Ok(lessons)
    }

    pub async fn get_lesson(&self, lesson_id: &str) -> Result<Lesson, ClientError> {
        self.get(&["lessons", lesson_id]).await
    }

    pub async fn create_lesson(&self, input: &LessonInput) -> Result<Lesson, ClientError> {
        self.post(&["lessons"], input).await
    }

    pub async fn update_lesson(&self, lesson_id: &str, input: &LessonInput) -> Result<Lesson, ClientError> {
        self.put(&["lessons", lesson_id], input).await
    }

    pub async fn delete_lesson(&self, lesson_id: &str) -> Result<(), ClientError> {
        self.delete(&["lessons", lesson_id]).await
    }
}
