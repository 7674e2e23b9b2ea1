use crate::models::{Certificate, Course};

fn format_duration(minutes: u32) -> String {
    match (minutes / 60, minutes % 60) {
        (0, m) => format!("{}min", m),
        (h, 0) => format!("{}h", h),
        (h, m) => format!("{}h {}min", h, m),
    }
}

pub fn render_course_card(course: &Course, enrolled: bool) -> String {
    let mut lines = vec![format!(
        "{}{}",
        course.title,
        if enrolled { "  [enrolled]" } else { "" }
    )];

    let mut meta = Vec::new();
    if let Some(instructor) = &course.instructor {
        meta.push(format!("by {}", instructor));
    }
    if let Some(minutes) = course.duration {
        meta.push(format_duration(minutes));
    }
    if !course.modules.is_empty() {
        meta.push(format!("{} modules", course.modules.len()));
    }
    if !meta.is_empty() {
        lines.push(format!("  {}", meta.join(" · ")));
    }

    if !course.description.is_empty() {
        lines.push(format!("  {}", course.description));
    }
    lines.push(format!("  id: {}", course.id));
    lines.join("\n")
}

pub fn render_certificate_card(certificate: &Certificate) -> String {
    let mut lines = vec![format!("Certificate #{}", certificate.certificate_number)];
    lines.push(format!(
        "  Course:  {}",
        certificate.course_title.as_deref().unwrap_or(&certificate.course_id)
    ));
    if let Some(student) = &certificate.student_name {
        lines.push(format!("  Student: {}", student));
    }
    lines.push(format!("  Issued:  {}", certificate.issued_at.format("%Y-%m-%d")));
    lines.join("\n")
}
