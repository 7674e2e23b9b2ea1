//! Stateless text views over data fetched through the API client.

pub mod accordion;
pub mod cards;
pub mod video;

pub use accordion::render_module;
pub use cards::{render_certificate_card, render_course_card};
pub use video::{render_video, VideoEmbed};
