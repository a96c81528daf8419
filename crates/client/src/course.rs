use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{Client, Result};

/// A subject area courses are filed under
#[derive(Clone, Debug, Deserialize)]
pub struct Subject {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub is_miscellaneous_subject: bool,
}

/// Bundled-access tier a course is sold under
#[derive(Clone, Debug, Deserialize)]
pub struct DigitalPass {
    pub id: u64,
    pub title: String,
    pub level: u32,
    pub category_id: u64,
    pub category_title: String,
}

/// A catalog entry
#[derive(Clone, Debug, Deserialize)]
pub struct Course {
    pub id: u64,
    pub title: String,
    pub subject: Subject,
    pub description: String,
    pub cover_image: String,
    pub level: u32,
    pub level_id: u64,
    pub average_rating: f64,
    pub enrolls_count: u64,
    pub units_count: u32,
    pub digital_pass: DigitalPass,
    pub language: String,
    pub created_at: DateTime<Utc>,
    pub tags: Vec<String>,
}

#[derive(Deserialize)]
struct CourseListResp {
    results: Vec<Course>,
}

impl Client {
    /// Get one page of the public course listing, in server order.
    pub fn courses(&self, page: u32, language: &str) -> Result<Vec<Course>> {
        self.get::<CourseListResp>(&format!(
            "api/edu/v3/public/course/course/?page={}&language={}",
            page, language
        ))
        .map(|r| r.results)
    }
}
