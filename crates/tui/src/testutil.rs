//! Fixtures shared between rendering tests.

use edres_client::course::Course;
use ratatui::buffer::Buffer;
use serde_json::json;

/// Build a plausible course for rendering tests.
pub fn course(id: u64, title: &str) -> Course {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "subject": {
            "id": 1,
            "title": "General",
            "slug": "general",
            "is_miscellaneous_subject": false
        },
        "description": format!("All about {}.", title),
        "cover_image": format!("https://cdn.edres.com/covers/{}.jpg", id),
        "level": 1,
        "level_id": 1,
        "average_rating": 4.0,
        "enrolls_count": 10,
        "units_count": 3,
        "digital_pass": {
            "id": 1,
            "title": "Pass",
            "level": 1,
            "category_id": 1,
            "category_title": "General"
        },
        "language": "en",
        "created_at": "2024-01-01T00:00:00Z",
        "tags": ["tag"]
    }))
    .unwrap()
}

/// An error of the kind the client reports for a non-JSON body.
pub fn parse_error() -> edres_client::Error {
    edres_client::Error::SerdeError(
        serde_json::from_str::<serde_json::Value>("<!doctype html>").unwrap_err(),
    )
}

/// Flatten a render buffer to a newline-separated string.
pub fn buffer_text(buf: &Buffer) -> String {
    let mut out = String::new();
    for y in 0..buf.area.height {
        for x in 0..buf.area.width {
            out.push_str(buf.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}
