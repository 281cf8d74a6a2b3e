//! Catalog filters and their `/services` query string.

use url::{Url, form_urlencoded};

/// Catalog categories as `(id, label)`. `all` disables the filter.
pub const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All Services"),
    ("video_editing", "Video Editing"),
    ("graphic_design", "Graphic Design"),
    ("thumbnails", "Thumbnails"),
    ("audio_enhancement", "Audio"),
    ("video_creation", "Video Creation"),
];

const ALL: &str = "all";
const DEFAULT_LIMIT: u32 = 20;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceQuery {
    pub category: String,
    pub search: String,
    pub skip: u32,
    pub limit: u32,
}

impl Default for ServiceQuery {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            search: String::new(),
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl ServiceQuery {
    /// Request path including only the filters that are set.
    pub fn to_path(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        let category = self.category.trim();
        if !category.is_empty() && category != ALL {
            serializer.append_pair("category", category);
        }
        let search = self.search.trim();
        if !search.is_empty() {
            serializer.append_pair("search", search);
        }
        if self.skip > 0 {
            serializer.append_pair("skip", &self.skip.to_string());
        }
        if self.limit != DEFAULT_LIMIT {
            serializer.append_pair("limit", &self.limit.to_string());
        }

        let query = serializer.finish();
        if query.is_empty() {
            "/services".to_string()
        } else {
            format!("/services?{query}")
        }
    }
}

/// Detail path for one service, with the id escaped as a single path segment.
pub fn service_path(service_id: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/services") else {
        return format!("/services/{service_id}");
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.push(service_id);
    }
    url.path().to_string()
}

/// Display label for a category id, falling back to the id itself.
pub fn category_label(id: &str) -> &str {
    CATEGORIES
        .iter()
        .find(|(candidate, _)| *candidate == id)
        .map_or(id, |(_, label)| *label)
}
