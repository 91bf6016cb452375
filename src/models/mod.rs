use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed category registry for the tailoring business. The set is defined at
/// compile time; folders, routes, and the upload form are all derived from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Maorial,
    Weddings,
    GeneralAlterations,
    CustomJobs,
    Curtains,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Maorial,
        Category::Weddings,
        Category::GeneralAlterations,
        Category::CustomJobs,
        Category::Curtains,
    ];

    /// URL path segment and storage folder name.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Maorial => "maorial",
            Category::Weddings => "weddings",
            Category::GeneralAlterations => "general_alterations",
            Category::CustomJobs => "custom_jobs",
            Category::Curtains => "curtains",
        }
    }

    /// Human-readable label for page headings and the upload form.
    pub fn title(&self) -> &'static str {
        match self {
            Category::Maorial => "Maorial",
            Category::Weddings => "Weddings",
            Category::GeneralAlterations => "General Alterations",
            Category::CustomJobs => "Custom Jobs",
            Category::Curtains => "Curtains",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.slug() == slug)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One gallery entry: a physical image joined with its description record.
#[derive(Debug, Clone, Serialize)]
pub struct GalleryImage {
    pub filename: String,
    pub description: String,
    /// `/uploads/<slug>/<filename>` with the filename percent-encoded.
    pub image_url: String,
    pub edit_url: String,
    pub delete_url: String,
}
