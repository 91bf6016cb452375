use crate::models::{Category, GalleryImage};
use askama::Template;

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub categories: &'static [Category],
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "upload.html")]
pub struct UploadTemplate {
    pub categories: &'static [Category],
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "gallery.html")]
pub struct GalleryTemplate {
    pub category: Category,
    pub images: Vec<GalleryImage>,
    pub flash: Option<String>,
}

#[derive(Template)]
#[template(path = "edit.html")]
pub struct EditTemplate {
    pub category: Category,
    pub filename: String,
    pub description: String,
    pub action_url: String,
    pub flash: Option<String>,
}
