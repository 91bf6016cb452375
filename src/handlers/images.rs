//! Admin-only image management: upload, delete, and description editing.
//! All routes here sit behind the session guard.

use super::encode_filename;
use crate::AppState;
use crate::error::AppError;
use crate::models::Category;
use crate::templates::{EditTemplate, UploadTemplate};
use crate::utils::flash::{set_flash, take_flash};
use crate::utils::validation::{has_allowed_extension, sanitize_filename};
use askama::Template;
use axum::Form;
use axum::extract::{Multipart, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum_extra::extract::SignedCookieJar;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct EditForm {
    #[serde(default)]
    pub description: String,
}

pub async fn upload_form(jar: SignedCookieJar) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let page = UploadTemplate {
        categories: &Category::ALL,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// Accepts a multipart form with `category`, `file`, and an optional
/// `description`. An unknown category is a client error; a missing file or
/// a disallowed extension bounces back to the form with a notice and no
/// mutation. A successful upload writes the file bytes and upserts the
/// description, replacing both silently when the filename already exists.
pub async fn upload(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    mut multipart: Multipart,
) -> Result<Response, AppError> {
    let mut category_slug: Option<String> = None;
    let mut description = String::new();
    let mut file: Option<(String, axum::body::Bytes)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(e.to_string()))?
    {
        let name = field.name().unwrap_or_default().to_string();

        match name.as_str() {
            "category" => {
                category_slug = Some(
                    field
                        .text()
                        .await
                        .map_err(|e| AppError::BadRequest(e.to_string()))?,
                );
            }
            "description" => {
                description = field
                    .text()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
            }
            "file" => {
                let original = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| AppError::BadRequest(e.to_string()))?;
                file = Some((original, bytes));
            }
            _ => {}
        }
    }

    let slug = category_slug.ok_or_else(|| AppError::BadRequest("Missing category".to_string()))?;
    let category = Category::from_slug(&slug)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown category '{}'", slug)))?;

    let Some((original, bytes)) = file else {
        return Ok(invalid_file(jar));
    };
    if original.is_empty() || bytes.is_empty() || !has_allowed_extension(&original) {
        return Ok(invalid_file(jar));
    }
    let filename = match sanitize_filename(&original) {
        Ok(name) => name,
        Err(e) => {
            tracing::warn!("Rejected upload filename '{}': {}", original, e);
            return Ok(invalid_file(jar));
        }
    };

    state.storage.save(category, &filename, &bytes).await?;
    state.store.upsert(category, &filename, &description).await?;

    tracing::info!(
        "Uploaded {} ({} bytes) to category {}",
        filename,
        bytes.len(),
        category
    );
    let jar = set_flash(jar, "Upload successful!");
    Ok((jar, Redirect::to(&format!("/{}", category.slug()))).into_response())
}

fn invalid_file(jar: SignedCookieJar) -> Response {
    let jar = set_flash(jar, "Invalid file.");
    (jar, Redirect::to("/upload")).into_response()
}

/// Removes the physical file and its description record. Both halves are
/// no-ops when already absent, so deleting twice is harmless.
pub async fn delete(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((slug, filename)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let category = Category::from_slug(&slug).ok_or(AppError::UnknownCategory(slug))?;
    let filename =
        sanitize_filename(&filename).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let removed = state.storage.delete(category, &filename).await?;
    state.store.remove(category, &filename).await?;

    if removed {
        tracing::info!("Deleted {} from category {}", filename, category);
    }
    let jar = set_flash(jar, "Image deleted.");
    Ok((jar, Redirect::to(&format!("/{}", category.slug()))).into_response())
}

pub async fn edit_form(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((slug, filename)): Path<(String, String)>,
) -> Result<Response, AppError> {
    let category = Category::from_slug(&slug).ok_or(AppError::UnknownCategory(slug))?;
    let filename =
        sanitize_filename(&filename).map_err(|e| AppError::BadRequest(e.to_string()))?;

    let descriptions = state.store.load(category).await?;
    let description = descriptions.get(&filename).cloned().unwrap_or_default();

    let (jar, flash) = take_flash(jar);
    let page = EditTemplate {
        category,
        action_url: format!("/edit/{}/{}", category.slug(), encode_filename(&filename)),
        filename,
        description,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// Persists a new description for a filename. There is deliberately no
/// check that the image still exists: editing a deleted or never-uploaded
/// filename creates an orphan record, which the gallery tolerates.
pub async fn edit(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path((slug, filename)): Path<(String, String)>,
    Form(form): Form<EditForm>,
) -> Result<Response, AppError> {
    let category = Category::from_slug(&slug).ok_or(AppError::UnknownCategory(slug))?;
    let filename =
        sanitize_filename(&filename).map_err(|e| AppError::BadRequest(e.to_string()))?;

    state
        .store
        .upsert(category, &filename, &form.description)
        .await?;

    let jar = set_flash(jar, "Description updated.");
    Ok((jar, Redirect::to(&format!("/{}", category.slug()))).into_response())
}
