//! Public gallery pages: the landing page and one gallery per registered
//! category. No session is required here.

use super::encode_filename;
use crate::AppState;
use crate::error::AppError;
use crate::models::{Category, GalleryImage};
use crate::templates::{GalleryTemplate, IndexTemplate};
use crate::utils::flash::take_flash;
use askama::Template;
use axum::extract::{Path, State};
use axum::response::{Html, IntoResponse, Response};
use axum_extra::extract::SignedCookieJar;

pub async fn index(jar: SignedCookieJar) -> Result<Response, AppError> {
    let (jar, flash) = take_flash(jar);
    let page = IndexTemplate {
        categories: &Category::ALL,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}

/// Renders the gallery for one category: every image file physically
/// present in the folder, joined with its description record (empty string
/// when absent). Files are listed in filename order; orphan description
/// records are not rendered.
pub async fn show_category(
    State(state): State<AppState>,
    jar: SignedCookieJar,
    Path(slug): Path<String>,
) -> Result<Response, AppError> {
    let category = Category::from_slug(&slug).ok_or(AppError::UnknownCategory(slug))?;

    let filenames = state.storage.list(category).await?;
    let descriptions = state.store.load(category).await?;

    let images = filenames
        .into_iter()
        .map(|filename| {
            let description = descriptions.get(&filename).cloned().unwrap_or_default();
            let encoded = encode_filename(&filename);
            GalleryImage {
                image_url: format!("/uploads/{}/{}", category.slug(), encoded),
                edit_url: format!("/edit/{}/{}", category.slug(), encoded),
                delete_url: format!("/delete/{}/{}", category.slug(), encoded),
                filename,
                description,
            }
        })
        .collect();

    let (jar, flash) = take_flash(jar);
    let page = GalleryTemplate {
        category,
        images,
        flash,
    };
    Ok((jar, Html(page.render()?)).into_response())
}
