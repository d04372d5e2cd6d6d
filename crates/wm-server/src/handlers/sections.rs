//! Sections API endpoints.
//!
//! Backs the documentation landing page (all sections with article counts)
//! and section overviews (one section with its page links).

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use serde::Serialize;
use wm_nav::{DocSection, INDEX_SLUG, NavIndex};

use crate::error::ServerError;
use crate::state::AppState;

/// Section entry in GET /api/sections.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SectionSummary {
    id: String,
    slug: String,
    title: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    /// Zero-based position in reading order.
    position: usize,
    article_count: usize,
}

impl SectionSummary {
    fn new(index: &NavIndex, position: usize, section: &DocSection) -> Self {
        Self {
            id: section.id.clone(),
            slug: section.slug.clone(),
            title: section.title.clone(),
            path: index.canonical_path(&section.slug, INDEX_SLUG),
            description: section.description.clone(),
            position,
            article_count: section.items.len(),
        }
    }
}

/// Response for GET /api/sections.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SectionsResponse {
    sections: Vec<SectionSummary>,
    page_count: usize,
}

/// Page link in GET /api/sections/{slug}.
#[derive(Serialize)]
struct PageLink {
    title: String,
    slug: String,
    path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
}

/// Response for GET /api/sections/{slug}.
#[derive(Serialize)]
pub(crate) struct SectionResponse {
    #[serde(flatten)]
    section: SectionSummary,
    pages: Vec<PageLink>,
}

/// Handle GET /api/sections.
pub(crate) async fn list_sections(State(state): State<Arc<AppState>>) -> Json<SectionsResponse> {
    let index = &state.index;
    Json(SectionsResponse {
        sections: index
            .sections()
            .iter()
            .enumerate()
            .map(|(position, section)| SectionSummary::new(index, position, section))
            .collect(),
        page_count: index.page_count(),
    })
}

/// Handle GET /api/sections/{slug}.
pub(crate) async fn get_section(
    Path(slug): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<SectionResponse>, ServerError> {
    let index = &state.index;
    let section = index
        .find_section(&slug)
        .ok_or_else(|| ServerError::SectionNotFound(slug.clone()))?;
    let position = index
        .sections()
        .iter()
        .position(|s| std::ptr::eq(s, section))
        .unwrap_or_default();

    Ok(Json(SectionResponse {
        section: SectionSummary::new(index, position, section),
        pages: section
            .items
            .iter()
            .map(|item| PageLink {
                title: item.title.clone(),
                slug: item.slug.clone(),
                path: index.canonical_path(&section.slug, &item.slug),
                description: item.description.clone(),
            })
            .collect(),
    }))
}
