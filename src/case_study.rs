use dashmap::DashMap;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

#[cfg(feature = "ssr")]
use gray_matter::{engine::YAML, Matter};
#[cfg(feature = "ssr")]
use pulldown_cmark::{Options, Parser};

/// Scroll depth, in percent, past which the floating navigation shows.
pub const FLOATING_NAV_THRESHOLD_PERCENT: f64 = 25.0;

pub static GLOBAL_CASE_STUDY_CACHE: LazyLock<DashMap<String, CaseStudy>> =
    LazyLock::new(DashMap::new);

#[derive(Embed)]
#[folder = "content/case-studies"]
#[cfg_attr(feature = "hydrate", metadata_only = true)]
pub struct Assets;

#[cfg(feature = "ssr")]
#[derive(Deserialize, Debug, Default)]
struct FrontMatter {
    title: String,
    role: String,
    timeline: String,
    logo: Option<String>,
    #[serde(default)]
    description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyMeta {
    pub slug: String,
    pub title: String,
    pub role: String,
    pub timeline: String,
    pub logo: Option<String>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub meta: CaseStudyMeta,
    /// Rendered HTML body.
    pub content: String,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CaseStudyError {
    #[error("Case study not found: {0}")]
    NotFound(String),
    #[error("Couldn't parse case study {0}")]
    ParseError(String),
}

/// Slugs are lowercase ASCII words joined by hyphens.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(feature = "ssr")]
pub fn parse_case_study(slug: &str, raw: &str) -> Result<CaseStudy, CaseStudyError> {
    let matter = Matter::<YAML>::new();
    let parsed = matter
        .parse_with_struct::<FrontMatter>(raw)
        .ok_or_else(|| CaseStudyError::ParseError(slug.to_string()))?;
    let fm = parsed.data;

    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);
    let parser = Parser::new_ext(&parsed.content, options);

    let mut html_output = String::new();
    pulldown_cmark::html::push_html(&mut html_output, parser);

    Ok(CaseStudy {
        meta: CaseStudyMeta {
            slug: slug.to_string(),
            title: fm.title,
            role: fm.role,
            timeline: fm.timeline,
            logo: fm.logo,
            description: fm.description,
        },
        content: html_output,
    })
}

/// Load a case study by slug, rendering it once per process.
#[cfg(feature = "ssr")]
pub async fn get_case_study(slug: String) -> Result<CaseStudy, CaseStudyError> {
    let cache = &*GLOBAL_CASE_STUDY_CACHE;
    if let Some(study) = cache.get(&slug) {
        return Ok(study.clone());
    }
    if !is_valid_slug(&slug) {
        return Err(CaseStudyError::NotFound(slug));
    }
    let file = Assets::get(&format!("{slug}.md")).ok_or_else(|| CaseStudyError::NotFound(slug.clone()))?;
    let raw = std::str::from_utf8(&file.data).map_err(|_| CaseStudyError::ParseError(slug.clone()))?;
    let study = parse_case_study(&slug, raw)?;
    tracing::debug!(slug = %slug, "rendered case study");
    cache.insert(slug, study.clone());
    Ok(study)
}

/// How far down the page the reader is, in percent. A page that cannot
/// scroll reads as 0.
pub fn scroll_percentage(scroll_top: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_top / scrollable * 100.0).clamp(0.0, 100.0)
}

pub fn should_show_floating_nav(percentage: f64) -> bool {
    percentage > FLOATING_NAV_THRESHOLD_PERCENT
}
