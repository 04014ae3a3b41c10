use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Lightweight search hit, enough to let the user pick the right film.
#[derive(Clone, Debug)]
pub struct MovieCandidate {
    pub id: i32,
    pub title: String,
    pub release_date: String,
}

/// Full detail for one film as returned by the catalog's id endpoint.
#[derive(Clone, Debug)]
pub struct MovieDetail {
    pub id: i32,
    pub title: String,
    pub release_date: String,
    pub overview: String,
    pub poster_path: String,
}

/// A record ready for insertion. Rating and review stay empty until the
/// user edits the movie.
#[derive(Clone, Debug)]
pub struct NewMovie {
    pub id: i32,
    pub title: String,
    pub year: i32,
    pub description: Option<String>,
    pub img_url: String,
}

impl NewMovie {
    pub fn from_detail(detail: MovieDetail, image_base_url: &str) -> AppResult<Self> {
        let year = release_year(&detail.release_date)?;
        let description = html_escape::decode_html_entities(&detail.overview).into_owned();
        let description = (!description.trim().is_empty()).then_some(description);

        Ok(Self {
            id: detail.id,
            title: detail.title,
            year,
            description,
            img_url: format!("{}{}", image_base_url.trim_end_matches('/'), detail.poster_path),
        })
    }
}

fn release_year(release_date: &str) -> AppResult<i32> {
    release_date
        .get(..4)
        .filter(|p| p.bytes().all(|b| b.is_ascii_digit()))
        .and_then(|p| p.parse().ok())
        .ok_or_else(|| AppError::MalformedDate(release_date.to_string()))
}

#[derive(Clone, Debug, PartialEq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self { field, message: message.into() }
    }
}

pub const REVIEW_MAX_LEN: usize = 250;

#[derive(Debug, Deserialize)]
pub struct AddForm {
    pub title: String,
}

impl AddForm {
    /// Returns the trimmed title, or the list of field errors to re-render.
    pub fn validate(&self) -> Result<String, Vec<FieldError>> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(vec![FieldError::new("title", "Title is required")]);
        }
        Ok(title.to_string())
    }
}

#[derive(Debug, Deserialize)]
pub struct EditForm {
    pub rating: String,
    pub review: String,
}

impl EditForm {
    /// Both fields are required; the rating must be a number out of 10.
    pub fn validate(&self) -> Result<(f64, String), Vec<FieldError>> {
        let mut errors = Vec::new();

        let rating = self.rating.trim();
        let mut parsed = None;
        if rating.is_empty() {
            errors.push(FieldError::new("rating", "Rating is required"));
        } else {
            match rating.parse::<f64>() {
                Ok(r) if (0.0..=10.0).contains(&r) => parsed = Some(r),
                Ok(_) => errors.push(FieldError::new("rating", "Rating must be between 0 and 10")),
                Err(_) => errors.push(FieldError::new("rating", "Rating must be a number")),
            }
        }

        let review = self.review.trim();
        if review.is_empty() {
            errors.push(FieldError::new("review", "Review is required"));
        } else if review.chars().count() > REVIEW_MAX_LEN {
            errors.push(FieldError::new(
                "review",
                format!("Review must be at most {REVIEW_MAX_LEN} characters"),
            ));
        }

        match (parsed, errors.is_empty()) {
            (Some(rating), true) => Ok((rating, review.to_string())),
            _ => Err(errors),
        }
    }
}
