use serde::Deserialize;

use crate::{
    error::{AppError, AppResult},
    models::{MovieCandidate, MovieDetail},
};

pub struct TmdbClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl TmdbClient {
    pub fn new(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        if api_key.trim().is_empty() {
            tracing::warn!("no TMDB_API_KEY provided, film lookups will fail");
        }
        Self { client, api_key, base_url }
    }

    pub async fn search(&self, title: &str) -> AppResult<Vec<MovieCandidate>> {
        let url = format!("{}/search/movie", self.base_url.trim_end_matches('/'));
        let resp: SearchResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str()), ("query", title)])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        Ok(resp.results.into_iter().map(candidate_from).collect())
    }

    pub async fn fetch_detail(&self, id: i32) -> AppResult<MovieDetail> {
        let url = format!("{}/movie/{}", self.base_url.trim_end_matches('/'), id);
        let resp: DetailResponse = self
            .client
            .get(url)
            .query(&[("api_key", self.api_key.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        detail_from(resp)
    }
}

fn candidate_from(movie: SearchMovie) -> MovieCandidate {
    MovieCandidate {
        id: movie.id,
        title: movie.title,
        release_date: movie.release_date.unwrap_or_default(),
    }
}

fn detail_from(resp: DetailResponse) -> AppResult<MovieDetail> {
    let release_date = resp
        .release_date
        .filter(|d| !d.is_empty())
        .ok_or(AppError::MalformedResponse("release_date"))?;
    let poster_path = resp.poster_path.ok_or(AppError::MalformedResponse("poster_path"))?;

    Ok(MovieDetail {
        id: resp.id,
        title: resp.title,
        release_date,
        overview: resp.overview.unwrap_or_default(),
        poster_path,
    })
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    results: Vec<SearchMovie>,
}

#[derive(Debug, Deserialize)]
struct SearchMovie {
    id: i32,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    id: i32,
    title: String,
    #[serde(default)]
    release_date: Option<String>,
    #[serde(default)]
    overview: Option<String>,
    #[serde(default)]
    poster_path: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_search_results_with_and_without_dates() {
        let body = r#"{
            "page": 1,
            "results": [
                {"id": 27205, "title": "Inception", "release_date": "2010-07-16"},
                {"id": 64956, "title": "Inception: The Cobol Job"}
            ],
            "total_results": 2
        }"#;

        let resp: SearchResponse = serde_json::from_str(body).expect("decode");
        let candidates: Vec<_> = resp.results.into_iter().map(candidate_from).collect();

        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].id, 27205);
        assert_eq!(candidates[0].title, "Inception");
        assert_eq!(candidates[0].release_date, "2010-07-16");
        assert_eq!(candidates[1].release_date, "");
    }

    #[test]
    fn decodes_full_detail() {
        let body = r#"{
            "id": 27205,
            "title": "Inception",
            "release_date": "2010-07-16",
            "overview": "A thief who steals corporate secrets.",
            "poster_path": "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg"
        }"#;

        let resp: DetailResponse = serde_json::from_str(body).expect("decode");
        let detail = detail_from(resp).expect("detail");
        assert_eq!(detail.id, 27205);
        assert_eq!(detail.release_date, "2010-07-16");
        assert_eq!(detail.poster_path, "/9gk7adHYeDvHkCSEqAvQNLV5Uge.jpg");
    }

    #[test]
    fn missing_poster_path_is_malformed() {
        let body = r#"{"id": 1, "title": "Obscure", "release_date": "1999-01-01"}"#;
        let resp: DetailResponse = serde_json::from_str(body).expect("decode");
        let err = detail_from(resp).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse("poster_path")));
    }

    #[test]
    fn empty_release_date_is_malformed() {
        let body = r#"{"id": 1, "title": "Unreleased", "release_date": "", "poster_path": "/x.jpg"}"#;
        let resp: DetailResponse = serde_json::from_str(body).expect("decode");
        let err = detail_from(resp).unwrap_err();
        assert!(matches!(err, AppError::MalformedResponse("release_date")));
    }
}
