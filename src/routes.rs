use std::sync::Arc;

use axum::{
    extract::{Form, Path, State},
    response::{Html, IntoResponse, Redirect, Response},
};

use crate::{
    AppState,
    error::AppResult,
    models::{AddForm, EditForm, NewMovie},
    templates,
};

pub async fn home(State(state): State<Arc<AppState>>) -> AppResult<Html<String>> {
    let movies = state.store.list_by_rating_desc().await?;
    Ok(Html(templates::index_page(&movies)))
}

pub async fn add_page() -> Html<String> {
    Html(templates::add_page("", &[]))
}

pub async fn add_submit(
    State(state): State<Arc<AppState>>,
    Form(form): Form<AddForm>,
) -> AppResult<Html<String>> {
    let title = match form.validate() {
        Ok(title) => title,
        Err(errors) => return Ok(Html(templates::add_page(&form.title, &errors))),
    };

    // An empty result set just renders an empty candidate list.
    let candidates = state.tmdb.search(&title).await?;
    Ok(Html(templates::select_page(&title, &candidates)))
}

pub async fn select(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    let detail = state.tmdb.fetch_detail(id).await?;
    let new = NewMovie::from_detail(detail, &state.config.tmdb_image_base_url)?;
    let movie = state.store.create(new).await?;

    tracing::info!(id = movie.id, title = %movie.title, "added movie");
    Ok(Redirect::to(&format!("/edit/{}", movie.id)))
}

pub async fn edit_page(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Html<String>> {
    let movie = state.store.get(id).await?;
    let rating = movie.rating.map(|r| r.to_string()).unwrap_or_default();
    let review = movie.review.clone().unwrap_or_default();
    Ok(Html(templates::edit_page(&movie, &rating, &review, &[])))
}

pub async fn edit_submit(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    Form(form): Form<EditForm>,
) -> AppResult<Response> {
    let (rating, review) = match form.validate() {
        Ok(fields) => fields,
        Err(errors) => {
            let movie = state.store.get(id).await?;
            let body = templates::edit_page(&movie, &form.rating, &form.review, &errors);
            return Ok(Html(body).into_response());
        }
    };

    state.store.update_rating_review(id, rating, review).await?;
    Ok(Redirect::to("/").into_response())
}

pub async fn delete(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
) -> AppResult<Redirect> {
    state.store.delete(id).await?;
    tracing::info!(id, "deleted movie");
    Ok(Redirect::to("/"))
}
