use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
};

use crate::{
    entities::movie,
    error::{AppError, AppResult},
    models::NewMovie,
};

/// CRUD over the movie table. Every call commits on its own; there is no
/// cross-call transaction.
#[derive(Clone)]
pub struct MovieStore {
    db: DatabaseConnection,
}

impl MovieStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// All movies, best-rated first. Unrated rows sort wherever SQLite puts
    /// NULLs (last, under the default collation).
    pub async fn list_by_rating_desc(&self) -> AppResult<Vec<movie::Model>> {
        Ok(movie::Entity::find().order_by_desc(movie::Column::Rating).all(&self.db).await?)
    }

    pub async fn get(&self, id: i32) -> AppResult<movie::Model> {
        movie::Entity::find_by_id(id).one(&self.db).await?.ok_or(AppError::NotFound(id))
    }

    pub async fn create(&self, new: NewMovie) -> AppResult<movie::Model> {
        let existing = movie::Entity::find()
            .filter(movie::Column::Title.eq(&new.title))
            .one(&self.db)
            .await?;
        if existing.is_some() {
            return Err(AppError::DuplicateTitle(new.title));
        }

        let model = movie::ActiveModel {
            id: Set(new.id),
            title: Set(new.title),
            year: Set(new.year),
            description: Set(new.description),
            rating: Set(None),
            review: Set(None),
            img_url: Set(new.img_url),
        };
        Ok(model.insert(&self.db).await?)
    }

    pub async fn update_rating_review(
        &self,
        id: i32,
        rating: f64,
        review: String,
    ) -> AppResult<movie::Model> {
        let mut active: movie::ActiveModel = self.get(id).await?.into();
        active.rating = Set(Some(rating));
        active.review = Set(Some(review));
        Ok(active.update(&self.db).await?)
    }

    pub async fn delete(&self, id: i32) -> AppResult<()> {
        let result = movie::Entity::delete_by_id(id).exec(&self.db).await?;
        if result.rows_affected == 0 {
            return Err(AppError::NotFound(id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use migration::{Migrator, MigratorTrait};

    use super::*;

    async fn memory_store() -> MovieStore {
        let db = sea_orm::Database::connect("sqlite::memory:").await.expect("db");
        Migrator::up(&db, None).await.expect("migrate");
        MovieStore::new(db)
    }

    fn sample(id: i32, title: &str) -> NewMovie {
        NewMovie {
            id,
            title: title.to_string(),
            year: 2010,
            description: Some(format!("About {title}")),
            img_url: format!("https://image.tmdb.org/t/p/original/{id}.jpg"),
        }
    }

    #[tokio::test]
    async fn create_then_get_round_trips() {
        let store = memory_store().await;
        store.create(sample(27205, "Inception")).await.expect("create");

        let movie = store.get(27205).await.expect("get");
        assert_eq!(movie.title, "Inception");
        assert_eq!(movie.year, 2010);
        assert_eq!(movie.description.as_deref(), Some("About Inception"));
        assert!(movie.img_url.starts_with("https://image.tmdb.org/t/p/original"));
        assert_eq!(movie.rating, None);
        assert_eq!(movie.review, None);
    }

    #[tokio::test]
    async fn get_missing_id_is_not_found() {
        let store = memory_store().await;
        let err = store.get(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(1)));
    }

    #[tokio::test]
    async fn duplicate_title_is_rejected_and_store_unchanged() {
        let store = memory_store().await;
        store.create(sample(1, "Inception")).await.expect("create");

        let err = store.create(sample(2, "Inception")).await.unwrap_err();
        assert!(matches!(err, AppError::DuplicateTitle(ref t) if t.as_str() == "Inception"));

        let movies = store.list_by_rating_desc().await.expect("list");
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].id, 1);
    }

    #[tokio::test]
    async fn list_orders_rated_movies_descending() {
        let store = memory_store().await;
        store.create(sample(1, "Okay Film")).await.expect("create");
        store.create(sample(2, "Great Film")).await.expect("create");
        store.create(sample(3, "Unrated Film")).await.expect("create");

        store.update_rating_review(1, 7.0, "Fine".to_string()).await.expect("update");
        store.update_rating_review(2, 9.5, "Great".to_string()).await.expect("update");

        let movies = store.list_by_rating_desc().await.expect("list");
        assert_eq!(movies.len(), 3);
        let ratings: Vec<f64> = movies.iter().filter_map(|m| m.rating).collect();
        assert_eq!(ratings, vec![9.5, 7.0]);
    }

    #[tokio::test]
    async fn update_rating_review_is_idempotent() {
        let store = memory_store().await;
        store.create(sample(1, "Inception")).await.expect("create");

        let first =
            store.update_rating_review(1, 9.5, "Great".to_string()).await.expect("first update");
        let second =
            store.update_rating_review(1, 9.5, "Great".to_string()).await.expect("second update");

        assert_eq!(first, second);
        assert_eq!(store.get(1).await.expect("get"), second);
    }

    #[tokio::test]
    async fn update_missing_id_is_not_found() {
        let store = memory_store().await;
        let err = store.update_rating_review(42, 8.0, "Nope".to_string()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(42)));
    }

    #[tokio::test]
    async fn edit_then_delete_leaves_nothing_behind() {
        let store = memory_store().await;
        store.create(sample(1, "Inception")).await.expect("create");
        store.update_rating_review(1, 9.5, "Great".to_string()).await.expect("update");

        store.delete(1).await.expect("delete");
        let err = store.get(1).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(1)));
    }

    #[tokio::test]
    async fn delete_missing_id_is_not_found_and_store_unchanged() {
        let store = memory_store().await;
        store.create(sample(1, "Inception")).await.expect("create");

        let err = store.delete(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(99)));
        assert_eq!(store.list_by_rating_desc().await.expect("list").len(), 1);
    }
}
