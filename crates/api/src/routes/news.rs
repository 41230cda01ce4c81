//! News article endpoint handlers.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use persistence::repositories::NewsRepository;
use tracing::info;
use uuid::Uuid;
use validator::Validate;

use crate::app::AppState;
use crate::error::ApiError;
use domain::models::news::{
    CreateNewsArticleRequest, ListNewsQuery, ListNewsResponse, UpdateNewsArticleRequest,
};
use domain::models::NewsArticle;

/// List articles newest first. Public callers see published articles
/// only; `include_unpublished=true` is honored on the admin router.
///
/// GET /api/v1/news
/// GET /api/v1/admin/news?include_unpublished=true
pub async fn list_published(
    State(state): State<AppState>,
) -> Result<Json<ListNewsResponse>, ApiError> {
    list_articles(state, false).await
}

/// Admin listing including drafts.
pub async fn list_all(
    State(state): State<AppState>,
    Query(query): Query<ListNewsQuery>,
) -> Result<Json<ListNewsResponse>, ApiError> {
    list_articles(state, query.include_unpublished.unwrap_or(true)).await
}

async fn list_articles(
    state: AppState,
    include_unpublished: bool,
) -> Result<Json<ListNewsResponse>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let articles: Vec<NewsArticle> = repo
        .find_all(include_unpublished)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();

    let count = articles.len();
    Ok(Json(ListNewsResponse {
        data: articles,
        count,
    }))
}

/// Fetch a single article.
///
/// GET /api/v1/news/:id
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<NewsArticle>, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let entity = repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    Ok(Json(entity.into()))
}

/// Create an article. New articles default to unpublished drafts.
///
/// POST /api/v1/news (admin)
pub async fn create_article(
    State(state): State<AppState>,
    Json(request): Json<CreateNewsArticleRequest>,
) -> Result<(StatusCode, Json<NewsArticle>), ApiError> {
    request.validate()?;

    let repo = NewsRepository::new(state.pool.clone());
    let entity = repo
        .create(
            &request.title,
            &request.excerpt,
            &request.content,
            request.category.into(),
            &request.author,
            request.image_url.as_deref(),
            request.featured.unwrap_or(false),
            request.published.unwrap_or(false),
        )
        .await?;

    let article: NewsArticle = entity.into();
    info!(article_id = %article.id, title = %article.title, "Article created");

    Ok((StatusCode::CREATED, Json(article)))
}

/// Update an article.
///
/// PUT /api/v1/news/:id (admin)
pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateNewsArticleRequest>,
) -> Result<Json<NewsArticle>, ApiError> {
    request.validate()?;

    let repo = NewsRepository::new(state.pool.clone());
    let entity = repo
        .update(
            id,
            &request.title,
            &request.excerpt,
            &request.content,
            request.category.into(),
            &request.author,
            request.image_url.as_deref(),
            request.featured.unwrap_or(false),
            request.published.unwrap_or(false),
        )
        .await?
        .ok_or_else(|| ApiError::NotFound("Article not found".to_string()))?;

    let article: NewsArticle = entity.into();
    info!(article_id = %article.id, "Article updated");

    Ok(Json(article))
}

/// Delete an article.
///
/// DELETE /api/v1/news/:id (admin)
pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    let repo = NewsRepository::new(state.pool.clone());
    let deleted = repo.delete(id).await?;

    if !deleted {
        return Err(ApiError::NotFound("Article not found".to_string()));
    }

    info!(article_id = %id, "Article deleted");
    Ok(StatusCode::NO_CONTENT)
}
