use crate::dtos::{
    ArticleResponse, CreateArticleRequest, CreateArticleResponse, UpdateArticleRequest,
    UpdateArticleResponse,
};
use crate::error::AppError;
use crate::models::Article;
use crate::startup::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use mongodb::bson::oid::ObjectId;
use serde_json::json;

pub async fn list_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = state.db.list_articles().await?;
    let articles: Vec<ArticleResponse> = articles.into_iter().map(ArticleResponse::from).collect();

    Ok(Json(articles))
}

pub async fn create_article(
    State(state): State<AppState>,
    payload: Result<Json<CreateArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest(anyhow::anyhow!("Failed to parse request body")))?;

    if payload.title.is_empty() {
        return Err(AppError::BadRequest(anyhow::anyhow!(
            "Title cannot be empty"
        )));
    }

    // publish_date is server-assigned; any client-supplied value is ignored
    let mut article = Article::new(payload.title, payload.author, payload.content);
    let id = state.db.insert_article(&article).await?;
    article.id = Some(id);

    tracing::info!(article_id = %id, title = %article.title, "Article created");

    Ok((
        StatusCode::CREATED,
        Json(CreateArticleResponse {
            message: "Article added successfully".to_string(),
            article: ArticleResponse::from(article),
        }),
    ))
}

pub async fn update_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateArticleRequest>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    // id is checked before the body so a malformed id never reaches the store
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid article ID")))?;

    let Json(payload) =
        payload.map_err(|_| AppError::BadRequest(anyhow::anyhow!("Failed to parse request body")))?;

    let replacement = Article::from(payload);
    let result = state.db.update_article(object_id, &replacement).await?;

    if result.matched_count == 0 {
        return Err(AppError::NotFound(anyhow::anyhow!("Article not found")));
    }

    tracing::info!(
        article_id = %object_id,
        modified_count = result.modified_count,
        "Article updated"
    );

    Ok(Json(UpdateArticleResponse {
        message: "Article updated successfully".to_string(),
        modified_count: result.modified_count,
    }))
}

pub async fn delete_article(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let object_id = ObjectId::parse_str(&id)
        .map_err(|_| AppError::BadRequest(anyhow::anyhow!("Invalid ID")))?;

    state.db.delete_article(object_id).await?;

    tracing::info!(article_id = %object_id, "Article deleted");

    Ok(Json(json!({ "message": "Article deleted successfully" })))
}
