use crate::models::Article;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct CreateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

/// Full-replace payload: every field is written back, omitted ones as their
/// zero value (empty string, epoch timestamp).
#[derive(Debug, Deserialize)]
pub struct UpdateArticleRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub publish_date: Option<DateTime<Utc>>,
}

impl From<UpdateArticleRequest> for Article {
    fn from(payload: UpdateArticleRequest) -> Self {
        Article {
            id: None,
            title: payload.title,
            author: payload.author,
            content: payload.content,
            publish_date: payload.publish_date.unwrap_or(DateTime::UNIX_EPOCH),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ArticleResponse {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub title: String,
    pub author: String,
    pub content: String,
    pub publish_date: String,
}

impl From<Article> for ArticleResponse {
    fn from(article: Article) -> Self {
        Self {
            id: article.id.map(|id| id.to_hex()),
            title: article.title,
            author: article.author,
            content: article.content,
            publish_date: article.publish_date.to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreateArticleResponse {
    pub message: String,
    pub article: ArticleResponse,
}

#[derive(Debug, Serialize)]
pub struct UpdateArticleResponse {
    pub message: String,
    pub modified_count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn article_response_skips_absent_id() {
        let article = Article::new("Hello".to_string(), "Ann".to_string(), "World".to_string());
        let json = serde_json::to_value(ArticleResponse::from(article)).unwrap();

        assert!(json.get("_id").is_none());
        assert_eq!(json["title"], "Hello");
        assert_eq!(json["author"], "Ann");
        assert_eq!(json["content"], "World");
    }

    #[test]
    fn article_response_renders_hex_id_and_rfc3339_date() {
        let mut article = Article::new("Hello".to_string(), String::new(), String::new());
        let id = ObjectId::new();
        article.id = Some(id);

        let response = ArticleResponse::from(article);

        assert_eq!(response.id.as_deref(), Some(id.to_hex().as_str()));
        assert!(response.publish_date.contains('T'));
    }

    #[test]
    fn update_request_defaults_omitted_fields_to_zero_values() {
        let payload: UpdateArticleRequest = serde_json::from_str(r#"{"title":"Hello2"}"#).unwrap();
        let article = Article::from(payload);

        assert_eq!(article.title, "Hello2");
        assert_eq!(article.author, "");
        assert_eq!(article.content, "");
        assert_eq!(article.publish_date, DateTime::UNIX_EPOCH);
    }
}
