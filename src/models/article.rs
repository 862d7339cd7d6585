use chrono::{DateTime, Utc};
use mongodb::bson::oid::ObjectId;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    // Absent until the store assigns one on insert
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub title: String,
    pub author: String,
    pub content: String,
    #[serde(with = "mongodb::bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub publish_date: DateTime<Utc>,
}

impl Article {
    pub fn new(title: String, author: String, content: String) -> Self {
        Self {
            id: None,
            title,
            author,
            content,
            publish_date: Utc::now(),
        }
    }
}
