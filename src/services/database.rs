use crate::error::AppError;
use crate::models::Article;
use futures::stream::TryStreamExt;
use mongodb::{
    bson::{self, doc, oid::ObjectId},
    results::UpdateResult,
    Client as MongoClient, Collection, Database,
};

#[derive(Clone)]
pub struct MongoDb {
    client: MongoClient,
    db: Database,
}

impl MongoDb {
    pub async fn connect(uri: &str, database: &str) -> Result<Self, AppError> {
        tracing::info!(uri = %uri, "Connecting to MongoDB");
        let client = MongoClient::with_uri_str(uri).await.map_err(|e| {
            tracing::error!("Failed to connect to MongoDB at {}: {}", uri, e);
            AppError::from(e)
        })?;
        let db = client.database(database);

        // The driver connects lazily; ping so a dead store fails startup
        let this = Self { client, db };
        this.health_check().await?;
        tracing::info!(database = %database, "Successfully connected to MongoDB database");
        Ok(this)
    }

    pub async fn health_check(&self) -> Result<(), AppError> {
        self.client
            .database("admin")
            .run_command(doc! { "ping": 1 }, None)
            .await
            .map_err(|e| {
                tracing::error!("MongoDB health check failed: {}", e);
                AppError::from(e)
            })?;
        Ok(())
    }

    pub fn articles(&self) -> Collection<Article> {
        self.db.collection("articles")
    }

    pub fn client(&self) -> &MongoClient {
        &self.client
    }

    pub async fn list_articles(&self) -> Result<Vec<Article>, AppError> {
        let mut cursor = self.articles().find(doc! {}, None).await.map_err(|e| {
            tracing::error!("Failed to query articles collection: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Failed to fetch articles"))
        })?;

        let mut articles = Vec::new();
        while let Some(article) = cursor.try_next().await.map_err(|e| {
            tracing::error!("Failed to read article from cursor: {}", e);
            AppError::DatabaseError(anyhow::anyhow!("Failed to fetch articles"))
        })? {
            articles.push(article);
        }

        Ok(articles)
    }

    pub async fn insert_article(&self, article: &Article) -> Result<ObjectId, AppError> {
        let result = self
            .articles()
            .insert_one(article, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to insert article into database: {}", e);
                AppError::DatabaseError(anyhow::anyhow!("Failed to add article"))
            })?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError(anyhow::anyhow!("Store assigned a non-ObjectId identifier"))
        })
    }

    /// Full replace of the four mutable fields for the matching document.
    pub async fn update_article(
        &self,
        id: ObjectId,
        article: &Article,
    ) -> Result<UpdateResult, AppError> {
        let filter = doc! { "_id": id };
        let update = doc! {
            "$set": {
                "title": article.title.as_str(),
                "author": article.author.as_str(),
                "content": article.content.as_str(),
                "publish_date": bson::DateTime::from_chrono(article.publish_date),
            }
        };

        self.articles()
            .update_one(filter, update, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to update article {}: {}", id, e);
                AppError::DatabaseError(anyhow::anyhow!("Failed to update article"))
            })
    }

    /// Idempotent: deleting an id with no matching document is still success.
    pub async fn delete_article(&self, id: ObjectId) -> Result<(), AppError> {
        self.articles()
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|e| {
                tracing::error!("Failed to delete article {}: {}", id, e);
                AppError::DatabaseError(anyhow::anyhow!("Failed to delete article"))
            })?;
        Ok(())
    }
}
