pub mod articles;

pub use articles::{
    ArticleResponse, CreateArticleRequest, CreateArticleResponse, UpdateArticleRequest,
    UpdateArticleResponse,
};
