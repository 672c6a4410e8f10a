use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{HeaderName, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub const APP_UID: HeaderName = HeaderName::from_static("app-uid");

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Comment {
    pub id: u64,
    pub author: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct UpdateComment {
    pub author: Option<String>,
    pub text: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Comment>>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(BTreeMap::new()));
    Router::new()
        .route("/comments", get(list_comments))
        .route("/comment", post(create_comment))
        .route("/comment/{id}", put(update_comment))
        .layer(middleware::from_fn(echo_app_uid))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        info!(%addr, "mock comments server listening");
    }
    axum::serve(listener, app()).await
}

/// Reflect the caller's `App-Uid` header so clients can check it arrived.
async fn echo_app_uid(request: Request, next: Next) -> Response {
    let app_uid = request.headers().get(&APP_UID).cloned();
    debug!(method = %request.method(), uri = %request.uri(), "request");
    let mut response = next.run(request).await;
    if let Some(value) = app_uid {
        response.headers_mut().insert(APP_UID, value);
    }
    response
}

async fn list_comments(State(db): State<Db>) -> Json<Vec<Comment>> {
    let comments = db.read().await;
    Json(comments.values().cloned().collect())
}

async fn create_comment(State(db): State<Db>, Json(input): Json<Comment>) -> (StatusCode, Json<Comment>) {
    db.write().await.insert(input.id, input.clone());
    (StatusCode::CREATED, Json(input))
}

async fn update_comment(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateComment>,
) -> Result<Json<Comment>, StatusCode> {
    let mut comments = db.write().await;
    let comment = comments.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(author) = input.author {
        comment.author = author;
    }
    if let Some(text) = input.text {
        comment.text = text;
    }
    Ok(Json(comment.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comment_serializes_to_json() {
        let comment = Comment {
            id: 1,
            author: "1".to_string(),
            text: "1".to_string(),
        };
        let json = serde_json::to_value(&comment).unwrap();
        assert_eq!(json["id"], 1);
        assert_eq!(json["author"], "1");
        assert_eq!(json["text"], "1");
    }

    #[test]
    fn comment_rejects_missing_text() {
        let result: Result<Comment, _> = serde_json::from_str(r#"{"id":1,"author":"a"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_comment_all_fields_optional() {
        let input: UpdateComment = serde_json::from_str(r#"{}"#).unwrap();
        assert!(input.author.is_none());
        assert!(input.text.is_none());
    }

    #[test]
    fn update_comment_partial_fields() {
        let input: UpdateComment = serde_json::from_str(r#"{"author":"2"}"#).unwrap();
        assert_eq!(input.author.as_deref(), Some("2"));
        assert!(input.text.is_none());
    }
}
