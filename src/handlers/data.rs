use crate::error::AppError;
use crate::startup::AppState;
use axum::{extract::State, Json};
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::FindOptions;
use serde::Serialize;

const SAMPLE_LIMIT: i64 = 10;

#[derive(Debug, Serialize)]
pub struct DataResponse {
    pub documents: Vec<Document>,
    pub total: usize,
}

/// Returns up to 10 documents in natural order, with `_id` projected out.
/// `total` is the length of the returned sample, not the collection count.
pub async fn show_data(State(state): State<AppState>) -> Result<Json<DataResponse>, AppError> {
    let db = state.db.get()?;

    let find_options = FindOptions::builder()
        .limit(SAMPLE_LIMIT)
        .projection(doc! { "_id": 0 })
        .build();

    let mut cursor = db.documents().find(doc! {}, find_options).await?;

    let mut documents = Vec::new();
    while let Some(document) = cursor.try_next().await? {
        documents.push(document);
    }

    let total = documents.len();
    Ok(Json(DataResponse { documents, total }))
}
