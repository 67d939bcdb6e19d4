use crate::error::AppError;
use crate::startup::AppState;
use axum::extract::State;
use mongodb::bson::doc;

/// Inserts one fixed probe document, then counts the whole collection.
/// Every call grows the collection by one document.
pub async fn test_db(State(state): State<AppState>) -> Result<String, AppError> {
    let db = state.db.get()?;
    let collection = db.documents();

    let result = collection
        .insert_one(doc! { "message": "Test réussi", "number": 42 }, None)
        .await?;
    let count = collection.count_documents(doc! {}, None).await?;

    let inserted_id = match result.inserted_id.as_object_id() {
        Some(oid) => oid.to_hex(),
        None => result.inserted_id.to_string(),
    };

    Ok(format!(
        "Document inséré! ID: {}<br>Total documents: {}",
        inserted_id, count
    ))
}
