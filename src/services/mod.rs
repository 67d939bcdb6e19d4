pub mod database;

pub use database::{DbHandle, MongoDb};
