/// Storage-assigned document keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// A schemaless JSON document as stored in a collection.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Name of the storage-owned key field added to documents on read.
pub const STORAGE_KEY_FIELD: &str = "_id";

/// Name of the application-level identifier used by update and delete routes.
pub const APP_ID_FIELD: &str = "id";
