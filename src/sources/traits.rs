use crate::models::Property;
use crate::sources::types::ListParams;
use anyhow::Result;
use async_trait::async_trait;

/// Remote collaborator that owns the property records
#[async_trait]
pub trait PropertySource: Send + Sync {
    /// Bulk-read one bounded, ordered page of records
    async fn list(&self, params: ListParams) -> Result<Vec<Property>>;

    /// Delete a record by id. A failure must leave the source unchanged.
    async fn delete(&self, id: i64) -> Result<()>;

    /// Get the name of the record source
    fn source_name(&self) -> &'static str;
}
