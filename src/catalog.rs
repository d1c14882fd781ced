use crate::listing::{ListingView, Stats};
use crate::models::{FilterState, Property};
use crate::sources::{ListParams, PropertySource};
use anyhow::Result;
use tracing::{error, info};

pub const LOAD_FAILED: &str = "Failed to load properties";
pub const DELETE_FAILED: &str = "Failed to delete property";

/// Owns the working collection: the one authoritative in-memory copy of the records.
///
/// The collection is replaced wholesale by a successful load and reduced in place by a
/// confirmed delete. Failures leave it untouched and record a single generic message.
pub struct Catalog<S: PropertySource> {
    source: S,
    params: ListParams,
    properties: Vec<Property>,
    error: Option<&'static str>,
}

impl<S: PropertySource> Catalog<S> {
    #[cfg(test)]
    pub fn new(source: S) -> Self {
        Self::with_params(source, ListParams::default())
    }

    pub fn with_params(source: S, params: ListParams) -> Self {
        Self {
            source,
            params,
            properties: Vec::new(),
            error: None,
        }
    }

    /// Bulk-load the collection from the source
    pub async fn load(&mut self) -> Result<()> {
        self.error = None;
        info!("Loading properties from {} source", self.source.source_name());

        match self.source.list(self.params).await {
            Ok(properties) => {
                info!("Loaded {} properties", properties.len());
                self.properties = properties;
                Ok(())
            }
            Err(e) => {
                error!("{}: {:#}", LOAD_FAILED, e);
                self.error = Some(LOAD_FAILED);
                Err(e)
            }
        }
    }

    /// User-initiated retry of the same bulk load
    pub async fn retry(&mut self) -> Result<()> {
        info!("Retrying property load");
        self.load().await
    }

    /// Delete a record at the source, then drop it from the collection
    pub async fn delete(&mut self, id: i64) -> Result<()> {
        match self.source.delete(id).await {
            Ok(()) => {
                self.properties.retain(|p| p.id != id);
                info!("Removed property {} ({} left)", id, self.properties.len());
                Ok(())
            }
            Err(e) => {
                error!("{}: {:#}", DELETE_FAILED, e);
                self.error = Some(DELETE_FAILED);
                Err(e)
            }
        }
    }

    /// Edit intent. No behaviour is attached yet; the request is only logged.
    pub fn request_edit(&self, property: &Property) {
        info!("Edit requested for property {} ({})", property.id, property.title);
    }

    pub fn find(&self, id: i64) -> Option<&Property> {
        self.properties.iter().find(|p| p.id == id)
    }

    /// Filtered view of the current collection
    pub fn view(&self, state: &FilterState) -> ListingView<'_> {
        ListingView::compute(&self.properties, state)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_properties(&self.properties)
    }

    #[cfg(test)]
    pub fn properties(&self) -> &[Property] {
        &self.properties
    }

    /// Generic user-facing message from the last failed operation
    pub fn error(&self) -> Option<&'static str> {
        self.error
    }
}
