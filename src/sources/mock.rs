use crate::models::Property;
use crate::sources::traits::PropertySource;
use crate::sources::types::ListParams;
use anyhow::Result;
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};

/// In-memory record source, used for offline demos and tests
pub struct MockSource {
    properties: Mutex<Vec<Property>>,
    fail_list: AtomicBool,
    fail_delete: AtomicBool,
}

impl MockSource {
    pub fn new(properties: Vec<Property>) -> Self {
        Self {
            properties: Mutex::new(properties),
            fail_list: AtomicBool::new(false),
            fail_delete: AtomicBool::new(false),
        }
    }

    /// Source seeded with a handful of typical rental listings
    pub fn with_sample_data() -> Self {
        Self::new(sample_properties())
    }

    #[cfg(test)]
    pub fn set_fail_list(&self, fail: bool) {
        self.fail_list.store(fail, Ordering::SeqCst);
    }

    #[cfg(test)]
    pub fn set_fail_delete(&self, fail: bool) {
        self.fail_delete.store(fail, Ordering::SeqCst);
    }

    fn records(&self) -> Result<std::sync::MutexGuard<'_, Vec<Property>>> {
        self.properties
            .lock()
            .map_err(|_| anyhow::anyhow!("Mock property store poisoned"))
    }
}

#[async_trait]
impl PropertySource for MockSource {
    async fn list(&self, params: ListParams) -> Result<Vec<Property>> {
        if self.fail_list.load(Ordering::SeqCst) {
            anyhow::bail!("Mock source refused to list properties");
        }

        let records = self.records()?;
        let page: Vec<Property> = records
            .iter()
            .skip(params.skip)
            .take(params.limit)
            .cloned()
            .collect();
        debug!("Mock source returning {} of {} properties", page.len(), records.len());
        Ok(page)
    }

    async fn delete(&self, id: i64) -> Result<()> {
        if self.fail_delete.load(Ordering::SeqCst) {
            anyhow::bail!("Mock source refused to delete property {}", id);
        }

        let mut records = self.records()?;
        let before = records.len();
        records.retain(|p| p.id != id);
        if records.len() == before {
            anyhow::bail!("Property {} not found", id);
        }
        Ok(())
    }

    fn source_name(&self) -> &'static str {
        "Mock"
    }
}

fn sample_properties() -> Vec<Property> {
    info!("📋 Using sample rental listings");

    let at = |y, m, d| Utc.with_ymd_and_hms(y, m, d, 9, 0, 0).single().unwrap_or_default();

    vec![
        Property {
            id: 1,
            title: "Sea View Apartment".to_string(),
            location: "Candolim, Goa".to_string(),
            price: 25000.0,
            is_available: true,
            amenities: Some("Pool, WiFi, Parking".to_string()),
            image_url: Some("https://images.example.com/properties/1.jpg".to_string()),
            created_at: at(2024, 1, 12),
            updated_at: Some(at(2024, 3, 2)),
        },
        Property {
            id: 2,
            title: "City Flat".to_string(),
            location: "Andheri West, Mumbai".to_string(),
            price: 32000.0,
            is_available: false,
            amenities: Some("Lift, Power Backup".to_string()),
            image_url: None,
            created_at: at(2024, 1, 20),
            updated_at: None,
        },
        Property {
            id: 3,
            title: "Lakeview Cottage".to_string(),
            location: "Mallital, Nainital".to_string(),
            price: 18500.0,
            is_available: true,
            amenities: None,
            image_url: Some("https://images.example.com/properties/3.jpg".to_string()),
            created_at: at(2024, 2, 3),
            updated_at: None,
        },
        Property {
            id: 4,
            title: "Lakeside Villa".to_string(),
            location: "Fateh Sagar, Udaipur".to_string(),
            price: 45000.0,
            is_available: false,
            amenities: Some("Garden, Pool".to_string()),
            image_url: None,
            created_at: at(2024, 2, 14),
            updated_at: Some(at(2024, 2, 28)),
        },
        Property {
            id: 5,
            title: "Shared PG Room".to_string(),
            location: "Koramangala, Bengaluru".to_string(),
            price: 9500.0,
            is_available: true,
            amenities: Some("Meals, WiFi, Laundry".to_string()),
            image_url: None,
            created_at: at(2024, 3, 1),
            updated_at: None,
        },
    ]
}
