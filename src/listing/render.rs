use crate::listing::{ListingView, Stats};
use crate::models::Property;

pub const EMPTY_STATE: &str = "No properties found";

pub fn availability_badge(property: &Property) -> &'static str {
    if property.is_available {
        "Available"
    } else {
        "Unavailable"
    }
}

/// Render one property card
pub fn card(property: &Property) -> String {
    let mut lines = vec![
        format!("{} [{}]", property.title, availability_badge(property)),
        format!("   📍 {}", property.location),
        format!("   ₹{}", property.price),
    ];
    if let Some(amenities) = &property.amenities {
        lines.push(format!("   Amenities: {}", amenities));
    }
    if let Some(image) = &property.image_url {
        lines.push(format!("   Image: {}", image));
    }

    let mut meta = format!("   Added: {}", property.created_at.format("%Y-%m-%d"));
    if let Some(updated) = property.updated_at {
        meta.push_str(&format!("  Updated: {}", updated.format("%Y-%m-%d")));
    }
    lines.push(meta);
    lines.push(format!("   ID: {}", property.id));

    lines.join("\n") + "\n"
}

/// Cards (or the empty state) followed by the summary line
pub fn listing(view: &ListingView<'_>) -> String {
    let mut out = String::new();

    if view.is_empty() {
        out.push_str(EMPTY_STATE);
        out.push('\n');
    } else {
        for (i, property) in view.properties.iter().enumerate() {
            out.push_str(&format!("{}. {}\n", i + 1, card(property)));
        }
    }

    out.push_str(&format!("{} properties\n", view.summary));
    out
}

pub fn stats(stats: &Stats) -> String {
    format!(
        "Total: {}  Available: {}  Unavailable: {}",
        stats.total, stats.available, stats.unavailable
    )
}
