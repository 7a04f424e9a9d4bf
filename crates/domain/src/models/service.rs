//! Municipal service domain models.

use serde::{Deserialize, Serialize};
use shared::validation::required_error;
use std::fmt;
use std::str::FromStr;
use validator::{Validate, ValidationErrors};

use super::none_if_blank;

/// Operating hours shown when a service is created without any.
pub const DEFAULT_HOURS: &str = "Contact for hours";

/// Category of a municipal service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceCategory {
    Healthcare,
    Safety,
    Education,
    Utilities,
    Transportation,
}

impl ServiceCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceCategory::Healthcare => "healthcare",
            ServiceCategory::Safety => "safety",
            ServiceCategory::Education => "education",
            ServiceCategory::Utilities => "utilities",
            ServiceCategory::Transportation => "transportation",
        }
    }

    /// Stock photo used for services in this category that carry no image.
    pub fn fallback_image(&self) -> &'static str {
        match self {
            ServiceCategory::Healthcare => {
                "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?auto=format&fit=crop&w=900&q=60"
            }
            ServiceCategory::Safety => {
                "https://images.unsplash.com/photo-1453873531674-2151bcd01707?auto=format&fit=crop&w=900&q=60"
            }
            ServiceCategory::Education => {
                "https://images.unsplash.com/photo-1503676260728-1c00da094a0b?auto=format&fit=crop&w=900&q=60"
            }
            ServiceCategory::Utilities => {
                "https://images.unsplash.com/photo-1509391366360-2e959784a276?auto=format&fit=crop&w=900&q=60"
            }
            ServiceCategory::Transportation => {
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=900&q=60"
            }
        }
    }
}

impl FromStr for ServiceCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "healthcare" => Ok(ServiceCategory::Healthcare),
            "safety" => Ok(ServiceCategory::Safety),
            "education" => Ok(ServiceCategory::Education),
            "utilities" => Ok(ServiceCategory::Utilities),
            "transportation" => Ok(ServiceCategory::Transportation),
            _ => Err(format!("Invalid service category: {}", s)),
        }
    }
}

impl fmt::Display for ServiceCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operational status of a service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    #[default]
    Operational,
    Maintenance,
    Offline,
}

impl ServiceStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ServiceStatus::Operational => "operational",
            ServiceStatus::Maintenance => "maintenance",
            ServiceStatus::Offline => "offline",
        }
    }
}

impl FromStr for ServiceStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operational" => Ok(ServiceStatus::Operational),
            "maintenance" => Ok(ServiceStatus::Maintenance),
            "offline" => Ok(ServiceStatus::Offline),
            _ => Err(format!("Invalid service status: {}", s)),
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A municipal service as stored and served by the remote API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: i64,
    pub name: String,
    pub category: ServiceCategory,
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub hours: String,
    pub description: String,
    pub status: ServiceStatus,
    pub rating: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Service {
    /// Image to display: the service's own, else the category stock photo.
    pub fn display_image(&self) -> &str {
        match self.image.as_deref() {
            Some(image) if !image.is_empty() => image,
            _ => self.category.fallback_image(),
        }
    }
}

/// Admin form input for a new service.
///
/// The id, rating, and fallback image are assigned at the store boundary
/// (remote create or [`ServiceDraft::build`]), never by the form.
#[derive(Debug, Clone, Default, Validate, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceDraft {
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub name: String,
    #[validate(required(message = "Select a category"))]
    pub category: Option<ServiceCategory>,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub address: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hours: Option<String>,
    #[validate(custom(function = "shared::validation::validate_non_blank"))]
    pub description: String,
    #[serde(default)]
    pub status: ServiceStatus,
}

impl ServiceDraft {
    /// Produces the full record for a locally created service.
    ///
    /// Applies the same defaults the remote store would: rating 0, hours
    /// fallback, and the per-category stock image.
    pub fn build(self, id: i64) -> Result<Service, ValidationErrors> {
        self.validate()?;
        let category = match self.category {
            Some(category) => category,
            None => return Err(required_error("category")),
        };
        Ok(Service {
            id,
            name: self.name,
            category,
            address: self.address,
            phone: none_if_blank(self.phone),
            hours: none_if_blank(self.hours).unwrap_or_else(|| DEFAULT_HOURS.to_string()),
            description: self.description,
            status: self.status,
            rating: 0.0,
            image: Some(category.fallback_image().to_string()),
        })
    }
}

/// Next locally assigned service id: `max(existing) + 1`, starting at 1.
pub fn next_service_id(services: &[Service]) -> i64 {
    services.iter().map(|s| s.id).max().unwrap_or(0) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ServiceDraft {
        ServiceDraft {
            name: "Riverside Fire Station".to_string(),
            category: Some(ServiceCategory::Safety),
            address: "9 Embankment Way".to_string(),
            phone: Some("+1-555-0107".to_string()),
            hours: None,
            description: "Fire and rescue coverage for the riverside wards.".to_string(),
            status: ServiceStatus::Operational,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in [
            ServiceCategory::Healthcare,
            ServiceCategory::Safety,
            ServiceCategory::Education,
            ServiceCategory::Utilities,
            ServiceCategory::Transportation,
        ] {
            assert_eq!(ServiceCategory::from_str(category.as_str()).unwrap(), category);
        }
        assert!(ServiceCategory::from_str("parks").is_err());
    }

    #[test]
    fn test_build_applies_defaults() {
        let service = draft().build(6).unwrap();
        assert_eq!(service.id, 6);
        assert_eq!(service.rating, 0.0);
        assert_eq!(service.hours, DEFAULT_HOURS);
        assert_eq!(
            service.image.as_deref(),
            Some(ServiceCategory::Safety.fallback_image())
        );
    }

    #[test]
    fn test_build_rejects_blank_name() {
        let mut d = draft();
        d.name = "   ".to_string();
        assert!(d.build(1).is_err());
    }

    #[test]
    fn test_build_rejects_missing_category() {
        let mut d = draft();
        d.category = None;
        assert!(d.build(1).is_err());
    }

    #[test]
    fn test_next_service_id() {
        assert_eq!(next_service_id(&[]), 1);
        let a = draft().build(3).unwrap();
        let b = draft().build(7).unwrap();
        assert_eq!(next_service_id(&[a, b]), 8);
    }

    #[test]
    fn test_service_wire_format_is_camel_case() {
        let service = draft().build(1).unwrap();
        let json = serde_json::to_value(&service).unwrap();
        assert_eq!(json["category"], "safety");
        assert_eq!(json["status"], "operational");
        assert!(json.get("address").is_some());
    }

    #[test]
    fn test_display_image_prefers_own() {
        let mut service = draft().build(1).unwrap();
        service.image = Some("https://example.com/own.jpg".to_string());
        assert_eq!(service.display_image(), "https://example.com/own.jpg");
        service.image = None;
        assert_eq!(service.display_image(), ServiceCategory::Safety.fallback_image());
    }
}
