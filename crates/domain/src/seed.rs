//! Built-in service catalog used to seed an empty store when the remote API
//! is unreachable on first load.

use crate::models::{Service, ServiceCategory, ServiceStatus};

/// The five seed services shipped with the app.
pub fn default_services() -> Vec<Service> {
    vec![
        Service {
            id: 1,
            name: "City General Hospital".to_string(),
            category: ServiceCategory::Healthcare,
            address: "123 Medical District, Downtown".to_string(),
            phone: Some("+1-555-0101".to_string()),
            hours: "24/7 Emergency Services".to_string(),
            description: "Full-service hospital offering emergency care, surgery, and specialized \
                          medical departments with on-call experts."
                .to_string(),
            status: ServiceStatus::Operational,
            rating: 4.6,
            image: Some(
                "https://images.unsplash.com/photo-1586773860418-d37222d8fce3?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
            ),
        },
        Service {
            id: 2,
            name: "Central Police Station".to_string(),
            category: ServiceCategory::Safety,
            address: "456 Safety Boulevard, City Center".to_string(),
            phone: Some("+1-555-0102".to_string()),
            hours: "24/7".to_string(),
            description: "Main police headquarters providing law enforcement, emergency response, \
                          and neighbourhood safety outreach."
                .to_string(),
            status: ServiceStatus::Operational,
            rating: 4.3,
            image: Some(
                "https://images.unsplash.com/photo-1587560699334-bea93391dcef?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
            ),
        },
        Service {
            id: 3,
            name: "Metro Transit Hub".to_string(),
            category: ServiceCategory::Transportation,
            address: "12 Mobility Avenue, Riverside".to_string(),
            phone: Some("+1-555-0145".to_string()),
            hours: "05:00 AM - 01:00 AM".to_string(),
            description: "Central bus and metro interchange with live departure boards, ticketing, \
                          and commuter assistance."
                .to_string(),
            status: ServiceStatus::Operational,
            rating: 4.1,
            image: Some(
                "https://images.unsplash.com/photo-1469474968028-56623f02e42e?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
            ),
        },
        Service {
            id: 4,
            name: "Northside Water Works".to_string(),
            category: ServiceCategory::Utilities,
            address: "88 Reservoir Road, Uptown".to_string(),
            phone: Some("+1-555-0199".to_string()),
            hours: "08:00 AM - 06:00 PM".to_string(),
            description: "Public utility center handling water quality, new connections, and \
                          emergency supply coordination."
                .to_string(),
            status: ServiceStatus::Maintenance,
            rating: 3.8,
            image: Some(
                "https://images.unsplash.com/photo-1455906876003-298dd8c44cab?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
            ),
        },
        Service {
            id: 5,
            name: "Evergreen Public Library".to_string(),
            category: ServiceCategory::Education,
            address: "77 Knowledge Lane, West District".to_string(),
            phone: Some("+1-555-0188".to_string()),
            hours: "09:00 AM - 08:00 PM".to_string(),
            description: "Community library with study spaces, digital labs, literacy programs, and \
                          weekend workshops."
                .to_string(),
            status: ServiceStatus::Operational,
            rating: 4.8,
            image: Some(
                "https://images.unsplash.com/photo-1582719478250-c89cae4dc85b?auto=format&fit=crop&w=900&q=80"
                    .to_string(),
            ),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_ids_are_unique_and_sequential() {
        let services = default_services();
        let ids: Vec<i64> = services.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_seed_ratings_within_scale() {
        for service in default_services() {
            assert!((0.0..=5.0).contains(&service.rating), "{}", service.name);
        }
    }
}
