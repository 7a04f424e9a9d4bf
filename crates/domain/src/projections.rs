//! Derived projections over the raw entity collections.
//!
//! Everything here is pure and synchronous: callers recompute projections
//! whenever a source collection or a filter input changes, and identical
//! inputs always yield identical results.

use std::collections::HashMap;

use uuid::Uuid;

use crate::models::{Complaint, Service, ServiceCategory, ServiceStatus, User};

/// Label rendered for complaints whose service reference dangles.
pub const UNKNOWN_SERVICE: &str = "Unknown service";

/// Label rendered for guest submitters with no usable name.
pub const GUEST: &str = "Guest";

/// A category selection, with `All` matching every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(ServiceCategory),
}

impl CategoryFilter {
    fn matches(&self, service: &Service) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => service.category == *category,
        }
    }
}

/// A status selection, with `All` matching every service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(ServiceStatus),
}

impl StatusFilter {
    fn matches(&self, service: &Service) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => service.status == *status,
        }
    }
}

/// Composed browse filter: full-text AND category AND status.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ServiceFilter {
    pub query: String,
    pub category: CategoryFilter,
    pub status: StatusFilter,
}

impl ServiceFilter {
    pub fn matches(&self, service: &Service) -> bool {
        matches_query(service, &self.query)
            && self.category.matches(service)
            && self.status.matches(service)
    }
}

/// Full-text match: case-insensitive substring of name, description, or
/// address. The empty query matches everything.
fn matches_query(service: &Service, query: &str) -> bool {
    let needle = query.to_lowercase();
    service.name.to_lowercase().contains(&needle)
        || service.description.to_lowercase().contains(&needle)
        || service.address.to_lowercase().contains(&needle)
}

/// Services passing the composed filter, in their original order.
pub fn filter_services<'a>(services: &'a [Service], filter: &ServiceFilter) -> Vec<&'a Service> {
    services.iter().filter(|s| filter.matches(s)).collect()
}

/// Rebuilds the id → name lookup from the current service collection.
pub fn service_names(services: &[Service]) -> HashMap<i64, String> {
    services.iter().map(|s| (s.id, s.name.clone())).collect()
}

/// Resolves a service id to its display name, tolerating dangling ids.
pub fn service_name(lookup: &HashMap<i64, String>, service_id: i64) -> &str {
    lookup.get(&service_id).map(String::as_str).unwrap_or(UNKNOWN_SERVICE)
}

/// Complaint counts per registered user. Guest complaints (no userId) are
/// excluded from every count.
pub fn complaints_per_user(complaints: &[Complaint]) -> HashMap<Uuid, usize> {
    let mut counts = HashMap::new();
    for complaint in complaints {
        if let Some(user_id) = complaint.user_id {
            *counts.entry(user_id).or_insert(0) += 1;
        }
    }
    counts
}

/// Resolves the submitter label for a complaint: the registered user's name,
/// else the name typed on the form, else "Guest".
pub fn submitter_name<'a>(complaint: &'a Complaint, users: &'a [User]) -> &'a str {
    if let Some(user) = complaint
        .user_id
        .and_then(|id| users.iter().find(|u| u.id == id))
    {
        return &user.name;
    }
    if !complaint.name.trim().is_empty() {
        return &complaint.name;
    }
    GUEST
}

/// Admin complaint search: case-insensitive substring against the resolved
/// service name, the resolved submitter name, or the description.
pub fn search_complaints<'a>(
    complaints: &'a [Complaint],
    services: &[Service],
    users: &'a [User],
    term: &str,
) -> Vec<&'a Complaint> {
    let lookup = service_names(services);
    let needle = term.to_lowercase();
    complaints
        .iter()
        .filter(|complaint| {
            service_name(&lookup, complaint.service_id)
                .to_lowercase()
                .contains(&needle)
                || submitter_name(complaint, users).to_lowercase().contains(&needle)
                || complaint.description.to_lowercase().contains(&needle)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ComplaintStatus, Priority};
    use crate::seed::default_services;
    use chrono::Utc;

    fn complaint(service_id: i64, name: &str, user_id: Option<Uuid>) -> Complaint {
        Complaint {
            id: Uuid::new_v4(),
            service_id,
            name: name.to_string(),
            contact: None,
            priority: Priority::Medium,
            description: "Streetlight out near the crossing.".to_string(),
            status: ComplaintStatus::Open,
            created_at: Utc::now(),
            user_id,
        }
    }

    fn user(name: &str) -> User {
        User {
            id: Uuid::new_v4(),
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            password: "secret-demo".to_string(),
        }
    }

    #[test]
    fn test_empty_query_is_identity() {
        let services = default_services();
        let filter = ServiceFilter::default();
        let filtered = filter_services(&services, &filter);
        assert_eq!(filtered.len(), services.len());
    }

    #[test]
    fn test_query_matches_subset_on_some_field() {
        let services = default_services();
        let filter = ServiceFilter {
            query: "WATER".to_string(),
            ..Default::default()
        };
        let filtered = filter_services(&services, &filter);
        assert!(!filtered.is_empty());
        assert!(filtered.len() < services.len());
        for service in &filtered {
            let q = "water";
            assert!(
                service.name.to_lowercase().contains(q)
                    || service.description.to_lowercase().contains(q)
                    || service.address.to_lowercase().contains(q)
            );
        }
    }

    #[test]
    fn test_category_filter_scenario() {
        // Seeded catalog: id 1 is healthcare/operational, id 4 is
        // utilities/maintenance.
        let services = default_services();
        let filter = ServiceFilter {
            category: CategoryFilter::Only(ServiceCategory::Utilities),
            ..Default::default()
        };
        let filtered = filter_services(&services, &filter);
        assert_eq!(filtered.iter().map(|s| s.id).collect::<Vec<_>>(), vec![4]);
    }

    #[test]
    fn test_status_filter() {
        let services = default_services();
        let filter = ServiceFilter {
            status: StatusFilter::Only(ServiceStatus::Maintenance),
            ..Default::default()
        };
        let filtered = filter_services(&services, &filter);
        assert!(filtered.iter().all(|s| s.status == ServiceStatus::Maintenance));
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_composed_filter_is_conjunction() {
        let services = default_services();
        let filter = ServiceFilter {
            query: "hospital".to_string(),
            category: CategoryFilter::Only(ServiceCategory::Utilities),
            status: StatusFilter::All,
        };
        assert!(filter_services(&services, &filter).is_empty());
    }

    #[test]
    fn test_filtering_is_pure() {
        let services = default_services();
        let filter = ServiceFilter {
            query: "li".to_string(),
            category: CategoryFilter::All,
            status: StatusFilter::Only(ServiceStatus::Operational),
        };
        let first = filter_services(&services, &filter);
        let second = filter_services(&services, &filter);
        assert_eq!(first, second);
    }

    #[test]
    fn test_per_user_counts_preserve_total() {
        let alice = user("Alice");
        let bob = user("Bob");
        let complaints = vec![
            complaint(1, "Alice", Some(alice.id)),
            complaint(2, "Alice", Some(alice.id)),
            complaint(3, "Bob", Some(bob.id)),
            complaint(4, "", None),
            complaint(5, "Walk-in", None),
        ];

        let counts = complaints_per_user(&complaints);
        assert_eq!(counts.get(&alice.id), Some(&2));
        assert_eq!(counts.get(&bob.id), Some(&1));

        let counted: usize = counts.values().sum();
        let guests = complaints.iter().filter(|c| c.user_id.is_none()).count();
        assert_eq!(counted + guests, complaints.len());
    }

    #[test]
    fn test_service_name_tolerates_dangling_reference() {
        let services = default_services();
        let lookup = service_names(&services);
        assert_eq!(service_name(&lookup, 1), "City General Hospital");
        assert_eq!(service_name(&lookup, 999), UNKNOWN_SERVICE);
    }

    #[test]
    fn test_submitter_name_resolution_order() {
        let registered = user("Noor");
        let users = vec![registered.clone()];

        let by_user = complaint(1, "typed name", Some(registered.id));
        assert_eq!(submitter_name(&by_user, &users), "Noor");

        // Unknown userId falls through to the form name.
        let dangling = complaint(1, "typed name", Some(Uuid::new_v4()));
        assert_eq!(submitter_name(&dangling, &users), "typed name");

        let guest = complaint(1, "  ", None);
        assert_eq!(submitter_name(&guest, &users), GUEST);
    }

    #[test]
    fn test_search_complaints_across_fields() {
        let services = default_services();
        let reporter = user("Leila");
        let users = vec![reporter.clone()];
        let complaints = vec![
            complaint(1, "", Some(reporter.id)),
            complaint(4, "Omar", None),
            complaint(999, "Ghost", None),
        ];

        // By resolved service name.
        let hits = search_complaints(&complaints, &services, &users, "hospital");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service_id, 1);

        // By resolved submitter name, case-insensitively.
        let hits = search_complaints(&complaints, &services, &users, "LEILA");
        assert_eq!(hits.len(), 1);

        // By the dangling-reference sentinel.
        let hits = search_complaints(&complaints, &services, &users, "unknown");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].service_id, 999);

        // Description matches everything in this fixture.
        let hits = search_complaints(&complaints, &services, &users, "streetlight");
        assert_eq!(hits.len(), 3);
    }
}
