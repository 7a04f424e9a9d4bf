//! The directory facade: store + remote client + session rules.
//!
//! UI shells hold one `Directory` per context. Loads go remote-first with the
//! store as an offline mirror; creates are pessimistic (local state changes
//! only after the server confirms); session mutations write straight to the
//! store, which broadcasts them to sibling contexts.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use validator::Validate;

use domain::models::{
    Complaint, ComplaintDraft, Service, ServiceDraft, Signup, SupportTicket, Theme, TicketDraft,
    User,
};
use domain::models::{service::next_service_id, Credentials};
use domain::seed;
use domain::session::{self, AdminCredentials, Session};
use domain::DomainError;
use persistence::{EntityStore, SqliteStore, StoreKey};
use uuid::Uuid;

use crate::config::Config;
use crate::error::{ApiError, ClientError};
use crate::remote::ApiClient;

pub struct Directory {
    api: ApiClient,
    store: EntityStore,
    admin: AdminCredentials,
}

impl Directory {
    pub fn new(config: &Config, store: EntityStore) -> anyhow::Result<Self> {
        let api = ApiClient::new(&config.api).context("building HTTP client")?;
        Ok(Self {
            api,
            store,
            admin: config.admin.clone(),
        })
    }

    /// Directory over the durable on-disk store named in configuration.
    pub fn open(config: &Config) -> anyhow::Result<Self> {
        let backend = SqliteStore::open(Path::new(&config.store.path))
            .context("opening the local store")?;
        Self::new(config, EntityStore::new(Arc::new(backend)))
    }

    pub fn store(&self) -> &EntityStore {
        &self.store
    }

    // --- services -----------------------------------------------------

    /// Remote service list, mirrored into the store. When the network is
    /// down, falls back to the mirror, seeding the built-in catalog into an
    /// empty store first.
    pub async fn load_services(&self) -> Result<Vec<Service>, ClientError> {
        match self.api.list_services().await {
            Ok(services) => {
                self.store.set(StoreKey::Services, &services)?;
                Ok(services)
            }
            Err(ApiError::Network(_)) => {
                tracing::info!("service list unreachable; serving local mirror");
                let mut services: Vec<Service> = self.store.collection(StoreKey::Services);
                if services.is_empty() {
                    services = seed::default_services();
                    self.store.set(StoreKey::Services, &services)?;
                }
                Ok(services)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Admin-only remote create. The mirror is updated only after the server
    /// confirms.
    pub async fn add_service(&self, draft: ServiceDraft) -> Result<Service, ClientError> {
        self.require_admin()?;
        draft.validate()?;
        let created = self.api.create_service(&draft).await?;
        let mut services: Vec<Service> = self.store.collection(StoreKey::Services);
        services.push(created.clone());
        self.store.set(StoreKey::Services, &services)?;
        Ok(created)
    }

    /// Admin-only offline create: assigns `max(existing ids) + 1` and writes
    /// to the mirror directly. Explicit escape hatch, never a silent
    /// fallback of [`Directory::add_service`].
    pub fn add_service_local(&self, draft: ServiceDraft) -> Result<Service, ClientError> {
        self.require_admin()?;
        let mut services: Vec<Service> = self.store.collection(StoreKey::Services);
        let service = draft.build(next_service_id(&services))?;
        services.push(service.clone());
        self.store.set(StoreKey::Services, &services)?;
        Ok(service)
    }

    // --- complaints ---------------------------------------------------

    /// Remote complaint list, mirrored into the store; the mirror serves
    /// reads when the network is down.
    pub async fn load_complaints(&self) -> Result<Vec<Complaint>, ClientError> {
        match self.api.list_complaints().await {
            Ok(complaints) => {
                self.store.set(StoreKey::Complaints, &complaints)?;
                Ok(complaints)
            }
            Err(ApiError::Network(_)) => {
                tracing::info!("complaint list unreachable; serving local mirror");
                Ok(self.store.collection(StoreKey::Complaints))
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Validates, then submits. A draft that fails validation never reaches
    /// the wire. A logged-in citizen's identity overrides the form's
    /// submitter fields.
    pub async fn submit_complaint(&self, draft: ComplaintDraft) -> Result<Complaint, ClientError> {
        let draft = match self.current_user() {
            Some(user) => draft.for_user(&user),
            None => draft,
        }
        .normalized();
        draft.validate()?;

        let created = self.api.create_complaint(&draft).await?;
        let mut complaints: Vec<Complaint> = self.store.collection(StoreKey::Complaints);
        complaints.insert(0, created.clone());
        self.store.set(StoreKey::Complaints, &complaints)?;
        Ok(created)
    }

    /// Admin-only hard delete. The mirror drops the record only after a
    /// confirmed 2xx; a rejected delete leaves it untouched.
    pub async fn delete_complaint(&self, id: Uuid) -> Result<(), ClientError> {
        self.require_admin()?;
        self.api.delete_complaint(id).await?;
        let complaints: Vec<Complaint> = self.store.collection(StoreKey::Complaints);
        let remaining: Vec<Complaint> = complaints.into_iter().filter(|c| c.id != id).collect();
        self.store.set(StoreKey::Complaints, &remaining)?;
        Ok(())
    }

    // --- session ------------------------------------------------------

    /// Both identities as currently persisted. Always re-read from the
    /// store, so external changes are picked up without extra plumbing.
    pub fn session(&self) -> Session {
        Session {
            admin: self.store.get(StoreKey::AdminFlag).unwrap_or(false),
            citizen: self.store.get(StoreKey::CurrentUser),
        }
    }

    pub fn current_user(&self) -> Option<User> {
        self.store.get(StoreKey::CurrentUser)
    }

    fn require_admin(&self) -> Result<(), ClientError> {
        if self.session().admin {
            Ok(())
        } else {
            Err(ClientError::AdminRequired)
        }
    }

    /// Admin login: exact match against the configured demo pair.
    pub fn admin_login(&self, username: &str, password: &str) -> Result<(), ClientError> {
        if !self.admin.matches(username, password) {
            return Err(DomainError::InvalidCredentials.into());
        }
        self.store.set(StoreKey::AdminFlag, &true)?;
        tracing::info!("admin logged in");
        Ok(())
    }

    pub fn admin_logout(&self) -> Result<(), ClientError> {
        self.store.remove(StoreKey::AdminFlag)?;
        Ok(())
    }

    /// Citizen signup. Fails with [`DomainError::DuplicateEmail`] without
    /// touching the users collection; on success the new account is also the
    /// current user.
    pub fn sign_up(&self, signup: Signup) -> Result<User, ClientError> {
        let mut users: Vec<User> = self.store.collection(StoreKey::Users);
        let user = session::register(&users, signup)?;
        users.push(user.clone());
        self.store.set(StoreKey::Users, &users)?;
        self.store.set(StoreKey::CurrentUser, &user)?;
        Ok(user)
    }

    /// Citizen login against the stored users collection.
    pub fn login(&self, credentials: Credentials) -> Result<User, ClientError> {
        let users: Vec<User> = self.store.collection(StoreKey::Users);
        let user = session::authenticate(&users, &credentials)?.clone();
        self.store.set(StoreKey::CurrentUser, &user)?;
        Ok(user)
    }

    pub fn logout(&self) -> Result<(), ClientError> {
        self.store.remove(StoreKey::CurrentUser)?;
        Ok(())
    }

    /// All registered users (admin review screen).
    pub fn users(&self) -> Vec<User> {
        self.store.collection(StoreKey::Users)
    }

    // --- support tickets ----------------------------------------------

    /// Tickets are store-only; the remote API has no endpoint for them.
    pub fn submit_ticket(&self, draft: TicketDraft) -> Result<SupportTicket, ClientError> {
        let ticket = draft.build()?;
        let mut tickets: Vec<SupportTicket> = self.store.collection(StoreKey::SupportTickets);
        tickets.push(ticket.clone());
        self.store.set(StoreKey::SupportTickets, &tickets)?;
        Ok(ticket)
    }

    // --- theme --------------------------------------------------------

    pub fn theme(&self) -> Theme {
        self.store.get(StoreKey::Theme).unwrap_or_default()
    }

    pub fn toggle_theme(&self) -> Result<Theme, ClientError> {
        let next = self.theme().toggled();
        self.store.set(StoreKey::Theme, &next)?;
        Ok(next)
    }
}
