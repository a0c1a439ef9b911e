//! Process-local adapters for development and HTTP-level tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

use crate::domain::entities::{Client, User};
use crate::domain::repositories::{ClientRepository, UserStore};
use crate::error::AppError;

/// Client repository backed by a map.
///
/// Reports healthy until [`set_healthy`](Self::set_healthy) says otherwise.
pub struct InMemoryClientRepository {
    clients: RwLock<HashMap<i32, Client>>,
    healthy: AtomicBool,
}

impl Default for InMemoryClientRepository {
    fn default() -> Self {
        Self::with_clients(Vec::<Client>::new())
    }
}

impl InMemoryClientRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the repository with the given clients.
    pub fn with_clients(clients: impl IntoIterator<Item = Client>) -> Self {
        let clients = clients.into_iter().map(|c| (c.id, c)).collect();
        Self {
            clients: RwLock::new(clients),
            healthy: AtomicBool::new(true),
        }
    }

    /// Controls the result of [`ClientRepository::health_check`].
    pub fn set_healthy(&self, healthy: bool) {
        self.healthy.store(healthy, Ordering::SeqCst);
    }

    /// Inserts or replaces a client.
    pub async fn upsert(&self, client: Client) {
        self.clients.write().await.insert(client.id, client);
    }
}

#[async_trait]
impl ClientRepository for InMemoryClientRepository {
    async fn get_by_id(&self, id: i32) -> Result<Option<Client>, AppError> {
        Ok(self.clients.read().await.get(&id).cloned())
    }

    async fn health_check(&self) -> bool {
        self.healthy.load(Ordering::SeqCst)
    }
}

/// User store that keeps admitted users in a vector.
#[derive(Default)]
pub struct InMemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of every stored user, in insertion order.
    pub async fn users(&self) -> Vec<User> {
        self.users.read().await.clone()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn add_user(&self, user: User) -> Result<(), AppError> {
        self.users.write().await.push(user);
        Ok(())
    }
}
