//! Admin credentials, session flags, and the device-key registry.

use std::sync::Arc;

use uuid::Uuid;

use muse_core::domain::ManagedUser;
use muse_core::error::KeyValueError;
use muse_core::ports::KeyValueStore;

const SESSION_KEY: &str = "admin_session_active";
const MANAGED_USERS_KEY: &str = "managed_users";

/// The fixed admin set. A deterrent against casual access, not a security
/// boundary: no hashing, no rate limiting, no lockout.
const ADMINS: &[(&str, &str)] = &[
    ("Muse@4117", "830194"),
    ("Muse@4201", "562738"),
    ("Muse@4350", "941506"),
];

/// Validates the fixed admin pairs, manages the session flag across two
/// storage tiers, and owns the per-device access-key registry.
pub struct CredentialStore {
    /// Short-lived tier; gone when the process exits.
    session: Arc<dyn KeyValueStore>,
    /// Long-lived tier; survives restarts.
    persistent: Arc<dyn KeyValueStore>,
}

impl CredentialStore {
    pub fn new(session: Arc<dyn KeyValueStore>, persistent: Arc<dyn KeyValueStore>) -> Self {
        Self {
            session,
            persistent,
        }
    }

    /// True iff the pair exactly matches one of the fixed admin pairs.
    pub fn validate_credentials(username: &str, password: &str) -> bool {
        ADMINS
            .iter()
            .any(|(u, p)| *u == username && *p == password)
    }

    /// True iff a session flag is present in either tier.
    pub async fn check_session(&self) -> bool {
        self.session.get(SESSION_KEY).await.as_deref() == Some("true")
            || self.persistent.get(SESSION_KEY).await.as_deref() == Some("true")
    }

    /// Start an admin session: the long-lived tier when `remember_me`,
    /// otherwise the short-lived one.
    pub async fn login(&self, remember_me: bool) -> Result<(), KeyValueError> {
        let tier = if remember_me {
            &self.persistent
        } else {
            &self.session
        };
        tier.set(SESSION_KEY, "true").await
    }

    /// End the admin session in both tiers.
    pub async fn logout(&self) -> Result<(), KeyValueError> {
        self.session.remove(SESSION_KEY).await?;
        self.persistent.remove(SESSION_KEY).await
    }

    /// Issue a fresh opaque key for a device, replacing any existing
    /// record for that device id.
    pub async fn issue_key(&self, device_id: &str) -> Result<String, KeyValueError> {
        let access_key = format!("key_{}", Uuid::new_v4().simple());
        self.put_user(device_id, &access_key).await?;
        Ok(access_key)
    }

    /// Store a caller-supplied key verbatim, replacing any existing record.
    /// No strength or uniqueness checks; an admin-only escape hatch.
    pub async fn issue_custom_key(
        &self,
        device_id: &str,
        access_key: &str,
    ) -> Result<(), KeyValueError> {
        tracing::warn!(device_id, "issuing caller-supplied access key");
        self.put_user(device_id, access_key).await
    }

    /// Remove the record for a device; unknown ids are a no-op.
    pub async fn revoke(&self, device_id: &str) -> Result<(), KeyValueError> {
        let mut users = self.managed_users().await;
        let before = users.len();
        users.retain(|u| u.device_id != device_id);
        if users.len() == before {
            return Ok(());
        }
        self.save_users(&users).await
    }

    /// Invalidate every issued key by clearing the registry. Irreversible.
    pub async fn cycle_master_secret(&self) -> Result<(), KeyValueError> {
        tracing::warn!("master secret cycled; all issued access keys are now invalid");
        self.save_users(&[]).await
    }

    /// The current registry. Corrupt persisted data is discarded and
    /// treated as empty.
    pub async fn managed_users(&self) -> Vec<ManagedUser> {
        match self.persistent.get(MANAGED_USERS_KEY).await {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(users) => users,
                Err(e) => {
                    tracing::warn!("discarding corrupt managed-user data: {e}");
                    let _ = self.persistent.remove(MANAGED_USERS_KEY).await;
                    Vec::new()
                }
            },
            None => Vec::new(),
        }
    }

    /// True iff the exact (device id, access key) pair is registered.
    pub async fn verify_access(&self, device_id: &str, access_key: &str) -> bool {
        self.managed_users()
            .await
            .iter()
            .any(|u| u.device_id == device_id && u.access_key == access_key)
    }

    async fn put_user(&self, device_id: &str, access_key: &str) -> Result<(), KeyValueError> {
        let mut users = self.managed_users().await;
        users.retain(|u| u.device_id != device_id);
        users.push(ManagedUser {
            device_id: device_id.to_string(),
            access_key: access_key.to_string(),
        });
        self.save_users(&users).await
    }

    async fn save_users(&self, users: &[ManagedUser]) -> Result<(), KeyValueError> {
        let raw =
            serde_json::to_string(users).map_err(|e| KeyValueError::Write(e.to_string()))?;
        self.persistent.set(MANAGED_USERS_KEY, &raw).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::InMemoryKeyValueStore;

    const DEVICE: &str = "123e4567-e89b-12d3-a456-426614174000";

    fn store() -> CredentialStore {
        CredentialStore::new(
            Arc::new(InMemoryKeyValueStore::new()),
            Arc::new(InMemoryKeyValueStore::new()),
        )
    }

    #[test]
    fn every_fixed_admin_pair_validates() {
        for (username, password) in ADMINS {
            assert!(CredentialStore::validate_credentials(username, password));
        }
        assert!(!CredentialStore::validate_credentials("Muse@4117", "wrong"));
        assert!(!CredentialStore::validate_credentials("", ""));
    }

    #[tokio::test]
    async fn login_and_logout_drive_the_session_flag() {
        let store = store();
        assert!(!store.check_session().await);

        store.login(false).await.unwrap();
        assert!(store.check_session().await);
        store.logout().await.unwrap();
        assert!(!store.check_session().await);

        store.login(true).await.unwrap();
        assert!(store.check_session().await);
        store.logout().await.unwrap();
        assert!(!store.check_session().await);
    }

    #[tokio::test]
    async fn reissuing_replaces_the_prior_key() {
        let store = store();
        let first = store.issue_key(DEVICE).await.unwrap();
        let second = store.issue_key(DEVICE).await.unwrap();
        assert_ne!(first, second);

        let users = store.managed_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].access_key, second);
    }

    #[tokio::test]
    async fn custom_keys_are_stored_verbatim() {
        let store = store();
        store.issue_key(DEVICE).await.unwrap();
        store.issue_custom_key(DEVICE, "shared-booth-key").await.unwrap();

        let users = store.managed_users().await;
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].access_key, "shared-booth-key");
    }

    #[tokio::test]
    async fn revoking_an_unknown_device_changes_nothing() {
        let store = store();
        store.issue_key(DEVICE).await.unwrap();
        store.revoke("ffffffff-ffff-ffff-ffff-ffffffffffff").await.unwrap();
        assert_eq!(store.managed_users().await.len(), 1);
    }

    #[tokio::test]
    async fn cycling_the_master_secret_clears_the_registry() {
        let store = store();
        store.issue_key(DEVICE).await.unwrap();
        store
            .issue_key("ffffffff-ffff-ffff-ffff-ffffffffffff")
            .await
            .unwrap();

        store.cycle_master_secret().await.unwrap();
        assert!(store.managed_users().await.is_empty());
    }

    #[tokio::test]
    async fn access_is_verified_only_for_the_exact_pair() {
        let store = store();
        let key = store.issue_key(DEVICE).await.unwrap();

        assert!(store.verify_access(DEVICE, &key).await);
        assert!(!store.verify_access(DEVICE, "key_forged").await);
        assert!(
            !store
                .verify_access("ffffffff-ffff-ffff-ffff-ffffffffffff", &key)
                .await
        );
    }

    #[tokio::test]
    async fn corrupt_registry_data_is_discarded() {
        let session: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        let persistent: Arc<dyn KeyValueStore> = Arc::new(InMemoryKeyValueStore::new());
        persistent.set("managed_users", "[not json").await.unwrap();

        let store = CredentialStore::new(session, persistent.clone());
        assert!(store.managed_users().await.is_empty());
        assert_eq!(persistent.get("managed_users").await, None);
    }
}
