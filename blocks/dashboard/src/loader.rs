use salon_atoms::stylists::{StoreError, StylistRecord, StylistStore};
use std::collections::HashSet;

/// Looser than an exact match: " A@x.com" and "a@x.com" are the same account
fn email_key(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Drop the reserved admin account from stylist-facing sets
pub fn exclude_admin(records: Vec<StylistRecord>, admin_email: &str) -> Vec<StylistRecord> {
    let admin = email_key(admin_email);
    records
        .into_iter()
        .filter(|r| email_key(&r.email) != admin)
        .collect()
}

/// Keep the first record seen for each email, in fetch order.
/// Later duplicates are hidden, not deleted.
pub fn dedupe_by_email(records: Vec<StylistRecord>) -> Vec<StylistRecord> {
    let mut seen = HashSet::new();
    records
        .into_iter()
        .filter(|r| seen.insert(email_key(&r.email)))
        .collect()
}

/// Fetch the whole collection and shape it for display
pub async fn load_stylists(
    store: &dyn StylistStore,
    admin_email: &str,
) -> Result<Vec<StylistRecord>, StoreError> {
    let fetched = store.list().await?;
    let fetched_count = fetched.len();
    let stylists = dedupe_by_email(exclude_admin(fetched, admin_email));

    tracing::info!("Loaded {} stylists ({} documents fetched)", stylists.len(), fetched_count);

    Ok(stylists)
}

/// The displayed stylist set for one request. Mutations are committed here
/// only after the store has accepted them.
#[derive(Debug, Default, Clone)]
pub struct Roster {
    stylists: Vec<StylistRecord>,
}

impl Roster {
    /// Wrap an already shaped set
    pub fn new(stylists: Vec<StylistRecord>) -> Self {
        Self { stylists }
    }

    /// A failed load returns the error and builds nothing; callers answer
    /// "load failed" and no change is attempted.
    pub async fn load(store: &dyn StylistStore, admin_email: &str) -> Result<Self, StoreError> {
        Ok(Self::new(load_stylists(store, admin_email).await?))
    }

    pub fn stylists(&self) -> &[StylistRecord] {
        &self.stylists
    }

    pub(crate) fn stylists_mut(&mut self) -> &mut Vec<StylistRecord> {
        &mut self.stylists
    }

    pub fn get(&self, id: &str) -> Option<&StylistRecord> {
        self.stylists.iter().find(|s| s.id == id)
    }

    pub fn len(&self) -> usize {
        self.stylists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stylists.is_empty()
    }
}
