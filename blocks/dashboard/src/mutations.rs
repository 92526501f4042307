use salon_atoms::stylists::{StoreError, StylistStatus, StylistStore, UpdateStylistPayload};

use crate::loader::Roster;

pub const STATUS_FAILED: &str = "Failed to update status";
pub const EDIT_FAILED: &str = "Failed to update stylist";
pub const DELETE_FAILED: &str = "Failed to delete stylist";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MutationError {
    #[error("Unknown status: {0}")]
    InvalidStatus(String),
    #[error("Nothing to update")]
    EmptyEdit,
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// A change the store has already accepted, ready to commit to the roster
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    StatusChanged {
        id: String,
        status: StylistStatus,
        /// The value the admin picked, before "approved" became "active"
        requested: String,
    },
    Edited {
        id: String,
        patch: UpdateStylistPayload,
    },
    Deleted {
        id: String,
    },
}

impl Mutation {
    pub fn id(&self) -> &str {
        match self {
            Mutation::StatusChanged { id, .. } | Mutation::Edited { id, .. } | Mutation::Deleted { id } => id,
        }
    }

    pub fn success_message(&self) -> String {
        match self {
            Mutation::StatusChanged { status, requested, .. } => {
                let action = if requested.trim().eq_ignore_ascii_case("approved") {
                    "approved and activated"
                } else {
                    status.as_str()
                };
                format!("Stylist {} successfully!", action)
            }
            Mutation::Edited { .. } => "Stylist updated successfully!".to_string(),
            Mutation::Deleted { .. } => "Stylist deleted successfully!".to_string(),
        }
    }
}

/// Set a stylist's status. "approved" is written as "active".
pub async fn update_status(
    store: &dyn StylistStore,
    id: &str,
    requested: &str,
) -> Result<Mutation, MutationError> {
    let status: StylistStatus = requested
        .parse()
        .map_err(|_| MutationError::InvalidStatus(requested.to_string()))?;

    store
        .update_fields(id, &UpdateStylistPayload::status_only(status))
        .await?;

    tracing::info!("Stylist {} status set to {}", id, status);
    Ok(Mutation::StatusChanged {
        id: id.to_string(),
        status,
        requested: requested.to_string(),
    })
}

/// Overwrite the given fields of one stylist
pub async fn edit_stylist(
    store: &dyn StylistStore,
    id: &str,
    patch: UpdateStylistPayload,
) -> Result<Mutation, MutationError> {
    if patch.is_empty() {
        return Err(MutationError::EmptyEdit);
    }

    store.update_fields(id, &patch).await?;

    tracing::info!("Stylist {} edited", id);
    Ok(Mutation::Edited {
        id: id.to_string(),
        patch,
    })
}

/// First step of a delete; nothing is removed until it is confirmed
#[derive(Debug, Clone)]
pub struct DeleteRequest {
    id: String,
}

/// Proof that the admin confirmed the delete
#[derive(Debug, Clone)]
pub struct ConfirmedDelete {
    id: String,
}

impl DeleteRequest {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn confirm(self, confirmed: bool) -> Option<ConfirmedDelete> {
        confirmed.then(|| ConfirmedDelete { id: self.id })
    }
}

/// Remove a stylist for good. There is no tombstone and no undo.
pub async fn delete_stylist(
    store: &dyn StylistStore,
    confirmed: ConfirmedDelete,
) -> Result<Mutation, MutationError> {
    store.delete(&confirmed.id).await?;

    tracing::info!("Stylist {} deleted", confirmed.id);
    Ok(Mutation::Deleted { id: confirmed.id })
}

impl Roster {
    /// Apply a store-accepted change to the displayed set.
    /// Returns false when the record is not on display.
    pub fn commit(&mut self, mutation: &Mutation) -> bool {
        let stylists = self.stylists_mut();
        match mutation {
            Mutation::StatusChanged { id, status, .. } => match stylists.iter_mut().find(|s| &s.id == id) {
                Some(stylist) => {
                    stylist.status = *status;
                    true
                }
                None => false,
            },
            Mutation::Edited { id, patch } => match stylists.iter_mut().find(|s| &s.id == id) {
                Some(stylist) => {
                    stylist.apply(patch);
                    true
                }
                None => false,
            },
            Mutation::Deleted { id } => {
                let before = stylists.len();
                stylists.retain(|s| &s.id != id);
                stylists.len() != before
            }
        }
    }
}
