use super::model::{CreateStylistPayload, StylistRecord, StylistStatus, UpdateStylistPayload};
use super::store::{StoreError, StylistStore};
use crate::media::{decode_upload, encode_document, normalize_profile_image, MediaError};

#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error("Missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Create the stylist document for a freshly signed-up identity.
///
/// The identity key doubles as the document key, so each account owns exactly
/// one record. New records start out active.
pub async fn register_stylist(
    store: &dyn StylistStore,
    user_id: &str,
    payload: CreateStylistPayload,
) -> Result<StylistRecord, RegistrationError> {
    let missing = payload.missing_fields();
    if !missing.is_empty() {
        return Err(RegistrationError::MissingFields(missing));
    }

    let picture = payload
        .profile_picture
        .as_deref()
        .map(decode_upload)
        .transpose()?;
    let profile_image = normalize_profile_image(picture).await?;

    let identity_proof = match payload.identity_proof.as_deref() {
        Some(raw) => {
            let bytes = decode_upload(raw)?;
            let content_type = payload
                .identity_proof_type
                .as_deref()
                .unwrap_or("application/octet-stream");
            Some(encode_document(&bytes, content_type)).filter(|doc| !doc.is_empty())
        }
        None => None,
    };

    let record = StylistRecord {
        id: user_id.to_string(),
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        phone: payload.phone.trim().to_string(),
        address: payload.address.trim().to_string(),
        city: payload.city.trim().to_string(),
        skills: payload.effective_skills(),
        experience: payload.experience.trim().to_string(),
        category: payload.category.filter(|c| !c.trim().is_empty()),
        status: StylistStatus::Active,
        gender: payload.gender,
        profile_image,
        certificate_names: payload.certificate_names,
        identity_proof,
        owns_salon: payload.owns_salon,
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    store.create(&record).await?;

    tracing::info!("Registered stylist {} ({})", record.id, record.email);
    Ok(record)
}

/// The caller's own record
pub async fn get_profile(store: &dyn StylistStore, user_id: &str) -> Result<StylistRecord, StoreError> {
    store
        .get(user_id)
        .await?
        .ok_or_else(|| StoreError::NotFound(user_id.to_string()))
}

/// Self-service edit. Status is admin-driven, so owners cannot touch it.
pub async fn update_profile(
    store: &dyn StylistStore,
    user_id: &str,
    mut patch: UpdateStylistPayload,
) -> Result<StylistRecord, StoreError> {
    if patch.status.take().is_some() {
        tracing::warn!("Ignoring status change in self-service edit for {}", user_id);
    }

    store.update_fields(user_id, &patch).await?;
    get_profile(store, user_id).await
}
