use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoClient;
use std::collections::HashMap;

use super::model::{Gender, StylistRecord, StylistStatus, UpdateStylistPayload};
use super::store::{StoreError, StylistStore};

const SK_PREFIX: &str = "STYLIST#";

/// Stylist documents in a single DynamoDB table:
/// PK = collection name ("stylists")
/// SK = "STYLIST#{identity}"
pub struct DynamoStylistStore {
    client: DynamoClient,
    table_name: String,
    collection: String,
}

impl DynamoStylistStore {
    pub fn new(client: DynamoClient, table_name: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            collection: collection.into(),
        }
    }

    fn key(&self, id: &str) -> (AttributeValue, AttributeValue) {
        (
            AttributeValue::S(self.collection.clone()),
            AttributeValue::S(format!("{}{}", SK_PREFIX, id)),
        )
    }
}

/// Read the first present string attribute; later names are legacy spellings
fn string_attr(item: &HashMap<String, AttributeValue>, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|name| item.get(*name).and_then(|v| v.as_s().ok()))
        .map(|s| s.to_string())
}

fn bool_attr(item: &HashMap<String, AttributeValue>, names: &[&str]) -> Option<bool> {
    names
        .iter()
        .find_map(|name| item.get(*name).and_then(|v| v.as_bool().ok()))
        .copied()
}

fn list_attr(item: &HashMap<String, AttributeValue>, names: &[&str]) -> Vec<String> {
    for name in names {
        match item.get(*name) {
            Some(AttributeValue::L(values)) => {
                return values
                    .iter()
                    .filter_map(|v| v.as_s().ok())
                    .map(|s| s.to_string())
                    .collect();
            }
            Some(AttributeValue::Ss(values)) => return values.clone(),
            _ => {}
        }
    }
    Vec::new()
}

pub(crate) fn item_to_stylist(id: &str, item: &HashMap<String, AttributeValue>) -> StylistRecord {
    StylistRecord {
        id: id.to_string(),
        name: string_attr(item, &["name", "fullName"]).unwrap_or_default(),
        email: string_attr(item, &["email"]).unwrap_or_default(),
        phone: string_attr(item, &["phone"]).unwrap_or_default(),
        address: string_attr(item, &["address", "location"]).unwrap_or_default(),
        city: string_attr(item, &["city"]).unwrap_or_default(),
        skills: string_attr(item, &["skills"]).unwrap_or_default(),
        experience: string_attr(item, &["experience"]).unwrap_or_default(),
        category: string_attr(item, &["category"]).filter(|c| !c.is_empty()),
        status: string_attr(item, &["status"])
            .map(|s| StylistStatus::from_stored(&s))
            .unwrap_or_default(),
        gender: string_attr(item, &["gender"]).and_then(|g| g.parse::<Gender>().ok()),
        profile_image: string_attr(item, &["profile_image", "profilePicBase64"]).unwrap_or_default(),
        certificate_names: list_attr(item, &["certificate_names", "certificateNames"]),
        identity_proof: string_attr(item, &["identity_proof", "identityProof"]).filter(|p| !p.is_empty()),
        owns_salon: bool_attr(item, &["owns_salon", "ownsSalon"]),
        created_at: string_attr(item, &["created_at", "createdAt"]).unwrap_or_default(),
    }
}

pub(crate) fn stylist_to_item(record: &StylistRecord) -> HashMap<String, AttributeValue> {
    let mut item = HashMap::new();
    item.insert("name".to_string(), AttributeValue::S(record.name.clone()));
    item.insert("email".to_string(), AttributeValue::S(record.email.clone()));
    item.insert("phone".to_string(), AttributeValue::S(record.phone.clone()));
    item.insert("address".to_string(), AttributeValue::S(record.address.clone()));
    item.insert("city".to_string(), AttributeValue::S(record.city.clone()));
    item.insert("skills".to_string(), AttributeValue::S(record.skills.clone()));
    item.insert("experience".to_string(), AttributeValue::S(record.experience.clone()));
    item.insert("status".to_string(), AttributeValue::S(record.status.to_string()));
    item.insert("profile_image".to_string(), AttributeValue::S(record.profile_image.clone()));
    item.insert(
        "certificate_names".to_string(),
        AttributeValue::L(
            record
                .certificate_names
                .iter()
                .map(|n| AttributeValue::S(n.clone()))
                .collect(),
        ),
    );
    item.insert("created_at".to_string(), AttributeValue::S(record.created_at.clone()));

    if let Some(category) = &record.category {
        item.insert("category".to_string(), AttributeValue::S(category.clone()));
    }
    if let Some(gender) = record.gender {
        item.insert("gender".to_string(), AttributeValue::S(gender.as_str().to_string()));
    }
    if let Some(proof) = &record.identity_proof {
        item.insert("identity_proof".to_string(), AttributeValue::S(proof.clone()));
    }
    if let Some(owns_salon) = record.owns_salon {
        item.insert("owns_salon".to_string(), AttributeValue::Bool(owns_salon));
    }
    item
}

/// SET/REMOVE clauses for a partial update. Writing a canonical field drops
/// its legacy spelling so old documents migrate as they are edited.
pub(crate) struct UpdatePlan {
    pub expression: String,
    pub names: HashMap<String, String>,
    pub values: HashMap<String, AttributeValue>,
}

pub(crate) fn plan_update(patch: &UpdateStylistPayload) -> Option<UpdatePlan> {
    let mut sets = vec![];
    let mut removes = vec![];
    let mut names = HashMap::new();
    let mut values = HashMap::new();

    let mut set = |field: &str, value: AttributeValue, legacy: Option<&str>| {
        sets.push(format!("#{0} = :{0}", field));
        names.insert(format!("#{}", field), field.to_string());
        values.insert(format!(":{}", field), value);
        if let Some(old) = legacy {
            removes.push(format!("#{}", old));
            names.insert(format!("#{}", old), old.to_string());
        }
    };

    if let Some(name) = &patch.name {
        set("name", AttributeValue::S(name.clone()), Some("fullName"));
    }
    if let Some(email) = &patch.email {
        set("email", AttributeValue::S(email.clone()), None);
    }
    if let Some(phone) = &patch.phone {
        set("phone", AttributeValue::S(phone.clone()), None);
    }
    if let Some(address) = &patch.address {
        set("address", AttributeValue::S(address.clone()), Some("location"));
    }
    if let Some(city) = &patch.city {
        set("city", AttributeValue::S(city.clone()), None);
    }
    if let Some(skills) = &patch.skills {
        set("skills", AttributeValue::S(skills.clone()), None);
    }
    if let Some(experience) = &patch.experience {
        set("experience", AttributeValue::S(experience.clone()), None);
    }
    if let Some(category) = &patch.category {
        set("category", AttributeValue::S(category.clone()), None);
    }
    if let Some(status) = patch.status {
        set("status", AttributeValue::S(status.to_string()), None);
    }
    if let Some(gender) = patch.gender {
        set("gender", AttributeValue::S(gender.as_str().to_string()), None);
    }
    if let Some(image) = &patch.profile_image {
        set("profile_image", AttributeValue::S(image.clone()), Some("profilePicBase64"));
    }
    if let Some(owns_salon) = patch.owns_salon {
        set("owns_salon", AttributeValue::Bool(owns_salon), Some("ownsSalon"));
    }

    if sets.is_empty() {
        return None;
    }

    let mut expression = format!("SET {}", sets.join(", "));
    if !removes.is_empty() {
        expression.push_str(&format!(" REMOVE {}", removes.join(", ")));
    }

    Some(UpdatePlan {
        expression,
        names,
        values,
    })
}

#[async_trait]
impl StylistStore for DynamoStylistStore {
    async fn create(&self, record: &StylistRecord) -> Result<(), StoreError> {
        let (pk, sk) = self.key(&record.id);
        let mut item = stylist_to_item(record);
        item.insert("PK".to_string(), pk);
        item.insert("SK".to_string(), sk);

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .condition_expression("attribute_not_exists(SK)")
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_conditional_check_failed_exception()) {
                    StoreError::AlreadyExists(record.id.clone())
                } else {
                    StoreError::Backend(format!("DynamoDB put_item error: {}", e))
                }
            })?;

        Ok(())
    }

    async fn get(&self, id: &str) -> Result<Option<StylistRecord>, StoreError> {
        let (pk, sk) = self.key(id);

        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("PK", pk)
            .key("SK", sk)
            .send()
            .await
            .map_err(|e| StoreError::Backend(format!("DynamoDB get_item error: {}", e)))?;

        Ok(result.item().map(|item| item_to_stylist(id, item)))
    }

    async fn list(&self) -> Result<Vec<StylistRecord>, StoreError> {
        let mut records = Vec::new();
        let mut start_key: Option<HashMap<String, AttributeValue>> = None;

        loop {
            let result = self
                .client
                .query()
                .table_name(&self.table_name)
                .key_condition_expression("PK = :pk AND begins_with(SK, :sk_prefix)")
                .expression_attribute_values(":pk", AttributeValue::S(self.collection.clone()))
                .expression_attribute_values(":sk_prefix", AttributeValue::S(SK_PREFIX.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(|e| StoreError::Backend(format!("DynamoDB query error: {}", e)))?;

            for item in result.items() {
                if let Some(sk) = item.get("SK").and_then(|v| v.as_s().ok()) {
                    if let Some(id) = sk.strip_prefix(SK_PREFIX) {
                        records.push(item_to_stylist(id, item));
                    }
                }
            }

            match result.last_evaluated_key() {
                Some(key) if !key.is_empty() => start_key = Some(key.clone()),
                _ => break,
            }
        }

        tracing::debug!("Loaded {} stylist documents from {}", records.len(), self.table_name);
        Ok(records)
    }

    async fn update_fields(&self, id: &str, patch: &UpdateStylistPayload) -> Result<(), StoreError> {
        let Some(plan) = plan_update(patch) else {
            // Nothing to write, but the caller still expects NotFound for a missing record
            return match self.get(id).await? {
                Some(_) => Ok(()),
                None => Err(StoreError::NotFound(id.to_string())),
            };
        };

        let (pk, sk) = self.key(id);
        let mut builder = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("PK", pk)
            .key("SK", sk)
            .update_expression(plan.expression)
            .condition_expression("attribute_exists(SK)");

        for (k, v) in plan.names {
            builder = builder.expression_attribute_names(k, v);
        }

        for (k, v) in plan.values {
            builder = builder.expression_attribute_values(k, v);
        }

        builder.send().await.map_err(|e| {
            if e.as_service_error().is_some_and(|se| se.is_conditional_check_failed_exception()) {
                StoreError::NotFound(id.to_string())
            } else {
                StoreError::Backend(format!("DynamoDB update_item error: {}", e))
            }
        })?;

        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let (pk, sk) = self.key(id);

        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("PK", pk)
            .key("SK", sk)
            .condition_expression("attribute_exists(SK)")
            .send()
            .await
            .map_err(|e| {
                if e.as_service_error().is_some_and(|se| se.is_conditional_check_failed_exception()) {
                    StoreError::NotFound(id.to_string())
                } else {
                    StoreError::Backend(format!("DynamoDB delete_item error: {}", e))
                }
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_item_reads_into_canonical_record() {
        let mut item = HashMap::new();
        item.insert("fullName".to_string(), AttributeValue::S("Ana Ruiz".to_string()));
        item.insert("email".to_string(), AttributeValue::S("ana@x.com".to_string()));
        item.insert("location".to_string(), AttributeValue::S("12 High St".to_string()));
        item.insert("status".to_string(), AttributeValue::S("approved".to_string()));
        item.insert("gender".to_string(), AttributeValue::S("".to_string()));
        item.insert(
            "certificateNames".to_string(),
            AttributeValue::L(vec![AttributeValue::S("a.pdf".to_string())]),
        );

        let record = item_to_stylist("u9", &item);
        assert_eq!(record.id, "u9");
        assert_eq!(record.name, "Ana Ruiz");
        assert_eq!(record.address, "12 High St");
        assert_eq!(record.status, StylistStatus::Active);
        assert_eq!(record.gender, None);
        assert_eq!(record.certificate_names, vec!["a.pdf".to_string()]);
    }

    #[test]
    fn canonical_name_wins_over_legacy() {
        let mut item = HashMap::new();
        item.insert("name".to_string(), AttributeValue::S("New".to_string()));
        item.insert("fullName".to_string(), AttributeValue::S("Old".to_string()));
        assert_eq!(item_to_stylist("u1", &item).name, "New");
    }

    #[test]
    fn item_written_with_canonical_names() {
        let record = StylistRecord {
            id: "u1".to_string(),
            name: "Jo".to_string(),
            email: "jo@x.com".to_string(),
            phone: "1".to_string(),
            address: "a".to_string(),
            city: "c".to_string(),
            skills: "Hair".to_string(),
            experience: "5 years".to_string(),
            category: None,
            status: StylistStatus::Active,
            gender: Some(Gender::Female),
            profile_image: String::new(),
            certificate_names: vec![],
            identity_proof: None,
            owns_salon: Some(true),
            created_at: "2024-01-01T00:00:00Z".to_string(),
        };
        let item = stylist_to_item(&record);
        assert_eq!(item.get("status").and_then(|v| v.as_s().ok()).map(String::as_str), Some("active"));
        assert_eq!(item.get("gender").and_then(|v| v.as_s().ok()).map(String::as_str), Some("female"));
        assert!(item.get("fullName").is_none());
        assert!(item.get("category").is_none());
        assert_eq!(item_to_stylist("u1", &item), record);
    }

    #[test]
    fn update_plan_sets_fields_and_drops_legacy_spelling() {
        let patch = UpdateStylistPayload {
            name: Some("Jo".to_string()),
            status: Some(StylistStatus::Active),
            ..Default::default()
        };
        let plan = plan_update(&patch).unwrap();
        assert!(plan.expression.starts_with("SET #name = :name, #status = :status"));
        assert!(plan.expression.ends_with(" REMOVE #fullName"));
        assert_eq!(plan.names.get("#fullName").map(String::as_str), Some("fullName"));
        assert_eq!(
            plan.values.get(":status").and_then(|v| v.as_s().ok()).map(String::as_str),
            Some("active")
        );
    }

    #[test]
    fn empty_patch_has_no_plan() {
        assert!(plan_update(&UpdateStylistPayload::default()).is_none());
    }
}
