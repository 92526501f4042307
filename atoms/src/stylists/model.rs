use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Stylist profile document - one per registered identity
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct StylistRecord {
    /// Identity key of the owning account, also the document key
    #[serde(default)]
    pub id: String,
    #[serde(alias = "fullName")]
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "location")]
    pub address: String,
    #[serde(default)]
    pub city: String,
    /// Comma-separated skill tags
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: StylistStatus,
    #[serde(default)]
    pub gender: Option<Gender>,
    /// data:image/jpeg;base64,... or empty
    #[serde(default, alias = "profilePicBase64")]
    pub profile_image: String,
    #[serde(default, alias = "certificateNames")]
    pub certificate_names: Vec<String>,
    #[serde(default, alias = "identityProof")]
    pub identity_proof: Option<String>,
    #[serde(default, alias = "ownsSalon")]
    pub owns_salon: Option<bool>,
    #[serde(default, alias = "createdAt")]
    pub created_at: String,
}

impl StylistRecord {
    /// Merge a partial edit into this copy. `id` and `created_at` never change.
    pub fn apply(&mut self, patch: &UpdateStylistPayload) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(email) = &patch.email {
            self.email = email.clone();
        }
        if let Some(phone) = &patch.phone {
            self.phone = phone.clone();
        }
        if let Some(address) = &patch.address {
            self.address = address.clone();
        }
        if let Some(city) = &patch.city {
            self.city = city.clone();
        }
        if let Some(skills) = &patch.skills {
            self.skills = skills.clone();
        }
        if let Some(experience) = &patch.experience {
            self.experience = experience.clone();
        }
        if let Some(category) = &patch.category {
            self.category = Some(category.clone());
        }
        if let Some(status) = patch.status {
            self.status = status;
        }
        if let Some(gender) = patch.gender {
            self.gender = Some(gender);
        }
        if let Some(image) = &patch.profile_image {
            self.profile_image = image.clone();
        }
        if let Some(owns_salon) = patch.owns_salon {
            self.owns_salon = Some(owns_salon);
        }
    }

    /// Name with every word capitalized ("jo LEE" -> "Jo Lee")
    pub fn display_name(&self) -> String {
        self.name
            .split(' ')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => {
                        first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                    }
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Individual skill tags, trimmed. An empty skills field yields one empty tag.
    pub fn skill_tags(&self) -> impl Iterator<Item = &str> {
        self.skills.split(',').map(str::trim)
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StylistStatus {
    #[default]
    Pending,
    #[serde(alias = "approved")]
    Active,
    Rejected,
}

impl StylistStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            StylistStatus::Pending => "pending",
            StylistStatus::Active => "active",
            StylistStatus::Rejected => "rejected",
        }
    }

    /// Stored values outside the known set read as pending
    pub fn from_stored(raw: &str) -> Self {
        raw.parse().unwrap_or_default()
    }
}

impl FromStr for StylistStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(StylistStatus::Pending),
            // legacy alias
            "active" | "approved" => Ok(StylistStatus::Active),
            "rejected" => Ok(StylistStatus::Rejected),
            other => Err(format!("Unknown status: {}", other)),
        }
    }
}

impl fmt::Display for StylistStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            other => Err(format!("Unknown gender: {}", other)),
        }
    }
}

/// Registration form. Uploads arrive base64-encoded in the JSON body.
#[derive(Debug, Deserialize, Default)]
pub struct CreateStylistPayload {
    #[serde(default, alias = "fullName")]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default, alias = "location")]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    pub category: Option<String>,
    pub gender: Option<Gender>,
    pub owns_salon: Option<bool>,
    /// Raw picture bytes, base64
    pub profile_picture: Option<String>,
    #[serde(default)]
    pub certificate_names: Vec<String>,
    /// Raw identity document bytes, base64
    pub identity_proof: Option<String>,
    pub identity_proof_type: Option<String>,
}

impl CreateStylistPayload {
    /// Names of required fields left blank
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        let checks = [
            ("name", &self.name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("address", &self.address),
            ("city", &self.city),
            ("experience", &self.experience),
        ];
        for (field, value) in checks {
            if value.trim().is_empty() {
                missing.push(field);
            }
        }
        let has_category = self.category.as_deref().is_some_and(|c| !c.trim().is_empty());
        if self.skills.trim().is_empty() && !has_category {
            missing.push("skills");
        }
        if self.gender.is_none() {
            missing.push("gender");
        }
        missing
    }

    /// Skills fall back to the selected category
    pub fn effective_skills(&self) -> String {
        if self.skills.trim().is_empty() {
            self.category.clone().unwrap_or_default()
        } else {
            self.skills.clone()
        }
    }
}

/// Partial overwrite of a stylist document
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct UpdateStylistPayload {
    #[serde(default, alias = "fullName", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, alias = "location", skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<StylistStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Gender>,
    #[serde(default, alias = "profilePicBase64", skip_serializing_if = "Option::is_none")]
    pub profile_image: Option<String>,
    #[serde(default, alias = "ownsSalon", skip_serializing_if = "Option::is_none")]
    pub owns_salon: Option<bool>,
}

impl UpdateStylistPayload {
    pub fn status_only(status: StylistStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[derive(Debug, Deserialize)]
pub struct StatusUpdatePayload {
    pub status: String,
}
