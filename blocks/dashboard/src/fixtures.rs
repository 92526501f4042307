use salon_atoms::stylists::{Gender, StylistRecord, StylistStatus};

pub fn stylist(id: &str, email: &str, city: &str, skills: &str) -> StylistRecord {
    StylistRecord {
        id: id.to_string(),
        name: format!("stylist {}", id),
        email: email.to_string(),
        phone: "0123".to_string(),
        address: "1 Main St".to_string(),
        city: city.to_string(),
        skills: skills.to_string(),
        experience: "3 years".to_string(),
        category: None,
        status: StylistStatus::Active,
        gender: None,
        profile_image: String::new(),
        certificate_names: vec![],
        identity_proof: None,
        owns_salon: None,
        created_at: "2024-01-01T00:00:00Z".to_string(),
    }
}

pub fn with_gender(mut record: StylistRecord, gender: Gender) -> StylistRecord {
    record.gender = Some(gender);
    record
}

pub fn with_status(mut record: StylistRecord, status: StylistStatus) -> StylistRecord {
    record.status = status;
    record
}

pub const ADMIN: &str = "admin@salon.com";
