use salon_atoms::stylists::StylistRecord;

pub const CSV_FILENAME: &str = "stylists-data.csv";
pub const CSV_HEADER: [&str; 8] = [
    "Name",
    "Gender",
    "Email",
    "Phone",
    "Location",
    "Skills",
    "Experience",
    "Status",
];

/// One row per stylist under a fixed header.
///
/// Values are joined with bare commas and are not quoted, so a value that
/// contains a comma spills into the next column.
pub fn stylists_csv(records: &[StylistRecord]) -> String {
    let mut lines = Vec::with_capacity(records.len() + 1);
    lines.push(CSV_HEADER.join(","));

    for s in records {
        let row = [
            s.name.clone(),
            s.gender.map(|g| g.as_str().to_string()).unwrap_or_else(|| "N/A".to_string()),
            s.email.clone(),
            s.phone.clone(),
            format!("{}, {}", s.address, s.city),
            s.skills.clone(),
            s.experience.clone(),
            s.status.to_string(),
        ];
        lines.push(row.join(","));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{stylist, with_gender};
    use salon_atoms::stylists::Gender;

    #[test]
    fn header_only_for_empty_set() {
        assert_eq!(stylists_csv(&[]), "Name,Gender,Email,Phone,Location,Skills,Experience,Status");
    }

    #[test]
    fn values_are_written_unescaped() {
        let mut jo = with_gender(stylist("1", "jo@x.com", "Leeds", "Hair, Nails"), Gender::Female);
        jo.name = "Jo Lee".to_string();

        let csv = stylists_csv(&[jo]);
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[1],
            "Jo Lee,female,jo@x.com,0123,1 Main St, Leeds,Hair, Nails,3 years,active"
        );
    }

    #[test]
    fn missing_gender_is_na() {
        let csv = stylists_csv(&[stylist("1", "a@x.com", "York", "Hair")]);
        assert!(csv.lines().nth(1).unwrap().starts_with("stylist 1,N/A,a@x.com"));
    }
}
