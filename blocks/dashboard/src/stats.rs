use salon_atoms::stylists::{StylistRecord, StylistStatus};
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Serialize, Clone, PartialEq, Eq)]
pub struct SkillCount {
    pub skill: String,
    pub count: usize,
}

/// Aggregates over the displayed stylist set
#[derive(Debug, Serialize, Clone, PartialEq, Eq, Default)]
pub struct DashboardStats {
    pub total: usize,
    pub active: usize,
    /// Every tag in first-seen order
    pub skills: Vec<SkillCount>,
    /// Sum of all tag counts
    pub total_tags: usize,
}

/// Count each comma-separated skill tag. A record with N tags lands in N
/// buckets; bucket order is the order tags were first seen.
pub fn skill_frequencies(records: &[StylistRecord]) -> Vec<SkillCount> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<SkillCount> = Vec::new();

    for record in records {
        for tag in record.skill_tags() {
            match index.get(tag) {
                Some(&i) => counts[i].count += 1,
                None => {
                    index.insert(tag, counts.len());
                    counts.push(SkillCount {
                        skill: tag.to_string(),
                        count: 1,
                    });
                }
            }
        }
    }

    counts
}

/// The `n` largest buckets. Ties keep first-seen order.
pub fn top_skills(counts: &[SkillCount], n: usize) -> Vec<SkillCount> {
    let mut ranked = counts.to_vec();
    // stable sort
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked.truncate(n);
    ranked
}

pub fn compute_stats(records: &[StylistRecord]) -> DashboardStats {
    let skills = skill_frequencies(records);
    DashboardStats {
        total: records.len(),
        active: records
            .iter()
            .filter(|r| r.status == StylistStatus::Active)
            .count(),
        total_tags: skills.iter().map(|s| s.count).sum(),
        skills,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{stylist, with_status};

    fn count(skill: &str, count: usize) -> SkillCount {
        SkillCount {
            skill: skill.to_string(),
            count,
        }
    }

    #[test]
    fn empty_set_gives_zeroed_stats() {
        assert_eq!(compute_stats(&[]), DashboardStats::default());
    }

    #[test]
    fn counts_total_active_and_tags() {
        let records = vec![
            stylist("1", "a@x.com", "Leeds", "Hair, Nails"),
            with_status(stylist("2", "b@x.com", "York", "Nails"), StylistStatus::Pending),
            with_status(stylist("3", "c@x.com", "Hull", "Makeup ,Hair"), StylistStatus::Rejected),
        ];
        let stats = compute_stats(&records);

        assert_eq!(stats.total, 3);
        assert_eq!(stats.active, 1);
        assert!(stats.active <= stats.total);
        assert_eq!(stats.skills, vec![count("Hair", 2), count("Nails", 2), count("Makeup", 1)]);

        let per_record: usize = records.iter().map(|r| r.skill_tags().count()).sum();
        assert_eq!(stats.total_tags, per_record);
        assert!(stats.total_tags >= stats.total);
    }

    #[test]
    fn empty_skills_still_contribute_a_tag() {
        let records = vec![stylist("1", "a@x.com", "Leeds", "")];
        let stats = compute_stats(&records);
        assert_eq!(stats.skills, vec![count("", 1)]);
        assert_eq!(stats.total_tags, 1);
    }

    #[test]
    fn top_skills_breaks_ties_by_first_seen() {
        let counts = vec![
            count("Hair", 1),
            count("Nails", 3),
            count("Makeup", 1),
            count("Brows", 3),
            count("Lashes", 2),
            count("Spa", 1),
        ];
        let top = top_skills(&counts, 5);
        let names: Vec<&str> = top.iter().map(|s| s.skill.as_str()).collect();
        assert_eq!(names, vec!["Nails", "Brows", "Lashes", "Hair", "Makeup"]);
    }
}
