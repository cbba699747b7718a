//! Pure eligibility predicates.
//!
//! Kept free of I/O so the filter rules are unit-testable; the actions
//! layer handles orchestration.

use chrono::NaiveDate;

use crate::domains::events::models::event::Event;
use crate::domains::volunteers::models::volunteer::Volunteer;

/// Cities compare case-insensitively; "austin" and "Austin" are one city.
pub fn same_city(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Exact-date membership, not a range check. Events are single-day.
pub fn is_available_on(volunteer: &Volunteer, date: NaiveDate) -> bool {
    volunteer.availability.contains(&date)
}

/// Skills the volunteer can contribute to this event, in the volunteer's
/// own declared order (display only, never used for ranking).
pub fn matching_skills(volunteer: &Volunteer, event: &Event) -> Vec<String> {
    volunteer
        .skills
        .iter()
        .filter(|skill| event.required_skills.contains(skill))
        .cloned()
        .collect()
}

/// ANY-overlap semantics: one shared skill is enough.
pub fn has_matching_skill(volunteer: &Volunteer, event: &Event) -> bool {
    volunteer
        .skills
        .iter()
        .any(|skill| event.required_skills.contains(skill))
}

/// Full eligibility check (excluding the already-matched set, which the
/// caller applies from history state).
pub fn is_eligible(volunteer: &Volunteer, event: &Event) -> bool {
    is_available_on(volunteer, event.event_date)
        && has_matching_skill(volunteer, event)
        && same_city(&volunteer.city, &event.city)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::{EventId, VolunteerId};
    use chrono::{NaiveTime, Utc};

    fn volunteer(city: &str, skills: &[&str], availability: &[&str]) -> Volunteer {
        Volunteer {
            id: VolunteerId::new(),
            full_name: "Test Volunteer".to_string(),
            email: "volunteer@example.org".to_string(),
            role: "volunteer".to_string(),
            city: city.to_string(),
            skills: skills.iter().map(|s| s.to_string()).collect(),
            availability: availability
                .iter()
                .map(|d| d.parse().unwrap())
                .collect(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn event(city: &str, required_skills: &[&str], date: &str) -> Event {
        Event {
            id: EventId::new(),
            event_name: "Adoption Day".to_string(),
            event_description: "Help run the adoption fair".to_string(),
            address: "500 Shelter Ln".to_string(),
            city: city.to_string(),
            state: "TX".to_string(),
            zip_code: "78701".to_string(),
            required_skills: required_skills.iter().map(|s| s.to_string()).collect(),
            urgency: "medium".to_string(),
            event_date: date.parse().unwrap(),
            start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn eligible_when_all_criteria_met() {
        let v = volunteer("Austin", &["Feeding"], &["2024-06-01"]);
        let e = event("Austin", &["Feeding", "Cleaning"], "2024-06-01");
        assert!(is_eligible(&v, &e));
        assert_eq!(matching_skills(&v, &e), vec!["Feeding"]);
    }

    #[test]
    fn ineligible_on_city_mismatch() {
        let v = volunteer("Dallas", &["Feeding"], &["2024-06-01"]);
        let e = event("Austin", &["Feeding", "Cleaning"], "2024-06-01");
        assert!(!is_eligible(&v, &e));
    }

    #[test]
    fn ineligible_without_skill_overlap() {
        let v = volunteer("Austin", &["Grooming"], &["2024-06-01"]);
        let e = event("Austin", &["Feeding", "Cleaning"], "2024-06-01");
        assert!(!is_eligible(&v, &e));
        assert!(matching_skills(&v, &e).is_empty());
    }

    #[test]
    fn ineligible_on_date_mismatch() {
        let v = volunteer("Austin", &["Feeding"], &["2024-07-01"]);
        let e = event("Austin", &["Feeding", "Cleaning"], "2024-06-01");
        assert!(!is_eligible(&v, &e));
    }

    #[test]
    fn city_comparison_ignores_case() {
        assert!(same_city("austin", "Austin"));
        assert!(same_city("AUSTIN", "austin"));
        assert!(!same_city("Austin", "Dallas"));
    }

    #[test]
    fn one_shared_skill_is_enough() {
        let v = volunteer("Austin", &["Grooming", "Cleaning"], &["2024-06-01"]);
        let e = event("Austin", &["Feeding", "Cleaning"], "2024-06-01");
        assert!(has_matching_skill(&v, &e));
        assert_eq!(matching_skills(&v, &e), vec!["Cleaning"]);
    }
}
