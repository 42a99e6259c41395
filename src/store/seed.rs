//! Synthetic seed data generation.
//!
//! Generates the contact and task collections the store starts with, standing in
//! for a real backend's data set. Generation is driven by a caller-supplied
//! seeded RNG so the same seed always produces the same data set, which keeps
//! tests reproducible.
//!
//! Contacts get index-unique emails and formatted phone numbers with creation
//! dates spread across 2024. Each contact owns `index % 5` tasks drawn from a
//! fixed template pool, with randomized completion flags and timestamps in the
//! last quarter of 2024.

use chrono::{DateTime, Utc};
use rand::rngs::StdRng;
use rand::Rng;

use crate::domain::{Contact, Task};

const FIRST_NAMES: &[&str] = &[
    "Alex", "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry", "Ivy", "Jack",
    "Karen", "Leo", "Mia", "Noah", "Olivia", "Paul", "Quinn", "Rachel", "Sam", "Tina", "Uma",
    "Victor", "Wendy", "Xavier", "Yara", "Zane", "Amy", "Ben", "Cara", "Dan", "Emma", "Finn",
    "Gina", "Hugo", "Isla", "Jake", "Kate", "Luke", "Maya", "Nick", "Ora", "Pete", "Rosa", "Sean",
    "Tara", "Vince", "Will",
];

const LAST_NAMES: &[&str] = &[
    "Anderson", "Brown", "Davis", "Garcia", "Harris", "Jackson", "Johnson", "Jones", "Lee",
    "Martinez", "Miller", "Moore", "Robinson", "Smith", "Taylor", "Thompson", "Walker", "White",
    "Williams", "Wilson", "Adams", "Baker", "Clark", "Collins", "Evans", "Green", "Hall", "Hill",
    "King", "Lewis", "Martin", "Mitchell", "Nelson", "Parker", "Phillips", "Roberts", "Rodriguez",
    "Scott", "Stewart", "Turner", "Ward", "Watson", "Wright", "Young", "Allen", "Carter", "Cooper",
    "Flores", "Gomez",
];

const COMPANIES: &[&str] = &[
    "Tech Corp",
    "Design Studio",
    "Consulting Group",
    "Marketing Agency",
    "Finance Inc",
    "Healthcare LLC",
    "Education Hub",
    "Retail Co",
    "Food Services",
    "Transportation Ltd",
    "Innovation Labs",
    "Creative Solutions",
    "Digital Ventures",
    "Global Enterprises",
    "Future Systems",
    "Smart Technologies",
    "Premium Services",
    "Elite Consulting",
    "Advanced Solutions",
    "NextGen Industries",
];

const DOMAINS: &[&str] = &[
    "email.com",
    "gmail.com",
    "yahoo.com",
    "outlook.com",
    "company.com",
    "business.com",
    "corp.net",
    "enterprise.io",
    "digital.com",
    "tech.org",
];

/// Task title/description templates paired as `(title, description)`.
const TASK_TEMPLATES: &[(&str, Option<&str>)] = &[
    ("Follow up on project proposal", None),
    ("Schedule meeting", Some("Discuss quarterly goals")),
    ("Review contract", Some("Legal review needed")),
    ("Send thank you note", None),
    ("Book travel arrangements", Some("Conference in Q2")),
    ("Prepare presentation", Some("Q4 results review")),
    ("Update project timeline", None),
    ("Conduct market research", Some("Competitor analysis")),
    ("Schedule team training", None),
    ("Review budget proposal", Some("Financial planning")),
];

/// 2024-01-01T00:00:00Z, the base date for contact creation timestamps.
const CONTACT_EPOCH_SECS: i64 = 1_704_067_200;

/// 2024-12-31T00:00:00Z, the anchor date task timestamps count back from.
const TASK_EPOCH_SECS: i64 = 1_735_603_200;

const SECONDS_PER_DAY: i64 = 86_400;

/// Generates `count` synthetic contacts.
///
/// Emails are made unique by suffixing the contact index; names, domains, and
/// companies are drawn from the fixed pools via the supplied RNG.
#[must_use]
pub fn generate_contacts(count: usize, rng: &mut StdRng) -> Vec<Contact> {
    let mut contacts = Vec::with_capacity(count);

    for i in 0..count {
        let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
        let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
        let domain = DOMAINS[rng.random_range(0..DOMAINS.len())];
        let company = COMPANIES[rng.random_range(0..COMPANIES.len())];

        let email_base = format!("{}.{}", first.to_lowercase(), last.to_lowercase());
        let email = if i > 0 {
            format!("{email_base}{i}@{domain}")
        } else {
            format!("{email_base}@{domain}")
        };

        contacts.push(Contact {
            id: format!("contact-{}", i + 1),
            name: format!("{first} {last}"),
            email,
            phone: phone_number(i),
            company: Some(company.to_string()),
            created_at: timestamp(CONTACT_EPOCH_SECS, (i % 365) as i64),
        });
    }

    contacts
}

/// Generates tasks for the given contacts.
///
/// The contact at index `i` owns `i % 5` tasks, so a fifth of all contacts have
/// none, which exercises the empty-task-list path.
#[must_use]
pub fn generate_tasks(contacts: &[Contact], rng: &mut StdRng) -> Vec<Task> {
    let mut tasks = Vec::new();

    for (index, contact) in contacts.iter().enumerate() {
        for _ in 0..(index % 5) {
            let (title, description) = TASK_TEMPLATES[rng.random_range(0..TASK_TEMPLATES.len())];
            let days_ago = rng.random_range(0..90) as i64;
            let created_at = timestamp(TASK_EPOCH_SECS, -days_ago);
            let updated_at = timestamp(TASK_EPOCH_SECS, -days_ago + rng.random_range(0..5) as i64);

            tasks.push(Task {
                id: format!("task-{}", tasks.len() + 1),
                contact_id: contact.id.clone(),
                title: title.to_string(),
                description: description.map(str::to_string),
                completed: rng.random::<f64>() > 0.6,
                created_at,
                updated_at,
            });
        }
    }

    tasks
}

/// Formats a deterministic, index-derived US-style phone number.
fn phone_number(index: usize) -> String {
    let area = 200 + (index % 800);
    let mid = (1000 + (index % 9000)).to_string();
    let last = (1000 + ((index * 17) % 9000)).to_string();
    format!("+1-{area}-{}-{}", &mid[..3], &last[..4])
}

fn timestamp(base_secs: i64, day_offset: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(base_secs + day_offset * SECONDS_PER_DAY, 0)
        .unwrap_or(DateTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn contacts_have_unique_ids_and_emails() {
        let mut rng = StdRng::seed_from_u64(1);
        let contacts = generate_contacts(500, &mut rng);
        assert_eq!(contacts.len(), 500);

        let ids: HashSet<_> = contacts.iter().map(|c| c.id.as_str()).collect();
        let emails: HashSet<_> = contacts.iter().map(|c| c.email.as_str()).collect();
        assert_eq!(ids.len(), 500);
        assert_eq!(emails.len(), 500);
    }

    #[test]
    fn generation_is_deterministic_per_seed() {
        let mut rng_a = StdRng::seed_from_u64(99);
        let mut rng_b = StdRng::seed_from_u64(99);
        assert_eq!(
            generate_contacts(50, &mut rng_a),
            generate_contacts(50, &mut rng_b)
        );
    }

    #[test]
    fn every_fifth_contact_has_no_tasks() {
        let mut rng = StdRng::seed_from_u64(2);
        let contacts = generate_contacts(20, &mut rng);
        let tasks = generate_tasks(&contacts, &mut rng);

        // Contact at index 0 (and 5, 10, ...) owns index % 5 == 0 tasks.
        assert!(!tasks.iter().any(|t| t.contact_id == contacts[0].id));
        assert_eq!(
            tasks.iter().filter(|t| t.contact_id == contacts[3].id).count(),
            3
        );
    }

    #[test]
    fn task_timestamps_never_run_backwards() {
        let mut rng = StdRng::seed_from_u64(3);
        let contacts = generate_contacts(30, &mut rng);
        for task in generate_tasks(&contacts, &mut rng) {
            assert!(task.updated_at >= task.created_at);
        }
    }
}
