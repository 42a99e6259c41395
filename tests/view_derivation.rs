//! Filter, sort, and pagination properties of the contact page derivation.

use chrono::{TimeZone, Utc};
use contactdesk::domain::{
    derive_page, Contact, ContactQuery, SortDirection, SortField, DEFAULT_PAGE_SIZE,
};

fn contact(id: &str, name: &str, email: &str, company: Option<&str>, day: u32) -> Contact {
    Contact {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        phone: "+1-555-0100".to_string(),
        company: company.map(str::to_string),
        created_at: Utc.with_ymd_and_hms(2024, 3, day, 12, 0, 0).unwrap(),
    }
}

fn roster() -> Vec<Contact> {
    vec![
        contact("c1", "Alice Johnson", "alice@acme.com", Some("Acme Corp"), 3),
        contact("c2", "bob smith", "bob@globex.com", Some("Globex"), 1),
        contact("c3", "Carol Chen", "carol@initech.com", None, 5),
        contact("c4", "dave ACME", "dave@example.com", Some("Hooli"), 2),
    ]
}

fn query(search: &str, field: SortField, direction: SortDirection, page: usize) -> ContactQuery {
    ContactQuery {
        search: search.to_string(),
        sort_by: field,
        direction,
        page,
        page_size: DEFAULT_PAGE_SIZE,
    }
}

#[test]
fn empty_search_matches_everyone() {
    let page = derive_page(&roster(), &ContactQuery::default());
    assert_eq!(page.total_matches, 4);
    assert_eq!(page.total_pages, 1);
}

#[test]
fn search_is_case_insensitive_across_name_email_and_company() {
    let contacts = roster();

    // "acme" hits Alice's email/company and dave's name.
    let page = derive_page(&contacts, &query("ACME", SortField::Name, SortDirection::Asc, 1));
    let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c1", "c4"]);

    // Phone numbers are not searched.
    let page = derive_page(&contacts, &query("555", SortField::Name, SortDirection::Asc, 1));
    assert_eq!(page.total_matches, 0);
}

#[test]
fn contacts_without_a_company_never_match_on_company() {
    let contacts = vec![contact("c1", "Nora", "nora@none.com", None, 1)];
    let page = derive_page(&contacts, &query("initech", SortField::Name, SortDirection::Asc, 1));
    assert_eq!(page.total_matches, 0);
}

#[test]
fn name_sort_ignores_case() {
    let page = derive_page(&roster(), &query("", SortField::Name, SortDirection::Asc, 1));
    let names: Vec<&str> = page.items.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Alice Johnson", "bob smith", "Carol Chen", "dave ACME"]);
}

#[test]
fn descending_order_reverses_ascending() {
    let contacts = roster();
    for field in [
        SortField::Name,
        SortField::Email,
        SortField::Company,
        SortField::CreatedAt,
    ] {
        let asc = derive_page(&contacts, &query("", field, SortDirection::Asc, 1));
        let desc = derive_page(&contacts, &query("", field, SortDirection::Desc, 1));

        let mut reversed: Vec<&str> = desc.items.iter().map(|c| c.id.as_str()).collect();
        reversed.reverse();
        let forward: Vec<&str> = asc.items.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(forward, reversed, "field {field:?}");
    }
}

#[test]
fn created_at_sorts_chronologically() {
    let page = derive_page(&roster(), &query("", SortField::CreatedAt, SortDirection::Asc, 1));
    let ids: Vec<&str> = page.items.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["c2", "c4", "c1", "c3"]);
}

#[test]
fn pages_are_clamped_into_range() {
    let contacts: Vec<Contact> = (0..25)
        .map(|i| contact(&format!("c{i}"), &format!("Person {i:02}"), &format!("p{i}@x.com"), None, 1))
        .collect();

    // 25 contacts at 10 per page = 3 pages.
    let last = derive_page(&contacts, &query("", SortField::Name, SortDirection::Asc, 99));
    assert_eq!(last.page, 3);
    assert_eq!(last.items.len(), 5);

    let first = derive_page(&contacts, &query("", SortField::Name, SortDirection::Asc, 0));
    assert_eq!(first.page, 1);
    assert_eq!(first.items.len(), 10);
}

#[test]
fn pagination_slices_do_not_overlap() {
    let contacts: Vec<Contact> = (0..25)
        .map(|i| contact(&format!("c{i}"), &format!("Person {i:02}"), &format!("p{i}@x.com"), None, 1))
        .collect();

    let mut seen = Vec::new();
    for page_no in 1..=3 {
        let page = derive_page(
            &contacts,
            &query("", SortField::Name, SortDirection::Asc, page_no),
        );
        seen.extend(page.items.iter().map(|c| c.id.clone()));
    }

    assert_eq!(seen.len(), 25);
    let mut unique = seen.clone();
    unique.sort();
    unique.dedup();
    assert_eq!(unique.len(), 25);
}

#[test]
fn empty_result_still_reports_one_page() {
    let page = derive_page(&roster(), &query("zzz-no-match", SortField::Name, SortDirection::Asc, 4));
    assert_eq!(page.total_matches, 0);
    assert_eq!(page.total_pages, 1);
    assert_eq!(page.page, 1);
    assert!(page.items.is_empty());
}

#[test]
fn filtering_then_paginating_counts_matches_not_inputs() {
    let mut contacts: Vec<Contact> = (0..30)
        .map(|i| contact(&format!("m{i}"), &format!("Match {i:02}"), &format!("m{i}@x.com"), None, 1))
        .collect();
    contacts.extend(
        (0..10).map(|i| contact(&format!("o{i}"), &format!("Other {i}"), &format!("o{i}@x.com"), None, 1)),
    );

    let page = derive_page(&contacts, &query("match", SortField::Name, SortDirection::Asc, 2));
    assert_eq!(page.total_matches, 30);
    assert_eq!(page.total_pages, 3);
    assert_eq!(page.items.len(), 10);
    assert!(page.items.iter().all(|c| c.name.starts_with("Match")));
}
