//! Contact list query descriptors and pure view derivation.
//!
//! Given the full contact collection and a [`ContactQuery`], this module derives
//! the visible page in three steps: filter, stable sort, paginate. The
//! derivation is pure and recomputed from scratch on every relevant input
//! change; there is no incremental update logic.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::domain::Contact;

/// Default number of contacts per page.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Contact field to sort the list by.
///
/// The enum is closed, so a sort request can never name an unknown field and
/// no fallback ordering is needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortField {
    Name,
    Email,
    Company,
    CreatedAt,
}

/// Sort polarity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    /// Returns the opposite direction.
    ///
    /// Used when the user clicks the already-active sort field.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// Full description of a contact-list view: search, sort, and pagination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactQuery {
    /// Raw search term. Whitespace-only means "no filtering".
    pub search: String,
    pub sort_by: SortField,
    pub direction: SortDirection,
    /// 1-based page index. Out-of-range values are clamped during derivation.
    pub page: usize,
    pub page_size: usize,
}

impl Default for ContactQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_by: SortField::Name,
            direction: SortDirection::Asc,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

/// One derived page of the contact list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactPage {
    /// Contacts visible on the clamped current page, in sorted order.
    pub items: Vec<Contact>,
    /// The effective (clamped) 1-based page index.
    pub page: usize,
    /// Total page count; at least 1 even when no contact matches.
    pub total_pages: usize,
    /// Number of contacts matching the filter, across all pages.
    pub total_matches: usize,
}

/// Derives the visible page for a query: filter, stable sort, paginate.
///
/// # Examples
///
/// ```
/// use contactdesk::domain::{derive_page, ContactQuery};
///
/// let page = derive_page(&[], &ContactQuery::default());
/// assert!(page.items.is_empty());
/// assert_eq!(page.total_pages, 1);
/// ```
#[must_use]
pub fn derive_page(contacts: &[Contact], query: &ContactQuery) -> ContactPage {
    let _span = tracing::debug_span!(
        "derive_page",
        total_contacts = contacts.len(),
        search_len = query.search.len(),
        sort_by = ?query.sort_by,
        page = query.page
    )
    .entered();

    let mut matched = filter_contacts(contacts, &query.search);
    sort_contacts(&mut matched, query.sort_by, query.direction);
    let page = paginate(matched, query.page, query.page_size);

    tracing::debug!(
        total_matches = page.total_matches,
        effective_page = page.page,
        "contact page derived"
    );
    page
}

/// Filters contacts by case-insensitive substring match on name, email, or
/// company.
///
/// A whitespace-only search term disables filtering and returns every contact.
/// An absent company is treated as never-matching.
#[must_use]
pub fn filter_contacts(contacts: &[Contact], search: &str) -> Vec<Contact> {
    let needle = search.trim().to_lowercase();
    if needle.is_empty() {
        return contacts.to_vec();
    }

    contacts
        .iter()
        .filter(|contact| contact.matches(&needle))
        .cloned()
        .collect()
}

/// Stable in-place sort by the selected field.
///
/// String fields compare case-insensitively; `CreatedAt` compares by timestamp.
/// `Desc` flips the comparison polarity. Equal keys preserve their incoming
/// order (`sort_by` is stable).
pub fn sort_contacts(contacts: &mut [Contact], field: SortField, direction: SortDirection) {
    contacts.sort_by(|a, b| {
        let ordering = match field {
            SortField::Name => compare_insensitive(&a.name, &b.name),
            SortField::Email => compare_insensitive(&a.email, &b.email),
            SortField::Company => compare_insensitive(
                a.company.as_deref().unwrap_or(""),
                b.company.as_deref().unwrap_or(""),
            ),
            SortField::CreatedAt => a.created_at.cmp(&b.created_at),
        };
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_insensitive(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Slices a sorted match list into one page, clamping the requested page.
///
/// The page index is 1-based. A request past the end (e.g. after filtering
/// shrank the result set) lands on the last valid page; a request below 1 lands
/// on the first. `total_pages` is at least 1 so an empty result still renders
/// page 1 of 1.
#[must_use]
pub fn paginate(matched: Vec<Contact>, page: usize, page_size: usize) -> ContactPage {
    let page_size = page_size.max(1);
    let total_matches = matched.len();
    let total_pages = ((total_matches + page_size - 1) / page_size).max(1);
    let page = page.clamp(1, total_pages);

    let start = (page - 1) * page_size;
    let items = matched
        .into_iter()
        .skip(start)
        .take(page_size)
        .collect();

    ContactPage {
        items,
        page,
        total_pages,
        total_matches,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn contact(id: &str, name: &str, company: Option<&str>, created_offset_days: i64) -> Contact {
        Contact {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@example.com", id),
            phone: "+1-200-100-1000".to_string(),
            company: company.map(str::to_string),
            created_at: Utc.timestamp_opt(1_704_067_200 + created_offset_days * 86_400, 0)
                .single()
                .unwrap(),
        }
    }

    #[test]
    fn whitespace_search_disables_filtering() {
        let contacts = vec![contact("c1", "Ada", None, 0), contact("c2", "Bob", None, 1)];
        assert_eq!(filter_contacts(&contacts, "   ").len(), 2);
        assert_eq!(filter_contacts(&contacts, "").len(), 2);
    }

    #[test]
    fn absent_company_never_matches() {
        let contacts = vec![
            contact("c1", "Ada", Some("Tech Corp"), 0),
            contact("c2", "Bob", None, 1),
        ];
        let matched = filter_contacts(&contacts, "tech");
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].id, "c1");
    }

    #[test]
    fn sort_is_case_insensitive_and_reversible() {
        let mut contacts = vec![
            contact("c1", "bob", None, 0),
            contact("c2", "Ada", None, 1),
            contact("c3", "Cleo", None, 2),
        ];
        sort_contacts(&mut contacts, SortField::Name, SortDirection::Asc);
        let asc: Vec<_> = contacts.iter().map(|c| c.id.clone()).collect();
        sort_contacts(&mut contacts, SortField::Name, SortDirection::Desc);
        let desc: Vec<_> = contacts.iter().map(|c| c.id.clone()).collect();

        assert_eq!(asc, ["c2", "c1", "c3"]);
        assert_eq!(desc, asc.iter().rev().cloned().collect::<Vec<_>>());
    }

    #[test]
    fn paginate_clamps_out_of_range_page() {
        let contacts: Vec<_> = (0..25)
            .map(|i| contact(&format!("c{i}"), &format!("Name {i}"), None, i))
            .collect();

        let page = paginate(contacts.clone(), 99, 10);
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items.len(), 5);

        let page = paginate(contacts, 0, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);
    }

    #[test]
    fn paginate_empty_still_has_one_page() {
        let page = paginate(vec![], 5, 10);
        assert_eq!(page.page, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.total_matches, 0);
    }
}
