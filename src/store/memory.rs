//! In-memory mock store.
//!
//! [`MemoryStore`] owns the contact and task collections for the process
//! lifetime and emulates a remote CRUD backend over them: every operation first
//! passes the fault policy gate (simulated latency, then an independent failure
//! roll), and only then validates and touches the data. Validation failures
//! occur before any mutation, so the store is always left valid.
//!
//! The store is an explicit, injectable object rather than module-level state;
//! tests construct their own instance per run and get full isolation.

use std::time::Duration;

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::domain::error::{ContactdeskError, Result};
use crate::domain::{normalize_description, Contact, NewTask, Task, TaskPatch, MAX_TITLE_LEN};
use crate::store::backend::Store;
use crate::store::fault::FaultPolicy;
use crate::store::seed;

/// Nominal round-trip latency per operation kind.
const FETCH_CONTACTS_LATENCY: Duration = Duration::from_millis(300);
const FETCH_CONTACT_LATENCY: Duration = Duration::from_millis(150);
const FETCH_TASKS_LATENCY: Duration = Duration::from_millis(200);
const FETCH_CONTACT_TASKS_LATENCY: Duration = Duration::from_millis(100);
const MUTATE_TASK_LATENCY: Duration = Duration::from_millis(250);

/// In-memory store emulating a remote contact/task backend.
///
/// # Examples
///
/// ```
/// use contactdesk::store::{FaultPolicy, MemoryStore, Store};
///
/// let mut store = MemoryStore::with_seed(100, 7, FaultPolicy::disabled());
/// let contacts = store.get_contacts().unwrap();
/// assert_eq!(contacts.len(), 100);
/// ```
pub struct MemoryStore {
    contacts: Vec<Contact>,
    tasks: Vec<Task>,
    policy: FaultPolicy,
}

impl MemoryStore {
    /// Creates an empty store with the given fault policy.
    #[must_use]
    pub fn new(policy: FaultPolicy) -> Self {
        Self {
            contacts: Vec::new(),
            tasks: Vec::new(),
            policy,
        }
    }

    /// Creates a store seeded with `contact_count` synthetic contacts and
    /// their tasks.
    ///
    /// The same `seed` always produces the same data set.
    #[must_use]
    pub fn with_seed(contact_count: usize, seed: u64, policy: FaultPolicy) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let contacts = seed::generate_contacts(contact_count, &mut rng);
        let tasks = seed::generate_tasks(&contacts, &mut rng);

        tracing::debug!(
            contact_count = contacts.len(),
            task_count = tasks.len(),
            seed = seed,
            "memory store seeded"
        );

        Self {
            contacts,
            tasks,
            policy,
        }
    }

    /// Creates a store from explicit collections, bypassing seed generation.
    ///
    /// Intended for tests that need hand-built records (e.g. contacts without
    /// a company, or orphaned tasks).
    #[must_use]
    pub fn with_data(contacts: Vec<Contact>, tasks: Vec<Task>, policy: FaultPolicy) -> Self {
        Self {
            contacts,
            tasks,
            policy,
        }
    }

    fn validate_new_title(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactdeskError::TitleRequired);
        }
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ContactdeskError::TitleTooLong { max: MAX_TITLE_LEN });
        }
        Ok(trimmed.to_string())
    }

    fn validate_patch_title(raw: &str) -> Result<String> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ContactdeskError::TitleEmpty);
        }
        if trimmed.chars().count() > MAX_TITLE_LEN {
            return Err(ContactdeskError::TitleTooLong { max: MAX_TITLE_LEN });
        }
        Ok(trimmed.to_string())
    }
}

impl Store for MemoryStore {
    fn get_contacts(&mut self) -> Result<Vec<Contact>> {
        let _span = tracing::debug_span!("get_contacts").entered();
        self.policy.gate("fetch contacts", FETCH_CONTACTS_LATENCY)?;

        tracing::debug!(count = self.contacts.len(), "contacts retrieved");
        Ok(self.contacts.clone())
    }

    fn get_contact(&mut self, id: &str) -> Result<Contact> {
        let _span = tracing::debug_span!("get_contact", contact_id = %id).entered();
        self.policy.gate("fetch contact", FETCH_CONTACT_LATENCY)?;

        let contact = self
            .contacts
            .iter()
            .find(|contact| contact.id == id)
            .cloned()
            .ok_or(ContactdeskError::ContactNotFound)?;

        tracing::debug!(name = %contact.name, "contact retrieved");
        Ok(contact)
    }

    fn get_tasks(&mut self) -> Result<Vec<Task>> {
        let _span = tracing::debug_span!("get_tasks").entered();
        self.policy.gate("fetch tasks", FETCH_TASKS_LATENCY)?;

        tracing::debug!(count = self.tasks.len(), "tasks retrieved");
        Ok(self.tasks.clone())
    }

    fn get_contact_tasks(&mut self, contact_id: &str) -> Result<Vec<Task>> {
        let _span = tracing::debug_span!("get_contact_tasks", contact_id = %contact_id).entered();
        self.policy.gate("fetch tasks", FETCH_CONTACT_TASKS_LATENCY)?;

        let tasks: Vec<Task> = self
            .tasks
            .iter()
            .filter(|task| task.contact_id == contact_id)
            .cloned()
            .collect();

        tracing::debug!(count = tasks.len(), "contact tasks retrieved");
        Ok(tasks)
    }

    fn create_task(&mut self, input: NewTask) -> Result<Task> {
        let _span = tracing::debug_span!("create_task", contact_id = %input.contact_id).entered();
        self.policy.gate("create task", MUTATE_TASK_LATENCY)?;

        if input.contact_id.is_empty() {
            return Err(ContactdeskError::ContactIdRequired);
        }
        let title = Self::validate_new_title(&input.title)?;
        let description = input
            .description
            .as_deref()
            .and_then(normalize_description);

        let now = Utc::now();
        let task = Task {
            id: format!("task-{}", Uuid::new_v4()),
            contact_id: input.contact_id,
            title,
            description,
            completed: input.completed,
            created_at: now,
            updated_at: now,
        };

        self.tasks.push(task.clone());
        tracing::debug!(task_id = %task.id, "task created");
        Ok(task)
    }

    fn update_task(&mut self, id: &str, patch: TaskPatch) -> Result<Task> {
        let _span = tracing::debug_span!("update_task", task_id = %id).entered();
        self.policy.gate("update task", MUTATE_TASK_LATENCY)?;

        if id.is_empty() {
            return Err(ContactdeskError::InvalidTaskId);
        }

        let task = self
            .tasks
            .iter_mut()
            .find(|task| task.id == id)
            .ok_or(ContactdeskError::TaskNotFound)?;

        // Title is validated before any field is written, so a rejected patch
        // leaves the task untouched, updated_at included.
        if let Some(raw) = patch.title.as_deref() {
            task.title = Self::validate_patch_title(raw)?;
        }
        if let Some(description) = patch.description.as_deref() {
            task.description = normalize_description(description);
        }
        if let Some(completed) = patch.completed {
            task.completed = completed;
        }
        task.updated_at = Utc::now();

        tracing::debug!(completed = task.completed, "task updated");
        Ok(task.clone())
    }

    fn delete_task(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("delete_task", task_id = %id).entered();
        self.policy.gate("delete task", MUTATE_TASK_LATENCY)?;

        if id.is_empty() {
            return Err(ContactdeskError::InvalidTaskId);
        }

        let index = self
            .tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(ContactdeskError::TaskNotFound)?;

        self.tasks.remove(index);
        tracing::debug!(remaining = self.tasks.len(), "task deleted");
        Ok(())
    }
}
