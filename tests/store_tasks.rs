//! Task CRUD semantics: validation, trimming, merging, and deletion.

use contactdesk::domain::{ContactdeskError, NewTask, TaskPatch};
use contactdesk::store::{FaultPolicy, MemoryStore, Store};

fn quiet_store(contact_count: usize, seed: u64) -> MemoryStore {
    MemoryStore::with_seed(contact_count, seed, FaultPolicy::disabled())
}

fn new_task(contact_id: &str, title: &str) -> NewTask {
    NewTask {
        contact_id: contact_id.to_string(),
        title: title.to_string(),
        description: None,
        completed: false,
    }
}

#[test]
fn create_trims_title_and_drops_blank_description() {
    let mut store = quiet_store(5, 1);
    let task = store
        .create_task(NewTask {
            contact_id: "contact-1".to_string(),
            title: "  Test Task  ".to_string(),
            description: Some("".to_string()),
            completed: false,
        })
        .unwrap();

    assert_eq!(task.title, "Test Task");
    assert_eq!(task.description, None);
    assert!(!task.completed);
    assert_eq!(task.created_at, task.updated_at);
}

#[test]
fn create_trims_description_whitespace() {
    let mut store = quiet_store(5, 1);
    let task = store
        .create_task(NewTask {
            description: Some("  call back tomorrow  ".to_string()),
            ..new_task("contact-1", "Follow up")
        })
        .unwrap();
    assert_eq!(task.description.as_deref(), Some("call back tomorrow"));
}

#[test]
fn created_tasks_get_unique_ids() {
    let mut store = quiet_store(5, 1);
    let a = store.create_task(new_task("contact-1", "First")).unwrap();
    let b = store.create_task(new_task("contact-1", "Second")).unwrap();

    assert_ne!(a.id, b.id);
    assert!(a.id.starts_with("task-"));
}

#[test]
fn create_rejects_missing_contact_id() {
    let mut store = quiet_store(5, 1);
    let err = store.create_task(new_task("", "Valid title")).unwrap_err();
    assert_eq!(err.to_string(), "Contact ID is required");
}

#[test]
fn create_rejects_whitespace_only_titles() {
    let mut store = quiet_store(5, 1);
    let err = store.create_task(new_task("contact-1", "   ")).unwrap_err();
    assert!(matches!(err, ContactdeskError::TitleRequired));
    assert_eq!(err.to_string(), "Task title is required");
}

#[test]
fn create_rejects_titles_over_the_limit() {
    let mut store = quiet_store(5, 1);
    let err = store
        .create_task(new_task("contact-1", &"x".repeat(201)))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Task title must be 200 characters or less"
    );

    // A title exactly at the limit is fine.
    let task = store
        .create_task(new_task("contact-1", &"x".repeat(200)))
        .unwrap();
    assert_eq!(task.title.chars().count(), 200);
}

#[test]
fn create_succeeds_for_unknown_contacts() {
    // The mock backend does not enforce referential integrity on create.
    let mut store = quiet_store(5, 1);
    let task = store.create_task(new_task("contact-999", "Orphan")).unwrap();
    assert_eq!(task.contact_id, "contact-999");
}

#[test]
fn update_merges_only_provided_fields() {
    let mut store = quiet_store(5, 1);
    let created = store
        .create_task(NewTask {
            description: Some("original notes".to_string()),
            ..new_task("contact-1", "Original")
        })
        .unwrap();

    let updated = store
        .update_task(&created.id, TaskPatch::default().with_completed(true))
        .unwrap();

    assert!(updated.completed);
    assert_eq!(updated.title, "Original");
    assert_eq!(updated.description.as_deref(), Some("original notes"));
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.created_at, created.created_at);
}

#[test]
fn update_trims_title_and_clears_blank_description() {
    let mut store = quiet_store(5, 1);
    let created = store
        .create_task(NewTask {
            description: Some("notes".to_string()),
            ..new_task("contact-1", "Before")
        })
        .unwrap();

    let updated = store
        .update_task(
            &created.id,
            TaskPatch::default()
                .with_title("  After  ")
                .with_description("   "),
        )
        .unwrap();

    assert_eq!(updated.title, "After");
    assert_eq!(updated.description, None);
}

#[test]
fn update_rejects_empty_title_without_touching_the_task() {
    let mut store = quiet_store(5, 1);
    let created = store.create_task(new_task("contact-1", "Keep me")).unwrap();

    let err = store
        .update_task(&created.id, TaskPatch::default().with_title("   "))
        .unwrap_err();
    assert!(matches!(err, ContactdeskError::TitleEmpty));
    assert_eq!(err.to_string(), "Task title cannot be empty");

    let tasks = store.get_contact_tasks("contact-1").unwrap();
    let survivor = tasks.iter().find(|t| t.id == created.id).unwrap();
    assert_eq!(survivor.title, "Keep me");
    assert_eq!(survivor.updated_at, created.updated_at);
}

#[test]
fn update_rejects_over_long_titles() {
    let mut store = quiet_store(5, 1);
    let created = store.create_task(new_task("contact-1", "Short")).unwrap();
    let err = store
        .update_task(&created.id, TaskPatch::default().with_title(&"y".repeat(201)))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "Task title must be 200 characters or less"
    );
}

#[test]
fn update_distinguishes_empty_and_unknown_ids() {
    let mut store = quiet_store(5, 1);

    let err = store
        .update_task("", TaskPatch::default().with_completed(true))
        .unwrap_err();
    assert_eq!(err.to_string(), "Invalid task ID");

    let err = store
        .update_task("task-missing", TaskPatch::default().with_completed(true))
        .unwrap_err();
    assert_eq!(err.to_string(), "Task not found");
}

#[test]
fn unknown_id_wins_over_invalid_patch() {
    // Lookup happens before patch validation.
    let mut store = quiet_store(5, 1);
    let err = store
        .update_task("task-missing", TaskPatch::default().with_title("   "))
        .unwrap_err();
    assert!(matches!(err, ContactdeskError::TaskNotFound));
}

#[test]
fn empty_patch_still_refreshes_updated_at() {
    let mut store = quiet_store(5, 1);
    let created = store.create_task(new_task("contact-1", "Untouched")).unwrap();

    let patch = TaskPatch::default();
    assert!(patch.is_empty());
    let updated = store.update_task(&created.id, patch).unwrap();

    assert_eq!(updated.title, created.title);
    assert!(updated.updated_at >= created.updated_at);
}

#[test]
fn delete_removes_the_task_permanently() {
    let mut store = quiet_store(5, 1);
    let created = store.create_task(new_task("contact-1", "Doomed")).unwrap();

    store.delete_task(&created.id).unwrap();
    assert!(store
        .get_contact_tasks("contact-1")
        .unwrap()
        .iter()
        .all(|t| t.id != created.id));

    let err = store.delete_task(&created.id).unwrap_err();
    assert_eq!(err.to_string(), "Task not found");
}

#[test]
fn delete_rejects_empty_ids() {
    let mut store = quiet_store(5, 1);
    let err = store.delete_task("").unwrap_err();
    assert!(matches!(err, ContactdeskError::InvalidTaskId));
}

#[test]
fn contact_tasks_for_unknown_contact_is_empty_not_an_error() {
    let mut store = quiet_store(5, 1);
    let tasks = store.get_contact_tasks("contact-404").unwrap();
    assert!(tasks.is_empty());
}

#[test]
fn contact_tasks_only_contain_that_contacts_tasks() {
    let mut store = quiet_store(10, 2);
    store.create_task(new_task("contact-2", "Mine")).unwrap();
    store.create_task(new_task("contact-3", "Theirs")).unwrap();

    let tasks = store.get_contact_tasks("contact-2").unwrap();
    assert!(!tasks.is_empty());
    assert!(tasks.iter().all(|t| t.contact_id == "contact-2"));
}

#[test]
fn validation_runs_only_after_the_fault_gate() {
    let policy = FaultPolicy::seeded(1.0, 8).unwrap().without_latency();
    let mut store = MemoryStore::with_seed(5, 1, policy);

    // Invalid input, but the injected failure masks it.
    let err = store.create_task(new_task("", "")).unwrap_err();
    assert!(err.is_transient());
    assert_eq!(err.to_string(), "Failed to create task. Please try again.");
}
