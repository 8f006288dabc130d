use log::{debug, info};
use uuid::Uuid;

use super::lists::{find_list, find_list_mut};
use super::users::get_user_by_username;
use crate::error::DomainError;
use crate::models::{Task, TaskFilter, TaskInput, TaskPriority, TaskProgress, TaskStatus, User};
use crate::store::Store;

/// Log target of assignment notifications.
pub const NOTIFICATION_TARGET: &str = "tasklists::notifications";

/// The enumerated fields of a [`TaskInput`] after validation.
struct ValidatedFields {
    status: TaskStatus,
    progress: TaskProgress,
    priority: TaskPriority,
}

/// Validates status, then progress, then priority. The first invalid field wins.
fn validate_fields(input: &TaskInput) -> Result<ValidatedFields, DomainError> {
    Ok(ValidatedFields {
        status: input.status.parse()?,
        progress: input.progress.parse()?,
        priority: input.priority.parse()?,
    })
}

/// The explicit assignee when one is named, otherwise the requester.
fn resolve_assignee(
    store: &Store,
    assigned_to: Option<&str>,
    requester: &User,
) -> Result<String, DomainError> {
    match assigned_to.filter(|username| !username.is_empty()) {
        Some(username) => Ok(get_user_by_username(store, username)?.username.clone()),
        None => Ok(requester.username.clone()),
    }
}

fn build_task(id: Uuid, input: TaskInput, fields: ValidatedFields, assignee: String) -> Task {
    Task {
        id,
        title: input.title,
        description: input.description,
        partner: input.partner,
        rol: input.rol,
        status: fields.status,
        progress: fields.progress,
        priority: fields.priority,
        assigned_to: Some(assignee),
    }
}

fn find_task_mut(store: &mut Store, task_id: Uuid) -> Result<&mut Task, DomainError> {
    store
        .lists
        .iter_mut()
        .flat_map(|list| list.tasks.iter_mut())
        .find(|task| task.id == task_id)
        .ok_or(DomainError::TaskNotFound)
}

pub fn get_tasks(store: &Store, list_id: Uuid) -> Result<&[Task], DomainError> {
    find_list(store, list_id).map(|list| list.tasks.as_slice())
}

/// Appends a new task to a list.
///
/// Checks run in a fixed order: field validation, then assignee lookup, then the list.
/// A notification naming the assignee is logged on success.
pub fn create_task(
    store: &mut Store,
    list_id: Uuid,
    input: TaskInput,
    requester: &User,
) -> Result<Task, DomainError> {
    let fields = validate_fields(&input)?;
    let assignee = resolve_assignee(store, input.assigned_to.as_deref(), requester)?;

    let list = find_list_mut(store, list_id)?;
    let task = build_task(Uuid::new_v4(), input, fields, assignee);
    list.tasks.push(task.clone());

    info!(
        target: NOTIFICATION_TARGET,
        "Task '{}' was assigned to user '{}'",
        task.title,
        task.assigned_to.as_deref().unwrap_or_default()
    );
    Ok(task)
}

/// Replaces a task wholesale, keeping its id and its position in its list.
pub fn update_task(
    store: &mut Store,
    task_id: Uuid,
    input: TaskInput,
    requester: &User,
) -> Result<Task, DomainError> {
    let fields = validate_fields(&input)?;
    let assignee = resolve_assignee(store, input.assigned_to.as_deref(), requester)?;

    let task = find_task_mut(store, task_id)?;
    *task = build_task(task_id, input, fields, assignee);
    info!("Updated task {}", task_id);
    Ok(task.clone())
}

/// Changes only the status of a task.
pub fn update_task_status(
    store: &mut Store,
    task_id: Uuid,
    status: &str,
) -> Result<Task, DomainError> {
    let status: TaskStatus = status.parse()?;
    let task = find_task_mut(store, task_id)?;
    task.status = status;
    info!("Task {} moved to '{}'", task_id, status);
    Ok(task.clone())
}

pub fn delete_task(store: &mut Store, task_id: Uuid) -> Result<(), DomainError> {
    for list in store.lists.iter_mut() {
        if let Some(position) = list.tasks.iter().position(|task| task.id == task_id) {
            list.tasks.remove(position);
            info!("Deleted task {} from list {}", task_id, list.id);
            return Ok(());
        }
    }
    Err(DomainError::TaskNotFound)
}

/// Tasks of a list narrowed by status and/or priority, in list order.
///
/// The list is resolved first, then the status filter is validated and applied, then
/// the priority filter. Absent or empty filters leave the sequence untouched.
pub fn filter_tasks(
    store: &Store,
    list_id: Uuid,
    filter: &TaskFilter,
) -> Result<Vec<Task>, DomainError> {
    let list = find_list(store, list_id)?;
    let mut tasks: Vec<&Task> = list.tasks.iter().collect();

    if let Some(status) = filter.status.as_deref().filter(|s| !s.is_empty()) {
        let status: TaskStatus = status.parse()?;
        tasks.retain(|task| task.status == status);
    }
    if let Some(priority) = filter.priority.as_deref().filter(|p| !p.is_empty()) {
        let priority: TaskPriority = priority.parse()?;
        tasks.retain(|task| task.priority == priority);
    }

    debug!(
        "Filter {:?} kept {} of {} task(s) in list {}",
        filter,
        tasks.len(),
        list.tasks.len(),
        list_id
    );
    Ok(tasks.into_iter().cloned().collect())
}
