use log::info;
use uuid::Uuid;

use crate::error::DomainError;
use crate::models::{ListInput, Task, TaskList, TaskStatus};
use crate::store::Store;

pub fn get_lists(store: &Store) -> &[TaskList] {
    &store.lists
}

pub(crate) fn find_list(store: &Store, list_id: Uuid) -> Result<&TaskList, DomainError> {
    store
        .lists
        .iter()
        .find(|list| list.id == list_id)
        .ok_or(DomainError::ListNotFound)
}

pub(crate) fn find_list_mut(store: &mut Store, list_id: Uuid) -> Result<&mut TaskList, DomainError> {
    store
        .lists
        .iter_mut()
        .find(|list| list.id == list_id)
        .ok_or(DomainError::ListNotFound)
}

pub fn create_list(store: &mut Store, input: ListInput) -> TaskList {
    let list = TaskList::new(input.name);
    store.lists.push(list.clone());
    info!("Created list '{}' ({})", list.name, list.id);
    list
}

/// Renames a list in place. Its id, position and tasks are untouched.
pub fn update_list(
    store: &mut Store,
    list_id: Uuid,
    input: ListInput,
) -> Result<TaskList, DomainError> {
    let list = find_list_mut(store, list_id)?;
    list.name = input.name;
    info!("Renamed list {} to '{}'", list.id, list.name);
    Ok(list.clone())
}

/// Removes a list together with every task it owns.
pub fn delete_list(store: &mut Store, list_id: Uuid) -> Result<(), DomainError> {
    let position = store
        .lists
        .iter()
        .position(|list| list.id == list_id)
        .ok_or(DomainError::ListNotFound)?;
    let removed = store.lists.remove(position);
    info!(
        "Deleted list '{}' ({}) and its {} task(s)",
        removed.name,
        removed.id,
        removed.tasks.len()
    );
    Ok(())
}

/// Percentage of `tasks` whose status is [`TaskStatus::completion_marker`].
///
/// Rounds half to even, so 12.5 becomes 12 and 37.5 becomes 38. Empty input is 0.
pub fn completion_percentage(tasks: &[Task]) -> u32 {
    if tasks.is_empty() {
        return 0;
    }
    let completed = tasks
        .iter()
        .filter(|task| task.status == TaskStatus::completion_marker())
        .count();
    (completed as f64 / tasks.len() as f64 * 100.0).round_ties_even() as u32
}

/// Completion of a list formatted as `"NN%"`.
pub fn get_list_completion(store: &Store, list_id: Uuid) -> Result<String, DomainError> {
    let list = find_list(store, list_id)?;
    Ok(format!("{}%", completion_percentage(&list.tasks)))
}
