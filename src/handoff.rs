//! One-shot handoff of a chosen problem statement from the browse page to the
//! register page through shared storage.
//!
//! Delivery is at most once: a complete record is removed as it is read, and a
//! partial record is left untouched. Storage failures are logged and treated
//! as "nothing to hand off".

use crate::catalog::Category;
use crate::selector::{SelectorController, SelectorFields};
use crate::storage::{SharedStorage, StorageError};

pub const KEY_PROBLEM_ID: &str = "selectedProblemId";
pub const KEY_PROBLEM_NAME: &str = "selectedProblemName";
pub const KEY_CATEGORY: &str = "selectedCategory";

const KEYS: [&str; 3] = [KEY_PROBLEM_ID, KEY_PROBLEM_NAME, KEY_CATEGORY];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HandoffRecord {
    pub problem_id: String,
    pub problem_name: String,
    pub category: String,
}

/// Write `record` for the next register page load.
pub fn publish(storage: &dyn SharedStorage, record: &HandoffRecord) {
    if let Err(e) = write_record(storage, record) {
        log::warn!("handoff: could not publish {}: {e}", record.problem_id);
        return;
    }
    log::debug!(
        "handoff: published {} ({})",
        record.problem_id,
        record.category
    );
}

/// Write all three keys or none: on failure the keys already written are
/// removed again, so no partial record outlives the call.
fn write_record(storage: &dyn SharedStorage, record: &HandoffRecord) -> Result<(), StorageError> {
    let values = [
        (KEY_PROBLEM_ID, &record.problem_id),
        (KEY_PROBLEM_NAME, &record.problem_name),
        (KEY_CATEGORY, &record.category),
    ];
    for (written, (key, value)) in values.iter().enumerate() {
        if let Err(e) = storage.set_item(key, value) {
            for (key, _) in &values[..written] {
                if let Err(undo) = storage.remove_item(key) {
                    log::warn!("handoff: could not roll back {key}: {undo}");
                }
            }
            return Err(e);
        }
    }
    Ok(())
}

/// Read and clear the pending record.
///
/// Only a record with all three keys present is consumed; an empty string
/// counts as present. Otherwise no key is touched and `None` is returned.
pub fn take(storage: &dyn SharedStorage) -> Option<HandoffRecord> {
    match try_take(storage) {
        Ok(record) => record,
        Err(e) => {
            log::warn!("handoff: read failed: {e}");
            None
        }
    }
}

fn try_take(storage: &dyn SharedStorage) -> Result<Option<HandoffRecord>, StorageError> {
    let problem_id = storage.get_item(KEY_PROBLEM_ID)?;
    let problem_name = storage.get_item(KEY_PROBLEM_NAME)?;
    let category = storage.get_item(KEY_CATEGORY)?;

    let (Some(problem_id), Some(problem_name), Some(category)) =
        (problem_id, problem_name, category)
    else {
        return Ok(None);
    };

    for key in KEYS {
        if let Err(e) = storage.remove_item(key) {
            // Still deliver: the record was read and the remaining keys go.
            log::warn!("handoff: could not clear {key}: {e}");
        }
    }

    Ok(Some(HandoffRecord {
        problem_id,
        problem_name,
        category,
    }))
}

/// Register page load: pre-populate the selector from a pending record.
///
/// Returns `true` when a record was consumed, whether or not its problem id
/// matched an option of the populated list.
pub fn apply_on_load(
    storage: &dyn SharedStorage,
    controller: &SelectorController<'_>,
    fields: &mut SelectorFields,
) -> bool {
    let Some(record) = take(storage) else {
        return false;
    };

    if Category::from_key(&record.category).is_none() {
        log::warn!("handoff: unknown category {:?}", record.category);
    }
    controller.on_category_changed(fields, &record.category);

    // Population above is synchronous, the list is complete at this point.
    if fields.problem_statement.select_value(&record.problem_id) {
        controller.on_problem_selected(fields, &record.problem_id);
        log::info!(
            "handoff: pre-selected {} \"{}\"",
            record.problem_id,
            record.problem_name
        );
    } else {
        let listed_under = controller
            .catalog()
            .find(&record.problem_id)
            .map(|(c, _)| c.key());
        log::warn!(
            "handoff: {} is not listed under {:?} (catalog has it under {:?}), selection left empty",
            record.problem_id,
            record.category,
            listed_under
        );
    }
    true
}
