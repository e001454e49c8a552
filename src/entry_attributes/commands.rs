// ── Tauri command bindings ────────────────────────────────────────────────────
//
// Thin wrappers that take `State<EntryAttributesServiceState>`, lock the
// mutex, and delegate to the service methods.  Every command returns
// `Result<T, String>`.

use super::keys;
use super::references;
use super::service::EntryAttributesServiceState;
use super::types::*;

// ─── Registry ─────────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_create_set(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: Option<String>,
) -> Result<String, String> {
    let mut svc = state.lock().await;
    svc.create_set(entry_id)
}

#[tauri::command]
pub async fn entry_attr_clone_set(
    state: tauri::State<'_, EntryAttributesServiceState>,
    source_id: String,
    new_id: Option<String>,
) -> Result<String, String> {
    let mut svc = state.lock().await;
    svc.clone_set(&source_id, new_id)
}

#[tauri::command]
pub async fn entry_attr_drop_set(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<(), String> {
    let mut svc = state.lock().await;
    svc.drop_set(&entry_id)
}

#[tauri::command]
pub async fn entry_attr_list_sets(
    state: tauri::State<'_, EntryAttributesServiceState>,
) -> Result<Vec<String>, String> {
    let svc = state.lock().await;
    Ok(svc.list_entry_ids())
}

// ─── Queries ──────────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_keys(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<Vec<String>, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.keys().to_vec())
}

#[tauri::command]
pub async fn entry_attr_custom_keys(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<Vec<String>, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.custom_keys())
}

#[tauri::command]
pub async fn entry_attr_contains(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<bool, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.contains(&key))
}

#[tauri::command]
pub async fn entry_attr_value(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<String, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.value(&key).to_string())
}

#[tauri::command]
pub async fn entry_attr_values(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    keys: Vec<String>,
) -> Result<Vec<String>, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.values(&keys))
}

#[tauri::command]
pub async fn entry_attr_is_protected(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<bool, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.is_protected(&key))
}

#[tauri::command]
pub async fn entry_attr_size(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<usize, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.attributes_size())
}

#[tauri::command]
pub async fn entry_attr_list(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<Vec<AttributeSummary>, String> {
    let svc = state.lock().await;
    svc.summaries(&entry_id)
}

// ─── Mutations ────────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_set(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    req: SetAttributeRequest,
) -> Result<Option<AttributeChange>, String> {
    let mut svc = state.lock().await;
    svc.set_attribute(&entry_id, &req.key, &req.value, req.protect)
}

#[tauri::command]
pub async fn entry_attr_remove(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<Option<AttributeChange>, String> {
    let mut svc = state.lock().await;
    svc.remove_attribute(&entry_id, &key)
}

#[tauri::command]
pub async fn entry_attr_rename(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    req: RenameAttributeRequest,
) -> Result<Option<AttributeChange>, String> {
    let mut svc = state.lock().await;
    svc.rename_attribute(&entry_id, &req.old_key, &req.new_key)
}

#[tauri::command]
pub async fn entry_attr_clear(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<AttributeChange, String> {
    let mut svc = state.lock().await;
    svc.clear_attributes(&entry_id)
}

#[tauri::command]
pub async fn entry_attr_copy_data(
    state: tauri::State<'_, EntryAttributesServiceState>,
    target_id: String,
    source_id: String,
) -> Result<AttributeChange, String> {
    let mut svc = state.lock().await;
    svc.copy_data(&target_id, &source_id)
}

#[tauri::command]
pub async fn entry_attr_copy_custom_keys(
    state: tauri::State<'_, EntryAttributesServiceState>,
    target_id: String,
    source_id: String,
) -> Result<Option<AttributeChange>, String> {
    let mut svc = state.lock().await;
    svc.copy_custom_keys(&target_id, &source_id)
}

#[tauri::command]
pub async fn entry_attr_custom_keys_differ(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    other_id: String,
) -> Result<bool, String> {
    let svc = state.lock().await;
    svc.custom_keys_differ(&entry_id, &other_id)
}

// ─── Snapshots (persistence boundary) ─────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_snapshot(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<AttributesSnapshot, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.to_snapshot())
}

#[tauri::command]
pub async fn entry_attr_restore(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    snapshot: AttributesSnapshot,
) -> Result<AttributeChange, String> {
    let mut svc = state.lock().await;
    svc.restore_snapshot(&entry_id, &snapshot)
}

// ─── References ───────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_is_reference(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<bool, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.is_reference(&key))
}

#[tauri::command]
pub async fn entry_attr_reference_uuid(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
    key: String,
) -> Result<Option<String>, String> {
    let svc = state.lock().await;
    Ok(svc
        .attributes(&entry_id)?
        .reference_uuid(&key)
        .map(|u| u.to_string()))
}

#[tauri::command]
pub fn entry_attr_match_reference(text: String) -> Result<Option<Reference>, String> {
    Ok(references::match_reference(&text))
}

#[tauri::command]
pub fn entry_attr_contains_reference(text: String) -> Result<bool, String> {
    Ok(references::contains_reference(&text))
}

// ─── Passkey ──────────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_has_passkey(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<bool, String> {
    let svc = state.lock().await;
    Ok(svc.attributes(&entry_id)?.has_passkey())
}

#[tauri::command]
pub async fn entry_attr_remove_passkey(
    state: tauri::State<'_, EntryAttributesServiceState>,
    entry_id: String,
) -> Result<Vec<AttributeChange>, String> {
    let mut svc = state.lock().await;
    svc.remove_passkey(&entry_id)
}

#[tauri::command]
pub fn entry_attr_is_passkey_attribute(key: String) -> Result<bool, String> {
    Ok(keys::is_passkey_attribute(&key))
}

#[tauri::command]
pub fn entry_attr_is_default_attribute(key: String) -> Result<bool, String> {
    Ok(keys::is_default_attribute(&key))
}

// ─── Change Log ───────────────────────────────────────────────────────────────

#[tauri::command]
pub async fn entry_attr_change_log(
    state: tauri::State<'_, EntryAttributesServiceState>,
    limit: Option<usize>,
) -> Result<Vec<ChangeLogEntry>, String> {
    let svc = state.lock().await;
    Ok(svc.get_change_log(limit))
}

#[tauri::command]
pub async fn entry_attr_clear_change_log(
    state: tauri::State<'_, EntryAttributesServiceState>,
) -> Result<(), String> {
    let mut svc = state.lock().await;
    svc.clear_change_log();
    Ok(())
}
