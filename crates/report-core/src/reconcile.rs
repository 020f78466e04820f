//! Id-keyed merging of server responses into client-side lists.
//!
//! Responses can arrive in any order, so entities are always located by id,
//! never by position.

use std::collections::{HashMap, HashSet};
use report_types::{file::FileAttachment, message::Message, session::Session};

/// Anything addressable by a string id.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Session {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Message {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for FileAttachment {
    fn key(&self) -> &str {
        &self.id
    }
}

pub fn find_mut<'a, T: Keyed>(items: &'a mut [T], id: &str) -> Option<&'a mut T> {
    items.iter_mut().find(|item| item.key() == id)
}

/// Swap in `updated` for the entry with the same id.
/// Returns false (and changes nothing) when no entry matches.
pub fn replace_by_id<T: Keyed>(items: &mut [T], updated: T) -> bool {
    let id = updated.key().to_string();
    replace_keyed(items, &id, updated)
}

/// Like [`replace_by_id`] but matches on `id` rather than the new value's id,
/// for entities whose id changes on confirmation (uploads).
pub fn replace_keyed<T: Keyed>(items: &mut [T], id: &str, updated: T) -> bool {
    match find_mut(items, id) {
        Some(slot) => {
            *slot = updated;
            true
        }
        None => false,
    }
}

/// Overwrite a local message with the server copy, keeping the local id.
pub fn patch_message(local: &mut Message, server: Message) {
    let id = std::mem::take(&mut local.id);
    *local = Message { id, ..server };
}

/// Merge a server snapshot of a session's messages into the local list.
///
/// `aliases` maps server ids to the local ids the UI already keys on. Server
/// fields win for every message the server knows about; local messages the
/// server has not confirmed (still sending, or failed) are kept after them in
/// their original order.
pub fn merge_messages(
    local: &[Message],
    server: Vec<Message>,
    aliases: &HashMap<String, String>,
) -> Vec<Message> {
    let mut confirmed = HashSet::new();
    let mut merged = Vec::with_capacity(server.len() + local.len());

    for mut message in server {
        if let Some(local_id) = aliases.get(&message.id) {
            message.id = local_id.clone();
        }
        if confirmed.insert(message.id.clone()) {
            merged.push(message);
        }
    }

    merged.extend(
        local
            .iter()
            .filter(|m| !m.is_confirmed() && !confirmed.contains(&m.id))
            .cloned(),
    );
    merged
}
