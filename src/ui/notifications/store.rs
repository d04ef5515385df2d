// SPDX-License-Identifier: MPL-2.0
//! Ordered notification storage.
//!
//! The store keeps one queue per placement, oldest first. It enforces the
//! identity and stack size rules but has no side effects of its own: records
//! it drops are handed back to the caller, which finishes their removal.

use super::notification::{MessageId, Notification, Placement};
use crate::domain::notification::MaxStack;
use std::collections::{BTreeMap, VecDeque};

/// Result of [`NoticeStore::insert`].
#[derive(Debug, Default)]
pub struct Insertion {
    /// Previous record with the same identity, if any.
    pub replaced: Option<Notification>,
    /// Records evicted from the head of the placement, oldest first.
    pub evicted: Vec<Notification>,
}

/// Notifications grouped by placement, in display order.
#[derive(Debug, Default)]
pub struct NoticeStore {
    groups: BTreeMap<Placement, VecDeque<Notification>>,
}

impl NoticeStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a notification.
    ///
    /// A record with the same id in the same placement is replaced in its
    /// slot. A record with the same id in another placement is taken out of
    /// that placement and the new one is appended. Afterwards the target
    /// placement is trimmed from the head down to `max_stack`.
    pub fn insert(&mut self, notification: Notification, max_stack: MaxStack) -> Insertion {
        let placement = notification.placement();
        let mut insertion = Insertion::default();

        match self.position(notification.id()) {
            Some((existing, index)) if existing == placement => {
                let group = self.groups.entry(placement).or_default();
                insertion.replaced = Some(std::mem::replace(&mut group[index], notification));
            }
            Some((existing, index)) => {
                insertion.replaced = self.take(existing, index);
                self.groups
                    .entry(placement)
                    .or_default()
                    .push_back(notification);
            }
            None => {
                self.groups
                    .entry(placement)
                    .or_default()
                    .push_back(notification);
            }
        }

        let group = self.groups.entry(placement).or_default();
        while max_stack.is_exceeded_by(group.len()) {
            match group.pop_front() {
                Some(oldest) => insertion.evicted.push(oldest),
                None => break,
            }
        }

        insertion
    }

    /// Removes a notification by id.
    pub fn remove(&mut self, id: &MessageId) -> Option<Notification> {
        let (placement, index) = self.position(id)?;
        self.take(placement, index)
    }

    /// Removes every notification, in placement then display order.
    pub fn clear(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.groups)
            .into_values()
            .flatten()
            .collect()
    }

    #[must_use]
    pub fn get(&self, id: &MessageId) -> Option<&Notification> {
        self.groups
            .values()
            .flat_map(VecDeque::iter)
            .find(|notification| notification.id() == id)
    }

    #[must_use]
    pub fn contains(&self, id: &MessageId) -> bool {
        self.get(id).is_some()
    }

    /// Notifications of one placement, oldest first.
    pub fn all(&self, placement: Placement) -> impl Iterator<Item = &Notification> {
        self.groups.get(&placement).into_iter().flat_map(VecDeque::iter)
    }

    /// Every notification, in placement then display order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.groups.values().flat_map(VecDeque::iter)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.values().map(VecDeque::len).sum()
    }

    #[must_use]
    pub fn len_in(&self, placement: Placement) -> usize {
        self.groups.get(&placement).map_or(0, VecDeque::len)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn position(&self, id: &MessageId) -> Option<(Placement, usize)> {
        self.groups.iter().find_map(|(placement, group)| {
            group
                .iter()
                .position(|notification| notification.id() == id)
                .map(|index| (*placement, index))
        })
    }

    fn take(&mut self, placement: Placement, index: usize) -> Option<Notification> {
        let group = self.groups.get_mut(&placement)?;
        let removed = group.remove(index);
        if group.is_empty() {
            self.groups.remove(&placement);
        }
        removed
    }
}
