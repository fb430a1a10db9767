//! In-memory member store for tests
//!
//! Counts every write attempt so tests can assert that denied actions
//! never reach the boundary.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Member, MemberDraft};
use crate::repository::MemberStore;

#[derive(Default)]
pub struct MockMemberStore {
    members: Mutex<Vec<Member>>,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockMemberStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(members: Vec<Member>) -> Self {
        Self {
            members: Mutex::new(members),
            ..Self::default()
        }
    }

    pub fn write_calls(&self) -> usize {
        self.write_calls.load(Ordering::SeqCst)
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    fn record_write(&self) -> Result<(), RepositoryError> {
        self.write_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(RepositoryError::InvalidData(
                "simulated store failure".to_string(),
            ));
        }
        Ok(())
    }

    pub fn make_member(draft: &MemberDraft, display_order: i32) -> Member {
        let now = Utc::now();
        Member {
            id: Uuid::new_v4(),
            name: draft.name.clone(),
            title: draft.title.clone(),
            photo_url: draft.photo_url.clone(),
            category: draft.category.clone(),
            display_order,
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl MemberStore for MockMemberStore {
    async fn list(&self) -> Result<Vec<Member>, RepositoryError> {
        let mut rows = self.members.lock().expect("lock poisoned").clone();
        rows.sort_by(|a, b| {
            a.category
                .cmp(&b.category)
                .then(a.display_order.cmp(&b.display_order))
        });
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Member>, RepositoryError> {
        Ok(self
            .members
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|m| m.id == id)
            .cloned())
    }

    async fn insert(&self, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        self.record_write()?;
        let mut members = self.members.lock().expect("lock poisoned");
        let next_order = members
            .iter()
            .filter(|m| m.category == draft.category)
            .map(|m| m.display_order + 1)
            .max()
            .unwrap_or(0);
        let member = Self::make_member(draft, next_order);
        members.push(member.clone());
        Ok(member)
    }

    async fn update(&self, id: Uuid, draft: &MemberDraft) -> Result<Member, RepositoryError> {
        self.record_write()?;
        let mut members = self.members.lock().expect("lock poisoned");
        let member = members
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(RepositoryError::NotFound)?;
        member.name = draft.name.clone();
        member.title = draft.title.clone();
        member.photo_url = draft.photo_url.clone();
        member.category = draft.category.clone();
        member.updated_at = Utc::now();
        Ok(member.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.record_write()?;
        let mut members = self.members.lock().expect("lock poisoned");
        let before = members.len();
        members.retain(|m| m.id != id);
        if members.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}
