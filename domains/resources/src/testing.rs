//! In-memory resource store for tests

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use clubdesk_common::RepositoryError;

use crate::domain::{Resource, ResourceDraft, ResourceStatus};
use crate::repository::ResourceStore;

#[derive(Default)]
pub struct MockResourceStore {
    resources: Mutex<Vec<Resource>>,
    write_calls: AtomicUsize,
    fail_writes: AtomicBool,
}

impl MockResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_resources(resources: Vec<Resource>) -> Self {
        Self {
            resources: Mutex::new(resources),
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

    pub fn make_resource(draft: &ResourceDraft) -> Resource {
        let now = Utc::now();
        Resource {
            id: Uuid::new_v4(),
            title: draft.title.clone(),
            category: draft.category.clone(),
            status: ResourceStatus::Pending,
            is_featured: false,
            resource_url: draft.resource_url.clone(),
            created_at: now,
            updated_at: now,
        }
    }
}

#[async_trait]
impl ResourceStore for MockResourceStore {
    async fn list(&self) -> Result<Vec<Resource>, RepositoryError> {
        let mut rows = self.resources.lock().expect("lock poisoned").clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(rows)
    }

    async fn list_published(&self) -> Result<Vec<Resource>, RepositoryError> {
        let mut rows: Vec<Resource> = self
            .resources
            .lock()
            .expect("lock poisoned")
            .iter()
            .filter(|r| r.status == ResourceStatus::Published)
            .cloned()
            .collect();
        rows.sort_by(|a, b| {
            b.is_featured
                .cmp(&a.is_featured)
                .then(b.created_at.cmp(&a.created_at))
        });
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Resource>, RepositoryError> {
        Ok(self
            .resources
            .lock()
            .expect("lock poisoned")
            .iter()
            .find(|r| r.id == id)
            .cloned())
    }

    async fn insert(&self, draft: &ResourceDraft) -> Result<Resource, RepositoryError> {
        self.record_write()?;
        let resource = Self::make_resource(draft);
        self.resources
            .lock()
            .expect("lock poisoned")
            .push(resource.clone());
        Ok(resource)
    }

    async fn update(&self, id: Uuid, draft: &ResourceDraft) -> Result<Resource, RepositoryError> {
        self.record_write()?;
        let mut resources = self.resources.lock().expect("lock poisoned");
        let resource = resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;
        resource.title = draft.title.clone();
        resource.category = draft.category.clone();
        resource.resource_url = draft.resource_url.clone();
        resource.updated_at = Utc::now();
        Ok(resource.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepositoryError> {
        self.record_write()?;
        let mut resources = self.resources.lock().expect("lock poisoned");
        let before = resources.len();
        resources.retain(|r| r.id != id);
        if resources.len() == before {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn toggle_status(&self, id: Uuid) -> Result<Resource, RepositoryError> {
        self.record_write()?;
        let mut resources = self.resources.lock().expect("lock poisoned");
        let resource = resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;
        resource.status = resource.status.toggled();
        resource.updated_at = Utc::now();
        Ok(resource.clone())
    }

    async fn toggle_featured(&self, id: Uuid) -> Result<Resource, RepositoryError> {
        self.record_write()?;
        let mut resources = self.resources.lock().expect("lock poisoned");
        let resource = resources
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or(RepositoryError::NotFound)?;
        resource.is_featured = !resource.is_featured;
        resource.updated_at = Utc::now();
        Ok(resource.clone())
    }
}
