use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;
use thiserror::Error;

use crate::database::seed;
use crate::models::Activity;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound,

    #[error("Student already signed up for this activity")]
    AlreadyRegistered,

    #[error("Student is not registered for this activity")]
    NotRegistered,
}

/// In-memory store of activities keyed by exact name.
///
/// Every mutation holds the write lock across its checks, so two signups for
/// the same email cannot both land. Nothing is persisted.
#[derive(Debug, Default)]
pub struct ActivityRegistry {
    activities: RwLock<IndexMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(activities: IndexMap<String, Activity>) -> Self {
        Self {
            activities: RwLock::new(activities),
        }
    }

    pub fn seeded() -> Self {
        Self::new(seed::seed_activities())
    }

    // A panicking writer never leaves a half-applied change behind, so a
    // poisoned lock still guards a consistent map.
    fn read(&self) -> RwLockReadGuard<'_, IndexMap<String, Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, IndexMap<String, Activity>> {
        self.activities.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Copy of every activity in insertion order.
    pub fn snapshot(&self) -> IndexMap<String, Activity> {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.read().get(name).cloned()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Appends `email` to the activity's participants. Capacity is not checked.
    pub fn signup(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = activities.get_mut(name).ok_or(RegistryError::NotFound)?;
        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered);
        }
        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn unregister(&self, name: &str, email: &str) -> Result<(), RegistryError> {
        let mut activities = self.write();
        let activity = activities.get_mut(name).ok_or(RegistryError::NotFound)?;
        let Some(pos) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered);
        };
        activity.participants.remove(pos);
        Ok(())
    }
}
