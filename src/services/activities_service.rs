use indexmap::IndexMap;
use serde::Serialize;
use tracing::info;

use crate::database::{ActivityRegistry, RegistryError};
use crate::models::Activity;

/// Body returned after a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandOutcome {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, Activity> {
    registry.snapshot()
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<CommandOutcome, RegistryError> {
    registry.signup(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant signed up");
    Ok(CommandOutcome {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<CommandOutcome, RegistryError> {
    registry.unregister(activity_name, email)?;
    info!(activity = %activity_name, email = %email, "participant unregistered");
    Ok(CommandOutcome {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_up_message_names_email_and_activity() {
        let registry = ActivityRegistry::seeded();
        let outcome = sign_up(&registry, "Chess Club", "newstudent@mergington.edu").unwrap();
        assert_eq!(
            outcome.message,
            "Signed up newstudent@mergington.edu for Chess Club"
        );
    }

    #[test]
    fn unregister_message_names_email_and_activity() {
        let registry = ActivityRegistry::seeded();
        let outcome = unregister(&registry, "Chess Club", "michael@mergington.edu").unwrap();
        assert_eq!(
            outcome.message,
            "Unregistered michael@mergington.edu from Chess Club"
        );
        assert!(!registry
            .get("Chess Club")
            .unwrap()
            .has_participant("michael@mergington.edu"));
    }

    #[test]
    fn metadata_survives_signup_and_unregister() {
        let registry = ActivityRegistry::seeded();
        let before = registry.get("Science Club").unwrap();
        sign_up(&registry, "Science Club", "integrity@mergington.edu").unwrap();
        unregister(&registry, "Science Club", "integrity@mergington.edu").unwrap();
        let after = registry.get("Science Club").unwrap();
        assert_eq!(after.description, before.description);
        assert_eq!(after.schedule, before.schedule);
        assert_eq!(after.max_participants, before.max_participants);
    }

    #[test]
    fn list_activities_reflects_signups() {
        let registry = ActivityRegistry::seeded();
        sign_up(&registry, "Art Workshop", "multireg@mergington.edu").unwrap();
        let listed = list_activities(&registry);
        assert!(listed["Art Workshop"].has_participant("multireg@mergington.edu"));
    }
}
