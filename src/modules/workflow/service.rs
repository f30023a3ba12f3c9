use crate::utils::checks::{details, finish};
use markbook_config::{PermissionRegistry, Role, RolePermissions};
use markbook_core::{ValidationErrorType, ValidationResult};
use markbook_models::workflow::{
    MarksEntryState, ModerationState, PublicationState, RevaluationState, WorkflowState,
};
use serde_json::json;
use tracing::{instrument, warn};

/// Check that `role` may move a workflow from `current` to `new`.
///
/// The role must exist in `permissions`, `current` must have an outgoing
/// edge, the edge `current → new` must be in the workflow's table, and the
/// role must hold the capability gating that edge.
#[instrument(level = "debug", skip_all, fields(workflow = S::WORKFLOW, from = %current, to = %new))]
pub fn validate_transition<S: WorkflowState>(
    current: S,
    new: S,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult {
    let mut result = ValidationResult::new();
    if let Some((role, grants)) = resolve_role(&mut result, role, permissions) {
        check_edge(&mut result, current, new, role, grants);
    }
    finish("workflow_transition", result)
}

/// Look up the grants for `role`, recording a permission error when the role
/// is unknown or absent from the registry.
fn resolve_role<'a>(
    result: &mut ValidationResult,
    role: &str,
    permissions: &'a PermissionRegistry,
) -> Option<(Role, &'a RolePermissions)> {
    let grants = role
        .parse::<Role>()
        .ok()
        .and_then(|r| permissions.get(r).map(|grants| (r, grants)));
    if grants.is_none() {
        result.add_error_with_details(
            "userRole",
            ValidationErrorType::PermissionDenied,
            format!("Role '{}' has no permissions defined", role),
            details(json!({ "role": role })),
        );
    }
    grants
}

fn check_edge<S: WorkflowState>(
    result: &mut ValidationResult,
    current: S,
    new: S,
    role: Role,
    grants: &RolePermissions,
) {
    if !current.has_outgoing() {
        result.add_error_with_details(
            "currentState",
            ValidationErrorType::WorkflowViolation,
            format!(
                "No {} transitions are allowed from '{}'",
                S::WORKFLOW,
                current
            ),
            details(json!({ "workflow": S::WORKFLOW, "from": current.to_string() })),
        );
        return;
    }

    let Some(capability) = current.required_capability(new) else {
        let allowed: Vec<String> = current.successors().iter().map(|s| s.to_string()).collect();
        result.add_error_with_details(
            "newState",
            ValidationErrorType::WorkflowViolation,
            format!(
                "Invalid {} transition from '{}' to '{}'",
                S::WORKFLOW,
                current,
                new
            ),
            details(json!({
                "workflow": S::WORKFLOW,
                "from": current.to_string(),
                "to": new.to_string(),
                "allowed": allowed,
            })),
        );
        return;
    };

    if !grants.allows(capability) {
        warn!(%role, capability = capability.as_str(), "Transition denied");
        result.add_error_with_details(
            "userRole",
            ValidationErrorType::PermissionDenied,
            format!(
                "Role '{}' cannot move {} from '{}' to '{}'",
                role,
                S::WORKFLOW,
                current,
                new
            ),
            details(json!({ "role": role.as_str(), "capability": capability.as_str() })),
        );
    }
}

/// Resolve the role, then parse both state names and check the edge.
///
/// An unknown role is reported before anything about the states. A name that
/// is not a state of the workflow is a workflow violation on the field it
/// came from.
fn validate_named<S>(
    current: &str,
    new: &str,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult
where
    S: WorkflowState + std::str::FromStr,
{
    let mut result = ValidationResult::new();
    let Some((role, grants)) = resolve_role(&mut result, role, permissions) else {
        return finish("workflow_transition", result);
    };

    let from = parse_state::<S>(&mut result, "currentState", current);
    let to = parse_state::<S>(&mut result, "newState", new);
    if let (Some(from), Some(to)) = (from, to) {
        check_edge(&mut result, from, to, role, grants);
    }
    finish("workflow_transition", result)
}

fn parse_state<S>(result: &mut ValidationResult, field: &str, value: &str) -> Option<S>
where
    S: WorkflowState + std::str::FromStr,
{
    let parsed = value.trim().parse::<S>().ok();
    if parsed.is_none() {
        result.add_error_with_details(
            field,
            ValidationErrorType::WorkflowViolation,
            format!("'{}' is not a {} state", value, S::WORKFLOW),
            details(json!({ "workflow": S::WORKFLOW, "value": value })),
        );
    }
    parsed
}

/// Marks-entry transition: `draft → submitted → under_moderation → approved → published`.
pub fn validate_workflow_transition(
    current: &str,
    new: &str,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult {
    validate_named::<MarksEntryState>(current, new, role, permissions)
}

pub fn validate_moderation_transition(
    current: &str,
    new: &str,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult {
    validate_named::<ModerationState>(current, new, role, permissions)
}

pub fn validate_publication_transition(
    current: &str,
    new: &str,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult {
    validate_named::<PublicationState>(current, new, role, permissions)
}

pub fn validate_revaluation_transition(
    current: &str,
    new: &str,
    role: &str,
    permissions: &PermissionRegistry,
) -> ValidationResult {
    validate_named::<RevaluationState>(current, new, role, permissions)
}

#[cfg(test)]
mod tests {
    use super::*;
    use markbook_config::Capability;

    #[test]
    fn test_student_cannot_submit() {
        let permissions = PermissionRegistry::default();
        let result = validate_workflow_transition("draft", "submitted", "student", &permissions);
        assert!(!result.is_valid());
        let error = result.first_error().unwrap();
        assert_eq!(error.error_type, ValidationErrorType::PermissionDenied);
        assert_eq!(error.details["capability"], json!("canSubmitForModeration"));
    }

    #[test]
    fn test_faculty_can_submit() {
        let permissions = PermissionRegistry::default();
        let result = validate_workflow_transition("draft", "submitted", "faculty", &permissions);
        assert!(result.is_valid());
    }

    #[test]
    fn test_unknown_role() {
        let permissions = PermissionRegistry::default();
        let result = validate_workflow_transition("draft", "submitted", "janitor", &permissions);
        let error = result.first_error().unwrap();
        assert_eq!(error.field, "userRole");
        assert_eq!(error.error_type, ValidationErrorType::PermissionDenied);
    }

    #[test]
    fn test_unknown_role_reported_before_unknown_states() {
        let permissions = PermissionRegistry::default();
        let result = validate_workflow_transition("bogus", "nowhere", "janitor", &permissions);
        assert_eq!(result.errors().len(), 1);
        let error = &result.errors()[0];
        assert_eq!(error.field, "userRole");
        assert_eq!(error.error_type, ValidationErrorType::PermissionDenied);
        assert_eq!(error.details["role"], json!("janitor"));

        let result = validate_moderation_transition("waiting", "draft", "", &permissions);
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "userRole");
    }

    #[test]
    fn test_role_missing_from_registry() {
        let mut permissions = PermissionRegistry::default();
        permissions.remove(Role::Faculty);
        let result = validate_workflow_transition("draft", "submitted", "faculty", &permissions);
        assert_eq!(
            result.first_error().map(|e| e.error_type),
            Some(ValidationErrorType::PermissionDenied)
        );
    }

    #[test]
    fn test_terminal_state() {
        let result = validate_workflow_transition(
            "published",
            "draft",
            "admin",
            &PermissionRegistry::default(),
        );
        let error = result.first_error().unwrap();
        assert_eq!(error.field, "currentState");
        assert_eq!(error.error_type, ValidationErrorType::WorkflowViolation);
    }

    #[test]
    fn test_skipping_a_step() {
        let result = validate_transition(
            MarksEntryState::Draft,
            MarksEntryState::Approved,
            "admin",
            &PermissionRegistry::default(),
        );
        let error = result.first_error().unwrap();
        assert_eq!(error.field, "newState");
        assert_eq!(error.details["allowed"], json!(["submitted"]));
    }

    #[test]
    fn test_unknown_state_name() {
        let result = validate_moderation_transition(
            "waiting",
            "in_review",
            "hod",
            &PermissionRegistry::default(),
        );
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].field, "currentState");
    }

    #[test]
    fn test_publication_archive() {
        let permissions = PermissionRegistry::default();
        assert!(
            validate_publication_transition("published", "archived", "registrar", &permissions)
                .is_valid()
        );
        assert!(
            !validate_publication_transition("published", "archived", "faculty", &permissions)
                .is_valid()
        );
    }

    #[test]
    fn test_revaluation_processing() {
        let permissions = PermissionRegistry::default();
        assert!(validate_revaluation_transition("open", "closed", "hod", &permissions).is_valid());
        assert!(
            !validate_revaluation_transition("open", "closed", "student", &permissions).is_valid()
        );
    }

    #[test]
    fn test_custom_grant() {
        let mut permissions = PermissionRegistry::default();
        let mut student = *permissions.get(Role::Student).unwrap();
        student.can_submit_for_moderation = true;
        permissions.insert(Role::Student, student);
        assert!(permissions.allows(Role::Student, Capability::SubmitForModeration));
        assert!(
            validate_workflow_transition("draft", "submitted", "student", &permissions).is_valid()
        );
    }
}
