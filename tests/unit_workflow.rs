use markbook::ValidationErrorType;
use markbook::markbook_config::{PermissionRegistry, Role};
use markbook::markbook_models::{MarksEntryState, PublicationState, WorkflowState};
use markbook::modules::{validate_transition, validate_workflow_transition};

#[test]
fn test_student_denied_faculty_allowed() {
    let permissions = PermissionRegistry::default();

    let denied = validate_workflow_transition("draft", "submitted", "student", &permissions);
    assert!(!denied.is_valid());
    assert_eq!(
        denied.first_error().map(|e| e.error_type),
        Some(ValidationErrorType::PermissionDenied)
    );

    let allowed = validate_workflow_transition("draft", "submitted", "faculty", &permissions);
    assert!(allowed.is_valid());
}

#[test]
fn test_every_table_edge_has_a_permitted_role() {
    let permissions = PermissionRegistry::default();
    for &(from, to, capability) in MarksEntryState::transitions() {
        let role = Role::ALL
            .into_iter()
            .find(|&r| permissions.allows(r, capability))
            .unwrap();
        assert!(validate_transition(from, to, role.as_str(), &permissions).is_valid());
    }
    for &(from, to, capability) in PublicationState::transitions() {
        let role = Role::ALL
            .into_iter()
            .find(|&r| permissions.allows(r, capability))
            .unwrap();
        assert!(validate_transition(from, to, role.as_str(), &permissions).is_valid());
    }
}

#[test]
fn test_backwards_move_is_a_workflow_violation() {
    let result = validate_workflow_transition(
        "approved",
        "draft",
        "admin",
        &PermissionRegistry::default(),
    );
    assert_eq!(
        result.first_error().map(|e| e.error_type),
        Some(ValidationErrorType::WorkflowViolation)
    );
}

#[test]
fn test_empty_registry_denies_everyone() {
    let permissions = PermissionRegistry::empty();
    for role in Role::ALL {
        let result =
            validate_workflow_transition("draft", "submitted", role.as_str(), &permissions);
        assert_eq!(result.errors()[0].field, "userRole");
    }
}
