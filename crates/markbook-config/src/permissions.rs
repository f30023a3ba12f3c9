//! Roles and the capabilities they hold over the results workflow.
//!
//! Each [`Role`] maps to a fixed set of boolean capability flags
//! ([`RolePermissions`]). Workflow validators look the acting role up in a
//! [`PermissionRegistry`] and check the one [`Capability`] the requested
//! transition needs.
//!
//! # Example
//!
//! ```
//! use markbook_config::{Capability, PermissionRegistry, Role};
//!
//! let registry = PermissionRegistry::default();
//! assert!(registry.allows(Role::Controller, Capability::PublishResults));
//! assert!(!registry.allows(Role::Student, Capability::EnterMarks));
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Academic roles known to the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Faculty,
    Hod,
    Controller,
    Registrar,
    Admin,
    Student,
}

impl Role {
    pub const ALL: [Role; 6] = [
        Role::Faculty,
        Role::Hod,
        Role::Controller,
        Role::Registrar,
        Role::Admin,
        Role::Student,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Faculty => "faculty",
            Role::Hod => "hod",
            Role::Controller => "controller",
            Role::Registrar => "registrar",
            Role::Admin => "admin",
            Role::Student => "student",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| format!("unknown role '{}'", s))
    }
}

/// A single permission flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    EnterMarks,
    SubmitForModeration,
    ModerateResults,
    PublishResults,
    ArchiveResults,
    ProcessRevaluation,
    ApplyForRevaluation,
    ViewAllResults,
    ManageGradingSchemes,
}

impl Capability {
    /// The flag name as it appears in permission records, e.g. `canPublishResults`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::EnterMarks => "canEnterMarks",
            Capability::SubmitForModeration => "canSubmitForModeration",
            Capability::ModerateResults => "canModerateResults",
            Capability::PublishResults => "canPublishResults",
            Capability::ArchiveResults => "canArchiveResults",
            Capability::ProcessRevaluation => "canProcessRevaluation",
            Capability::ApplyForRevaluation => "canApplyForRevaluation",
            Capability::ViewAllResults => "canViewAllResults",
            Capability::ManageGradingSchemes => "canManageGradingSchemes",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability flags granted to one role. Unlisted flags default to `false`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RolePermissions {
    pub can_enter_marks: bool,
    pub can_submit_for_moderation: bool,
    pub can_moderate_results: bool,
    pub can_publish_results: bool,
    pub can_archive_results: bool,
    pub can_process_revaluation: bool,
    pub can_apply_for_revaluation: bool,
    pub can_view_all_results: bool,
    pub can_manage_grading_schemes: bool,
}

impl RolePermissions {
    pub fn allows(&self, capability: Capability) -> bool {
        match capability {
            Capability::EnterMarks => self.can_enter_marks,
            Capability::SubmitForModeration => self.can_submit_for_moderation,
            Capability::ModerateResults => self.can_moderate_results,
            Capability::PublishResults => self.can_publish_results,
            Capability::ArchiveResults => self.can_archive_results,
            Capability::ProcessRevaluation => self.can_process_revaluation,
            Capability::ApplyForRevaluation => self.can_apply_for_revaluation,
            Capability::ViewAllResults => self.can_view_all_results,
            Capability::ManageGradingSchemes => self.can_manage_grading_schemes,
        }
    }

    /// Built-in grants for `role`.
    pub fn defaults_for(role: Role) -> Self {
        match role {
            Role::Faculty => Self {
                can_enter_marks: true,
                can_submit_for_moderation: true,
                ..Self::default()
            },
            Role::Hod => Self {
                can_enter_marks: true,
                can_submit_for_moderation: true,
                can_moderate_results: true,
                can_process_revaluation: true,
                can_view_all_results: true,
                ..Self::default()
            },
            Role::Controller => Self {
                can_moderate_results: true,
                can_publish_results: true,
                can_archive_results: true,
                can_process_revaluation: true,
                can_view_all_results: true,
                can_manage_grading_schemes: true,
                ..Self::default()
            },
            Role::Registrar => Self {
                can_publish_results: true,
                can_archive_results: true,
                can_view_all_results: true,
                ..Self::default()
            },
            Role::Admin => Self {
                can_enter_marks: true,
                can_submit_for_moderation: true,
                can_moderate_results: true,
                can_publish_results: true,
                can_archive_results: true,
                can_process_revaluation: true,
                can_apply_for_revaluation: false,
                can_view_all_results: true,
                can_manage_grading_schemes: true,
            },
            Role::Student => Self {
                can_apply_for_revaluation: true,
                ..Self::default()
            },
        }
    }
}

/// Role → permissions lookup. A registry may leave roles out entirely.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionRegistry(BTreeMap<Role, RolePermissions>);

impl Default for PermissionRegistry {
    fn default() -> Self {
        Self(
            Role::ALL
                .into_iter()
                .map(|role| (role, RolePermissions::defaults_for(role)))
                .collect(),
        )
    }
}

impl PermissionRegistry {
    /// A registry with no roles.
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    pub fn get(&self, role: Role) -> Option<&RolePermissions> {
        self.0.get(&role)
    }

    /// Replace the grants for `role`, returning the previous ones.
    pub fn insert(&mut self, role: Role, permissions: RolePermissions) -> Option<RolePermissions> {
        self.0.insert(role, permissions)
    }

    pub fn remove(&mut self, role: Role) -> Option<RolePermissions> {
        self.0.remove(&role)
    }

    /// Whether `role` is registered and holds `capability`.
    pub fn allows(&self, role: Role, capability: Capability) -> bool {
        self.get(role).is_some_and(|p| p.allows(capability))
    }

    pub fn roles(&self) -> impl Iterator<Item = Role> + '_ {
        self.0.keys().copied()
    }
}
