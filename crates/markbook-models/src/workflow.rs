//! Results workflows as typed state machines.
//!
//! Four independent workflows move results towards publication:
//!
//! ```text
//! marks entry:  draft → submitted → under_moderation → approved → published
//! moderation:   pending → in_review → approved | rejected
//! publication:  draft → scheduled → published → archived
//! revaluation:  open → closed → under_review → completed
//! ```
//!
//! Every edge is gated by exactly one [`Capability`]. The transition table of
//! each workflow is the single source of truth; validators only ask
//! [`WorkflowState::required_capability`].

use markbook_config::Capability;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A state in one of the results workflows.
pub trait WorkflowState: Copy + PartialEq + fmt::Display + 'static {
    /// Name of the workflow, used in messages.
    const WORKFLOW: &'static str;

    /// Every permitted `(from, to, capability)` edge.
    fn transitions() -> &'static [(Self, Self, Capability)];

    /// Capability needed to move from `self` to `to`, or `None` if no such edge exists.
    fn required_capability(self, to: Self) -> Option<Capability> {
        Self::transitions()
            .iter()
            .find(|(from, target, _)| *from == self && *target == to)
            .map(|(_, _, capability)| *capability)
    }

    /// Whether any edge leaves `self`.
    fn has_outgoing(self) -> bool {
        Self::transitions().iter().any(|(from, _, _)| *from == self)
    }

    /// States reachable from `self` in one step.
    fn successors(self) -> Vec<Self> {
        Self::transitions()
            .iter()
            .filter(|(from, _, _)| *from == self)
            .map(|(_, to, _)| *to)
            .collect()
    }
}

/// Defines a workflow state enum with its wire names.
macro_rules! workflow_states {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $wire),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|state| state.as_str() == s)
                    .ok_or_else(|| format!("unknown {} state '{}'", stringify!($name), s))
            }
        }
    };
}

workflow_states!(
    /// Lifecycle of a marks sheet from entry to publication.
    MarksEntryState {
        Draft => "draft",
        Submitted => "submitted",
        UnderModeration => "under_moderation",
        Approved => "approved",
        Published => "published",
    }
);

workflow_states!(
    /// Review of submitted marks by a moderator.
    ModerationState {
        Pending => "pending",
        InReview => "in_review",
        Approved => "approved",
        Rejected => "rejected",
    }
);

workflow_states!(
    /// Release of approved results to students.
    PublicationState {
        Draft => "draft",
        Scheduled => "scheduled",
        Published => "published",
        Archived => "archived",
    }
);

workflow_states!(
    /// Revaluation window and request processing.
    RevaluationState {
        Open => "open",
        Closed => "closed",
        UnderReview => "under_review",
        Completed => "completed",
    }
);

impl WorkflowState for MarksEntryState {
    const WORKFLOW: &'static str = "marks entry";

    fn transitions() -> &'static [(Self, Self, Capability)] {
        use MarksEntryState::*;
        &[
            (Draft, Submitted, Capability::SubmitForModeration),
            (Submitted, UnderModeration, Capability::ModerateResults),
            (UnderModeration, Approved, Capability::ModerateResults),
            (Approved, Published, Capability::PublishResults),
        ]
    }
}

impl WorkflowState for ModerationState {
    const WORKFLOW: &'static str = "moderation";

    fn transitions() -> &'static [(Self, Self, Capability)] {
        use ModerationState::*;
        &[
            (Pending, InReview, Capability::ModerateResults),
            (InReview, Approved, Capability::ModerateResults),
            (InReview, Rejected, Capability::ModerateResults),
        ]
    }
}

impl WorkflowState for PublicationState {
    const WORKFLOW: &'static str = "publication";

    fn transitions() -> &'static [(Self, Self, Capability)] {
        use PublicationState::*;
        &[
            (Draft, Scheduled, Capability::PublishResults),
            (Scheduled, Published, Capability::PublishResults),
            (Published, Archived, Capability::ArchiveResults),
        ]
    }
}

impl WorkflowState for RevaluationState {
    const WORKFLOW: &'static str = "revaluation";

    fn transitions() -> &'static [(Self, Self, Capability)] {
        use RevaluationState::*;
        &[
            (Open, Closed, Capability::ProcessRevaluation),
            (Closed, UnderReview, Capability::ProcessRevaluation),
            (UnderReview, Completed, Capability::ProcessRevaluation),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_entry_chain() {
        use MarksEntryState::*;
        assert_eq!(
            Draft.required_capability(Submitted),
            Some(Capability::SubmitForModeration)
        );
        assert_eq!(
            Approved.required_capability(Published),
            Some(Capability::PublishResults)
        );
        assert_eq!(Draft.required_capability(Published), None);
        assert!(!Published.has_outgoing());
        assert_eq!(Submitted.successors(), vec![UnderModeration]);
    }

    #[test]
    fn test_moderation_branches() {
        use ModerationState::*;
        assert_eq!(InReview.successors(), vec![Approved, Rejected]);
        assert!(!Approved.has_outgoing());
        assert!(!Rejected.has_outgoing());
    }

    #[test]
    fn test_publication_archive_needs_archive_capability() {
        use PublicationState::*;
        assert_eq!(
            Published.required_capability(Archived),
            Some(Capability::ArchiveResults)
        );
        assert!(!Archived.has_outgoing());
    }

    #[test]
    fn test_revaluation_terminal_state() {
        assert!(!RevaluationState::Completed.has_outgoing());
        assert!(RevaluationState::Open.has_outgoing());
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            "under_moderation".parse::<MarksEntryState>(),
            Ok(MarksEntryState::UnderModeration)
        );
        assert_eq!(
            serde_json::to_string(&ModerationState::InReview).unwrap(),
            r#""in_review""#
        );
        assert!("UnderReview".parse::<RevaluationState>().is_err());
        for state in PublicationState::ALL {
            assert_eq!(
                state.as_str().parse::<PublicationState>().as_ref(),
                Ok(state)
            );
        }
    }
}
