//! Checklist step definitions.

use serde::Serialize;

use crate::catalog::DemoType;

/// One checklist entry. Icons and descriptions are presentation data
/// passed through to the host UI untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChecklistStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

static BASE_STEPS: &[ChecklistStep] = &[
    ChecklistStep {
        id: "welcome",
        title: "Welcome & Demo Selection",
        description: "Choose your career path and understand the dashboard",
        icon: "👋",
    },
    ChecklistStep {
        id: "resume-manager",
        title: "Resume Manager",
        description: "Create your complete profile",
        icon: "📝",
    },
    ChecklistStep {
        id: "auto-apply",
        title: "Auto Apply Setup",
        description: "Configure job preferences and filters",
        icon: "⚡",
    },
    ChecklistStep {
        id: "tailored-apply",
        title: "Tailored Apply",
        description: "Upload JDs and customize resumes",
        icon: "🎯",
    },
    ChecklistStep {
        id: "resume-builder",
        title: "Resume Builder",
        description: "Design professional resumes",
        icon: "🏗️",
    },
    ChecklistStep {
        id: "cover-letter",
        title: "Cover Letters",
        description: "Generate personalized letters",
        icon: "✉️",
    },
    ChecklistStep {
        id: "resume-score",
        title: "Resume Score",
        description: "Check ATS compatibility",
        icon: "📊",
    },
    ChecklistStep {
        id: "analytics",
        title: "Analytics & Tracking",
        description: "Monitor your progress",
        icon: "📈",
    },
];

/// Checklist steps for one demo type: the base sequence with one
/// demo-specific step inserted after the welcome step.
pub fn checklist_steps(demo: DemoType) -> Vec<ChecklistStep> {
    let inserted = match demo {
        DemoType::CareerChange => ChecklistStep {
            id: "career-transition",
            title: "Career Transition Planning",
            description: "Identify transferable skills and target roles",
            icon: "🔄",
        },
        DemoType::FirstJob => ChecklistStep {
            id: "entry-level-prep",
            title: "Entry Level Preparation",
            description: "Build your first professional profile",
            icon: "🎓",
        },
        DemoType::BetterPosition => ChecklistStep {
            id: "senior-role-prep",
            title: "Senior Role Preparation",
            description: "Position yourself for leadership roles",
            icon: "🚀",
        },
    };

    let mut steps = BASE_STEPS.to_vec();
    steps.insert(1, inserted);
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nine_steps_per_demo_type() {
        for demo in DemoType::ALL {
            assert_eq!(checklist_steps(demo).len(), 9);
        }
    }

    #[test]
    fn demo_step_is_inserted_at_position_one() {
        let career = checklist_steps(DemoType::CareerChange);
        assert_eq!(career[0].id, "welcome");
        assert_eq!(career[1].id, "career-transition");
        assert_eq!(career[2].id, "resume-manager");

        assert_eq!(checklist_steps(DemoType::FirstJob)[1].id, "entry-level-prep");
        assert_eq!(
            checklist_steps(DemoType::BetterPosition)[1].id,
            "senior-role-prep"
        );
    }

    #[test]
    fn ids_are_unique() {
        for demo in DemoType::ALL {
            let mut ids: Vec<_> = checklist_steps(demo).iter().map(|s| s.id).collect();
            ids.sort_unstable();
            ids.dedup();
            assert_eq!(ids.len(), 9);
        }
    }
}
