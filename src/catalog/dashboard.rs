//! The fixed dashboard navigation tour.

use super::model::{Placement, StepDescriptor};

/// Dashboard tour steps, in walk order. The demo type never changes this
/// sequence — only the copy resolved for each step.
pub static DASHBOARD_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "home",
        target_selector: r#"[data-tour="nav-home"]"#,
        title: "Home Section",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "demo-selection",
        target_selector: r#"[data-tour="nav-demo-selection"]"#,
        title: "Demo Selection",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "resume-manager",
        target_selector: r#"[data-tour="nav-resume-manager"]"#,
        title: "Resume Manager",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "auto-apply",
        target_selector: r#"[data-tour="nav-auto-apply"]"#,
        title: "Auto Apply",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "tailored-apply",
        target_selector: r#"[data-tour="nav-tailored-apply"]"#,
        title: "Tailored Apply",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "resume-builder",
        target_selector: r#"[data-tour="nav-resume-builder"]"#,
        title: "Resume Builder",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "cover-letter",
        target_selector: r#"[data-tour="nav-cover-letter"]"#,
        title: "Cover Letters",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "resume-score",
        target_selector: r#"[data-tour="nav-resume-score"]"#,
        title: "Resume Score",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "analytics",
        target_selector: r#"[data-tour="nav-analytics"]"#,
        title: "Analytics",
        placement: Placement::Right,
    },
    StepDescriptor {
        id: "all-set",
        target_selector: "body",
        title: "You're all set!",
        placement: Placement::Center,
    },
];
