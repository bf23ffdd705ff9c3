//! Per-section detail tours.
//!
//! Each section tour wraps its steps in a generated intro and completion
//! step anchored to the page body.

use serde::{Deserialize, Serialize};

use super::content::ContentTable;
use super::model::{DemoType, Placement, StepDescriptor, TourStep};

/// Dashboard sections that have a detail tour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionId {
    ResumeManager,
    AutoApply,
    TailoredApply,
}

impl SectionId {
    /// Title-cased section name ("Resume Manager").
    pub fn label(&self) -> &'static str {
        match self {
            Self::ResumeManager => "Resume Manager",
            Self::AutoApply => "Auto Apply",
            Self::TailoredApply => "Tailored Apply",
        }
    }

    /// Lower-cased name used inside sentences ("resume manager").
    pub fn name(&self) -> &'static str {
        match self {
            Self::ResumeManager => "resume manager",
            Self::AutoApply => "auto apply",
            Self::TailoredApply => "tailored apply",
        }
    }

    /// Parse a URL path segment; `None` for sections without a tour.
    pub fn from_slug(slug: &str) -> Option<Self> {
        match slug {
            "resume-manager" => Some(Self::ResumeManager),
            "auto-apply" => Some(Self::AutoApply),
            "tailored-apply" => Some(Self::TailoredApply),
            _ => None,
        }
    }

    fn steps(&self) -> &'static [StepDescriptor] {
        match self {
            Self::ResumeManager => RESUME_MANAGER_STEPS,
            Self::AutoApply => AUTO_APPLY_STEPS,
            Self::TailoredApply => TAILORED_APPLY_STEPS,
        }
    }
}

static RESUME_MANAGER_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "profile-basics",
        target_selector: r#"[data-tour="resume-manager-profile-basics"]"#,
        title: "Profile Basics",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "work-experience",
        target_selector: r#"[data-tour="resume-manager-work-experience"]"#,
        title: "Work Experience",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "skills-section",
        target_selector: r#"[data-tour="resume-manager-skills-section"]"#,
        title: "Skills & Expertise",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "education",
        target_selector: r#"[data-tour="resume-manager-education"]"#,
        title: "Education & Certifications",
        placement: Placement::Bottom,
    },
];

static AUTO_APPLY_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "job-preferences",
        target_selector: r#"[data-tour="auto-apply-job-preferences"]"#,
        title: "Job Preferences",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "keywords",
        target_selector: r#"[data-tour="auto-apply-keywords"]"#,
        title: "Keywords & Filters",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "application-settings",
        target_selector: r#"[data-tour="auto-apply-application-settings"]"#,
        title: "Application Settings",
        placement: Placement::Bottom,
    },
];

static TAILORED_APPLY_STEPS: &[StepDescriptor] = &[
    StepDescriptor {
        id: "jd-upload",
        target_selector: r#"[data-tour="tailored-apply-jd-upload"]"#,
        title: "Job Description Upload",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "resume-customization",
        target_selector: r#"[data-tour="tailored-apply-resume-customization"]"#,
        title: "Resume Customization",
        placement: Placement::Bottom,
    },
    StepDescriptor {
        id: "matching-algorithm",
        target_selector: r#"[data-tour="tailored-apply-matching-algorithm"]"#,
        title: "Smart Matching",
        placement: Placement::Bottom,
    },
];

/// Build a section detail tour: intro, the section's steps, completion.
pub fn section_tour(table: &ContentTable, section: SectionId, demo: DemoType) -> Vec<TourStep> {
    let intro = TourStep {
        id: format!("{}-intro", slug_of(section)),
        target_selector: "body".to_string(),
        title: format!("{} Tour", section.label()),
        content: format!(
            "Let's explore the {} features tailored for your {} goals.",
            section.name(),
            demo.label()
        ),
        placement: Placement::Center,
    };

    let finale = TourStep {
        id: format!("{}-complete", slug_of(section)),
        target_selector: "body".to_string(),
        title: "Section Complete!".to_string(),
        content: format!(
            "You've completed the {} tour. Click on other sections to continue exploring!",
            section.name()
        ),
        placement: Placement::Center,
    };

    let mut steps = Vec::with_capacity(section.steps().len() + 2);
    steps.push(intro);
    steps.extend(
        section
            .steps()
            .iter()
            .map(|s| TourStep::resolve(s, table, demo)),
    );
    steps.push(finale);
    steps
}

fn slug_of(section: SectionId) -> &'static str {
    match section {
        SectionId::ResumeManager => "resume-manager",
        SectionId::AutoApply => "auto-apply",
        SectionId::TailoredApply => "tailored-apply",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_slug_roundtrip() {
        for slug in ["resume-manager", "auto-apply", "tailored-apply"] {
            let section = SectionId::from_slug(slug).unwrap();
            assert_eq!(slug_of(section), slug);
        }
        assert!(SectionId::from_slug("settings-billing").is_none());
    }

    #[test]
    fn section_tour_is_wrapped_in_intro_and_finale() {
        let table = ContentTable::new();
        let steps = section_tour(&table, SectionId::ResumeManager, DemoType::FirstJob);

        assert_eq!(steps.len(), 6);
        assert_eq!(steps.first().unwrap().title, "Resume Manager Tour");
        assert_eq!(steps.last().unwrap().title, "Section Complete!");
        assert!(steps.first().unwrap().content.contains("first job"));
        assert_eq!(steps[1].id, "profile-basics");
    }

    #[test]
    fn every_section_resolves_for_every_demo_type() {
        let table = ContentTable::new();
        let sections = [
            (SectionId::ResumeManager, 6),
            (SectionId::AutoApply, 5),
            (SectionId::TailoredApply, 5),
        ];
        for (section, expected_len) in sections {
            for demo in DemoType::ALL {
                let steps = section_tour(&table, section, demo);
                assert_eq!(steps.len(), expected_len);
                for step in &steps {
                    assert!(!step.content.is_empty());
                }
            }
        }
    }
}
