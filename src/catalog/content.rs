//! Per-demo-type copy, keyed by `(step id, demo type)`.
//!
//! The table is built once at startup. Steps whose copy embeds the demo
//! label are interpolated at build time, so lookups are plain reads.

use std::collections::HashMap;

use super::model::DemoType;

struct ContentEntry {
    step_id: &'static str,
    career_change: &'static str,
    first_job: &'static str,
    better_position: &'static str,
}

impl ContentEntry {
    fn for_demo(&self, demo: DemoType) -> &'static str {
        match demo {
            DemoType::CareerChange => self.career_change,
            DemoType::FirstJob => self.first_job,
            DemoType::BetterPosition => self.better_position,
        }
    }
}

// Dashboard navigation steps.
static DASHBOARD_CONTENT: &[ContentEntry] = &[
    ContentEntry {
        step_id: "resume-manager",
        career_change: "Create a complete profile highlighting transferable skills and career transition goals.",
        first_job: "Build your first professional profile with education, internships, and relevant projects.",
        better_position: "Optimize your existing profile for senior roles and leadership positions.",
    },
    ContentEntry {
        step_id: "auto-apply",
        career_change: "Set job search preferences for your new field with industry-specific keywords and locations.",
        first_job: "Configure entry-level job preferences with location and company size filters.",
        better_position: "Target senior roles with advanced filters for experience level and company culture.",
    },
    ContentEntry {
        step_id: "tailored-apply",
        career_change: "Upload 100 job descriptions from your target industry for maximum relevance.",
        first_job: "Customize resumes for entry-level positions with relevant coursework and projects.",
        better_position: "Tailor resumes for senior roles emphasizing leadership and strategic impact.",
    },
    ContentEntry {
        step_id: "resume-builder",
        career_change: "Use career transition templates highlighting transferable skills and achievements.",
        first_job: "Choose from entry-level templates with education and project sections.",
        better_position: "Access executive templates with leadership and strategic focus areas.",
    },
    ContentEntry {
        step_id: "cover-letter",
        career_change: "Generate letters explaining your career transition and transferable skills.",
        first_job: "Create letters highlighting your enthusiasm and potential for growth.",
        better_position: "Write letters emphasizing leadership experience and strategic vision.",
    },
    ContentEntry {
        step_id: "resume-score",
        career_change: "Check ATS compatibility for your new industry and role requirements.",
        first_job: "Verify ATS optimization for entry-level positions and recent graduate roles.",
        better_position: "Ensure ATS compatibility for senior and executive-level positions.",
    },
    ContentEntry {
        step_id: "analytics",
        career_change: "Track applications in your new field, industry response rates, and transition progress.",
        first_job: "Monitor first-job applications, interview invitations, and entry-level market trends.",
        better_position: "Analyze senior role applications, executive search firm responses, and career advancement metrics.",
    },
];

// Section detail steps.
static SECTION_CONTENT: &[ContentEntry] = &[
    ContentEntry {
        step_id: "profile-basics",
        career_change: "Focus on transferable skills and career transition goals in your professional summary.",
        first_job: "Emphasize your education, relevant coursework, and enthusiasm for the role.",
        better_position: "Highlight leadership experience and strategic achievements in your summary.",
    },
    ContentEntry {
        step_id: "work-experience",
        career_change: "Frame past roles to demonstrate transferable skills for your target industry.",
        first_job: "Include internships, part-time jobs, volunteer work, and academic projects.",
        better_position: "Emphasize leadership roles, strategic impact, and measurable achievements.",
    },
    ContentEntry {
        step_id: "skills-section",
        career_change: "Emphasize skills that transfer to your target industry and role.",
        first_job: "Include academic skills, tools, and technologies you've learned.",
        better_position: "Showcase advanced skills, industry expertise, and leadership capabilities.",
    },
    ContentEntry {
        step_id: "education",
        career_change: "Highlight relevant coursework and certifications for your new field.",
        first_job: "Showcase academic achievements, relevant projects, and extracurricular activities.",
        better_position: "Emphasize advanced degrees, industry certifications, and continuing education.",
    },
    ContentEntry {
        step_id: "job-preferences",
        career_change: "Set preferences for your new field with industry-specific keywords and locations.",
        first_job: "Configure entry-level preferences with location and company size filters.",
        better_position: "Target senior roles with advanced experience level and company culture filters.",
    },
    ContentEntry {
        step_id: "keywords",
        career_change: "Use industry-specific keywords from your target field and role.",
        first_job: "Include entry-level terms and recent graduate keywords.",
        better_position: "Focus on senior-level and leadership keywords.",
    },
    ContentEntry {
        step_id: "application-settings",
        career_change: "Set application frequency for career transition opportunities.",
        first_job: "Optimize for entry-level job market timing and application windows.",
        better_position: "Configure for senior role application strategies and timing.",
    },
    ContentEntry {
        step_id: "jd-upload",
        career_change: "Upload 100 job descriptions from your target industry for maximum relevance.",
        first_job: "Focus on entry-level positions with relevant requirements and responsibilities.",
        better_position: "Target senior roles with leadership and strategic requirements.",
    },
    ContentEntry {
        step_id: "resume-customization",
        career_change: "Customize to highlight transferable skills for each specific role.",
        first_job: "Adapt to show relevant coursework and projects for each position.",
        better_position: "Emphasize leadership experience and strategic impact for each role.",
    },
    ContentEntry {
        step_id: "matching-algorithm",
        career_change: "Algorithm identifies transferable skills and industry matches.",
        first_job: "Matches education and project experience to job requirements.",
        better_position: "Identifies leadership and strategic alignment opportunities.",
    },
];

fn home_content(demo: DemoType) -> String {
    format!(
        "Welcome! This is your main dashboard. You've selected {} mode. \
         Let's explore the features available for your career goals.",
        demo.label()
    )
}

fn demo_selection_content(demo: DemoType) -> String {
    format!(
        "Here you can change your demo type anytime. Currently active: {}.",
        demo.label()
    )
}

fn all_set_content(demo: DemoType) -> String {
    format!(
        "That's the {} flow. You can replay this tour anytime via the Help button.",
        demo.label()
    )
}

/// Copy lookup table for every tour step, covering all demo types.
pub struct ContentTable {
    entries: HashMap<(&'static str, DemoType), String>,
}

impl ContentTable {
    pub fn new() -> Self {
        let mut entries = HashMap::new();
        for demo in DemoType::ALL {
            entries.insert(("home", demo), home_content(demo));
            entries.insert(("demo-selection", demo), demo_selection_content(demo));
            entries.insert(("all-set", demo), all_set_content(demo));
            for entry in DASHBOARD_CONTENT.iter().chain(SECTION_CONTENT) {
                entries.insert((entry.step_id, demo), entry.for_demo(demo).to_string());
            }
        }
        Self { entries }
    }

    /// Copy for one step under one demo type.
    pub fn content(&self, step_id: &'static str, demo: DemoType) -> Option<&str> {
        self.entries.get(&(step_id, demo)).map(String::as_str)
    }
}

impl Default for ContentTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interpolated_steps_embed_demo_label() {
        let table = ContentTable::new();
        for demo in DemoType::ALL {
            for step_id in ["home", "demo-selection", "all-set"] {
                let content = table.content(step_id, demo).unwrap();
                assert!(
                    content.contains(demo.label()),
                    "{step_id} copy should mention '{}'",
                    demo.label()
                );
            }
        }
    }

    #[test]
    fn every_entry_covers_all_demo_types() {
        let table = ContentTable::new();
        for entry in DASHBOARD_CONTENT.iter().chain(SECTION_CONTENT) {
            for demo in DemoType::ALL {
                assert!(table.content(entry.step_id, demo).is_some());
            }
        }
    }

    #[test]
    fn unknown_step_has_no_content() {
        let table = ContentTable::new();
        assert!(table.content("settings-billing", DemoType::FirstJob).is_none());
    }
}
