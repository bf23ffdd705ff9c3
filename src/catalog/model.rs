//! Catalog types — demo types, placements, step descriptors.

use serde::{Deserialize, Serialize};

use super::content::ContentTable;
use super::sections::SectionId;
use super::{dashboard, sections};

/// The simulated user persona. Selecting one changes tour copy only —
/// never the dashboard step count or order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DemoType {
    CareerChange,
    FirstJob,
    BetterPosition,
}

impl DemoType {
    pub const ALL: [DemoType; 3] = [
        DemoType::CareerChange,
        DemoType::FirstJob,
        DemoType::BetterPosition,
    ];

    /// Human-readable label, used where copy embeds the demo name.
    pub fn label(&self) -> &'static str {
        match self {
            Self::CareerChange => "career change",
            Self::FirstJob => "first job",
            Self::BetterPosition => "better position",
        }
    }

    /// Stable identifier, matching the serde form.
    pub fn slug(&self) -> &'static str {
        match self {
            Self::CareerChange => "career-change",
            Self::FirstJob => "first-job",
            Self::BetterPosition => "better-position",
        }
    }
}

impl Default for DemoType {
    fn default() -> Self {
        Self::CareerChange
    }
}

impl std::fmt::Display for DemoType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.slug())
    }
}

impl std::str::FromStr for DemoType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "career-change" => Ok(Self::CareerChange),
            "first-job" => Ok(Self::FirstJob),
            "better-position" => Ok(Self::BetterPosition),
            other => Err(format!("unknown demo type: {other}")),
        }
    }
}

/// Where the rendering collaborator anchors a step's tooltip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Placement {
    Top,
    Bottom,
    Left,
    Right,
    Center,
}

/// One stop in a tour, bound to a UI target by selector.
///
/// Descriptors carry no copy — content is resolved against the
/// [`ContentTable`] per demo type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepDescriptor {
    pub id: &'static str,
    pub target_selector: &'static str,
    pub title: &'static str,
    pub placement: Placement,
}

/// A descriptor resolved for one demo type — what the rendering
/// collaborator actually consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TourStep {
    pub id: String,
    pub target_selector: String,
    pub title: String,
    pub content: String,
    pub placement: Placement,
}

impl TourStep {
    pub(super) fn resolve(descriptor: &StepDescriptor, table: &ContentTable, demo: DemoType) -> Self {
        let content = match table.content(descriptor.id, demo) {
            Some(text) => text.to_string(),
            None => {
                tracing::warn!(step_id = descriptor.id, demo_type = %demo, "No content for step");
                String::new()
            }
        };
        Self {
            id: descriptor.id.to_string(),
            target_selector: descriptor.target_selector.to_string(),
            title: descriptor.title.to_string(),
            content,
            placement: descriptor.placement,
        }
    }
}

/// The ordered dashboard step sequence plus the copy table.
///
/// Built once at startup and shared read-only after that.
pub struct StepCatalog {
    steps: &'static [StepDescriptor],
    content: ContentTable,
}

impl StepCatalog {
    /// The dashboard navigation tour.
    pub fn dashboard() -> Self {
        Self {
            steps: dashboard::DASHBOARD_STEPS,
            content: ContentTable::new(),
        }
    }

    /// Number of steps. An index equal to this value means "exhausted".
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn descriptors(&self) -> &[StepDescriptor] {
        self.steps
    }

    /// Position of a step id in the catalog order.
    pub fn position_of(&self, step_id: &str) -> Option<usize> {
        self.steps.iter().position(|s| s.id == step_id)
    }

    /// Resolve the full tour for one demo type.
    pub fn resolve(&self, demo: DemoType) -> Vec<TourStep> {
        self.steps
            .iter()
            .map(|s| TourStep::resolve(s, &self.content, demo))
            .collect()
    }

    /// Resolve a section detail tour for one demo type.
    pub fn section_tour(&self, section: SectionId, demo: DemoType) -> Vec<TourStep> {
        sections::section_tour(&self.content, section, demo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_type_serde_is_kebab_case() {
        for demo in DemoType::ALL {
            let json = serde_json::to_string(&demo).unwrap();
            assert_eq!(json, format!("\"{}\"", demo.slug()));
            let parsed: DemoType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, demo);
        }
    }

    #[test]
    fn demo_type_from_str() {
        assert_eq!(
            "career-change".parse::<DemoType>().unwrap(),
            DemoType::CareerChange
        );
        assert_eq!("first-job".parse::<DemoType>().unwrap(), DemoType::FirstJob);
        assert_eq!(
            "better-position".parse::<DemoType>().unwrap(),
            DemoType::BetterPosition
        );
        assert!("mid-career".parse::<DemoType>().is_err());
    }

    #[test]
    fn catalog_resolves_every_step() {
        let catalog = StepCatalog::dashboard();
        for demo in DemoType::ALL {
            let steps = catalog.resolve(demo);
            assert_eq!(steps.len(), catalog.len());
            for step in &steps {
                assert!(!step.content.is_empty(), "step {} has no copy for {demo}", step.id);
            }
        }
    }

    #[test]
    fn demo_type_changes_content_only() {
        let catalog = StepCatalog::dashboard();
        let career = catalog.resolve(DemoType::CareerChange);
        let first = catalog.resolve(DemoType::FirstJob);

        assert_eq!(career.len(), first.len());
        for (a, b) in career.iter().zip(&first) {
            assert_eq!(a.id, b.id);
            assert_eq!(a.target_selector, b.target_selector);
            assert_eq!(a.placement, b.placement);
        }
        // At least the per-demo copy diverges somewhere.
        assert!(career.iter().zip(&first).any(|(a, b)| a.content != b.content));
    }

    #[test]
    fn position_of_finds_steps() {
        let catalog = StepCatalog::dashboard();
        assert_eq!(catalog.position_of("home"), Some(0));
        assert!(catalog.position_of("no-such-step").is_none());
    }
}
