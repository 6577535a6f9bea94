//! Reference data: question catalog, archetype profiles and presentation copy.
//!
//! Loaded once at process start and shared read-only afterwards.

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

use crate::domain::foundation::{LikertScale, QuestionId};

use super::{
    Archetype, ArchetypeDetails, ArchetypeProfile, Dimension, Polarity, ProfileTable, Question,
    QuestionCatalog, QuizError,
};

/// Version label of the compiled-in data set.
pub const BUILTIN_VERSION: &str = "builtin-v1";

/// Validated, versioned bundle the engine runs against.
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceData {
    pub version: String,
    pub scale: LikertScale,
    pub catalog: QuestionCatalog,
    pub profiles: ProfileTable,
    pub details: BTreeMap<Archetype, ArchetypeDetails>,
}

impl ReferenceData {
    /// Validates raw tables into a bundle.
    pub fn try_new(
        version: impl Into<String>,
        scale: LikertScale,
        questions: Vec<Question>,
        profiles: impl IntoIterator<Item = (Archetype, ArchetypeProfile)>,
        details: BTreeMap<Archetype, ArchetypeDetails>,
    ) -> Result<Self, QuizError> {
        Ok(Self {
            version: version.into(),
            scale,
            catalog: QuestionCatalog::try_new(questions)?,
            profiles: ProfileTable::try_new(profiles, &scale)?,
            details,
        })
    }

    /// The compiled-in data set, validated on first use.
    pub fn builtin() -> Result<&'static ReferenceData, QuizError> {
        BUILTIN.as_ref().map_err(Clone::clone)
    }

    pub fn question(&self, id: QuestionId) -> Option<&Question> {
        self.catalog.get(id)
    }

    pub fn details(&self, archetype: Archetype) -> Option<&ArchetypeDetails> {
        self.details.get(&archetype)
    }
}

static BUILTIN: Lazy<Result<ReferenceData, QuizError>> = Lazy::new(|| {
    ReferenceData::try_new(
        BUILTIN_VERSION,
        LikertScale::FIVE_POINT,
        builtin_questions(),
        builtin_profile_entries(),
        builtin_details(),
    )
});

fn builtin_questions() -> Vec<Question> {
    use Dimension::*;
    use Polarity::Direct;

    [
        (1, "I make business decisions based on gut feeling, not data", DecisionMaking),
        (2, "I feel most energized when working alone", EnergySource),
        (3, "I prefer specializing in one thing over being versatile", Focus),
        (4, "I create because I need to prove something to others", Motivation),
        (
            5,
            "I'd rather build a product once and sell it forever than provide services",
            Monetization,
        ),
        (6, "I get bored easily if I'm not learning something new", EnergySource),
        (
            7,
            "I'm comfortable with financial uncertainty if I'm building something I believe in",
            RiskTolerance,
        ),
        (8, "I need external validation to feel successful", Motivation),
    ]
    .into_iter()
    .map(|(id, text, dimension): (u32, &str, Dimension)| {
        Question::new(id, text, dimension, Direct)
    })
    .collect()
}

fn builtin_profile_entries() -> Vec<(Archetype, ArchetypeProfile)> {
    use Dimension::*;

    vec![
        (
            Archetype::PermissionlessOperator,
            ArchetypeProfile::new([
                (DecisionMaking, 5.0),
                (RiskTolerance, 5.0),
                (Collaboration, 1.0),
                (EnergySource, 4.0),
            ]),
        ),
        (
            Archetype::SystemsThinker,
            ArchetypeProfile::new([(DecisionMaking, 1.0), (Focus, 5.0), (TimePreference, 5.0)]),
        ),
        (
            Archetype::AudienceBuilder,
            ArchetypeProfile::new([(Collaboration, 5.0), (Motivation, 5.0), (EnergySource, 5.0)]),
        ),
        (
            Archetype::CreatorObsessive,
            ArchetypeProfile::new([(Motivation, 1.0), (Focus, 5.0), (Monetization, 1.0)]),
        ),
        (
            Archetype::HybridHustler,
            ArchetypeProfile::new([(Focus, 1.0), (RiskTolerance, 4.0)]),
        ),
        (
            Archetype::ValidatorSeeker,
            ArchetypeProfile::new([(Motivation, 5.0), (RiskTolerance, 1.0)]),
        ),
        (
            Archetype::TheBuilder,
            ArchetypeProfile::new([(Focus, 5.0), (Monetization, 5.0), (Collaboration, 1.0)]),
        ),
        (
            Archetype::TheThinkerWriter,
            ArchetypeProfile::new([(DecisionMaking, 1.0), (Collaboration, 1.0), (Focus, 5.0)]),
        ),
        (
            Archetype::TheConnector,
            ArchetypeProfile::new([(Collaboration, 5.0), (Monetization, 4.0)]),
        ),
    ]
}

fn details(
    name: &str,
    description: &str,
    strengths: [&str; 4],
    blind_spots: [&str; 3],
    path_forward: &str,
) -> ArchetypeDetails {
    ArchetypeDetails {
        name: name.to_string(),
        description: description.to_string(),
        strengths: strengths.iter().map(|s| s.to_string()).collect(),
        blind_spots: blind_spots.iter().map(|s| s.to_string()).collect(),
        path_forward: path_forward.to_string(),
    }
}

fn builtin_details() -> BTreeMap<Archetype, ArchetypeDetails> {
    BTreeMap::from([
        (
            Archetype::PermissionlessOperator,
            details(
                "The Permissionless Operator",
                "You make decisions without approval, move fast, and trust your gut.",
                [
                    "Rapid decision making",
                    "High bias toward action",
                    "Comfortable with uncertainty",
                    "Speed of execution",
                ],
                [
                    "Can miss important details",
                    "May move without strategy",
                    "Can burn bridges in pursuit of speed",
                ],
                "Build a system for execution. Your natural speed is a gift; help it with process.",
            ),
        ),
        (
            Archetype::SystemsThinker,
            details(
                "The Systems Thinker",
                "You love frameworks, build systems, and optimize relentlessly.",
                [
                    "Scalable process design",
                    "Long-term strategic thinking",
                    "Framework development",
                    "Prevents organizational chaos",
                ],
                [
                    "Can be paralyzed by optimization",
                    "May miss the human element",
                    "Slow to market due to over-planning",
                ],
                "Prioritize shipping over perfecting. Your systems are only as good as the value they deliver.",
            ),
        ),
        (
            Archetype::AudienceBuilder,
            details(
                "The Audience Builder",
                "You thrive on community, connection, and relationship-building.",
                [
                    "Natural community engagement",
                    "Word-of-mouth growth engine",
                    "Strong network effects",
                    "High trust with audience",
                ],
                [
                    "Chasing vanity metrics",
                    "Losing focus on core product",
                    "Spreading yourself too thin",
                ],
                "Focus on depth of connection over breadth of reach. Build products that serve your community's specific needs.",
            ),
        ),
        (
            Archetype::CreatorObsessive,
            details(
                "The Creator Obsessive",
                "You are primarily driven by your craft and deep quality standards.",
                [
                    "Exceptional quality output",
                    "Deep specialized expertise",
                    "High intrinsic motivation",
                    "Craft-led audience trust",
                ],
                [
                    "Struggles with monetization",
                    "Perfectionism paralysis",
                    "Neglects business fundamentals",
                ],
                "Pair your craft with an operator. You need structure around your creation to make it a sustainable business.",
            ),
        ),
        (
            Archetype::HybridHustler,
            details(
                "The Hybrid Hustler",
                "A versatile jack-of-all-trades who can pivot and adapt easily.",
                [
                    "Extreme flexibility",
                    "Broad skill set",
                    "Quick to adapt to market changes",
                    "Execution-focused",
                ],
                [
                    "Lack of clear specialization",
                    "Diluted focus",
                    "Hard to scale personal brand",
                ],
                "Find your 'one thing'. Use your versatility to support a single, clear mission.",
            ),
        ),
        (
            Archetype::ValidatorSeeker,
            details(
                "The Validator Seeker",
                "You create high-standard work and listen deeply to audience feedback.",
                [
                    "Exceptionally high standards",
                    "Deeply in tune with feedback",
                    "Quality-driven reputation",
                    "Meticulous attention to detail",
                ],
                [
                    "Burnout from needing approval",
                    "Imposter syndrome",
                    "Perfectionism preventing shipping",
                ],
                "Set internal metrics for success. Learn to value your own assessment as much as external validation.",
            ),
        ),
        (
            Archetype::TheBuilder,
            details(
                "The Builder",
                "You love making products and tools, thriving within clear constraints.",
                [
                    "Shipping-focused mindset",
                    "Product excellence",
                    "Clear metric-driven progress",
                    "Tangible value creation",
                ],
                [
                    "Neglects marketing and sales",
                    "Can't sell what they build",
                    "Builds in isolation",
                ],
                "Marketing is a product too. Build the distribution engine with the same care you build the tool.",
            ),
        ),
        (
            Archetype::TheThinkerWriter,
            details(
                "The Thinker/Writer",
                "You are best at explaining complex ideas and abstract thinking.",
                [
                    "Unique intellectual property",
                    "Clear thought leadership",
                    "Deep analytical capacity",
                    "Articulating complex concepts",
                ],
                [
                    "Implementation struggle",
                    "Overthinking simple tasks",
                    "Needs operational partners",
                ],
                "Partner for execution. Your ideas need a vehicle; don't try to build the vehicle alone if it drains you.",
            ),
        ),
        (
            Archetype::TheConnector,
            details(
                "The Connector",
                "You thrive in the middle, connecting people, ideas, and opportunities.",
                [
                    "Powerful network effects",
                    "Ecosystem creation",
                    "Syndication and partnerships",
                    "Facilitating value exchange",
                ],
                [
                    "Lacks singular personal focus",
                    "Dependent on others for execution",
                    "Unclear personal brand",
                ],
                "Build a platform, not just a network. Own the infrastructure where the connections happen.",
            ),
        ),
    ])
}
