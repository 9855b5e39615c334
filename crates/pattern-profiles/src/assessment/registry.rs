use serde::Serialize;

use super::domain::{ProfileId, ProfileNarrative, ProfileResult, Resource, ResourceKind};

/// Static resource entry as stored in the registry.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ResourceEntry {
    pub title: &'static str,
    pub kind: ResourceKind,
    pub description: &'static str,
}

impl ResourceEntry {
    pub fn to_resource(&self) -> Resource {
        Resource {
            title: self.title.to_string(),
            kind: self.kind,
            description: self.description.to_string(),
        }
    }
}

/// Descriptive metadata for one profile, independent of any scoring run.
#[derive(Debug, Serialize)]
pub struct ProfileDescriptor {
    pub id: ProfileId,
    pub name: &'static str,
    pub tagline: &'static str,
    pub summary: &'static str,
    pub strengths: &'static [&'static str],
    pub growth_areas: &'static [&'static str],
    pub resources: &'static [ResourceEntry],
}

impl ProfileDescriptor {
    pub fn narrative(&self) -> ProfileNarrative {
        ProfileNarrative {
            tagline: self.tagline.to_string(),
            summary: self.summary.to_string(),
            strengths: self.strengths.iter().map(|s| s.to_string()).collect(),
            growth_areas: self.growth_areas.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Attach a computed score and percentage to this profile's metadata.
    pub fn result(&self, score: f64, percentage: u8) -> ProfileResult {
        ProfileResult {
            profile: self.id,
            name: self.name.to_string(),
            narrative: self.narrative(),
            resources: self
                .resources
                .iter()
                .map(ResourceEntry::to_resource)
                .collect(),
            score,
            percentage,
        }
    }
}

/// Read-only lookup over the nine profile descriptors.
pub struct ProfileRegistry;

impl ProfileRegistry {
    /// Descriptors in [`ProfileId`] declaration order.
    pub fn descriptors() -> &'static [ProfileDescriptor] {
        &PROFILES
    }

    pub fn get(id: ProfileId) -> &'static ProfileDescriptor {
        &PROFILES[id.index()]
    }
}

static PROFILES: [ProfileDescriptor; ProfileId::COUNT] = [
    ProfileDescriptor {
        id: ProfileId::Achiever,
        name: "The Achiever",
        tagline: "Driven by goals and visible progress.",
        summary: "You set targets and work steadily until they are met. Momentum energizes you, and you are at your best when effort turns into measurable results.",
        strengths: &["Goal setting", "Persistence", "Efficiency"],
        growth_areas: &[
            "Resting without guilt",
            "Valuing effort that does not show up in results",
        ],
        resources: &[
            ResourceEntry {
                title: "Weekly Wins Review",
                kind: ResourceKind::Worksheet,
                description: "A short end-of-week reflection on what moved forward and what can wait.",
            },
            ResourceEntry {
                title: "Sustainable Pace",
                kind: ResourceKind::Article,
                description: "Keeping ambition high without burning through your reserves.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Caregiver,
        name: "The Caregiver",
        tagline: "Attentive to the needs of the people nearby.",
        summary: "You notice how others are doing before they say a word. People trust you with their worries, and you find meaning in making life easier for them.",
        strengths: &["Empathy", "Reliability", "Warmth"],
        growth_areas: &["Asking for help", "Setting boundaries"],
        resources: &[
            ResourceEntry {
                title: "Boundaries Without Guilt",
                kind: ResourceKind::Book,
                description: "Practical scripts for saying no while staying kind.",
            },
            ResourceEntry {
                title: "Self-Care Check-In",
                kind: ResourceKind::Exercise,
                description: "A five-minute daily prompt to notice your own needs.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Peacemaker,
        name: "The Peacemaker",
        tagline: "Keeps things calm and connected.",
        summary: "You look for common ground and help groups settle their differences. Stability matters to you, and you often see every side of a disagreement.",
        strengths: &["Mediation", "Patience", "Open-mindedness"],
        growth_areas: &["Voicing your own preferences", "Facing necessary conflict"],
        resources: &[
            ResourceEntry {
                title: "Difficult Conversations Primer",
                kind: ResourceKind::Article,
                description: "How to raise a concern without escalating it.",
            },
            ResourceEntry {
                title: "Preference Journal",
                kind: ResourceKind::Exercise,
                description: "Write down what you want before you ask what others want.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Rebel,
        name: "The Rebel",
        tagline: "Questions the rules and the people who set them.",
        summary: "You push back on conventions that do not make sense to you. Your independence helps groups spot blind spots and try new approaches.",
        strengths: &["Independent thinking", "Courage", "Candor"],
        growth_areas: &["Choosing battles", "Building on existing structures"],
        resources: &[
            ResourceEntry {
                title: "Constructive Dissent",
                kind: ResourceKind::Book,
                description: "Turning disagreement into proposals people can act on.",
            },
            ResourceEntry {
                title: "Pick Your Battles Matrix",
                kind: ResourceKind::Worksheet,
                description: "Sort frustrations by impact and effort before acting on them.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Leader,
        name: "The Leader",
        tagline: "Takes charge and sets direction.",
        summary: "You step forward when a group needs a decision. Others look to you for clarity, and you are comfortable carrying responsibility.",
        strengths: &["Decisiveness", "Vision", "Accountability"],
        growth_areas: &["Delegating fully", "Listening before deciding"],
        resources: &[
            ResourceEntry {
                title: "Listening Tour",
                kind: ResourceKind::Exercise,
                description: "Hold three conversations this week where you only ask questions.",
            },
            ResourceEntry {
                title: "The Delegation Ladder",
                kind: ResourceKind::Article,
                description: "Matching the amount of control you hand over to the task at hand.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Intellectual,
        name: "The Intellectual",
        tagline: "Wants to understand how everything fits together.",
        summary: "You learn by analyzing, reading and asking why. Complex problems interest you, and you prefer evidence over assumptions.",
        strengths: &["Analysis", "Curiosity", "Objectivity"],
        growth_areas: &["Acting before every answer is known", "Sharing unfinished ideas"],
        resources: &[
            ResourceEntry {
                title: "Good Enough Decisions",
                kind: ResourceKind::Article,
                description: "When more research stops improving the outcome.",
            },
            ResourceEntry {
                title: "Idea Sketchbook",
                kind: ResourceKind::Exercise,
                description: "Share one half-formed idea a week and collect reactions.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Perfectionist,
        name: "The Perfectionist",
        tagline: "Holds high standards for every detail.",
        summary: "You care about doing things properly and notice what others miss. Quality matters to you, and your work can be counted on.",
        strengths: &["Attention to detail", "Consistency", "Integrity"],
        growth_areas: &["Accepting imperfection", "Finishing before polishing"],
        resources: &[
            ResourceEntry {
                title: "The 80 Percent Rule",
                kind: ResourceKind::Worksheet,
                description: "Define what done looks like before you start.",
            },
            ResourceEntry {
                title: "Self-Compassion Basics",
                kind: ResourceKind::Book,
                description: "Treating your own mistakes the way you treat a friend's.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Adventurer,
        name: "The Adventurer",
        tagline: "Chases new experiences and possibilities.",
        summary: "You are drawn to novelty and change. Uncertainty feels like an opportunity, and you adapt quickly when plans shift.",
        strengths: &["Adaptability", "Optimism", "Spontaneity"],
        growth_areas: &["Following through", "Planning for the long term"],
        resources: &[
            ResourceEntry {
                title: "Finish Line Tracker",
                kind: ResourceKind::Tool,
                description: "A simple board for seeing projects through to the end.",
            },
            ResourceEntry {
                title: "Risk Budgeting",
                kind: ResourceKind::Article,
                description: "Deciding in advance how much uncertainty a choice can carry.",
            },
        ],
    },
    ProfileDescriptor {
        id: ProfileId::Individualist,
        name: "The Individualist",
        tagline: "Expresses a distinct identity and point of view.",
        summary: "You value authenticity and want your choices to reflect who you are. Creativity comes naturally, and you bring an original voice to any group.",
        strengths: &["Creativity", "Authenticity", "Emotional depth"],
        growth_areas: &["Collaborating on shared visions", "Letting routine work count"],
        resources: &[
            ResourceEntry {
                title: "Creative Constraints",
                kind: ResourceKind::Exercise,
                description: "Produce something original within a fixed set of rules.",
            },
            ResourceEntry {
                title: "Shared Vision Canvas",
                kind: ResourceKind::Worksheet,
                description: "Map where your ideas overlap with your team's goals.",
            },
        ],
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptors_follow_declaration_order() {
        let ids: Vec<ProfileId> = ProfileRegistry::descriptors()
            .iter()
            .map(|descriptor| descriptor.id)
            .collect();
        assert_eq!(ids, ProfileId::ordered().to_vec());
    }

    #[test]
    fn every_profile_recommends_resources() {
        for id in ProfileId::ordered() {
            let descriptor = ProfileRegistry::get(id);
            assert!(!descriptor.resources.is_empty(), "{id} has no resources");
            assert!(descriptor.name.starts_with("The "));
        }
    }

    #[test]
    fn result_merges_metadata_with_scores() {
        let result = ProfileRegistry::get(ProfileId::Rebel).result(-2.0, 0);
        assert_eq!(result.profile, ProfileId::Rebel);
        assert_eq!(result.name, "The Rebel");
        assert_eq!(result.score, -2.0);
        assert_eq!(result.percentage, 0);
        assert_eq!(result.resources.len(), 2);
        assert_eq!(result.narrative.strengths.len(), 3);
    }
}
