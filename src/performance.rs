//! @ai:module:intent Map an overall rating to the phrases that describe it
//! @ai:module:layer domain
//! @ai:module:public_api PerformanceDescriptor, resolve_performance
//! @ai:module:stateless true

use crate::student::Rating;
use serde::Serialize;

/// @ai:intent Four phrases describing one rating level
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct PerformanceDescriptor {
    pub level: &'static str,
    pub achievement: &'static str,
    pub attitude: &'static str,
    pub descriptor: &'static str,
}

/// Indexed by `rating - 1`, emerging (1) to exceptional (10).
const PERFORMANCE_TABLE: [PerformanceDescriptor; 10] = [
    PerformanceDescriptor {
        level: "emerging",
        achievement: "initial learning exploration",
        attitude: "a growing readiness to accept guidance",
        descriptor: "emerging",
    },
    PerformanceDescriptor {
        level: "beginning",
        achievement: "early skill development",
        attitude: "responsiveness to support",
        descriptor: "beginning",
    },
    PerformanceDescriptor {
        level: "basic",
        achievement: "recognition of foundational skills",
        attitude: "a participative approach",
        descriptor: "basic",
    },
    PerformanceDescriptor {
        level: "developing",
        achievement: "an emerging understanding of core concepts",
        attitude: "engaged learning",
        descriptor: "developing",
    },
    PerformanceDescriptor {
        level: "satisfactory",
        achievement: "appropriate developmental progress",
        attitude: "willing participation",
        descriptor: "adequate",
    },
    PerformanceDescriptor {
        level: "good",
        achievement: "satisfactory progress in key areas",
        attitude: "cooperative behavior",
        descriptor: "satisfactory",
    },
    PerformanceDescriptor {
        level: "strong",
        achievement: "a good understanding of fundamental skills",
        attitude: "positive engagement",
        descriptor: "good",
    },
    PerformanceDescriptor {
        level: "very strong",
        achievement: "a solid grasp of essential concepts",
        attitude: "enthusiastic participation",
        descriptor: "strong",
    },
    PerformanceDescriptor {
        level: "excellent",
        achievement: "an impressive command of key learning objectives",
        attitude: "a consistently positive approach",
        descriptor: "excellent",
    },
    PerformanceDescriptor {
        level: "exceptional",
        achievement: "outstanding mastery of developmental milestones",
        attitude: "exemplary engagement",
        descriptor: "remarkable",
    },
];

/// @ai:intent Look up the descriptor for a rating, clamping into 1..=10
/// @ai:post result is the entry for clamp(rating, 1, 10)
/// @ai:example (9) -> excellent
/// @ai:example (0) -> emerging
/// @ai:example (15) -> exceptional
/// @ai:effects pure
pub fn resolve_performance(rating: i64) -> PerformanceDescriptor {
    descriptor_for(Rating::new(rating))
}

/// @ai:intent Look up the descriptor for an already-clamped rating
/// @ai:effects pure
pub fn descriptor_for(rating: Rating) -> PerformanceDescriptor {
    PERFORMANCE_TABLE[usize::from(rating.value() - Rating::MIN)]
}
