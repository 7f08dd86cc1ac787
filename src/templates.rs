//! @ai:module:intent Hold the categorized sentence templates for both comment styles
//! @ai:module:layer domain
//! @ai:module:public_api Category, TemplateStyle, templates_for, PLACEHOLDERS
//! @ai:module:depends_on student
//! @ai:module:stateless true

use crate::student::Variant;
use serde::{Deserialize, Serialize};
use std::fmt;

/// @ai:intent Sentence slot in a comment; every category contributes exactly one sentence
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Opening,
    Strengths,
    Topics,
    Subjects,
    Weaknesses,
    Behavior,
    Social,
    Conclusion,
}

impl Category {
    /// Emission order of a comment.
    pub const ORDER: [Category; 8] = [
        Category::Opening,
        Category::Strengths,
        Category::Topics,
        Category::Subjects,
        Category::Weaknesses,
        Category::Behavior,
        Category::Social,
        Category::Conclusion,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Category::Opening => "opening",
            Category::Strengths => "strengths",
            Category::Topics => "topics",
            Category::Subjects => "subjects",
            Category::Weaknesses => "weaknesses",
            Category::Behavior => "behavior",
            Category::Social => "social",
            Category::Conclusion => "conclusion",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// @ai:intent Voice of a comment
///
/// The labels are the historical names of the two teacher voices; they say
/// nothing about the student's gender.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TemplateStyle {
    /// Measured, assessment-oriented prose ("male").
    Structured,
    /// Warm, celebratory prose ("female").
    Warm,
}

impl TemplateStyle {
    /// @ai:intent Pick the style for a variant: even variants are warm, odd ones structured
    /// @ai:example (Variant(1)) -> Structured
    /// @ai:example (Variant(2)) -> Warm
    /// @ai:effects pure
    pub fn for_variant(variant: Variant) -> Self {
        if variant.0 % 2 == 0 {
            TemplateStyle::Warm
        } else {
            TemplateStyle::Structured
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TemplateStyle::Structured => "male",
            TemplateStyle::Warm => "female",
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Every placeholder key a template may reference.
pub const PLACEHOLDERS: &[&str] = &[
    "name",
    "level",
    "achievement",
    "attitude",
    "descriptor",
    "strengths",
    "topics",
    "subjects",
    "weaknesses",
    "pronoun_subject",
    "pronoun_subject_lower",
    "pronoun_object",
    "pronoun_possessive",
    "pronoun_possessive_cap",
    "pronoun_verb",
    "pronoun_isAre",
    "pronoun_reflexive",
];

/// @ai:intent Templates for one style and category
/// @ai:post result has at least three entries
/// @ai:effects pure
pub fn templates_for(style: TemplateStyle, category: Category) -> &'static [&'static str] {
    match (style, category) {
        (TemplateStyle::Structured, Category::Opening) => STRUCTURED_OPENINGS,
        (TemplateStyle::Structured, Category::Strengths) => STRUCTURED_STRENGTHS,
        (TemplateStyle::Structured, Category::Topics) => STRUCTURED_TOPICS,
        (TemplateStyle::Structured, Category::Subjects) => STRUCTURED_SUBJECTS,
        (TemplateStyle::Structured, Category::Weaknesses) => STRUCTURED_WEAKNESSES,
        (TemplateStyle::Structured, Category::Behavior) => STRUCTURED_BEHAVIOR,
        (TemplateStyle::Structured, Category::Social) => STRUCTURED_SOCIAL,
        (TemplateStyle::Structured, Category::Conclusion) => STRUCTURED_CONCLUSIONS,
        (TemplateStyle::Warm, Category::Opening) => WARM_OPENINGS,
        (TemplateStyle::Warm, Category::Strengths) => WARM_STRENGTHS,
        (TemplateStyle::Warm, Category::Topics) => WARM_TOPICS,
        (TemplateStyle::Warm, Category::Subjects) => WARM_SUBJECTS,
        (TemplateStyle::Warm, Category::Weaknesses) => WARM_WEAKNESSES,
        (TemplateStyle::Warm, Category::Behavior) => WARM_BEHAVIOR,
        (TemplateStyle::Warm, Category::Social) => WARM_SOCIAL,
        (TemplateStyle::Warm, Category::Conclusion) => WARM_CONCLUSIONS,
    }
}

// Openings and conclusions always name the student.

const STRUCTURED_OPENINGS: &[&str] = &[
    "{name} demonstrated {level} performance this term, achieving {achievement} across multiple developmental areas with consistent focus and determination.",
    "{name} has maintained {level} standards throughout this period, showing structured progress and methodical engagement with each learning objective.",
    "Throughout this term, {name} established {level} foundational competencies while steadily building essential skills and knowledge.",
    "{name} reached {level} performance benchmarks this term, with {achievement} evident across core developmental milestones.",
    "This term's assessments show that {name} has attained {level} proficiency, meeting established standards through dedicated effort and application.",
];

const STRUCTURED_STRENGTHS: &[&str] = &[
    "{name} consistently demonstrates clear capability in {strengths}, maintaining a high standard of work in these areas.",
    "Notable strengths include {pronoun_possessive} abilities in {strengths}, which reflect sustained achievement and growing mastery.",
    "{name} excels particularly in {strengths}, showing measurable progress and consistent effort.",
    "Classroom observations confirm {pronoun_possessive} strong competence in {strengths}, evidence of steady and systematic skill development.",
    "{pronoun_subject} {pronoun_verb} established clear proficiency in {strengths}, showing both understanding and practical application of these skills.",
];

const STRUCTURED_TOPICS: &[&str] = &[
    "Specific achievements include {pronoun_possessive} progress in {topics}, which highlights developing skills and growing confidence.",
    "{pronoun_subject} {pronoun_verb} shown particular success with {topics}, applying these concepts with understanding.",
    "Notable progress in areas such as {topics} reflects {name}'s ability to grasp specific learning objectives and apply them effectively.",
    "Work on {topics} shows {pronoun_possessive} firm grasp of these foundational concepts and readiness for the next step.",
];

const STRUCTURED_SUBJECTS: &[&str] = &[
    "In {subjects}, {name} demonstrates consistent progress, meeting curriculum expectations and achieving measurable outcomes.",
    "{name} has shown structured advancement in {subjects}, keeping focus on learning objectives and building competence.",
    "Performance in {subjects} reflects {pronoun_possessive} systematic approach to learning and {achievement}.",
    "{pronoun_subject} {pronoun_verb} demonstrated solid growth in {subjects}, meeting grade-level expectations through focused effort.",
    "Progress in {subjects} indicates {name}'s ability to master essential concepts and meet the required standards.",
];

const STRUCTURED_WEAKNESSES: &[&str] = &[
    "With continued practice in {weaknesses}, {name} will further strengthen {pronoun_possessive} skills and build greater confidence.",
    "Areas for continued development include {weaknesses}, where additional support and encouragement will foster growth.",
    "Ongoing focus on {weaknesses} will help {name} build stronger foundational skills and achieve greater mastery.",
    "The next step for {name} is targeted practice in {weaknesses}, which will consolidate {pronoun_possessive} progress.",
];

const STRUCTURED_BEHAVIOR: &[&str] = &[
    "{pronoun_subject} {pronoun_verb} shown {attitude} throughout classroom activities, contributing positively to the learning environment.",
    "{name} exhibits {attitude} in classroom interactions, showing maturity and respect for peers and teachers.",
    "{pronoun_possessive_cap} classroom behavior reflects {attitude}, which supports a productive atmosphere for collaborative learning.",
    "{name} conducts {pronoun_reflexive} with {attitude}, setting a good example for classmates.",
];

const STRUCTURED_SOCIAL: &[&str] = &[
    "{name} demonstrates good social skills, working cooperatively with classmates and showing kindness in daily interactions.",
    "{pronoun_subject} {pronoun_isAre} a positive contributor to group activities and {pronoun_verb} shown consideration for others in all classroom situations.",
    "{pronoun_possessive_cap} collaborative spirit and friendly nature make {pronoun_object} a valued member of our classroom community.",
];

const STRUCTURED_CONCLUSIONS: &[&str] = &[
    "{name} is well prepared for continued advancement, having established strong foundational skills for future learning.",
    "With ongoing guidance and support, {name} will continue to thrive academically and socially in the year ahead.",
    "{name} shows readiness for new learning challenges and demonstrates excellent potential for continued growth.",
];

const WARM_OPENINGS: &[&str] = &[
    "{name} has flourished this term, blossoming into a confident learner and bringing real joy to our classroom community.",
    "It has been a delight watching {name} grow this term, celebrating wonderful progress throughout {pronoun_possessive} learning journey.",
    "{name} has bloomed into an enthusiastic learner, embracing each new learning moment with curiosity and grace.",
    "What a joy it has been to witness {name}'s growth this term, with {achievement} shining through in so many wonderful ways.",
    "{name} has truly blossomed this term, radiating enthusiasm and bringing warmth to every learning experience.",
];

const WARM_STRENGTHS: &[&str] = &[
    "{name}'s gifts in {strengths} truly light up our classroom, bringing wonderful energy to everyone around {pronoun_object}.",
    "We celebrate {pronoun_possessive} talents in {strengths}, which continue to blossom in the most wonderful ways.",
    "{name} brings joy to learning through {pronoun_possessive} abilities in {strengths}, inspiring our whole classroom family.",
    "The wonderful way {name} shines in {strengths} creates beautiful learning moments for everyone.",
    "{pronoun_possessive_cap} natural gifts in {strengths} bloom a little more each day, bringing light and wonder to our learning community.",
];

const WARM_TOPICS: &[&str] = &[
    "{pronoun_subject} {pronoun_verb} particularly excelled in {topics}, showing both understanding and creative application.",
    "We celebrate {pronoun_possessive} achievements in {topics}, which reflect {pronoun_possessive} growing confidence.",
    "{name} has embraced {topics} with enthusiasm, making wonderful progress and engaging meaningfully.",
    "Time spent on {topics} shows {pronoun_possessive} strong foundation in these essential areas and readiness for new challenges.",
];

const WARM_SUBJECTS: &[&str] = &[
    "{pronoun_subject} {pronoun_verb} shown wonderful progress in {subjects} with genuine enthusiasm and a love for discovery.",
    "Our lessons in {subjects} have been a delightful success for {name}, who approaches each one with curiosity.",
    "{name} approaches {subjects} with remarkable curiosity and determination, making meaningful connections with new ideas.",
];

const WARM_WEAKNESSES: &[&str] = &[
    "With gentle encouragement in {weaknesses}, {name} will continue to blossom and develop confidence in these areas.",
    "Areas where {name} will benefit from nurturing support include {weaknesses}, and we will celebrate each step of progress.",
    "Through patient guidance in {weaknesses}, {name} will discover {pronoun_possessive} own wonderful potential.",
    "With a little extra support in {weaknesses}, {pronoun_subject_lower} will grow more confident every day.",
];

const WARM_BEHAVIOR: &[&str] = &[
    "{name} brings {attitude} to our classroom every day, creating a warm and welcoming environment for all.",
    "{pronoun_subject} {pronoun_verb} created a positive and nurturing atmosphere, showing {attitude} in all interactions.",
    "{pronoun_possessive_cap} gentle nature and {attitude} make our classroom a more joyful place for learning and growing together.",
];

const WARM_SOCIAL: &[&str] = &[
    "{name} brings kindness and cooperation to classroom interactions, naturally supporting and encouraging {pronoun_possessive} classmates.",
    "{pronoun_subject} {pronoun_verb} shown lovely social skills, forming friendships and showing empathy in all classroom situations.",
    "{pronoun_possessive_cap} caring and inclusive nature makes {pronoun_object} a treasured friend and valued member of our learning community.",
    "{name} expresses {pronoun_reflexive} with kindness and patience, and classmates love to play alongside {pronoun_object}.",
];

const WARM_CONCLUSIONS: &[&str] = &[
    "{name} is ready for wonderful new adventures in learning, having built a strong foundation for future success.",
    "With nurturing guidance and continued encouragement, {name} will continue to flourish in all areas of development.",
    "{name} brings joy to our classroom and shows beautiful potential for continued learning success.",
];
