//! Recommendation Generator
//!
//! Rule-based guidance derived from aggregate results. Rules are an ordered
//! table of `(predicate, message)` pairs; every matching message is kept in
//! table order and the list is capped at three.

/// Maximum number of recommendations returned
pub const MAX_RECOMMENDATIONS: usize = 3;

/// Mood averages below this get mood-boosting advice
pub const LOW_MOOD_THRESHOLD: f64 = 6.0;

const WORK_TAGS: &[&str] = &["work", "stress"];
const ACTIVE_TAGS: &[&str] = &["exercise", "outdoor"];

/// Aggregate values a rule can inspect
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub avg_mood: f64,
    pub common_tags: &'a [String],
}

impl RuleContext<'_> {
    fn has_any_tag(&self, wanted: &[&str]) -> bool {
        self.common_tags
            .iter()
            .any(|tag| wanted.iter().any(|w| tag.trim().eq_ignore_ascii_case(w)))
    }
}

/// One entry of the rule table
pub struct RecommendationRule {
    pub applies: fn(&RuleContext<'_>) -> bool,
    pub message: &'static str,
}

fn low_mood(ctx: &RuleContext<'_>) -> bool {
    ctx.avg_mood < LOW_MOOD_THRESHOLD
}

fn work_pressure(ctx: &RuleContext<'_>) -> bool {
    ctx.has_any_tag(WORK_TAGS)
}

fn active_lifestyle(ctx: &RuleContext<'_>) -> bool {
    ctx.has_any_tag(ACTIVE_TAGS)
}

/// Rules in evaluation order
pub static RULES: &[RecommendationRule] = &[
    RecommendationRule {
        applies: low_mood,
        message: "Plan small mood-boosting activities you enjoy, like music, a walk or time with friends.",
    },
    RecommendationRule {
        applies: low_mood,
        message: "Practice stress management such as deep breathing or a short meditation each day.",
    },
    RecommendationRule {
        applies: work_pressure,
        message: "Set clear boundaries between work and personal time.",
    },
    RecommendationRule {
        applies: work_pressure,
        message: "Schedule regular breaks and relaxation to balance demanding days.",
    },
    RecommendationRule {
        applies: active_lifestyle,
        message: "Keep up your physical activity, it shows up on your better days.",
    },
    RecommendationRule {
        applies: active_lifestyle,
        message: "Make time for nature and the outdoors whenever you can.",
    },
];

/// Generate up to three recommendations for a group of observations
pub fn generate_recommendations(avg_mood: f64, common_tags: &[String]) -> Vec<String> {
    let ctx = RuleContext {
        avg_mood,
        common_tags,
    };

    RULES
        .iter()
        .filter(|rule| (rule.applies)(&ctx))
        .take(MAX_RECOMMENDATIONS)
        .map(|rule| rule.message.to_string())
        .collect()
}
