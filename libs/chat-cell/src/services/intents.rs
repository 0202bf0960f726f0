//! Keyword rules for routing free text typed at the start of a conversation.

/// What the user is trying to do, guessed from an opening message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    FindDoctor,
    ConsultationHistory,
    Prescriptions,
}

/// Ordered rules; the first rule with a matching keyword wins. `consult`
/// sits in the doctor rule, so the bare word "consultations" starts the
/// doctor flow rather than the history flow, as the product has always
/// behaved.
const INTENT_RULES: &[(Intent, &[&str])] = &[
    (
        Intent::FindDoctor,
        &["doctor", "appointment", "consult", "headache", "pain", "sick"],
    ),
    (
        Intent::ConsultationHistory,
        &["history", "past", "previous", "consultations"],
    ),
    (Intent::Prescriptions, &["prescription", "medicine"]),
];

/// Affirmative answers to the location question.
pub const LOCATION_YES_WORDS: &[&str] = &["yes", "sure", "okay"];

/// Affirmative answers to "schedule an appointment?".
pub const SCHEDULE_YES_WORDS: &[&str] = &["yes", "schedule"];

/// Affirmative answers to the final booking confirmation.
pub const CONFIRM_YES_WORDS: &[&str] = &["yes", "confirm"];

/// First matching rule wins. The input must already be lowercased.
pub fn classify(input: &str) -> Option<Intent> {
    INTENT_RULES
        .iter()
        .find(|(_, keywords)| contains_any(input, keywords))
        .map(|(intent, _)| *intent)
}

/// Substring scan over the keyword list; callers lowercase the input once.
pub fn contains_any(input: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| input.contains(keyword))
}
