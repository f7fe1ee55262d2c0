mod rules;

pub use rules::{ChatRule, ChatRules, Reply};

use chrono::{DateTime, Local};

/// Rule-based responder. The rule table is immutable configuration handed in
/// at construction; the responder itself holds no conversational state.
pub struct Responder {
    rules: ChatRules,
}

impl Responder {
    pub fn new(rules: ChatRules) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &ChatRules {
        &self.rules
    }

    /// True for inputs that should end the session, matched exactly after
    /// trimming and lowercasing.
    pub fn is_farewell(&self, input: &str) -> bool {
        let text = normalize(input);
        self.rules.farewells.iter().any(|word| word == &text)
    }

    pub fn respond(&self, input: &str) -> String {
        self.respond_at(input, Local::now())
    }

    fn respond_at(&self, input: &str, now: DateTime<Local>) -> String {
        let text = normalize(input);

        if self.is_farewell(input) {
            return self.rules.farewell_reply.clone();
        }

        for rule in &self.rules.rules {
            if rule.keywords.iter().any(|keyword| text.contains(keyword)) {
                return render(&rule.reply, now);
            }
        }

        self.rules.fallback.clone()
    }
}

impl Default for Responder {
    fn default() -> Self {
        Self::new(ChatRules::default())
    }
}

fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

fn render(reply: &Reply, now: DateTime<Local>) -> String {
    match reply {
        Reply::Text(text) => text.clone(),
        Reply::CurrentTime => format!("The current time is {}.", now.format("%I:%M %p")),
        Reply::CurrentDate => format!("Today's date is {}.", now.format("%d-%m-%Y")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::Validate;

    #[test]
    fn test_greeting_keyword_matches() {
        let responder = Responder::default();
        assert_eq!(
            responder.respond("Hello there"),
            "Hello! How can I help you today?"
        );
    }

    #[test]
    fn test_farewell_requires_exact_match() {
        let responder = Responder::default();
        assert!(responder.is_farewell("  BYE "));
        assert!(!responder.is_farewell("goodbye friend"));
        assert_eq!(responder.respond("bye"), "Goodbye! It was nice talking to you.");
    }

    #[test]
    fn test_first_matching_rule_wins() {
        let responder = Responder::default();
        // "how are you" contains no greeting keyword, but an input holding
        // both triggers the earlier greeting rule.
        assert_eq!(
            responder.respond("hi, how are you"),
            "Hello! How can I help you today?"
        );
    }

    #[test]
    fn test_time_reply_renders_the_given_instant() {
        let responder = Responder::default();
        let now = Local.with_ymd_and_hms(2026, 3, 5, 14, 30, 0).unwrap();
        assert_eq!(
            responder.respond_at("what time is it", now),
            "The current time is 02:30 PM."
        );
        assert_eq!(
            responder.respond_at("what is the date", now),
            "Today's date is 05-03-2026."
        );
    }

    #[test]
    fn test_unknown_input_gets_the_fallback() {
        let responder = Responder::default();
        let reply = responder.respond("quantum entanglement");
        assert_eq!(reply, ChatRules::default().fallback);
    }

    #[test]
    fn test_default_rules_validate() {
        assert!(ChatRules::default().validate().is_ok());
    }

    #[test]
    fn test_rules_without_keywords_fail_validation() {
        let mut rules = ChatRules::default();
        rules.rules[0].keywords.clear();
        assert!(rules.validate().is_err());
    }
}
