use common::Validate;
use serde::{Deserialize, Serialize};

/// What a matched rule answers with. Time and date replies are rendered at
/// response time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Reply {
    Text(String),
    CurrentTime,
    CurrentDate,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRule {
    /// The rule fires when any keyword occurs in the lowercased input.
    pub keywords: Vec<String>,
    pub reply: Reply,
}

impl ChatRule {
    fn text(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            reply: Reply::Text(reply.to_string()),
        }
    }
}

/// The full reply table. Rule order is priority order: the first matching
/// rule wins, so broader keywords belong further down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChatRules {
    pub farewells: Vec<String>,
    pub farewell_reply: String,
    pub rules: Vec<ChatRule>,
    pub fallback: String,
}

impl Validate for ChatRules {
    fn validate(&self) -> Result<(), String> {
        if self.farewells.is_empty() {
            return Err("At least one farewell word is required".to_string());
        }
        if self.rules.is_empty() {
            return Err("At least one chat rule is required".to_string());
        }
        for (index, rule) in self.rules.iter().enumerate() {
            if rule.keywords.is_empty() {
                return Err(format!("Rule {} has no keywords", index));
            }
            if rule.keywords.iter().any(|k| k.trim().is_empty()) {
                return Err(format!("Rule {} has a blank keyword", index));
            }
        }
        if self.fallback.trim().is_empty() {
            return Err("Fallback reply must not be empty".to_string());
        }
        Ok(())
    }
}

impl Default for ChatRules {
    fn default() -> Self {
        Self {
            farewells: ["bye", "exit", "quit", "goodbye"]
                .iter()
                .map(|w| w.to_string())
                .collect(),
            farewell_reply: "Goodbye! It was nice talking to you.".to_string(),
            rules: vec![
                ChatRule::text(
                    &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"],
                    "Hello! How can I help you today?",
                ),
                ChatRule::text(
                    &["how are you"],
                    "I'm just a bundle of rules, but I'm feeling great! What about you?",
                ),
                ChatRule::text(
                    &["your name", "who are you"],
                    "I'm a simple rule-based chat assistant.",
                ),
                ChatRule::text(
                    &["who created you", "your creator"],
                    "I was put together as a small side project.",
                ),
                ChatRule {
                    keywords: vec!["time".to_string()],
                    reply: Reply::CurrentTime,
                },
                ChatRule {
                    keywords: vec!["date".to_string(), "today's date".to_string()],
                    reply: Reply::CurrentDate,
                },
                ChatRule::text(
                    &["weather"],
                    "I can't fetch live weather yet, but I hope it's a pleasant day where you are!",
                ),
                ChatRule::text(&["thank you", "thanks"], "You're welcome! Happy to help."),
                ChatRule::text(&["sorry"], "It's okay, no worries at all."),
                ChatRule::text(
                    &["study", "exam", "exams"],
                    "Stay consistent with your studies. Make a timetable, revise daily, and take short breaks. You've got this!",
                ),
                ChatRule::text(
                    &["programming", "coding", "rust"],
                    "Programming is fun! Start with basics like variables, loops, and functions, then practice small projects.",
                ),
                ChatRule::text(
                    &["joke"],
                    "Why do programmers prefer dark mode? Because light attracts bugs!",
                ),
                ChatRule::text(
                    &["help"],
                    "Sure! I can chat about my name, time and date, study tips, programming, or tell a joke. Just type what you want to talk about!",
                ),
            ],
            fallback: "I'm not sure how to respond to that yet. Try asking me about the time, date, studies, coding, or say 'help' to see options.".to_string(),
        }
    }
}
