//! Keyword-rule chat responder for free-text safety queries.

/// One keyword rule: if any keyword appears in the query, reply wins.
#[derive(Debug, Clone)]
pub struct ChatRule {
    /// Lowercase keywords matched by containment.
    pub keywords: Vec<String>,
    /// Canned reply for this rule.
    pub reply: String,
}

impl ChatRule {
    pub fn new(keywords: &[&str], reply: &str) -> Self {
        Self {
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            reply: reply.to_string(),
        }
    }
}

/// Ordered rule list with a fixed fallback reply.
///
/// Matching is first-rule-wins: rules are checked in order and the first
/// one with any keyword contained (case-insensitively) in the query
/// answers. No rule matching yields the fallback.
#[derive(Debug, Clone)]
pub struct ChatBot {
    rules: Vec<ChatRule>,
    fallback: String,
}

impl ChatBot {
    pub fn new(rules: Vec<ChatRule>, fallback: impl Into<String>) -> Self {
        Self {
            rules,
            fallback: fallback.into(),
        }
    }

    /// Responder preloaded with guidance for common disaster queries.
    pub fn with_default_rules() -> Self {
        Self::new(
            vec![
                ChatRule::new(
                    &["earthquake", "quake", "tremor"],
                    "During an earthquake: drop, cover, and hold on. Stay away from windows and heavy furniture.",
                ),
                ChatRule::new(
                    &["flood", "flooding"],
                    "In a flood: move to higher ground immediately and never walk or drive through floodwater.",
                ),
                ChatRule::new(
                    &["cyclone", "hurricane", "typhoon", "storm"],
                    "Before a severe storm: secure loose objects, charge devices, and shelter in an interior room away from windows.",
                ),
                ChatRule::new(
                    &["fire", "wildfire"],
                    "If a wildfire approaches: follow evacuation orders early and keep an emergency kit by the door.",
                ),
                ChatRule::new(
                    &["kit", "supplies", "prepare"],
                    "A basic emergency kit covers 72 hours: water, non-perishable food, torch, radio, first aid, and copies of documents.",
                ),
                ChatRule::new(
                    &["help", "emergency number"],
                    "If you are in immediate danger, contact your local emergency services number right away.",
                ),
            ],
            "I can help with earthquakes, floods, storms, fires, and emergency kits. What would you like to know?",
        )
    }

    /// Reply to a free-text query.
    pub fn reply(&self, message: &str) -> &str {
        let message = message.to_lowercase();
        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| message.contains(k.as_str())))
            .map(|rule| rule.reply.as_str())
            .unwrap_or(self.fallback.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_match_is_case_insensitive() {
        let bot = ChatBot::with_default_rules();
        let reply = bot.reply("What do I do in an EARTHQUAKE?");
        assert!(reply.contains("drop, cover"));
    }

    #[test]
    fn first_matching_rule_wins() {
        let bot = ChatBot::new(
            vec![
                ChatRule::new(&["storm"], "first"),
                ChatRule::new(&["storm", "wind"], "second"),
            ],
            "fallback",
        );
        assert_eq!(bot.reply("big storm coming"), "first");
    }

    #[test]
    fn unmatched_query_gets_the_fallback() {
        let bot = ChatBot::with_default_rules();
        let reply = bot.reply("tell me a joke");
        assert!(reply.contains("What would you like to know"));
    }

    #[test]
    fn keywords_match_inside_longer_words() {
        // Containment, not word-boundary matching: "wildfires" hits "fire".
        let bot = ChatBot::with_default_rules();
        assert!(bot.reply("are wildfires dangerous").contains("evacuation"));
    }
}
