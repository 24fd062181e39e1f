/// Question topics and the topic filter used by the board
use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Topic {
    Culture,
    Ethics,
    Law,
}

impl Topic {
    pub const ALL: [Topic; 3] = [Topic::Culture, Topic::Ethics, Topic::Law];

    /// Translation key for the topic label
    pub fn label_key(&self) -> &'static str {
        match self {
            Topic::Culture => "game_topic_culture",
            Topic::Ethics => "game_topic_ethics",
            Topic::Law => "game_topic_law",
        }
    }
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Topic::Culture => write!(f, "culture"),
            Topic::Ethics => write!(f, "ethics"),
            Topic::Law => write!(f, "law"),
        }
    }
}

/// Narrows which questions are eligible for selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TopicFilter {
    #[default]
    All,
    Only(Topic),
}

impl TopicFilter {
    pub fn matches(&self, topic: Topic) -> bool {
        match self {
            TopicFilter::All => true,
            TopicFilter::Only(wanted) => *wanted == topic,
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            TopicFilter::All => "game_topic_all",
            TopicFilter::Only(topic) => topic.label_key(),
        }
    }

    /// Parse `all`, `culture`, `ethics` or `law`
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "all" => Some(TopicFilter::All),
            "culture" => Some(TopicFilter::Only(Topic::Culture)),
            "ethics" => Some(TopicFilter::Only(Topic::Ethics)),
            "law" => Some(TopicFilter::Only(Topic::Law)),
            _ => None,
        }
    }
}

impl fmt::Display for TopicFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TopicFilter::All => write!(f, "all"),
            TopicFilter::Only(topic) => topic.fmt(f),
        }
    }
}
