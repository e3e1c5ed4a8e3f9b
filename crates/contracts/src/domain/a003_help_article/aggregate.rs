use crate::shared::search::{contains_ignore_case, filter_list, Searchable};
use serde::{Deserialize, Serialize};

/// Раздел справки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HelpTopic {
    GettingStarted,
    Billing,
    Messaging,
    Notifications,
    Account,
}

impl HelpTopic {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s {
            "getting_started" => Ok(HelpTopic::GettingStarted),
            "billing" => Ok(HelpTopic::Billing),
            "messaging" => Ok(HelpTopic::Messaging),
            "notifications" => Ok(HelpTopic::Notifications),
            "account" => Ok(HelpTopic::Account),
            _ => Err(format!("Unknown help topic: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HelpTopic::GettingStarted => "getting_started",
            HelpTopic::Billing => "billing",
            HelpTopic::Messaging => "messaging",
            HelpTopic::Notifications => "notifications",
            HelpTopic::Account => "account",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HelpTopic::GettingStarted => "Getting started",
            HelpTopic::Billing => "Billing",
            HelpTopic::Messaging => "Messaging",
            HelpTopic::Notifications => "Notifications",
            HelpTopic::Account => "Account",
        }
    }

    pub fn all() -> [HelpTopic; 5] {
        [
            HelpTopic::GettingStarted,
            HelpTopic::Billing,
            HelpTopic::Messaging,
            HelpTopic::Notifications,
            HelpTopic::Account,
        ]
    }
}

/// Вопрос-ответ справочного центра
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HelpArticle {
    pub id: String,
    pub topic: HelpTopic,
    pub question: String,
    pub answer: String,
}

impl HelpArticle {
    pub fn new(id: &str, topic: HelpTopic, question: &str, answer: &str) -> Self {
        Self {
            id: id.to_string(),
            topic,
            question: question.to_string(),
            answer: answer.to_string(),
        }
    }
}

impl Searchable for HelpArticle {
    fn matches_filter(&self, filter_lower: &str) -> bool {
        contains_ignore_case(&self.question, filter_lower)
            || contains_ignore_case(&self.answer, filter_lower)
    }
}

/// Статьи выбранного раздела (`None` — все разделы), подходящие под запрос
pub fn filter_articles<'a>(
    articles: &'a [HelpArticle],
    topic: Option<HelpTopic>,
    query: &str,
) -> Vec<&'a HelpArticle> {
    let in_topic = articles
        .iter()
        .filter(|a| topic.map_or(true, |t| a.topic == t));
    filter_list(in_topic, query)
}
