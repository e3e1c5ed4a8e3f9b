use super::aggregate::{HelpArticle, HelpTopic};

/// Статическое содержимое справочного центра
pub fn seed_articles() -> Vec<HelpArticle> {
    vec![
        HelpArticle::new(
            "faq-001",
            HelpTopic::GettingStarted,
            "How do I open several pages at once?",
            "Every item in the sidebar opens in its own tab. Switch between tabs in the tab bar \
             and close them with the × button; the active tab is kept in the page address.",
        ),
        HelpArticle::new(
            "faq-002",
            HelpTopic::GettingStarted,
            "Can I change the color theme?",
            "Use the palette button in the top header to switch between the dark and light \
             themes. Your choice is remembered in this browser.",
        ),
        HelpArticle::new(
            "faq-003",
            HelpTopic::Billing,
            "Where can I see paid invoices?",
            "Payment confirmations arrive in the notification center under the Sales filter.",
        ),
        HelpArticle::new(
            "faq-004",
            HelpTopic::Billing,
            "Who approves purchase orders above my limit?",
            "Orders above your approval limit are routed to your manager. You receive a warning \
             notification until the order is approved.",
        ),
        HelpArticle::new(
            "faq-005",
            HelpTopic::Messaging,
            "What happens when I archive a message?",
            "Archived messages move to the Archive tab. They are not deleted and keep their \
             attachments.",
        ),
        HelpArticle::new(
            "faq-006",
            HelpTopic::Messaging,
            "How does message search work?",
            "Search looks for your text in the subject, the sender name and the message body of \
             the current tab. Letter case is ignored.",
        ),
        HelpArticle::new(
            "faq-007",
            HelpTopic::Notifications,
            "How do I clear the notification badge?",
            "Open a notification or press \"Mark all as read\" in the notification center. The \
             bell badge counts unread notifications from all categories.",
        ),
        HelpArticle::new(
            "faq-008",
            HelpTopic::Account,
            "How do I invite a colleague?",
            "Team management is not available yet. Contact your administrator to add users.",
        ),
    ]
}
