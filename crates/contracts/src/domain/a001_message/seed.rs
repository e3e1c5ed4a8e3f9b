//! Демо-данные почтового ящика.

use super::aggregate::{Attachment, Message, MessageCategory, Sender};
use chrono::{DateTime, TimeZone, Utc};

fn at(month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

fn current_user() -> Sender {
    Sender::new("u-000", "You", "me@northwind-erp.com")
}

/// Сообщения, которыми заполняется ящик при создании страницы
pub fn seed_messages() -> Vec<Message> {
    vec![
        Message::new(
            "msg-001",
            "Q3 financial statements ready for review",
            "Hi,\n\nThe Q3 balance sheet and P&L are ready. Please review the variance notes \
             on page 4 before Monday's close meeting.\n\nThanks,\nAnna",
            Sender::new("u-101", "Anna Petrova", "anna.petrova@northwind-erp.com"),
            at(9, 27, 10, 42),
            MessageCategory::Inbox,
        )
        .important()
        .with_attachment(Attachment::new(
            "Q3_financial_statements.pdf",
            245_000,
            "application/pdf",
        )),
        Message::new(
            "msg-002",
            "Purchase order PO-2024-118 approved",
            "Your purchase order PO-2024-118 for office equipment has been approved by \
             procurement. Delivery is expected within 5 business days.",
            Sender::new("u-102", "Mark Chen", "mark.chen@northwind-erp.com"),
            at(9, 26, 15, 8),
            MessageCategory::Inbox,
        )
        .read(),
        Message::new(
            "msg-003",
            "Payroll run scheduled for October 1",
            "Reminder: the October payroll run is scheduled for October 1. Please submit \
             overtime adjustments by September 29.",
            Sender::new("u-103", "Laura Gómez", "laura.gomez@northwind-erp.com"),
            at(9, 25, 9, 30),
            MessageCategory::Inbox,
        )
        .read()
        .with_attachment(Attachment::new(
            "payroll_calendar_2024.xlsx",
            18_432,
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        )),
        Message::new(
            "msg-004",
            "Re: Supplier contract renewal",
            "Hi Mark,\n\nI've attached the redlined contract. The main change is the payment \
             term moving from net 30 to net 45.",
            current_user(),
            at(9, 24, 17, 5),
            MessageCategory::Sent,
        )
        .read()
        .with_attachment(Attachment::new(
            "supplier_contract_v3.docx",
            1_572_864,
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        )),
        Message::new(
            "msg-005",
            "Expense report for September",
            "Please find my September expense report attached for approval.",
            current_user(),
            at(9, 20, 11, 0),
            MessageCategory::Sent,
        )
        .read(),
        Message::new(
            "msg-006",
            "Budget proposal 2025",
            "Draft: headcount plan and marketing budget for 2025. Numbers still pending \
             from sales.",
            current_user(),
            at(9, 27, 18, 20),
            MessageCategory::Draft,
        )
        .read(),
        Message::new(
            "msg-007",
            "Annual audit completed",
            "The external auditors have completed the annual audit with no material findings. \
             The full report is archived for reference.",
            Sender::new("u-104", "Peter Novak", "peter.novak@northwind-erp.com"),
            at(8, 30, 14, 45),
            MessageCategory::Archive,
        )
        .read()
        .with_attachment(Attachment::new(
            "audit_report_2023.zip",
            3_355_443,
            "application/zip",
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_seed_ids_unique() {
        let messages = seed_messages();
        let ids: HashSet<&str> = messages.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids.len(), messages.len());
    }

    #[test]
    fn test_seed_inbox_shape() {
        let inbox: Vec<Message> = seed_messages()
            .into_iter()
            .filter(|m| m.category == MessageCategory::Inbox)
            .collect();
        assert_eq!(inbox.len(), 3);
        let unread: Vec<&str> = inbox
            .iter()
            .filter(|m| !m.is_read)
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(unread, vec!["msg-001"]);
    }

    #[test]
    fn test_every_category_seeded() {
        let messages = seed_messages();
        for category in MessageCategory::all() {
            assert!(messages.iter().any(|m| m.category == category));
        }
    }
}
