use base44_client::presentation::document::{Document, DocumentType};
use base44_client::presentation::support::{SupportTicket, TicketStatus};
use serde_json::json;

#[test]
fn support_ticket_new_serializes_set_fields_only() {
    let ticket = SupportTicket::new("c-1", "Subject", "Body");
    assert_eq!(
        serde_json::to_value(&ticket).unwrap(),
        json!({"client_id": "c-1", "subject": "Subject", "message": "Body"})
    );
}

#[test]
fn ticket_status_unknown_value_kept() {
    let status: TicketStatus = serde_json::from_value(json!("escalated")).unwrap();
    assert_eq!(status, TicketStatus::Other("escalated".to_string()));
    assert_eq!(status.to_string(), "escalated");
}

#[test]
fn document_keeps_unknown_fields() {
    let doc: Document = serde_json::from_value(json!({
        "id": "d1",
        "document_type": "driving_license",
        "reviewed_by": "ops"
    }))
    .unwrap();

    assert_eq!(doc.document_type, Some(DocumentType::DrivingLicense));
    assert_eq!(doc.extra.get("reviewed_by"), Some(&json!("ops")));
    assert_eq!(serde_json::to_value(&doc).unwrap()["reviewed_by"], "ops");
}
