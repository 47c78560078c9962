use super::common::*;
use base44_client::prelude::*;
use mockito::{Matcher, Server};
use serde_json::json;

#[tokio::test]
async fn list_trades_returns_typed_records() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", entities_url("Trade").as_str())
        .match_header("api_key", TEST_API_KEY)
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!([
                {
                    "id": "t1",
                    "client_id": "c-1",
                    "symbol": "GCZ25",
                    "commodity": "Gold",
                    "position_type": "call",
                    "contract_size": 1,
                    "entry_price": 35.5,
                    "strike_price": 2100,
                    "expiry_date": "2025-12-26",
                    "status": "active",
                    "profit_loss": 120.0
                },
                {
                    "id": "t2",
                    "symbol": "SIZ25",
                    "position_type": "put",
                    "status": "closed"
                }
            ])
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let trades = client.list_trades().await.unwrap();

    assert_eq!(trades.len(), 2);
    assert!(trades[0].is_active());
    assert_eq!(trades[0].strike_price, Some(2100.0));
    assert_eq!(trades[1].position_type, Some(PositionType::Put));
    assert_eq!(trades[1].status, Some(TradeStatus::Closed));
    mock.assert_async().await;
}

#[tokio::test]
async fn filter_trades_by_client() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", entities_url("Trade").as_str())
        .match_query(Matcher::UrlEncoded("client_id".into(), "c-1".into()))
        .with_status(200)
        .with_body(r#"[{"id":"t1","client_id":"c-1"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let trades = client
        .filter_trades(&EntityFilter::new().client_id("c-1"))
        .await
        .unwrap();

    assert_eq!(trades.len(), 1);
    assert_eq!(trades[0].client_id.as_deref(), Some("c-1"));
    mock.assert_async().await;
}

#[tokio::test]
async fn update_trade_returns_updated_record() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", entity_url("Trade", "t1").as_str())
        .match_body(Matcher::Json(json!({"current_price": 41.0})))
        .with_status(200)
        .with_body(r#"{"id":"t1","current_price":41.0,"status":"active"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let trade = client
        .update_trade("t1", &json!({"current_price": 41.0}))
        .await
        .unwrap();

    assert_eq!(trade.current_price, Some(41.0));
    mock.assert_async().await;
}

#[tokio::test]
async fn list_trades_fails_on_non_array() {
    let mut server = Server::new_async().await;
    let _mock = server
        .mock("GET", entities_url("Trade").as_str())
        .with_status(200)
        .with_body(r#"{"error":"unexpected"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let err = client.list_trades().await.unwrap_err();

    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn create_support_ticket_posts_only_set_fields() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", entities_url("SupportTicket").as_str())
        .match_body(Matcher::Json(json!({
            "client_id": "c-1",
            "subject": "Margin call",
            "message": "Please call me back",
            "priority": "high"
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "s1",
                "client_id": "c-1",
                "subject": "Margin call",
                "message": "Please call me back",
                "priority": "high",
                "status": "open"
            })
            .to_string(),
        )
        .create_async()
        .await;

    let client = create_test_client(&server);
    let ticket =
        SupportTicket::new("c-1", "Margin call", "Please call me back").with_priority("high");
    let created = client.create_support_ticket(&ticket).await.unwrap();

    assert_eq!(created.id.as_deref(), Some("s1"));
    assert_eq!(created.status, Some(TicketStatus::Open));
    mock.assert_async().await;
}

#[tokio::test]
async fn update_support_ticket_with_response() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("PUT", entity_url("SupportTicket", "s1").as_str())
        .match_body(Matcher::Json(json!({"status": "resolved", "response": "Done"})))
        .with_status(200)
        .with_body(r#"{"id":"s1","status":"resolved","response":"Done"}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let ticket = client
        .update_support_ticket("s1", &json!({"status": "resolved", "response": "Done"}))
        .await
        .unwrap();

    assert_eq!(ticket.status, Some(TicketStatus::Resolved));
    mock.assert_async().await;
}

#[tokio::test]
async fn filter_support_tickets_by_status() {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("GET", entities_url("SupportTicket").as_str())
        .match_query(Matcher::UrlEncoded("status".into(), "in_progress".into()))
        .with_status(200)
        .with_body(r#"[{"id":"s2","status":"in_progress"}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let tickets = client
        .filter_support_tickets(&EntityFilter::new().status("in_progress"))
        .await
        .unwrap();

    assert_eq!(tickets[0].status, Some(TicketStatus::InProgress));
    mock.assert_async().await;
}

#[tokio::test]
async fn create_and_list_documents() {
    let mut server = Server::new_async().await;
    let create = server
        .mock("POST", entities_url("Document").as_str())
        .match_body(Matcher::Json(json!({
            "client_id": "c-1",
            "document_type": "passport",
            "file_url": "https://files.example.com/p.pdf"
        })))
        .with_status(200)
        .with_body(
            json!({
                "id": "d1",
                "client_id": "c-1",
                "document_type": "passport",
                "file_url": "https://files.example.com/p.pdf",
                "status": "pending"
            })
            .to_string(),
        )
        .create_async()
        .await;
    let list = server
        .mock("GET", entities_url("Document").as_str())
        .with_status(200)
        .with_body(r#"[{"id":"d1","document_type":"passport","signed":false}]"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let document = Document {
        client_id: Some("c-1".to_string()),
        document_type: Some(DocumentType::Passport),
        file_url: Some("https://files.example.com/p.pdf".to_string()),
        ..Document::default()
    };
    let created = client.create_document(&document).await.unwrap();
    assert_eq!(created.status.as_deref(), Some("pending"));

    let documents = client.list_documents().await.unwrap();
    assert_eq!(documents[0].signed, Some(false));

    create.assert_async().await;
    list.assert_async().await;
}

#[tokio::test]
async fn filter_and_update_documents() {
    let mut server = Server::new_async().await;
    let filter = server
        .mock("GET", entities_url("Document").as_str())
        .match_query(Matcher::UrlEncoded("signed".into(), "false".into()))
        .with_status(200)
        .with_body(r#"[{"id":"d2","signed":false}]"#)
        .create_async()
        .await;
    let update = server
        .mock("PUT", entity_url("Document", "d2").as_str())
        .match_body(Matcher::Json(json!({"signed": true})))
        .with_status(200)
        .with_body(r#"{"id":"d2","signed":true}"#)
        .create_async()
        .await;

    let client = create_test_client(&server);
    let unsigned = client
        .filter_documents(&EntityFilter::new().with("signed", false))
        .await
        .unwrap();
    let id = unsigned[0].id.clone().unwrap();
    let signed = client
        .update_document(&id, &json!({"signed": true}))
        .await
        .unwrap();

    assert_eq!(signed.signed, Some(true));
    filter.assert_async().await;
    update.assert_async().await;
}

const NOT_A_LIST: &str = r#"{"error":"unexpected"}"#;
const NOT_A_RECORD: &str = r#""accepted""#;

async fn mock_get(server: &mut mockito::ServerGuard, entity: &str, body: &str) -> mockito::Mock {
    server
        .mock("GET", entities_url(entity).as_str())
        .match_query(Matcher::Any)
        .with_status(200)
        .with_body(body)
        .create_async()
        .await
}

async fn mock_write(
    server: &mut mockito::ServerGuard,
    method: &str,
    path: String,
    body: &str,
) -> mockito::Mock {
    server
        .mock(method, path.as_str())
        .with_status(200)
        .with_body(body)
        .create_async()
        .await
}

#[tokio::test]
async fn document_lists_fail_on_non_array() {
    let mut server = Server::new_async().await;
    let _mock = mock_get(&mut server, "Document", NOT_A_LIST).await;
    let client = create_test_client(&server);

    let err = client.list_documents().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let err = client
        .filter_documents(&EntityFilter::new().client_id("c-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn support_ticket_lists_fail_on_non_array() {
    let mut server = Server::new_async().await;
    let _mock = mock_get(&mut server, "SupportTicket", NOT_A_LIST).await;
    let client = create_test_client(&server);

    let err = client.list_support_tickets().await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let err = client
        .filter_support_tickets(&EntityFilter::new().status("open"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn filter_trades_fails_on_non_array() {
    let mut server = Server::new_async().await;
    let _mock = mock_get(&mut server, "Trade", NOT_A_LIST).await;
    let client = create_test_client(&server);

    let err = client
        .filter_trades(&EntityFilter::new().client_id("c-1"))
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn updates_fail_on_non_record() {
    let mut server = Server::new_async().await;
    let _trade = mock_write(&mut server, "PUT", entity_url("Trade", "t1"), NOT_A_RECORD).await;
    let _doc = mock_write(&mut server, "PUT", entity_url("Document", "d1"), NOT_A_RECORD).await;
    let _ticket =
        mock_write(&mut server, "PUT", entity_url("SupportTicket", "s1"), NOT_A_RECORD).await;
    let client = create_test_client(&server);
    let update = json!({"status": "closed"});

    let err = client.update_trade("t1", &update).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let err = client.update_document("d1", &update).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let err = client.update_support_ticket("s1", &update).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}

#[tokio::test]
async fn creates_fail_on_non_record() {
    let mut server = Server::new_async().await;
    let _doc = mock_write(&mut server, "POST", entities_url("Document"), NOT_A_RECORD).await;
    let _ticket =
        mock_write(&mut server, "POST", entities_url("SupportTicket"), NOT_A_RECORD).await;
    let client = create_test_client(&server);

    let err = client.create_document(&Document::default()).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));

    let ticket = SupportTicket::new("c-1", "Subject", "Body");
    let err = client.create_support_ticket(&ticket).await.unwrap_err();
    assert!(matches!(err, AppError::Json(_)));
}
