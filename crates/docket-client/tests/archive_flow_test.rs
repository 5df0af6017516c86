//! Archive action flow tests against mock list and action endpoints.

use serde_json::json;
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use docket_client::{ListClient, ListClientConfig, ListClientError};
use docket_list::{ActionState, CommitOutcome};

fn case_body(names: &[&str], total: u64) -> serde_json::Value {
    json!({
        "success": true,
        "data_list": names.iter().map(|name| json!({"name": name})).collect::<Vec<_>>(),
        "current_page": 1,
        "data_list_total": total,
    })
}

async fn loaded_client(server: &MockServer, names: &[&str], total: u64) -> ListClient<serde_json::Value> {
    Mock::given(method("GET"))
        .and(path("/cases/list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(case_body(names, total)))
        .mount(server)
        .await;

    let client: ListClient<serde_json::Value> =
        ListClient::new(ListClientConfig::new(&server.uri(), "/cases/list")).unwrap();
    client.change_page(Some(1)).await.unwrap();
    client
}

#[tokio::test]
async fn archive_success_commits_on_dismissal() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cases/archive"))
        .and(body_string_contains("case_id=c2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&server)
        .await;

    let client = loaded_client(&server, &["a", "b", "c"], 41).await;

    let pending = client
        .take_archive_action("/cases/archive", &[("case_id", "c2")], 1)
        .await?;

    // The row stays visible until the confirmation dialog is dismissed.
    let store = client.store();
    assert_eq!(store.len(), 3);
    assert_eq!(store.total(), 41);
    assert_eq!(store.action_state(1), Some(ActionState::Confirmed));

    assert_eq!(pending.commit(), CommitOutcome::Removed);
    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), 40);
    assert_eq!(store.archived().len(), 1);
    assert_eq!(store.archived()[0].record["name"], "b");
    Ok(())
}

#[tokio::test]
async fn rejected_archive_marks_the_row() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cases/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "message": "has open subcases",
        })))
        .mount(&server)
        .await;

    let client = loaded_client(&server, &["a", "b"], 2).await;

    let result = client
        .take_archive_action("/cases/archive", &[("case_id", "c2")], 1)
        .await;

    assert!(matches!(
        result,
        Err(ListClientError::Rejected { message: Some(_) })
    ));
    let store = client.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), 2);
    assert_eq!(
        store.action_state(1),
        Some(ActionState::Failed("has open subcases".to_string()))
    );
    Ok(())
}

#[tokio::test]
async fn transport_error_marks_the_row() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cases/archive"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let client = loaded_client(&server, &["a"], 1).await;

    let result = client
        .take_archive_action("/cases/archive", &[("case_id", "c1")], 0)
        .await;

    assert!(matches!(
        result,
        Err(ListClientError::RequestFailed { status: 500, .. })
    ));
    assert_eq!(client.store().total(), 1);
    assert!(matches!(
        client.store().action_state(0),
        Some(ActionState::Failed(_))
    ));
    Ok(())
}

#[tokio::test]
async fn page_replacement_supersedes_a_pending_removal() -> anyhow::Result<()> {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/cases/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .mount(&server)
        .await;

    let client = loaded_client(&server, &["a", "b"], 2).await;

    let pending = client
        .take_archive_action("/cases/archive", &[("case_id", "c1")], 0)
        .await?;

    // A refetch lands before the dialog is dismissed.
    client.change_page(Some(1)).await?;

    assert_eq!(pending.commit(), CommitOutcome::Superseded);
    let store = client.store();
    assert_eq!(store.len(), 2);
    assert_eq!(store.total(), 2);
    assert!(store.archived().is_empty());
    Ok(())
}

#[tokio::test]
async fn invalid_index_fails_fast() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    let client = loaded_client(&server, &["a"], 1).await;
    let before = server.received_requests().await.unwrap().len();

    let result = client
        .take_archive_action("/cases/archive", &[("case_id", "c9")], 9)
        .await;

    assert!(matches!(
        result,
        Err(ListClientError::InvalidIndex { index: 9, len: 1 })
    ));
    assert_eq!(server.received_requests().await.unwrap().len(), before);
    Ok(())
}

#[tokio::test]
async fn empty_action_url_fails_fast() -> anyhow::Result<()> {
    let server = MockServer::start().await;

    let client = loaded_client(&server, &["a"], 1).await;
    let result = client.take_archive_action("", &[("case_id", "c1")], 0).await;

    assert!(matches!(result, Err(ListClientError::EmptyActionUrl)));
    assert_eq!(client.store().action_state(0), Some(ActionState::Idle));
    Ok(())
}

#[tokio::test]
async fn fully_formed_action_url_bypasses_the_base_url() -> anyhow::Result<()> {
    let list_server = MockServer::start().await;
    let action_server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/archive"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"success": true})))
        .expect(1)
        .mount(&action_server)
        .await;

    let client = loaded_client(&list_server, &["a"], 1).await;

    let action_url = format!("{}/archive", action_server.uri());
    let pending = client
        .take_archive_action(&action_url, &[("case_id", "c1")], 0)
        .await?;
    assert_eq!(pending.commit(), CommitOutcome::Removed);
    assert_eq!(client.store().total(), 0);
    Ok(())
}
