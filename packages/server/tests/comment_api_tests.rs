mod common;

use common::{create_test_agent, create_test_lead, delete, get, post, TestHarness};
use anvaya_types::LeadStatus;
use serde_json::json;
use test_context::test_context;
use uuid::Uuid;

#[test_context(TestHarness)]
#[tokio::test]
async fn commenting_on_a_missing_lead_is_404_and_persists_nothing(ctx: &mut TestHarness) {
    let ghost = Uuid::new_v4();

    let (status, body) = post(
        ctx.app(),
        &format!("/api/leads/{ghost}/comments"),
        json!({ "commentText": "hello?" }),
    )
    .await;

    assert_eq!(status, 404);
    assert!(body["error"].as_str().unwrap().contains(&ghost.to_string()));

    let count: i64 = sqlx::query_scalar("SELECT count(*) FROM comments WHERE lead_id = $1")
        .bind(ghost)
        .fetch_one(&ctx.db_pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[test_context(TestHarness)]
#[tokio::test]
async fn empty_comment_text_is_rejected(ctx: &mut TestHarness) {
    let agent = create_test_agent(&ctx.db_pool, "Quiet").await.unwrap();
    let lead = create_test_lead(&ctx.db_pool, "quiet", agent.id, LeadStatus::New)
        .await
        .unwrap();

    let (status, body) = post(
        ctx.app(),
        &format!("/api/leads/{}/comments", lead.lead.id),
        json!({ "commentText": "   " }),
    )
    .await;

    assert_eq!(status, 400);
    assert!(body["errors"]
        .as_array()
        .unwrap()
        .iter()
        .any(|e| e == "Comment text is required"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn comments_carry_the_assigned_agent_as_author(ctx: &mut TestHarness) {
    let agent = create_test_agent(&ctx.db_pool, "Author").await.unwrap();
    let lead = create_test_lead(&ctx.db_pool, "authored", agent.id, LeadStatus::New)
        .await
        .unwrap();
    let uri = format!("/api/leads/{}/comments", lead.lead.id);

    let (status, created) = post(ctx.app(), &uri, json!({ "commentText": "first call done" })).await;

    assert_eq!(status, 201);
    assert_eq!(created["author"], "Author");
    assert_eq!(created["commentText"], "first call done");
    assert!(created["createdAt"].is_string());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn comments_list_newest_first(ctx: &mut TestHarness) {
    let agent = create_test_agent(&ctx.db_pool, "Lister").await.unwrap();
    let lead = create_test_lead(&ctx.db_pool, "listed", agent.id, LeadStatus::New)
        .await
        .unwrap();
    let uri = format!("/api/leads/{}/comments", lead.lead.id);

    post(ctx.app(), &uri, json!({ "commentText": "older" })).await;
    tokio::time::sleep(std::time::Duration::from_millis(20)).await;
    post(ctx.app(), &uri, json!({ "commentText": "newer" })).await;

    let (status, body) = get(ctx.app(), &uri).await;

    assert_eq!(status, 200);
    let comments = body.as_array().unwrap();
    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0]["commentText"], "newer");
    assert_eq!(comments[1]["commentText"], "older");
}

#[test_context(TestHarness)]
#[tokio::test]
async fn deleted_author_falls_back_to_a_display_placeholder(ctx: &mut TestHarness) {
    let agent = create_test_agent(&ctx.db_pool, "Vanishing").await.unwrap();
    let lead = create_test_lead(&ctx.db_pool, "haunted", agent.id, LeadStatus::New)
        .await
        .unwrap();
    let uri = format!("/api/leads/{}/comments", lead.lead.id);

    post(ctx.app(), &uri, json!({ "commentText": "left behind" })).await;
    delete(ctx.app(), &format!("/api/agents/{}", agent.id)).await;

    // Listing resolves the dangling author as "Unknown"
    let (_, listed) = get(ctx.app(), &uri).await;
    assert_eq!(listed.as_array().unwrap()[0]["author"], "Unknown");

    // A new comment on the now-agentless lead reports "System"
    let (status, created) = post(ctx.app(), &uri, json!({ "commentText": "who wrote this" })).await;
    assert_eq!(status, 201);
    assert_eq!(created["author"], "System");
}
