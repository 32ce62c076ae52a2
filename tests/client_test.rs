mod common;

use common::{client_for, spawn_api, ApiState, SESSION_ID};
use serde_json::json;
use std::sync::atomic::Ordering;
use std::sync::Arc;

use summsync::error::AppError;
use summsync::riot_id::RiotId;

fn duo() -> Vec<RiotId> {
    vec![
        RiotId::parse("Faker#KR1").unwrap(),
        RiotId::parse("Chovy#KR2").unwrap(),
    ]
}

#[test]
fn create_session_returns_id_and_report() {
    let state = Arc::new(ApiState::default());
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    let (session_id, results) = client.create_session(&duo(), None, false).unwrap();

    assert_eq!(session_id, SESSION_ID);
    assert_eq!(state.create_hits.load(Ordering::SeqCst), 1);
    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|r| r.stored && !r.from_cache));
    assert_eq!(results[0].display_name(), "Faker#KR1");
}

#[test]
fn create_session_http_error_is_session_create() {
    let state = Arc::new(ApiState {
        create_response: Some((500, json!({"error": "Missing or Expired RIOT_API_KEY."}))),
        ..ApiState::default()
    });
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    match client.create_session(&duo(), None, false) {
        Err(AppError::SessionCreate(msg)) => {
            assert!(msg.contains("500"), "got: {}", msg);
        }
        other => panic!("expected SessionCreate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn create_session_missing_id_is_session_create() {
    let state = Arc::new(ApiState {
        create_response: Some((200, json!({"results": []}))),
        ..ApiState::default()
    });
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    match client.create_session(&duo(), None, false) {
        Err(AppError::SessionCreate(msg)) => {
            assert!(msg.contains("session id"), "got: {}", msg);
        }
        other => panic!("expected SessionCreate, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn refused_connection_is_connection_error() {
    // Grab a free port and release it so nothing is listening there.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));

    let result = client.create_session(&duo(), None, false);
    assert!(matches!(result, Err(AppError::Connection(_))));
}

#[test]
fn stats_decode_is_tolerant_of_missing_fields() {
    let state = Arc::new(ApiState::default());
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    let full = client
        .player_stats(SESSION_ID, &RiotId::parse("Faker#KR1").unwrap())
        .unwrap();
    assert_eq!(full.kda, Some(4.52));
    assert_eq!(full.most_played_role.as_deref(), Some("MIDDLE"));
    assert_eq!(full.ranked_solo.as_ref().unwrap().tier, "CHALLENGER");
    assert!(full.ranked_flex.is_none());

    let empty = client
        .player_stats(SESSION_ID, &RiotId::parse("Empty#NA1").unwrap())
        .unwrap();
    assert!(empty.kda.is_none());
    assert!(empty.most_played_role.is_none());
    assert!(empty.ranked_solo.is_none());
}

#[test]
fn mastery_decode_keeps_server_order() {
    let state = Arc::new(ApiState::default());
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    let mastery = client
        .player_mastery(SESSION_ID, &RiotId::parse("Faker#KR1").unwrap())
        .unwrap();

    assert_eq!(mastery.len(), 3);
    assert_eq!(mastery[0].champion_name.as_deref(), Some("Azir"));
    assert_eq!(mastery[0].champion_points, Some(490290));
}

#[test]
fn solo_insight_failure_becomes_fallback_text() {
    // No server at all: transport error folds into the fallback message.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };
    let client = client_for(&format!("http://127.0.0.1:{}", port));

    let text = client.solo_insight(SESSION_ID, &RiotId::parse("Faker#KR1").unwrap());
    assert!(text.starts_with("Unable to generate AI insight:"), "got: {}", text);
}

#[test]
fn group_insight_min_players_message() {
    let state = Arc::new(ApiState {
        group_response: Some((
            400,
            json!({"error": "At least 2 players are required for this insight"}),
        )),
        ..ApiState::default()
    });
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    assert_eq!(
        client.group_insight(SESSION_ID),
        "Unable to generate team AI insight at this time. At least 2 players are required for this insight"
    );
}

#[test]
fn group_insight_overload_message() {
    let state = Arc::new(ApiState {
        group_response: Some((503, json!({"error": "Service Unavailable"}))),
        ..ApiState::default()
    });
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    assert_eq!(
        client.group_insight(SESSION_ID),
        "Unable to generate team AI insight at this time. Too many requests are being done right now, please try again later."
    );
}

#[test]
fn group_insight_other_failure_embeds_detail() {
    let state = Arc::new(ApiState {
        group_response: Some((502, json!({"error": "Bedrock error: Throttling"}))),
        ..ApiState::default()
    });
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    let text = client.group_insight(SESSION_ID);
    assert!(
        text.starts_with("Unable to generate team AI insight at this time. Error:"),
        "got: {}",
        text
    );
    assert!(text.contains("Bedrock error"), "got: {}", text);
}

#[test]
fn group_insight_success_extracts_answer() {
    let state = Arc::new(ApiState::default());
    let base = spawn_api(Arc::clone(&state));
    let client = client_for(&base);

    assert_eq!(client.group_insight(SESSION_ID), "The team looks coordinated.");
}
