// tests/api_endpoints.rs
// End-to-end tests: the real router served on an ephemeral port, driven with
// reqwest, with a scripted completion client standing in for the live API.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::json;
use tower_http::cors::{Any, CorsLayer};

use serendipity_backend::api;
use serendipity_backend::llm::{
    CompletionClient, CompletionError, CompletionGateway, FALLBACK_SENTENCE,
};
use serendipity_backend::seed::{daily_seed, mood_color_for_seed, visual_for_seed};
use serendipity_backend::state::AppState;

/// Scripted stand-in for the OpenAI client: fixed reply or forced failure,
/// plus a call counter so tests can assert the gateway was (not) reached.
struct ScriptedClient {
    reply: String,
    fail: bool,
    calls: AtomicUsize,
}

impl ScriptedClient {
    fn replying(reply: &str) -> Arc<Self> {
        Arc::new(Self {
            reply: reply.to_string(),
            fail: false,
            calls: AtomicUsize::new(0),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            reply: String::new(),
            fail: true,
            calls: AtomicUsize::new(0),
        })
    }

    fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CompletionClient for ScriptedClient {
    async fn complete(
        &self,
        _prompt: &str,
        _max_tokens: u32,
        _temperature: f32,
    ) -> Result<String, CompletionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(CompletionError::Api {
                status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
                body: "simulated outage".to_string(),
            })
        } else {
            Ok(self.reply.clone())
        }
    }
}

async fn spawn_server(client: Arc<ScriptedClient>) -> SocketAddr {
    let state = Arc::new(AppState::new(CompletionGateway::new(client)));
    let app = api::http::routes()
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn health_endpoint_reports_alive() {
    let addr = spawn_server(ScriptedClient::replying("unused")).await;

    let body: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn riddle_endpoint_parses_structured_reply() {
    let addr = spawn_server(ScriptedClient::replying(
        "QUESTION: What has keys but no locks?\nANSWER: A piano.",
    ))
    .await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/riddle"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["question"], "What has keys but no locks?");
    assert_eq!(body["answer"], "A piano.");
}

#[tokio::test]
async fn ascii_endpoint_extracts_art_block() {
    let addr = spawn_server(ScriptedClient::replying(
        "ASCII:\n |\\_/|\n( o.o )\nANSWER: Cat",
    ))
    .await;

    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/ascii-challenge"))
        .json(&json!({"language": "english"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["ascii_art"], " |\\_/|\n( o.o )");
    assert_eq!(body["answer"], "Cat");
}

#[tokio::test]
async fn personality_endpoint_returns_full_profile() {
    let client = ScriptedClient::replying(
        "INSIGHT: You notice small things others miss.\nTYPE: The Quiet Observer\nTRAITS: Observant, Calm, Loyal, Gentle",
    );
    let addr = spawn_server(client.clone()).await;

    // 7 words of input caps the confidence score at 0.95
    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/personality-insight"))
        .json(&json!({"input": "I love hiking and quiet rainy mornings"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["insight"], "You notice small things others miss.");
    assert_eq!(body["personality_type"], "The Quiet Observer");
    assert_eq!(
        body["traits"],
        json!(["Observant", "Calm", "Loyal", "Gentle"])
    );
    assert_eq!(
        body["share_text"],
        "I just discovered I'm The Quiet Observer! 🌟 What's your AI personality type?"
    );
    assert_eq!(body["confidence_score"], 0.95);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn personality_rejects_blank_input_without_calling_the_model() {
    let client = ScriptedClient::replying("unused");
    let addr = spawn_server(client.clone()).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/personality-insight"))
        .json(&json!({"input": "   \n\t "}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "Input cannot be empty");
    assert_eq!(client.call_count(), 0);
}

#[tokio::test]
async fn failed_completion_still_returns_success_with_fallback() {
    let addr = spawn_server(ScriptedClient::failing()).await;

    let resp = reqwest::Client::new()
        .post(format!("http://{addr}/api/daily-affirmation"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["affirmation"], FALLBACK_SENTENCE);

    // A parsed endpoint degrades the same way: the fallback text becomes the
    // question and the answer stays empty.
    let body: serde_json::Value = reqwest::Client::new()
        .post(format!("http://{addr}/api/riddle"))
        .json(&json!({}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["question"], FALLBACK_SENTENCE);
    assert_eq!(body["answer"], "");
}

#[tokio::test]
async fn affirmation_decoration_is_date_stable() {
    let addr = spawn_server(ScriptedClient::replying("You are enough, today and always.")).await;
    let http = reqwest::Client::new();

    let first: serde_json::Value = http
        .post(format!("http://{addr}/api/daily-affirmation"))
        .json(&json!({"language": "english"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let second: serde_json::Value = http
        .post(format!("http://{addr}/api/daily-affirmation"))
        .json(&json!({"language": "english"}))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(first["visual_element"], second["visual_element"]);
    assert_eq!(first["mood_color"], second["mood_color"]);

    // The picks are exactly what the seed of the reported date dictates.
    let seed = daily_seed(first["date"].as_str().unwrap());
    assert_eq!(first["visual_element"], visual_for_seed(&seed));
    assert_eq!(first["mood_color"], mood_color_for_seed(&seed));
    assert_eq!(first["affirmation"], "You are enough, today and always.");
}

#[tokio::test]
async fn random_fun_covers_all_templates_with_matching_emoji() {
    let addr = spawn_server(ScriptedClient::replying("Something delightful.")).await;
    let http = reqwest::Client::new();

    let mut seen = HashSet::new();
    for _ in 0..60 {
        let body: serde_json::Value = http
            .post(format!("http://{addr}/api/random-fun"))
            .json(&json!({}))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

        let kind = body["type"].as_str().unwrap().to_string();
        let emoji = body["emoji"].as_str().unwrap();
        let expected_emoji = match kind.as_str() {
            "joke" => "😄",
            "compliment" => "💝",
            "art" => "🎨",
            other => panic!("unexpected fun type {other}"),
        };
        assert_eq!(emoji, expected_emoji);
        assert_eq!(body["content"], "Something delightful.");
        seen.insert(kind);
    }

    // 60 uniform draws miss one of three kinds with probability ~= 3e-11
    assert_eq!(seen.len(), 3, "expected all fun types, saw {seen:?}");
}
