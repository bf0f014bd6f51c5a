//! Integration tests for the CLI command handlers
//!
//! Builds a full `AppContext` against wiremock servers for the game API and
//! the token endpoint, then drives the handlers with in-memory streams.

use msfchat_app::{run_call, run_serve, AppContext};
use msfchat_domain::{
    CacheConfig, Config, CredentialsConfig, FetchConfig, GameApiConfig, IdentityConfig,
    RefreshFailurePolicy,
};
use serde_json::{json, Value};
use tokio::io::BufReader;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Servers {
    game: MockServer,
    identity: MockServer,
}

async fn servers() -> Servers {
    Servers { game: MockServer::start().await, identity: MockServer::start().await }
}

fn test_config(servers: &Servers, player_card_ttl_secs: u64) -> Config {
    Config {
        game_api: GameApiConfig {
            base_url: format!("{}/player/v1", servers.game.uri()),
            api_key: "api-key".into(),
        },
        identity: IdentityConfig {
            token_url: format!("{}/oauth2/token", servers.identity.uri()),
            client_id: "client-id".to_string(),
            client_secret: "client-secret".into(),
        },
        credentials: CredentialsConfig { access_token: "A1".into(), refresh_token: "R1".into() },
        fetch: FetchConfig {
            retries: 3,
            timeout_secs: 5,
            refresh_failure: RefreshFailurePolicy::Continue,
            disable_proxy: true,
        },
        cache: CacheConfig { player_card_ttl_secs },
    }
}

fn lines(out: &[u8]) -> Vec<Value> {
    String::from_utf8_lossy(out)
        .lines()
        .map(|line| serde_json::from_str(line).expect("output line is JSON"))
        .collect()
}

#[test]
fn context_rejects_empty_credentials() {
    let mut config = Config {
        game_api: GameApiConfig { base_url: "http://localhost/".into(), api_key: "k".into() },
        identity: IdentityConfig {
            token_url: "http://localhost/token".into(),
            client_id: "c".into(),
            client_secret: "s".into(),
        },
        credentials: CredentialsConfig { access_token: "A1".into(), refresh_token: "R1".into() },
        fetch: FetchConfig::default(),
        cache: CacheConfig::default(),
    };
    config.credentials.refresh_token = "".into();

    assert!(AppContext::from_config(config).is_err());
}

/// Validates the single call scenario.
///
/// Assertions:
/// - the dispatcher output is written as one line
/// - the call is reported as successful
#[tokio::test]
async fn call_writes_payload_line() {
    let servers = servers().await;
    Mock::given(method("GET"))
        .and(path("/player/v1/roster"))
        .and(header("x-api-key", "api-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": ["storm"] })))
        .expect(1)
        .mount(&servers.game)
        .await;

    let ctx = AppContext::from_config(test_config(&servers, 0)).unwrap();
    let mut out = Vec::new();
    let success = run_call(&ctx.dispatcher, "get_roster", r#"{"perPage":"5"}"#, &mut out)
        .await
        .unwrap();

    assert!(success);
    assert_eq!(lines(&out), vec![json!({ "data": ["storm"] })]);
}

#[tokio::test]
async fn call_reports_unknown_function() {
    let servers = servers().await;
    let ctx = AppContext::from_config(test_config(&servers, 0)).unwrap();

    let mut out = Vec::new();
    let success = run_call(&ctx.dispatcher, "get_alliance", "{}", &mut out).await.unwrap();

    assert!(!success);
    assert_eq!(String::from_utf8(out).unwrap(), "{}\n");
    assert!(servers.game.received_requests().await.unwrap().is_empty());
}

/// Validates the serve loop scenario.
///
/// Assertions:
/// - one output line per non-blank input line
/// - outputs keep tool-call order
/// - a malformed line yields an error object and the loop keeps going
/// - the player card is cached across batches
#[tokio::test]
async fn serve_answers_each_batch_in_order() {
    let servers = servers().await;
    Mock::given(method("GET"))
        .and(path("/player/v1/card"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "name": "Agent" })))
        .expect(1)
        .mount(&servers.game)
        .await;
    Mock::given(method("GET"))
        .and(path("/player/v1/squads"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&servers.game)
        .await;

    let ctx = AppContext::from_config(test_config(&servers, 60)).unwrap();

    let input = concat!(
        r#"[{"id":"c1","function":{"name":"get_player_card","arguments":""}},"#,
        r#"{"id":"c2","function":{"name":"get_squads","arguments":"{}"}},"#,
        r#"{"id":"c3","function":{"name":"get_unknown","arguments":"{}"}}]"#,
        "\n\n",
        "not json\n",
        r#"{"id":"c4","type":"function","function":{"name":"get_player_card"}}"#,
        "\n",
    );
    let reader = BufReader::new(tokio_test::io::Builder::new().read(input.as_bytes()).build());

    let mut out = Vec::new();
    let answered = run_serve(&ctx.dispatcher, reader, &mut out).await.unwrap();

    assert_eq!(answered, 3);
    let responses = lines(&out);
    assert_eq!(
        responses[0],
        json!([
            { "tool_call_id": "c1", "output": r#"{"name":"Agent"}"# },
            {
                "tool_call_id": "c2",
                "output": r#"{"error":"Request failed with status code 500"}"#
            },
            { "tool_call_id": "c3", "output": "{}" }
        ])
    );
    assert!(responses[1]["error"].as_str().unwrap().starts_with("Invalid tool call batch: "));
    assert_eq!(responses[2], json!([{ "tool_call_id": "c4", "output": r#"{"name":"Agent"}"# }]));
}

#[tokio::test]
async fn serve_refreshes_token_through_identity_server() {
    let servers = servers().await;
    Mock::given(method("POST"))
        .and(path("/oauth2/token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "A2",
            "refresh_token": "R2"
        })))
        .expect(1)
        .mount(&servers.identity)
        .await;
    Mock::given(method("GET"))
        .and(header("authorization", "Bearer A1"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&servers.game)
        .await;
    Mock::given(method("GET"))
        .and(path("/player/v1/inventory"))
        .and(header("authorization", "Bearer A2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .expect(1)
        .mount(&servers.game)
        .await;

    let ctx = AppContext::from_config(test_config(&servers, 0)).unwrap();
    let input =
        r#"{"id":"inv","function":{"name":"get_inventory","arguments":"{\"lang\":\"fr\"}"}}"#;

    let mut out = Vec::new();
    run_serve(&ctx.dispatcher, format!("{input}\n").as_bytes(), &mut out).await.unwrap();

    assert_eq!(
        lines(&out),
        vec![json!([{ "tool_call_id": "inv", "output": r#"{"items":[]}"# }])]
    );
    assert_eq!(ctx.tokens.store().current_refresh_token().await.expose(), "R2");
}
