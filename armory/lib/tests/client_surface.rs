//! Integration tests for the public client surface.
//!
//! Requests are captured with `RecordingTransport` so that every operation
//! can be checked against the URL it produces, without network access. One
//! test routes requests through the real `reqwest` transport to a local
//! mock server.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use armory_lib::auth::{StaticToken, token_fn};
use armory_lib::testing::RecordingTransport;
use armory_lib::transport::{BoxFuture, Headers, ReqwestTransport, Transport, TransportResponse};
use armory_lib::{
    ApiErrorKind, CharacterParams, CharacterPvpBracketParams, ErrorMapping, Operation,
    OperationParams, PvpLeaderboardParams, PvpSeasonParams, Region, RequestError,
    ValidationError, WowClient, WowError,
};
use serde_json::json;
use strum::IntoEnumIterator;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn links() -> serde_json::Value {
    json!({ "self": { "href": "https://eu.api.blizzard.com/x" } })
}

fn client_with(transport: &Arc<RecordingTransport>, region: Region, locale: &str) -> WowClient {
    WowClient::builder(region, locale)
        .token_provider(StaticToken::new("abc"))
        .transport(Arc::clone(transport))
        .build()
        .unwrap()
}

fn url(region: &str, path: &str, namespace: &str, locale: &str) -> String {
    format!("https://{region}.api.blizzard.com{path}?namespace={namespace}&locale={locale}")
}

/// Every operation by name maps to the documented path and namespace.
#[tokio::test]
async fn test_every_operation_url() {
    let character = "/profile/wow/character/ravencrest/thrall";
    let expected = [
        (Operation::CharacterProfile, character.to_string(), "profile-eu"),
        (Operation::CharacterStatus, format!("{character}/status"), "profile-eu"),
        (Operation::CharacterAppearance, format!("{character}/appearance"), "profile-eu"),
        (Operation::CharacterMedia, format!("{character}/character-media"), "profile-eu"),
        (Operation::CharacterEquipment, format!("{character}/equipment"), "profile-eu"),
        (Operation::CharacterProfessions, format!("{character}/professions"), "profile-eu"),
        (Operation::CharacterEncounters, format!("{character}/encounters"), "profile-eu"),
        (Operation::CharacterDungeons, format!("{character}/encounters/dungeons"), "profile-eu"),
        (Operation::CharacterRaids, format!("{character}/encounters/raids"), "profile-eu"),
        (Operation::CharacterAchievements, format!("{character}/achievements"), "profile-eu"),
        (
            Operation::CharacterAchievementStatistics,
            format!("{character}/achievements/statistics"),
            "profile-eu",
        ),
        (Operation::CharacterCollections, format!("{character}/collections"), "profile-eu"),
        (
            Operation::CharacterMountsCollection,
            format!("{character}/collections/mounts"),
            "profile-eu",
        ),
        (
            Operation::CharacterPetsCollection,
            format!("{character}/collections/pets"),
            "profile-eu",
        ),
        (
            Operation::CharacterToysCollection,
            format!("{character}/collections/toys"),
            "profile-eu",
        ),
        (
            Operation::CharacterHeirloomsCollection,
            format!("{character}/collections/heirlooms"),
            "profile-eu",
        ),
        (Operation::CharacterPvpSummary, format!("{character}/pvp-summary"), "profile-eu"),
        (Operation::CharacterPvpBracket, format!("{character}/pvp-bracket/3v3"), "profile-eu"),
        (Operation::PvpSeasonsIndex, "/data/wow/pvp-season/index".to_string(), "dynamic-eu"),
        (Operation::PvpSeason, "/data/wow/pvp-season/38".to_string(), "dynamic-eu"),
        (
            Operation::PvpLeaderboardsIndex,
            "/data/wow/pvp-season/38/pvp-leaderboard/index".to_string(),
            "dynamic-eu",
        ),
        (
            Operation::PvpLeaderboard,
            "/data/wow/pvp-season/38/pvp-leaderboard/3v3".to_string(),
            "dynamic-eu",
        ),
        (
            Operation::PvpRewardsIndex,
            "/data/wow/pvp-season/38/pvp-reward/index".to_string(),
            "dynamic-eu",
        ),
    ];
    assert_eq!(expected.len(), Operation::iter().count());

    let transport = Arc::new(RecordingTransport::ok(json!({})));
    let client = client_with(&transport, Region::Eu, "es_ES");
    let params = OperationParams::new()
        .realm("ravencrest")
        .character_name("thrall")
        .bracket("3v3")
        .season(38);

    for (op, path, namespace) in expected {
        client.call(op, &params).await.unwrap();
        let request = transport.last_request().unwrap();
        assert_eq!(request.url, url("eu", &path, namespace, "es_ES"), "{op}");
        assert_eq!(request.header("Authorization"), Some("Bearer abc"), "{op}");
    }
    assert_eq!(transport.requests().len(), 23);
}

/// Typed methods issue the same requests as their named counterparts.
#[tokio::test]
async fn test_typed_methods_decode_responses() {
    let transport = Arc::new(RecordingTransport::ok(json!({
        "_links": links(),
        "id": 38,
        "name": "Thrall",
        "level": 80,
        "is_valid": true,
        "seasons": [{ "id": 37 }, { "id": 38 }],
        "current_season": { "id": 38 }
    })));
    let client = client_with(&transport, Region::Us, "en_US");
    let thrall = CharacterParams::new("area-52", "thrall");

    let profile = client.get_character_profile(&thrall).await.unwrap();
    assert_eq!(profile.name, "Thrall");
    assert_eq!(profile.level, 80);

    let status = client.get_character_status(&thrall).await.unwrap();
    assert!(status.is_valid);
    assert_eq!(
        transport.last_request().unwrap().url,
        url(
            "us",
            "/profile/wow/character/area-52/thrall/status",
            "profile-us",
            "en_US"
        )
    );

    let index = client.get_pvp_seasons_index().await.unwrap();
    assert_eq!(index.current_season.and_then(|s| s.id), Some(38));
    assert_eq!(index.seasons.map(|s| s.len()), Some(2));

    let season = client
        .get_pvp_season(&PvpSeasonParams::new(38))
        .await
        .unwrap();
    assert_eq!(season.id, 38);

    client
        .get_pvp_leaderboard(&PvpLeaderboardParams::new(38, "rbg"))
        .await
        .unwrap();
    assert_eq!(
        transport.last_request().unwrap().url,
        url(
            "us",
            "/data/wow/pvp-season/38/pvp-leaderboard/rbg",
            "dynamic-us",
            "en_US"
        )
    );

    client
        .get_character_pvp_bracket(&CharacterPvpBracketParams::new("area-52", "thrall", "2v2"))
        .await
        .unwrap();
    assert!(transport.last_request().unwrap().url.contains("/pvp-bracket/2v2?"));
}

#[test]
fn test_build_without_token_provider_fails() {
    let err = WowClient::builder(Region::Tw, "zh_TW").build().unwrap_err();
    assert!(matches!(
        err,
        WowError::Validation(ValidationError::MissingTokenProvider)
    ));
    assert_eq!(err.to_string(), "tokenProvider is required");
}

/// The provider is consulted before every request and its latest token sent.
#[tokio::test]
async fn test_provider_called_per_request() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let transport = Arc::new(RecordingTransport::ok(json!({ "_links": links() })));

    let client = WowClient::builder(Region::Eu, "en_GB")
        .token_provider(token_fn(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst) + 1;
            async move { Ok(format!("token-{n}")) }
        }))
        .transport(Arc::clone(&transport))
        .build()
        .unwrap();

    client.get_pvp_seasons_index().await.unwrap();
    client.get_pvp_seasons_index().await.unwrap();
    client
        .call(Operation::PvpSeasonsIndex, &OperationParams::new())
        .await
        .unwrap();

    assert_eq!(calls.load(Ordering::SeqCst), 3);
    let authorizations: Vec<_> = transport
        .requests()
        .iter()
        .map(|r| r.header("Authorization").map(str::to_string))
        .collect();
    assert_eq!(
        authorizations,
        vec![
            Some("Bearer token-1".to_string()),
            Some("Bearer token-2".to_string()),
            Some("Bearer token-3".to_string()),
        ]
    );
}

/// A failing provider aborts the request before anything is sent.
#[tokio::test]
async fn test_provider_failure_sends_nothing() {
    let transport = Arc::new(RecordingTransport::ok(json!({})));
    let client = WowClient::builder(Region::Eu, "en_GB")
        .token_provider(token_fn(|| async {
            Err(armory_lib::AuthError::provider("offline"))
        }))
        .transport(Arc::clone(&transport))
        .build()
        .unwrap();

    let err = client.get_pvp_seasons_index().await.unwrap_err();
    assert!(matches!(err, WowError::Auth(_)));
    assert!(transport.requests().is_empty());
}

/// A transport that never reaches the server surfaces its own error.
#[tokio::test]
async fn test_connection_failure_propagates() {
    let transport = Arc::new(RecordingTransport::unreachable("connection refused"));
    let client = client_with(&transport, Region::Eu, "en_GB");

    let err = client.get_pvp_seasons_index().await.unwrap_err();
    assert!(matches!(
        err,
        WowError::Request(RequestError::Connection(ref m)) if m == "connection refused"
    ));
    assert_eq!(err.to_string(), "Connection failed: connection refused");
    assert_eq!(transport.requests().len(), 1);
    assert_eq!(transport.decode_count(), 0);
}

/// Under the default mapping every failure status is the same generic error.
#[tokio::test]
async fn test_generic_mapping_for_all_statuses() {
    for status in [400, 401, 403, 404, 429, 500, 503] {
        let transport = Arc::new(RecordingTransport::status(status));
        let client = client_with(&transport, Region::Eu, "en_GB");

        let err = client
            .get_character_profile(&CharacterParams::new("ravencrest", "nobody"))
            .await
            .unwrap_err();

        assert!(
            matches!(err, WowError::Request(RequestError::Failed { .. })),
            "status {status}: {err:?}"
        );
        assert_eq!(err.status_code(), None);
        assert_eq!(transport.decode_count(), 0, "status {status}");
    }
}

#[tokio::test]
async fn test_status_mapping_classifies() {
    let cases = [
        (404, ApiErrorKind::NotFound),
        (401, ApiErrorKind::Auth),
        (403, ApiErrorKind::Auth),
        (429, ApiErrorKind::RateLimit),
        (500, ApiErrorKind::Other),
    ];

    for (status, kind) in cases {
        let transport = Arc::new(RecordingTransport::status(status));
        let client = WowClient::builder(Region::Eu, "en_GB")
            .token_provider(StaticToken::new("abc"))
            .transport(Arc::clone(&transport))
            .error_mapping(ErrorMapping::ByStatus)
            .build()
            .unwrap();

        let err = client
            .get_pvp_season(&PvpSeasonParams::new(99))
            .await
            .unwrap_err();

        match err {
            WowError::Api(ref e) => {
                assert_eq!(e.kind(), kind);
                assert_eq!(e.status(), status);
                assert_eq!(e.path(), "/data/wow/pvp-season/99");
            }
            other => panic!("expected API error for {status}, got {other:?}"),
        }
        assert_eq!(err.status_code(), Some(status));
        assert_eq!(transport.decode_count(), 0);
    }
}

/// Sends requests to a local server instead of the regional host.
struct LocalTransport {
    base: String,
    inner: ReqwestTransport,
}

impl Transport for LocalTransport {
    fn get<'a>(
        &'a self,
        url: &'a str,
        headers: &'a Headers,
    ) -> BoxFuture<'a, Result<Box<dyn TransportResponse>, RequestError>> {
        Box::pin(async move {
            let local = url.replacen("https://eu.api.blizzard.com", &self.base, 1);
            self.inner.get(&local, headers).await
        })
    }
}

#[tokio::test]
async fn test_round_trip_through_reqwest() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/profile/wow/character/ravencrest/thrall/character-media"))
        .and(query_param("namespace", "profile-eu"))
        .and(query_param("locale", "en_GB"))
        .and(header("authorization", "Bearer abc"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "_links": links(),
            "character": { "id": 1, "name": "Thrall" },
            "assets": [
                { "key": "avatar", "value": "https://render.worldofwarcraft.com/a.jpg" }
            ]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = WowClient::builder(Region::Eu, "en_GB")
        .token_provider(StaticToken::new("abc"))
        .transport(LocalTransport {
            base: mock_server.uri(),
            inner: ReqwestTransport::new().unwrap(),
        })
        .build()
        .unwrap();

    let media = client
        .get_character_media(&CharacterParams::new("ravencrest", "thrall"))
        .await
        .unwrap();

    let assets = media.assets.unwrap();
    assert_eq!(assets[0].key.as_deref(), Some("avatar"));
}

#[tokio::test]
async fn test_round_trip_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "code": 404,
            "type": "BLZWEBAPI00000404",
            "detail": "Not Found"
        })))
        .mount(&mock_server)
        .await;

    let client = WowClient::builder(Region::Eu, "en_GB")
        .token_provider(StaticToken::new("abc"))
        .transport(LocalTransport {
            base: mock_server.uri(),
            inner: ReqwestTransport::new().unwrap(),
        })
        .error_mapping(ErrorMapping::ByStatus)
        .build()
        .unwrap();

    let err = client
        .get_character_profile(&CharacterParams::new("ravencrest", "nobody"))
        .await
        .unwrap_err();
    assert!(err.is_not_found());
}
