//! The panel driving the Firebase adapter over canned HTTP responses.

use std::sync::Arc;

use serde_json::{json, Value};

use painel::adapters::mock::{MockHttpClient, MockResponse};
use painel::adapters::{FirebaseBackend, FirebaseOptions};
use painel::app::Panel;
use painel::error::{AuthError, PainelError};
use painel::notifications::RecordingSink;
use painel::state::StateContainer;
use painel::traits::{RecordingRenderer, Severity};

const DOCS: &str =
    "https://firestore.googleapis.com/v1/projects/painel-test/databases/(default)/documents";
const SIGN_IN: &str =
    "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=test-key";

fn admin_document() -> Value {
    json!({
        "name": format!("{}/users/admin-id", DOCS),
        "fields": {
            "nome": {"stringValue": "Assistente Principal"},
            "email": {"stringValue": "assistente@painel.com"},
            "senha": {"stringValue": "admin123"},
            "role": {"stringValue": "Assistente"}
        }
    })
}

struct Fixture {
    panel: Panel,
    http: MockHttpClient,
    sink: Arc<RecordingSink>,
}

/// A project holding the administrator and an empty content document.
fn fixture() -> Fixture {
    let http = MockHttpClient::new();
    http.set_response(
        "POST",
        &format!("{}:runQuery", DOCS),
        MockResponse::json(200, json!([{"document": admin_document()}])),
    );
    http.set_response(
        "POST",
        SIGN_IN,
        MockResponse::json(200, json!({"idToken": "id-token", "email": "assistente@painel.com"})),
    );
    http.set_response(
        "GET",
        &format!("{}/users", DOCS),
        MockResponse::json(200, json!({"documents": [admin_document()]})),
    );
    http.set_response(
        "GET",
        &format!("{}/content/sharedContent", DOCS),
        MockResponse::json(
            200,
            json!({
                "name": format!("{}/content/sharedContent", DOCS),
                "fields": {
                    "faqs": {"mapValue": {}},
                    "materiais": {"mapValue": {}}
                }
            }),
        ),
    );
    http.set_response("PATCH", &format!("{}/content/sharedContent", DOCS), MockResponse::json(200, json!({})));

    let backend = FirebaseBackend::new(http.clone(), FirebaseOptions::new("test-key", "painel-test"));
    let sink = Arc::new(RecordingSink::new());
    let store = Arc::new(StateContainer::new(Arc::new(RecordingRenderer::new())));
    let panel = Panel::new(store, Arc::new(backend), sink.clone());
    Fixture { panel, http, sink }
}

#[tokio::test]
async fn test_login_queries_then_signs_in_then_reloads() {
    let f = fixture();

    f.panel
        .login("assistente@painel.com", "admin123")
        .await
        .unwrap();

    let requests = f.http.get_requests();
    let order: Vec<_> = requests
        .iter()
        .map(|r| (r.method.as_str(), r.url.as_str()))
        .collect();
    assert_eq!(order[0], ("POST", format!("{}:runQuery", DOCS).as_str()));
    assert_eq!(order[1], ("POST", SIGN_IN));
    assert_eq!(order[2], ("GET", format!("{}/users?pageSize=300", DOCS).as_str()));
    assert_eq!(order[3], ("GET", format!("{}/content/sharedContent", DOCS).as_str()));

    // Reads after sign-in carry the session token
    assert_eq!(
        requests[2].headers.get("Authorization").map(String::as_str),
        Some("Bearer id-token")
    );

    let state = f.panel.state();
    let user = state.current_user.expect("signed in");
    assert_eq!(user.id, "admin-id");
    assert!(user.is_admin());
    assert!(state.data_loaded);
}

#[tokio::test]
async fn test_wrong_password_never_reaches_identity_service() {
    let f = fixture();

    let err = f
        .panel
        .login("assistente@painel.com", "nope")
        .await
        .unwrap_err();

    assert_eq!(err, PainelError::Auth(AuthError::IncorrectPassword));
    assert_eq!(f.http.get_requests().len(), 1);
    assert_eq!(f.sink.last().map(|(_, s)| s), Some(Severity::Error));
}

#[tokio::test]
async fn test_add_material_patches_only_materials() {
    let f = fixture();
    f.panel
        .login("assistente@painel.com", "admin123")
        .await
        .unwrap();
    f.http.clear_requests();

    f.panel
        .add_material("Amil", "Tabela", "example.com/tabela.pdf")
        .await
        .unwrap();

    let patches = f.http.requests_with_method("PATCH");
    assert_eq!(patches.len(), 1);
    let patch = &patches[0];
    assert!(patch.url.contains("currentDocument.exists=true"));
    assert!(patch.url.contains("updateMask.fieldPaths=materiais"));
    assert!(!patch.url.contains("updateMask.fieldPaths=faqs"));

    let body = patch.json();
    let entry = &body["fields"]["materiais"]["mapValue"]["fields"]["Amil"]["arrayValue"]["values"][0]
        ["mapValue"]["fields"];
    assert_eq!(entry["description"]["stringValue"], "Tabela");
    assert_eq!(entry["link"]["stringValue"], "https://example.com/tabela.pdf");

    // The mutation is followed by a reload
    assert_eq!(f.http.requests_with_method("GET").len(), 2);
}

#[tokio::test]
async fn test_missing_content_document_is_created() {
    let f = fixture();
    f.http.set_response(
        "GET",
        &format!("{}/content/sharedContent", DOCS),
        MockResponse::json(404, json!({"error": {"status": "NOT_FOUND", "message": "missing"}})),
    );

    f.panel
        .login("assistente@painel.com", "admin123")
        .await
        .unwrap();

    let patches = f.http.requests_with_method("PATCH");
    assert_eq!(patches.len(), 1);
    assert!(!patches[0].url.contains("updateMask"));
    assert!(f.panel.state().faqs.is_empty());
}
