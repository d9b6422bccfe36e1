//! Firebase REST backend.
//!
//! Accounts and shared content live in Firestore (REST v1); credentials
//! live in the Identity Toolkit. All traffic goes through an injected
//! [`HttpClient`], so tests drive this adapter with
//! [`MockHttpClient`](crate::adapters::mock::MockHttpClient).
//!
//! | Operation | Request |
//! |-----------|---------|
//! | list accounts | `GET users` (paged) |
//! | find by email | `POST :runQuery`, `EQUAL` filter, `limit 1` |
//! | create account | `POST users` |
//! | delete account | `DELETE users/{id}` |
//! | read content | `GET content/sharedContent` (404 = absent) |
//! | create content | `PATCH content/sharedContent` |
//! | update content | `PATCH` with `updateMask.fieldPaths` |
//! | sign in | `accounts:signInWithPassword` |
//! | create credential | `accounts:signUp` |

pub mod codec;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::{Mutex, MutexGuard};

use crate::models::{Account, ContentUpdate, NewAccount, SharedContent};
use crate::traits::{Backend, BackendError, Headers, HttpClient, HttpError, Response};

pub const FIRESTORE_URL: &str = "https://firestore.googleapis.com/v1";
pub const IDENTITY_TOOLKIT_URL: &str = "https://identitytoolkit.googleapis.com/v1";

const USERS: &str = "users";
const SHARED_CONTENT: &str = "content/sharedContent";
const PAGE_SIZE: usize = 300;

/// Project coordinates and endpoints.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FirebaseOptions {
    pub api_key: String,
    pub project_id: String,
    pub firestore_url: String,
    pub identity_url: String,
}

impl FirebaseOptions {
    pub fn new(api_key: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            project_id: project_id.into(),
            firestore_url: FIRESTORE_URL.to_string(),
            identity_url: IDENTITY_TOOLKIT_URL.to_string(),
        }
    }

    /// Point at another Firestore endpoint, e.g. the local emulator.
    pub fn with_firestore_url(mut self, url: impl Into<String>) -> Self {
        self.firestore_url = url.into();
        self
    }

    /// Point at another Identity Toolkit endpoint.
    pub fn with_identity_url(mut self, url: impl Into<String>) -> Self {
        self.identity_url = url.into();
        self
    }

    /// Root of the default database's documents.
    pub fn documents_url(&self) -> String {
        format!(
            "{}/projects/{}/databases/(default)/documents",
            self.firestore_url.trim_end_matches('/'),
            self.project_id
        )
    }

    fn identity_endpoint(&self, method: &str) -> String {
        format!(
            "{}/accounts:{}?key={}",
            self.identity_url.trim_end_matches('/'),
            method,
            self.api_key
        )
    }
}

/// Signed-in credential.
#[derive(Debug, Clone)]
struct Session {
    email: String,
    id_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SignInResponse {
    id_token: String,
    #[serde(default)]
    email: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListDocumentsResponse {
    #[serde(default)]
    documents: Vec<Value>,
    #[serde(default)]
    next_page_token: Option<String>,
}

/// [`Backend`] over the Firestore and Identity Toolkit REST APIs.
pub struct FirebaseBackend<H: HttpClient> {
    http: H,
    options: FirebaseOptions,
    session: Mutex<Option<Session>>,
}

impl<H: HttpClient> FirebaseBackend<H> {
    pub fn new(http: H, options: FirebaseOptions) -> Self {
        Self {
            http,
            options,
            session: Mutex::new(None),
        }
    }

    pub fn options(&self) -> &FirebaseOptions {
        &self.options
    }

    /// Email of the signed-in credential, if any.
    pub fn session_email(&self) -> Option<String> {
        self.session().as_ref().map(|s| s.email.clone())
    }

    fn session(&self) -> MutexGuard<'_, Option<Session>> {
        self.session
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn document_url(&self, path: &str) -> String {
        format!("{}/{}", self.options.documents_url(), path)
    }

    /// JSON headers, with the session's bearer token when signed in.
    fn headers(&self) -> Headers {
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        if let Some(session) = self.session().as_ref() {
            headers.insert(
                "Authorization".to_string(),
                format!("Bearer {}", session.id_token),
            );
        }
        headers
    }

    async fn identity_call(
        &self,
        method: &str,
        email: &str,
        password: &str,
    ) -> Result<Response, BackendError> {
        let body = json!({
            "email": email,
            "password": password,
            "returnSecureToken": true,
        });
        let mut headers = Headers::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let response = self
            .http
            .post(&self.options.identity_endpoint(method), &body.to_string(), &headers)
            .await
            .map_err(transport_error)?;
        if response.is_success() {
            Ok(response)
        } else {
            Err(identity_error(&response, email))
        }
    }
}

#[async_trait]
impl<H: HttpClient> Backend for FirebaseBackend<H> {
    async fn get_accounts(&self) -> Result<Vec<Account>, BackendError> {
        let mut accounts = Vec::new();
        let mut page_token: Option<String> = None;
        loop {
            let mut url = format!("{}?pageSize={}", self.document_url(USERS), PAGE_SIZE);
            if let Some(token) = &page_token {
                url.push_str("&pageToken=");
                url.push_str(token);
            }
            let response = self
                .http
                .get(&url, &self.headers())
                .await
                .map_err(transport_error)?;
            let page: ListDocumentsResponse = parse(&expect_success(response, USERS)?)?;
            for document in &page.documents {
                accounts.push(codec::account_from_document(document)?);
            }
            match page.next_page_token.filter(|t| !t.is_empty()) {
                Some(token) => page_token = Some(token),
                None => break,
            }
        }
        tracing::debug!(count = accounts.len(), "listed account documents");
        Ok(accounts)
    }

    async fn find_account_by_email(&self, email: &str) -> Result<Option<Account>, BackendError> {
        let query = json!({
            "structuredQuery": {
                "from": [{ "collectionId": USERS }],
                "where": {
                    "fieldFilter": {
                        "field": { "fieldPath": "email" },
                        "op": "EQUAL",
                        "value": { "stringValue": email },
                    }
                },
                "limit": 1,
            }
        });
        let url = format!("{}:runQuery", self.options.documents_url());
        let response = self
            .http
            .post(&url, &query.to_string(), &self.headers())
            .await
            .map_err(transport_error)?;
        let rows: Vec<Value> = parse(&expect_success(response, USERS)?)?;

        // Rows without a `document` only carry a read time
        rows.iter()
            .find_map(|row| row.get("document"))
            .map(codec::account_from_document)
            .transpose()
    }

    async fn create_account_document(&self, account: &NewAccount) -> Result<String, BackendError> {
        let body = json!({ "fields": codec::to_fields(account)? });
        let response = self
            .http
            .post(&self.document_url(USERS), &body.to_string(), &self.headers())
            .await
            .map_err(transport_error)?;
        let document: Value = parse(&expect_success(response, USERS)?)?;
        codec::document_id(&document)
    }

    async fn delete_account_document(&self, id: &str) -> Result<(), BackendError> {
        let path = format!("{}/{}", USERS, id);
        let response = self
            .http
            .delete(&self.document_url(&path), &self.headers())
            .await
            .map_err(transport_error)?;
        // Already gone is as good as deleted
        if response.status == 404 {
            return Ok(());
        }
        expect_success(response, &path)?;
        Ok(())
    }

    async fn get_shared_content(&self) -> Result<Option<SharedContent>, BackendError> {
        let response = self
            .http
            .get(&self.document_url(SHARED_CONTENT), &self.headers())
            .await
            .map_err(transport_error)?;
        if response.status == 404 {
            return Ok(None);
        }
        let document: Value = parse(&expect_success(response, SHARED_CONTENT)?)?;
        codec::from_document(&document).map(Some)
    }

    async fn create_shared_content(&self, content: &SharedContent) -> Result<(), BackendError> {
        let body = json!({ "fields": codec::to_fields(content)? });
        let response = self
            .http
            .patch(
                &self.document_url(SHARED_CONTENT),
                &body.to_string(),
                &self.headers(),
            )
            .await
            .map_err(transport_error)?;
        expect_success(response, SHARED_CONTENT)?;
        Ok(())
    }

    async fn update_shared_content(&self, update: &ContentUpdate) -> Result<(), BackendError> {
        if update.is_empty() {
            return Ok(());
        }
        let mut fields = serde_json::Map::new();
        if let Some(faqs) = &update.faqs {
            fields.insert("faqs".to_string(), encode(faqs)?);
        }
        if let Some(materiais) = &update.materiais {
            fields.insert("materiais".to_string(), encode(materiais)?);
        }

        let mut url = self.document_url(SHARED_CONTENT);
        url.push_str("?currentDocument.exists=true");
        for path in update.field_paths() {
            url.push_str("&updateMask.fieldPaths=");
            url.push_str(path);
        }

        let body = json!({ "fields": fields });
        let response = self
            .http
            .patch(&url, &body.to_string(), &self.headers())
            .await
            .map_err(transport_error)?;
        expect_success(response, SHARED_CONTENT)?;
        Ok(())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<(), BackendError> {
        let response = self
            .identity_call("signInWithPassword", email, password)
            .await?;
        let signed_in: SignInResponse = parse(&response)?;
        tracing::debug!(%email, "identity session opened");
        *self.session() = Some(Session {
            email: signed_in.email.unwrap_or_else(|| email.to_string()),
            id_token: signed_in.id_token,
        });
        Ok(())
    }

    async fn sign_out(&self) -> Result<(), BackendError> {
        // Identity Toolkit sessions are bearer tokens; dropping it is enough.
        *self.session() = None;
        Ok(())
    }

    async fn create_credential(&self, email: &str, password: &str) -> Result<(), BackendError> {
        // The returned token belongs to the new user and is discarded so
        // the administrator stays signed in.
        self.identity_call("signUp", email, password).await?;
        tracing::debug!(%email, "credential created");
        Ok(())
    }
}

fn encode<T: serde::Serialize>(value: &T) -> Result<Value, BackendError> {
    let plain = serde_json::to_value(value).map_err(|e| BackendError::Decode(e.to_string()))?;
    Ok(codec::encode_value(&plain))
}

fn parse<T: serde::de::DeserializeOwned>(response: &Response) -> Result<T, BackendError> {
    response
        .json()
        .map_err(|e| BackendError::Decode(e.to_string()))
}

fn transport_error(err: HttpError) -> BackendError {
    BackendError::Transport(err.to_string())
}

/// `{"error": {"message": ..., "status": ...}}` as returned by both APIs.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: ErrorDetail,
}

#[derive(Debug, Default, Deserialize)]
struct ErrorDetail {
    #[serde(default)]
    message: String,
    #[serde(default)]
    status: String,
}

fn error_detail(response: &Response) -> ErrorDetail {
    response
        .json::<ErrorBody>()
        .map(|body| body.error)
        .unwrap_or_else(|_| ErrorDetail {
            message: response.text().unwrap_or_default(),
            status: String::new(),
        })
}

/// Map a Firestore error status.
fn expect_success(response: Response, path: &str) -> Result<Response, BackendError> {
    if response.is_success() {
        return Ok(response);
    }
    let detail = error_detail(&response);
    Err(match response.status {
        404 => BackendError::NotFound {
            path: path.to_string(),
        },
        401 | 403 => BackendError::PermissionDenied {
            message: detail.message,
        },
        _ if detail.status == "PERMISSION_DENIED" => BackendError::PermissionDenied {
            message: detail.message,
        },
        status => BackendError::Status {
            status,
            message: detail.message,
        },
    })
}

/// Map an Identity Toolkit error code.
///
/// Messages look like `EMAIL_EXISTS` or `WEAK_PASSWORD : Password should
/// be at least 6 characters`.
fn identity_error(response: &Response, email: &str) -> BackendError {
    let detail = error_detail(response);
    let code = detail
        .message
        .split(" : ")
        .next()
        .unwrap_or_default()
        .trim();
    match code {
        "EMAIL_EXISTS" => BackendError::CredentialAlreadyExists {
            email: email.to_string(),
        },
        "EMAIL_NOT_FOUND" => BackendError::UserNotFound,
        "INVALID_PASSWORD" | "INVALID_LOGIN_CREDENTIALS" => BackendError::WrongPassword,
        _ => BackendError::Status {
            status: response.status,
            message: detail.message,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::{MockHttpClient, MockResponse};
    use crate::models::{FaqEntry, FaqMap};

    const DOCS: &str = "https://firestore.googleapis.com/v1/projects/demo/databases/(default)/documents";

    fn backend() -> (FirebaseBackend<MockHttpClient>, MockHttpClient) {
        let http = MockHttpClient::new();
        let backend = FirebaseBackend::new(http.clone(), FirebaseOptions::new("key", "demo"));
        (backend, http)
    }

    fn signed_in() -> (FirebaseBackend<MockHttpClient>, MockHttpClient) {
        let (backend, http) = backend();
        *backend.session() = Some(Session {
            email: "admin@x.com".to_string(),
            id_token: "tok".to_string(),
        });
        (backend, http)
    }

    #[test]
    fn test_documents_url() {
        let options = FirebaseOptions::new("k", "demo").with_firestore_url("http://localhost:8080/v1/");
        assert_eq!(
            options.documents_url(),
            "http://localhost:8080/v1/projects/demo/databases/(default)/documents"
        );
    }

    #[tokio::test]
    async fn test_sign_in_stores_token() {
        let (backend, http) = backend();
        http.set_response(
            "POST",
            "https://identitytoolkit.googleapis.com/v1/accounts:signInWithPassword?key=key",
            MockResponse::json(200, json!({"idToken": "tok", "email": "ana@x.com"})),
        );

        backend.sign_in("ana@x.com", "pw").await.unwrap();
        assert_eq!(backend.session_email().as_deref(), Some("ana@x.com"));
        assert_eq!(
            backend.headers().get("Authorization").map(String::as_str),
            Some("Bearer tok")
        );

        backend.sign_out().await.unwrap();
        assert!(backend.session_email().is_none());
    }

    #[tokio::test]
    async fn test_identity_error_codes() {
        let (backend, http) = backend();
        for (message, expected) in [
            ("EMAIL_NOT_FOUND", BackendError::UserNotFound),
            ("INVALID_PASSWORD", BackendError::WrongPassword),
            ("INVALID_LOGIN_CREDENTIALS", BackendError::WrongPassword),
        ] {
            http.set_default_response(MockResponse::json(
                400,
                json!({"error": {"code": 400, "message": message}}),
            ));
            assert_eq!(backend.sign_in("a@x.com", "pw").await, Err(expected));
        }

        http.set_default_response(MockResponse::json(
            400,
            json!({"error": {"code": 400, "message": "EMAIL_EXISTS"}}),
        ));
        assert_eq!(
            backend.create_credential("a@x.com", "pw").await,
            Err(BackendError::CredentialAlreadyExists {
                email: "a@x.com".to_string()
            })
        );

        http.set_default_response(MockResponse::json(
            400,
            json!({"error": {"code": 400, "message": "WEAK_PASSWORD : Password should be at least 6 characters"}}),
        ));
        assert!(matches!(
            backend.create_credential("a@x.com", "pw").await,
            Err(BackendError::Status { status: 400, .. })
        ));
    }

    #[tokio::test]
    async fn test_create_credential_keeps_session() {
        let (backend, http) = signed_in();
        http.set_default_response(MockResponse::json(200, json!({"idToken": "other"})));

        backend.create_credential("new@x.com", "pw123456").await.unwrap();
        assert_eq!(backend.session_email().as_deref(), Some("admin@x.com"));
    }

    #[tokio::test]
    async fn test_find_account_runs_query() {
        let (backend, http) = backend();
        http.set_response(
            "POST",
            &format!("{}:runQuery", DOCS),
            MockResponse::json(
                200,
                json!([{
                    "document": {
                        "name": format!("{}/users/u1", DOCS),
                        "fields": {
                            "nome": {"stringValue": "Ana"},
                            "email": {"stringValue": "ana@x.com"},
                            "senha": {"stringValue": "pw"},
                            "role": {"stringValue": "Assistente"}
                        }
                    },
                    "readTime": "2024-01-01T00:00:00Z"
                }]),
            ),
        );

        let account = backend.find_account_by_email("ana@x.com").await.unwrap().unwrap();
        assert_eq!(account.id, "u1");
        assert!(account.is_admin());

        let query = http.get_requests()[0].json();
        let filter = &query["structuredQuery"]["where"]["fieldFilter"];
        assert_eq!(filter["op"], "EQUAL");
        assert_eq!(filter["value"]["stringValue"], "ana@x.com");
        assert_eq!(query["structuredQuery"]["limit"], 1);
    }

    #[tokio::test]
    async fn test_find_account_without_match() {
        let (backend, http) = backend();
        http.set_default_response(MockResponse::json(
            200,
            json!([{"readTime": "2024-01-01T00:00:00Z"}]),
        ));
        assert_eq!(backend.find_account_by_email("x@x.com").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_get_accounts_follows_pages() {
        let (backend, http) = signed_in();
        let doc = |id: &str, email: &str| {
            json!({
                "name": format!("{}/users/{}", DOCS, id),
                "fields": {"email": {"stringValue": email}}
            })
        };
        http.set_response(
            "GET",
            &format!("{}/users?pageSize=300", DOCS),
            MockResponse::json(200, json!({"documents": [doc("a", "a@x.com")], "nextPageToken": "p2"})),
        );
        http.set_response(
            "GET",
            &format!("{}/users?pageSize=300&pageToken=p2", DOCS),
            MockResponse::json(200, json!({"documents": [doc("b", "b@x.com")]})),
        );

        let accounts = backend.get_accounts().await.unwrap();
        let ids: Vec<_> = accounts.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert!(http
            .get_requests()
            .iter()
            .all(|r| r.headers.get("Authorization").map(String::as_str) == Some("Bearer tok")));
    }

    #[tokio::test]
    async fn test_missing_shared_content_is_none() {
        let (backend, http) = signed_in();
        http.set_default_response(MockResponse::json(
            404,
            json!({"error": {"code": 404, "status": "NOT_FOUND", "message": "missing"}}),
        ));
        assert_eq!(backend.get_shared_content().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_update_sends_field_mask() {
        let (backend, http) = signed_in();
        http.set_default_response(MockResponse::json(200, json!({})));

        let mut faqs = FaqMap::new();
        faqs.insert("Amil".to_string(), vec![FaqEntry::new("q", "a")]);
        backend
            .update_shared_content(&ContentUpdate::faqs(faqs))
            .await
            .unwrap();

        let request = &http.requests_with_method("PATCH")[0];
        assert_eq!(
            request.url,
            format!(
                "{}/content/sharedContent?currentDocument.exists=true&updateMask.fieldPaths=faqs",
                DOCS
            )
        );
        let body = request.json();
        assert!(body["fields"].get("materiais").is_none());
        assert_eq!(
            body["fields"]["faqs"]["mapValue"]["fields"]["Amil"]["arrayValue"]["values"][0]
                ["mapValue"]["fields"]["pergunta"]["stringValue"],
            "q"
        );
    }

    #[tokio::test]
    async fn test_create_account_returns_id() {
        let (backend, http) = signed_in();
        http.set_response(
            "POST",
            &format!("{}/users", DOCS),
            MockResponse::json(200, json!({"name": format!("{}/users/new-id", DOCS)})),
        );
        let id = backend
            .create_account_document(&NewAccount::corretor("Ana", "ana@x.com", "pw"))
            .await
            .unwrap();
        assert_eq!(id, "new-id");
        assert_eq!(
            http.get_requests()[0].json()["fields"]["role"]["stringValue"],
            "Corretor"
        );
    }

    #[tokio::test]
    async fn test_delete_missing_document_succeeds() {
        let (backend, http) = signed_in();
        http.set_default_response(MockResponse::json(
            404,
            json!({"error": {"status": "NOT_FOUND", "message": "No document to delete"}}),
        ));

        backend.delete_account_document("gone").await.unwrap();
        assert_eq!(
            http.get_requests()[0].url,
            format!("{}/users/gone", DOCS)
        );
    }

    #[tokio::test]
    async fn test_status_mapping() {
        let (backend, http) = signed_in();
        http.set_default_response(MockResponse::json(
            403,
            json!({"error": {"code": 403, "status": "PERMISSION_DENIED", "message": "Missing or insufficient permissions."}}),
        ));
        assert!(matches!(
            backend.delete_account_document("u1").await,
            Err(BackendError::PermissionDenied { .. })
        ));

        http.set_default_response(MockResponse::Error(HttpError::Connect(
            "refused".to_string(),
        )));
        assert!(matches!(
            backend.get_accounts().await,
            Err(BackendError::Transport(_))
        ));

        http.set_default_response(MockResponse::json(503, json!({"error": {"message": "busy"}})));
        assert_eq!(
            backend.get_shared_content().await,
            Err(BackendError::Status {
                status: 503,
                message: "busy".to_string()
            })
        );
    }
}
