use std::collections::HashMap;
use std::sync::Arc;
use std::sync::RwLock;

use async_trait::async_trait;
use auth::Authenticator;
use auth::ExpirationPolicy;
use auth::JwtHandler;
use auth::PasswordHasher;
use session_service::config::RunMode;
use session_service::domain::session::models::CredentialRecord;
use session_service::domain::session::models::UserId;
use session_service::domain::session::ports::CredentialRepository;
use session_service::domain::session::service::SessionService;
use session_service::inbound::http::router::create_router;
use session_service::session::errors::SessionError;

pub const JWT_SECRET: &[u8] = b"test-secret-key-for-jwt-signing-at-least-32-bytes";

/// Credential store kept in memory, keyed by email
#[derive(Default)]
pub struct InMemoryCredentialRepository {
    records: RwLock<HashMap<String, CredentialRecord>>,
    unavailable: RwLock<bool>,
}

impl InMemoryCredentialRepository {
    pub fn insert(&self, record: CredentialRecord) {
        self.records
            .write()
            .unwrap()
            .insert(record.email.clone(), record);
    }

    /// Make every lookup fail as if the database were down
    pub fn set_unavailable(&self, unavailable: bool) {
        *self.unavailable.write().unwrap() = unavailable;
    }
}

#[async_trait]
impl CredentialRepository for InMemoryCredentialRepository {
    async fn find_by_email(
        &self,
        email: &str,
    ) -> Result<Option<CredentialRecord>, SessionError> {
        if *self.unavailable.read().unwrap() {
            return Err(SessionError::DatabaseError(
                "Connection refused (os error 111)".to_string(),
            ));
        }

        Ok(self.records.read().unwrap().get(email).cloned())
    }
}

/// Test application that spawns a real server
pub struct TestApp {
    pub address: String,
    pub repository: Arc<InMemoryCredentialRepository>,
    pub api_client: reqwest::Client,
    pub jwt_handler: JwtHandler,
    password_hasher: PasswordHasher,
}

impl TestApp {
    /// Spawn the application in production mode
    pub async fn spawn() -> Self {
        Self::spawn_with(RunMode::Production).await
    }

    /// Spawn the application in a background task and return TestApp
    pub async fn spawn_with(run_mode: RunMode) -> Self {
        // Use random port (0 = OS assigns)
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind random port");
        let port = listener.local_addr().unwrap().port();
        let address = format!("http://127.0.0.1:{}", port);

        let repository = Arc::new(InMemoryCredentialRepository::default());
        let password_hasher = PasswordHasher::with_cost(4);

        let authenticator = Arc::new(
            Authenticator::new(
                JWT_SECRET,
                ExpirationPolicy::default(),
                password_hasher.clone(),
            )
            .expect("Failed to create authenticator"),
        );

        let session_service = Arc::new(SessionService::new(
            Arc::clone(&repository),
            authenticator,
        ));

        let router = create_router(session_service, run_mode);

        tokio::spawn(async move {
            axum::serve(listener, router).await.expect("Server error");
        });

        Self {
            address,
            repository,
            api_client: reqwest::Client::new(),
            jwt_handler: JwtHandler::new(JWT_SECRET),
            password_hasher,
        }
    }

    /// Register a credential record with a bcrypt hash of `password`
    pub fn add_user(&self, id: i64, email: &str, password: &str, role: &str) {
        self.repository.insert(CredentialRecord {
            id: UserId(id),
            email: email.to_string(),
            password_hash: self
                .password_hasher
                .hash(password)
                .expect("Failed to hash password"),
            role: role.to_string(),
            firstname: Some("Marie".to_string()),
            name: Some("Curie".to_string()),
        });
    }

    /// Helper to make GET request
    pub fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.get(&format!("{}{}", self.address, path))
    }

    /// Helper to make POST request
    pub fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.api_client.post(&format!("{}{}", self.address, path))
    }

    /// Helper to make GET request with Bearer token
    pub fn get_authenticated(&self, path: &str, token: &str) -> reqwest::RequestBuilder {
        self.get(path).bearer_auth(token)
    }
}
