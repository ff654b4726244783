//! Shared test harness for integration tests.
//!
//! Provides [`TestHarness`] which creates an in-memory DB, default config,
//! and a full [`AppContext`]. The [`TestHarness::with_server`] constructor
//! starts Axum on a random port for HTTP-level testing.

#![allow(dead_code)]

use std::net::SocketAddr;

use serde_json::{json, Value};
use tb_core::config::Config;
use tb_db::pool::{init_memory_pool, init_pool, DbPool};
use tb_server::context::AppContext;

/// Test harness wrapping an [`AppContext`] backed by an in-memory (or
/// temp-file) database.
pub struct TestHarness {
    pub ctx: AppContext,
    pub db: DbPool,
    pub client: reqwest::Client,
    _dir: Option<tempfile::TempDir>,
}

impl TestHarness {
    /// Create a new harness with default configuration and in-memory DB.
    pub fn new() -> Self {
        let db = init_memory_pool().expect("failed to create in-memory pool");
        Self::from_pool(db, None)
    }

    /// Create a harness backed by a WAL database file in a temp directory.
    ///
    /// Needed for concurrent writers: shared-cache in-memory databases
    /// report table locks immediately instead of waiting.
    pub fn with_file_db() -> Self {
        let dir = tempfile::tempdir().expect("failed to create temp dir");
        let path = dir.path().join("teamboard.db");
        let db = init_pool(&path.to_string_lossy()).expect("failed to create file pool");
        Self::from_pool(db, Some(dir))
    }

    fn from_pool(db: DbPool, dir: Option<tempfile::TempDir>) -> Self {
        let ctx = AppContext::new(db.clone(), Config::default());
        Self {
            ctx,
            db,
            client: reqwest::Client::new(),
            _dir: dir,
        }
    }

    /// Start an Axum server on a random port and return the harness together
    /// with the bound socket address.
    pub async fn with_server() -> (Self, SocketAddr) {
        Self::new().serve().await
    }

    /// Like [`TestHarness::with_server`] but backed by a database file.
    pub async fn with_file_server() -> (Self, SocketAddr) {
        Self::with_file_db().serve().await
    }

    async fn serve(self) -> (Self, SocketAddr) {
        let ctx = self.ctx.clone();

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind random port");
        let addr = listener.local_addr().expect("failed to get local addr");

        tokio::spawn(async move {
            tb_server::serve(listener, ctx, std::future::pending()).await.ok();
        });

        (self, addr)
    }

    /// Get a database connection from the pool.
    pub fn conn(&self) -> tb_db::pool::PooledConnection {
        tb_db::pool::get_conn(&self.db).expect("failed to get db connection")
    }

    /// Insert a user directly, bypassing HTTP.
    pub fn seed_user(&self, id: &str, name: &str, score: i64, team: &str) {
        let user = tb_db::models::User {
            id: id.into(),
            name: name.into(),
            score,
            team: team.into(),
        };
        tb_db::queries::users::create_user(&self.conn(), &user).expect("failed to seed user");
    }

    /// Read a user's score directly from the database.
    pub fn stored_score(&self, id: &str) -> Option<i64> {
        tb_db::queries::users::get_score(&self.conn(), id).expect("failed to read score")
    }

    /// POST a JSON body and return the response.
    pub async fn post(&self, addr: SocketAddr, path: &str, body: Value) -> reqwest::Response {
        self.client
            .post(format!("http://{addr}{path}"))
            .json(&body)
            .send()
            .await
            .expect("request failed")
    }

    /// GET a path and return the response.
    pub async fn get(&self, addr: SocketAddr, path: &str) -> reqwest::Response {
        self.client
            .get(format!("http://{addr}{path}"))
            .send()
            .await
            .expect("request failed")
    }

    /// Sign up a user through the API, asserting success.
    pub async fn signup(&self, addr: SocketAddr, id: &str, name: &str, score: i64, team: &str) {
        let resp = self
            .post(
                addr,
                "/signup",
                json!({ "id": id, "name": name, "score": score, "team": team }),
            )
            .await;
        assert_eq!(resp.status(), 201, "signup of {id} failed");
    }
}
