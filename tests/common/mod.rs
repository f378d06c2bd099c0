use std::process::{Child, Command, Stdio};
use std::sync::OnceLock;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use chrono::Utc;
use reqwest::StatusCode;
use uuid::Uuid;

use boutique_api::auth::{mint_token, Claims};

/// Signing secret handed to the spawned server; tokens minted with
/// [`token_for`] validate against it.
pub const JWT_SECRET: &str = "integration-test-secret";

static SERVER: OnceLock<Option<TestServer>> = OnceLock::new();

pub struct TestServer {
    pub base_url: String,
    #[allow(dead_code)]
    child: Child,
}

impl TestServer {
    fn spawn(database_url: &str) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        // Spawn the already-built binary to keep start fast during tests
        let mut cmd = Command::new("target/debug/boutique-api");
        cmd.env("BOUTIQUE_API_PORT", port.to_string())
            .env("DATABASE_URL", database_url)
            .env("JWT_SECRET", JWT_SECRET)
            .stdin(Stdio::null())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());

        let child = cmd.spawn().context("failed to spawn server binary")?;
        Ok(Self { base_url, child })
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let client = reqwest::Client::new();
        let deadline = Instant::now() + timeout;
        loop {
            if Instant::now() > deadline {
                break;
            }
            let url = format!("{}/health", self.base_url);
            if let Ok(resp) = client.get(&url).send().await {
                // The resource tests need a live database, so wait for a
                // healthy response rather than any response
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(150)).await;
        }
        anyhow::bail!(
            "server did not become ready on {} within {:?}",
            self.base_url,
            timeout
        )
    }
}

/// Spawn (once) a server wired to TEST_DATABASE_URL. Returns None when the
/// variable is unset so suites can skip cleanly on machines without a
/// database.
pub async fn ensure_server() -> Result<Option<&'static TestServer>> {
    let Ok(database_url) = std::env::var("TEST_DATABASE_URL") else {
        return Ok(None);
    };

    let server = SERVER.get_or_init(|| TestServer::spawn(&database_url).ok());
    match server {
        Some(server) => {
            server.wait_ready(Duration::from_secs(10)).await?;
            Ok(Some(server))
        }
        None => anyhow::bail!("failed to spawn server binary"),
    }
}

/// Mint a valid one-hour credential for the given subject
pub fn token_for(sub: Uuid) -> Result<String> {
    let claims = Claims {
        sub,
        iat: Utc::now().timestamp(),
        exp: (Utc::now() + chrono::Duration::hours(1)).timestamp(),
    };
    Ok(mint_token(&claims, JWT_SECRET)?)
}
