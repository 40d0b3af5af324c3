//! Interactive OTP login against a running Matchbook backend.
//!
//! ```sh
//! MATCHBOOK_API_URL=http://localhost:8000 cargo run -p auth-flow --example login
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use auth_flow::{AuthSession, LoginFlow, LoginStep};
use matchbook_client::MatchbookClient;

fn prompt(label: &str) -> io::Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "auth_flow=info,matchbook_client=debug".into()),
        )
        .init();

    let gateway = Arc::new(MatchbookClient::from_env()?);
    let session = AuthSession::new();
    let mut flow = LoginFlow::new(gateway, session.clone());

    while flow.step() == LoginStep::AwaitingEmail {
        let email = prompt("Email")?;
        if let Err(err) = flow.submit_email(&email).await {
            eprintln!("{err}");
        }
    }

    while flow.step() == LoginStep::AwaitingCode {
        let code = prompt("Code")?;
        if let Err(err) = flow.submit_code(&code).await {
            eprintln!("{err}");
        }
    }

    if let Some(profile) = session.current() {
        println!("Signed in as {} <{}>", profile.name, profile.email);
    }
    Ok(())
}
