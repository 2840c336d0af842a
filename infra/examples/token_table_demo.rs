//! Example: saving and fetching provider tokens
//!
//! Creates the token table if needed, saves a bearer and a refresh token,
//! then reads the current pair back and reports whether each has expired.
//!
//! Against DynamoDB Local:
//!   docker run -p 8000:8000 amazon/dynamodb-local
//!   AWS_REGION=us-east-1 AUTH_TABLE_ENDPOINT_URL=http://localhost:8000 \
//!   AUTH_TABLE_ACCESS_KEY_ID=local AUTH_TABLE_SECRET_ACCESS_KEY=local \
//!   cargo run -p at_infra --example token_table_demo

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let services = at_infra::initialize()
        .await
        .context("failed to initialize infrastructure")?;
    let store = &services.token_store;

    if store.repository().create_table_if_missing().await? {
        info!("Created table {}", store.repository().table_name());
    }

    store.save_bearer("demo-bearer-token", 3600).await?;
    store.save_refresh("demo-refresh-token", 30).await?;

    let (bearer, refresh) = store.fetch(store.provider()).await?.into_tuple();

    for token in [&bearer, &refresh] {
        if token.is_empty() {
            info!("No {} token stored", token.token_type);
            continue;
        }
        info!(
            "{} token {} created at {}, expires at {}, expired: {}",
            token.token_type,
            token.token,
            token.created_at,
            token.expires_at(),
            token.is_expired()
        );
    }

    Ok(())
}
