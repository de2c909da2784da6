use crate::cli::ListArgs;
use crate::client::UsersClient;
use crate::config::Config;
use crate::error::Result;
use crate::output;
use crate::types::{Layout, User};
use crate::view::{self, ListView};

/// One fetch/render cycle: the view returned replaces `previous` entirely.
pub async fn refresh(
    client: &UsersClient,
    previous: ListView,
    layout: Layout,
) -> Result<(ListView, Vec<User>)> {
    let users = client.fetch_users().await?;
    let view = view::render(previous, &users, layout);
    tracing::debug!(items = view.len(), %layout, "rendered users");
    Ok((view, users))
}

pub async fn list(config: &Config, args: ListArgs) -> Result<()> {
    let endpoint = config.resolve_endpoint(args.url.as_deref())?;
    let layout = config.resolve_layout(args.layout);
    tracing::debug!(%endpoint, %layout, "listing users");
    let client = UsersClient::new(endpoint);

    let (view, users) = refresh(&client, ListView::default(), layout).await?;
    if view.is_empty() {
        tracing::info!("no users returned");
    }
    output::print_users(&view, &users)?;

    Ok(())
}
