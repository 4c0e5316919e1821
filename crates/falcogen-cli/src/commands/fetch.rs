use std::path::PathBuf;

use falcogen_fsops::fetch_and_enumerate;

use crate::client::{AppContext, CliResult};

pub(crate) async fn handle_fetch(ctx: &AppContext) -> CliResult<Vec<PathBuf>> {
    let mut files = fetch_and_enumerate(&ctx.client, &ctx.source).await?;
    files.sort();
    Ok(files)
}
