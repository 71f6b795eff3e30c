//! Filesystem helpers.

use crate::error::Result;
use std::path::Path;
use tokio::fs::DirBuilder;
use tracing::{info, instrument};

/// Create `path` and any missing parents.
///
/// On Unix new directories get mode `0755`. An existing directory is left as
/// it is.
#[instrument(level = "info", skip_all, fields(path = %path.display()))]
pub async fn ensure_output_dir(path: &Path) -> Result<()> {
    let mut builder = DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    builder.mode(0o755);
    builder.create(path).await?;
    info!("Output directory ready");
    Ok(())
}
