use std::path::Path;

use eyre::{Context, Result, bail};
use tokio::process::Command;
use tracing::debug;

/// Opens `path` with an external viewer and waits for it to return
pub async fn show_image(viewer: &str, path: &Path) -> Result<()> {
    debug!("Opening {} with {viewer}", path.display());
    let status = Command::new(viewer)
        .arg(path)
        .status()
        .await
        .wrap_err_with(|| format!("Spawn viewer {viewer}"))?;
    if !status.success() {
        bail!("Viewer {viewer} exited with {status} for {}", path.display());
    }
    Ok(())
}

/// `baseline / comparison`, `None` when the comparison took no time
pub fn speedup(baseline: f64, comparison: f64) -> Option<f64> {
    if comparison > 0.0 {
        Some(baseline / comparison)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speedup_ratio() {
        assert_eq!(speedup(6.0, 2.0), Some(3.0));
        assert_eq!(speedup(1.0, 0.0), None);
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn viewer_status_is_checked() {
        let path = Path::new("comparison-N4.png");
        assert!(show_image("true", path).await.is_ok());
        assert!(show_image("false", path).await.is_err());
        assert!(show_image("no-such-viewer-binary", path).await.is_err());
    }
}
