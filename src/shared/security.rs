use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum accepted size of a YAML config file (1 MB)
pub const MAX_CONFIG_FILE_SIZE: u64 = 1024 * 1024;

/// Rejects an output target that is a symbolic link.
///
/// A target that does not exist yet is accepted; it will be created.
/// `symlink_metadata()` is used so the link itself is inspected, not what it points to.
pub fn ensure_not_symlink(path: &Path) -> Result<()> {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => anyhow::bail!("Failed to read metadata for {}: {}", path.display(), e),
    };

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. Writing the report through a symbolic link is not allowed.",
            path.display()
        );
    }

    Ok(())
}

/// Validates that a config file exists, is a regular file and is not oversized.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist or its metadata can't be read
/// - The path is a symbolic link or not a regular file
/// - The file is larger than [`MAX_CONFIG_FILE_SIZE`]
pub fn ensure_config_file(path: &Path) -> Result<()> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config file metadata: {}", e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    if metadata.len() > MAX_CONFIG_FILE_SIZE {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            metadata.len(),
            MAX_CONFIG_FILE_SIZE
        );
    }

    Ok(())
}
