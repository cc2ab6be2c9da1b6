use crate::error::Error;
use std::path::Path;

/// Picks the release body. Content read from `body_path` wins over the inline
/// body unless the file is empty; a file that cannot be read is an error.
pub async fn resolve_body(
    inline: Option<&str>,
    body_path: Option<&Path>,
) -> Result<Option<String>, Error> {
    let file_content = match body_path {
        Some(path) => Some(read_body_file(path).await?),
        None => None,
    };

    let body = file_content
        .filter(|content| !content.is_empty())
        .or_else(|| inline.map(str::to_string));

    Ok(body)
}

async fn read_body_file(path: &Path) -> Result<String, Error> {
    tracing::debug!(path = %path.display(), "reading release body");
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| Error::BodyFile {
            path: path.to_path_buf(),
            source,
        })
}
