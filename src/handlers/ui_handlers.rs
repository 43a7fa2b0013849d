use actix_files::NamedFile;
use actix_web::web;

use crate::config::ServerConfig;

/// GET / - the single-page viewer from the static directory.
pub async fn index(config: web::Data<ServerConfig>) -> actix_web::Result<NamedFile> {
    let path = config.static_dir.join("index.html");
    Ok(NamedFile::open_async(path).await?)
}
