use actix_files::NamedFile;
use actix_web::{HttpRequest, HttpResponse, Responder};

#[utoipa::path(
    get,
    path = "/",
    tag = "App",
    responses(
        (status = 200, description = "Service banner")
    )
)]
pub async fn hello() -> impl Responder {
    HttpResponse::Ok().body("Cash Manager API")
}

/// Serve o APK do app para download direto no aparelho.
/// O caminho vem de CLIENT_APK_PATH para a imagem de deploy poder trocá-lo.
pub async fn download_client(req: HttpRequest) -> HttpResponse {
    let apk_path =
        std::env::var("CLIENT_APK_PATH").unwrap_or_else(|_| "./client.apk".to_string());

    log::info!("📦 GET /client.apk - serving {}", apk_path);

    match NamedFile::open_async(&apk_path).await {
        Ok(file) => file.into_response(&req),
        Err(e) => {
            log::warn!("⚠️ client.apk unavailable at {}: {}", apk_path, e);
            HttpResponse::NotFound().json(serde_json::json!({
                "success": false,
                "error": "Client package not available"
            }))
        }
    }
}
