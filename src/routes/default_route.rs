use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "message": "Keyword analysis API is running",
    }))
}
