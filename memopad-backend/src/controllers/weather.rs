//! Weather passthrough — proxies the upstream weather API by caller IP.
//!
//! Opaque external call: no retries, no timeout beyond the client default;
//! any failure maps to 502 with a fixed message.

use actix_web::{web, HttpRequest, HttpResponse, Responder};

use crate::AppState;

/// Caller IP, preferring the first X-Forwarded-For entry over the peer address.
fn client_ip(req: &HttpRequest) -> Option<String> {
    if let Some(forwarded) = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|h| h.to_str().ok())
    {
        let first = forwarded.split(',').next().unwrap_or("").trim();
        if !first.is_empty() {
            return Some(first.to_string());
        }
    }

    req.peer_addr().map(|addr| addr.ip().to_string())
}

async fn get_weather(data: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let ip = client_ip(&req).unwrap_or_default();
    let url = format!("{}?ip={}", data.config.weather_api_url, ip);

    let response = match crate::http::shared_client().get(&url).send().await {
        Ok(r) => r,
        Err(e) => {
            log::error!("Weather upstream request failed: {}", e);
            return HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Weather service unavailable"
            }));
        }
    };

    match response.json::<serde_json::Value>().await {
        Ok(json) => HttpResponse::Ok().json(json),
        Err(e) => {
            log::error!("Weather upstream returned malformed body: {}", e);
            HttpResponse::BadGateway().json(serde_json::json!({
                "error": "Weather service unavailable"
            }))
        }
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/weather").route(web::get().to(get_weather)));
}
