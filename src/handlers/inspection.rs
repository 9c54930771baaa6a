use actix_web::{HttpRequest, HttpResponse};
use serde_json::json;
use std::collections::BTreeMap;

pub async fn get_headers(req: HttpRequest) -> HttpResponse {
    let mut headers = BTreeMap::new();
    for (name, value) in req.headers() {
        headers.insert(
            name.as_str().to_string(),
            String::from_utf8_lossy(value.as_bytes()).into_owned(),
        );
    }
    HttpResponse::Ok().json(json!({ "headers": headers }))
}

pub async fn get_ip(req: HttpRequest) -> HttpResponse {
    // behind a proxy the first x-forwarded-for entry is the client
    let forwarded = req
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|ip| ip.trim().to_string());

    let ip = match forwarded {
        Some(ip) => ip,
        None => req
            .peer_addr()
            .map(|addr| addr.ip().to_string())
            .unwrap_or_default(),
    };
    HttpResponse::Ok().json(json!({ "ip": ip }))
}
