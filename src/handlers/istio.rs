use actix_web::{web, HttpResponse};
use log::warn;
use serde_json::json;

use crate::config::Settings;
use crate::errors::AppError;

pub async fn get_envoy_metadata(
    settings: web::Data<Settings>,
    upstream: web::Data<reqwest::Client>,
) -> Result<HttpResponse, actix_web::Error> {
    let response = upstream
        .get(&settings.server_info_url)
        .send()
        .await
        .and_then(|response| response.error_for_status())
        .map_err(|err| {
            warn!("envoy sidecar query failed: {}", err);
            AppError::BadGateway("Unable to query server information".to_string())
        })?;

    let body: serde_json::Value = response.json().await.map_err(|err| {
        warn!("envoy sidecar returned a non-JSON payload: {}", err);
        AppError::Internal("Unexpected response format from server".to_string())
    })?;

    let locality = body
        .get("node")
        .and_then(|node| node.get("locality"))
        .cloned()
        .ok_or_else(|| AppError::Internal("Unexpected response format from server".to_string()))?;

    Ok(HttpResponse::Ok().json(json!({ "locality": locality })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, App};
    use serde_json::Value;
    use std::time::Duration;

    #[actix_web::test]
    async fn unreachable_sidecar_is_a_bad_gateway() {
        let settings = Settings {
            bind_addr: "127.0.0.1:8080".to_string(),
            version: "v1".to_string(),
            release_id: "snapshot".to_string(),
            // nothing listens on the discard port
            server_info_url: "http://127.0.0.1:9/server_info".to_string(),
        };
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(2))
            .build()
            .unwrap();
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(settings))
                .app_data(web::Data::new(client))
                .service(web::resource("/istio/envoy").route(web::get().to(get_envoy_metadata))),
        )
        .await;

        let response = test::call_service(
            &app,
            test::TestRequest::get().uri("/istio/envoy").to_request(),
        )
        .await;
        assert_eq!(response.status().as_u16(), 502);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body, json!({ "detail": "Unable to query server information" }));
    }
}
