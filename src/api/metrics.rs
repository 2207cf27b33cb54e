use actix_web::HttpResponse;

use crate::middleware::request_metrics::{request_counts, RequestCounts};

/// Prometheus text exposition (format 0.0.4).
fn render(counts: RequestCounts) -> String {
    let mut out = String::new();
    for (name, help, value) in [
        ("http_requests_total", "Total number of HTTP requests", counts.requests),
        ("http_errors_total", "Total number of HTTP responses with status >= 400", counts.errors),
    ] {
        out.push_str(&format!("# HELP {name} {help}\n# TYPE {name} counter\n{name} {value}\n"));
    }
    out
}

#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Health",
    responses(
        (status = 200, description = "Prometheus text exposition of request counters")
    )
)]
pub async fn get_metrics() -> HttpResponse {
    HttpResponse::Ok()
        .content_type("text/plain; version=0.0.4")
        .body(render(request_counts()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{test, web, App};

    #[::core::prelude::v1::test]
    fn test_render() {
        let text = render(RequestCounts { requests: 12, errors: 3 });
        assert!(text.contains("# TYPE http_requests_total counter\nhttp_requests_total 12\n"));
        assert!(text.contains("# TYPE http_errors_total counter\nhttp_errors_total 3\n"));
    }

    #[actix_web::test]
    async fn test_metrics_endpoint_is_plain_text() {
        let app = test::init_service(App::new().route("/metrics", web::get().to(get_metrics))).await;
        let resp = test::call_service(&app, test::TestRequest::get().uri("/metrics").to_request()).await;
        assert_eq!(resp.headers().get("content-type").unwrap().to_str().unwrap(), "text/plain; version=0.0.4");

        let body = test::read_body(resp).await;
        assert!(std::str::from_utf8(&body).unwrap().contains("http_errors_total "));
    }
}
