use axum::{routing::get, Router};
use status_sim::SimConfig;

pub fn build_app(sim: SimConfig) -> Router {
    api::app(sim).route("/health", get(healthcheck))
}

async fn healthcheck() -> &'static str {
    "ok"
}

#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use status_sim::SimConfig;
    use tower::ServiceExt;

    #[tokio::test]
    async fn server_healthcheck_responds_ok() {
        let app = super::build_app(SimConfig::default());

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn server_mounts_dashboard_routes() {
        let app = super::build_app(SimConfig::default());

        let response = app
            .oneshot(Request::get("/api/panels/security").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }
}
