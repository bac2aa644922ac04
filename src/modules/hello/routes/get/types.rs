pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Payload {
        pub id: i32,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    use crate::modules::hello::repository::Hello;

    pub enum Success {
        Hello(Hello),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Hello(hello) => (StatusCode::OK, Json(json!(hello))).into_response(),
            }
        }
    }

    pub enum Error {
        FailedToFetchHello,
        HelloNotFound,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::HelloNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "error": "Hello not found" })),
                )
                    .into_response(),
                Self::FailedToFetchHello => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch hello" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
