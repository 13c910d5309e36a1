use axum::extract::{FromRequest, Json, Request, rejection::JsonRejection};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::{AppError, AppResult};

/// JSON extractor that runs `validator` rules before the handler sees
/// the payload.
///
/// Deserialization failures become `BadRequest`, rule failures become
/// `Validation`, so handlers only ever receive well-formed input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> AppResult<Self> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Method, header};
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Debug, Deserialize, Validate)]
    struct TestBody {
        #[validate(length(min = 3, max = 20, message = "Username must be between 3 and 20 characters"))]
        username: String,
        #[validate(email(message = "Invalid email format"))]
        email: String,
    }

    fn json_request(body: &str) -> Request {
        Request::builder()
            .method(Method::POST)
            .uri("/test")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn accepts_valid_body() {
        let request = json_request(r#"{"username":"belle","email":"belle@belle.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        let ValidatedJson(body) = result.unwrap();
        assert_eq!(body.username, "belle");
        assert_eq!(body.email, "belle@belle.com");
    }

    #[tokio::test]
    async fn rejects_failing_validation_rule() {
        let request = json_request(r#"{"username":"ab","email":"belle@belle.com"}"#);

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;

        match result {
            Err(AppError::Validation { field, .. }) => assert_eq!(field, "username"),
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[tokio::test]
    async fn rejects_malformed_json() {
        let request = json_request("{not json");

        let result = ValidatedJson::<TestBody>::from_request(request, &()).await;
        assert!(matches!(result, Err(AppError::BadRequest { .. })));
    }
}
