use crate::error::SparkleError;
use actix_web::HttpRequest;
use sparkle_infra::SparkleContext;

/// Guards the staff-only routes. The caller must present the admin api key
/// in the `x-api-key` header.
pub fn protect_admin_route(req: &HttpRequest, ctx: &SparkleContext) -> Result<(), SparkleError> {
    let api_key = match req.headers().get("x-api-key") {
        Some(api_key) => match api_key.to_str() {
            Ok(api_key) => api_key,
            Err(_) => {
                return Err(SparkleError::Unauthorized(
                    "Malformed api key provided".to_string(),
                ))
            }
        },
        None => {
            return Err(SparkleError::Unauthorized(
                "Unable to find api-key in x-api-key header".to_string(),
            ))
        }
    };

    if api_key == ctx.config.admin_api_key {
        Ok(())
    } else {
        Err(SparkleError::Unauthorized(
            "Invalid api-key provided in x-api-key header".to_string(),
        ))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use actix_web::test::TestRequest;

    #[actix_web::main]
    #[test]
    async fn rejects_missing_and_wrong_api_key() {
        let mut ctx = SparkleContext::create_inmemory();
        ctx.config.admin_api_key = "secret".to_string();

        let req = TestRequest::default().to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());

        let req = TestRequest::default()
            .insert_header(("x-api-key", "wrong"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_err());
    }

    #[actix_web::main]
    #[test]
    async fn accepts_valid_api_key() {
        let mut ctx = SparkleContext::create_inmemory();
        ctx.config.admin_api_key = "secret".to_string();

        let req = TestRequest::default()
            .insert_header(("x-api-key", "secret"))
            .to_http_request();
        assert!(protect_admin_route(&req, &ctx).is_ok());
    }
}
