//! The fixed account operations and their literal payloads
//! 固定的账户操作及其字面量请求体

use reqwest::Url;

use crate::client::request::{endpoint_url, JsonBody, Method, RequestSpec};
use crate::constants::paths;

pub const REGISTER_USERNAME: &str = "abner";
pub const REGISTER_EMAIL: &str = "abner@example.com";
pub const REGISTER_PASSWORD: &str = "password";
pub const ACTIVATION_TOKEN: &str = "HLFGJCTPATRSW6MSGYSE4DEFPQ";
pub const RESET_REQUEST_EMAIL: &str = "abner@example.com";
pub const RESET_TOKEN: &str = "6O6LWJKLEKFHMDHGCMQTE62CUY";
pub const RESET_NEW_PASSWORD: &str = "PASSWORD_CAPS";

/// Operations the runner can submit / 运行器可提交的操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Registration,
    Activation,
    PasswordResetRequest,
    PasswordReset,
    HealthCheck,
}

impl Operation {
    /// The four account operations, in page order / 四个账户操作，按页面顺序
    pub const ACCOUNT: [Operation; 4] = [
        Operation::Registration,
        Operation::Activation,
        Operation::PasswordResetRequest,
        Operation::PasswordReset,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Operation::Registration => "registration",
            Operation::Activation => "activation",
            Operation::PasswordResetRequest => "password_reset_request",
            Operation::PasswordReset => "password_reset",
            Operation::HealthCheck => "health_check",
        }
    }

    pub fn method(self) -> Method {
        match self {
            Operation::Registration | Operation::PasswordResetRequest => Method::Post,
            Operation::Activation | Operation::PasswordReset => Method::Put,
            Operation::HealthCheck => Method::Get,
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Operation::Registration => paths::REGISTER_USER,
            Operation::Activation => paths::ACTIVATE_USER,
            Operation::PasswordResetRequest | Operation::PasswordReset => paths::PASSWORD_RESET,
            Operation::HealthCheck => paths::HEALTHCHECK,
        }
    }

    pub fn body(self) -> Option<JsonBody> {
        match self {
            Operation::Registration => Some(
                JsonBody::new()
                    .field("username", REGISTER_USERNAME)
                    .field("email", REGISTER_EMAIL)
                    .field("password", REGISTER_PASSWORD),
            ),
            Operation::Activation => Some(JsonBody::new().field("token", ACTIVATION_TOKEN)),
            Operation::PasswordResetRequest => {
                Some(JsonBody::new().field("email", RESET_REQUEST_EMAIL))
            }
            Operation::PasswordReset => Some(
                JsonBody::new()
                    .field("token", RESET_TOKEN)
                    .field("newPassword", RESET_NEW_PASSWORD),
            ),
            Operation::HealthCheck => None,
        }
    }

    /// Build the request for this operation against `base`
    /// 基于 `base` 构建该操作的请求
    pub fn request_spec(self, base: &Url) -> RequestSpec {
        RequestSpec::new(self.method(), endpoint_url(base, self.path()), self.body())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn base() -> Url {
        Url::parse("http://localhost:4000").unwrap()
    }

    fn body_json(op: Operation) -> serde_json::Value {
        serde_json::to_value(op.body().unwrap()).unwrap()
    }

    #[test]
    fn test_registration_request() {
        let spec = Operation::Registration.request_spec(&base());
        assert_eq!(spec.method, Method::Post);
        assert_eq!(
            spec.url.as_str(),
            "http://localhost:4000/api/v1/register/user"
        );
        assert_eq!(
            body_json(Operation::Registration),
            json!({"username": "abner", "email": "abner@example.com", "password": "password"})
        );
    }

    #[test]
    fn test_activation_request() {
        let spec = Operation::Activation.request_spec(&base());
        assert_eq!(spec.method, Method::Put);
        assert_eq!(spec.url.path(), "/api/v1/users/activated");
        assert_eq!(
            body_json(Operation::Activation),
            json!({"token": "HLFGJCTPATRSW6MSGYSE4DEFPQ"})
        );
    }

    #[test]
    fn test_password_reset_pair_shares_path_but_not_method() {
        let req = Operation::PasswordResetRequest.request_spec(&base());
        let reset = Operation::PasswordReset.request_spec(&base());
        assert_eq!(req.url, reset.url);
        assert_eq!(req.url.path(), "/api/v1/tokens/password-reset");
        assert_eq!(req.method, Method::Post);
        assert_eq!(reset.method, Method::Put);
        assert_eq!(
            body_json(Operation::PasswordResetRequest),
            json!({"email": "abner@example.com"})
        );
        assert_eq!(
            body_json(Operation::PasswordReset),
            json!({"token": "6O6LWJKLEKFHMDHGCMQTE62CUY", "newPassword": "PASSWORD_CAPS"})
        );
    }

    #[test]
    fn test_health_check_has_no_body() {
        let spec = Operation::HealthCheck.request_spec(&base());
        assert_eq!(spec.method, Method::Get);
        assert_eq!(spec.url.path(), "/api/v1/healthcheck");
        assert!(spec.body.is_none());
    }

    #[test]
    fn test_account_operations_exclude_health_check() {
        assert!(!Operation::ACCOUNT.contains(&Operation::HealthCheck));
        assert_eq!(Operation::ACCOUNT.len(), 4);
    }
}
