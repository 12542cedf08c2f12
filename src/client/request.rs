//! Request descriptors / 请求描述
//!
//! A [`RequestSpec`] is the literal method, URL and JSON body of one API call.
//! It is built fresh for every submission and consumed by the runner.

use reqwest::Url;
use serde::ser::{Serialize, Serializer};
use std::fmt;

/// HTTP methods the client issues / 客户端使用的HTTP方法
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for reqwest::Method {
    fn from(m: Method) -> Self {
        match m {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// Flat string-to-string JSON object that keeps insertion order
/// 保持插入顺序的字符串到字符串JSON对象
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonBody {
    fields: Vec<(String, String)>,
}

impl JsonBody {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a field, replacing the value in place if the key already exists
    /// 添加字段；若键已存在则原位替换其值
    pub fn field(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl Serialize for JsonBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(self.fields.iter().map(|(k, v)| (k, v)))
    }
}

/// One API call: method, absolute URL, optional JSON body
/// 一次API调用：方法、绝对URL、可选的JSON请求体
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestSpec {
    pub method: Method,
    pub url: Url,
    pub body: Option<JsonBody>,
}

impl RequestSpec {
    pub fn new(method: Method, url: Url, body: Option<JsonBody>) -> Self {
        Self { method, url, body }
    }

    /// Serialized body bytes, `None` for body-less requests
    /// 序列化后的请求体字节；无请求体时为 `None`
    pub fn body_bytes(&self) -> serde_json::Result<Option<Vec<u8>>> {
        self.body.as_ref().map(serde_json::to_vec).transpose()
    }
}

/// Append an absolute API path to a base URL, keeping any path prefix the base carries
/// 将绝对API路径拼接到基础URL上，保留基础URL中已有的路径前缀
pub fn endpoint_url(base: &Url, path: &str) -> Url {
    let mut url = base.clone();
    let prefix = base.path().trim_end_matches('/');
    let suffix = path.trim_start_matches('/');
    url.set_path(&format!("{}/{}", prefix, suffix));
    url.set_query(None);
    url.set_fragment(None);
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_body_keeps_insertion_order() {
        let body = JsonBody::new()
            .field("token", "6O6LWJKLEKFHMDHGCMQTE62CUY")
            .field("newPassword", "PASSWORD_CAPS");
        assert_eq!(
            serde_json::to_string(&body).unwrap(),
            r#"{"token":"6O6LWJKLEKFHMDHGCMQTE62CUY","newPassword":"PASSWORD_CAPS"}"#
        );
    }

    #[test]
    fn test_json_body_duplicate_key_replaces_value() {
        let body = JsonBody::new()
            .field("email", "a@example.com")
            .field("username", "abner")
            .field("email", "b@example.com");
        assert_eq!(body.len(), 2);
        assert_eq!(body.get("email"), Some("b@example.com"));
        assert_eq!(body.keys().collect::<Vec<_>>(), vec!["email", "username"]);
    }

    #[test]
    fn test_empty_body_serializes_to_empty_object() {
        let body = JsonBody::new();
        assert!(body.is_empty());
        assert_eq!(serde_json::to_string(&body).unwrap(), "{}");
    }

    #[test]
    fn test_endpoint_url_on_bare_host() {
        let base = Url::parse("http://localhost:4000").unwrap();
        assert_eq!(
            endpoint_url(&base, "/api/v1/register/user").as_str(),
            "http://localhost:4000/api/v1/register/user"
        );
    }

    #[test]
    fn test_endpoint_url_keeps_prefix_and_drops_query() {
        let base = Url::parse("https://example.com/appletree/?debug=1#top").unwrap();
        assert_eq!(
            endpoint_url(&base, "/api/v1/users/activated").as_str(),
            "https://example.com/appletree/api/v1/users/activated"
        );
    }

    #[test]
    fn test_body_bytes_for_get_is_none() {
        let spec = RequestSpec::new(
            Method::Get,
            Url::parse("http://localhost:4000/api/v1/healthcheck").unwrap(),
            None,
        );
        assert_eq!(spec.body_bytes().unwrap(), None);
    }

    #[test]
    fn test_method_conversion() {
        assert_eq!(reqwest::Method::from(Method::Put), reqwest::Method::PUT);
        assert_eq!(Method::Post.to_string(), "POST");
    }
}
