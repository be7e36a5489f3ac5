use std::sync::Arc;
use std::time::Duration;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use futures_util::StreamExt;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, REFERER, USER_AGENT};
use url::Url;

use crate::{FailureKind, FetchError, Request, RequestKind};

const DOCUMENT_ACCEPT: &str = "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8";
const AJAX_ACCEPT: &str = "application/json, text/javascript, */*; q=0.01";

#[derive(Debug, Clone)]
pub struct SourceSettings {
    /// Scheme and host every request path is resolved against.
    pub origin: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub redirect_limit: usize,
    pub max_bytes: u64,
    pub allowed_content_types: Vec<String>,
    pub user_agent: String,
    pub accept_language: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            origin: "https://mangafire.to".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(10),
            redirect_limit: 5,
            max_bytes: 8 * 1024 * 1024,
            allowed_content_types: vec![
                "text/html".to_string(),
                "application/xhtml+xml".to_string(),
                "application/json".to_string(),
            ],
            user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) \
                         Chrome/120.0.0.0 Safari/537.36"
                .to_string(),
            accept_language: "en-US,en;q=0.5".to_string(),
        }
    }
}

/// Supplies raw payloads (markup or a JSON envelope) for upstream requests.
#[async_trait::async_trait]
pub trait DocumentSource: Send + Sync {
    async fn fetch(&self, request: &Request) -> Result<String, FetchError>;
}

#[async_trait::async_trait]
impl<T: DocumentSource + ?Sized> DocumentSource for Arc<T> {
    async fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        (**self).fetch(request).await
    }
}

#[derive(Debug, Clone)]
pub struct ReqwestSource {
    settings: SourceSettings,
    origin: Url,
    client: reqwest::Client,
}

impl ReqwestSource {
    pub fn new(settings: SourceSettings) -> Result<Self, FetchError> {
        let origin = Url::parse(&settings.origin)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .redirect(reqwest::redirect::Policy::limited(settings.redirect_limit))
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self {
            settings,
            origin,
            client,
        })
    }

    pub fn settings(&self) -> &SourceSettings {
        &self.settings
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    fn build(&self, request: &Request) -> Result<reqwest::RequestBuilder, FetchError> {
        let url = self
            .origin
            .join(&request.path)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))?;
        let referer = format!("{}/", self.settings.origin.trim_end_matches('/'));

        let builder = self
            .client
            .get(url)
            .header(USER_AGENT, &self.settings.user_agent)
            .header(ACCEPT_LANGUAGE, &self.settings.accept_language)
            .header(REFERER, referer);
        Ok(match request.kind {
            RequestKind::Document => builder.header(ACCEPT, DOCUMENT_ACCEPT),
            RequestKind::Ajax => builder
                .header(ACCEPT, AJAX_ACCEPT)
                .header("X-Requested-With", "XMLHttpRequest"),
        })
    }
}

#[async_trait::async_trait]
impl DocumentSource for ReqwestSource {
    async fn fetch(&self, request: &Request) -> Result<String, FetchError> {
        let response = self
            .build(request)?
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        decode_body(&bytes, content_type.as_deref())
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    if err.is_redirect() {
        return FetchError::new(FailureKind::RedirectLimitExceeded, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}

/// Turns a body into text. The encoding comes from a BOM, then the
/// `charset` parameter, then byte-level detection.
pub(crate) fn decode_body(bytes: &[u8], content_type: Option<&str>) -> Result<String, FetchError> {
    let encoding = Encoding::for_bom(bytes)
        .map(|(encoding, _)| encoding)
        .or_else(|| {
            content_type
                .and_then(charset_label)
                .and_then(|label| Encoding::for_label(label.as_bytes()))
        })
        .unwrap_or_else(|| {
            let mut detector = EncodingDetector::new();
            detector.feed(bytes, true);
            detector.guess(None, true)
        });

    let (text, _, had_errors) = encoding.decode(bytes);
    if had_errors {
        return Err(FetchError::new(
            FailureKind::Decode,
            format!("body is not valid {}", encoding.name()),
        ));
    }
    Ok(text.into_owned())
}

fn charset_label(content_type: &str) -> Option<&str> {
    content_type.split(';').find_map(|param| {
        let (name, value) = param.split_once('=')?;
        name.trim()
            .eq_ignore_ascii_case("charset")
            .then(|| value.trim().trim_matches(['"', '\'']))
    })
}

#[cfg(test)]
mod tests {
    use super::{charset_label, decode_body};

    #[test]
    fn charset_parameter_is_found_case_insensitively() {
        assert_eq!(charset_label("text/html; Charset=\"ISO-8859-1\""), Some("ISO-8859-1"));
        assert_eq!(charset_label("application/json"), None);
    }

    #[test]
    fn latin1_body_decodes_through_charset() {
        let text = decode_body(b"caf\xe9", Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(text, "café");
    }

    #[test]
    fn bom_wins_over_header() {
        let text = decode_body(b"\xEF\xBB\xBFhello", Some("text/html; charset=ISO-8859-1")).unwrap();
        assert_eq!(text, "hello");
    }
}
