use chrono::{DateTime, Utc};
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::fmt;
use std::time::Duration;
use thiserror::Error;

const NEWSAPI_EVERYTHING_URL: &str = "https://newsapi.org/v2/everything";
const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// A single headline with its outlet name.
#[derive(Debug, Clone)]
pub struct Headline {
    pub title: String,
    pub source: String,
    pub published_at: Option<DateTime<Utc>>,
}

impl fmt::Display for Headline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.source)
    }
}

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("NewsAPI returned status {0}")]
    Status(StatusCode),
    #[error("malformed news response: {0}")]
    Malformed(#[from] serde_json::Error),
}

// NewsAPI /v2/everything response structures. An article missing its title
// or source name fails the whole response, not just the one entry.
#[derive(Debug, Deserialize)]
struct NewsResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

#[derive(Debug, Deserialize)]
struct Article {
    title: String,
    source: ArticleSource,
    #[serde(rename = "publishedAt", default)]
    published_at: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleSource {
    name: String,
}

impl From<Article> for Headline {
    fn from(article: Article) -> Self {
        let published_at = article
            .published_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Headline {
            title: article.title,
            source: article.source.name,
            published_at,
        }
    }
}

/// Parse a news response into at most `limit` headlines, preserving the
/// provider's most-recent-first order. Unlike the chart API, NewsAPI puts
/// nothing recoverable in a non-success body, so the status is checked
/// before the body is even looked at.
fn parse_news(body: &str, status: StatusCode, limit: usize) -> Result<Vec<Headline>, NewsError> {
    if !status.is_success() {
        return Err(NewsError::Status(status));
    }
    let data: NewsResponse = serde_json::from_str(body)?;
    Ok(data
        .articles
        .into_iter()
        .take(limit)
        .map(Headline::from)
        .collect())
}

pub struct NewsClient {
    client: Client,
}

impl NewsClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(15))
            .build()
            .expect("Failed to build HTTP client");
        Self { client }
    }

    /// Fetch recent headlines for a ticker. A missing API key is a deliberate
    /// degraded mode: no request is made and no headlines are returned.
    pub async fn fetch(
        &self,
        ticker: &str,
        api_key: Option<&str>,
        limit: usize,
    ) -> Result<Vec<Headline>, NewsError> {
        let Some(api_key) = api_key else {
            return Ok(Vec::new());
        };
        if limit == 0 {
            return Ok(Vec::new());
        }

        let limit_param = limit.to_string();
        let response = self
            .client
            .get(NEWSAPI_EVERYTHING_URL)
            .query(&[
                ("q", ticker),
                ("sortBy", "publishedAt"),
                ("language", "en"),
                ("pageSize", limit_param.as_str()),
                ("apiKey", api_key),
            ])
            .header("User-Agent", USER_AGENT)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_news(&body, status, limit)
    }
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article_json(title: &str, source: &str) -> String {
        format!(
            r#"{{"title":"{}","source":{{"id":null,"name":"{}"}},"publishedAt":"2024-06-01T12:00:00Z","url":"https://example.com/a"}}"#,
            title, source
        )
    }

    fn body_with(articles: &[String]) -> String {
        format!(
            r#"{{"status":"ok","totalResults":{},"articles":[{}]}}"#,
            articles.len(),
            articles.join(",")
        )
    }

    #[test]
    fn parses_headlines_in_provider_order() {
        let body = body_with(&[
            article_json("Apple launches new chip", "TechWire"),
            article_json("Markets rally on earnings", "Biz Daily"),
            article_json("Supply chain update", "Reuters"),
        ]);
        let headlines = parse_news(&body, StatusCode::OK, 5).unwrap();
        assert_eq!(headlines.len(), 3);
        assert_eq!(headlines[0].title, "Apple launches new chip");
        assert_eq!(headlines[0].source, "TechWire");
        assert_eq!(headlines[2].source, "Reuters");
    }

    #[test]
    fn truncates_to_limit() {
        let body = body_with(&[
            article_json("One", "A"),
            article_json("Two", "B"),
            article_json("Three", "C"),
        ]);
        let headlines = parse_news(&body, StatusCode::OK, 2).unwrap();
        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[1].title, "Two");
    }

    #[test]
    fn absent_articles_key_yields_no_headlines() {
        let headlines =
            parse_news(r#"{"status":"ok","totalResults":0}"#, StatusCode::OK, 5).unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn foreign_shape_yields_no_headlines() {
        let headlines = parse_news(r#"{"message":"unexpected"}"#, StatusCode::OK, 5).unwrap();
        assert!(headlines.is_empty());
    }

    #[test]
    fn rate_limited_status_is_reported() {
        let body =
            r#"{"status":"error","code":"rateLimited","message":"You have made too many requests."}"#;
        let err = parse_news(body, StatusCode::TOO_MANY_REQUESTS, 5).unwrap_err();
        assert_eq!(
            err.to_string(),
            "NewsAPI returned status 429 Too Many Requests"
        );
        assert!(matches!(err, NewsError::Status(s) if s.as_u16() == 429));
    }

    #[test]
    fn article_missing_title_fails_the_fetch() {
        let body = r#"{"articles":[{"source":{"name":"Reuters"},"publishedAt":"2024-06-01T12:00:00Z"}]}"#;
        assert!(matches!(
            parse_news(body, StatusCode::OK, 5),
            Err(NewsError::Malformed(_))
        ));
    }

    #[test]
    fn article_missing_source_name_fails_the_fetch() {
        let body = r#"{"articles":[{"title":"Ok title","source":{"id":"x"}}]}"#;
        assert!(matches!(
            parse_news(body, StatusCode::OK, 5),
            Err(NewsError::Malformed(_))
        ));
    }

    #[test]
    fn published_at_parses_to_utc() {
        let body = r#"{"articles":[{"title":"T","source":{"name":"S"},"publishedAt":"2024-06-01T09:30:00+02:00"}]}"#;
        let headlines = parse_news(body, StatusCode::OK, 5).unwrap();
        let ts = headlines[0].published_at.unwrap();
        assert_eq!(ts.to_rfc3339(), "2024-06-01T07:30:00+00:00");
    }

    #[test]
    fn unparseable_published_at_keeps_the_article() {
        let body = r#"{"articles":[{"title":"T","source":{"name":"S"},"publishedAt":"yesterday"}]}"#;
        let headlines = parse_news(body, StatusCode::OK, 5).unwrap();
        assert_eq!(headlines.len(), 1);
        assert!(headlines[0].published_at.is_none());
    }

    #[test]
    fn display_is_title_then_source() {
        let body = body_with(&[article_json("Fed holds rates", "AP")]);
        let headlines = parse_news(&body, StatusCode::OK, 5).unwrap();
        assert_eq!(headlines[0].to_string(), "Fed holds rates (AP)");
    }

    #[tokio::test]
    async fn missing_key_short_circuits_without_a_request() {
        let client = NewsClient::new();
        let headlines = client.fetch("AAPL", None, 5).await.unwrap();
        assert!(headlines.is_empty());
    }

    #[tokio::test]
    async fn zero_limit_short_circuits_without_a_request() {
        let client = NewsClient::new();
        let headlines = client.fetch("AAPL", Some("key"), 0).await.unwrap();
        assert!(headlines.is_empty());
    }
}
