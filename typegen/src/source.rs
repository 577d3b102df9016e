//! Where the introspection schema comes from.

use crate::error::TypegenError;
use reqwest::blocking::Client;
use std::path::PathBuf;
use std::time::Duration;
use typegen_schema::{Schema, parse_schema, parse_schema_value};

/// GraphQL endpoint queried when no schema file is given.
pub const DEFAULT_ENDPOINT: &str = "https://api.newrelic.com/graphql";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "NEW_RELIC_API_KEY";

/// Header the API key is sent in.
pub const API_KEY_HEADER: &str = "API-Key";

/// Request timeout when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Standard introspection query, with enough `ofType` levels for any
/// practical nesting of list and non-null wrappers.
pub const INTROSPECTION_QUERY: &str = r#"query IntrospectionQuery {
  __schema {
    queryType { name }
    mutationType { name }
    subscriptionType { name }
    types { ...FullType }
  }
}

fragment FullType on __Type {
  kind
  name
  description
  fields(includeDeprecated: true) {
    name
    description
    args { ...InputValue }
    type { ...TypeRef }
    isDeprecated
    deprecationReason
  }
  inputFields { ...InputValue }
  interfaces { ...TypeRef }
  enumValues(includeDeprecated: true) {
    name
    description
    isDeprecated
    deprecationReason
  }
  possibleTypes { ...TypeRef }
}

fragment InputValue on __InputValue {
  name
  description
  type { ...TypeRef }
  defaultValue
}

fragment TypeRef on __Type {
  kind
  name
  ofType {
    kind
    name
    ofType {
      kind
      name
      ofType {
        kind
        name
        ofType {
          kind
          name
          ofType {
            kind
            name
            ofType {
              kind
              name
              ofType {
                kind
                name
              }
            }
          }
        }
      }
    }
  }
}"#;

/// Origin of the introspection document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaSource {
    /// A saved introspection result on disk.
    File(PathBuf),
    /// A live GraphQL endpoint.
    Endpoint {
        /// Endpoint URL.
        url: String,
        /// API key sent in the `API-Key` header.
        api_key: Option<String>,
        /// Request timeout.
        timeout: Duration,
    },
}

impl SchemaSource {
    /// Creates an endpoint source that reads the API key from the environment.
    #[must_use]
    pub fn endpoint_from_env(url: impl Into<String>, timeout: Duration) -> Self {
        let api_key = std::env::var(API_KEY_ENV).ok().filter(|k| !k.is_empty());
        Self::Endpoint {
            url: url.into(),
            api_key,
            timeout,
        }
    }

    /// Reads or fetches the schema and parses it.
    ///
    /// # Errors
    /// Returns `TypegenError` if the document cannot be obtained or parsed.
    pub fn load(&self) -> Result<Schema, TypegenError> {
        match self {
            Self::File(path) => {
                let json = std::fs::read_to_string(path).map_err(|source| {
                    TypegenError::SchemaRead {
                        path: path.clone(),
                        source,
                    }
                })?;
                tracing::info!("read schema from {}", path.display());
                Ok(parse_schema(&json)?)
            }
            Self::Endpoint {
                url,
                api_key,
                timeout,
            } => fetch(url, api_key.as_deref(), *timeout),
        }
    }
}

/// Posts the introspection query and parses the response.
fn fetch(url: &str, api_key: Option<&str>, timeout: Duration) -> Result<Schema, TypegenError> {
    if api_key.is_none() {
        tracing::warn!("{} is not set, querying {} without a key", API_KEY_ENV, url);
    }

    let client = Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| TypegenError::fetch(url, e))?;

    let mut request = client
        .post(url)
        .json(&serde_json::json!({ "query": INTROSPECTION_QUERY }));
    if let Some(key) = api_key {
        request = request.header(API_KEY_HEADER, key);
    }

    tracing::info!("fetching schema from {}", url);
    let response = request
        .send()
        .and_then(|r| r.error_for_status())
        .map_err(|e| TypegenError::fetch(url, e))?;
    let document: serde_json::Value = response.json().map_err(|e| TypegenError::fetch(url, e))?;

    Ok(parse_schema_value(document)?)
}
