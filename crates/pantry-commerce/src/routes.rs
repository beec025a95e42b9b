//! Navigation targets exposed to the presentation layer.

use crate::error::CommerceError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A storefront route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "route", content = "value", rename_all = "snake_case")]
pub enum Route {
    Home,
    Category(String),
    Search(String),
    Cart,
    Checkout,
    Login,
}

impl Route {
    /// Full search results for a query.
    pub fn search(query: impl Into<String>) -> Self {
        Route::Search(query.into())
    }

    /// Path (and query string) for this route.
    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Category(slug) => format!("/category/{}", urlencoding_encode(slug)),
            Route::Search(query) => format!("/search?q={}", urlencoding_encode(query)),
            Route::Cart => "/cart".to_string(),
            Route::Checkout => "/checkout".to_string(),
            Route::Login => "/login".to_string(),
        }
    }

    /// Parse a path produced by [`Route::path`].
    pub fn parse(path: &str) -> Result<Self, CommerceError> {
        let (path_part, query_part) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let trimmed = path_part.trim_end_matches('/');

        match trimmed {
            "" => Ok(Route::Home),
            "/cart" => Ok(Route::Cart),
            "/checkout" => Ok(Route::Checkout),
            "/login" => Ok(Route::Login),
            "/search" => {
                let query = query_part
                    .into_iter()
                    .flat_map(|q| q.split('&'))
                    .find_map(|pair| pair.strip_prefix("q="))
                    .map(urlencoding_decode)
                    .unwrap_or_default();
                Ok(Route::Search(query))
            }
            other => match other.strip_prefix("/category/") {
                Some(slug) if !slug.is_empty() && !slug.contains('/') => {
                    Ok(Route::Category(urlencoding_decode(slug)))
                }
                _ => Err(CommerceError::UnknownRoute(path.to_string())),
            },
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

fn urlencoding_encode(s: &str) -> String {
    let mut result = String::with_capacity(s.len() * 3);
    for c in s.chars() {
        match c {
            'a'..='z' | 'A'..='Z' | '0'..='9' | '-' | '_' | '.' | '~' => result.push(c),
            ' ' => result.push('+'),
            _ => {
                let mut buf = [0u8; 4];
                for byte in c.encode_utf8(&mut buf).as_bytes() {
                    result.push_str(&format!("%{:02X}", byte));
                }
            }
        }
    }
    result
}

fn urlencoding_decode(s: &str) -> String {
    let mut bytes = Vec::with_capacity(s.len());
    let mut iter = s.bytes();

    while let Some(b) = iter.next() {
        match b {
            b'%' => {
                let hex: Vec<u8> = iter.by_ref().take(2).collect();
                let decoded = std::str::from_utf8(&hex)
                    .ok()
                    .and_then(|h| u8::from_str_radix(h, 16).ok());
                match decoded {
                    Some(byte) => bytes.push(byte),
                    None => {
                        bytes.push(b'%');
                        bytes.extend_from_slice(&hex);
                    }
                }
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
