//! Reference resolution. Implements the logic required by the `$ref` keyword.
//! Is able to load documents from remote locations via HTTP(S).
use crate::{context::ChainLink, error::ResolutionError, paths::JSONPointer};
use ahash::AHashMap;
use parking_lot::RwLock;
use serde_json::Value;
use std::{fmt, sync::Arc};
use tracing::debug;
use url::{ParseError, Url};

/// Base URI of a root schema without an absolute `id`.
pub(crate) const DEFAULT_ROOT_URL: &str = "json-schema:///";

/// An opaque error type that is returned by resolvers on fetch failures.
pub type SchemaResolverError = anyhow::Error;

/// A resolver that downloads remote schema documents.
/// Same-document references such as `#/properties/foo` are handled internally and never
/// reach it.
///
/// All operations are blocking.
///
/// # Example
///
/// ```no_run
/// # use serde_json::{json, Value};
/// # use anyhow::anyhow;
/// # use jsonschema_draft3::{SchemaResolver, SchemaResolverError};
/// # use std::sync::Arc;
/// # use url::Url;
///
/// struct MyCustomResolver;
///
/// impl SchemaResolver for MyCustomResolver {
///     fn resolve(&self, url: &Url) -> Result<Arc<Value>, SchemaResolverError> {
///         match url.host_str() {
///             Some("example.com") => Ok(Arc::new(json!({"type": "string"}))),
///             _ => Err(anyhow!("unknown host")),
///         }
///     }
/// }
/// ```
pub trait SchemaResolver: Send + Sync {
    /// Download the document located at `url`. The URL never carries a fragment.
    fn resolve(&self, url: &Url) -> Result<Arc<Value>, SchemaResolverError>;
}

pub(crate) struct DefaultResolver;

impl SchemaResolver for DefaultResolver {
    fn resolve(&self, url: &Url) -> Result<Arc<Value>, SchemaResolverError> {
        #[cfg(any(feature = "reqwest", test))]
        {
            let response = reqwest::blocking::get(url.as_str())?.error_for_status()?;
            let document: Value = response.json()?;
            Ok(Arc::new(document))
        }
        #[cfg(not(any(feature = "reqwest", test)))]
        Err(anyhow::anyhow!(
            "`reqwest` feature or a custom resolver is required to download {}",
            url
        ))
    }
}

/// Documents known to a single validation run, keyed by their absolute URI.
///
/// Fetch outcomes are memoized, failures included, so one URI is requested at most once
/// per run.
pub(crate) struct DocumentStore {
    resolver: Arc<dyn SchemaResolver>,
    documents: RwLock<AHashMap<String, Result<Arc<Value>, ResolutionError>>>,
}

impl fmt::Debug for DocumentStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DocumentStore")
            .field("documents", &self.documents)
            .finish()
    }
}

impl DocumentStore {
    pub(crate) fn new(resolver: Arc<dyn SchemaResolver>) -> DocumentStore {
        DocumentStore {
            resolver,
            documents: RwLock::new(AHashMap::new()),
        }
    }

    fn register(&self, url: &Url, document: Arc<Value>) {
        self.documents
            .write()
            .insert(url.as_str().to_string(), Ok(document));
    }

    /// `reference` is the original `$ref` text, used in fault messages.
    fn fetch(&self, url: &Url, reference: &str) -> Result<Arc<Value>, ResolutionError> {
        if let Some(outcome) = self.documents.read().get(url.as_str()) {
            debug!(url = %url, "serving document from the store");
            return outcome.clone();
        }
        debug!(url = %url, "fetching remote document");
        let outcome = self.resolver.resolve(url).map_err(|error| {
            let location = reference.split('#').next().unwrap_or(reference);
            ResolutionError::fetch_failure(location, error)
        });
        if let Err(error) = &outcome {
            debug!(url = %url, %error, "fetch failed");
        }
        self.documents
            .write()
            .insert(url.as_str().to_string(), outcome.clone());
        outcome
    }
}

/// One schema document together with the absolute URI it was loaded from.
///
/// Containers reached through `$ref` share the document store of the container that
/// spawned them, so the whole run sees the same set of downloaded documents.
#[derive(Clone, Debug)]
pub struct SchemaContainer {
    locator: Url,
    document: Arc<Value>,
    store: Arc<DocumentStore>,
}

impl SchemaContainer {
    /// Container of a root schema. Starts a fresh document store.
    pub(crate) fn root(document: Arc<Value>, resolver: Arc<dyn SchemaResolver>) -> SchemaContainer {
        let locator = root_locator(&document);
        let store = Arc::new(DocumentStore::new(resolver));
        store.register(&locator, Arc::clone(&document));
        SchemaContainer {
            locator,
            document,
            store,
        }
    }

    /// Absolute URI of the document, without fragment.
    #[must_use]
    pub fn locator(&self) -> &Url {
        &self.locator
    }

    /// The whole document.
    #[must_use]
    pub fn document(&self) -> &Value {
        &self.document
    }

    /// Classify `reference` and locate the container and pointer it targets.
    ///
    /// Fragment-only references stay in this container; absolute `http`/`https`
    /// references move to the container of the downloaded document.
    pub(crate) fn resolve(
        &self,
        reference: &str,
    ) -> Result<(SchemaContainer, JSONPointer), ResolutionError> {
        if reference.is_empty() {
            return Ok((self.clone(), JSONPointer::default()));
        }
        match Url::parse(reference) {
            Ok(mut url) => {
                if !matches!(url.scheme(), "http" | "https") {
                    return Err(ResolutionError::unsupported_scheme(reference));
                }
                let pointer = pointer_of(reference, url.fragment().unwrap_or(""))?;
                url.set_fragment(None);
                Ok((self.fetch(&url, reference)?, pointer))
            }
            Err(ParseError::RelativeUrlWithoutBase) => {
                if let Some(fragment) = reference.strip_prefix('#') {
                    Ok((self.clone(), pointer_of(reference, fragment)?))
                } else {
                    Err(ResolutionError::invalid_reference(
                        reference,
                        "non absolute URI but non empty scheme specific part",
                    ))
                }
            }
            Err(error) => Err(ResolutionError::invalid_reference(
                reference,
                error.to_string(),
            )),
        }
    }

    /// The node `pointer` leads to inside this document.
    pub(crate) fn lookup(&self, pointer: &JSONPointer) -> Result<&Value, ResolutionError> {
        pointer
            .resolve(&self.document)
            .ok_or_else(|| ResolutionError::unresolved_pointer(pointer.to_string()))
    }

    /// Identity of the node `pointer` leads to, as tracked on the resolution chain.
    pub(crate) fn link(&self, pointer: &JSONPointer) -> ChainLink {
        (self.locator.as_str().to_string(), pointer.to_string())
    }

    /// Container for the document at `url`, downloaded at most once per run.
    pub(crate) fn fetch(&self, url: &Url, reference: &str) -> Result<SchemaContainer, ResolutionError> {
        let document = self.store.fetch(url, reference)?;
        Ok(SchemaContainer {
            locator: url.clone(),
            document,
            store: Arc::clone(&self.store),
        })
    }
}

fn root_locator(document: &Value) -> Url {
    document
        .get("id")
        .and_then(Value::as_str)
        .and_then(|id| Url::parse(id).ok())
        .map(|mut url| {
            url.set_fragment(None);
            url
        })
        .unwrap_or_else(default_root_url)
}

#[allow(clippy::expect_used)]
fn default_root_url() -> Url {
    Url::parse(DEFAULT_ROOT_URL).expect("Is a valid URL")
}

fn pointer_of(reference: &str, fragment: &str) -> Result<JSONPointer, ResolutionError> {
    let decoded = percent_encoding::percent_decode_str(fragment)
        .decode_utf8()
        .map_err(|error| ResolutionError::invalid_reference(reference, error.to_string()))?;
    JSONPointer::from_fragment(&decoded)
        .ok_or_else(|| ResolutionError::unresolved_pointer(format!("#{}", decoded)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use test_case::test_case;

    struct Unreachable;

    impl SchemaResolver for Unreachable {
        fn resolve(&self, url: &Url) -> Result<Arc<Value>, SchemaResolverError> {
            Err(anyhow::anyhow!("unknown host {}", url.host_str().unwrap_or("")))
        }
    }

    fn container(document: Value) -> SchemaContainer {
        SchemaContainer::root(Arc::new(document), Arc::new(Unreachable))
    }

    #[test]
    fn root_locator_from_id() {
        let container = container(json!({"id": "http://example.com/root.json#"}));
        assert_eq!(container.locator().as_str(), "http://example.com/root.json");
    }

    #[test_case(json!({}); "no id")]
    #[test_case(json!({"id": "relative.json"}); "relative id")]
    #[test_case(json!({"id": 5}); "non-string id")]
    fn default_locator(document: Value) {
        assert_eq!(container(document).locator().as_str(), DEFAULT_ROOT_URL);
    }

    #[test_case("#", "#")]
    #[test_case("", "#")]
    #[test_case("#/definitions/a", "#/definitions/a")]
    #[test_case("#/a~1b", "#/a~1b")]
    #[test_case("#/a%20b", "#/a b")]
    fn local_references(reference: &str, expected: &str) {
        let container = container(json!({}));
        let (target, pointer) = container.resolve(reference).expect("Is a local reference");
        assert_eq!(target.locator(), container.locator());
        assert_eq!(pointer.to_string(), expected);
    }

    #[test_case("ftp://some.site/some/schema", "cannot use ref ftp://some.site/some/schema, only HTTP is supported currently")]
    #[test_case("urn:foo", "cannot use ref urn:foo, only HTTP is supported currently")]
    #[test_case("a/b/c#/d/e", "invalid URI a/b/c#/d/e: non absolute URI but non empty scheme specific part")]
    #[test_case("#foo", "no match in schema for path #foo")]
    #[test_case("http://host.invalid/s#/a", "cannot download schema at ref http://host.invalid/s: unknown host host.invalid")]
    fn faulty_references(reference: &str, expected: &str) {
        let error = container(json!({}))
            .resolve(reference)
            .expect_err("Should fail");
        assert_eq!(error.to_string(), expected);
    }

    #[test]
    fn lookup_missing_pointer() {
        let container = container(json!({"a": [1]}));
        let pointer = JSONPointer::from_fragment("/a/1").expect("Is a pointer");
        let error = container.lookup(&pointer).expect_err("Should fail");
        assert_eq!(error.to_string(), "no match in schema for path #/a/1");
        let pointer = JSONPointer::from_fragment("/a/0").expect("Is a pointer");
        assert_eq!(container.lookup(&pointer).expect("Exists"), &json!(1));
    }

    #[test]
    fn own_id_is_not_downloaded() {
        let document = json!({"id": "http://example.com/root.json", "type": "string"});
        let container = container(document.clone());
        let (target, pointer) = container
            .resolve("http://example.com/root.json#")
            .expect("Is registered");
        assert_eq!(pointer.to_string(), "#");
        assert_eq!(target.document(), &document);
    }
}
