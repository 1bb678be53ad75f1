//
//  launchpad-client
//  api/resource.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Resource Wrapper
//!
//! Turns a raw JSON representation into one of three typed resources:
//! [`ServiceRoot`], [`Entry`] or [`Collection`].
//!
//! ## Classification
//!
//! The server never sends an explicit type tag, so classification is
//! structural and applied in this order:
//!
//! 1. `resource_type_link` is a string ending in `#service-root` → [`ServiceRoot`]
//! 2. no `total_size` key → [`Entry`]
//! 3. otherwise → [`Collection`]
//!
//! A representation with no `resource_type_link` at all falls through to
//! step 2 without complaint.
//!
//! ## Fields
//!
//! Every resource keeps the representation's keys in server order as a
//! `serde_json::Map`, read through [`Wrapped::get_field`]. Keys starting with
//! [`RESERVED_PREFIX`] belong to client bookkeeping and are never sent back.
//!
//! ## Example
//!
//! ```rust
//! use launchpad_client::api::{wrap, LaunchpadClient, Resource};
//! use serde_json::json;
//!
//! let client = LaunchpadClient::new("https://launchpad.net/").unwrap();
//! let resource = wrap(
//!     client,
//!     "https://launchpad.net/api/beta/bugs",
//!     json!({"total_size": 0, "entries": []}),
//! )
//! .unwrap();
//! assert!(matches!(resource, Resource::Collection(_)));
//! ```

use async_trait::async_trait;
use serde_json::{Map, Value};
use tracing::{info, trace};
use url::Url;

use super::client::{append_query, LaunchpadClient};
use super::common::ApiError;

/// Suffix of `resource_type_link` that marks the service root.
pub const SERVICE_ROOT_SUFFIX: &str = "#service-root";

/// Field-name prefix reserved for client bookkeeping; such fields are never saved.
pub const RESERVED_PREFIX: &str = "lp_";

/// Wraps a parsed representation fetched from `uri`.
///
/// # Errors
///
/// Returns [`ApiError::NotAnObject`] if `representation` is not a JSON object.
pub fn wrap(client: LaunchpadClient, uri: &str, representation: Value) -> Result<Resource, ApiError> {
    let Value::Object(fields) = representation else {
        return Err(ApiError::NotAnObject);
    };

    let repr = Representation {
        client,
        original_uri: uri.to_string(),
        fields,
    };

    let resource = if is_service_root(&repr.fields) {
        Resource::ServiceRoot(ServiceRoot { repr })
    } else if !repr.fields.contains_key("total_size") {
        Resource::Entry(Entry { repr })
    } else {
        Resource::Collection(Collection { repr })
    };

    trace!(uri, kind = resource.kind(), "wrapped representation");
    Ok(resource)
}

fn is_service_root(fields: &Map<String, Value>) -> bool {
    fields
        .get("resource_type_link")
        .and_then(Value::as_str)
        .is_some_and(|link| link.ends_with(SERVICE_ROOT_SUFFIX))
}

/// State shared by every resource variant.
#[derive(Debug, Clone)]
pub struct Representation {
    client: LaunchpadClient,
    original_uri: String,
    fields: Map<String, Value>,
}

/// Read access shared by [`ServiceRoot`], [`Entry`] and [`Collection`].
#[async_trait]
pub trait Wrapped: Sync {
    /// The underlying representation.
    fn representation(&self) -> &Representation;

    /// All fields, in the order the server sent them.
    fn fields(&self) -> &Map<String, Value> {
        &self.representation().fields
    }

    /// A single field, or `None` if absent.
    fn get_field(&self, name: &str) -> Option<&Value> {
        self.representation().fields.get(name)
    }

    /// The canonical URI of the resource.
    fn self_link(&self) -> Option<&str> {
        self.get_field("self_link").and_then(Value::as_str)
    }

    /// The type URI of the resource.
    fn resource_type_link(&self) -> Option<&str> {
        self.get_field("resource_type_link").and_then(Value::as_str)
    }

    /// The URI this representation was fetched from.
    fn original_uri(&self) -> &str {
        &self.representation().original_uri
    }

    /// The client that fetched this resource.
    fn client(&self) -> &LaunchpadClient {
        &self.representation().client
    }

    /// Looks up `<name>_collection_link`, then `<name>_link`.
    ///
    /// A `null` link counts as absent.
    fn link(&self, name: &str) -> Option<&str> {
        self.get_field(&format!("{name}_collection_link"))
            .and_then(Value::as_str)
            .or_else(|| self.get_field(&format!("{name}_link")).and_then(Value::as_str))
    }

    /// Fetches the resource behind [`link`](Self::link).
    async fn follow_link(&self, name: &str) -> Result<Resource, ApiError> {
        let link = self
            .link(name)
            .ok_or_else(|| ApiError::MissingLink(name.to_string()))?
            .to_string();
        self.client().get(&link).await
    }
}

/// The top-level resource of the web service.
///
/// Holds links to the top-level collections and services. Never mutated.
#[derive(Debug, Clone)]
pub struct ServiceRoot {
    repr: Representation,
}

impl Wrapped for ServiceRoot {
    fn representation(&self) -> &Representation {
        &self.repr
    }
}

/// A single named resource, such as one bug or one branch.
///
/// Fields are set locally with [`set_field`](Entry::set_field) and pushed
/// with [`save`](Entry::save). There is no rollback: after a failed save the
/// local fields stay as the caller left them.
#[derive(Debug, Clone)]
pub struct Entry {
    repr: Representation,
}

impl Wrapped for Entry {
    fn representation(&self) -> &Representation {
        &self.repr
    }
}

impl Entry {
    /// Sets a field locally, returning the previous value.
    pub fn set_field(&mut self, name: impl Into<String>, value: Value) -> Option<Value> {
        self.repr.fields.insert(name.into(), value)
    }

    /// Removes a field locally.
    pub fn remove_field(&mut self, name: &str) -> Option<Value> {
        self.repr.fields.shift_remove(name)
    }

    /// The body [`save`](Self::save) sends: every field not starting with
    /// [`RESERVED_PREFIX`].
    pub fn serialize_fields(&self) -> Map<String, Value> {
        self.repr
            .fields
            .iter()
            .filter(|(name, _)| !name.starts_with(RESERVED_PREFIX))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect()
    }

    /// Pushes the whole entry back with `PUT <self_link>`.
    ///
    /// When the server answers with a representation, the local fields are
    /// replaced by it.
    ///
    /// # Errors
    ///
    /// - [`ApiError::MissingSelfLink`] if the entry has no `self_link`
    /// - any error from [`LaunchpadClient::put`]
    pub async fn save(&mut self) -> Result<(), ApiError> {
        let self_link = self.self_link().ok_or(ApiError::MissingSelfLink)?.to_string();
        let body = Value::Object(self.serialize_fields());

        info!(uri = %self_link, "saving entry");
        let response = self.repr.client.put(&self_link, body).await?;
        if let Some(Value::Object(fields)) = response {
            self.adopt(fields);
        }
        Ok(())
    }

    /// Callback form of [`save`](Self::save); exactly one callback runs.
    pub async fn save_with<S, F>(&mut self, on_success: S, on_failure: F)
    where
        S: FnOnce(&Entry),
        F: FnOnce(ApiError),
    {
        match self.save().await {
            Ok(()) => on_success(self),
            Err(e) => on_failure(e),
        }
    }

    /// Sends a single field change with `PATCH <self_link>`.
    ///
    /// On success the local field holds `value`, or the whole entry takes
    /// the representation the server sent back.
    pub async fn patch_field(&mut self, name: &str, value: Value) -> Result<(), ApiError> {
        let self_link = self.self_link().ok_or(ApiError::MissingSelfLink)?.to_string();
        let mut body = Map::new();
        body.insert(name.to_string(), value.clone());

        info!(uri = %self_link, field = name, "patching entry");
        let response = self.repr.client.patch(&self_link, body).await?;
        match response {
            Some(Value::Object(fields)) => self.adopt(fields),
            _ => {
                self.repr.fields.insert(name.to_string(), value);
            }
        }
        Ok(())
    }

    /// Re-fetches `self_link` and replaces the local fields.
    pub async fn refresh(&mut self) -> Result<(), ApiError> {
        let self_link = self.self_link().ok_or(ApiError::MissingSelfLink)?.to_string();
        let response = self.repr.client.get_value(&self_link).await?;
        match response {
            Value::Object(fields) => {
                self.adopt(fields);
                Ok(())
            }
            _ => Err(ApiError::NotAnObject),
        }
    }

    /// Takes a server representation, keeping local [`RESERVED_PREFIX`] fields.
    fn adopt(&mut self, mut fields: Map<String, Value>) {
        for (name, value) in &self.repr.fields {
            if name.starts_with(RESERVED_PREFIX) {
                fields.insert(name.clone(), value.clone());
            }
        }
        self.repr.fields = fields;
    }
}

/// A paged list of entries.
///
/// Members are left as raw JSON; wrap them yourself if needed.
#[derive(Debug, Clone)]
pub struct Collection {
    repr: Representation,
}

impl Wrapped for Collection {
    fn representation(&self) -> &Representation {
        &self.repr
    }
}

impl Collection {
    /// Total number of members across all pages, when the server reports one.
    pub fn total_size(&self) -> Option<u64> {
        self.get_field("total_size").and_then(Value::as_u64)
    }

    /// Index of the first member on this page.
    pub fn start(&self) -> u64 {
        self.get_field("start").and_then(Value::as_u64).unwrap_or(0)
    }

    /// Members on this page, as raw JSON.
    pub fn entries(&self) -> &[Value] {
        self.get_field("entries")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Link to the following page.
    pub fn next_collection_link(&self) -> Option<&str> {
        self.get_field("next_collection_link").and_then(Value::as_str)
    }

    /// Link to the preceding page.
    pub fn prev_collection_link(&self) -> Option<&str> {
        self.get_field("prev_collection_link").and_then(Value::as_str)
    }

    /// Fetches `size` members starting at `start` from the same collection.
    pub async fn slice(&self, start: u64, size: u64) -> Result<Resource, ApiError> {
        let base = strip_paging(self.original_uri())?;
        let url = append_query(
            &base,
            &[
                ("ws.start".to_string(), start.to_string()),
                ("ws.size".to_string(), size.to_string()),
            ],
        )?;
        self.repr.client.get(&url).await
    }

    /// Fetches the following page, if any.
    pub async fn next_page(&self) -> Result<Option<Resource>, ApiError> {
        match self.next_collection_link() {
            Some(link) => Ok(Some(self.repr.client.get(link).await?)),
            None => Ok(None),
        }
    }

    /// Fetches the preceding page, if any.
    pub async fn prev_page(&self) -> Result<Option<Resource>, ApiError> {
        match self.prev_collection_link() {
            Some(link) => Ok(Some(self.repr.client.get(link).await?)),
            None => Ok(None),
        }
    }
}

fn strip_paging(uri: &str) -> Result<String, ApiError> {
    let mut url = Url::parse(uri).map_err(|e| ApiError::InvalidUri(format!("{uri}: {e}")))?;
    let kept: Vec<(String, String)> = url
        .query_pairs()
        .filter(|(k, _)| k != "ws.start" && k != "ws.size")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();

    if kept.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(kept);
    }
    Ok(url.to_string())
}

/// A wrapped representation.
#[derive(Debug, Clone)]
pub enum Resource {
    /// The service root
    ServiceRoot(ServiceRoot),
    /// A single entry
    Entry(Entry),
    /// A paged collection
    Collection(Collection),
}

impl Resource {
    /// `"service-root"`, `"entry"` or `"collection"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::ServiceRoot(_) => "service-root",
            Self::Entry(_) => "entry",
            Self::Collection(_) => "collection",
        }
    }

    /// Returns the entry, if this is one.
    pub fn into_entry(self) -> Option<Entry> {
        match self {
            Self::Entry(entry) => Some(entry),
            _ => None,
        }
    }

    /// Returns the collection, if this is one.
    pub fn into_collection(self) -> Option<Collection> {
        match self {
            Self::Collection(collection) => Some(collection),
            _ => None,
        }
    }

    /// The fields as a JSON object.
    pub fn to_value(&self) -> Value {
        Value::Object(self.fields().clone())
    }
}

impl Wrapped for Resource {
    fn representation(&self) -> &Representation {
        match self {
            Self::ServiceRoot(r) => r.representation(),
            Self::Entry(r) => r.representation(),
            Self::Collection(r) => r.representation(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::client::tests::{client_with, RecordingTransport};
    use crate::api::transport::{RequestBody, TransportResponse};
    use reqwest::{Method, StatusCode};
    use serde_json::json;

    fn offline_client() -> LaunchpadClient {
        client_with(RecordingTransport::replying(vec![]))
    }

    fn wrap_offline(value: Value) -> Resource {
        wrap(offline_client(), "http://example.com/api/beta/thing", value).unwrap()
    }

    #[test]
    fn test_service_root_wins_over_total_size() {
        let resource = wrap_offline(json!({
            "resource_type_link": "http://example.com/api/beta/#service-root",
            "total_size": 10,
            "self_link": "http://example.com/api/beta/",
        }));
        assert_eq!(resource.kind(), "service-root");
    }

    #[test]
    fn test_entry_without_total_size() {
        let resource = wrap_offline(json!({
            "resource_type_link": "http://example.com/api/beta/#bug",
            "title": "Crash",
        }));
        assert_eq!(resource.kind(), "entry");
    }

    #[test]
    fn test_collection_with_zero_or_null_total_size() {
        assert_eq!(wrap_offline(json!({"total_size": 0})).kind(), "collection");
        assert_eq!(wrap_offline(json!({"total_size": null})).kind(), "collection");
    }

    #[test]
    fn test_missing_type_link_falls_through_to_entry() {
        assert_eq!(wrap_offline(json!({})).kind(), "entry");
        assert_eq!(wrap_offline(json!({"resource_type_link": 5})).kind(), "entry");
    }

    #[test]
    fn test_service_root_marker_must_be_suffix() {
        let resource = wrap_offline(json!({
            "resource_type_link": "http://example.com/#service-root/bug",
        }));
        assert_eq!(resource.kind(), "entry");
    }

    #[test]
    fn test_non_object_rejected() {
        let result = wrap(offline_client(), "http://example.com/x", json!([1, 2]));
        assert!(matches!(result, Err(ApiError::NotAnObject)));
    }

    #[test]
    fn test_fields_keep_server_order() {
        let resource = wrap_offline(json!({"zeta": 1, "alpha": 2, "mid": 3}));
        let keys: Vec<&str> = resource.fields().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["zeta", "alpha", "mid"]);
        assert_eq!(resource.original_uri(), "http://example.com/api/beta/thing");
    }

    #[test]
    fn test_serialize_fields_skips_reserved_prefix() {
        let mut entry = wrap_offline(json!({
            "self_link": "http://example.com/api/beta/bugs/1",
            "title": "Crash",
            "lp_original_uri": "http://example.com/api/beta/bugs/1",
        }))
        .into_entry()
        .unwrap();
        entry.set_field("lp_note", json!("local only"));

        let body = entry.serialize_fields();
        assert_eq!(
            Value::Object(body),
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Crash"})
        );
    }

    #[tokio::test]
    async fn test_unmodified_save_puts_representation() {
        let representation = json!({
            "self_link": "http://example.com/api/beta/bugs/1",
            "resource_type_link": "http://example.com/api/beta/#bug",
            "title": "Crash",
            "tags": ["a", "b"],
            "lp_client_state": "internal",
        });
        let transport = RecordingTransport::replying(vec![TransportResponse::new(StatusCode::OK, "")]);
        let client = client_with(transport.clone());
        let mut entry = wrap(client, "bugs/1", representation.clone())
            .unwrap()
            .into_entry()
            .unwrap();

        entry.save().await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, Method::PUT);
        assert_eq!(sent[0].url, "http://example.com/api/beta/bugs/1");
        assert!(sent[0]
            .headers
            .contains(&("Content-Type".to_string(), "application/json".to_string())));

        let mut expected = representation.as_object().unwrap().clone();
        expected.remove("lp_client_state");
        assert_eq!(sent[0].body, Some(RequestBody::Json(Value::Object(expected))));
        assert_eq!(entry.get_field("title"), Some(&json!("Crash")));
    }

    #[tokio::test]
    async fn test_save_adopts_returned_representation() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            209,
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Fixed", "date_last_updated": "now"}),
        )]);
        let mut entry = wrap(
            client_with(transport),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Old"}),
        )
        .unwrap()
        .into_entry()
        .unwrap();
        entry.set_field("title", json!("Fixed"));

        entry.save().await.unwrap();
        assert_eq!(entry.get_field("date_last_updated"), Some(&json!("now")));
    }

    #[tokio::test]
    async fn test_failed_save_keeps_local_fields() {
        let transport = RecordingTransport::replying(vec![TransportResponse::new(
            StatusCode::PRECONDITION_FAILED,
            "stale",
        )]);
        let mut entry = wrap(
            client_with(transport),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Old"}),
        )
        .unwrap()
        .into_entry()
        .unwrap();
        entry.set_field("title", json!("New"));

        let mut called = 0;
        let mut failure = None;
        entry.save_with(|_| called += 1, |e| failure = Some(e)).await;

        assert_eq!(called, 0);
        assert_eq!(failure.and_then(|e| e.status()), Some(StatusCode::PRECONDITION_FAILED));
        assert_eq!(entry.get_field("title"), Some(&json!("New")));
    }

    #[tokio::test]
    async fn test_save_without_self_link() {
        let mut entry = wrap_offline(json!({"title": "orphan"})).into_entry().unwrap();
        assert!(matches!(entry.save().await, Err(ApiError::MissingSelfLink)));
    }

    #[tokio::test]
    async fn test_patch_field_sends_only_that_field() {
        let transport = RecordingTransport::replying(vec![TransportResponse::new(StatusCode::OK, "")]);
        let mut entry = wrap(
            client_with(transport.clone()),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Old", "status": "New"}),
        )
        .unwrap()
        .into_entry()
        .unwrap();

        entry.patch_field("status", json!("Triaged")).await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::PATCH);
        assert_eq!(sent[0].body, Some(RequestBody::Json(json!({"status": "Triaged"}))));
        assert_eq!(entry.get_field("status"), Some(&json!("Triaged")));
        assert_eq!(entry.get_field("title"), Some(&json!("Old")));
    }

    #[tokio::test]
    async fn test_collection_accessors_and_slice() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"total_size": 7, "start": 5, "entries": [{"id": 6}, {"id": 7}]}),
        )]);
        let collection = wrap(
            client_with(transport.clone()),
            "http://example.com/api/beta/bugs?status=New&ws.start=0&ws.size=5",
            json!({
                "total_size": 7,
                "start": 0,
                "entries": [{"id": 1}, {"id": 2}],
                "next_collection_link": "http://example.com/api/beta/bugs?ws.start=5",
            }),
        )
        .unwrap()
        .into_collection()
        .unwrap();

        assert_eq!(collection.total_size(), Some(7));
        assert_eq!(collection.start(), 0);
        assert_eq!(collection.entries().len(), 2);
        assert!(collection.prev_collection_link().is_none());

        let page = collection.slice(5, 2).await.unwrap().into_collection().unwrap();
        assert_eq!(
            transport.sent()[0].url,
            "http://example.com/api/beta/bugs?status=New&ws.start=5&ws.size=2"
        );
        assert_eq!(page.start(), 5);
        assert_eq!(page.entries()[1], json!({"id": 7}));
    }

    #[tokio::test]
    async fn test_prev_page_absent() {
        let collection = wrap_offline(json!({"total_size": 1, "entries": []}))
            .into_collection()
            .unwrap();
        assert!(collection.prev_page().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_follow_link_prefers_collection_link() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"total_size": 0, "entries": []}),
        )]);
        let root = wrap(
            client_with(transport.clone()),
            "http://example.com/api/beta/",
            json!({
                "resource_type_link": "http://example.com/api/beta/#service-root",
                "bugs_collection_link": "http://example.com/api/beta/bugs",
                "bugs_link": "http://example.com/api/beta/wrong",
            }),
        )
        .unwrap();

        let bugs = root.follow_link("bugs").await.unwrap();
        assert_eq!(bugs.kind(), "collection");
        assert_eq!(transport.sent()[0].url, "http://example.com/api/beta/bugs");

        assert!(matches!(
            root.follow_link("people").await,
            Err(ApiError::MissingLink(name)) if name == "people"
        ));
    }

    #[tokio::test]
    async fn test_follow_link_falls_back_to_plain_link() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"self_link": "http://example.com/api/beta/~owner", "name": "owner"}),
        )]);
        let bug = wrap(
            client_with(transport.clone()),
            "http://example.com/api/beta/bugs/1",
            json!({
                "self_link": "http://example.com/api/beta/bugs/1",
                "owner_link": "http://example.com/api/beta/~owner",
            }),
        )
        .unwrap();

        let owner = bug.follow_link("owner").await.unwrap();
        assert_eq!(owner.kind(), "entry");
        assert_eq!(transport.sent()[0].url, "http://example.com/api/beta/~owner");
    }

    #[test]
    fn test_null_collection_link_falls_back() {
        let root = wrap_offline(json!({
            "bugs_collection_link": null,
            "bugs_link": "http://example.com/api/beta/b",
            "people_link": null,
        }));
        assert_eq!(root.link("bugs"), Some("http://example.com/api/beta/b"));
        assert_eq!(root.link("people"), None);
    }

    #[tokio::test]
    async fn test_refresh_replaces_fields() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Server"}),
        )]);
        let mut entry = wrap(
            client_with(transport.clone()),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Local", "heat": 2}),
        )
        .unwrap()
        .into_entry()
        .unwrap();

        entry.refresh().await.unwrap();

        let sent = transport.sent();
        assert_eq!(sent[0].method, Method::GET);
        assert_eq!(sent[0].url, "http://example.com/api/beta/bugs/1");
        assert_eq!(entry.get_field("title"), Some(&json!("Server")));
        assert_eq!(entry.get_field("heat"), None);
    }

    #[tokio::test]
    async fn test_refresh_rejects_non_object() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(200, json!(["a"]))]);
        let mut entry = wrap(
            client_with(transport),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Local"}),
        )
        .unwrap()
        .into_entry()
        .unwrap();

        assert!(matches!(entry.refresh().await, Err(ApiError::NotAnObject)));
        assert_eq!(entry.get_field("title"), Some(&json!("Local")));
    }

    #[tokio::test]
    async fn test_server_replies_keep_reserved_fields() {
        let reply = json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Server"});
        let transport = RecordingTransport::replying(vec![
            RecordingTransport::json(200, reply.clone()),
            RecordingTransport::json(209, reply.clone()),
            RecordingTransport::json(200, reply),
        ]);
        let mut entry = wrap(
            client_with(transport.clone()),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Local"}),
        )
        .unwrap()
        .into_entry()
        .unwrap();
        entry.set_field("lp_note", json!("keep me"));

        entry.save().await.unwrap();
        assert_eq!(entry.get_field("lp_note"), Some(&json!("keep me")));
        assert_eq!(entry.get_field("title"), Some(&json!("Server")));

        entry.patch_field("title", json!("Patched")).await.unwrap();
        assert_eq!(entry.get_field("lp_note"), Some(&json!("keep me")));

        entry.refresh().await.unwrap();
        assert_eq!(entry.get_field("lp_note"), Some(&json!("keep me")));

        let Some(RequestBody::Json(body)) = &transport.sent()[0].body else {
            panic!("expected a JSON body");
        };
        assert!(body.get("lp_note").is_none());
    }

    #[tokio::test]
    async fn test_removed_field_is_not_saved() {
        let transport = RecordingTransport::replying(vec![TransportResponse::new(StatusCode::OK, "")]);
        let mut entry = wrap(
            client_with(transport.clone()),
            "bugs/1",
            json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Crash", "tags": []}),
        )
        .unwrap()
        .into_entry()
        .unwrap();

        assert_eq!(entry.remove_field("tags"), Some(json!([])));
        assert_eq!(entry.remove_field("tags"), None);
        entry.save().await.unwrap();

        assert_eq!(
            transport.sent()[0].body,
            Some(RequestBody::Json(
                json!({"self_link": "http://example.com/api/beta/bugs/1", "title": "Crash"})
            ))
        );
    }

    #[tokio::test]
    async fn test_prev_page_follows_link() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"total_size": 4, "start": 0, "entries": [{"id": 1}, {"id": 2}]}),
        )]);
        let collection = wrap(
            client_with(transport.clone()),
            "http://example.com/api/beta/bugs?ws.start=2&ws.size=2",
            json!({
                "total_size": 4,
                "start": 2,
                "entries": [{"id": 3}, {"id": 4}],
                "prev_collection_link": "http://example.com/api/beta/bugs?ws.start=0&ws.size=2",
            }),
        )
        .unwrap()
        .into_collection()
        .unwrap();

        let page = collection.prev_page().await.unwrap().unwrap().into_collection().unwrap();
        assert_eq!(
            transport.sent()[0].url,
            "http://example.com/api/beta/bugs?ws.start=0&ws.size=2"
        );
        assert_eq!(page.start(), 0);
        assert_eq!(page.entries()[0], json!({"id": 1}));
    }

    #[tokio::test]
    async fn test_follow_link_runs_on_spawned_task() {
        let transport = RecordingTransport::replying(vec![RecordingTransport::json(
            200,
            json!({"total_size": 0, "entries": []}),
        )]);
        let root = wrap(
            client_with(transport),
            "http://example.com/api/beta/",
            json!({"bugs_collection_link": "http://example.com/api/beta/bugs"}),
        )
        .unwrap();

        let bugs = tokio::spawn(async move { root.follow_link("bugs").await })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(bugs.kind(), "collection");
    }
}
