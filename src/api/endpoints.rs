//! API endpoint surface.
//!
//! One function per backend endpoint, each a thin mapping from call
//! arguments to a [`RequestDescriptor`] handed to [`ApiClient`]. No
//! validation, no retries, no caching. The descriptor constructors are
//! split out so the call contract stays testable without a transport.

use serde_json::{json, Value};

use crate::api::request::{ApiClient, RequestDescriptor, RequestError};
use crate::state::{Book, GraphLink, GraphNode};

// ============ Descriptors ============

pub fn get_books_request() -> RequestDescriptor {
    RequestDescriptor::get("/books")
}

pub fn post_book_request(name: &str, author: &str) -> RequestDescriptor {
    RequestDescriptor::post("/books", json!({ "name": name, "author": author }))
}

pub fn get_nodes_request() -> RequestDescriptor {
    RequestDescriptor::get("/nodes")
}

pub fn get_links_request() -> RequestDescriptor {
    RequestDescriptor::get("/links")
}

pub fn get_world_request() -> RequestDescriptor {
    RequestDescriptor::get("/world")
}

pub fn get_family_request() -> RequestDescriptor {
    RequestDescriptor::get("/family")
}

pub fn upload_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post("/upload", json!({ "data": data }))
}

pub fn chat_request(data: Value) -> RequestDescriptor {
    RequestDescriptor::post("/chat", json!({ "data": data }))
}

pub fn speech_to_text_request() -> RequestDescriptor {
    RequestDescriptor::get("/speechtotext")
}

// ============ Calls ============

/// Fetch the book list.
pub async fn get_books(client: &ApiClient) -> Result<Option<Vec<Book>>, RequestError> {
    client.send_as(get_books_request()).await
}

/// Create a book.
pub async fn post_book(
    client: &ApiClient,
    name: &str,
    author: &str,
) -> Result<Option<Value>, RequestError> {
    client.send(post_book_request(name, author)).await
}

/// Fetch the personal relation graph nodes.
pub async fn get_nodes(client: &ApiClient) -> Result<Option<Vec<GraphNode>>, RequestError> {
    client.send_as(get_nodes_request()).await
}

/// Fetch the personal relation graph edges.
pub async fn get_links(client: &ApiClient) -> Result<Option<Vec<GraphLink>>, RequestError> {
    client.send_as(get_links_request()).await
}

/// Fetch the world graph nodes.
pub async fn get_world(client: &ApiClient) -> Result<Option<Vec<GraphNode>>, RequestError> {
    client.send_as(get_world_request()).await
}

/// Fetch the family graph nodes.
pub async fn get_family(client: &ApiClient) -> Result<Option<Vec<GraphNode>>, RequestError> {
    client.send_as(get_family_request()).await
}

/// Upload parsed file content for import.
pub async fn upload(client: &ApiClient, data: Value) -> Result<Option<Value>, RequestError> {
    client.send(upload_request(data)).await
}

/// Send one chat turn.
pub async fn chat(client: &ApiClient, data: Value) -> Result<Option<Value>, RequestError> {
    client.send(chat_request(data)).await
}

/// Fetch the latest speech-to-text transcript.
pub async fn speech_to_text(client: &ApiClient) -> Result<Option<Value>, RequestError> {
    client.send(speech_to_text_request()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::request::{resolve_url, Method};

    #[test]
    fn test_get_endpoints_issue_documented_paths() {
        for (descriptor, path) in [
            (get_books_request(), "/books"),
            (get_nodes_request(), "/nodes"),
            (get_links_request(), "/links"),
            (get_world_request(), "/world"),
            (get_family_request(), "/family"),
            (speech_to_text_request(), "/speechtotext"),
        ] {
            assert_eq!(descriptor.method, Method::Get);
            assert_eq!(descriptor.path, path);
            assert_eq!(descriptor.payload, None);
            assert!(!descriptor.with_token);
        }
    }

    #[test]
    fn test_get_books_url_carries_base_prefix() {
        let descriptor = get_books_request();
        assert_eq!(resolve_url("/api", &descriptor.path), "/api/books");
    }

    #[test]
    fn test_post_book_payload_shape() {
        let descriptor = post_book_request("A", "B");
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "/books");
        assert_eq!(
            descriptor.payload,
            Some(json!({ "name": "A", "author": "B" }))
        );
    }

    #[test]
    fn test_chat_wraps_payload_in_data_field() {
        let descriptor = chat_request(json!("hello"));
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "/chat");
        assert_eq!(descriptor.payload, Some(json!({ "data": "hello" })));
    }

    #[test]
    fn test_upload_wraps_payload_in_data_field() {
        let descriptor = upload_request(json!({ "filename": "f.csv", "content": "a,b" }));
        assert_eq!(descriptor.method, Method::Post);
        assert_eq!(descriptor.path, "/upload");
        assert_eq!(
            descriptor.payload,
            Some(json!({ "data": { "filename": "f.csv", "content": "a,b" } }))
        );
    }
}
