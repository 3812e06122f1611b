//! End-to-end tests of the HTTP API
//!
//! Every test drives the real router through `axum_test::TestServer`
//! against an in-memory store seeded with two posts.

use axum::http::{HeaderValue, StatusCode, header};
use axum_test::TestServer;
use blog::prelude::*;
use serde_json::{Value, json};

// =============================================================================
// Helper functions
// =============================================================================

fn create_test_server() -> (TestServer, PostStore) {
    let store = PostStore::new(InMemoryStorage::with_seed_posts());
    let app = ServerBuilder::new()
        .with_store(store.clone())
        .build()
        .expect("Failed to build app");

    let server = TestServer::try_new(app).expect("Failed to create test server");
    (server, store)
}

fn empty_test_server() -> TestServer {
    let app = ServerBuilder::new()
        .with_storage(InMemoryStorage::new())
        .build()
        .expect("Failed to build app");
    TestServer::try_new(app).expect("Failed to create test server")
}

fn ids(posts: &[Post]) -> Vec<u64> {
    posts.iter().map(|p| p.id).collect()
}

async fn add_post(server: &TestServer, title: &str, author: &str, date: &str) -> Post {
    let response = server
        .post("/api/posts")
        .json(&json!({
            "title": title,
            "content": format!("All about {}", title),
            "author": author,
            "date": date
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json()
}

// =============================================================================
// Health Check Tests
// =============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_endpoint() {
        let (server, _) = create_test_server();

        let response = server.get("/health").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(body["status"], "ok");
    }
}

// =============================================================================
// List Tests
// =============================================================================

mod list_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_returns_seed_posts_in_order() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts").await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![1, 2]);
        assert_eq!(posts[0].title, "First post");
    }

    #[tokio::test]
    async fn test_list_empty() {
        let server = empty_test_server();

        let response = server.get("/api/posts").await;
        response.assert_status_ok();

        let body: Vec<Value> = response.json();
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_sort_by_title_desc() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts")
            .add_query_param("sort", "title")
            .add_query_param("direction", "desc")
            .await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_sort_defaults_to_ascending() {
        let server = empty_test_server();
        add_post(&server, "zebra", "Zoe", "2024-01-01").await;
        add_post(&server, "aardvark", "Al", "2024-01-02").await;

        let response = server.get("/api/posts").add_query_param("sort", "title").await;
        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_sort_by_date_is_chronological_and_stable() {
        let server = empty_test_server();
        add_post(&server, "a", "X", "2024-03-01").await;
        add_post(&server, "b", "X", "2023-12-25").await;
        add_post(&server, "c", "X", "2024-03-01").await;

        let response = server
            .get("/api/posts")
            .add_query_param("sort", "date")
            .add_query_param("direction", "desc")
            .await;
        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![1, 3, 2]);
    }

    #[tokio::test]
    async fn test_sort_does_not_change_stored_order() {
        let (server, _) = create_test_server();

        server
            .get("/api/posts")
            .add_query_param("sort", "title")
            .add_query_param("direction", "desc")
            .await
            .assert_status_ok();

        let posts: Vec<Post> = server.get("/api/posts").await.json();
        assert_eq!(ids(&posts), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_invalid_sort_field() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts").add_query_param("sort", "bogus").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Invalid sort field. Valid fields are 'title', 'content', 'author' and 'date'."
        );
    }

    #[tokio::test]
    async fn test_invalid_sort_field_on_empty_store() {
        let server = empty_test_server();

        let response = server.get("/api/posts").add_query_param("sort", "bogus").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_invalid_direction() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts")
            .add_query_param("sort", "title")
            .add_query_param("direction", "sideways")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Invalid sort direction. Valid directions are 'asc' and 'desc'."
        );
    }

    #[tokio::test]
    async fn test_repeated_sort_uses_first_value() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts?sort=title&sort=bogus&direction=desc&direction=sideways")
            .await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![2, 1]);
    }

    #[tokio::test]
    async fn test_repeated_sort_with_invalid_first_value_is_json_error() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts?sort=bogus&sort=title").await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let content_type = response.header(header::CONTENT_TYPE);
        assert!(content_type.to_str().unwrap().starts_with("application/json"));

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Invalid sort field. Valid fields are 'title', 'content', 'author' and 'date'."
        );
    }

    #[tokio::test]
    async fn test_invalid_direction_without_sort() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts")
            .add_query_param("direction", "up")
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Create Tests
// =============================================================================

mod create_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_post() {
        let (server, _) = create_test_server();

        let response = server
            .post("/api/posts")
            .json(&json!({
                "title": "Third post",
                "content": "This is the third post.",
                "author": "Grace",
                "date": "2024-05-01"
            }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["id"], 3);
        assert_eq!(body["title"], "Third post");
        assert_eq!(body["author"], "Grace");
        assert_eq!(body["date"], "2024-05-01");

        let posts: Vec<Post> = server.get("/api/posts").await.json();
        assert_eq!(ids(&posts), vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn test_create_stamps_date() {
        let (server, _) = create_test_server();

        let response = server
            .post("/api/posts")
            .json(&json!({ "title": "t", "content": "c", "author": "a" }))
            .await;
        response.assert_status(StatusCode::CREATED);

        let post: Post = response.json();
        assert!(post.parsed_date().is_some());
    }

    #[tokio::test]
    async fn test_create_ids_strictly_increase() {
        let server = empty_test_server();

        let mut created = Vec::new();
        for title in ["one", "two", "three", "four"] {
            created.push(add_post(&server, title, "A", "2024-01-01").await.id);
        }
        assert_eq!(created, vec![1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_create_after_deleting_highest_uses_max_plus_one() {
        let server = empty_test_server();
        for title in ["one", "two", "three"] {
            add_post(&server, title, "A", "2024-01-01").await;
        }

        server.delete("/api/posts/2").await.assert_status_ok();
        assert_eq!(add_post(&server, "four", "A", "2024-01-01").await.id, 4);
    }

    #[tokio::test]
    async fn test_create_missing_fields_leaves_collection_unchanged() {
        let (server, _) = create_test_server();

        let bodies = [
            json!({ "content": "c", "author": "a" }),
            json!({ "title": "t", "author": "a" }),
            json!({ "title": "t", "content": "c" }),
            json!({ "title": "", "content": "c", "author": "a" }),
            json!({ "title": "t", "content": null, "author": "a" }),
            json!({ "title": "t", "content": "c", "author": 0 }),
        ];

        for body in bodies {
            let response = server.post("/api/posts").json(&body).await;
            response.assert_status(StatusCode::BAD_REQUEST);

            let error: Value = response.json();
            assert_eq!(error["message"], "Title, content and author are required");
        }

        let posts: Vec<Post> = server.get("/api/posts").await.json();
        assert_eq!(ids(&posts), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_create_rejects_non_object_body() {
        let (server, _) = create_test_server();

        let response = server.post("/api/posts").json(&json!(["title"])).await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Request body must be a JSON object");
    }

    #[tokio::test]
    async fn test_create_rejects_malformed_json() {
        let (server, _) = create_test_server();

        let response = server.post("/api/posts").text("{ not json").await;
        response.assert_status(StatusCode::BAD_REQUEST);
    }
}

// =============================================================================
// Get / Update / Delete Tests
// =============================================================================

mod item_tests {
    use super::*;

    #[tokio::test]
    async fn test_get_post() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts/2").await;
        response.assert_status_ok();

        let post: Post = response.json();
        assert_eq!(post.title, "Second post");
    }

    #[tokio::test]
    async fn test_get_unknown_post() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts/42").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "Post with id 42 not found");
    }

    #[tokio::test]
    async fn test_partial_update_keeps_other_fields() {
        let (server, store) = create_test_server();
        let before = store.get(1).await.unwrap();

        let response = server
            .put("/api/posts/1")
            .json(&json!({ "title": "Renamed" }))
            .await;
        response.assert_status_ok();

        let updated: Post = response.json();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.title, "Renamed");
        assert_eq!(updated.content, before.content);
        assert_eq!(updated.author, before.author);
        assert_eq!(updated.date, before.date);

        assert_eq!(store.get(1).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn test_update_ignores_id_in_body() {
        let (server, store) = create_test_server();

        let response = server
            .put("/api/posts/1")
            .json(&json!({ "id": 2, "content": "changed" }))
            .await;
        response.assert_status_ok();

        let updated: Post = response.json();
        assert_eq!(updated.id, 1);
        assert_eq!(store.get(2).await.unwrap().content, "This is the second post.");
    }

    #[tokio::test]
    async fn test_update_unknown_post() {
        let (server, store) = create_test_server();
        let before = store.list().await.unwrap();

        let response = server
            .put("/api/posts/99")
            .json(&json!({ "title": "Nope" }))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "Post with id 99 not found");
        assert_eq!(store.list().await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_update_unknown_post_with_bad_body_is_not_found() {
        let (server, _) = create_test_server();

        let response = server.put("/api/posts/99").text("garbage").await;
        response.assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_update_rejects_empty_field() {
        let (server, store) = create_test_server();
        let before = store.get(1).await.unwrap();

        let response = server
            .put("/api/posts/1")
            .json(&json!({ "author": "" }))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert_eq!(body["message"], "Field 'author' must be a non-empty string");
        assert_eq!(store.get(1).await.unwrap(), before);
    }

    #[tokio::test]
    async fn test_delete_post() {
        let (server, _) = create_test_server();

        let response = server.delete("/api/posts/1").await;
        response.assert_status_ok();

        let body: Value = response.json();
        assert_eq!(
            body["message"],
            "Post with id 1 has been deleted successfully."
        );

        server
            .get("/api/posts/1")
            .await
            .assert_status(StatusCode::NOT_FOUND);

        let posts: Vec<Post> = server.get("/api/posts").await.json();
        assert_eq!(ids(&posts), vec![2]);
    }

    #[tokio::test]
    async fn test_delete_twice() {
        let (server, _) = create_test_server();

        server.delete("/api/posts/2").await.assert_status_ok();

        let response = server.delete("/api/posts/2").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "Post with id 2 not found");
    }

    #[tokio::test]
    async fn test_non_numeric_id_is_not_found() {
        let (server, _) = create_test_server();

        let response = server.delete("/api/posts/abc").await;
        response.assert_status(StatusCode::NOT_FOUND);

        let body: Value = response.json();
        assert_eq!(body["message"], "Post with id abc not found");
    }
}

// =============================================================================
// Search Tests
// =============================================================================

mod search_tests {
    use super::*;

    #[tokio::test]
    async fn test_search_term_matches_all_posts_containing_it() {
        let (server, _) = create_test_server();
        add_post(&server, "Gardening", "Bea", "2024-04-04").await;

        let response = server
            .get("/api/posts/search")
            .add_query_param("term", "post")
            .await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_matches_author_and_date() {
        let (server, _) = create_test_server();
        add_post(&server, "Gardening", "Bea", "2024-04-04").await;

        let posts: Vec<Post> = server
            .get("/api/posts/search")
            .add_query_param("term", "Bea")
            .await
            .json();
        assert_eq!(ids(&posts), vec![3]);

        let posts: Vec<Post> = server
            .get("/api/posts/search")
            .add_query_param("term", "2024-04")
            .await
            .json();
        assert_eq!(ids(&posts), vec![3]);
    }

    #[tokio::test]
    async fn test_search_without_term_returns_everything() {
        let (server, _) = create_test_server();

        let posts: Vec<Post> = server.get("/api/posts/search").await.json();
        assert_eq!(ids(&posts), vec![1, 2]);

        let posts: Vec<Post> = server
            .get("/api/posts/search")
            .add_query_param("term", "")
            .await
            .json();
        assert_eq!(ids(&posts), vec![1, 2]);
    }

    #[tokio::test]
    async fn test_search_with_no_match() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts/search")
            .add_query_param("term", "nothing like this")
            .await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_repeated_term_uses_first_value() {
        let (server, _) = create_test_server();

        let response = server.get("/api/posts/search?term=First&term=Second").await;
        response.assert_status_ok();

        let posts: Vec<Post> = response.json();
        assert_eq!(ids(&posts), vec![1]);
    }

    #[tokio::test]
    async fn test_search_per_field_terms() {
        let (server, _) = create_test_server();

        let posts: Vec<Post> = server
            .get("/api/posts/search")
            .add_query_param("title", "Second")
            .await
            .json();
        assert_eq!(ids(&posts), vec![2]);

        let posts: Vec<Post> = server
            .get("/api/posts/search")
            .add_query_param("title", "Second")
            .add_query_param("content", "first")
            .await
            .json();
        assert_eq!(ids(&posts), vec![1, 2]);
    }
}

// =============================================================================
// CORS Tests
// =============================================================================

mod cors_tests {
    use super::*;

    #[tokio::test]
    async fn test_any_origin_is_allowed() {
        let (server, _) = create_test_server();

        let response = server
            .get("/api/posts")
            .add_header(header::ORIGIN, HeaderValue::from_static("http://frontend.example"))
            .await;
        response.assert_status_ok();

        assert_eq!(response.header(header::ACCESS_CONTROL_ALLOW_ORIGIN), "*");
    }
}
