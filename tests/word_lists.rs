//! Execution tests for account and word list endpoints.

use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use wordnik::{
    List, QueryOption, WordList, WordListWord, WordnikClient, WordnikError, DEFAULT_PAGE_SIZE,
};

const TOKEN: &str = "user-token";

async fn setup() -> (MockServer, WordnikClient) {
    let mock_server = MockServer::start().await;
    let client = WordnikClient::with_base_url("test-key", &mock_server.uri()).unwrap();
    (mock_server, client)
}

fn lists_json(count: usize, offset: usize) -> serde_json::Value {
    let lists: Vec<_> = (0..count)
        .map(|i| {
            serde_json::json!({
                "id": offset + i + 1,
                "permalink": format!("list-{}", offset + i),
                "name": format!("List {}", offset + i),
                "type": "PUBLIC"
            })
        })
        .collect();
    serde_json::Value::Array(lists)
}

#[tokio::test]
async fn test_authenticate_sends_password_as_query() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/account.json/authenticate/alice"))
        .and(query_param("password", "s3cret"))
        .and(header("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": TOKEN,
            "userId": 42,
            "userSignature": "sig"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = client.authenticate("alice", "s3cret").await.unwrap();
    assert!(auth.is_valid());
    assert_eq!(auth.token, TOKEN);
}

#[tokio::test]
async fn test_authenticate_post_sends_password_as_body() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/account.json/authenticate/alice"))
        .and(body_string("s3cret"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": TOKEN,
            "userId": 42
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let auth = client.authenticate_post("alice", "s3cret").await.unwrap();
    assert_eq!(auth.user_id, 42);
}

#[tokio::test]
async fn test_api_token_status() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/account.json/apiTokenStatus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "valid": true,
            "token": "test-key",
            "remainingCalls": 14000
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let status = client.api_token_status().await.unwrap();
    assert!(status.valid);
    assert_eq!(status.remaining_calls, 14000);
}

#[tokio::test]
async fn test_logged_in_user_sends_auth_token() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/account.json/user"))
        .and(header("auth_token", TOKEN))
        .and(header("api_key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 42,
            "username": "alice"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let user = client.logged_in_user(TOKEN).await.unwrap();
    assert_eq!(user.username, "alice");
}

#[tokio::test]
async fn test_create_word_list_posts_body() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/wordLists.json"))
        .and(header("auth_token", TOKEN))
        .and(body_json(serde_json::json!({
            "name": "WordListFuncTest",
            "type": "PRIVATE"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "id": 9,
            "permalink": "wordlistfunctest",
            "name": "WordListFuncTest",
            "type": "PRIVATE"
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let list = WordList::new("WordListFuncTest", "PRIVATE");
    let created = client.create_word_list(TOKEN, &list).await.unwrap();
    assert_eq!(created.permalink.as_deref(), Some("wordlistfunctest"));
    assert!(created.is_private());
}

#[tokio::test]
async fn test_word_list_lifecycle() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wordList.json/my-list"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "permalink": "my-list",
            "name": "Mine",
            "numberWordsInList": 2
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("PUT"))
        .and(path("/wordList.json/my-list"))
        .and(body_json(serde_json::json!({"name": "Renamed", "type": "PUBLIC"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/wordList.json/my-list/words"))
        .and(body_json(serde_json::json!([{"word": "cat"}, {"word": "dog"}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("POST"))
        .and(path("/wordList.json/my-list/deleteWords"))
        .and(body_json(serde_json::json!([{"word": "dog"}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("DELETE"))
        .and(path("/wordList.json/my-list"))
        .and(header("auth_token", TOKEN))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let list = client.word_list(TOKEN, "my-list").await.unwrap();
    assert_eq!(list.number_words_in_list, 2);

    client
        .update_word_list(TOKEN, "my-list", &WordList::new("Renamed", "PUBLIC"))
        .await
        .unwrap();
    client
        .add_words_to_word_list(TOKEN, "my-list", &["cat", "dog"])
        .await
        .unwrap();
    client
        .delete_words_from_word_list(TOKEN, "my-list", &["dog"])
        .await
        .unwrap();
    client.delete_word_list(TOKEN, "my-list").await.unwrap();
}

#[tokio::test]
async fn test_word_list_words_defaults_and_sort() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wordList.json/my-list/words"))
        .and(query_param("sortBy", "alpha"))
        .and(query_param("sortOrder", "desc"))
        .and(query_param("limit", "100"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"id": 1, "word": "cat", "username": "alice"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let words = client
        .word_list_words(TOKEN, "my-list", &[QueryOption::sort_by("alpha")])
        .await
        .unwrap();
    assert_eq!(words[0].word, "cat");
}

#[tokio::test]
async fn test_list_all_word_lists_pages_until_short_page() {
    let (mock_server, client) = setup().await;
    let page_size = DEFAULT_PAGE_SIZE as usize;

    Mock::given(method("GET"))
        .and(path("/account.json/wordLists"))
        .and(query_param("skip", "0"))
        .and(query_param("limit", page_size.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(lists_json(page_size, 0)))
        .expect(1)
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/account.json/wordLists"))
        .and(query_param("skip", page_size.to_string()))
        .respond_with(ResponseTemplate::new(200).set_body_json(lists_json(3, page_size)))
        .expect(1)
        .mount(&mock_server)
        .await;

    let lists = WordList::list_all(&client, &TOKEN.to_string()).await.unwrap();
    assert_eq!(lists.len(), page_size + 3);
    assert_eq!(
        lists.last().and_then(|l| l.permalink.as_deref()),
        Some(format!("list-{}", page_size + 2).as_str())
    );
}

#[tokio::test]
async fn test_list_page_of_word_list_words() {
    let (mock_server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/wordList.json/my-list/words"))
        .and(query_param("skip", "10"))
        .and(query_param("limit", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"word": "cat"}, {"word": "dog"}
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let query = (TOKEN.to_string(), "my-list".to_string());
    let page = WordListWord::list_page(&client, &query, 10, 2).await.unwrap();
    assert_eq!(page.len(), 2);
    assert!(page.has_more);
    assert_eq!(page.next_skip(), 12);
}

#[tokio::test]
async fn test_empty_credentials_send_nothing() {
    let (mock_server, client) = setup().await;
    let list = WordList::new("Mine", "PUBLIC");

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    assert!(matches!(
        client.authenticate("", "pw").await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.authenticate("alice", "").await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.authenticate_post("", "pw").await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.authenticate_post("alice", "").await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.logged_in_user("").await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.word_lists_for_user("", &[]).await,
        Err(WordnikError::InvalidArgument(_))
    ));
    assert!(matches!(
        client.create_word_list("", &list).await,
        Err(WordnikError::InvalidArgument(_))
    ));

    for (token, permalink) in [("", "my-list"), (TOKEN, "")] {
        assert!(matches!(
            client.word_list(token, permalink).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.update_word_list(token, permalink, &list).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.delete_word_list(token, permalink).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.word_list_words(token, permalink, &[]).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.add_words_to_word_list(token, permalink, &["cat"]).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.delete_words_from_word_list(token, permalink, &["cat"]).await,
            Err(WordnikError::InvalidArgument(_))
        ));
    }
}

#[tokio::test]
async fn test_dot_segments_never_leave_the_list_path() {
    let (mock_server, client) = setup().await;

    Mock::given(wiremock::matchers::any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    for permalink in [".", ".."] {
        assert!(matches!(
            client.delete_word_list(TOKEN, permalink).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client.word_list_words(TOKEN, permalink, &[]).await,
            Err(WordnikError::InvalidArgument(_))
        ));
        assert!(matches!(
            client
                .update_word_list(TOKEN, permalink, &WordList::new("x", "PUBLIC"))
                .await,
            Err(WordnikError::InvalidArgument(_))
        ));
    }
    assert!(matches!(
        client.authenticate("..", "pw").await,
        Err(WordnikError::InvalidArgument(_))
    ));
}

#[tokio::test]
async fn test_add_words_omits_empty_word() {
    let (mock_server, client) = setup().await;

    Mock::given(method("POST"))
        .and(path("/wordList.json/my-list/words"))
        .and(body_json(serde_json::json!([{"word": "cat"}, {}])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    client
        .add_words_to_word_list(TOKEN, "my-list", &["cat", ""])
        .await
        .unwrap();
}
