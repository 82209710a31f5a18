use chirp::plugin::twitter::messages;
use chirp::{Chirp, Config, Reply, Request};
use figment::Figment;
use figment::providers::{Format, Toml};
use wiremock::matchers::{body_string_contains, header_exists, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn config(server: &MockServer) -> Config {
    let toml = format!(
        r##"
        [irc]
        nickname = "chirp"
        hostname = "irc.example.com"

        [twitter]
        api_url = "{}/1.1/"

        [twitter.defaults]
        consumer_key = "consumer"
        consumer_secret = "consumer-secret"

        [twitter.channels."#chirp"]
        enabled = true
        nickname = "chirpbot"
        access_key = "token"
        access_secret = "token-secret"
        resolve = true

        [twitter.channels."#quiet"]
        enabled = false
        "##,
        server.uri()
    );

    Figment::new().merge(Toml::string(&toml)).extract().unwrap()
}

fn status_json(id: &str, screen_name: &str, text: &str) -> serde_json::Value {
    serde_json::json!({
        "id_str": id,
        "full_text": text,
        "user": { "id_str": "1", "screen_name": screen_name, "name": screen_name }
    })
}

fn request(target: &str, line: &str) -> Request {
    Request::parse(target, "bob", line, ".").unwrap()
}

#[tokio::test]
async fn it_should_tweet_through_the_api() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.1/statuses/update.json"))
        .and(header_exists("authorization"))
        .and(body_string_contains("status=hello+world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(
            "1001",
            "chirpbot",
            "hello world",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp
        .dispatch(&request("#CHIRP", ".tweet hello world"))
        .await
        .unwrap();

    assert_eq!(
        replies,
        vec![Reply::message("https://twitter.com/chirpbot/status/1001")]
    );
}

#[tokio::test]
async fn it_should_mention_the_author_of_the_tweet_being_replied_to() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/statuses/show.json"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(
            "42", "alice", "first!",
        )))
        // once for the mention and once for the link expansion
        .expect(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/1.1/statuses/update.json"))
        .and(body_string_contains("status=%40alice+nice"))
        .and(body_string_contains("in_reply_to_status_id=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(
            "1002",
            "chirpbot",
            "@alice nice",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp
        .dispatch(&request(
            "#chirp",
            ".reply https://twitter.com/alice/status/42 nice",
        ))
        .await
        .unwrap();

    assert_eq!(
        replies,
        vec![
            Reply::message("https://twitter.com/chirpbot/status/1002"),
            Reply::notice("Tweet from @alice: first!"),
        ]
    );
}

#[tokio::test]
async fn it_should_expand_links_in_commands() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.1/favorites/create.json"))
        .and(body_string_contains("id=42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json("42", "alice", "hi")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/1.1/statuses/show.json"))
        .and(query_param("id", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json("42", "alice", "hi")))
        .expect(1)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp
        .dispatch(&request("#chirp", ".fav https://twitter.com/alice/status/42"))
        .await
        .unwrap();

    assert_eq!(
        replies,
        vec![
            Reply::message(messages::ACKNOWLEDGED),
            Reply::notice("Tweet from @alice: hi"),
        ]
    );
}

#[tokio::test]
async fn it_should_reply_with_a_fixed_message_when_the_api_fails() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/1.1/statuses/retweet/42.json"))
        .respond_with(ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "errors": [{ "code": 327, "message": "You have already retweeted this Tweet." }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp.dispatch(&request("#chirp", ".rt 42")).await.unwrap();

    assert_eq!(replies, vec![Reply::message(messages::FAILED)]);
}

#[tokio::test]
async fn it_should_not_call_the_api_for_disabled_channels() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp
        .dispatch(&request("#quiet", ".fav 42"))
        .await
        .unwrap();

    assert_eq!(replies, vec![Reply::message(messages::DISABLED)]);
}

#[tokio::test]
async fn it_should_expand_links_to_tweets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/1.1/statuses/show.json"))
        .and(query_param("id", "20"))
        .and(query_param("tweet_mode", "extended"))
        .respond_with(ResponseTemplate::new(200).set_body_json(status_json(
            "20",
            "jack",
            "just setting up my twttr &amp; more\nstuff",
        )))
        .expect(1)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();
    let replies = chirp
        .dispatch(&request(
            "#chirp",
            "classic: https://twitter.com/jack/status/20",
        ))
        .await
        .unwrap();

    assert_eq!(
        replies,
        vec![Reply::notice(
            "Tweet from @jack: just setting up my twttr & more stuff"
        )]
    );
}

#[tokio::test]
async fn it_should_ignore_plain_messages() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let chirp = Chirp::new(config(&server)).unwrap();

    for (target, line) in [
        ("#chirp", "nothing to see here"),
        ("#quiet", "https://twitter.com/jack/status/20"),
        ("bob", "https://twitter.com/jack/status/20"),
    ] {
        let replies = chirp.dispatch(&request(target, line)).await.unwrap();

        assert!(replies.is_empty());
    }
}
