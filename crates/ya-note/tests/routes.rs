mod common;

use salvo::http::StatusCode;
use ya_core::test::{location, status};
use ya_core::urls as users;
use ya_note::urls;

use common::{Fixture, SLUG};

#[tokio::test]
async fn test_url_access() {
    let fixture = Fixture::new().await;
    let anonymous = fixture.anonymous_client();
    let author = fixture.author_client().await;
    let other = fixture.other_client().await;

    let cases = [
        (urls::home(), &anonymous, StatusCode::OK),
        (urls::list(), &anonymous, StatusCode::FOUND),
        (urls::success(), &anonymous, StatusCode::FOUND),
        (urls::add(), &anonymous, StatusCode::FOUND),
        (urls::detail(SLUG), &anonymous, StatusCode::FOUND),
        (urls::edit(SLUG), &anonymous, StatusCode::FOUND),
        (urls::delete(SLUG), &anonymous, StatusCode::FOUND),
        (users::login(), &anonymous, StatusCode::OK),
        (users::logout(), &anonymous, StatusCode::OK),
        (users::signup(), &anonymous, StatusCode::OK),
        (urls::home(), &author, StatusCode::OK),
        (urls::list(), &author, StatusCode::OK),
        (urls::success(), &author, StatusCode::OK),
        (urls::add(), &author, StatusCode::OK),
        (urls::detail(SLUG), &author, StatusCode::OK),
        (urls::edit(SLUG), &author, StatusCode::OK),
        (urls::delete(SLUG), &author, StatusCode::OK),
        (users::login(), &author, StatusCode::OK),
        (users::signup(), &author, StatusCode::OK),
        (urls::home(), &other, StatusCode::OK),
        (urls::detail(SLUG), &other, StatusCode::NOT_FOUND),
        (urls::edit(SLUG), &other, StatusCode::NOT_FOUND),
        (urls::delete(SLUG), &other, StatusCode::NOT_FOUND),
        (users::logout(), &author, StatusCode::OK),
    ];
    for (url, client, expected) in cases {
        let res = client.get(&url).await;
        assert_eq!(status(&res), expected, "{url} for {client:?}");
    }
}

#[tokio::test]
async fn test_anonymous_user_redirected_to_login() {
    let fixture = Fixture::new().await;
    let client = fixture.anonymous_client();
    for url in [
        urls::list(),
        urls::success(),
        urls::add(),
        urls::detail(SLUG),
        urls::edit(SLUG),
        urls::delete(SLUG),
    ] {
        let res = client.get(&url).await;
        assert_eq!(status(&res), StatusCode::FOUND, "{url}");
        assert_eq!(location(&res), Some(format!("{}?next={url}", users::login()).as_str()));
    }
}

#[tokio::test]
async fn test_edit_redirect_keeps_exact_path() {
    let fixture = Fixture::new().await;
    let res = fixture.anonymous_client().get("/notes/test-note/edit/").await;
    assert_eq!(location(&res), Some("/auth/login/?next=/notes/test-note/edit/"));
}

#[tokio::test]
async fn test_missing_note_is_not_found() {
    let fixture = Fixture::new().await;
    let author = fixture.author_client().await;
    let res = author.get(&urls::detail("no-such-note")).await;
    assert_eq!(status(&res), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_returns_to_next() {
    let fixture = Fixture::new().await;
    let client = fixture.anonymous_client();
    let res = client
        .post_form(
            &users::login(),
            &[
                ("username", common::USERNAME_AUTHOR),
                ("password", common::PASSWORD),
                ("next", urls::edit(SLUG).as_str()),
            ],
        )
        .await;
    assert_eq!(status(&res), StatusCode::FOUND);
    assert_eq!(location(&res), Some(urls::edit(SLUG).as_str()));
}
