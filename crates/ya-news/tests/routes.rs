mod common;

use salvo::http::StatusCode;
use salvo::test::ResponseExt;
use ya_core::test::{TestSession, location, status};
use ya_core::urls as users;
use ya_news::urls;

use common::{PASSWORD, Site};

#[tokio::test]
async fn test_home_page_access() {
    let site = Site::new().await;
    let res = TestSession::anonymous(&site.service).get(&urls::home()).await;
    assert_eq!(status(&res), StatusCode::OK);
}

#[tokio::test]
async fn test_news_detail_page_access() {
    let site = Site::new().await;
    let news = site.news().await;
    let mut res = TestSession::anonymous(&site.service).get(&urls::detail(news.id)).await;
    assert_eq!(status(&res), StatusCode::OK);
    let body = res.take_string().await.unwrap();
    assert!(body.contains(&news.title));
    assert!(body.contains(&news.text));
}

#[tokio::test]
async fn test_missing_news_is_not_found() {
    let site = Site::new().await;
    let client = TestSession::anonymous(&site.service);
    assert_eq!(status(&client.get(&urls::detail(404)).await), StatusCode::NOT_FOUND);
    assert_eq!(status(&client.get("/news/abc/").await), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_comment_edit_and_delete_pages_access_to_author() {
    let site = Site::new().await;
    let author = site.user("author").await;
    let comment = site.comment(&author, &site.news().await).await;
    let client = TestSession::login(&site.service, "author", PASSWORD).await;

    for url in [urls::edit(comment.id), urls::delete(comment.id)] {
        assert_eq!(status(&client.get(&url).await), StatusCode::OK, "{url}");
    }
}

#[tokio::test]
async fn test_comment_edit_and_delete_pages_redirect_anonymous_to_login() {
    let site = Site::new().await;
    let author = site.user("author").await;
    let comment = site.comment(&author, &site.news().await).await;
    let client = TestSession::anonymous(&site.service);

    for url in [urls::edit(comment.id), urls::delete(comment.id)] {
        let res = client.get(&url).await;
        assert_eq!(status(&res), StatusCode::FOUND, "{url}");
        let target = location(&res).unwrap();
        assert!(target.starts_with(&users::login()), "{target}");
        assert_eq!(target, users::login_with_next(&url));
    }
}

#[tokio::test]
async fn test_comment_edit_and_delete_pages_restricted_to_other_users() {
    let site = Site::new().await;
    let author = site.user("author").await;
    site.user("other_user").await;
    let comment = site.comment(&author, &site.news().await).await;
    let client = TestSession::login(&site.service, "other_user", PASSWORD).await;

    for url in [urls::edit(comment.id), urls::delete(comment.id)] {
        assert_eq!(status(&client.get(&url).await), StatusCode::NOT_FOUND, "{url}");
    }
}

#[tokio::test]
async fn test_auth_pages_access_to_anonymous() {
    let site = Site::new().await;
    let client = TestSession::anonymous(&site.service);
    for url in [users::signup(), users::login(), users::logout()] {
        assert_eq!(status(&client.get(&url).await), StatusCode::OK, "{url}");
    }
}
