mod common;

use ya_core::Settings;
use ya_core::config::DEFAULT_NEWS_COUNT_ON_HOME_PAGE;
use ya_core::test::TestSession;
use ya_news::urls;

use common::{PASSWORD, Site};

#[tokio::test]
async fn test_news_count_on_home_page() {
    let site = Site::new().await;
    site.multiple_news().await;
    let context = TestSession::anonymous(&site.service).context(&urls::home()).await;
    let object_list = context["object_list"].as_array().unwrap();
    assert_eq!(object_list.len(), DEFAULT_NEWS_COUNT_ON_HOME_PAGE);
}

#[tokio::test]
async fn test_home_page_shows_all_news_below_limit() {
    let site = Site::new().await;
    site.news_items(5).await;
    let context = TestSession::anonymous(&site.service).context(&urls::home()).await;
    let dates: Vec<&str> = context["object_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|news| news["date"].as_str().unwrap())
        .collect();
    assert_eq!(
        dates,
        ["2023-10-05", "2023-10-04", "2023-10-03", "2023-10-02", "2023-10-01"]
    );
}

#[tokio::test]
async fn test_news_count_follows_settings() {
    let settings = Settings::default().with_news_count_on_home_page(3);
    let state = ya_news::prepare(settings).await.unwrap();
    let service = ya_news::service(&state).unwrap();
    let site = Site { state, service };
    site.multiple_news().await;
    let context = TestSession::anonymous(&site.service).context(&urls::home()).await;
    assert_eq!(context["object_list"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_news_order_on_home_page() {
    let site = Site::new().await;
    site.multiple_news().await;
    let context = TestSession::anonymous(&site.service).context(&urls::home()).await;
    let dates: Vec<&str> = context["object_list"]
        .as_array()
        .unwrap()
        .iter()
        .map(|news| news["date"].as_str().unwrap())
        .collect();
    let mut sorted = dates.clone();
    sorted.sort_unstable_by(|a, b| b.cmp(a));
    assert_eq!(dates, sorted);
    assert_eq!(dates[0], "2023-10-15");
}

#[tokio::test]
async fn test_comments_order_on_news_detail_page() {
    let site = Site::new().await;
    let author = site.user("author").await;
    let news = site.news().await;
    site.multiple_comments(&author, &news).await;
    let context = TestSession::anonymous(&site.service).context(&urls::detail(news.id)).await;
    let created: Vec<&str> = context["news"]["comments"]
        .as_array()
        .unwrap()
        .iter()
        .map(|comment| comment["created"].as_str().unwrap())
        .collect();
    assert_eq!(created.len(), 5);
    let mut sorted = created.clone();
    sorted.sort_unstable();
    assert_eq!(created, sorted);
}

#[tokio::test]
async fn test_comment_form_availability_to_anonymous_user() {
    let site = Site::new().await;
    let news = site.news().await;
    let context = TestSession::anonymous(&site.service).context(&urls::detail(news.id)).await;
    assert!(context.get("form").is_none());
}

#[tokio::test]
async fn test_comment_form_availability_to_authenticated_user() {
    let site = Site::new().await;
    site.user("author").await;
    let news = site.news().await;
    let client = TestSession::login(&site.service, "author", PASSWORD).await;
    let context = client.context(&urls::detail(news.id)).await;
    assert!(context.get("form").is_some());
    assert_eq!(context["user"], "author");
}
