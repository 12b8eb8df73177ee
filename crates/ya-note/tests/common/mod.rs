#![allow(dead_code, unreachable_pub)]

use salvo::Service;
use ya_core::test::TestSession;
use ya_core::{AppState, Settings, User};
use ya_note::models::{NewNote, Note};

pub const USERNAME_AUTHOR: &str = "author";
pub const USERNAME_OTHER_USER: &str = "otheruser";
pub const PASSWORD: &str = "testpassword123";
pub const SLUG: &str = "test-note";
pub const SLUG_OTHER: &str = "test-note-other";
pub const TITLE: &str = "Тестовая заметка";
pub const TITLE_OTHER: &str = "Тестовая заметка другого пользователя";
pub const TEXT: &str = "Текст заметки";
pub const TEXT_OTHER: &str = "Текст заметки другого пользователя";

/// Two users, each owning one note.
pub struct Fixture {
    pub state: AppState,
    pub service: Service,
    pub author: User,
    pub other_user: User,
    pub note: Note,
    pub other_note: Note,
}

impl Fixture {
    pub async fn new() -> Self {
        let state = ya_note::prepare(Settings::default()).await.unwrap();
        let service = ya_note::service(&state).unwrap();
        let pool = &state.pool;
        let author = User::create(pool, USERNAME_AUTHOR, PASSWORD).await.unwrap();
        let other_user = User::create(pool, USERNAME_OTHER_USER, PASSWORD).await.unwrap();
        let note = Note::create(
            pool,
            &NewNote {
                title: TITLE.into(),
                text: TEXT.into(),
                slug: SLUG.into(),
                author_id: author.id,
            },
        )
        .await
        .unwrap();
        let other_note = Note::create(
            pool,
            &NewNote {
                title: TITLE_OTHER.into(),
                text: TEXT_OTHER.into(),
                slug: SLUG_OTHER.into(),
                author_id: other_user.id,
            },
        )
        .await
        .unwrap();
        Self {
            state,
            service,
            author,
            other_user,
            note,
            other_note,
        }
    }

    pub fn anonymous_client(&self) -> TestSession<'_> {
        TestSession::anonymous(&self.service)
    }

    pub async fn author_client(&self) -> TestSession<'_> {
        TestSession::login(&self.service, USERNAME_AUTHOR, PASSWORD).await
    }

    pub async fn other_client(&self) -> TestSession<'_> {
        TestSession::login(&self.service, USERNAME_OTHER_USER, PASSWORD).await
    }

    pub async fn note_count(&self) -> i64 {
        Note::count(&self.state.pool).await.unwrap()
    }
}
