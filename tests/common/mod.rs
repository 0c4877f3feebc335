#![allow(dead_code)]

use async_trait::async_trait;
use axum::ServiceExt;
use axum::extract::Request;
use axum_test::TestServer;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tinylink::application::services::LinkService;
use tinylink::domain::entities::{LinkTotals, NewShortLink, ShortLink};
use tinylink::domain::repositories::LinkRepository;
use tinylink::error::AppError;
use tinylink::routes::{app_router, router};
use tinylink::state::AppState;

pub const BASE_URL: &str = "https://s.example.com";

/// In-memory link store with the same semantics as the PostgreSQL repository.
///
/// `set_offline(true)` makes every call fail as if the database were down.
/// `set_codes_taken(true)` reports every code as used, and
/// `set_reject_inserts(true)` fails inserts as if another writer won the code.
#[derive(Default)]
pub struct InMemoryLinkRepository {
    links: Mutex<Vec<ShortLink>>,
    offline: AtomicBool,
    codes_taken: AtomicBool,
    reject_inserts: AtomicBool,
}

impl InMemoryLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    pub fn set_codes_taken(&self, taken: bool) {
        self.codes_taken.store(taken, Ordering::SeqCst);
    }

    pub fn set_reject_inserts(&self, reject: bool) {
        self.reject_inserts.store(reject, Ordering::SeqCst);
    }

    pub fn insert(&self, code: &str, url: &str) {
        let mut links = self.links.lock().unwrap();
        let id = links.len() as i32 + 1;
        links.push(ShortLink::new(id, code.to_string(), url.to_string(), 0));
    }

    pub fn get(&self, code: &str) -> Option<ShortLink> {
        self.links
            .lock()
            .unwrap()
            .iter()
            .find(|l| l.short_code == code)
            .cloned()
    }

    pub fn all(&self) -> Vec<ShortLink> {
        self.links.lock().unwrap().clone()
    }

    fn check_online(&self) -> Result<(), AppError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(AppError::Unavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        self.check_online()?;
        let mut links = self.links.lock().unwrap();

        if self.reject_inserts.load(Ordering::SeqCst)
            || links.iter().any(|l| l.short_code == new_link.short_code)
        {
            return Err(AppError::Conflict("urls_short_code_key".to_string()));
        }

        let link = ShortLink::new(
            links.len() as i32 + 1,
            new_link.short_code,
            new_link.original_url,
            0,
        );
        links.push(link.clone());
        Ok(link)
    }

    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        self.check_online()?;
        Ok(self.get(code))
    }

    async fn code_exists(&self, code: &str) -> Result<bool, AppError> {
        self.check_online()?;
        Ok(self.codes_taken.load(Ordering::SeqCst) || self.get(code).is_some())
    }

    async fn record_click(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        self.check_online()?;
        let mut links = self.links.lock().unwrap();

        Ok(links.iter_mut().find(|l| l.short_code == code).map(|l| {
            l.clicks += 1;
            l.clone()
        }))
    }

    async fn totals(&self) -> Result<LinkTotals, AppError> {
        self.check_online()?;
        let links = self.links.lock().unwrap();

        Ok(LinkTotals {
            links: links.len() as i64,
            clicks: links.iter().map(|l| i64::from(l.clicks)).sum(),
        })
    }

    async fn top(&self, limit: i64) -> Result<Vec<ShortLink>, AppError> {
        self.check_online()?;
        let mut links = self.links.lock().unwrap().clone();
        links.sort_by(|a, b| b.clicks.cmp(&a.clicks).then(a.id.cmp(&b.id)));
        links.truncate(limit.max(0) as usize);
        Ok(links)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_online()
    }
}

pub fn create_test_state(repo: Arc<InMemoryLinkRepository>) -> AppState {
    let link_service = Arc::new(LinkService::new(repo, BASE_URL, 10));
    AppState::new(link_service)
}

/// Full application router over a fresh in-memory store.
pub fn create_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let server = TestServer::new(router(create_test_state(repo.clone()))).unwrap();
    (server, repo)
}

/// Server over the production service, including trailing-slash trimming.
pub fn create_app_test_server() -> (TestServer, Arc<InMemoryLinkRepository>) {
    let repo = Arc::new(InMemoryLinkRepository::new());
    let app = app_router(create_test_state(repo.clone()));
    let server = TestServer::new(ServiceExt::<Request>::into_make_service(app)).unwrap();
    (server, repo)
}

/// Extracts the short code from a returned short URL.
pub fn code_from_short_url(short_url: &str) -> String {
    short_url
        .strip_prefix(&format!("{BASE_URL}/"))
        .expect("short URL must start with the base URL")
        .to_string()
}
