//! Shared mocks for mode tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use cinecast_core::{Movie, MoviePage};
use cinecast_error::{SocialError, SocialErrorKind, TmdbError};
use cinecast_social::{Platform, PostReceipt, SocialResult};
use cinecast_tmdb::{MovieRequest, MovieSource, TmdbResult};
use std::collections::VecDeque;
use std::sync::Mutex;

/// Source that answers from a script and records every request.
///
/// Once the script runs out every call returns an empty page.
pub struct ScriptedSource {
    responses: Mutex<VecDeque<TmdbResult<MoviePage>>>,
    requests: Mutex<Vec<MovieRequest>>,
}

impl ScriptedSource {
    pub fn new(pages: Vec<MoviePage>) -> Self {
        Self {
            responses: Mutex::new(pages.into_iter().map(Ok).collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TmdbError) -> Self {
        Self {
            responses: Mutex::new(VecDeque::from([Err(error)])),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn requests(&self) -> Vec<MovieRequest> {
        self.requests.lock().expect("lock").clone()
    }
}

#[async_trait]
impl MovieSource for ScriptedSource {
    async fn fetch(&self, request: &MovieRequest) -> TmdbResult<MoviePage> {
        self.requests.lock().expect("lock").push(request.clone());
        self.responses
            .lock()
            .expect("lock")
            .pop_front()
            .unwrap_or_else(|| Ok(MoviePage::default()))
    }
}

/// Platform that records posts and answers with a fixed result.
pub struct RecordingPlatform {
    posts: Mutex<Vec<String>>,
    failure: Option<SocialErrorKind>,
}

impl RecordingPlatform {
    pub fn accepting() -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            failure: None,
        }
    }

    pub fn failing(kind: SocialErrorKind) -> Self {
        Self {
            posts: Mutex::new(Vec::new()),
            failure: Some(kind),
        }
    }

    pub fn posts(&self) -> Vec<String> {
        self.posts.lock().expect("lock").clone()
    }
}

#[async_trait]
impl Platform for RecordingPlatform {
    async fn post(&self, text: &str) -> SocialResult<PostReceipt> {
        self.posts.lock().expect("lock").push(text.to_string());
        match &self.failure {
            Some(kind) => Err(SocialError::new(kind.clone())),
            None => Ok(PostReceipt {
                platform: "recording".to_string(),
                id: "post_1".to_string(),
            }),
        }
    }

    fn name(&self) -> &str {
        "recording"
    }
}

pub fn movie(id: u64, rating: f64, popularity: f64, votes: u64, poster: bool) -> Movie {
    Movie {
        id,
        title: format!("Movie {id}"),
        release_date: Some("2024-03-15".to_string()),
        vote_average: rating,
        vote_count: votes,
        popularity,
        poster_path: poster.then(|| format!("/{id}.jpg")),
        overview: Some(format!("Plot of movie {id}")),
        original_language: Some("en".to_string()),
    }
}

pub fn page(results: Vec<Movie>, total_pages: u32) -> MoviePage {
    MoviePage::new(results, total_pages)
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).expect("valid date")
}
