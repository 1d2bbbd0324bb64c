//! Application state for the HTTP backend.
//!
//! All stores are loaded once at startup and shared read-only (the progress
//! tracker uses interior mutability) across handlers via a cheaply
//! cloneable `Arc`.

use std::path::Path;
use std::sync::Arc;

use hazardwatch_lib::content::EMERGENCY_MESSAGES_FILE;
use hazardwatch_lib::quiz::QUIZ_QUESTIONS_FILE;
use hazardwatch_lib::{
    ChatBot, ContentStore, Error as LibError, EventService, FeedConfig, FetchError,
    ProgressTracker, QuizStore,
};

/// Error during application state initialization.
#[derive(Debug)]
pub enum AppStateError {
    /// Failed to load the emergency messages file.
    ContentLoad(LibError),

    /// Failed to load the quiz questions file.
    QuizLoad(LibError),

    /// Failed to construct the feed client.
    FeedClient(FetchError),
}

impl std::fmt::Display for AppStateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ContentLoad(e) => write!(f, "failed to load emergency messages: {}", e),
            Self::QuizLoad(e) => write!(f, "failed to load quiz questions: {}", e),
            Self::FeedClient(e) => write!(f, "failed to build the feed client: {}", e),
        }
    }
}

impl std::error::Error for AppStateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ContentLoad(e) | Self::QuizLoad(e) => Some(e),
            Self::FeedClient(e) => Some(e),
        }
    }
}

/// Shared application state for all axum handlers.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    events: EventService,
    content: ContentStore,
    quiz: QuizStore,
    chat: ChatBot,
    progress: ProgressTracker,
}

impl AppState {
    /// Load application state from a content directory and feed config.
    ///
    /// Expects `emergency_messages.json` and `quiz_questions.json` inside
    /// `content_dir`. Content problems fail startup here rather than
    /// surfacing per request.
    pub fn load(feed: FeedConfig, content_dir: &Path) -> Result<Self, AppStateError> {
        let content = ContentStore::load(&content_dir.join(EMERGENCY_MESSAGES_FILE))
            .map_err(AppStateError::ContentLoad)?;
        let quiz = QuizStore::load(&content_dir.join(QUIZ_QUESTIONS_FILE))
            .map_err(AppStateError::QuizLoad)?;

        tracing::info!(
            messages = content.len(),
            questions = quiz.len(),
            "content stores loaded"
        );

        let events = EventService::new(feed).map_err(AppStateError::FeedClient)?;

        Ok(Self::from_components(events, content, quiz))
    }

    /// Create application state from pre-loaded components.
    ///
    /// This is useful for testing with in-memory stores.
    pub fn from_components(events: EventService, content: ContentStore, quiz: QuizStore) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                events,
                content,
                quiz,
                chat: ChatBot::with_default_rules(),
                progress: ProgressTracker::new(),
            }),
        }
    }

    /// Access the event aggregation service.
    pub fn events(&self) -> &EventService {
        &self.inner.events
    }

    /// Access the emergency message store.
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Access the quiz store.
    pub fn quiz(&self) -> &QuizStore {
        &self.inner.quiz
    }

    /// Access the chat responder.
    pub fn chat(&self) -> &ChatBot {
        &self.inner.chat
    }

    /// Access the per-user progress tracker.
    pub fn progress(&self) -> &ProgressTracker {
        &self.inner.progress
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("messages", &self.inner.content.len())
            .field("questions", &self.inner.quiz.len())
            .finish()
    }
}
