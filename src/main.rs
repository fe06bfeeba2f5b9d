use iced::widget::{column, container, text};
use iced::{Element, Length, Subscription, Task, Theme};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use photo_feed::config::{self, Config, StorageBackend};
use photo_feed::error::Result;
use photo_feed::photo::RfdPicker;
use photo_feed::posts::{MemoryStore, PostStore, PostsProvider, SqliteStore};
use photo_feed::ui::{home, theme};

/// Main application state
struct PhotoFeed {
    /// Window title from the settings
    title: String,
    /// The only page
    home: home::Home,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    Home(home::Message),
}

impl PhotoFeed {
    /// Create the application around an already opened store
    fn new(config: Config, store: Arc<dyn PostStore>) -> (Self, Task<Message>) {
        let posts = PostsProvider::new(store);
        let (home, fetch) = home::Home::new(posts, Arc::new(RfdPicker));

        (
            PhotoFeed {
                title: config.window_title,
                home,
            },
            fetch.map(Message::Home),
        )
    }

    fn title(&self) -> String {
        self.title.clone()
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Home(message) => self.home.update(message).map(Message::Home),
        }
    }

    fn view(&self) -> Element<Message> {
        let nav = container(text("buildbox").size(28))
            .padding(24)
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::nav);

        column![nav, self.home.view().map(Message::Home)].into()
    }

    fn subscription(&self) -> Subscription<Message> {
        self.home.subscription().map(Message::Home)
    }

    fn theme(&self) -> Theme {
        theme::theme()
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Open the post store selected in the settings
fn open_store(config: &Config) -> Result<Arc<dyn PostStore>> {
    match config.storage {
        StorageBackend::Sqlite => {
            let data_dir = config.resolve_data_dir()?;
            let store = SqliteStore::open(&data_dir, config.thumbnail_size)?;
            info!(path = %store.path().display(), "using SQLite post store");
            Ok(Arc::new(store))
        }
        StorageBackend::Memory => {
            info!("using in-memory post store, posts are lost on exit");
            Ok(Arc::new(MemoryStore::new()))
        }
    }
}

fn main() -> Result<()> {
    // Settings come first so the log filter can be taken from them
    let (config, config_error) = match config::load() {
        Ok(config) => (config, None),
        Err(err) => (Config::default(), Some(err)),
    };

    init_tracing(&config.log_filter);
    if let Some(err) = config_error {
        warn!(error = %err, "could not read settings, using defaults");
    }

    let store = open_store(&config)?;

    iced::application(PhotoFeed::title, PhotoFeed::update, PhotoFeed::view)
        .subscription(PhotoFeed::subscription)
        .theme(PhotoFeed::theme)
        .window_size((560.0, 820.0))
        .centered()
        .run_with(move || PhotoFeed::new(config, store))?;

    Ok(())
}
