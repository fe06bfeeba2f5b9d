/// The feed page: post form on top, feed below
///
/// The page owns the draft being composed. The posts provider and the
/// photo picker are handed in at construction; the page never reaches
/// for global state.
use iced::widget::{
    button, column, container, keyed_column, mouse_area, row, scrollable, text, text_editor,
    text_input,
};
use iced::{time, Alignment, Element, Length, Subscription, Task};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

use super::{load, post_card, theme, user_image};
use crate::error::Error;
use crate::photo::FilePicker;
use crate::posts::PostsProvider;
use crate::state::data::{PhotoFile, Post};
use crate::state::draft::Draft;

/// Spinner frame interval
const TICK: Duration = Duration::from_millis(16);

/// Widest the form and feed get
const MAX_CONTENT_WIDTH: f32 = 512.0;

/// Height of the multi-line message box
const MESSAGE_HEIGHT: f32 = 96.0;

#[derive(Debug, Clone)]
pub enum Message {
    NameChanged(String),
    /// Replace the whole message text
    MessageChanged(String),
    /// Keystroke, paste or cursor move in the message box
    MessageEdited(text_editor::Action),
    /// Open the photo picker
    PickPhoto,
    /// Picker closed; None when nothing was chosen
    PhotoPicked(Option<PhotoFile>),
    RemovePhoto,
    Discard,
    Publish,
    PostsLoaded(Result<Vec<Post>, Error>),
    PostSubmitted(Result<Post, Error>),
    /// Delete requested from a card
    DeletePost(i64),
    PostDeleted(Result<i64, Error>),
    /// Spinner animation frame
    Tick,
}

/// What the list area shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedContent {
    Spinner,
    Cards,
}

pub struct Home {
    draft: Draft,
    /// Editor buffer behind the message box; mirrors `draft.message`
    message_editor: text_editor::Content,
    posts: PostsProvider,
    picker: Arc<dyn FilePicker>,
    spinner: load::Spinner,
}

impl Home {
    /// Build the page and start fetching the feed
    pub fn new(posts: PostsProvider, picker: Arc<dyn FilePicker>) -> (Self, Task<Message>) {
        let mut home = Home {
            draft: Draft::new(),
            message_editor: text_editor::Content::new(),
            posts,
            picker,
            spinner: load::Spinner::default(),
        };

        home.posts.set_loading(true);
        let fetch = Task::perform(home.posts.fetch(), Message::PostsLoaded);

        (home, fetch)
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn posts(&self) -> &PostsProvider {
        &self.posts
    }

    pub fn is_loading(&self) -> bool {
        self.posts.is_loading()
    }

    /// The "Feed" heading appears as soon as there is one post
    pub fn shows_feed_label(&self) -> bool {
        !self.posts.posts().is_empty()
    }

    /// While loading only the spinner is shown, whatever the list holds
    pub fn feed_content(&self) -> FeedContent {
        if self.posts.is_loading() {
            FeedContent::Spinner
        } else {
            FeedContent::Cards
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::NameChanged(name) => {
                self.draft.name = name;
                Task::none()
            }
            Message::MessageChanged(text) => {
                self.message_editor = text_editor::Content::with_text(&text);
                self.draft.message = text;
                Task::none()
            }
            Message::MessageEdited(action) => {
                self.message_editor.perform(action);
                self.draft.message = editor_text(&self.message_editor);
                Task::none()
            }
            Message::PickPhoto => Task::perform(self.picker.pick_image(), Message::PhotoPicked),
            Message::PhotoPicked(Some(photo)) => {
                self.draft.set_photo(photo);
                Task::none()
            }
            Message::PhotoPicked(None) => {
                debug!("photo picker closed without a selection");
                Task::none()
            }
            Message::RemovePhoto => {
                self.draft.remove_photo();
                Task::none()
            }
            Message::Discard => {
                debug!(status = ?self.draft.status(), "draft discarded");
                self.draft.clear();
                self.message_editor = text_editor::Content::new();
                Task::none()
            }
            Message::Publish => {
                if !self.draft.is_ready() {
                    return Task::none();
                }

                // The form is cleared right away, before the store answers
                let post = self.draft.take();
                self.message_editor = text_editor::Content::new();
                info!(name = %post.name, "publishing post");

                Task::perform(
                    self.posts.add_new_post(post.name, post.message, post.photo),
                    Message::PostSubmitted,
                )
            }
            Message::PostSubmitted(Ok(post)) => {
                self.posts.append(post);
                Task::none()
            }
            Message::PostSubmitted(Err(err)) => {
                // Only logged: the user gets no feedback and the draft is gone
                warn!(error = %err, "post submission failed");
                Task::none()
            }
            Message::PostsLoaded(result) => {
                match result {
                    Ok(posts) => self.posts.merge(posts),
                    Err(err) => warn!(error = %err, "could not load posts"),
                }
                self.posts.set_loading(false);
                Task::none()
            }
            Message::DeletePost(id) => {
                self.posts.set_loading(true);
                Task::perform(self.posts.delete_post(id), Message::PostDeleted)
            }
            Message::PostDeleted(result) => {
                match result {
                    Ok(id) => {
                        self.posts.remove(id);
                    }
                    Err(err) => warn!(error = %err, "could not delete post"),
                }
                self.posts.set_loading(false);
                Task::none()
            }
            Message::Tick => {
                self.spinner.advance();
                Task::none()
            }
        }
    }

    /// Animation ticks, only while something is loading
    pub fn subscription(&self) -> Subscription<Message> {
        if self.is_loading() {
            time::every(TICK).map(|_| Message::Tick)
        } else {
            Subscription::none()
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let content = column![self.form(), self.feed()]
            .spacing(56)
            .max_width(MAX_CONTENT_WIDTH);

        let page = container(content)
            .padding([40, 12])
            .width(Length::Fill)
            .center_x(Length::Fill)
            .style(theme::page);

        scrollable(page).height(Length::Fill).into()
    }

    fn form(&self) -> Element<'_, Message> {
        let photo_slot: Element<'_, Message> = match &self.draft.photo {
            Some(photo) => user_image::view(photo, true, Message::PickPhoto, Message::RemovePhoto),
            None => mouse_area(
                container(text("+").size(32))
                    .width(Length::Fixed(user_image::PHOTO_SIZE))
                    .height(Length::Fixed(user_image::PHOTO_SIZE))
                    .center_x(Length::Fixed(user_image::PHOTO_SIZE))
                    .center_y(Length::Fixed(user_image::PHOTO_SIZE))
                    .style(theme::photo_placeholder),
            )
            .on_press(Message::PickPhoto)
            .into(),
        };

        let name = text_input("Digite seu nome", &self.draft.name)
            .on_input(Message::NameChanged)
            .padding([12, 16])
            .style(theme::input);

        let message = text_editor(&self.message_editor)
            .placeholder("Mensagem")
            .on_action(Message::MessageEdited)
            .height(Length::Fixed(MESSAGE_HEIGHT))
            .padding([8, 16])
            .style(theme::editor);

        let ready = self.draft.is_ready();
        let actions = row![
            button(text("Descartar"))
                .on_press(Message::Discard)
                .style(theme::link),
            button(text("Publicar"))
                .padding([12, 24])
                .on_press_maybe(ready.then_some(Message::Publish))
                .style(theme::publish(ready)),
        ]
        .spacing(24)
        .align_y(Alignment::Center);

        let form = column![
            photo_slot,
            name,
            message,
            container(actions).width(Length::Fill).align_x(Alignment::End),
        ]
        .spacing(8)
        .align_x(Alignment::Center);

        container(form)
            .padding(24)
            .width(Length::Fill)
            .style(theme::card)
            .into()
    }

    fn feed(&self) -> Element<'_, Message> {
        let mut feed = column![].spacing(16);

        if self.shows_feed_label() {
            feed = feed.push(text("Feed").color(theme::PRIMARY_40));
        }

        feed = match self.feed_content() {
            FeedContent::Spinner => feed.push(load::view(self.spinner)),
            FeedContent::Cards => feed.push(
                keyed_column(
                    self.posts
                        .posts()
                        .iter()
                        .map(|post| (post.id, post_card::view(post, Message::DeletePost))),
                )
                .spacing(16),
            ),
        };

        feed.into()
    }
}

/// Editor contents without the line break the buffer keeps at the end
fn editor_text(content: &text_editor::Content) -> String {
    let text = content.text();
    match text.strip_suffix('\n') {
        Some(trimmed) => trimmed.to_string(),
        None => text,
    }
}
