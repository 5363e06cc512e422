use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::classify;
use crate::models::Message;

/// Fixed text shown when a request fails outright.
pub const FETCH_ERROR_TEXT: &str = "Error: Unable to fetch response.";

/// Shared application state, provided via Leptos context.
///
/// The message list is append-only for the lifetime of the page; there is no
/// removal or reordering, and a reload is the only way to clear it.
#[derive(Clone)]
pub struct AppState {
    pub messages: ReadSignal<Vec<Message>>,
    pub pending: ReadSignal<bool>,

    pub set_messages: WriteSignal<Vec<Message>>,
    pub set_pending: WriteSignal<bool>,
}

impl AppState {
    /// Create a new `AppState` and provide it in the current Leptos context.
    pub fn provide() -> Self {
        let (messages, set_messages) = signal(Vec::<Message>::new());
        let (pending, set_pending) = signal(false);

        let state = Self { messages, pending, set_messages, set_pending };
        provide_context(state.clone());
        state
    }

    /// Append one message to the conversation history.
    pub fn push_message(&self, message: Message) {
        self.set_messages.update(|msgs| msgs.push(message));
    }

    /// Dispatch one query: append the user message, POST it, and append the
    /// classified reply (or the fixed error text) when the response lands.
    ///
    /// A whitespace-only input is a no-op. Requests are neither cancelled nor
    /// serialised; overlapping submissions each append their own result in
    /// arrival order, and the input stays interactive throughout.
    pub fn send_query(&self, raw: String) {
        if raw.trim().is_empty() {
            return;
        }

        self.push_message(Message::user(raw.clone()));
        self.set_pending.set(true);

        let state = self.clone();
        spawn_local(async move {
            let reply = match api::send_query(&raw).await {
                Ok(body) => classify::classify_response(&body),
                Err(e) => {
                    log::error!("Query failed: {e}");
                    Message::bot(FETCH_ERROR_TEXT.to_string(), false)
                }
            };
            state.push_message(reply);
            state.set_pending.set(false);
        });
    }
}
