use leptos::ev;
use leptos::html;
use leptos::prelude::*;

use crate::markdown;
use crate::models::Message;
use crate::state::AppState;

/// Main chat area with message history, typing indicator, and input.
#[component]
pub fn ChatArea() -> impl IntoView {
    let state = expect_context::<AppState>();
    let messages = state.messages;
    let pending = state.pending;

    // Anchor below the last entry; every store or pending-flag change scrolls
    // it back into view.
    let bottom_anchor: NodeRef<html::Div> = NodeRef::new();
    Effect::new(move |_| {
        messages.track();
        pending.track();
        if let Some(el) = bottom_anchor.get() {
            let opts = web_sys::ScrollIntoViewOptions::new();
            opts.set_behavior(web_sys::ScrollBehavior::Smooth);
            el.scroll_into_view_with_scroll_into_view_options(&opts);
        }
    });

    view! {
        <div class="app-container">
            <header class="header">"Next-Gen Competitive & News Intelligence Bot"</header>

            <main class="chat-window" role="log" aria-live="polite">
                <For
                    each={move || messages.get().into_iter().enumerate().collect::<Vec<_>>()}
                    key=|(idx, _)| *idx
                    let:entry
                >
                    <MessageBubble message=entry.1 />
                </For>

                {move || {
                    pending.get().then(|| {
                        view! {
                            <div class="chat-message bot">
                                <div class="avatar">"🤖"</div>
                                <div class="message-content typing">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            </div>
                        }
                    })
                }}

                <div node_ref=bottom_anchor></div>
            </main>

            <ChatInput />
        </div>
    }
}

/// A single message row: avatar glyph plus the rendered body.
#[component]
fn MessageBubble(message: Message) -> impl IntoView {
    let row_class = format!("chat-message {}", message.sender.as_str());
    let body = if message.is_markdown {
        view! {
            <div class="message-content" inner_html=markdown::to_html(&message.text)></div>
        }
        .into_any()
    } else {
        view! { <div class="message-content">{message.text.clone()}</div> }.into_any()
    };

    view! {
        <div class=row_class>
            <div class="avatar">{message.sender.avatar()}</div>
            {body}
        </div>
    }
}

/// Text entry row: Enter submits, Shift+Enter inserts a newline.
#[component]
fn ChatInput() -> impl IntoView {
    let state = expect_context::<AppState>();
    let (input, set_input) = signal(String::new());
    let input_ref: NodeRef<html::Textarea> = NodeRef::new();

    let send = move || {
        let text = input.get_untracked();
        if text.trim().is_empty() {
            return;
        }
        state.send_query(text);
        set_input.set(String::new());
        if let Some(el) = input_ref.get_untracked() {
            let _ = el.focus();
        }
    };

    let send_on_key = send.clone();
    let on_keydown = move |ev: ev::KeyboardEvent| {
        if ev.key() == "Enter" && !ev.shift_key() {
            ev.prevent_default();
            send_on_key();
        }
    };

    view! {
        <div class="input-container">
            <textarea
                node_ref=input_ref
                class="chat-input"
                rows="1"
                placeholder="Type your message..."
                prop:value=input
                on:input=move |ev| set_input.set(event_target_value(&ev))
                on:keydown=on_keydown
            ></textarea>
            <button class="send-button" on:click=move |_| send()>
                "⬆️"
            </button>
        </div>
    }
}
