//! Chat panel body: header, message list, and input row.

#[cfg(test)]
#[path = "messaging_panel_test.rs"]
mod messaging_panel_test;

use leptos::prelude::*;

use crate::components::icons::{CloseIcon, SendIcon};
use crate::components::messaging_widget::{BrowserWidget, schedule_reply};
use crate::state::messaging::{Message, Sender};
use crate::util::time_label::{format_time_label, local_utc_offset_minutes};
use crate::widget::SendOutcome;

/// Row class for a bubble: user messages sit right, bot messages left.
pub(crate) fn message_row_class(sender: Sender) -> String {
    format!("messaging-message messaging-message--{}", sender.as_str())
}

/// Whether a keydown should send. Enter that only commits an IME
/// composition does not count.
pub(crate) fn is_send_key(key: &str, composing: bool) -> bool {
    key == "Enter" && !composing
}

/// The message log as its own reactive value. Draft keystrokes notify the
/// widget signal, but subscribers of this memo only rerun when the log changes.
pub(crate) fn message_log(widget: RwSignal<BrowserWidget>) -> Memo<Vec<Message>> {
    Memo::new(move |_| widget.with(|w| w.state().messages().to_vec()))
}

/// Panel shown while the widget is open.
#[component]
pub fn MessagingPanel(on_close: Callback<()>) -> impl IntoView {
    let widget = expect_context::<RwSignal<BrowserWidget>>();
    let (title, subtitle) = widget.with_untracked(|w| (w.config().title.clone(), w.config().subtitle.clone()));
    let dialog_label = title.clone();

    view! {
        <div class="messaging-panel" role="dialog" aria-label=dialog_label>
            <div class="messaging-panel__header">
                <div class="messaging-panel__heading">
                    <h3 class="messaging-panel__title">{title}</h3>
                    <p class="messaging-panel__subtitle">{subtitle}</p>
                </div>
                <button
                    class="messaging-panel__close"
                    aria-label="Close messaging"
                    data-testid="button-close-messaging"
                    on:click=move |_| on_close.run(())
                >
                    <CloseIcon/>
                </button>
            </div>

            <MessageList/>
            <MessageInput/>
        </div>
    }
}

/// Scrollable log, newest at the bottom.
#[component]
pub fn MessageList() -> impl IntoView {
    let widget = expect_context::<RwSignal<BrowserWidget>>();
    let list_ref = NodeRef::<leptos::html::Div>::new();
    let messages = message_log(widget);

    #[cfg(feature = "hydrate")]
    {
        let message_count = Memo::new(move |_| messages.with(Vec::len));
        Effect::new(move || {
            message_count.track();
            if let Some(el) = list_ref.get() {
                el.set_scroll_top(el.scroll_height());
            }
        });
    }

    view! {
        <div class="messaging-panel__messages" node_ref=list_ref>
            <For
                each=move || messages.get()
                key=|message: &Message| message.id().clone()
                children=move |message: Message| view! { <MessageBubble message=message/> }
            />
        </div>
    }
}

/// One message, aligned and coloured by sender.
#[component]
pub fn MessageBubble(message: Message) -> impl IntoView {
    let sender = message.sender().as_str();
    let row_class = message_row_class(message.sender());
    let time_label = format_time_label(message.timestamp(), local_utc_offset_minutes(message.timestamp()));

    view! {
        <div class=row_class data-sender=sender>
            <div class="messaging-message__bubble">
                <p class="messaging-message__text">{message.text().to_owned()}</p>
                <span class="messaging-message__time">{time_label}</span>
            </div>
        </div>
    }
}

/// Draft input and send button. The button is never disabled; blank drafts
/// are ignored by the controller.
#[component]
pub fn MessageInput() -> impl IntoView {
    let widget = expect_context::<RwSignal<BrowserWidget>>();
    let placeholder = widget.with_untracked(|w| w.config().placeholder.clone());

    let do_send = move || {
        if let Some(SendOutcome::Sent { reply, .. }) = widget.try_update(BrowserWidget::send) {
            let delay = widget.with_untracked(|w| w.config().reply_delay());
            schedule_reply(widget, reply, delay);
        }
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if is_send_key(&ev.key(), ev.is_composing()) {
            ev.prevent_default();
            do_send();
        }
    };

    view! {
        <div class="messaging-panel__input-row">
            <input
                class="messaging-panel__input"
                type="text"
                placeholder=placeholder
                data-testid="input-message"
                prop:value=move || widget.with(|w| w.state().draft().to_owned())
                on:input=move |ev| widget.update(|w| w.update_draft(event_target_value(&ev)))
                on:keydown=on_keydown
            />
            <button
                class="messaging-panel__send"
                aria-label="Send message"
                data-testid="button-send-message"
                on:click=move |_| do_send()
            >
                <SendIcon/>
            </button>
        </div>
    }
}
