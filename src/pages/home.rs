//! Landing page that hosts the messaging widget.

use leptos::prelude::*;

use crate::components::messaging_widget::MessagingWidget;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <section class="home-page__hero">
                <h1>"Bigwise"</h1>
                <p>"Questions about working with us? Open the chat in the corner."</p>
            </section>
            <MessagingWidget/>
        </main>
    }
}
