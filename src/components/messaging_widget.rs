//! Floating messaging widget: toggle button, backdrop, and chat panel.
//!
//! ARCHITECTURE
//! ============
//! One [`WidgetController`] per mounted widget lives in an `RwSignal` provided
//! as context to the panel subcomponents. Browser timers never touch state
//! directly: each one only asks the controller to fire the reply it was
//! created for, so a reply cancelled at teardown simply finds nothing.
//!
//! Open/closed is plain state. `AnimatedShow` keeps the backdrop and panel
//! mounted until their exit animations finish.

#[cfg(test)]
#[path = "messaging_widget_test.rs"]
mod messaging_widget_test;

use std::time::Duration;

use leptos::prelude::*;

use crate::components::icons::MessageSquareIcon;
use crate::components::messaging_panel::MessagingPanel;
use crate::config::WidgetConfig;
use crate::util::clock::SystemClock;
use crate::util::deferred::TaskHandle;
use crate::util::ids::SequentialIds;
use crate::widget::WidgetController;

/// Controller type used by the rendered widget.
pub type BrowserWidget = WidgetController<SystemClock, SequentialIds>;

/// How long the backdrop fade-out runs before it unmounts.
const BACKDROP_EXIT: Duration = Duration::from_millis(200);
/// How long the panel slide-out runs before it unmounts.
const PANEL_EXIT: Duration = Duration::from_millis(300);

/// `aria-expanded` value for the toggle button.
pub(crate) fn aria_expanded_value(open: bool) -> &'static str {
    if open { "true" } else { "false" }
}

/// Floating toggle plus the panel it opens.
#[component]
pub fn MessagingWidget(
    /// Copy, reply timing, and close behaviour. Invalid configs fall back to
    /// the defaults.
    #[prop(optional)]
    config: Option<WidgetConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default().or_default_if_invalid();
    let widget = RwSignal::new(WidgetController::new(config, SystemClock, SequentialIds::default()));
    provide_context(widget);

    on_cleanup(move || {
        if widget.try_update(BrowserWidget::teardown).is_none() {
            log::debug!("messaging widget disposed before teardown");
        }
    });

    let is_open = move || widget.with(|w| w.state().is_open());
    let aria_expanded = move || aria_expanded_value(is_open());
    let open_signal = Signal::derive(is_open);

    let on_toggle = move |_| {
        widget.update(|w| {
            w.toggle_open();
        });
    };

    let on_close = Callback::new(move |()| widget.update(BrowserWidget::close_panel));

    view! {
        <button
            class="messaging-toggle"
            aria-label="Open messaging"
            aria-expanded=aria_expanded
            on:click=on_toggle
        >
            <MessageSquareIcon/>
        </button>

        <AnimatedShow
            when=open_signal
            show_class="messaging-backdrop-shell messaging-backdrop-shell--in"
            hide_class="messaging-backdrop-shell messaging-backdrop-shell--out"
            hide_delay=BACKDROP_EXIT
        >
            <div class="messaging-backdrop" on:click=move |_| on_close.run(())></div>
        </AnimatedShow>
        <AnimatedShow
            when=open_signal
            show_class="messaging-panel-shell messaging-panel-shell--in"
            hide_class="messaging-panel-shell messaging-panel-shell--out"
            hide_delay=PANEL_EXIT
        >
            <MessagingPanel on_close=on_close/>
        </AnimatedShow>
    }
}

/// Wake the controller for `reply` once `delay` has passed.
///
/// Server rendering never handles input events, so off the browser this does
/// nothing.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub(crate) fn schedule_reply(widget: RwSignal<BrowserWidget>, reply: TaskHandle, delay: Duration) {
    #[cfg(feature = "hydrate")]
    {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        gloo_timers::callback::Timeout::new(millis, move || match widget.try_update(|w| w.fire(reply)) {
            Some(true) => {}
            Some(false) => log::debug!("reply {reply:?} cancelled before its timer fired"),
            None => log::debug!("widget unmounted before reply {reply:?} fired"),
        })
        .forget();
    }
}
