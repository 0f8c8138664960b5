//! Recent activity list with single selection.

use leptos::prelude::*;

use crate::components::notifications::Notifier;
use crate::state::dashboard::ActivityFeed as FeedState;

#[component]
pub fn ActivityFeed() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let feed = RwSignal::new(FeedState::default());
    let items = feed.with_untracked(|f| f.items().to_vec());

    view! {
        <div class="activity-list">
            {items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    view! {
                        <div
                            class="activity-item"
                            class:selected=move || feed.with(|f| f.is_selected(index))
                            on:click=move |_| {
                                if let Some(Some(message)) = feed.try_update(|f| f.select(index)) {
                                    notifier.info(message);
                                }
                            }
                        >
                            <div class="activity-icon">
                                <i class=item.icon></i>
                            </div>
                            <div class="activity-content">
                                <h5>{item.title}</h5>
                                <p>{item.detail}</p>
                                <small>{item.time}</small>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
