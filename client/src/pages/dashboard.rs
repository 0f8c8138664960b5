//! Member dashboard: sidebar panes, robot control, stats, analytics.
//!
//! SYSTEM CONTEXT
//! ==============
//! Panes switch through `SectionNav::select` without scrolling. The page
//! provides a 5-second `Notifier`, the responsive `SidebarControl`, and runs
//! the simulated stats ticker while mounted.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_meta::Title;

use crate::catalog::ContactChannel;
use crate::components::activity_feed::ActivityFeed;
use crate::components::loading_button::LoadingButton;
use crate::components::notifications::{NotificationStack, Notifier};
use crate::components::robot_panel::RobotPanel;
use crate::components::sidebar::{Sidebar, SidebarControl, SidebarToggle, install_listeners};
use crate::components::stats_card::StatsCard;
use crate::state::dashboard::{
    MONTHLY_RESULTS, WELCOME_DELAY_MS, current_package, initial_stats, totals, welcome_message,
};
use crate::state::feedback::{LoadingPlan, NotificationTiming};
use crate::state::nav::SectionNav;
use crate::util::format::{format_currency, format_percentage};
use crate::util::{dom, timer::schedule};

fn pane_class(nav: &SectionNav, id: &str) -> &'static str {
    if nav.active_id() == id { "content-section active" } else { "content-section" }
}

/// Wrap one pane so it shows only while its section is active.
fn pane(nav: RwSignal<SectionNav>, id: &'static str, body: AnyView) -> impl IntoView {
    view! {
        <section id=id class=move || nav.with(|n| pane_class(n, id))>
            <h2 class="section-heading">{move || nav.with(|n| n.title_for(id))}</h2>
            {body}
        </section>
    }
}

#[component]
pub fn DashboardPage() -> impl IntoView {
    let nav = RwSignal::new(SectionNav::dashboard());
    let notifier = Notifier::new(NotificationTiming::DASHBOARD);
    let control = SidebarControl::new();
    let stats = RwSignal::new(initial_stats());

    provide_context(nav);
    provide_context(notifier);
    provide_context(control);

    install_listeners(control);

    Effect::new(move || {
        if let Some(width) = dom::viewport_width() {
            control.resize(width);
        }
        schedule(WELCOME_DELAY_MS, move || {
            notifier.success(welcome_message());
        });
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::state::dashboard::{STATS_TICK_MS, tick_stats};

        let ticker_alive = std::sync::Arc::new(std::sync::atomic::AtomicBool::new(true));
        let ticker_alive_task = ticker_alive.clone();
        leptos::task::spawn_local(async move {
            loop {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(STATS_TICK_MS))).await;
                if !ticker_alive_task.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                if stats.try_update(|cards| tick_stats(cards, js_sys::Math::random)).is_none() {
                    break;
                }
            }
        });
        on_cleanup(move || ticker_alive.store(false, std::sync::atomic::Ordering::Relaxed));
    }

    let overview = view! {
        <div class="stats-grid">
            {(0..stats.with_untracked(Vec::len))
                .map(|index| view! { <StatsCard stats=stats index=index/> })
                .collect_view()}
        </div>
        <div class="dashboard-card">
            <h4 class="card-heading">"Recent Activity"</h4>
            <ActivityFeed/>
        </div>
    }
    .into_any();

    let trading = view! {
        <div class="dashboard-card">
            <RobotPanel/>
        </div>
    }
    .into_any();

    let current = current_package();
    let packages = view! {
        <div class="dashboard-card package-summary">
            <h4 class="card-heading">{current.name}</h4>
            <p>{format!("{} / {}", current.price, current.period)}</p>
            <p class="text-muted">{format!("Broker: {}", current.brokers.join(", "))}</p>
            <div class="package-actions">
                <LoadingButton label="Renew Package" plan=LoadingPlan::PROCESSING class="btn btn-accent me-2" icon="fas fa-redo me-2"/>
                <LoadingButton label="Upgrade" plan=LoadingPlan::PROCESSING class="btn btn-outline-light" icon="fas fa-arrow-up me-2"/>
            </div>
        </div>
    }
    .into_any();

    let (total_trades, total_profit) = totals(&MONTHLY_RESULTS);
    let analytics = view! {
        <div class="dashboard-card">
            <table class="table analytics-table">
                <thead>
                    <tr>
                        <th>"Month"</th>
                        <th>"Trades"</th>
                        <th>"Profit"</th>
                        <th>"Win Rate"</th>
                    </tr>
                </thead>
                <tbody>
                    {MONTHLY_RESULTS
                        .iter()
                        .map(|row| {
                            view! {
                                <tr>
                                    <td>{row.month}</td>
                                    <td>{row.trades}</td>
                                    <td class:text-danger={row.profit < 0.0}>{format_currency(row.profit)}</td>
                                    <td>{format_percentage(row.win_rate)}</td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
                <tfoot>
                    <tr>
                        <th>"Total"</th>
                        <th>{total_trades}</th>
                        <th>{format_currency(total_profit)}</th>
                        <th></th>
                    </tr>
                </tfoot>
            </table>
        </div>
    }
    .into_any();

    let settings = view! {
        <div class="dashboard-card">
            <form class="settings-form" on:submit=move |ev| ev.prevent_default()>
                <div class="mb-3">
                    <label class="form-label" for="riskLevel">"Risk Level"</label>
                    <select id="riskLevel" class="form-select">
                        <option value="low">"Low"</option>
                        <option value="medium" selected=true>"Medium"</option>
                        <option value="high">"High"</option>
                    </select>
                </div>
                <div class="form-check form-switch mb-3">
                    <input id="tradeAlerts" class="form-check-input" type="checkbox" checked=true/>
                    <label class="form-check-label" for="tradeAlerts">"Trade alerts via Telegram"</label>
                </div>
                <LoadingButton label="Save Settings" plan=LoadingPlan::PROCESSING class="btn btn-accent" icon="fas fa-save me-2"/>
            </form>
        </div>
    }
    .into_any();

    let support = view! {
        <div class="dashboard-card">
            <p>"Butuh bantuan? Hubungi tim support kami."</p>
            <div class="contact-buttons">
                {ContactChannel::ALL
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <button type="button" class="btn btn-outline-light me-2" on:click=move |_| {
                                notifier.info(channel.redirect_message());
                            }>
                                <i class=format!("{} me-2", channel.icon())></i>
                                {channel.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <LoadingButton label="Open Ticket" plan=LoadingPlan::PROCESSING class="btn btn-accent" icon="fas fa-ticket-alt me-2"/>
            </div>
        </div>
    }
    .into_any();

    view! {
        <Title text=move || nav.with(SectionNav::document_title)/>
        <div class="dashboard-layout">
            <Sidebar/>
            <main class="main-content">
                <header class="dashboard-header">
                    <SidebarToggle/>
                    <h1 class="dashboard-title">{move || nav.with(|n| n.active().title)}</h1>
                    <a class="btn btn-outline-light btn-sm" href="/">
                        <i class="fas fa-home me-1"></i>
                        "Home"
                    </a>
                </header>
                {pane(nav, "overview", overview)}
                {pane(nav, "trading", trading)}
                {pane(nav, "packages", packages)}
                {pane(nav, "analytics", analytics)}
                {pane(nav, "settings", settings)}
                {pane(nav, "support", support)}
            </main>
        </div>
        <NotificationStack/>
    }
}
