//! Trading-robot status panel with simulated stop/start.

use leptos::prelude::*;

use crate::components::notifications::Notifier;
use crate::state::dashboard::{ROBOT_SETTINGS_MESSAGE, ROBOT_TRANSITION_MS, RobotPanel as RobotState};
use crate::util::timer::schedule;

#[component]
pub fn RobotPanel() -> impl IntoView {
    let notifier = expect_context::<Notifier>();
    let robot = RwSignal::new(RobotState::default());

    let on_toggle = move |_| {
        if !robot.try_update(RobotState::request_toggle).unwrap_or(false) {
            return;
        }
        schedule(ROBOT_TRANSITION_MS, move || {
            if let Some(Some(message)) = robot.try_update(RobotState::finish_transition) {
                notifier.success(message);
            }
        });
    };

    view! {
        <div class="robot-panel">
            <div class=move || robot.get().status_class()>
                <h3>
                    <Show when=move || robot.get().is_busy()>
                        <i class="fas fa-spinner fa-spin me-2"></i>
                    </Show>
                    {move || robot.get().headline()}
                </h3>
                <p>{move || robot.get().description()}</p>
            </div>
            <div class="robot-controls">
                <button
                    type="button"
                    class=move || robot.get().control().2
                    disabled=move || robot.get().is_busy()
                    on:click=on_toggle
                >
                    <i class=move || robot.get().control().0></i>
                    " "
                    {move || robot.get().control().1}
                </button>
                <button type="button" class="btn btn-outline-light" on:click=move |_| {
                    notifier.info(ROBOT_SETTINGS_MESSAGE);
                }>
                    <i class="fas fa-cog"></i>
                    " Settings"
                </button>
            </div>
        </div>
    }
}
