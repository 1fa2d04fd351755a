mod counter;
mod layout;
mod profile_card;
mod profile_form;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use crate::modules::RootState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState, root: &RootState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    counter::render(frame, app_layout.counter, state, &root.counter);
    profile_form::render(frame, app_layout.profile_form, state);
    profile_card::render(frame, app_layout.profile_card, state, &root.github);
    status_bar::render(frame, app_layout.status_bar, state, &root.github);
}
