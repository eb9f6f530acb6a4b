use std::{
    sync::{Arc, Mutex},
    time::Instant,
};

use strum::EnumCount;

use crate::{config::ConfigManager, content, ui::colors::Theme};

pub mod action;
pub mod derived;
pub mod effect;
pub mod reducer;
pub mod state;

use crate::ui::effects::typewriter::Typewriter;

/**
 * Manages the state of our application
 */
pub struct Store {
    state: Mutex<state::State>,
    reducer: reducer::Reducer,
    config_manager: Arc<Mutex<ConfigManager>>,
}

impl Store {
    pub fn new(config_manager: Arc<Mutex<ConfigManager>>) -> Self {
        let prefs = config_manager.lock().unwrap().get();

        let true_color_enabled = match supports_color::on(supports_color::Stream::Stdout) {
            Some(support) => support.has_16m,
            _ => false,
        };

        let theme = Theme::from_string(&prefs.theme);
        let colors = crate::ui::colors::Colors::new(
            theme.to_palette(true_color_enabled),
            true_color_enabled,
        );

        Self {
            reducer: reducer::Reducer::new(),
            config_manager,
            state: Mutex::new(state::State {
                true_color_enabled,
                theme,
                colors,
                accessibility: false,
                focus_mode: false,
                project_count: prefs.project_count,
                pulse_until: None,
                typewriter: Typewriter::new(&content::TYPEWRITER_PHRASES, Instant::now()),
                quote_idx: 0,
                notice: None,
                revealed: [false; state::SectionId::COUNT],
                skills_fill_started: None,
                skills_fill: 0.0,
                scroll: 0,
                viewport: (0, 0),
                confetti: None,
                contact: state::ContactStatus::Idle,
                contact_epoch: 0,
                overlay: state::Overlay::None,
                quit: false,
            }),
        }
    }

    pub fn dispatch(&self, action: action::Action) {
        let mut state = self.state.lock().unwrap();
        let effect = self.reducer.reduce(&mut state, action);

        match effect {
            effect::Effect::None => {}
            effect::Effect::SavePreferences(prefs) => {
                self.config_manager.lock().unwrap().update(prefs);
            }
        }
    }

    pub fn get_state(&self) -> state::State {
        self.state.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[path = "./store/tests/store_tests.rs"]
mod tests;
