//! Application-wide state passed explicitly to front ends.
//!
//! # Invariants
//! - Built once at startup; the demo data set is never mutated afterwards.
//! - The only process-global state is the logger.

use crate::config::{AppConfig, Language, Theme};
use crate::fixtures::{load_demo_data, DemoData, FixtureResult};
use log::info;

#[derive(Debug, Clone)]
pub struct AppContext {
    config: AppConfig,
    data: DemoData,
    theme: Theme,
    language: Language,
    sidebar_collapsed: bool,
}

impl AppContext {
    /// Loads the demo data and seeds UI state from `config`.
    pub fn bootstrap(config: AppConfig) -> FixtureResult<Self> {
        let data = load_demo_data()?;
        let context = Self::with_data(config, data);
        info!(
            "event=context_init module=context status=ok theme={} language={}",
            context.theme, context.language
        );
        Ok(context)
    }

    pub fn with_data(config: AppConfig, data: DemoData) -> Self {
        Self {
            theme: config.theme,
            language: config.language,
            sidebar_collapsed: config.sidebar_collapsed,
            config,
            data,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn data(&self) -> &DemoData {
        &self.data
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn sidebar_collapsed(&self) -> bool {
        self.sidebar_collapsed
    }

    pub fn toggle_theme(&mut self) {
        self.theme = match self.theme {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        };
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }
}

#[cfg(test)]
mod tests {
    use super::AppContext;
    use crate::config::{AppConfig, Language, Theme};
    use crate::fixtures::DemoData;

    #[test]
    fn ui_state_starts_from_config_and_toggles() {
        let config = AppConfig {
            theme: Theme::Dark,
            language: Language::Fr,
            ..AppConfig::default()
        };
        let mut context = AppContext::with_data(config, DemoData::default());
        assert_eq!(context.theme(), Theme::Dark);

        context.toggle_theme();
        context.toggle_sidebar();
        context.set_language(Language::Sw);

        assert_eq!(context.theme(), Theme::Light);
        assert!(context.sidebar_collapsed());
        assert_eq!(context.language(), Language::Sw);
        assert_eq!(context.config().theme, Theme::Dark);
    }
}
