use iced::Task;

use crate::app::{App, AppEvent};
use crate::catalog::next_language;
use crate::routers::{preferences, settings};
use crate::widgets::chrome::ChromeEvent;

/// Route a chrome UI event to the screen or the preference stores.
pub(crate) fn route_event(app: &mut App, event: ChromeEvent) -> Task<AppEvent> {
    match event {
        ChromeEvent::ToggleSettings => {
            settings::toggle_mount(app);
            Task::none()
        },
        ChromeEvent::CycleLanguage => {
            let current = app.stores.language.get();
            let next = next_language(&current);
            log::debug!("switching language from {current} to {}", next.code);
            preferences::write_language(app.stores.clone(), next.code)
        },
    }
}

#[cfg(test)]
mod tests {
    use super::route_event;
    use crate::app::App;
    use crate::catalog::ThemeKind;
    use crate::config::AppConfig;
    use crate::stores::memory::MemoryStores;
    use crate::widgets::chrome::ChromeEvent;

    #[test]
    fn given_closed_screen_when_toggle_settings_twice_then_mounts_and_unmounts()
    {
        let backend = MemoryStores::new("", "en", ThemeKind::Dark);
        let mut app = App::with_stores(AppConfig::default(), backend.stores());

        let _task = route_event(&mut app, ChromeEvent::ToggleSettings);
        assert!(app.widgets.settings.is_some());
        let _task = route_event(&mut app, ChromeEvent::ToggleSettings);

        assert!(app.widgets.settings.is_none());
        assert!(backend.calls().is_empty());
    }
}
