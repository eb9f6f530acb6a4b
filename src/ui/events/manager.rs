use color_eyre::eyre::Result;
use log::*;
use mockall_double::double;
use std::{
    sync::{mpsc::Receiver, Arc, Mutex},
    time::Instant,
};

use crate::{
    content,
    ui::store::{action::Action, state::Severity, Store},
};

use super::types::{Command as AppCommand, Event};

#[double]
use super::commander::Commander;

/// File the print command writes next to wherever the app was launched.
pub const EXPORT_PATH: &str = "portfolio.txt";

pub struct EventManager {
    rx: Arc<Mutex<Receiver<Event>>>,
    store: Arc<Store>,
    commander: Commander,
}

impl EventManager {
    pub fn new(rx: Receiver<Event>, store: Arc<Store>) -> Self {
        Self {
            rx: Arc::new(Mutex::new(rx)),
            store,
            commander: Commander::new(),
        }
    }

    pub fn start_event_loop(&self) -> Result<()> {
        let rx = Arc::clone(&self.rx);

        loop {
            let locked_rx = rx.lock().unwrap();
            match locked_rx.recv() {
                Ok(Event::ExecCommand(cmd)) => self.handle_cmd(cmd),
                Ok(Event::Quit) => break,
                // all senders are gone so there is nothing left to do
                Err(_) => break,
            }
        }

        Ok(())
    }

    fn handle_cmd(&self, cmd: AppCommand) {
        debug!("executing command: {cmd}");

        match cmd {
            AppCommand::Share => {
                match self
                    .commander
                    .copy_to_clipboard(content::SITE_URL.to_string())
                {
                    Ok(_) => self.notify("Link copied to clipboard.", Severity::Success),
                    Err(e) => {
                        error!("clipboard copy failed: {e}");
                        self.notify("Could not copy the link.", Severity::Error);
                    }
                }
            }
            AppCommand::Print => {
                match self
                    .commander
                    .export_page(EXPORT_PATH.to_string(), content::plain_text())
                {
                    Ok(_) => self.notify(&format!("Saved {EXPORT_PATH}."), Severity::Success),
                    Err(e) => {
                        error!("page export failed: {e}");
                        self.notify("Could not export the page.", Severity::Error);
                    }
                }
            }
        }
    }

    fn notify(&self, message: &str, severity: Severity) {
        self.store.dispatch(Action::Notify {
            message: message.to_string(),
            severity,
            now: Instant::now(),
        });
    }
}

#[cfg(test)]
mod tests {
    use std::{fs, sync::mpsc::Sender};

    use nanoid::nanoid;

    use crate::config::ConfigManager;

    use super::*;

    fn new_with_commander(
        rx: Arc<Mutex<Receiver<Event>>>,
        store: Arc<Store>,
        commander: Commander,
    ) -> EventManager {
        EventManager {
            rx,
            store,
            commander,
        }
    }

    fn setup(commander: Commander) -> (Sender<Event>, Arc<Store>, EventManager, String) {
        fs::create_dir_all("generated").unwrap();
        let tmp_path = format!("generated/{}.yml", nanoid!());
        let conf_manager = ConfigManager::new(tmp_path.as_str());
        let store = Arc::new(Store::new(Arc::new(Mutex::new(conf_manager))));
        let (tx, rx) = std::sync::mpsc::channel::<Event>();
        let arc_rx = Arc::new(Mutex::new(rx));
        let evt_manager =
            new_with_commander(Arc::clone(&arc_rx), Arc::clone(&store), commander);
        (tx, store, evt_manager, tmp_path)
    }

    fn tear_down(conf_path: String) {
        fs::remove_file(conf_path).unwrap();
    }

    #[test]
    fn handles_share_command() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_copy_to_clipboard()
            .returning(|_| Ok(()));

        let (_tx, store, evt_manager, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Share);

        let state = store.get_state();
        let notice = state.notice.unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert_eq!(notice.message, "Link copied to clipboard.");

        tear_down(conf_path);
    }

    #[test]
    fn reports_share_failure() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_copy_to_clipboard()
            .returning(|_| Err(Box::from("mock error")));

        let (_tx, store, evt_manager, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Share);

        let state = store.get_state();
        let notice = state.notice.unwrap();
        assert_eq!(notice.severity, Severity::Error);

        tear_down(conf_path);
    }

    #[test]
    fn handles_print_command() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_export_page()
            .returning(|_, contents| {
                assert!(contents.contains("PROJECTS"));
                Ok(())
            });

        let (_tx, store, evt_manager, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Print);

        let state = store.get_state();
        let notice = state.notice.unwrap();
        assert_eq!(notice.severity, Severity::Success);
        assert!(notice.message.contains(EXPORT_PATH));

        tear_down(conf_path);
    }

    #[test]
    fn reports_print_failure() {
        let mut mock_commander = Commander::default();

        mock_commander
            .expect_export_page()
            .returning(|_, _| Err(Box::from("mock error")));

        let (_tx, store, evt_manager, conf_path) = setup(mock_commander);

        evt_manager.handle_cmd(AppCommand::Print);

        let state = store.get_state();
        assert_eq!(state.notice.unwrap().severity, Severity::Error);

        tear_down(conf_path);
    }
}
