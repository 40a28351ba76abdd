use crate::config::AppConfig;
use crate::ui::primitives::{RadioCursor, RadioRow};
use crate::wizard::steps::STEP_COUNT;
use crate::wizard::{Wizard, WizardRules};

/// Static pages reachable from the landing screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegalPage {
    Privacy,
    Terms,
}

impl LegalPage {
    pub fn title(&self) -> &'static str {
        match self {
            LegalPage::Privacy => "Privacy Policy",
            LegalPage::Terms => "Terms of Service",
        }
    }
}

/// Landing menu entries, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    StartDiagnosis,
    Privacy,
    Terms,
    Quit,
}

pub const MENU_ITEMS: [MenuItem; 4] = [
    MenuItem::StartDiagnosis,
    MenuItem::Privacy,
    MenuItem::Terms,
    MenuItem::Quit,
];

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::StartDiagnosis => "Start Diagnosis",
            MenuItem::Privacy => "Privacy Policy",
            MenuItem::Terms => "Terms of Service",
            MenuItem::Quit => "Quit",
        }
    }
}

/// Everything that lives only while the diagnosis screen is open.
#[derive(Debug)]
pub struct DiagnosisSession {
    pub wizard: Wizard,
    /// Highlighted radio item on the questions step.
    pub radio_cursor: RadioCursor,
}

#[derive(Debug)]
pub enum Screen {
    Landing,
    Diagnosis(Box<DiagnosisSession>),
    Legal(LegalPage),
}

pub struct AppState {
    pub config: AppConfig,
    pub screen: Screen,
    pub menu_selected: usize,
    /// Radio rows for the questions step, built once from config.
    pub question_rows: Vec<RadioRow>,
    pub should_quit: bool,
    pub dirty: bool,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let question_rows = config
            .wizard
            .questions
            .iter()
            .enumerate()
            .map(|(i, q)| RadioRow::yes_no(i, q))
            .collect();
        Self {
            config,
            screen: Screen::Landing,
            menu_selected: 0,
            question_rows,
            should_quit: false,
            dirty: true,
            tick_count: 0,
        }
    }

    /// Open the diagnosis screen with a fresh wizard.
    pub fn enter_diagnosis(&mut self) {
        let rules = WizardRules::from_config(&self.config.wizard);
        self.screen = Screen::Diagnosis(Box::new(DiagnosisSession {
            wizard: Wizard::new(rules),
            radio_cursor: RadioCursor::default(),
        }));
        tracing::info!("diagnosis started");
        self.dirty = true;
    }

    /// Return to the landing screen, discarding any wizard state. Refused
    /// while a prediction request is in flight.
    pub fn leave_to_landing(&mut self) -> bool {
        if self.session().is_some_and(|s| s.wizard.is_loading()) {
            return false;
        }
        if matches!(self.screen, Screen::Diagnosis(_)) {
            tracing::info!("diagnosis abandoned");
        }
        self.screen = Screen::Landing;
        self.dirty = true;
        true
    }

    pub fn open_legal(&mut self, page: LegalPage) {
        self.screen = Screen::Legal(page);
        self.dirty = true;
    }

    pub fn session(&self) -> Option<&DiagnosisSession> {
        match &self.screen {
            Screen::Diagnosis(s) => Some(&**s),
            _ => None,
        }
    }

    pub fn session_mut(&mut self) -> Option<&mut DiagnosisSession> {
        match &mut self.screen {
            Screen::Diagnosis(s) => Some(&mut **s),
            _ => None,
        }
    }

    pub fn selected_menu_item(&self) -> MenuItem {
        MENU_ITEMS[self.menu_selected.min(MENU_ITEMS.len() - 1)]
    }

    pub fn menu_up(&mut self) {
        self.menu_selected = self.menu_selected.saturating_sub(1);
    }

    pub fn menu_down(&mut self) {
        self.menu_selected = (self.menu_selected + 1).min(MENU_ITEMS.len() - 1);
    }

    pub fn status_line(&self) -> String {
        match &self.screen {
            Screen::Landing => "Welcome".to_string(),
            Screen::Legal(page) => page.title().to_string(),
            Screen::Diagnosis(s) => {
                let w = s.wizard.state();
                let mut line = format!(
                    "Step {}/{}: {}",
                    w.current_step + 1,
                    STEP_COUNT,
                    s.wizard.step().title
                );
                if w.is_loading {
                    line.push_str(" | Waiting for prediction");
                }
                line
            }
        }
    }
}
