//! Modal and side-panel visibility

/// Open/closed flag shared by the modal and the calendar panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Overlay {
    open: bool,
}

impl Overlay {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

/// Interactions that reach the budgeting modal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalEvent {
    /// Header budgeting button
    Trigger,
    /// Click on the dimmed area around the dialog
    BackdropClick,
    /// Click inside the dialog; stopped before it reaches the backdrop
    ContentClick,
    Escape,
}

/// Budgeting promo modal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BudgetModal {
    overlay: Overlay,
}

impl BudgetModal {
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn apply(&mut self, event: ModalEvent) {
        match event {
            ModalEvent::Trigger => self.overlay.open(),
            ModalEvent::BackdropClick | ModalEvent::Escape => self.overlay.close(),
            ModalEvent::ContentClick => {}
        }
        tracing::debug!(?event, open = self.is_open(), "budget modal event");
    }
}

/// Calendar side panel; the back arrow and the close button both dismiss it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarPanel {
    overlay: Overlay,
}

impl CalendarPanel {
    pub fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    pub fn open(&mut self) {
        self.overlay.open();
    }

    pub fn back(&mut self) {
        self.overlay.close();
    }

    pub fn close(&mut self) {
        self.overlay.close();
    }
}
