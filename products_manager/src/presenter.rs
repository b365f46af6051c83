use crate::views::ViewId;
use parking_lot::Mutex;
use std::sync::Arc;

pub type SharedPresenter = Arc<Mutex<dyn Presenter + Send>>;

pub const ADDED: &str = "Successfully added!";
pub const NOT_ADDED: &str = "Not added!";
pub const BOUGHT: &str = "Successfully Bought!";
pub const NOT_BOUGHT: &str = "Not bought!";

/// The form panel a status message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    Add,
    Sell,
}

/// A status message shown under a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub panel: Panel,
    pub text: String,
    pub success: bool,
}

impl Status {
    pub fn new<S: Into<String>>(panel: Panel, text: S, success: bool) -> Status {
        Status {
            panel,
            text: text.into(),
            success,
        }
    }
}

/// Receives the callbacks listeners issue towards the screen.
pub trait Presenter {
    fn notify_status(&mut self, status: Status);

    fn request_redraw(&mut self, view: ViewId);
}
