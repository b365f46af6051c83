use crate::events::ProductEvent;
use crate::presenter::SharedPresenter;
use crate::views::ViewId;
use notifier::Listener;

/// Asks the presentation layer to redraw one view after the catalog changed.
#[derive(Clone)]
pub struct ViewListener {
    view: ViewId,
    presenter: SharedPresenter,
}

impl ViewListener {
    pub fn new(view: ViewId, presenter: SharedPresenter) -> ViewListener {
        ViewListener { view, presenter }
    }
}

impl Listener<ProductEvent> for ViewListener {
    fn update(&mut self, event: &ProductEvent) {
        if let ProductEvent::Sorted(None) = event {
            return;
        }

        self.presenter.lock().request_redraw(self.view);
    }
}
