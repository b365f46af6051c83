use crate::catalog::SharedCatalog;
use crate::presenter::{Presenter, Status};
use crate::views::ViewId;

/// Records presenter callbacks. With a catalog attached it also records how
/// many products the catalog held, and how many units it counted as sold,
/// when each status arrived.
#[derive(Default)]
pub struct RecordingPresenter {
    pub statuses: Vec<Status>,
    pub redraws: Vec<ViewId>,
    pub catalog: Option<SharedCatalog>,
    pub catalog_len_at_status: Vec<usize>,
    pub catalog_sold_at_status: Vec<u64>,
}

impl Presenter for RecordingPresenter {
    fn notify_status(&mut self, status: Status) {
        if let Some(catalog) = &self.catalog {
            let catalog = catalog.lock();
            self.catalog_len_at_status.push(catalog.len());
            self.catalog_sold_at_status
                .push(catalog.executive_view().total_sold);
        }
        self.statuses.push(status);
    }

    fn request_redraw(&mut self, view: ViewId) {
        self.redraws.push(view);
    }
}
