//! Terminal presentation layer: reads actions from a prompt and redraws the views.

pub mod input;
mod render;

use crate::commands::{AddProductCommand, Sale, SellProductCommand, SortProductsCommand};
use crate::events::ProductEvent;
use crate::presenter::{Presenter, Status};
use crate::queries::{GetExecutiveViewRequest, GetUserViewRequest};
use crate::views::ViewId;
use input::{parse_line, Input};
pub use render::Palette;
use notifier::{DefaultNotifier, Notifier};
use parking_lot::Mutex;
use std::io::{BufRead, Write};
use std::sync::Arc;

/// Collects listener callbacks until the console gets to draw them.
#[derive(Debug, Default)]
pub struct ConsolePresenter {
    statuses: Vec<Status>,
    redraws: Vec<ViewId>,
}

impl ConsolePresenter {
    pub fn take_statuses(&mut self) -> Vec<Status> {
        std::mem::take(&mut self.statuses)
    }

    /// Pending redraws, each view once, in the order first requested.
    pub fn take_redraws(&mut self) -> Vec<ViewId> {
        std::mem::take(&mut self.redraws)
    }
}

impl Presenter for ConsolePresenter {
    fn notify_status(&mut self, status: Status) {
        self.statuses.push(status);
    }

    fn request_redraw(&mut self, view: ViewId) {
        if !self.redraws.contains(&view) {
            self.redraws.push(view);
        }
    }
}

pub struct Console {
    notifier: DefaultNotifier<ProductEvent>,
    presenter: Arc<Mutex<ConsolePresenter>>,
    palette: Palette,
}

impl Console {
    pub fn new(
        notifier: DefaultNotifier<ProductEvent>,
        presenter: Arc<Mutex<ConsolePresenter>>,
    ) -> Console {
        Console {
            notifier,
            presenter,
            palette: Palette::default(),
        }
    }

    pub fn with_palette(mut self, palette: Palette) -> Console {
        self.palette = palette;
        self
    }

    /// Runs until `exit` or the end of the input.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, out: &mut W) -> anyhow::Result<()> {
        render::help(out)?;
        writeln!(out)?;
        self.execute(Input::Show, out)?;
        render::prompt(out)?;

        for line in input.lines() {
            let line = line?;

            match parse_line(&line) {
                Ok(Input::Exit) => break,
                Ok(input) => self.execute(input, out)?,
                Err(e) => render::error(out, self.palette, e)?,
            }

            render::prompt(out)?;
        }

        writeln!(out)?;
        Ok(())
    }

    /// Forwards one action and draws whatever the listeners asked for.
    pub fn execute<W: Write>(&mut self, input: Input, out: &mut W) -> anyhow::Result<()> {
        match input {
            Input::Add { name, quantity } => {
                if let Err(e) = self.notifier.send(AddProductCommand { name, quantity })? {
                    render::error(out, self.palette, e)?;
                }
            }
            Input::Sell { name, quantity } => {
                match self.notifier.send(SellProductCommand { name, quantity })? {
                    Ok(Sale::Recorded(product)) => log::debug!("Sold {:?}", product),
                    // Not enough in store, the form gives no feedback
                    Ok(Sale::Rejected { .. }) => {}
                    Err(e) => render::error(out, self.palette, e)?,
                }
            }
            Input::Sort(by) => {
                if let Err(e) = self.notifier.send(SortProductsCommand { by })? {
                    render::error(out, self.palette, e)?;
                }
            }
            Input::Show => {
                let mut presenter = self.presenter.lock();
                presenter.request_redraw(ViewId::User);
                presenter.request_redraw(ViewId::Executive);
            }
            Input::Help => render::help(out)?,
            Input::Exit | Input::Empty => {}
        }

        self.draw(out)
    }

    fn draw<W: Write>(&mut self, out: &mut W) -> anyhow::Result<()> {
        let (statuses, redraws) = {
            let mut presenter = self.presenter.lock();
            (presenter.take_statuses(), presenter.take_redraws())
        };

        for status in &statuses {
            render::status(out, self.palette, status)?;
        }

        for view in redraws {
            match view {
                ViewId::User => {
                    let rows = self.notifier.send(GetUserViewRequest)?;
                    render::user_view(out, self.palette, &rows)?;
                }
                ViewId::Executive => {
                    let view = self.notifier.send(GetExecutiveViewRequest)?;
                    render::executive_view(out, self.palette, &view)?;
                }
            }
        }

        Ok(())
    }
}
