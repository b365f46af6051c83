use super::input::{ADD_USAGE, SELL_USAGE};
use crate::presenter::{Panel, Status};
use crate::views::{ExecutiveView, UserRow};
use crossterm::style::{Color, ContentStyle, StyledContent, Stylize};
use crossterm::tty::IsTty;
use std::fmt::Display;
use std::io::{self, Write};

/// Disables colours when set to a non-empty value.
pub const NO_COLOR_VAR: &str = "NO_COLOR";

/// Whether escape codes are emitted around coloured text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    colored: bool,
}

impl Palette {
    pub fn new(colored: bool) -> Palette {
        Palette { colored }
    }

    /// Colours only when stdout is a terminal and `NO_COLOR` is unset.
    pub fn detect() -> Palette {
        let no_color = std::env::var_os(NO_COLOR_VAR).map_or(false, |v| !v.is_empty());
        Palette::new(!no_color && io::stdout().is_tty())
    }

    fn styled<D: Display>(self, color: Color, content: D) -> StyledContent<D> {
        let style = if self.colored {
            ContentStyle::new().with(color)
        } else {
            ContentStyle::new()
        };

        StyledContent::new(style, content)
    }
}

pub fn status<W: Write>(out: &mut W, palette: Palette, status: &Status) -> io::Result<()> {
    let label = match status.panel {
        Panel::Add => "Add:",
        Panel::Sell => "Sell:",
    };
    let color = if status.success { Color::Green } else { Color::Red };

    writeln!(out, "{:<15}{}", label, palette.styled(color, &status.text))
}

pub fn error<W: Write, E: Display>(out: &mut W, palette: Palette, error: E) -> io::Result<()> {
    writeln!(out, "{}", palette.styled(Color::DarkRed, format!("Error: {}", error)))
}

pub fn user_view<W: Write>(out: &mut W, palette: Palette, rows: &[UserRow]) -> io::Result<()> {
    writeln!(out, "{}", palette.styled(Color::Cyan, "User view"))?;
    writeln!(out, "{:<32}{:>10}", "Name", "Count")?;

    for row in rows {
        writeln!(out, "{:<32}{:>10}", row.name, row.sold_count)?;
    }

    writeln!(out)
}

pub fn executive_view<W: Write>(
    out: &mut W,
    palette: Palette,
    view: &ExecutiveView,
) -> io::Result<()> {
    writeln!(out, "{}", palette.styled(Color::Magenta, "Executive view"))?;
    writeln!(
        out,
        "{:<32}{:>10}{:>10}{:>10}",
        "Name", "Shipping", "Sold", "In store"
    )?;

    for row in &view.rows {
        writeln!(
            out,
            "{:<32}{:>10}{:>10}{:>10}",
            row.name, row.original_count, row.sold_count, row.in_store_count
        )?;
    }

    writeln!(
        out,
        "{:<32}{:>10}{:>10}{:>10}",
        "Total", view.total_original, view.total_sold, view.total_in_store
    )?;
    writeln!(out)
}

pub fn help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{:<30}record a shipment", ADD_USAGE)?;
    writeln!(out, "{:<30}record a sale", SELL_USAGE)?;
    writeln!(out, "{:<30}sort the user view by name", "sort [name]")?;
    writeln!(out, "{:<30}show both views", "show")?;
    writeln!(out, "{:<30}leave", "exit")
}

pub fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}
