//! Paginated menus: a fixed-size window over a long item list with
//! previous/next/exit entries appended to every page.

use std::io::{self, IsTerminal, Write};

use serde::Serialize;

use super::keys::KeyBindings;
use super::render::MenuOptions;
use super::run::{run_with, simple_prompt, CrosstermKeys, KeySource, MenuResult, Selection, INTERRUPT_EXIT_CODE};
use super::state::MenuItem;
use crate::terminal::{current_size, RawModeGuard, TerminalSize};
use crate::tui::settings;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageOptions {
    pub items_per_page: usize,
    /// Base title; page info is appended when `show_page_info` is set.
    pub title: String,
    pub show_page_info: bool,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            items_per_page: settings::PAGE_DEFAULT_ITEMS,
            title: settings::PAGE_DEFAULT_TITLE.to_string(),
            show_page_info: true,
        }
    }
}

/// What an entry on a rendered page stands for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    /// A real item, by index into the full list.
    Item(usize),
    Prev,
    Next,
    Exit,
}

/// A chosen item with its position in the full list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagedSelection {
    #[serde(flatten)]
    pub selection: Selection,
    pub global_index: usize,
    pub page: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PagedResult {
    Selected(PagedSelection),
    /// The exit entry was chosen.
    Exited,
    Terminated,
}

/// Page bookkeeping over a borrowed item list.
#[derive(Debug, Clone)]
pub struct Pager<'a> {
    items: &'a [MenuItem],
    opts: &'a PageOptions,
    page: usize,
}

impl<'a> Pager<'a> {
    pub fn new(items: &'a [MenuItem], opts: &'a PageOptions) -> Self {
        Self { items, opts, page: 0 }
    }

    fn per_page(&self) -> usize {
        self.opts.items_per_page.max(1)
    }

    /// Number of pages; an empty list still has one page.
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.per_page()).max(1)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    /// Slots shown on the current page, navigation entries last.
    pub fn slots(&self) -> Vec<PageSlot> {
        let start = self.page * self.per_page();
        let end = (start + self.per_page()).min(self.items.len());
        let mut slots: Vec<PageSlot> = (start..end).map(PageSlot::Item).collect();
        if self.page > 0 {
            slots.push(PageSlot::Prev);
        }
        if self.page + 1 < self.total_pages() {
            slots.push(PageSlot::Next);
        }
        slots.push(PageSlot::Exit);
        slots
    }

    /// Menu entries for the current page.
    pub fn page_items(&self) -> Vec<MenuItem> {
        self.slots()
            .into_iter()
            .map(|slot| match slot {
                PageSlot::Item(idx) => self.items[idx].clone(),
                PageSlot::Prev => nav_item(settings::PAGE_PREV_LABEL, "prev"),
                PageSlot::Next => nav_item(settings::PAGE_NEXT_LABEL, "next"),
                PageSlot::Exit => {
                    nav_item(settings::PAGE_EXIT_LABEL, "exit").with_suffix(settings::PAGE_EXIT_SUFFIX)
                }
            })
            .collect()
    }

    pub fn title(&self) -> String {
        if self.opts.show_page_info {
            format!(
                "{} (page {}/{})",
                self.opts.title,
                self.page + 1,
                self.total_pages()
            )
        } else {
            self.opts.title.clone()
        }
    }

    /// Move to the previous or next page. Other slots leave the page alone.
    pub fn turn(&mut self, slot: PageSlot) {
        match slot {
            PageSlot::Prev => self.page = self.page.saturating_sub(1),
            PageSlot::Next => self.page = (self.page + 1).min(self.total_pages() - 1),
            PageSlot::Item(_) | PageSlot::Exit => {}
        }
    }
}

fn nav_item(text: &str, value: &str) -> MenuItem {
    MenuItem::new(text)
        .with_value(value)
        .with_prefix(settings::PAGE_NAV_PREFIX)
}

/// Run a paginated menu against any key source and writer.
///
/// Each page is a fresh menu without escape; the loop continues until an
/// item or the exit entry is chosen.
pub fn run_paged_with<K, W, F>(
    items: &[MenuItem],
    opts: &MenuOptions,
    page_opts: &PageOptions,
    keys: &mut K,
    out: &mut W,
    mut size: F,
) -> io::Result<PagedResult>
where
    K: KeySource,
    W: Write,
    F: FnMut() -> TerminalSize,
{
    let mut pager = Pager::new(items, page_opts);
    loop {
        let page_menu = MenuOptions {
            title: pager.title(),
            allow_escape: false,
            ..opts.clone()
        };
        let slots = pager.slots();
        tracing::debug!(page = pager.page(), total = pager.total_pages(), "showing page");
        let result = run_with(pager.page_items(), &page_menu, keys, out, &mut size)?;
        let selection = match result {
            MenuResult::Selected(selection) => selection,
            MenuResult::Terminated => return Ok(PagedResult::Terminated),
            MenuResult::Cancelled => return Ok(PagedResult::Exited),
        };
        match slots.get(selection.index).copied() {
            Some(PageSlot::Item(global_index)) => {
                return Ok(PagedResult::Selected(PagedSelection {
                    global_index,
                    page: pager.page(),
                    selection,
                }));
            }
            Some(slot @ (PageSlot::Prev | PageSlot::Next)) => pager.turn(slot),
            Some(PageSlot::Exit) | None => return Ok(PagedResult::Exited),
        }
    }
}

/// Show a paginated menu on the terminal. Returns `None` when the exit entry
/// is chosen; an interrupt ends the process with status 130.
pub fn run_paged(
    items: &[MenuItem],
    opts: &MenuOptions,
    page_opts: &PageOptions,
) -> io::Result<Option<PagedSelection>> {
    if !io::stdin().is_terminal() {
        let stdin = io::stdin();
        let selection = simple_prompt(items, opts, &mut stdin.lock(), &mut io::stdout())?;
        return Ok(selection.map(|selection| PagedSelection {
            global_index: selection.index,
            page: 0,
            selection,
        }));
    }
    let result = {
        let _guard = RawModeGuard::acquire()?;
        let mut keys = CrosstermKeys::new(KeyBindings::new(opts.exit_key));
        run_paged_with(items, opts, page_opts, &mut keys, &mut io::stdout(), current_size)?
    };
    match result {
        PagedResult::Selected(selection) => Ok(Some(selection)),
        PagedResult::Exited => Ok(None),
        PagedResult::Terminated => std::process::exit(INTERRUPT_EXIT_CODE),
    }
}
