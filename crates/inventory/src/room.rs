//! Named access points onto a shared [`ItemBox`].

use std::cell::RefCell;
use std::io;

use crate::item::Item;
use crate::item_box::ItemBox;

/// A box that several rooms can mutate through shared borrows.
///
/// Single-threaded: each room operation holds the `RefCell` borrow only for
/// the duration of that one operation.
pub type SharedBox = RefCell<ItemBox>;

/// A named, non-owning view of one [`SharedBox`].
///
/// The `'a` borrow ties every room to a box that outlives it. A room keeps no
/// inventory state of its own, so a change made through one room is visible
/// through every other room bound to the same box.
#[derive(Debug, Clone)]
pub struct Room<'a> {
    name: String,
    shared: &'a SharedBox,
}

impl<'a> Room<'a> {
    pub fn new(name: impl Into<String>, shared: &'a SharedBox) -> Self {
        Self {
            name: name.into(),
            shared,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Deposit `item` into the shared box and report `OK` or `FULL`.
    pub fn put<W: io::Write + ?Sized>(&self, item: Item, out: &mut W) -> io::Result<bool> {
        let item_name = item.name().to_owned();
        let (accepted, count, capacity) = {
            let mut shared = self.shared.borrow_mut();
            let accepted = shared.deposit(item);
            (accepted, shared.len(), shared.capacity())
        };

        if accepted {
            tracing::debug!(room = %self.name, item = %item_name, outcome = "ok", count, capacity, "item deposited");
        } else {
            tracing::info!(room = %self.name, item = %item_name, outcome = "full", count, capacity, "box full; item rejected");
        }

        writeln!(
            out,
            "[{}] put -> {}",
            self.name,
            if accepted { "OK" } else { "FULL" }
        )?;
        Ok(accepted)
    }

    /// Withdraw the first item named `name` and report it, or `NOT FOUND`.
    pub fn take<W: io::Write + ?Sized>(&self, name: &str, out: &mut W) -> io::Result<Option<Item>> {
        let (taken, count, capacity) = {
            let mut shared = self.shared.borrow_mut();
            let taken = shared.withdraw_by_name(name);
            (taken, shared.len(), shared.capacity())
        };

        match &taken {
            Some(item) => {
                tracing::debug!(room = %self.name, item = %item, outcome = "taken", count, capacity, "item withdrawn");
                writeln!(out, "[{}] take -> {}", self.name, item)?;
            }
            None => {
                tracing::info!(room = %self.name, item = %name, outcome = "not_found", count, capacity, "no matching item");
                writeln!(out, "[{}] take -> NOT FOUND", self.name)?;
            }
        }
        Ok(taken)
    }

    /// Print the room header followed by the shared box contents.
    pub fn show<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        let shared = self.shared.borrow();
        tracing::debug!(room = %self.name, count = shared.len(), capacity = shared.capacity(), "showing box");

        writeln!(out, "[{}] show box", self.name)?;
        shared.print(out)
    }
}
