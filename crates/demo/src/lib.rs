//! Scripted two-room walkthrough of a shared item box.
//!
//! One box is created, two rooms ("Hall" and "Lab") borrow it, and a fixed
//! sequence of put/take/show calls shows that changes made through one room
//! are visible through the other.

pub mod config;

use std::io;

use itembox_inventory::{Item, ItemBox, Room, SharedBox};

pub use config::DemoConfig;

/// Run the fixed script, writing the transcript to `out`.
pub fn run<W: io::Write + ?Sized>(config: DemoConfig, out: &mut W) -> io::Result<()> {
    tracing::info!(capacity = config.capacity, "starting item box demo");

    let shared = SharedBox::new(ItemBox::new(config.capacity));
    let hall = Room::new("Hall", &shared);
    let lab = Room::new("Lab", &shared);

    hall.put(Item::new("Handgun"), out)?;
    hall.put(Item::new("Herb"), out)?;
    lab.show(out)?;

    lab.take("Handgun", out)?;
    hall.show(out)?;

    tracing::info!(remaining_items = shared.borrow().len(), "demo finished");
    Ok(())
}
