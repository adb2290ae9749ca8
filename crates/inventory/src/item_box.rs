use std::io;

use crate::item::Item;

/// Capacity-bounded container that exclusively owns its items.
///
/// Items are kept in insertion order, which decides both the print order and
/// which duplicate [`withdraw_by_name`](Self::withdraw_by_name) removes.
///
/// Invariant: `len() <= capacity()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemBox {
    capacity: usize,
    items: Vec<Item>,
}

impl ItemBox {
    /// Create an empty box. A capacity of zero is valid and rejects every deposit.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            items: Vec::new(),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.capacity
    }

    /// Free slots left before deposits start failing.
    pub fn remaining(&self) -> usize {
        self.capacity.saturating_sub(self.items.len())
    }

    /// Contained items, in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.name() == name)
    }

    /// Move `item` into the box.
    ///
    /// Returns `false` when the box is full; the item is dropped and the box
    /// is left unchanged.
    pub fn deposit(&mut self, item: Item) -> bool {
        if self.is_full() {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Remove and return the first item (in insertion order) named `name`.
    ///
    /// Returns `None` when no item matches; the box is left unchanged.
    pub fn withdraw_by_name(&mut self, name: &str) -> Option<Item> {
        let index = self.items.iter().position(|item| item.name() == name)?;
        Some(self.items.remove(index))
    }

    /// Write the `[Box] <count>/<capacity>` block followed by one ` - <name>`
    /// line per item.
    pub fn print<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")
    }
}

impl core::fmt::Display for ItemBox {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "[Box] {}/{}", self.items.len(), self.capacity)?;
        for item in &self.items {
            writeln!(f, " - {item}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn names(b: &ItemBox) -> Vec<&str> {
        b.items().iter().map(Item::name).collect()
    }

    #[test]
    fn deposit_appends_until_capacity() {
        let mut b = ItemBox::new(2);
        assert!(b.deposit(Item::new("Handgun")));
        assert!(b.deposit(Item::new("Herb")));
        assert!(b.is_full());
        assert_eq!(b.remaining(), 0);
        assert_eq!(names(&b), ["Handgun", "Herb"]);
    }

    #[test]
    fn deposit_past_capacity_is_rejected_without_change() {
        let mut b = ItemBox::new(1);
        assert!(b.deposit(Item::new("Handgun")));
        let before = b.clone();

        assert!(!b.deposit(Item::new("Herb")));
        assert_eq!(b, before);
        assert!(!b.contains("Herb"));
    }

    #[test]
    fn zero_capacity_box_rejects_everything() {
        let mut b = ItemBox::new(0);
        assert!(b.is_full());
        assert!(!b.deposit(Item::new("Herb")));
        assert!(b.is_empty());
        assert_eq!(b.withdraw_by_name("Herb"), None);
    }

    #[test]
    fn withdraw_returns_the_deposited_item() {
        let mut b = ItemBox::new(3);
        b.deposit(Item::new("Handgun"));
        b.deposit(Item::new("Herb"));

        let got = b.withdraw_by_name("Handgun");
        assert_eq!(got, Some(Item::new("Handgun")));
        assert_eq!(b.len(), 1);
        assert!(!b.contains("Handgun"));
    }

    #[test]
    fn withdraw_missing_name_leaves_box_unchanged() {
        let mut b = ItemBox::new(3);
        b.deposit(Item::new("Handgun"));
        b.deposit(Item::new("Herb"));
        let before = b.clone();

        assert_eq!(b.withdraw_by_name("Shotgun"), None);
        assert_eq!(b, before);
    }

    #[test]
    fn withdraw_preserves_order_of_remaining_items() {
        let mut b = ItemBox::new(3);
        for name in ["A", "B", "C"] {
            b.deposit(Item::new(name));
        }

        b.withdraw_by_name("B");
        assert_eq!(names(&b), ["A", "C"]);
    }

    #[test]
    fn withdraw_takes_first_duplicate_only() {
        let mut b = ItemBox::new(3);
        b.deposit(Item::new("Herb"));
        b.deposit(Item::new("Handgun"));
        b.deposit(Item::new("Herb"));

        assert_eq!(b.withdraw_by_name("Herb"), Some(Item::new("Herb")));
        assert_eq!(names(&b), ["Handgun", "Herb"]);
    }

    #[test]
    fn withdraw_frees_a_slot() {
        let mut b = ItemBox::new(1);
        b.deposit(Item::new("Handgun"));
        assert!(!b.deposit(Item::new("Herb")));

        b.withdraw_by_name("Handgun");
        assert!(b.deposit(Item::new("Herb")));
    }

    #[test]
    fn print_writes_count_then_items_in_order() {
        let mut b = ItemBox::new(5);
        b.deposit(Item::new("Handgun"));
        b.deposit(Item::new("Herb"));

        let mut out = Vec::new();
        b.print(&mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "[Box] 2/5\n - Handgun\n - Herb\n"
        );
    }

    #[test]
    fn print_of_empty_box_is_header_only() {
        let mut out = Vec::new();
        ItemBox::new(0).print(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[Box] 0/0\n");
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: however many deposits are attempted, the count never
        /// exceeds capacity, and exactly `capacity` of them succeed.
        #[test]
        fn deposits_never_exceed_capacity(
            capacity in 0usize..16,
            names in prop::collection::vec("[A-Za-z]{1,8}", 0..32)
        ) {
            let mut b = ItemBox::new(capacity);
            let mut accepted = 0usize;

            for name in &names {
                if b.deposit(Item::new(name.as_str())) {
                    accepted += 1;
                }
                prop_assert!(b.len() <= b.capacity());
            }

            prop_assert_eq!(accepted, names.len().min(capacity));
        }

        /// Property: withdrawing any one item keeps the relative order of the rest.
        #[test]
        fn withdraw_keeps_relative_order(
            names in prop::collection::vec("[a-z]{1,4}", 1..12),
            pick in any::<prop::sample::Index>()
        ) {
            let mut b = ItemBox::new(names.len());
            for name in &names {
                b.deposit(Item::new(name.as_str()));
            }

            let target = pick.get(&names).clone();
            let first = names.iter().position(|n| *n == target).unwrap();
            let mut expected = names.clone();
            expected.remove(first);

            let got = b.withdraw_by_name(&target);
            prop_assert_eq!(got, Some(Item::new(target.as_str())));
            prop_assert_eq!(
                b.items().iter().map(|i| i.name().to_owned()).collect::<Vec<_>>(),
                expected
            );
        }

        /// Property: a rejected deposit or a missed withdrawal never changes the box.
        #[test]
        fn failed_operations_leave_state_unchanged(
            names in prop::collection::vec("[a-z]{1,4}", 0..8)
        ) {
            let mut b = ItemBox::new(names.len());
            for name in &names {
                b.deposit(Item::new(name.as_str()));
            }
            let before = b.clone();

            prop_assert!(!b.deposit(Item::new("overflow")));
            prop_assert_eq!(&b, &before);

            prop_assert_eq!(b.withdraw_by_name("MISSING"), None);
            prop_assert_eq!(&b, &before);
        }
    }
}
