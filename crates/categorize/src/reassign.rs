use lucre_core::Transaction;

use crate::categorizer::CategoryGroups;

/// Move the selected transactions into `target`: append them to the
/// target group (creating it if absent), then remove every matching
/// entry from the other groups. Groups left empty are dropped.
///
/// Identity is by (date, description) — see
/// [`Transaction::same_entry`] — so distinct rows sharing both fields
/// travel together.
pub fn reassign(groups: &mut CategoryGroups, selection: &[Transaction], target: &str) {
    groups
        .entry(target.to_string())
        .or_default()
        .extend(selection.iter().cloned());

    groups.retain(|category, list| {
        if category != target {
            list.retain(|tx| !selection.iter().any(|sel| sel.same_entry(tx)));
        }
        !list.is_empty()
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use lucre_core::Money;

    fn tx(date: &str, desc: &str) -> Transaction {
        Transaction::new(date, Money::from_cents(-500), desc)
    }

    fn groups(entries: &[(&str, &[Transaction])]) -> CategoryGroups {
        entries
            .iter()
            .map(|(name, txs)| (name.to_string(), txs.to_vec()))
            .collect()
    }

    #[test]
    fn moves_selection_into_target_group() {
        let coffee = tx("2024-03-04", "ACME COFFEE SHOP");
        let other = tx("2024-03-05", "MYSTERY VENDOR");
        let mut g = groups(&[("Uncategorized", &[coffee.clone(), other.clone()])]);

        reassign(&mut g, &[coffee.clone()], "Coffee");

        assert_eq!(g["Coffee"], vec![coffee]);
        assert_eq!(g["Uncategorized"], vec![other]);
    }

    #[test]
    fn creates_target_group_when_absent() {
        let t = tx("2024-03-04", "ACME");
        let mut g = groups(&[("Uncategorized", &[t.clone()])]);
        reassign(&mut g, &[t.clone()], "Brand New");
        assert!(g.contains_key("Brand New"));
    }

    #[test]
    fn drops_groups_left_empty() {
        let t = tx("2024-03-04", "ACME");
        let mut g = groups(&[("Uncategorized", &[t.clone()])]);
        reassign(&mut g, &[t], "Coffee");
        assert!(!g.contains_key("Uncategorized"));
    }

    #[test]
    fn appends_to_existing_target_preserving_order() {
        let old = tx("2024-03-01", "OLD COFFEE");
        let new = tx("2024-03-04", "NEW COFFEE");
        let mut g = groups(&[("Coffee", &[old.clone()]), ("Uncategorized", &[new.clone()])]);

        reassign(&mut g, &[new.clone()], "Coffee");

        assert_eq!(g["Coffee"], vec![old, new]);
    }

    #[test]
    fn same_date_and_description_travel_together() {
        let a = tx("2024-03-04", "ACME");
        let twin = tx("2024-03-04", "ACME"); // indistinguishable by identity
        let mut g = groups(&[("Uncategorized", &[a.clone(), twin])]);

        reassign(&mut g, &[a], "Coffee");

        // Only the selected copy lands in the target, but both copies
        // leave the source group.
        assert_eq!(g["Coffee"].len(), 1);
        assert!(!g.contains_key("Uncategorized"));
    }

    #[test]
    fn untouched_groups_survive() {
        let t = tx("2024-03-04", "ACME");
        let d = tx("2024-03-05", "CHIPOTLE");
        let mut g = groups(&[("Uncategorized", &[t.clone()]), ("Dining", &[d.clone()])]);
        reassign(&mut g, &[t], "Coffee");
        assert_eq!(g["Dining"], vec![d]);
    }
}
