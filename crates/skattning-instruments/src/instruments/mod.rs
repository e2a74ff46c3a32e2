pub mod cats2;
pub mod cbcl;
pub mod ysr;

use crate::scoring::Item;

/// Build the item list for an Achenbach-style checklist of `count` numbered
/// questions, where question 56 is replaced by its eight lettered sub-items.
/// The source forms carry only numbered labels, so the text mirrors the
/// label ("Fråga 12", "Fråga 56a").
pub(crate) fn checklist_items(count: u32) -> Vec<Item> {
    let mut items = Vec::with_capacity(count as usize + 7);
    for n in 1..=count {
        if n == 56 {
            for letter in ['a', 'b', 'c', 'd', 'e', 'f', 'g', 'h'] {
                let id = format!("56{letter}");
                items.push(Item {
                    label: id.clone(),
                    text: format!("Fråga {id}"),
                    id,
                });
            }
        } else {
            items.push(Item {
                id: n.to_string(),
                label: n.to_string(),
                text: format!("Fråga {n}"),
            });
        }
    }
    items
}
