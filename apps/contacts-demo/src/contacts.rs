/// One entry of the address book.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Contact {
    pub id: u64,
    pub display_name: String,
}

const ADDRESS_BOOK: &[(u64, &str)] = &[
    (1, "Ada Lovelace"),
    (2, "Alan Turing"),
    (3, ""),
    (4, "Barbara Liskov"),
    (5, "Edsger Dijkstra"),
    (6, "   "),
    (7, "Grace Hopper"),
    (8, "Ken Thompson"),
];

/// Contacts with a displayable name, in address-book order.
pub fn load_contacts() -> Vec<Contact> {
    ADDRESS_BOOK
        .iter()
        .filter(|(_, name)| !name.trim().is_empty())
        .map(|(id, name)| Contact {
            id: *id,
            display_name: (*name).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_names_are_skipped() {
        let contacts = load_contacts();
        assert_eq!(contacts.len(), 6);
        assert!(contacts.iter().all(|c| !c.display_name.trim().is_empty()));
        assert_eq!(contacts[0].display_name, "Ada Lovelace");
    }
}
