use phonebook_core::ContactStore;
use proptest::prelude::*;
use tempfile::TempDir;

fn store_with(lines: &[String]) -> (TempDir, ContactStore) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.pb");
    std::fs::write(&path, "").unwrap();
    let store = ContactStore::new(path);
    for line in lines {
        store.add(line).unwrap();
    }
    (temp, store)
}

fn contact_line() -> impl Strategy<Value = String> {
    "[A-Za-zА-Яа-я]{1,8},[A-Za-z]{1,8},[A-Za-z]{0,8},[A-Za-z]{1,6},[0-9]{3},[0-9]{3}"
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn pages_concatenate_to_whole_file(
        lines in prop::collection::vec(contact_line(), 0..30),
        page_size in 1usize..8,
    ) {
        let (_temp, store) = store_with(&lines);

        let mut collected = Vec::new();
        let mut page = 1;
        loop {
            let chunk = store.list_page(page, page_size).unwrap();
            if chunk.is_empty() {
                break;
            }
            prop_assert!(chunk.len() <= page_size);
            collected.extend(chunk);
            page += 1;
        }

        prop_assert_eq!(collected, lines);
    }

    #[test]
    fn page_past_end_is_empty(
        lines in prop::collection::vec(contact_line(), 0..20),
        page_size in 1usize..8,
        extra in 1usize..5,
    ) {
        let (_temp, store) = store_with(&lines);
        let last_page = lines.len().div_ceil(page_size);
        prop_assert!(store.list_page(last_page + extra, page_size).unwrap().is_empty());
    }

    #[test]
    fn edit_without_match_is_noop(
        lines in prop::collection::vec(contact_line(), 1..20),
    ) {
        let (_temp, store) = store_with(&lines);
        let before = std::fs::read(store.path()).unwrap();

        let replaced = store.edit("no such contact", "replacement").unwrap();

        prop_assert_eq!(replaced, 0);
        prop_assert_eq!(std::fs::read(store.path()).unwrap(), before);
    }
}
