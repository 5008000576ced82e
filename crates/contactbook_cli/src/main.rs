//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `contactbook_core` linkage without the mobile shell.
//! - Add each argument as a contact and print the rendered list.
//!
//! Usage: `contactbook_cli [NAME...]`. A leading `*` marks a favorite,
//! e.g. `contactbook_cli Zed '*alice' Bob`.

use contactbook_core::{
    color_and_initial, core_version, display_list, favorites_display_list, ContactInput,
    ContactStore, StoreConfig,
};

const PLACEHOLDER_PHONE: &str = "0000000000";

fn main() {
    println!("contactbook_core version={}", core_version());

    let mut store = ContactStore::with_config(StoreConfig::from_env());
    for arg in std::env::args().skip(1) {
        let (name, is_favorite) = match arg.strip_prefix('*') {
            Some(rest) => (rest.to_string(), true),
            None => (arg, false),
        };
        let input =
            ContactInput::new(name, PLACEHOLDER_PHONE, PLACEHOLDER_PHONE).favorite(is_favorite);
        if let Err(err) = input.validate() {
            eprintln!("skipped: {err}");
            continue;
        }
        store.add_contact(input);
    }

    println!("contacts={}", store.len());
    for contact in display_list(store.get_all(), "") {
        let badge = color_and_initial(&contact.name);
        let marker = if contact.is_favorite { "*" } else { " " };
        println!(
            "{marker} [{}] {} {} {}",
            badge.initial, badge.color, contact.name, contact.id
        );
    }
    println!(
        "favorites={}",
        favorites_display_list(store.get_all()).len()
    );
}
