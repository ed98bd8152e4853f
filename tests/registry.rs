use tipsheet_terminal::registry::{HOME, STANDARD_VIEWS, View, ViewRegistry};

static DUPLICATED: [View; 2] = [
    View {
        key: "home",
        title: "Home",
        icon: "*",
        restricted: false,
    },
    View {
        key: "home",
        title: "Again",
        icon: "*",
        restricted: false,
    },
];

static LOCKED_HOME: [View; 2] = [
    View {
        key: "vault",
        title: "Vault",
        icon: "*",
        restricted: true,
    },
    View {
        key: "lobby",
        title: "Lobby",
        icon: "*",
        restricted: false,
    },
];

#[test]
fn standard_registry_order_and_flags() {
    let registry = ViewRegistry::standard();
    let keys = registry.all().iter().map(|v| v.key).collect::<Vec<_>>();
    assert_eq!(
        keys,
        vec![
            "home",
            "free-tips",
            "top-secret",
            "ultimate",
            "over-under",
            "btts",
            "support"
        ]
    );
    let restricted = registry
        .all()
        .iter()
        .filter(|v| v.restricted)
        .map(|v| v.key)
        .collect::<Vec<_>>();
    assert_eq!(restricted, vec!["top-secret", "ultimate", "over-under", "btts"]);
    assert_eq!(registry.default_view().key, HOME);
}

#[test]
fn lookup_misses_are_none() {
    let registry = ViewRegistry::standard();
    assert!(registry.lookup("ultimate").is_some());
    assert!(registry.lookup("Ultimate").is_none());
    assert!(registry.lookup("").is_none());
    assert_eq!(registry.position("support"), Some(6));
}

#[test]
fn checked_constructor_matches_standard() {
    let registry = ViewRegistry::new(&STANDARD_VIEWS, HOME).expect("standard views are valid");
    assert_eq!(registry.default_view().key, HOME);
    assert_eq!(registry.all().len(), STANDARD_VIEWS.len());
}

#[test]
fn rejects_duplicate_keys() {
    let err = ViewRegistry::new(&DUPLICATED, "home").expect_err("duplicate keys");
    assert!(err.to_string().contains("duplicate"));
}

#[test]
fn rejects_missing_or_restricted_default() {
    assert!(ViewRegistry::new(&LOCKED_HOME, "nowhere").is_err());
    assert!(ViewRegistry::new(&LOCKED_HOME, "vault").is_err());
    let registry = ViewRegistry::new(&LOCKED_HOME, "lobby").expect("public default");
    assert_eq!(registry.default_view().key, "lobby");
}
