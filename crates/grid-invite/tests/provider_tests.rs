use grid_invite::{
    get_settings_from_cheatcode, InviteError, InviteResolver, InviteRoute, PgpWordlist,
    ProviderError, ProviderSettingsResolver,
};
use pretty_assertions::assert_eq;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn pkgdir_with(files: &[(&str, &str)]) -> TempDir {
    let pkgdir = tempfile::tempdir().unwrap();
    let providers_path = pkgdir.path().join("resources").join("providers");
    fs::create_dir_all(&providers_path).unwrap();
    for (name, content) in files {
        fs::write(providers_path.join(name), content).unwrap();
    }
    pkgdir
}

#[test]
fn test_get_settings_from_cheatcode() {
    let pkgdir = pkgdir_with(&[("test-test.json", r#"{"introducer": "pb://"}"#)]);
    let settings = get_settings_from_cheatcode(pkgdir.path(), "test-test").unwrap();
    assert_eq!(settings.introducer(), Some("pb://"));
}

#[test]
fn test_get_settings_from_cheatcode_none() {
    let pkgdir = tempfile::tempdir().unwrap();
    let missing = pkgdir.path().join("pkgdir-empty");
    assert!(get_settings_from_cheatcode(&missing, "test-test").is_none());
    assert!(get_settings_from_cheatcode(pkgdir.path(), "test-test").is_none());
}

#[test]
fn test_indexed_code_uses_word_part() {
    let pkgdir = pkgdir_with(&[("test-test.json", r#"{"introducer": "pb://"}"#)]);
    let resolver = ProviderSettingsResolver::new(pkgdir.path());
    assert!(resolver.resolve("0-test-test").is_some());
}

#[test]
fn test_malformed_settings_fail_closed() {
    let pkgdir = pkgdir_with(&[("broken.json", "{\"introducer\": "), ("list.json", "[]")]);
    let resolver = ProviderSettingsResolver::new(pkgdir.path());

    assert!(resolver.resolve("broken").is_none());
    assert!(matches!(resolver.lookup("broken"), Err(ProviderError::Corrupt { .. })));
    assert!(matches!(resolver.lookup("list"), Err(ProviderError::Corrupt { .. })));
    assert!(matches!(resolver.lookup("missing"), Ok(None)));
}

#[test]
fn test_directory_named_like_settings_is_io_error() {
    let pkgdir = pkgdir_with(&[]);
    fs::create_dir(pkgdir.path().join("resources/providers/odd.json")).unwrap();
    let resolver = ProviderSettingsResolver::new(pkgdir.path());

    let err = resolver.lookup("odd").unwrap_err();
    assert!(matches!(err, ProviderError::Io { .. }));
    assert!(resolver.resolve("odd").is_none());
}

#[test]
fn test_traversal_never_reads_outside() {
    let pkgdir = pkgdir_with(&[]);
    let secret = pkgdir.path().join("resources/secret.json");
    fs::write(secret, r#"{"introducer": "pb://leak"}"#).unwrap();
    let resolver = ProviderSettingsResolver::new(pkgdir.path());
    assert!(matches!(resolver.lookup("0-../secret"), Ok(None)));
}

#[test]
fn test_list_providers() {
    let pkgdir = pkgdir_with(&[
        ("zeta-grid.json", "{}"),
        ("test-test.json", "{}"),
        ("README.md", "not a provider"),
    ]);
    let resolver = ProviderSettingsResolver::new(pkgdir.path());
    assert_eq!(resolver.providers().unwrap(), vec!["test-test", "zeta-grid"]);

    let empty = ProviderSettingsResolver::new(Path::new("/nonexistent/grid-invite"));
    assert!(empty.providers().unwrap().is_empty());
}

#[test]
fn test_invite_resolves_provider_cheatcode() {
    let pkgdir = pkgdir_with(&[(
        "cranky-tapeworm.json",
        r#"{"nickname": "Cranky Grid", "introducer": "pb://abc@example.org/introducer"}"#,
    )]);
    let resolver = InviteResolver::new(PgpWordlist, ProviderSettingsResolver::new(pkgdir.path()));

    match resolver.resolve_invite("0 cranky tapeworm").unwrap() {
        InviteRoute::Provider { name, settings } => {
            assert_eq!(name, "cranky-tapeworm");
            assert_eq!(settings.nickname(), Some("Cranky Grid"));
        }
        other => panic!("unexpected route: {other:?}"),
    }
}

#[test]
fn test_invite_surfaces_corrupt_provider() {
    let pkgdir = pkgdir_with(&[("cranky-tapeworm.json", "not json")]);
    let resolver = InviteResolver::new(PgpWordlist, ProviderSettingsResolver::new(pkgdir.path()));

    let err = resolver.resolve_invite("0-cranky-tapeworm").unwrap_err();
    assert!(matches!(err, InviteError::Provider(ProviderError::Corrupt { .. })));
}

#[test]
fn test_non_utf8_settings_are_corrupt() {
    let pkgdir = pkgdir_with(&[]);
    let path = pkgdir.path().join("resources/providers/cranky-tapeworm.json");
    fs::write(path, b"{\"introducer\": \"pb://\xff\"}").unwrap();
    let providers = ProviderSettingsResolver::new(pkgdir.path());

    assert!(matches!(providers.lookup("cranky-tapeworm"), Err(ProviderError::Corrupt { .. })));
    assert!(providers.resolve("cranky-tapeworm").is_none());

    let resolver = InviteResolver::new(PgpWordlist, providers);
    let err = resolver.resolve_invite("0-cranky-tapeworm").unwrap_err();
    assert!(matches!(err, InviteError::Provider(ProviderError::Corrupt { .. })));
}
