use pretty_assertions::assert_eq;
use reposcope_keymap::{
    Action, Bindings, Key, KeymapError, Request, RunRequestFlags, key_name, key_value,
};
use strum::EnumCount;

#[test]
fn test_unbound_quit_key_falls_through_and_run_request_takes_a_key() {
    let mut bindings = Bindings::with_views().unwrap();
    let generic = bindings.keymaps().generic();
    let status = bindings.keymaps().lookup("status").unwrap();
    let q = key_value("q").unwrap();

    bindings
        .keymaps_mut()
        .bind(generic, q, Action::from_name("none").unwrap())
        .unwrap();
    assert_eq!(bindings.resolve(generic, q), Action::Key(q));
    assert_eq!(bindings.resolve(status, q), Action::Key(q));

    let id = bindings
        .add_run_request(status, Key::char('C'), &["git", "commit"], RunRequestFlags::DEFAULT)
        .unwrap()
        .unwrap();
    assert_eq!(id.position(), 1);
    assert_eq!(id.code(), Request::COUNT + 1);

    let action = bindings.resolve(status, Key::char('C'));
    assert_eq!(action, Action::RunRequest(id));
    assert_eq!(bindings.run_request_for(action).unwrap().argv, vec!["git", "commit"]);
}

#[test]
fn test_key_legends_differ_between_generic_and_view_keymaps() {
    let bindings = Bindings::with_views().unwrap();
    let keymaps = bindings.keymaps();
    let generic = keymaps.generic();
    let main = keymaps.lookup("main").unwrap();
    let action = Action::Request(Request::MovePageUp);

    assert_eq!(
        keymaps.describe_bindings(generic, action, true).unwrap(),
        "PageUp, '^U', 'b', '-'"
    );
    assert_eq!(keymaps.describe_bindings(main, action, false).unwrap(), "PageUp");
    assert_eq!(keymaps.describe_bindings(main, action, true).unwrap(), "");
}

#[test]
fn test_configured_names_resolve_to_requests() {
    let mut bindings = Bindings::with_views().unwrap();
    let diff = bindings.keymaps().require("DIFF").unwrap();
    let key = key_value("^X").unwrap();

    bindings
        .keymaps_mut()
        .bind(diff, key, Action::from_name("view_main").unwrap())
        .unwrap();

    assert_eq!(key_name(key), "'^X'");
    assert_eq!(bindings.resolve(diff, key), Action::Request(Request::ViewMain));
    assert!(matches!(
        bindings.keymaps().require("nowhere"),
        Err(KeymapError::UnknownKeymap { .. })
    ));
}
