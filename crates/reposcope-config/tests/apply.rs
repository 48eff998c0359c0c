use pretty_assertions::assert_eq;
use reposcope_config::{AppConfig, ConfigError, apply};
use reposcope_keymap::{Action, Bindings, Key, Request};
use reposcope_lineinfo::{Attr, Color, LineInfoRegistry, LineType};

const CONFIG: &str = r#"
hidden_keymaps = ["stage", "scratch"]

[[bind]]
keymap = "generic"
key = "q"
action = "none"

[[bind]]
keymap = "main"
key = "^F"
action = "move-page-down"

[[bind]]
keymap = "nowhere"
key = "x"
action = "quit"

[[bind]]
keymap = "diff"
key = "x"
action = "fly-away"

[[run]]
keymap = "status"
key = "C"
command = ["git", "commit", "--amend"]
force = true

[[run]]
keymap = "main"
key = "C"
command = ["git", "revert", "%(commit)"]

[[run]]
keymap = "main"
key = "j"
command = ["git", "log"]

[[run]]
keymap = "main"
key = "j"
command = []

[[color]]
name = "cursor"
fg = "black"
bg = "yellow"
attributes = ["bold", "underline"]

[[color]]
line = "    Fixes:"
fg = "cyan"
bg = "default"

[[color]]
name = "title-focus"
fg = "chartreuse"
bg = "default"
"#;

fn applied() -> (Bindings, LineInfoRegistry, Vec<ConfigError>) {
    let config = AppConfig::from_toml(CONFIG).unwrap();
    let mut bindings = Bindings::with_views().unwrap();
    let mut lines = LineInfoRegistry::new();
    let errors = apply(&config, &mut bindings, &mut lines);
    (bindings, lines, errors)
}

#[test]
fn test_bad_entries_are_reported_and_skipped() {
    let (_, _, errors) = applied();
    let messages: Vec<String> = errors.iter().map(|e| e.to_string()).collect();

    assert_eq!(
        messages,
        vec![
            "bind #3: Unknown key map: 'nowhere'",
            "bind #4: Unknown request name: 'fly-away'",
            "run #4: empty command",
            "hidden keymap #2: Unknown key map: 'scratch'",
            "color #3: Unknown color: 'chartreuse'",
        ]
    );
}

#[test]
fn test_bindings_and_run_requests_are_applied() {
    let (bindings, _, _) = applied();
    let keymaps = bindings.keymaps();
    let generic = keymaps.generic();
    let main = keymaps.lookup("main").unwrap();
    let status = keymaps.lookup("status").unwrap();

    assert_eq!(bindings.resolve(generic, Key::char('q')), Action::Key(Key::char('q')));
    assert_eq!(
        bindings.resolve(main, Key::ctrl('F')),
        Action::Request(Request::MovePageDown)
    );

    // a forced run-request replaces the built-in commit on the same key
    let commit = bindings
        .run_request_for(bindings.resolve(status, Key::char('C')))
        .unwrap();
    assert_eq!(commit.argv, vec!["git", "commit", "--amend"]);

    // without force the built-in cherry-pick keeps its key
    let cherry_pick = bindings
        .run_request_for(bindings.resolve(main, Key::char('C')))
        .unwrap();
    assert_eq!(cherry_pick.argv, vec!["git", "cherry-pick", "%(commit)"]);

    // 'j' is a default binding, so the unforced run-request was skipped
    assert_eq!(
        bindings.resolve(main, Key::char('j')),
        Action::Request(Request::MoveDown)
    );

    // five built-ins plus the forced commit
    assert_eq!(bindings.run_requests().len(), 6);
}

#[test]
fn test_unbinding_overrides_builtin_run_request() {
    let config = AppConfig::from_toml(
        r#"
[[bind]]
keymap = "generic"
key = "G"
action = "none"
"#,
    )
    .unwrap();
    let mut bindings = Bindings::with_views().unwrap();
    let mut lines = LineInfoRegistry::new();
    let errors = apply(&config, &mut bindings, &mut lines);
    assert!(errors.is_empty());

    let generic = bindings.keymaps().generic();
    assert_eq!(bindings.resolve(generic, Key::char('G')), Action::Key(Key::char('G')));

    // the built-in is still registered, just no longer reachable from G
    assert!(
        bindings
            .run_request_for(bindings.resolve(generic, Key::char('G')))
            .is_none()
    );
}

#[test]
fn test_builtin_run_requests_can_be_disabled() {
    let config = AppConfig::from_toml("builtin_run_requests = false").unwrap();
    let mut bindings = Bindings::with_views().unwrap();
    let mut lines = LineInfoRegistry::new();
    apply(&config, &mut bindings, &mut lines);

    let generic = bindings.keymaps().generic();
    assert_eq!(bindings.resolve(generic, Key::char('G')), Action::Key(Key::char('G')));
    assert!(bindings.run_requests().is_empty());
}

#[test]
fn test_hidden_keymaps_are_flagged() {
    let (bindings, _, _) = applied();
    let keymaps = bindings.keymaps();
    let hidden: Vec<&str> = keymaps
        .iter()
        .filter(|(_, keymap)| keymap.hidden)
        .map(|(_, keymap)| keymap.name())
        .collect();

    assert_eq!(hidden, vec!["stage"]);
}

#[test]
fn test_colors_are_applied() {
    let (_, lines, _) = applied();

    let cursor = lines.get_by_name("cursor").unwrap();
    assert_eq!(
        (cursor.fg, cursor.bg, cursor.attr),
        (Color::Black, Color::Yellow, Attr::BOLD | Attr::UNDERLINE)
    );

    let fixes = lines.classify("    Fixes: #12");
    let info = lines.info(fixes).unwrap();
    assert_eq!(info.name(), "    Fixes:");
    assert_eq!(info.fg, Color::Cyan);

    // the failed entry left the category untouched
    let title = lines.info(LineType::TitleFocus.into()).unwrap();
    assert_eq!((title.fg, title.bg), (Color::White, Color::Blue));
}
