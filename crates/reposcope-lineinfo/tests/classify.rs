use pretty_assertions::assert_eq;
use reposcope_lineinfo::{
    Attr, Color, ColorPairs, LineId, LineInfoRegistry, LineType, StylePalette,
};

const SAMPLE: &str = "\
commit 4f2a9c1
Author: A U Thor <author@example.com>
Date:   Mon Oct 19 10:00:00 2026 +0200

    Fix the frobnicator

    Signed-off-by: A U Thor <author@example.com>
    Fixes: #42

diff --git a/src/main.rs b/src/main.rs
index 1111111..2222222 100644
--- a/src/main.rs
+++ b/src/main.rs
@@ -1,3 +1,3 @@
-fn main() {}
+fn main() { run() }
 context line";

#[test]
fn test_classifies_a_commit_with_custom_trailer() {
    let mut registry = LineInfoRegistry::new();
    let fixes = registry.add_custom_color("'    Fixes:'").unwrap();

    let classes: Vec<LineId> = SAMPLE.lines().map(|line| registry.classify(line)).collect();

    assert_eq!(
        classes,
        vec![
            LineType::Commit.into(),
            LineType::PpAuthor.into(),
            LineType::PpDate.into(),
            LineType::Default.into(),
            LineType::Default.into(),
            LineType::Default.into(),
            LineType::Signoff.into(),
            fixes,
            LineType::Default.into(),
            LineType::DiffHeader.into(),
            LineType::DiffIndex.into(),
            LineType::DiffDel.into(),
            LineType::DiffAdd.into(),
            LineType::DiffChunk.into(),
            LineType::DiffDel.into(),
            LineType::DiffAdd.into(),
            LineType::Default.into(),
        ]
    );
}

#[test]
fn test_shared_colors_share_a_pair() {
    let mut registry = LineInfoRegistry::new();
    let custom = registry.add_custom_line("TODO").unwrap();
    registry
        .info_mut(custom)
        .unwrap()
        .set_colors(Color::Yellow, Color::Default, Attr::BOLD);

    let mut pairs = ColorPairs::new();
    let mut palette = StylePalette::new();
    pairs.init_colors(&mut registry, &mut palette).unwrap();

    let date = registry.info(LineType::PpDate.into()).unwrap();
    let todo = registry.info(custom).unwrap();
    assert_eq!(date.color_pair(), todo.color_pair());
    assert_ne!(palette.style(date), palette.style(todo));

    let ids: Vec<usize> = pairs.iter().map(|(id, _, _)| id.get()).collect();
    assert_eq!(ids, (1..=pairs.len()).collect::<Vec<_>>());
}
