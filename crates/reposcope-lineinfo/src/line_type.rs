//! Built-in line categories and their default appearance

use serde::Serialize;
use strum::{AsRefStr, Display, EnumCount, EnumIter};

use crate::color::{Attr, Color};

/// Built-in line categories, in classification order
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    AsRefStr,
    Display,
    EnumCount,
    EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum LineType {
    // Diff output
    DiffHeader,
    DiffChunk,
    DiffAdd,
    DiffAdd2,
    DiffDel,
    DiffDel2,
    DiffIndex,
    DiffOldmode,
    DiffNewmode,
    DiffDeletedFileMode,
    DiffCopyFrom,
    DiffCopyTo,
    DiffRenameFrom,
    DiffRenameTo,
    DiffSimilarity,
    DiffDissimilarity,
    DiffTree,

    // Pretty printed commit headers
    PpAuthor,
    PpCommit,
    PpMerge,
    PpDate,
    PpAdate,
    PpCdate,
    PpRefs,
    PpReflog,
    PpReflogmsg,
    Stash,

    // Raw commit headers and trailers
    Commit,
    Parent,
    Tree,
    Author,
    Committer,
    Signoff,
    Acked,
    Tested,
    Reviewed,

    // Selected by the views, never by prefix
    Default,
    Cursor,
    Status,
    Delimiter,
    Date,
    Mode,
    Id,
    Overflow,
    Filename,
    FileSize,
    LineNumber,
    TitleBlur,
    TitleFocus,
    MainCommit,
    MainTag,
    MainLocalTag,
    MainRemote,
    MainReplace,
    MainTracked,
    MainRef,
    MainHead,
    MainRevgraph,
    TreeHead,
    TreeDir,
    TreeFile,
    StatHead,
    StatSection,
    StatNone,
    StatStaged,
    StatUnstaged,
    StatUntracked,
    HelpKeymap,
    HelpGroup,
    DiffStat,
    #[serde(rename = "palette-0")]
    #[strum(serialize = "palette-0")]
    Palette0,
    #[serde(rename = "palette-1")]
    #[strum(serialize = "palette-1")]
    Palette1,
    #[serde(rename = "palette-2")]
    #[strum(serialize = "palette-2")]
    Palette2,
    #[serde(rename = "palette-3")]
    #[strum(serialize = "palette-3")]
    Palette3,
    #[serde(rename = "palette-4")]
    #[strum(serialize = "palette-4")]
    Palette4,
    #[serde(rename = "palette-5")]
    #[strum(serialize = "palette-5")]
    Palette5,
    #[serde(rename = "palette-6")]
    #[strum(serialize = "palette-6")]
    Palette6,
    GraphCommit,
}

impl LineType {
    /// Canonical kebab-case name
    pub fn name(&self) -> &str {
        self.as_ref()
    }
}

/// Default record for one built-in category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineDefault {
    pub line_type: LineType,
    pub prefix: &'static str,
    pub fg: Color,
    pub bg: Color,
    pub attr: Attr,
}

/// Get the default line-info table, one record per [`LineType`] in declaration order
pub fn default_line_info() -> Vec<LineDefault> {
    use Color::{Blue, Cyan, Green, Magenta, Red, White, Yellow};
    use LineType::*;

    const D: Color = Color::Default;
    const NORMAL: Attr = Attr::NORMAL;
    const BOLD: Attr = Attr::BOLD;

    let table = [
        (DiffHeader, "diff --", Yellow, D, NORMAL),
        (DiffChunk, "@@", Magenta, D, NORMAL),
        (DiffAdd, "+", Green, D, NORMAL),
        (DiffAdd2, "+", Green, D, NORMAL),
        (DiffDel, "-", Red, D, NORMAL),
        (DiffDel2, "-", Red, D, NORMAL),
        (DiffIndex, "index", Blue, D, NORMAL),
        (DiffOldmode, "old file mode ", Yellow, D, NORMAL),
        (DiffNewmode, "new file mode ", Yellow, D, NORMAL),
        (DiffDeletedFileMode, "deleted file mode ", Yellow, D, NORMAL),
        (DiffCopyFrom, "copy from ", Yellow, D, NORMAL),
        (DiffCopyTo, "copy to ", Yellow, D, NORMAL),
        (DiffRenameFrom, "rename from ", Yellow, D, NORMAL),
        (DiffRenameTo, "rename to ", Yellow, D, NORMAL),
        (DiffSimilarity, "similarity ", Yellow, D, NORMAL),
        (DiffDissimilarity, "dissimilarity", Yellow, D, NORMAL),
        (DiffTree, "diff-tree", Blue, D, NORMAL),
        (PpAuthor, "Author: ", Cyan, D, NORMAL),
        (PpCommit, "Commit: ", Magenta, D, NORMAL),
        (PpMerge, "Merge: ", Blue, D, NORMAL),
        (PpDate, "Date:   ", Yellow, D, NORMAL),
        (PpAdate, "AuthorDate: ", Yellow, D, NORMAL),
        (PpCdate, "CommitDate: ", Yellow, D, NORMAL),
        (PpRefs, "Refs: ", Red, D, NORMAL),
        (PpReflog, "Reflog: ", Red, D, NORMAL),
        (PpReflogmsg, "Reflog message: ", Yellow, D, NORMAL),
        (Stash, "stash@{", Magenta, D, NORMAL),
        (Commit, "commit ", Green, D, NORMAL),
        (Parent, "parent ", Blue, D, NORMAL),
        (Tree, "tree ", Blue, D, NORMAL),
        (Author, "author ", Green, D, NORMAL),
        (Committer, "committer ", Magenta, D, NORMAL),
        (Signoff, "    Signed-off-by", Yellow, D, NORMAL),
        (Acked, "    Acked-by", Yellow, D, NORMAL),
        (Tested, "    Tested-by", Yellow, D, NORMAL),
        (Reviewed, "    Reviewed-by", Yellow, D, NORMAL),
        (Default, "", D, D, NORMAL),
        (Cursor, "", White, Green, BOLD),
        (Status, "", Green, D, NORMAL),
        (Delimiter, "", Magenta, D, NORMAL),
        (Date, "", Blue, D, NORMAL),
        (Mode, "", Cyan, D, NORMAL),
        (Id, "", Magenta, D, NORMAL),
        (Overflow, "", Red, D, NORMAL),
        (Filename, "", D, D, NORMAL),
        (FileSize, "", D, D, NORMAL),
        (LineNumber, "", Cyan, D, NORMAL),
        (TitleBlur, "", White, Blue, NORMAL),
        (TitleFocus, "", White, Blue, BOLD),
        (MainCommit, "", D, D, NORMAL),
        (MainTag, "", Magenta, D, BOLD),
        (MainLocalTag, "", Magenta, D, NORMAL),
        (MainRemote, "", Yellow, D, NORMAL),
        (MainReplace, "", Cyan, D, NORMAL),
        (MainTracked, "", Yellow, D, BOLD),
        (MainRef, "", Cyan, D, NORMAL),
        (MainHead, "", Cyan, D, BOLD),
        (MainRevgraph, "", Magenta, D, NORMAL),
        (TreeHead, "", D, D, BOLD),
        (TreeDir, "", Yellow, D, NORMAL),
        (TreeFile, "", D, D, NORMAL),
        (StatHead, "", Yellow, D, NORMAL),
        (StatSection, "", Cyan, D, NORMAL),
        (StatNone, "", D, D, NORMAL),
        (StatStaged, "", Magenta, D, NORMAL),
        (StatUnstaged, "", Magenta, D, NORMAL),
        (StatUntracked, "", Magenta, D, NORMAL),
        (HelpKeymap, "", Cyan, D, NORMAL),
        (HelpGroup, "", Blue, D, NORMAL),
        (DiffStat, "", Blue, D, NORMAL),
        (Palette0, "", Magenta, D, NORMAL),
        (Palette1, "", Yellow, D, NORMAL),
        (Palette2, "", Cyan, D, NORMAL),
        (Palette3, "", Green, D, NORMAL),
        (Palette4, "", D, D, NORMAL),
        (Palette5, "", White, D, NORMAL),
        (Palette6, "", Red, D, NORMAL),
        (GraphCommit, "", Blue, D, NORMAL),
    ];

    table
        .into_iter()
        .map(|(line_type, prefix, fg, bg, attr)| LineDefault {
            line_type,
            prefix,
            fg,
            bg,
            attr,
        })
        .collect()
}
