//! Extraction stages for the task parser.
//!
//! Each stage is a pure function that takes the working text and returns the
//! extracted value together with the text that remains once the matched
//! tokens are removed. Stages are chained by [`super::TaskParser::parse`].

use once_cell::sync::Lazy;
use regex::Regex;

/// Marker that introduces the free-text due-date phrase.
pub const DUE_MARKER: &str = "due:";

/// Marker that introduces a note. Every occurrence starts a new note.
pub const NOTE_MARKER: &str = "note:";

// Compiled regex patterns

// ASCII word characters only; non-ASCII labels are deliberately not matched.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"@([A-Za-z0-9_]+)").unwrap_or_else(|e| panic!("Invalid label regex: {e}"))
});

static PRIORITY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // !!1 .. !!4 or p1 .. p4
    Regex::new(r"(?P<prefix>!!|p)(?P<priority>[1-4])")
        .unwrap_or_else(|e| panic!("Invalid priority regex: {e}"))
});

static PROJECT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    // #project-name, or a multi-word name wrapped in {}, (), ``, "" or ''.
    // Unlike labels, `\w` here is Unicode-aware, so `#tâche` is one name.
    Regex::new(r#"#(?:[`{("'](?P<project_space>[\w ]+)[`})"']|(?P<project>[-\w]+))"#)
        .unwrap_or_else(|e| panic!("Invalid project regex: {e}"))
});

/// Extract every `@label` in order of appearance.
///
/// Duplicates are kept. Each `@<label>` literal is then removed everywhere it
/// occurs in the text.
#[must_use]
pub fn pop_labels(text: &str) -> (Vec<String>, String) {
    let labels: Vec<String> = LABEL_PATTERN
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .collect();

    let mut remaining = text.to_string();
    for label in &labels {
        remaining = remaining.replace(&format!("@{label}"), "");
    }

    (labels, remaining)
}

/// Extract the first `!!N` / `pN` priority token.
///
/// Returns the digit as a string, or an empty string when no token is present.
#[must_use]
pub fn pop_priority(text: &str) -> (String, String) {
    let Some(caps) = PRIORITY_PATTERN.captures(text) else {
        return (String::new(), text.to_string());
    };

    let token = caps.get(0).map_or("", |m| m.as_str());
    let priority = caps.name("priority").map_or("", |m| m.as_str());

    (priority.to_string(), text.replace(token, ""))
}

/// Extract the first `#project`, stripping any delimiters.
///
/// Every span matching the project pattern is removed, not only the first.
#[must_use]
pub fn pop_project(text: &str) -> (String, String) {
    let Some(caps) = PROJECT_PATTERN.captures(text) else {
        return (String::new(), text.to_string());
    };

    let project = caps
        .name("project_space")
        .or_else(|| caps.name("project"))
        .map_or("", |m| m.as_str())
        .to_string();

    (project, PROJECT_PATTERN.replace_all(text, "").into_owned())
}

/// Extract the due-date phrase following the first `due:` marker.
///
/// The phrase runs until the next `note:` (or the next `due:`, or the end of
/// the text) and is returned trimmed. It is passed through verbatim; no date
/// interpretation happens here.
#[must_use]
pub fn pop_due(text: &str) -> (String, String) {
    let Some(start) = text.find(DUE_MARKER) else {
        return (String::new(), text.to_string());
    };

    let after = &text[start + DUE_MARKER.len()..];
    let segment = after.find(DUE_MARKER).map_or(after, |end| &after[..end]);
    let raw = segment.find(NOTE_MARKER).map_or(segment, |end| &segment[..end]);

    let remaining = text.replace(&format!("{DUE_MARKER}{raw}"), "");
    (raw.trim().to_string(), remaining)
}

/// Split off every `note:` section.
///
/// Everything before the first marker survives as the working text; each
/// later segment becomes one trimmed note. Must run after [`pop_due`].
#[must_use]
pub fn pop_notes(text: &str) -> (Vec<String>, String) {
    if !text.contains(NOTE_MARKER) {
        return (Vec::new(), text.to_string());
    }

    let mut fragments = text.split(NOTE_MARKER);
    let head = fragments.next().unwrap_or_default().trim().to_string();
    let notes = fragments.map(|fragment| fragment.trim().to_string()).collect();

    (notes, head)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==============
    // Label Stage
    // ==============

    #[test]
    fn test_pop_labels_in_order() {
        let (labels, rest) = pop_labels("x @b @a");
        assert_eq!(labels, vec!["b", "a"]);
        assert_eq!(rest.trim(), "x");
    }

    #[test]
    fn test_pop_labels_keeps_duplicates_and_removes_all() {
        let (labels, rest) = pop_labels("@a one @a two");
        assert_eq!(labels, vec!["a", "a"]);
        assert_eq!(rest, " one  two");
    }

    #[test]
    fn test_pop_labels_adjacent() {
        let (labels, rest) = pop_labels("x @a@b");
        assert_eq!(labels, vec!["a", "b"]);
        assert_eq!(rest, "x ");
    }

    #[test]
    fn test_pop_labels_bare_at_sign() {
        let (labels, rest) = pop_labels("meet @ noon");
        assert!(labels.is_empty());
        assert_eq!(rest, "meet @ noon");
    }

    #[test]
    fn test_pop_labels_stops_at_non_ascii() {
        let (labels, _) = pop_labels("x @gr\u{f8}cery");
        assert_eq!(labels, vec!["gr"]);

        let (labels, _) = pop_labels("x @\u{1f4f1}phone");
        assert!(labels.is_empty());
    }

    // ================
    // Priority Stage
    // ================

    #[test]
    fn test_pop_priority_bang() {
        let (priority, rest) = pop_priority("x !!2 y");
        assert_eq!(priority, "2");
        assert_eq!(rest, "x  y");
    }

    #[test]
    fn test_pop_priority_p_prefix() {
        let (priority, rest) = pop_priority("x p4");
        assert_eq!(priority, "4");
        assert_eq!(rest, "x ");
    }

    #[test]
    fn test_pop_priority_first_match_only() {
        let (priority, rest) = pop_priority("x !!1 p2");
        assert_eq!(priority, "1");
        assert_eq!(rest, "x  p2");
    }

    #[test]
    fn test_pop_priority_out_of_range() {
        let (priority, rest) = pop_priority("x !!5 p0");
        assert_eq!(priority, "");
        assert_eq!(rest, "x !!5 p0");
    }

    // ===============
    // Project Stage
    // ===============

    #[test]
    fn test_pop_project_bare_with_hyphen() {
        let (project, rest) = pop_project("x #home-office y");
        assert_eq!(project, "home-office");
        assert_eq!(rest, "x  y");
    }

    #[test]
    fn test_pop_project_delimited_styles() {
        for input in ["#{a b}", "#(a b)", "#`a b`", "#\"a b\"", "#'a b'"] {
            let (project, rest) = pop_project(&format!("x {input}"));
            assert_eq!(project, "a b", "input: {input}");
            assert_eq!(rest, "x ", "input: {input}");
        }
    }

    #[test]
    fn test_pop_project_accepts_non_ascii() {
        let (project, rest) = pop_project("x #tâche");
        assert_eq!(project, "tâche");
        assert_eq!(rest, "x ");
    }

    #[test]
    fn test_pop_project_first_match_wins_all_removed() {
        let (project, rest) = pop_project("#one x #two");
        assert_eq!(project, "one");
        assert_eq!(rest, " x ");
    }

    #[test]
    fn test_pop_project_unclosed_delimiter() {
        let (project, rest) = pop_project("x #{a b");
        assert_eq!(project, "");
        assert_eq!(rest, "x #{a b");
    }

    // ===========
    // Due Stage
    // ===========

    #[test]
    fn test_pop_due_to_end() {
        let (due, rest) = pop_due("x due: next week");
        assert_eq!(due, "next week");
        assert_eq!(rest, "x ");
    }

    #[test]
    fn test_pop_due_stops_at_note() {
        let (due, rest) = pop_due("x due:friday note: n");
        assert_eq!(due, "friday");
        assert_eq!(rest, "x note: n");
    }

    #[test]
    fn test_pop_due_stops_at_next_due_marker() {
        let (due, rest) = pop_due("x due: a due: b");
        assert_eq!(due, "a");
        assert_eq!(rest, "x due: b");
    }

    #[test]
    fn test_pop_due_after_note() {
        let (due, rest) = pop_due("x note: a due: b");
        assert_eq!(due, "b");
        assert_eq!(rest, "x note: a ");
    }

    #[test]
    fn test_pop_due_absent() {
        let (due, rest) = pop_due("x note: n");
        assert_eq!(due, "");
        assert_eq!(rest, "x note: n");
    }

    #[test]
    fn test_pop_due_empty_payload() {
        let (due, rest) = pop_due("x due:");
        assert_eq!(due, "");
        assert_eq!(rest, "x ");
    }

    // =============
    // Notes Stage
    // =============

    #[test]
    fn test_pop_notes_multiple() {
        let (notes, rest) = pop_notes("x note: a note: b ");
        assert_eq!(notes, vec!["a", "b"]);
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_pop_notes_keeps_empty_notes() {
        let (notes, rest) = pop_notes("x note:note: b");
        assert_eq!(notes, vec!["", "b"]);
        assert_eq!(rest, "x");
    }

    #[test]
    fn test_pop_notes_absent_leaves_text_untouched() {
        let (notes, rest) = pop_notes("  x  ");
        assert!(notes.is_empty());
        assert_eq!(rest, "  x  ");
    }
}
