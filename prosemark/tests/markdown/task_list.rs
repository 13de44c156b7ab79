//! Task list conversion tests.

use crate::common::parse_doc;
use prosemark::NodeKind;

#[test]
fn task_list_tree_shape() {
    let doc = parse_doc("- [x] Done\n- [ ] Pending\n");
    let list = &doc.content[0];

    assert_eq!(list.kind, NodeKind::TaskList);
    assert_eq!(list.content.len(), 2);

    let done = &list.content[0];
    assert_eq!(done.kind, NodeKind::TaskItem);
    assert_eq!(done.attr_bool("checked"), Some(true));

    let pending = &list.content[1];
    assert_eq!(pending.attr_bool("checked"), Some(false));
}

#[test]
fn checked_state_follows_each_item() {
    let doc = parse_doc("- [ ] first\n- [x] second\n- [ ] third\n");
    let checked: Vec<bool> = doc.content[0]
        .content
        .iter()
        .map(|item| item.attr_bool("checked").unwrap())
        .collect();
    assert_eq!(checked, vec![false, true, false]);
}

#[test]
fn item_text_excludes_the_checkbox_marker() {
    let doc = parse_doc("- [x] Ship it\n");
    let item = &doc.content[0].content[0];
    let para = &item.content[0];
    assert_eq!(para.content[0].text.as_deref(), Some("Ship it"));
}

#[test]
fn reverse_conversion_reproduces_the_markers() {
    let doc = parse_doc("- [x] Done\n- [ ] Pending\n");
    assert_eq!(prosemark::to_markdown(&doc), "- [x] Done\n- [ ] Pending");
}

#[test]
fn plain_list_next_to_task_list_stays_plain() {
    let doc = parse_doc("- [x] task\n\nthen\n\n- plain\n");

    assert_eq!(doc.content[0].kind, NodeKind::TaskList);
    assert_eq!(doc.content[2].kind, NodeKind::BulletList);
    assert_eq!(doc.content[2].content[0].kind, NodeKind::ListItem);
}

#[test]
fn mixed_items_in_one_list() {
    // A list where only some items carry checkboxes still counts as a task
    // container, but the plain item keeps its kind.
    let doc = parse_doc("- [x] tracked\n- untracked\n");
    let list = &doc.content[0];

    assert_eq!(list.kind, NodeKind::TaskList);
    assert_eq!(list.content[0].kind, NodeKind::TaskItem);
    assert_eq!(list.content[1].kind, NodeKind::ListItem);
}
