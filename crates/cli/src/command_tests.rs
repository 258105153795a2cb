// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn insert_action_carries_text() {
    let action = Action::insert("hello");
    assert_eq!(action.name(), "insert");
    assert_eq!(action.arguments(), ["hello".to_string()]);
}

#[test]
fn insert_command_has_single_insert_action() {
    let command = Command::insert("word hello", "hello");
    assert_eq!(command.name(), "word hello");
    assert_eq!(command.actions(), [Action::insert("hello")]);
}

#[test]
fn commands_compare_structurally() {
    let a = Command::insert("bang", "!");
    let b = Command::new("bang", vec![Action::new("insert", vec!["!".to_string()])]);
    assert_eq!(a, b);
    assert_ne!(a, Command::insert("bang", "?"));
    assert_ne!(a, Command::insert("dot", "!"));
}

#[test]
fn action_serializes_to_name_and_arguments() {
    let action = Action::insert("\n");
    let json = serde_json::to_string(&action).unwrap();
    assert_eq!(json, r#"{"name":"insert","arguments":["\n"]}"#);
}
