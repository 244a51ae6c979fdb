use assert_cmd::Command;
use predicates::prelude::*;

fn notz_cmd() -> Command {
    Command::cargo_bin("notz").unwrap()
}

#[test]
fn test_add_then_list_shows_note() {
    notz_cmd()
        .write_stdin("add Groceries \"milk and eggs\"\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added: Groceries"))
        .stdout(predicate::str::contains("1. [ ] Groceries  milk and eggs"));
}

#[test]
fn test_list_rerenders_after_every_mutation() {
    // No explicit `list` command: the add itself re-displays the list.
    notz_cmd()
        .write_stdin("add Groceries milk\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. [ ] Groceries  milk"));
}

#[test]
fn test_rejected_add_shows_message_and_keeps_list_empty() {
    notz_cmd()
        .write_stdin("add ab\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Title must be at least 3 characters.",
        ))
        .stdout(predicate::str::contains("No notes."));
}

#[test]
fn test_toggle_checks_and_unchecks() {
    notz_cmd()
        .write_stdin("add Laundry\ntoggle 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note checked (1): Laundry"))
        .stdout(predicate::str::contains("1. [x] Laundry"));

    notz_cmd()
        .write_stdin("add Laundry\ntoggle 1\ntoggle 1\nlist\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note unchecked (1): Laundry"));
}

#[test]
fn test_delete_renumbers_remaining_notes() {
    notz_cmd()
        .write_stdin("add First\nadd Second\ndelete 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note deleted (1): First"))
        .stdout(predicate::str::contains("1. [ ] Second"));
}

#[test]
fn test_edit_replaces_title_and_text() {
    notz_cmd()
        .write_stdin("add \"Old title\" \"old text\"\nedit 1 \"New title\" \"new text\"\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note updated (1): New title"))
        .stdout(predicate::str::contains("1. [ ] New title  new text"));
}

#[test]
fn test_view_shows_full_note() {
    notz_cmd()
        .write_stdin("add Groceries \"milk and eggs\"\nview 1\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("milk and eggs"))
        .stdout(predicate::str::contains("[ ] Groceries"));
}

#[test]
fn test_operations_on_missing_indexes_warn_but_do_not_abort() {
    notz_cmd()
        .write_stdin("delete 5\ntoggle 5\nadd Survivor\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No note at index 5"))
        .stdout(predicate::str::contains("Note added: Survivor"));
}

#[test]
fn test_filtered_listing() {
    notz_cmd()
        .write_stdin("add Open\nadd Done\ntoggle 2\nlist --done\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("2. [x] Done"));
}

#[test]
fn test_unknown_command_reports_and_continues() {
    notz_cmd()
        .write_stdin("frobnicate\nadd \"Still here\"\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Note added: Still here"))
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_eof_ends_the_session() {
    notz_cmd()
        .write_stdin("add Groceries\n")
        .assert()
        .success();
}

#[test]
fn test_notes_do_not_survive_the_process() {
    notz_cmd()
        .write_stdin("add Ephemeral\nquit\n")
        .assert()
        .success();

    notz_cmd()
        .write_stdin("list\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("No notes."));
}
