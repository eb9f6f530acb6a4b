use super::*;

#[test]
fn displays_command() {
    let share = Command::Share;
    assert_eq!("share", share.to_string());

    let print = Command::Print;
    assert_eq!("print", print.to_string());
}
