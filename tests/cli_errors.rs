mod common;

use predicates::str::contains;

#[test]
fn unknown_scheme_fails_before_running_du() {
    let dir = common::basic_fs();

    common::colordu()
        .current_dir(&dir)
        .env("COLORDU_COLORSCHEME", "BOGUS")
        .arg(".")
        .assert()
        .failure()
        .stdout(predicates::str::is_empty())
        .stderr(contains("BOGUS"))
        .stderr(contains("SUNSET"))
        .stderr(contains("SMOOTH_RAINBOW"))
        .stderr(contains("NONE"));
}

#[test]
fn invalid_color_mode_fails() {
    common::colordu()
        .env("COLORDU_COLOR", "rainbow")
        .assert()
        .failure()
        .stderr(contains("COLORDU_COLOR"));
}

#[test]
fn du_exit_status_is_passed_on() {
    let dir = common::basic_fs();

    common::colordu()
        .current_dir(&dir)
        .env("COLORDU_COLOR", "always")
        .arg("does-not-exist")
        .assert()
        .failure()
        .code(1)
        .stderr(contains("does-not-exist"));
}
