use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("armory")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("World of Warcraft"))
        .stdout(predicate::str::contains("operations"))
        .stdout(predicate::str::contains("call"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("armory")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("armory"));
}

#[test]
fn test_help_does_not_echo_secret() {
    cargo_bin_cmd!("armory")
        .env("BLIZZARD_CLIENT_SECRET", "hunter2")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("hunter2").not());
}

// ============================================================================
// Operations Listing
// ============================================================================

#[test]
fn test_operations_lists_catalogue() {
    let output = cargo_bin_cmd!("armory")
        .arg("operations")
        .assert()
        .success()
        .stdout(predicate::str::contains("character-profile"))
        .stdout(predicate::str::contains("character-heirlooms-collection"))
        .stdout(predicate::str::contains("pvp-leaderboard"))
        .get_output()
        .stdout
        .clone();

    let listing = String::from_utf8(output).unwrap();
    assert_eq!(listing.lines().count(), 23);
    assert!(listing.lines().any(|l| l == "pvp-seasons-index"));
}

// ============================================================================
// URL Rendering
// ============================================================================

#[test]
fn test_url_for_character_profile() {
    cargo_bin_cmd!("armory")
        .args([
            "url",
            "character-profile",
            "--realm",
            "ravencrest",
            "--character",
            "thrall",
            "--region",
            "eu",
            "--locale",
            "en_GB",
        ])
        .assert()
        .success()
        .stdout(
            "https://eu.api.blizzard.com/profile/wow/character/ravencrest/thrall?namespace=profile-eu&locale=en_GB\n",
        );
}

#[test]
fn test_url_reads_region_from_env() {
    cargo_bin_cmd!("armory")
        .env("WOW_REGION", "kr")
        .env("WOW_LOCALE", "ko_KR")
        .args(["url", "pvp-leaderboard", "--season", "38", "--bracket", "3v3"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "https://kr.api.blizzard.com/data/wow/pvp-season/38/pvp-leaderboard/3v3?namespace=dynamic-kr&locale=ko_KR",
        ));
}

#[test]
fn test_url_missing_parameter() {
    cargo_bin_cmd!("armory")
        .args(["url", "character-pvp-bracket", "--realm", "ravencrest", "--character", "thrall"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Operation character-pvp-bracket requires parameter bracket",
        ));
}

#[test]
fn test_unknown_operation_is_usage_error() {
    cargo_bin_cmd!("armory")
        .args(["url", "character-nonsense"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown operation"));
}

#[test]
fn test_unknown_region_is_usage_error() {
    cargo_bin_cmd!("armory")
        .args(["url", "pvp-seasons-index", "--region", "cn"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unknown region"));
}

// ============================================================================
// Calls
// ============================================================================

#[test]
fn test_call_without_credentials_fails() {
    cargo_bin_cmd!("armory")
        .env_remove("BLIZZARD_CLIENT_ID")
        .env_remove("BLIZZARD_CLIENT_SECRET")
        .args(["call", "pvp-seasons-index"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Missing credential: BLIZZARD_CLIENT_ID"));
}

#[test]
fn test_call_checks_parameters_before_credentials() {
    cargo_bin_cmd!("armory")
        .env_remove("BLIZZARD_CLIENT_ID")
        .env_remove("BLIZZARD_CLIENT_SECRET")
        .args(["call", "pvp-season"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("requires parameter season"));
}
