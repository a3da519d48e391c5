use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_food_demo_end_to_end() {
    let mut cmd = Command::new(cargo_bin!("tiffin"));
    cmd.arg("food");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Order ORD1001 placed! Total: ₹498"))
        .stdout(predicate::str::contains("Priority delivery assigned!"))
        .stdout(predicate::str::contains("Delivery partner: John"))
        .stdout(predicate::str::contains("Payment of ₹500 successful!"))
        .stdout(predicate::str::contains(
            "Paneer Butter Masala - ₹299 | Category: Veg",
        ))
        // Underpayment on the fresh 498 order is reported, not fatal
        .stdout(predicate::str::contains(
            "Error: insufficient payment: offered 100 against a total of 498",
        ))
        .stdout(predicate::str::contains("Caught: Spice Villa is closed!"))
        .stdout(predicate::str::contains("Order processing finished."))
        // Final summary: order 3 never left open
        .stdout(predicate::str::contains("ORD1003 open"));
}

#[test]
fn test_food_demo_is_the_default_subcommand() {
    let mut cmd = Command::new(cargo_bin!("tiffin"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Order ORD1001 placed! Total: ₹498"));
}

#[test]
fn test_food_demo_json_summary() {
    let mut cmd = Command::new(cargo_bin!("tiffin"));
    cmd.args(["food", "--json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""total": "498""#))
        .stdout(predicate::str::contains(r#""state": "placed""#))
        .stdout(predicate::str::contains(r#""state": "open""#));
}

#[test]
fn test_social_demo_end_to_end() {
    let mut cmd = Command::new(cargo_bin!("tiffin"));
    cmd.arg("social");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Alice now follows Bob"))
        .stdout(predicate::str::contains("Text post by Alice: My first post!"))
        .stdout(predicate::str::contains("Photo by Alice -> vacation.jpg"))
        // Text posts like once, photos double-tap
        .stdout(predicate::str::contains("Likes: 1"))
        .stdout(predicate::str::contains("Likes: 2"))
        .stdout(predicate::str::contains("Session ended."));
}
