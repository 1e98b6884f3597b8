//! Then step definitions
//!
//! Steps that verify session state, navigation and recorded failures.

use cucumber::then;

use cms_user_steps::{parse_roles, CmsBackend, UserColumn};

use crate::world::UserWorld;

// =============================================================================
// Session state
// =============================================================================

#[then("I am logged in")]
fn assert_logged_in(world: &mut UserWorld) {
    assert!(
        world.is_logged_in(),
        "Expected an open session, but nobody is logged in"
    );
}

#[then("I am not logged in")]
fn assert_not_logged_in(world: &mut UserWorld) {
    assert!(
        !world.is_logged_in(),
        "Expected no session, but uid {:?} is logged in",
        world.context.backend().session()
    );
}

// =============================================================================
// Navigation
// =============================================================================

#[then(regex = r#"^the current page is "([^"]+)"$"#)]
fn assert_current_page(world: &mut UserWorld, expected: String) {
    assert!(
        world.last_error.is_none(),
        "Expected navigation to succeed, got error: {:?}",
        world.last_error_message()
    );

    let last = world.context.redirect().last();
    assert_eq!(
        last,
        Some(expected.as_str()),
        "Expected current page to be {}, got {:?}",
        expected,
        last
    );
}

#[then("no page has been visited")]
fn assert_no_page_visited(world: &mut UserWorld) {
    let visited = world.context.redirect().visited();
    assert!(
        visited.is_empty(),
        "Expected no navigation, but visited: {:?}",
        visited
    );
}

// =============================================================================
// Recorded failures
// =============================================================================

#[then(regex = r#"^the step fails with "([^"]+)"$"#)]
fn assert_step_fails_with(world: &mut UserWorld, expected_message: String) {
    let error_msg = match world.last_error_message() {
        Some(msg) => msg,
        None => panic!(
            "Expected the step to fail with '{}', but it succeeded",
            expected_message
        ),
    };

    assert!(
        error_msg
            .to_lowercase()
            .contains(&expected_message.to_lowercase()),
        "Expected error to contain '{}', got: '{}'",
        expected_message,
        error_msg
    );
}

// =============================================================================
// Current user
// =============================================================================

#[then(regex = r#"^the current user has roles? "([^"]*)"$"#)]
fn assert_current_user_roles(world: &mut UserWorld, roles: String) {
    let account = world
        .context
        .current_user()
        .unwrap_or_else(|| panic!("No user has been created in this scenario"));

    assert_eq!(
        account.roles,
        parse_roles(&roles),
        "Unexpected roles on user {}",
        account.name
    );
}

#[then(regex = r#"^the current user field "([^"]+)" is "([^"]*)"$"#)]
fn assert_current_user_field(world: &mut UserWorld, field: String, expected: String) {
    let account = world
        .context
        .current_user()
        .unwrap_or_else(|| panic!("No user has been created in this scenario"));

    let actual = account.fields.get(&field);
    assert_eq!(
        actual,
        Some(&expected),
        "Expected field '{}' on user {} to be '{}', got {:?}",
        field,
        account.name,
        expected,
        actual
    );
}

#[then(regex = r#"^a user with (name|mail) "([^"]+)" exists$"#)]
fn assert_user_exists(world: &mut UserWorld, column: String, value: String) {
    let column: UserColumn = column
        .parse()
        .unwrap_or_else(|e| panic!("Invalid lookup column: {}", e));

    assert!(
        world.context.backend().find_user(column, &value).is_some(),
        "Expected a user with {} \"{}\" to exist",
        column,
        value
    );
}
