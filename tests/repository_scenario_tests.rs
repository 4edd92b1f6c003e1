//! End-to-end scenario: looking a user up through a repository that may not
//! have one.

use maybers::option::{Maybe, OptionLike};
use rstest::rstest;
use std::cell::Cell;

#[derive(Debug, Clone, PartialEq, Eq)]
struct User {
    name: String,
}

/// Users that exist, and the order in which names were registered.
///
/// A registered name need not belong to an existing user.
struct Repository {
    users: Vec<String>,
    registrations: Vec<String>,
}

impl Repository {
    fn new<const U: usize, const R: usize>(users: [&str; U], registrations: [&str; R]) -> Self {
        Self {
            users: users.iter().map(ToString::to_string).collect(),
            registrations: registrations.iter().map(ToString::to_string).collect(),
        }
    }

    fn last_registered_username(&self) -> Maybe<String> {
        self.registrations.iter().cloned().collect()
    }

    fn get_user(&self, name: String) -> Maybe<User> {
        if self.users.contains(&name) {
            Maybe::some(User { name })
        } else {
            Maybe::none()
        }
    }
}

fn find_current_user(repository: &Repository, default_calls: &Cell<usize>) -> User {
    repository
        .last_registered_username()
        .flat_map(|name| repository.get_user(name))
        .get_or_call(|| {
            default_calls.set(default_calls.get() + 1);
            User {
                name: "muhuhu".to_string(),
            }
        })
}

#[rstest]
fn registered_user_is_found_without_default() {
    let repository = Repository::new(["foo"], ["foo"]);
    let default_calls = Cell::new(0);

    assert_eq!(
        repository.last_registered_username(),
        Maybe::some("foo".to_string())
    );
    assert_eq!(
        repository
            .last_registered_username()
            .flat_map(|name| repository.get_user(name)),
        Maybe::some(User {
            name: "foo".to_string()
        })
    );

    let user = find_current_user(&repository, &default_calls);

    assert_eq!(user.name, "foo");
    assert_eq!(default_calls.get(), 0);
}

#[rstest]
fn latest_registration_wins() {
    let repository = Repository::new(["foo", "bar"], ["foo", "bar"]);
    let default_calls = Cell::new(0);

    assert_eq!(find_current_user(&repository, &default_calls).name, "bar");
    assert_eq!(default_calls.get(), 0);
}

#[rstest]
fn registered_name_without_user_falls_back_to_default_user() {
    let repository = Repository::new(["foo"], ["foo", "baz"]);
    let default_calls = Cell::new(0);

    assert_eq!(
        repository.last_registered_username(),
        Maybe::some("baz".to_string())
    );
    assert_eq!(
        repository
            .last_registered_username()
            .flat_map(|name| repository.get_user(name)),
        Maybe::none()
    );

    let user = find_current_user(&repository, &default_calls);

    assert_eq!(user.name, "muhuhu");
    assert_eq!(default_calls.get(), 1);
}

#[rstest]
fn empty_repository_falls_back_to_default_user() {
    let repository = Repository::new([], []);
    let default_calls = Cell::new(0);

    let user = find_current_user(&repository, &default_calls);

    assert_eq!(user.name, "muhuhu");
    assert_eq!(default_calls.get(), 1);
}
