use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn insert_update_get_scenario() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let mut user = User::new("login2");
    assert_eq!(user.email.as_deref(), Some("login2@test.test"));

    let inserted = assert_ok!(users.insert(&mut user));
    assert_eq!(inserted, 1);
    let id = assert_some!(user.id);

    user.login = "UPD:login2".to_string();
    let updated = assert_ok!(users.update(&user));
    assert_eq!(updated, 1);

    let reloaded = assert_some!(assert_ok!(users.get_by_id(id)));
    assert_eq!(reloaded.id, Some(id));
    assert_eq!(reloaded.login, "UPD:login2");
    assert_eq!(reloaded.email.as_deref(), Some("login2@test.test"));
}

#[test]
fn get_by_id_round_trips_every_field() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let mut user = User {
        email: None,
        ..User::new("nobody")
    };
    assert_ok!(users.insert(&mut user));

    let reloaded = assert_some!(assert_ok!(users.get_by_id(assert_some!(user.id))));
    assert_eq!(reloaded, user);
}

#[test]
fn last_write_wins() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let mut user = User::new("writer");
    assert_ok!(users.insert(&mut user));

    for email in ["a@test.test", "b@test.test", "c@test.test"] {
        user.email = Some(email.to_string());
        assert_eq!(assert_ok!(users.update(&user)), 1);
    }

    let reloaded = assert_some!(assert_ok!(users.get_by_id(assert_some!(user.id))));
    assert_eq!(reloaded.email.as_deref(), Some("c@test.test"));
}

#[test]
fn delete_then_get_returns_none() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let mut user = User::new("doomed");
    assert_ok!(users.insert(&mut user));
    let id = assert_some!(user.id);

    assert_eq!(assert_ok!(users.delete(&user)), 1);
    assert_none!(assert_ok!(users.get_by_id(id)));

    // Deleting again matches nothing
    assert_eq!(assert_ok!(users.delete(&user)), 0);
}

#[test]
fn unknown_id_is_not_an_error() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    assert_none!(assert_ok!(users.get_by_id(999999)));
}

#[test]
fn get_all_grows_with_inserts() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    assert!(assert_ok!(users.get_all()).is_empty());

    let mut previous = 0;
    for login in ["one", "two", "three"] {
        assert_ok!(users.insert(&mut User::new(login)));

        let all = assert_ok!(users.get_all());
        assert!(all.len() > previous);
        previous = all.len();
    }

    let logins = assert_ok!(users.get_all())
        .into_iter()
        .map(|user| user.login)
        .collect::<Vec<_>>();
    assert_eq!(logins, ["one", "two", "three"]);
}

#[test]
fn generated_ids_are_distinct() {
    let setup = Setup::new();
    let cities = setup.mapper::<City, i64>("City");

    let mut minsk = City::new("Minsk");
    let mut vilnius = City::new("Vilnius");
    assert_ok!(cities.insert(&mut minsk));
    assert_ok!(cities.insert(&mut vilnius));

    assert_ne!(minsk.id, vilnius.id);
    assert_eq!(
        assert_ok!(cities.get_by_id(assert_some!(vilnius.id))),
        Some(vilnius)
    );
}

#[test]
fn explicit_identity_is_kept() {
    let setup = Setup::new();
    let cities = setup.mapper::<City, i64>("City");

    let mut city = City {
        id: Some(42),
        name: "Answer".to_string(),
    };
    assert_eq!(assert_ok!(cities.insert(&mut city)), 1);
    assert_eq!(city.id, Some(42));

    assert_eq!(assert_ok!(cities.get_by_id(42)), Some(city));
}
