use pretty_assertions::assert_eq;
use tests::prelude::*;

#[test]
fn unset_identity_affects_no_rows_by_default() {
    let mut setup = Setup::new();
    assert_eq!(setup.engine.identity_policy(), IdentityPolicy::AffectNone);

    let users = setup.mapper::<User, i64>("User");
    assert_ok!(users.insert(&mut User::new("existing")));
    setup.log().clear();

    let detached = User::new("detached");
    assert_eq!(assert_ok!(users.update(&detached)), 0);
    assert_eq!(assert_ok!(users.delete(&detached)), 0);

    // Both statements reached the store
    assert_eq!(setup.log().len(), 2);
    assert_eq!(assert_ok!(users.get_all()).len(), 1);
}

#[test]
fn reject_policy_fails_before_the_store() {
    let mut setup = Setup::configure(|builder| {
        builder.identity_policy(IdentityPolicy::Reject);
    });
    let users = setup.mapper::<User, i64>("User");
    setup.log().clear();

    let detached = User::new("detached");

    let err = assert_err!(users.update(&detached));
    assert!(err.is_missing_identity());
    assert_eq!(
        err.to_string(),
        "missing identity: mapping `User` has no value for identity property `id`"
    );

    assert!(assert_err!(users.delete(&detached)).is_missing_identity());
    assert!(setup.log().is_empty());
}

#[test]
fn reject_policy_allows_keyed_writes() {
    let setup = Setup::configure(|builder| {
        builder.identity_policy(IdentityPolicy::Reject);
    });
    let users = setup.mapper::<User, i64>("User");

    let mut user = User::new("keyed");
    assert_ok!(users.insert(&mut user));

    user.login = "rekeyed".to_string();
    assert_eq!(assert_ok!(users.update(&user)), 1);
    assert_eq!(assert_ok!(users.delete(&user)), 1);
}

#[test]
fn composite_identity_round_trip() {
    let setup = Setup::new();
    let memberships = setup.mapper::<Membership, (i64, i64)>("Membership");

    let mut membership = Membership {
        user_id: Some(1),
        group_id: Some(2),
        role: "member".to_string(),
    };
    assert_eq!(assert_ok!(memberships.insert(&mut membership)), 1);

    assert_ok!(memberships.insert(&mut Membership {
        user_id: Some(1),
        group_id: Some(3),
        role: "owner".to_string(),
    }));

    let found = assert_some!(assert_ok!(memberships.get_by_id((1, 2))));
    assert_eq!(found, membership);

    membership.role = "admin".to_string();
    assert_eq!(assert_ok!(memberships.update(&membership)), 1);
    assert_eq!(
        assert_some!(assert_ok!(memberships.get_by_id((1, 2)))).role,
        "admin"
    );

    assert_eq!(assert_ok!(memberships.delete(&membership)), 1);
    assert_none!(assert_ok!(memberships.get_by_id((1, 2))));
    assert_eq!(assert_ok!(memberships.get_all()).len(), 1);
}

#[test]
fn composite_key_arity_is_checked() {
    let setup = Setup::new();
    let memberships = setup.mapper::<Membership, i64>("Membership");

    let err = assert_err!(memberships.get_by_id(1));
    assert!(err.is_invalid_configuration());
}

#[test]
fn partially_unset_composite_identity_is_rejected() {
    let setup = Setup::configure(|builder| {
        builder.identity_policy(IdentityPolicy::Reject);
    });
    let memberships = setup.mapper::<Membership, (i64, i64)>("Membership");

    let partial = Membership {
        user_id: Some(1),
        group_id: None,
        role: "member".to_string(),
    };

    let err = assert_err!(memberships.delete(&partial));
    assert_eq!(
        err.to_string(),
        "missing identity: mapping `Membership` has no value for identity property `group_id`"
    );
}
