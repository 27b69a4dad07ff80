use stardao::Engine;
use tests::prelude::*;

fn assert_sync_send<T: Send + Sync>() {}

#[test]
fn shared_types_are_sync_send() {
    assert_sync_send::<Engine>();
    assert_sync_send::<GenericMapper<User, i64>>();
    assert_sync_send::<GenericMapper<Membership, (i64, i64)>>();
    assert_sync_send::<Error>();
}

#[test]
fn mapper_is_usable_across_threads() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    std::thread::scope(|scope| {
        for n in 0..4 {
            let users = &users;
            scope.spawn(move || {
                assert_ok!(users.insert(&mut User::new(&format!("thread{n}"))));
            });
        }
    });

    assert_eq!(assert_ok!(users.get_all()).len(), 4);
}
