use pretty_assertions::assert_eq;
use stardao::stmt::{Assignment, Delete, Filter, Insert, Select, Statement, Update};
use tests::prelude::*;

#[test]
fn one_template_serves_every_entity() {
    let mut setup = Setup::new();
    let cities = setup.mapper::<City, i64>("City");
    let users = setup.mapper::<User, i64>("User");

    let mut city = City::new("Minsk");
    assert_ok!(cities.insert(&mut city));
    assert_ok!(users.insert(&mut User::new("login2")));

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Insert(Insert {
            table: "CITIES".to_string(),
            columns: vec!["NAME".to_string()],
            values: vec![Value::from("Minsk")],
            returning: vec!["ID".to_string()],
        })
    );

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Insert(Insert {
            table: "USERS".to_string(),
            columns: vec![
                "LOGIN".to_string(),
                "EMAIL".to_string(),
                "CITY_ID".to_string()
            ],
            values: vec![
                Value::from("login2"),
                Value::from("login2@test.test"),
                Value::Null,
            ],
            returning: vec!["ID".to_string()],
        })
    );

    assert!(setup.log().is_empty());
}

#[test]
fn keyed_operations_filter_on_identity() {
    let mut setup = Setup::new();
    let cities = setup.mapper::<City, i64>("City");

    let mut city = City::new("Minsk");
    assert_ok!(cities.insert(&mut city));
    let id = assert_some!(city.id);
    setup.log().clear();

    city.name = "Hrodna".to_string();
    assert_ok!(cities.update(&city));
    assert_ok!(cities.get_by_id(id));
    assert_ok!(cities.delete(&city));
    assert_ok!(cities.get_all());

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Update(Update {
            table: "CITIES".to_string(),
            assignments: vec![Assignment {
                column: "NAME".to_string(),
                value: Value::from("Hrodna"),
            }],
            filter: Filter::default().eq("ID", id),
        })
    );

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Query(Select {
            table: "CITIES".to_string(),
            columns: vec!["ID".to_string(), "NAME".to_string()],
            filter: Filter::default().eq("ID", id),
        })
    );

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Delete(Delete {
            table: "CITIES".to_string(),
            filter: Filter::default().eq("ID", id),
        })
    );

    assert_eq!(
        setup.log().pop_statement(),
        Statement::Query(Select {
            table: "CITIES".to_string(),
            columns: vec!["ID".to_string(), "NAME".to_string()],
            filter: Filter::default(),
        })
    );

    assert!(setup.log().is_empty());
}

#[test]
fn insert_response_carries_generated_identity() {
    let mut setup = Setup::new();
    let cities = setup.mapper::<City, i64>("City");

    let mut city = City::new("Minsk");
    assert_ok!(cities.insert(&mut city));

    let (_, response) = assert_some!(setup.log().pop());
    let rows = assert_ok!(assert_ok!(response).rows.into_values());
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0][0], Value::I64(assert_some!(city.id)));
}
