use pretty_assertions::assert_eq;
use stardao::{
    engine::GenericStatement,
    mapping::{Namespace, ResultMap},
    Engine, Mappings,
};
use stardao_driver_sqlite::Sqlite;
use tests::prelude::*;

#[derive(Debug, Default)]
struct Ghost;

impl Entity for Ghost {
    fn properties() -> &'static [&'static str] {
        &["id"]
    }

    fn get(&self, property: &str) -> Result<Value> {
        Err(stardao::unknown_property("Ghost", property))
    }

    fn set(&mut self, property: &str, _value: Value) -> Result<()> {
        Err(stardao::unknown_property("Ghost", property))
    }
}

#[test]
fn unknown_mapping_fails_construction() {
    let setup = Setup::new();

    let err = assert_err!(GenericMapper::<User, i64>::new(&setup.engine, "Nope"));
    assert!(err.is_invalid_configuration());
    assert_eq!(err.to_string(), "invalid configuration: no mapping named `Nope`");
}

#[test]
fn unknown_result_map_fails_construction() {
    let setup = Setup::new();

    let err = assert_err!(GenericMapper::<User, i64>::with_result_map(
        &setup.engine,
        "User",
        "Detailed"
    ));
    assert_eq!(
        err.to_string(),
        "invalid configuration: no result map named `User.Detailed`"
    );
}

#[test]
fn missing_table_name_fails_construction() {
    let setup = Setup::configure(|builder| {
        builder.mapping(Namespace::new("Ghost").result_map(ResultMap::new("Ghost").id("id", "ID")));
    });

    let err = assert_err!(GenericMapper::<Ghost, i64>::new(&setup.engine, "Ghost"));
    assert_eq!(
        err.to_string(),
        "invalid configuration: mapping `Ghost` has no `tableName` fragment"
    );
}

#[test]
fn undeclared_property_fails_construction() {
    let setup = Setup::new();

    // `User.User` maps four properties; `City` declares only two of them.
    let err = assert_err!(GenericMapper::<City, i64>::new(&setup.engine, "User"));
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("maps property `login`"));
}

#[test]
fn custom_result_map_reads_a_subset() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let mut user = User::new("partial");
    assert_ok!(users.insert(&mut user));

    let summaries = assert_ok!(GenericMapper::<User, i64>::with_result_map(
        &setup.engine,
        "User",
        "Summary"
    ));
    assert_eq!(summaries.descriptor().columns.len(), 2);

    let summary = assert_some!(assert_ok!(summaries.get_by_id(assert_some!(user.id))));
    assert_eq!(summary.login, "partial");
    assert_none!(summary.email);
}

#[test]
fn resolution_happens_once() {
    let setup = Setup::new();
    let users = setup.mapper::<User, i64>("User");

    let descriptor = users.descriptor().clone();
    for login in ["a", "b"] {
        assert_ok!(users.insert(&mut User::new(login)));
    }

    assert_eq!(users.descriptor(), &descriptor);
    assert_eq!(descriptor.mapping_name, "User");
    assert_eq!(descriptor.table_name, "USERS");
}

#[test]
fn engine_resolves_metadata() {
    let setup = Setup::new();

    let columns = assert_ok!(setup.engine.resolve_result_map("City", "City"));
    let properties = columns
        .iter()
        .map(|column| column.property.as_str())
        .collect::<Vec<_>>();
    assert_eq!(properties, ["id", "name"]);

    assert_eq!(
        assert_ok!(setup.engine.resolve_table_name_fragment("City")),
        "CITIES"
    );
}

#[test]
fn duplicate_mapping_fails_build() {
    let mut builder = Engine::builder();
    builder.mappings(tests::models::mappings());
    builder.mapping(Namespace::new("City").table_name("TOWNS"));

    let err = assert_err!(builder.build(Sqlite::in_memory()));
    assert_eq!(
        err.to_string(),
        "invalid configuration: mapping `City` is defined more than once"
    );
}

#[test]
fn dangling_association_fails_build() {
    let mappings = assert_ok!(Mappings::from_json(
        r#"[{
            "namespace": "User",
            "fragments": { "tableName": "USERS" },
            "resultMaps": [{
                "id": "User",
                "mappings": [
                    { "property": "id", "column": "ID", "identity": true },
                    { "property": "city", "column": "CITY_ID", "association": "City" }
                ]
            }]
        }]"#
    ));

    let err = assert_err!(Engine::builder().mappings(mappings).build(Sqlite::in_memory()));
    assert!(err.is_invalid_configuration());
    assert!(err.to_string().contains("no mapping named `City`"));
}

#[test]
fn malformed_definitions_are_rejected() {
    let err = assert_err!(Mappings::from_json(r#"[{ "namespace": "User", "tables": [] }]"#));
    assert!(err.is_invalid_configuration());
}

#[test]
fn statement_templates_can_be_added() {
    let setup = Setup::configure(|builder| {
        builder.statement("everyCity", GenericStatement::SelectAll);
    });
    let cities = setup.mapper::<City, i64>("City");

    assert_ok!(cities.insert(&mut City::new("Tallinn")));
    assert_ok!(cities.insert(&mut City::new("Tartu")));

    let wrapper = stardao::EntityWrapper::empty(cities.descriptor());
    let all: Vec<City> = assert_ok!(setup.engine.select_list("City", "everyCity", &wrapper));
    assert_eq!(all.len(), 2);
}

#[test]
fn select_templates_must_match_their_use() {
    let setup = Setup::configure(|builder| {
        builder
            .statement("selectAll", GenericStatement::SelectById)
            .statement("selectById", GenericStatement::SelectAll);
    });
    let cities = setup.mapper::<City, i64>("City");

    let mut city = City::new("Tallinn");
    assert_ok!(cities.insert(&mut city));

    let err = assert_err!(cities.get_all());
    assert_eq!(
        err.to_string(),
        "invalid configuration: statement `selectAll` is not a select of every row"
    );

    let err = assert_err!(cities.get_by_id(city.id.unwrap()));
    assert_eq!(
        err.to_string(),
        "invalid configuration: statement `selectById` is not a select by identity"
    );
}

#[test]
fn statement_of_the_wrong_kind_is_rejected() {
    let setup = Setup::configure(|builder| {
        builder.statement("delete", GenericStatement::SelectAll);
    });
    let cities = setup.mapper::<City, i64>("City");

    let mut city = City::new("Tallinn");
    assert_ok!(cities.insert(&mut city));

    let err = assert_err!(cities.delete(&city));
    assert_eq!(
        err.to_string(),
        "invalid configuration: statement `delete` is not a delete"
    );
}
