use stardao::{Config, Engine, Entity, GenericMapper, Mappings, Result};

#[derive(Debug, Default, Clone, Entity)]
struct City {
    id: Option<i64>,
    name: String,
}

#[derive(Debug, Default, Entity)]
struct User {
    id: Option<i64>,
    login: String,
    email: Option<String>,
    #[association]
    city: Option<City>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // Point `STARDAO_CONFIG` at a JSON file to use another database.
    let config = match std::env::var("STARDAO_CONFIG") {
        Ok(path) => Config::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => Config::default(),
    };

    let engine = Engine::builder()
        .mappings(Mappings::from_json(include_str!("../mappings.json"))?)
        .config(config)
        .open()?;

    engine.execute_script(include_str!("../schema.sql"))?;
    tracing::info!(url = %engine.driver().url(), "schema ready");

    let cities = GenericMapper::<City, i64>::new(&engine, "City")?;
    let users = GenericMapper::<User, i64>::new(&engine, "User")?;

    println!("==> cities.insert(Minsk)");
    let mut minsk = City {
        name: "Minsk".to_string(),
        ..Default::default()
    };
    cities.insert(&mut minsk)?;

    println!("==> users.insert(login2)");
    let mut user = User {
        login: "login2".to_string(),
        email: Some("login2@test.test".to_string()),
        city: Some(minsk),
        ..Default::default()
    };
    let inserted = users.insert(&mut user)?;
    println!("inserted {inserted} row(s); id = {:?}", user.id);

    println!("==> users.update(UPD:login2)");
    user.login = format!("UPD:{}", user.login);
    let updated = users.update(&user)?;
    println!("updated {updated} row(s)");

    if let Some(id) = user.id {
        println!("==> users.get_by_id({id})");
        let reloaded = users.get_by_id(id)?;
        println!("USER = {reloaded:#?}");
    }

    println!("==> users.get_all()");
    for user in users.get_all()? {
        println!("{user:?}");
    }

    println!("==> users.get_by_id(999999)");
    println!("USER = {:?}", users.get_by_id(999999)?);

    println!("==> users.delete(..)");
    let deleted = users.delete(&user)?;
    println!("deleted {deleted} row(s)");

    Ok(())
}
