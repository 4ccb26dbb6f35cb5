use rs2_lazy::prelude::*;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
struct Person {
    name: String,
    surname: String,
    age: u32,
}

rs2_lazy::projection! {
    struct FullName from Person {
        name: String,
        surname: String,
    }
}

fn person(name: &str, surname: &str, age: u32) -> Person {
    Person {
        name: name.to_string(),
        surname: surname.to_string(),
        age,
    }
}

fn main() -> Result<(), StreamError> {
    env_logger::init();

    let people = from_array(vec![
        person("Ada", "Lovelace", 36),
        person("Alan", "Turing", 41),
        person("Grace", "Hopper", 85),
        person("Edsger", "Dijkstra", 72),
        person("Barbara", "Liskov", 84),
        person("Donald", "Knuth", 86),
        person("Margaret", "Hamilton", 88),
    ]);

    // Field names checked by the compiler
    for name in people.clone().select::<FullName>().iter() {
        println!("{} {}", name.name, name.surname);
    }

    // Field names checked as each record is pulled
    let records = people.clone().select_fields(["name", "surname"]).try_to_array()?;
    println!("{}", serde_json::to_string_pretty(&records).unwrap_or_default());

    let over_eighty = people.filter(|p| p.age > 80).map(|p| p.surname).to_array();
    println!("Over eighty: {:?}", over_eighty);

    let missing = from_array(vec![person("Ken", "Thompson", 81)])
        .select_fields(["name", "email"])
        .try_to_array();
    println!("Missing field: {:?}", missing);

    Ok(())
}
