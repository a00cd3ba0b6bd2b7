use schemars::schema_for;
use toolbox_catalog::Catalog;

fn main() {
    let schema = schema_for!(Catalog);
    println!("{}", serde_json::to_string_pretty(&schema).unwrap());
}
