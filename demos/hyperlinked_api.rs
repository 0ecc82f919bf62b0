//! Minimal example: hypermedia links on a serialized author

use hyperfield::prelude::*;
use std::sync::Arc;

#[derive(Debug, Serialize)]
struct Author {
    id: u64,
    name: String,
}

fn main() -> anyhow::Result<()> {
    let config = RoutesConfig::from_yaml_str(
        r#"
        base_url: https://api.example.com
        routes:
          - name: author
            path: /authors/{id}
          - name: authors
            path: /authors/
        "#,
    )?;
    let ext = Hypermedia::with_registry(Arc::new(config.build_registry()));

    let links = Hyperlinks::new(links! {
        "self" => UrlFor::new("author").param("id", "<id>"),
        "collection" => UrlFor::new("authors"),
    });
    let absolute_url = UrlFor::absolute("author").param("id", "<id>");

    let author = Author {
        id: 123,
        name: "Fred Douglass".to_string(),
    };

    let mut document = serde_json::to_value(&author)?;
    document["links"] = ext.render(&links, "links", &author)?;
    document["absolute_url"] = ext.render(&absolute_url, "absolute_url", &author)?;

    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
