//! Exercise the tag registry through the HTTP boundary functions
//!
//! Mirrors the request sequence the admin UI sends: list, create, update,
//! delete, and the error paths.

use recipebook::api::{delete_tag, get_tags, post_tag};
use recipebook::{dataset, TagRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let mut registry = TagRegistry::seeded(dataset::recipes());

    println!("GET /api/tags");
    let response = get_tags(&registry);
    println!("  {} {}", response.status, response.body);

    println!("POST /api/tags {{\"name\":\"Brunch\",\"count\":2}}");
    let response = post_tag(&mut registry, r#"{"name":"Brunch","count":2}"#);
    println!("  {} {}", response.status, response.body);

    println!("POST /api/tags {{\"name\":\"brunch\",\"count\":0}} (count kept)");
    let response = post_tag(&mut registry, r#"{"name":"brunch","count":0}"#);
    println!("  {} {}", response.status, response.body);

    println!("DELETE /api/tags?name=brunch");
    let response = delete_tag(&mut registry, Some("brunch"));
    println!("  {} {}", response.status, response.body);

    println!("DELETE /api/tags?name=brunch (again)");
    let response = delete_tag(&mut registry, Some("brunch"));
    println!("  {} {}", response.status, response.body);

    Ok(())
}
