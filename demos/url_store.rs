/// `UrlStore` usage example
use urlstate::{
    QueryMap, QueryRecord, QuerySchema, UrlSearchParams, UrlStore, ValidationError, coerce,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Filters {
    search: Option<String>,
    page: Option<u32>,
    tags: Option<Vec<String>>,
}

struct FiltersSchema;

impl QuerySchema for FiltersSchema {
    type Output = Filters;

    fn safe_parse(&self, raw: &QueryMap) -> Result<Filters, ValidationError> {
        let page = coerce::number(raw, "page").map_err(ValidationError::from)?;
        Ok(Filters {
            search: coerce::string(raw, "search"),
            page,
            tags: coerce::string_list(raw, "tags"),
        })
    }
}

impl QueryRecord for Filters {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(search) = &self.search {
            pairs.push(("search".to_string(), search.clone()));
        }
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(tags) = &self.tags {
            pairs.push(("tags".to_string(), coerce::join_list(tags)));
        }
        pairs
    }
}

fn main() {
    // Bind a query string to a typed, observable value
    let params = UrlSearchParams::parse("search=rust&page=1&tags=web%2Curl");
    let store = UrlStore::new(&params, FiltersSchema);

    // Observers get the current value immediately, then every change
    let _sub = store.subscribe(|filters| println!("filters: {filters:?}"));
    let _url_sub = store.url().subscribe(|url| println!("url:     ?{url}"));

    // Single-field updates re-derive both the value and the url
    store.set_query("page", 2);

    // Removing a key drops it from the serialized form
    store.remove_by_key("tags");

    // A field set to None disappears from the url as well
    store.update(|state| Filters {
        search: None,
        ..state.clone()
    });

    println!("final:   ?{}", store.url().get());
}
