/// `TypedParams` usage example
use urlstate::{
    QueryMap, QueryRecord, QuerySchema, TypedParams, UrlSearchParams, ValidationError, coerce,
};

#[derive(Debug, Clone, Default, PartialEq)]
struct Paging {
    page: Option<u32>,
    per_page: Option<u32>,
}

struct PagingSchema;

impl QuerySchema for PagingSchema {
    type Output = Paging;

    fn safe_parse(&self, raw: &QueryMap) -> Result<Paging, ValidationError> {
        let page = coerce::number(raw, "page").map_err(ValidationError::from)?;
        let per_page = coerce::number(raw, "per_page").map_err(ValidationError::from)?;
        Ok(Paging { page, per_page })
    }
}

impl QueryRecord for Paging {
    fn query_pairs(&self) -> Vec<(String, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page".to_string(), page.to_string()));
        }
        if let Some(per_page) = self.per_page {
            pairs.push(("per_page".to_string(), per_page.to_string()));
        }
        pairs
    }
}

fn main() {
    let mut typed = TypedParams::new(&UrlSearchParams::parse("page=1&per_page=20"), PagingSchema);
    println!("data: {:?}", typed.data()); // Paging { page: Some(1), per_page: Some(20) }

    // Chained single-field updates
    typed.set_query("page", 2).set_query("per_page", 50);
    println!("data: {:?}", typed.data());
    println!("query: {typed}"); // page=2&per_page=50

    // Invalid input is reported, not raised; data stays put
    typed.set_query("page", "last");
    println!("after bad input: {typed}");
}
